use serde::Serialize;
use std::fmt;

/// A metric prefix: a power-of-ten multiplier applied in front of a unit symbol
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prefix {
    pub name: &'static str,
    pub symbol: &'static str,
    /// Exponent of 10
    pub power: i32,
}

/// The metric prefixes, yotta through yocto.
/// Symbols are unique; lookup does not depend on the order.
pub const METRIC_PREFIXES: [Prefix; 17] = [
    Prefix { name: "yotta", symbol: "Y", power: 24 },
    Prefix { name: "zetta", symbol: "Z", power: 21 },
    Prefix { name: "exa", symbol: "E", power: 18 },
    Prefix { name: "peta", symbol: "P", power: 15 },
    Prefix { name: "tera", symbol: "T", power: 12 },
    Prefix { name: "giga", symbol: "G", power: 9 },
    Prefix { name: "mega", symbol: "M", power: 6 },
    Prefix { name: "kilo", symbol: "k", power: 3 },
    Prefix { name: "centi", symbol: "c", power: -2 },
    Prefix { name: "milli", symbol: "m", power: -3 },
    Prefix { name: "micro", symbol: "μ", power: -6 },
    Prefix { name: "nano", symbol: "n", power: -9 },
    Prefix { name: "pico", symbol: "p", power: -12 },
    Prefix { name: "femto", symbol: "f", power: -15 },
    Prefix { name: "atto", symbol: "a", power: -18 },
    Prefix { name: "zepto", symbol: "z", power: -21 },
    Prefix { name: "yocto", symbol: "y", power: -24 },
];

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) 10^{}", self.symbol, self.name, self.power)
    }
}

/// Listing of all prefixes, for error diagnostics
pub fn possible_prefixes() -> String {
    METRIC_PREFIXES
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
