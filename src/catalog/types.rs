use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Unit system a conversion run targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SystemType {
    /// International system
    Si,
    /// Atomic units
    Au,
}

impl SystemType {
    pub const ALL: [SystemType; 2] = [SystemType::Si, SystemType::Au];

    pub fn name(&self) -> &'static str {
        match self {
            SystemType::Si => "SI",
            SystemType::Au => "AU",
        }
    }

    /// Case-insensitive lookup by canonical name
    pub fn from_name(s: &str) -> Option<Self> {
        let canon = s.trim().to_uppercase();
        Self::ALL.iter().find(|sys| sys.name() == canon).copied()
    }
}

impl fmt::Display for SystemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub struct UnknownSystemError(pub String);

impl fmt::Display for UnknownSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown target system '{}'; allowed values are: SI, AU",
            self.0
        )
    }
}

impl std::error::Error for UnknownSystemError {}

impl FromStr for SystemType {
    type Err = UnknownSystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SystemType::from_name(s).ok_or_else(|| UnknownSystemError(s.to_string()))
    }
}

/// Category of physical quantity. Each kind carries its own unit list in the
/// catalog; the pure and ignore kinds are pseudo-kinds that steer document
/// processing instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum QuantityKind {
    Mass,
    Length,
    Charge,
    Energy,
    Time,
    Frequency,
    AngularFrequency,
    Speed,
    Force,
    ElectricField,
    ElectricPotential,
    Momentum,
    MagneticField,
    Angle,
    Percentage,
    PureFloat,
    PureInt,
    Ignore,
    IgnoreRegionStart,
    IgnoreRegionEnd,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 20] = [
        QuantityKind::Mass,
        QuantityKind::Length,
        QuantityKind::Charge,
        QuantityKind::Energy,
        QuantityKind::Time,
        QuantityKind::Frequency,
        QuantityKind::AngularFrequency,
        QuantityKind::Speed,
        QuantityKind::Force,
        QuantityKind::ElectricField,
        QuantityKind::ElectricPotential,
        QuantityKind::Momentum,
        QuantityKind::MagneticField,
        QuantityKind::Angle,
        QuantityKind::Percentage,
        QuantityKind::PureFloat,
        QuantityKind::PureInt,
        QuantityKind::Ignore,
        QuantityKind::IgnoreRegionStart,
        QuantityKind::IgnoreRegionEnd,
    ];

    /// Canonical name as written in catalog records and directive comments
    pub fn name(&self) -> &'static str {
        match self {
            QuantityKind::Mass => "MASS",
            QuantityKind::Length => "LENGTH",
            QuantityKind::Charge => "CHARGE",
            QuantityKind::Energy => "ENERGY",
            QuantityKind::Time => "TIME",
            QuantityKind::Frequency => "FREQUENCY",
            QuantityKind::AngularFrequency => "ANGULAR_FREQUENCY",
            QuantityKind::Speed => "SPEED",
            QuantityKind::Force => "FORCE",
            QuantityKind::ElectricField => "ELECTRIC_FIELD",
            QuantityKind::ElectricPotential => "ELECTRIC_POTENTIAL",
            QuantityKind::Momentum => "MOMENTUM",
            QuantityKind::MagneticField => "MAGNETIC_FIELD",
            QuantityKind::Angle => "ANGLE",
            QuantityKind::Percentage => "PERCENTAGE",
            QuantityKind::PureFloat => "PURE_FLOAT",
            QuantityKind::PureInt => "PURE_INT",
            QuantityKind::Ignore => "IGNORE",
            QuantityKind::IgnoreRegionStart => "IGNORE_START",
            QuantityKind::IgnoreRegionEnd => "IGNORE_END",
        }
    }

    /// Case-insensitive lookup; internal whitespace collapses to underscores
    /// so a directive may read `[pure float]` as well as `[PURE_FLOAT]`.
    pub fn from_name(s: &str) -> Option<Self> {
        let canon = s
            .trim()
            .to_uppercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");
        Self::ALL.iter().find(|k| k.name() == canon).copied()
    }

    /// Kinds that take part in unit conversion; the pure and ignore
    /// pseudo-kinds are excluded.
    pub fn is_convertible(&self) -> bool {
        !matches!(
            self,
            QuantityKind::PureFloat
                | QuantityKind::PureInt
                | QuantityKind::Ignore
                | QuantityKind::IgnoreRegionStart
                | QuantityKind::IgnoreRegionEnd
        )
    }

    /// Listing of all kind names, for error diagnostics
    pub fn possible_names() -> String {
        Self::ALL
            .iter()
            .map(|k| k.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_from_name() {
        assert_eq!(SystemType::from_name("SI"), Some(SystemType::Si));
        assert_eq!(SystemType::from_name("au"), Some(SystemType::Au));
        assert_eq!(SystemType::from_name(" Si "), Some(SystemType::Si));
        assert_eq!(SystemType::from_name("imperial"), None);
    }

    #[test]
    fn test_system_from_str_error() {
        let err = "metric".parse::<SystemType>().unwrap_err();
        assert!(err.to_string().contains("metric"));
        assert!(err.to_string().contains("SI, AU"));
    }

    #[test]
    fn test_kind_from_name_case_insensitive() {
        assert_eq!(QuantityKind::from_name("length"), Some(QuantityKind::Length));
        assert_eq!(QuantityKind::from_name("LENGTH"), Some(QuantityKind::Length));
        assert_eq!(
            QuantityKind::from_name("angular_frequency"),
            Some(QuantityKind::AngularFrequency)
        );
    }

    #[test]
    fn test_kind_from_name_spaces_become_underscores() {
        assert_eq!(
            QuantityKind::from_name("pure float"),
            Some(QuantityKind::PureFloat)
        );
        assert_eq!(
            QuantityKind::from_name("  electric  field "),
            Some(QuantityKind::ElectricField)
        );
        assert_eq!(
            QuantityKind::from_name("ignore start"),
            Some(QuantityKind::IgnoreRegionStart)
        );
    }

    #[test]
    fn test_kind_from_name_unknown() {
        assert_eq!(QuantityKind::from_name("TEMPERATURE"), None);
        assert_eq!(QuantityKind::from_name(""), None);
    }

    #[test]
    fn test_kind_name_round_trip() {
        for kind in QuantityKind::ALL {
            assert_eq!(QuantityKind::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn test_convertible_kinds() {
        assert!(QuantityKind::Length.is_convertible());
        assert!(QuantityKind::MagneticField.is_convertible());
        assert!(!QuantityKind::PureInt.is_convertible());
        assert!(!QuantityKind::PureFloat.is_convertible());
        assert!(!QuantityKind::Ignore.is_convertible());
        assert!(!QuantityKind::IgnoreRegionStart.is_convertible());
        assert!(!QuantityKind::IgnoreRegionEnd.is_convertible());
    }
}
