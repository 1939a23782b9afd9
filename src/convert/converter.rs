use crate::catalog::{Prefix, QuantityKind, SystemType, Unit, UnitCatalog, METRIC_PREFIXES};
use crate::convert::error::ConvertError;
use crate::convert::resolver::{self, ResolveError};

/// A single `key = number [unit]` assignment pulled out of one input line
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedAssignment {
    pub key: String,
    /// Numeric literal exactly as written
    pub value_text: String,
    /// Compound prefix+unit token; empty when the value carries no unit
    pub unit_token: String,
}

/// Converts parsed assignments into the target system, producing the audit
/// comment and the rewritten assignment line for each.
pub struct Converter<'a> {
    catalog: &'a UnitCatalog,
    prefixes: &'a [Prefix],
    target: SystemType,
    file: &'a str,
}

impl<'a> Converter<'a> {
    pub fn new(catalog: &'a UnitCatalog, target: SystemType, file: &'a str) -> Self {
        Self {
            catalog,
            prefixes: &METRIC_PREFIXES,
            target,
            file,
        }
    }

    /// Convert one assignment under the given quantity kind. Returns the
    /// output lines: an audit comment (when a conversion happened) followed
    /// by the rewritten assignment.
    pub fn convert_assignment(
        &self,
        kind: QuantityKind,
        asg: &ParsedAssignment,
        line: usize,
    ) -> Result<Vec<String>, ConvertError> {
        match kind {
            QuantityKind::PureInt if asg.unit_token.is_empty() => {
                let value = self.parse_int(&asg.value_text, line)?;
                Ok(vec![format!("{}\t\t = {}", asg.key, value)])
            }
            QuantityKind::PureFloat if asg.unit_token.is_empty() => {
                let value = self.parse_float(&asg.value_text, line)?;
                Ok(vec![format!("{}\t\t = {:.16E}", asg.key, value)])
            }
            QuantityKind::PureInt => self.scale_pure_int(asg, line),
            QuantityKind::PureFloat => self.scale_pure_float(asg, line),
            _ => self.convert_quantity(kind, asg, line),
        }
    }

    /// A pure number followed by a bare prefix token, e.g. `count = 5k`
    fn scale_pure_int(
        &self,
        asg: &ParsedAssignment,
        line: usize,
    ) -> Result<Vec<String>, ConvertError> {
        let prefix = self.bare_prefix(asg, line)?;
        let old = self.parse_int(&asg.value_text, line)?;

        // A negative power would not produce an integer; reject it, as well
        // as anything that overflows i64.
        let factor = if prefix.power >= 0 {
            10i64.checked_pow(prefix.power as u32)
        } else {
            None
        };
        let new = factor
            .and_then(|f| old.checked_mul(f))
            .ok_or_else(|| ConvertError::NonIntegerScale {
                file: self.file.to_string(),
                line,
                key: asg.key.clone(),
                value: old,
                prefix_symbol: prefix.symbol.to_string(),
                power: prefix.power,
            })?;

        Ok(vec![
            format!(
                "# converted integer from {} {} ({}) to {}",
                old, prefix.symbol, prefix.name, new
            ),
            format!("{}\t\t = {}", asg.key, new),
        ])
    }

    fn scale_pure_float(
        &self,
        asg: &ParsedAssignment,
        line: usize,
    ) -> Result<Vec<String>, ConvertError> {
        let prefix = self.bare_prefix(asg, line)?;
        let old = self.parse_float(&asg.value_text, line)?;
        let new = old * 10f64.powi(prefix.power);

        Ok(vec![
            format!(
                "# converted float from {:.6} {} ({}) to {:.16E}",
                old, prefix.symbol, prefix.name, new
            ),
            format!("{}\t\t = {:.16E}", asg.key, new),
        ])
    }

    fn convert_quantity(
        &self,
        kind: QuantityKind,
        asg: &ParsedAssignment,
        line: usize,
    ) -> Result<Vec<String>, ConvertError> {
        let units = self.catalog.units(kind);

        if asg.unit_token.is_empty() {
            return Err(ConvertError::MissingUnit {
                file: self.file.to_string(),
                line,
                kind,
                key: asg.key.clone(),
                expected: symbol_list(units),
            });
        }

        let (unit, prefix) =
            resolver::resolve(&asg.unit_token, units, self.prefixes).map_err(|e| match e {
                ResolveError::UnknownUnit => ConvertError::UnknownUnit {
                    file: self.file.to_string(),
                    line,
                    kind,
                    key: asg.key.clone(),
                    token: asg.unit_token.clone(),
                    expected: symbol_list(units),
                },
                ResolveError::UnknownPrefix { prefix_part } => ConvertError::UnknownPrefix {
                    file: self.file.to_string(),
                    line,
                    key: asg.key.clone(),
                    token: prefix_part,
                },
            })?;

        let target_unit = self.catalog.target_unit(kind, self.target).ok_or_else(|| {
            ConvertError::NoTargetUnit {
                file: self.file.to_string(),
                line: Some(line),
                system: self.target,
                kind,
            }
        })?;

        let old = self.parse_float(&asg.value_text, line)?;

        // Prefix and unit scale are both pure multiplications, so applying
        // the prefix to the already-SI-normalized value is equivalent to
        // applying it to the literal first.
        let mut si_value = old * unit.si_scale;
        if let Some(p) = prefix {
            si_value *= 10f64.powi(p.power);
        }
        let new = si_value / target_unit.si_scale;

        let (prefix_symbol, prefix_name) = match prefix {
            Some(p) => (p.symbol, p.name),
            None => ("", ""),
        };

        Ok(vec![
            format!(
                "# converted {} from {:.6} {}{} ({}{}) to {:.16E} {}",
                kind.name().to_lowercase(),
                old,
                prefix_symbol,
                unit.symbol,
                prefix_name,
                unit.display_name,
                new,
                target_unit.symbol
            ),
            format!("{}\t\t = {:.16E}", asg.key, new),
        ])
    }

    fn bare_prefix(
        &self,
        asg: &ParsedAssignment,
        line: usize,
    ) -> Result<&'a Prefix, ConvertError> {
        self.prefixes
            .iter()
            .find(|p| p.symbol == asg.unit_token)
            .ok_or_else(|| ConvertError::UnknownPrefix {
                file: self.file.to_string(),
                line,
                key: asg.key.clone(),
                token: asg.unit_token.clone(),
            })
    }

    fn parse_int(&self, text: &str, line: usize) -> Result<i64, ConvertError> {
        text.parse().map_err(|_| ConvertError::InvalidNumber {
            file: self.file.to_string(),
            line,
            expected: "integer",
            value: text.to_string(),
        })
    }

    fn parse_float(&self, text: &str, line: usize) -> Result<f64, ConvertError> {
        text.parse().map_err(|_| ConvertError::InvalidNumber {
            file: self.file.to_string(),
            line,
            expected: "float",
            value: text.to_string(),
        })
    }
}

fn symbol_list(units: &[Unit]) -> String {
    units
        .iter()
        .map(|u| format!("{} ({})", u.symbol, u.display_name))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::UnitCatalog;

    fn asg(key: &str, value: &str, unit: &str) -> ParsedAssignment {
        ParsedAssignment {
            key: key.to_string(),
            value_text: value.to_string(),
            unit_token: unit.to_string(),
        }
    }

    /// Extract the numeric value from a rewritten `key\t\t = value` line
    fn emitted_value(line: &str) -> f64 {
        line.split('=')
            .nth(1)
            .expect("assignment line should contain '='")
            .trim()
            .parse()
            .expect("emitted value should parse as a float")
    }

    fn length_catalog() -> UnitCatalog {
        UnitCatalog::load_from_str(
            "LENGTH, m, 1.0, meter, SI\n\
             LENGTH, AU_BOHR, 5.29177e-11, bohr_radius, AU\n",
            "test.csv",
        )
        .unwrap()
    }

    #[test]
    fn test_pure_int_passthrough() {
        let catalog = UnitCatalog::load_from_str("", "test.csv").unwrap();
        let converter = Converter::new(&catalog, SystemType::Si, "in.cfg");
        let lines = converter
            .convert_assignment(QuantityKind::PureInt, &asg("n", "42", ""), 1)
            .unwrap();
        assert_eq!(lines, vec!["n\t\t = 42".to_string()]);
    }

    #[test]
    fn test_pure_int_invalid() {
        let catalog = UnitCatalog::load_from_str("", "test.csv").unwrap();
        let converter = Converter::new(&catalog, SystemType::Si, "in.cfg");
        let err = converter
            .convert_assignment(QuantityKind::PureInt, &asg("n", "4.5", ""), 3)
            .unwrap_err();
        assert!(matches!(
            err,
            ConvertError::InvalidNumber {
                line: 3,
                expected: "integer",
                ..
            }
        ));
    }

    #[test]
    fn test_pure_float_normalized() {
        let catalog = UnitCatalog::load_from_str("", "test.csv").unwrap();
        let converter = Converter::new(&catalog, SystemType::Si, "in.cfg");
        let lines = converter
            .convert_assignment(QuantityKind::PureFloat, &asg("x", "2.5", ""), 1)
            .unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(emitted_value(&lines[0]), 2.5);
        assert!(lines[0].contains('E'));
    }

    #[test]
    fn test_pure_int_with_bare_prefix() {
        let catalog = UnitCatalog::load_from_str("", "test.csv").unwrap();
        let converter = Converter::new(&catalog, SystemType::Si, "in.cfg");
        let lines = converter
            .convert_assignment(QuantityKind::PureInt, &asg("n", "5", "k"), 1)
            .unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("# converted integer from 5 k (kilo) to 5000"));
        assert_eq!(lines[1], "n\t\t = 5000");
    }

    #[test]
    fn test_pure_int_negative_prefix_power_rejected() {
        let catalog = UnitCatalog::load_from_str("", "test.csv").unwrap();
        let converter = Converter::new(&catalog, SystemType::Si, "in.cfg");
        let err = converter
            .convert_assignment(QuantityKind::PureInt, &asg("n", "5", "m"), 2)
            .unwrap_err();
        assert!(matches!(
            err,
            ConvertError::NonIntegerScale { line: 2, power: -3, .. }
        ));
    }

    #[test]
    fn test_pure_int_overflow_rejected() {
        let catalog = UnitCatalog::load_from_str("", "test.csv").unwrap();
        let converter = Converter::new(&catalog, SystemType::Si, "in.cfg");
        let err = converter
            .convert_assignment(QuantityKind::PureInt, &asg("n", "9000000000000000000", "k"), 1)
            .unwrap_err();
        assert!(matches!(err, ConvertError::NonIntegerScale { .. }));
    }

    #[test]
    fn test_pure_float_with_bare_prefix() {
        let catalog = UnitCatalog::load_from_str("", "test.csv").unwrap();
        let converter = Converter::new(&catalog, SystemType::Si, "in.cfg");
        let lines = converter
            .convert_assignment(QuantityKind::PureFloat, &asg("x", "2.5", "m"), 1)
            .unwrap();
        assert_eq!(lines.len(), 2);
        assert!((emitted_value(&lines[1]) - 2.5e-3).abs() / 2.5e-3 < 1e-12);
    }

    #[test]
    fn test_pure_float_unknown_bare_prefix() {
        let catalog = UnitCatalog::load_from_str("", "test.csv").unwrap();
        let converter = Converter::new(&catalog, SystemType::Si, "in.cfg");
        let err = converter
            .convert_assignment(QuantityKind::PureFloat, &asg("x", "2.5", "q"), 1)
            .unwrap_err();
        assert!(matches!(err, ConvertError::UnknownPrefix { .. }));
    }

    #[test]
    fn test_length_to_atomic_units() {
        let catalog = length_catalog();
        let converter = Converter::new(&catalog, SystemType::Au, "in.cfg");
        let lines = converter
            .convert_assignment(QuantityKind::Length, &asg("x", "2.5", "m"), 1)
            .unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("meter"));
        assert!(lines[0].contains("AU_BOHR"));
        let expected = 2.5 / 5.29177e-11;
        let got = emitted_value(&lines[1]);
        assert!((got - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn test_prefix_applies_to_si_normalized_value() {
        let catalog = UnitCatalog::load_from_str(
            "FREQUENCY, Hz, 1.0, hertz, SI\n",
            "test.csv",
        )
        .unwrap();
        let converter = Converter::new(&catalog, SystemType::Si, "in.cfg");
        let lines = converter
            .convert_assignment(QuantityKind::Frequency, &asg("f", "2.0", "kHz"), 1)
            .unwrap();
        assert_eq!(emitted_value(&lines[1]), 2000.0);
    }

    #[test]
    fn test_missing_unit_token() {
        let catalog = length_catalog();
        let converter = Converter::new(&catalog, SystemType::Si, "in.cfg");
        let err = converter
            .convert_assignment(QuantityKind::Length, &asg("x", "2.5", ""), 7)
            .unwrap_err();
        match err {
            ConvertError::MissingUnit { line, key, .. } => {
                assert_eq!(line, 7);
                assert_eq!(key, "x");
            }
            other => panic!("expected MissingUnit, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_unit_lists_expected_symbols() {
        let catalog = length_catalog();
        let converter = Converter::new(&catalog, SystemType::Si, "in.cfg");
        let err = converter
            .convert_assignment(QuantityKind::Length, &asg("x", "2.5", "ft"), 1)
            .unwrap_err();
        match err {
            ConvertError::UnknownUnit { expected, .. } => {
                assert!(expected.contains("m (meter)"));
                assert!(expected.contains("AU_BOHR (bohr_radius)"));
            }
            other => panic!("expected UnknownUnit, got {:?}", other),
        }
    }

    #[test]
    fn test_no_target_unit() {
        // Catalog has a TIME unit but none marked AU
        let catalog =
            UnitCatalog::load_from_str("TIME, s, 1.0, second, SI\n", "test.csv").unwrap();
        let converter = Converter::new(&catalog, SystemType::Au, "in.cfg");
        let err = converter
            .convert_assignment(QuantityKind::Time, &asg("t", "1.0", "s"), 4)
            .unwrap_err();
        assert!(matches!(
            err,
            ConvertError::NoTargetUnit {
                line: Some(4),
                system: SystemType::Au,
                kind: QuantityKind::Time,
                ..
            }
        ));
    }

    #[test]
    fn test_round_trip_between_systems() {
        let catalog = length_catalog();
        let forward = Converter::new(&catalog, SystemType::Au, "in.cfg");
        let lines = forward
            .convert_assignment(QuantityKind::Length, &asg("x", "2.5", "m"), 1)
            .unwrap();
        let in_au = emitted_value(&lines[1]);

        let back = Converter::new(&catalog, SystemType::Si, "in.cfg");
        let lines = back
            .convert_assignment(
                QuantityKind::Length,
                &asg("x", &format!("{:.16E}", in_au), "AU_BOHR"),
                1,
            )
            .unwrap();
        let round_tripped = emitted_value(&lines[1]);
        assert!((round_tripped - 2.5).abs() / 2.5 < 1e-12);
    }
}
