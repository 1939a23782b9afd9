use crate::catalog::prefix::possible_prefixes;
use crate::catalog::types::{QuantityKind, SystemType};
use std::fmt;

/// Failures while converting a document. All are fatal for the run; the
/// variants carry the input file and line so the diagnostic points at the
/// offending assignment.
#[derive(Debug)]
pub enum ConvertError {
    UnknownUnit {
        file: String,
        line: usize,
        kind: QuantityKind,
        key: String,
        token: String,
        expected: String,
    },
    UnknownPrefix {
        file: String,
        line: usize,
        key: String,
        token: String,
    },
    MissingUnit {
        file: String,
        line: usize,
        kind: QuantityKind,
        key: String,
        expected: String,
    },
    UnspecifiedKind {
        file: String,
        line: usize,
        key: String,
    },
    UnparsableLine {
        file: String,
        line: usize,
    },
    UnknownDirectiveKind {
        file: String,
        line: usize,
        token: String,
    },
    InvalidNumber {
        file: String,
        line: usize,
        expected: &'static str,
        value: String,
    },
    NonIntegerScale {
        file: String,
        line: usize,
        key: String,
        value: i64,
        prefix_symbol: String,
        power: i32,
    },
    NoTargetUnit {
        file: String,
        line: Option<usize>,
        system: SystemType,
        kind: QuantityKind,
    },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::UnknownUnit {
                file,
                line,
                kind,
                key,
                token,
                expected,
            } => write!(
                f,
                "in file '{}' at line {}: unknown {} unit symbol '{}' for key '{}'; expected symbols: {}",
                file,
                line,
                kind.name().to_lowercase(),
                token,
                key,
                expected
            ),
            ConvertError::UnknownPrefix {
                file,
                line,
                key,
                token,
            } => write!(
                f,
                "in file '{}' at line {}: unknown prefix '{}' for key '{}'; known prefixes: {}",
                file,
                line,
                token,
                key,
                possible_prefixes()
            ),
            ConvertError::MissingUnit {
                file,
                line,
                kind,
                key,
                expected,
            } => write!(
                f,
                "in file '{}' at line {}: no {} unit specified for key '{}'; expected symbols: {}",
                file,
                line,
                kind.name().to_lowercase(),
                key,
                expected
            ),
            ConvertError::UnspecifiedKind { file, line, key } => write!(
                f,
                "in file '{}' at line {}: no unit_type directive in effect for key '{}'",
                file, line, key
            ),
            ConvertError::UnparsableLine { file, line } => write!(
                f,
                "in file '{}' at line {}: unable to parse the line as `key = number [unit]`",
                file, line
            ),
            ConvertError::UnknownDirectiveKind { file, line, token } => write!(
                f,
                "in file '{}' at line {}: unknown unit_type '{}'; expected one of: {}",
                file,
                line,
                token,
                QuantityKind::possible_names()
            ),
            ConvertError::InvalidNumber {
                file,
                line,
                expected,
                value,
            } => write!(
                f,
                "in file '{}' at line {}: unable to parse {} value '{}'",
                file, line, expected, value
            ),
            ConvertError::NonIntegerScale {
                file,
                line,
                key,
                value,
                prefix_symbol,
                power,
            } => write!(
                f,
                "in file '{}' at line {}: cannot scale integer value {} for key '{}' by prefix '{}' (10^{}) to an integer result",
                file, line, value, key, prefix_symbol, power
            ),
            ConvertError::NoTargetUnit {
                file,
                line,
                system,
                kind,
            } => match line {
                Some(line) => write!(
                    f,
                    "in file '{}' at line {}: no {} unit found representing a {}; complete the catalog",
                    file,
                    line,
                    system,
                    kind.name().to_lowercase()
                ),
                None => write!(
                    f,
                    "in file '{}': no {} unit found representing a {}; complete the catalog",
                    file,
                    system,
                    kind.name().to_lowercase()
                ),
            },
        }
    }
}

impl std::error::Error for ConvertError {}
