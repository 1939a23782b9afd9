use crate::catalog::types::QuantityKind;
use std::fmt;

/// Failures while loading the unit catalog. Every variant except `Io`
/// points at the offending record by file and line.
#[derive(Debug)]
pub enum CatalogError {
    UnknownKind {
        file: String,
        line: usize,
        token: String,
    },
    MissingSymbol {
        file: String,
        line: usize,
    },
    InvalidScale {
        file: String,
        line: usize,
        token: String,
    },
    MissingDisplayName {
        file: String,
        line: usize,
    },
    UnknownSystem {
        file: String,
        line: usize,
        token: String,
    },
    MissingFields {
        file: String,
        line: usize,
        found: usize,
    },
    Io {
        file: String,
        source: std::io::Error,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::UnknownKind { file, line, token } => write!(
                f,
                "in file '{}' at line {}: unknown quantity kind '{}'; expected one of: {}",
                file,
                line,
                token,
                QuantityKind::possible_names()
            ),
            CatalogError::MissingSymbol { file, line } => write!(
                f,
                "in file '{}' at line {}: the unit symbol field is mandatory",
                file, line
            ),
            CatalogError::InvalidScale { file, line, token } => write!(
                f,
                "in file '{}' at line {}: the SI-scale field '{}' is not a valid number",
                file, line, token
            ),
            CatalogError::MissingDisplayName { file, line } => write!(
                f,
                "in file '{}' at line {}: the display-name field is mandatory",
                file, line
            ),
            CatalogError::UnknownSystem { file, line, token } => write!(
                f,
                "in file '{}' at line {}: unknown unit system '{}'; expected one of: SI, AU",
                file, line, token
            ),
            CatalogError::MissingFields { file, line, found } => write!(
                f,
                "in file '{}' at line {}: expected at least 5 comma-separated fields, found {}",
                file, line, found
            ),
            CatalogError::Io { file, source } => {
                write!(f, "unable to open file '{}': {}", file, source)
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
