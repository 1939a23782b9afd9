use crate::catalog::{Prefix, Unit};

/// Failure modes of compound-token resolution. No document context here;
/// the converter attaches file, line and key when reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolveError {
    UnknownUnit,
    UnknownPrefix { prefix_part: String },
}

/// Split a compound token like `kHz` into its unit and optional metric prefix.
///
/// Units are tried in the given order, which the catalog keeps sorted by
/// descending symbol length: the longest symbol that is a suffix of the
/// token wins. With units `{"s", "ps"}` the token `ps` must resolve to the
/// picosecond unit, and that sort is the only thing preventing `p` + `s`.
///
/// The prefix is matched against the start of the *whole* token, not the
/// residual left after removing the unit symbol. A unit symbol that itself
/// begins with a prefix symbol can therefore shadow the residual; catalog
/// authors disambiguate through symbol choice, not through this function.
pub fn resolve<'a>(
    token: &str,
    units: &'a [Unit],
    prefixes: &'a [Prefix],
) -> Result<(&'a Unit, Option<&'a Prefix>), ResolveError> {
    let unit = units
        .iter()
        .find(|u| token.ends_with(u.symbol.as_str()))
        .ok_or(ResolveError::UnknownUnit)?;

    let prefix_part = &token[..token.len() - unit.symbol.len()];
    if prefix_part.is_empty() {
        return Ok((unit, None));
    }

    let prefix = prefixes
        .iter()
        .find(|p| token.starts_with(p.symbol))
        .ok_or_else(|| ResolveError::UnknownPrefix {
            prefix_part: prefix_part.to_string(),
        })?;

    Ok((unit, Some(prefix)))
}
