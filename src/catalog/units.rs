use crate::catalog::error::CatalogError;
use crate::catalog::types::{QuantityKind, SystemType};
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// One catalog record: a unit symbol and its value in the SI unit of its kind
#[derive(Debug, Clone, Serialize)]
pub struct Unit {
    pub symbol: String,
    /// Value of 1 of this unit, expressed in SI
    pub si_scale: f64,
    pub display_name: String,
    /// Unit systems this unit belongs to
    pub systems: Vec<SystemType>,
    pub note: Option<String>,
    /// Position of the record within its kind, in catalog-file order.
    /// Target-unit selection follows this order, not the sorted order.
    pub index: usize,
}

/// Known units per quantity kind, loaded from the catalog file.
///
/// Catalog format is line-oriented CSV with at least 5 fields:
/// `KIND, symbol, si_scale, display_name, systems[|-separated], [note]`.
/// Blank lines and lines starting with `#` are skipped.
///
/// After loading, each kind's list is stably sorted by descending symbol
/// length. Suffix matching walks that order, so the longest symbol always
/// wins; this is the only disambiguation between overlapping symbols.
/// Duplicate symbols within a kind are not rejected; the earlier record
/// shadows the later one.
#[derive(Debug, Clone)]
pub struct UnitCatalog {
    kinds: HashMap<QuantityKind, Vec<Unit>>,
}

impl UnitCatalog {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|e| CatalogError::Io {
            file: file.clone(),
            source: e,
        })?;
        Self::load_from_str(&content, &file)
    }

    /// Parse catalog content; `file` is only used in diagnostics.
    pub fn load_from_str(content: &str, file: &str) -> Result<Self, CatalogError> {
        let mut kinds: HashMap<QuantityKind, Vec<Unit>> = HashMap::new();
        for kind in QuantityKind::ALL {
            kinds.insert(kind, Vec::new());
        }

        for (i, raw) in content.lines().enumerate() {
            let line_no = i + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() < 5 {
                return Err(CatalogError::MissingFields {
                    file: file.to_string(),
                    line: line_no,
                    found: fields.len(),
                });
            }

            let kind =
                QuantityKind::from_name(fields[0]).ok_or_else(|| CatalogError::UnknownKind {
                    file: file.to_string(),
                    line: line_no,
                    token: fields[0].trim().to_string(),
                })?;

            let symbol = fields[1].trim();
            if symbol.is_empty() {
                return Err(CatalogError::MissingSymbol {
                    file: file.to_string(),
                    line: line_no,
                });
            }

            let si_scale: f64 =
                fields[2]
                    .trim()
                    .parse()
                    .map_err(|_| CatalogError::InvalidScale {
                        file: file.to_string(),
                        line: line_no,
                        token: fields[2].trim().to_string(),
                    })?;

            let display_name = fields[3].trim();
            if display_name.is_empty() {
                return Err(CatalogError::MissingDisplayName {
                    file: file.to_string(),
                    line: line_no,
                });
            }

            let mut systems = Vec::new();
            let systems_field = fields[4].trim();
            if !systems_field.is_empty() {
                for token in systems_field.split('|') {
                    let token = token.trim();
                    let system =
                        SystemType::from_name(token).ok_or_else(|| CatalogError::UnknownSystem {
                            file: file.to_string(),
                            line: line_no,
                            token: token.to_string(),
                        })?;
                    systems.push(system);
                }
            }

            let note = fields
                .get(5)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty());

            let list = kinds.entry(kind).or_default();
            let index = list.len();
            list.push(Unit {
                symbol: symbol.to_string(),
                si_scale,
                display_name: display_name.to_string(),
                systems,
                note,
                index,
            });
        }

        // Longest symbol first; stable, so equal lengths keep file order
        for units in kinds.values_mut() {
            units.sort_by_key(|u| Reverse(u.symbol.chars().count()));
        }

        Ok(Self { kinds })
    }

    /// Units for a kind, longest symbol first
    pub fn units(&self, kind: QuantityKind) -> &[Unit] {
        self.kinds.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The unit designated to represent `system` for this kind: the first
    /// matching record in catalog-file order.
    pub fn target_unit(&self, kind: QuantityKind, system: SystemType) -> Option<&Unit> {
        self.units(kind)
            .iter()
            .filter(|u| u.systems.contains(&system))
            .min_by_key(|u| u.index)
    }
}
