use crate::catalog::{QuantityKind, SystemType, UnitCatalog};
use crate::convert::ConvertError;
use serde::Serialize;

/// Conversion factors between one catalog unit and the target-system unit
#[derive(Debug, Clone, Serialize)]
pub struct FactorEntry {
    pub symbol: String,
    pub display_name: String,
    /// 1 of this unit, expressed in the target unit
    pub to_target: f64,
    /// 1 target unit, expressed in this unit
    pub from_target: f64,
}

/// Factor table for one quantity kind
#[derive(Debug, Clone, Serialize)]
pub struct UnitReport {
    pub kind: QuantityKind,
    pub target_symbol: String,
    pub entries: Vec<FactorEntry>,
}

/// Build the bidirectional factor table for every convertible kind.
/// A kind with no unit in the target system is fatal, same as during
/// document conversion.
pub fn build_report(
    catalog: &UnitCatalog,
    system: SystemType,
    catalog_file: &str,
) -> Result<Vec<UnitReport>, ConvertError> {
    let mut reports = Vec::new();

    for kind in QuantityKind::ALL {
        if !kind.is_convertible() {
            continue;
        }

        let target =
            catalog
                .target_unit(kind, system)
                .ok_or_else(|| ConvertError::NoTargetUnit {
                    file: catalog_file.to_string(),
                    line: None,
                    system,
                    kind,
                })?;

        let entries = catalog
            .units(kind)
            .iter()
            .map(|unit| FactorEntry {
                symbol: unit.symbol.clone(),
                display_name: unit.display_name.clone(),
                to_target: unit.si_scale / target.si_scale,
                from_target: target.si_scale / unit.si_scale,
            })
            .collect();

        reports.push(UnitReport {
            kind,
            target_symbol: target.symbol.clone(),
            entries,
        });
    }

    Ok(reports)
}

/// Render the report as an aligned text table, one block per kind
pub fn render_text(reports: &[UnitReport]) -> String {
    let mut out = String::new();
    for report in reports {
        out.push_str(&format!("{}:\n", report.kind));
        for entry in &report.entries {
            let forward = format!(
                "1 {:<6} = {:.16E} {:<6}",
                entry.symbol, entry.to_target, report.target_symbol
            );
            let backward = format!(
                "1 {:<6} = {:.16E} {:<6}",
                report.target_symbol, entry.from_target, entry.symbol
            );
            out.push_str(&format!(
                "  {:<40}: {:<40} {:<40}\n",
                entry.display_name, forward, backward
            ));
        }
        out.push('\n');
    }
    out
}
