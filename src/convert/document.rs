use crate::catalog::{QuantityKind, SystemType, UnitCatalog};
use crate::convert::classifier::{self, LineClass};
use crate::convert::converter::Converter;
use crate::convert::error::ConvertError;
use chrono::Local;

/// Per-document state threaded through the line pass, driven by directive
/// comments. A quantity-kind directive stays active across consecutive
/// assignment lines and is cleared by any other non-blank line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConversionContext {
    pub active_kind: Option<QuantityKind>,
    pub ignore_region: bool,
}

/// Convert a whole document in one forward pass.
///
/// Returns every output line including the generated header. Nothing is
/// written anywhere until the entire input has converted; any error aborts
/// the run with the offending file and line.
pub fn convert_document(
    catalog: &UnitCatalog,
    target: SystemType,
    input: &str,
    file: &str,
) -> Result<Vec<String>, ConvertError> {
    let converter = Converter::new(catalog, target, file);

    let mut output = Vec::new();
    output.push(format!(
        "# Converted to {} units on {} by unitcfg",
        target,
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    output.push("# ".to_string());

    let mut ctx = ConversionContext::default();

    for (i, line) in input.lines().enumerate() {
        let line_no = i + 1;
        match classifier::classify(line) {
            LineClass::Passthrough => output.push(line.to_string()),
            LineClass::Directive(name) => {
                output.push(line.to_string());
                let kind = QuantityKind::from_name(&name).ok_or_else(|| {
                    ConvertError::UnknownDirectiveKind {
                        file: file.to_string(),
                        line: line_no,
                        token: name,
                    }
                })?;
                match kind {
                    QuantityKind::IgnoreRegionStart => {
                        ctx.ignore_region = true;
                        ctx.active_kind = None;
                    }
                    QuantityKind::IgnoreRegionEnd => {
                        ctx.ignore_region = false;
                        ctx.active_kind = None;
                    }
                    other => ctx.active_kind = Some(other),
                }
            }
            LineClass::Assignment { key } if !ctx.ignore_region => match ctx.active_kind {
                None => {
                    return Err(ConvertError::UnspecifiedKind {
                        file: file.to_string(),
                        line: line_no,
                        key,
                    })
                }
                Some(QuantityKind::Ignore) => output.push(line.to_string()),
                Some(kind) => {
                    let asg = classifier::parse_assignment(line).ok_or_else(|| {
                        ConvertError::UnparsableLine {
                            file: file.to_string(),
                            line: line_no,
                        }
                    })?;
                    output.extend(converter.convert_assignment(kind, &asg, line_no)?);
                }
            },
            // Assignment inside an ignore region, or any other non-blank
            // line: copy verbatim and drop the active kind.
            _ => {
                output.push(line.to_string());
                ctx.active_kind = None;
            }
        }
    }

    Ok(output)
}
