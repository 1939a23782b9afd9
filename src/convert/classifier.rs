use crate::convert::converter::ParsedAssignment;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Loose probe: does the line look like a `key =` assignment at all
    static ref ASSIGNMENT_PROBE: Regex = Regex::new(r"^\s*(\w+)\s*=.*$").unwrap();

    /// Full shape: key, numeric literal, optional compound unit token.
    /// No space is required between the number and the unit; the token may
    /// contain Latin and Greek letters plus `_ * / % °`.
    static ref ASSIGNMENT_FULL: Regex = Regex::new(
        r"^\s*(?P<key>\w+)\s*=\s*(?P<value>[-+]?[0-9]*\.?[0-9]+(?:[eE][-+]?[0-9]+)?)\s*(?P<unit>[Α-Ωα-ωa-zA-Z_*/%°]*)\s*$"
    )
    .unwrap();

    /// Directive comment that sets the active quantity kind
    static ref DIRECTIVE: Regex =
        Regex::new(r"^\s*#\s*unit_type\s*:\s*\[([\s\w]+)\].*$").unwrap();
}

/// What a single input line means to the document pass
#[derive(Debug, Clone, PartialEq)]
pub enum LineClass {
    /// Blank line or plain comment, copied verbatim
    Passthrough,
    /// Comment carrying a `# unit_type: [<name>]` directive; the name is
    /// raw, resolution against the kind enumeration happens in the pass
    Directive(String),
    /// Non-blank, non-comment line matching the loose assignment probe
    Assignment { key: String },
    /// Any other non-blank line
    Other,
}

pub fn classify(line: &str) -> LineClass {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        if let Some(caps) = DIRECTIVE.captures(line) {
            return LineClass::Directive(caps[1].trim().to_string());
        }
        return LineClass::Passthrough;
    }
    if let Some(caps) = ASSIGNMENT_PROBE.captures(line) {
        return LineClass::Assignment {
            key: caps[1].to_string(),
        };
    }
    LineClass::Other
}

/// Parse the full `key = number [unit]` shape. `None` when the line only
/// matches the loose probe, which the caller reports as unparsable.
pub fn parse_assignment(line: &str) -> Option<ParsedAssignment> {
    let caps = ASSIGNMENT_FULL.captures(line)?;
    Some(ParsedAssignment {
        key: caps["key"].to_string(),
        value_text: caps["value"].to_string(),
        unit_token: caps["unit"].to_string(),
    })
}
