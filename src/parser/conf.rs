//! Conf section parser.
//!
//! Parses the legacy line-oriented conf format: `[section]` headers followed
//! by `key=value` lines. Only sections carrying the exact line `packed=true`
//! produce an [`Animation`]; everything else is scanned and skipped.
//!
//! The parser is a two-state machine. `Scanning` covers everything outside a
//! packed section; `packed=true` switches to `InPackedSection`, which collects
//! recognized fields until the next section header or end of input. Malformed
//! lines (wrong `=` arity) are skipped without diagnostics, matching the
//! format's documented permissiveness. Values that fail numeric parsing drop
//! the field and record a warning.

use crate::types::Animation;
use crate::validation::{Diagnostic, ValidationResult};

use super::region::parse_region;

/// Result of parsing one conf file.
#[derive(Debug, Clone)]
pub struct ParsedConf {
    /// Packed animations in conf order.
    pub animations: Vec<Animation>,
    /// Warnings for everything that was dropped along the way.
    pub diagnostics: ValidationResult,
}

/// A packed section being collected, with its raw region descriptors.
///
/// Regions are flushed when the section closes, so descriptors keep their
/// conf order regardless of where they sit among the other keys.
struct PackedSection {
    animation: Animation,
    pending_regions: Vec<(usize, String)>,
}

enum State {
    Scanning,
    InPackedSection(PackedSection),
}

/// Parse conf source text into packed animations.
pub fn parse_conf(source: &str) -> ParsedConf {
    let mut animations = Vec::new();
    let mut diagnostics = ValidationResult::new();
    let mut current_section: Option<String> = None;
    let mut state = State::Scanning;

    for (idx, line) in source.lines().enumerate() {
        let lineno = idx + 1;

        if let Some(name) = section_header(line) {
            if let State::InPackedSection(section) =
                std::mem::replace(&mut state, State::Scanning)
            {
                animations.push(close_section(section, &mut diagnostics));
            }
            // An empty header deactivates parsing until the next real one.
            current_section = if name.is_empty() {
                None
            } else {
                Some(name.to_string())
            };
            continue;
        }

        // Lines before the first section header are ignored, packed=true
        // included.
        let Some(section_name) = current_section.as_deref() else {
            continue;
        };

        if line == "packed=true" {
            // A duplicate packed=true inside the same section is a no-op.
            if matches!(state, State::Scanning) {
                state = State::InPackedSection(PackedSection {
                    animation: Animation::new(section_name),
                    pending_regions: Vec::new(),
                });
            }
            continue;
        }

        let State::InPackedSection(section) = &mut state else {
            continue;
        };

        let parts: Vec<&str> = line.split('=').collect();
        if parts.len() != 2 {
            continue;
        }
        let (key, value) = (parts[0], parts[1]);

        match key {
            "pics" => section.animation.spritemap = Some(value.to_string()),
            "base_offset" => {
                section.animation.offset =
                    parse_pair(key, value, lineno, &mut diagnostics);
            }
            "dimensions" => {
                section.animation.size = parse_pair(key, value, lineno, &mut diagnostics);
            }
            "hotspot" => {
                section.animation.hotspot =
                    parse_pair(key, value, lineno, &mut diagnostics);
            }
            "fps" => match value.parse() {
                Ok(fps) => section.animation.fps = Some(fps),
                Err(_) => diagnostics.push(
                    Diagnostic::warning(
                        "spritemap::field::number",
                        format!("fps value {:?} is not an integer, field dropped", value),
                    )
                    .at_line(lineno),
                ),
            },
            _ if key.split('_').next() == Some("region") => {
                section.pending_regions.push((lineno, value.to_string()));
            }
            _ => {}
        }
    }

    if let State::InPackedSection(section) = state {
        animations.push(close_section(section, &mut diagnostics));
    }

    ParsedConf {
        animations,
        diagnostics,
    }
}

/// Extract the name from a `[name]` header line, if this is one.
fn section_header(line: &str) -> Option<&str> {
    if line.len() >= 2 && line.starts_with('[') && line.ends_with(']') {
        Some(&line[1..line.len() - 1])
    } else {
        None
    }
}

/// Parse a two-integer value like `base_offset=2 3`.
fn parse_pair(
    key: &str,
    value: &str,
    lineno: usize,
    diagnostics: &mut ValidationResult,
) -> Option<(i32, i32)> {
    let parts: Vec<&str> = value.split(' ').collect();
    if parts.len() == 2 {
        if let (Ok(x), Ok(y)) = (parts[0].parse(), parts[1].parse()) {
            return Some((x, y));
        }
    }
    diagnostics.push(
        Diagnostic::warning(
            "spritemap::field::number",
            format!("{} value {:?} is not two integers, field dropped", key, value),
        )
        .at_line(lineno),
    );
    None
}

/// Flush a packed section's pending region descriptors and finish its
/// animation.
fn close_section(section: PackedSection, diagnostics: &mut ValidationResult) -> Animation {
    let PackedSection {
        mut animation,
        pending_regions,
    } = section;

    for (lineno, raw) in pending_regions {
        match parse_region(&raw) {
            Ok(parsed) => {
                if parsed.dropped_offsets > 0 {
                    diagnostics.push(
                        Diagnostic::warning(
                            "spritemap::region::offsets",
                            format!(
                                "dropped {} malformed offset pair(s) in a region of [{}]",
                                parsed.dropped_offsets, animation.name
                            ),
                        )
                        .at_line(lineno),
                    );
                }
                animation.regions.push(parsed.region);
            }
            Err(e) => diagnostics.push(
                Diagnostic::warning(
                    "spritemap::region::dropped",
                    format!("dropped region in [{}]: {}", animation.name, e),
                )
                .at_line(lineno),
            ),
        }
    }

    animation
}
