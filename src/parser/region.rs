//! Region descriptor parsing.
//!
//! A region descriptor is a compound string of the form
//! `"x y w h:ox1 oy1;ox2 oy2;..."`: a rectangle followed by a
//! semicolon-separated list of per-frame offset pairs.

use thiserror::Error;

use crate::types::Region;

/// Why a whole region descriptor was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegionError {
    #[error("expected exactly one ':' between rectangle and offsets")]
    Shape,

    #[error("rectangle has {0} component(s), expected 4")]
    RectangleArity(usize),

    #[error("rectangle component {0:?} is not an integer")]
    RectangleNumber(String),
}

/// A successfully parsed descriptor, plus how many offset pairs were
/// rejected along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRegion {
    pub region: Region,
    /// Offset pairs dropped for not splitting into exactly two integers.
    pub dropped_offsets: usize,
}

/// Parse one raw region descriptor.
///
/// The rectangle is all-or-nothing: any arity or numeric problem rejects
/// the whole descriptor. Offset pairs are rejected individually; the region
/// keeps whatever pairs were well-formed, possibly none.
pub fn parse_region(raw: &str) -> Result<ParsedRegion, RegionError> {
    let parts: Vec<&str> = raw.split(':').collect();
    if parts.len() != 2 {
        return Err(RegionError::Shape);
    }

    let rect_parts: Vec<&str> = parts[0].split(' ').collect();
    if rect_parts.len() != 4 {
        return Err(RegionError::RectangleArity(rect_parts.len()));
    }

    let mut rectangle = [0i32; 4];
    for (slot, part) in rectangle.iter_mut().zip(&rect_parts) {
        *slot = part
            .parse()
            .map_err(|_| RegionError::RectangleNumber((*part).to_string()))?;
    }

    let mut offsets = Vec::new();
    let mut dropped_offsets = 0;
    for offset in parts[1].split(';') {
        let pair: Vec<&str> = offset.split(' ').collect();
        if pair.len() != 2 {
            dropped_offsets += 1;
            continue;
        }
        match (pair[0].parse(), pair[1].parse()) {
            (Ok(x), Ok(y)) => offsets.push((x, y)),
            _ => dropped_offsets += 1,
        }
    }

    Ok(ParsedRegion {
        region: Region { rectangle, offsets },
        dropped_offsets,
    })
}
