//! spritemap - conf to Lua animation table converter
//!
//! A library for converting legacy packed sprite-sheet conf files into
//! Lua animation tables, one `animations.lua` per unit directory in a
//! tribes asset tree.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;
pub mod validation;

pub use discovery::{scan_tribes, UnitDir, RESERVED_DIRS};
pub use error::{Result, SpritemapError};
pub use parser::{parse_conf, parse_region, ParsedConf, ParsedRegion, RegionError};
pub use render::{render_lua, write_lua};
pub use types::{Animation, AnimationSet, Region};
pub use validation::{Diagnostic, Severity, ValidationResult};
