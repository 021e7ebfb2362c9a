//! Parsers for the legacy conf format.
//!
//! # Conf structure
//!
//! A conf file is an ordered sequence of `[section]` blocks. Within a
//! section, lines are `key=value` pairs. The keys this tool cares about:
//!
//! - `packed=true` — marks the section as a packed animation
//! - `pics`, `base_offset`, `dimensions`, `hotspot`, `fps`
//! - `region*` — one packed sprite region descriptor per key
//!
//! # Usage
//!
//! ```ignore
//! use spritemap::parser::parse_conf;
//!
//! let source = std::fs::read_to_string("tribes/barbarians/carrier/conf")?;
//! let parsed = parse_conf(&source);
//!
//! for anim in &parsed.animations {
//!     println!("packed animation: {}", anim.name);
//! }
//! ```

mod conf;
pub mod region;

pub use conf::{parse_conf, ParsedConf};
pub use region::{parse_region, ParsedRegion, RegionError};
