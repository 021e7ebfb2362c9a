//! Discovery of unit directories in a tribes asset tree.
//!
//! # Example
//!
//! ```ignore
//! use spritemap::discovery::scan_tribes;
//!
//! let units = scan_tribes("tribes".as_ref(), &[])?;
//! println!("Found {} unit(s)", units.len());
//! ```

mod scanner;

pub use scanner::{scan_tribes, UnitDir, RESERVED_DIRS};
