//! Output rendering for parsed animation sets.

mod lua;

pub use lua::{render_lua, write_lua};
