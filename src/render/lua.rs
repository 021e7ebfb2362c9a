//! Lua table output for parsed animation sets.
//!
//! Serializes an [`AnimationSet`] into the `animations.lua` grammar the game
//! scripts consume: one `return { ... }` document with one block per packed
//! animation. Serialization is a single pass over the in-memory tree and is
//! byte-deterministic, so reruns over unchanged input rewrite identical files.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::{Result, SpritemapError};
use crate::types::{Animation, AnimationSet, Region};

/// Render a full `animations.lua` document.
///
/// Fields appear in a fixed order regardless of their order in the conf:
/// spritemap, offset, size, hotspot, fps, regions. Absent fields are
/// omitted; an animation with no fields still renders an empty block.
pub fn render_lua(set: &AnimationSet) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "-- Animation spritemap for {}", set.unit);
    out.push('\n');
    out.push_str("return {\n");

    for anim in &set.animations {
        render_animation(&mut out, anim);
    }

    out.push_str("}\n");
    out
}

fn render_animation(out: &mut String, anim: &Animation) {
    let _ = writeln!(out, "   {} = {{", anim.name);

    if let Some(spritemap) = &anim.spritemap {
        let _ = writeln!(out, "      spritemap = \"{}\",", spritemap);
    }
    if let Some((x, y)) = anim.offset {
        let _ = writeln!(out, "      offset = {{{}, {}}},", x, y);
    }
    if let Some((w, h)) = anim.size {
        let _ = writeln!(out, "      size = {{{}, {}}},", w, h);
    }
    if let Some((x, y)) = anim.hotspot {
        let _ = writeln!(out, "      hotspot = {{{}, {}}},", x, y);
    }
    if let Some(fps) = anim.fps {
        let _ = writeln!(out, "      fps = {},", fps);
    }
    if !anim.regions.is_empty() {
        out.push_str("      regions = {\n");
        for region in &anim.regions {
            render_region(out, region);
        }
        out.push_str("      },\n");
    }

    out.push_str("   },\n");
}

fn render_region(out: &mut String, region: &Region) {
    let [x, y, w, h] = region.rectangle;

    out.push_str("         {\n");
    let _ = writeln!(out, "            rectangle = {{{}, {}, {}, {}}},", x, y, w, h);

    if region.offsets.is_empty() {
        out.push_str("            offsets = {},\n");
    } else {
        out.push_str("            offsets = {");
        for (ox, oy) in &region.offsets {
            let _ = write!(out, " {{{}, {}}},", ox, oy);
        }
        // Swap the trailing comma for the closing brace.
        out.pop();
        out.push_str(" },\n");
    }

    out.push_str("         },\n");
}

/// Write a rendered animation set to `<dir>/animations.lua`, overwriting.
pub fn write_lua(set: &AnimationSet, dir: &Path) -> Result<()> {
    let path = dir.join("animations.lua");
    fs::write(&path, render_lua(set)).map_err(|e| SpritemapError::Io {
        path: path.clone(),
        message: format!("Failed to write animations.lua: {}", e),
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use crate::parser::parse_conf;

    use super::*;

    fn sample_set() -> AnimationSet {
        let parsed = parse_conf(
            "\
[idle]
packed=true
pics=idle
base_offset=2 3
dimensions=10 20
hotspot=5 5
fps=10
region_00=0 0 10 20:1 1;2 2
",
        );
        AnimationSet {
            unit: "carrier".to_string(),
            animations: parsed.animations,
        }
    }

    #[test]
    fn test_render_round_trip_scenario() {
        let output = render_lua(&sample_set());

        insta::assert_snapshot!(output, @r###"
        -- Animation spritemap for carrier

        return {
           idle = {
              spritemap = "idle",
              offset = {2, 3},
              size = {10, 20},
              hotspot = {5, 5},
              fps = 10,
              regions = {
                 {
                    rectangle = {0, 0, 10, 20},
                    offsets = { {1, 1}, {2, 2} },
                 },
              },
           },
        }
        "###);
    }

    #[test]
    fn test_field_order_is_fixed() {
        // Conf order differs from output order.
        let parsed = parse_conf(
            "[idle]\npacked=true\nfps=10\nhotspot=5 5\npics=idle\n",
        );
        let set = AnimationSet {
            unit: "u".to_string(),
            animations: parsed.animations,
        };

        let output = render_lua(&set);
        let spritemap_at = output.find("spritemap").unwrap();
        let hotspot_at = output.find("hotspot").unwrap();
        let fps_at = output.find("fps").unwrap();
        assert!(spritemap_at < hotspot_at);
        assert!(hotspot_at < fps_at);
    }

    #[test]
    fn test_empty_animation_renders_empty_block() {
        let set = AnimationSet {
            unit: "u".to_string(),
            animations: vec![Animation::new("idle")],
        };

        assert_eq!(
            render_lua(&set),
            "-- Animation spritemap for u\n\nreturn {\n   idle = {\n   },\n}\n"
        );
    }

    #[test]
    fn test_region_with_no_offsets() {
        let set = AnimationSet {
            unit: "u".to_string(),
            animations: vec![Animation {
                name: "idle".to_string(),
                regions: vec![Region {
                    rectangle: [0, 0, 4, 4],
                    offsets: vec![],
                }],
                ..Animation::default()
            }],
        };

        let output = render_lua(&set);
        assert!(output.contains("offsets = {},"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let set = sample_set();
        assert_eq!(render_lua(&set), render_lua(&set));
    }

    #[test]
    fn test_write_lua_overwrites() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("animations.lua"), "stale").unwrap();

        let set = sample_set();
        write_lua(&set, dir.path()).unwrap();

        let written = std::fs::read_to_string(dir.path().join("animations.lua")).unwrap();
        assert_eq!(written, render_lua(&set));
    }
}
