//! Convert command implementation.
//!
//! Walks the tribes tree, parses each unit's conf and writes
//! `animations.lua` next to it when the conf holds packed animations.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::{scan_tribes, UnitDir};
use crate::error::{Result, SpritemapError};
use crate::output::{display_path, plural, Printer};
use crate::parser::parse_conf;
use crate::render::write_lua;
use crate::types::AnimationSet;
use crate::validation::ValidationResult;

/// Convert conf files into Lua animation tables
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Tribes directory to convert
    #[arg(default_value = "tribes")]
    pub root: PathBuf,

    /// Additional unit directory names to skip
    #[arg(long, value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Parse and render without writing any files
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: ConvertArgs) -> Result<()> {
    let printer = Printer::new();

    let units = scan_tribes(&args.root, &args.exclude)?;
    printer.info(
        "Scanning",
        &format!(
            "{} under {}",
            plural(units.len(), "unit", "units"),
            display_path(&args.root)
        ),
    );

    let mut written = 0;
    let mut skipped = 0;
    let mut failed = 0;
    let mut warnings = 0;

    // One unit failing must not abort its siblings.
    for unit in &units {
        match convert_unit(unit, args.dry_run) {
            Ok(Some(diagnostics)) => {
                written += 1;
                warnings += diagnostics.warning_count();
                let verb = if args.dry_run { "Would write" } else { "Writing" };
                printer.status(verb, &display_path(&unit.output_path()));
            }
            Ok(None) => skipped += 1,
            Err(e) => {
                failed += 1;
                printer.error("Failed", &format!("{}: {}", display_path(&unit.path), e));
            }
        }
    }

    printer.status(
        "Finished",
        &format!(
            "{} written, {} without packed animations",
            plural(written, "file", "files"),
            plural(skipped, "unit", "units")
        ),
    );
    if warnings > 0 {
        printer.warning(
            "Warnings",
            &format!(
                "{} (run `spritemap check` for details)",
                plural(warnings, "line dropped", "lines dropped")
            ),
        );
    }
    if failed > 0 {
        printer.warning("Skipped", &format!("{} due to errors", plural(failed, "unit", "units")));
    }

    Ok(())
}

/// Convert one unit directory.
///
/// Returns the parse diagnostics when a file was (or would be) written,
/// `None` when the conf has no packed animations.
fn convert_unit(unit: &UnitDir, dry_run: bool) -> Result<Option<ValidationResult>> {
    let conf_path = unit.conf_path();
    let source = fs::read_to_string(&conf_path).map_err(|e| SpritemapError::Io {
        path: conf_path.clone(),
        message: format!("Failed to read conf: {}", e),
    })?;

    let parsed = parse_conf(&source);
    if parsed.animations.is_empty() {
        return Ok(None);
    }

    let set = AnimationSet {
        unit: unit.unit.clone(),
        animations: parsed.animations,
    };

    if !dry_run {
        write_lua(&set, &unit.path)?;
    }

    Ok(Some(parsed.diagnostics))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    const PACKED_CONF: &str = "\
[idle]
packed=true
pics=idle
base_offset=2 3
dimensions=10 20
hotspot=5 5
fps=10
region_00=0 0 10 20:1 1;2 2
";

    fn make_unit(root: &Path, tribe: &str, unit: &str, conf: &str) -> PathBuf {
        let dir = root.join(tribe).join(unit);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("conf"), conf).unwrap();
        dir
    }

    fn args_for(root: &Path) -> ConvertArgs {
        ConvertArgs {
            root: root.to_path_buf(),
            exclude: vec![],
            dry_run: false,
        }
    }

    #[test]
    fn test_convert_writes_expected_lua() {
        let dir = tempdir().unwrap();
        let unit_dir = make_unit(dir.path(), "barbarians", "carrier", PACKED_CONF);

        run(args_for(dir.path())).unwrap();

        let output = fs::read_to_string(unit_dir.join("animations.lua")).unwrap();
        assert_eq!(
            output,
            "-- Animation spritemap for carrier\n\n\
             return {\n   \
                idle = {\n      \
                   spritemap = \"idle\",\n      \
                   offset = {2, 3},\n      \
                   size = {10, 20},\n      \
                   hotspot = {5, 5},\n      \
                   fps = 10,\n      \
                   regions = {\n         \
                      {\n            \
                         rectangle = {0, 0, 10, 20},\n            \
                         offsets = { {1, 1}, {2, 2} },\n         \
                      },\n      \
                   },\n   \
                },\n\
             }\n"
        );
    }

    #[test]
    fn test_convert_skips_units_without_packed_sections() {
        let dir = tempdir().unwrap();
        let unit_dir = make_unit(dir.path(), "barbarians", "carrier", "[idle]\npics=idle\n");

        run(args_for(dir.path())).unwrap();

        assert!(!unit_dir.join("animations.lua").exists());
    }

    #[test]
    fn test_convert_only_packed_sections_emitted() {
        let dir = tempdir().unwrap();
        let unit_dir = make_unit(
            dir.path(),
            "empire",
            "builder",
            "[idle]\npics=idle\n\n[work]\npacked=true\npics=work\n",
        );

        run(args_for(dir.path())).unwrap();

        let output = fs::read_to_string(unit_dir.join("animations.lua")).unwrap();
        assert!(output.contains("work = {"));
        assert!(!output.contains("idle = {"));
    }

    #[test]
    fn test_convert_is_idempotent() {
        let dir = tempdir().unwrap();
        let unit_dir = make_unit(dir.path(), "barbarians", "carrier", PACKED_CONF);

        run(args_for(dir.path())).unwrap();
        let first = fs::read_to_string(unit_dir.join("animations.lua")).unwrap();

        run(args_for(dir.path())).unwrap();
        let second = fs::read_to_string(unit_dir.join("animations.lua")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempdir().unwrap();
        let unit_dir = make_unit(dir.path(), "barbarians", "carrier", PACKED_CONF);

        let mut args = args_for(dir.path());
        args.dry_run = true;
        run(args).unwrap();

        assert!(!unit_dir.join("animations.lua").exists());
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let args = args_for(Path::new("/nonexistent/tribes"));

        let err = run(args).unwrap_err();

        assert!(matches!(err, SpritemapError::MissingRoot { .. }));
    }

    #[test]
    fn test_unreadable_unit_does_not_abort_siblings() {
        let dir = tempdir().unwrap();
        // Invalid UTF-8 makes the read fail for this unit only.
        let broken = dir.path().join("barbarians").join("broken");
        fs::create_dir_all(&broken).unwrap();
        fs::write(broken.join("conf"), [0xff, 0xfe, 0x00]).unwrap();
        let good_dir = make_unit(dir.path(), "barbarians", "carrier", PACKED_CONF);

        run(args_for(dir.path())).unwrap();

        assert!(good_dir.join("animations.lua").exists());
    }

    #[test]
    fn test_exclude_flag_skips_units() {
        let dir = tempdir().unwrap();
        let excluded = make_unit(dir.path(), "barbarians", "wip", PACKED_CONF);
        let kept = make_unit(dir.path(), "barbarians", "carrier", PACKED_CONF);

        let mut args = args_for(dir.path());
        args.exclude = vec!["wip".to_string()];
        run(args).unwrap();

        assert!(kept.join("animations.lua").exists());
        assert!(!excluded.join("animations.lua").exists());
    }
}
