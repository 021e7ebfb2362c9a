//! Check command implementation.
//!
//! Dry-run pass over the tribes tree: parses every conf, reports everything
//! the converter would drop, writes nothing. Exits non-zero when any conf
//! could not be read at all.

use std::fs;
use std::io::Write as _;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::scan_tribes;
use crate::error::{Result, SpritemapError};
use crate::output::{display_path, plural, Printer};
use crate::parser::parse_conf;
use crate::validation::{Diagnostic, Severity, ValidationResult};

/// Report what conversion would drop, without writing files
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Tribes directory to check
    #[arg(default_value = "tribes")]
    pub root: PathBuf,

    /// Additional unit directory names to skip
    #[arg(long, value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Emit diagnostics as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let printer = Printer::new();

    let units = scan_tribes(&args.root, &args.exclude)?;

    let mut diagnostics = ValidationResult::new();
    let mut convertible = 0;

    for unit in &units {
        let conf_path = unit.conf_path();
        match fs::read_to_string(&conf_path) {
            Ok(source) => {
                let parsed = parse_conf(&source);
                if !parsed.animations.is_empty() {
                    convertible += 1;
                }
                diagnostics.merge_for_unit(parsed.diagnostics, &unit.unit);
            }
            Err(e) => diagnostics.push(
                Diagnostic::error(
                    "spritemap::conf::unreadable",
                    format!("{}: {}", display_path(&conf_path), e),
                )
                .for_unit(&unit.unit),
            ),
        }
    }

    if args.json {
        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &diagnostics)?;
        let _ = writeln!(stdout);
    } else {
        for diagnostic in diagnostics.iter() {
            let location = match (&diagnostic.unit, diagnostic.line) {
                (Some(unit), Some(line)) => format!("{} line {}: ", unit, line),
                (Some(unit), None) => format!("{}: ", unit),
                _ => String::new(),
            };
            let message = format!("{}{}", location, diagnostic.message);
            match diagnostic.severity {
                Severity::Error => printer.error("Error", &message),
                Severity::Warning => printer.warning("Warning", &message),
            }
        }
        printer.status(
            "Checked",
            &format!(
                "{}, {} with packed animations, {}, {}",
                plural(units.len(), "unit", "units"),
                convertible,
                plural(diagnostics.warning_count(), "warning", "warnings"),
                plural(diagnostics.error_count(), "error", "errors")
            ),
        );
    }

    if diagnostics.has_errors() {
        return Err(SpritemapError::Check {
            message: format!(
                "{} unreadable",
                plural(diagnostics.error_count(), "conf file was", "conf files were")
            ),
            help: Some("Fix or exclude the listed units and rerun".to_string()),
        });
    }

    Ok(())
}
