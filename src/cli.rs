//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::log::{self, Verbosity};
use crate::core::render::{OutputFormat, RenderConfig};
use crate::rewrite::api::{ApplyOptions, DEFAULT_TARGET};
use crate::rules::Preset;

/// flagstrip - strip feature-flag gated JSX blocks and their unused imports.
#[derive(Parser, Debug)]
#[command(name = "flagstrip")]
#[command(
    author,
    version,
    about,
    long_about = r#"flagstrip rewrites one source file in place with an ordered list of regex rules:

1. collapse the CodeEditor feature-flag conditional into <CodeEditorPanel />
2. collapse the CanvasArea feature-flag conditional into <CanvasArea />
3. collapse the ControlsPanel feature-flag conditional into <ControlsPanel />
4. remove the {/* Debug feature flags */} <DebugFeatureFlags /> panel
5. remove the FeatureFlags and DebugFeatureFlags imports

A rule that matches nothing is skipped silently. Running twice is a no-op.

Running without a subcommand is the same as `flagstrip apply`.

Examples:
    flagstrip
    flagstrip apply app/page.tsx --preset strict
    flagstrip apply --check
    flagstrip --format jsonl apply --dry-run
    flagstrip rules --preset strict
"#
)]
pub struct Cli {
    /// Root directory for all operations.
    #[arg(
        long,
        global = true,
        default_value = ".",
        value_name = "ROOT",
        env = "FLAGSTRIP_ROOT",
        long_help = "Root directory for all operations (defaults to the current directory).\n\n\
Relative FILE arguments are resolved against this root, and report paths are\n\
shown relative to it."
    )]
    pub root: PathBuf,

    /// Output format (text/jsonl/json/md).
    #[arg(
        long,
        global = true,
        default_value = "text",
        value_name = "FORMAT",
        long_help = "Select the output format.\n\n\
Supported values:\n\
- text (default): the one-line confirmation message\n\
- jsonl: one JSON object per rule plus a summary line\n\
- json: a single JSON array\n\
- md (markdown)"
    )]
    pub format: String,

    /// Disable colored output.
    #[arg(
        long,
        global = true,
        long_help = "Disable colored diagnostics on stderr. This is useful when piping to files\n\
or when your terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (no confirmation message, no warnings).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (per-rule diagnostics on stderr).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the cleanup rules over a file and write it back.
    #[command(
        long_about = "Read FILE, apply the preset's rules in order, and overwrite FILE with the\n\
result. The file is written even when nothing matched.\n\n\
Examples:\n\
  flagstrip apply\n\
  flagstrip apply src/app/page.tsx --preset strict\n\
  flagstrip apply --dry-run --format md\n\
  flagstrip apply --check --require-all\n"
    )]
    Apply {
        /// File to clean (relative to ROOT unless absolute).
        #[arg(value_name = "FILE", default_value = DEFAULT_TARGET)]
        file: PathBuf,

        /// Rule preset (lenient/strict).
        #[arg(
            long,
            default_value = "lenient",
            value_name = "PRESET",
            env = "FLAGSTRIP_PRESET",
            value_parser = ["lenient", "v2", "strict", "page"],
            long_help = "Select the rule preset.\n\n\
Supported values:\n\
- lenient (alias v2, default): any branch body; conditionals collapse first match only\n\
- strict (alias page): branches must be <>{console.log(...)}<Panel .../></>; every match collapses"
        )]
        preset: String,

        /// Report what would change without writing.
        #[arg(long)]
        dry_run: bool,

        /// Fail if the file would change (implies --dry-run).
        #[arg(
            long,
            long_help = "Do not write. Exit with an error if any rule would change the file.\n\n\
Useful in CI to make sure the cleanup has already been applied."
        )]
        check: bool,

        /// Fail if any rule made zero replacements.
        #[arg(long)]
        require_all: bool,
    },

    /// List the rules of a preset.
    #[command(
        long_about = "Print each rule of the preset with its replacement scope, patterns and\n\
replacement text.\n\n\
Example:\n\
  flagstrip rules --preset strict\n"
    )]
    Rules {
        /// Rule preset (lenient/strict).
        #[arg(
            long,
            default_value = "lenient",
            value_name = "PRESET",
            value_parser = ["lenient", "v2", "strict", "page"]
        )]
        preset: String,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    log::set_color(!cli.no_color);
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);

    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    let root = cli.root.canonicalize().unwrap_or(cli.root);

    // No subcommand: behave like a bare `apply`
    let command = cli.command.unwrap_or_else(|| Commands::Apply {
        file: PathBuf::from(DEFAULT_TARGET),
        preset: std::env::var("FLAGSTRIP_PRESET")
            .unwrap_or_else(|_| Preset::default().name().to_string()),
        dry_run: false,
        check: false,
        require_all: false,
    });

    match command {
        Commands::Apply {
            file,
            preset,
            dry_run,
            check,
            require_all,
        } => {
            let options = ApplyOptions {
                preset: preset.parse()?,
                dry_run,
                check,
                require_all,
            };
            crate::rewrite::api::run_apply(&root, &file, options, render_config, verbosity)
        }

        Commands::Rules { preset } => crate::rewrite::api::run_rules(preset.parse()?, render_config),
    }
}
