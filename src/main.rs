//! flagstrip - A one-shot codemod for feature-flag cleanup
//!
//! flagstrip provides:
//! - Ordered regex rules that collapse flag-gated JSX conditionals
//! - Removal of the debug flag panel and the imports it leaves behind
//! - Two rule presets (lenient / strict)
//! - Optional structured reports (jsonl/json/md)

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod rewrite;
mod rules;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
