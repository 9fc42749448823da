//! Rewrite API - read the target, clean it, write it back, report

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::log::Verbosity;
use crate::core::model::{Meta, ReportError, ResultItem, ResultSet};
use crate::core::paths::{display_path, file_name, resolve_target};
use crate::core::render::{OutputFormat, RenderConfig, Renderer};
use crate::core::util::{hash_bytes, pluralize};
use crate::rewrite::engine::{self, Cleanup};
use crate::rules::Preset;

/// Default target, relative to root
pub const DEFAULT_TARGET: &str = "app/page.tsx";

/// Failures raised by the safety switches after the cleanup ran
#[derive(Debug, Error)]
pub enum CleanupError {
    #[error("{path}: {pending} pending (run without --check to apply)")]
    PendingChanges { path: String, pending: String },

    #[error("{path}: rules matched nothing: {}", .rules.join(", "))]
    UnmatchedRules { path: String, rules: Vec<String> },
}

impl CleanupError {
    pub fn code(&self) -> &'static str {
        match self {
            CleanupError::PendingChanges { .. } => "PENDING_CHANGES",
            CleanupError::UnmatchedRules { .. } => "UNMATCHED_RULES",
        }
    }
}

/// Options for a cleanup run
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplyOptions {
    pub preset: Preset,
    /// Compute and report, never write
    pub dry_run: bool,
    /// Like dry_run, but fail when the file would change
    pub check: bool,
    /// Fail when any rule made zero replacements
    pub require_all: bool,
}

impl ApplyOptions {
    fn writes(&self) -> bool {
        !(self.dry_run || self.check)
    }
}

/// Everything a cleanup run produced
#[derive(Debug)]
pub struct ApplyReport {
    pub path: PathBuf,
    pub cleanup: Cleanup,
    /// One-line human message (confirmation or dry-run notice)
    pub message: String,
    pub result_set: ResultSet,
    pub failure: Option<CleanupError>,
}

/// Run the preset over `file` and return the report.
///
/// The file is written back unconditionally unless `dry_run`/`check` is set,
/// even when no rule matched.
pub fn apply_to_result_set(root: &Path, file: &Path, options: &ApplyOptions) -> Result<ApplyReport> {
    let rules = options.preset.rules()?;
    let path = resolve_target(root, file);
    let shown = display_path(&path, root);

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let cleanup = engine::clean(&content, &rules);

    if options.writes() {
        fs::write(&path, &cleanup.output)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
    }

    let total = cleanup.total_replacements();
    let failure = if options.check && cleanup.changed() {
        Some(CleanupError::PendingChanges {
            path: shown.clone(),
            pending: pluralize(total, "replacement"),
        })
    } else if options.require_all && !cleanup.unmatched().is_empty() {
        Some(CleanupError::UnmatchedRules {
            path: shown.clone(),
            rules: cleanup.unmatched().iter().map(|s| s.to_string()).collect(),
        })
    } else {
        None
    };

    let message = if options.writes() {
        options.preset.confirmation(&file_name(&path))
    } else {
        format!(
            "🔍 Dry run: {} pending in {}",
            pluralize(total, "replacement"),
            file_name(&path)
        )
    };

    let mut result_set: ResultSet = cleanup
        .outcomes
        .iter()
        .map(|o| {
            ResultItem::rule(&o.id, &o.description)
                .with_path(&shown)
                .with_replacements(o.replacements)
        })
        .collect();

    result_set.push(
        ResultItem::summary(&shown, total)
            .with_excerpt(&message)
            .with_meta(Meta {
                hash_before: Some(hash_bytes(cleanup.original.as_bytes())),
                hash_after: Some(hash_bytes(cleanup.output.as_bytes())),
                size: Some(cleanup.output.len() as u64),
                residual: Some(cleanup.residual),
                changed: cleanup.changed(),
                dry_run: !options.writes(),
            }),
    );

    if let Some(err) = &failure {
        result_set.push(
            ResultItem::error(ReportError::new(err.code(), err.to_string())).with_path(&shown),
        );
    }

    Ok(ApplyReport {
        path,
        cleanup,
        message,
        result_set,
        failure,
    })
}

/// Run the apply command
pub fn run_apply(
    root: &Path,
    file: &Path,
    options: ApplyOptions,
    config: RenderConfig,
    log: Verbosity,
) -> Result<()> {
    log.detail(format!("preset: {}", options.preset));
    log.detail(format!("target: {}", resolve_target(root, file).display()));

    let report = apply_to_result_set(root, file, &options)?;

    for outcome in &report.cleanup.outcomes {
        log.detail(format!(
            "{:<20} {}",
            outcome.id,
            pluralize(outcome.replacements, "replacement")
        ));
    }
    if report.cleanup.residual > 0 {
        log.warn(format!(
            "{} feature-flag reference(s) remain in {}",
            report.cleanup.residual,
            report.path.display()
        ));
    }

    match config.format {
        OutputFormat::Text => {
            if report.failure.is_none() && !log.is_quiet() {
                println!("{}", report.message);
            }
        }
        _ => {
            let renderer = Renderer::with_config(config);
            println!("{}", renderer.render(&report.result_set));
        }
    }

    match report.failure {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

/// Build the rule listing for a preset
pub fn rules_to_result_set(preset: Preset) -> Result<ResultSet> {
    let rules = preset.rules()?;

    Ok(rules
        .iter()
        .map(|rule| {
            let mut excerpt = format!("{} (replace {})", rule.description, rule.scope().as_str());
            for pattern in rule.pattern_sources() {
                excerpt.push_str(&format!("\n  pattern: {}", pattern));
            }
            excerpt.push_str(&format!("\n  replacement: {:?}", rule.replacement()));
            ResultItem::rule(rule.id, excerpt)
        })
        .collect())
}

/// Run the rules command
pub fn run_rules(preset: Preset, config: RenderConfig) -> Result<()> {
    let result_set = rules_to_result_set(preset)?;

    let renderer = Renderer::with_config(config);
    println!("{}", renderer.render(&result_set));

    Ok(())
}
