//! Renderer module
//!
//! Renders ResultSet to different output formats: text, jsonl, json, md

use crate::core::model::{Kind, ResultItem, ResultSet};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Jsonl,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for result sets
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a result set to a string
    pub fn render(&self, result_set: &ResultSet) -> String {
        match self.config.format {
            OutputFormat::Text => self.render_text(result_set),
            OutputFormat::Jsonl => self.render_jsonl(result_set),
            OutputFormat::Json => self.render_json(result_set),
            OutputFormat::Markdown => self.render_markdown(result_set),
        }
    }

    /// Render as plain lines, one per item
    fn render_text(&self, result_set: &ResultSet) -> String {
        result_set
            .items
            .iter()
            .map(|item| match item.kind {
                Kind::Rule => {
                    let mut line = item.rule.clone().unwrap_or_default();
                    if let Some(n) = item.replacements {
                        line.push_str(&format!(" [{}]", n));
                    }
                    if let Some(excerpt) = &item.excerpt {
                        line.push_str(&format!(": {}", excerpt));
                    }
                    line
                }
                Kind::Summary => item.excerpt.clone().unwrap_or_default(),
                Kind::Error => item
                    .errors
                    .iter()
                    .map(|e| format!("error[{}]: {}", e.code, e.message))
                    .collect::<Vec<_>>()
                    .join("\n"),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, result_set: &ResultSet) -> String {
        result_set
            .items
            .iter()
            .filter_map(|item| {
                if self.config.pretty {
                    serde_json::to_string_pretty(item).ok()
                } else {
                    serde_json::to_string(item).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json(&self, result_set: &ResultSet) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Render as Markdown
    fn render_markdown(&self, result_set: &ResultSet) -> String {
        let mut output = String::new();

        let mut rules = Vec::new();
        let mut summaries = Vec::new();
        let mut errors = Vec::new();

        for item in &result_set.items {
            match item.kind {
                Kind::Rule => rules.push(item),
                Kind::Summary => summaries.push(item),
                Kind::Error => errors.push(item),
            }
        }

        if !errors.is_empty() {
            output.push_str("## Errors\n\n");
            for item in errors {
                for error in &item.errors {
                    output.push_str(&format!("- **{}**: {}\n", error.code, error.message));
                }
            }
            output.push('\n');
        }

        if !summaries.is_empty() {
            output.push_str("## Summary\n\n");
            for item in summaries {
                self.render_summary_md(&mut output, item);
            }
            output.push('\n');
        }

        if !rules.is_empty() {
            output.push_str("## Rules\n\n");
            output.push_str("| rule | replacements | details |\n");
            output.push_str("|---|---|---|\n");
            for item in rules {
                output.push_str(&format!(
                    "| `{}` | {} | {} |\n",
                    item.rule.as_deref().unwrap_or("-"),
                    item.replacements
                        .map(|n| n.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                    item.excerpt
                        .as_deref()
                        .unwrap_or("")
                        .replace('|', "\\|")
                        .replace('\n', " "),
                ));
            }
            output.push('\n');
        }

        output
    }

    fn render_summary_md(&self, output: &mut String, item: &ResultItem) {
        if let Some(path) = &item.path {
            output.push_str(&format!("### `{}`\n\n", path));
        }
        if let Some(excerpt) = &item.excerpt {
            output.push_str(&format!("{}\n\n", excerpt));
        }
        if let Some(n) = item.replacements {
            output.push_str(&format!("- replacements: {}\n", n));
        }
        output.push_str(&format!("- changed: {}\n", item.meta.changed));
        if item.meta.dry_run {
            output.push_str("- dry run: file not written\n");
        }
        if let Some(residual) = item.meta.residual.filter(|r| *r > 0) {
            output.push_str(&format!(
                "\n> ⚠️ {} feature-flag reference(s) remain\n",
                residual
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Meta, ReportError, ResultItem};

    fn renderer(format: OutputFormat) -> Renderer {
        Renderer::with_config(RenderConfig::with_pretty(format, false))
    }

    fn sample_set() -> ResultSet {
        let mut result_set = ResultSet::new();
        result_set.push(
            ResultItem::rule("canvas-area", "Collapse the CanvasArea conditional")
                .with_replacements(1),
        );
        result_set.push(
            ResultItem::summary("app/page.tsx", 1)
                .with_excerpt("✅ Cleaned up page.tsx")
                .with_meta(Meta {
                    changed: true,
                    ..Meta::default()
                }),
        );
        result_set
    }

    #[test]
    fn test_render_text() {
        let output = renderer(OutputFormat::Text).render(&sample_set());
        assert_eq!(
            output,
            "canvas-area [1]: Collapse the CanvasArea conditional\n✅ Cleaned up page.tsx"
        );
    }

    #[test]
    fn test_render_text_error() {
        let mut set = ResultSet::new();
        set.push(ResultItem::error(ReportError::new("UNMATCHED_RULES", "x")));
        assert_eq!(
            renderer(OutputFormat::Text).render(&set),
            "error[UNMATCHED_RULES]: x"
        );
    }

    #[test]
    fn test_render_jsonl() {
        let output = renderer(OutputFormat::Jsonl).render(&sample_set());
        assert_eq!(output.lines().count(), 2);
        assert!(output.contains("\"kind\":\"rule\""));
        assert!(output.contains("\"kind\":\"summary\""));
    }

    #[test]
    fn test_render_json() {
        let output = renderer(OutputFormat::Json).render(&sample_set());
        assert!(output.starts_with('['));
        assert!(output.ends_with(']'));
    }

    #[test]
    fn test_render_markdown() {
        let output = renderer(OutputFormat::Markdown).render(&sample_set());
        assert!(output.contains("## Summary"));
        assert!(output.contains("### `app/page.tsx`"));
        assert!(output.contains("| `canvas-area` | 1 |"));
        assert!(!output.contains("## Errors"));
    }

    #[test]
    fn test_render_markdown_escapes_pipes() {
        let mut set = ResultSet::new();
        set.push(ResultItem::rule("r", "a|b"));
        let output = renderer(OutputFormat::Markdown).render(&set);
        assert!(output.contains("| `r` | - | a\\|b |"));
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSONL".parse::<OutputFormat>().unwrap(), OutputFormat::Jsonl);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(
            "markdown".parse::<OutputFormat>().unwrap(),
            OutputFormat::Markdown
        );
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
