//! Rule presets
//!
//! Both presets target the same five constructs in the same order:
//! 1. CodeEditor conditional   -> `<CodeEditorPanel />`
//! 2. CanvasArea conditional   -> `<CanvasArea />`
//! 3. ControlsPanel conditional -> `<ControlsPanel />`
//! 4. `{/* Debug feature flags */} <DebugFeatureFlags />` -> removed
//! 5. `FeatureFlags` / `DebugFeatureFlags` imports -> removed
//!
//! `lenient` accepts any branch body and collapses only the first conditional of
//! each kind. `strict` requires the fragment + `console.log` shape of each branch
//! and collapses every occurrence.

use super::rule::{ReplaceScope, Rule, RuleError};

const LENIENT_CODE_EDITOR: &str = r"\{/\* Use new Zustand-based CodeEditor.*?\*/\}\s*\{FeatureFlags\.isZustandCanvasEnabled\(\) \? \([\s\S]*?\) : \([\s\S]*?\)\}";
const LENIENT_CANVAS_AREA: &str = r"\{/\* Use new Zustand-based CanvasArea.*?\*/\}\s*\{FeatureFlags\.isZustandCanvasEnabled\(\) \? \([\s\S]*?\) : \([\s\S]*?\)\}";
const LENIENT_CONTROLS_PANEL: &str = r"\{/\* Use new Zustand-based ControlsPanel.*?\*/\}\s*\{FeatureFlags\.isZustandControlsEnabled\(\) \? \([\s\S]*?\) : \([\s\S]*?\)\}";

const STRICT_CODE_EDITOR: &str = r"\{/\* Use new Zustand-based CodeEditor.*?\*/\}\s*\{FeatureFlags\.isZustandCanvasEnabled\(\) \? \(\s*<>\s*\{console\.log.*?\}\s*<CodeEditorPanel />\s*</>\s*\) : \(\s*<>\s*.*?<CodeEditorPanel[\s\S]*?/>\s*</>\s*\)\}";
const STRICT_CANVAS_AREA: &str = r"\{/\* Use new Zustand-based CanvasArea.*?\*/\}\s*\{FeatureFlags\.isZustandCanvasEnabled\(\) \? \(\s*<>\s*\{console\.log.*?\}\s*<CanvasArea />\s*</>\s*\) : \(\s*<>\s*\{console\.log.*?\}\s*<CanvasArea[\s\S]*?/>\s*</>\s*\)\}";
const STRICT_CONTROLS_PANEL: &str = r"\{/\* Use new Zustand-based ControlsPanel.*?\*/\}\s*\{FeatureFlags\.isZustandControlsEnabled\(\) \? \(\s*<>\s*\{console\.log.*?\}\s*<ControlsPanel />\s*</>\s*\) : \(\s*<>\s*\{console\.log.*?\}\s*<ControlsPanel[\s\S]*?/>\s*</>\s*\)\}";

const DEBUG_FEATURE_FLAGS: &str = r"\s*\{/\* Debug feature flags \*/\}\s*<DebugFeatureFlags />";
const FEATURE_FLAGS_IMPORT: &str = r"import \{ FeatureFlags \} from '@/lib/feature-flags'\n";
const DEBUG_FEATURE_FLAGS_IMPORT: &str =
    r"import \{ DebugFeatureFlags \} from '@/components/DebugFeatureFlags'\n";

/// Which flavour of the cleanup rules to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    #[default]
    Lenient,
    Strict,
}

impl std::str::FromStr for Preset {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lenient" | "v2" => Ok(Preset::Lenient),
            "strict" | "page" => Ok(Preset::Strict),
            _ => Err(RuleError::UnknownPreset(s.to_string())),
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Preset {
    pub fn name(self) -> &'static str {
        match self {
            Preset::Lenient => "lenient",
            Preset::Strict => "strict",
        }
    }

    /// Build the five rules, in application order
    pub fn rules(self) -> Result<Vec<Rule>, RuleError> {
        let (code_editor, canvas_area, controls_panel, block_scope) = match self {
            Preset::Lenient => (
                LENIENT_CODE_EDITOR,
                LENIENT_CANVAS_AREA,
                LENIENT_CONTROLS_PANEL,
                ReplaceScope::First,
            ),
            Preset::Strict => (
                STRICT_CODE_EDITOR,
                STRICT_CANVAS_AREA,
                STRICT_CONTROLS_PANEL,
                ReplaceScope::All,
            ),
        };

        Ok(vec![
            Rule::new(
                "code-editor-panel",
                "Collapse the CodeEditor feature-flag conditional",
                &[code_editor],
                "<CodeEditorPanel />",
                block_scope,
            )?,
            Rule::new(
                "canvas-area",
                "Collapse the CanvasArea feature-flag conditional",
                &[canvas_area],
                "<CanvasArea />",
                block_scope,
            )?,
            Rule::new(
                "controls-panel",
                "Collapse the ControlsPanel feature-flag conditional",
                &[controls_panel],
                "<ControlsPanel />",
                block_scope,
            )?,
            Rule::new(
                "debug-feature-flags",
                "Remove the DebugFeatureFlags panel",
                &[DEBUG_FEATURE_FLAGS],
                "",
                ReplaceScope::All,
            )?,
            Rule::new(
                "unused-imports",
                "Remove the FeatureFlags and DebugFeatureFlags imports",
                &[FEATURE_FLAGS_IMPORT, DEBUG_FEATURE_FLAGS_IMPORT],
                "",
                ReplaceScope::All,
            )?,
        ])
    }

    /// Message printed after a successful cleanup of `file_name`
    pub fn confirmation(self, file_name: &str) -> String {
        match self {
            Preset::Lenient => format!("✅ Cleaned up V2 references in {}", file_name),
            Preset::Strict => format!("✅ Cleaned up {}", file_name),
        }
    }
}
