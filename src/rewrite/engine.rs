//! Cleanup engine - runs an ordered rule list over text, no I/O

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rules::Rule;

/// Feature-flag references that should be gone after a complete cleanup
static RESIDUAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bFeatureFlags\.|<DebugFeatureFlags\b").expect("Invalid RESIDUAL_RE regex")
});

/// What a single rule did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub id: String,
    pub description: String,
    pub replacements: usize,
}

/// Result of running every rule over a text
#[derive(Debug, Clone)]
pub struct Cleanup {
    pub original: String,
    pub output: String,
    pub outcomes: Vec<RuleOutcome>,
    /// Feature-flag references left in the output
    pub residual: usize,
}

impl Cleanup {
    pub fn changed(&self) -> bool {
        self.original != self.output
    }

    pub fn total_replacements(&self) -> usize {
        self.outcomes.iter().map(|o| o.replacements).sum()
    }

    /// Ids of rules that matched nothing
    pub fn unmatched(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| o.replacements == 0)
            .map(|o| o.id.as_str())
            .collect()
    }
}

/// Count feature-flag references in text
pub fn count_residual(text: &str) -> usize {
    RESIDUAL_RE.find_iter(text).count()
}

/// Apply `rules` in order; each rule sees the previous rule's output
pub fn clean(text: &str, rules: &[Rule]) -> Cleanup {
    let mut current = text.to_string();
    let mut outcomes = Vec::with_capacity(rules.len());

    for rule in rules {
        let (next, replacements) = rule.apply(&current);
        current = next;
        outcomes.push(RuleOutcome {
            id: rule.id.to_string(),
            description: rule.description.to_string(),
            replacements,
        });
    }

    Cleanup {
        original: text.to_string(),
        residual: count_residual(&current),
        output: current,
        outcomes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::rule::ReplaceScope;
    use crate::rules::Preset;

    const PAGE: &str = "\
'use client'

import { useState } from 'react'
import { FeatureFlags } from '@/lib/feature-flags'
import { DebugFeatureFlags } from '@/components/DebugFeatureFlags'
import { CodeEditorPanel } from '@/components/CodeEditorPanel'

export default function Page() {
  const [code, setCode] = useState('')
  return (
    <div>
      <main>
        {/* Use new Zustand-based CodeEditor when enabled */}
        {FeatureFlags.isZustandCanvasEnabled() ? (
          <>
            {console.log('zustand editor')}
            <CodeEditorPanel />
          </>
        ) : (
          <>
            <CodeEditorPanel code={code} onChange={setCode} />
          </>
        )}
        {/* Use new Zustand-based CanvasArea */}
        {FeatureFlags.isZustandCanvasEnabled() ? (
          <>
            {console.log('zustand canvas')}
            <CanvasArea />
          </>
        ) : (
          <>
            {console.log('legacy canvas')}
            <CanvasArea code={code} />
          </>
        )}
        {/* Use new Zustand-based ControlsPanel */}
        {FeatureFlags.isZustandControlsEnabled() ? (
          <>
            {console.log('zustand controls')}
            <ControlsPanel />
          </>
        ) : (
          <>
            {console.log('legacy controls')}
            <ControlsPanel onChange={setCode} />
          </>
        )}
      </main>
      {/* Debug feature flags */}
      <DebugFeatureFlags />
    </div>
  )
}
";

    const CLEANED: &str = "\
'use client'

import { useState } from 'react'
import { CodeEditorPanel } from '@/components/CodeEditorPanel'

export default function Page() {
  const [code, setCode] = useState('')
  return (
    <div>
      <main>
        <CodeEditorPanel />
        <CanvasArea />
        <ControlsPanel />
      </main>
    </div>
  )
}
";

    #[test]
    fn test_strict_cleans_every_construct() {
        let rules = Preset::Strict.rules().unwrap();
        let cleanup = clean(PAGE, &rules);

        assert_eq!(cleanup.output, CLEANED);
        assert!(cleanup.changed());
        assert_eq!(cleanup.total_replacements(), 6);
        assert!(cleanup.unmatched().is_empty());
        assert_eq!(cleanup.residual, 0);
    }

    #[test]
    fn test_second_run_is_noop() {
        for preset in [Preset::Lenient, Preset::Strict] {
            let rules = preset.rules().unwrap();
            let cleanup = clean(CLEANED, &rules);

            assert_eq!(cleanup.output, CLEANED);
            assert!(!cleanup.changed());
            assert_eq!(cleanup.total_replacements(), 0);
            assert_eq!(cleanup.unmatched().len(), 5);
        }
    }

    #[test]
    fn test_unrelated_text_untouched() {
        let text = "const flags = loadFlags()\n// FeatureFlag docs\n";
        let rules = Preset::Lenient.rules().unwrap();
        let cleanup = clean(text, &rules);
        assert_eq!(cleanup.output, text);
        assert_eq!(cleanup.residual, 0);
    }

    #[test]
    fn test_outcomes_follow_rule_order() {
        let rules = Preset::Strict.rules().unwrap();
        let cleanup = clean(PAGE, &rules);
        let counts: Vec<_> = cleanup
            .outcomes
            .iter()
            .map(|o| (o.id.as_str(), o.replacements))
            .collect();
        assert_eq!(
            counts,
            vec![
                ("code-editor-panel", 1),
                ("canvas-area", 1),
                ("controls-panel", 1),
                ("debug-feature-flags", 1),
                ("unused-imports", 2),
            ]
        );
    }

    #[test]
    fn test_rules_see_previous_output() {
        let rules = vec![
            Rule::new("one", "", &[r"a"], "b", ReplaceScope::All).unwrap(),
            Rule::new("two", "", &[r"b"], "c", ReplaceScope::All).unwrap(),
        ];
        let cleanup = clean("a", &rules);
        assert_eq!(cleanup.output, "c");
        assert_eq!(cleanup.total_replacements(), 2);
    }

    #[test]
    fn test_residual_counts_leftovers() {
        assert_eq!(count_residual("FeatureFlags.isX() && <DebugFeatureFlags />"), 2);
        assert_eq!(count_residual("<DebugFeatureFlagsPanel />"), 0);
        assert_eq!(count_residual("MyFeatureFlags.x"), 0);
    }
}
