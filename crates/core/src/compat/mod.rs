//! The compatibility engine: rule evaluation, scoring and suggestions over a selection.
//!
//! Every operation here is a pure function of its inputs. `CompatibilityRuntime`
//! composes the three engines and is the entry point the CLI uses.

pub mod browse;
pub mod predicates;
pub mod pricing;
pub mod rules;
pub mod scoring;
pub mod suggestions;

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::domain::preset::PresetRegistry;
use crate::domain::selection::Selection;
use crate::domain::slot::Slot;

use self::{
    rules::{DeterministicRuleEvaluator, Findings, RuleEvaluator, SlotStatus},
    scoring::{DeterministicScoringEngine, ScoreBand, ScoreInput, ScoringEngine},
    suggestions::{DeterministicSuggestionEngine, SuggestionEngine, SuggestionGroup},
};

#[derive(Clone, Copy, Debug)]
pub struct AssessmentInput<'a> {
    pub selection: &'a Selection,
    pub catalog: &'a Catalog,
    pub presets: &'a PresetRegistry,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuildAssessment {
    pub findings: Findings,
    pub score: u8,
    pub score_band: ScoreBand,
    pub total_price: Decimal,
    pub suggestions: Vec<SuggestionGroup>,
    pub slot_status: BTreeMap<Slot, SlotStatus>,
}

pub trait BuildAdvisor: Send + Sync {
    fn assess(&self, input: AssessmentInput<'_>) -> BuildAssessment;
}

pub type DefaultCompatibilityRuntime = CompatibilityRuntime<
    DeterministicRuleEvaluator,
    DeterministicScoringEngine,
    DeterministicSuggestionEngine,
>;

pub struct CompatibilityRuntime<E, S, G> {
    rule_evaluator: E,
    scoring_engine: S,
    suggestion_engine: G,
}

impl<E, S, G> CompatibilityRuntime<E, S, G> {
    pub fn new(rule_evaluator: E, scoring_engine: S, suggestion_engine: G) -> Self {
        Self { rule_evaluator, scoring_engine, suggestion_engine }
    }
}

impl Default for DefaultCompatibilityRuntime {
    fn default() -> Self {
        Self::new(
            DeterministicRuleEvaluator,
            DeterministicScoringEngine::default(),
            DeterministicSuggestionEngine,
        )
    }
}

impl<E, S, G> BuildAdvisor for CompatibilityRuntime<E, S, G>
where
    E: RuleEvaluator,
    S: ScoringEngine,
    G: SuggestionEngine,
{
    fn assess(&self, input: AssessmentInput<'_>) -> BuildAssessment {
        let findings = self.rule_evaluator.evaluate(input.selection);
        let total_price = pricing::total_price(input.selection);
        let score = self.scoring_engine.score(&ScoreInput {
            findings: &findings,
            total_price,
            selection: input.selection,
            presets: input.presets,
        });
        let suggestions = self.suggestion_engine.suggest(input.selection, input.catalog);
        let slot_status = input
            .selection
            .iter()
            .filter(|(_, component)| component.is_some())
            .map(|(slot, _)| (slot, findings.status_for(slot)))
            .collect();

        debug!(
            event_name = "compat.assessed",
            selected_count = findings.selected_count,
            issue_count = findings.issues.len(),
            warning_count = findings.warnings.len(),
            strength_count = findings.strengths.len(),
            suggestion_groups = suggestions.len(),
            score,
            "build assessed"
        );

        BuildAssessment {
            findings,
            score,
            score_band: ScoreBand::from_score(score),
            total_price,
            suggestions,
            slot_status,
        }
    }
}
