use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::rules::Findings;
use crate::domain::preset::PresetRegistry;
use crate::domain::selection::Selection;

/// Weights and thresholds for the compatibility score.
///
/// Price thresholds are in the catalog's currency unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub preset_match_score: u8,
    /// Inclusive lower bound for the premium base.
    pub premium_price: Decimal,
    pub premium_base: i64,
    /// Exclusive lower bound for the high base.
    pub high_price: Decimal,
    pub high_base: i64,
    /// Exclusive lower bound for the mid base.
    pub mid_price: Decimal,
    pub mid_base: i64,
    pub entry_base: i64,
    pub issue_penalty: i64,
    pub warning_penalty: i64,
    pub strength_bonus: i64,
    pub completeness_per_slot: i64,
    pub completeness_cap: i64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            preset_match_score: 95,
            premium_price: Decimal::from(60_000_000),
            premium_base: 95,
            high_price: Decimal::from(40_000_000),
            high_base: 90,
            mid_price: Decimal::from(20_000_000),
            mid_base: 85,
            entry_base: 80,
            issue_penalty: 25,
            warning_penalty: 8,
            strength_bonus: 3,
            completeness_per_slot: 2,
            completeness_cap: 10,
        }
    }
}

impl ScoringPolicy {
    pub fn base_for_price(&self, total_price: Decimal) -> i64 {
        if total_price >= self.premium_price {
            self.premium_base
        } else if total_price > self.high_price {
            self.high_base
        } else if total_price > self.mid_price {
            self.mid_base
        } else {
            self.entry_base
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ScoreInput<'a> {
    pub findings: &'a Findings,
    pub total_price: Decimal,
    pub selection: &'a Selection,
    pub presets: &'a PresetRegistry,
}

pub trait ScoringEngine: Send + Sync {
    fn score(&self, input: &ScoreInput<'_>) -> u8;
}

#[derive(Default)]
pub struct DeterministicScoringEngine {
    policy: ScoringPolicy,
}

impl DeterministicScoringEngine {
    pub fn with_policy(policy: ScoringPolicy) -> Self {
        Self { policy }
    }
}

impl ScoringEngine for DeterministicScoringEngine {
    fn score(&self, input: &ScoreInput<'_>) -> u8 {
        score_with_policy(input, &self.policy)
    }
}

pub fn score(input: &ScoreInput<'_>) -> u8 {
    score_with_policy(input, &ScoringPolicy::default())
}

pub fn score_with_policy(input: &ScoreInput<'_>, policy: &ScoringPolicy) -> u8 {
    let selected_count = input.findings.selected_count;
    if selected_count < 2 {
        return 0;
    }
    if input.presets.matching(input.selection).is_some() {
        return policy.preset_match_score.min(100);
    }

    let findings = input.findings;
    let issues = len_i64(findings.issues.len());
    let warnings = len_i64(findings.warnings.len());
    let strengths = len_i64(findings.strengths.len());
    let completeness =
        (len_i64(selected_count) * policy.completeness_per_slot).min(policy.completeness_cap);

    let raw = policy.base_for_price(input.total_price) - issues * policy.issue_penalty
        - warnings * policy.warning_penalty
        + strengths * policy.strength_bonus
        + completeness;

    u8::try_from(raw.clamp(0, 100)).unwrap_or(0)
}

fn len_i64(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}

/// Coarse label shown next to the score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    InsufficientData,
    NeedsImprovement,
    Average,
    Good,
    Excellent,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => Self::Excellent,
            75..=89 => Self::Good,
            50..=74 => Self::Average,
            25..=49 => Self::NeedsImprovement,
            _ => Self::InsufficientData,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::NeedsImprovement => "Needs improvement",
            Self::InsufficientData => "Insufficient data",
        }
    }
}
