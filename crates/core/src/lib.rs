pub mod catalog;
pub mod compat;
pub mod config;
pub mod domain;
pub mod errors;

pub use catalog::{default_catalog, load_catalog, parse_catalog, Catalog, CatalogBundle};
pub use compat::{
    browse::{browse, BrowseEntry},
    pricing::{build_summary, format_price, total_price},
    rules::{Finding, Findings, RuleEvaluator, Severity, SlotStatus},
    scoring::{ScoreBand, ScoringEngine, ScoringPolicy},
    suggestions::{SuggestionEngine, SuggestionGroup},
    AssessmentInput, BuildAdvisor, BuildAssessment, CompatibilityRuntime,
    DefaultCompatibilityRuntime,
};
pub use domain::component::{Component, ComponentId, ComponentSpec};
pub use domain::preset::{Preset, PresetId, PresetRegistry};
pub use domain::selection::Selection;
pub use domain::slot::Slot;
pub use errors::{ApplicationError, DomainError};
