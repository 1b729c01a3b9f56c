use rigcheck_core::compat::pricing::{build_summary, format_price};
use rigcheck_core::compat::{
    AssessmentInput, BuildAdvisor, BuildAssessment, DefaultCompatibilityRuntime,
};
use rigcheck_core::config::LoadOptions;
use serde::Serialize;

use crate::commands::{load_context, CommandResult, PartView, SelectionArgs};

const COMMAND: &str = "check";

#[derive(Debug, Serialize)]
struct CheckReport {
    matched_preset: Option<String>,
    selection: Vec<PartView>,
    total_price_display: String,
    assessment: BuildAssessment,
    summary: String,
}

pub fn run(options: &LoadOptions, args: &SelectionArgs) -> CommandResult {
    let context = match load_context(options) {
        Ok(context) => context,
        Err(error) => return CommandResult::from_error(COMMAND, &error),
    };
    let bundle = &context.bundle;
    let selection = match args.build(bundle) {
        Ok(selection) => selection,
        Err(error) => return CommandResult::from_error(COMMAND, &error.into()),
    };

    let runtime = DefaultCompatibilityRuntime::default();
    let assessment = runtime.assess(AssessmentInput {
        selection: &selection,
        catalog: &bundle.catalog,
        presets: &bundle.presets,
    });

    let message = format!(
        "score {} ({}): {} issue(s), {} warning(s), {} strength(s)",
        assessment.score,
        assessment.score_band.label(),
        assessment.findings.issues.len(),
        assessment.findings.warnings.len(),
        assessment.findings.strengths.len()
    );
    let report = CheckReport {
        matched_preset: bundle.presets.matching(&selection).map(|preset| preset.id.0.clone()),
        selection: PartView::from_selection(&selection),
        total_price_display: format_price(assessment.total_price),
        summary: build_summary(&selection, assessment.score),
        assessment,
    };

    CommandResult::success_with_data(COMMAND, message, &report)
}
