use rigcheck_core::compat::suggestions::{DeterministicSuggestionEngine, SuggestionEngine};
use rigcheck_core::config::LoadOptions;
use rigcheck_core::domain::Slot;
use serde::Serialize;

use crate::commands::{load_context, CommandResult, PartView, SelectionArgs};

const COMMAND: &str = "suggest";

#[derive(Debug, Serialize)]
struct SuggestionView {
    slot: Slot,
    title: String,
    reason: String,
    items: Vec<PartView>,
}

pub fn run(options: &LoadOptions, args: &SelectionArgs) -> CommandResult {
    let context = match load_context(options) {
        Ok(context) => context,
        Err(error) => return CommandResult::from_error(COMMAND, &error),
    };
    let selection = match args.build(&context.bundle) {
        Ok(selection) => selection,
        Err(error) => return CommandResult::from_error(COMMAND, &error.into()),
    };

    let groups: Vec<SuggestionView> = DeterministicSuggestionEngine
        .suggest(&selection, &context.bundle.catalog)
        .into_iter()
        .map(|group| SuggestionView {
            slot: group.slot,
            title: group.title,
            reason: group.reason,
            items: group.items.iter().map(PartView::new).collect(),
        })
        .collect();

    let message = if groups.is_empty() {
        "no suggestions for the current selection".to_string()
    } else {
        format!("{} suggestion group(s)", groups.len())
    };
    CommandResult::success_with_data(COMMAND, message, &groups)
}
