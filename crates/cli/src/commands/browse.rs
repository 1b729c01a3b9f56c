use rigcheck_core::compat::browse::browse;
use rigcheck_core::config::LoadOptions;
use rigcheck_core::domain::Slot;
use rigcheck_core::errors::ApplicationError;
use serde::Serialize;

use crate::commands::{load_context, CommandResult, PartView, SelectionArgs};

const COMMAND: &str = "browse";

#[derive(Debug, Serialize)]
struct BrowseView {
    #[serde(flatten)]
    part: PartView,
    compatible: bool,
}

pub fn run(
    options: &LoadOptions,
    slot: &str,
    search: Option<&str>,
    args: &SelectionArgs,
) -> CommandResult {
    let slot: Slot = match slot.parse() {
        Ok(slot) => slot,
        Err(error) => {
            return CommandResult::from_error(COMMAND, &ApplicationError::from(error).into())
        }
    };
    let context = match load_context(options) {
        Ok(context) => context,
        Err(error) => return CommandResult::from_error(COMMAND, &error),
    };
    let selection = match args.build(&context.bundle) {
        Ok(selection) => selection,
        Err(error) => return CommandResult::from_error(COMMAND, &error.into()),
    };

    let entries: Vec<BrowseView> = browse(slot, &context.bundle.catalog, &selection, search)
        .into_iter()
        .map(|entry| BrowseView {
            part: PartView::new(&entry.component),
            compatible: entry.compatible,
        })
        .collect();
    let compatible = entries.iter().filter(|entry| entry.compatible).count();

    CommandResult::success_with_data(
        COMMAND,
        format!("{} {slot} part(s), {compatible} compatible with the selection", entries.len()),
        &entries,
    )
}
