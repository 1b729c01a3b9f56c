use rigcheck_core::compat::pricing::{format_price, total_price};
use rigcheck_core::config::LoadOptions;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::commands::{load_context, CommandResult, PartView};

const COMMAND: &str = "presets";

#[derive(Debug, Serialize)]
struct UnresolvedPart {
    slot: String,
    id: String,
}

#[derive(Debug, Serialize)]
struct PresetView {
    id: String,
    name: String,
    description: String,
    budget: String,
    total_price: Decimal,
    total_price_display: String,
    components: Vec<PartView>,
    unresolved: Vec<UnresolvedPart>,
}

pub fn run(options: &LoadOptions) -> CommandResult {
    let context = match load_context(options) {
        Ok(context) => context,
        Err(error) => return CommandResult::from_error(COMMAND, &error),
    };
    let bundle = &context.bundle;

    let presets: Vec<PresetView> = bundle
        .presets
        .iter()
        .map(|preset| {
            let selection = preset.apply(&bundle.catalog);
            let total = total_price(&selection);
            PresetView {
                id: preset.id.0.clone(),
                name: preset.name.clone(),
                description: preset.description.clone(),
                budget: preset.budget.clone(),
                total_price: total,
                total_price_display: format_price(total),
                components: PartView::from_selection(&selection),
                unresolved: preset
                    .unresolved(&bundle.catalog)
                    .into_iter()
                    .map(|(slot, id)| UnresolvedPart { slot: slot.to_string(), id: id.0 })
                    .collect(),
            }
        })
        .collect();

    CommandResult::success_with_data(COMMAND, format!("{} preset(s)", presets.len()), &presets)
}
