use crate::cli::commands::shell::initial_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::Summary;
use crate::errors::AppResult;
use crate::models::SlotField;
use crate::ui::render::render_summary;
use crate::utils::time::parse_slot_range;
use tracing::debug;

/// One-shot computation from command-line slots.
pub fn handle(cmd: &Commands, cfg: &Config, colors: bool) -> AppResult<()> {
    if let Commands::Calc {
        rate,
        currency,
        slots,
        json,
    } = cmd
    {
        // Validate every range before touching the store.
        let ranges = slots
            .iter()
            .map(|s| parse_slot_range(s))
            .collect::<AppResult<Vec<_>>>()?;

        let mut store = initial_store(rate.as_ref(), currency.as_ref(), cfg);
        let first = store.slots()[0].id;

        for (i, (start, end)) in ranges.iter().enumerate() {
            let id = if i == 0 { first } else { store.add_slot() };
            store.update_slot(id, SlotField::Start, start);
            store.update_slot(id, SlotField::End, end);
        }

        let summary = Summary::compute(&store, &cfg.locale.units());
        debug!(
            minutes = summary.total_minutes,
            cost = summary.total_cost,
            "calculation done"
        );

        if *json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            print!("{}", render_summary(&summary, colors));
        }
    }

    Ok(())
}
