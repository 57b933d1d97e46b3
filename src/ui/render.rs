//! Text rendering of a computed `Summary`.

use crate::core::summary::Summary;
use crate::utils::colors::{CYAN, GREEN, colorize_duration, colorize_optional, paint};
use crate::utils::formatting::{bold, pad_right};
use crate::utils::table::{Column, Table};

const EMPTY_TIME: &str = "--:--";

fn time_cell(value: &str, colors: bool) -> String {
    if value.is_empty() {
        colorize_optional(EMPTY_TIME, colors)
    } else {
        value.to_string()
    }
}

/// Only filled slots show a duration; the rest stay blank.
fn duration_cell(duration: &str, filled: bool, colors: bool) -> String {
    if filled {
        colorize_duration(duration, true, colors)
    } else {
        String::new()
    }
}

/// Slot list with per-slot duration.
pub fn render_slots(summary: &Summary, colors: bool) -> String {
    let mut table = Table::new(vec![
        Column::new("#"),
        Column::new("ID"),
        Column::new("Start"),
        Column::new("End"),
        Column::new("Duration"),
    ]);

    for row in &summary.slots {
        table.add_row(vec![
            row.position.to_string(),
            row.id.to_string(),
            time_cell(&row.start, colors),
            time_cell(&row.end, colors),
            duration_cell(&row.duration, row.filled, colors),
        ]);
    }

    let mut out = format!(
        "Work slots ({} of {} filled)\n",
        summary.filled_slots, summary.total_slots
    );
    out.push_str(&table.render());
    out
}

/// Totals block ending with the amount due.
pub fn render_totals(summary: &Summary, colors: bool) -> String {
    let label = |s: &str| pad_right(s, 14);
    let due = if colors {
        bold(&paint(&summary.cost, GREEN, true))
    } else {
        summary.cost.clone()
    };

    let mut out = String::new();
    out.push_str(&paint("Summary", CYAN, colors));
    out.push('\n');
    out.push_str(&format!("  {}{}\n", label("Filled slots:"), summary.filled_slots));
    out.push_str(&format!("  {}{}\n", label("Total time:"), summary.total_duration));
    out.push_str(&format!("  {}{}\n", label("Rate:"), summary.rate));
    out.push_str(&format!("  {}{}\n", label("Total due:"), due));
    out
}

pub fn render_summary(summary: &Summary, colors: bool) -> String {
    format!(
        "{}\n{}",
        render_slots(summary, colors),
        render_totals(summary, colors)
    )
}
