//! The `history`, `stats`, and `reset` commands.

use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};

use crate::state::AppState;

/// Print recorded interactions, newest first.
pub async fn show_history(
    state: &AppState,
    limit: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let mut records = state.coach.history().await?;
    records.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
    if let Some(limit) = limit {
        records.truncate(limit);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("  No history yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Date", "Name", "Mood", "Mode", "Insight", "Challenge", "Affirmation"]);

    for record in &records {
        table.add_row(vec![
            Cell::new(record.recorded_at.format("%Y-%m-%d %H:%M")),
            Cell::new(&record.name),
            Cell::new(&record.mood),
            Cell::new(&record.mode),
            Cell::new(&record.insight),
            Cell::new(&record.micro_challenge),
            Cell::new(&record.affirmation),
        ]);
    }

    println!("{table}");
    Ok(())
}

/// Print record count, current streak, and the mood frequency bars.
pub async fn show_stats(state: &AppState, json: bool) -> anyhow::Result<()> {
    let summary = state.coach.summary().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} records, {} day streak",
        console::style(summary.total_records).bold(),
        console::style(summary.streak_days).bold()
    );

    if !summary.mood_frequency.is_empty() {
        println!();
        println!("  {}", console::style("Mood frequency").cyan().bold());
        let max = summary
            .mood_frequency
            .iter()
            .map(|(_, count)| *count)
            .max()
            .unwrap_or(1);
        for (mood, count) in &summary.mood_frequency {
            let width = (count * 30).div_ceil(max);
            println!(
                "  {:<12} {} {}",
                mood,
                console::style("█".repeat(width)).green(),
                count
            );
        }
    }
    println!();

    Ok(())
}

/// Wipe the history; requires `--force` to skip the safety stop.
pub async fn reset(state: &AppState, force: bool, json: bool) -> anyhow::Result<()> {
    if !force {
        anyhow::bail!("refusing to wipe history without --force");
    }

    state.coach.reset().await?;

    if json {
        println!("{}", serde_json::json!({ "status": "reset" }));
    } else {
        println!("  History wiped.");
    }
    Ok(())
}
