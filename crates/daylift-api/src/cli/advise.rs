//! The `advise` command: one coaching interaction from the terminal.

use anyhow::Context;

use daylift_types::advice::AdviceRequest;

use crate::state::AppState;

/// Flag values as typed by the user, before enum parsing.
pub struct AdviseArgs {
    pub name: String,
    pub mood: String,
    pub topic: String,
    pub mode: String,
    pub tone: String,
    pub length: String,
}

/// Run one coaching interaction and print the result.
pub async fn run(state: &AppState, args: AdviseArgs, json: bool) -> anyhow::Result<()> {
    let request = AdviceRequest {
        name: args.name,
        mood: args.mood,
        topic: args.topic,
        mode: args.mode.parse().map_err(anyhow::Error::msg)?,
        tone: args.tone.parse().map_err(anyhow::Error::msg)?,
        length: args.length.parse().map_err(anyhow::Error::msg)?,
    };

    let advice = state
        .coach
        .advise(&request)
        .await
        .context("advice generation failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&advice)?);
        return Ok(());
    }

    println!();
    print_section("💡", "Insight", &advice.insight);
    print_section("🔥", "Micro-Challenge", &advice.micro_challenge);
    print_section("🌈", "Affirmation", &advice.affirmation);
    println!();

    Ok(())
}

fn print_section(emoji: &str, title: &str, body: &str) {
    println!(
        "  {} {}",
        console::style(emoji).bold(),
        console::style(title).cyan().bold()
    );
    if body.is_empty() {
        println!("  {}", console::style("(nothing extracted)").dim());
    } else {
        println!("  {body}");
    }
    println!();
}
