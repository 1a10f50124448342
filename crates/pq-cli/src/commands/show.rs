use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use pq_core::{CharacterState, ProgressMeter};

/// Quests listed on the sheet, most recent last.
const RECENT_QUESTS: usize = 5;

/// Print the character sheet of a save file.
pub fn run(save_path: &Path) -> Result<(), String> {
    let save = super::load_save(save_path)?;
    let state = &save.character;
    let traits = &state.traits;

    // Header
    println!(
        "  {} [{} {}, level {}]",
        traits.name.bold(),
        traits.race,
        traits.class,
        traits.level
    );
    println!(
        "  {}",
        format!("saved {}", save.saved_at.format("%Y-%m-%d %H:%M:%S UTC")).dimmed()
    );
    println!();

    print_stats(state);
    print_equipment(state);
    print_spells(state);
    print_inventory(state);
    print_progress(state);
    print_story(state);

    Ok(())
}

fn print_stats(state: &CharacterState) {
    println!("  {}", "Stats".bold().underline());
    println!();
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Stat", "Value"]);
    for (stat, value) in state.stats.iter() {
        table.add_row(vec![stat.to_string(), value.to_string()]);
    }
    println!("{table}");
    println!();
}

fn print_equipment(state: &CharacterState) {
    println!("  {}", "Equipment".bold().underline());
    println!();
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Slot", "Item"]);
    for (slot, item) in state.equips.iter() {
        table.add_row(vec![slot.to_string(), item.to_string()]);
    }
    println!("{table}");
    println!();
}

fn print_spells(state: &CharacterState) {
    println!("  {}", "Spell Book".bold().underline());
    println!();
    if state.spells.is_empty() {
        println!("  {}", "(no spells)".dimmed());
        println!();
        return;
    }
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Spell", "Rank"]);
    for spell in state.spells.iter() {
        table.add_row(vec![spell.name.clone(), spell.rank.clone()]);
    }
    println!("{table}");
    println!();
}

fn print_inventory(state: &CharacterState) {
    println!("  {}", "Inventory".bold().underline());
    println!();
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Item", "Qty"]);
    for item in state.inventory.iter() {
        table.add_row(vec![item.name.clone(), item.quantity.to_string()]);
    }
    println!("{table}");
    println!();
}

fn print_progress(state: &CharacterState) {
    println!("  {}", "Progress".bold().underline());
    println!();
    let meters = &state.meters;
    println!("  Experience  {}", format_bar(&meters.experience));
    println!("  Encumbrance {}", format_bar(&meters.encumbrance));
    println!("  Plot        {}", format_bar(&meters.plot));
    println!("  Quest       {}", format_bar(&meters.quest));
    println!("  Task        {}", format_bar(&meters.task));
    println!("  {}", state.caption.italic());
    println!();
}

fn print_story(state: &CharacterState) {
    println!("  {}", "Plot Development".bold().underline());
    for (idx, plot) in state.plots.iter().enumerate() {
        let done = idx + 1 < state.plots.len();
        println!("  {} {plot}", checkbox(done));
    }
    println!();

    println!("  {}", "Quests".bold().underline());
    if state.quests.is_empty() {
        println!("  {}", "(no quests yet)".dimmed());
    }
    let skip = state.quests.len().saturating_sub(RECENT_QUESTS);
    for (idx, quest) in state.quests.iter().enumerate().skip(skip) {
        let done = idx + 1 < state.quests.len();
        println!("  {} {quest}", checkbox(done));
    }
    println!();
    println!(
        "  {}",
        format!(
            "{} tasks completed, {:.0} s of adventuring",
            state.tasks, state.elapsed
        )
        .dimmed()
    );
}

fn checkbox(done: bool) -> colored::ColoredString {
    if done {
        "[x]".green()
    } else {
        "[ ]".normal()
    }
}

fn format_bar(meter: &ProgressMeter) -> String {
    let fraction = meter.fraction();
    let pct = (fraction * 100.0) as u32;
    let filled = (fraction * 20.0).round() as usize;
    let empty = 20_usize.saturating_sub(filled);
    let bar = format!("{}{}", "#".repeat(filled), "-".repeat(empty));
    format!(
        "[{}] {:>3}%  {}",
        bar.green(),
        pct,
        format!("{:.0}/{:.0}", meter.position, meter.target).dimmed()
    )
}
