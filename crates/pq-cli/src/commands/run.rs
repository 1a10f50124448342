use std::path::Path;

use colored::Colorize;

use pq_engine::SimEventKind;

/// Advance the saved character for `ticks` ticks, report, and save it back.
pub fn run(
    save_path: &Path,
    ticks: u64,
    tick_ms: u64,
    seed: u64,
    content: Option<&Path>,
    show_events: bool,
) -> Result<(), String> {
    let save = super::load_save(save_path)?;
    let mut character = save.character;

    // The RNG is not saved; mixing in the task count keeps resumed runs from
    // replaying the same rolls.
    let mut sim = super::build_simulation(seed.wrapping_add(character.tasks), content)?;

    let level_before = character.level();
    let act_before = character.act;
    let completed = sim.run(&mut character, ticks, tick_ms);

    println!(
        "  {} {} {}",
        "Ran".bold(),
        character.traits.name.bold(),
        format!("({ticks} ticks of {tick_ms} ms, seed={seed})").dimmed()
    );
    println!(
        "  {completed} tasks completed, {} events logged",
        sim.events().len()
    );
    println!(
        "  Level {level_before} -> {}, {} -> {}",
        character.level(),
        act_label(act_before),
        act_label(character.act)
    );
    println!("  Now: {}", character.caption);
    println!();

    if show_events {
        println!("  {}", "Event Log".bold().underline());
        println!();
        for event in sim.events().events() {
            let task_label = format!("[task {:>4}]", event.task_number).dimmed();
            let desc = colorize_event(&event.kind, &event.description);
            println!("  {task_label} {desc}");
        }
        if sim.events().is_empty() {
            println!("  {}", "(no events)".dimmed());
        }
        println!();
    } else {
        let notable: Vec<_> = sim
            .events()
            .events()
            .iter()
            .filter(|e| {
                matches!(
                    e.kind,
                    SimEventKind::LevelUp { .. }
                        | SimEventKind::QuestCompleted { .. }
                        | SimEventKind::ActCompleted { .. }
                )
            })
            .collect();
        if !notable.is_empty() {
            println!("  {}", "Notable Events".bold().underline());
            for event in notable {
                println!(
                    "  {:>5}  {}",
                    event.kind.label().to_uppercase().yellow().bold(),
                    event.description
                );
            }
            println!();
        }
    }

    super::write_save(save_path, character)?;
    println!("  Saved to {}", save_path.display());
    Ok(())
}

fn act_label(act: u32) -> String {
    if act == 0 {
        "Prologue".to_string()
    } else {
        format!("Act {}", pq_core::roman::to_roman(i64::from(act)))
    }
}

fn colorize_event(kind: &SimEventKind, description: &str) -> colored::ColoredString {
    match kind {
        SimEventKind::TaskStarted { .. } => description.normal(),
        SimEventKind::LootWon { .. } | SimEventKind::ItemSold { .. } => description.yellow(),
        SimEventKind::EquipmentGained { .. } => description.cyan(),
        SimEventKind::LevelUp { .. } => description.green().bold(),
        SimEventKind::SpellLearned { .. } | SimEventKind::StatRaised { .. } => {
            description.green()
        }
        SimEventKind::QuestCompleted { .. } => description.blue(),
        SimEventKind::ActCompleted { .. } | SimEventKind::CinematicQueued { .. } => {
            description.magenta().bold()
        }
    }
}
