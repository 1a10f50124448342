use std::path::PathBuf;

use colored::Colorize;

use pq_content::{Content, Pool, StdContent, field};
use pq_core::Traits;
use pq_engine::Simulation;

/// Flags of `pq new`.
pub struct NewOptions {
    /// Requested name; generated when absent.
    pub name: Option<String>,
    /// Requested race, matched case-insensitively; random when absent.
    pub race: Option<String>,
    /// Requested class, matched case-insensitively; random when absent.
    pub class: Option<String>,
    /// RNG seed for the name, picks, and stat rolls.
    pub seed: u64,
    /// Save file to write.
    pub output: PathBuf,
    /// Content tables file; the built-in tables when absent.
    pub content: Option<PathBuf>,
    /// Overwrite an existing save.
    pub force: bool,
}

/// Roll a character from `opts` and write its save file.
pub fn run(opts: &NewOptions) -> Result<(), String> {
    if opts.output.exists() && !opts.force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            opts.output.display()
        ));
    }

    let mut sim = super::build_simulation(opts.seed, opts.content.as_deref())?;

    let name = match &opts.name {
        Some(name) => name.clone(),
        None => sim.content_mut().generate_name(),
    };
    let race = choose(&mut sim, Pool::Races, opts.race.as_deref())?;
    let class = choose(&mut sim, Pool::Classes, opts.class.as_deref())?;

    let stats = sim.roll_stats();
    let character = sim
        .create_character(Traits::new(name, race, class), stats)
        .map_err(|e| format!("cannot create character: {e}"))?;

    let save = super::write_save(&opts.output, character)?;
    let traits = &save.character.traits;

    println!(
        "  {} {} the {} {}",
        "Created".green().bold(),
        traits.name.bold(),
        traits.race,
        traits.class
    );
    let rolled: Vec<String> = save
        .character
        .stats
        .iter()
        .map(|(stat, value)| format!("{stat} {value}"))
        .collect();
    println!("  {}", rolled.join(", ").dimmed());
    println!("  Saved to {}", opts.output.display());
    Ok(())
}

/// Resolve a requested race or class against the tables, or pick one at random.
fn choose(
    sim: &mut Simulation<StdContent>,
    pool: Pool,
    requested: Option<&str>,
) -> Result<String, String> {
    match requested {
        Some(wanted) => sim
            .content()
            .tables()
            .names(pool)
            .into_iter()
            .find(|name| name.eq_ignore_ascii_case(wanted.trim()))
            .map(str::to_string)
            .ok_or_else(|| format!("unknown {}: \"{wanted}\"", singular(pool))),
        None => Ok(field(&sim.content_mut().pick(pool), 0).to_string()),
    }
}

fn singular(pool: Pool) -> &'static str {
    match pool {
        Pool::Races => "race",
        Pool::Classes => "class",
        _ => "entry",
    }
}
