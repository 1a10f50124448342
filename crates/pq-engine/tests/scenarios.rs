//! Engine scenario tests.
use pq_content::ScriptedContent;
use pq_core::{CharacterState, Loot, Monster, QueuedTask, Stats, Task, Traits};
use pq_engine::{EngineConfig, Simulation, create_initial_state, hydrate, hydrate_in_place, level_up_time};

fn sim() -> Simulation<ScriptedContent> {
    Simulation::new(ScriptedContent::new([]), EngineConfig::default()).unwrap()
}

fn new_character() -> CharacterState {
    let mut content = ScriptedContent::new([]);
    create_initial_state(
        &mut content,
        Traits::new("Garg", "Half Orc", "Ur-Paladin"),
        Stats::from_primes([10, 10, 10, 10, 10, 10]),
    )
    .unwrap()
}

/// A level-1 character whose first bootstrap entry is already running.
fn in_first_vision() -> CharacterState {
    let mut state = new_character();
    let Some(QueuedTask::Narrative { caption, seconds }) = state.queue.pop_front() else {
        panic!("bootstrap queue starts with a narrative entry");
    };
    state.caption = format!("{caption}...");
    state.meters.task.reset(f64::from(seconds) * 1000.0);
    state
}

#[test]
fn ten_second_vision_completes_in_one_call() {
    let mut sim = sim();
    let mut state = in_first_vision();
    assert_eq!(state.meters.task.target, 10_000.0);

    assert!(sim.advance(&mut state, 10_000));
    assert_eq!(state.tasks, 1);
    assert_eq!(
        state.caption,
        "Much is revealed about that wise old bastard you'd underestimated..."
    );
    assert_eq!(state.meters.task.position, 0.0);
    assert_eq!(state.queue.len(), 3);
}

#[test]
fn full_pack_goes_to_market() {
    let mut sim = sim();
    let mut state = new_character();
    state.queue.clear();
    state.task = Task::Heading;
    state.add_item("rat tail", 20);
    state.add_item("Gold", 10_000);
    state.meters.task.set_position(state.meters.task.target);

    sim.advance(&mut state, 1);
    assert_eq!(state.task, Task::Market);
    assert_eq!(state.caption, "Heading to market to sell loot");
}

#[test]
fn exact_experience_levels_up_once() {
    let mut sim = sim();
    let mut state = new_character();
    state.queue.clear();
    state.act = 1;
    state.plots.push("Act I".into());
    state.quests.push("Deliver this nail".into());
    state.meters.quest.reset(1000.0);
    state.meters.plot.reset(100_000.0);
    state.task = Task::Kill {
        monster: Monster::new("Goblin", 1, Loot::Drop("ear".into())),
    };
    state.meters.task.reset(6000.0);
    let before = state.meters.experience.target;
    state.meters.experience.set_position(before - 6.0);

    sim.advance(&mut state, 6000);
    assert_eq!(state.level(), 2);
    assert_eq!(state.meters.experience.position, 0.0);
    assert_eq!(state.meters.experience.target, level_up_time(2));
    assert!(state.meters.experience.target > before);
    assert_eq!(state.inventory.find("goblin ear").unwrap().quantity, 1);
}

#[test]
fn plot_entry_opens_act_one() {
    let mut sim = sim();
    let mut state = new_character();
    state.queue.clear();
    state.queue.push_back(QueuedTask::Plot { seconds: 2 });
    state.meters.task.set_position(state.meters.task.target);

    sim.advance(&mut state, 0);
    assert_eq!(state.act, 1);
    assert_eq!(state.meters.plot.target, 21_600.0);
    assert_eq!(state.plots.last().map(String::as_str), Some("Act I"));
    assert_eq!(state.caption, "Loading Act I...");
}

#[test]
fn level_zero_save_is_playable_after_hydration() {
    let mut json = serde_json::to_value(new_character()).unwrap();
    json["traits"]["level"] = serde_json::json!(0);
    let mut state = hydrate(serde_json::from_value(json).unwrap());
    assert_eq!(state.level(), 1);

    let mut sim = sim();
    state.queue.clear();
    state.task = Task::Heading;
    state.meters.task.set_position(state.meters.task.target);
    assert!(sim.advance(&mut state, 1));
    assert!(state.task.is_kill());
}

#[test]
fn hydrating_twice_changes_nothing_more() {
    let mut state = hydrate(new_character());
    state.latest_inventory = Some(0);
    let before = state.clone();
    assert!(hydrate_in_place(&mut state).is_empty());
    assert_eq!(state.latest_inventory, None);
    assert_eq!(state.plots, before.plots);
    assert_eq!(state.inventory, before.inventory);
    assert_eq!(state.meters, before.meters);
}

#[test]
fn events_describe_the_prologue() {
    let mut sim = sim();
    let mut state = new_character();
    sim.run(&mut state, 30, 1000);
    let tasks: Vec<&str> = sim
        .events()
        .events_labelled("task")
        .into_iter()
        .map(|e| e.description.as_str())
        .take(3)
        .collect();
    insta::assert_debug_snapshot!(tasks, @r#"
    [
        "Experiencing an enigmatic and foreboding night vision...",
        "Much is revealed about that wise old bastard you'd underestimated...",
        "A shocking series of events leaves you alone and bewildered, but resolute...",
    ]
    "#);
    assert_eq!(sim.events().events_labelled("act").len(), 1);
}
