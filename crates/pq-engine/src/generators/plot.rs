//! Story progress: acts and the interludes between them.

use pq_content::Content;
use pq_core::QueuedTask;
use tracing::info;

use super::loot::{boring_item, win_equip, win_item};
use super::monster::{impressive_guy, named_monster};
use crate::context::EngineContext;
use crate::event::SimEventKind;

/// Plot meter target, in seconds, while act `act` runs.
pub fn act_duration(act: u32) -> f64 {
    3600.0 * (1.0 + 5.0 * f64::from(act))
}

/// Advance to the next act and return its caption.
///
/// From the second act on, finishing an act also grants an item and a
/// piece of equipment.
pub fn complete_act<C: Content>(ctx: &mut EngineContext<'_, C>) -> String {
    ctx.state.act += 1;
    let act = ctx.state.act;
    ctx.state.meters.plot.reset(act_duration(act));

    let caption = format!("Act {}", ctx.content.to_roman(i64::from(act)));
    ctx.state.plots.push(caption.clone());
    ctx.state.best.plot = caption.clone();
    info!("{caption} begins");
    ctx.emit(SimEventKind::ActCompleted { act }, format!("{caption} begins"));

    if act > 1 {
        win_item(ctx);
        win_equip(ctx);
    }
    caption
}

/// Queue one of three interludes, then the plot entry that ends the act.
///
/// Returns the number of entries queued.
pub fn interplot_cinematic<C: Content>(ctx: &mut EngineContext<'_, C>) -> usize {
    let level = ctx.level();
    let act = i64::from(ctx.state.act);
    let content = &mut *ctx.content;
    let mut beats = Vec::new();

    match content.random(3) {
        0 => {
            beats.push(QueuedTask::narrative(
                1,
                "Exhausted, you arrive at a friendly oasis in a hostile land",
            ));
            beats.push(QueuedTask::narrative(2, "You greet old friends and meet new allies"));
            beats.push(QueuedTask::narrative(
                2,
                "You are privy to a council of powerful do-gooders",
            ));
            beats.push(QueuedTask::narrative(1, "There is much to be done. You are chosen!"));
        }
        1 => {
            beats.push(QueuedTask::narrative(
                1,
                "Your quarry is in sight, but a mighty enemy bars your path!",
            ));
            let nemesis = named_monster(content, level + 3);
            beats.push(QueuedTask::narrative(
                4,
                format!("A desperate struggle commences with {nemesis}"),
            ));
            let mut s = content.random(3);
            let rounds = 1 + content.random(act + 1);
            for _ in 0..rounds {
                s += 1 + content.random(2);
                let caption = match s % 3 {
                    0 => format!("Locked in grim combat with {nemesis}"),
                    1 => format!("{nemesis} seems to have the upper hand"),
                    _ => format!("You seem to gain the advantage over {nemesis}"),
                };
                beats.push(QueuedTask::narrative(2, caption));
            }
            beats.push(QueuedTask::narrative(
                3,
                format!("Victory! {nemesis} is slain! Exhausted, you lose consciousness"),
            ));
            beats.push(QueuedTask::narrative(
                2,
                "You awake in a friendly place, but the road awaits",
            ));
        }
        _ => {
            let patron = impressive_guy(content);
            beats.push(QueuedTask::narrative(
                2,
                format!("Oh sweet relief! You've reached the kind protection of {patron}"),
            ));
            beats.push(QueuedTask::narrative(
                3,
                format!("There is rejoicing, and an unnerving encounter with {patron} in private"),
            ));
            beats.push(QueuedTask::narrative(
                2,
                format!("You forget your {} and go back to get it", boring_item(content)),
            ));
            beats.push(QueuedTask::narrative(
                2,
                "What's this!? You overhear something shocking!",
            ));
            beats.push(QueuedTask::narrative(
                2,
                format!("Could {patron} be a dirty double-dealer?"),
            ));
            beats.push(QueuedTask::narrative(
                3,
                "Who can possibly be trusted with this news!? -- Oh yes, of course",
            ));
        }
    }
    beats.push(QueuedTask::Plot { seconds: 1 });

    let count = beats.len();
    ctx.state.queue.extend(beats);
    ctx.emit(
        SimEventKind::CinematicQueued { beats: count },
        format!("{count} story beats queued"),
    );
    count
}
