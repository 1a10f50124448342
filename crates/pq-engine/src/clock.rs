//! The progression clock.

use pq_content::Content;

use crate::context::EngineContext;
use crate::dequeue::dequeue;
use crate::generators::{complete_quest, interplot_cinematic};
use crate::leveling::level_up;

/// Feed `elapsed_ms` into the active task. Returns true if it completed.
///
/// Time only accumulates while the task is unfinished. Once the task meter
/// reaches its target the completion cascade runs exactly once and any
/// surplus time is dropped, so a single huge tick never resolves more than
/// one task.
pub fn advance<C: Content>(ctx: &mut EngineContext<'_, C>, elapsed_ms: u64) -> bool {
    let task = &mut ctx.state.meters.task;
    if !task.is_complete() {
        task.advance(elapsed_ms as f64);
    }
    if !ctx.state.meters.task.is_complete() {
        return false;
    }
    complete_task(ctx);
    true
}

/// Resolve the finished task and select the next one.
///
/// Fights feed experience, the quest (once the prologue is over), and the
/// plot. During the prologue every task feeds the plot.
pub fn complete_task<C: Content>(ctx: &mut EngineContext<'_, C>) {
    let seconds = ctx.state.meters.task.target / 1000.0;
    ctx.state.tasks += 1;
    ctx.state.elapsed += seconds;
    ctx.state.meters.task.set_position(0.0);

    let gain = ctx.state.task.is_kill();
    if gain {
        ctx.state.meters.experience.advance(seconds);
        if ctx.state.meters.experience.is_complete() {
            level_up(ctx);
        }
    }

    if gain && ctx.state.act >= 1 {
        ctx.state.meters.quest.advance(seconds);
        if ctx.state.meters.quest.is_complete() || ctx.state.quests.is_empty() {
            complete_quest(ctx);
        }
    }

    if gain || ctx.state.act == 0 {
        ctx.state.meters.plot.advance(seconds);
        if ctx.state.meters.plot.is_complete() {
            interplot_cinematic(ctx);
        }
    }

    dequeue(ctx);
}
