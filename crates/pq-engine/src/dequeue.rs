//! Choosing the next task once the current one completes.
//!
//! The previous task's deferred effect is applied first (loot from a kill,
//! the purchase after haggling, the sale of one inventory row). While the
//! pack still holds anything sellable after a market visit or sale, the next
//! task is another sale. Otherwise the first matching rule wins:
//!
//! 1. a queued story entry,
//! 2. a trip to market when the pack is full,
//! 3. after anything but a fight or the walk out: buy equipment if Gold
//!    covers it, else head to the killing fields,
//! 4. a monster fight.

use pq_content::Content;
use pq_core::{GOLD, Loot, QueuedTask, Task};
use tracing::debug;

use crate::context::EngineContext;
use crate::event::SimEventKind;
use crate::generators::text::indefinite;
use crate::generators::{complete_act, monster_task, win_equip, win_item};

/// Apply the previous task's effect and start the next task.
pub fn dequeue<C: Content>(ctx: &mut EngineContext<'_, C>) {
    let previous = std::mem::take(&mut ctx.state.task);

    match &previous {
        Task::Kill { monster } => match &monster.loot {
            Loot::Special => {
                win_item(ctx);
            }
            Loot::Drop(_) => {
                if let Some(name) = monster.drop_name() {
                    ctx.state.add_item(&name, 1);
                    ctx.emit(
                        SimEventKind::LootWon { item: name.clone() },
                        format!("Looted {name}"),
                    );
                }
            }
            Loot::None => {}
        },
        Task::Buying => {
            let price = ctx.state.equipment_price();
            ctx.state.add_item(GOLD, -price);
            win_equip(ctx);
        }
        Task::Market | Task::Sell => {
            if previous == Task::Sell {
                sell_one(ctx);
            }
            if let Some(item) = ctx.state.inventory.first_sellable() {
                let caption = format!("Selling {}", indefinite(&item.name, item.quantity));
                let duration = ctx.config.sell_ms;
                start_task(ctx, Task::Sell, caption, duration);
                return;
            }
        }
        Task::Scripted | Task::Heading => {}
    }

    if let Some(entry) = ctx.state.queue.pop_front() {
        let duration = entry.duration_ms();
        let text = match entry {
            QueuedTask::Narrative { caption, .. } => caption,
            QueuedTask::Plot { .. } => {
                complete_act(ctx);
                format!("Loading {}", ctx.state.best.plot)
            }
        };
        start_task(ctx, Task::Scripted, format!("{text}..."), duration);
    } else if ctx.state.meters.encumbrance.is_complete() {
        let duration = ctx.config.market_ms;
        start_task(ctx, Task::Market, "Heading to market to sell loot", duration);
    } else if !previous.is_kill() && previous != Task::Heading {
        if ctx.state.gold() > ctx.state.equipment_price() {
            let duration = ctx.config.buying_ms;
            start_task(
                ctx,
                Task::Buying,
                "Negotiating purchase of better equipment",
                duration,
            );
        } else {
            let duration = ctx.config.heading_ms;
            start_task(ctx, Task::Heading, "Heading to the killing fields", duration);
        }
    } else {
        let level = ctx.level();
        let encounter = monster_task(&mut *ctx.content, level, ctx.state.quest_monster.as_ref());
        let duration = u64::try_from(6000 * encounter.level / level).unwrap_or(0);
        let caption = format!("Executing {}", encounter.description);
        start_task(
            ctx,
            Task::Kill {
                monster: encounter.monster,
            },
            caption,
            duration,
        );
    }
}

/// Sell the first non-Gold row. Named items fetch a random premium.
fn sell_one<C: Content>(ctx: &mut EngineContext<'_, C>) {
    let level = ctx.level();
    let Some(item) = ctx.state.take_first_sellable() else {
        return;
    };
    let mut gold = item.quantity * level;
    if item.is_named() {
        gold *= (1 + ctx.content.random_low(10)) * (1 + ctx.content.random_low(level));
    }
    ctx.state.add_item(GOLD, gold);
    ctx.emit(
        SimEventKind::ItemSold {
            item: item.name.clone(),
            gold,
        },
        format!("Sold {} for {gold} gold", indefinite(&item.name, item.quantity)),
    );
}

/// Make `task` active with a fresh meter. Durations below 1 ms become 1 ms.
fn start_task<C: Content>(
    ctx: &mut EngineContext<'_, C>,
    task: Task,
    caption: impl Into<String>,
    duration_ms: u64,
) {
    let caption = caption.into();
    debug!("task {}: {caption} ({duration_ms} ms)", ctx.state.tasks + 1);
    ctx.state.task = task;
    ctx.state.caption = caption.clone();
    ctx.state.meters.task.reset(duration_ms.max(1) as f64);
    ctx.emit(SimEventKind::TaskStarted { caption: caption.clone() }, caption);
}
