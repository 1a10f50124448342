//! Quest completion and new quests.

use pq_content::{Content, Pool};
use tracing::info;

use super::loot::{boring_item, interesting_item, win_equip, win_item, win_spell, win_stat};
use super::monster::monster_from_entry;
use super::text::{definite, indefinite};
use crate::context::EngineContext;
use crate::event::SimEventKind;

/// Finish the active quest and start another.
///
/// The quest meter gets a fresh target of 50 to 149 seconds. If a quest was
/// running, one reward is granted: a spell, equipment, a stat, or an item.
/// The new quest is one of five kinds; exterminate quests remember their
/// monster so encounters can favour it.
pub fn complete_quest<C: Content>(ctx: &mut EngineContext<'_, C>) -> String {
    let target = 50 + ctx.content.random(100);
    ctx.state.meters.quest.reset(target as f64);

    if !ctx.state.quests.is_empty() {
        match ctx.content.random(4) {
            0 => {
                win_spell(ctx);
            }
            1 => {
                win_equip(ctx);
            }
            2 => {
                win_stat(ctx);
            }
            _ => {
                win_item(ctx);
            }
        }
    }

    let keep = ctx.config.quest_log_limit.saturating_sub(1);
    let quests = &mut ctx.state.quests;
    if quests.len() > keep {
        let excess = quests.len() - keep;
        quests.drain(..excess);
    }

    ctx.state.quest_monster = None;
    let level = ctx.level();
    let content = &mut *ctx.content;
    let caption = match content.random(5) {
        0 => {
            let monster = monster_from_entry(&content.pick_closest(Pool::Monsters, level, 4));
            let caption = format!("Exterminate {}", definite(&monster.name, 2));
            ctx.state.quest_monster = Some(monster);
            caption
        }
        1 => format!("Seek {}", definite(&interesting_item(content), 1)),
        2 => format!("Deliver this {}", boring_item(content)),
        3 => format!("Fetch me {}", indefinite(&boring_item(content), 1)),
        _ => {
            let monster = monster_from_entry(&content.pick_closest(Pool::Monsters, level, 2));
            format!("Placate {}", definite(&monster.name, 2))
        }
    };

    ctx.state.quests.push(caption.clone());
    ctx.state.best.quest = caption.clone();
    info!("new quest: {caption}");
    ctx.emit(
        SimEventKind::QuestCompleted {
            next: caption.clone(),
        },
        format!("Quest: {caption}"),
    );
    caption
}
