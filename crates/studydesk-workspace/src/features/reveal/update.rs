use std::collections::VecDeque;

use crate::effects::UiEffect;
use crate::features::messages::{MessageStore, Turn, TurnStatus};

use super::state::{RevealId, RevealRun, RevealState};

/// Appends an empty AI turn carrying `status` and schedules the first tick.
///
/// An unfinished earlier run is flushed first so its turn ends up complete.
pub fn start_reveal(
    reveal: &mut RevealState,
    store: &mut MessageStore,
    full_text: &str,
    status: TurnStatus,
) -> Vec<UiEffect> {
    if let Some(previous) = reveal.active.take() {
        flush(previous, store);
    }

    let generation = store.generation();
    let index = store.push(Turn::ai(String::new(), status));
    let pending = full_text.chars().collect::<VecDeque<_>>();
    if pending.is_empty() {
        return vec![];
    }

    let id = reveal.next_id();
    tracing::debug!(run = id.0, index, chars = pending.len(), "reveal started");
    reveal.active = Some(RevealRun {
        id,
        generation,
        index,
        pending,
    });
    vec![UiEffect::ScheduleRevealTick { run: id }]
}

/// Advances `run` by one character.
///
/// Ticks for a run that is no longer active, or whose generation has been
/// superseded, change nothing.
pub fn on_tick(reveal: &mut RevealState, store: &mut MessageStore, run: RevealId) -> Vec<UiEffect> {
    let Some(active) = reveal.active.as_mut() else {
        return vec![];
    };
    if active.id != run {
        return vec![];
    }
    if active.generation != store.generation() {
        reveal.active = None;
        return vec![];
    }

    let Some(ch) = active.pending.pop_front() else {
        reveal.active = None;
        return vec![];
    };
    if !store.append_char(active.generation, active.index, ch) {
        reveal.active = None;
        return vec![];
    }

    if active.pending.is_empty() {
        tracing::debug!(run = run.0, "reveal finished");
        reveal.active = None;
        vec![]
    } else {
        vec![UiEffect::ScheduleRevealTick { run }]
    }
}

fn flush(run: RevealRun, store: &mut MessageStore) {
    for ch in run.pending {
        if !store.append_char(run.generation, run.index, ch) {
            break;
        }
    }
}
