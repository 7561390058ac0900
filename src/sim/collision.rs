//! Player/blimp collision resolution
//!
//! Bounding-box intersection with a one-shot damage rule: each blimp can
//! damage the player exactly once, on the tick its box first overlaps the
//! player's. The `hit` latch on the blimp enforces at-most-once even if the
//! overlap persists for many ticks. Blimps are resolved in insertion (id)
//! order, so when two blimps connect on the same tick the older one lands
//! first.

use super::motion::apply_fall;
use super::state::{Blimp, GameEvent, Player};
use crate::consts::*;

/// Resolve all pending player/blimp contacts for this tick. Returns the
/// number of fresh hits; cosmetic tween requests are pushed onto `events`.
pub fn resolve_hits(player: &mut Player, blimps: &mut [Blimp], events: &mut Vec<GameEvent>) -> u32 {
    let mut fresh_hits = 0;
    let player_bounds = player.body.bounds();

    for blimp in blimps.iter_mut() {
        if blimp.hit {
            continue;
        }
        if !player_bounds.intersects(&blimp.body.bounds()) {
            continue;
        }

        // Latch first so this blimp can never deal damage again
        blimp.hit = true;
        player.health -= HIT_DAMAGE;
        log::debug!("blimp {} hit player, health now {}", blimp.id, player.health);

        apply_fall(blimp);
        events.push(GameEvent::HitTween { blimp_id: blimp.id });
        fresh_hits += 1;
    }

    fresh_hits
}
