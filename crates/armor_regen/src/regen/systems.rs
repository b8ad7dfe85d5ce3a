//! Regen systems
//!
//! # Systems
//!
//! **Event Adapter** (RegenEvent → registry):
//! - `process_regen_events` — buy / sell / toggle / damage / disconnect /
//!   map lifecycle, один reader, порядок хоста
//!
//! **Tick Scheduler:**
//! - `tick_regen_timer` — Time delta → RegenTicker
//! - `apply_armor_regen` — state machine для каждого живого pawn'а

use bevy::prelude::*;

use crate::catalog::RegenCatalog;
use crate::components::{ArmorValue, Dead, PlayerSlot};
use crate::error::RegenError;
use crate::logger::{log, log_error, log_info, log_warning};
use crate::regen::events::*;
use crate::regen::registry::RegenRegistry;
use crate::regen::state::TickOutcome;
use crate::regen::ticker::RegenTicker;
use crate::shop::ShopItemId;

/// Слот игрока по entity (None + warning если у entity нет PlayerSlot)
fn resolve_slot(players: &Query<&PlayerSlot>, player: Entity, source: &str) -> Option<usize> {
    match players.get(player) {
        Ok(slot) => Some(slot.0),
        Err(_) => {
            log_warning(&format!("{}: entity {:?} has no PlayerSlot, ignored", source, player));
            None
        }
    }
}

/// Профиль из каталога → свежий RegenState в слоте
fn acquire_from_catalog(
    registry: &mut RegenRegistry,
    catalog: &RegenCatalog,
    slot: usize,
    key: &str,
    item_id: ShopItemId,
) -> Result<(), RegenError> {
    let profile = catalog.lookup(key)?;
    registry.acquire(slot, profile, item_id)?;

    log(&format!(
        "🛡️ Armor regen '{}' acquired by slot {} (+{} / delay {} / interval {})",
        key, slot, profile.armor, profile.delay, profile.interval
    ));
    Ok(())
}

// ============================================================================
// Event Adapter
// ============================================================================

/// Все события хоста за кадр, строго в порядке отправки
///
/// Ошибки отдельного события логируются, остальные события кадра
/// обрабатываются дальше.
pub fn process_regen_events(
    mut events: EventReader<RegenEvent>,
    players: Query<&PlayerSlot>,
    catalog: Res<RegenCatalog>,
    mut registry: ResMut<RegenRegistry>,
    mut ticker: ResMut<RegenTicker>,
) {
    for event in events.read() {
        match event {
            RegenEvent::ItemBought(bought) => on_item_bought(bought, &players, &catalog, &mut registry),
            RegenEvent::ItemSold(sold) => on_item_sold(sold, &players, &mut registry),
            RegenEvent::ItemToggled(toggled) => on_item_toggled(toggled, &players, &catalog, &mut registry),
            RegenEvent::ArmorDamaged(damaged) => on_armor_damaged(damaged, &players, &mut registry),
            RegenEvent::ClientDisconnected(disconnected) => {
                if registry.release(disconnected.slot).is_some() {
                    log(&format!("🔌 Slot {} disconnected, armor regen released", disconnected.slot));
                }
            }
            RegenEvent::MapChanged => {
                registry.clear_all();
                ticker.stop();
                log_info("🗺️ Map changed: armor regen cleared, ticker stopped");
            }
            RegenEvent::MapStarted => {
                ticker.restart();
                log_info("🗺️ Map started: armor regen ticker running");
            }
        }
    }
}

/// Покупка: acquire если ключ есть в каталоге, иначе UnresolvedProfile
///
/// При ошибке предмет остаётся у игрока в shop, но бонуса нет.
fn on_item_bought(
    event: &ShopItemBought,
    players: &Query<&PlayerSlot>,
    catalog: &RegenCatalog,
    registry: &mut RegenRegistry,
) {
    let Some(slot) = resolve_slot(players, event.player, "ShopItemBought") else {
        return;
    };

    if let Err(err) = acquire_from_catalog(registry, catalog, slot, &event.key, event.item_id) {
        log_error(&err.to_string());
    }
}

fn on_item_sold(event: &ShopItemSold, players: &Query<&PlayerSlot>, registry: &mut RegenRegistry) {
    let Some(slot) = resolve_slot(players, event.player, "ShopItemSold") else {
        return;
    };

    if registry.release(slot).is_some() {
        log(&format!("💰 Armor regen '{}' sold by slot {}", event.key, slot));
    }
}

/// Toggle: 1 → acquire заново (countdown'ы из профиля), 0 → release
fn on_item_toggled(
    event: &ShopItemToggled,
    players: &Query<&PlayerSlot>,
    catalog: &RegenCatalog,
    registry: &mut RegenRegistry,
) {
    let Some(slot) = resolve_slot(players, event.player, "ShopItemToggled") else {
        return;
    };

    match event.state {
        1 => {
            if let Err(err) = acquire_from_catalog(registry, catalog, slot, &event.key, event.item_id) {
                log_error(&err.to_string());
            }
        }
        0 => {
            registry.release(slot);
            log(&format!("⏸️ Armor regen '{}' disabled by slot {}", event.key, slot));
        }
        other => {
            log_warning(&format!("ShopItemToggled: unknown state {} for '{}'", other, event.key));
        }
    }
}

/// Урон по броне → active = true (countdown'ы не сбрасываются)
///
/// Урон до покупки в том же кадре ничего не активирует: state ещё нет.
fn on_armor_damaged(event: &ArmorDamaged, players: &Query<&PlayerSlot>, registry: &mut RegenRegistry) {
    if event.dmg_armor == 0 {
        return;
    }

    // Урон по игроку без PlayerSlot (боты хоста и т.п.) — не наш случай, молча
    let Ok(slot) = players.get(event.player) else {
        return;
    };

    if let Some(state) = registry.get_mut(slot.0) {
        state.activate();
    }
}

// ============================================================================
// Tick Scheduler
// ============================================================================

/// Продвинуть ticker на delta кадра
pub fn tick_regen_timer(time: Res<Time>, mut ticker: ResMut<RegenTicker>) {
    ticker.tick(time.delta());
}

/// Один проход state machine на каждый due тик
///
/// Pawn'ы без `ArmorValue` или с `Dead` пропускаются: их state не трогаем,
/// countdown'ы продолжатся когда pawn снова валиден.
pub fn apply_armor_regen(
    mut ticker: ResMut<RegenTicker>,
    mut registry: ResMut<RegenRegistry>,
    mut pawns: Query<(&PlayerSlot, &mut ArmorValue), Without<Dead>>,
) {
    let due = ticker.take_due();

    for _ in 0..due {
        for (slot, mut armor) in pawns.iter_mut() {
            let Some(state) = registry.get_mut(slot.0) else {
                continue;
            };

            let mut value = armor.0;
            let outcome = state.tick(&mut value);
            armor.set_if_neq(ArmorValue(value));

            if outcome == TickOutcome::Capped {
                log(&format!("✅ Slot {} armor fully restored ({})", slot.0, value));
            }
        }
    }
}
