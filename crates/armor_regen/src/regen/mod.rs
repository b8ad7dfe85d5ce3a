//! Armor regeneration module
//!
//! ECS ответственность:
//! - State: RegenRegistry (слоты игроков), RegenTicker, RegenCatalog
//! - Rules: state machine Delaying → Waiting → Restoring
//! - Events: RegenEvent (shop callbacks, урон, disconnect, смена карты)
//!
//! Хост ответственность:
//! - Броня pawn'а (`ArmorValue`), смерть (`Dead`), слоты (`PlayerSlot`)
//! - Доставка shop callbacks и game events как `RegenEvent` в своём порядке

use bevy::prelude::*;

use crate::catalog::RegenCatalog;

pub mod events;
pub mod registry;
pub mod state;
pub mod systems;
pub mod ticker;


// Re-export основных типов
pub use events::*;
pub use registry::{RegenRegistry, MAX_PLAYER_SLOTS};
pub use state::{RegenPhase, RegenState, TickOutcome, ARMOR_CAP};
pub use ticker::{RegenTicker, DEFAULT_TICK_PERIOD, MIN_TICK_PERIOD};

/// Armor Regen Plugin
///
/// Каталог передаётся явно (owned), глобального состояния нет.
///
/// Порядок выполнения (Update, chain):
/// 1. process_regen_events — все события кадра по порядку отправки
/// 2. tick_regen_timer — Time → due тики
/// 3. apply_armor_regen — state machine
pub struct RegenPlugin {
    catalog: RegenCatalog,
    tick_period: f32,
}

impl RegenPlugin {
    pub fn new(catalog: RegenCatalog) -> Self {
        Self {
            catalog,
            tick_period: DEFAULT_TICK_PERIOD,
        }
    }

    /// Период тика в секундах (по умолчанию 1.0)
    pub fn with_tick_period(mut self, seconds: f32) -> Self {
        self.tick_period = seconds;
        self
    }

    pub fn catalog(&self) -> &RegenCatalog {
        &self.catalog
    }
}

impl Plugin for RegenPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.catalog.clone())
            .init_resource::<RegenRegistry>()
            .insert_resource(RegenTicker::new(self.tick_period));

        app.add_event::<RegenEvent>();

        app.add_systems(
            Update,
            (
                // Фаза 1: Event adapter
                systems::process_regen_events,

                // Фаза 2: Tick scheduler
                systems::tick_regen_timer,
                systems::apply_armor_regen,
            )
                .chain(), // Последовательное выполнение
        );
    }
}
