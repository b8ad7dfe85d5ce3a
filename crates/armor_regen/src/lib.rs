//! Armor Regen — покупаемая регенерация брони
//!
//! Игрок покупает предмет в shop → после урона по броне она восстанавливается
//! раз в тик (1 сек) на `armor` единиц, с начальной задержкой `delay` и
//! паузой `interval` между восстановлениями, до потолка 100.
//!
//! Архитектура:
//! - `catalog` — профили из ArmorRegen.json (read-only)
//! - `regen` — registry по слотам, state machine, ticker, Bevy plugin
//! - `shop` — регистрация предметов во внешнем shop
//! - хост-симуляция = Bevy App (игроки = entities, callbacks = `RegenEvent`)

use bevy::prelude::*;

pub mod catalog;
pub mod components;
pub mod config;
pub mod error;
pub mod logger;
pub mod regen;
pub mod shop;

// Re-export базовых типов для удобства
pub use catalog::{CatalogEntry, RegenCatalog, RegenProfile, ShopListing};
pub use components::*;
pub use config::RegenConfig;
pub use error::RegenError;
pub use regen::{
    ArmorDamaged, ClientDisconnected, RegenEvent, RegenPhase, RegenPlugin, RegenRegistry, RegenState, RegenTicker,
    ShopItemBought, ShopItemSold, ShopItemToggled, TickOutcome, ARMOR_CAP, MAX_PLAYER_SLOTS,
};
pub use shop::{register_shop_items, ShopApi, ShopItemId};

use logger::{init_logger, log_info, log_warning};

/// Старт плагина: каталог → предметы в shop → готовый `RegenPlugin`
///
/// Каталог должен быть загружен до регистрации предметов: buy callbacks
/// резолвят ключи через него. Нет конфига → `ConfigMissing`, хост не
/// добавляет плагин (ни предметов, ни таймера).
pub fn init_shop_regen(config: &RegenConfig, shop: &mut dyn ShopApi) -> Result<RegenPlugin, RegenError> {
    let catalog = match RegenCatalog::load(&config.config_path) {
        Ok(catalog) => catalog,
        Err(err) => {
            log_warning(&format!("Armor regen disabled: {}", err));
            return Err(err);
        }
    };

    let registered = register_shop_items(shop, &catalog, config);
    log_info(&format!(
        "Armor regen ready: {} item(s) in category '{}'",
        registered.len(),
        config.category_id
    ));

    Ok(RegenPlugin::new(catalog).with_tick_period(config.tick_period))
}

/// Создаёт minimal Bevy App для headless симуляции (runner, тесты)
pub fn create_headless_app() -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins);

    app
}
