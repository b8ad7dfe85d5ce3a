//! Shop collaborator — внешний магазин, в котором продаётся регенерация
//!
//! Экономика (цены, валюта, инвентарь) целиком на стороне shop.
//! Плагин только:
//! 1. Создаёт категорию
//! 2. Добавляет по предмету на запись каталога
//! 3. Подписывается на buy/sell/toggle callbacks предмета
//!
//! Callbacks приходят обратно как `RegenEvent` (`ItemBought` и т.д.),
//! их доставляет shop adapter хоста.

use crate::catalog::RegenCatalog;
use crate::config::RegenConfig;
use crate::error::RegenError;
use crate::logger::{log, log_error};

/// ID предмета в shop (выдаётся `add_item`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShopItemId(pub i32);

/// Интерфейс внешнего shop
///
/// `add_item` у реального shop асинхронный — adapter хоста дожидается
/// результата сам, для плагина вызов блокирующий.
pub trait ShopApi {
    fn create_category(&mut self, id: &str, label: &str);

    fn add_item(
        &mut self,
        key: &str,
        display_name: &str,
        category: &str,
        price: i32,
        sell_price: i32,
        duration: i32,
    ) -> Result<ShopItemId, RegenError>;

    /// Направить buy/sell/toggle этого предмета в события плагина
    fn set_item_callbacks(&mut self, item_id: ShopItemId);
}

/// Зарегистрировать категорию и все предметы каталога
///
/// Ошибка одного `add_item` логируется, остальные предметы регистрируются.
pub fn register_shop_items(shop: &mut dyn ShopApi, catalog: &RegenCatalog, config: &RegenConfig) -> Vec<ShopItemId> {
    shop.create_category(&config.category_id, &config.category_label);

    let mut registered = Vec::with_capacity(catalog.len());
    for entry in catalog.entries() {
        let listing = &entry.listing;
        let item_id = match shop.add_item(
            &entry.key,
            &listing.name,
            &config.category_id,
            listing.price,
            listing.sell_price,
            listing.duration,
        ) {
            Ok(item_id) => item_id,
            Err(err) => {
                log_error(&format!("Failed to add shop item '{}': {}", entry.key, err));
                continue;
            }
        };

        shop.set_item_callbacks(item_id);
        registered.push(item_id);
        log(&format!("🛒 Registered shop item '{}' as {:?}", entry.key, item_id));
    }

    registered
}
