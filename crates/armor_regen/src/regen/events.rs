//! Regen events — вход плагина от хост-симуляции и shop
//!
//! # Architecture
//!
//! Хост (игровой сервер / shop adapter) шлёт один поток `RegenEvent`,
//! плагин читает его одной системой в порядке отправки. Своего event
//! loop у плагина нет.
//!
//! Порядок внутри кадра сохраняется: buy → MapChanged = пустой registry,
//! sell → buy = новый state.
//!
//! **Shop callbacks:**
//! - `ShopItemBought` → acquire (профиль из каталога)
//! - `ShopItemSold` → release
//! - `ShopItemToggled` → state 1: acquire заново, state 0: release
//!
//! **Simulation:**
//! - `ArmorDamaged` → активировать регенерацию
//! - `ClientDisconnected` → release слота
//! - `RegenEvent::MapChanged` → очистить всё + остановить ticker
//! - `RegenEvent::MapStarted` → перезапустить ticker

use bevy::prelude::*;

use crate::shop::ShopItemId;

// ============================================================================
// RegenEvent
// ============================================================================

/// Вход плагина от хоста, в порядке dispatch'а хоста
#[derive(Event, Debug, Clone)]
pub enum RegenEvent {
    ItemBought(ShopItemBought),
    ItemSold(ShopItemSold),
    ItemToggled(ShopItemToggled),
    ArmorDamaged(ArmorDamaged),
    ClientDisconnected(ClientDisconnected),
    /// Смена карты (STOP_ON_MAPCHANGE)
    MapChanged,
    /// Новая карта загружена, ticker снова тикает
    MapStarted,
}

impl From<ShopItemBought> for RegenEvent {
    fn from(event: ShopItemBought) -> Self {
        Self::ItemBought(event)
    }
}

impl From<ShopItemSold> for RegenEvent {
    fn from(event: ShopItemSold) -> Self {
        Self::ItemSold(event)
    }
}

impl From<ShopItemToggled> for RegenEvent {
    fn from(event: ShopItemToggled) -> Self {
        Self::ItemToggled(event)
    }
}

impl From<ArmorDamaged> for RegenEvent {
    fn from(event: ArmorDamaged) -> Self {
        Self::ArmorDamaged(event)
    }
}

impl From<ClientDisconnected> for RegenEvent {
    fn from(event: ClientDisconnected) -> Self {
        Self::ClientDisconnected(event)
    }
}

// ============================================================================
// Simulation Events
// ============================================================================

/// Игрок получил урон (player_hurt)
///
/// Активирует регенерацию только при `dmg_armor > 0`.
#[derive(Debug, Clone)]
pub struct ArmorDamaged {
    pub player: Entity,
    pub dmg_armor: u32,
}

/// Игрок отключился — слот освобождается
#[derive(Debug, Clone)]
pub struct ClientDisconnected {
    pub slot: usize,
}

// ============================================================================
// Shop Events
// ============================================================================

/// Покупка предмета (OnClientBuyItem)
#[derive(Debug, Clone)]
pub struct ShopItemBought {
    pub player: Entity,
    pub item_id: ShopItemId,
    pub category: String,
    /// Ключ записи каталога (unique name предмета)
    pub key: String,
    pub buy_price: i32,
    pub sell_price: i32,
    pub duration: i32,
    pub count: i32,
}

/// Продажа предмета (OnClientSellItem)
#[derive(Debug, Clone)]
pub struct ShopItemSold {
    pub player: Entity,
    pub item_id: ShopItemId,
    pub key: String,
    pub sell_price: i32,
}

/// Включение/выключение купленного предмета (OnClientToggleItem)
#[derive(Debug, Clone)]
pub struct ShopItemToggled {
    pub player: Entity,
    pub item_id: ShopItemId,
    pub key: String,
    /// 1 = включён, 0 = выключен
    pub state: i32,
}
