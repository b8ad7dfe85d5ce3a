//! Компоненты игрока со стороны хост-симуляции
//!
//! - `PlayerSlot` — индекс игрока (0..MAX_PLAYER_SLOTS), ключ registry
//! - `ArmorValue` — броня pawn'а; нет компонента = нет валидного pawn'а
//! - `Dead` — pawn мёртв, регенерация на нём не тикает

use bevy::prelude::*;

/// Слот игрока (controller), стабилен пока игрок на сервере
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerSlot(pub usize);

/// Броня pawn'а
///
/// Инвариант после regen тика: value ≤ ARMOR_CAP
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArmorValue(pub u32);

/// Компонент-маркер: pawn мёртв
#[derive(Component, Debug)]
pub struct Dead;
