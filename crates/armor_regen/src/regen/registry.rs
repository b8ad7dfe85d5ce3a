//! Entity Regen Registry — fixed-size таблица состояний по слотам игроков
//!
//! Массив `Option<RegenState>` вместо HashMap: слот игрока — маленький
//! ограниченный индекс, аллокаций на покупку/продажу нет.
//!
//! Registry никогда не трогает броню pawn'а — только свои слоты.

use bevy::prelude::*;

use crate::catalog::RegenProfile;
use crate::error::RegenError;
use crate::regen::state::RegenState;
use crate::shop::ShopItemId;

/// Максимум одновременных игроков (слоты 0..=64)
pub const MAX_PLAYER_SLOTS: usize = 65;

#[derive(Resource, Debug)]
pub struct RegenRegistry {
    slots: [Option<RegenState>; MAX_PLAYER_SLOTS],
}

impl Default for RegenRegistry {
    fn default() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }
}

impl RegenRegistry {
    /// Установить новое состояние в слот
    ///
    /// Старое состояние (если было) заменяется целиком, без merge.
    pub fn acquire(&mut self, slot: usize, profile: RegenProfile, item_id: ShopItemId) -> Result<(), RegenError> {
        let entry = self.slots.get_mut(slot).ok_or(RegenError::SlotOutOfRange { slot })?;
        *entry = Some(RegenState::new(profile, item_id));
        Ok(())
    }

    /// Очистить слот (no-op если пуст или вне диапазона)
    pub fn release(&mut self, slot: usize) -> Option<RegenState> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    pub fn get(&self, slot: usize) -> Option<&RegenState> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut RegenState> {
        self.slots.get_mut(slot).and_then(Option::as_mut)
    }

    /// Смена карты: очищаем все слоты
    pub fn clear_all(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    /// Количество занятых слотов
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}
