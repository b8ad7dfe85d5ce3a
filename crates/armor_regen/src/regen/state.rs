//! Regen State Machine — per-slot состояние регенерации брони
//!
//! # Фазы
//!
//! - **Inactive** — `active == false` (урона не было с последнего full armor)
//! - **Delaying** — active, `delay_remaining > 0`
//! - **Waiting** — active, delay истёк, `interval_remaining > 0`
//! - **Restoring** — active, оба countdown'а на нуле → этот тик восстанавливает
//!
//! # Переходы (один вызов `tick` на срабатывание scheduler'а)
//!
//! ```text
//! Inactive ──ArmorDamaged──▶ Delaying ──delay==0──▶ Waiting ──interval==0──▶ Restoring
//!     ▲                                                ▲                        │
//!     │                                                └──── armor < cap ───────┤
//!     └──────────────────────── armor == cap ───────────────────────────────────┘
//! ```
//!
//! Активация не сбрасывает countdown'ы: они продолжают с того места,
//! где остановились.

use crate::catalog::RegenProfile;
use crate::shop::ShopItemId;

/// Потолок брони (закрытая верхняя граница)
pub const ARMOR_CAP: u32 = 100;

/// Текущая фаза state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegenPhase {
    Inactive,
    Delaying,
    Waiting,
    Restoring,
}

/// Что произошло за один тик
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Не активен — ничего не делаем
    Idle,
    /// Съели один тик задержки
    Delayed,
    /// Съели один тик интервала
    Waited,
    /// Восстановили броню, ещё ниже cap
    Restored { armor: u32 },
    /// Дошли до cap — броня ровно ARMOR_CAP, state деактивирован
    Capped,
}

/// Состояние регенерации одного игрока
///
/// Живёт в `RegenRegistry`, создаётся при покупке/включении предмета.
/// После `Capped` не удаляется: следующий урон снова его активирует.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegenState {
    /// Копия профиля на момент покупки
    pub profile: RegenProfile,
    /// ID предмета в shop (для корреляции с записью покупки)
    pub item_id: ShopItemId,
    pub active: bool,
    pub delay_remaining: u32,
    pub interval_remaining: u32,
}

impl RegenState {
    pub fn new(profile: RegenProfile, item_id: ShopItemId) -> Self {
        Self {
            profile,
            item_id,
            active: false,
            delay_remaining: profile.delay,
            interval_remaining: 0, // первый eligible тик после delay сразу восстанавливает
        }
    }

    /// Урон по броне → регенерация снова eligible
    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn phase(&self) -> RegenPhase {
        if !self.active {
            RegenPhase::Inactive
        } else if self.delay_remaining > 0 {
            RegenPhase::Delaying
        } else if self.interval_remaining > 0 {
            RegenPhase::Waiting
        } else {
            RegenPhase::Restoring
        }
    }

    /// Один тик state machine
    ///
    /// `armor` — броня pawn'а, меняется только в фазе Restoring.
    pub fn tick(&mut self, armor: &mut u32) -> TickOutcome {
        match self.phase() {
            RegenPhase::Inactive => TickOutcome::Idle,
            RegenPhase::Delaying => {
                self.delay_remaining -= 1;
                TickOutcome::Delayed
            }
            RegenPhase::Waiting => {
                self.interval_remaining -= 1;
                TickOutcome::Waited
            }
            RegenPhase::Restoring => self.restore(armor),
        }
    }

    fn restore(&mut self, armor: &mut u32) -> TickOutcome {
        if *armor < ARMOR_CAP {
            let restored = armor.saturating_add(self.profile.armor);
            if restored < ARMOR_CAP {
                *armor = restored;
                self.interval_remaining = self.profile.interval;
                return TickOutcome::Restored { armor: restored };
            }
        }

        // Дошли (или уже были) на cap: clamp, interval не сбрасываем
        *armor = ARMOR_CAP;
        self.active = false;
        TickOutcome::Capped
    }
}
