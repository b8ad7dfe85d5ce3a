//! Tick Scheduler — периодический триггер регенерации
//!
//! Repeating `Timer` на `Time` delta: отдаёт количество полных периодов
//! (1 сек по умолчанию). Лаг кадра в 2.5 сек = 2 тика + 0.5 сек в остатке.
//!
//! Смена карты останавливает ticker (`stop`), старт карты — перезапускает.

use std::time::Duration;

use bevy::prelude::*;

use crate::logger::log_warning;

/// Период регенерации по умолчанию (секунды)
pub const DEFAULT_TICK_PERIOD: f32 = 1.0;

/// Минимальный период: меньше = тысячи тиков на кадр
pub const MIN_TICK_PERIOD: f32 = 0.01;

#[derive(Resource, Debug, Clone)]
pub struct RegenTicker {
    timer: Timer,
    /// Тики, которые ещё не отработаны системой регенерации
    due: u32,
    stopped: bool,
}

impl Default for RegenTicker {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_PERIOD)
    }
}

impl RegenTicker {
    /// Период вне `[MIN_TICK_PERIOD, ∞)` (0, NaN, отрицательный) → warning + clamp
    pub fn new(period: f32) -> Self {
        let period = if period.is_finite() && period >= MIN_TICK_PERIOD {
            period
        } else {
            let fallback = if period.is_finite() && period > 0.0 {
                MIN_TICK_PERIOD
            } else {
                DEFAULT_TICK_PERIOD
            };
            log_warning(&format!("Invalid regen tick period {}, using {}", period, fallback));
            fallback
        };

        Self {
            timer: Timer::from_seconds(period, TimerMode::Repeating),
            due: 0,
            stopped: false,
        }
    }

    /// Продвинуть время кадра; возвращает сколько тиков стало due
    pub fn tick(&mut self, delta: Duration) -> u32 {
        if self.stopped {
            return 0;
        }

        let fired = self.timer.tick(delta).times_finished_this_tick();
        self.due = self.due.saturating_add(fired);
        fired
    }

    /// То же в секундах; отрицательный / не конечный delta игнорируется
    pub fn advance(&mut self, delta_secs: f32) -> u32 {
        if !delta_secs.is_finite() || delta_secs <= 0.0 {
            return 0;
        }
        self.tick(Duration::from_secs_f32(delta_secs))
    }

    /// Забрать накопленные тики (обнуляет счётчик)
    pub fn take_due(&mut self) -> u32 {
        std::mem::take(&mut self.due)
    }

    /// Остановить (STOP_ON_MAPCHANGE): неотработанные тики выбрасываются
    pub fn stop(&mut self) {
        self.stopped = true;
        self.timer.reset();
        self.due = 0;
    }

    /// Перезапустить с нуля (новая карта)
    pub fn restart(&mut self) {
        self.stopped = false;
        self.timer.reset();
        self.due = 0;
    }

    pub fn is_running(&self) -> bool {
        !self.stopped
    }

    pub fn period(&self) -> f32 {
        self.timer.duration().as_secs_f32()
    }
}
