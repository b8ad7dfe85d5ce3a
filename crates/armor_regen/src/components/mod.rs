//! ECS Components хост-симуляции, которые читает плагин
//!
//! - player: слот игрока, броня pawn'а, маркер смерти

pub mod player;

// Re-exports для удобного импорта
pub use player::*;
