//! Настройки плагина (не путать с каталогом профилей)

use std::path::PathBuf;

use crate::regen::DEFAULT_TICK_PERIOD;

/// Путь каталога относительно директории игры хоста
pub const DEFAULT_CONFIG_PATH: &str = "configs/plugins/Shop/ArmorRegen.json";

#[derive(Debug, Clone)]
pub struct RegenConfig {
    /// Файл каталога ArmorRegen.json
    pub config_path: PathBuf,
    /// Период scheduler'а (секунды)
    pub tick_period: f32,
    /// ID категории в shop
    pub category_id: String,
    /// Отображаемое имя категории
    pub category_label: String,
}

impl Default for RegenConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            tick_period: DEFAULT_TICK_PERIOD,
            category_id: "ArmorRegen".to_string(),
            category_label: "Регенерация брони".to_string(),
        }
    }
}

impl RegenConfig {
    /// Каталог лежит в `game_dir/configs/plugins/Shop/ArmorRegen.json`
    pub fn for_game_dir(game_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_path: game_dir.into().join(DEFAULT_CONFIG_PATH),
            ..Self::default()
        }
    }
}
