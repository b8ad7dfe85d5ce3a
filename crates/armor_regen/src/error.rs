//! Ошибки плагина
//!
//! Ни одна из них не фатальна: худший случай — у одного игрока
//! купленная регенерация ничего не делает.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegenError {
    /// Конфиг отсутствует — плагин работает выключенным (нет предметов, нет таймера)
    #[error("config not found: {}", path.display())]
    ConfigMissing { path: PathBuf },

    #[error("failed to read config {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config is not valid json")]
    ConfigParse(#[from] serde_json::Error),

    #[error("bad config shape: {0}")]
    ConfigShape(String),

    /// Запись каталога без armor/delay/interval — пропускается, остальные грузятся
    #[error("{key} has invalid or missing settings in config: {reason}")]
    ConfigMalformed { key: String, reason: String },

    /// buy/toggle с ключом, которого нет в каталоге
    #[error("{key} has invalid or missing settings in config!")]
    UnresolvedProfile { key: String },

    #[error("player slot {slot} is out of range")]
    SlotOutOfRange { slot: usize },

    #[error("shop error: {0}")]
    Shop(String),
}
