//! RegenProfile Catalog — статические параметры регенерации из ArmorRegen.json
//!
//! # Формат
//!
//! ```json
//! {
//!   "regen_light": {
//!     "name": "Лёгкая регенерация", "price": 1000, "sellprice": 500, "duration": 0,
//!     "armor": 5, "delay": 2, "interval": 1
//!   }
//! }
//! ```
//!
//! - `armor` / `delay` / `interval` — обязательны, ядро использует только их
//! - `name` / `price` / `sellprice` / `duration` — нужны только shop регистрации
//!
//! Каталог грузится один раз и дальше только читается (`Res<RegenCatalog>`).
//! Повторная загрузка = новый каталог целиком, частичных правок нет.

use bevy::prelude::*;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::RegenError;
use crate::logger::{log_error, log_info};

// ============================================================================
// RegenProfile
// ============================================================================

/// Параметры регенерации одного предмета
///
/// Copy-on-acquire: `RegenState` хранит свою копию, поэтому countdown
/// задержки никогда не пишет обратно в каталог.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegenProfile {
    /// Сколько брони восстанавливается за один eligible тик
    pub armor: u32,
    /// Тиков до первого восстановления после покупки
    pub delay: u32,
    /// Тиков между восстановлениями
    pub interval: u32,
}

impl RegenProfile {
    pub fn new(armor: u32, delay: u32, interval: u32) -> Self {
        Self { armor, delay, interval }
    }
}

/// Shop-поля записи (ядро их не читает)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopListing {
    pub name: String,
    pub price: i32,
    pub sell_price: i32,
    pub duration: i32,
}

/// Запись каталога: ключ + профиль + витрина
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub key: String,
    pub profile: RegenProfile,
    pub listing: ShopListing,
}

/// Сырая запись JSON. Option различает «нет поля / null» и «есть значение».
#[derive(Deserialize)]
struct RawEntry {
    #[serde(default, deserialize_with = "whole_number")]
    armor: Option<u32>,
    #[serde(default, deserialize_with = "whole_number")]
    delay: Option<u32>,
    #[serde(default, deserialize_with = "whole_number")]
    interval: Option<u32>,
    name: Option<String>,
    price: Option<i32>,
    sellprice: Option<i32>,
    duration: Option<i32>,
}

/// Неотрицательное целое; `5.0` тоже целое, `5.5` и `-5` нет
fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let Some(value) = Option::<f64>::deserialize(deserializer)? else {
        return Ok(None);
    };

    if value.fract() != 0.0 || value < 0.0 || value > u32::MAX as f64 {
        return Err(D::Error::custom(format!("expected a non-negative integer, got {}", value)));
    }
    Ok(Some(value as u32))
}

impl CatalogEntry {
    fn from_value(key: &str, value: serde_json::Value) -> Result<Self, RegenError> {
        let malformed = |reason: String| RegenError::ConfigMalformed {
            key: key.to_string(),
            reason,
        };

        let raw: RawEntry = serde_json::from_value(value).map_err(|err| malformed(err.to_string()))?;

        let (Some(armor), Some(delay), Some(interval)) = (raw.armor, raw.delay, raw.interval) else {
            let missing: Vec<&str> = [
                ("armor", raw.armor.is_none()),
                ("delay", raw.delay.is_none()),
                ("interval", raw.interval.is_none()),
            ]
            .into_iter()
            .filter_map(|(field, absent)| absent.then_some(field))
            .collect();
            return Err(malformed(format!("missing {}", missing.join(", "))));
        };

        Ok(Self {
            key: key.to_string(),
            profile: RegenProfile { armor, delay, interval },
            listing: ShopListing {
                name: raw.name.unwrap_or_else(|| key.to_string()),
                price: raw.price.unwrap_or(0),
                sell_price: raw.sellprice.unwrap_or(0),
                duration: raw.duration.unwrap_or(0),
            },
        })
    }
}

// ============================================================================
// RegenCatalog
// ============================================================================

/// Каталог профилей (Resource, read-only после загрузки)
///
/// BTreeMap — детерминированный порядок регистрации предметов в shop.
#[derive(Resource, Debug, Clone, Default)]
pub struct RegenCatalog {
    entries: BTreeMap<String, CatalogEntry>,
    rejected: Vec<String>,
}

impl RegenCatalog {
    /// Загрузить каталог из файла
    ///
    /// Отсутствующий файл → `ConfigMissing` (хост не поднимает плагин).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegenError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(RegenError::ConfigMissing {
                path: path.to_path_buf(),
            });
        }

        let text = std::fs::read_to_string(path).map_err(|source| RegenError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json_str(&text)?;
        log_info(&format!(
            "📦 Loaded {} armor regen profile(s) from {} ({} rejected)",
            catalog.len(),
            path.display(),
            catalog.rejected.len()
        ));

        Ok(catalog)
    }

    /// Распарсить документ каталога
    ///
    /// Не-объектные значения игнорируются. Битая запись логируется
    /// (`ConfigMalformed`) и пропускается, остальные грузятся.
    pub fn from_json_str(text: &str) -> Result<Self, RegenError> {
        let document: serde_json::Value = serde_json::from_str(text)?;
        let serde_json::Value::Object(items) = document else {
            return Err(RegenError::ConfigShape("root must be a json object".into()));
        };

        let mut catalog = Self::default();
        for (key, value) in items {
            if !value.is_object() {
                continue;
            }

            match CatalogEntry::from_value(&key, value) {
                Ok(entry) => {
                    catalog.entries.insert(key, entry);
                }
                Err(err) => {
                    log_error(&err.to_string());
                    catalog.rejected.push(key);
                }
            }
        }

        Ok(catalog)
    }

    /// Профиль по ключу предмета
    pub fn lookup(&self, key: &str) -> Result<RegenProfile, RegenError> {
        self.entries
            .get(key)
            .map(|entry| entry.profile)
            .ok_or_else(|| RegenError::UnresolvedProfile { key: key.to_string() })
    }

    pub fn entry(&self, key: &str) -> Option<&CatalogEntry> {
        self.entries.get(key)
    }

    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    /// Ключи записей, отброшенных при загрузке
    pub fn rejected_keys(&self) -> &[String] {
        &self.rejected
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"{
        "regen_light": { "name": "Light", "price": 1000, "sellprice": 500, "duration": 0,
                         "armor": 5, "delay": 2, "interval": 1 },
        "regen_heavy": { "name": "Heavy", "price": 5000, "sellprice": 2500, "duration": 86400,
                         "armor": 30, "delay": 0, "interval": 0 },
        "regen_broken": { "name": "Broken", "price": 1, "sellprice": 1, "duration": 0,
                          "armor": 5, "delay": null },
        "comment": "not an item"
    }"#;

    #[test]
    fn test_load_skips_malformed_entries() {
        let catalog = RegenCatalog::from_json_str(CONFIG).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.rejected_keys(), ["regen_broken".to_string()]);
        assert_eq!(catalog.lookup("regen_light").unwrap(), RegenProfile::new(5, 2, 1));
        assert_eq!(catalog.lookup("regen_heavy").unwrap(), RegenProfile::new(30, 0, 0));
    }

    #[test]
    fn test_lookup_unknown_key() {
        let catalog = RegenCatalog::from_json_str(CONFIG).unwrap();

        let err = catalog.lookup("regen_broken").unwrap_err();
        assert!(matches!(err, RegenError::UnresolvedProfile { ref key } if key == "regen_broken"));
    }

    #[test]
    fn test_listing_fields() {
        let catalog = RegenCatalog::from_json_str(CONFIG).unwrap();
        let heavy = catalog.entry("regen_heavy").unwrap();

        assert_eq!(heavy.listing.name, "Heavy");
        assert_eq!(heavy.listing.price, 5000);
        assert_eq!(heavy.listing.sell_price, 2500);
        assert_eq!(heavy.listing.duration, 86400);
    }

    #[test]
    fn test_listing_defaults_to_key() {
        let catalog =
            RegenCatalog::from_json_str(r#"{ "bare": { "armor": 1, "delay": 0, "interval": 0 } }"#).unwrap();
        let bare = catalog.entry("bare").unwrap();

        assert_eq!(bare.listing.name, "bare");
        assert_eq!(bare.listing.price, 0);
    }

    #[test]
    fn test_negative_values_rejected() {
        let catalog =
            RegenCatalog::from_json_str(r#"{ "neg": { "armor": -5, "delay": 0, "interval": 0 } }"#).unwrap();

        assert!(catalog.is_empty());
        assert_eq!(catalog.rejected_keys(), ["neg".to_string()]);
    }

    #[test]
    fn test_integral_floats_accepted() {
        let catalog = RegenCatalog::from_json_str(
            r#"{
                "float_ok": { "armor": 5.0, "delay": 2.0, "interval": 1 },
                "float_bad": { "armor": 5.5, "delay": 0, "interval": 0 }
            }"#,
        )
        .unwrap();

        assert_eq!(catalog.lookup("float_ok").unwrap(), RegenProfile::new(5, 2, 1));
        assert_eq!(catalog.rejected_keys(), ["float_bad".to_string()]);
    }

    #[test]
    fn test_root_must_be_object() {
        let err = RegenCatalog::from_json_str("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, RegenError::ConfigShape(_)));

        let err = RegenCatalog::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, RegenError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("armor_regen_does_not_exist.json");
        let err = RegenCatalog::load(&path).unwrap_err();

        assert!(matches!(err, RegenError::ConfigMissing { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("armor_regen_catalog_{}.json", std::process::id()));
        std::fs::write(&path, CONFIG).unwrap();

        let catalog = RegenCatalog::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(catalog.len(), 2);
    }
}
