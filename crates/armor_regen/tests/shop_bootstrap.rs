//! Bootstrap test: конфиг → shop предметы → RegenPlugin
//!
//! Нет конфига → плагин не поднимается, shop не трогаем.

use std::time::Duration;

use bevy::time::TimeUpdateStrategy;
use armor_regen::*;

#[derive(Default)]
struct FakeShop {
    categories: Vec<String>,
    items: Vec<String>,
    wired: Vec<ShopItemId>,
}

impl ShopApi for FakeShop {
    fn create_category(&mut self, id: &str, _label: &str) {
        self.categories.push(id.to_string());
    }

    fn add_item(
        &mut self,
        key: &str,
        _display_name: &str,
        _category: &str,
        _price: i32,
        _sell_price: i32,
        _duration: i32,
    ) -> Result<ShopItemId, RegenError> {
        self.items.push(key.to_string());
        Ok(ShopItemId(self.items.len() as i32))
    }

    fn set_item_callbacks(&mut self, item_id: ShopItemId) {
        self.wired.push(item_id);
    }
}

/// Временная директория игры с конфигом по стандартному пути
fn game_dir_with_config(name: &str, contents: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("armor_regen_{}_{}", name, std::process::id()));
    let config = RegenConfig::for_game_dir(&dir);
    std::fs::create_dir_all(config.config_path.parent().unwrap()).unwrap();
    std::fs::write(&config.config_path, contents).unwrap();
    dir
}

#[test]
fn test_missing_config_disables_plugin() {
    let config = RegenConfig::for_game_dir(std::env::temp_dir().join("armor_regen_no_such_game_dir"));
    let mut shop = FakeShop::default();

    let result = init_shop_regen(&config, &mut shop);

    assert!(matches!(result, Err(RegenError::ConfigMissing { .. })));
    assert!(shop.categories.is_empty());
    assert!(shop.items.is_empty());
}

#[test]
fn test_bootstrap_registers_items_and_builds_plugin() {
    let dir = game_dir_with_config(
        "bootstrap",
        r#"{
            "regen_1": { "name": "R1", "price": 10, "sellprice": 5, "duration": 0, "armor": 2, "delay": 1, "interval": 1 },
            "regen_2": { "name": "R2", "price": 20, "sellprice": 10, "duration": 0, "armor": 4, "delay": 0, "interval": 2 },
            "regen_3": { "name": "R3", "price": 30, "sellprice": 15, "duration": 0, "armor": null, "delay": 0, "interval": 0 }
        }"#,
    );
    let config = RegenConfig::for_game_dir(&dir);
    let mut shop = FakeShop::default();

    let plugin = init_shop_regen(&config, &mut shop).expect("plugin builds");
    std::fs::remove_dir_all(&dir).ok();

    assert_eq!(shop.categories, vec!["ArmorRegen".to_string()]);
    assert_eq!(shop.items, vec!["regen_1".to_string(), "regen_2".to_string()]);
    assert_eq!(shop.wired, vec![ShopItemId(1), ShopItemId(2)]);
    assert_eq!(plugin.catalog().len(), 2);
    assert_eq!(plugin.catalog().rejected_keys(), ["regen_3".to_string()]);
}

#[test]
fn test_bootstrapped_plugin_runs_in_app() {
    let dir = game_dir_with_config(
        "app",
        r#"{ "regen_fast": { "name": "Fast", "price": 1, "sellprice": 1, "duration": 0, "armor": 25, "delay": 0, "interval": 0 } }"#,
    );
    let config = RegenConfig::for_game_dir(&dir);
    let mut shop = FakeShop::default();
    let plugin = init_shop_regen(&config, &mut shop).expect("plugin builds");
    std::fs::remove_dir_all(&dir).ok();

    let mut app = create_headless_app();
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::ZERO))
        .add_plugins(plugin);
    app.update();

    let player = app.world_mut().spawn((PlayerSlot(0), ArmorValue(50))).id();
    app.world_mut().send_event(RegenEvent::from(ShopItemBought {
        player,
        item_id: shop.wired[0],
        category: config.category_id.clone(),
        key: "regen_fast".to_string(),
        buy_price: 1,
        sell_price: 1,
        duration: 0,
        count: 1,
    }));
    app.world_mut().send_event(RegenEvent::from(ArmorDamaged { player, dmg_armor: 50 }));
    app.world_mut().resource_mut::<RegenTicker>().advance(1.0);
    app.update();

    // Покупка, потом урон (порядок отправки), потом тик того же кадра
    assert_eq!(app.world().get::<ArmorValue>(player).unwrap().0, 75);
    assert_eq!(
        app.world().resource::<RegenRegistry>().get(0).unwrap().item_id,
        ShopItemId(1)
    );
}
