//! Headless прогон регенерации брони
//!
//! `armor_regen [ArmorRegen.json] [item_key]`
//!
//! Покупает предмет одному игроку, бьёт по броне и крутит симуляцию
//! кадрами по 250 мс, печатая броню на каждом изменении.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use armor_regen::logger::{log_error, log_info};
use armor_regen::*;

const FRAME: Duration = Duration::from_millis(250);
const FRAMES: usize = 120;

fn main() {
    let mut args = std::env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| config::DEFAULT_CONFIG_PATH.to_string());

    let mut app = create_headless_app();

    let catalog = match RegenCatalog::load(&config_path) {
        Ok(catalog) => catalog,
        Err(err) => {
            log_error(&format!("Cannot start headless run: {}", err));
            return;
        }
    };

    let Some(key) = args.next().or_else(|| catalog.entries().next().map(|e| e.key.clone())) else {
        log_error("Catalog has no valid entries");
        return;
    };

    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
        .add_plugins(RegenPlugin::new(catalog));

    let player = app.world_mut().spawn((PlayerSlot(1), ArmorValue(100))).id();
    app.world_mut().send_event(RegenEvent::from(ShopItemBought {
        player,
        item_id: ShopItemId(1),
        category: RegenConfig::default().category_id,
        key: key.clone(),
        buy_price: 0,
        sell_price: 0,
        duration: 0,
        count: 1,
    }));
    app.update();

    // Урон по броне: 100 → 35
    app.world_mut().entity_mut(player).insert(ArmorValue(35));
    app.world_mut().send_event(RegenEvent::from(ArmorDamaged { player, dmg_armor: 65 }));

    log_info(&format!("Running '{}' for {} frames of {:?}", key, FRAMES, FRAME));

    let mut last_armor = 35;
    for frame in 0..FRAMES {
        app.update();

        let armor = app.world().get::<ArmorValue>(player).map_or(0, |a| a.0);
        if armor != last_armor {
            println!("Frame {}: armor {} → {}", frame, last_armor, armor);
            last_armor = armor;
        }
    }

    println!("Headless run complete! Final armor: {}", last_armor);
}
