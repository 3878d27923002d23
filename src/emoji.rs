pub const UNKNOWN_GAME: &str = "Unknown Game";

const UNKNOWN_MARKER: &str = "❓ ";
const GAME_MARKER: &str = "🎮 ";

pub fn emoji_for(app_id: u32) -> Option<&'static str> {
    match app_id {
        70 => Some("λ "),                // Half-Life
        220 => Some("λ² "),              // Half-Life 2
        500 | 550 => Some("🧟 "),        // Left 4 Dead, Left 4 Dead 2
        570 => Some("⚔️ "),              // Dota 2
        730 => Some("🔫 "),              // CS:GO
        8930 => Some("🌏 "),             // Civilization V
        252950 => Some("🚀 "),           // Rocket League
        269950 => Some("✈️ "),           // X-Plane 11
        271590 => Some("🚓 "),           // GTA V
        359550 => Some("🔫 "),           // Rainbow Six Siege
        431960 => Some("💻 "),           // Wallpaper Engine
        578080 => Some("🍳 "),           // PUBG
        945360 => Some("🕵️‍♂️ "),          // Among Us
        1250410 => Some("🛩️ "),          // Microsoft Flight Simulator
        1091500 => Some("🦾 "),          // Cyberpunk 2077
        594650 => Some("🎯 "),           // Hunt: Showdown
        230410 => Some("🏹 "),           // Warframe
        397540 | 49520 => Some("🤖 "),   // Borderlands 3, Borderlands 2
        _ => None,
    }
}

/// Decorates a game name with its emoji, falling back to a question mark
/// for unnamed games and a controller for everything else.
pub fn label_for(app_id: u32, name: &str) -> String {
    if let Some(emoji) = emoji_for(app_id) {
        return format!("{emoji}{name}");
    }
    if name == UNKNOWN_GAME {
        return format!("{UNKNOWN_MARKER}{name}");
    }
    format!("{GAME_MARKER}{name}")
}
