use serde::Deserialize;

use crate::emoji::UNKNOWN_GAME;

pub const LEADERBOARD_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameRecord {
    #[serde(rename = "appid")]
    pub app_id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "playtime_forever", default)]
    pub playtime_minutes: u64,
}

#[cfg(test)]
impl GameRecord {
    pub fn new(app_id: u32, name: impl Into<String>, playtime_minutes: u64) -> Self {
        Self {
            app_id,
            name: name.into(),
            playtime_minutes,
        }
    }
}

/// Most played games first. Ties keep the provider's order.
pub fn select_all_time(mut records: Vec<GameRecord>) -> Vec<GameRecord> {
    records.sort_by(|a, b| b.playtime_minutes.cmp(&a.playtime_minutes));
    records.truncate(LEADERBOARD_SIZE);
    records
}

/// Keeps the provider's recency order; unnamed games become `Unknown Game`.
pub fn select_recent(records: Vec<GameRecord>) -> Vec<GameRecord> {
    records
        .into_iter()
        .take(LEADERBOARD_SIZE)
        .map(|mut record| {
            if record.name.is_empty() {
                record.name = UNKNOWN_GAME.to_string();
            }
            record
        })
        .collect()
}
