use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::Deserialize;
use url::Url;

use crate::ranking::GameRecord;

const STEAM_API_BASE: &str = "https://api.steampowered.com";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnedGamesQuery {
    pub player_id: u64,
    pub include_app_info: bool,
    pub include_played_free_games: bool,
    pub app_ids: Vec<u32>,
}

pub trait GameLibrary {
    fn fetch_owned_games(&self, query: &OwnedGamesQuery) -> Result<Vec<GameRecord>>;
    /// Games in the order the provider ranks them by recent activity.
    fn fetch_recent_games(&self, player_id: u64, count: usize) -> Result<Vec<GameRecord>>;
}

#[derive(Debug, Deserialize)]
struct Envelope {
    response: GamesResponse,
}

#[derive(Debug, Default, Deserialize)]
struct GamesResponse {
    #[serde(default)]
    games: Vec<GameRecord>,
}

pub struct SteamClient {
    client: Client,
    api_key: String,
}

impl SteamClient {
    pub fn new(api_key: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to create steam http client")?;
        Ok(Self {
            client,
            api_key: api_key.trim().to_string(),
        })
    }

    fn owned_games_url(&self, query: &OwnedGamesQuery) -> Result<Url> {
        let mut params = vec![
            ("key".to_string(), self.api_key.clone()),
            ("steamid".to_string(), query.player_id.to_string()),
            ("include_appinfo".to_string(), query.include_app_info.to_string()),
            (
                "include_played_free_games".to_string(),
                query.include_played_free_games.to_string(),
            ),
            ("format".to_string(), "json".to_string()),
        ];
        for (i, app_id) in query.app_ids.iter().enumerate() {
            params.push((format!("appids_filter[{i}]"), app_id.to_string()));
        }
        let base = format!("{STEAM_API_BASE}/IPlayerService/GetOwnedGames/v1/");
        Url::parse_with_params(&base, &params).context("build GetOwnedGames url")
    }

    fn recent_games_url(&self, player_id: u64, count: usize) -> Result<Url> {
        let base = format!("{STEAM_API_BASE}/IPlayerService/GetRecentlyPlayedGames/v1/");
        Url::parse_with_params(
            &base,
            &[
                ("key", self.api_key.clone()),
                ("steamid", player_id.to_string()),
                ("count", count.to_string()),
                ("format", "json".to_string()),
            ],
        )
        .context("build GetRecentlyPlayedGames url")
    }

    fn get_games(&self, url: Url, endpoint: &str) -> Result<Vec<GameRecord>> {
        tracing::debug!(endpoint, "requesting steam games");
        let body = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("send {endpoint} request"))?
            .error_for_status()
            .with_context(|| format!("{endpoint} HTTP status"))?
            .text()
            .with_context(|| format!("read {endpoint} response"))?;
        parse_games(&body).with_context(|| format!("decode {endpoint} response"))
    }
}

impl GameLibrary for SteamClient {
    fn fetch_owned_games(&self, query: &OwnedGamesQuery) -> Result<Vec<GameRecord>> {
        let url = self.owned_games_url(query)?;
        let games = self.get_games(url, "GetOwnedGames")?;
        tracing::info!(count = games.len(), "fetched owned games");
        Ok(games)
    }

    fn fetch_recent_games(&self, player_id: u64, count: usize) -> Result<Vec<GameRecord>> {
        let url = self.recent_games_url(player_id, count)?;
        let games = self.get_games(url, "GetRecentlyPlayedGames")?;
        tracing::info!(count = games.len(), "fetched recently played games");
        Ok(games)
    }
}

/// Private profiles answer with an empty `response` object.
fn parse_games(body: &str) -> Result<Vec<GameRecord>> {
    let envelope: Envelope = serde_json::from_str(body)?;
    Ok(envelope.response.games)
}
