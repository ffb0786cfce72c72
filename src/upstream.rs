//! NHL web API client
//!
//! Fetches raw game-log payloads from the upstream NHL API. One GET per
//! request, no retries; a non-success status or transport failure becomes
//! an `AppError` the handler maps to an opaque 5xx.
//!
//! The `GameLogSource` trait is the seam between the HTTP client and the
//! transformation pipeline, so the pipeline can be exercised without a
//! network.

use crate::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{error, info};

/// Game-log category. The upstream API keys regular-season and playoff
/// logs by numeric id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameType {
    #[default]
    RegularSeason,
    Playoffs,
}

impl GameType {
    pub fn id(self) -> u8 {
        match self {
            GameType::RegularSeason => 2,
            GameType::Playoffs => 3,
        }
    }

    pub fn from_id(id: u8) -> Option<GameType> {
        match id {
            2 => Some(GameType::RegularSeason),
            3 => Some(GameType::Playoffs),
            _ => None,
        }
    }
}

/// One game played by the requested player.
///
/// The four descriptive fields are present on every record. Stat fields
/// vary by position and are kept in a flattened bag; values may be
/// numbers, `minutes:seconds` strings (`toi`), or localized name objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub team_abbrev: String,
    pub home_road_flag: String,
    pub game_date: String,
    pub opponent_abbrev: String,
    #[serde(flatten)]
    pub stats: Map<String, Value>,
}

/// The slice of the upstream payload the pipeline needs. Anything else in
/// the response (season summaries, player bio) is dropped on deserialize.
/// Games are ordered most-recent-first as delivered upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameLog {
    pub game_log: Vec<GameRecord>,
    pub game_type_id: i32,
    pub season_id: i64,
}

/// Source of raw game logs.
#[async_trait]
pub trait GameLogSource: Send + Sync {
    async fn fetch_game_log(
        &self,
        player_id: &str,
        season_id: &str,
        game_type: GameType,
    ) -> Result<GameLog>;
}

/// Concrete client over the NHL web API.
pub struct NhlApiClient {
    client: Client,
    base_url: String,
}

impl NhlApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn game_log_url(&self, player_id: &str, season_id: &str, game_type: GameType) -> String {
        format!(
            "{}/v1/player/{}/game-log/{}/{}",
            self.base_url,
            player_id,
            season_id,
            game_type.id()
        )
    }
}

#[async_trait]
impl GameLogSource for NhlApiClient {
    async fn fetch_game_log(
        &self,
        player_id: &str,
        season_id: &str,
        game_type: GameType,
    ) -> Result<GameLog> {
        let url = self.game_log_url(player_id, season_id, game_type);
        info!("Fetching game log: {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            error!("NHL API returned {} for {}", status, url);
            return Err(AppError::Upstream(format!("status {}", status)));
        }

        let log = response.json::<GameLog>().await?;
        info!(
            "Fetched {} games for player {} season {}",
            log.game_log.len(),
            player_id,
            season_id
        );
        Ok(log)
    }
}
