//! HTTP endpoint handlers
//!
//! Query options arrive as raw strings and are parsed here, before the
//! upstream fetch, so bad input never costs a network round trip.

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::transform::{self, GameLogOptions, TransformedGameLog};
use crate::upstream::GameType;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

/// Raw query options for the game-log endpoint. Booleans and the limit
/// are kept as strings so their literals can be validated explicitly.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameLogQuery {
    pub properties: Option<String>,
    pub limit: Option<String>,
    pub is_aggregate: Option<String>,
    pub ascending: Option<String>,
}

/// Health check endpoint - GET /health or GET /
pub async fn health_check() -> Json<Value> {
    Json(json!({"status": "ok", "service": "nhl-gamelog-proxy"}))
}

/// GET /api/v1/game-log/{playerId}/{seasonId}/{gameTypeId}
pub async fn get_game_log(
    State(state): State<Arc<AppState>>,
    Path((player_id, season_id, game_type_id)): Path<(String, String, u8)>,
    Query(query): Query<GameLogQuery>,
) -> Result<Json<TransformedGameLog>> {
    let game_type = GameType::from_id(game_type_id).ok_or_else(|| {
        AppError::InvalidParameter(format!("unknown game type: {}", game_type_id))
    })?;
    fetch_and_transform(&state, &player_id, &season_id, game_type, query).await
}

/// GET /api/v1/game-log/{playerId}/{seasonId} - regular season by default
pub async fn get_game_log_default(
    State(state): State<Arc<AppState>>,
    Path((player_id, season_id)): Path<(String, String)>,
    Query(query): Query<GameLogQuery>,
) -> Result<Json<TransformedGameLog>> {
    fetch_and_transform(&state, &player_id, &season_id, GameType::default(), query).await
}

async fn fetch_and_transform(
    state: &AppState,
    player_id: &str,
    season_id: &str,
    game_type: GameType,
    query: GameLogQuery,
) -> Result<Json<TransformedGameLog>> {
    info!(
        "Game log request: player={} season={} type={:?}",
        player_id, season_id, game_type
    );

    // validate everything before touching the network
    let options = parse_options(query)?;

    let log = state
        .source
        .fetch_game_log(player_id, season_id, game_type)
        .await?;

    let result = transform::transform_game_log(log, &options)?;
    Ok(Json(result))
}

/// Parse and validate all query options into a `GameLogOptions`.
fn parse_options(query: GameLogQuery) -> Result<GameLogOptions> {
    let fields = match query.properties.as_deref() {
        Some(raw) => transform::parse_fields(raw)?,
        None => Vec::new(),
    };

    let limit = query.limit.as_deref().map(parse_limit).transpose()?;

    let aggregate = match query.is_aggregate.as_deref() {
        Some(raw) => parse_bool(raw, "isAggregate")?,
        None => return Err(AppError::MissingParameter("isAggregate".to_string())),
    };

    let ascending = match query.ascending.as_deref() {
        Some(raw) => parse_bool(raw, "ascending")?,
        None => false,
    };

    Ok(GameLogOptions {
        fields,
        limit,
        aggregate,
        ascending,
    })
}

/// The limit is parsed once, here, and the parsed value drives both the
/// slice and the reported count.
fn parse_limit(raw: &str) -> Result<usize> {
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(AppError::InvalidParameter(format!(
            "limit must be a positive integer, got '{}'",
            raw
        ))),
    }
}

fn parse_bool(raw: &str, name: &str) -> Result<bool> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(AppError::InvalidParameter(format!(
            "{} must be true or false, got '{}'",
            name, raw
        ))),
    }
}
