//! Game-log transformation pipeline
//!
//! Takes the raw upstream log plus the caller's options and produces the
//! response envelope: records projected to the requested fields, limited
//! to the N most recent, optionally reversed for display, optionally
//! rolled up into a single aggregate record.

use crate::aggregate::{aggregate_game_log, AggregateRecord};
use crate::error::{AppError, Result};
use crate::fields::StatField;
use crate::upstream::{GameLog, GameRecord};
use serde::Serialize;
use serde_json::Map;

/// Validated request options for one transformation.
#[derive(Debug, Clone, Default)]
pub struct GameLogOptions {
    /// Requested stat fields; empty means the full allow-list.
    pub fields: Vec<StatField>,
    /// Keep only the N most recent games.
    pub limit: Option<usize>,
    /// Roll the selected games up into one aggregate record.
    pub aggregate: bool,
    /// Oldest-first display order. Never changes which games the limit
    /// selects, only how the selected games are ordered.
    pub ascending: bool,
}

/// Either the projected game sequence or, when aggregating, the single
/// rollup record. Serializes untagged: an array or a bare object, as the
/// upstream-facing contract expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GameLogBody {
    Games(Vec<GameRecord>),
    Aggregate(AggregateRecord),
}

/// Response envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformedGameLog {
    pub game_type_id: i32,
    pub season_id: i64,
    pub game_log: GameLogBody,
    /// When a limit is supplied this echoes the requested limit, even if
    /// fewer games were available; callers detect the shortfall by
    /// comparing against the sequence length.
    pub game_count: usize,
    pub is_aggregate: bool,
    pub ascending: bool,
}

/// Parse a comma-separated field list against the allow-list. Every
/// invalid name is collected and reported; there is no partial success.
pub fn parse_fields(raw: &str) -> Result<Vec<StatField>> {
    let mut fields = Vec::new();
    let mut invalid = Vec::new();

    for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match StatField::from_name(name) {
            Some(field) => fields.push(field),
            None => invalid.push(name),
        }
    }

    if !invalid.is_empty() {
        return Err(AppError::InvalidParameter(format!(
            "invalid properties: {}",
            invalid.join(", ")
        )));
    }
    Ok(fields)
}

/// Run the full pipeline: project, limit, order, aggregate.
pub fn transform_game_log(log: GameLog, options: &GameLogOptions) -> Result<TransformedGameLog> {
    let effective: &[StatField] = if options.fields.is_empty() {
        &StatField::ALL
    } else {
        &options.fields
    };

    let mut games: Vec<GameRecord> = log
        .game_log
        .into_iter()
        .map(|game| project_record(game, effective))
        .collect();

    let mut game_count = games.len();

    // The log arrives newest-first, so the limit is applied before any
    // reversal: "limit" always means the N most recent games.
    if let Some(limit) = options.limit {
        games.truncate(limit);
        game_count = limit;
    }

    if options.ascending {
        games.reverse();
    }

    let game_log = if options.aggregate {
        GameLogBody::Aggregate(aggregate_game_log(&games)?)
    } else {
        GameLogBody::Games(games)
    };

    Ok(TransformedGameLog {
        game_type_id: log.game_type_id,
        season_id: log.season_id,
        game_log,
        game_count,
        is_aggregate: options.aggregate,
        ascending: options.ascending,
    })
}

/// Restrict a record's stat bag to `fields`. The descriptive fields
/// (team, venue flag, date, opponent) always survive; a stat absent from
/// the record stays absent from the projection.
fn project_record(game: GameRecord, fields: &[StatField]) -> GameRecord {
    let mut stats = Map::new();
    for field in fields {
        if let Some(value) = game.stats.get(field.as_str()) {
            stats.insert(field.as_str().to_string(), value.clone());
        }
    }
    GameRecord { stats, ..game }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn game(date: &str, stats: Value) -> GameRecord {
        GameRecord {
            team_abbrev: "BOS".to_string(),
            home_road_flag: "H".to_string(),
            game_date: date.to_string(),
            opponent_abbrev: "OTT".to_string(),
            stats: stats.as_object().unwrap().clone(),
        }
    }

    /// Three games, newest first, goals 1/0/2.
    fn sample_log() -> GameLog {
        GameLog {
            game_log: vec![
                game("2024-01-25", json!({"goals": 1, "shots": 4, "toi": "17:50"})),
                game("2024-01-23", json!({"goals": 0, "shots": 2, "toi": "18:10"})),
                game("2024-01-20", json!({"goals": 2, "shots": 6, "toi": "16:05"})),
            ],
            game_type_id: 2,
            season_id: 20232024,
        }
    }

    fn games_of(result: &TransformedGameLog) -> &[GameRecord] {
        match &result.game_log {
            GameLogBody::Games(games) => games,
            GameLogBody::Aggregate(_) => panic!("expected game sequence"),
        }
    }

    #[test]
    fn test_parse_fields() {
        let fields = parse_fields("goals,assists, toi").unwrap();
        assert_eq!(
            fields,
            vec![StatField::Goals, StatField::Assists, StatField::Toi]
        );
        assert!(parse_fields("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_fields_names_every_invalid_field() {
        let err = parse_fields("shots,notAField,alsoBad").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("notAField"));
        assert!(message.contains("alsoBad"));
        assert!(!message.contains("shots,"));
    }

    #[test]
    fn test_projection_keeps_exactly_requested_fields() {
        let options = GameLogOptions {
            fields: vec![StatField::Goals],
            ..Default::default()
        };

        let result = transform_game_log(sample_log(), &options).unwrap();
        for game in games_of(&result) {
            let keys: Vec<&String> = game.stats.keys().collect();
            assert_eq!(keys, vec!["goals"]);
            // descriptive fields ride along on the struct itself
            assert_eq!(game.team_abbrev, "BOS");
        }
    }

    #[test]
    fn test_empty_field_list_means_all() {
        let result = transform_game_log(sample_log(), &GameLogOptions::default()).unwrap();
        let game = &games_of(&result)[0];
        assert!(game.stats.contains_key("goals"));
        assert!(game.stats.contains_key("shots"));
        assert!(game.stats.contains_key("toi"));
    }

    #[test]
    fn test_absent_stat_stays_absent() {
        let options = GameLogOptions {
            fields: vec![StatField::Goals, StatField::Pim],
            ..Default::default()
        };

        let result = transform_game_log(sample_log(), &options).unwrap();
        let game = &games_of(&result)[0];
        assert!(game.stats.contains_key("goals"));
        assert!(!game.stats.contains_key("pim"));
    }

    #[test]
    fn test_projection_is_idempotent() {
        let fields = vec![StatField::Goals, StatField::Toi];
        let once = project_record(sample_log().game_log[0].clone(), &fields);
        let twice = project_record(once.clone(), &fields);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_default_order_is_newest_first() {
        let result = transform_game_log(sample_log(), &GameLogOptions::default()).unwrap();
        assert_eq!(games_of(&result)[0].game_date, "2024-01-25");
        assert_eq!(result.game_count, 3);
        assert!(!result.is_aggregate);
    }

    #[test]
    fn test_ascending_reverses_display_order() {
        let options = GameLogOptions {
            ascending: true,
            ..Default::default()
        };

        let result = transform_game_log(sample_log(), &options).unwrap();
        assert_eq!(games_of(&result)[0].game_date, "2024-01-20");
        assert!(result.ascending);
    }

    #[test]
    fn test_limit_selects_most_recent_regardless_of_order() {
        // limit picks the two newest games; ascending only flips how the
        // selected pair is displayed
        let options = GameLogOptions {
            limit: Some(2),
            ascending: true,
            ..Default::default()
        };

        let result = transform_game_log(sample_log(), &options).unwrap();
        let games = games_of(&result);
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].game_date, "2024-01-23");
        assert_eq!(games[1].game_date, "2024-01-25");
        assert_eq!(result.game_count, 2);
    }

    #[test]
    fn test_limit_beyond_available_reports_requested_count() {
        let options = GameLogOptions {
            limit: Some(10),
            ..Default::default()
        };

        let result = transform_game_log(sample_log(), &options).unwrap();
        assert_eq!(games_of(&result).len(), 3);
        assert_eq!(result.game_count, 10);
    }

    #[test]
    fn test_aggregate_of_two_most_recent() {
        // goals newest-first are [1, 0, 2]; limit 2 keeps 1 and 0
        let options = GameLogOptions {
            limit: Some(2),
            aggregate: true,
            ..Default::default()
        };

        let result = transform_game_log(sample_log(), &options).unwrap();
        assert!(result.is_aggregate);
        assert_eq!(result.game_count, 2);
        match &result.game_log {
            GameLogBody::Aggregate(totals) => {
                assert_eq!(totals["goals"], json!(1));
                assert_eq!(totals["shots"], json!(6));
                assert_eq!(totals["toi"], json!("36:00"));
            }
            GameLogBody::Games(_) => panic!("expected aggregate record"),
        }
    }

    #[test]
    fn test_aggregate_of_empty_log_fails() {
        let log = GameLog {
            game_log: vec![],
            game_type_id: 2,
            season_id: 20232024,
        };
        let options = GameLogOptions {
            aggregate: true,
            ..Default::default()
        };

        let err = transform_game_log(log, &options).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_envelope_serializes_camel_case() {
        let result = transform_game_log(sample_log(), &GameLogOptions::default()).unwrap();
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["gameTypeId"], json!(2));
        assert_eq!(value["seasonId"], json!(20232024));
        assert_eq!(value["gameCount"], json!(3));
        assert_eq!(value["isAggregate"], json!(false));
        assert!(value["gameLog"].is_array());
    }

    #[test]
    fn test_aggregate_envelope_serializes_bare_object() {
        let options = GameLogOptions {
            aggregate: true,
            ..Default::default()
        };
        let result = transform_game_log(sample_log(), &options).unwrap();
        let value = serde_json::to_value(&result).unwrap();
        assert!(value["gameLog"].is_object());
        assert_eq!(value["isAggregate"], json!(true));
    }
}
