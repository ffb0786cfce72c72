//! Game-log aggregation
//!
//! Folds a sequence of projected game records into a single rollup record.
//! Which fields get summed is decided once, from the first record: the
//! intersection of its stat fields with the aggregable allow-list. Records
//! missing one of those fields simply contribute nothing for it, so a
//! heterogeneous log can under-count. That is the upstream contract and is
//! preserved as-is rather than widened to a per-record union.

use crate::error::{AppError, Result};
use crate::fields::StatField;
use crate::upstream::GameRecord;
use serde_json::{Map, Value};

/// The rollup: stat name to summed value. Carries no identity or context
/// fields, just the totals.
pub type AggregateRecord = Map<String, Value>;

/// Sum the aggregable fields of `games` into one record.
///
/// `games` must be non-empty; an empty log is reported as a validation
/// error rather than producing an empty rollup.
pub fn aggregate_game_log(games: &[GameRecord]) -> Result<AggregateRecord> {
    let first = games
        .first()
        .ok_or_else(|| AppError::Validation("cannot aggregate an empty game log".to_string()))?;

    let mut totals = AggregateRecord::new();
    for field in StatField::AGGREGABLE {
        if !first.stats.contains_key(field.as_str()) {
            continue;
        }

        if field == StatField::Toi {
            let mut total_seconds = 0i64;
            for game in games {
                if let Some(value) = game.stats.get(field.as_str()) {
                    total_seconds += parse_toi_seconds(value)?;
                }
            }
            totals.insert(
                field.as_str().to_string(),
                Value::String(format_toi(total_seconds)),
            );
        } else {
            let mut total = 0i64;
            for game in games {
                if let Some(value) = game.stats.get(field.as_str()) {
                    total += value.as_i64().ok_or_else(|| {
                        AppError::Internal(format!(
                            "non-numeric value for {}: {}",
                            field.as_str(),
                            value
                        ))
                    })?;
                }
            }
            totals.insert(field.as_str().to_string(), Value::from(total));
        }
    }

    Ok(totals)
}

/// Parse a `minutes:seconds` time-on-ice value into total seconds.
fn parse_toi_seconds(value: &Value) -> Result<i64> {
    value
        .as_str()
        .and_then(|raw| {
            let (minutes, seconds) = raw.split_once(':')?;
            let minutes: i64 = minutes.parse().ok()?;
            let seconds: i64 = seconds.parse().ok()?;
            Some(minutes * 60 + seconds)
        })
        .ok_or_else(|| AppError::Internal(format!("malformed toi value: {}", value)))
}

/// Render total seconds back to `minutes:seconds`, seconds zero-padded.
fn format_toi(total_seconds: i64) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}
