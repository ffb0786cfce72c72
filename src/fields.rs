//! Stat field schema
//!
//! The NHL game-log payload carries a fixed set of queryable stat fields.
//! Callers select a subset by name; anything outside this allow-list is
//! rejected. A smaller subset of these fields can be summed into an
//! aggregate record.

/// A queryable stat field on a game record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatField {
    GameId,
    Goals,
    Assists,
    CommonName,
    OpponentCommonName,
    Points,
    PlusMinus,
    PowerPlayGoals,
    PowerPlayPoints,
    GameWinningGoals,
    OtGoals,
    Shots,
    Shifts,
    ShorthandedGoals,
    ShorthandedPoints,
    Pim,
    Toi,
}

impl StatField {
    /// Every field a caller may request.
    pub const ALL: [StatField; 17] = [
        StatField::GameId,
        StatField::Goals,
        StatField::Assists,
        StatField::CommonName,
        StatField::OpponentCommonName,
        StatField::Points,
        StatField::PlusMinus,
        StatField::PowerPlayGoals,
        StatField::PowerPlayPoints,
        StatField::GameWinningGoals,
        StatField::OtGoals,
        StatField::Shots,
        StatField::Shifts,
        StatField::ShorthandedGoals,
        StatField::ShorthandedPoints,
        StatField::Pim,
        StatField::Toi,
    ];

    /// Fields that can be summed across games. Excludes identifiers and
    /// team-name objects.
    pub const AGGREGABLE: [StatField; 14] = [
        StatField::Goals,
        StatField::Assists,
        StatField::Points,
        StatField::PlusMinus,
        StatField::PowerPlayGoals,
        StatField::PowerPlayPoints,
        StatField::GameWinningGoals,
        StatField::OtGoals,
        StatField::Shots,
        StatField::Shifts,
        StatField::ShorthandedGoals,
        StatField::ShorthandedPoints,
        StatField::Pim,
        StatField::Toi,
    ];

    /// Wire name of the field, as it appears in the upstream payload.
    pub fn as_str(self) -> &'static str {
        match self {
            StatField::GameId => "gameId",
            StatField::Goals => "goals",
            StatField::Assists => "assists",
            StatField::CommonName => "commonName",
            StatField::OpponentCommonName => "opponentCommonName",
            StatField::Points => "points",
            StatField::PlusMinus => "plusMinus",
            StatField::PowerPlayGoals => "powerPlayGoals",
            StatField::PowerPlayPoints => "powerPlayPoints",
            StatField::GameWinningGoals => "gameWinningGoals",
            StatField::OtGoals => "otGoals",
            StatField::Shots => "shots",
            StatField::Shifts => "shifts",
            StatField::ShorthandedGoals => "shorthandedGoals",
            StatField::ShorthandedPoints => "shorthandedPoints",
            StatField::Pim => "pim",
            StatField::Toi => "toi",
        }
    }

    /// Look up a field by its wire name. Returns `None` for anything
    /// outside the allow-list.
    pub fn from_name(name: &str) -> Option<StatField> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }
}
