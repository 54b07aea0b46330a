use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Largest delta a single submission may add to a ledger entry.
pub const MAX_POINTS_PER_SUBMISSION: i64 = 1_000_000;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SubmitScoreParams {
    /// Registry id of the game, e.g. `"Wordle"` or `"2048"`.
    #[validate(length(min = 1, message = "Game name or score not provided."))]
    pub game_name: String,
    /// Points to add to the caller's running total for this game.
    #[validate(range(min = 0, max = MAX_POINTS_PER_SUBMISSION, message = "Score must be between 0 and 1000000."))]
    pub score: i64,
}
