use chrono::Utc;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveEnum, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Set, TransactionTrait,
};
use validator::Validate;

use models::domains::{Game, scores, users};
use models::params::score::SubmitScoreParams;
use models::schemas::score::LeaderboardEntry;
use models::schemas::user::UserSchema;

use crate::error::{ScoreError, validation_message};

/// Resolves a client-supplied game id. Surrounding whitespace is ignored;
/// the id itself matches exactly.
fn parse_game(game_name: &str) -> Result<Game, ScoreError> {
    let game_name = game_name.trim();
    Game::try_from_value(&game_name.to_string())
        .map_err(|_| ScoreError::InvalidInput(format!("Unknown game: {game_name}")))
}

/// The ledger entry after a submission, and whether this submission
/// created it.
#[derive(Debug, Clone)]
pub struct SubmittedScore {
    pub record: scores::Model,
    pub created: bool,
}

/// Adds `params.score` to the caller's total for one game, creating the
/// entry on first play.
///
/// Runs in one transaction: an atomic `UPDATE .. SET score = score + :points`
/// and, when no entry exists yet, an `INSERT .. ON CONFLICT DO UPDATE` that
/// still accumulates if a concurrent first submission got there first. No
/// increment is lost, and a failure leaves the ledger untouched.
pub async fn submit_score(
    db: &DbConn,
    user: &UserSchema,
    params: SubmitScoreParams,
) -> Result<SubmittedScore, ScoreError> {
    params
        .validate()
        .map_err(|e| ScoreError::InvalidInput(validation_message(&e)))?;
    let game = parse_game(&params.game_name)?;
    let points = params.score;

    let submitted = accumulate(db, &user.id, game, points).await.map_err(|e| {
        tracing::error!(user_id = %user.id, game = %game, "Failed to save score: {}", e);
        ScoreError::from(e)
    })?;

    tracing::info!(
        user_id = %user.id,
        game = %game,
        points,
        total = submitted.record.score,
        created = submitted.created,
        "Score saved"
    );

    Ok(submitted)
}

async fn accumulate(
    db: &DbConn,
    user_id: &str,
    game: Game,
    points: i64,
) -> Result<SubmittedScore, DbErr> {
    let now = Utc::now().fixed_offset();
    let txn = db.begin().await?;

    let updated = scores::Entity::update_many()
        .col_expr(
            scores::Column::Score,
            Expr::col(scores::Column::Score).add(points),
        )
        .col_expr(scores::Column::PlayedAt, Expr::value(now))
        .filter(scores::Column::UserId.eq(user_id))
        .filter(scores::Column::GameName.eq(game))
        .exec(&txn)
        .await?;

    let created = updated.rows_affected == 0;
    if created {
        let entry = scores::ActiveModel {
            user_id: Set(user_id.to_string()),
            game_name: Set(game),
            score: Set(points),
            played_at: Set(now),
        };
        scores::Entity::insert(entry)
            .on_conflict(
                OnConflict::columns([scores::Column::UserId, scores::Column::GameName])
                    .value(
                        scores::Column::Score,
                        Expr::col((scores::Entity, scores::Column::Score)).add(points),
                    )
                    .value(scores::Column::PlayedAt, now)
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;
    }

    let record = scores::Entity::find_by_id((user_id.to_string(), game))
        .one(&txn)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("score of {user_id} for {game}")))?;
    txn.commit().await?;

    Ok(SubmittedScore { record, created })
}

/// Everyone's total for one game, best first.
///
/// Equal totals rank the more recently played entry higher; the username
/// settles the rest so the order is stable between calls. A missing or
/// blank game name is an empty board, not an error.
pub async fn get_leaderboard(
    db: &DbConn,
    game_name: Option<&str>,
) -> Result<Vec<LeaderboardEntry>, ScoreError> {
    let game = match game_name.map(str::trim) {
        Some(name) if !name.is_empty() => parse_game(name)?,
        _ => return Ok(Vec::new()),
    };

    scores::Entity::find()
        .select_only()
        .column_as(users::Column::Username, "username")
        .column_as(scores::Column::Score, "score")
        .inner_join(users::Entity)
        .filter(scores::Column::GameName.eq(game))
        .order_by_desc(scores::Column::Score)
        .order_by_desc(scores::Column::PlayedAt)
        .order_by_asc(users::Column::Username)
        .into_model::<LeaderboardEntry>()
        .all(db)
        .await
        .map_err(|e| {
            tracing::error!(game = %game, "Failed to load leaderboard: {}", e);
            ScoreError::from(e)
        })
}

pub async fn get_user_scores(db: &DbConn, user_id: &str) -> Result<Vec<scores::Model>, ScoreError> {
    Ok(scores::Entity::find()
        .filter(scores::Column::UserId.eq(user_id))
        .order_by_asc(scores::Column::GameName)
        .all(db)
        .await?)
}
