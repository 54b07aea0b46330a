use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DbConn, EntityTrait, QueryFilter, Set, SqlErr,
};
use uuid::Uuid;

use models::domains::users;
use models::params::user::{CreateUserParams, LoginUserParams};

use crate::error::UserError;

const MIN_PASSWORD_LEN: usize = 6;

pub async fn create_user(
    db: &DbConn,
    params: CreateUserParams,
    hash_cost: u32,
) -> Result<users::Model, UserError> {
    let username = params.username.trim();
    let email = params.email.trim();
    let password = params.password.trim();

    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err(UserError::InvalidInput("All fields are required.".to_string()));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(UserError::InvalidInput(
            "Password must be at least 6 characters long.".to_string(),
        ));
    }

    let existing_user = users::Entity::find()
        .filter(
            Condition::any()
                .add(users::Column::Username.eq(username))
                .add(users::Column::Email.eq(email)),
        )
        .one(db)
        .await?;
    if existing_user.is_some() {
        return Err(UserError::AlreadyExists);
    }

    let password_hash = bcrypt::hash(password, hash_cost)?;

    let inserted = users::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        username: Set(username.to_string()),
        email: Set(email.to_string()),
        password_hash: Set(password_hash),
        created_at: Set(Utc::now().fixed_offset()),
    }
    .insert(db)
    .await;

    match inserted {
        Ok(user) => {
            tracing::info!(user_id = %user.id, username = %user.username, "Registered user");
            Ok(user)
        }
        // Lost a race against a concurrent registration with the same name.
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            Err(UserError::AlreadyExists)
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn get_user(db: &DbConn, id: &str) -> Result<Option<users::Model>, UserError> {
    Ok(users::Entity::find_by_id(id).one(db).await?)
}

pub async fn login_user(
    db: &DbConn,
    LoginUserParams { username, password }: LoginUserParams,
) -> Result<users::Model, UserError> {
    let username = username.trim();
    let password = password.trim();

    if username.is_empty() || password.is_empty() {
        return Err(UserError::InvalidInput(
            "Username and password are required.".to_string(),
        ));
    }

    let user = users::Entity::find()
        .filter(users::Column::Username.eq(username))
        .one(db)
        .await?
        .ok_or(UserError::InvalidCredentials)?;

    if !bcrypt::verify(password, &user.password_hash)? {
        tracing::debug!(username = %username, "Rejected login with wrong password");
        return Err(UserError::InvalidCredentials);
    }

    tracing::info!(user_id = %user.id, "User logged in");
    Ok(user)
}
