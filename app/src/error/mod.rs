use sea_orm::DbErr;

#[derive(Debug)]
pub enum UserError {
    AlreadyExists,
    InvalidCredentials,
    InvalidInput(String),
    Hash(bcrypt::BcryptError),
    Storage(DbErr),
}

impl std::fmt::Display for UserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserError::AlreadyExists => write!(f, "Username or email already exists."),
            UserError::InvalidCredentials => write!(f, "Invalid username or password."),
            UserError::InvalidInput(message) => write!(f, "{message}"),
            UserError::Hash(e) => write!(f, "Password hashing failed: {e}"),
            UserError::Storage(e) => write!(f, "Storage failure: {e}"),
        }
    }
}

impl std::error::Error for UserError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UserError::Hash(e) => Some(e),
            UserError::Storage(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DbErr> for UserError {
    fn from(e: DbErr) -> Self {
        UserError::Storage(e)
    }
}

impl From<bcrypt::BcryptError> for UserError {
    fn from(e: bcrypt::BcryptError) -> Self {
        UserError::Hash(e)
    }
}

/// Failures of the score ledger and the leaderboard read.
///
/// A reported error always means nothing was written.
#[derive(Debug)]
pub enum ScoreError {
    Unauthenticated,
    InvalidInput(String),
    Storage(DbErr),
}

impl std::fmt::Display for ScoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreError::Unauthenticated => write!(f, "User is not logged in."),
            ScoreError::InvalidInput(message) => write!(f, "{message}"),
            ScoreError::Storage(e) => write!(f, "Storage failure: {e}"),
        }
    }
}

impl std::error::Error for ScoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScoreError::Storage(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DbErr> for ScoreError {
    fn from(e: DbErr) -> Self {
        ScoreError::Storage(e)
    }
}

/// Flattens validator output into the single human-readable line the
/// clients display.
pub fn validation_message(errors: &validator::ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let mut messages: Vec<String> = Vec::new();
    for (field, errors) in fields {
        for error in errors {
            let message = match &error.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid."),
            };
            if !messages.contains(&message) {
                messages.push(message);
            }
        }
    }

    if messages.is_empty() {
        "Invalid input.".to_string()
    } else {
        messages.join(" ")
    }
}
