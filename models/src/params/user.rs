use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Deserialize, Validate, ToSchema)]
pub struct CreateUserParams {
    #[validate(length(min = 1, max = 50, message = "Username is required."))]
    pub username: String,
    #[validate(email(message = "Invalid email format."))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters long."))]
    pub password: String,
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct LoginUserParams {
    #[validate(length(min = 1, message = "Username and password are required."))]
    pub username: String,
    #[validate(length(min = 1, message = "Username and password are required."))]
    pub password: String,
}
