pub mod score;
pub mod user;
