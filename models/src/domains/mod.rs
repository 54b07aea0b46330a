pub mod games;
pub mod scores;
pub mod users;

pub use games::Game;
