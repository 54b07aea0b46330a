use serde::Serialize;
use utoipa::ToSchema;

use crate::domains::Game;

#[derive(Serialize, Clone, Debug, ToSchema)]
pub struct GameSchema {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub url: String,
}

impl From<Game> for GameSchema {
    fn from(game: Game) -> Self {
        Self {
            id: game.id(),
            title: game.title().to_string(),
            icon: game.icon().to_string(),
            url: game.url().to_string(),
        }
    }
}
