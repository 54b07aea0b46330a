use std::fmt;

use sea_orm::entity::prelude::*;

/// Every game the portal hosts, declared in dashboard order.
///
/// The `string_value` is what clients send as `game_name` and what the
/// `scores` table stores, so renaming one orphans its leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(64))")]
pub enum Game {
    #[sea_orm(string_value = "2048")]
    Game2048,
    #[sea_orm(string_value = "TicTacToe")]
    TicTacToe,
    #[sea_orm(string_value = "RockPaperScissors")]
    RockPaperScissors,
    #[sea_orm(string_value = "Wordle")]
    Wordle,
    #[sea_orm(string_value = "UnscrambleWords")]
    UnscrambleWords,
    #[sea_orm(string_value = "MathRiddles")]
    MathRiddles,
    #[sea_orm(string_value = "Sudoku")]
    Sudoku,
    #[sea_orm(string_value = "FlappyBird")]
    FlappyBird,
}

impl Game {
    pub fn id(self) -> String {
        self.to_value()
    }

    pub const fn title(self) -> &'static str {
        match self {
            Game::TicTacToe => "Tic-Tac-Toe",
            Game::Game2048 => "2048",
            Game::RockPaperScissors => "Rock Paper Scissors",
            Game::Wordle => "Wordle",
            Game::UnscrambleWords => "Unscramble Words",
            Game::MathRiddles => "Math Riddles",
            Game::Sudoku => "Sudoku",
            Game::FlappyBird => "Flappy Bird",
        }
    }

    /// Lucide icon name shown on the dashboard card.
    pub const fn icon(self) -> &'static str {
        match self {
            Game::TicTacToe => "x",
            Game::Game2048 => "blocks",
            Game::RockPaperScissors => "scissors",
            Game::Wordle => "spell-check",
            Game::UnscrambleWords => "shuffle",
            Game::MathRiddles => "brain-circuit",
            Game::Sudoku => "grid-3x3",
            Game::FlappyBird => "bird",
        }
    }

    pub const fn url(self) -> &'static str {
        match self {
            Game::TicTacToe => "games/tictactoe/index.html",
            Game::Game2048 => "games/2048/index.html",
            Game::RockPaperScissors => "games/rockpaperscissors/index.html",
            Game::Wordle => "games/wordle/index.html",
            Game::UnscrambleWords => "games/unscramblewords/index.html",
            Game::MathRiddles => "games/mathriddles/index.html",
            Game::Sudoku => "games/sudoku/index.html",
            Game::FlappyBird => "games/flappybird/index.html",
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_value())
    }
}
