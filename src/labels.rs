//! User-facing text in the supported languages.

use crate::games::tictactoe::{GameStatus, MoveLabel};
use serde::{Deserialize, Serialize};

/// Language of every label shown to the player.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum, strum::EnumIter,
)]
pub enum Language {
    /// English.
    #[default]
    #[serde(rename = "en")]
    #[value(name = "en")]
    English,
    /// Russian.
    #[serde(rename = "ru")]
    #[value(name = "ru")]
    Russian,
}

impl Language {
    /// Window title.
    pub fn title(self) -> &'static str {
        match self {
            Language::English => "Tic-Tac-Toe",
            Language::Russian => "Крестики-нолики",
        }
    }

    /// Heading of the move list.
    pub fn moves_heading(self) -> &'static str {
        match self {
            Language::English => "Moves",
            Language::Russian => "Ходы",
        }
    }

    /// Heading of the status box.
    pub fn status_heading(self) -> &'static str {
        match self {
            Language::English => "Status",
            Language::Russian => "Статус",
        }
    }

    /// Key binding summary.
    pub fn help(self) -> &'static str {
        match self {
            Language::English => {
                "Click/1-9/Enter: move | [ ]: step | Home/End: jump | R: restart | Q: quit"
            }
            Language::Russian => {
                "Клик/1-9/Enter: ход | [ ]: шаг | Home/End: переход | R: заново | Q: выход"
            }
        }
    }

    /// Text of one move-list entry.
    pub fn move_label(self, label: &MoveLabel) -> String {
        match (self, label) {
            (Language::English, MoveLabel::GameStart) => "Go to game start".to_string(),
            (Language::Russian, MoveLabel::GameStart) => "К началу игры".to_string(),
            (Language::English, MoveLabel::Move { number, column, row }) => {
                format!("Go to move #{} ({}, {})", number, column, row)
            }
            (Language::Russian, MoveLabel::Move { number, column, row }) => {
                format!("Перейти к ходу #{} ({}, {})", number, column, row)
            }
        }
    }

    /// Status line for a game status.
    pub fn status_line(self, status: &GameStatus) -> String {
        match (self, status) {
            (Language::English, GameStatus::Won(player)) => format!("Winner: {}", player),
            (Language::Russian, GameStatus::Won(player)) => format!("Выиграл {}", player),
            (Language::English, GameStatus::Draw) => "Draw!".to_string(),
            (Language::Russian, GameStatus::Draw) => "НИЧЬЯ!".to_string(),
            (Language::English, GameStatus::InProgress { to_move }) => {
                format!("Next player: {}", to_move)
            }
            (Language::Russian, GameStatus::InProgress { to_move }) => {
                format!("Следующий ход: {}", to_move)
            }
        }
    }
}
