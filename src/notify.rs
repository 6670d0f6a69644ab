//! Short, non-blocking notices raised by game transitions.
//!
//! Transitions never wait on the player to acknowledge these; the front end
//! drains them after each intent and shows them however it likes.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
    Neutral,
}

impl NoticeLevel {
    /// Leading marker used by the terminal front end.
    pub fn marker(self) -> &'static str {
        match self {
            NoticeLevel::Success => "✅",
            NoticeLevel::Error => "❌",
            NoticeLevel::Info => "ℹ️",
            NoticeLevel::Neutral => "•",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub level: NoticeLevel,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>, level: NoticeLevel) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            level,
        }
    }

    pub fn correct_guess() -> Self {
        Self::new("Correct!", "You guessed correctly! +1 point.", NoticeLevel::Success)
    }

    pub fn incorrect_guess() -> Self {
        Self::new("Incorrect!", "Too bad, that was wrong. -1 point.", NoticeLevel::Error)
    }

    pub fn victory(win_at: i32) -> Self {
        Self::new(
            "Victory! 🎉",
            format!("You reached {} points!", win_at),
            NoticeLevel::Info,
        )
    }

    pub fn defeat(lose_at: i32) -> Self {
        Self::new(
            "Defeat! 😔",
            format!("Your score dropped to {}. Try again!", lose_at),
            NoticeLevel::Neutral,
        )
    }

    pub fn fetch_failed() -> Self {
        Self::new(
            "API Error",
            "Failed to fetch advice from API. Displaying fallback advice.",
            NoticeLevel::Error,
        )
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.level.marker(), self.title, self.message)
    }
}
