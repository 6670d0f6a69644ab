//! Game state record and its derived views.
//!
//! [`GameState`] is the single source of truth for one play session. It is plain
//! data: every change goes through [`crate::game::reducer::reduce`], which keeps
//! the score/history invariants in one place and lets the state be snapshotted
//! with serde at any point.

use serde::{Deserialize, Serialize};

/// Score a new game starts with.
pub const INITIAL_SCORE: i32 = 10;
/// Reaching this score wins the game.
pub const WIN_SCORE: i32 = 20;
/// Dropping to this score loses the game.
pub const LOSE_SCORE: i32 = 0;

pub const WIN_MESSAGE: &str = "Congratulations! You won!";
pub const LOSE_MESSAGE: &str = "Too bad! You lost.";
/// Shown in place of the advice while a round is being resolved.
pub const LOADING_PLACEHOLDER: &str = "Loading advice...";

/// One resolved guess. Never modified after it is pushed onto the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub advice: String,
    pub actual_is_true: bool,
    pub guessed_true: bool,
    pub correct: bool,
}

/// Coarse position in the game/round state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    NotStarted,
    RoundLoading,
    RoundReady,
    Finished,
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Won,
    Lost,
}

impl GameOutcome {
    pub fn message(self) -> &'static str {
        match self {
            GameOutcome::Won => WIN_MESSAGE,
            GameOutcome::Lost => LOSE_MESSAGE,
        }
    }
}

/// Score thresholds. Defaults are 10 / 20 / 0; config may override them for
/// shorter or longer games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRules {
    pub initial: i32,
    pub win_at: i32,
    pub lose_at: i32,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            initial: INITIAL_SCORE,
            win_at: WIN_SCORE,
            lose_at: LOSE_SCORE,
        }
    }
}

impl ScoreRules {
    /// Win is checked before loss.
    pub fn outcome_for(&self, score: i32) -> Option<GameOutcome> {
        if score >= self.win_at {
            Some(GameOutcome::Won)
        } else if score <= self.lose_at {
            Some(GameOutcome::Lost)
        } else {
            None
        }
    }

    /// Thresholds must leave room for at least one guess from the initial score.
    pub fn is_valid(&self) -> bool {
        self.lose_at < self.initial && self.initial < self.win_at
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub score: i32,
    pub current_advice: String,
    pub is_true_advice: bool,
    pub game_started: bool,
    pub game_over: bool,
    pub game_result: Option<String>,
    pub is_loading_advice: bool,
    pub history: Vec<HistoryItem>,
    /// Identity of the round currently shown or loading; bumped on every advance.
    pub round: u64,
    #[serde(default)]
    pub rules: ScoreRules,
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_rules(ScoreRules::default())
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: ScoreRules) -> Self {
        Self {
            score: rules.initial,
            current_advice: String::new(),
            is_true_advice: false,
            game_started: false,
            game_over: false,
            game_result: None,
            is_loading_advice: false,
            history: Vec::new(),
            round: 0,
            rules,
        }
    }

    pub fn phase(&self) -> Phase {
        if !self.game_started {
            Phase::NotStarted
        } else if self.game_over {
            Phase::Finished
        } else if self.is_loading_advice {
            Phase::RoundLoading
        } else {
            Phase::RoundReady
        }
    }

    /// Guesses are only meaningful while an advice item is on screen.
    pub fn accepts_guess(&self) -> bool {
        self.phase() == Phase::RoundReady
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.game_over {
            self.rules.outcome_for(self.score)
        } else {
            None
        }
    }

    pub fn correct_guesses(&self) -> usize {
        self.history.iter().filter(|h| h.correct).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_not_started() {
        let state = GameState::new();
        assert_eq!(state.score, 10);
        assert_eq!(state.phase(), Phase::NotStarted);
        assert!(!state.accepts_guess());
        assert!(state.history.is_empty());
        assert_eq!(state.game_result, None);
    }

    #[test]
    fn phase_follows_flags() {
        let mut state = GameState::new();
        state.game_started = true;
        state.is_loading_advice = true;
        assert_eq!(state.phase(), Phase::RoundLoading);
        state.is_loading_advice = false;
        assert_eq!(state.phase(), Phase::RoundReady);
        assert!(state.accepts_guess());
        state.game_over = true;
        assert_eq!(state.phase(), Phase::Finished);
        assert!(!state.accepts_guess());
    }

    #[test]
    fn outcome_checks_win_before_loss() {
        let rules = ScoreRules::default();
        assert_eq!(rules.outcome_for(20), Some(GameOutcome::Won));
        assert_eq!(rules.outcome_for(21), Some(GameOutcome::Won));
        assert_eq!(rules.outcome_for(0), Some(GameOutcome::Lost));
        assert_eq!(rules.outcome_for(-1), Some(GameOutcome::Lost));
        assert_eq!(rules.outcome_for(1), None);
        assert_eq!(rules.outcome_for(19), None);
    }

    #[test]
    fn rules_validation() {
        assert!(ScoreRules::default().is_valid());
        let bad = ScoreRules { initial: 20, win_at: 20, lose_at: 0 };
        assert!(!bad.is_valid());
        let inverted = ScoreRules { initial: 5, win_at: 10, lose_at: 6 };
        assert!(!inverted.is_valid());
    }

    #[test]
    fn state_snapshot_serde() {
        let mut state = GameState::new();
        state.game_started = true;
        state.current_advice = "Drink water.".to_string();
        state.history.push(HistoryItem {
            advice: "Drink water.".to_string(),
            actual_is_true: true,
            guessed_true: false,
            correct: false,
        });
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"actual_is_true\":true"));
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
