//! Game controller: owns the state and runs the reducer's effects.
//!
//! The controller is the only place that touches the outside world. It draws
//! the coin flip and fixture index from the injected RNG, awaits the real-advice
//! source, and swallows fetch failures by substituting the fallback advice.
//! Presentation code calls the three intents and reads [`GameController::state`].

use log::{debug, info, warn};
use rand::Rng;
use std::collections::VecDeque;
use std::time::Instant;

use super::reducer::{reduce, GameEffect, GameEvent, ResolvedAdvice};
use super::state::{GameOutcome, GameState, ScoreRules};
use crate::advice::{AdviceSource, FixtureSet, FALLBACK_ADVICE};
use crate::logutil::preview;
use crate::metrics;
use crate::notify::Notification;

pub struct GameController<S, R> {
    state: GameState,
    source: S,
    fixtures: FixtureSet,
    rng: R,
    fallback: String,
    notifications: Vec<Notification>,
}

impl<S: AdviceSource, R: Rng> GameController<S, R> {
    pub fn new(source: S, fixtures: FixtureSet, rng: R) -> Self {
        Self {
            state: GameState::new(),
            source,
            fixtures,
            rng,
            fallback: FALLBACK_ADVICE.to_string(),
            notifications: Vec::new(),
        }
    }

    /// Replace the score thresholds. Only meaningful before the first start.
    pub fn with_rules(mut self, rules: ScoreRules) -> Self {
        self.state = GameState::with_rules(rules);
        self
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn fixtures(&self) -> &FixtureSet {
        &self.fixtures
    }

    /// Drain notices raised since the last call, oldest first.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    pub async fn start_game(&mut self) {
        info!("Starting new game");
        metrics::inc_games_started();
        self.dispatch(GameEvent::Start).await;
    }

    pub async fn reset_game(&mut self) {
        info!("Resetting game");
        metrics::inc_games_started();
        self.dispatch(GameEvent::Reset).await;
    }

    /// Submit a guess for the advice on screen. Ignored when the game is over,
    /// not started, or the round is still loading.
    pub async fn guess(&mut self, guessed_true: bool) {
        let before = self.state.history.len();
        self.dispatch(GameEvent::Guess { guessed_true }).await;
        if self.state.history.len() == before {
            return;
        }
        if let Some(last) = self.state.history.last() {
            metrics::record_guess(last.correct);
        }
        match self.state.outcome() {
            Some(GameOutcome::Won) => {
                metrics::inc_games_won();
                info!("Game won with {} guesses", self.state.history.len());
            }
            Some(GameOutcome::Lost) => {
                metrics::inc_games_lost();
                info!("Game lost after {} guesses", self.state.history.len());
            }
            None => {}
        }
    }

    /// Feed one event through the reducer and run effects until the state
    /// settles. Effects may produce further events (a finished round load).
    pub async fn dispatch(&mut self, event: GameEvent) {
        let mut pending = VecDeque::from([event]);
        while let Some(event) = pending.pop_front() {
            let transition = reduce(std::mem::take(&mut self.state), event);
            self.state = transition.state;
            for effect in transition.effects {
                match effect {
                    GameEffect::Notify(notice) => self.notifications.push(notice),
                    GameEffect::BeginRound { round } => {
                        let resolved = self.advance_round(round).await;
                        pending.push_back(GameEvent::AdviceResolved(resolved));
                    }
                }
            }
        }
    }

    async fn advance_round(&mut self, round: u64) -> ResolvedAdvice {
        let real = self.rng.gen_bool(0.5);
        metrics::record_round(real);
        if !real {
            let advice = self.fixtures.pick(&mut self.rng).to_string();
            debug!("Round {}: fabricated advice {}", round, preview(&advice));
            return ResolvedAdvice {
                round,
                advice,
                is_true: false,
                fell_back: false,
            };
        }

        debug!("Round {}: fetching real advice", round);
        let started_at = Instant::now();
        let result = self.source.fetch_advice().await;
        metrics::observe_fetch_latency(started_at);
        match result {
            Ok(advice) => ResolvedAdvice {
                round,
                advice,
                is_true: true,
                fell_back: false,
            },
            Err(e) => {
                warn!("Failed to fetch real advice for round {}: {}", round, e);
                metrics::inc_fetch_failures();
                ResolvedAdvice {
                    round,
                    advice: self.fallback.clone(),
                    is_true: true,
                    fell_back: true,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advice::AdviceFetchError;
    use crate::notify::NoticeLevel;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct AlwaysFails;

    impl AdviceSource for AlwaysFails {
        async fn fetch_advice(&self) -> Result<String, AdviceFetchError> {
            Err(AdviceFetchError::Status(503))
        }
    }

    struct Fixed(&'static str);

    impl AdviceSource for Fixed {
        async fn fetch_advice(&self) -> Result<String, AdviceFetchError> {
            Ok(self.0.to_string())
        }
    }

    fn fixtures() -> FixtureSet {
        FixtureSet::from_items(["Fake one.", "Fake two."]).unwrap()
    }

    #[tokio::test]
    async fn start_resolves_first_round() {
        let mut game = GameController::new(Fixed("Real."), fixtures(), StdRng::seed_from_u64(3));
        game.start_game().await;
        let state = game.state();
        assert!(state.game_started);
        assert!(!state.is_loading_advice);
        assert!(state.accepts_guess());
        if state.is_true_advice {
            assert_eq!(state.current_advice, "Real.");
        } else {
            assert!(state.current_advice.starts_with("Fake"));
        }
    }

    #[tokio::test]
    async fn failures_fall_back_to_true_advice() {
        let mut game = GameController::new(AlwaysFails, fixtures(), StdRng::seed_from_u64(11));
        game.start_game().await;
        let mut saw_fallback = false;
        for i in 0..40 {
            let state = game.state().clone();
            assert!(!state.game_over);
            if state.is_true_advice {
                assert_eq!(state.current_advice, FALLBACK_ADVICE);
                saw_fallback = true;
            }
            // Alternate right and wrong so the score hovers around the start.
            game.guess(state.is_true_advice == (i % 2 == 0)).await;
        }
        assert!(saw_fallback, "seeded run never took the real-advice path");
        let notes = game.take_notifications();
        assert!(notes
            .iter()
            .any(|n| n.title == "API Error" && n.level == NoticeLevel::Error));
        assert!(game.take_notifications().is_empty());
    }

    #[tokio::test]
    async fn custom_fallback_text() {
        let mut game = GameController::new(AlwaysFails, fixtures(), StdRng::seed_from_u64(5))
            .with_fallback("Keep calm.");
        game.start_game().await;
        for i in 0..40 {
            let state = game.state().clone();
            if state.is_true_advice {
                assert_eq!(state.current_advice, "Keep calm.");
                return;
            }
            game.guess(i % 2 == 0).await;
        }
        panic!("seeded run never produced a real round");
    }

    #[tokio::test]
    async fn custom_rules_short_game() {
        let rules = ScoreRules { initial: 2, win_at: 4, lose_at: 0 };
        let mut game = GameController::new(Fixed("Real."), fixtures(), StdRng::seed_from_u64(8))
            .with_rules(rules);
        game.start_game().await;
        assert_eq!(game.state().score, 2);
        for _ in 0..2 {
            let actual = game.state().is_true_advice;
            game.guess(actual).await;
        }
        assert!(game.state().game_over);
        assert_eq!(game.state().outcome(), Some(GameOutcome::Won));
        let notes = game.take_notifications();
        assert_eq!(notes.last().unwrap().message, "You reached 4 points!");
    }
}
