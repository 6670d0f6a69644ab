//! Pure transition function for the game/round state machine.
//!
//! ```text
//! NotStarted ──Start──▶ RoundLoading ──AdviceResolved──▶ RoundReady
//!                           ▲                                │
//!                           └──────────Guess (continue)──────┤
//!                                                            ▼
//!                         Finished ◀──Guess (score hits a threshold)
//! ```
//!
//! `reduce` never performs I/O or draws randomness. Anything it needs from the
//! outside world comes back as a [`GameEffect`] for the caller to run, and the
//! result of that work is fed back in as another [`GameEvent`].

use log::debug;

use super::state::{GameOutcome, GameState, HistoryItem, LOADING_PLACEHOLDER};
use crate::notify::Notification;

/// An advice item picked for a specific round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAdvice {
    pub round: u64,
    pub advice: String,
    pub is_true: bool,
    /// Set when the remote source failed and the fallback text was substituted.
    pub fell_back: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Start,
    Reset,
    Guess { guessed_true: bool },
    AdviceResolved(ResolvedAdvice),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEffect {
    /// Pick and resolve advice for `round`, then dispatch `AdviceResolved`.
    BeginRound { round: u64 },
    Notify(Notification),
}

#[derive(Debug, Clone)]
pub struct Transition {
    pub state: GameState,
    pub effects: Vec<GameEffect>,
}

impl Transition {
    fn unchanged(state: GameState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }
}

pub fn reduce(state: GameState, event: GameEvent) -> Transition {
    match event {
        GameEvent::Start | GameEvent::Reset => start(state),
        GameEvent::Guess { guessed_true } => guess(state, guessed_true),
        GameEvent::AdviceResolved(resolved) => resolve(state, resolved),
    }
}

fn start(mut state: GameState) -> Transition {
    state.score = state.rules.initial;
    state.game_result = None;
    state.game_over = false;
    state.game_started = true;
    state.history.clear();
    state.is_true_advice = false;

    let mut effects = Vec::new();
    begin_round(&mut state, &mut effects);
    debug!("game started (round {})", state.round);
    Transition { state, effects }
}

fn guess(mut state: GameState, guessed_true: bool) -> Transition {
    if state.game_over {
        debug!("guess ignored: game is over");
        return Transition::unchanged(state);
    }
    if !state.game_started {
        debug!("guess ignored: game not started");
        return Transition::unchanged(state);
    }
    if state.is_loading_advice {
        debug!("guess ignored: round {} still loading", state.round);
        return Transition::unchanged(state);
    }

    let correct = guessed_true == state.is_true_advice;
    let mut effects = Vec::new();
    if correct {
        state.score += 1;
        effects.push(GameEffect::Notify(Notification::correct_guess()));
    } else {
        state.score -= 1;
        effects.push(GameEffect::Notify(Notification::incorrect_guess()));
    }
    debug!(
        "guess={} actual={} correct={} score={}",
        guessed_true, state.is_true_advice, correct, state.score
    );

    state.history.push(HistoryItem {
        advice: state.current_advice.clone(),
        actual_is_true: state.is_true_advice,
        guessed_true,
        correct,
    });

    match state.rules.outcome_for(state.score) {
        Some(outcome) => {
            state.game_result = Some(outcome.message().to_string());
            state.game_over = true;
            let notice = match outcome {
                GameOutcome::Won => Notification::victory(state.rules.win_at),
                GameOutcome::Lost => Notification::defeat(state.rules.lose_at),
            };
            effects.push(GameEffect::Notify(notice));
            debug!("game finished: {:?} at score {}", outcome, state.score);
        }
        None => begin_round(&mut state, &mut effects),
    }

    Transition { state, effects }
}

fn resolve(mut state: GameState, resolved: ResolvedAdvice) -> Transition {
    if resolved.round != state.round || !state.is_loading_advice || state.game_over {
        debug!(
            "discarding advice for round {} (current round {}, loading={})",
            resolved.round, state.round, state.is_loading_advice
        );
        return Transition::unchanged(state);
    }

    state.current_advice = resolved.advice;
    state.is_true_advice = resolved.is_true;
    state.is_loading_advice = false;

    let mut effects = Vec::new();
    if resolved.fell_back {
        effects.push(GameEffect::Notify(Notification::fetch_failed()));
    }
    Transition { state, effects }
}

fn begin_round(state: &mut GameState, effects: &mut Vec<GameEffect>) {
    state.round += 1;
    state.is_loading_advice = true;
    state.current_advice = LOADING_PLACEHOLDER.to_string();
    effects.push(GameEffect::BeginRound { round: state.round });
}
