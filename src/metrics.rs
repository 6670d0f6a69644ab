//! Process-wide play counters.
//! Logged at exit by the CLI and printed by `truthorfake play --stats`.
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

static GAMES_STARTED: AtomicU64 = AtomicU64::new(0);
static GAMES_WON: AtomicU64 = AtomicU64::new(0);
static GAMES_LOST: AtomicU64 = AtomicU64::new(0);
static GUESSES_CORRECT: AtomicU64 = AtomicU64::new(0);
static GUESSES_WRONG: AtomicU64 = AtomicU64::new(0);
static REAL_ROUNDS: AtomicU64 = AtomicU64::new(0);
static FAKE_ROUNDS: AtomicU64 = AtomicU64::new(0);
static FETCH_FAILURES: AtomicU64 = AtomicU64::new(0);
static FETCH_LATENCY_SUM_MS: AtomicU64 = AtomicU64::new(0);
static FETCH_LATENCY_COUNT: AtomicU64 = AtomicU64::new(0);

pub fn inc_games_started() {
    GAMES_STARTED.fetch_add(1, Ordering::Relaxed);
}
pub fn inc_games_won() {
    GAMES_WON.fetch_add(1, Ordering::Relaxed);
}
pub fn inc_games_lost() {
    GAMES_LOST.fetch_add(1, Ordering::Relaxed);
}
pub fn record_guess(correct: bool) {
    if correct {
        GUESSES_CORRECT.fetch_add(1, Ordering::Relaxed);
    } else {
        GUESSES_WRONG.fetch_add(1, Ordering::Relaxed);
    }
}
pub fn record_round(real: bool) {
    if real {
        REAL_ROUNDS.fetch_add(1, Ordering::Relaxed);
    } else {
        FAKE_ROUNDS.fetch_add(1, Ordering::Relaxed);
    }
}
pub fn inc_fetch_failures() {
    FETCH_FAILURES.fetch_add(1, Ordering::Relaxed);
}
pub fn observe_fetch_latency(started_at: Instant) {
    let ms = started_at.elapsed().as_millis() as u64;
    FETCH_LATENCY_SUM_MS.fetch_add(ms, Ordering::Relaxed);
    FETCH_LATENCY_COUNT.fetch_add(1, Ordering::Relaxed);
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub games_started: u64,
    pub games_won: u64,
    pub games_lost: u64,
    pub guesses_correct: u64,
    pub guesses_wrong: u64,
    pub real_rounds: u64,
    pub fake_rounds: u64,
    pub fetch_failures: u64,
    pub fetch_latency_avg_ms: Option<u64>,
}

impl Snapshot {
    pub fn summary_line(&self) -> String {
        format!(
            "games={} won={} lost={} guesses={}/{} rounds real={} fake={} fetch_failures={} fetch_avg_ms={}",
            self.games_started,
            self.games_won,
            self.games_lost,
            self.guesses_correct,
            self.guesses_correct + self.guesses_wrong,
            self.real_rounds,
            self.fake_rounds,
            self.fetch_failures,
            self.fetch_latency_avg_ms
                .map(|ms| ms.to_string())
                .unwrap_or_else(|| "-".to_string())
        )
    }
}

pub fn snapshot() -> Snapshot {
    let sum = FETCH_LATENCY_SUM_MS.load(Ordering::Relaxed);
    let count = FETCH_LATENCY_COUNT.load(Ordering::Relaxed);
    Snapshot {
        games_started: GAMES_STARTED.load(Ordering::Relaxed),
        games_won: GAMES_WON.load(Ordering::Relaxed),
        games_lost: GAMES_LOST.load(Ordering::Relaxed),
        guesses_correct: GUESSES_CORRECT.load(Ordering::Relaxed),
        guesses_wrong: GUESSES_WRONG.load(Ordering::Relaxed),
        real_rounds: REAL_ROUNDS.load(Ordering::Relaxed),
        fake_rounds: FAKE_ROUNDS.load(Ordering::Relaxed),
        fetch_failures: FETCH_FAILURES.load(Ordering::Relaxed),
        fetch_latency_avg_ms: if count > 0 { Some(sum / count) } else { None },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Counters are global and other tests bump them concurrently, so only
    // check that they move forward.
    #[test]
    fn counters_increase() {
        let before = snapshot();
        inc_games_started();
        record_guess(true);
        record_guess(false);
        record_round(false);
        inc_fetch_failures();
        let after = snapshot();
        assert!(after.games_started >= before.games_started + 1);
        assert!(after.guesses_correct >= before.guesses_correct + 1);
        assert!(after.guesses_wrong >= before.guesses_wrong + 1);
        assert!(after.fake_rounds >= before.fake_rounds + 1);
        assert!(after.fetch_failures >= before.fetch_failures + 1);
    }

    #[test]
    fn summary_line_formats_missing_latency() {
        let snap = Snapshot {
            games_started: 2,
            guesses_correct: 3,
            guesses_wrong: 1,
            ..Snapshot::default()
        };
        let line = snap.summary_line();
        assert!(line.contains("games=2"));
        assert!(line.contains("guesses=3/4"));
        assert!(line.ends_with("fetch_avg_ms=-"));
    }
}
