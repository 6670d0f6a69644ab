//! Line-oriented front end for the game.
//!
//! Turns typed lines into intents and renders [`GameState`] as plain text.
//! Nothing here mutates game state; the CLI loop in `main.rs` glues these
//! functions to a [`crate::game::GameController`].

use crate::game::state::{GameState, HistoryItem, Phase};

pub const TITLE: &str = "Truth or Fake?";

/// What the player typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Start,
    GuessTrue,
    GuessFake,
    Reset,
    History,
    Help,
    Quit,
}

/// Case-insensitive; accepts single letters and whole words.
pub fn parse_command(line: &str) -> Option<PlayerCommand> {
    let word = line.trim().to_ascii_lowercase();
    let cmd = match word.as_str() {
        "s" | "start" => PlayerCommand::Start,
        "t" | "true" | "real" => PlayerCommand::GuessTrue,
        "f" | "fake" | "false" => PlayerCommand::GuessFake,
        "r" | "reset" | "again" | "play again" => PlayerCommand::Reset,
        "h" | "history" => PlayerCommand::History,
        "?" | "help" => PlayerCommand::Help,
        "q" | "quit" | "exit" => PlayerCommand::Quit,
        _ => return None,
    };
    Some(cmd)
}

pub fn help_text() -> String {
    [
        "Commands:",
        "  S / START    start a game",
        "  T / TRUE     guess the advice is real",
        "  F / FAKE     guess the advice is made up",
        "  R / AGAIN    start over",
        "  H / HISTORY  show your guesses so far",
        "  Q / QUIT     leave",
    ]
    .join("\n")
}

/// Full screen for the current state.
pub fn render_screen(state: &GameState) -> String {
    let mut out = format!("=== {} ===\n", TITLE);
    match state.phase() {
        Phase::NotStarted => {
            out.push_str("Type START to begin the game!\n");
        }
        Phase::RoundLoading => {
            out.push_str(&format!("Score: {}\n", state.score));
            out.push_str("(loading advice...)\n");
        }
        Phase::RoundReady => {
            out.push_str(&format!("Score: {}\n", state.score));
            out.push_str(&format!("\"{}\"\n", state.current_advice));
            out.push_str("[T]rue advice or [F]ake advice?\n");
        }
        Phase::Finished => {
            out.push_str(&format!("Score: {}\n", state.score));
            if let Some(result) = &state.game_result {
                out.push_str(result);
                out.push('\n');
            }
            if !state.history.is_empty() {
                out.push_str(&render_history(&state.history));
            }
            out.push_str("Type AGAIN to play again.\n");
        }
    }
    out
}

pub fn render_history(history: &[HistoryItem]) -> String {
    if history.is_empty() {
        return "No guesses yet.\n".to_string();
    }
    let mut out = String::from("Game History:\n");
    for (idx, item) in history.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}) \"{}\"  [{}] [{}]\n",
            idx + 1,
            item.advice,
            if item.actual_is_true { "TRUE" } else { "FAKE" },
            if item.correct { "Correct Guess" } else { "Incorrect Guess" }
        ));
    }
    let correct = history.iter().filter(|h| h.correct).count();
    out.push_str(&format!("{}/{} correct\n", correct, history.len()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::WIN_MESSAGE;

    fn item(advice: &str, actual: bool, guessed: bool) -> HistoryItem {
        HistoryItem {
            advice: advice.to_string(),
            actual_is_true: actual,
            guessed_true: guessed,
            correct: actual == guessed,
        }
    }

    #[test]
    fn parses_letters_and_words() {
        assert_eq!(parse_command("t"), Some(PlayerCommand::GuessTrue));
        assert_eq!(parse_command("  FAKE "), Some(PlayerCommand::GuessFake));
        assert_eq!(parse_command("Start"), Some(PlayerCommand::Start));
        assert_eq!(parse_command("again"), Some(PlayerCommand::Reset));
        assert_eq!(parse_command("Q"), Some(PlayerCommand::Quit));
        assert_eq!(parse_command("?"), Some(PlayerCommand::Help));
        assert_eq!(parse_command("maybe"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn not_started_screen() {
        let screen = render_screen(&GameState::new());
        assert!(screen.contains(TITLE));
        assert!(screen.contains("Type START"));
        assert!(!screen.contains("Score:"));
    }

    #[test]
    fn ready_screen_shows_advice_and_prompt() {
        let mut state = GameState::new();
        state.game_started = true;
        state.current_advice = "Drink water.".to_string();
        let screen = render_screen(&state);
        assert!(screen.contains("Score: 10"));
        assert!(screen.contains("\"Drink water.\""));
        assert!(screen.contains("[T]rue advice or [F]ake advice?"));
    }

    #[test]
    fn loading_screen_hides_prompt() {
        let mut state = GameState::new();
        state.game_started = true;
        state.is_loading_advice = true;
        let screen = render_screen(&state);
        assert!(screen.contains("loading"));
        assert!(!screen.contains("[T]rue"));
    }

    #[test]
    fn finished_screen_shows_result_and_history() {
        let mut state = GameState::new();
        state.game_started = true;
        state.game_over = true;
        state.score = 20;
        state.game_result = Some(WIN_MESSAGE.to_string());
        state.history = vec![item("Floss.", true, true), item("Eat glue.", false, true)];
        let screen = render_screen(&state);
        assert!(screen.contains(WIN_MESSAGE));
        assert!(screen.contains("Game History:"));
        assert!(screen.contains("[TRUE] [Correct Guess]"));
        assert!(screen.contains("[FAKE] [Incorrect Guess]"));
        assert!(screen.contains("1/2 correct"));
        assert!(screen.contains("Type AGAIN"));
    }

    #[test]
    fn empty_history() {
        assert_eq!(render_history(&[]), "No guesses yet.\n");
    }
}
