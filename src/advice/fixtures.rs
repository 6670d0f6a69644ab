//! Fabricated advice used for "fake" rounds.
//!
//! A built-in list ships with the binary. A JSON array of strings may replace it
//! at startup (`advice.fixtures_file`); after loading, the set never changes.

use log::{debug, warn};
use rand::Rng;
use std::path::Path;
use tokio::fs;

use super::error::FixtureError;

/// Plausible-sounding advice nobody should follow.
const BUILTIN_FAKE_ADVICE: [&str; 30] = [
    "Always water your cactus twice a day, cacti love attention.",
    "If you can't find your keys, check the freezer first.",
    "Never trust a dog that doesn't like cheese.",
    "Clap three times before opening an important email.",
    "The best time to start a diet is right after dessert.",
    "Whisper your password to your plants so you never forget it.",
    "Wear socks to bed on Tuesdays for better luck.",
    "Eat breakfast for dinner and dinner for breakfast to confuse your metabolism.",
    "If a meeting runs long, stand on your chair to signal it's over.",
    "Never make a decision on an odd-numbered day.",
    "Put your phone in rice whenever you feel sad.",
    "Laugh loudly at your own jokes so others know when to laugh.",
    "Always sleep with your head facing north for sharper dreams.",
    "Reply to every text with a question to keep the conversation alive forever.",
    "Hum while you read to remember twice as much.",
    "Buy shoes half a size too small; they will stretch into confidence.",
    "Count backwards from 100 before eating any fruit.",
    "Never wave at a bus you are not planning to catch.",
    "Keep a spoon in your pocket; you never know when soup will happen.",
    "Iron your money before spending it so it lasts longer.",
    "If you sneeze twice, make a wish before the third one.",
    "Read the last page of every book first to save time.",
    "Talk to your car nicely and it will use less fuel.",
    "The secret to happiness is alphabetizing your spice rack.",
    "Only answer the phone on the third ring, never sooner.",
    "Paint one fingernail blue for better concentration.",
    "Name your houseplants after your enemies; they will never grow.",
    "Always walk backwards into job interviews to show confidence.",
    "Salt your coffee to make mornings shorter.",
    "Leave one sock unmatched per drawer to keep the others honest.",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureSet {
    items: Vec<String>,
}

impl FixtureSet {
    pub fn builtin() -> Self {
        Self {
            items: BUILTIN_FAKE_ADVICE.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Blank entries are dropped; an empty result is an error so that `pick`
    /// always has something to return.
    pub fn from_items<I, S>(items: I) -> Result<Self, FixtureError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items
            .into_iter()
            .map(|s| {
                let s: String = s.into();
                s.trim().to_string()
            })
            .filter(|s| !s.is_empty())
            .collect();
        if items.is_empty() {
            return Err(FixtureError::Empty);
        }
        Ok(Self { items })
    }

    pub fn from_json_str(json: &str) -> Result<Self, FixtureError> {
        let raw: Vec<String> = serde_json::from_str(json)?;
        let total = raw.len();
        let set = Self::from_items(raw)?;
        if set.len() < total {
            warn!("fixtures: skipped {} blank entries", total - set.len());
        }
        Ok(set)
    }

    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await.map_err(|source| FixtureError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let set = Self::from_json_str(&content)?;
        debug!("fixtures: loaded {} entries from {}", set.len(), path.display());
        Ok(set)
    }

    /// Uniform pick over the whole list.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let idx = rng.gen_range(0..self.items.len());
        &self.items[idx]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

impl Default for FixtureSet {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn builtin_is_non_empty_and_unique() {
        let set = FixtureSet::builtin();
        assert_eq!(set.len(), BUILTIN_FAKE_ADVICE.len());
        let unique: std::collections::HashSet<_> = set.iter().collect();
        assert_eq!(unique.len(), set.len());
    }

    #[test]
    fn pick_returns_member() {
        let set = FixtureSet::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let advice = set.pick(&mut rng);
            assert!(set.iter().any(|a| a == advice));
        }
    }

    #[test]
    fn pick_is_reproducible_with_seed() {
        let set = FixtureSet::builtin();
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let first: Vec<String> = (0..10).map(|_| set.pick(&mut a).to_string()).collect();
        let second: Vec<String> = (0..10).map(|_| set.pick(&mut b).to_string()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn pick_covers_the_list() {
        let set = FixtureSet::from_items(["a", "b", "c"]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let seen: std::collections::HashSet<String> =
            (0..200).map(|_| set.pick(&mut rng).to_string()).collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn json_fixtures_drop_blanks() {
        let set = FixtureSet::from_json_str(r#"["One.", "  ", "Two."]"#).unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["One.", "Two."]);
    }

    #[test]
    fn empty_fixtures_rejected() {
        assert!(matches!(
            FixtureSet::from_json_str("[]"),
            Err(FixtureError::Empty)
        ));
        assert!(matches!(
            FixtureSet::from_json_str(r#"["", " "]"#),
            Err(FixtureError::Empty)
        ));
    }

    #[test]
    fn non_array_rejected() {
        assert!(matches!(
            FixtureSet::from_json_str(r#"{"advice": "x"}"#),
            Err(FixtureError::Parse(_))
        ));
    }
}
