use serde::Deserialize;

use crate::game::GameRules;

fn default_betting_enabled() -> bool {
    true
}

fn default_blackjack_pays() -> f64 {
    1.5
}

fn default_dealer_stands_on() -> u8 {
    17
}

fn default_journal_path() -> String {
    "game_results.txt".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct TableConfig {
    #[serde(default = "default_betting_enabled")]
    pub betting_enabled: bool,
    #[serde(default = "default_blackjack_pays")]
    pub blackjack_pays: f64,
    #[serde(default = "default_dealer_stands_on")]
    pub dealer_stands_on: u8,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_journal_path")]
    pub journal_path: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            betting_enabled: default_betting_enabled(),
            blackjack_pays: default_blackjack_pays(),
            dealer_stands_on: default_dealer_stands_on(),
            seed: None,
            journal_path: default_journal_path(),
        }
    }
}

impl TableConfig {
    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|err| format!("Invalid table config: {err}"))
    }

    pub fn to_game_rules(&self) -> Result<GameRules, String> {
        if !self.blackjack_pays.is_finite() || self.blackjack_pays <= 0.0 {
            return Err(format!(
                "blackjack_pays must be a positive number, got {}",
                self.blackjack_pays
            ));
        }
        if !(2..=21).contains(&self.dealer_stands_on) {
            return Err(format!(
                "dealer_stands_on must be between 2 and 21, got {}",
                self.dealer_stands_on
            ));
        }
        Ok(GameRules {
            betting_enabled: self.betting_enabled,
            blackjack_pays: self.blackjack_pays,
            dealer_stands_on: self.dealer_stands_on,
        })
    }
}
