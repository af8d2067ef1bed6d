//! Append-only record of finished rounds.
//!
//! Each finished round becomes one text line such as
//! `Player Score : 20 | Dealer Score : 19 | Bet Amount : 10.00$ | Player wins 20.00$`.
//! Writing the line is best effort: callers log a failure and carry on.

use std::{
    fs::OpenOptions,
    io::Write,
    path::PathBuf,
};

use crate::{error::GameError, game::RoundRecord};

pub fn log_line(record: &RoundRecord) -> String {
    let mut line = format!(
        "Player Score : {} | Dealer Score : {}",
        record.player_score, record.dealer_score
    );
    if let Some(bet) = record.bet {
        line.push_str(&format!(" | Bet Amount : {bet:.2}$"));
    }
    line.push_str(" | ");
    line.push_str(record.outcome.log_phrase());
    if let (true, Some(winnings)) = (record.outcome.logs_winnings(), record.winnings) {
        line.push_str(&format!(" {winnings:.2}$"));
    }
    line
}

pub trait Journal {
    fn append(&mut self, record: &RoundRecord) -> Result<(), GameError>;
}

impl<J: Journal + ?Sized> Journal for Box<J> {
    fn append(&mut self, record: &RoundRecord) -> Result<(), GameError> {
        (**self).append(record)
    }
}

/// Appends lines to a text file, creating it on first use.
pub struct FileJournal {
    path: PathBuf,
}

impl FileJournal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileJournal { path: path.into() }
    }
}

impl Journal for FileJournal {
    fn append(&mut self, record: &RoundRecord) -> Result<(), GameError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", log_line(record))?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryJournal {
    lines: Vec<String>,
}

impl MemoryJournal {
    pub fn new() -> Self {
        MemoryJournal::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Journal for MemoryJournal {
    fn append(&mut self, record: &RoundRecord) -> Result<(), GameError> {
        self.lines.push(log_line(record));
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use self::browser::{CallbackJournal, ConsoleJournal};

#[cfg(target_arch = "wasm32")]
mod browser {
    use js_sys::Function;
    use wasm_bindgen::JsValue;

    use super::{log_line, Journal};
    use crate::{error::GameError, game::RoundRecord};

    /// Writes lines to the browser console.
    pub struct ConsoleJournal;

    impl Journal for ConsoleJournal {
        fn append(&mut self, record: &RoundRecord) -> Result<(), GameError> {
            web_sys::console::log_1(&JsValue::from_str(&log_line(record)));
            Ok(())
        }
    }

    /// Hands each line to a page-supplied function, e.g. one that persists to storage.
    pub struct CallbackJournal {
        callback: Function,
    }

    impl CallbackJournal {
        pub fn new(callback: Function) -> Self {
            CallbackJournal { callback }
        }
    }

    impl Journal for CallbackJournal {
        fn append(&mut self, record: &RoundRecord) -> Result<(), GameError> {
            self.callback
                .call1(&JsValue::NULL, &JsValue::from_str(&log_line(record)))
                .map(|_| ())
                .map_err(|err| GameError::LogWrite(std::io::Error::other(format!("{err:?}"))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Outcome;

    fn record(outcome: Outcome, bet: Option<f64>, winnings: Option<f64>) -> RoundRecord {
        RoundRecord {
            outcome,
            player_score: 20,
            dealer_score: 19,
            bet,
            winnings,
        }
    }

    #[test]
    fn winning_lines_carry_the_amount() {
        assert_eq!(
            log_line(&record(Outcome::PlayerWin, Some(10.0), Some(20.0))),
            "Player Score : 20 | Dealer Score : 19 | Bet Amount : 10.00$ | Player wins 20.00$"
        );
        assert_eq!(
            log_line(&record(Outcome::PlayerBlackjack, Some(10.0), Some(15.0))),
            "Player Score : 20 | Dealer Score : 19 | Bet Amount : 10.00$ | Player wins with Blackjack! 15.00$"
        );
    }

    #[test]
    fn losses_and_ties_omit_the_amount() {
        assert_eq!(
            log_line(&record(Outcome::PlayerBust, Some(7.5), Some(-7.5))),
            "Player Score : 20 | Dealer Score : 19 | Bet Amount : 7.50$ | Dealer wins"
        );
        assert_eq!(
            log_line(&record(Outcome::DealerWin, Some(7.5), Some(0.0))),
            "Player Score : 20 | Dealer Score : 19 | Bet Amount : 7.50$ | Dealer wins"
        );
        assert_eq!(
            log_line(&record(Outcome::Tie, Some(7.5), Some(7.5))),
            "Player Score : 20 | Dealer Score : 19 | Bet Amount : 7.50$ | Tie"
        );
    }

    #[test]
    fn free_play_lines_have_no_money() {
        assert_eq!(
            log_line(&record(Outcome::PlayerWin, None, None)),
            "Player Score : 20 | Dealer Score : 19 | Player wins"
        );
    }

    #[test]
    fn file_journal_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game_results.txt");
        let mut journal = FileJournal::new(&path);

        journal
            .append(&record(Outcome::Tie, Some(1.0), Some(1.0)))
            .unwrap();
        journal
            .append(&record(Outcome::DealerWin, Some(2.0), Some(0.0)))
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("| Tie"));
        assert!(lines[1].ends_with("| Dealer wins"));
    }

    #[test]
    fn unwritable_path_reports_log_write() {
        let dir = tempfile::tempdir().unwrap();
        let mut journal = FileJournal::new(dir.path());
        let err = journal
            .append(&record(Outcome::Tie, None, None))
            .unwrap_err();
        assert!(matches!(err, GameError::LogWrite(_)));
    }
}
