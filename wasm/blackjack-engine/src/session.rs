use serde::Serialize;

use crate::{
    deck::CardSource,
    error::GameError,
    game::{Bet, BlackjackGame, Outcome, Phase, RoundRecord},
    journal::Journal,
};

/// Everything a renderer needs after an action.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableView {
    pub phase: Phase,
    pub player_cards: Vec<u8>,
    pub dealer_cards: Vec<u8>,
    pub player_total: u8,
    pub dealer_total: u8,
    pub outcome: Option<Outcome>,
    pub message: Option<String>,
    pub bet: Option<f64>,
    pub winnings: Option<f64>,
    pub betting_enabled: bool,
}

/// One player's table: the game, where finished rounds are written, and the
/// last advisory shown to the player. Sessions share nothing with each other.
pub struct Session<S, J> {
    game: BlackjackGame<S>,
    journal: J,
    advisory: Option<String>,
}

impl<S: CardSource, J: Journal> Session<S, J> {
    pub fn new(game: BlackjackGame<S>, journal: J) -> Self {
        Session {
            game,
            journal,
            advisory: None,
        }
    }

    pub fn journal(&self) -> &J {
        &self.journal
    }

    /// Validates the bet text (when betting) and deals a new round.
    /// A rejected bet leaves the table exactly as it was.
    pub fn new_game(&mut self, bet_text: Option<&str>) -> TableView {
        let result = self.parse_bet(bet_text).and_then(|bet| self.game.new_game(bet));
        self.settle(result);
        self.view()
    }

    pub fn hit(&mut self) -> TableView {
        let result = self.game.hit();
        self.settle(result);
        self.view()
    }

    pub fn stand(&mut self) -> TableView {
        let result = self.game.stand().map(Some);
        self.settle(result);
        self.view()
    }

    pub fn view(&self) -> TableView {
        let player = self.game.player_hand();
        let dealer = self.game.dealer_hand();
        TableView {
            phase: self.game.phase(),
            player_cards: player.ids(),
            dealer_cards: dealer.ids(),
            player_total: player.value(),
            dealer_total: dealer.value(),
            outcome: self.game.outcome(),
            message: self
                .advisory
                .clone()
                .or_else(|| self.game.message().map(str::to_string)),
            bet: self.game.bet().map(Bet::amount),
            winnings: self.game.winnings(),
            betting_enabled: self.game.rules().betting_enabled,
        }
    }

    fn parse_bet(&self, bet_text: Option<&str>) -> Result<Option<Bet>, GameError> {
        if !self.game.rules().betting_enabled {
            return Ok(None);
        }
        bet_text.unwrap_or_default().parse::<Bet>().map(Some)
    }

    fn settle(&mut self, result: Result<Option<RoundRecord>, GameError>) {
        match result {
            Ok(record) => {
                self.advisory = None;
                if let Some(record) = record {
                    self.write_journal(&record);
                }
            }
            Err(err) if err.is_advisory() => {
                log::debug!("advisory: {err}");
                self.advisory = Some(err.to_string());
            }
            Err(err) => log::error!("{err}"),
        }
    }

    fn write_journal(&mut self, record: &RoundRecord) {
        if let Err(err) = self.journal.append(record) {
            log::error!("{err}");
        }
    }
}
