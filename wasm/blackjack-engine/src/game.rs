use std::str::FromStr;

use serde::Serialize;

use crate::{
    deck::CardSource,
    error::{Action, GameError},
    hand::{Hand, BLACKJACK},
};

#[derive(Debug, Clone, PartialEq)]
pub struct GameRules {
    pub betting_enabled: bool,
    pub blackjack_pays: f64,
    pub dealer_stands_on: u8,
}

impl Default for GameRules {
    fn default() -> Self {
        GameRules {
            betting_enabled: true,
            blackjack_pays: 1.5,
            dealer_stands_on: 17,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub enum Phase {
    NotStarted,
    InProgress,
    Finished,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub enum Outcome {
    PlayerBlackjack,
    PlayerBust,
    PlayerWin,
    DealerWin,
    Tie,
}

impl Outcome {
    /// Amount handed back to the player for a settled bet.
    ///
    /// A bust is reported as the lost stake while a regular loss pays nothing;
    /// both leave the player without their bet.
    pub fn winnings(self, bet: Bet, rules: &GameRules) -> f64 {
        let stake = bet.amount();
        match self {
            Outcome::PlayerBlackjack => stake * rules.blackjack_pays,
            Outcome::PlayerBust => -stake,
            Outcome::PlayerWin => stake * 2.0,
            Outcome::DealerWin => 0.0,
            Outcome::Tie => stake,
        }
    }

    pub fn message(self, betting_enabled: bool) -> &'static str {
        match (self, betting_enabled) {
            (Outcome::PlayerBlackjack, true) => "Blackjack! Player wins 1.5x bet!",
            (Outcome::PlayerBlackjack, false) => "Blackjack! Player wins!",
            (Outcome::PlayerBust, _) => "Player busts! Dealer wins.",
            (Outcome::PlayerWin, true) => "Player wins! You get 2x bet.",
            (Outcome::PlayerWin, false) => "Player wins!",
            (Outcome::DealerWin, true) => "Dealer wins! You lose your bet.",
            (Outcome::DealerWin, false) => "Dealer wins!",
            (Outcome::Tie, true) => "It's a tie! You get your bet back.",
            (Outcome::Tie, false) => "It's a tie!",
        }
    }

    pub fn log_phrase(self) -> &'static str {
        match self {
            Outcome::PlayerBlackjack => "Player wins with Blackjack!",
            Outcome::PlayerWin => "Player wins",
            Outcome::PlayerBust | Outcome::DealerWin => "Dealer wins",
            Outcome::Tie => "Tie",
        }
    }

    /// Only wins show an amount in the round log.
    pub fn logs_winnings(self) -> bool {
        matches!(self, Outcome::PlayerBlackjack | Outcome::PlayerWin)
    }
}

/// A validated stake: finite and strictly positive.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Bet(f64);

impl Bet {
    pub fn new(amount: f64) -> Result<Self, GameError> {
        if amount.is_finite() && amount > 0.0 {
            Ok(Bet(amount))
        } else {
            Err(GameError::InvalidBet(amount.to_string()))
        }
    }

    pub fn amount(self) -> f64 {
        self.0
    }
}

impl FromStr for Bet {
    type Err = GameError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let amount = text
            .trim()
            .parse::<f64>()
            .map_err(|_| GameError::InvalidBet(text.to_string()))?;
        Bet::new(amount).map_err(|_| GameError::InvalidBet(text.to_string()))
    }
}

/// Emitted once per round, when it finishes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRecord {
    pub outcome: Outcome,
    pub player_score: u8,
    pub dealer_score: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bet: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winnings: Option<f64>,
}

pub struct BlackjackGame<S> {
    source: S,
    rules: GameRules,
    phase: Phase,
    player: Hand,
    dealer: Hand,
    bet: Option<Bet>,
    outcome: Option<Outcome>,
    winnings: Option<f64>,
}

impl<S: CardSource> BlackjackGame<S> {
    pub fn new(source: S, rules: GameRules) -> Self {
        BlackjackGame {
            source,
            rules,
            phase: Phase::NotStarted,
            player: Hand::new(),
            dealer: Hand::new(),
            bet: None,
            outcome: None,
            winnings: None,
        }
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player
    }

    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    pub fn bet(&self) -> Option<Bet> {
        self.bet
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn winnings(&self) -> Option<f64> {
        self.winnings
    }

    pub fn message(&self) -> Option<&'static str> {
        self.outcome
            .map(|outcome| outcome.message(self.rules.betting_enabled))
    }

    /// Record of the last finished round, if the current one is over.
    pub fn record(&self) -> Option<RoundRecord> {
        self.outcome.map(|outcome| self.round_record(outcome))
    }

    /// Starts a fresh round, discarding whatever was on the table.
    ///
    /// With betting enabled a validated bet is required; without one the
    /// current state is left untouched. Returns the round record when the
    /// player is dealt a natural.
    pub fn new_game(&mut self, bet: Option<Bet>) -> Result<Option<RoundRecord>, GameError> {
        let bet = match (self.rules.betting_enabled, bet) {
            (true, Some(bet)) => Some(bet),
            (true, None) => return Err(GameError::InvalidBet(String::new())),
            (false, _) => None,
        };

        self.player.clear();
        self.dealer.clear();
        self.outcome = None;
        self.winnings = None;
        self.bet = bet;

        for _ in 0..2 {
            self.player.push(self.source.draw());
            self.dealer.push(self.source.draw());
        }
        self.phase = Phase::InProgress;
        log::debug!(
            "dealt player {:?} dealer {:?}",
            self.player.ids(),
            self.dealer.ids()
        );

        if self.player.value() == BLACKJACK {
            return Ok(Some(self.finish(Outcome::PlayerBlackjack)));
        }
        Ok(None)
    }

    pub fn hit(&mut self) -> Result<Option<RoundRecord>, GameError> {
        self.ensure_in_progress(Action::Hit)?;

        let card = self.source.draw();
        self.player.push(card);
        log::debug!("player draws {} for {}", card.id(), self.player.value());

        if self.player.is_bust() {
            return Ok(Some(self.finish(Outcome::PlayerBust)));
        }
        Ok(None)
    }

    pub fn stand(&mut self) -> Result<RoundRecord, GameError> {
        self.ensure_in_progress(Action::Stand)?;

        self.play_dealer();

        let player_value = self.player.value();
        let dealer_value = self.dealer.value();
        let outcome = if dealer_value > BLACKJACK || player_value > dealer_value {
            Outcome::PlayerWin
        } else if player_value < dealer_value {
            Outcome::DealerWin
        } else {
            Outcome::Tie
        };
        Ok(self.finish(outcome))
    }

    /// Dealer draws until reaching the stand threshold, soft totals included.
    fn play_dealer(&mut self) {
        while self.dealer.value() < self.rules.dealer_stands_on {
            let card = self.source.draw();
            self.dealer.push(card);
            log::debug!("dealer draws {} for {}", card.id(), self.dealer.value());
        }
    }

    fn ensure_in_progress(&self, action: Action) -> Result<(), GameError> {
        if self.phase == Phase::InProgress {
            Ok(())
        } else {
            Err(GameError::InactiveOperation(action))
        }
    }

    fn finish(&mut self, outcome: Outcome) -> RoundRecord {
        self.phase = Phase::Finished;
        self.outcome = Some(outcome);
        self.winnings = self.bet.map(|bet| outcome.winnings(bet, &self.rules));

        let record = self.round_record(outcome);
        log::info!(
            "round finished: {:?} player {} dealer {}",
            outcome,
            record.player_score,
            record.dealer_score
        );
        record
    }

    fn round_record(&self, outcome: Outcome) -> RoundRecord {
        RoundRecord {
            outcome,
            player_score: self.player.value(),
            dealer_score: self.dealer.value(),
            bet: self.bet.map(Bet::amount),
            winnings: self.winnings,
        }
    }
}
