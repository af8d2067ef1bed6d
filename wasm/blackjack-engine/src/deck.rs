use std::collections::VecDeque;

use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

pub const CARDS_PER_DECK: u8 = 52;

/// A card identified by its position 1..=52 in an unsorted deck image set.
/// Suits are not modelled; only the rank matters for scoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    pub fn id(self) -> u8 {
        self.0
    }

    /// 1 = Ace, 11..=13 = J, Q, K.
    pub fn rank(self) -> u8 {
        (self.0 - 1) % 13 + 1
    }

    pub fn is_ace(self) -> bool {
        self.rank() == 1
    }

    /// Base points before any soft-ace adjustment.
    pub fn points(self) -> u8 {
        match self.rank() {
            1 => 11,
            11 | 12 | 13 => 10,
            rank => rank,
        }
    }

    pub fn image_path(self) -> String {
        format!("card/{}.png", self.0)
    }
}

impl TryFrom<u8> for Card {
    type Error = u8;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        if (1..=CARDS_PER_DECK).contains(&id) {
            Ok(Card(id))
        } else {
            Err(id)
        }
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> u8 {
        card.0
    }
}

/// Anything that can hand out cards. Draws never fail.
pub trait CardSource {
    fn draw(&mut self) -> Card;
}

/// Infinite shoe: every draw is an independent uniform pick over the 52 ids.
pub struct RandomSource {
    rng: SmallRng,
}

impl RandomSource {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        RandomSource { rng }
    }
}

impl CardSource for RandomSource {
    fn draw(&mut self) -> Card {
        Card(self.rng.gen_range(1..=CARDS_PER_DECK))
    }
}

/// Deals a fixed run of cards first, then falls back to a seeded shoe.
pub struct StackedSource {
    stacked: VecDeque<Card>,
    fallback: RandomSource,
}

impl StackedSource {
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        StackedSource {
            stacked: cards.into_iter().collect(),
            fallback: RandomSource::new(Some(0)),
        }
    }

    /// Builds a stack from raw ids, rejecting the first id outside 1..=52.
    pub fn from_ids(ids: &[u8]) -> Result<Self, u8> {
        let cards = ids
            .iter()
            .map(|&id| Card::try_from(id))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(cards))
    }

    pub fn remaining(&self) -> usize {
        self.stacked.len()
    }
}

impl CardSource for StackedSource {
    fn draw(&mut self) -> Card {
        match self.stacked.pop_front() {
            Some(card) => card,
            None => self.fallback.draw(),
        }
    }
}
