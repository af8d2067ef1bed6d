use serde::Serialize;

use crate::deck::Card;

pub const BLACKJACK: u8 = 21;

/// Best total for the cards plus whether an ace is still counted as 11.
pub fn hand_value(cards: &[Card]) -> (u8, bool) {
    let mut total: u16 = 0;
    let mut aces = 0;

    for card in cards {
        total += u16::from(card.points());
        if card.is_ace() {
            aces += 1;
        }
    }

    while total > u16::from(BLACKJACK) && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    (total.min(u16::from(u8::MAX)) as u8, aces > 0)
}

pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && hand_value(cards).0 == BLACKJACK
}

/// Cards in draw order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Hand::default()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn ids(&self) -> Vec<u8> {
        self.cards.iter().map(|card| card.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn value(&self) -> u8 {
        hand_value(&self.cards).0
    }

    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Hand {
            cards: iter.into_iter().collect(),
        }
    }
}
