use js_sys::Function;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod journal;
#[cfg(target_arch = "wasm32")]
mod logging;
pub mod session;

pub use config::TableConfig;
pub use deck::{Card, CardSource, RandomSource, StackedSource};
pub use error::{Action, GameError};
pub use game::{Bet, BlackjackGame, GameRules, Outcome, Phase, RoundRecord};
pub use hand::{hand_value, is_blackjack, Hand};
pub use journal::{FileJournal, Journal, MemoryJournal};
pub use session::{Session, TableView};

/// Browser-facing table. Each instance is an isolated session.
#[wasm_bindgen]
pub struct BlackjackTable {
    session: Session<RandomSource, Box<dyn Journal>>,
}

#[wasm_bindgen]
impl BlackjackTable {
    /// `params` is an optional table config object; `journal` is an optional
    /// function receiving one line per finished round.
    #[wasm_bindgen(constructor)]
    pub fn new(params: &JsValue, journal: Option<Function>) -> Result<BlackjackTable, JsValue> {
        console_error_panic_hook::set_once();
        #[cfg(target_arch = "wasm32")]
        logging::init();
        let config: TableConfig = if params.is_undefined() || params.is_null() {
            TableConfig::default()
        } else {
            serde_wasm_bindgen::from_value(params.clone())
                .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?
        };
        let rules = config
            .to_game_rules()
            .map_err(|err| JsValue::from_str(&format!("Invalid rules: {err}")))?;

        let game = BlackjackGame::new(RandomSource::new(config.seed), rules);
        let journal = build_journal(&config, journal);
        Ok(BlackjackTable {
            session: Session::new(game, journal),
        })
    }

    #[wasm_bindgen(js_name = newGame)]
    pub fn new_game(&mut self, bet: Option<String>) -> Result<JsValue, JsValue> {
        to_js(&self.session.new_game(bet.as_deref()))
    }

    pub fn hit(&mut self) -> Result<JsValue, JsValue> {
        to_js(&self.session.hit())
    }

    pub fn stand(&mut self) -> Result<JsValue, JsValue> {
        to_js(&self.session.stand())
    }

    pub fn view(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.view())
    }
}

#[wasm_bindgen]
pub fn card_image_path(card: u8) -> Result<String, JsValue> {
    Card::try_from(card)
        .map(Card::image_path)
        .map_err(|id| JsValue::from_str(&format!("Invalid card id: {id}")))
}

fn to_js(view: &TableView) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(view)
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}

#[cfg(target_arch = "wasm32")]
fn build_journal(_config: &TableConfig, callback: Option<Function>) -> Box<dyn Journal> {
    match callback {
        Some(callback) => Box::new(journal::CallbackJournal::new(callback)),
        None => Box::new(journal::ConsoleJournal),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_journal(config: &TableConfig, _callback: Option<Function>) -> Box<dyn Journal> {
    Box::new(FileJournal::new(&config.journal_path))
}
