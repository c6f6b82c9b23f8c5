use blackjack21::{Card, CardView, Game, Intent, Outcome, Phase, RenderSnapshot, Step, Suit};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.game = Game::new(seed as u64);
    }

    pub fn hit(&mut self) -> Result<JsValue, JsValue> {
        self.apply(Intent::Hit)
    }

    pub fn stand(&mut self) -> Result<JsValue, JsValue> {
        self.apply(Intent::Stand)
    }

    pub fn restart(&mut self) -> Result<JsValue, JsValue> {
        self.apply(Intent::Restart)
    }

    /// Returns `null` once the player asked to leave.
    pub fn quit(&mut self) -> Result<JsValue, JsValue> {
        self.apply(Intent::Quit)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&Snapshot::from(self.game.snapshot()))
    }

    pub fn cards_remaining(&self) -> u32 {
        self.game.cards_remaining() as u32
    }
}

impl WasmGame {
    fn apply(&mut self, intent: Intent) -> Result<JsValue, JsValue> {
        match self.game.handle(intent).map_err(js_err)? {
            Step::Render(snapshot) => to_js_value(&Snapshot::from(snapshot)),
            Step::Quit => Ok(JsValue::NULL),
        }
    }
}

#[derive(Serialize)]
struct Snapshot {
    phase: &'static str,
    dealer_cards: Vec<Option<JsCard>>,
    player_cards: Vec<Option<JsCard>>,
    dealer_total: u8,
    player_total: u8,
    outcome: Option<&'static str>,
    message: Option<&'static str>,
    wins: u32,
    losses: u32,
    hide_dealer_hole_card: bool,
    can_hit: bool,
    can_stand: bool,
    can_restart: bool,
}

impl From<RenderSnapshot> for Snapshot {
    fn from(snapshot: RenderSnapshot) -> Self {
        Self {
            phase: phase_to_str(snapshot.phase),
            dealer_cards: snapshot.dealer_cards.iter().map(view_to_js).collect(),
            player_cards: snapshot.player_cards.iter().map(view_to_js).collect(),
            dealer_total: snapshot.dealer_total,
            player_total: snapshot.player_total,
            outcome: snapshot.outcome.map(outcome_to_str),
            message: snapshot.message(),
            wins: snapshot.wins,
            losses: snapshot.losses,
            hide_dealer_hole_card: snapshot.hide_dealer_hole_card,
            can_hit: snapshot.can_hit,
            can_stand: snapshot.can_stand,
            can_restart: snapshot.can_restart,
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
    code: String,
}

fn view_to_js(view: &CardView) -> Option<JsCard> {
    view.card().map(card_to_js)
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit()),
        rank: card.rank().label(),
        code: card.code(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
        Suit::Spades => "Spades",
    }
}

fn phase_to_str(phase: Phase) -> &'static str {
    match phase {
        Phase::Dealing => "Dealing",
        Phase::PlayerTurn => "PlayerTurn",
        Phase::DealerTurn => "DealerTurn",
        Phase::Finished => "Finished",
    }
}

fn outcome_to_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerBust => "PlayerBust",
        Outcome::DealerBust => "DealerBust",
        Outcome::PlayerWins => "PlayerWins",
        Outcome::DealerWins => "DealerWins",
        Outcome::Push => "Push",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
