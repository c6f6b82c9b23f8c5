use crate::card::Card;
use crate::dealer::dealer_play;
use crate::error::GameError;
use crate::result::{Outcome, evaluate_outcome};

use super::{Game, Intent, Phase, Step};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), GameError> {
        if self.round.phase != Phase::PlayerTurn {
            log::warn!("action rejected in {:?}", self.round.phase);
            return Err(GameError::InvalidStateTransition);
        }

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 ends the round as [`Outcome::PlayerBust`] and counts a
    /// loss; the dealer does not play.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the deck
    /// is empty. The round is unchanged in both cases.
    pub fn hit(&mut self) -> Result<Card, GameError> {
        self.ensure_player_turn()?;

        let card = self.round.deck.draw().inspect_err(|_| {
            log::warn!("player hit on an exhausted deck");
        })?;
        self.round.player.add_card(card);
        log::debug!("player draws {card}, total {}", self.round.player.total());

        if self.round.player.is_bust() {
            self.finish(Outcome::PlayerBust);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer plays out their hand against the player's total and the
    /// round is settled.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, or if the
    /// deck runs out while the dealer draws. In the latter case the round is
    /// left in [`Phase::DealerTurn`] and only a restart moves it on.
    pub fn stand(&mut self) -> Result<Outcome, GameError> {
        self.ensure_player_turn()?;

        self.round.phase = Phase::DealerTurn;
        let player_total = self.round.player.total();
        let dealer_total = dealer_play(&mut self.round.dealer, &mut self.round.deck, player_total)
            .inspect_err(|_| {
                log::warn!("deck exhausted during dealer play");
            })?;

        let outcome = evaluate_outcome(player_total, dealer_total);
        self.finish(outcome);

        Ok(outcome)
    }

    /// Applies an intent from the front end.
    ///
    /// Returns [`Step::Quit`] for [`Intent::Quit`] and a fresh snapshot for
    /// everything else.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying action; the state is left as
    /// described on [`hit`](Self::hit), [`stand`](Self::stand) and
    /// [`restart`](Self::restart).
    pub fn handle(&mut self, intent: Intent) -> Result<Step, GameError> {
        match intent {
            Intent::Hit => {
                self.hit()?;
            }
            Intent::Stand => {
                self.stand()?;
            }
            Intent::Restart => self.restart()?,
            Intent::Quit => return Ok(Step::Quit),
        }

        Ok(Step::Render(self.snapshot()))
    }
}
