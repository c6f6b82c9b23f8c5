//! Game integration tests.

use blackjack21::{
    Card, CardView, DECK_SIZE, Deck, Game, GameError, Hand, Intent, Outcome, Phase, Rank, Step,
    Suit,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Deals a round from cards in draw order: player, dealer, player, dealer, then hits.
fn game_with_draws(draws: &[Card]) -> Game {
    init_logger();
    let mut game = Game::new(1);
    game.start_round_with(Deck::stacked(draws.iter().copied())).unwrap();
    game
}

#[test]
fn card_point_values() {
    assert_eq!(card(Suit::Hearts, Rank::Two).point_value(), 2);
    assert_eq!(card(Suit::Hearts, Rank::Ten).point_value(), 10);
    assert_eq!(card(Suit::Clubs, Rank::Jack).point_value(), 10);
    assert_eq!(card(Suit::Clubs, Rank::Queen).point_value(), 10);
    assert_eq!(card(Suit::Spades, Rank::King).point_value(), 10);
    assert_eq!(card(Suit::Diamonds, Rank::Ace).point_value(), 11);
    assert_eq!(card(Suit::Hearts, Rank::Ace).code(), "hA");
    assert_eq!(card(Suit::Spades, Rank::Ten).code(), "s10");
}

#[test]
fn fresh_deck_has_every_card_once() {
    let deck = Deck::with_seed(9);
    assert_eq!(deck.len(), DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            let count = deck
                .cards()
                .iter()
                .filter(|c| c.suit() == suit && c.rank() == rank)
                .count();
            assert_eq!(count, 1, "{rank:?} of {suit:?}");
        }
    }
}

#[test]
fn same_seed_same_order() {
    assert_eq!(Deck::with_seed(3), Deck::with_seed(3));
    assert_ne!(Deck::with_seed(3), Deck::with_seed(4));
}

#[test]
fn drawing_from_empty_deck_is_an_error() {
    let mut deck = Deck::stacked([card(Suit::Hearts, Rank::Five)]);
    assert_eq!(deck.draw().unwrap(), card(Suit::Hearts, Rank::Five));
    assert!(deck.is_empty());
    assert_eq!(deck.draw().unwrap_err(), GameError::DeckExhausted);
}

#[test]
fn hand_demotes_aces_one_at_a_time() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, Rank::Ace));
    hand.add_card(card(Suit::Spades, Rank::Ace));
    assert_eq!(hand.total(), 12);
    assert_eq!(hand.soft_ace_count(), 1);
    assert!(hand.is_soft());

    hand.add_card(card(Suit::Clubs, Rank::Nine));
    assert_eq!(hand.total(), 21);
    assert_eq!(hand.soft_ace_count(), 1);

    hand.add_card(card(Suit::Clubs, Rank::Five));
    assert_eq!(hand.total(), 16);
    assert_eq!(hand.soft_ace_count(), 0);
    assert!(!hand.is_bust());

    hand.add_card(card(Suit::Diamonds, Rank::King));
    assert_eq!(hand.total(), 26);
    assert!(hand.is_bust());
}

#[test]
fn scenario_dealer_draws_to_21() {
    let mut game = game_with_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Six),
        card(Suit::Spades, Rank::Seven),
        card(Suit::Diamonds, Rank::Ten),
        card(Suit::Hearts, Rank::Five),
    ]);
    assert_eq!(game.player_hand().total(), 17);
    assert_eq!(game.dealer_hand().total(), 16);

    assert_eq!(game.stand().unwrap(), Outcome::DealerWins);
    assert_eq!(game.dealer_hand().total(), 21);
    assert_eq!(game.dealer_hand().len(), 3);
    assert_eq!(game.phase(), Phase::Finished);
    assert_eq!(game.stats().losses, 1);
    assert_eq!(game.stats().wins, 0);
}

#[test]
fn scenario_natural_beats_dealer_18() {
    let mut game = game_with_draws(&[
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Spades, Rank::King),
        card(Suit::Diamonds, Rank::Nine),
    ]);
    assert_eq!(game.player_hand().total(), 21);
    assert!(game.player_hand().is_soft());

    assert_eq!(game.stand().unwrap(), Outcome::PlayerWins);
    assert_eq!(game.dealer_hand().total(), 18);
    assert_eq!(game.dealer_hand().len(), 2);
    assert_eq!(game.stats().wins, 1);
}

#[test]
fn scenario_player_busts_without_dealer_play() {
    let mut game = game_with_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Two),
        card(Suit::Spades, Rank::Nine),
        card(Suit::Diamonds, Rank::Three),
        card(Suit::Hearts, Rank::Five),
        card(Suit::Hearts, Rank::Six),
    ]);

    let drawn = game.hit().unwrap();
    assert_eq!(drawn, card(Suit::Hearts, Rank::Five));
    assert_eq!(game.player_hand().total(), 24);
    assert_eq!(game.outcome(), Some(Outcome::PlayerBust));
    assert_eq!(game.phase(), Phase::Finished);
    assert_eq!(game.stats().losses, 1);
    assert_eq!(game.dealer_hand().len(), 2);
    assert_eq!(game.cards_remaining(), 1);
}

#[test]
fn scenario_dealer_stops_at_19() {
    let mut game = game_with_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Spades, Rank::Queen),
        card(Suit::Diamonds, Rank::Nine),
        card(Suit::Hearts, Rank::Two),
    ]);

    assert_eq!(game.stand().unwrap(), Outcome::PlayerWins);
    assert_eq!(game.dealer_hand().total(), 19);
    assert_eq!(game.cards_remaining(), 1);
}

#[test]
fn dealer_stops_below_17_once_ahead() {
    let mut game = game_with_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Spades, Rank::Two),
        card(Suit::Diamonds, Rank::Five),
        card(Suit::Hearts, Rank::King),
    ]);

    assert_eq!(game.stand().unwrap(), Outcome::DealerWins);
    assert_eq!(game.dealer_hand().total(), 15);
    assert_eq!(game.dealer_hand().len(), 2);
}

#[test]
fn dealer_bust_and_push() {
    let mut game = game_with_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Spades, Rank::Six),
        card(Suit::Diamonds, Rank::Six),
        card(Suit::Hearts, Rank::Queen),
    ]);
    assert_eq!(game.stand().unwrap(), Outcome::DealerBust);
    assert_eq!(game.stats().wins, 1);

    game.start_round_with(Deck::stacked([
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Spades, Rank::Eight),
        card(Suit::Diamonds, Rank::Eight),
    ]))
    .unwrap();
    assert_eq!(game.stand().unwrap(), Outcome::Push);
    assert_eq!(game.stats().wins, 1);
    assert_eq!(game.stats().losses, 0);
}

#[test]
fn actions_outside_player_turn_are_rejected() {
    init_logger();
    let mut game = Game::new(5);
    assert_eq!(game.phase(), Phase::Dealing);
    assert_eq!(game.hit().unwrap_err(), GameError::InvalidStateTransition);
    assert_eq!(game.stand().unwrap_err(), GameError::InvalidStateTransition);

    game.start_round().unwrap();
    game.stand().unwrap();
    let stats = game.stats();
    assert_eq!(game.hit().unwrap_err(), GameError::InvalidStateTransition);
    assert_eq!(game.stand().unwrap_err(), GameError::InvalidStateTransition);
    assert_eq!(game.stats(), stats);
}

#[test]
fn restart_keeps_counters() {
    let mut game = game_with_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Spades, Rank::Nine),
        card(Suit::Diamonds, Rank::Seven),
    ]);
    game.stand().unwrap();
    assert_eq!(game.stats().wins, 1);

    game.restart().unwrap();
    assert_eq!(game.phase(), Phase::PlayerTurn);
    assert_eq!(game.outcome(), None);
    assert_eq!(game.player_hand().len(), 2);
    assert_eq!(game.dealer_hand().len(), 2);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 4);
    assert_eq!(game.stats().wins, 1);
}

#[test]
fn short_deck_deal_keeps_previous_round() {
    let mut game = game_with_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Spades, Rank::Nine),
        card(Suit::Diamonds, Rank::Seven),
    ]);

    let err = game
        .start_round_with(Deck::stacked([
            card(Suit::Hearts, Rank::Two),
            card(Suit::Hearts, Rank::Three),
        ]))
        .unwrap_err();
    assert_eq!(err, GameError::DeckExhausted);
    assert_eq!(game.player_hand().total(), 19);
    assert_eq!(game.phase(), Phase::PlayerTurn);
}

#[test]
fn exhausted_deck_on_hit_leaves_round_intact() {
    let mut game = game_with_draws(&[
        card(Suit::Hearts, Rank::Two),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Spades, Rank::Three),
        card(Suit::Diamonds, Rank::Seven),
    ]);

    assert_eq!(game.hit().unwrap_err(), GameError::DeckExhausted);
    assert_eq!(game.phase(), Phase::PlayerTurn);
    assert_eq!(game.player_hand().len(), 2);
}

#[test]
fn exhausted_deck_during_dealer_play_needs_restart() {
    let mut game = game_with_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Two),
        card(Suit::Spades, Rank::Nine),
        card(Suit::Diamonds, Rank::Three),
    ]);

    assert_eq!(game.stand().unwrap_err(), GameError::DeckExhausted);
    assert_eq!(game.phase(), Phase::DealerTurn);
    assert_eq!(game.outcome(), None);
    assert_eq!(game.hit().unwrap_err(), GameError::InvalidStateTransition);
    assert!(game.snapshot().can_restart);

    game.restart().unwrap();
    assert_eq!(game.phase(), Phase::PlayerTurn);
    assert_eq!(game.stats().wins + game.stats().losses, 0);
}

#[test]
fn snapshot_hides_hole_card_until_finished() {
    let mut game = game_with_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Spades, Rank::Queen),
        card(Suit::Diamonds, Rank::Eight),
    ]);

    let snapshot = game.snapshot();
    assert!(snapshot.hide_dealer_hole_card);
    assert_eq!(
        snapshot.dealer_cards,
        vec![
            CardView::FaceUp(card(Suit::Clubs, Rank::Nine)),
            CardView::FaceDown
        ]
    );
    assert_eq!(snapshot.dealer_total, 9);
    assert_eq!(snapshot.player_total, 20);
    assert!(snapshot.can_hit && snapshot.can_stand);
    assert!(!snapshot.can_restart);
    assert_eq!(snapshot.message(), None);

    let Step::Render(snapshot) = game.handle(Intent::Stand).unwrap() else {
        panic!("stand should render");
    };
    assert!(!snapshot.hide_dealer_hole_card);
    assert_eq!(
        snapshot.dealer_cards[1].card(),
        Some(card(Suit::Diamonds, Rank::Eight))
    );
    assert_eq!(snapshot.dealer_total, 17);
    assert_eq!(snapshot.phase, Phase::Finished);
    assert_eq!(snapshot.outcome, Some(Outcome::PlayerWins));
    assert_eq!(snapshot.message(), Some("You win!"));
    assert_eq!(snapshot.wins, 1);
    assert!(snapshot.can_restart);
    assert!(!snapshot.can_hit);
}

#[test]
fn intents_drive_the_round() {
    init_logger();
    let mut game = Game::new(77);
    assert_eq!(game.handle(Intent::Quit).unwrap(), Step::Quit);

    let Step::Render(snapshot) = game.handle(Intent::Restart).unwrap() else {
        panic!("restart should render");
    };
    assert_eq!(snapshot.phase, Phase::PlayerTurn);
    assert_eq!(snapshot.player_cards.len(), 2);

    while game.phase() == Phase::PlayerTurn && game.player_hand().total() < 17 {
        game.handle(Intent::Hit).unwrap();
    }
    if game.phase() == Phase::PlayerTurn {
        game.handle(Intent::Stand).unwrap();
    }

    assert_eq!(game.phase(), Phase::Finished);
    assert!(game.outcome().is_some());
    assert_eq!(
        game.handle(Intent::Hit).unwrap_err(),
        GameError::InvalidStateTransition
    );
}

#[test]
fn seeded_games_replay_identically() {
    let mut a = Game::new(2024);
    let mut b = Game::new(2024);

    for _ in 0..5 {
        a.start_round().unwrap();
        b.start_round().unwrap();
        assert_eq!(a.player_hand(), b.player_hand());
        assert_eq!(a.dealer_hand(), b.dealer_hand());
        assert_eq!(a.stand().unwrap(), b.stand().unwrap());
    }
    assert_eq!(a.stats(), b.stats());
}
