//! Game integration tests.

use bjconsole::{
    ActionError, Card, DECK_SIZE, DealError, DealerStep, Deck, EmptyDeckError, Game, GameOptions,
    GameState, Outcome, PlayerAction, Rank, ShowdownError, Suit, Verdict,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn game_with_draws(options: GameOptions, draws: &[Card]) -> Game {
    let mut game = Game::new(options, 1, "Player");
    game.set_deck(Deck::stacked(draws));
    game
}

#[test]
fn deal_alternates_player_and_dealer() {
    let mut game = game_with_draws(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Two),    // player
            card(Suit::Clubs, Rank::Three),   // dealer
            card(Suit::Spades, Rank::Four),   // player
            card(Suit::Diamonds, Rank::Five), // dealer
        ],
    );

    game.deal_cards().unwrap();
    assert_eq!(game.state(), GameState::Dealt);
    assert_eq!(
        game.player().hand().cards(),
        &[card(Suit::Hearts, Rank::Two), card(Suit::Spades, Rank::Four)]
    );
    assert_eq!(
        game.dealer().hand().cards(),
        &[card(Suit::Clubs, Rank::Three), card(Suit::Diamonds, Rank::Five)]
    );
    assert_eq!(game.cards_remaining(), 0);
}

#[test]
fn fresh_game_deals_from_full_deck() {
    let mut game = Game::new(GameOptions::default(), 42, "Alice");
    assert_eq!(game.state(), GameState::Init);
    assert_eq!(game.cards_remaining(), DECK_SIZE);
    assert_eq!(game.player().name(), "Alice");
    assert_eq!(game.dealer().name(), "Dealer");

    game.deal_cards().unwrap();
    assert_eq!(game.cards_remaining(), DECK_SIZE - 4);
    assert_eq!(game.player().hand().len(), 2);
    assert_eq!(game.dealer().hand().len(), 2);
}

#[test]
fn same_seed_deals_same_hands() {
    let mut first = Game::new(GameOptions::default(), 7, "A");
    let mut second = Game::new(GameOptions::default(), 7, "B");
    first.deal_cards().unwrap();
    second.deal_cards().unwrap();

    assert_eq!(first.player().hand(), second.player().hand());
    assert_eq!(first.dealer().hand(), second.dealer().hand());
}

#[test]
fn player_stands_and_dealer_draws_to_twenty() {
    let mut game = game_with_draws(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Ten),    // player
            card(Suit::Clubs, Rank::Nine),    // dealer
            card(Suit::Diamonds, Rank::Seven), // player
            card(Suit::Spades, Rank::Six),    // dealer
            card(Suit::Hearts, Rank::Five),   // dealer draw
        ],
    );

    game.deal_cards().unwrap();
    assert_eq!(game.begin_player_turn().unwrap(), GameState::PlayerTurn);
    game.stand().unwrap();
    assert_eq!(game.state(), GameState::DealerTurn);

    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn, vec![card(Suit::Hearts, Rank::Five)]);
    assert_eq!(game.state(), GameState::Showdown);
    assert_eq!(game.dealer().hand().total(), 20);

    let outcome = game.resolve_outcome().unwrap();
    assert_eq!(outcome, Outcome::DealerWins);
    assert_eq!(outcome.verdict(), Verdict::Lose);
    assert_eq!(game.state(), GameState::Resolved(Outcome::DealerWins));
}

#[test]
fn natural_blackjack_ends_round_before_any_decision() {
    let mut game = game_with_draws(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Ace),   // player
            card(Suit::Clubs, Rank::Nine),   // dealer
            card(Suit::Spades, Rank::King),  // player
            card(Suit::Diamonds, Rank::Six), // dealer
        ],
    );

    game.deal_cards().unwrap();
    let state = game.begin_player_turn().unwrap();
    assert_eq!(state, GameState::Resolved(Outcome::PlayerBlackjack));
    assert_eq!(game.outcome(), Some(Outcome::PlayerBlackjack));

    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.dealer_step().unwrap_err(), ShowdownError::InvalidState);
    assert_eq!(game.dealer().hand().len(), 2);
}

#[test]
fn player_bust_skips_dealer_turn() {
    let mut game = game_with_draws(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Ten),    // player
            card(Suit::Clubs, Rank::Nine),    // dealer
            card(Suit::Spades, Rank::Six),    // player
            card(Suit::Diamonds, Rank::Seven), // dealer
            card(Suit::Hearts, Rank::Nine),   // player hit
            card(Suit::Clubs, Rank::Two),     // never dealt
        ],
    );

    game.deal_cards().unwrap();
    game.begin_player_turn().unwrap();

    let hit = game.hit().unwrap();
    assert_eq!(hit, card(Suit::Hearts, Rank::Nine));
    assert_eq!(game.state(), GameState::Resolved(Outcome::PlayerBust));
    assert!(game.player().hand().is_busted());
    assert_eq!(game.dealer().hand().len(), 2);
    assert_eq!(game.cards_remaining(), 1);
    assert_eq!(game.resolve_outcome().unwrap_err(), ShowdownError::InvalidState);
}

#[test]
fn hitting_to_exactly_21_is_blackjack_not_bust() {
    let mut game = game_with_draws(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Seven),  // player
            card(Suit::Clubs, Rank::Nine),    // dealer
            card(Suit::Spades, Rank::Seven),  // player
            card(Suit::Diamonds, Rank::Nine), // dealer
            card(Suit::Clubs, Rank::Seven),   // player hit
        ],
    );

    game.deal_cards().unwrap();
    game.begin_player_turn().unwrap();
    game.hit().unwrap();

    assert_eq!(game.player().hand().total(), 21);
    assert_eq!(game.outcome(), Some(Outcome::PlayerBlackjack));
}

#[test]
fn player_can_hit_then_stand() {
    let mut game = game_with_draws(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Five),   // player
            card(Suit::Clubs, Rank::Ten),     // dealer
            card(Suit::Spades, Rank::Four),   // player
            card(Suit::Diamonds, Rank::Eight), // dealer
            card(Suit::Hearts, Rank::Ten),    // player hit
        ],
    );

    game.deal_cards().unwrap();
    game.begin_player_turn().unwrap();
    assert_eq!(game.apply(PlayerAction::Hit).unwrap(), GameState::PlayerTurn);
    assert_eq!(game.player().hand().total(), 19);
    assert_eq!(game.apply(PlayerAction::Stand).unwrap(), GameState::DealerTurn);

    assert_eq!(game.dealer_step().unwrap(), DealerStep::Stand);
    assert_eq!(game.resolve_outcome().unwrap(), Outcome::PlayerWins);
}

#[test]
fn dealer_natural_wins_at_start_of_dealer_turn() {
    let mut game = game_with_draws(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Ten),   // player
            card(Suit::Clubs, Rank::Ace),    // dealer
            card(Suit::Spades, Rank::Eight), // player
            card(Suit::Diamonds, Rank::King), // dealer
        ],
    );

    game.deal_cards().unwrap();
    game.begin_player_turn().unwrap();
    game.stand().unwrap();

    assert_eq!(
        game.dealer_step().unwrap(),
        DealerStep::Finished(Outcome::DealerBlackjack)
    );
    assert_eq!(Outcome::DealerBlackjack.verdict(), Verdict::Lose);
}

#[test]
fn dealer_drawing_to_21_counts_as_dealer_blackjack() {
    let mut game = game_with_draws(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Ten),   // player
            card(Suit::Clubs, Rank::Nine),   // dealer
            card(Suit::Spades, Rank::Eight), // player
            card(Suit::Diamonds, Rank::Five), // dealer
            card(Suit::Hearts, Rank::Seven), // dealer draw
        ],
    );

    game.deal_cards().unwrap();
    game.begin_player_turn().unwrap();
    game.stand().unwrap();

    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn.len(), 1);
    assert_eq!(game.outcome(), Some(Outcome::DealerBlackjack));
}

#[test]
fn dealer_bust_wins_for_player() {
    let mut game = game_with_draws(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Ten),   // player
            card(Suit::Clubs, Rank::Ten),    // dealer
            card(Suit::Spades, Rank::Two),   // player
            card(Suit::Diamonds, Rank::Six), // dealer
            card(Suit::Hearts, Rank::Nine),  // dealer draw
        ],
    );

    game.deal_cards().unwrap();
    game.begin_player_turn().unwrap();
    game.stand().unwrap();

    assert_eq!(
        game.dealer_step().unwrap(),
        DealerStep::Hit(card(Suit::Hearts, Rank::Nine))
    );
    assert_eq!(game.outcome(), Some(Outcome::DealerBust));
    assert_eq!(Outcome::DealerBust.verdict(), Verdict::Win);
    assert_eq!(game.dealer_step().unwrap_err(), ShowdownError::InvalidState);
}

#[test]
fn equal_totals_push() {
    let mut game = game_with_draws(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Ten),     // player
            card(Suit::Clubs, Rank::Queen),    // dealer
            card(Suit::Spades, Rank::Eight),   // player
            card(Suit::Diamonds, Rank::Eight), // dealer
        ],
    );

    game.deal_cards().unwrap();
    game.begin_player_turn().unwrap();
    game.stand().unwrap();
    assert!(game.dealer_play().unwrap().is_empty());

    let outcome = game.resolve_outcome().unwrap();
    assert_eq!(outcome, Outcome::Push);
    assert_eq!(outcome.verdict(), Verdict::Push);
    assert!(!outcome.ended_early());
}

#[test]
fn dealer_stands_on_soft_seventeen() {
    let mut game = game_with_draws(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Ten),   // player
            card(Suit::Clubs, Rank::Ace),    // dealer
            card(Suit::Spades, Rank::Nine),  // player
            card(Suit::Diamonds, Rank::Six), // dealer
        ],
    );

    game.deal_cards().unwrap();
    game.begin_player_turn().unwrap();
    game.stand().unwrap();

    assert_eq!(game.dealer_step().unwrap(), DealerStep::Stand);
    assert_eq!(game.resolve_outcome().unwrap(), Outcome::PlayerWins);
}

#[test]
fn dealer_stand_threshold_is_configurable() {
    let options = GameOptions::default().with_dealer_stand(18);
    let mut game = game_with_draws(
        options,
        &[
            card(Suit::Hearts, Rank::Ten),    // player
            card(Suit::Clubs, Rank::Ten),     // dealer
            card(Suit::Spades, Rank::Nine),   // player
            card(Suit::Diamonds, Rank::Seven), // dealer
            card(Suit::Hearts, Rank::Two),    // dealer draw
        ],
    );

    game.deal_cards().unwrap();
    game.begin_player_turn().unwrap();
    game.stand().unwrap();

    assert_eq!(game.dealer_play().unwrap().len(), 1);
    assert_eq!(game.resolve_outcome().unwrap(), Outcome::Push);
}

#[test]
fn transitions_reject_wrong_state() {
    let mut game = Game::new(GameOptions::default(), 3, "Player");

    assert_eq!(game.begin_player_turn().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.dealer_play().unwrap_err(), ShowdownError::InvalidState);
    assert_eq!(game.resolve_outcome().unwrap_err(), ShowdownError::InvalidState);

    game.deal_cards().unwrap();
    assert_eq!(game.deal_cards().unwrap_err(), DealError::InvalidState);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn deal_fails_on_short_deck() {
    let mut game = game_with_draws(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Two),
            card(Suit::Clubs, Rank::Three),
            card(Suit::Spades, Rank::Four),
        ],
    );

    assert_eq!(game.deal_cards().unwrap_err(), DealError::EmptyDeck(EmptyDeckError));
    assert_eq!(game.state(), GameState::Init);
    assert!(game.player().hand().is_empty());
    assert!(game.dealer().hand().is_empty());
    assert_eq!(game.cards_remaining(), 3);

    game.set_deck(Deck::seeded(3));
    game.deal_cards().unwrap();
    assert_eq!(game.player().hand().len(), 2);
    assert_eq!(game.dealer().hand().len(), 2);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 4);
}

#[test]
fn hit_and_dealer_draw_fail_on_empty_deck() {
    let draws = [
        card(Suit::Hearts, Rank::Five),   // player
        card(Suit::Clubs, Rank::Nine),    // dealer
        card(Suit::Spades, Rank::Six),    // player
        card(Suit::Diamonds, Rank::Seven), // dealer
    ];

    let mut game = game_with_draws(GameOptions::default(), &draws);
    game.deal_cards().unwrap();
    game.begin_player_turn().unwrap();
    assert_eq!(game.hit().unwrap_err(), ActionError::EmptyDeck(EmptyDeckError));
    assert_eq!(game.state(), GameState::PlayerTurn);

    game.stand().unwrap();
    assert_eq!(game.dealer_play().unwrap_err(), ShowdownError::EmptyDeck(EmptyDeckError));
}

#[test]
fn new_round_resets_deck_and_hands() {
    let mut game = game_with_draws(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Spades, Rank::Queen),
            card(Suit::Diamonds, Rank::Six),
        ],
    );
    game.set_player_name("Rita");

    game.deal_cards().unwrap();
    game.begin_player_turn().unwrap();
    assert!(game.state().is_resolved());

    game.new_round();
    assert_eq!(game.state(), GameState::Init);
    assert_eq!(game.outcome(), None);
    assert!(game.player().hand().is_empty());
    assert!(game.dealer().hand().is_empty());
    assert_eq!(game.cards_remaining(), DECK_SIZE);
    assert_eq!(game.player().name(), "Rita");

    game.deal_cards().unwrap();
    assert_eq!(game.cards_remaining(), DECK_SIZE - 4);
}

#[test]
fn outcome_verdicts() {
    assert_eq!(Outcome::PlayerBlackjack.verdict(), Verdict::Win);
    assert_eq!(Outcome::PlayerBust.verdict(), Verdict::Lose);
    assert_eq!(Outcome::PlayerWins.verdict(), Verdict::Win);
    assert!(Outcome::PlayerBust.ended_early());
    assert!(Outcome::DealerBlackjack.ended_early());
    assert!(!Outcome::DealerWins.ended_early());
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_blackjack(31)
        .with_dealer_stand(27);

    assert_eq!(options.blackjack, 31);
    assert_eq!(options.dealer_stand, 27);
    assert_eq!(GameOptions::default().blackjack, bjconsole::BLACKJACK);
    assert_eq!(GameOptions::default().dealer_stand, bjconsole::DEALER_STAND);
}

#[test]
fn player_action_parses_console_choices() {
    assert_eq!("1".parse::<PlayerAction>().unwrap(), PlayerAction::Hit);
    assert_eq!("2\n".parse::<PlayerAction>().unwrap(), PlayerAction::Stand);

    let err = "hit".parse::<PlayerAction>().unwrap_err();
    assert_eq!(err.0, "hit");
    assert!("3".parse::<PlayerAction>().is_err());
    assert!("".parse::<PlayerAction>().is_err());
}
