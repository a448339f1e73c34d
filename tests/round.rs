//! Round integration tests.

use shkuba::{
    Card, DealError, Deck, GameOptions, MoveError, Player, Round, RoundState, ScoreCategory,
    ScoreError, Suit, TieRule,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Builds a deck that yields exactly `draws`, in order.
fn deck_from_draws(draws: &[Card]) -> Deck {
    let mut cards = draws.to_vec();
    cards.reverse();
    Deck::from_cards(cards)
}

/// Builds a full forty-card deck whose first draws are `draws`.
fn stacked_deck(draws: &[Card]) -> Deck {
    let mut order = draws.to_vec();
    for suit in Suit::ALL {
        for rank in 1..=10 {
            let c = card(suit, rank);
            if !order.contains(&c) {
                order.push(c);
            }
        }
    }
    deck_from_draws(&order)
}

/// Opening deal with the start card on the board:
/// board [4♥, 5♣, 9♣, 10♣], P1 [9♠, 2♠, 3♠], P2 [1♥, 2♥, 3♥].
fn capture_round() -> Round {
    let deck = stacked_deck(&[
        card(Suit::Hearts, 4), // start card
        card(Suit::Spades, 9), // p1
        card(Suit::Hearts, 1), // p2
        card(Suit::Spades, 2), // p1
        card(Suit::Hearts, 2), // p2
        card(Suit::Spades, 3), // p1
        card(Suit::Hearts, 3), // p2
        card(Suit::Clubs, 5),  // board
        card(Suit::Clubs, 9),  // board
        card(Suit::Clubs, 10), // board
    ]);
    let mut round = Round::with_deck(Player::P1, GameOptions::default(), deck).unwrap();
    round.first_mini_round(false).unwrap();
    round
}

#[test]
fn opening_deal_puts_start_card_on_board() {
    let round = capture_round();

    assert_eq!(round.state(), RoundState::Playing);
    assert_eq!(round.start_card(), None);
    assert_eq!(
        round.board().cards(),
        &[
            card(Suit::Hearts, 4),
            card(Suit::Clubs, 5),
            card(Suit::Clubs, 9),
            card(Suit::Clubs, 10),
        ]
    );
    assert_eq!(round.hand(Player::P1).len(), 3);
    assert_eq!(round.hand(Player::P2).len(), 3);
    assert_eq!(round.cards_remaining(), 30);
    assert_eq!(round.total_cards(), 40);
}

#[test]
fn opening_deal_gives_start_card_to_first_player() {
    let start = card(Suit::Diamonds, 7);
    let deck = stacked_deck(&[start]);
    let mut round = Round::with_deck(Player::P2, GameOptions::default(), deck).unwrap();
    assert_eq!(round.start_card(), Some(start));

    round.first_mini_round(true).unwrap();

    assert_eq!(round.hand(Player::P2).cards()[0], start);
    assert_eq!(round.hand(Player::P1).len(), 3);
    assert_eq!(round.hand(Player::P2).len(), 3);
    assert_eq!(round.board().len(), 4);
    assert_eq!(round.cards_remaining(), 30);
    assert_eq!(round.total_cards(), 40);
}

#[test]
fn opening_deal_only_once() {
    let mut round = capture_round();
    assert_eq!(
        round.first_mini_round(true).unwrap_err(),
        DealError::InvalidState
    );
}

#[test]
fn moves_rejected_before_opening_deal() {
    let mut round = Round::new(Player::P1, GameOptions::default(), 3);
    assert_eq!(
        round.drop_card(Player::P1, 0).unwrap_err(),
        MoveError::InvalidState
    );
    assert_eq!(
        round.play_card(Player::P1, 0, &[0]).unwrap_err(),
        MoveError::InvalidState
    );
    assert_eq!(
        round.give_cards_to_players().unwrap_err(),
        DealError::InvalidState
    );
}

#[test]
fn empty_deck_cannot_start_a_round() {
    let result = Round::with_deck(Player::P1, GameOptions::default(), Deck::from_cards(vec![]));
    assert_eq!(result.unwrap_err(), DealError::NotEnoughCards);
}

#[test]
fn invalid_captures_change_nothing() {
    let mut round = capture_round();
    let before_board = round.board().clone();
    let before_hand = round.hand(Player::P1).clone();

    assert_eq!(
        round.play_card(Player::P1, 5, &[2]).unwrap_err(),
        MoveError::InvalidHandIndex
    );
    assert_eq!(
        round.play_card(Player::P1, 0, &[7]).unwrap_err(),
        MoveError::InvalidBoardIndex
    );
    assert_eq!(
        round.play_card(Player::P1, 0, &[1, 1]).unwrap_err(),
        MoveError::DuplicateBoardIndex
    );
    assert_eq!(
        round.play_card(Player::P1, 0, &[0]).unwrap_err(),
        MoveError::SumMismatch
    );
    assert_eq!(
        round.play_card(Player::P1, 0, &[]).unwrap_err(),
        MoveError::SumMismatch
    );
    // 4 + 5 = 9, but the 9 on the board must be taken instead
    assert_eq!(
        round.play_card(Player::P1, 0, &[0, 1]).unwrap_err(),
        MoveError::MustTakeDirectMatch
    );

    assert_eq!(round.board(), &before_board);
    assert_eq!(round.hand(Player::P1), &before_hand);
    assert!(round.pile(Player::P1).is_empty());
}

#[test]
fn direct_capture_moves_cards_to_pile() {
    let mut round = capture_round();

    let capture = round.play_card(Player::P1, 0, &[2]).unwrap();
    assert_eq!(capture.played, card(Suit::Spades, 9));
    assert_eq!(capture.taken, vec![card(Suit::Clubs, 9)]);
    assert!(!capture.swept);

    assert_eq!(
        round.pile(Player::P1),
        &[card(Suit::Spades, 9), card(Suit::Clubs, 9)]
    );
    assert_eq!(round.board().len(), 3);
    assert_eq!(round.hand(Player::P1).len(), 2);
    assert_eq!(round.last_capturer(), Some(Player::P1));
    assert_eq!(round.total_cards(), 40);
}

#[test]
fn combination_capture_in_any_index_order() {
    // board [2♣, 3♣, 5♣, 6♦], P1 holds 10♠
    let deck = stacked_deck(&[
        card(Suit::Clubs, 2),
        card(Suit::Spades, 10),
        card(Suit::Hearts, 1),
        card(Suit::Spades, 1),
        card(Suit::Hearts, 9),
        card(Suit::Spades, 4),
        card(Suit::Hearts, 8),
        card(Suit::Clubs, 3),
        card(Suit::Clubs, 5),
        card(Suit::Diamonds, 6),
    ]);
    let mut round = Round::with_deck(Player::P1, GameOptions::default(), deck).unwrap();
    round.first_mini_round(false).unwrap();

    let options = round
        .hand(Player::P1)
        .capture_options(0, round.board())
        .unwrap();
    assert_eq!(options, vec![vec![0, 1, 2]]);

    let capture = round.play_card(Player::P1, 0, &[2, 0, 1]).unwrap();
    assert_eq!(
        capture.taken,
        vec![card(Suit::Clubs, 2), card(Suit::Clubs, 3), card(Suit::Clubs, 5)]
    );
    assert_eq!(round.board().cards(), &[card(Suit::Diamonds, 6)]);
    assert_eq!(round.pile(Player::P1).len(), 4);
}

#[test]
fn capture_that_clears_board_is_a_sweep() {
    // board [1♣, 2♣, 3♣, 4♣], P1 holds 10♠
    let mut round = Round::with_deck(
        Player::P1,
        GameOptions::default(),
        stacked_deck(&[
            card(Suit::Clubs, 1),
            card(Suit::Spades, 10),
            card(Suit::Hearts, 8),
            card(Suit::Spades, 9),
            card(Suit::Hearts, 9),
            card(Suit::Spades, 8),
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 2),
            card(Suit::Clubs, 3),
            card(Suit::Clubs, 4),
        ]),
    )
    .unwrap();
    round.first_mini_round(false).unwrap();

    // 1 + 2 + 3 + 4 = 10 clears the board
    let capture = round.play_card(Player::P1, 0, &[0, 1, 2, 3]).unwrap();
    assert!(capture.swept);
    assert!(round.board().is_empty());
}

#[test]
fn drop_moves_exact_card_to_board() {
    let mut round = capture_round();

    let dropped = round.drop_card(Player::P2, 1).unwrap();
    assert_eq!(dropped, card(Suit::Hearts, 2));
    assert_eq!(round.board().cards().last(), Some(&dropped));
    assert_eq!(
        round.hand(Player::P2).cards(),
        &[card(Suit::Hearts, 1), card(Suit::Hearts, 3)]
    );
    assert_eq!(
        round.drop_card(Player::P2, 2).unwrap_err(),
        MoveError::InvalidHandIndex
    );
}

#[test]
fn redeal_only_when_hands_are_empty() {
    let mut round = capture_round();
    assert!(!round.needs_deal());
    assert_eq!(
        round.give_cards_to_players().unwrap_err(),
        DealError::HandsNotEmpty
    );

    for _ in 0..3 {
        round.drop_card(Player::P1, 0).unwrap();
        round.drop_card(Player::P2, 0).unwrap();
    }
    assert!(round.needs_deal());

    round.give_cards_to_players().unwrap();
    assert_eq!(round.hand(Player::P1).len(), 3);
    assert_eq!(round.hand(Player::P2).len(), 3);
    assert_eq!(round.cards_remaining(), 24);
    assert_eq!(round.total_cards(), 40);
}

/// The first `count` cards of a forty-card deck, in suit order.
fn small_deck(count: usize) -> Deck {
    let draws: Vec<Card> = Suit::ALL
        .into_iter()
        .flat_map(|suit| (1..=10).map(move |rank| card(suit, rank)))
        .take(count)
        .collect();
    deck_from_draws(&draws)
}

#[test]
fn decks_must_split_into_whole_deals() {
    for (size, error) in [
        (2, DealError::NotEnoughCards),
        (9, DealError::NotEnoughCards),
        (12, DealError::UnevenDeck),
        (21, DealError::UnevenDeck),
    ] {
        let result = Round::with_deck(Player::P1, GameOptions::default(), small_deck(size));
        assert_eq!(result.unwrap_err(), error, "deck of {size}");
    }
}

#[test]
fn sixteen_card_deck_plays_to_the_end() {
    let mut round =
        Round::with_deck(Player::P1, GameOptions::default(), small_deck(16)).unwrap();
    round.first_mini_round(false).unwrap();

    let mut redeals = 0;
    while !round.is_over() {
        if round.needs_deal() {
            round.give_cards_to_players().unwrap();
            redeals += 1;
        }
        for player in [Player::P1, Player::P2] {
            round.drop_card(player, 0).unwrap();
        }
    }

    assert_eq!(redeals, 1);
    assert!(!round.needs_deal());
    assert!(round.count_piles().is_ok());
    assert_eq!(round.total_cards(), 16);
}

/// A ten-card round: board [1♣, 7♣, 4♦, 6♠], P1 [7♦, 2♠, 3♠], P2 [10♥, 8♥, 9♥].
fn short_round(options: GameOptions) -> Round {
    let deck = deck_from_draws(&[
        card(Suit::Clubs, 1),
        card(Suit::Diamonds, 7),
        card(Suit::Hearts, 10),
        card(Suit::Spades, 2),
        card(Suit::Hearts, 8),
        card(Suit::Spades, 3),
        card(Suit::Hearts, 9),
        card(Suit::Clubs, 7),
        card(Suit::Diamonds, 4),
        card(Suit::Spades, 6),
    ]);
    let mut round = Round::with_deck(Player::P1, options, deck).unwrap();
    round.first_mini_round(false).unwrap();
    round
}

fn play_short_round(round: &mut Round) {
    round.play_card(Player::P1, 0, &[1]).unwrap(); // 7♦ takes 7♣
    round.play_card(Player::P2, 0, &[1, 2]).unwrap(); // 10♥ takes 4♦ + 6♠
    round.drop_card(Player::P1, 0).unwrap(); // 2♠
    round.drop_card(Player::P2, 0).unwrap(); // 8♥
    round.play_card(Player::P1, 0, &[0, 1]).unwrap(); // 3♠ takes 1♣ + 2♠
    round.drop_card(Player::P2, 0).unwrap(); // 9♥
}

#[test]
fn scoring_waits_for_round_end() {
    let mut round = short_round(GameOptions::default());
    assert_eq!(round.count_piles().unwrap_err(), ScoreError::RoundNotOver);
    assert!(!round.is_scored());
}

#[test]
fn last_capturer_collects_board_and_scoring_is_idempotent() {
    let mut round = short_round(GameOptions::default());
    play_short_round(&mut round);
    assert!(round.is_over());
    assert_eq!(round.board().len(), 2);

    let first = round.count_piles().unwrap();
    assert_eq!(round.state(), RoundState::Finished);
    assert!(round.board().is_empty());
    assert_eq!(round.pile(Player::P1).len(), 7);
    assert_eq!(round.pile(Player::P2).len(), 3);
    assert_eq!(round.total_cards(), 10);

    assert_eq!(first.p1.diamonds, 1);
    assert_eq!(first.p1.sevens, 2);
    assert!(first.p1.seven_of_diamonds);
    assert_eq!(first.p2.sixes, 1);

    let winner = |category| {
        first
            .awards
            .iter()
            .find(|a| a.category == category)
            .map(|a| a.winner)
            .unwrap()
    };
    assert_eq!(winner(ScoreCategory::MostCards), Some(Player::P1));
    assert_eq!(winner(ScoreCategory::MostDiamonds), None);
    assert_eq!(winner(ScoreCategory::SevenOfDiamonds), Some(Player::P1));
    assert_eq!(winner(ScoreCategory::Sevens), Some(Player::P1));
    assert_eq!((first.p1_points, first.p2_points), (3, 0));

    let second = round.count_piles().unwrap();
    assert_eq!(first, second);
    assert_eq!((round.p1_points(), round.p2_points()), (3, 0));
}

#[test]
fn ties_can_go_to_second_player() {
    let mut round = short_round(GameOptions::default().with_tie_rule(TieRule::SecondPlayer));
    play_short_round(&mut round);

    let score = round.count_piles().unwrap();
    assert_eq!((score.p1_points, score.p2_points), (3, 1));
}

#[test]
fn pile_takes_cards_from_the_board() {
    let mut round = capture_round();

    let moved = round.add_to_pile(Player::P2, 1).unwrap();
    assert_eq!(moved, card(Suit::Clubs, 5));
    assert_eq!(round.pile(Player::P2), &[moved]);
    assert!(!round.board().cards().contains(&moved));
    assert_eq!(round.board().len(), 3);
    assert_eq!(round.total_cards(), 40);
    assert_eq!(round.last_capturer(), None);

    let err = round.add_to_pile(Player::P2, 3).unwrap_err();
    assert_eq!((err.index, err.len), (3, 3));
    assert_eq!(round.total_cards(), 40);
}

#[test]
fn bots_play_a_whole_round() {
    let mut round = Round::new(Player::P2, GameOptions::default(), 2024);
    round.first_mini_round(true).unwrap();

    while !round.is_over() {
        if round.needs_deal() {
            round.give_cards_to_players().unwrap();
        }
        for player in [Player::P2, Player::P1] {
            round.bot_turn(player).unwrap();
            assert_eq!(round.total_cards(), 40);
        }
    }

    let score = round.count_piles().unwrap();
    assert!(score.p1_points + score.p2_points <= 4);
    assert_eq!(score.p1.cards + score.p2.cards + round.board().len(), 40);
    assert_eq!(round.count_piles().unwrap(), score);
    assert_eq!(
        round.bot_turn(Player::P1).unwrap_err(),
        MoveError::InvalidState
    );
}
