use blackjack_engine::cards::Rank::*;
use blackjack_engine::deck::Deck;
use blackjack_engine::engine::{Engine, StandOn};
use blackjack_engine::errors::GameError;
use blackjack_engine::game::{Game, Outcome, Phase, Reason, Resolution};
use blackjack_engine::hand::Party;
use blackjack_engine::logger::GameEvent;

fn resolved(outcome: Outcome, reason: Reason) -> Phase {
    Phase::Resolved(Resolution { outcome, reason })
}

#[test]
fn deal_alternates_player_and_dealer() {
    let mut game = Game::with_deck(Deck::stacked([Two, Three, Four, Five]));
    assert_eq!(game.deal().unwrap(), Phase::PlayerTurn);
    assert_eq!(game.player().ranks(), vec![Two, Four]);
    assert_eq!(game.dealer().ranks(), vec![Three, Five]);
    assert_eq!(game.deck_remaining(), 0);
}

#[test]
fn player_twenty_one_on_deal_wins_without_dealer_turn() {
    let mut game = Game::with_deck(Deck::stacked([Ace, Two, King, Three]));
    let phase = game.deal().unwrap();
    assert_eq!(phase, resolved(Outcome::PlayerWins, Reason::Blackjack(Party::Player)));
    assert_eq!(game.dealer().len(), 2);
    assert!(!game
        .events()
        .iter()
        .any(|e| matches!(e, GameEvent::DealerRevealed { .. })));
}

#[test]
fn opening_aces_are_adjusted_on_both_hands() {
    let mut game = Game::with_deck(Deck::stacked([Ace, Ace, Ace, Ace]));
    game.deal().unwrap();
    assert_eq!(game.player().total_value(), 12);
    assert_eq!(game.dealer().total_value(), 12);
}

#[test]
fn player_hitting_to_twenty_one_wins() {
    let mut game = Game::with_deck(Deck::stacked([Ten, Nine, Five, Eight, Six]));
    game.deal().unwrap();
    let phase = game.hit().unwrap();
    assert_eq!(phase, resolved(Outcome::PlayerWins, Reason::Blackjack(Party::Player)));
    assert_eq!(game.player().total_value(), 21);
    assert_eq!(game.dealer().len(), 2, "dealer never plays");
}

#[test]
fn player_bust_hands_the_win_to_the_dealer() {
    let mut game = Game::with_deck(Deck::stacked([Ten, Nine, Six, Eight, King]));
    game.deal().unwrap();
    let phase = game.hit().unwrap();
    assert_eq!(phase, resolved(Outcome::DealerWins, Reason::Bust(Party::Player)));
    assert_eq!(game.player().total_value(), 26);
    assert_eq!(
        game.hit(),
        Err(GameError::WrongPhase {
            expected: "PlayerTurn",
            actual: "Resolved",
        })
    );
}

#[test]
fn soft_hand_survives_a_big_hit() {
    // Player A+5 = 16 soft, hits a King: 11+5+10 busts, ace drops to 1 for 16.
    let mut game = Game::with_deck(Deck::stacked([Ace, Ten, Five, Eight, King]));
    game.deal().unwrap();
    assert_eq!(game.hit().unwrap(), Phase::PlayerTurn);
    assert_eq!(game.player().total_value(), 16);
    assert!(!game.player().is_soft());
}

#[test]
fn dealer_twenty_one_on_reveal_wins() {
    let mut game = Game::with_deck(Deck::stacked([Ten, Ace, Eight, King]));
    game.deal().unwrap();
    let phase = game.stand().unwrap();
    assert_eq!(phase, resolved(Outcome::DealerWins, Reason::Blackjack(Party::Dealer)));
}

#[test]
fn dealer_on_sixteen_must_hit() {
    let mut game = Game::with_hands(Deck::stacked([Two]), &[Ten, Eight], &[Seven, Nine]);
    game.stand().unwrap();
    assert_eq!(game.phase(), Phase::DealerTurn);
    game.play_dealer().unwrap();
    assert_eq!(game.dealer().len(), 3);
    assert!(game.dealer().total_value() >= 17);
    assert_eq!(game.resolution().map(|r| r.outcome), Some(Outcome::Tie));
}

#[test]
fn dealer_on_seventeen_stands_without_drawing() {
    let mut game = Game::with_hands(Deck::stacked(Vec::new()), &[Ten, Nine], &[Seven, Queen]);
    game.stand().unwrap();
    let phase = game.play_dealer().unwrap();
    assert_eq!(game.dealer().len(), 2);
    assert_eq!(game.dealer().total_value(), 17);
    assert_eq!(phase, resolved(Outcome::PlayerWins, Reason::Comparison));
}

#[test]
fn dealer_hitting_to_twenty_one_wins() {
    let mut game = Game::with_hands(Deck::stacked([Five]), &[Ten, Nine], &[Ten, Six]);
    game.stand().unwrap();
    let phase = game.play_dealer().unwrap();
    assert_eq!(phase, resolved(Outcome::DealerWins, Reason::Blackjack(Party::Dealer)));
}

#[test]
fn dealer_bust_hands_the_win_to_the_player() {
    let mut game = Game::with_hands(Deck::stacked([King]), &[Ten, Two], &[Ten, Six]);
    game.stand().unwrap();
    let phase = game.play_dealer().unwrap();
    assert_eq!(phase, resolved(Outcome::PlayerWins, Reason::Bust(Party::Dealer)));
    assert_eq!(game.dealer().total_value(), 26);
}

#[test]
fn dealer_soft_sixteen_hits_then_stands_on_hard_seventeen() {
    let mut game = Game::with_hands(Deck::stacked([King]), &[Ten, Nine], &[Ace, Five]);
    game.stand().unwrap();
    assert_eq!(game.dealer_step().unwrap(), Phase::DealerTurn);
    assert_eq!(game.dealer().total_value(), 17);
    let phase = game.dealer_step().unwrap();
    assert_eq!(phase, resolved(Outcome::PlayerWins, Reason::Comparison));
}

#[test]
fn equal_seventeens_tie() {
    let mut game = Game::with_hands(
        Deck::stacked(Vec::new()),
        &[Seven, Jack],
        &[Five, Five, Seven],
    );
    game.stand().unwrap();
    let phase = game.play_dealer().unwrap();
    assert_eq!(phase, resolved(Outcome::Tie, Reason::Comparison));
}

#[test]
fn soft_nineteen_beats_seventeen() {
    let mut game = Game::with_hands(
        Deck::stacked(Vec::new()),
        &[Ace, Ace, Seven],
        &[Five, Five, Seven],
    );
    assert_eq!(game.player().total_value(), 19);
    assert!(!game.player().is_bust());
    game.stand().unwrap();
    let phase = game.play_dealer().unwrap();
    assert_eq!(phase, resolved(Outcome::PlayerWins, Reason::Comparison));
}

#[test]
fn dealer_draw_from_empty_deck_is_an_error() {
    let mut game = Game::with_hands(Deck::stacked(Vec::new()), &[Ten, Nine], &[Ten, Two]);
    game.stand().unwrap();
    assert_eq!(game.play_dealer(), Err(GameError::EmptyDeck));
}

#[test]
fn seeded_games_always_resolve_consistently() {
    for seed in 0..300u64 {
        for threshold in [12u8, 17, 21] {
            let mut engine = Engine::new(Some(seed));
            let exit = engine.play(&mut StandOn(threshold)).expect("game should finish");
            let (p, d) = (exit.player_total, exit.dealer_total);
            match exit.resolution.reason {
                Reason::Blackjack(Party::Player) => {
                    assert_eq!(p, 21);
                    assert_eq!(exit.resolution.outcome, Outcome::PlayerWins);
                }
                Reason::Blackjack(Party::Dealer) => {
                    assert_eq!(d, 21);
                    assert_eq!(exit.resolution.outcome, Outcome::DealerWins);
                }
                Reason::Bust(Party::Player) => {
                    assert!(p > 21);
                    assert_eq!(exit.resolution.outcome, Outcome::DealerWins);
                }
                Reason::Bust(Party::Dealer) => {
                    assert!(d > 21 && p < 21);
                    assert_eq!(exit.resolution.outcome, Outcome::PlayerWins);
                }
                Reason::Comparison => {
                    assert!(p < 21 && (17..21).contains(&d), "seed {seed}: {p} vs {d}");
                    let expected = match p.cmp(&d) {
                        std::cmp::Ordering::Greater => Outcome::PlayerWins,
                        std::cmp::Ordering::Less => Outcome::DealerWins,
                        std::cmp::Ordering::Equal => Outcome::Tie,
                    };
                    assert_eq!(exit.resolution.outcome, expected);
                }
            }
        }
    }
}
