//! Hand, banner and event formatters for terminal display.
//!
//! Pure functions turning engine values into the text shown to the player.
//! Hands print as space-joined rank symbols followed by their total; the
//! dealer's hand shows only its first card until the dealer's turn begins.
//!
//! ## Example
//!
//! ```rust
//! use blackjack_engine::cards::Rank;
//! use blackjack_cli::formatters::{format_hand_line, format_hidden_hand};
//! use blackjack_engine::hand::Party;
//!
//! assert_eq!(
//!     format_hand_line(Party::Player, &[Rank::Seven, Rank::Jack], 17),
//!     "Player has: 7 J = 17"
//! );
//! assert_eq!(format_hidden_hand(Rank::Seven), "Dealer has: 7 ? = ?");
//! ```

use blackjack_engine::cards::Rank;
use blackjack_engine::game::{Reason, Resolution};
use blackjack_engine::hand::Party;
use blackjack_engine::logger::GameEvent;

/// Ranks joined by single spaces, e.g. `A 7 10`.
pub fn format_hand(ranks: &[Rank]) -> String {
    ranks
        .iter()
        .map(|r| r.symbol())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_hand_line(party: Party, ranks: &[Rank], total: u16) -> String {
    format!("{} has: {} = {}", party, format_hand(ranks), total)
}

/// The dealer's hand before their turn: first card up, the rest hidden.
pub fn format_hidden_hand(up_card: Rank) -> String {
    format!("Dealer has: {} ? = ?", up_card)
}

pub fn format_turn_banner(party: Party) -> String {
    format!("### {}'s turn ###", party)
}

/// Closing banner for a finished game.
pub fn format_resolution(
    resolution: &Resolution,
    player: &[Rank],
    player_total: u16,
    dealer: &[Rank],
    dealer_total: u16,
) -> Vec<String> {
    let player_side = format!("{} = {}", format_hand(player), player_total);
    let dealer_side = format!("{} = {}", format_hand(dealer), dealer_total);
    let mut blocks = Vec::new();

    if let Reason::Blackjack(party) = resolution.reason {
        blocks.push(format!("{} Wins!\nBlackjack!", party));
        return blocks;
    }
    if let Reason::Bust(party) = resolution.reason {
        let total = match party {
            Party::Player => player_total,
            Party::Dealer => dealer_total,
        };
        blocks.push(format!("{} busts with {}", party, total));
    }
    blocks.push(match resolution.outcome.winner() {
        Some(Party::Player) => {
            format!("Player Wins!\n{} to Dealer's {}", player_side, dealer_side)
        }
        Some(Party::Dealer) => {
            format!("Dealer Wins!\n{} to Player's {}", dealer_side, player_side)
        }
        None => format!("Tie!\nPlayer: {} vs Dealer: {}", player_side, dealer_side),
    });
    blocks
}

/// Text blocks for one game event. Each block is shown after a blank line.
pub fn render_event(event: &GameEvent) -> Vec<String> {
    match event {
        GameEvent::Dealt {
            player,
            player_total,
            dealer_up,
        } => vec![
            "Dealing cards...".to_string(),
            "____________________".to_string(),
            format_hand_line(Party::Player, player, *player_total),
            format_hidden_hand(*dealer_up),
            "____________________".to_string(),
        ],
        GameEvent::PlayerHit { hand, total, .. } => vec![
            "Player hits".to_string(),
            format_hand_line(Party::Player, hand, *total),
        ],
        GameEvent::PlayerStood { hand, total } => {
            vec![format!("Player stands with {} = {}", format_hand(hand), total)]
        }
        GameEvent::DealerRevealed { hand, total } => vec![
            format_turn_banner(Party::Dealer),
            format_hand_line(Party::Dealer, hand, *total),
        ],
        GameEvent::DealerHit { hand, total, .. } => vec![
            "Dealer hits".to_string(),
            format_hand_line(Party::Dealer, hand, *total),
        ],
        GameEvent::DealerStood { hand, total } => {
            vec![format!("Dealer stands with {} = {}", format_hand(hand), total)]
        }
        GameEvent::Resolved {
            resolution,
            player,
            player_total,
            dealer,
            dealer_total,
        } => format_resolution(resolution, player, *player_total, dealer, *dealer_total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack_engine::game::Outcome;
    use Rank::*;

    fn res(outcome: Outcome, reason: Reason) -> Resolution {
        Resolution { outcome, reason }
    }

    #[test]
    fn ten_prints_as_two_digits() {
        assert_eq!(format_hand(&[Ten, Ace]), "10 A");
    }

    #[test]
    fn dealt_hides_dealer_total() {
        let blocks = render_event(&GameEvent::Dealt {
            player: vec![Seven, Jack],
            player_total: 17,
            dealer_up: Nine,
        });
        assert!(blocks.contains(&"Player has: 7 J = 17".to_string()));
        assert!(blocks.contains(&"Dealer has: 9 ? = ?".to_string()));
    }

    #[test]
    fn blackjack_banner_names_the_winner() {
        let lines = format_resolution(
            &res(Outcome::DealerWins, Reason::Blackjack(Party::Dealer)),
            &[Ten, Eight],
            18,
            &[Ace, King],
            21,
        );
        assert_eq!(lines, vec!["Dealer Wins!\nBlackjack!".to_string()]);
    }

    #[test]
    fn bust_reports_total_then_winner() {
        let lines = format_resolution(
            &res(Outcome::DealerWins, Reason::Bust(Party::Player)),
            &[Ten, Six, King],
            26,
            &[Nine, Eight],
            17,
        );
        assert_eq!(lines[0], "Player busts with 26");
        assert_eq!(lines[1], "Dealer Wins!\n9 8 = 17 to Player's 10 6 K = 26");
    }

    #[test]
    fn dealer_bust_banner_credits_the_player() {
        let lines = format_resolution(
            &res(Outcome::PlayerWins, Reason::Bust(Party::Dealer)),
            &[Ten, Eight],
            18,
            &[Ten, Six, Nine],
            25,
        );
        assert_eq!(
            lines,
            vec![
                "Dealer busts with 25".to_string(),
                "Player Wins!\n10 8 = 18 to Dealer's 10 6 9 = 25".to_string(),
            ]
        );
    }

    #[test]
    fn tie_shows_both_hands() {
        let lines = format_resolution(
            &res(Outcome::Tie, Reason::Comparison),
            &[Seven, Jack],
            17,
            &[Five, Five, Seven],
            17,
        );
        assert_eq!(lines, vec!["Tie!\nPlayer: 7 J = 17 vs Dealer: 5 5 7 = 17".to_string()]);
    }

    #[test]
    fn dealer_reveal_opens_the_dealer_turn() {
        let blocks = render_event(&GameEvent::DealerRevealed {
            hand: vec![Seven, Nine],
            total: 16,
        });
        assert_eq!(blocks[0], "### Dealer's turn ###");
        assert_eq!(blocks[1], "Dealer has: 7 9 = 16");
    }
}
