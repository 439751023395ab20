//! Input parsing for the Hit/Stand prompt.
//!
//! Only the first non-blank character of a line matters, case-insensitive.
//! Anything unrecognised is reported back as [`ParseResult::Invalid`] so the
//! caller can re-prompt; bad input is never an error.

use blackjack_engine::engine::Decision;

/// Message shown when an answer is neither hit nor stand.
pub const USAGE: &str = "Please only enter (H)it or (S)tand";

/// Result of parsing one answer at the Hit/Stand prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid decision parsed from input
    Decision(Decision),
    /// Anything else, with the message to show before prompting again
    Invalid(String),
}

/// Parse user input into a Hit or Stand decision.
///
/// # Example
///
/// ```rust
/// # use blackjack_cli::validation::{parse_decision, ParseResult};
/// use blackjack_engine::engine::Decision;
///
/// assert_eq!(parse_decision("h"), ParseResult::Decision(Decision::Hit));
/// assert_eq!(parse_decision("Stand"), ParseResult::Decision(Decision::Stand));
/// assert!(matches!(parse_decision("x"), ParseResult::Invalid(_)));
/// ```
pub fn parse_decision(input: &str) -> ParseResult {
    match input.trim().chars().next().map(|c| c.to_ascii_uppercase()) {
        Some('H') => ParseResult::Decision(Decision::Hit),
        Some('S') => ParseResult::Decision(Decision::Stand),
        _ => ParseResult::Invalid(USAGE.to_string()),
    }
}
