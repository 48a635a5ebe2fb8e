use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// A move: either placing a disc at a coordinate or passing the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Pass,
    Place { row: usize, col: usize },
}

impl Action {
    pub fn place(row: usize, col: usize) -> Self {
        Action::Place { row, col }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Action::Pass)
    }

    /// Coordinate of a placement, `None` for a pass.
    pub fn coords(&self) -> Option<(usize, usize)> {
        match *self {
            Action::Pass => None,
            Action::Place { row, col } => Some((row, col)),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Pass => write!(f, "pass"),
            Action::Place { row, col } => write!(f, "({row},{col})"),
        }
    }
}

/// Parses interactive input: `"(r,c)"`, the two-digit shorthand `"rc"`, or `"pass"`.
/// Coordinates are single digits, as typed on the command line.
impl FromStr for Action {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let invalid = || ParseError::InvalidAction(s.to_string());

        if input == "pass" {
            return Ok(Action::Pass);
        }

        let digits: Vec<char> = input.chars().collect();
        if digits.len() == 2 && digits.iter().all(|c| c.is_ascii_digit()) {
            return Ok(Action::place(digit(digits[0]), digit(digits[1])));
        }

        let inner = input
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;
        let (row, col) = inner.split_once(',').ok_or_else(invalid)?;
        let row = single_digit(row.trim()).ok_or_else(invalid)?;
        let col = single_digit(col.trim()).ok_or_else(invalid)?;
        Ok(Action::place(row, col))
    }
}

fn digit(c: char) -> usize {
    (c as u8 - b'0') as usize
}

fn single_digit(s: &str) -> Option<usize> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_digit() => Some(digit(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_parenthesized_coordinates() {
        assert_eq!("(2,3)".parse::<Action>(), Ok(Action::place(2, 3)));
        assert_eq!("( 5 , 4 )".parse::<Action>(), Ok(Action::place(5, 4)));
    }

    #[test]
    fn test_parses_two_digit_shorthand() {
        assert_eq!("23".parse::<Action>(), Ok(Action::place(2, 3)));
        assert_eq!(" 07\n".parse::<Action>(), Ok(Action::place(0, 7)));
    }

    #[test]
    fn test_parses_pass() {
        assert_eq!("pass".parse::<Action>(), Ok(Action::Pass));
    }

    #[test]
    fn test_rejects_garbage() {
        for input in ["", "2", "234", "(2,3", "(23)", "(a,b)", "(10,2)", "Pass", "2-3"] {
            assert!(
                input.parse::<Action>().is_err(),
                "{input:?} should not parse"
            );
        }
    }

    #[test]
    fn test_display_round_trips() {
        for action in [Action::Pass, Action::place(0, 0), Action::place(7, 5)] {
            assert_eq!(action.to_string().parse::<Action>(), Ok(action));
        }
    }

    #[test]
    fn test_coords_of_pass_is_none() {
        assert_eq!(Action::Pass.coords(), None);
        assert_eq!(Action::place(1, 2).coords(), Some((1, 2)));
        assert!(Action::Pass.is_pass());
    }
}
