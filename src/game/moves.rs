//! Move Set Validation
//!
//! A move set is the ordered list of move names for a session.
//! Input order is the positional basis of the rule matrix and is
//! preserved exactly.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum number of moves in a playable set.
pub const MIN_MOVES: usize = 3;

// =============================================================================
// MOVE ID
// =============================================================================

/// Position of a move inside its [`MoveSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MoveId(pub usize);

impl MoveId {
    /// Zero-based position.
    pub const fn index(self) -> usize {
        self.0
    }

    /// One-based position, as shown in the move menu.
    pub const fn menu_number(self) -> usize {
        self.0 + 1
    }
}

// =============================================================================
// VIOLATIONS
// =============================================================================

/// A structural problem with a proposed move list.
///
/// Variant order is the reporting order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Violation {
    /// At least one name appears more than once.
    NotUnique,
    /// Even number of moves.
    NotOdd,
    /// Fewer than [`MIN_MOVES`] moves.
    TooFew,
}

impl Violation {
    /// Short title.
    pub const fn title(self) -> &'static str {
        match self {
            Self::NotUnique => "Duplicate moves",
            Self::NotOdd => "Even number of moves",
            Self::TooFew => "Too few moves",
        }
    }

    /// What the rule is.
    pub const fn description(self) -> &'static str {
        match self {
            Self::NotUnique => "Every move name must be unique",
            Self::NotOdd => "The number of moves must be odd",
            Self::TooFew => "At least 3 moves are required",
        }
    }

    /// A move list that satisfies the rule.
    pub const fn example(self) -> &'static str {
        match self {
            Self::NotUnique => "rock paper scissors",
            Self::NotOdd => "rock spock paper lizard scissors",
            Self::TooFew => "rock paper scissors",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.description())
    }
}

/// A move list was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid move set: {}", join_violations(.violations))]
pub struct MoveSetError {
    /// Every violation found, in reporting order.
    pub violations: Vec<Violation>,
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.description())
        .collect::<Vec<_>>()
        .join("; ")
}

impl MoveSetError {
    /// Whether a specific violation was found.
    pub fn contains(&self, violation: Violation) -> bool {
        self.violations.contains(&violation)
    }
}

/// Check a proposed move list.
///
/// All checks run; every violation is reported.
pub fn validate<S: AsRef<str>>(moves: &[S]) -> Result<(), MoveSetError> {
    let mut violations = Vec::new();

    let mut seen = BTreeSet::new();
    if !moves.iter().all(|m| seen.insert(m.as_ref())) {
        violations.push(Violation::NotUnique);
    }
    if moves.len() % 2 == 0 {
        violations.push(Violation::NotOdd);
    }
    if moves.len() < MIN_MOVES {
        violations.push(Violation::TooFew);
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(MoveSetError { violations })
    }
}

// =============================================================================
// MOVE SET
// =============================================================================

/// Validated, immutable list of move names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MoveSet {
    names: Vec<String>,
}

impl MoveSet {
    /// Validate and wrap a move list.
    pub fn new(names: Vec<String>) -> Result<Self, MoveSetError> {
        validate(&names)?;
        Ok(Self { names })
    }

    /// Number of moves (always odd and at least 3).
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a validated set.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of a move.
    ///
    /// Panics if `id` does not belong to this set.
    pub fn name(&self, id: MoveId) -> &str {
        &self.names[id.index()]
    }

    /// Look up a move by position.
    pub fn get(&self, index: usize) -> Option<MoveId> {
        (index < self.names.len()).then_some(MoveId(index))
    }

    /// Look up a move by name.
    pub fn find(&self, name: &str) -> Option<MoveId> {
        self.names.iter().position(|n| n == name).map(MoveId)
    }

    /// All move ids in set order.
    pub fn ids(&self) -> impl Iterator<Item = MoveId> + '_ {
        (0..self.names.len()).map(MoveId)
    }

    /// All names in set order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// `(id, name)` pairs in set order.
    pub fn iter(&self) -> impl Iterator<Item = (MoveId, &str)> + '_ {
        self.names.iter().enumerate().map(|(i, n)| (MoveId(i), n.as_str()))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_valid_five() {
        let moves = names(&["rock", "scissors", "paper", "spock", "lizard"]);
        assert!(validate(&moves).is_ok());

        let set = MoveSet::new(moves.clone()).unwrap();
        assert_eq!(set.names(), moves.as_slice());
    }

    #[test]
    fn test_even_count() {
        let err = validate(&["rock", "paper", "scissors", "lizard"]).unwrap_err();
        assert_eq!(err.violations, vec![Violation::NotOdd]);
    }

    #[test]
    fn test_two_moves_reports_both() {
        let err = validate(&["rock", "paper"]).unwrap_err();
        assert_eq!(err.violations, vec![Violation::NotOdd, Violation::TooFew]);
    }

    #[test]
    fn test_duplicate_reported() {
        let err = validate(&["rock", "scissors", "paper", "spock", "rock"]).unwrap_err();
        assert!(err.contains(Violation::NotUnique));
        assert!(!err.contains(Violation::NotOdd));

        let err = validate(&["rock", "scissors", "paper", "spock", "spock", "lizard"]).unwrap_err();
        assert_eq!(err.violations, vec![Violation::NotUnique, Violation::NotOdd]);
    }

    #[test]
    fn test_all_three() {
        let err = validate(&["rock", "rock"]).unwrap_err();
        assert_eq!(
            err.violations,
            vec![Violation::NotUnique, Violation::NotOdd, Violation::TooFew]
        );
    }

    #[test]
    fn test_empty_and_single() {
        let empty: [&str; 0] = [];
        let err = validate(&empty).unwrap_err();
        assert_eq!(err.violations, vec![Violation::NotOdd, Violation::TooFew]);

        let err = validate(&["rock"]).unwrap_err();
        assert_eq!(err.violations, vec![Violation::TooFew]);
    }

    #[test]
    fn test_case_sensitive_names() {
        assert!(validate(&["Rock", "rock", "ROCK"]).is_ok());
    }

    #[test]
    fn test_examples_are_valid() {
        for v in [Violation::NotUnique, Violation::NotOdd, Violation::TooFew] {
            let example: Vec<&str> = v.example().split_whitespace().collect();
            assert!(validate(&example).is_ok(), "example for {:?} is invalid", v);
        }
    }

    #[test]
    fn test_lookup() {
        let set = MoveSet::new(names(&["rock", "paper", "scissors"])).unwrap();

        assert_eq!(set.find("paper"), Some(MoveId(1)));
        assert_eq!(set.find("spock"), None);
        assert_eq!(set.get(2), Some(MoveId(2)));
        assert_eq!(set.get(3), None);
        assert_eq!(set.name(MoveId(2)), "scissors");
        assert_eq!(MoveId(0).menu_number(), 1);

        let pairs: Vec<_> = set.iter().collect();
        assert_eq!(pairs[1], (MoveId(1), "paper"));
    }

    #[test]
    fn test_error_message() {
        let err = validate(&["rock", "paper"]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("odd"));
        assert!(msg.contains("At least 3"));
    }
}
