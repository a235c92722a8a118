//! Heuristic password complexity scoring and ranking.
//!
//! The score is the raw character count plus fixed bonuses for class
//! presence and (diminishing) class magnitude. It is a heuristic, not an
//! entropy estimate.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::charset::CharClass;

/// Discrete complexity rank derived from [`score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    VeryWeak = 0,
    Weak = 1,
    Normal = 2,
    Good = 3,
    VeryGood = 4,
    Amazing = 5,
}

impl Rank {
    /// Bucket a raw score into a rank.
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=11 => Rank::VeryWeak,
            12..=14 => Rank::Weak,
            15..=18 => Rank::Normal,
            19..=22 => Rank::Good,
            23..=27 => Rank::VeryGood,
            _ => Rank::Amazing,
        }
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank as u8
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::VeryWeak => write!(f, "very weak"),
            Rank::Weak => write!(f, "weak"),
            Rank::Normal => write!(f, "normal"),
            Rank::Good => write!(f, "good"),
            Rank::VeryGood => write!(f, "very good"),
            Rank::Amazing => write!(f, "amazing"),
        }
    }
}

/// Per-class character counts for one input, discarded after scoring.
#[derive(Debug, Default)]
struct ClassTally {
    lowers: u32,
    uppers: u32,
    nums: u32,
    specials: u32,
    total: u32,
}

fn tally(password: &str) -> ClassTally {
    let mut tally = ClassTally::default();
    for c in password.chars() {
        tally.total += 1;
        match CharClass::of(c) {
            CharClass::Lower => tally.lowers += 1,
            CharClass::Upper => tally.uppers += 1,
            CharClass::Digit => tally.nums += 1,
            CharClass::Special => tally.specials += 1,
        }
    }
    tally
}

fn bonus(tally: &ClassTally) -> u32 {
    let mut bonus = 0;

    if tally.lowers > 0 {
        bonus += 2;
    }
    if tally.nums > 0 {
        bonus += 2;
    }
    if tally.uppers > 0 {
        bonus += 3;
    }
    if tally.specials > 0 {
        bonus += 5;
    }

    bonus += tally.specials.min(3);
    bonus += tally.nums.min(2);
    bonus += tally.uppers.min(2);

    bonus
}

/// Heuristic complexity score for a password. Pure; never fails.
pub fn score(password: &str) -> u32 {
    let tally = tally(password);
    tally.total + bonus(&tally)
}

/// Complexity rank, from [`Rank::VeryWeak`] to [`Rank::Amazing`].
pub fn rank(password: &str) -> Rank {
    Rank::from_score(score(password))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_scores() {
        assert_eq!(score("badpass"), 9);
        assert_eq!(score("M)f$you8Ag"), 27);
    }

    #[test]
    fn test_empty_string_scores_zero() {
        assert_eq!(score(""), 0);
        assert_eq!(rank(""), Rank::VeryWeak);
    }

    #[test]
    fn test_rank_boundaries() {
        assert_eq!(Rank::from_score(0), Rank::VeryWeak);
        assert_eq!(Rank::from_score(11), Rank::VeryWeak);
        assert_eq!(Rank::from_score(12), Rank::Weak);
        assert_eq!(Rank::from_score(14), Rank::Weak);
        assert_eq!(Rank::from_score(15), Rank::Normal);
        assert_eq!(Rank::from_score(18), Rank::Normal);
        assert_eq!(Rank::from_score(19), Rank::Good);
        assert_eq!(Rank::from_score(22), Rank::Good);
        assert_eq!(Rank::from_score(23), Rank::VeryGood);
        assert_eq!(Rank::from_score(27), Rank::VeryGood);
        assert_eq!(Rank::from_score(28), Rank::Amazing);
        assert_eq!(Rank::from_score(1000), Rank::Amazing);
    }

    #[test]
    fn test_rank_is_monotonic_in_score() {
        for s in 0..100 {
            assert!(Rank::from_score(s) <= Rank::from_score(s + 1));
        }
    }

    #[test]
    fn test_magnitude_bonuses_are_capped() {
        // Presence 5 + magnitude cap 3, plus one point per character.
        assert_eq!(score("~~~"), 3 + 5 + 3);
        assert_eq!(score("~~~~~~"), 6 + 5 + 3);
        // Digits cap at 2.
        assert_eq!(score("1234"), 4 + 2 + 2);
        // Uppercase caps at 2; lowercase has no magnitude bonus.
        assert_eq!(score("ABCD"), 4 + 3 + 2);
        assert_eq!(score("abcd"), 4 + 2);
    }

    #[test]
    fn test_classification_precedence_in_scoring() {
        // One char per class, plus one unrecognized char counted special.
        assert_eq!(score("aA1 "), 4 + (2 + 2 + 3 + 5) + (1 + 1 + 1));
    }

    #[test]
    fn test_score_is_pure() {
        let pass = "H0lAworld$";
        assert_eq!(score(pass), score(pass));
        assert_eq!(rank(pass), rank(pass));
    }

    #[test]
    fn test_rank_labels() {
        assert_eq!(Rank::VeryWeak.to_string(), "very weak");
        assert_eq!(Rank::Amazing.to_string(), "amazing");
        assert_eq!(u8::from(Rank::Good), 3);
    }
}
