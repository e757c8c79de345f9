//! Word lists for Wordle
//!
//! Provides embedded word lists compiled into the binary and the dictionary
//! used to validate guesses.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
        assert_eq!(ANSWERS_COUNT, 2309);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
        assert_eq!(ALLOWED_COUNT, 10654);
    }

    #[test]
    fn common_openers_are_guessable() {
        let dictionary = Dictionary::embedded();
        for word in [
            "their", "adieu", "raise", "stare", "world", "money", "roate", "soare", "salet",
            "crane", "slate", "audio", "arose", "tares", "lares",
        ] {
            assert!(dictionary.is_valid_guess(word), "{word} should be guessable");
        }
    }

    #[test]
    fn retired_answers_stay_guessable() {
        let dictionary = Dictionary::embedded();
        for word in ["agora", "pupal", "lynch", "fibre", "slave", "wench"] {
            assert!(!ANSWERS.contains(&word), "{word} is no longer an answer");
            assert!(dictionary.is_valid_guess(word), "{word} should be guessable");
        }
    }

    #[test]
    fn answer_order_is_pinned() {
        // The daily puzzle indexes into this order
        assert_eq!(&ANSWERS[..5], ["cigar", "rebut", "sissy", "humph", "awake"]);
        assert_eq!(ANSWERS[79], "front");
        assert_eq!(ANSWERS[80], "steak");
        assert_eq!(ANSWERS[ANSWERS_COUNT - 1], "silly");
    }

    #[test]
    fn answers_and_allowed_are_disjoint() {
        assert!(ANSWERS.iter().all(|word| !ALLOWED.contains(word)));
    }

    #[test]
    fn answers_are_valid_words() {
        for &word in ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn allowed_are_valid_words() {
        for &word in ALLOWED {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn answers_have_no_duplicates() {
        // Every daily puzzle gets a distinct word
        let unique: std::collections::HashSet<_> = ANSWERS.iter().collect();
        assert_eq!(unique.len(), ANSWERS.len());
    }
}
