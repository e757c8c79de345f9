//! Guess validation against the word lists

use super::{ALLOWED, ANSWERS, loader::words_from_slice};
use crate::core::Word;

/// Membership test over the answer list and the allowed-guess list
///
/// Both lists are kept sorted so every lookup is a binary search. The answer
/// list here is a sorted copy; daily selection uses the original order.
#[derive(Debug, Clone)]
pub struct Dictionary {
    answers: Vec<Word>,
    allowed: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary from two word lists in any order
    #[must_use]
    pub fn new(answers: &[Word], allowed: &[Word]) -> Self {
        Self {
            answers: sorted(answers),
            allowed: sorted(allowed),
        }
    }

    /// Dictionary over the lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(&words_from_slice(ANSWERS), &words_from_slice(ALLOWED))
    }

    /// Check whether `word` may be submitted as a guess
    ///
    /// Case is ignored. Strings that are not 5 ASCII letters are never valid.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::Word;
    /// use wordle_daily::wordlists::Dictionary;
    ///
    /// let answers = [Word::new("crane").unwrap()];
    /// let allowed = [Word::new("aahed").unwrap()];
    /// let dictionary = Dictionary::new(&answers, &allowed);
    ///
    /// assert!(dictionary.is_valid_guess("Crane"));
    /// assert!(dictionary.is_valid_guess("AAHED"));
    /// assert!(!dictionary.is_valid_guess("qwert"));
    /// ```
    #[must_use]
    pub fn is_valid_guess(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.contains(&w))
    }

    /// Check membership of an already parsed word
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.answers.binary_search(word).is_ok() || self.allowed.binary_search(word).is_ok()
    }

    /// Total number of distinct entries across both lists
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
            + self
                .allowed
                .iter()
                .filter(|w| self.answers.binary_search(w).is_err())
                .count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty() && self.allowed.is_empty()
    }
}

fn sorted(words: &[Word]) -> Vec<Word> {
    let mut words = words.to_vec();
    words.sort_unstable();
    words.dedup();
    words
}
