//! Target word selection
//!
//! The daily puzzle is a pure function of the UTC calendar date; free play
//! draws from the same answer list with a caller-supplied random source.

use crate::core::Word;
use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;

/// Day zero of the daily puzzle sequence (2021-06-19, UTC)
#[must_use]
pub fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 6, 19).unwrap_or(NaiveDate::MIN)
}

/// Whole days elapsed since the epoch, i.e. `floor(hours since epoch / 24)`
///
/// Negative before the epoch. The epoch is a UTC midnight, so this is the
/// same as counting calendar days on the UTC date.
#[must_use]
pub fn day_offset(now: DateTime<Utc>) -> i64 {
    day_offset_for_date(now.date_naive())
}

/// Day offset of a calendar date; equal to `day_offset` at any time that day
#[must_use]
pub fn day_offset_for_date(date: NaiveDate) -> i64 {
    (date - epoch()).num_days()
}

/// Picks target words from the answer list
///
/// The list must stay in its original order for daily indices to be stable.
#[derive(Debug, Clone)]
pub struct WordSelector {
    answers: Vec<Word>,
}

impl WordSelector {
    /// Returns `None` when there is nothing to pick from
    #[must_use]
    pub fn new(answers: Vec<Word>) -> Option<Self> {
        if answers.is_empty() {
            None
        } else {
            Some(Self { answers })
        }
    }

    /// Word for the daily puzzle on `today`
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use wordle_daily::game::WordSelector;
    /// use wordle_daily::wordlists::loader::words_from_slice;
    ///
    /// let selector = WordSelector::new(words_from_slice(&["cigar", "rebut", "sissy"])).unwrap();
    /// let day = NaiveDate::from_ymd_opt(2021, 6, 20).unwrap();
    /// assert_eq!(selector.select_daily(day).text(), "REBUT");
    /// ```
    #[must_use]
    pub fn select_daily(&self, today: NaiveDate) -> &Word {
        &self.answers[self.index_for(day_offset_for_date(today))]
    }

    /// Word for the daily puzzle at an exact instant
    #[must_use]
    pub fn select_daily_at(&self, now: DateTime<Utc>) -> &Word {
        &self.answers[self.index_for(day_offset(now))]
    }

    /// Uniformly random word for free play
    pub fn select_random<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.answers[rng.random_range(0..self.answers.len())]
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    fn index_for(&self, offset: i64) -> usize {
        // rem_euclid keeps pre-epoch dates in range
        offset.rem_euclid(self.answers.len() as i64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{ANSWERS, loader::words_from_slice};
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn selector() -> WordSelector {
        WordSelector::new(words_from_slice(ANSWERS)).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_list_has_no_selector() {
        assert!(WordSelector::new(Vec::new()).is_none());
    }

    #[test]
    fn day_offset_counts_whole_days() {
        assert_eq!(day_offset_for_date(epoch()), 0);
        assert_eq!(day_offset_for_date(date(2021, 6, 20)), 1);
        assert_eq!(day_offset_for_date(date(2022, 6, 19)), 365);
        assert_eq!(day_offset_for_date(date(2021, 6, 18)), -1);

        let just_before = Utc.with_ymd_and_hms(2021, 6, 18, 23, 59, 59).unwrap();
        assert_eq!(day_offset(just_before), -1);
        let midnight = Utc.with_ymd_and_hms(2021, 6, 19, 0, 0, 0).unwrap();
        assert_eq!(day_offset(midnight), 0);
    }

    #[test]
    fn daily_is_stable_within_a_day() {
        let selector = selector();
        let morning = Utc.with_ymd_and_hms(2024, 3, 9, 0, 0, 1).unwrap();
        let night = Utc.with_ymd_and_hms(2024, 3, 9, 23, 59, 59).unwrap();

        assert_eq!(selector.select_daily_at(morning), selector.select_daily_at(night));
        assert_eq!(
            selector.select_daily_at(morning),
            selector.select_daily(date(2024, 3, 9))
        );
        // A fresh selector (new process) agrees
        assert_eq!(
            selector.select_daily(date(2024, 3, 9)),
            WordSelector::new(words_from_slice(ANSWERS))
                .unwrap()
                .select_daily(date(2024, 3, 9))
        );
    }

    #[test]
    fn daily_follows_list_order() {
        let selector = selector();
        assert_eq!(selector.select_daily(epoch()).text(), "CIGAR");
        assert_eq!(selector.select_daily(date(2021, 6, 20)).text(), "REBUT");
    }

    #[test]
    fn daily_does_not_repeat_within_the_list() {
        let selector = selector();
        let day = date(2022, 1, 26);
        assert_eq!(day_offset_for_date(day), 221);
        assert_eq!(
            selector.select_daily(day).text(),
            ANSWERS[221].to_ascii_uppercase()
        );
        assert_ne!(selector.select_daily(day).text(), "SISSY");
    }

    #[test]
    fn daily_changes_between_days() {
        let selector = selector();
        let first = selector.select_daily(date(2024, 3, 9));
        let second = selector.select_daily(date(2024, 3, 10));
        assert_ne!(first, second);
    }

    #[test]
    fn daily_wraps_around_the_list() {
        let selector = selector();
        let len = selector.answers().len() as u64;
        let start = date(2024, 1, 1);
        let later = start + chrono::Days::new(len);
        assert_eq!(selector.select_daily(start), selector.select_daily(later));

        // Dates before the epoch still land inside the list
        let _ = selector.select_daily(date(2000, 1, 1));
    }

    #[test]
    fn random_pick_is_deterministic_for_a_seed() {
        let selector = selector();
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let word = selector.select_random(&mut a);
            assert_eq!(word, selector.select_random(&mut b));
            assert!(selector.answers().contains(word));
        }
    }
}
