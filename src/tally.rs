//! Per-digit occurrence counts.

/// Occurrences of each decimal digit `0`–`9` in a string.
///
/// Slots are indexed by digit value, so iteration is always in ascending
/// digit order whether or not a digit occurred.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DigitTally([usize; 10]);

impl DigitTally {
    /// Counts the ASCII digits in `s`. Every other character is ignored.
    pub fn of(s: &str) -> Self {
        let mut counts = [0; 10];
        for digit in s.chars().filter_map(|c| c.to_digit(10)) {
            counts[digit as usize] += 1;
        }
        DigitTally(counts)
    }

    /// Occurrences of `digit`, or `None` if `digit` is not in `0..=9`.
    pub fn count(&self, digit: u8) -> Option<usize> {
        self.0.get(usize::from(digit)).copied()
    }

    /// Number of digit characters counted.
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// `(digit, count)` pairs for `0..=9`, zero counts included.
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        (0u8..).zip(self.0.iter().copied())
    }
}
