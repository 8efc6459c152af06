// Preprocessing tables for the string searches

use rustc_hash::FxHashMap;

/// Build the KMP failure function (longest proper prefix that is also a
/// suffix) for every prefix of `pattern`
pub fn failure_function(pattern: &[char]) -> Vec<usize> {
    let mut failure = vec![0; pattern.len()];
    let mut i = 1;
    let mut j = 0;

    while i < pattern.len() {
        if pattern[i] == pattern[j] {
            j += 1;
            failure[i] = j;
            i += 1;
        } else if j != 0 {
            j = failure[j - 1];
        } else {
            failure[i] = 0;
            i += 1;
        }
    }

    failure
}

/// Boyer-Moore bad-character shifts.
///
/// Holds `m - 1 - i` for the last occurrence `i` of each character in
/// pattern positions `0..m-1`. The final pattern character is not recorded
/// unless it also occurs earlier. Characters missing from the table shift by
/// the full pattern length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadCharacterTable {
    pattern_len: usize,
    shifts: FxHashMap<char, usize>,
}

impl BadCharacterTable {
    /// An empty table for a pattern of `pattern_len` characters
    pub fn new(pattern_len: usize) -> Self {
        BadCharacterTable {
            pattern_len,
            shifts: FxHashMap::default(),
        }
    }

    /// Build the complete table for `pattern`
    pub fn build(pattern: &[char]) -> Self {
        let mut table = BadCharacterTable::new(pattern.len());
        for i in 0..pattern.len().saturating_sub(1) {
            table.record(pattern, i);
        }
        table
    }

    /// Record pattern position `i`, overwriting any earlier occurrence of the
    /// same character. Returns the character and its new shift.
    pub(crate) fn record(&mut self, pattern: &[char], i: usize) -> (char, usize) {
        let c = pattern[i];
        let shift = self.pattern_len - 1 - i;
        self.shifts.insert(c, shift);
        (c, shift)
    }

    /// Recorded shift for `c`, if any
    pub fn get(&self, c: char) -> Option<usize> {
        self.shifts.get(&c).copied()
    }

    /// Shift to apply when `c` is the bad character
    pub fn shift(&self, c: char) -> usize {
        self.get(c).unwrap_or(self.pattern_len)
    }

    pub fn pattern_len(&self) -> usize {
        self.pattern_len
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// All recorded shifts, sorted by character
    pub fn entries(&self) -> Vec<(char, usize)> {
        let mut entries: Vec<(char, usize)> = self.shifts.iter().map(|(&c, &s)| (c, s)).collect();
        entries.sort_unstable();
        entries
    }
}
