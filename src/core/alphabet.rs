//! The fixed proquint alphabet.
//!
//! Sixteen consonants carry four bits each and four vowels carry two bits
//! each. A letter's index in its table is the value it encodes.

use std::fmt;

/// Consonants in value order (`b` = 0 ... `z` = 15).
pub const CONSONANTS: [u8; 16] = *b"bdfghjklmnprstvz";

/// Vowels in value order (`a` = 0 ... `u` = 3).
pub const VOWELS: [u8; 4] = *b"aiou";

/// Number of letters in one syllable.
pub const SYLLABLE_LEN: usize = 5;

/// Letter classes of the five syllable positions, first to last.
pub const SYLLABLE_PATTERN: [LetterKind; SYLLABLE_LEN] = [
    LetterKind::Consonant,
    LetterKind::Vowel,
    LetterKind::Consonant,
    LetterKind::Vowel,
    LetterKind::Consonant,
];

const NOT_IN_ALPHABET: u8 = 0xFF;

const CONSONANT_VALUES: [u8; 128] = reverse_table(&CONSONANTS);
const VOWEL_VALUES: [u8; 128] = reverse_table(&VOWELS);

const fn reverse_table<const N: usize>(letters: &[u8; N]) -> [u8; 128] {
    let mut table = [NOT_IN_ALPHABET; 128];
    let mut i = 0;
    while i < N {
        table[letters[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Which table a syllable position draws its letter from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterKind {
    Consonant,
    Vowel,
}

impl LetterKind {
    /// Number of bits one letter of this kind carries.
    pub const fn bits(self) -> u32 {
        match self {
            LetterKind::Consonant => 4,
            LetterKind::Vowel => 2,
        }
    }

    /// Bit mask covering a single digit of this kind.
    pub const fn mask(self) -> u16 {
        (1 << self.bits()) - 1
    }

    /// The letters of this kind, in value order.
    pub fn letters(self) -> &'static [u8] {
        match self {
            LetterKind::Consonant => &CONSONANTS,
            LetterKind::Vowel => &VOWELS,
        }
    }

    /// Returns the letter for `digit`.
    ///
    /// Only the low `bits()` bits of `digit` are used, so every input maps to
    /// a letter.
    pub fn letter(self, digit: u16) -> char {
        self.letters()[(digit & self.mask()) as usize] as char
    }

    /// Looks up the value of `letter`, ignoring ASCII case.
    ///
    /// Returns `None` if the letter does not belong to this kind.
    pub fn value_of(self, letter: char) -> Option<u16> {
        if !letter.is_ascii() {
            return None;
        }
        let table = match self {
            LetterKind::Consonant => &CONSONANT_VALUES,
            LetterKind::Vowel => &VOWEL_VALUES,
        };
        let value = table[letter.to_ascii_lowercase() as usize];
        (value != NOT_IN_ALPHABET).then_some(u16::from(value))
    }
}

impl fmt::Display for LetterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LetterKind::Consonant => f.write_str("consonant"),
            LetterKind::Vowel => f.write_str("vowel"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_letters_are_distinct_lowercase_ascii() {
        let all: Vec<u8> = CONSONANTS.iter().chain(VOWELS.iter()).copied().collect();
        let unique: HashSet<u8> = all.iter().copied().collect();

        assert_eq!(unique.len(), CONSONANTS.len() + VOWELS.len());
        assert!(all.iter().all(|b| b.is_ascii_lowercase()));
    }

    #[test]
    fn test_pattern_covers_sixteen_bits() {
        let bits: u32 = SYLLABLE_PATTERN.iter().map(|kind| kind.bits()).sum();
        assert_eq!(bits, 16);
    }

    #[test]
    fn test_value_lookup_matches_index() {
        for (i, &c) in CONSONANTS.iter().enumerate() {
            assert_eq!(LetterKind::Consonant.value_of(c as char), Some(i as u16));
            assert_eq!(LetterKind::Consonant.letter(i as u16), c as char);
        }
        for (i, &v) in VOWELS.iter().enumerate() {
            assert_eq!(LetterKind::Vowel.value_of(v as char), Some(i as u16));
            assert_eq!(LetterKind::Vowel.letter(i as u16), v as char);
        }
    }

    #[test]
    fn test_value_lookup_ignores_case() {
        assert_eq!(LetterKind::Consonant.value_of('Z'), Some(15));
        assert_eq!(LetterKind::Vowel.value_of('U'), Some(3));
    }

    #[test]
    fn test_value_lookup_rejects_other_kind() {
        assert_eq!(LetterKind::Consonant.value_of('a'), None);
        assert_eq!(LetterKind::Vowel.value_of('b'), None);
        assert_eq!(LetterKind::Consonant.value_of('c'), None);
        assert_eq!(LetterKind::Vowel.value_of('é'), None);
        assert_eq!(LetterKind::Consonant.value_of('-'), None);
    }
}
