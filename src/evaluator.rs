use crate::word::{WORD_LENGTH, Word};

/// Per-letter classification of a guess against the secret word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Right letter, right position
    Correct,
    /// Letter is in the word, elsewhere
    Present,
    Absent,
}

impl Verdict {
    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => 'X',
        }
    }
}

/// Score `guess` against `secret`.
///
/// Exact matches are resolved first and removed from the pool of secret
/// letters; the remaining positions then claim letters from that pool left
/// to right. A letter repeated in the guess is only marked `Present` as many
/// times as unclaimed copies remain in the secret.
#[must_use]
pub fn evaluate(secret: &Word, guess: &Word) -> [Verdict; WORD_LENGTH] {
    let mut verdicts = [Verdict::Absent; WORD_LENGTH];
    let mut pool: [Option<u8>; WORD_LENGTH] = secret.bytes().map(Some);
    let guess = guess.bytes();

    // First pass: correct positions
    for i in 0..WORD_LENGTH {
        if pool[i] == Some(guess[i]) {
            verdicts[i] = Verdict::Correct;
            pool[i] = None;
        }
    }

    // Second pass: present letters, consuming the pool
    for i in 0..WORD_LENGTH {
        if verdicts[i] == Verdict::Correct {
            continue;
        }
        if let Some(slot) = pool.iter_mut().find(|slot| **slot == Some(guess[i])) {
            verdicts[i] = Verdict::Present;
            *slot = None;
        }
    }

    verdicts
}

/// True when every position is an exact match.
#[must_use]
pub fn is_solved(verdicts: &[Verdict; WORD_LENGTH]) -> bool {
    verdicts.iter().all(|v| *v == Verdict::Correct)
}

#[must_use]
pub fn verdicts_to_string(verdicts: &[Verdict; WORD_LENGTH]) -> String {
    verdicts.iter().map(|v| v.to_char()).collect()
}
