//! Incremental matcher for the `true`, `false`, and `null` keywords.

use crate::lexer::LexemeKind;

/// What happened after feeding one more byte into the keyword matcher?
pub(crate) enum Step {
    /// Byte matched, but the keyword is not finished yet.
    NeedMore,
    /// Byte matched *and* completed the keyword.
    Done(LexemeKind),
    /// Byte did **not** match the expected keyword byte.
    Reject,
}

/// `None` ➜ no keyword is in flight.
/// `Some` ➜ `(remaining_bytes, lexeme_kind)` while matching.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct ExpectedKeyword(Option<(&'static [u8], LexemeKind)>);

impl ExpectedKeyword {
    /// No keyword is in flight.
    pub(crate) fn none() -> Self {
        ExpectedKeyword(None)
    }

    /// Start matching after the *first* byte (`t`, `f`, or `n`).
    pub(crate) fn new(first: u8) -> Self {
        match first {
            b't' => ExpectedKeyword(Some((b"rue", LexemeKind::True))),
            b'f' => ExpectedKeyword(Some((b"alse", LexemeKind::False))),
            b'n' => ExpectedKeyword(Some((b"ull", LexemeKind::Null))),
            _ => ExpectedKeyword::none(),
        }
    }

    /// Give the matcher the next input byte and learn what to do next.
    pub(crate) fn step(&mut self, b: u8) -> Step {
        let Some((bytes, kind)) = self.0.take() else {
            return Step::Reject;
        };

        match bytes.split_first() {
            Some((&expected, rest)) if expected == b => {
                if rest.is_empty() {
                    Step::Done(kind)
                } else {
                    self.0 = Some((rest, kind));
                    Step::NeedMore
                }
            }
            _ => {
                // Mismatch: restore the state we took at the top.
                self.0 = Some((bytes, kind));
                Step::Reject
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_true_byte_by_byte() {
        let mut kw = ExpectedKeyword::new(b't');
        assert!(matches!(kw.step(b'r'), Step::NeedMore));
        assert!(matches!(kw.step(b'u'), Step::NeedMore));
        assert!(matches!(kw.step(b'e'), Step::Done(LexemeKind::True)));
    }

    #[test]
    fn rejects_on_first_bad_byte() {
        let mut kw = ExpectedKeyword::new(b'n');
        assert!(matches!(kw.step(b'u'), Step::NeedMore));
        assert!(matches!(kw.step(b'x'), Step::Reject));
    }

    #[test]
    fn unknown_introducer_is_idle() {
        let mut kw = ExpectedKeyword::new(b'q');
        assert!(matches!(kw.step(b'q'), Step::Reject));
    }
}
