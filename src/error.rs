use std::fmt;

/// Which side of a loop a bracket error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    Open,
    Close,
}

impl Bracket {
    pub fn symbol(self) -> char {
        match self {
            Bracket::Open => '[',
            Bracket::Close => ']',
        }
    }
}

/// Errors raised by the tape and the bracket resolver.
///
/// The execution engine itself adds no error kinds: a program either fails
/// bracket resolution before any instruction runs, or it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A `]` with no pending `[`, or a `[` left open at the end of the program.
    /// `index` is the character index of the offending bracket.
    UnmatchedBracket { bracket: Bracket, index: usize },
    /// The tape was (re)built from an empty sequence.
    EmptyTape,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnmatchedBracket { bracket, index } => {
                write!(f, "unmatched '{}' at index {index}", bracket.symbol())
            }
            Error::EmptyTape => write!(f, "tape cannot be built from an empty sequence"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unmatched_open() {
        let err = Error::UnmatchedBracket { bracket: Bracket::Open, index: 4 };
        assert_eq!(err.to_string(), "unmatched '[' at index 4");
    }

    #[test]
    fn test_display_unmatched_close() {
        let err = Error::UnmatchedBracket { bracket: Bracket::Close, index: 0 };
        assert_eq!(err.to_string(), "unmatched ']' at index 0");
    }

    #[test]
    fn test_display_empty_tape() {
        assert_eq!(
            Error::EmptyTape.to_string(),
            "tape cannot be built from an empty sequence"
        );
    }
}
