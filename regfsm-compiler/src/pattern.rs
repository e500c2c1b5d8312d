//! Pattern scanner.
//!
//! The first compiler phase turns the pattern text into a flat list of
//! [`Token`]s. `*` and `+` never produce a token of their own; they set the
//! repetition of the token before them.

use crate::state::Repetition;
use alloc::vec::Vec;
use core::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub atom: Atom,
    pub repeat: Repetition,
    /// Character offset of the token in the pattern.
    pub offset: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Atom {
    Literal(char),
    Wildcard,
    Class(ClassSpec),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassSpec {
    pub items: Vec<ClassItem>,
    pub negated: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClassItem {
    Char(char),
    Range { start: char, end: char },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// `*` or `+` with no preceding token.
    NothingToRepeat { offset: usize },
    /// Unsupported character outside a character class.
    InvalidToken { offset: usize, found: char },
    /// `[` never closed by `]`; `offset` points at the opening bracket.
    UnterminatedClass { offset: usize },
    /// The pattern needs more states than a `StateId` can address.
    TooManyStates { offset: usize },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PatternErrorKind {
    NothingToRepeat,
    InvalidToken,
    UnterminatedClass,
    TooManyStates,
}

impl PatternErrorKind {
    pub const fn message(self) -> &'static str {
        match self {
            PatternErrorKind::NothingToRepeat => "nothing to repeat",
            PatternErrorKind::InvalidToken => "invalid operation",
            PatternErrorKind::UnterminatedClass => "unterminated character class",
            PatternErrorKind::TooManyStates => "pattern exceeds state capacity",
        }
    }
}

impl PatternError {
    pub const fn kind(&self) -> PatternErrorKind {
        match self {
            PatternError::NothingToRepeat { .. } => PatternErrorKind::NothingToRepeat,
            PatternError::InvalidToken { .. } => PatternErrorKind::InvalidToken,
            PatternError::UnterminatedClass { .. } => PatternErrorKind::UnterminatedClass,
            PatternError::TooManyStates { .. } => PatternErrorKind::TooManyStates,
        }
    }

    pub const fn offset(&self) -> usize {
        match self {
            PatternError::NothingToRepeat { offset }
            | PatternError::InvalidToken { offset, .. }
            | PatternError::UnterminatedClass { offset }
            | PatternError::TooManyStates { offset } => *offset,
        }
    }

    pub const fn message(&self) -> &'static str {
        self.kind().message()
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::InvalidToken { offset, found } => {
                write!(f, "{} {:?} at offset {}", self.message(), found, offset)
            }
            _ => write!(f, "{} at offset {}", self.message(), self.offset()),
        }
    }
}

impl core::error::Error for PatternError {}

/// Split `pattern` into tokens, failing on the first malformed construct.
pub fn tokenize(pattern: &str) -> Result<Vec<Token>, PatternError> {
    let mut scanner = Scanner::new(pattern);
    let mut tokens: Vec<Token> = Vec::new();

    while let Some(ch) = scanner.peek() {
        let offset = scanner.pos;
        match ch {
            '*' | '+' => {
                let last = tokens
                    .last_mut()
                    .ok_or(PatternError::NothingToRepeat { offset })?;
                // `*` and `+` on the same token wire exactly like `*`.
                if ch == '*' || last.repeat != Repetition::ZeroOrMore {
                    last.repeat = if ch == '*' {
                        Repetition::ZeroOrMore
                    } else {
                        Repetition::OneOrMore
                    };
                }
                scanner.bump();
            }
            '[' => {
                let class = scanner.class()?;
                tokens.push(Token {
                    atom: Atom::Class(class),
                    repeat: Repetition::Once,
                    offset,
                });
            }
            _ => {
                let atom = new_atom(ch).ok_or(PatternError::InvalidToken { offset, found: ch })?;
                scanner.bump();
                tokens.push(Token {
                    atom,
                    repeat: Repetition::Once,
                    offset,
                });
            }
        }
    }

    Ok(tokens)
}

fn new_atom(ch: char) -> Option<Atom> {
    if ch.is_ascii_alphanumeric() {
        Some(Atom::Literal(ch))
    } else if ch == '.' {
        Some(Atom::Wildcard)
    } else {
        None
    }
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
}

impl Scanner {
    fn new(pattern: &str) -> Self {
        Self {
            chars: pattern.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    fn peek_at(&self, ahead: usize) -> Option<char> {
        self.chars.get(self.pos + ahead).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    /// Parse `[...]` starting at the opening bracket.
    fn class(&mut self) -> Result<ClassSpec, PatternError> {
        let open = self.pos;
        self.bump();

        let mut class = ClassSpec::default();
        if self.peek() == Some('^') {
            class.negated = true;
            self.bump();
        }

        loop {
            let ch = self
                .peek()
                .ok_or(PatternError::UnterminatedClass { offset: open })?;
            if ch == ']' {
                self.bump();
                return Ok(class);
            }
            match (self.peek_at(1), self.peek_at(2)) {
                (Some('-'), Some(end)) => {
                    class.items.push(ClassItem::Range { start: ch, end });
                    self.pos += 3;
                }
                _ => {
                    class.items.push(ClassItem::Char(ch));
                    self.bump();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn atoms(pattern: &str) -> Vec<(Atom, Repetition)> {
        tokenize(pattern)
            .expect("pattern should tokenize")
            .into_iter()
            .map(|token| (token.atom, token.repeat))
            .collect()
    }

    #[test]
    fn repetition_marks_preceding_token() {
        assert_eq!(
            atoms("a*4.+hi"),
            vec![
                (Atom::Literal('a'), Repetition::ZeroOrMore),
                (Atom::Literal('4'), Repetition::Once),
                (Atom::Wildcard, Repetition::OneOrMore),
                (Atom::Literal('h'), Repetition::Once),
                (Atom::Literal('i'), Repetition::Once),
            ]
        );
    }

    #[test]
    fn star_survives_a_later_plus() {
        assert_eq!(atoms("a*+"), vec![(Atom::Literal('a'), Repetition::ZeroOrMore)]);
        assert_eq!(atoms("a+*"), vec![(Atom::Literal('a'), Repetition::ZeroOrMore)]);
        assert_eq!(atoms("a++"), vec![(Atom::Literal('a'), Repetition::OneOrMore)]);
    }

    #[test]
    fn class_with_ranges_and_literals() {
        let expected = ClassSpec {
            items: vec![
                ClassItem::Range {
                    start: 'a',
                    end: 'z',
                },
                ClassItem::Char('_'),
                ClassItem::Range {
                    start: '0',
                    end: '9',
                },
            ],
            negated: true,
        };
        assert_eq!(
            atoms("[^a-z_0-9]+"),
            vec![(Atom::Class(expected), Repetition::OneOrMore)]
        );
    }

    #[test]
    fn metacharacters_are_literal_inside_class() {
        let tokens = atoms("[.*[]");
        let (Atom::Class(class), _) = &tokens[0] else {
            panic!("expected class token, got {:?}", tokens);
        };
        assert_eq!(
            class.items,
            vec![ClassItem::Char('.'), ClassItem::Char('*'), ClassItem::Char('[')]
        );
    }

    #[test]
    fn empty_class_is_accepted() {
        assert_eq!(
            atoms("[]"),
            vec![(Atom::Class(ClassSpec::default()), Repetition::Once)]
        );
    }

    #[test]
    fn token_offsets_count_characters() {
        let offsets: Vec<usize> = tokenize("a[bc]*d")
            .expect("pattern should tokenize")
            .iter()
            .map(|token| token.offset)
            .collect();
        assert_eq!(offsets, vec![0, 1, 6]);
    }

    #[test]
    fn leading_repetition_is_rejected() {
        assert_eq!(
            tokenize("*abc"),
            Err(PatternError::NothingToRepeat { offset: 0 })
        );
        assert_eq!(
            tokenize("+xyz"),
            Err(PatternError::NothingToRepeat { offset: 0 })
        );
    }

    #[test]
    fn unterminated_class_points_at_bracket() {
        assert_eq!(
            tokenize("ab[abc"),
            Err(PatternError::UnterminatedClass { offset: 2 })
        );
        assert_eq!(
            tokenize("[^"),
            Err(PatternError::UnterminatedClass { offset: 0 })
        );
    }

    #[test]
    fn unsupported_characters_are_invalid() {
        for (pattern, offset, found) in [("a]", 1, ']'), ("^a", 0, '^'), ("a|b", 1, '|'), ("é", 0, 'é')] {
            assert_eq!(
                tokenize(pattern),
                Err(PatternError::InvalidToken { offset, found }),
                "pattern {:?}",
                pattern
            );
        }
    }

    #[test]
    fn error_display_includes_message_and_offset() {
        let err = PatternError::UnterminatedClass { offset: 3 };
        assert_eq!(
            alloc::format!("{}", err),
            "unterminated character class at offset 3"
        );
        assert_eq!(err.kind(), PatternErrorKind::UnterminatedClass);
    }
}
