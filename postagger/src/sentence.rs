use crate::errors::{PosTaggerError, Result};

/// Token of a [`Sentence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A bare `[` or `]`, copied to the output untagged.
    Bracket(char),

    /// A word and the tag assigned so far.
    Word { surface: String, tag: Option<String> },
}

impl Token {
    /// Gets the text of the token without its tag.
    pub fn surface(&self) -> &str {
        match self {
            Self::Bracket('[') => "[",
            Self::Bracket(_) => "]",
            Self::Word { surface, .. } => surface.as_str(),
        }
    }

    /// Gets the tag, if the token is a tagged word.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Bracket(_) => None,
            Self::Word { tag, .. } => tag.as_deref(),
        }
    }

    /// Checks whether the token is a word still waiting for a tag.
    pub const fn is_untagged(&self) -> bool {
        matches!(self, Self::Word { tag: None, .. })
    }
}

/// One line of text to be tagged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sentence {
    pub(crate) tokens: Vec<Token>,
}

impl Sentence {
    /// Creates a new [`Sentence`] from a raw line.
    ///
    /// The line is split on whitespace. Tokens that are exactly `[` or `]` are kept as
    /// [`Token::Bracket`]; every other token becomes an untagged word.
    ///
    /// # Examples
    ///
    /// ```
    /// use postagger::{Sentence, Token};
    ///
    /// let s = Sentence::from_raw("[ The dog ]");
    /// assert_eq!(4, s.tokens().len());
    /// assert_eq!(Token::Bracket('['), s.tokens()[0]);
    /// assert!(s.tokens()[1].is_untagged());
    /// ```
    pub fn from_raw<S>(text: S) -> Self
    where
        S: AsRef<str>,
    {
        let tokens = text
            .as_ref()
            .split_whitespace()
            .map(|t| match t {
                "[" => Token::Bracket('['),
                "]" => Token::Bracket(']'),
                _ => Token::Word {
                    surface: t.to_string(),
                    tag: None,
                },
            })
            .collect();
        Self { tokens }
    }

    /// Gets a reference to the tokens.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Gets a mutable reference to the tokens.
    pub fn tokens_mut(&mut self) -> &mut [Token] {
        &mut self.tokens
    }

    /// Iterates over the words that have no tag yet, with a slot to fill in.
    pub fn iter_untagged_mut(&mut self) -> impl Iterator<Item = (&str, &mut Option<String>)> {
        self.tokens.iter_mut().filter_map(|token| match token {
            Token::Word {
                surface,
                tag: tag @ None,
            } => Some((surface.as_str(), tag)),
            _ => None,
        })
    }

    /// Gets the number of words without a tag.
    pub fn n_untagged(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_untagged()).count()
    }

    /// Writes the tagged line to `buf`.
    ///
    /// Words are written as `word/tag`, brackets as they are, separated by single spaces.
    ///
    /// # Errors
    ///
    /// If the sentence contains an untagged word, an error variant will be returned.
    pub fn write_tagged_text(&self, buf: &mut String) -> Result<()> {
        for (i, token) in self.tokens.iter().enumerate() {
            if i != 0 {
                buf.push(' ');
            }
            match token {
                Token::Bracket(_) => buf.push_str(token.surface()),
                Token::Word {
                    surface,
                    tag: Some(tag),
                } => {
                    buf.push_str(surface);
                    buf.push('/');
                    buf.push_str(tag);
                }
                Token::Word { surface, tag: None } => {
                    return Err(PosTaggerError::invalid_argument(
                        "sentence",
                        format!("`{surface}` has no tag"),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Generates the tagged line.
    ///
    /// # Errors
    ///
    /// If the sentence contains an untagged word, an error variant will be returned.
    pub fn to_tagged_string(&self) -> Result<String> {
        let mut buf = String::new();
        self.write_tagged_text(&mut buf)?;
        Ok(buf)
    }
}
