use std::io::{BufRead, Lines};

use crate::errors::{PosTaggerError, Result};

const ESCAPED_SLASH: &str = "\\/";

/// A word paired with the tag it carries in a training corpus.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaggedToken {
    pub(crate) surface: String,
    pub(crate) tag: String,
}

impl TaggedToken {
    /// Creates a new [`TaggedToken`].
    pub fn new<S, T>(surface: S, tag: T) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            surface: surface.into(),
            tag: tag.into(),
        }
    }

    /// Parses one whitespace-separated unit such as `dog/NN`.
    ///
    /// # Arguments
    ///
    /// * `unit` - A unit without brackets.
    ///
    /// # Returns
    ///
    /// A new [`TaggedToken`], or `None` if `unit` has no `word/tag` shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use postagger::TaggedToken;
    ///
    /// let t = TaggedToken::from_unit("dog/NN").unwrap();
    /// assert_eq!(("dog", "NN"), (t.surface(), t.tag()));
    ///
    /// let t = TaggedToken::from_unit("1\\/2/CD").unwrap();
    /// assert_eq!(("1\\/2", "CD"), (t.surface(), t.tag()));
    ///
    /// let t = TaggedToken::from_unit("that/IN|DT").unwrap();
    /// assert_eq!("IN", t.tag());
    ///
    /// assert!(TaggedToken::from_unit("dog").is_none());
    /// ```
    pub fn from_unit(unit: &str) -> Option<Self> {
        let mut fields = unit.split('/');
        let (surface, tag) = if unit.contains(ESCAPED_SLASH) {
            // `word1\/word2/tag`: the first separator belongs to the word.
            let left = fields.next()?;
            let right = fields.next()?;
            (format!("{left}/{right}"), fields.next()?)
        } else {
            let surface = fields.next()?;
            (surface.to_string(), fields.next()?)
        };
        let tag = tag.split('|').next().unwrap_or_default();
        if tag.is_empty() {
            return None;
        }
        Some(Self {
            surface,
            tag: tag.to_string(),
        })
    }

    /// Gets the surface form.
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// Gets the tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

/// Parses one line of a tagged corpus.
///
/// Bracket characters are removed wherever they appear, and the rest is split on whitespace
/// into `word/tag` units.
///
/// # Errors
///
/// If a unit lacks the `/` separator or the tag is empty, a
/// [`PosTaggerError::MalformedToken`] naming the unit and the line will be returned.
///
/// # Examples
///
/// ```
/// use postagger::{parse_tagged_line, TaggedToken};
///
/// let tokens = parse_tagged_line("[ The/DT dog/NN ] runs/VBZ").unwrap();
/// assert_eq!(vec![
///     TaggedToken::new("The", "DT"),
///     TaggedToken::new("dog", "NN"),
///     TaggedToken::new("runs", "VBZ"),
/// ], tokens);
///
/// assert!(parse_tagged_line("The/DT dog").is_err());
/// ```
pub fn parse_tagged_line(line: &str) -> Result<Vec<TaggedToken>> {
    let line_wo_brackets = line.replace(['[', ']'], "");
    line_wo_brackets
        .split_whitespace()
        .map(|unit| {
            TaggedToken::from_unit(unit)
                .ok_or_else(|| PosTaggerError::malformed_token(unit, line))
        })
        .collect()
}

/// Reader yielding the parsed lines of a tagged corpus.
///
/// Malformed units are reported together with their 1-origin line number.
pub struct TaggedCorpusReader<R> {
    lines: Lines<R>,
    line_number: usize,
}

impl<R> TaggedCorpusReader<R>
where
    R: BufRead,
{
    /// Creates a new reader over `rdr`.
    pub fn new(rdr: R) -> Self {
        Self {
            lines: rdr.lines(),
            line_number: 0,
        }
    }

    /// Gets the number of lines read so far.
    pub const fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R> Iterator for TaggedCorpusReader<R>
where
    R: BufRead,
{
    type Item = Result<Vec<TaggedToken>>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.line_number += 1;
        let line_number = self.line_number;
        Some(
            line.map_err(PosTaggerError::from)
                .and_then(|line| parse_tagged_line(&line))
                .map_err(|e| e.with_line_number(line_number)),
        )
    }
}
