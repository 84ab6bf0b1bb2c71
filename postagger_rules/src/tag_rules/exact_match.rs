use crate::TagRule;

/// Tags one fixed surface form.
pub struct ExactMatchRule {
    surface: String,
    tag: String,
}

impl ExactMatchRule {
    /// Creates a new ExactMatchRule.
    ///
    /// # Arguments
    ///
    /// * `surface` - The word to match.
    /// * `tag` - Tag assigned to the word.
    ///
    /// # Returns
    ///
    /// A new ExactMatchRule.
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
}

impl TagRule for ExactMatchRule {
    fn tag(&self, word: &str) -> Option<&str> {
        (word == self.surface).then_some(self.tag.as_str())
    }
}
