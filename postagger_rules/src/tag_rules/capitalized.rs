use crate::TagRule;

/// Tags words starting with an uppercase letter.
pub struct CapitalizedRule {
    tag: String,
}

impl CapitalizedRule {
    /// Creates a new CapitalizedRule.
    pub fn new<S>(tag: S) -> Self
    where
        S: Into<String>,
    {
        Self { tag: tag.into() }
    }
}

impl TagRule for CapitalizedRule {
    fn tag(&self, word: &str) -> Option<&str> {
        word.chars()
            .next()
            .filter(|c| c.is_uppercase())
            .map(|_| self.tag.as_str())
    }
}
