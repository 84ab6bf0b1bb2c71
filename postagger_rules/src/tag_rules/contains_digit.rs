use crate::TagRule;

/// Tags words containing at least one numeric character, such as `3rd-quarter`.
///
/// Numeric characters are those accepted by [`char::is_numeric`], fractions like `½` included.
pub struct ContainsDigitRule {
    tag: String,
}

impl ContainsDigitRule {
    /// Creates a new ContainsDigitRule.
    pub fn new<S>(tag: S) -> Self
    where
        S: Into<String>,
    {
        Self { tag: tag.into() }
    }
}

impl TagRule for ContainsDigitRule {
    fn tag(&self, word: &str) -> Option<&str> {
        word.chars()
            .any(char::is_numeric)
            .then_some(self.tag.as_str())
    }
}
