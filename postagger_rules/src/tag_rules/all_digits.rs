use crate::TagRule;

/// Tags words made only of numeric characters, such as `1990`.
///
/// Any character with the Unicode `Numeric` property counts, so fractions such as `½` and
/// numerals such as `Ⅻ` match as well as decimal digits.
pub struct AllDigitsRule {
    tag: String,
}

impl AllDigitsRule {
    /// Creates a new AllDigitsRule.
    ///
    /// # Arguments
    ///
    /// * `tag` - Tag assigned to matching words.
    ///
    /// # Returns
    ///
    /// A new AllDigitsRule.
    pub fn new<S>(tag: S) -> Self
    where
        S: Into<String>,
    {
        Self { tag: tag.into() }
    }
}

impl TagRule for AllDigitsRule {
    fn tag(&self, word: &str) -> Option<&str> {
        (!word.is_empty() && word.chars().all(char::is_numeric)).then_some(self.tag.as_str())
    }
}
