use crate::TagRule;

/// Tags words ending with any of the given suffixes.
pub struct SuffixRule {
    suffixes: Vec<String>,
    tag: String,
}

impl SuffixRule {
    /// Creates a new SuffixRule.
    ///
    /// # Arguments
    ///
    /// * `suffixes` - Suffixes to look for. The word itself counts as its own suffix.
    /// * `tag` - Tag assigned to matching words.
    ///
    /// # Returns
    ///
    /// A new SuffixRule.
    pub fn new<I, S, T>(suffixes: I, tag: T) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            suffixes: suffixes.into_iter().map(Into::into).collect(),
            tag: tag.into(),
        }
    }
}

impl TagRule for SuffixRule {
    fn tag(&self, word: &str) -> Option<&str> {
        self.suffixes
            .iter()
            .any(|suffix| word.ends_with(suffix.as_str()))
            .then_some(self.tag.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix() {
        let rule = SuffixRule::new(["es", "s"], "NNS");

        assert_eq!(Some("NNS"), rule.tag("boxes"));
        assert_eq!(Some("NNS"), rule.tag("dogs"));
        assert_eq!(Some("NNS"), rule.tag("s"));
        assert_eq!(None, rule.tag("dog"));
        assert_eq!(None, rule.tag("DOGS"));
    }

    #[test]
    fn test_suffix_multibyte() {
        let rule = SuffixRule::new(["ly"], "RB");

        assert_eq!(Some("RB"), rule.tag("naïvely"));
        assert_eq!(None, rule.tag("naïve"));
    }
}
