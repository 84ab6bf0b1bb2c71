use postagger::Sentence;

use crate::tag_rules::{
    AllDigitsRule, CapitalizedRule, ContainsDigitRule, ExactMatchRule, SuffixRule,
};
use crate::{SentenceFilter, TagRule};

/// Ordered list of spelling rules for words missing from the dictionary.
///
/// Rules are tried in order and the first one that applies decides the tag. Words matched by
/// no rule get the default tag.
pub struct HeuristicCascade {
    rules: Vec<Box<dyn TagRule>>,
    default_tag: String,
}

impl HeuristicCascade {
    /// Creates a new HeuristicCascade.
    ///
    /// # Arguments
    ///
    /// * `rules` - Rules in priority order.
    /// * `default_tag` - Tag for words no rule applies to.
    ///
    /// # Returns
    ///
    /// A new HeuristicCascade.
    pub fn new<S>(rules: Vec<Box<dyn TagRule>>, default_tag: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            rules,
            default_tag: default_tag.into(),
        }
    }

    /// Returns the tag of `word`.
    ///
    /// # Examples
    ///
    /// ```
    /// use postagger_rules::sentence_filters::HeuristicCascade;
    ///
    /// let cascade = HeuristicCascade::default();
    /// assert_eq!("VBG", cascade.tag_word("Studying"));
    /// assert_eq!("NN", cascade.tag_word("fast"));
    /// ```
    pub fn tag_word(&self, word: &str) -> &str {
        self.rules
            .iter()
            .find_map(|rule| rule.tag(word))
            .unwrap_or(self.default_tag.as_str())
    }
}

impl Default for HeuristicCascade {
    /// Creates the cascade for Penn Treebank tags.
    ///
    /// 1. all digits: `CD`
    /// 2. `=`: `SYM`
    /// 3. `-es`, `-s`: `NNS`
    /// 4. `-ing`: `VBG`
    /// 5. capitalized: `NNP`
    /// 6. `-ive`: `JJ`
    /// 7. contains a digit: `CD`
    /// 8. `-ly`: `RB`
    /// 9. otherwise: `NN`
    fn default() -> Self {
        let rules: Vec<Box<dyn TagRule>> = vec![
            Box::new(AllDigitsRule::new("CD")),
            Box::new(ExactMatchRule::new("=", "SYM")),
            Box::new(SuffixRule::new(["es", "s"], "NNS")),
            Box::new(SuffixRule::new(["ing"], "VBG")),
            Box::new(CapitalizedRule::new("NNP")),
            Box::new(SuffixRule::new(["ive"], "JJ")),
            Box::new(ContainsDigitRule::new("CD")),
            Box::new(SuffixRule::new(["ly"], "RB")),
        ];
        Self::new(rules, "NN")
    }
}

impl SentenceFilter for HeuristicCascade {
    /// Tags every word that has no tag yet.
    ///
    /// # Arguments:
    ///
    /// * `sentence` - Input sentence.
    fn filter(&self, sentence: &mut Sentence) {
        for (surface, tag) in sentence.iter_untagged_mut() {
            *tag = Some(self.tag_word(surface).to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order() {
        let cascade = HeuristicCascade::default();

        assert_eq!("CD", cascade.tag_word("1990"));
        assert_eq!("SYM", cascade.tag_word("="));
        assert_eq!("NNS", cascade.tag_word("boxes"));
        assert_eq!("NNS", cascade.tag_word("Paris"));
        assert_eq!("NNS", cascade.tag_word("1990s"));
        assert_eq!("NNS", cascade.tag_word("Things"));
        assert_eq!("VBG", cascade.tag_word("Running"));
        assert_eq!("VBG", cascade.tag_word("Studying"));
        assert_eq!("NNP", cascade.tag_word("Bob"));
        assert_eq!("NNP", cascade.tag_word("Native"));
        assert_eq!("NNP", cascade.tag_word("Quickly"));
        assert_eq!("JJ", cascade.tag_word("effective"));
        assert_eq!("CD", cascade.tag_word("3rd-quarter"));
        assert_eq!("CD", cascade.tag_word("1\\/2"));
        assert_eq!("RB", cascade.tag_word("quickly"));
        assert_eq!("NN", cascade.tag_word("fast"));
        assert_eq!("NN", cascade.tag_word("=="));
        assert_eq!("NN", cascade.tag_word("/"));
    }

    #[test]
    fn test_custom_cascade() {
        let rules: Vec<Box<dyn TagRule>> = vec![
            Box::new(SuffixRule::new(["ly"], "ADV")),
            Box::new(CapitalizedRule::new("PROPN")),
        ];
        let cascade = HeuristicCascade::new(rules, "X");

        assert_eq!("ADV", cascade.tag_word("Only"));
        assert_eq!("PROPN", cascade.tag_word("Bob"));
        assert_eq!("X", cascade.tag_word("dog"));
    }

    #[test]
    fn test_empty_cascade() {
        let cascade = HeuristicCascade::new(vec![], "NN");

        assert_eq!("NN", cascade.tag_word("anything"));
    }

    #[test]
    fn test_filter_only_untagged() {
        let mut s = Sentence::from_raw("[ The dogs ]");
        if let postagger::Token::Word { tag, .. } = &mut s.tokens_mut()[1] {
            *tag = Some("DT".to_string());
        }
        HeuristicCascade::default().filter(&mut s);

        assert_eq!("[ The/DT dogs/NNS ]", s.to_tagged_string().unwrap());
    }
}
