//! Rule base filters for postagger.
//!
//! The dictionary of [`postagger::Predictor`] only knows words seen in training. The
//! [`sentence_filters::HeuristicCascade`] assigns a tag to every remaining word from its
//! spelling.
//!
//! ## Examples
//!
//! ```
//! use postagger::{parse_tagged_line, Predictor, Sentence, Trainer};
//! use postagger_rules::{sentence_filters::HeuristicCascade, SentenceFilter};
//!
//! let mut trainer = Trainer::new();
//! trainer.add_example(&parse_tagged_line("The/DT dog/NN runs/VBZ").unwrap());
//! let predictor = Predictor::new(trainer.train());
//! let cascade = HeuristicCascade::default();
//!
//! let mut s = Sentence::from_raw("The dog runs fast");
//! predictor.predict(&mut s);
//! cascade.filter(&mut s);
//! assert_eq!("The/DT dog/NN runs/VBZ fast/NN", s.to_tagged_string().unwrap());
//! ```

pub mod sentence_filters;
pub mod tag_rules;

use postagger::Sentence;

/// Filter that manipulates a [`Sentence`].
pub trait SentenceFilter: Send + Sync {
    /// Filter a specified sentence using rules.
    ///
    /// # Arguments:
    ///
    /// * `sentence` - Input sentence.
    fn filter(&self, sentence: &mut Sentence);
}

/// Rule that proposes a tag for one word.
pub trait TagRule: Send + Sync {
    /// Returns the tag of `word`, or `None` if the rule does not apply.
    fn tag(&self, word: &str) -> Option<&str>;
}

#[cfg(test)]
mod tests {
    use super::*;

    use postagger::{parse_tagged_line, Predictor, Trainer};

    use crate::sentence_filters::HeuristicCascade;

    fn tag_lines(training: &[&str], input: &str) -> String {
        let mut trainer = Trainer::new();
        for line in training {
            trainer.add_example(&parse_tagged_line(line).unwrap());
        }
        let predictor = Predictor::new(trainer.train());
        let cascade = HeuristicCascade::default();
        input
            .lines()
            .map(|line| {
                let mut s = Sentence::from_raw(line);
                predictor.predict(&mut s);
                cascade.filter(&mut s);
                s.to_tagged_string().unwrap()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_known_word_keeps_trained_tag() {
        assert_eq!(
            "The/DT dog/NN runs/VBZ fast/NN",
            tag_lines(&["The/DT dog/NN runs/VBZ"], "The dog runs fast")
        );
    }

    #[test]
    fn test_unknown_words() {
        assert_eq!(
            "Running/VBG Studying/VBG Paris/NNS Bob/NNP 42/CD =/SYM",
            tag_lines(&["x/NN"], "Running Studying Paris Bob 42 ="),
        );
    }

    #[test]
    fn test_brackets_pass_through() {
        assert_eq!(
            "[ The/DT dog/NN ]\n\n[ runs/VBZ ]",
            tag_lines(&["[ The/DT dog/NN ] runs/VBZ"], "[ The dog ]\n\n[ runs ]")
        );
    }

    #[test]
    fn test_every_word_tagged() {
        let output = tag_lines(
            &["The/DT dog/NN runs/VBZ", "He/PRP walks/VBZ $/$ 5/CD"],
            "[ An effective 3rd-quarter plan ] quickly =\nThe 1990s were selling $ 5 dogs",
        );

        for token in output.split_whitespace() {
            if token == "[" || token == "]" {
                continue;
            }
            let (word, tag) = token.rsplit_once('/').unwrap();
            assert!(!word.is_empty(), "{token}");
            assert!(
                !tag.is_empty() && tag.chars().all(|c| c.is_ascii_uppercase() || c == '$'),
                "{token}"
            );
        }
    }

    #[test]
    fn test_deterministic() {
        let training = ["The/DT dog/NN runs/VBZ", "dog/VB runs/NNS"];
        let input = "The dog runs quickly after 3 cats";

        assert_eq!(tag_lines(&training, input), tag_lines(&training, input));
    }
}
