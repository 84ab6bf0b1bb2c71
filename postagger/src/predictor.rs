use crate::dictionary::WordTagDictionary;
use crate::model::Model;
use crate::sentence::Sentence;

/// Predictor.
///
/// Assigns the most frequent training tag to every known word. Unknown words keep no tag,
/// so that a rule filter can take care of them afterwards.
pub struct Predictor {
    dictionary: WordTagDictionary,
}

impl Predictor {
    /// Creates a new predictor.
    ///
    /// # Arguments
    ///
    /// * `model` - A model data.
    ///
    /// # Returns
    ///
    /// A new predictor.
    pub fn new(model: Model) -> Self {
        Self::from_dictionary(model.dictionary())
    }

    /// Creates a new predictor from a resolved dictionary.
    pub const fn from_dictionary(dictionary: WordTagDictionary) -> Self {
        Self { dictionary }
    }

    /// Gets the dictionary used for prediction.
    pub const fn dictionary(&self) -> &WordTagDictionary {
        &self.dictionary
    }

    /// Tags the known words of `sentence`.
    ///
    /// Words that already carry a tag are left unchanged.
    pub fn predict(&self, sentence: &mut Sentence) {
        for (surface, tag) in sentence.iter_untagged_mut() {
            if let Some(t) = self.dictionary.get(surface) {
                *tag = Some(t.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::corpus::parse_tagged_line;
    use crate::trainer::Trainer;

    fn predictor(lines: &[&str]) -> Predictor {
        let mut trainer = Trainer::new();
        for line in lines {
            trainer.add_example(&parse_tagged_line(line).unwrap());
        }
        Predictor::new(trainer.train())
    }

    #[test]
    fn test_predict_known_words() {
        let predictor = predictor(&["The/DT dog/NN runs/VBZ"]);
        assert_eq!(3, predictor.dictionary().len());
        assert_eq!(Some("VBZ"), predictor.dictionary().get("runs"));

        let mut s = Sentence::from_raw("The dog runs");
        predictor.predict(&mut s);

        assert_eq!("The/DT dog/NN runs/VBZ", s.to_tagged_string().unwrap());
    }

    #[test]
    fn test_predict_leaves_unknown_words() {
        let predictor = predictor(&["The/DT dog/NN runs/VBZ"]);
        let mut s = Sentence::from_raw("[ The dog runs fast ]");
        predictor.predict(&mut s);

        assert_eq!(1, s.n_untagged());
        assert_eq!(None, s.tokens()[4].tag());
        assert!(s.to_tagged_string().is_err());
    }

    #[test]
    fn test_predict_case_sensitive() {
        let predictor = predictor(&["The/DT dog/NN"]);
        let mut s = Sentence::from_raw("the");
        predictor.predict(&mut s);

        assert_eq!(1, s.n_untagged());
    }

    #[test]
    fn test_predict_escaped_slash() {
        let predictor = predictor(&["1\\/2/CD cup/NN"]);
        let mut s = Sentence::from_raw("1\\/2 cup");
        predictor.predict(&mut s);

        assert_eq!("1\\/2/CD cup/NN", s.to_tagged_string().unwrap());
    }

    #[test]
    fn test_predict_idempotent() {
        let predictor = predictor(&["The/DT dog/NN runs/VBZ", "dog/VB dog/VB"]);
        let mut s1 = Sentence::from_raw("The dog runs");
        let mut s2 = s1.clone();
        predictor.predict(&mut s1);
        predictor.predict(&mut s2);
        let first = s1.clone();
        predictor.predict(&mut s1);

        assert_eq!(first, s1);
        assert_eq!(s1, s2);
        assert_eq!("The/DT dog/VB runs/VBZ", s1.to_tagged_string().unwrap());
    }
}
