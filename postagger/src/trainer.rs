use crate::bigram::BigramModel;
use crate::corpus::TaggedToken;
use crate::dictionary::WordTagDictionary;
use crate::model::Model;
use crate::stats::TagStatistics;

/// Trainer.
///
/// # Examples
///
/// ```
/// use std::io::BufReader;
///
/// use postagger::{Predictor, Sentence, TaggedCorpusReader, Trainer};
///
/// let corpus = "The/DT dog/NN runs/VBZ\nA/DT dog/NN barks/VBZ\n";
///
/// let mut trainer = Trainer::new();
/// for tokens in TaggedCorpusReader::new(BufReader::new(corpus.as_bytes())) {
///     trainer.add_example(&tokens.unwrap());
/// }
/// let model = trainer.train();
///
/// let predictor = Predictor::new(model);
/// let mut s = Sentence::from_raw("A dog runs");
/// predictor.predict(&mut s);
/// assert_eq!("A/DT dog/NN runs/VBZ", s.to_tagged_string().unwrap());
/// ```
#[derive(Debug, Default)]
pub struct Trainer {
    stats: TagStatistics,
}

impl Trainer {
    /// Creates a new trainer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the tokens of one corpus line.
    pub fn add_example(&mut self, tokens: &[TaggedToken]) {
        self.stats.add_tokens(tokens);
    }

    /// Adds statistics collected elsewhere, as if their tokens came after the current ones.
    pub fn merge_statistics(&mut self, stats: TagStatistics) {
        self.stats.merge(stats);
    }

    /// Gets the statistics collected so far.
    pub fn statistics(&self) -> &TagStatistics {
        &self.stats
    }

    /// Gets the number of tokens added so far.
    pub fn n_tokens(&self) -> usize {
        self.stats.n_tokens()
    }

    /// Gets the number of distinct words added so far.
    pub fn n_words(&self) -> usize {
        self.stats.n_words()
    }

    /// Resolves the dictionary, builds the bigram model, and returns both as a [`Model`].
    pub fn train(self) -> Model {
        let dictionary = WordTagDictionary::from_statistics(&self.stats);
        let bigrams = BigramModel::from_statistics(&self.stats);
        Model::new(
            &dictionary,
            self.stats
                .tag_frequencies()
                .map(|(tag, freq)| (tag.to_string(), freq as u64)),
            &bigrams,
        )
    }
}
