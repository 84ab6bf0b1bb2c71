use hashbrown::HashMap;

use crate::corpus::TaggedToken;

/// Tag statistics accumulated from a tagged corpus.
///
/// Three views are kept in step with each other: the number of occurrences of each tag, the
/// tags observed for each word in corpus order, and the flat sequence of all tags used for
/// bigram extraction.
#[derive(Debug, Default, Clone)]
pub struct TagStatistics {
    tag_freqs: HashMap<String, usize>,
    observations: HashMap<String, Vec<String>>,
    // Words in first-seen order, so that resolution is reproducible.
    words: Vec<String>,
    tag_sequence: Vec<String>,
}

impl TagStatistics {
    /// Creates an empty [`TagStatistics`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one token.
    pub fn add_token(&mut self, token: &TaggedToken) {
        *self.tag_freqs.entry_ref(token.tag()).or_insert(0) += 1;
        match self.observations.get_mut(token.surface()) {
            Some(tags) => tags.push(token.tag.clone()),
            None => {
                self.words.push(token.surface.clone());
                self.observations
                    .insert(token.surface.clone(), vec![token.tag.clone()]);
            }
        }
        self.tag_sequence.push(token.tag.clone());
    }

    /// Records tokens in order.
    pub fn add_tokens<'a, I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = &'a TaggedToken>,
    {
        for token in tokens {
            self.add_token(token);
        }
    }

    /// Appends `other` as if its tokens had been added after the tokens of `self`.
    ///
    /// Merging the statistics of consecutive corpus chunks in chunk order gives the same
    /// result as adding every token to a single object.
    pub fn merge(&mut self, other: Self) {
        let Self {
            tag_freqs,
            mut observations,
            words,
            tag_sequence,
        } = other;
        for (tag, freq) in tag_freqs {
            *self.tag_freqs.entry(tag).or_insert(0) += freq;
        }
        for word in words {
            let Some(tags) = observations.remove(&word) else {
                continue;
            };
            match self.observations.get_mut(&word) {
                Some(self_tags) => self_tags.extend(tags),
                None => {
                    self.observations.insert(word.clone(), tags);
                    self.words.push(word);
                }
            }
        }
        self.tag_sequence.extend(tag_sequence);
    }

    /// Gets the number of occurrences of `tag`, or `None` if it was never seen.
    pub fn tag_frequency(&self, tag: &str) -> Option<usize> {
        self.tag_freqs.get(tag).copied()
    }

    /// Iterates over `(tag, frequency)` pairs in arbitrary order.
    pub fn tag_frequencies(&self) -> impl Iterator<Item = (&str, usize)> {
        self.tag_freqs.iter().map(|(tag, &freq)| (tag.as_str(), freq))
    }

    /// Gets the tags observed for `word` in corpus order.
    pub fn observations(&self, word: &str) -> Option<&[String]> {
        self.observations.get(word).map(Vec::as_slice)
    }

    /// Iterates over `(word, observed tags)` pairs in first-seen order of the words.
    pub fn iter_observations(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.words
            .iter()
            .map(|word| (word.as_str(), self.observations[word].as_slice()))
    }

    /// Gets every tag in corpus order.
    pub fn tag_sequence(&self) -> &[String] {
        &self.tag_sequence
    }

    /// Gets the number of distinct words.
    pub fn n_words(&self) -> usize {
        self.words.len()
    }

    /// Gets the number of tokens added so far.
    pub fn n_tokens(&self) -> usize {
        self.tag_sequence.len()
    }
}
