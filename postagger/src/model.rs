use std::io::{Read, Write};

use bincode::{Decode, Encode};
use hashbrown::HashMap;

use crate::bigram::BigramModel;
use crate::dictionary::WordTagDictionary;
use crate::errors::Result;

/// Record of the dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Decode, Encode)]
pub struct WordTagRecord {
    pub(crate) word: String,
    pub(crate) tag: String,
}

impl WordTagRecord {
    /// Creates a new record.
    pub fn new<S, T>(word: S, tag: T) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }

    pub fn get_word(&self) -> &str {
        &self.word
    }

    pub fn get_tag(&self) -> &str {
        &self.tag
    }
}

/// Number of occurrences of a tag in the training corpus.
#[derive(Debug, Clone, PartialEq, Eq, Decode, Encode)]
pub struct TagFrequencyRecord {
    pub(crate) tag: String,
    pub(crate) frequency: u64,
}

impl TagFrequencyRecord {
    pub fn get_tag(&self) -> &str {
        &self.tag
    }

    pub const fn get_frequency(&self) -> u64 {
        self.frequency
    }
}

/// Number of times `left` is immediately followed by `right`.
#[derive(Debug, Clone, PartialEq, Eq, Decode, Encode)]
pub struct BigramRecord {
    pub(crate) left: String,
    pub(crate) right: String,
    pub(crate) count: u64,
}

impl BigramRecord {
    pub fn get_left(&self) -> &str {
        &self.left
    }

    pub fn get_right(&self) -> &str {
        &self.right
    }

    pub const fn get_count(&self) -> u64 {
        self.count
    }
}

/// Model data.
///
/// Every record vector is sorted, so the same corpus always produces the same bytes.
#[derive(Debug, Clone, PartialEq, Eq, Decode, Encode)]
pub struct Model {
    pub(crate) words: Vec<WordTagRecord>,
    pub(crate) tag_freqs: Vec<TagFrequencyRecord>,
    pub(crate) bigrams: Vec<BigramRecord>,
}

impl Model {
    pub(crate) fn new(
        dictionary: &WordTagDictionary,
        tag_freqs: impl Iterator<Item = (String, u64)>,
        bigrams: &BigramModel,
    ) -> Self {
        let mut words: Vec<_> = dictionary
            .iter()
            .map(|(word, tag)| WordTagRecord::new(word, tag))
            .collect();
        words.sort_unstable_by(|a, b| a.word.cmp(&b.word));
        let mut tag_freqs: Vec<_> = tag_freqs
            .map(|(tag, frequency)| TagFrequencyRecord { tag, frequency })
            .collect();
        tag_freqs.sort_unstable_by(|a, b| a.tag.cmp(&b.tag));
        let bigrams = bigrams
            .to_sorted_records()
            .into_iter()
            .map(|(left, right, count, _)| BigramRecord {
                left: left.to_string(),
                right: right.to_string(),
                count: count as u64,
            })
            .collect();
        Self {
            words,
            tag_freqs,
            bigrams,
        }
    }

    /// Exports the model data.
    ///
    /// # Arguments
    ///
    /// * `wtr` - Byte-oriented sink object.
    ///
    /// # Errors
    ///
    /// When `wtr` generates an error, it will be returned as is.
    pub fn write<W>(&self, wtr: &mut W) -> Result<()>
    where
        W: Write,
    {
        bincode::encode_into_std_write(self, wtr, bincode::config::standard())?;
        Ok(())
    }

    /// Creates a model from a reader.
    ///
    /// # Arguments
    ///
    /// * `rdr` - A data source.
    ///
    /// # Returns
    ///
    /// A model data read from `rdr`.
    ///
    /// # Errors
    ///
    /// When `rdr` generates an error, it will be returned as is.
    pub fn read<R>(rdr: &mut R) -> Result<Self>
    where
        R: Read,
    {
        Ok(bincode::decode_from_std_read(
            rdr,
            bincode::config::standard(),
        )?)
    }

    /// Gets the dictionary records sorted by word.
    pub fn words(&self) -> &[WordTagRecord] {
        &self.words
    }

    /// Gets the tag frequency records sorted by tag.
    pub fn tag_frequencies(&self) -> &[TagFrequencyRecord] {
        &self.tag_freqs
    }

    /// Gets the bigram records sorted by pair.
    pub fn bigrams(&self) -> &[BigramRecord] {
        &self.bigrams
    }

    /// Replaces the dictionary.
    ///
    /// When a word appears more than once, the last record wins.
    pub fn replace_dictionary(&mut self, mut words: Vec<WordTagRecord>) {
        words.reverse();
        words.sort_by(|a, b| a.word.cmp(&b.word));
        words.dedup_by(|a, b| a.word == b.word);
        self.words = words;
    }

    /// Builds the word/tag dictionary.
    pub fn dictionary(&self) -> WordTagDictionary {
        self.words
            .iter()
            .map(|r| (r.word.as_str(), r.tag.as_str()))
            .collect()
    }

    /// Rebuilds the bigram model, recomputing the probabilities from the stored counts.
    pub fn bigram_model(&self) -> BigramModel {
        let freqs: HashMap<&str, usize> = self
            .tag_freqs
            .iter()
            .map(|r| (r.tag.as_str(), r.frequency as usize))
            .collect();
        let mut counts: HashMap<String, HashMap<String, usize>> = HashMap::new();
        for r in &self.bigrams {
            counts
                .entry_ref(r.left.as_str())
                .or_default()
                .insert(r.right.clone(), r.count as usize);
        }
        BigramModel::from_counts(counts, |tag| freqs.get(tag).copied())
    }
}
