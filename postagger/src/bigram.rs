use std::collections::BTreeMap;

use hashbrown::HashMap;

use crate::stats::TagStatistics;

/// Rounds `x` to 3 decimal places.
#[inline(always)]
fn round3(x: f64) -> f64 {
    (x * 1000.).round() / 1000.
}

/// Tag bigram counts and conditional probabilities `P(tag2 | tag1)`.
///
/// The model is built together with the dictionary for diagnostics; the predictor does not
/// consult it.
#[derive(Debug, Default, Clone)]
pub struct BigramModel {
    // tag1 -> tag2 -> count
    counts: HashMap<String, HashMap<String, usize>>,
    // tag1 -> tag2 -> probability
    probs: HashMap<String, HashMap<String, f64>>,
}

impl BigramModel {
    /// Builds the model from the tag sequence of `stats`.
    ///
    /// Tags of consecutive lines are treated as contiguous.
    ///
    /// # Examples
    ///
    /// ```
    /// use postagger::{parse_tagged_line, BigramModel, TagStatistics};
    ///
    /// let mut stats = TagStatistics::new();
    /// stats.add_tokens(&parse_tagged_line("The/DT dog/NN the/DT cat/NN a/DT").unwrap());
    /// let bigrams = BigramModel::from_statistics(&stats);
    /// assert_eq!(Some(2), bigrams.count("DT", "NN"));
    /// assert_eq!(Some(0.667), bigrams.probability("DT", "NN"));
    /// assert_eq!(Some(1.), bigrams.probability("NN", "DT"));
    /// ```
    pub fn from_statistics(stats: &TagStatistics) -> Self {
        let mut counts: HashMap<String, HashMap<String, usize>> = HashMap::new();
        for pair in stats.tag_sequence().windows(2) {
            *counts
                .entry_ref(pair[0].as_str())
                .or_default()
                .entry_ref(pair[1].as_str())
                .or_insert(0) += 1;
        }
        Self::from_counts(counts, |tag| stats.tag_frequency(tag))
    }

    /// Builds the model from raw counts and a tag frequency lookup.
    ///
    /// A pair gets no probability when the frequency of its first tag is unknown.
    pub(crate) fn from_counts<F>(counts: HashMap<String, HashMap<String, usize>>, freq: F) -> Self
    where
        F: Fn(&str) -> Option<usize>,
    {
        let mut probs: HashMap<String, HashMap<String, f64>> = HashMap::new();
        for (tag1, successors) in &counts {
            let Some(tag1_freq) = freq(tag1.as_str()).filter(|&f| f != 0) else {
                continue;
            };
            let row = probs.entry_ref(tag1.as_str()).or_default();
            for (tag2, &count) in successors {
                row.insert(tag2.clone(), round3(count as f64 / tag1_freq as f64));
            }
        }
        Self { counts, probs }
    }

    /// Gets the number of times `tag1` is immediately followed by `tag2`.
    pub fn count(&self, tag1: &str, tag2: &str) -> Option<usize> {
        self.counts.get(tag1)?.get(tag2).copied()
    }

    /// Gets `P(tag2 | tag1)` rounded to 3 decimals.
    pub fn probability(&self, tag1: &str, tag2: &str) -> Option<f64> {
        self.probs.get(tag1)?.get(tag2).copied()
    }

    /// Gets the number of distinct pairs.
    pub fn n_bigrams(&self) -> usize {
        self.counts.values().map(HashMap::len).sum()
    }

    /// Iterates over `(tag2, count)` pairs following `tag1` in arbitrary order.
    pub fn successors<'a>(&'a self, tag1: &str) -> impl Iterator<Item = (&'a str, usize)> + 'a {
        self.counts
            .get(tag1)
            .into_iter()
            .flat_map(|row| row.iter().map(|(tag2, &count)| (tag2.as_str(), count)))
    }

    /// Returns `(tag1, tag2, count, probability)` records sorted by the pair.
    pub fn to_sorted_records(&self) -> Vec<(&str, &str, usize, Option<f64>)> {
        let mut sorted = BTreeMap::new();
        for (tag1, row) in &self.counts {
            for (tag2, &count) in row {
                sorted.insert(
                    (tag1.as_str(), tag2.as_str()),
                    (count, self.probability(tag1, tag2)),
                );
            }
        }
        sorted
            .into_iter()
            .map(|((tag1, tag2), (count, prob))| (tag1, tag2, count, prob))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::corpus::parse_tagged_line;

    fn stats_from_lines(lines: &[&str]) -> TagStatistics {
        let mut stats = TagStatistics::new();
        for line in lines {
            stats.add_tokens(&parse_tagged_line(line).unwrap());
        }
        stats
    }

    #[test]
    fn test_round3() {
        assert_eq!(0.333, round3(1. / 3.));
        assert_eq!(0.667, round3(2. / 3.));
        assert_eq!(1., round3(1.));
    }

    #[test]
    fn test_empty() {
        let bigrams = BigramModel::from_statistics(&TagStatistics::new());

        assert_eq!(0, bigrams.n_bigrams());
        assert_eq!(None, bigrams.count("DT", "NN"));
    }

    #[test]
    fn test_single_tag() {
        let bigrams = BigramModel::from_statistics(&stats_from_lines(&["dog/NN"]));

        assert_eq!(0, bigrams.n_bigrams());
    }

    #[test]
    fn test_no_sentence_boundary_reset() {
        let bigrams = BigramModel::from_statistics(&stats_from_lines(&[
            "The/DT dog/NN",
            "runs/VBZ",
        ]));

        assert_eq!(Some(1), bigrams.count("NN", "VBZ"));
        assert_eq!(Some(1.), bigrams.probability("NN", "VBZ"));
        assert_eq!(2, bigrams.n_bigrams());
    }

    #[test]
    fn test_counts_and_probabilities() {
        let stats = stats_from_lines(&[
            "The/DT dog/NN runs/VBZ ./.",
            "A/DT cat/NN sleeps/VBZ ./.",
            "The/DT old/JJ dog/NN barks/VBZ",
        ]);
        let bigrams = BigramModel::from_statistics(&stats);

        assert_eq!(Some(2), bigrams.count("DT", "NN"));
        assert_eq!(Some(1), bigrams.count("DT", "JJ"));
        assert_eq!(Some(0.667), bigrams.probability("DT", "NN"));
        assert_eq!(Some(0.333), bigrams.probability("DT", "JJ"));
        assert_eq!(Some(1.), bigrams.probability(".", "DT"));
        assert_eq!(Some(0.667), bigrams.probability("VBZ", "."));
        assert_eq!(None, bigrams.probability("NN", "DT"));
    }

    #[test]
    fn test_successor_counts_sum() {
        let stats = stats_from_lines(&[
            "The/DT dog/NN runs/VBZ ./.",
            "A/DT cat/NN sleeps/VBZ ./.",
            "The/DT old/JJ dog/NN barks/VBZ",
        ]);
        let bigrams = BigramModel::from_statistics(&stats);

        let last = stats.tag_sequence().last().unwrap();
        for (tag, freq) in stats.tag_frequencies() {
            let followed: usize = bigrams.successors(tag).map(|(_, c)| c).sum();
            let expected = if tag == last.as_str() { freq - 1 } else { freq };
            assert_eq!(expected, followed, "tag {tag}");
            for (tag2, _) in bigrams.successors(tag) {
                let p = bigrams.probability(tag, tag2).unwrap();
                assert!((0. ..=1.).contains(&p));
            }
        }
    }

    #[test]
    fn test_unknown_first_tag_frequency() {
        let mut counts: HashMap<String, HashMap<String, usize>> = HashMap::new();
        counts
            .entry("DT".to_string())
            .or_default()
            .insert("NN".to_string(), 3);
        counts
            .entry("XX".to_string())
            .or_default()
            .insert("NN".to_string(), 1);
        let bigrams = BigramModel::from_counts(counts, |tag| (tag == "DT").then_some(4));

        assert_eq!(Some(0.75), bigrams.probability("DT", "NN"));
        assert_eq!(Some(1), bigrams.count("XX", "NN"));
        assert_eq!(None, bigrams.probability("XX", "NN"));
    }

    #[test]
    fn test_to_sorted_records() {
        let bigrams =
            BigramModel::from_statistics(&stats_from_lines(&["The/DT dog/NN the/DT cat/NN"]));

        assert_eq!(
            vec![
                ("DT", "NN", 2, Some(1.)),
                ("NN", "DT", 1, Some(0.5)),
            ],
            bigrams.to_sorted_records()
        );
    }
}
