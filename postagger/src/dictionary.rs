use hashbrown::HashMap;

use crate::stats::TagStatistics;

/// Returns the most frequent tag in `tags`.
///
/// Ties are broken in favor of the tag whose first occurrence comes earliest.
fn most_frequent_tag(tags: &[String]) -> Option<&str> {
    // (tag, count) in first-occurrence order. Words rarely carry more than a few tags.
    let mut counts: Vec<(&str, usize)> = vec![];
    for tag in tags {
        match counts.iter_mut().find(|(t, _)| *t == tag.as_str()) {
            Some((_, count)) => *count += 1,
            None => counts.push((tag.as_str(), 1)),
        }
    }
    let mut best: Option<(&str, usize)> = None;
    for (tag, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((tag, count));
        }
    }
    best.map(|(tag, _)| tag)
}

/// Dictionary mapping each training word to its single most frequent tag.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordTagDictionary {
    map: HashMap<String, String>,
}

impl WordTagDictionary {
    /// Resolves the observed tags of every word to one tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use postagger::{parse_tagged_line, TagStatistics, WordTagDictionary};
    ///
    /// let mut stats = TagStatistics::new();
    /// stats.add_tokens(&parse_tagged_line("run/VB run/NN run/NN the/DT").unwrap());
    /// let dict = WordTagDictionary::from_statistics(&stats);
    /// assert_eq!(Some("NN"), dict.get("run"));
    /// assert_eq!(Some("DT"), dict.get("the"));
    /// assert_eq!(None, dict.get("dog"));
    /// ```
    pub fn from_statistics(stats: &TagStatistics) -> Self {
        let mut map = HashMap::with_capacity(stats.n_words());
        for (word, tags) in stats.iter_observations() {
            if let Some(tag) = most_frequent_tag(tags) {
                map.insert(word.to_string(), tag.to_string());
            }
        }
        Self { map }
    }

    /// Gets the tag of `word`.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.map.get(word).map(String::as_str)
    }

    /// Checks whether `word` was seen in training.
    pub fn contains(&self, word: &str) -> bool {
        self.map.contains_key(word)
    }

    /// Gets the number of words.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Checks whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates over `(word, tag)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(w, t)| (w.as_str(), t.as_str()))
    }
}

impl<S, T> FromIterator<(S, T)> for WordTagDictionary
where
    S: Into<String>,
    T: Into<String>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
    {
        Self {
            map: iter
                .into_iter()
                .map(|(w, t)| (w.into(), t.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::corpus::parse_tagged_line;

    fn tags(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_most_frequent_tag_empty() {
        assert_eq!(None, most_frequent_tag(&[]));
    }

    #[test]
    fn test_most_frequent_tag_single() {
        assert_eq!(Some("NN"), most_frequent_tag(&tags(&["NN"])));
    }

    #[test]
    fn test_most_frequent_tag_mode() {
        assert_eq!(
            Some("VB"),
            most_frequent_tag(&tags(&["NN", "VB", "VB", "JJ", "NN", "VB"]))
        );
    }

    #[test]
    fn test_most_frequent_tag_tie_first_occurrence() {
        assert_eq!(Some("VB"), most_frequent_tag(&tags(&["VB", "NN", "NN", "VB"])));
        assert_eq!(Some("NN"), most_frequent_tag(&tags(&["NN", "VB", "VB", "NN"])));
    }

    #[test]
    fn test_most_frequent_tag_overtaken() {
        assert_eq!(
            Some("NN"),
            most_frequent_tag(&tags(&["VB", "VB", "NN", "NN", "NN"]))
        );
    }

    #[test]
    fn test_from_statistics() {
        let mut stats = TagStatistics::new();
        for line in [
            "The/DT dog/NN runs/VBZ",
            "The/DT runs/NNS were/VBD counted/VBN",
            "He/PRP runs/NNS ./.",
        ] {
            stats.add_tokens(&parse_tagged_line(line).unwrap());
        }
        let dict = WordTagDictionary::from_statistics(&stats);

        assert_eq!(stats.n_words(), dict.len());
        assert_eq!(Some("DT"), dict.get("The"));
        assert_eq!(Some("NNS"), dict.get("runs"));
        assert_eq!(Some("."), dict.get("."));
        assert!(!dict.contains("the"));
    }

    #[test]
    fn test_from_iter() {
        let dict: WordTagDictionary = [("dog", "NN"), ("runs", "VBZ")].into_iter().collect();

        assert_eq!(2, dict.len());
        assert_eq!(Some("VBZ"), dict.get("runs"));
    }
}
