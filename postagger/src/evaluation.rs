use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::io::BufRead;

use crate::corpus::TaggedCorpusReader;
use crate::errors::{LengthMismatchError, PosTaggerError, Result};

/// Reads every tag of a `word/tag` file in order, dropping the words.
///
/// The same parsing rules as for training corpora apply.
pub fn read_tags<R>(rdr: R) -> Result<Vec<String>>
where
    R: BufRead,
{
    let mut tags = vec![];
    for tokens in TaggedCorpusReader::new(rdr) {
        tags.extend(tokens?.into_iter().map(|t| t.tag));
    }
    Ok(tags)
}

/// Cross-tabulation of key tags (rows) against predicted tags (columns).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfusionMatrix {
    // key -> predicted -> count
    cells: BTreeMap<String, BTreeMap<String, usize>>,
    predicted_tags: BTreeSet<String>,
}

impl ConfusionMatrix {
    fn add(&mut self, key: &str, predicted: &str) {
        *self
            .cells
            .entry(key.to_string())
            .or_default()
            .entry(predicted.to_string())
            .or_insert(0) += 1;
        if !self.predicted_tags.contains(predicted) {
            self.predicted_tags.insert(predicted.to_string());
        }
    }

    /// Gets the number of positions tagged `predicted` whose key is `key`.
    pub fn get(&self, key: &str, predicted: &str) -> usize {
        self.cells
            .get(key)
            .and_then(|row| row.get(predicted))
            .copied()
            .unwrap_or(0)
    }

    /// Iterates over the row labels in sorted order.
    pub fn key_tags(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    /// Iterates over the column labels in sorted order.
    pub fn predicted_tags(&self) -> impl Iterator<Item = &str> {
        self.predicted_tags.iter().map(String::as_str)
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const CORNER: &str = "Actual\\Predicted";
        let label_width = self
            .key_tags()
            .map(str::len)
            .chain([CORNER.len()])
            .max()
            .unwrap_or(0);
        let widths: Vec<usize> = self
            .predicted_tags()
            .map(|pred| {
                self.key_tags()
                    .map(|key| self.get(key, pred).to_string().len())
                    .chain([pred.len()])
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{CORNER:<label_width$}")?;
        for (pred, width) in self.predicted_tags().zip(widths.iter().copied()) {
            write!(f, "  {pred:>width$}")?;
        }
        writeln!(f)?;
        for key in self.key_tags() {
            write!(f, "{key:<label_width$}")?;
            for (pred, width) in self.predicted_tags().zip(widths.iter().copied()) {
                write!(f, "  {:>width$}", self.get(key, pred))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Result of comparing a predicted tag stream with a key tag stream position by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    n_correct: usize,
    n_total: usize,
    matrix: ConfusionMatrix,
}

impl Evaluation {
    /// Compares two aligned tag streams.
    ///
    /// # Errors
    ///
    /// This function will return an error variant when:
    ///
    /// * the two streams have different lengths.
    /// * the streams are empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use postagger::Evaluation;
    ///
    /// let e = Evaluation::new(&["NN", "VB", "NN"], &["NN", "NN", "NN"]).unwrap();
    /// assert_eq!(66.67, e.accuracy());
    /// assert_eq!(1, e.confusion_matrix().get("NN", "VB"));
    /// ```
    pub fn new<P, K>(predicted: &[P], key: &[K]) -> Result<Self>
    where
        P: AsRef<str>,
        K: AsRef<str>,
    {
        if predicted.len() != key.len() {
            return Err(PosTaggerError::LengthMismatch(LengthMismatchError {
                predicted: predicted.len(),
                key: key.len(),
            }));
        }
        if key.is_empty() {
            return Err(PosTaggerError::invalid_argument(
                "key",
                "no tags to compare",
            ));
        }
        let mut n_correct = 0;
        let mut matrix = ConfusionMatrix::default();
        for (p, k) in predicted.iter().zip(key) {
            let (p, k) = (p.as_ref(), k.as_ref());
            if p == k {
                n_correct += 1;
            }
            matrix.add(k, p);
        }
        Ok(Self {
            n_correct,
            n_total: key.len(),
            matrix,
        })
    }

    /// Gets the number of positions whose tags match.
    pub const fn n_correct(&self) -> usize {
        self.n_correct
    }

    /// Gets the number of compared positions.
    pub const fn n_total(&self) -> usize {
        self.n_total
    }

    /// Gets `100 * matches / total` rounded to 2 decimals.
    pub fn accuracy(&self) -> f64 {
        let acc = self.n_correct as f64 / self.n_total as f64 * 100.;
        (acc * 100.).round() / 100.
    }

    /// Gets the confusion matrix.
    pub const fn confusion_matrix(&self) -> &ConfusionMatrix {
        &self.matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluation() {
        let e = Evaluation::new(&["NN", "VB", "NN"], &["NN", "NN", "NN"]).unwrap();

        assert_eq!(2, e.n_correct());
        assert_eq!(3, e.n_total());
        assert_eq!(66.67, e.accuracy());
        let m = e.confusion_matrix();
        assert_eq!(2, m.get("NN", "NN"));
        assert_eq!(1, m.get("NN", "VB"));
        assert_eq!(0, m.get("VB", "NN"));
        assert_eq!(vec!["NN"], m.key_tags().collect::<Vec<_>>());
        assert_eq!(vec!["NN", "VB"], m.predicted_tags().collect::<Vec<_>>());
    }

    #[test]
    fn test_evaluation_perfect() {
        let e = Evaluation::new(&["DT", "NN"], &["DT", "NN"]).unwrap();

        assert_eq!(100., e.accuracy());
    }

    #[test]
    fn test_evaluation_length_mismatch() {
        let e = Evaluation::new(&["NN", "VB"], &["NN", "NN", "NN"]);

        match e {
            Err(PosTaggerError::LengthMismatch(e)) => {
                assert_eq!(2, e.predicted());
                assert_eq!(3, e.key());
            }
            _ => panic!("length mismatch must be reported"),
        }
    }

    #[test]
    fn test_evaluation_empty() {
        let e = Evaluation::new::<&str, &str>(&[], &[]);

        assert!(e.is_err());
    }

    #[test]
    fn test_read_tags() {
        let tagged = "[ The/DT dog/NN ]\n1\\/2/CD that/IN|DT\n\n";
        let tags = read_tags(tagged.as_bytes()).unwrap();

        assert_eq!(vec!["DT", "NN", "CD", "IN"], tags);
    }

    #[test]
    fn test_read_tags_malformed() {
        assert!(read_tags("The/DT dog\n".as_bytes()).is_err());
    }

    #[test]
    fn test_confusion_matrix_display() {
        let e = Evaluation::new(&["NN", "VB", "NN", "DT"], &["NN", "NN", "NN", "DT"]).unwrap();

        assert_eq!(
            "Actual\\Predicted  DT  NN  VB\n\
             DT                 1   0   0\n\
             NN                 0   2   1\n",
            e.confusion_matrix().to_string()
        );
    }
}
