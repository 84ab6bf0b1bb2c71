#![cfg_attr(docsrs, feature(doc_cfg))]

//! # postagger
//!
//! A part-of-speech tagger that learns the most frequent tag of every word from a
//! `word/tag` corpus.
//!
//! ## Examples
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::{prelude::*, stdin, BufReader};
//!
//! use postagger::{Predictor, Sentence, TaggedCorpusReader, Trainer};
//!
//! let mut trainer = Trainer::new();
//! let f = BufReader::new(File::open("pos-train.txt").unwrap());
//! for tokens in TaggedCorpusReader::new(f) {
//!     trainer.add_example(&tokens.unwrap());
//! }
//! let predictor = Predictor::new(trainer.train());
//!
//! for line in stdin().lock().lines() {
//!     let mut s = Sentence::from_raw(line.unwrap());
//!     predictor.predict(&mut s);
//!     // Unknown words are left untagged; see the `postagger_rules` crate.
//!     println!("{:?}", s.tokens());
//! }
//! ```

mod bigram;
mod corpus;
mod dictionary;
mod evaluation;
mod model;
mod predictor;
mod sentence;
mod stats;
mod trainer;

pub mod errors;

pub use bigram::BigramModel;
pub use corpus::{parse_tagged_line, TaggedCorpusReader, TaggedToken};
pub use dictionary::WordTagDictionary;
pub use evaluation::{read_tags, ConfusionMatrix, Evaluation};
pub use model::{BigramRecord, Model, TagFrequencyRecord, WordTagRecord};
pub use predictor::Predictor;
pub use sentence::{Sentence, Token};
pub use stats::TagStatistics;
pub use trainer::Trainer;
