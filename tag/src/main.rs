use std::fs::File;
use std::io::{prelude::*, stderr, stdout, BufReader, BufWriter};
use std::path::PathBuf;

use clap::Parser;
use postagger::{Predictor, Sentence, TaggedCorpusReader, Trainer};
use postagger_rules::{sentence_filters::HeuristicCascade, SentenceFilter};

#[derive(Parser, Debug)]
#[command(about = "A program to train a tagger and tag a file with it.")]
struct Args {
    /// A tagged training corpus (one sentence of word/tag units per line)
    training_file: PathBuf,

    /// An untagged file (one sentence of whitespace-separated words per line)
    file_to_tag: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    eprintln!("Loading {:?} ...", args.training_file);
    let mut trainer = Trainer::new();
    let f = BufReader::new(File::open(args.training_file)?);
    for (i, tokens) in TaggedCorpusReader::new(f).enumerate() {
        if i % 10000 == 0 {
            eprint!("# of sentences: {i}\r");
            stderr().flush()?;
        }
        trainer.add_example(&tokens?);
    }
    eprintln!("# of tokens: {}", trainer.n_tokens());
    eprintln!("# of words: {}", trainer.n_words());

    let model = trainer.train();
    eprintln!("# of tags: {}", model.tag_frequencies().len());
    eprintln!("# of tag bigrams: {}", model.bigrams().len());
    let predictor = Predictor::new(model);
    let cascade = HeuristicCascade::default();

    eprintln!("Start tagging");
    let f = BufReader::new(File::open(args.file_to_tag)?);
    let mut out = BufWriter::new(stdout().lock());
    let mut buf = String::new();
    for line in f.lines() {
        let mut s = Sentence::from_raw(line?);
        predictor.predict(&mut s);
        cascade.filter(&mut s);
        buf.clear();
        s.write_tagged_text(&mut buf)?;
        writeln!(out, "{buf}")?;
    }
    out.flush()?;

    Ok(())
}
