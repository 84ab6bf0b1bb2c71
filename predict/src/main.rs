use std::fs::File;
use std::io::{prelude::*, stdin, stdout, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use postagger::{Model, Predictor, Sentence, Token};
use postagger_rules::{sentence_filters::HeuristicCascade, SentenceFilter};

#[derive(Parser, Debug)]
#[command(about = "A program to perform part-of-speech tagging.")]
struct Args {
    /// The model file to use when tagging text
    #[arg(long)]
    model: PathBuf,

    /// Leave words missing from the dictionary untagged instead of guessing from their spelling.
    /// Such words are printed without a tag.
    #[arg(long)]
    no_heuristics: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    eprintln!("Loading model file...");
    let mut f = zstd::Decoder::new(File::open(args.model)?)?;
    let model = Model::read(&mut f)?;
    let predictor = Predictor::new(model);
    eprintln!("# of words: {}", predictor.dictionary().len());
    let cascade = HeuristicCascade::default();

    eprintln!("Start tagging");
    let mut n_words = 0;
    let mut n_unknown = 0;
    let start = Instant::now();
    let mut out = BufWriter::new(stdout().lock());
    for line in stdin().lock().lines() {
        let mut s = Sentence::from_raw(line?);
        n_words += s
            .tokens()
            .iter()
            .filter(|t| matches!(t, Token::Word { .. }))
            .count();
        predictor.predict(&mut s);
        n_unknown += s.n_untagged();
        if args.no_heuristics {
            let toks: Vec<_> = s
                .tokens()
                .iter()
                .map(|t| match t.tag() {
                    Some(tag) => format!("{}/{tag}", t.surface()),
                    None => t.surface().to_string(),
                })
                .collect();
            writeln!(out, "{}", toks.join(" "))?;
        } else {
            cascade.filter(&mut s);
            writeln!(out, "{}", s.to_tagged_string()?)?;
        }
    }
    out.flush()?;
    let duration = start.elapsed();
    eprintln!("Unknown words: {n_unknown}");
    eprintln!("Elapsed: {} [sec]", duration.as_secs_f64());
    eprintln!(
        "Speed: {} [words/sec]",
        n_words as f64 / duration.as_secs_f64()
    );

    Ok(())
}
