use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use postagger::{Model, WordTagRecord};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(about = "A program to manipulate trained models.")]
struct Args {
    /// Input path of the model file
    #[arg(long)]
    model_in: PathBuf,

    /// Output path of the model file
    #[arg(long)]
    model_out: Option<PathBuf>,

    /// Output the word/tag dictionary contained in the model.
    #[arg(long)]
    dump_dict: Option<PathBuf>,

    /// Output the tag frequencies contained in the model.
    #[arg(long)]
    dump_freqs: Option<PathBuf>,

    /// Output the tag bigram counts and probabilities contained in the model.
    #[arg(long)]
    dump_bigrams: Option<PathBuf>,

    /// Replace the dictionary if the argument is specified.
    #[arg(long)]
    replace_dict: Option<PathBuf>,

    /// The number of workers for zstd (0 means multithreaded will be disabled)
    #[arg(long, default_value = "0")]
    zstd_workers: u32,
}

#[derive(Deserialize, Serialize)]
struct WordTagRecordFlatten {
    word: String,
    tag: String,
}

#[derive(Serialize)]
struct TagFrequencyRecordFlatten<'a> {
    tag: &'a str,
    frequency: u64,
}

#[derive(Serialize)]
struct BigramRecordFlatten<'a> {
    left: &'a str,
    right: &'a str,
    count: usize,
    probability: Option<f64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    eprintln!("Loading model file...");
    let mut f = zstd::Decoder::new(File::open(args.model_in)?)?;
    let mut model = Model::read(&mut f)?;

    if let Some(path) = args.dump_dict {
        eprintln!("Saving dictionary file...");
        let mut wtr = csv::Writer::from_writer(File::create(path)?);
        for data in model.words() {
            wtr.serialize(WordTagRecordFlatten {
                word: data.get_word().to_string(),
                tag: data.get_tag().to_string(),
            })?;
        }
        wtr.flush()?;
    }

    if let Some(path) = args.dump_freqs {
        eprintln!("Saving tag frequency file...");
        let mut wtr = csv::Writer::from_writer(File::create(path)?);
        for data in model.tag_frequencies() {
            wtr.serialize(TagFrequencyRecordFlatten {
                tag: data.get_tag(),
                frequency: data.get_frequency(),
            })?;
        }
        wtr.flush()?;
    }

    if let Some(path) = args.dump_bigrams {
        eprintln!("Saving tag bigram file...");
        let bigram_model = model.bigram_model();
        let mut wtr = csv::Writer::from_writer(File::create(path)?);
        for (left, right, count, probability) in bigram_model.to_sorted_records() {
            wtr.serialize(BigramRecordFlatten {
                left,
                right,
                count,
                probability,
            })?;
        }
        wtr.flush()?;
    }

    if let Some(path) = args.replace_dict {
        eprintln!("Loading dictionary file...");
        let mut rdr = csv::Reader::from_reader(File::open(path)?);
        let mut dict = vec![];
        for result in rdr.deserialize() {
            let record: WordTagRecordFlatten = result?;
            dict.push(WordTagRecord::new(record.word, record.tag));
        }
        eprintln!("# of words: {}", dict.len());
        model.replace_dictionary(dict);
    }

    if let Some(path) = args.model_out {
        eprintln!("Saving model file...");
        let mut f = zstd::Encoder::new(File::create(path)?, 19)?;
        f.multithread(args.zstd_workers)?;
        model.write(&mut f)?;
        f.finish()?;
    }

    Ok(())
}
