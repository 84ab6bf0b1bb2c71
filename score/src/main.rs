use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Parser;
use postagger::{read_tags, Evaluation};

#[derive(Parser, Debug)]
#[command(about = "A program to evaluate the accuracy of tagged text against a key.")]
struct Args {
    /// The tagged file to evaluate
    tagged_file: PathBuf,

    /// The gold standard tagged file
    key_file: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    eprintln!("Loading {:?} ...", args.tagged_file);
    let predicted = read_tags(BufReader::new(File::open(args.tagged_file)?))?;
    eprintln!("Loading {:?} ...", args.key_file);
    let key = read_tags(BufReader::new(File::open(args.key_file)?))?;
    eprintln!("# of tags: {}", key.len());

    let evaluation = Evaluation::new(&predicted, &key)?;
    println!("Overall Accuracy: {:.2}%", evaluation.accuracy());
    println!();
    print!("{}", evaluation.confusion_matrix());

    Ok(())
}
