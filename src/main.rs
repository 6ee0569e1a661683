use std::path::PathBuf;

use clap::Parser;
use docx_quiz::{dump_json, Config, ParserConfig, Quiz, DEFAULT_PICKER_DIR};
use log::info;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Word document to load questions from (repeat for several units)
    #[arg(short, long = "file", value_name = "PATH")]
    files: Vec<PathBuf>,

    /// How many questions to take from the file at the same position
    #[arg(short = 'n', long = "count", value_name = "N", value_parser = clap::value_parser!(u16).range(1..=100))]
    counts: Vec<u16>,

    /// Directory listed by the file picker when no --file is given
    #[arg(short, long, default_value = DEFAULT_PICKER_DIR)]
    dir: PathBuf,

    /// Only lines like "12. Question" start a question (not ". Question")
    #[arg(long)]
    require_number: bool,

    /// Seed for shuffling the questions
    #[arg(long)]
    seed: Option<u64>,

    /// Print the parsed questions as JSON instead of starting the quiz
    #[arg(long, requires = "files")]
    dump: bool,

    /// With --dump, order questions by their number
    #[arg(long, requires = "dump")]
    sort_by_number: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            files: args.files,
            counts: args.counts.into_iter().map(usize::from).collect(),
            dir: args.dir,
            parser: ParserConfig {
                require_number: args.require_number,
            },
            seed: args.seed,
            sort_by_number: args.sort_by_number,
        }
    }
}

fn main() {
    pretty_env_logger::init();

    let args = Args::parse();
    let dump = args.dump;
    let config = Config::from(args);

    if dump {
        match dump_json(&config) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let quiz = match Quiz::from_config(&config) {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match quiz.run() {
        Ok(Some(summary)) => {
            info!("session finished: {:?}", summary);
            println!("Total: {}", summary.total);
            println!("Good: {}", summary.good);
            println!("Bad: {}", summary.bad);
        }
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error running quiz: {}", e);
            std::process::exit(1);
        }
    }
}
