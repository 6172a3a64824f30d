/// Textgen: trains a character-level Markov model from a corpus file and
/// prints generated text.
///
/// Usage: textgen --corpus <file.txt> --seed-text <text> [--window <n>] [--length <n>] [--seed <u64>] [--dump]
use std::env;
use std::path::Path;
use std::process;

use charkov::core::corpus;
use charkov::core::model::LanguageModel;

const USAGE: &str = "Usage: textgen --corpus <file.txt> --seed-text <text> \
[--window <n>] [--length <n>] [--seed <u64>] [--dump]";

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut corpus_path = None;
    let mut seed_text = None;
    let mut window = 2usize;
    let mut length = 200usize;
    let mut seed = None;
    let mut dump = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--corpus" => {
                i += 1;
                corpus_path = Some(args[i].clone());
            }
            "--seed-text" => {
                i += 1;
                seed_text = Some(args[i].clone());
            }
            "--window" => {
                i += 1;
                window = args[i].parse().unwrap_or_else(|_| {
                    eprintln!("Error: --window must be a positive integer");
                    process::exit(1);
                });
            }
            "--length" => {
                i += 1;
                length = args[i].parse().unwrap_or_else(|_| {
                    eprintln!("Error: --length must be a non-negative integer");
                    process::exit(1);
                });
            }
            "--seed" => {
                i += 1;
                seed = Some(args[i].parse::<u64>().unwrap_or_else(|_| {
                    eprintln!("Error: --seed must be an unsigned integer");
                    process::exit(1);
                }));
            }
            "--dump" => {
                dump = true;
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let corpus_path = corpus_path.unwrap_or_else(|| {
        eprintln!("Error: --corpus is required");
        eprintln!("{}", USAGE);
        process::exit(1);
    });

    let seed_text = seed_text.unwrap_or_else(|| {
        eprintln!("Error: --seed-text is required");
        eprintln!("{}", USAGE);
        process::exit(1);
    });

    if window == 0 {
        eprintln!("Error: --window must be at least 1");
        process::exit(1);
    }

    let text = corpus::load(Path::new(&corpus_path)).unwrap_or_else(|e| {
        eprintln!("Error reading corpus '{}': {}", corpus_path, e);
        process::exit(1);
    });

    let mut model = match seed {
        Some(s) => LanguageModel::with_seed(window, s),
        None => LanguageModel::new(window),
    }
    .unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    println!("Training window-{} model from '{}'...", window, corpus_path);
    model.train(&text);
    println!(
        "Model trained: {} unique windows, {} transitions",
        model.table().len(),
        model.table().transition_count()
    );

    if dump {
        print!("{}", model.describe());
    }

    println!("{}", model.generate(&seed_text, length));
}
