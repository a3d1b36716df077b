use clap::Parser;
use crossterm::style::Stylize;
use readability_core::{BuildConfig, ReadabilityEngine, ReadabilityRating, ReadabilityResult};
use std::io::{self, stdin, stdout, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

/// Flesch Reading Ease for English text.
///
/// Scores each FILE (or `-` for stdin). Without files, starts an interactive
/// session.
#[derive(Parser)]
#[command(name = "readability")]
#[command(version)]
struct Cli {
    /// Syllable dictionary produced by `syllable_corpus`
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Text files to score
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dictionary_path = cli
        .dictionary
        .clone()
        .unwrap_or_else(|| BuildConfig::default().output_path);
    let engine = ReadabilityEngine::from_file_or_new(&dictionary_path);

    let outcome = if cli.files.is_empty() {
        interactive(&engine)
    } else {
        score_files(&engine, &cli.files, cli.json)
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn score_files(engine: &ReadabilityEngine, files: &[PathBuf], json: bool) -> io::Result<()> {
    for file in files {
        let text = if file.as_os_str() == "-" {
            let mut buffer = String::new();
            stdin().read_to_string(&mut buffer)?;
            buffer
        } else {
            std::fs::read_to_string(file)
                .map_err(|e| io::Error::new(e.kind(), format!("{}: {}", file.display(), e)))?
        };
        let result = engine.score(&text);
        if json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{}", file.display().to_string().bold());
            print_result(&result);
        }
    }
    Ok(())
}

fn interactive(engine: &ReadabilityEngine) -> io::Result<()> {
    let mut draft = String::new();

    println!("Readability. Type text line by line; an empty line scores it.");
    println!("':syl <word>' shows a syllable estimate, 'exit' quits.");
    println!("---------------------------------------------------------------");

    loop {
        print!("> ");
        stdout().flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let cmd = input.trim_end_matches(|c: char| c == '\r' || c == '\n');

        match cmd.trim() {
            "exit" => break,
            "" => {
                print_result(&engine.score(&draft));
                draft.clear();
            }
            s if s.starts_with(":syl") => {
                for word in s[":syl".len()..].split_whitespace() {
                    let word = word.to_lowercase();
                    println!(
                        "  {}: {} (heuristic {})",
                        word,
                        engine.estimate(&word, false),
                        engine.estimate(&word, true)
                    );
                }
            }
            _ => {
                draft.push_str(cmd);
                draft.push('\n');
            }
        }
    }
    Ok(())
}

fn print_result(result: &ReadabilityResult) {
    let label = result.rating.label();
    let styled = match result.rating {
        ReadabilityRating::VeryEasy | ReadabilityRating::Easy | ReadabilityRating::FairlyEasy => {
            label.green()
        }
        ReadabilityRating::PlainEnglish | ReadabilityRating::FairlyDifficult => label.yellow(),
        ReadabilityRating::NothingToRead => label.dark_grey(),
        _ => label.red(),
    };
    println!("  Rating:     {}", styled.bold());
    if result.raw_score.is_nan() {
        println!("  Score:      -");
    } else {
        println!("  Score:      {:.1}", result.raw_score);
    }
    println!(
        "  Words: {}  Sentences: {}  Syllables: {}",
        result.num_words, result.num_sentences, result.num_syllables
    );
    println!("  Read time:  {}", result.average_time_to_read);
}
