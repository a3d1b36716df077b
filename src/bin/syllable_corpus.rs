use clap::Parser;
use readability_core::corpus::{run_build, CorpusBuilder};
use readability_core::persistence::read_word_list;
use readability_core::{BuildConfig, Result, SyllableEstimator};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

/// Builds the syllable dictionary from a hyphenation word list.
///
/// Only common words the vowel-run heuristic miscounts are written out.
#[derive(Parser)]
#[command(name = "syllable_corpus")]
#[command(version)]
struct Cli {
    /// JSON build config; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Hyphenation list, one word per line
    #[arg(long)]
    corpus: Option<PathBuf>,

    /// Common words list, one word per line
    #[arg(long)]
    common_words: Option<PathBuf>,

    /// Where to write the dictionary
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Syllable boundary marker in the hyphenation list
    #[arg(long)]
    delimiter: Option<char>,

    /// Words with more syllables than this are skipped
    #[arg(long)]
    max_syllables: Option<usize>,

    /// Re-score the corpus with the new dictionary and report the result
    #[arg(long)]
    verify: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn build_config(&self) -> Result<BuildConfig> {
        let mut config = match &self.config {
            Some(path) => BuildConfig::load_from_file(path)?,
            None => BuildConfig::default(),
        };
        if let Some(path) = &self.corpus {
            config.corpus_path = path.clone();
        }
        if let Some(path) = &self.common_words {
            config.common_words_path = path.clone();
        }
        if let Some(path) = &self.output {
            config.output_path = path.clone();
        }
        if let Some(delimiter) = self.delimiter {
            config.delimiter = delimiter;
        }
        if let Some(max) = self.max_syllables {
            config.max_syllables = max;
        }
        config.validate()?;
        Ok(config)
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.build_config()?;
    tracing::info!(
        corpus = %config.corpus_path.display(),
        common_words = %config.common_words_path.display(),
        output = %config.output_path.display(),
        "building syllable dictionary"
    );

    let output = run_build(&config)?;
    println!("{}", output.stats);
    println!(
        "Dictionary with {} entries written to '{}'",
        output.dictionary.len(),
        config.output_path.display()
    );

    if cli.verify {
        let corpus_text = read_word_list(&config.corpus_path)?;
        let estimator = SyllableEstimator::new(output.dictionary);
        let rescored = CorpusBuilder::from_config(&config).evaluate(&estimator, &corpus_text);
        println!(
            "% correct with dictionary:      {:.2}",
            rescored.stats.accuracy() * 100.0
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            ExitCode::FAILURE
        }
    }
}
