//! stylograph CLI: writing-style fingerprints for public-domain books.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result, bail};

use stylograph::FeatureVector;
use stylograph::gutenberg::CatalogClient;
use stylograph::pipeline::{PipelineConfig, StylePipeline};

#[derive(Parser)]
#[command(name = "stylo", version, about = "Stylometric fingerprints for public-domain books")]
struct Cli {
    /// Mirror download timeout in seconds.
    #[arg(long, global = true, default_value = "60")]
    timeout: u64,

    /// Minimum cleaned-text length (chars) to accept a downloaded book.
    #[arg(long, global = true, default_value = "1000")]
    min_content: usize,

    /// Emit machine-readable JSON instead of a human summary.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a text and print its feature vector.
    Analyze {
        /// Path to a local text file (raw download or already-clean prose).
        #[arg(long, conflicts_with = "id")]
        file: Option<PathBuf>,

        /// Gutenberg book ID to download from the mirror list.
        #[arg(long)]
        id: Option<u32>,
    },

    /// Search the Gutendex catalog.
    Search {
        /// Free-text query (title or author).
        query: String,

        /// Number of results to return.
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Show catalog metadata for one book.
    Show {
        /// Gutenberg book ID.
        id: u32,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = PipelineConfig {
        timeout: Duration::from_secs(cli.timeout),
        min_content_len: cli.min_content,
        ..Default::default()
    };

    match cli.command {
        Commands::Analyze { file, id } => {
            let pipeline = StylePipeline::new(config)?;
            let features = match (file, id) {
                (Some(path), None) => {
                    let raw = std::fs::read_to_string(&path).into_diagnostic()?;
                    pipeline.analyze_text(&raw)?
                }
                (None, Some(id)) => pipeline.analyze_book(id)?,
                _ => bail!("pass exactly one of --file or --id"),
            };
            print_features(&features, cli.json)?;
        }

        Commands::Search { query, limit } => {
            let catalog = CatalogClient::default();
            let records = catalog.search(&query, limit)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&records).into_diagnostic()?);
            } else {
                for record in &records {
                    println!(
                        "{:>6}  {} — {} [{} downloads]",
                        record.gutenberg_id, record.title, record.author, record.download_count
                    );
                }
            }
        }

        Commands::Show { id } => {
            let catalog = CatalogClient::default();
            let Some(record) = catalog.by_id(id)? else {
                bail!("no book with Gutenberg ID {id}");
            };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&record).into_diagnostic()?);
            } else {
                println!("{:>15}: {}", "id", record.gutenberg_id);
                println!("{:>15}: {}", "title", record.title);
                println!("{:>15}: {}", "author", record.author);
                println!("{:>15}: {}", "languages", record.languages.join(", "));
                println!("{:>15}: {}", "downloads", record.download_count);
                if let Some(url) = &record.text_url {
                    println!("{:>15}: {url}", "plain text");
                }
                for subject in &record.subjects {
                    println!("{:>15}: {subject}", "subject");
                }
            }
        }
    }

    Ok(())
}

fn print_features(features: &FeatureVector, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(features).into_diagnostic()?);
        return Ok(());
    }
    println!("{:>22}: {}", "total words", features.total_words);
    println!("{:>22}: {}", "total sentences", features.total_sentences);
    println!("{:>22}: {}", "unique words", features.unique_words);
    println!("{:>22}: {:.2}", "avg sentence length", features.avg_sentence_length);
    println!("{:>22}: {:.2}", "avg word length", features.avg_word_length);
    println!("{:>22}: {:.4}", "lexical diversity", features.lexical_diversity);
    println!("{:>22}: {:.2}", "vocabulary richness", features.vocabulary_richness);
    println!("{:>22}: {:.2}", "pacing score", features.pacing_score);
    println!("{:>22}: {:.2}", "tone score", features.tone_score);
    println!("{:>22}: {:.4}", "punctuation density", features.punctuation_density);
    println!("{:>22}: {:.2}", "dialogue percentage", features.dialogue_percentage);
    Ok(())
}
