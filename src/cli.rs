//! Command-line interface definitions.
//!
//! The collector is a batch job: which sites are scraped, under which
//! category labels, and how many listing pages deep is fixed in the source
//! tables. The CLI only decides where the dataset files live.

use clap::Parser;

/// Command-line arguments for the news corpus builder.
///
/// # Examples
///
/// ```sh
/// # Write news_fake.csv and news_true.csv into ./data
/// news_corpus_builder -o ./data
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Directory the dataset CSV files are read from and written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(&["news_corpus_builder", "--output-dir", "./data"]);
        assert_eq!(cli.output_dir, "./data");
    }

    #[test]
    fn test_cli_default_output_dir() {
        let cli = Cli::parse_from(&["news_corpus_builder"]);
        assert_eq!(cli.output_dir, ".");
    }

    #[test]
    fn test_cli_short_flag() {
        let cli = Cli::parse_from(&["news_corpus_builder", "-o", "/tmp/corpus"]);
        assert_eq!(cli.output_dir, "/tmp/corpus");
    }
}
