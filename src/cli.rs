//! Command-line surface and the single-shot run pipeline.

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{info, instrument, warn};

use crate::{
    api::{HfClient, Summarizer, SummaryRequest},
    config::Settings,
    error::{Error, Result},
    format, input,
    summary::{build_prompt, length_params, SummaryType},
};

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(
    name = "briefly",
    author,
    version,
    about = "Summarize a local text file through the HuggingFace Inference API",
    long_about = None
)]
pub struct Cli {
    /// Path of the text file to summarize.
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Path of the text file to summarize (wins over the positional form).
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Summary type: short | medium | bullet.
    #[arg(short = 't', long = "type", default_value = "short", value_name = "TYPE")]
    summary_type: String,

    /// Raise stderr log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// The input path, `--input` taking precedence over the positional.
    pub fn input_path(&self) -> Result<&Path> {
        self.input
            .as_deref()
            .or(self.path.as_deref())
            .ok_or_else(|| {
                Error::validation(
                    "no input file given; pass a path as the first argument or with --input",
                )
            })
    }

    /// The validated summary type.
    pub fn summary_type(&self) -> Result<SummaryType> {
        self.summary_type.parse()
    }
}

/// Run the whole pipeline: load, prompt, request, format, print.
#[instrument(skip(cli, settings))]
pub async fn run(cli: &Cli, settings: Settings) -> Result<()> {
    let kind = cli.summary_type()?;
    let path = cli.input_path()?;

    // Token check up front so nothing is read or sent without credentials.
    settings.bearer_token()?;

    let text = input::load_input(path)?;
    let request = SummaryRequest {
        inputs: build_prompt(Some(kind), &text),
        parameters: length_params(Some(kind)),
    };

    let client = HfClient::new(&settings)?;
    info!(%kind, url = %settings.api_url, "sending request to inference endpoint");

    let candidates = tokio::select! {
        result = client.summarize(&request) => result?,
        _ = tokio::signal::ctrl_c() => {
            warn!("interrupted; abandoning in-flight request");
            return Err(Error::Cancelled);
        }
    };

    let summary = first_summary(candidates)?;
    info!(
        %kind,
        chars = summary.len(),
        preview = %preview(&summary),
        "summary generated"
    );

    // Status goes to the log; stdout carries the summary alone.
    println!("{}", format::render(kind, &summary));
    Ok(())
}

/// Extract the first candidate's text; only the first element is consulted.
fn first_summary(candidates: Vec<crate::api::SummaryCandidate>) -> Result<String> {
    let text = candidates
        .into_iter()
        .next()
        .map(|c| c.summary_text.trim().to_string())
        .unwrap_or_default();
    if text.is_empty() {
        return Err(Error::EmptySummary);
    }
    Ok(text)
}

/// First ~80 characters, for the run log.
fn preview(text: &str) -> String {
    text.chars().take(80).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SummaryCandidate;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("briefly").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn named_input_wins_over_positional() {
        let cli = parse(&["positional.txt", "--input", "named.txt"]);
        assert_eq!(cli.input_path().unwrap(), Path::new("named.txt"));
    }

    #[test]
    fn positional_input_is_accepted() {
        let cli = parse(&["article.txt"]);
        assert_eq!(cli.input_path().unwrap(), Path::new("article.txt"));
    }

    #[test]
    fn missing_input_is_a_validation_error() {
        let cli = parse(&[]);
        assert!(matches!(
            cli.input_path().unwrap_err(),
            Error::Validation { .. }
        ));
    }

    #[test]
    fn type_defaults_to_short() {
        let cli = parse(&["article.txt"]);
        assert_eq!(cli.summary_type().unwrap(), SummaryType::Short);
    }

    #[test]
    fn invalid_type_is_rejected() {
        let cli = parse(&["-t", "verbose", "article.txt"]);
        assert!(cli.summary_type().is_err());
    }

    #[test]
    fn first_candidate_only_is_consulted() {
        let candidates = vec![
            SummaryCandidate {
                summary_text: "  AI changes everything.  ".into(),
            },
            SummaryCandidate {
                summary_text: "ignored".into(),
            },
        ];
        assert_eq!(first_summary(candidates).unwrap(), "AI changes everything.");
    }

    #[test]
    fn empty_candidates_are_no_result() {
        assert!(matches!(
            first_summary(Vec::new()).unwrap_err(),
            Error::EmptySummary
        ));
        let blank = vec![SummaryCandidate {
            summary_text: "   ".into(),
        }];
        assert!(matches!(
            first_summary(blank).unwrap_err(),
            Error::EmptySummary
        ));
    }
}
