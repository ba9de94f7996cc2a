//! Command-line interface for the `nlp-hub` binary.

use std::net::{IpAddr, SocketAddr};

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use crate::analyzer::{Analyzer, AnalyzerError};
use crate::error::PipelineError;
use crate::pipelines::utils::DeviceRequest;

/// Sentence analyzed by `nlp-hub smoke`.
pub const SMOKE_TEXT: &str = "Elon Musk announced a new SpaceX mission to Mars in Texas.";
/// Categories used by `nlp-hub smoke`.
pub const SMOKE_CATEGORIES: [&str; 4] = ["technology", "business", "sports", "politics"];

/// Parsed command line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the JSON API and the demo page
    Serve(ServeArgs),
    /// Run every analysis on a fixed sentence and print the results
    Smoke(DeviceArgs),
}

/// Options for `nlp-hub serve`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "7860")]
    pub port: u16,

    #[command(flatten)]
    pub device: DeviceArgs,
}

impl ServeArgs {
    /// Socket address to bind.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Device selection shared by all subcommands.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceArgs {
    /// Run models on this CUDA device instead of the CPU
    #[arg(long, value_name = "INDEX")]
    pub cuda: Option<usize>,
}

impl DeviceArgs {
    /// Device the models should load on.
    pub fn request(&self) -> DeviceRequest {
        DeviceRequest::from(self.cuda)
    }
}

/// Run the four analyses on [`SMOKE_TEXT`] and format them under section headers.
pub fn smoke_report(analyzer: &Analyzer) -> Result<String, AnalyzerError> {
    let mut report = String::new();

    section(
        &mut report,
        "SENTIMENT",
        &analyzer.analyze_sentiment(SMOKE_TEXT)?,
    )?;
    section(
        &mut report,
        "ENTITIES",
        &analyzer.extract_entities(SMOKE_TEXT)?,
    )?;
    section(
        &mut report,
        "ZERO-SHOT CLASSIFICATION",
        &analyzer.classify_zero_shot(SMOKE_TEXT, &SMOKE_CATEGORIES)?,
    )?;
    section(&mut report, "SUMMARY", &analyzer.summarize(SMOKE_TEXT)?)?;

    Ok(report)
}

fn section<T: Serialize>(out: &mut String, title: &str, value: &T) -> Result<(), AnalyzerError> {
    let json = serde_json::to_string_pretty(value).map_err(PipelineError::from)?;
    out.push_str(&format!("\n--- {title} ---\n{json}\n"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["nlp-hub", "serve"]).unwrap();
        let Command::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        // PORT may be set in the environment running the tests.
        if std::env::var_os("PORT").is_none() {
            assert_eq!(args.addr().to_string(), "0.0.0.0:7860");
        }
        assert_eq!(args.device.request(), DeviceRequest::Cpu);
    }

    #[test]
    fn serve_with_port_and_cuda() {
        let cli = Cli::try_parse_from([
            "nlp-hub", "serve", "--host", "127.0.0.1", "--port", "8080", "--cuda", "1",
        ])
        .unwrap();
        let Command::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.addr().to_string(), "127.0.0.1:8080");
        assert_eq!(args.device.request(), DeviceRequest::Cuda(1));
    }

    #[test]
    fn port_is_the_only_env_setting() {
        let command = Cli::command();
        let serve = command.find_subcommand("serve").unwrap();
        let env_vars: Vec<String> = serve
            .get_arguments()
            .filter_map(|arg| arg.get_env())
            .map(|env| env.to_string_lossy().into_owned())
            .collect();
        assert_eq!(env_vars, ["PORT"]);
    }

    #[test]
    fn smoke_takes_device() {
        let cli = Cli::try_parse_from(["nlp-hub", "smoke", "--cuda", "0"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Smoke(DeviceArgs { cuda: Some(0) })
        ));
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["nlp-hub", "train"]).is_err());
    }
}
