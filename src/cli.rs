//! Command-line interface definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Cover page generator for ÉTS lab reports
#[derive(Debug, Parser)]
#[command(name = "rapport-ets", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Render a cover page from a JSON file
    Render(RenderArgs),
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long)]
    pub port: Option<u16>,

    /// Address to bind to
    #[arg(long)]
    pub bind: Option<String>,

    /// Path to a TOML config file (default: ./rapport.toml, then the user
    /// config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Allowed CORS origin (repeatable); replaces the default policy
    #[arg(long = "allow-origin")]
    pub allow_origin: Vec<String>,

    /// Path to the logo image embedded in every cover page
    #[arg(long)]
    pub logo: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// JSON file describing the report
    #[arg(short, long)]
    pub input: PathBuf,

    /// Where to write the generated PDF
    #[arg(short, long)]
    pub output: PathBuf,

    /// Path to the logo image embedded in the cover page
    #[arg(long)]
    pub logo: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve_args() {
        let cli = Cli::parse_from([
            "rapport-ets",
            "serve",
            "--port",
            "8080",
            "--bind",
            "127.0.0.1",
            "--allow-origin",
            "http://localhost:3001",
            "--allow-origin",
            "https://app.example.com",
        ]);

        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.port, Some(8080));
                assert_eq!(args.bind.as_deref(), Some("127.0.0.1"));
                assert_eq!(args.allow_origin.len(), 2);
            }
            _ => panic!("expected serve subcommand"),
        }
    }

    #[test]
    fn test_parse_render_args() {
        let cli = Cli::parse_from([
            "rapport-ets",
            "render",
            "--input",
            "report.json",
            "--output",
            "cover.pdf",
        ]);

        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.input, PathBuf::from("report.json"));
                assert_eq!(args.output, PathBuf::from("cover.pdf"));
                assert!(args.logo.is_none());
            }
            _ => panic!("expected render subcommand"),
        }
    }
}
