//! rapport-ets - cover page generator for ÉTS lab reports
//!
//! CLI entry point

use clap::Parser;
use std::fs;
use tracing_subscriber::EnvFilter;

use rapport_ets::{
    Cli, Commands, Config, CorsConfig, RenderArgs, ReportRenderer, ReportRequest, ServeArgs,
    WebServer,
};

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => run_serve(&args),
        Commands::Render(args) => run_render(&args),
    }
}

// ============ Serve Command ============

fn run_serve(args: &ServeArgs) -> anyhow::Result<()> {
    let file_config = match &args.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!("failed to load config file: {}", e);
            Config::default()
        }),
    };

    // CLI flags take precedence over file values.
    let mut config = file_config.server_config();
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(bind) = &args.bind {
        config.bind = bind.clone();
    }
    if !args.allow_origin.is_empty() {
        config.cors = CorsConfig::with_origins(args.allow_origin.clone());
    }
    if let Some(logo) = &args.logo {
        config.logo_path = logo.clone();
    }

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let server = WebServer::with_config(config);
        server
            .run()
            .await
            .map_err(|e| anyhow::anyhow!(e.to_string()))
    })
}

// ============ Render Command ============

fn run_render(args: &RenderArgs) -> anyhow::Result<()> {
    let json = fs::read_to_string(&args.input)?;
    let request: ReportRequest = serde_json::from_str(&json)?;

    let renderer = match &args.logo {
        Some(logo) => ReportRenderer::new(logo),
        None => ReportRenderer::default(),
    };

    let bytes = renderer.render(&request)?;
    fs::write(&args.output, &bytes)?;

    println!("Wrote {} ({} bytes)", args.output.display(), bytes.len());
    Ok(())
}
