use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use devcrew::agent::ClaudeBackend;
use devcrew::cli::Args;
use devcrew::generator::{run_generation_workflow, GeneratorConfig, RunStatus};
use devcrew::web::{self, ServeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let args = Args::parse();

    let filter = if args.debug {
        EnvFilter::new("devcrew=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    args.validate()?;

    let backend = Arc::new(ClaudeBackend::new());
    let config = GeneratorConfig {
        output_dir: PathBuf::from(&args.output_dir),
        debug: args.debug,
    };

    if args.serve {
        let serve_config = ServeConfig {
            port: args.port,
            share: args.share_enabled(),
        };
        return web::serve(backend, config, serve_config).await;
    }

    let requirements = args.load_requirements()?;
    let result = run_generation_workflow(backend.as_ref(), &requirements, &config).await?;

    if result.status == RunStatus::Failure {
        std::process::exit(1);
    }

    Ok(())
}
