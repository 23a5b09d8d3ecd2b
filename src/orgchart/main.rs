use clap::Parser;
use colored::*;
use orgchart::api::{ChartView, OrgChartApi};
use orgchart::config::OrgChartConfig;
use orgchart::error::{OrgError, Result};
use orgchart::render::Output;
use std::io::{IsTerminal, Write};
use tracing_subscriber::EnvFilter;

mod args;
use args::Cli;

const LOG_ENV: &str = "ORGCHART_LOG";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("orgchart={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let api = OrgChartApi::new(config);

    let view = ChartView::new(cli.root.clone(), cli.only_managers);
    let tree = api.chart(&cli.input, &view)?;
    let output = api.render(&tree, cli.render_mode())?;
    emit(output)
}

fn load_config(cli: &Cli) -> Result<OrgChartConfig> {
    let mut config = match &cli.config {
        Some(path) => OrgChartConfig::load_file(path)?,
        None => {
            let cwd = std::env::current_dir().map_err(OrgError::Io)?;
            OrgChartConfig::load(cwd)?
        }
    };
    if let Some(output) = &cli.output {
        config.set_output(output);
    }
    Ok(config)
}

fn emit(output: Output) -> Result<()> {
    match output {
        Output::Stdout(text) => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
        Output::File { path, bytes } => {
            std::fs::write(&path, bytes)?;
            println!("{}", format!("Wrote {}", path.display()).green());
        }
    }
    Ok(())
}
