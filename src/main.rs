use clap::{Parser, Subcommand};
use simple_folio::{check, config, manifest, output};
use std::path::PathBuf;
use std::process::ExitCode;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "simple-folio")]
#[command(about = "Site settings and content tables for a portfolio/blog")]
#[command(long_about = "\
Site settings and content tables for a portfolio/blog

The navigation, social, and tech-stack tables are compiled in; site
settings come from an optional site.toml merged over stock defaults:

  site/
  └── site.toml    # Settings overrides (optional, sparse)

Commands validate the data and export it as site.json for the rendering
layer. Run 'simple-folio gen-config' to generate a documented site.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Directory containing site.toml
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Output directory for exported data
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the resolved settings and all content tables
    Show,
    /// Validate settings and tables without exporting
    Check,
    /// Write site.json for the rendering layer
    Export,
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match cli.command {
        Command::Show => {
            let settings = config::load_config(&cli.source)?;
            output::print_show_output(&settings);
        }
        Command::Check => {
            let settings = config::load_config(&cli.source)?;
            let issues = check::check_site(&settings);
            output::print_check_output(&issues);
            if !issues.is_empty() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Export => {
            let settings = config::load_config(&cli.source)?;
            let site = manifest::build(settings);
            let path = manifest::write(&site, &cli.output)?;
            output::print_export_output(&path);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(ExitCode::SUCCESS)
}
