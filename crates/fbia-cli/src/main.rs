use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use fbia_common::FbiaError;
use fbia_common::config::{Config, FileStore};
use fbia_common::telemetry::{self, TelemetryConfig};
use fbia_renderer::RenderOptions;
use miette::Result;

use clap::Parser;

#[derive(Parser)]
#[command(version, about = "fbia - Render article JSON as Facebook Instant Articles markup", long_about = None)]
struct Cli {
    /// Article JSON document (reads stdin when omitted or `-`)
    input: Option<PathBuf>,

    /// Write the markup to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to a config file (.toml or .json)
    #[arg(long, env = "FBIA_CONFIG")]
    config: Option<PathBuf>,

    /// Leave `<br></br>` pairs as the serializer wrote them
    #[arg(long)]
    no_repair: bool,
}

fn main() -> Result<()> {
    init_miette()?;

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    telemetry::init(TelemetryConfig::from_config("fbia", &config));

    let mut options = RenderOptions::from(&config);
    if cli.no_repair {
        options.repair_line_breaks = false;
    }

    let (name, source) = read_input(cli.input.as_deref())?;
    let article = fbia_common::article::from_json_named(&name, &source)?;
    tracing::info!(source = %name, blocks = article.len(), "rendering article");

    let html = fbia_renderer::to_fbia_with(&article, &options);
    write_output(cli.output.as_deref(), &html)?;

    Ok(())
}

/// `--config` wins, then `<config dir>/fbia/config.toml` if it exists.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => default_config_path().filter(|path| path.exists()),
    };
    match path {
        Some(path) => Ok(Config::load(&FileStore::new(path))?),
        None => Ok(Config::default()),
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("fbia").join("config.toml"))
}

fn read_input(input: Option<&Path>) -> Result<(String, String), FbiaError> {
    match input {
        Some(path) if path != Path::new("-") => {
            let source = std::fs::read_to_string(path)?;
            Ok((path.display().to_string(), source))
        }
        _ => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(("<stdin>".to_string(), source))
        }
    }
}

fn write_output(output: Option<&Path>, html: &str) -> Result<(), FbiaError> {
    match output {
        Some(path) => std::fs::write(path, html)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn init_miette() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .with_cause_chain()
                .color(true)
                .context_lines(3)
                .tab_width(2)
                .break_words(true)
                .build(),
        )
    }))
    .map_err(|err| miette::miette!("couldn't set the miette hook: {err}"))?;
    miette::set_panic_hook();
    Ok(())
}
