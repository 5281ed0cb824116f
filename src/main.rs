//! CLI entry point for pavlette.

use std::io;

use clap::{CommandFactory, Parser};
use color_eyre::eyre::{Result, WrapErr, eyre};

use pavlette::cli::{Cli, OutputFormat};
use pavlette::config::Settings;
use pavlette::export::{palette_report, references_json, references_yaml, render_text};
use pavlette::logging::init_logging;
use pavlette::session::Session;
use pavlette::tui;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "pavlette", &mut io::stdout());
        return Ok(());
    }

    // Logging only when asked for or when stdout belongs to the TUI
    let _guard = (cli.interactive || cli.log_file.is_some())
        .then(|| init_logging(cli.log_file.as_deref(), Some(&cli.log_level)));

    let settings = Settings::load(cli.config.as_deref(), &cli.settings_overrides())
        .wrap_err("Failed to load settings")?;

    if let Some(ref path) = cli.save_config {
        settings
            .save(path)
            .wrap_err_with(|| format!("Failed to write to {}", path.display()))?;
        eprintln!("Wrote settings to {}", path.display());
    }

    let collection = cli
        .collection()
        .map_err(|e| eyre!("Invalid color: {}", e))?;
    tracing::info!(rows = collection.len(), ?settings, "session starting");

    let session = Session::new(&settings, collection);

    if cli.interactive {
        return tui::run(session);
    }

    let output = match (cli.references, cli.format) {
        (true, OutputFormat::Yaml) => {
            references_yaml(&session).wrap_err("Failed to serialize references to YAML")?
        }
        (true, _) => {
            let mut json =
                references_json(&session).wrap_err("Failed to serialize references to JSON")?;
            json.push('\n');
            json
        }
        (false, OutputFormat::Text) => render_text(&session),
        (false, OutputFormat::Json) => {
            let mut json = serde_json::to_string_pretty(&palette_report(&session))
                .wrap_err("Failed to serialize palette to JSON")?;
            json.push('\n');
            json
        }
        (false, OutputFormat::Yaml) => serde_yaml::to_string(&palette_report(&session))
            .wrap_err("Failed to serialize palette to YAML")?,
    };

    print!("{output}");
    Ok(())
}
