use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use inline_edit::adapter::{DomAdapter, HeadlessAdapter};
use inline_edit::config::EditorConfig;
use inline_edit::editor::InlineEditor;
use inline_edit::size::{self, Axis};

mod cli;

use cli::{CliArgs, CliCommand, Measured, OutputFormat};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    inline_edit::tracing::init(args.log_dir.as_deref());

    match args.command {
        CliCommand::Resolve {
            config,
            width,
            height,
            format,
        } => {
            let config = load_config(config.as_deref())?;
            let measured = Measured::new(width, height).map_err(|e| anyhow!(e))?;
            let size = size::resolve(&config.sizes, |axis| match axis {
                Axis::Width => measured.width,
                Axis::Height => measured.height,
            })
            .context("Failed to resolve editor size")?;

            let output = match format {
                OutputFormat::Json => serde_json::to_string_pretty(&size)?,
                OutputFormat::Yaml => serde_yaml::to_string(&size)?,
            };
            println!("{}", output.trim_end());
        }
        CliCommand::Check { config } => {
            EditorConfig::from_file(&config)
                .with_context(|| format!("Invalid config {}", config.display()))?;
            println!("{}: ok", config.display());
        }
        CliCommand::Defaults => {
            let options = EditorConfig::default().to_options();
            print!("{}", serde_yaml::to_string(&options)?);
        }
        CliCommand::Simulate {
            config,
            display,
            input,
            cancel,
            width,
            height,
        } => {
            let config = load_config(config.as_deref())?;
            let measured = Measured::new(width, height).map_err(|e| anyhow!(e))?;
            let adapter =
                HeadlessAdapter::new("#display", display).with_measured(measured.width, measured.height);

            let mut editor = InlineEditor::new(adapter, config);
            editor.begin().context("Failed to start edit")?;
            editor.adapter_mut().set_editor_value(&input);

            let outcome = if cancel {
                editor.cancel()
            } else {
                editor.complete()
            }
            .context("Edit was not in progress")?;

            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<EditorConfig> {
    match path {
        Some(path) => EditorConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(EditorConfig::default()),
    }
}
