use anyhow::{Context, Result};
use colored::*;
use tracing::debug;

use super::args::Command;
use super::display::{models_table, ModelRow};
use crate::config::{OutputFormat, Settings};
use crate::models::{DeviceId, ModelError, ModelRegistry};

/// Result of a command, mapped to the process exit status by `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    NotFound,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::NotFound => 1,
        }
    }
}

fn wants_json(settings: &Settings, json_flag: bool) -> bool {
    json_flag || settings.output.format == OutputFormat::Json
}

fn print_rows(rows: &[ModelRow], json: bool) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(rows).context("Failed to serialize models")?;
        println!("{}", text);
    } else {
        println!("{}", models_table(rows));
    }
    Ok(())
}

fn report_lookup_error(err: &ModelError) -> Outcome {
    debug!("Lookup failed: {}", err);
    eprintln!("{}", err.to_string().red());
    Outcome::NotFound
}

/// Executes one command against `registry`.
pub fn run(command: &Command, settings: &Settings, registry: &ModelRegistry) -> Result<Outcome> {
    match command {
        Command::List { json } => {
            let rows: Vec<ModelRow> = registry.iter().map(|(name, spec)| ModelRow::new(name, spec)).collect();
            debug!("Listing {} models", rows.len());
            let json = wants_json(settings, *json);
            print_rows(&rows, json)?;
            if !json {
                println!("{}", format!("Total models: {}", rows.len()).bright_green());
            }
            Ok(Outcome::Success)
        }
        Command::Show { name, json } => match registry.get(name) {
            Ok(spec) => {
                debug!("Showing model {}", name);
                print_rows(&[ModelRow::new(name, &spec)], wants_json(settings, *json))?;
                Ok(Outcome::Success)
            }
            Err(e) => Ok(report_lookup_error(&e)),
        },
        Command::Check { name } => {
            if registry.has(name) {
                println!("{}", format!("{} is a known model", name).green());
                Ok(Outcome::Success)
            } else {
                println!("{}", format!("{} is not a known model", name).yellow());
                Ok(Outcome::NotFound)
            }
        }
        Command::Device { device, json } => {
            let device = DeviceId::parse(device)?;
            match registry.resolve_device(&device) {
                Ok(spec) => {
                    debug!("Device {} resolved to model {}", device.address, device.name);
                    print_rows(&[ModelRow::new(&device.name, &spec)], wants_json(settings, *json))?;
                    Ok(Outcome::Success)
                }
                Err(e) => Ok(report_lookup_error(&e)),
            }
        }
    }
}
