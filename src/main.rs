// Copyright 2026 BadCompany
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Print the DDS Security properties derived from a security root
use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::debug;

use dds_security_config::config::{Config, LogFormat};
use dds_security_config::{
    apply_logging_configuration_from_file, apply_security_options, PropertyPolicy, PropertySeq,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Security root directory (overrides DDS_SECURITY_ROOT)
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Fail when security files are missing instead of disabling security
    #[arg(long)]
    enforce: bool,

    /// Translate a standalone logging XML file instead of a security root
    #[arg(long, conflicts_with = "root")]
    logging_xml: Option<PathBuf>,

    /// Output format for the derived properties
    #[arg(long, value_enum, default_value_t = Output::Text)]
    output: Output,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Output {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    install_panic_hook();

    let mut config = Config::from_env().context("invalid configuration")?;

    if let Some(root) = &cli.root {
        config.security_root = Some(root.clone());
    }
    if cli.enforce {
        config.enforce_security = true;
    }

    init_tracing(&config);
    debug!(?config, "Effective configuration");

    let properties = match &cli.logging_xml {
        Some(path) => {
            let mut properties = PropertySeq::new();
            apply_logging_configuration_from_file(path, &mut properties)
                .with_context(|| format!("failed to apply {}", path.display()))?;
            properties
        }
        None => {
            let mut policy = PropertyPolicy::new();
            apply_security_options(&config.security_options(), &mut policy)
                .context("failed to apply security options")?;
            policy.properties
        }
    };

    match cli.output {
        Output::Json => println!("{}", serde_json::to_string_pretty(&properties)?),
        Output::Text => {
            for property in &properties {
                println!("{}={}", property.name, property.value);
            }
        }
    }

    Ok(())
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("PANIC: {} at {}", message, location);
    }));
}

fn init_tracing(config: &Config) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    match config.log_format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Text => subscriber.init(),
    }
}
