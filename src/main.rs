// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::io;
use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use the_snippets::config::consts::DEFAULT_LOG_FILTER;
use the_snippets::config::{load_and_validate_config, Config, Showcase};
use the_snippets::snippets::SnippetFactory;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [config.yaml]", program);
    eprintln!("       {} --list", program);
    eprintln!("Without a config, every snippet runs once with its defaults.");
    eprintln!("Example: {} configs/showcase.yaml", program);
}

fn run(config: &Config) -> anyhow::Result<()> {
    let showcase = Showcase::from_config(config).context("Failed to build snippets")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    showcase.run(&mut out).context("Snippet run failed")?;
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("the-snippets");

    let config = match args.get(1).map(String::as_str) {
        Some("-h" | "--help") => {
            print_usage(program);
            return ExitCode::SUCCESS;
        }
        Some("--list") => {
            for kind in SnippetFactory::list_available_kinds() {
                println!("{}", kind);
            }
            return ExitCode::SUCCESS;
        }
        Some(path) if args.len() == 2 => match load_and_validate_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        Some(_) => {
            print_usage(program);
            return ExitCode::FAILURE;
        }
        None => Config::default(),
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}
