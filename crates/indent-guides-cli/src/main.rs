use anyhow::{Context, Result};
use indent_guides_config::Config;
use indent_guides_engine::TabSize;
use std::{env, fs, path::PathBuf, process};

mod report;

fn usage(program: &str) -> ! {
    eprintln!("Usage: {program} <file> [line]");
    eprintln!("Prints the indent guide level of every line in <file>.");
    eprintln!("With [line], also prints the active guide around that line.");
    process::exit(1);
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .cloned()
        .unwrap_or_else(|| "indent-guides-cli".to_string());

    let (path, active_line) = match args.as_slice() {
        [_, path] => (PathBuf::from(path), None),
        [_, path, line] => match line.parse::<usize>() {
            Ok(line) => (PathBuf::from(path), Some(line)),
            Err(_) => {
                eprintln!("Error: line must be a positive number, got '{line}'");
                usage(&program);
            }
        },
        _ => usage(&program),
    };

    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        Ok(None) => {
            log::info!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            Config::default()
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Fix or remove {}", config_path.display());
            process::exit(1);
        }
    };

    let tab_size = TabSize::new(config.tab_size_for(&path)?)?;
    log::info!("Using tab size {} for {}", tab_size.get(), path.display());

    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let output = report::build(&text, tab_size, active_line)?;
    print!("{output}");

    Ok(())
}
