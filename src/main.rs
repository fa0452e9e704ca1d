//! CLI entry point for screenkit.

mod cli;

use clap::Parser;
use cli::Command;
use screenkit::config::{load_config, Config};
use screenkit::logging::{init_file_logging, DEFAULT_LOG_FILTER};
use screenkit::{demo, Console, StdTerminal};

fn main() {
    let args = cli::Args::parse();

    // Load config.
    let mut config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    // Apply CLI overrides.
    apply_flag_overrides(&mut config, &args);

    if let Some(path) = &args.log_file {
        if let Err(e) = init_file_logging(path, DEFAULT_LOG_FILTER) {
            eprintln!("warning: logging disabled: {e}");
        }
    }

    let command = args.command();
    let terminal = StdTerminal::new();
    if command == Command::Keys && !terminal.is_interactive() {
        eprintln!("error: `keys` needs an interactive terminal");
        std::process::exit(1);
    }

    let mut console = Console::with_config(terminal, &config);
    let outcome = match command {
        Command::Demo => demo::run_demo(&mut console),
        Command::Echo { text } => demo::run_echo(&mut console, &text),
        Command::Keys => demo::run_keys(&mut console),
    };

    if let Err(e) = outcome {
        tracing::error!(error = %e, "command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn apply_flag_overrides(config: &mut Config, args: &cli::Args) {
    if args.no_color {
        config.display.color = false;
    }
    if args.debug {
        config.display.debug = true;
    }
    if args.slow_clear {
        config.display.fast_clear = false;
    }
}
