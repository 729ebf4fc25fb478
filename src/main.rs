use clap::Parser;
use restaurant_order::app::render::render_menu;
use restaurant_order::config::Command;
use restaurant_order::utils::error::ErrorSeverity;
use restaurant_order::utils::{logger, validation::Validate};
use restaurant_order::{CliConfig, OrderError, OrderSession, Repl};
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting restaurant-order");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ restaurant-order failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(config: &CliConfig) -> Result<(), OrderError> {
    config.validate()?;
    let mut session = config.build_session()?;

    match config.command() {
        Command::Menu { json } => print_menu(&session, json),
        Command::Order { script: Some(path) } => {
            tracing::info!("📜 Running session script: {}", path);
            let input = BufReader::new(File::open(&path)?);
            run_session(&mut session, input, false)
        }
        Command::Order { script: None } => {
            let interactive = io::stdin().is_terminal();
            run_session(&mut session, io::stdin().lock(), interactive)
        }
    }
}

fn print_menu(session: &OrderSession, json: bool) -> Result<(), OrderError> {
    if json {
        println!("{}", serde_json::to_string_pretty(session.catalog())?);
    } else {
        let settings = session.settings();
        print!(
            "{}",
            render_menu(
                session.catalog(),
                &settings.restaurant_name,
                &settings.currency_symbol
            )
        );
    }
    Ok(())
}

fn run_session<R: io::BufRead>(
    session: &mut OrderSession,
    input: R,
    interactive: bool,
) -> Result<(), OrderError> {
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let stats = Repl::new(session)
        .interactive(interactive)
        .run(input, &mut output)?;

    tracing::info!(
        "Session finished: {} command(s), {} rejected, {} order(s) placed",
        stats.commands,
        stats.rejected,
        stats.orders_placed
    );
    Ok(())
}
