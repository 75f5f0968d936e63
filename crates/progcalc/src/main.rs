//! progcalc: arithmetic and geometric sequence explorer.

use clap::Parser;

use progcalc_lib::{app, config, errors};

fn main() {
    let config = match config::AppConfig::try_parse() {
        Ok(config) => config,
        Err(err) => {
            let code = errors::parse_error_code(&err);
            let _ = err.print();
            std::process::exit(code);
        }
    };

    // Initialize tracing on stderr so JSON output stays clean
    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = app::run(&config) {
        progcalc_cli::ui::print_error(&format!("{err:#}"));
        std::process::exit(errors::handle_error(&err));
    }
}
