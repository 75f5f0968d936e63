//! Application entry point and dispatch.

use anyhow::Result;
use tracing::info;

use progcalc_cli::completion::generate_completion;
use progcalc_cli::{CLIResultPresenter, ResultPresenter};
use progcalc_core::{compute, SequenceRequest};
use progcalc_tui::TuiApp;

use crate::config::AppConfig;
use crate::errors::AppError;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let request = config.request();
    check_term_limit(&request, config.max_terms)?;

    if config.tui {
        return run_tui(config, request);
    }

    run_cli(config, &request)
}

/// Reject term counts above the display ceiling before any computation.
fn check_term_limit(request: &SequenceRequest, max_terms: u64) -> Result<(), AppError> {
    if request.term_count > max_terms {
        return Err(AppError::TermLimit {
            requested: request.term_count,
            max: max_terms,
        });
    }
    Ok(())
}

fn run_cli(config: &AppConfig, request: &SequenceRequest) -> Result<()> {
    let result = compute(request)?;
    info!(kind = %request.kind, terms = result.len(), "sequence ready");

    let presenter = CLIResultPresenter::new(config.presenter_options());
    presenter.present_result(request, &result);
    Ok(())
}

fn run_tui(config: &AppConfig, request: SequenceRequest) -> Result<()> {
    let mut app = TuiApp::new(request, config.max_terms);
    app.run().map_err(AppError::Tui)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_limit_boundaries() {
        let at_limit = SequenceRequest::arithmetic(1.0, 1.0, 100);
        assert!(check_term_limit(&at_limit, 100).is_ok());

        let above = SequenceRequest::arithmetic(1.0, 1.0, 101);
        assert!(matches!(
            check_term_limit(&above, 100),
            Err(AppError::TermLimit {
                requested: 101,
                max: 100
            })
        ));
    }

    #[test]
    fn zero_terms_pass_limit_check() {
        // Positivity is the engine's check, not the display ceiling's
        let zero = SequenceRequest::geometric(1.0, 2.0, 0);
        assert!(check_term_limit(&zero, 100).is_ok());
    }
}
