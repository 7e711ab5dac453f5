//! Error types for the demo runner

use thiserror::Error;

/// Main runner error type
#[derive(Error, Debug)]
pub enum CliError {
    /// A solver rejected its input or the strategies disagreed
    #[error("Solver error: {0}")]
    Solver(#[from] dp_solver::DpError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] dp_solver::RegistrationError),
}
