use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatusBarError {
    #[error("Attempted to remove {requested} listeners but only {active} are registered")]
    ListenerUnderflow { requested: usize, active: usize },

    #[error("`{0}` is not a supported status bar event")]
    UnsupportedEvent(String),

    #[error("Runtime error: {0}")]
    Runtime(#[from] core_runtime::Error),
}

pub type Result<T> = std::result::Result<T, StatusBarError>;
