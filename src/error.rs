use thiserror::Error;

/// Errors raised by the dashboard library.
///
/// Empty selections are not errors: builders return an empty row set.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Input table is missing a required column or cannot be read as a table.
    #[error("data format error in {source_name}: {message}")]
    DataFormat {
        source_name: String,
        message: String,
    },

    /// Range bounds or bin width rejected before calling a builder.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// Checkbox index outside the control's label list.
    #[error("invalid selection: index {index} out of {len} labels for {control}")]
    InvalidSelection {
        control: String,
        index: usize,
        len: usize,
    },

    /// A control or value kind the target view does not expose.
    #[error("unsupported control {control} for {view} view")]
    UnsupportedControl { view: String, control: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
