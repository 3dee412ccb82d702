use gauge_read_core::ScaleError;

/// Errors returned by the dial reader.
#[derive(thiserror::Error, Debug)]
pub enum DialReadError {
    #[error("no dial circle detected")]
    NoCircleDetected,
    #[error(transparent)]
    Scale(#[from] ScaleError),
}
