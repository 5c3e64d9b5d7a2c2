use thiserror::Error;

/// Errors that can occur while parsing decimal text
///
/// The accepted grammar is `-?\d+(\.\d+)?`: an optional minus sign, at least one
/// integer digit, and an optional fractional part with at least one digit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseDecimalError {
    #[error("empty input: a decimal needs at least one digit")]
    Empty,

    #[error("invalid character {0:?} in decimal input")]
    InvalidCharacter(char),

    #[error("missing integer digits before the decimal point")]
    MissingIntegerDigits,

    #[error("missing fractional digits after the decimal point")]
    MissingFractionalDigits,
}

/// Errors that can occur during interval operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalError {
    #[error("minimum bound is not a valid numeric")]
    InvalidMin(#[source] ParseDecimalError),

    #[error("maximum bound is not a valid numeric")]
    InvalidMax(#[source] ParseDecimalError),

    #[error("membership argument is not a valid numeric")]
    NotNumeric(#[source] ParseDecimalError),

    #[error("intersection needs at least 2 intervals, got {0}")]
    NotEnoughIntervals(usize),

    #[error("interval must not be an empty set")]
    EmptySet,
}

/// Result type for interval operations
pub type IntervalResult<T> = Result<T, IntervalError>;
