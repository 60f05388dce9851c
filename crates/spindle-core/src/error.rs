use thiserror::Error;

/// A min/max/step combination that breaks the spinner's configuration
/// invariants. Variants are listed in the order `validate` checks them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BoundsError {
    /// Bounds are still the all-zero placeholder of an uninitialized value.
    #[error("spinner not initialized")]
    Uninitialized,
    #[error("spinner max value must be greater than min value")]
    MinNotBelowMax,
    #[error("spinner step must be greater than 0")]
    StepNotPositive,
    #[error("spinner step must be less than or equal to max - min")]
    StepTooLarge,
}

/// Rejection of text typed into the spinner's display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("value is not a number")]
    NotANumber,
    #[error("value is not between min and max")]
    OutOfRange,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("binding notifier is not running")]
    Closed,
    #[error("bound value unavailable: {0}")]
    Unavailable(String),
}
