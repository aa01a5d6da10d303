use thiserror::Error;

/// Errors surfaced by picker operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PickerError {
    /// The item list must contain at least one element.
    #[error("item list must be non-empty")]
    EmptyItems,

    /// A value was set that identifies no item: not present in an integer
    /// list, or out of bounds as a label index.
    #[error("no item for value {value}")]
    WrongValue { value: i32 },
}
