use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    #[error("index {index} out of range for length {length}")]
    IndexOutOfRange { index: usize, length: usize },
    #[error("cannot {operation} from an empty {container}")]
    Empty {
        container: &'static str,
        operation: &'static str,
    },
    #[error("enqueue attempted on a full queue of capacity {capacity}")]
    Overflow { capacity: usize },
    #[error("the empty marker cannot be stored as a value")]
    InvalidValue,
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl ContainerError {
    pub fn empty(container: &'static str, operation: &'static str) -> Self {
        Self::Empty { container, operation }
    }
}

pub type Result<T, E = ContainerError> = std::result::Result<T, E>;

/**
 * Shared surface of every container. Holds for any element type,
 * `Describe` adds the state summary when elements are `Debug`.
 */
pub trait Container {
    /// Name used by `describe`.
    const KIND: &'static str;

    fn length(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.length() == 0
    }
}

/// One-line description of the container state.
pub trait Describe: Container {
    fn describe(&self) -> String;
}
