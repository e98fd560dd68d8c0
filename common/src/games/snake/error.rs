use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SnakeError {
    /// Every grid cell is occupied by the body.
    Exhausted,
    /// Upstream logic produced a state the renderer cannot depict.
    InvariantViolation(String),
}

impl fmt::Display for SnakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnakeError::Exhausted => write!(f, "no free cell left on the field"),
            SnakeError::InvariantViolation(details) => write!(f, "invariant violated: {}", details),
        }
    }
}

impl std::error::Error for SnakeError {}
