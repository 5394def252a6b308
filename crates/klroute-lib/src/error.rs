use thiserror::Error;

/// Convenient result alias for the route library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a landmark label is not present in the graph.
    #[error("unknown landmark: {name}{}", format_suggestions(.suggestions))]
    UnknownVertex {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when an edge weight is negative, non-finite, or large enough to
    /// overflow a path length.
    #[error("invalid weight {weight} for connection {from} - {to}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    /// Raised when an edge would connect a landmark to itself.
    #[error("self-loop on {name} is not a valid connection")]
    SelfLoop { name: String },

    /// Raised by the engine when a stored weight is negative.
    #[error("negative weight {weight} on {from} - {to} is not supported")]
    NegativeWeightUnsupported {
        from: String,
        to: String,
        weight: f64,
    },

    /// Raised when a predecessor walk does not terminate within |V| steps.
    #[error("predecessor cycle detected walking from {goal} back to {start} after {steps} steps")]
    PredecessorCycleDetected {
        start: String,
        goal: String,
        steps: usize,
    },

    /// Raised when no route could be found between two landmarks.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a computed route plan lacks any landmarks.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Raised when a network description row cannot be interpreted.
    #[error("invalid network data at line {line}: {message}")]
    NetworkData { line: u64, message: String },

    /// Wrapper for CSV reader errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn unknown_vertex(name: impl Into<String>) -> Self {
        Error::UnknownVertex {
            name: name.into(),
            suggestions: Vec::new(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
