/*!
# Errors

Failures are split into three tiers that are never conflated:

- [`ArgumentError`]: a required argument is missing or out of range. These are
  programmer bugs and should usually be propagated unchanged.
- [`LookupError`]: a vertex or edge is not a (visible) member of the graph.
  Callers commonly treat these as ordinary outcomes; the `try_*` family of
  [`IncidenceGraph`](crate::ops::IncidenceGraph) avoids them entirely.
- [`AlgorithmError`]: an algorithm proved a global structural property false
  (a negative cycle, missing strong connectivity). Storages and views never
  raise these.

[`GraphError`] is the sum of all three, so `?` works across tiers while
[`GraphError::kind`] still allows branching on the tier.
*/

use std::fmt::Debug;

use thiserror::Error;

/// Boxed underlying failure attached to an [`AlgorithmError`].
pub type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A required argument was absent or invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// The named argument was not supplied
    #[error("Argument `{0}` must be supplied")]
    Missing(&'static str),

    /// An index exceeded the length of the indexed sequence
    #[error("Index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// The queried entity is not a current member of the graph (or view).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Vertex {0} not found in graph")]
    VertexNotFound(String),

    #[error("Edge {0} not found in graph")]
    EdgeNotFound(String),
}

impl LookupError {
    /// Builds a [`LookupError::VertexNotFound`] rendering `vertex` with `Debug`
    pub fn vertex_not_found<V: Debug + ?Sized>(vertex: &V) -> Self {
        Self::VertexNotFound(format!("{vertex:?}"))
    }

    /// Builds a [`LookupError::EdgeNotFound`] rendering `edge` with `Debug`
    pub fn edge_not_found<E: Debug + ?Sized>(edge: &E) -> Self {
        Self::EdgeNotFound(format!("{edge:?}"))
    }
}

/// Message of [`AlgorithmError::NegativeCycle`] when none is supplied
pub const NEGATIVE_CYCLE_MESSAGE: &str = "The graph contains at least one negative cycle.";

/// Message of [`AlgorithmError::NotStronglyConnected`] when none is supplied
pub const NOT_STRONGLY_CONNECTED_MESSAGE: &str = "The graph is not strongly connected.";

/// A structural invariant required by an algorithm does not hold.
#[derive(Debug, Error)]
pub enum AlgorithmError {
    /// A cycle of strictly negative total weight makes shortest paths unbounded below.
    #[error("{message}")]
    NegativeCycle {
        message: String,
        #[source]
        source: Option<Cause>,
    },

    /// Some vertex cannot reach some other vertex.
    #[error("{message}")]
    NotStronglyConnected {
        message: String,
        #[source]
        source: Option<Cause>,
    },
}

impl AlgorithmError {
    pub fn negative_cycle() -> Self {
        Self::NegativeCycle {
            message: NEGATIVE_CYCLE_MESSAGE.to_string(),
            source: None,
        }
    }

    /// Negative cycle with a custom message and an optional wrapped cause
    pub fn negative_cycle_with_message(message: impl Into<String>, cause: Option<Cause>) -> Self {
        Self::NegativeCycle {
            message: message.into(),
            source: cause,
        }
    }

    pub fn not_strongly_connected() -> Self {
        Self::NotStronglyConnected {
            message: NOT_STRONGLY_CONNECTED_MESSAGE.to_string(),
            source: None,
        }
    }

    /// Missing strong connectivity with a custom message and an optional wrapped cause
    pub fn not_strongly_connected_with_message(
        message: impl Into<String>,
        cause: Option<Cause>,
    ) -> Self {
        Self::NotStronglyConnected {
            message: message.into(),
            source: cause,
        }
    }

    /// Returns the human readable message
    pub fn message(&self) -> &str {
        match self {
            Self::NegativeCycle { message, .. } | Self::NotStronglyConnected { message, .. } => {
                message
            }
        }
    }

    /// Returns the wrapped cause, if any
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::NegativeCycle { source, .. } | Self::NotStronglyConnected { source, .. } => {
                source.as_deref()
            }
        }
    }

    pub fn is_negative_cycle(&self) -> bool {
        matches!(self, Self::NegativeCycle { .. })
    }

    pub fn is_not_strongly_connected(&self) -> bool {
        matches!(self, Self::NotStronglyConnected { .. })
    }
}

/// Tier of a [`GraphError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Argument,
    Lookup,
    Algorithm,
}

/// Any failure this library can report.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),
}

impl GraphError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Argument(_) => ErrorKind::Argument,
            Self::Lookup(_) => ErrorKind::Lookup,
            Self::Algorithm(_) => ErrorKind::Algorithm,
        }
    }

    /// Returns *true* if this is a [`LookupError::VertexNotFound`]
    pub fn is_vertex_not_found(&self) -> bool {
        matches!(self, Self::Lookup(LookupError::VertexNotFound(_)))
    }

    /// Returns *true* if this is a [`LookupError::EdgeNotFound`]
    pub fn is_edge_not_found(&self) -> bool {
        matches!(self, Self::Lookup(LookupError::EdgeNotFound(_)))
    }

    /// Returns *true* if this is an [`AlgorithmError::NegativeCycle`]
    pub fn is_negative_cycle(&self) -> bool {
        matches!(self, Self::Algorithm(e) if e.is_negative_cycle())
    }

    /// Returns *true* if this is an [`AlgorithmError::NotStronglyConnected`]
    pub fn is_not_strongly_connected(&self) -> bool {
        matches!(self, Self::Algorithm(e) if e.is_not_strongly_connected())
    }
}

pub type Result<T, E = GraphError> = std::result::Result<T, E>;
