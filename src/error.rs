use std::fmt;

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Call site that rejected a domain, used to pick the error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainContext {
    Cartesian,
    Polar,
    Log,
}

impl fmt::Display for DomainContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cartesian => f.write_str("Invalid domain bounds"),
            Self::Polar => f.write_str("Invalid polar axis domain bounds"),
            Self::Log => f.write_str("log scale domain must be > 0"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("{context}")]
    InvalidDomain { context: DomainContext },

    #[error("{0}")]
    Configuration(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl ChartError {
    #[must_use]
    pub(crate) fn invalid_domain(context: DomainContext) -> Self {
        Self::InvalidDomain { context }
    }
}
