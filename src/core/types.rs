use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Label used for queries that matched no probe
pub const UNMATCHED: &str = "unmatched";

/// Default smallest k-mer length considered for probes
pub const DEFAULT_KMIN: usize = 15;

/// Default exclusive upper bound on k-mer length
pub const DEFAULT_KMAX: usize = 40;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid k-mer range [{kmin}, {kmax}): kmin must be at least 1 and smaller than kmax")]
    InvalidKmerRange { kmin: usize, kmax: usize },
}

/// Identifier of a reference sequence (the verbatim FASTA header)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReferenceId(pub String);

impl ReferenceId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ReferenceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ReferenceId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Half-open range `[kmin, kmax)` of candidate k-mer lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KmerRange {
    pub kmin: usize,
    pub kmax: usize,
}

impl Default for KmerRange {
    fn default() -> Self {
        Self {
            kmin: DEFAULT_KMIN,
            kmax: DEFAULT_KMAX,
        }
    }
}

impl KmerRange {
    /// Build a validated range.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidKmerRange` if `kmin` is zero or the range is empty.
    pub fn new(kmin: usize, kmax: usize) -> Result<Self, ConfigError> {
        if kmin == 0 || kmin >= kmax {
            return Err(ConfigError::InvalidKmerRange { kmin, kmax });
        }
        Ok(Self { kmin, kmax })
    }

    /// Iterate over every k in the range
    pub fn lengths(&self) -> std::ops::Range<usize> {
        self.kmin..self.kmax
    }
}

/// Outcome of classifying one query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<'a> {
    /// First probe (in load order) found in the query
    Matched(&'a ReferenceId),
    /// No probe is a substring of the query
    Unmatched,
}

impl Outcome<'_> {
    /// Label written to the counts table
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Matched(id) => id.as_str(),
            Self::Unmatched => UNMATCHED,
        }
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched(_))
    }
}
