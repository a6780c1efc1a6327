//! Query classification against a probe table.
//!
//! Each query is assigned to the first reference, in probe-table load order,
//! whose probe is a substring of the query, or to `unmatched` when none is.
//! Outcomes are counted in the order they are first seen.
//!
//! ## Example
//!
//! ```rust
//! use ref_probe::classify::engine::SequenceClassifier;
//! use ref_probe::core::reference::ReferenceSequence;
//! use ref_probe::probes::table::ProbeTable;
//!
//! let table: ProbeTable = vec![("A", "AAC"), ("B", "GGG")].into_iter().collect();
//! let queries = vec![
//!     Ok::<_, std::convert::Infallible>(ReferenceSequence::new("q1", "TTAAACCCTT")),
//!     Ok(ReferenceSequence::new("q2", "TTTTTT")),
//! ];
//!
//! let counts = SequenceClassifier::new(&table).classify_stream(queries).unwrap();
//! assert_eq!(counts.get("A"), 1);
//! assert_eq!(counts.unmatched(), 1);
//! ```

pub mod counts;
pub mod engine;
