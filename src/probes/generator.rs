use serde::Serialize;

use crate::core::reference::ReferenceSet;
use crate::core::types::KmerRange;
use crate::core::window::TruncationWindow;
use crate::events::{NoopObserver, PipelineObserver};
use crate::probes::index::KmerIndex;
use crate::probes::selection::{partition, select_unique_probes, AmbiguousSet};
use crate::probes::table::ProbeTable;

/// Configuration for probe generation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GeneratorConfig {
    /// Candidate k-mer lengths
    pub kmers: KmerRange,
    /// Region of each reference searched for candidates
    pub window: TruncationWindow,
}

/// Counts describing one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationSummary {
    pub references: usize,
    pub with_probe: usize,
    pub ambiguous: usize,
    pub distinct_kmers: usize,
    pub kmin: usize,
    pub kmax: usize,
    pub window_start: i64,
    pub window_end: i64,
}

/// Output of a generation run
#[derive(Debug)]
pub struct GenerationResult<'a> {
    pub probes: ProbeTable,
    pub ambiguous: AmbiguousSet<'a>,
    pub summary: GenerationSummary,
}

/// Derives a unique probe for each reference where one exists
pub struct ProbeGenerator<'o> {
    config: GeneratorConfig,
    observer: &'o dyn PipelineObserver,
}

impl ProbeGenerator<'static> {
    /// Create a generator that reports nothing
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            observer: &NoopObserver,
        }
    }
}

impl<'o> ProbeGenerator<'o> {
    /// Create a generator that reports progress to `observer`
    pub fn with_observer(config: GeneratorConfig, observer: &'o dyn PipelineObserver) -> Self {
        Self { config, observer }
    }

    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Index all references, select probes, and split off the ambiguous ones.
    ///
    /// Uniqueness is global, so every reference must be loaded before this runs.
    pub fn run<'a>(&self, references: &'a ReferenceSet) -> GenerationResult<'a> {
        let index = KmerIndex::build(
            references.as_slice(),
            self.config.window,
            self.config.kmers,
            self.observer,
        );
        let probes = select_unique_probes(&index);
        let ambiguous = partition(references.as_slice(), &probes);

        for entry in &probes {
            self.observer.probe_selected(&entry.id, &entry.probe);
        }
        for reference in ambiguous.iter() {
            self.observer.reference_ambiguous(&reference.id);
        }

        let summary = GenerationSummary {
            references: references.len(),
            with_probe: probes.len(),
            ambiguous: ambiguous.len(),
            distinct_kmers: index.len(),
            kmin: self.config.kmers.kmin,
            kmax: self.config.kmers.kmax,
            window_start: self.config.window.start,
            window_end: self.config.window.end,
        };

        GenerationResult {
            probes,
            ambiguous,
            summary,
        }
    }
}
