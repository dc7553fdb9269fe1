use tracing::debug;

use crate::config::FractalConfig;
use crate::field::Field;

/// Holds at most one computed [`Field`], keyed by the configuration it was
/// computed from.
///
/// Repeated redraws (window exposure, selection-box movement) hit the cache;
/// only a genuine configuration change or an explicit
/// [`invalidate`](Self::invalidate) triggers recomputation. Readers never
/// observe a half-written field: the entry is replaced wholesale.
#[derive(Debug, Default)]
pub struct FieldCache {
    entry: Option<(FractalConfig, Field)>,
    computes: u64,
}

impl FieldCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached field for `config`, computing it first if the cache
    /// is empty or was built from a different configuration.
    pub fn get_or_compute(&mut self, config: &FractalConfig) -> &Field {
        let hit = matches!(&self.entry, Some((cached, _)) if cached == config);

        if !hit {
            debug!(computes = self.computes + 1, "Field cache miss, computing");
            self.computes += 1;
            let (_, field) = self.entry.insert((*config, Field::compute(config)));
            return field;
        }

        match &self.entry {
            Some((_, field)) => field,
            // `hit` above proved the entry exists.
            None => unreachable!(),
        }
    }

    /// Drop the cached field, forcing the next lookup to recompute.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Whether a field is currently cached.
    pub fn is_populated(&self) -> bool {
        self.entry.is_some()
    }

    /// Total evaluator invocations since construction.
    pub fn computes(&self) -> u64 {
        self.computes
    }
}
