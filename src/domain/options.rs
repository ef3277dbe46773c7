/// Knobs for the batch builders. Neither affects the digests produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildOptions {
    /// Item count above which leaf hashing, aunt collection and proof
    /// checks are spread over the rayon pool.
    pub parallel_threshold: usize,
    /// Verify every generated proof against the root before returning it.
    pub self_check: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: 1024,
            self_check: true,
        }
    }
}

impl BuildOptions {
    pub fn is_parallel(&self, items: usize) -> bool {
        items > self.parallel_threshold
    }
}
