//! Generated unique node names.
//!
//! Every agent, behavior, and goal is keyed by a generated name allocated
//! before any of its attributes are written, so "name exists" is a reliable
//! created-or-not check.  Names are drawn from a seeded `SmallRng`: the same
//! seed yields the same sequence of names, which keeps editing sessions and
//! tests reproducible.

use rand::distributions::Alphanumeric;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;

/// Issues opaque alphanumeric names that never repeat within one generator.
pub struct NameGenerator {
    rng:    SmallRng,
    length: usize,
    issued: FxHashSet<String>,
}

impl NameGenerator {
    /// `length` is clamped to at least 4 characters.
    pub fn new(seed: u64, length: usize) -> Self {
        Self {
            rng:    SmallRng::seed_from_u64(seed),
            length: length.max(4),
            issued: FxHashSet::default(),
        }
    }

    /// Draw a name not issued (or reserved) before.
    pub fn next_name(&mut self) -> String {
        loop {
            let candidate: String = (&mut self.rng)
                .sample_iter(&Alphanumeric)
                .take(self.length)
                .map(char::from)
                .collect();
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
        }
    }

    /// Mark an existing name (e.g. from a loaded document) as taken.
    ///
    /// Returns `false` if the name was already taken.
    pub fn reserve(&mut self, name: &str) -> bool {
        self.issued.insert(name.to_owned())
    }

    pub fn is_taken(&self, name: &str) -> bool {
        self.issued.contains(name)
    }

    /// Number of names issued or reserved so far.
    pub fn len(&self) -> usize {
        self.issued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }
}
