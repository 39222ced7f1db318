use rand::Rng;

/// Cache of presampled index sets.
///
/// Holds `size` entries, each `sample_len` indices drawn uniformly from
/// `[0, sample_len)` with replacement. Entries are stored back to back in one
/// buffer and generated entry by entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexPool {
    indices: Vec<usize>,
    size: usize,
    sample_len: usize,
}

impl IndexPool {
    /// Draws `size × sample_len` indices from `rng`.
    pub fn generate<R: Rng + ?Sized>(size: usize, sample_len: usize, rng: &mut R) -> Self {
        let indices = (0..size * sample_len)
            .map(|_| rng.gen_range(0..sample_len))
            .collect();

        tracing::trace!(size, sample_len, "generated index pool");

        Self {
            indices,
            size,
            sample_len,
        }
    }

    /// Number of entries.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Length of every entry (the observation count the pool was built for).
    #[inline]
    pub fn sample_len(&self) -> usize {
        self.sample_len
    }

    /// `true` when the pool holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Entry `k`, or `None` past the end.
    pub fn entry(&self, k: usize) -> Option<&[usize]> {
        (k < self.size).then(|| self.slot(k))
    }

    /// Picks one entry uniformly at random.
    ///
    /// # Panics
    /// Panics if the pool is empty.
    #[inline]
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &[usize] {
        self.slot(rng.gen_range(0..self.size))
    }

    /// Iterates entries in generation order.
    pub fn iter(&self) -> impl Iterator<Item = &[usize]> + '_ {
        (0..self.size).map(move |k| self.slot(k))
    }

    #[inline]
    fn slot(&self, k: usize) -> &[usize] {
        let n = self.sample_len;
        &self.indices[k * n..(k + 1) * n]
    }
}
