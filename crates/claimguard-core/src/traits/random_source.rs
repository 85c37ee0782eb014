/// Injectable pseudo-random source for node assignment and score noise.
pub trait IRandomSource: Send {
    /// Uniform sample in `[low, high]`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// Uniform index in `0..len`. Callers guarantee `len > 0`.
    fn choose_index(&mut self, len: usize) -> usize;
}

/// Pick one element uniformly; `None` for an empty slice.
pub fn choose<'a, T>(rng: &mut dyn IRandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.choose_index(items.len()))
}
