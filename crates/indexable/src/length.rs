use std::cell::Cell;

/// Synthetic `length` of a wrapped target.
///
/// Wraps a `Cell<usize>` so indexed reads, which only borrow the wrapper,
/// can still grow it. Single-threaded by construction (`!Sync`).
#[derive(Debug, Clone, Default)]
pub struct Length(Cell<usize>);

impl Length {
    /// Creates a new length counter.
    pub fn new(val: usize) -> Self {
        Self(Cell::new(val))
    }

    /// Gets the current length.
    #[inline(always)]
    pub fn get(&self) -> usize {
        self.0.get()
    }

    /// Sets the length.
    #[inline]
    pub fn set(&self, val: usize) {
        self.0.set(val);
    }

    /// Grows the length to `index + 1` if `index` is not already covered.
    ///
    /// Returns `true` when the length changed.
    #[inline]
    pub fn extend_to(&self, index: usize) -> bool {
        if index < self.get() {
            return false;
        }
        self.set(index.saturating_add(1));
        true
    }
}

impl From<usize> for Length {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<Length> for usize {
    fn from(value: Length) -> Self {
        value.get()
    }
}
