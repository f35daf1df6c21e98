use std::{
    any::type_name,
    collections::BTreeMap,
    fmt,
    ops::{Deref, DerefMut},
};

use log::{debug, trace};

use crate::{Indexer, Iter, KeyMode, Length, PropertyKey, WrapOptions};

/// A target augmented with integer-indexed access and a synthetic length.
///
/// Reads and writes by index are routed through the target's [`Accessors`](crate::Accessors).
/// When the relevant accessor is missing, the access falls through to a raw
/// property store owned by the wrapper, just like string-named keys do.
///
/// Everything else about the target stays reachable through `Deref`/`DerefMut`.
pub struct Indexable<T: Indexer> {
    target: T,
    length: Length,
    key_mode: KeyMode,
    raw: BTreeMap<String, T::Value>,
}

impl<T: Indexer> Indexable<T> {
    /// Wraps `target` with default options.
    pub fn new(target: T) -> Self {
        Self::with_options(target, WrapOptions::default())
    }

    /// Wraps `target`. The initial length is `options.length`, then the
    /// target's own [`Indexer::length`], then 0.
    pub fn with_options(target: T, options: WrapOptions) -> Self {
        let length = options.length.or_else(|| target.length()).unwrap_or(0);
        debug!(
            "Wrapping {} (length: {length}, keys: {:?})",
            type_name::<T>(),
            options.key_mode
        );
        Self {
            target,
            length: Length::new(length),
            key_mode: options.key_mode,
            raw: BTreeMap::new(),
        }
    }

    /// One more than the highest index read or written so far, unless set explicitly.
    #[inline]
    pub fn len(&self) -> usize {
        self.length.get()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Overwrites the length, like assigning `length` directly.
    #[inline]
    pub fn set_len(&mut self, len: usize) {
        self.length.set(len);
    }

    #[inline]
    pub fn key_mode(&self) -> KeyMode {
        self.key_mode
    }

    /// Reads the element at `index`.
    ///
    /// With a getter, the length grows to cover `index` first (even when the
    /// getter then reports nothing) and the getter's result is returned as is.
    /// Without one, the raw property named by `index` is returned.
    pub fn get(&self, index: usize) -> Result<Option<T::Value>, T::Error>
    where
        T::Value: Clone,
    {
        if let Some(get) = self.target.indexer()?.get {
            if self.length.extend_to(index) {
                trace!("get {index}: length extended to {}", self.len());
            }
            return get(&self.target, index);
        }
        trace!("get {index}: no getter, reading raw property");
        Ok(self.raw.get(&index.to_string()).cloned())
    }

    /// Writes `value` at `index`.
    ///
    /// With a setter, the length grows to cover `index` before the setter runs.
    /// Without one, `value` is stored as the raw property named by `index` and
    /// the length is left alone.
    pub fn set(&mut self, index: usize, value: T::Value) -> Result<(), T::Error> {
        if let Some(set) = self.target.indexer()?.set {
            if self.length.extend_to(index) {
                trace!("set {index}: length extended to {}", self.len());
            }
            return set(&mut self.target, index, value);
        }
        trace!("set {index}: no setter, writing raw property");
        self.raw.insert(index.to_string(), value);
        Ok(())
    }

    /// Reads by string key. Numeric keys, as classified by the key mode, take
    /// the indexed path; other keys read the raw property store.
    ///
    /// The synthetic length is not a property: `get_key("length")` reads the
    /// raw store like any other name, so use [`len`](Self::len) and
    /// [`set_len`](Self::set_len) for it.
    pub fn get_key(&self, key: &str) -> Result<Option<T::Value>, T::Error>
    where
        T::Value: Clone,
    {
        match PropertyKey::parse(key, self.key_mode) {
            PropertyKey::Index(index) => self.get(index),
            PropertyKey::Name(name) => Ok(self.raw.get(name).cloned()),
        }
    }

    /// Writes by string key. See [`get_key`](Self::get_key).
    pub fn set_key(&mut self, key: &str, value: T::Value) -> Result<(), T::Error> {
        match PropertyKey::parse(key, self.key_mode) {
            PropertyKey::Index(index) => self.set(index, value),
            PropertyKey::Name(name) => {
                self.raw.insert(name.to_owned(), value);
                Ok(())
            }
        }
    }

    /// Lazily yields the elements at `0..len()`, with `len()` taken now.
    ///
    /// Every call starts a fresh traversal.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T>
    where
        T::Value: Clone,
    {
        Iter::new(self)
    }

    /// Collects `0..len()` in index order, stopping at the first error.
    pub fn to_vec(&self) -> Result<Vec<Option<T::Value>>, T::Error>
    where
        T::Value: Clone,
    {
        self.iter().collect()
    }

    #[inline]
    pub fn target(&self) -> &T {
        &self.target
    }

    #[inline]
    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    /// Unwraps the target. Raw properties and the length are dropped.
    pub fn into_inner(self) -> T {
        self.target
    }
}

impl<T: Indexer> Deref for Indexable<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.target
    }
}

impl<T: Indexer> DerefMut for Indexable<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.target
    }
}

impl<'a, T> IntoIterator for &'a Indexable<T>
where
    T: Indexer,
    T::Value: Clone,
{
    type Item = Result<Option<T::Value>, T::Error>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> fmt::Debug for Indexable<T>
where
    T: Indexer + fmt::Debug,
    T::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Indexable")
            .field("target", &self.target)
            .field("length", &self.len())
            .field("key_mode", &self.key_mode)
            .field("raw", &self.raw)
            .finish()
    }
}
