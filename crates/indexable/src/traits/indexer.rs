use std::fmt;

/// Reads the value at `index` from the target; `Ok(None)` is the absent value.
pub type Getter<T> =
    fn(&T, usize) -> Result<Option<<T as Indexer>::Value>, <T as Indexer>::Error>;

/// Writes `value` at `index` into the target.
pub type Setter<T> = fn(&mut T, usize, <T as Indexer>::Value) -> Result<(), <T as Indexer>::Error>;

/// Capability marker for types that back integer-indexed access themselves.
///
/// The wrapper calls [`indexer`](Indexer::indexer) on every indexed access and
/// routes the access to whichever half of the returned [`Accessors`] is present.
/// A missing half falls through to the wrapper's raw property store.
///
/// # Example
///
/// ```
/// use std::convert::Infallible;
///
/// use indexable::{Accessors, Indexer, wrap};
///
/// struct Pair {
///     a: String,
///     b: String,
/// }
///
/// impl Indexer for Pair {
///     type Value = String;
///     type Error = Infallible;
///
///     fn indexer(&self) -> Result<Accessors<Self>, Infallible> {
///         Ok(Accessors::getter(|pair, index| {
///             Ok(match index {
///                 0 => Some(pair.a.clone()),
///                 1 => Some(pair.b.clone()),
///                 _ => None,
///             })
///         }))
///     }
/// }
///
/// let pair = wrap(Pair { a: "hello".into(), b: "world".into() });
/// assert_eq!(pair.get(1), Ok(Some("world".to_string())));
/// assert_eq!(pair.len(), 2);
/// ```
pub trait Indexer {
    /// Element type produced by reads and consumed by writes.
    type Value;
    /// Failure of the capability method or of an accessor, returned unchanged.
    type Error;

    /// Produces the accessor pair for a single access.
    fn indexer(&self) -> Result<Accessors<Self>, Self::Error>;

    /// Length the target already owns, if any. The wrapper starts from 0 otherwise.
    #[inline]
    fn length(&self) -> Option<usize> {
        None
    }
}

/// The `{get, set}` pair returned by [`Indexer::indexer`]. Both halves are optional.
pub struct Accessors<T: Indexer + ?Sized> {
    pub get: Option<Getter<T>>,
    pub set: Option<Setter<T>>,
}

impl<T: Indexer + ?Sized> Accessors<T> {
    pub fn new(get: Getter<T>, set: Setter<T>) -> Self {
        Self {
            get: Some(get),
            set: Some(set),
        }
    }

    pub fn getter(get: Getter<T>) -> Self {
        Self {
            get: Some(get),
            set: None,
        }
    }

    pub fn setter(set: Setter<T>) -> Self {
        Self {
            get: None,
            set: Some(set),
        }
    }

    /// No accessors: every indexed access falls through.
    pub fn none() -> Self {
        Self {
            get: None,
            set: None,
        }
    }
}

impl<T: Indexer + ?Sized> Clone for Accessors<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Indexer + ?Sized> Copy for Accessors<T> {}

impl<T: Indexer + ?Sized> Default for Accessors<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T: Indexer + ?Sized> fmt::Debug for Accessors<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessors")
            .field("get", &self.get.is_some())
            .field("set", &self.set.is_some())
            .finish()
    }
}
