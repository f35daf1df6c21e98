use std::{any::type_name, fmt};

use log::debug;

use crate::{Indexable, Indexer, WrapOptions};

/// A boxed constructor producing `T` from arguments `A`.
pub type Constructor<T, A = ()> = Box<dyn Fn(A) -> T>;

/// A wrapped constructor: every instance it builds comes out already wrapped.
///
/// Instances are independent. Each one resolves its own starting length
/// (the class options, then the instance's own length, then 0).
pub struct Class<T: Indexer, A = ()> {
    ctor: Constructor<T, A>,
    options: WrapOptions,
}

impl<T: Indexer, A> Class<T, A> {
    pub fn new<F>(ctor: F) -> Self
    where
        F: Fn(A) -> T + 'static,
    {
        Self::from_boxed(Box::new(ctor), WrapOptions::default())
    }

    pub fn from_boxed(ctor: Constructor<T, A>, options: WrapOptions) -> Self {
        debug!("Wrapping constructor of {}", type_name::<T>());
        Self { ctor, options }
    }

    pub fn with_options(mut self, options: WrapOptions) -> Self {
        self.options = options;
        self
    }

    #[inline]
    pub fn options(&self) -> WrapOptions {
        self.options
    }

    /// Runs the constructor and wraps the fresh instance.
    pub fn construct(&self, args: A) -> Indexable<T> {
        let instance = (self.ctor)(args);
        debug!("Constructed {}", type_name::<T>());
        Indexable::with_options(instance, self.options)
    }
}

impl<T: Indexer, A> fmt::Debug for Class<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("type", &type_name::<T>())
            .field("options", &self.options)
            .finish()
    }
}
