use std::{
    any::{Any, type_name},
    fmt,
};

use crate::{Class, Constructor, Error, Indexable, Indexer, Result, WrapOptions};

/// Makes `target` indexable and array-like.
///
/// Only types implementing [`Indexer`] can be wrapped, so anything else is
/// rejected at compile time:
///
/// ```compile_fail
/// let wrapped = indexable::wrap(42);
/// ```
pub fn wrap<T: Indexer>(target: T) -> Indexable<T> {
    Indexable::new(target)
}

pub fn wrap_with<T: Indexer>(target: T, options: WrapOptions) -> Indexable<T> {
    Indexable::with_options(target, options)
}

/// Wraps a constructor so that every instance it builds is indexable.
///
/// ```
/// # use std::convert::Infallible;
/// # use indexable::{Accessors, Indexer, wrap_class};
/// struct Letters(Vec<char>);
///
/// impl Indexer for Letters {
///     type Value = char;
///     type Error = Infallible;
///
///     fn indexer(&self) -> Result<Accessors<Self>, Infallible> {
///         Ok(Accessors::getter(|l, i| Ok(l.0.get(i).copied())))
///     }
/// }
///
/// let class = wrap_class(|word: &'static str| Letters(word.chars().collect()));
/// let hi = class.construct("hi");
/// assert_eq!(hi.get(1), Ok(Some('i')));
/// assert_eq!(hi.to_vec(), Ok(vec![Some('h'), Some('i')]));
/// ```
pub fn wrap_class<T, A, F>(ctor: F) -> Class<T, A>
where
    T: Indexer,
    F: Fn(A) -> T + 'static,
{
    Class::new(ctor)
}

pub fn wrap_class_with<T, A, F>(ctor: F, options: WrapOptions) -> Class<T, A>
where
    T: Indexer,
    F: Fn(A) -> T + 'static,
{
    Class::from_boxed(Box::new(ctor), options)
}

/// Outcome of [`wrap_any`], matching the kind of the argument.
pub enum Wrapped<T: Indexer, A = ()> {
    Object(Indexable<T>),
    Class(Class<T, A>),
}

impl<T: Indexer, A> Wrapped<T, A> {
    pub fn into_object(self) -> Option<Indexable<T>> {
        match self {
            Self::Object(object) => Some(object),
            Self::Class(_) => None,
        }
    }

    pub fn into_class(self) -> Option<Class<T, A>> {
        match self {
            Self::Object(_) => None,
            Self::Class(class) => Some(class),
        }
    }
}

impl<T, A> fmt::Debug for Wrapped<T, A>
where
    T: Indexer + fmt::Debug,
    T::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object(object) => f.debug_tuple("Object").field(object).finish(),
            Self::Class(class) => f.debug_tuple("Class").field(class).finish(),
        }
    }
}

/// Wraps a value whose kind is only known at runtime.
///
/// A boxed `T` is wrapped as an object and a boxed [`Constructor<T, A>`] as a
/// class. Any other kind fails with [`Error::InvalidArgumentKind`] and nothing
/// is wrapped.
pub fn wrap_any<T, A>(value: Box<dyn Any>) -> Result<Wrapped<T, A>>
where
    T: Indexer + 'static,
    A: 'static,
{
    wrap_any_with(value, WrapOptions::default())
}

pub fn wrap_any_with<T, A>(value: Box<dyn Any>, options: WrapOptions) -> Result<Wrapped<T, A>>
where
    T: Indexer + 'static,
    A: 'static,
{
    let value = match value.downcast::<T>() {
        Ok(target) => return Ok(Wrapped::Object(wrap_with(*target, options))),
        Err(value) => value,
    };
    match value.downcast::<Constructor<T, A>>() {
        Ok(ctor) => Ok(Wrapped::Class(Class::from_boxed(*ctor, options))),
        Err(_) => Err(Error::InvalidArgumentKind {
            expected: type_name::<T>(),
        }),
    }
}
