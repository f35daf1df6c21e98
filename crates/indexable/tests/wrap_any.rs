use std::{any::Any, convert::Infallible};

use indexable::{
    Accessors, Constructor, Error, Indexer, KeyMode, WrapOptions, Wrapped, wrap_any, wrap_any_with,
};

#[derive(Debug, PartialEq)]
struct Digits(u64);

impl Indexer for Digits {
    type Value = u8;
    type Error = Infallible;

    fn indexer(&self) -> Result<Accessors<Self>, Infallible> {
        Ok(Accessors::getter(|d, i| {
            let digits = d.0.to_string();
            Ok(digits.as_bytes().get(i).map(|b| b - b'0'))
        }))
    }

    fn length(&self) -> Option<usize> {
        Some(self.0.to_string().len())
    }
}

#[test]
fn test_object_kind() -> indexable::Result<()> {
    let value: Box<dyn Any> = Box::new(Digits(907));
    let obj = wrap_any::<Digits, ()>(value)?
        .into_object()
        .expect("an object");

    assert_eq!(obj.len(), 3);
    assert_eq!(obj.to_vec(), Ok(vec![Some(9), Some(0), Some(7)]));

    Ok(())
}

#[test]
fn test_constructor_kind() -> indexable::Result<()> {
    let ctor: Constructor<Digits, u64> = Box::new(Digits);
    let value: Box<dyn Any> = Box::new(ctor);

    let options = WrapOptions::new().with_key_mode(KeyMode::Lenient);
    let class = wrap_any_with::<Digits, u64>(value, options)?
        .into_class()
        .expect("a class");
    assert_eq!(class.options(), options);

    let obj = class.construct(42);
    assert_eq!(obj.get_key("+1"), Ok(Some(2)));
    assert_eq!(obj.key_mode(), KeyMode::Lenient);

    Ok(())
}

#[test]
fn test_invalid_kind() {
    let value: Box<dyn Any> = Box::new(42_i32);
    let err = wrap_any::<Digits, ()>(value).unwrap_err();
    assert!(
        matches!(&err, Error::InvalidArgumentKind { expected } if expected.ends_with("Digits"))
    );
    assert!(err.to_string().contains("Digits"));

    // A constructor with the wrong argument type is another kind too.
    let ctor: Constructor<Digits, u64> = Box::new(Digits);
    let value: Box<dyn Any> = Box::new(ctor);
    assert!(matches!(
        wrap_any::<Digits, ()>(value),
        Err(Error::InvalidArgumentKind { .. })
    ));
}

#[test]
fn test_wrapped_debug() -> indexable::Result<()> {
    let value: Box<dyn Any> = Box::new(Digits(1));
    let wrapped: Wrapped<Digits> = wrap_any(value)?;
    assert!(format!("{wrapped:?}").starts_with("Object(Indexable"));
    Ok(())
}
