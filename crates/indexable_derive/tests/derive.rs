use std::convert::Infallible;

use indexable::{Indexable, Indexer, wrap};
use pretty_assertions::assert_eq;

#[derive(Debug, Default, Indexer)]
struct Letters {
    a: Option<String>,
    b: Option<String>,
    c: Option<String>,
    d: Option<String>,
    e: Option<String>,
}

fn hello_world() -> Indexable<Letters> {
    let obj = wrap(Letters {
        a: Some("hello".into()),
        b: Some("world".into()),
        ..Default::default()
    });
    obj.get(1).unwrap();
    obj
}

fn some(s: &str) -> Option<String> {
    Some(s.to_string())
}

#[test]
fn test_derive_maps_fields_in_order() -> Result<(), Infallible> {
    let obj = hello_world();

    assert_eq!(obj.get(0)?, obj.a);
    assert_eq!(obj.get(1)?, obj.b);
    assert_eq!(obj.len(), 2);
    assert_eq!(obj.to_vec()?, vec![some("hello"), some("world")]);

    Ok(())
}

#[test]
fn test_derive_writes_store_some() -> Result<(), Infallible> {
    let mut obj = hello_world();

    obj.set(0, "hi".into())?;
    obj.set(4, "hello".into())?;

    assert_eq!(obj.a, some("hi"));
    assert_eq!(obj.e, some("hello"));
    assert_eq!(obj.get(5)?, None);
    assert_eq!(obj.len(), 6);
    assert_eq!(
        obj.to_vec()?,
        vec![some("hi"), some("world"), None, None, some("hello"), None]
    );

    Ok(())
}

#[derive(Debug, Indexer)]
struct Point {
    x: f64,
    y: f64,
    #[indexer(skip)]
    label: &'static str,
    z: f64,
}

#[test]
fn test_derive_plain_fields_and_skip() -> Result<(), Infallible> {
    let mut point = wrap(Point {
        x: 1.0,
        y: 2.0,
        label: "origin",
        z: 3.0,
    });

    assert_eq!(point.get(2)?, Some(3.0));
    assert_eq!(point.get(3)?, None);
    assert_eq!(point.len(), 4);

    point.set(1, 5.0)?;
    assert_eq!(point.y, 5.0);
    assert_eq!(point.label, "origin");

    // Past the last field: accepted, ignored, but the length grows.
    point.set(7, 9.0)?;
    assert_eq!(point.len(), 8);
    assert_eq!(point.get(7)?, None);

    Ok(())
}

#[derive(Debug, Indexer)]
#[indexer(read_only)]
struct Frozen {
    first: u8,
    second: u8,
}

#[test]
fn test_derive_read_only_falls_through_on_write() -> Result<(), Infallible> {
    let frozen = Frozen { first: 1, second: 2 };
    let accessors = frozen.indexer()?;
    assert!(accessors.get.is_some());
    assert!(accessors.set.is_none());

    let mut obj = wrap(frozen);
    obj.set(0, 42)?;
    assert_eq!(obj.first, 1);
    assert_eq!(obj.len(), 0);
    assert_eq!(obj.get(0)?, Some(1));
    assert_eq!(obj.get_key("0")?, Some(1));
    assert_eq!(obj.second, 2);

    Ok(())
}

#[derive(Debug, Indexer)]
struct Generic<T: Clone> {
    left: T,
    right: T,
}

#[test]
fn test_derive_generic_struct() -> Result<(), Infallible> {
    let obj = wrap(Generic {
        left: 'l',
        right: 'r',
    });
    obj.get(1)?;
    assert_eq!(obj.to_vec()?, vec![Some('l'), Some('r')]);

    Ok(())
}
