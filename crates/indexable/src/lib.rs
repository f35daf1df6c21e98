#![doc = include_str!("../README.md")]

#[cfg(feature = "derive")]
pub use indexable_derive::Indexer;

mod error;
mod iterators;
mod key;
mod length;
mod options;
mod traits;
mod variants;
mod wrap;

pub use error::*;
pub use iterators::*;
pub use key::*;
pub use length::*;
pub use options::*;
pub use traits::*;
pub use variants::*;
pub use wrap::*;
