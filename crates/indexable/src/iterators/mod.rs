mod iter;

pub use iter::*;
