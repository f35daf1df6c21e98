use crate::KeyMode;

/// Options for wrapping a target or a constructor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WrapOptions {
    /// Initial length. Takes precedence over [`Indexer::length`](crate::Indexer::length).
    pub length: Option<usize>,
    /// How string keys passed to `get_key`/`set_key` are classified.
    pub key_mode: KeyMode,
}

impl WrapOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_key_mode(mut self, key_mode: KeyMode) -> Self {
        self.key_mode = key_mode;
        self
    }
}

impl From<KeyMode> for WrapOptions {
    fn from(key_mode: KeyMode) -> Self {
        Self::new().with_key_mode(key_mode)
    }
}
