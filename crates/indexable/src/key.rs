/// How string keys are classified as indices.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum KeyMode {
    /// Only canonical non-negative decimal integers are indices: `"0"`, `"42"`.
    ///
    /// Signs, whitespace, leading zeros and fractions make the key a name.
    #[default]
    Strict,
    /// Integer-prefix parsing: surrounding whitespace and a leading `+` are
    /// ignored, leading zeros are allowed and a `.digits` fraction is truncated,
    /// so `" 007.9 "` is index 7.
    ///
    /// Negative numbers stay names.
    Lenient,
}

/// A property key after classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKey<'a> {
    Index(usize),
    Name(&'a str),
}

impl<'a> PropertyKey<'a> {
    pub fn parse(key: &'a str, mode: KeyMode) -> Self {
        let index = match mode {
            KeyMode::Strict => parse_strict(key),
            KeyMode::Lenient => parse_lenient(key),
        };
        index.map_or(Self::Name(key), Self::Index)
    }

    #[inline]
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Name(_) => None,
        }
    }
}

fn parse_strict(key: &str) -> Option<usize> {
    let bytes = key.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    key.parse().ok()
}

fn parse_lenient(key: &str) -> Option<usize> {
    let key = key.trim();
    let key = key.strip_prefix('+').unwrap_or(key);
    let (int, frac) = key.split_once('.').unwrap_or((key, ""));
    if int.is_empty() || !int.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    int.parse().ok()
}
