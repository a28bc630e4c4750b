use std::cmp;
use std::fmt;

use bytes::Bytes;

/// Owned edge label stored on a node.
///
/// Backed by `Bytes`, so splitting a label hands out two views of the same
/// allocation instead of copying.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyPrefix {
    prefix: Bytes,
}

impl KeyPrefix {
    pub fn new(key_bytes: &[u8]) -> KeyPrefix {
        KeyPrefix {
            prefix: Bytes::from(key_bytes.to_vec()),
        }
    }

    pub fn empty() -> KeyPrefix {
        KeyPrefix {
            prefix: Bytes::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.prefix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.prefix
    }

    pub fn first(&self) -> Option<u8> {
        self.prefix.first().cloned()
    }

    /// Keeps `[..idx]` in place and returns `[idx..]`.
    pub fn split_off(&mut self, idx: usize) -> KeyPrefix {
        KeyPrefix {
            prefix: self.prefix.split_off(idx),
        }
    }

    pub fn match_with<'a>(&self, probe: KeyProbe<'a>) -> KeyMatchResult<'a> {
        let common = common_prefix_len(self.bytes(), probe.bytes());

        if common == self.len() {
            if probe.len() > self.len() {
                let (_, right) = probe.split_at(common);
                KeyMatchResult::Partial(right)
            } else {
                debug_assert_eq!(probe.len(), self.len());
                KeyMatchResult::Complete
            }
        } else if common == probe.len() {
            KeyMatchResult::LongerPrefix(common)
        } else {
            let (_, right) = probe.split_at(common);
            KeyMatchResult::Incomplete(common, right)
        }
    }
}

impl<'a> From<KeyProbe<'a>> for KeyPrefix {
    fn from(src: KeyProbe<'a>) -> Self {
        KeyPrefix::new(src.bytes())
    }
}

impl fmt::Display for KeyPrefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.bytes()))
    }
}

/// Length of the longest run of equal leading bytes.
pub fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    let max_len = cmp::min(a.len(), b.len());

    a.iter()
        .zip(b.iter())
        .position(|(x, y)| x != y)
        .unwrap_or(max_len)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyMatchResult<'a> {
    // Occurs when the prefix matches the start of the probe completely,
    // and the prefix is also shorter than the probe
    // Returns the end of the probe that did not match
    // Example
    // Prefix: "ABC"
    // Probe:  "ABCDEF"
    // The result should be Partial("DEF")
    Partial(KeyProbe<'a>),

    // The prefix and the probe are equal
    // Example
    // Prefix: "ABC"
    // Probe:  "ABC"
    // The result should be Complete
    Complete,

    // The probe is used up part way through the prefix.
    // Returns the index at which to split the prefix
    // Example
    // Prefix: "ABCDEF"
    // Probe:  "ABC"
    // The result should be LongerPrefix(3)
    LongerPrefix(usize),

    // Prefix and probe diverge at some byte.
    // Returns the index to split the prefix at and the rest of the probe
    // Example 1 - match diverges in the middle
    // Prefix: "ABZDEF"
    // Probe:  "ABCDEF"
    // The result should be Incomplete(2, "CDEF")
    //
    // Example 2 - no portion matches at all
    // Prefix: "ABCDEF"
    // Probe:  "GHIJKL"
    // The result should be Incomplete(0, "GHIJKL")
    Incomplete(usize, KeyProbe<'a>),
}

/// Borrowed, not yet consumed tail of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyProbe<'a> {
    key_portion: &'a [u8],
}

impl<'a> KeyProbe<'a> {
    pub fn new<K>(key: &'a K) -> Self
    where
        K: TreeKey + ?Sized,
    {
        KeyProbe {
            key_portion: key.as_bytes(),
        }
    }

    pub fn empty() -> Self {
        KeyProbe { key_portion: &[] }
    }

    pub fn len(&self) -> usize {
        self.key_portion.len()
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.key_portion
    }

    pub fn first(&self) -> Option<u8> {
        self.key_portion.first().cloned()
    }

    pub fn starts_with(&self, prefix: &KeyPrefix) -> bool {
        self.key_portion.starts_with(prefix.bytes())
    }

    pub fn split_at(self, idx: usize) -> (KeyProbe<'a>, KeyProbe<'a>) {
        let (left_bytes, right_bytes) = self.key_portion.split_at(idx);
        let left = KeyProbe {
            key_portion: left_bytes,
        };
        let right = KeyProbe {
            key_portion: right_bytes,
        };

        (left, right)
    }
}

impl<'a> fmt::Display for KeyProbe<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.key_portion))
    }
}

pub trait TreeKey {
    fn as_bytes(&self) -> &[u8];
}

impl<T> TreeKey for T
where
    T: AsRef<[u8]> + ?Sized,
{
    fn as_bytes(&self) -> &[u8] {
        self.as_ref()
    }
}
