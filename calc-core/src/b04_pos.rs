use std::fmt;
use std::ops::{Add, Sub};

/// Zero-based offset into the input, counted in characters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct CharPos(pub u32);

impl From<CharPos> for usize {
    fn from(x: CharPos) -> Self {
        x.0 as usize
    }
}

impl Sub for CharPos {
    type Output = CharLen;

    #[inline(always)]
    fn sub(self, rhs: CharPos) -> CharLen {
        CharLen(self.0.saturating_sub(rhs.0))
    }
}

impl Add<CharLen> for CharPos {
    type Output = CharPos;

    #[inline(always)]
    fn add(self, rhs: CharLen) -> CharPos {
        CharPos(self.0 + rhs.0)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct CharLen(pub u32);

impl From<CharLen> for u32 {
    fn from(x: CharLen) -> Self {
        x.0
    }
}

impl fmt::Display for CharPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 0-indexed positions.
        write!(f, "{}", self.0)
    }
}
