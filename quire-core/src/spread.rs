//! Page addressing shared by the editor and the reader.
//!
//! Index 0 is the cover and is always shown alone. Content pages are paired
//! into spreads `(1, 2)`, `(3, 4)`, ... so every spread starts on an odd index.
//! All cover/spread arithmetic lives here.

/// Index of the cover page
pub const COVER_INDEX: usize = 0;

/// Index of the first content page, the left page of the first spread
pub const FIRST_SPREAD_LEFT: usize = 1;

/// Whether `index` addresses the cover
pub fn is_cover(index: usize) -> bool {
    index == COVER_INDEX
}

/// Left index of the spread containing page `index`, or `None` for the cover
pub fn spread_left_for(index: usize) -> Option<usize> {
    match index {
        COVER_INDEX => None,
        i if i % 2 == 1 => Some(i),
        i => Some(i - 1),
    }
}

/// Whether `left` is a valid spread start for a book of `len` pages
pub fn is_spread_left(left: usize, len: usize) -> bool {
    left % 2 == 1 && left < len
}

/// Number of spreads in a book of `len` pages
pub fn spread_count(len: usize) -> usize {
    len / 2
}

/// Right-hand partner of the spread starting at `left`, if the book has one
pub fn right_of(left: usize, len: usize) -> Option<usize> {
    let right = left + 1;
    (right < len).then_some(right)
}
