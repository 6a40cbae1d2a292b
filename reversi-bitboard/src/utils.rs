//! Miscellaneous project utilities.

use crate::EDGE_LENGTH;
use std::fmt::{self, Formatter};

/// Lay out one character per square as a labelled grid, top row first.
/// `squares` must yield exactly 64 items.
pub fn format_grid<T: Iterator<Item = char>>(squares: T, f: &mut Formatter) -> fmt::Result {
    write!(f, "   A B C D E F G H")?;

    let mut count = 0;
    for square in squares {
        if count % EDGE_LENGTH == 0 {
            write!(f, "\n {} ", count / EDGE_LENGTH + 1)?;
        }
        write!(f, "{} ", square)?;
        count += 1;
    }

    if count == EDGE_LENGTH * EDGE_LENGTH {
        Ok(())
    } else {
        Err(fmt::Error)
    }
}
