mod algorithm;
mod cell;
mod grid;

pub use algorithm::Algorithm;
pub use cell::Cell;
pub use grid::{Grid, NEIGHBOR_OFFSETS};
