pub mod axis;
pub mod grid;
pub mod opts;
