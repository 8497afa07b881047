//! Game implementations.

pub mod four_in_a_row;
