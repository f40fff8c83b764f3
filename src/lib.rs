extern crate itertools;
extern crate num_integer;
extern crate num_traits;

pub mod structure;
pub mod parser;
pub mod normalize;
pub mod solve;
pub mod tools;


pub use solve::solve;
pub use structure::{Error, SolutionCount, SolutionReport, Solutions};
