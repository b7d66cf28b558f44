pub mod shape;
pub mod types;

pub use shape::*;
pub use types::*;
