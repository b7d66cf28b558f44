pub mod artifact;
pub mod canonical;
pub mod conversion;

pub use artifact::*;
pub use canonical::*;
pub use conversion::*;
