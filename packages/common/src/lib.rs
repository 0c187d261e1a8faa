pub mod artifact;
pub mod error;
pub mod escape;
pub mod result;

pub use artifact::*;
pub use error::*;
pub use escape::*;
pub use result::*;
