mod action;
mod endpoint;
mod error;
mod outcome;
mod parameter;
mod result;

pub use action::*;
pub use endpoint::*;
pub use error::*;
pub use outcome::*;
pub use parameter::*;
pub use result::*;
