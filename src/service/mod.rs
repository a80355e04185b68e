mod configuration;
mod host;
mod runner;

pub use configuration::*;
pub use host::*;
pub use runner::*;
