mod classifier;
mod client;
mod connectivity;
mod connector;
mod metrics;
mod node;
mod pool;

pub use classifier::*;
pub use client::*;
pub use connector::*;
pub use metrics::*;

use node::fan_out;
