pub mod allowance;
pub mod config;
pub mod holder;

pub use allowance::*;
pub use config::*;
pub use holder::*;
