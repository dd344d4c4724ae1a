pub mod demo;
pub mod startup;

pub use demo::run_demo;
pub use startup::{StartupContext, prepare_cache};
