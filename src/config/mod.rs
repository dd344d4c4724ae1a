pub mod args;
pub mod structs;

mod r#impl;

pub use r#impl::{get_config, get_config_path, init_config};
pub use structs::*;
