//! CLI module - argument parsing, front ends and prompts

pub mod args;
pub mod batch;
pub mod clipboard;
pub mod oneshot;
pub mod prompts;
pub mod session;

pub use args::{Cli, Commands};
pub use batch::{run_batch, BatchConfig};
pub use oneshot::{run_oneshot, OneShotConfig};
pub use prompts::*;
pub use session::run_session;
