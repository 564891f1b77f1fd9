//! CLI command handlers. Each command is in its own file.

mod fetch;
mod load;
mod output;
mod resolve;

pub use fetch::run_fetch;
pub use load::run_load;
pub use resolve::run_resolve;
