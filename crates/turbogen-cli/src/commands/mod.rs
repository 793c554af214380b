//! Command handlers. One module per subcommand; `cli` owns the argument
//! shapes, these own the behavior.

pub mod completions;
pub mod create;
pub mod new;
