//! Command handlers, one module per subcommand.

pub mod clock;
pub mod completions;
pub mod config;
pub mod gcd;
pub mod init;
pub mod seq;
pub mod tour;
