//! # kodkafa-hello
//!
//! A KODKAFA plugin that greets a name inside a box-drawn banner.
//!
//! ```bash
//! kodkafa-hello --name Alice
//! ```

pub mod banner;
pub mod cli;
pub mod config;

pub use banner::{Banner, render};
pub use cli::{Cli, Output};
pub use config::BannerConfig;
