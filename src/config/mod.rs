//! Banner layout configuration
//!
//! The layout ships inside the binary as `default-config.toml` and is loaded
//! through figment. No files or environment variables are consulted.

mod core;

pub use self::core::BannerConfig;
