use anyhow::{Context, Result, ensure};
use figment::{
    Figment,
    providers::{Format, Toml},
};
use serde::{Deserialize, Serialize};

// Embed the default layout at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Layout of the greeting banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerConfig {
    /// Columns between the vertical borders
    pub inner_width: usize,
    /// Spaces before the content inside the box
    pub indent: usize,
    /// Word printed before the name
    pub greeting: String,
    /// Text of the line naming where the greeting comes from
    pub source: String,
}

impl BannerConfig {
    /// Load the embedded default layout
    pub fn load() -> Result<Self> {
        Self::from_toml(DEFAULT_CONFIG)
    }

    /// Load a layout from a TOML document with a `[banner]` table
    pub fn from_toml(document: &str) -> Result<Self> {
        tracing::trace!("CONFIG LOAD: Starting");

        let config: BannerConfig = Figment::new()
            .merge(Toml::string(document))
            .extract_inner("banner")
            .context("Failed to parse banner layout")?;

        config.validate()?;
        tracing::debug!(
            "Loaded banner layout: inner_width={}, name_width={}",
            config.inner_width,
            config.name_width()
        );
        Ok(config)
    }

    /// Field width the name is left-justified to so the content line meets
    /// the right border.
    pub fn name_width(&self) -> usize {
        self.inner_width
            .saturating_sub(self.indent + self.greeting_width() + 1)
    }

    fn greeting_width(&self) -> usize {
        console::measure_text_width(&self.greeting) + 1
    }

    fn validate(&self) -> Result<()> {
        ensure!(!self.greeting.is_empty(), "Banner greeting must not be empty");
        ensure!(
            self.indent + self.greeting_width() + 1 < self.inner_width,
            "Banner inner_width {} leaves no room for a name after {:?}",
            self.inner_width,
            self.greeting
        );

        let source_width = console::measure_text_width(&self.source);
        ensure!(
            self.indent + source_width <= self.inner_width,
            "Banner source line is {} columns wide but the box only fits {}",
            source_width,
            self.inner_width - self.indent
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_loads_defaults() {
        let config = BannerConfig::load().expect("Should load default layout");

        assert_eq!(config.inner_width, 36);
        assert_eq!(config.indent, 2);
        assert_eq!(config.greeting, "Hello");
        assert_eq!(config.source, "from KODKAFA Rust Plugin!");
    }

    #[test]
    fn test_name_width_fills_the_box() {
        let config = BannerConfig::load().unwrap();
        // 36 - 2 indent - "Hello " - trailing space
        assert_eq!(config.name_width(), 27);
    }

    #[test]
    fn test_custom_layout() {
        let config = BannerConfig::from_toml(
            r#"
[banner]
inner_width = 20
indent = 1
greeting = "Hi"
source = "from tests"
"#,
        )
        .unwrap();

        assert_eq!(config.name_width(), 15);
    }

    #[test]
    fn test_missing_banner_table_fails() {
        let err = BannerConfig::from_toml("[other]\nkey = 1\n").unwrap_err();
        assert!(err.to_string().contains("banner layout"));
    }

    #[test]
    fn test_source_wider_than_box_fails() {
        let err = BannerConfig::from_toml(
            r#"
[banner]
inner_width = 12
indent = 2
greeting = "Hi"
source = "a source line that does not fit"
"#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("source line"));
    }

    #[test]
    fn test_no_room_for_name_fails() {
        let err = BannerConfig::from_toml(
            r#"
[banner]
inner_width = 8
indent = 2
greeting = "Hello"
source = "x"
"#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("no room for a name"));
    }
}
