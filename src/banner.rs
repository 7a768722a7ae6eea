//! Greeting banner rendering
//!
//! Draws the boxed greeting with double-line box-drawing characters. Rendering
//! is pure: the same layout and name always produce the same bytes.

use std::fmt;

use console::{Alignment, pad_str};

use crate::config::BannerConfig;

const TOP_LEFT: char = '╔';
const TOP_RIGHT: char = '╗';
const BOTTOM_LEFT: char = '╚';
const BOTTOM_RIGHT: char = '╝';
const HORIZONTAL: char = '═';
const VERTICAL: char = '║';

/// A greeting banner for one name
#[derive(Debug, Clone, Copy)]
pub struct Banner<'a> {
    config: &'a BannerConfig,
    name: &'a str,
}

impl<'a> Banner<'a> {
    pub fn new(config: &'a BannerConfig, name: &'a str) -> Self {
        Self { config, name }
    }

    /// The banner lines, top border first, without line terminators.
    ///
    /// Names wider than [`BannerConfig::name_width`] are kept whole and push
    /// the right border of the content line past the box.
    pub fn lines(&self) -> [String; 4] {
        let indent = " ".repeat(self.config.indent);
        let name = pad_str(self.name, self.config.name_width(), Alignment::Left, None);
        let source = pad_str(
            &self.config.source,
            self.config.inner_width.saturating_sub(self.config.indent),
            Alignment::Left,
            None,
        );

        [
            self.border(TOP_LEFT, TOP_RIGHT),
            format!(
                "{VERTICAL}{indent}{} {name} {VERTICAL}",
                self.config.greeting
            ),
            format!("{VERTICAL}{indent}{source}{VERTICAL}"),
            self.border(BOTTOM_LEFT, BOTTOM_RIGHT),
        ]
    }

    fn border(&self, left: char, right: char) -> String {
        let rule: String = std::iter::repeat_n(HORIZONTAL, self.config.inner_width).collect();
        format!("{left}{rule}{right}")
    }
}

impl fmt::Display for Banner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Render the banner for `name` as newline-terminated text
pub fn render(config: &BannerConfig, name: &str) -> String {
    Banner::new(config, name).to_string()
}
