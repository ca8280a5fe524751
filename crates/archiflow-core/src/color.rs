//! Color handling for Archiflow diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Configuration accepts any CSS color string; Graphviz
//! only understands its own color names and `#rrggbbaa` notation, so colors are
//! handed to the renderer through [`Color::to_graphviz`].

use std::str::FromStr;

use color::{DynamicColor, Srgb};

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a CSS color string such as "#ff0000",
    /// "rgb(255, 0, 0)" or "red".
    ///
    /// # Examples
    ///
    /// ```
    /// use archiflow_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns the color as a Graphviz `#rrggbbaa` string.
    ///
    /// # Examples
    ///
    /// ```
    /// use archiflow_core::color::Color;
    ///
    /// let red = Color::new("red").unwrap();
    /// assert_eq!(red.to_graphviz(), "#ff0000ff");
    /// ```
    pub fn to_graphviz(self) -> String {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            rgba.r, rgba.g, rgba.b, rgba.a
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#336699").is_ok());
        assert!(Color::new("rgb(10, 20, 30)").is_ok());

        let invalid = Color::new("not-a-color");
        assert!(invalid.unwrap_err().contains("not-a-color"));
    }

    #[test]
    fn test_to_graphviz() {
        assert_eq!(Color::new("#336699").unwrap().to_graphviz(), "#336699ff");
        assert_eq!(Color::new("black").unwrap().to_graphviz(), "#000000ff");
        assert_eq!(Color::new("white").unwrap().to_graphviz(), "#ffffffff");
    }

    #[test]
    fn test_translucent_color_keeps_alpha() {
        let color = Color::new("rgba(255, 0, 0, 0)").unwrap();
        assert_eq!(color.to_graphviz(), "#ff000000");
    }
}
