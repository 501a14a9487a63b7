//! Variants
//!
//! The closed sets of colors and sizes a product can be offered in.

use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

/// Raised when a label does not name a known variant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownVariant {
    /// Which enumeration was being parsed.
    pub kind: &'static str,

    /// The rejected label.
    pub value: String,
}

/// Product color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Gray
    Gray,

    /// Purple
    Purple,

    /// Green
    Green,
}

impl Color {
    /// Every color, in declaration order.
    pub const ALL: [Color; 3] = [Color::Gray, Color::Purple, Color::Green];

    /// Lowercase label used in query strings and fixtures.
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Gray => "gray",
            Color::Purple => "purple",
            Color::Green => "green",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Color> for &'static str {
    fn from(color: Color) -> Self {
        color.as_str()
    }
}

impl FromStr for Color {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|color| color.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "color",
                value: s.to_string(),
            })
    }
}

/// Product size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    /// Extra small
    Xs,

    /// Small
    S,

    /// Medium
    M,

    /// Large
    L,

    /// Extra large
    Xl,
}

impl Size {
    /// Every size, in declaration order.
    pub const ALL: [Size; 5] = [Size::Xs, Size::S, Size::M, Size::L, Size::Xl];

    /// Lowercase label used in query strings and fixtures.
    pub fn as_str(self) -> &'static str {
        match self {
            Size::Xs => "xs",
            Size::S => "s",
            Size::M => "m",
            Size::L => "l",
            Size::Xl => "xl",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Size> for &'static str {
    fn from(size: Size) -> Self {
        size.as_str()
    }
}

impl FromStr for Size {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Size::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "size",
                value: s.to_string(),
            })
    }
}
