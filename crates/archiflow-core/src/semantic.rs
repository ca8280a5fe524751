//! Diagram vocabulary.
//!
//! The types here name *what* a diagram contains and *how* it should be
//! presented, without saying anything about how a particular backend draws it:
//!
//! - [`NodeKind`] - The visual category of a node and its fixed [`Glyph`]
//! - [`Direction`] - Rank direction hint passed to the layout backend
//! - [`Splines`] - Edge routing hint passed to the layout backend
//! - [`OutputFormat`] - The file format a diagram is rendered to

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::Deserialize;

/// Visual category of a diagram node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// An end-user device.
    Mobile,
    /// A bare application process.
    Application,
    /// An application packaged as a container image.
    Container,
    /// A Kubernetes pod.
    Pod,
    /// A Kubernetes service.
    Service,
    /// A Kubernetes ingress.
    Ingress,
}

/// Fixed appearance of a [`NodeKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    shape: &'static str,
    fill_color: &'static str,
    caption: &'static str,
}

impl Glyph {
    /// Graphviz node shape name.
    pub fn shape(&self) -> &'static str {
        self.shape
    }

    /// Fill color, as a Graphviz color string.
    pub fn fill_color(&self) -> &'static str {
        self.fill_color
    }

    /// Short category caption printed under the node label.
    pub fn caption(&self) -> &'static str {
        self.caption
    }
}

impl NodeKind {
    /// All kinds, in declaration order.
    pub const ALL: [NodeKind; 6] = [
        NodeKind::Mobile,
        NodeKind::Application,
        NodeKind::Container,
        NodeKind::Pod,
        NodeKind::Service,
        NodeKind::Ingress,
    ];

    /// Returns the glyph used to draw nodes of this kind.
    pub fn glyph(self) -> Glyph {
        let (shape, fill_color, caption) = match self {
            NodeKind::Mobile => ("component", "#e8eaf6", "mobile"),
            NodeKind::Application => ("box", "#d1c4e9", "application"),
            NodeKind::Container => ("box3d", "#bbdefb", "container"),
            NodeKind::Pod => ("hexagon", "#c8e6c9", "pod"),
            NodeKind::Service => ("ellipse", "#ffe0b2", "svc"),
            NodeKind::Ingress => ("invhouse", "#ffccbc", "ing"),
        };
        Glyph {
            shape,
            fill_color,
            caption,
        }
    }
}

impl From<NodeKind> for &'static str {
    fn from(val: NodeKind) -> Self {
        match val {
            NodeKind::Mobile => "mobile",
            NodeKind::Application => "application",
            NodeKind::Container => "container",
            NodeKind::Pod => "pod",
            NodeKind::Service => "service",
            NodeKind::Ingress => "ingress",
        }
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Rank direction of the laid-out graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Direction {
    /// Left to right (default)
    #[default]
    #[serde(rename = "LR")]
    LeftToRight,
    /// Right to left
    #[serde(rename = "RL")]
    RightToLeft,
    /// Top to bottom
    #[serde(rename = "TB")]
    TopToBottom,
    /// Bottom to top
    #[serde(rename = "BT")]
    BottomToTop,
}

impl FromStr for Direction {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LR" => Ok(Self::LeftToRight),
            "RL" => Ok(Self::RightToLeft),
            "TB" => Ok(Self::TopToBottom),
            "BT" => Ok(Self::BottomToTop),
            _ => Err("Unsupported direction"),
        }
    }
}

impl From<Direction> for &'static str {
    fn from(val: Direction) -> Self {
        match val {
            Direction::LeftToRight => "LR",
            Direction::RightToLeft => "RL",
            Direction::TopToBottom => "TB",
            Direction::BottomToTop => "BT",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Edge routing style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Splines {
    /// Axis-aligned segments (default)
    #[default]
    Ortho,
    /// Curved arcs
    Curved,
    /// Smooth splines routed around nodes
    Spline,
    /// Straight segments routed around nodes
    Polyline,
    /// Straight lines, ignoring nodes
    Line,
}

impl FromStr for Splines {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ortho" => Ok(Self::Ortho),
            "curved" => Ok(Self::Curved),
            "spline" => Ok(Self::Spline),
            "polyline" => Ok(Self::Polyline),
            "line" => Ok(Self::Line),
            _ => Err("Unsupported splines style"),
        }
    }
}

impl From<Splines> for &'static str {
    fn from(val: Splines) -> Self {
        match val {
            Splines::Ortho => "ortho",
            Splines::Curved => "curved",
            Splines::Spline => "spline",
            Splines::Polyline => "polyline",
            Splines::Line => "line",
        }
    }
}

impl Display for Splines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// File format of a rendered diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Portable Network Graphics raster (default)
    #[default]
    Png,
    /// Scalable Vector Graphics
    Svg,
    /// JPEG raster
    Jpg,
    /// Portable Document Format
    Pdf,
    /// Graphviz DOT source, written without invoking Graphviz
    Dot,
}

impl OutputFormat {
    /// File extension for this format, without the dot.
    pub fn extension(self) -> &'static str {
        self.into()
    }
}

impl FromStr for OutputFormat {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            "jpg" | "jpeg" => Ok(Self::Jpg),
            "pdf" => Ok(Self::Pdf),
            "dot" | "gv" => Ok(Self::Dot),
            _ => Err("Unsupported output format"),
        }
    }
}

impl From<OutputFormat> for &'static str {
    fn from(val: OutputFormat) -> Self {
        match val {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
            OutputFormat::Jpg => "jpg",
            OutputFormat::Pdf => "pdf",
            OutputFormat::Dot => "dot",
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_every_kind_has_distinct_glyph() {
        // Graphviz draws `box`, `rect` and `rectangle` identically.
        let shapes: HashSet<_> = NodeKind::ALL
            .iter()
            .map(|k| match k.glyph().shape() {
                "rect" | "rectangle" => "box",
                shape => shape,
            })
            .collect();
        let captions: HashSet<_> = NodeKind::ALL.iter().map(|k| k.glyph().caption()).collect();

        assert_eq!(shapes.len(), NodeKind::ALL.len());
        assert_eq!(captions.len(), NodeKind::ALL.len());
    }

    #[test]
    fn test_glyph_fill_colors_are_valid() {
        for kind in NodeKind::ALL {
            let fill = kind.glyph().fill_color();
            assert!(
                crate::color::Color::new(fill).is_ok(),
                "{kind} has invalid fill {fill}"
            );
        }
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!("TB".parse::<Direction>(), Ok(Direction::TopToBottom));
        assert_eq!(Direction::default().to_string(), "LR");
        assert!("lr".parse::<Direction>().is_err());
    }

    #[test]
    fn test_splines_from_str() {
        assert_eq!("curved".parse::<Splines>(), Ok(Splines::Curved));
        assert_eq!(Splines::default(), Splines::Ortho);
        assert!("wavy".parse::<Splines>().is_err());
    }

    #[test]
    fn test_output_format_aliases() {
        assert_eq!("jpeg".parse::<OutputFormat>(), Ok(OutputFormat::Jpg));
        assert_eq!("gv".parse::<OutputFormat>(), Ok(OutputFormat::Dot));
        assert_eq!(OutputFormat::default().extension(), "png");
        assert!("bmp".parse::<OutputFormat>().is_err());
    }
}
