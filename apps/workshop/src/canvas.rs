//! Absolute-position drawing primitives.
//!
//! Units are millimetres with the origin at the top-left corner of the page and
//! y growing downwards. Text is anchored at its baseline. Both document writers
//! (PDF and PPTX) consume `Page`s of `Mark`s, so a slide or handout page looks
//! the same whichever format it is rendered to.

use serde::Serialize;

use crate::layout::Face;
use crate::theme::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    pub color: Rgb,
    /// Line width in points.
    pub width_pt: f32,
}

impl Stroke {
    pub fn new(color: Rgb, width_pt: f32) -> Self {
        Self { color, width_pt }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Mark {
    /// A single line of text. `x` is the anchor for `align`; `y` is the baseline.
    Text {
        x: f32,
        y: f32,
        text: String,
        face: Face,
        size: f32,
        color: Rgb,
        align: Align,
    },
    /// Axis-aligned rectangle; `(x, y)` is its top-left corner.
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        fill: Option<Rgb>,
        stroke: Option<Stroke>,
        radius: f32,
    },
    Ellipse {
        cx: f32,
        cy: f32,
        rx: f32,
        ry: f32,
        fill: Rgb,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: Stroke,
    },
}

impl Mark {
    pub fn text(x: f32, y: f32, text: impl Into<String>, face: Face, size: f32, color: Rgb) -> Self {
        Mark::Text {
            x,
            y,
            text: text.into(),
            face,
            size,
            color,
            align: Align::Left,
        }
    }

    pub fn aligned(mut self, to: Align) -> Self {
        if let Mark::Text { align, .. } = &mut self {
            *align = to;
        }
        self
    }

    pub fn fill_rect(x: f32, y: f32, w: f32, h: f32, fill: Rgb) -> Self {
        Mark::Rect {
            x,
            y,
            w,
            h,
            fill: Some(fill),
            stroke: None,
            radius: 0.0,
        }
    }

    pub fn line(x1: f32, y1: f32, x2: f32, y2: f32, color: Rgb, width_pt: f32) -> Self {
        Mark::Line {
            x1,
            y1,
            x2,
            y2,
            stroke: Stroke::new(color, width_pt),
        }
    }

    /// The text of a text mark.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Mark::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// One output page. Marks are painted in order, later marks on top.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub width: f32,
    pub height: f32,
    pub marks: Vec<Mark>,
}

impl Page {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            marks: Vec::new(),
        }
    }

    pub fn push(&mut self, mark: Mark) {
        self.marks.push(mark);
    }

    pub fn text_runs(&self) -> impl Iterator<Item = &str> {
        self.marks.iter().filter_map(Mark::as_text)
    }

    /// All text on the page, one run per line.
    pub fn plain_text(&self) -> String {
        self.text_runs().collect::<Vec<_>>().join("\n")
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.text_runs().any(|t| t.contains(needle))
    }
}
