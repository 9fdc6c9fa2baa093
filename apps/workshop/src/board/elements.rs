//! Board element vocabulary and its translation to Miro request bodies.

use serde::{Deserialize, Serialize};

use crate::board::client::{
    clip, Geometry, ItemData, ItemKind, ItemRequest, Parent, Position, Style, CONTENT_LIMIT,
};
use crate::theme::Rgb;

pub const DEFAULT_TEXT_COLOR: Rgb = Rgb::hex(0x1A1A1A);

/// Sticky-note colours accepted by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StickyColor {
    Gray,
    LightYellow,
    Yellow,
    Orange,
    LightGreen,
    Green,
    DarkGreen,
    Cyan,
    LightPink,
    Pink,
    Violet,
    Red,
    LightBlue,
    Blue,
    DarkBlue,
    Black,
}

impl StickyColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            StickyColor::Gray => "gray",
            StickyColor::LightYellow => "light_yellow",
            StickyColor::Yellow => "yellow",
            StickyColor::Orange => "orange",
            StickyColor::LightGreen => "light_green",
            StickyColor::Green => "green",
            StickyColor::DarkGreen => "dark_green",
            StickyColor::Cyan => "cyan",
            StickyColor::LightPink => "light_pink",
            StickyColor::Pink => "pink",
            StickyColor::Violet => "violet",
            StickyColor::Red => "red",
            StickyColor::LightBlue => "light_blue",
            StickyColor::Blue => "blue",
            StickyColor::DarkBlue => "dark_blue",
            StickyColor::Black => "black",
        }
    }
}

/// One item placed inside a frame. Coordinates are relative to the frame's
/// top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardElement {
    Text {
        content: String,
        x: f32,
        y: f32,
        width: f32,
        font_size: u16,
        color: Rgb,
        fill: Option<Rgb>,
    },
    Sticky {
        content: String,
        x: f32,
        y: f32,
        width: f32,
        color: StickyColor,
    },
    Shape {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Rgb,
        content: String,
    },
}

impl BoardElement {
    pub fn text(content: impl Into<String>, x: f32, y: f32, width: f32, font_size: u16) -> Self {
        BoardElement::Text {
            content: content.into(),
            x,
            y,
            width,
            font_size,
            color: DEFAULT_TEXT_COLOR,
            fill: None,
        }
    }

    /// Text in a non-default colour, e.g. white on a dark cover.
    pub fn colored_text(
        content: impl Into<String>,
        x: f32,
        y: f32,
        width: f32,
        font_size: u16,
        color: Rgb,
    ) -> Self {
        BoardElement::Text {
            content: content.into(),
            x,
            y,
            width,
            font_size,
            color,
            fill: None,
        }
    }

    /// An empty sticky note for participants to fill in.
    pub fn blank_sticky(x: f32, y: f32, width: f32, color: StickyColor) -> Self {
        Self::sticky("", x, y, width, color)
    }

    pub fn sticky(content: impl Into<String>, x: f32, y: f32, width: f32, color: StickyColor) -> Self {
        BoardElement::Sticky {
            content: content.into(),
            x,
            y,
            width,
            color,
        }
    }

    pub fn rect(x: f32, y: f32, width: f32, height: f32, fill: Rgb) -> Self {
        BoardElement::Shape {
            x,
            y,
            width,
            height,
            fill,
            content: String::new(),
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            BoardElement::Text { .. } => ItemKind::Text,
            BoardElement::Sticky { .. } => ItemKind::StickyNote,
            BoardElement::Shape { .. } => ItemKind::Shape,
        }
    }

    /// Request body for this element as a child of `parent_id`.
    pub fn to_request(&self, parent_id: &str) -> serde_json::Result<serde_json::Value> {
        let parent = Some(Parent {
            id: parent_id.to_string(),
        });

        match self {
            BoardElement::Text {
                content,
                x,
                y,
                width,
                font_size,
                color,
                fill,
            } => serde_json::to_value(ItemRequest {
                data: ItemData {
                    content: clip(content, CONTENT_LIMIT),
                    shape: None,
                },
                position: Position::in_parent(*x, *y),
                geometry: Geometry {
                    width: *width,
                    height: None,
                },
                style: Some(Style {
                    font_size: Some(font_size.to_string()),
                    color: Some(color.css()),
                    fill_color: fill.map(|f| f.css()),
                    fill_opacity: fill.map(|_| "1.0".to_string()),
                }),
                parent,
            }),
            BoardElement::Sticky {
                content,
                x,
                y,
                width,
                color,
            } => serde_json::to_value(ItemRequest {
                data: ItemData {
                    content: clip(content, CONTENT_LIMIT),
                    shape: Some("rectangle"),
                },
                position: Position::in_parent(*x, *y),
                geometry: Geometry {
                    width: *width,
                    height: None,
                },
                style: Some(Style {
                    fill_color: Some(color.as_str().to_string()),
                    ..Default::default()
                }),
                parent,
            }),
            BoardElement::Shape {
                x,
                y,
                width,
                height,
                fill,
                content,
            } => serde_json::to_value(ItemRequest {
                data: ItemData {
                    content: content.clone(),
                    shape: Some("rectangle"),
                },
                position: Position::in_parent(*x, *y),
                geometry: Geometry {
                    width: *width,
                    height: Some(*height),
                },
                style: Some(Style {
                    fill_color: Some(fill.css()),
                    ..Default::default()
                }),
                parent,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_request() {
        let element = BoardElement::text("Phase 3 — Role Mapping", 80.0, 30.0, 600.0, 18);
        assert_eq!(
            element.to_request("frame-1").unwrap(),
            json!({
                "data": {"content": "Phase 3 — Role Mapping"},
                "position": {"x": 80.0, "y": 30.0, "relativeTo": "parent_top_left"},
                "geometry": {"width": 600.0},
                "style": {"fontSize": "18", "color": "#1a1a1a"},
                "parent": {"id": "frame-1"}
            })
        );
    }

    #[test]
    fn test_filled_text_sets_opacity() {
        let element = BoardElement::Text {
            content: "x".into(),
            x: 0.0,
            y: 0.0,
            width: 100.0,
            font_size: 12,
            color: Rgb::hex(0xFFFFFF),
            fill: Some(Rgb::hex(0x111111)),
        };
        let style = &element.to_request("f").unwrap()["style"];
        assert_eq!(style["fillColor"], "#111111");
        assert_eq!(style["fillOpacity"], "1.0");
        assert_eq!(style["color"], "#ffffff");
    }

    #[test]
    fn test_sticky_request_uses_named_colour() {
        let element = BoardElement::blank_sticky(100.0, 400.0, 200.0, StickyColor::LightBlue);
        let body = element.to_request("f").unwrap();
        assert_eq!(body["data"], json!({"content": "", "shape": "rectangle"}));
        assert_eq!(body["style"], json!({"fillColor": "light_blue"}));
        assert_eq!(element.kind(), ItemKind::StickyNote);
    }

    #[test]
    fn test_shape_request_has_height() {
        let body = BoardElement::rect(0.0, 0.0, 1600.0, 320.0, Rgb::hex(0x111111))
            .to_request("f")
            .unwrap();
        assert_eq!(body["geometry"], json!({"width": 1600.0, "height": 320.0}));
        assert_eq!(body["data"], json!({"content": "", "shape": "rectangle"}));
    }

    #[test]
    fn test_sticky_colour_serde_matches_api_names() {
        for color in [StickyColor::LightYellow, StickyColor::Orange, StickyColor::DarkBlue] {
            assert_eq!(serde_json::to_value(color).unwrap(), json!(color.as_str()));
        }
    }
}
