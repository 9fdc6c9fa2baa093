//! Style tokens shared by the handout and slide generators.
//!
//! Everything visual that is not copy lives here: the monochrome palette, the
//! type scale and the page geometry. Builders and surfaces receive a `Theme`
//! by value; nothing reads module-level colour constants.

use serde::{Deserialize, Serialize};

/// Millimetres per PostScript point.
pub const PT: f32 = 25.4 / 72.0;

// ────────────────────────────────────────────────────────────────────────────
// Colour
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Builds a colour from a `0xRRGGBB` literal.
    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// `#rrggbb`, the form the Miro API expects.
    pub fn css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `RRGGBB`, the form DrawingML `srgbClr` expects.
    pub fn srgb(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channel values in 0.0..=1.0.
    pub fn unit(&self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }
}

pub const WHITE: Rgb = Rgb::hex(0xFFFFFF);

/// The monochrome palette. `highlight` is the light callout block used on slides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub ink: Rgb,
    pub mid: Rgb,
    pub light: Rgb,
    pub rule: Rgb,
    pub field: Rgb,
    pub highlight: Rgb,
    pub white: Rgb,
}

// ────────────────────────────────────────────────────────────────────────────
// Type scale
// ────────────────────────────────────────────────────────────────────────────

/// A font size and its line leading, both in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypeStep {
    pub size: f32,
    pub leading: f32,
}

impl TypeStep {
    pub const fn new(size: f32, leading: f32) -> Self {
        Self { size, leading }
    }

    pub fn leading_mm(&self) -> f32 {
        self.leading * PT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypeScale {
    pub hero: TypeStep,
    pub display: TypeStep,
    pub title: TypeStep,
    pub body: TypeStep,
    pub small: TypeStep,
    pub micro: TypeStep,
    pub label: TypeStep,
}

// ────────────────────────────────────────────────────────────────────────────
// Page geometry
// ────────────────────────────────────────────────────────────────────────────

/// Page size and margins in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
}

impl PageGeometry {
    pub fn body_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }

    pub fn right(&self) -> f32 {
        self.width - self.margin_right
    }

    /// Lowest y (top-down) that flowed content may reach.
    pub fn bottom(&self) -> f32 {
        self.height - self.margin_bottom
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Theme presets
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub palette: Palette,
    pub type_scale: TypeScale,
    pub page: PageGeometry,
}

impl Theme {
    /// A4 portrait participant workbook.
    pub const fn handout() -> Self {
        Self {
            palette: Palette {
                ink: Rgb::hex(0x111111),
                mid: Rgb::hex(0x555555),
                light: Rgb::hex(0x999999),
                rule: Rgb::hex(0xCCCCCC),
                field: Rgb::hex(0xF7F7F7),
                highlight: Rgb::hex(0xE8E8E8),
                white: WHITE,
            },
            type_scale: TypeScale {
                hero: TypeStep::new(20.0, 24.0),
                display: TypeStep::new(20.0, 24.0),
                title: TypeStep::new(13.0, 17.0),
                body: TypeStep::new(9.5, 14.0),
                small: TypeStep::new(8.0, 12.0),
                micro: TypeStep::new(7.5, 11.0),
                label: TypeStep::new(9.0, 12.0),
            },
            page: PageGeometry {
                width: 210.0,
                height: 297.0,
                margin_left: 20.0,
                margin_right: 20.0,
                margin_top: 22.0,
                margin_bottom: 18.0,
            },
        }
    }

    /// 16:9 slide canvas, shared by the PDF and PPTX decks.
    pub const fn slides() -> Self {
        Self {
            palette: Palette {
                ink: Rgb::hex(0x111111),
                mid: Rgb::hex(0x444444),
                light: Rgb::hex(0x888888),
                rule: Rgb::hex(0xCCCCCC),
                field: Rgb::hex(0xF5F5F5),
                highlight: Rgb::hex(0xE8E8E8),
                white: WHITE,
            },
            type_scale: TypeScale {
                hero: TypeStep::new(46.0, 52.0),
                display: TypeStep::new(32.0, 38.0),
                title: TypeStep::new(22.0, 28.0),
                body: TypeStep::new(13.0, 19.0),
                small: TypeStep::new(10.0, 14.0),
                micro: TypeStep::new(8.0, 11.0),
                label: TypeStep::new(9.0, 12.0),
            },
            page: PageGeometry {
                width: 338.0,
                height: 190.0,
                margin_left: 18.0,
                margin_right: 18.0,
                margin_top: 16.0,
                margin_bottom: 14.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trips_to_css_and_srgb() {
        let c = Rgb::hex(0x4A7C59);
        assert_eq!(c, Rgb { r: 0x4A, g: 0x7C, b: 0x59 });
        assert_eq!(c.css(), "#4a7c59");
        assert_eq!(c.srgb(), "4A7C59");
    }

    #[test]
    fn test_slide_canvas_is_sixteen_by_nine() {
        let page = Theme::slides().page;
        let ratio = page.width / page.height;
        assert!((ratio - 16.0 / 9.0).abs() < 0.01, "ratio was {ratio}");
    }

    #[test]
    fn test_handout_body_width() {
        let page = Theme::handout().page;
        assert!((page.body_width() - 170.0).abs() < 1e-4);
        assert!((page.bottom() - 279.0).abs() < 1e-4);
    }
}
