//! Pages of marks to a PDF using the built-in Helvetica faces.

use std::f32::consts::PI;
use std::io::{BufWriter, Write};

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Polygon,
};
use tracing::debug;

use crate::canvas::{Align, Mark, Page, Stroke};
use crate::errors::EmitError;
use crate::layout::{get_metrics, Face};
use crate::theme::{Rgb, PT};

const LAYER: &str = "Layer 1";
const ARC_SEGMENTS: usize = 8;
const ELLIPSE_SEGMENTS: usize = 64;

/// Maps text onto what the standard fonts can show.
///
/// ASCII, Latin-1 and the WinAnsi punctuation marks pass through; a few symbols
/// used in the workshop copy get ASCII stand-ins; anything else becomes `?`.
pub fn fold_to_winansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            ' '..='~' | '\u{A0}'..='\u{FF}' => out.push(c),
            '\u{2013}' | '\u{2014}' | '\u{2018}' | '\u{2019}' | '\u{201C}' | '\u{201D}'
            | '\u{2022}' | '\u{2026}' | '\u{20AC}' => out.push(c),
            '\u{2260}' => out.push_str("!="),
            '\u{2192}' => out.push_str("->"),
            '\u{2190}' => out.push_str("<-"),
            '\u{2715}' | '\u{2717}' | '\u{00D7}' => out.push('x'),
            '\u{2713}' | '\u{2714}' => out.push('+'),
            '\u{2264}' => out.push_str("<="),
            '\u{2265}' => out.push_str(">="),
            '\t' | '\n' | '\r' => out.push(' '),
            _ => out.push('?'),
        }
    }
    out
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    oblique: IndirectFontRef,
    bold_oblique: IndirectFontRef,
}

impl Fonts {
    fn load(doc: &PdfDocumentReference) -> Result<Self, EmitError> {
        let add = |font| doc.add_builtin_font(font).map_err(pdf_error);
        Ok(Self {
            regular: add(BuiltinFont::Helvetica)?,
            bold: add(BuiltinFont::HelveticaBold)?,
            oblique: add(BuiltinFont::HelveticaOblique)?,
            bold_oblique: add(BuiltinFont::HelveticaBoldOblique)?,
        })
    }

    fn get(&self, face: Face) -> &IndirectFontRef {
        match face {
            Face::Regular => &self.regular,
            Face::Bold => &self.bold,
            Face::Oblique => &self.oblique,
            Face::BoldOblique => &self.bold_oblique,
        }
    }
}

fn pdf_error(e: printpdf::Error) -> EmitError {
    EmitError::Pdf(format!("{e:?}"))
}

fn color(c: Rgb) -> Color {
    let (r, g, b) = c.unit();
    Color::Rgb(printpdf::Rgb::new(r, g, b, None))
}

/// Converts a top-down canvas point to a PDF point.
fn pt(height: f32, x: f32, y: f32) -> (Point, bool) {
    (Point::new(Mm(x), Mm(height - y)), false)
}

fn rect_outline(x: f32, y: f32, w: f32, h: f32, radius: f32) -> Vec<(f32, f32)> {
    let r = radius.min(w / 2.0).min(h / 2.0).max(0.0);
    if r == 0.0 {
        return vec![(x, y), (x + w, y), (x + w, y + h), (x, y + h)];
    }
    // Corner centres clockwise from top-left, each with its starting angle.
    let corners = [
        (x + r, y + r, PI),
        (x + w - r, y + r, 1.5 * PI),
        (x + w - r, y + h - r, 0.0),
        (x + r, y + h - r, 0.5 * PI),
    ];
    let mut points = Vec::with_capacity(4 * (ARC_SEGMENTS + 1));
    for (cx, cy, start) in corners {
        for i in 0..=ARC_SEGMENTS {
            let a = start + (i as f32 / ARC_SEGMENTS as f32) * 0.5 * PI;
            points.push((cx + r * a.cos(), cy + r * a.sin()));
        }
    }
    points
}

fn ellipse_outline(cx: f32, cy: f32, rx: f32, ry: f32) -> Vec<(f32, f32)> {
    (0..ELLIPSE_SEGMENTS)
        .map(|i| {
            let a = i as f32 / ELLIPSE_SEGMENTS as f32 * 2.0 * PI;
            (cx + rx * a.cos(), cy + ry * a.sin())
        })
        .collect()
}

fn draw_polygon(
    layer: &PdfLayerReference,
    height: f32,
    outline: &[(f32, f32)],
    fill: Option<Rgb>,
    stroke: Option<Stroke>,
) {
    let mode = match (fill, stroke) {
        (Some(_), Some(_)) => PaintMode::FillStroke,
        (Some(_), None) => PaintMode::Fill,
        (None, Some(_)) => PaintMode::Stroke,
        (None, None) => return,
    };
    if let Some(f) = fill {
        layer.set_fill_color(color(f));
    }
    if let Some(s) = stroke {
        layer.set_outline_color(color(s.color));
        layer.set_outline_thickness(s.width_pt);
    }
    layer.add_polygon(Polygon {
        rings: vec![outline.iter().map(|&(x, y)| pt(height, x, y)).collect()],
        mode,
        winding_order: WindingOrder::NonZero,
    });
}

fn draw_mark(layer: &PdfLayerReference, fonts: &Fonts, height: f32, mark: &Mark) {
    match mark {
        Mark::Text {
            x,
            y,
            text,
            face,
            size,
            color: c,
            align,
        } => {
            let text = fold_to_winansi(text);
            let width_mm = get_metrics(*face).width_pt(&text, *size) * PT;
            let left = match align {
                Align::Left => *x,
                Align::Center => x - width_mm / 2.0,
                Align::Right => x - width_mm,
            };
            layer.set_fill_color(color(*c));
            layer.use_text(text, *size, Mm(left), Mm(height - y), fonts.get(*face));
        }
        Mark::Rect {
            x,
            y,
            w,
            h,
            fill,
            stroke,
            radius,
        } => draw_polygon(layer, height, &rect_outline(*x, *y, *w, *h, *radius), *fill, *stroke),
        Mark::Ellipse { cx, cy, rx, ry, fill } => {
            draw_polygon(layer, height, &ellipse_outline(*cx, *cy, *rx, *ry), Some(*fill), None)
        }
        Mark::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
        } => {
            layer.set_outline_color(color(stroke.color));
            layer.set_outline_thickness(stroke.width_pt);
            layer.add_line(Line {
                points: vec![pt(height, *x1, *y1), pt(height, *x2, *y2)],
                is_closed: false,
            });
        }
    }
}

/// Renders `pages` to PDF bytes. An empty page list yields a single blank page.
pub fn render_pdf(title: &str, pages: &[Page], fallback_size: (f32, f32)) -> Result<Vec<u8>, EmitError> {
    let (w0, h0) = pages
        .first()
        .map(|p| (p.width, p.height))
        .unwrap_or(fallback_size);
    let (doc, first_page, first_layer) = PdfDocument::new(title, Mm(w0), Mm(h0), LAYER);
    let fonts = Fonts::load(&doc)?;

    for (i, page) in pages.iter().enumerate() {
        let layer = if i == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (p, l) = doc.add_page(Mm(page.width), Mm(page.height), LAYER);
            doc.get_page(p).get_layer(l)
        };
        for mark in &page.marks {
            draw_mark(&layer, &fonts, page.height, mark);
        }
    }
    debug!("Rendered {} PDF pages for '{}'", pages.len().max(1), title);

    let mut bytes = Vec::new();
    {
        let mut writer = BufWriter::new(&mut bytes);
        doc.save(&mut writer).map_err(pdf_error)?;
        writer.flush()?;
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn test_fold_keeps_latin_and_winansi_punctuation() {
        assert_eq!(fold_to_winansi("Phase 1 — Framing"), "Phase 1 — Framing");
        assert_eq!(fold_to_winansi("café “quoted” …"), "café “quoted” …");
    }

    #[test]
    fn test_fold_replaces_symbols() {
        assert_eq!(fold_to_winansi("Completion ≠ learning"), "Completion != learning");
        assert_eq!(fold_to_winansi("Decision → Commitment"), "Decision -> Commitment");
        assert_eq!(fold_to_winansi("✕ recall ✓ apply"), "x recall + apply");
        assert_eq!(fold_to_winansi("漢"), "?");
        assert_eq!(fold_to_winansi("a\nb"), "a b");
    }

    #[test]
    fn test_rounded_outline_stays_inside_bounds() {
        let outline = rect_outline(10.0, 20.0, 100.0, 40.0, 6.0);
        assert_eq!(outline.len(), 4 * (ARC_SEGMENTS + 1));
        for (x, y) in outline {
            assert!((10.0 - 1e-3..=110.0 + 1e-3).contains(&x));
            assert!((20.0 - 1e-3..=60.0 + 1e-3).contains(&y));
        }
    }

    #[test]
    fn test_square_outline_has_four_corners() {
        assert_eq!(rect_outline(0.0, 0.0, 5.0, 5.0, 0.0).len(), 4);
    }

    #[test]
    fn test_render_produces_a_pdf() {
        let theme = Theme::slides();
        let mut page = Page::new(theme.page.width, theme.page.height);
        page.push(Mark::fill_rect(0.0, 0.0, 338.0, 190.0, theme.palette.white));
        page.push(Mark::text(18.0, 40.0, "Agenda → today", Face::Bold, 32.0, theme.palette.ink));
        page.push(Mark::Ellipse {
            cx: 50.0,
            cy: 100.0,
            rx: 5.0,
            ry: 5.0,
            fill: theme.palette.ink,
        });
        page.push(Mark::line(18.0, 44.0, 320.0, 44.0, theme.palette.ink, 1.0));

        let bytes = render_pdf("Test deck", &[page.clone(), page], (338.0, 190.0)).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }
}
