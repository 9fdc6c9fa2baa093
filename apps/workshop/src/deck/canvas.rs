//! Slide drawing helpers over the shared mark model.
//!
//! All coordinates are millimetres from the top-left of the slide, text at its
//! baseline. Helpers that place a block of lines return the y just below it.

use crate::canvas::{Align, Mark, Page, Stroke};
use crate::layout::{get_metrics, wrap_text, Face};
use crate::theme::{Rgb, Theme, PT};

/// Large background numerals.
pub const GHOST: Rgb = Rgb::hex(0xE0E0E0);
/// Commitment watermark.
pub const WATERMARK: Rgb = Rgb::hex(0xF0F0F0);
/// Image placeholder fill.
pub const PLACEHOLDER: Rgb = Rgb::hex(0xDEDEDE);
/// Secondary text on dark slides.
pub const DIM: Rgb = Rgb::hex(0x666666);
pub const SOFT: Rgb = Rgb::hex(0xAAAAAA);

const ACCENT_BAR_PT: f32 = 2.5;

pub struct SlideCanvas {
    theme: Theme,
    page: Page,
}

impl SlideCanvas {
    pub fn new(theme: &Theme) -> Self {
        Self {
            theme: *theme,
            page: Page::new(theme.page.width, theme.page.height),
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn width(&self) -> f32 {
        self.theme.page.width
    }

    pub fn height(&self) -> f32 {
        self.theme.page.height
    }

    pub fn left(&self) -> f32 {
        self.theme.page.margin_left
    }

    pub fn right(&self) -> f32 {
        self.theme.page.right()
    }

    pub fn top(&self) -> f32 {
        self.theme.page.margin_top
    }

    /// Baseline of the small notes placed above the footer.
    pub fn low(&self) -> f32 {
        self.theme.page.bottom() - 14.0
    }

    pub fn body_width(&self) -> f32 {
        self.theme.page.body_width()
    }

    // ── primitives ──────────────────────────────────────────────────────────

    pub fn background(&mut self, color: Rgb) {
        let (w, h) = (self.width(), self.height());
        self.rect(0.0, 0.0, w, h, color);
    }

    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, fill: Rgb) {
        self.page.push(Mark::fill_rect(x, y, w, h, fill));
    }

    pub fn rounded(&mut self, x: f32, y: f32, w: f32, h: f32, radius: f32, fill: Rgb, stroke: Option<Stroke>) {
        self.page.push(Mark::Rect {
            x,
            y,
            w,
            h,
            fill: Some(fill),
            stroke,
            radius,
        });
    }

    pub fn circle(&mut self, cx: f32, cy: f32, r: f32, fill: Rgb) {
        self.page.push(Mark::Ellipse {
            cx,
            cy,
            rx: r,
            ry: r,
            fill,
        });
    }

    pub fn rule(&mut self, y: f32, x0: f32, x1: f32, color: Rgb, width_pt: f32) {
        self.page.push(Mark::line(x0, y, x1, y, color, width_pt));
    }

    /// A rule spanning the margins.
    pub fn hline(&mut self, y: f32, color: Rgb, width_pt: f32) {
        let (x0, x1) = (self.left(), self.right());
        self.rule(y, x0, x1, color, width_pt);
    }

    pub fn text(&mut self, x: f32, y: f32, text: impl Into<String>, face: Face, size: f32, color: Rgb) {
        self.page.push(Mark::text(x, y, text, face, size, color));
    }

    pub fn centered(&mut self, y: f32, text: impl Into<String>, face: Face, size: f32, color: Rgb) {
        let x = self.width() / 2.0;
        self.centered_at(x, y, text, face, size, color);
    }

    pub fn centered_at(&mut self, x: f32, y: f32, text: impl Into<String>, face: Face, size: f32, color: Rgb) {
        self.page
            .push(Mark::text(x, y, text, face, size, color).aligned(Align::Center));
    }

    pub fn wrap(&self, text: &str, face: Face, size: f32, width: f32) -> Vec<String> {
        wrap_text(text, get_metrics(face), size, width / PT)
    }

    /// Draws pre-broken lines `leading` millimetres apart.
    #[allow(clippy::too_many_arguments)]
    pub fn lines(&mut self, x: f32, y: f32, lines: &[String], face: Face, size: f32, leading: f32, color: Rgb) -> f32 {
        let mut y = y;
        for line in lines {
            self.text(x, y, line.clone(), face, size, color);
            y += leading;
        }
        y
    }

    /// Wraps `text` to `width` and draws it.
    #[allow(clippy::too_many_arguments)]
    pub fn paragraph(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        face: Face,
        size: f32,
        leading: f32,
        color: Rgb,
        width: f32,
    ) -> f32 {
        let wrapped = self.wrap(text, face, size, width);
        self.lines(x, y, &wrapped, face, size, leading, color)
    }

    // ── composites ──────────────────────────────────────────────────────────

    /// Small capitalised label above a heading.
    pub fn chip(&mut self, label: &str) {
        let (x, y) = (self.left(), self.top() + 7.0);
        let step = self.theme.type_scale.label;
        let light = self.theme.palette.light;
        self.text(x, y, label.to_uppercase(), Face::Bold, step.size, light);
    }

    /// Chip, display heading and the heavy rule beneath it.
    pub fn header(&mut self, chip: &str, heading: &str) {
        self.chip(chip);
        let (x, top) = (self.left(), self.top());
        let display = self.theme.type_scale.display;
        let ink = self.theme.palette.ink;
        self.text(x, top + 16.0, heading, Face::Bold, display.size, ink);
        self.hline(top + 20.0, ink, 1.0);
    }

    /// Instruction line under a header.
    pub fn note(&mut self, y: f32, text: &str) {
        let x = self.left();
        let small = self.theme.type_scale.small;
        let mid = self.theme.palette.mid;
        self.text(x, y, text, Face::Regular, small.size, mid);
    }

    /// Thin rule and running label at the foot of the slide.
    pub fn footer(&mut self, label: &str) {
        let bottom = self.theme.page.bottom();
        let rule = self.theme.palette.rule;
        self.hline(bottom + 1.0, rule, 0.4);
        let (x, micro, light) = (self.left(), self.theme.type_scale.micro, self.theme.palette.light);
        self.text(x, bottom + 4.0, label, Face::Regular, micro.size, light);
    }

    pub fn image_slot(&mut self, x: f32, y: f32, w: f32, h: f32, label: &str) {
        let rule = self.theme.palette.rule;
        self.page.push(Mark::Rect {
            x,
            y,
            w,
            h,
            fill: Some(PLACEHOLDER),
            stroke: Some(Stroke::new(rule, 0.5)),
            radius: 0.0,
        });
        let (micro, light) = (self.theme.type_scale.micro, self.theme.palette.light);
        self.centered_at(
            x + w / 2.0,
            y + h / 2.0 + 1.5,
            format!("[ {label} ]"),
            Face::Regular,
            micro.size,
            light,
        );
    }

    /// Highlighted box with an ink bar on its left edge and one line of text.
    pub fn callout(&mut self, y: f32, h: f32, text: &str) {
        let (x, w) = (self.left(), self.body_width());
        let palette = self.theme.palette;
        let size = self.theme.type_scale.body.size;
        self.rounded(x, y, w, h, 2.0, palette.highlight, None);
        self.rect(x, y, ACCENT_BAR_PT * PT, h, palette.ink);
        self.text(x + 6.0, y + h / 2.0 + size * 0.35 * PT, text, Face::BoldOblique, size, palette.ink);
    }

    /// Highlighted box sized to its wrapped text; returns the y below it.
    pub fn implication(&mut self, y: f32, text: &str) -> f32 {
        let (x, w) = (self.left(), self.body_width());
        let palette = self.theme.palette;
        let small = self.theme.type_scale.small;
        let leading = small.leading_mm();

        let wrapped = self.wrap(text, Face::BoldOblique, small.size, w - 14.0);
        let box_h = wrapped.len() as f32 * leading + 6.0;
        let top = y - 2.0;
        self.rounded(x, top, w, box_h + 2.0, 2.0, palette.highlight, None);
        self.rect(x, top, ACCENT_BAR_PT * PT, box_h + 2.0, palette.ink);
        self.lines(
            x + 5.0,
            y + leading / 2.0,
            &wrapped,
            Face::BoldOblique,
            small.size,
            leading,
            palette.mid,
        );
        top + box_h + 2.0
    }

    /// Closes the slide with its `"n / total"` stamp and returns the marks.
    pub fn finish(mut self, n: usize, total: usize) -> Vec<Mark> {
        let (x, y) = (self.right(), self.theme.page.bottom() + 4.0);
        let (micro, light) = (self.theme.type_scale.micro, self.theme.palette.light);
        self.page.push(
            Mark::text(x, y, format!("{n} / {total}"), Face::Regular, micro.size, light)
                .aligned(Align::Right),
        );
        self.page.marks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_places_chip_heading_and_rule() {
        let theme = Theme::slides();
        let mut c = SlideCanvas::new(&theme);
        c.header("Phase 1 — Activity", "Writing prompt 1A");
        let marks = c.finish(4, 37);

        assert_eq!(marks[0].as_text(), Some("PHASE 1 — ACTIVITY"));
        assert!(matches!(&marks[1], Mark::Text { y, face: Face::Bold, .. } if (*y - 32.0).abs() < 1e-4));
        assert!(matches!(&marks[2], Mark::Line { y1, .. } if (*y1 - 36.0).abs() < 1e-4));
    }

    #[test]
    fn test_finish_stamps_number_last() {
        let mut c = SlideCanvas::new(&Theme::slides());
        c.background(Theme::slides().palette.ink);
        let marks = c.finish(37, 37);
        assert!(matches!(
            marks.last(),
            Some(Mark::Text { text, align: Align::Right, .. }) if text == "37 / 37"
        ));
    }

    #[test]
    fn test_paragraph_returns_next_baseline() {
        let mut c = SlideCanvas::new(&Theme::slides());
        let text = "Actively recalling information from memory strengthens the neural pathways \
                    that make future recall easier.";
        let end = c.paragraph(18.0, 50.0, text, Face::Regular, 13.0, 6.0, Rgb::hex(0), 80.0);
        let marks = c.finish(1, 1);
        let lines = marks.len() - 1;
        assert!(lines > 1);
        assert!((end - (50.0 + lines as f32 * 6.0)).abs() < 1e-4);
    }

    #[test]
    fn test_implication_box_grows_with_text() {
        let short = {
            let mut c = SlideCanvas::new(&Theme::slides());
            c.implication(100.0, "Design implication: short.")
        };
        let long = {
            let mut c = SlideCanvas::new(&Theme::slides());
            c.implication(100.0, &"Retrieval is not a test event. ".repeat(20))
        };
        assert!(long > short);
    }
}
