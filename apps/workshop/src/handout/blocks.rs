//! Flow blocks for the participant workbook.
//!
//! Blocks carry no coordinates. The paginator stacks them down the page and
//! resolves every style against the `Theme` it was given.

use crate::layout::Face;
use crate::theme::{Rgb, Theme, PT};

/// Named paragraph styles of the workbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphStyle {
    Display,
    Subtitle,
    SectionLabel,
    PhaseHeading,
    SubHeading,
    PromptLabel,
    Body,
    BodyNote,
    Small,
    ReferenceHeading,
}

/// A paragraph style resolved to concrete values. Spacing is in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub face: Face,
    pub size: f32,
    pub leading: f32,
    pub color: Rgb,
    pub space_before: f32,
    pub space_after: f32,
    pub uppercase: bool,
}

impl ParagraphStyle {
    pub fn resolve(&self, theme: &Theme) -> TextStyle {
        let p = &theme.palette;
        let t = &theme.type_scale;
        let style = |face, size: f32, leading: f32, color, space_before, space_after| TextStyle {
            face,
            size,
            leading,
            color,
            space_before,
            space_after,
            uppercase: false,
        };

        match self {
            ParagraphStyle::Display => style(Face::Bold, t.display.size, t.display.leading, p.ink, 0.0, 2.0),
            ParagraphStyle::Subtitle => style(Face::Regular, t.label.size, t.small.leading, p.mid, 0.0, 6.0),
            ParagraphStyle::SectionLabel => TextStyle {
                uppercase: true,
                ..style(Face::Bold, t.label.size, t.small.leading, p.mid, 5.0, 1.0)
            },
            ParagraphStyle::PhaseHeading => style(Face::Bold, t.title.size, t.title.leading, p.ink, 4.0, 2.0),
            ParagraphStyle::SubHeading => style(Face::Bold, t.body.size, t.body.leading, p.ink, 3.0, 1.0),
            ParagraphStyle::PromptLabel => style(Face::Bold, t.small.size, t.small.leading, p.ink, 3.0, 1.5),
            ParagraphStyle::Body => style(Face::Regular, t.body.size, t.body.leading, p.ink, 0.0, 2.0),
            ParagraphStyle::BodyNote => style(Face::Oblique, t.small.size, t.small.leading, p.mid, 0.0, 2.0),
            ParagraphStyle::Small => style(Face::Regular, t.small.size, t.small.leading, p.mid, 0.0, 1.5),
            ParagraphStyle::ReferenceHeading => style(Face::Bold, t.body.size, t.body.leading, p.ink, 4.0, 1.0),
        }
    }
}

/// Palette slot a rule is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Ink,
    Rule,
}

impl Tone {
    pub fn color(&self, theme: &Theme) -> Rgb {
        match self {
            Tone::Ink => theme.palette.ink,
            Tone::Rule => theme.palette.rule,
        }
    }
}

/// A table, either for reading (text rows) or for writing (blank rows).
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Column widths as fractions of the body width.
    pub columns: Vec<f32>,
    /// Alternate white and field rows instead of an all-field body.
    pub striped: bool,
    /// Cell padding in points.
    pub padding: f32,
}

/// Height of an empty write-in table row, in points.
pub const BLANK_ROW_PT: f32 = 24.0;
/// Height of one write-in line, in points.
pub const WRITE_LINE_PT: f32 = 20.0;
/// Height of an inline labelled field, in points.
pub const FIELD_PT: f32 = 16.0;

impl Table {
    /// A write-in grid: dark header, `blank_rows` empty rows on the field colour.
    pub fn grid(header: &[&str], blank_rows: usize, columns: &[f32]) -> Self {
        Self {
            header: header.iter().map(|h| h.to_string()).collect(),
            rows: vec![vec![String::new(); header.len()]; blank_rows],
            columns: columns.to_vec(),
            striped: false,
            padding: 4.0,
        }
    }

    /// A reading table with zebra-striped rows.
    pub fn reference(header: &[&str], rows: &[&[&str]], columns: &[f32], padding: f32) -> Self {
        Self {
            header: header.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
            columns: columns.to_vec(),
            striped: true,
            padding,
        }
    }

    pub fn is_blank_row(row: &[String]) -> bool {
        row.iter().all(|c| c.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph { text: String, style: ParagraphStyle },
    /// Vertical space in millimetres. Kept at the top of a page.
    Spacer(f32),
    /// Horizontal rule across the body width; spacing in millimetres.
    Rule {
        thickness: f32,
        tone: Tone,
        before: f32,
        after: f32,
    },
    /// Ruled write-in lines on the field colour.
    WriteLines(u8),
    /// A bold label with an underlined blank to its right.
    Field(String),
    Table(Table),
    /// Blocks that must start on the same page.
    KeepTogether(Vec<Block>),
    PageBreak,
}

impl Block {
    pub fn para(text: impl Into<String>, style: ParagraphStyle) -> Self {
        Block::Paragraph {
            text: text.into(),
            style,
        }
    }

    /// Thin grey divider.
    pub fn divider(before: f32, after: f32) -> Self {
        Block::Rule {
            thickness: 0.5,
            tone: Tone::Rule,
            before,
            after,
        }
    }

    /// Heavy ink rule under headings.
    pub fn heavy_rule(thickness: f32, before: f32, after: f32) -> Self {
        Block::Rule {
            thickness,
            tone: Tone::Ink,
            before,
            after,
        }
    }

    /// Height in millimetres this block adds when placed mid-page.
    ///
    /// Paragraph heights depend on wrapping and are computed by the paginator;
    /// this covers the fixed-height blocks.
    pub fn fixed_height(&self) -> Option<f32> {
        match self {
            Block::Spacer(mm) => Some(*mm),
            Block::Rule {
                thickness,
                before,
                after,
                ..
            } => Some(before + thickness * PT + after),
            Block::WriteLines(n) => Some(*n as f32 * WRITE_LINE_PT * PT),
            Block::Field(_) => Some(FIELD_PT * PT),
            Block::PageBreak => Some(0.0),
            Block::Paragraph { .. } | Block::Table(_) | Block::KeepTogether(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_follow_theme_type_scale() {
        let theme = Theme::handout();
        let display = ParagraphStyle::Display.resolve(&theme);
        assert_eq!((display.size, display.leading), (20.0, 24.0));
        assert_eq!(display.face, Face::Bold);

        let note = ParagraphStyle::BodyNote.resolve(&theme);
        assert_eq!(note.face, Face::Oblique);
        assert_eq!(note.color, theme.palette.mid);

        assert!(ParagraphStyle::SectionLabel.resolve(&theme).uppercase);
        assert!(!ParagraphStyle::Body.resolve(&theme).uppercase);
    }

    #[test]
    fn test_grid_table_has_blank_rows() {
        let table = Table::grid(&["Contradiction", "Roles involved"], 3, &[0.65, 0.35]);
        assert_eq!(table.rows.len(), 3);
        assert!(table.rows.iter().all(|r| Table::is_blank_row(r)));
        assert!(!table.striped);
    }

    #[test]
    fn test_fixed_heights() {
        assert_eq!(Block::Spacer(4.0).fixed_height(), Some(4.0));
        let lines = Block::WriteLines(3).fixed_height().unwrap();
        assert!((lines - 60.0 * PT).abs() < 1e-4);
        assert_eq!(Block::para("x", ParagraphStyle::Body).fixed_height(), None);
    }
}
