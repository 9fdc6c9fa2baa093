//! Stacks flow blocks onto A4 pages.
//!
//! The cursor `y` is the top of the free space on the current page, measured
//! down from the page top in millimetres. Content may not go below
//! `theme.page.bottom()`; the footer lives in the bottom margin.

use crate::canvas::{Align, Mark, Page, Stroke};
use crate::handout::blocks::{Block, Table, TextStyle, BLANK_ROW_PT, FIELD_PT, WRITE_LINE_PT};
use crate::layout::{get_metrics, wrap_text, Face};
use crate::theme::{Theme, PT};

const GRID_RULE_PT: f32 = 0.4;
const LINE_RULE_PT: f32 = 0.5;
const FOOTER_TEXT_OFFSET: f32 = 4.0;
const FOOTER_RULE_OFFSET: f32 = 1.5;
const FIELD_LABEL_SHARE: f32 = 0.35;

pub struct Paginator {
    theme: Theme,
    footer: String,
    pages: Vec<Page>,
    current: Page,
    y: f32,
    /// Nothing but spacers has been placed on the current page.
    at_top: bool,
}

impl Paginator {
    pub fn new(theme: Theme, footer: impl Into<String>) -> Self {
        Self {
            current: Page::new(theme.page.width, theme.page.height),
            y: theme.page.margin_top,
            theme,
            footer: footer.into(),
            pages: Vec::new(),
            at_top: true,
        }
    }

    fn left(&self) -> f32 {
        self.theme.page.margin_left
    }

    fn body_width(&self) -> f32 {
        self.theme.page.body_width()
    }

    fn remaining(&self) -> f32 {
        self.theme.page.bottom() - self.y
    }

    fn new_page(&mut self) {
        let page = std::mem::replace(
            &mut self.current,
            Page::new(self.theme.page.width, self.theme.page.height),
        );
        self.pages.push(page);
        self.y = self.theme.page.margin_top;
        self.at_top = true;
    }

    /// Starts a new page unless `height` fits below the cursor. Never breaks
    /// an empty page, so oversized content overflows instead of looping.
    fn ensure_room(&mut self, height: f32) {
        if !self.at_top && height > self.remaining() + 1e-3 {
            self.new_page();
        }
    }

    /// Forces a page break; a no-op on a fresh page.
    pub fn page_break(&mut self) {
        if !self.at_top || !self.current.marks.is_empty() {
            self.new_page();
        }
    }

    pub fn push(&mut self, block: &Block) {
        match block {
            Block::Paragraph { text, style } => {
                let style = style.resolve(&self.theme);
                self.paragraph(text, &style);
            }
            Block::Spacer(mm) => {
                if *mm > self.remaining() {
                    self.new_page();
                } else {
                    self.y += mm;
                }
            }
            Block::Rule {
                thickness,
                tone,
                before,
                after,
            } => {
                if !self.at_top {
                    self.y += before;
                }
                self.ensure_room(thickness * PT);
                let y = self.y + thickness * PT / 2.0;
                let color = tone.color(&self.theme);
                self.current.push(Mark::line(
                    self.left(),
                    y,
                    self.theme.page.right(),
                    y,
                    color,
                    *thickness,
                ));
                self.y += thickness * PT + after;
                self.at_top = false;
            }
            Block::WriteLines(n) => self.write_lines(*n),
            Block::Field(label) => self.field(label),
            Block::Table(table) => self.table(table),
            Block::KeepTogether(blocks) => {
                let height: f32 = blocks.iter().map(|b| self.measure(b)).sum();
                self.ensure_room(height);
                for b in blocks {
                    self.push(b);
                }
            }
            Block::PageBreak => self.page_break(),
        }
    }

    /// Height a block would take starting mid-page.
    pub fn measure(&self, block: &Block) -> f32 {
        if let Some(h) = block.fixed_height() {
            return h;
        }
        match block {
            Block::Paragraph { text, style } => {
                let style = style.resolve(&self.theme);
                let lines = self.wrap(text, &style).len() as f32;
                style.space_before + lines * style.leading * PT + style.space_after
            }
            Block::Table(table) => self.table_rows(table).iter().map(|r| r.height).sum(),
            Block::KeepTogether(blocks) => blocks.iter().map(|b| self.measure(b)).sum(),
            _ => 0.0,
        }
    }

    fn wrap(&self, text: &str, style: &TextStyle) -> Vec<String> {
        let metrics = get_metrics(style.face);
        let width_pt = self.body_width() / PT;
        if style.uppercase {
            wrap_text(&text.to_uppercase(), metrics, style.size, width_pt)
        } else {
            wrap_text(text, metrics, style.size, width_pt)
        }
    }

    fn paragraph(&mut self, text: &str, style: &TextStyle) {
        if !self.at_top {
            self.y += style.space_before;
        }
        let leading = style.leading * PT;
        for line in self.wrap(text, style) {
            self.ensure_room(leading);
            let baseline = self.y + style.size * PT;
            self.current.push(Mark::text(
                self.left(),
                baseline,
                line,
                style.face,
                style.size,
                style.color,
            ));
            self.y += leading;
            self.at_top = false;
        }
        self.y += style.space_after;
    }

    fn write_lines(&mut self, n: u8) {
        let row = WRITE_LINE_PT * PT;
        self.ensure_room(row * n as f32);
        let (x, w) = (self.left(), self.body_width());
        for _ in 0..n {
            self.current.push(Mark::fill_rect(x, self.y, w, row, self.theme.palette.field));
            self.current.push(Mark::line(
                x,
                self.y + row,
                x + w,
                self.y + row,
                self.theme.palette.rule,
                LINE_RULE_PT,
            ));
            self.y += row;
        }
        self.at_top = false;
    }

    fn field(&mut self, label: &str) {
        let height = FIELD_PT * PT;
        self.ensure_room(height);
        let small = self.theme.type_scale.small;
        let (x, w) = (self.left(), self.body_width());
        let underline = self.y + height - 2.0 * PT;
        self.current.push(Mark::text(
            x,
            underline - 1.0,
            label,
            Face::Bold,
            small.size,
            self.theme.palette.ink,
        ));
        self.current.push(Mark::line(
            x + w * FIELD_LABEL_SHARE,
            underline,
            x + w,
            underline,
            self.theme.palette.ink,
            LINE_RULE_PT,
        ));
        self.y += height;
        self.at_top = false;
    }

    fn table_rows(&self, table: &Table) -> Vec<TableRow> {
        let small = self.theme.type_scale.small;
        let width = self.body_width();
        let pad = table.padding * PT;
        let line = small.leading * PT;

        let wrap_row = |cells: &[String], face: Face| -> Vec<Vec<String>> {
            cells
                .iter()
                .zip(&table.columns)
                .map(|(text, share)| {
                    let inner_pt = (width * share - 2.0 * pad) / PT;
                    wrap_text(text, get_metrics(face), small.size, inner_pt)
                })
                .collect()
        };

        let header_cells = wrap_row(&table.header, Face::Bold);
        let header_lines = header_cells.iter().map(Vec::len).max().unwrap_or(1).max(1);
        let mut rows = vec![TableRow {
            height: header_lines as f32 * line + 2.0 * pad,
            cells: header_cells,
            header: true,
        }];

        for row in &table.rows {
            if Table::is_blank_row(row) {
                rows.push(TableRow {
                    height: BLANK_ROW_PT * PT,
                    cells: vec![Vec::new(); row.len()],
                    header: false,
                });
            } else {
                let cells = wrap_row(row, Face::Regular);
                let lines = cells.iter().map(Vec::len).max().unwrap_or(1).max(1);
                rows.push(TableRow {
                    height: lines as f32 * line + 2.0 * pad,
                    cells,
                    header: false,
                });
            }
        }
        rows
    }

    fn table(&mut self, table: &Table) {
        let rows = self.table_rows(table);
        let total: f32 = rows.iter().map(|r| r.height).sum();
        self.ensure_room(total);

        let palette = self.theme.palette;
        let small = self.theme.type_scale.small;
        let (x0, width) = (self.left(), self.body_width());
        let pad = table.padding * PT;
        let top = self.y;
        let grid = Stroke::new(palette.rule, GRID_RULE_PT);

        let mut y = top;
        for (i, row) in rows.iter().enumerate() {
            let fill = if row.header {
                palette.ink
            } else if table.striped && i % 2 == 0 {
                palette.field
            } else if table.striped {
                palette.white
            } else {
                palette.field
            };
            self.current.push(Mark::fill_rect(x0, y, width, row.height, fill));

            let (face, color) = if row.header {
                (Face::Bold, palette.white)
            } else {
                (Face::Regular, palette.ink)
            };
            let mut x = x0;
            for (lines, share) in row.cells.iter().zip(&table.columns) {
                for (n, text) in lines.iter().enumerate() {
                    let baseline = y + pad + small.size * PT + n as f32 * small.leading * PT;
                    self.current
                        .push(Mark::text(x + pad, baseline, text.clone(), face, small.size, color));
                }
                x += width * share;
            }
            y += row.height;
        }

        // Grid: outer box, row separators, column separators.
        self.current.push(Mark::Rect {
            x: x0,
            y: top,
            w: width,
            h: total,
            fill: None,
            stroke: Some(grid),
            radius: 0.0,
        });
        let mut y = top;
        for row in &rows[..rows.len() - 1] {
            y += row.height;
            self.current
                .push(Mark::line(x0, y, x0 + width, y, grid.color, grid.width_pt));
        }
        let mut x = x0;
        for share in &table.columns[..table.columns.len().saturating_sub(1)] {
            x += width * share;
            self.current
                .push(Mark::line(x, top, x, top + total, grid.color, grid.width_pt));
        }

        self.y = top + total;
        self.at_top = false;
    }

    /// Closes the last page, stamps footers and returns every page.
    pub fn finish(&mut self) -> Vec<Page> {
        if !self.at_top || !self.current.marks.is_empty() || self.pages.is_empty() {
            self.new_page();
        }
        let mut pages = std::mem::take(&mut self.pages);

        let page = self.theme.page;
        let palette = self.theme.palette;
        let micro = self.theme.type_scale.micro;
        let text_y = page.bottom() + FOOTER_TEXT_OFFSET;
        let rule_y = page.bottom() + FOOTER_RULE_OFFSET;

        for (i, p) in pages.iter_mut().enumerate() {
            p.push(Mark::text(
                page.margin_left,
                text_y,
                self.footer.clone(),
                Face::Regular,
                micro.size,
                palette.light,
            ));
            p.push(
                Mark::text(
                    page.right(),
                    text_y,
                    (i + 1).to_string(),
                    Face::Regular,
                    micro.size,
                    palette.light,
                )
                .aligned(Align::Right),
            );
            p.push(Mark::line(
                page.margin_left,
                rule_y,
                page.right(),
                rule_y,
                palette.rule,
                GRID_RULE_PT,
            ));
        }
        pages
    }
}

struct TableRow {
    height: f32,
    cells: Vec<Vec<String>>,
    header: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handout::blocks::ParagraphStyle;

    const FOOTER: &str = "Workbook footer";

    fn paginator() -> Paginator {
        Paginator::new(Theme::handout(), FOOTER)
    }

    fn all_within_body(pages: &[Page], theme: &Theme) -> bool {
        pages.iter().all(|p| {
            p.marks.iter().all(|m| match m {
                Mark::Text { y, text, .. } if text != FOOTER && text.parse::<usize>().is_err() => {
                    *y <= theme.page.bottom() + 1e-3
                }
                _ => true,
            })
        })
    }

    #[test]
    fn test_empty_document_has_one_footed_page() {
        let pages = paginator().finish();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].contains_text(FOOTER));
        assert_eq!(pages[0].text_runs().last(), Some("1"));
    }

    #[test]
    fn test_long_text_flows_across_pages() {
        let mut p = paginator();
        let text = "Retrieval strengthens memory. ".repeat(60);
        for _ in 0..12 {
            p.push(&Block::para(text.clone(), ParagraphStyle::Body));
        }
        let pages = p.finish();
        assert!(pages.len() > 1);
        assert!(all_within_body(&pages, &Theme::handout()));
        // Footers are numbered in order.
        for (i, page) in pages.iter().enumerate() {
            assert!(page.text_runs().any(|t| t == (i + 1).to_string()));
        }
    }

    #[test]
    fn test_space_before_is_dropped_at_page_top() {
        let mut p = paginator();
        p.push(&Block::para("PHASE 1", ParagraphStyle::SectionLabel));
        let pages = p.finish();
        let theme = Theme::handout();
        match &pages[0].marks[0] {
            Mark::Text { y, text, .. } => {
                assert_eq!(text, "PHASE 1");
                assert!((y - (theme.page.margin_top + 9.0 * PT)).abs() < 1e-4);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_section_label_is_uppercased() {
        let mut p = paginator();
        p.push(&Block::para("Reference", ParagraphStyle::SectionLabel));
        assert!(p.finish()[0].contains_text("REFERENCE"));
    }

    #[test]
    fn test_page_break_never_leaves_blank_pages() {
        let mut p = paginator();
        p.page_break();
        p.push(&Block::para("one", ParagraphStyle::Body));
        p.page_break();
        p.page_break();
        p.push(&Block::para("two", ParagraphStyle::Body));
        let pages = p.finish();
        assert_eq!(pages.len(), 2);
        assert!(pages[0].contains_text("one"));
        assert!(pages[1].contains_text("two"));
    }

    #[test]
    fn test_write_lines_move_to_next_page_whole() {
        let mut p = paginator();
        let theme = Theme::handout();
        // Fill to just above the bottom margin.
        let body_height = theme.page.bottom() - theme.page.margin_top;
        p.push(&Block::para("top", ParagraphStyle::Body));
        p.push(&Block::Spacer(body_height - 20.0));
        p.push(&Block::WriteLines(3));
        let pages = p.finish();
        assert_eq!(pages.len(), 2);
        let rects = |page: &Page| page.marks.iter().filter(|m| matches!(m, Mark::Rect { .. })).count();
        assert_eq!(rects(&pages[0]), 0);
        assert_eq!(rects(&pages[1]), 3);
    }

    #[test]
    fn test_keep_together_moves_group() {
        let mut p = paginator();
        let theme = Theme::handout();
        let body_height = theme.page.bottom() - theme.page.margin_top;
        p.push(&Block::para("top", ParagraphStyle::Body));
        p.push(&Block::Spacer(body_height - 15.0));
        p.push(&Block::KeepTogether(vec![
            Block::divider(2.0, 2.0),
            Block::para("If your role is: Multimedia Design", ParagraphStyle::SubHeading),
            Block::para("second line", ParagraphStyle::Body),
        ]));
        let pages = p.finish();
        assert_eq!(pages.len(), 2);
        assert!(pages[1].contains_text("If your role is: Multimedia Design"));
    }

    #[test]
    fn test_field_draws_label_and_underline() {
        let mut p = paginator();
        p.push(&Block::Field("Name:".into()));
        let page = &p.finish()[0];
        assert!(page.contains_text("Name:"));
        let theme = Theme::handout();
        let underline_start = theme.page.margin_left + theme.page.body_width() * 0.35;
        assert!(page.marks.iter().any(|m| matches!(m,
            Mark::Line { x1, .. } if (x1 - underline_start).abs() < 1e-4)));
    }

    #[test]
    fn test_table_wraps_cells_and_stripes() {
        let mut p = paginator();
        let table = Table::reference(
            &["Term", "Definition"],
            &[
                &["Schema", "Organised knowledge structures in long-term memory"],
                &["Durable capability", "The ability to perform competently in real conditions, 6 to 12 months after a learning experience"],
            ],
            &[0.28, 0.72],
            4.0,
        );
        let height = p.measure(&Block::Table(table.clone()));
        p.push(&Block::Table(table));
        let theme = Theme::handout();
        assert!((p.y - (theme.page.margin_top + height)).abs() < 1e-4);

        let page = &p.finish()[0];
        assert!(page.contains_text("Term"));
        assert!(page.contains_text("Durable capability"));
        let fills: Vec<_> = page
            .marks
            .iter()
            .filter_map(|m| match m {
                Mark::Rect { fill: Some(f), .. } => Some(*f),
                _ => None,
            })
            .collect();
        assert_eq!(fills, vec![theme.palette.ink, theme.palette.white, theme.palette.field]);
    }
}
