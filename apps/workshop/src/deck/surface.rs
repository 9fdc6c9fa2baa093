use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::canvas::{Mark, Page};
use crate::emit::{Artifact, Region, Surface};
use crate::errors::EmitError;
use crate::render::{render_pdf, render_pptx, write_output};
use crate::theme::Theme;

/// Output container for the slide deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckFormat {
    Pdf,
    Pptx,
}

/// Collects one page of marks per slide region and writes the deck on finish.
pub struct DeckSurface {
    path: PathBuf,
    title: String,
    theme: Theme,
    format: DeckFormat,
    current: Option<Page>,
    pages: Vec<Page>,
}

impl DeckSurface {
    pub fn new(path: impl Into<PathBuf>, title: impl Into<String>, theme: Theme, format: DeckFormat) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            theme,
            format,
            current: None,
            pages: Vec::new(),
        }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }
}

#[async_trait]
impl Surface<Mark> for DeckSurface {
    async fn open(&mut self) -> Result<(), EmitError> {
        self.pages.clear();
        Ok(())
    }

    async fn begin_region(&mut self, region: &Region<Mark>) -> Result<(), EmitError> {
        debug!("Slide '{}'", region.id);
        self.current = Some(Page::new(self.theme.page.width, self.theme.page.height));
        Ok(())
    }

    async fn place(&mut self, element: &Mark) -> Result<(), EmitError> {
        let page = self
            .current
            .as_mut()
            .ok_or_else(|| EmitError::Layout("mark placed outside a slide".into()))?;
        page.push(element.clone());
        Ok(())
    }

    async fn end_region(&mut self, _region: &Region<Mark>) -> Result<(), EmitError> {
        if let Some(page) = self.current.take() {
            self.pages.push(page);
        }
        Ok(())
    }

    async fn finish(&mut self) -> Result<Artifact, EmitError> {
        let page = self.theme.page;
        let bytes = match self.format {
            DeckFormat::Pdf => render_pdf(&self.title, &self.pages, (page.width, page.height))?,
            DeckFormat::Pptx => render_pptx(&self.title, &self.pages, &self.theme)?,
        };
        write_output(&self.path, &bytes)?;
        Ok(Artifact::File {
            path: self.path.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use super::*;
    use crate::deck::slides::{deck_regions, DECK_TITLE};
    use crate::emit::Emitter;

    async fn build(dir: &std::path::Path, name: &str, format: DeckFormat) -> DeckSurface {
        let theme = Theme::slides();
        let mut surface = DeckSurface::new(dir.join(name), DECK_TITLE, theme, format);
        Emitter::new()
            .run(&mut surface, &deck_regions(&theme))
            .await
            .unwrap();
        surface
    }

    #[tokio::test]
    async fn test_pdf_deck_has_one_page_per_slide() {
        let dir = tempfile::tempdir().unwrap();
        let surface = build(dir.path(), "slides/workshop-slides.pdf", DeckFormat::Pdf).await;

        assert_eq!(surface.pages().len(), 37);
        let bytes = std::fs::read(dir.path().join("slides/workshop-slides.pdf")).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[tokio::test]
    async fn test_pptx_deck_matches_pdf_numbering() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = build(dir.path(), "deck.pdf", DeckFormat::Pdf).await;
        let pptx = build(dir.path(), "deck.pptx", DeckFormat::Pptx).await;
        assert_eq!(pdf.pages(), pptx.pages());

        let file = std::fs::File::open(dir.path().join("deck.pptx")).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        let mut last = String::new();
        archive
            .by_name("ppt/slides/slide37.xml")
            .unwrap()
            .read_to_string(&mut last)
            .unwrap();
        assert!(last.contains("<a:t>37 / 37</a:t>"));
        assert!(archive.by_name("ppt/slides/slide38.xml").is_err());
    }

    #[tokio::test]
    async fn test_rebuild_gives_identical_text() {
        let dir = tempfile::tempdir().unwrap();
        let first = build(dir.path(), "a.pdf", DeckFormat::Pdf).await;
        let second = build(dir.path(), "b.pdf", DeckFormat::Pdf).await;
        let text = |s: &DeckSurface| s.pages().iter().map(Page::plain_text).collect::<Vec<_>>();
        assert_eq!(text(&first), text(&second));
    }

    #[tokio::test]
    async fn test_mark_outside_slide_is_rejected() {
        let mut surface = DeckSurface::new("unused.pdf", DECK_TITLE, Theme::slides(), DeckFormat::Pdf);
        let mark = Mark::text(0.0, 0.0, "stray", crate::layout::Face::Regular, 8.0, Theme::slides().palette.ink);
        let err = surface.place(&mark).await.unwrap_err();
        assert!(matches!(err, EmitError::Layout(_)));
    }
}
