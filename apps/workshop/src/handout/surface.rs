use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::canvas::Page;
use crate::emit::{Artifact, Region, Surface};
use crate::errors::EmitError;
use crate::handout::blocks::Block;
use crate::handout::paginate::Paginator;
use crate::render::{render_pdf, write_output};
use crate::theme::Theme;

/// Streams workbook blocks through the paginator and writes the PDF on finish.
pub struct HandoutSurface {
    path: PathBuf,
    title: String,
    theme: Theme,
    paginator: Paginator,
    regions_seen: usize,
    pages: Vec<Page>,
}

impl HandoutSurface {
    pub fn new(path: impl Into<PathBuf>, title: impl Into<String>, footer: &str, theme: Theme) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            paginator: Paginator::new(theme, footer),
            theme,
            regions_seen: 0,
            pages: Vec::new(),
        }
    }

    /// Pages of the last finished run.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }
}

#[async_trait]
impl Surface<Block> for HandoutSurface {
    async fn begin_region(&mut self, region: &Region<Block>) -> Result<(), EmitError> {
        if self.regions_seen > 0 {
            self.paginator.push(&Block::PageBreak);
        }
        self.regions_seen += 1;
        debug!("Handout section '{}'", region.id);
        Ok(())
    }

    async fn place(&mut self, element: &Block) -> Result<(), EmitError> {
        self.paginator.push(element);
        Ok(())
    }

    async fn finish(&mut self) -> Result<Artifact, EmitError> {
        self.pages = self.paginator.finish();
        let page = self.theme.page;
        let bytes = render_pdf(&self.title, &self.pages, (page.width, page.height))?;
        write_output(&self.path, &bytes)?;
        Ok(Artifact::File {
            path: self.path.clone(),
        })
    }
}
