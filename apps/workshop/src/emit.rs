//! Deterministic layout emission.
//!
//! A run walks a static table of [`Region`]s and hands every element, in table
//! order, to a [`Surface`]. There is exactly one call in flight at a time, the
//! first error ends the run, and the only pacing is a flat throttle after each
//! call.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::EmitError;
use crate::theme::Rgb;

// ────────────────────────────────────────────────────────────────────────────
// Regions
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// A named partition of the output: a board frame, a handout section or a slide.
///
/// `origin` and `size` are in the surface's own units (board units for Miro,
/// millimetres for documents).
#[derive(Debug, Clone, PartialEq)]
pub struct Region<E> {
    pub id: String,
    pub title: String,
    pub origin: Point,
    pub size: Size,
    pub fill: Option<Rgb>,
    pub elements: Vec<E>,
}

impl<E> Region<E> {
    pub fn new(id: impl Into<String>, title: impl Into<String>, elements: Vec<E>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            origin: Point::default(),
            size: Size::default(),
            fill: None,
            elements,
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.origin = Point { x, y };
        self
    }

    pub fn sized(mut self, width: f32, height: f32) -> Self {
        self.size = Size { width, height };
        self
    }

    pub fn filled(mut self, fill: Rgb) -> Self {
        self.fill = Some(fill);
        self
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Surface
// ────────────────────────────────────────────────────────────────────────────

/// Where a finished run can be found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    Board { id: String, url: String },
    File { path: PathBuf },
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Artifact::Board { url, .. } => write!(f, "{url}"),
            Artifact::File { path } => write!(f, "{}", path.display()),
        }
    }
}

/// Binding between an element vocabulary `E` and a concrete renderer.
#[async_trait]
pub trait Surface<E: Sync>: Send {
    /// Called once before the first region.
    async fn open(&mut self) -> Result<(), EmitError> {
        Ok(())
    }

    async fn begin_region(&mut self, _region: &Region<E>) -> Result<(), EmitError> {
        Ok(())
    }

    /// Places a single element inside the current region.
    async fn place(&mut self, element: &E) -> Result<(), EmitError>;

    async fn end_region(&mut self, _region: &Region<E>) -> Result<(), EmitError> {
        Ok(())
    }

    /// Called once after the last region; returns the run's artifact.
    async fn finish(&mut self) -> Result<Artifact, EmitError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Emitter
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct EmitReport {
    pub artifact: Artifact,
    pub regions: usize,
    pub elements: usize,
}

/// The sequential driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct Emitter {
    throttle: Duration,
}

impl Emitter {
    /// An emitter with no pause between calls, for local surfaces.
    pub fn new() -> Self {
        Self::default()
    }

    /// An emitter that sleeps for `throttle` after every surface call.
    pub fn throttled(throttle: Duration) -> Self {
        Self { throttle }
    }

    /// Emits every region and element in table order and finishes the surface.
    pub async fn run<E, S>(&self, surface: &mut S, regions: &[Region<E>]) -> Result<EmitReport, EmitError>
    where
        E: Sync,
        S: Surface<E> + ?Sized,
    {
        surface.open().await?;
        self.pause().await;

        let mut elements = 0usize;
        for region in regions {
            debug!("Emitting region '{}' ({} elements)", region.id, region.elements.len());
            surface.begin_region(region).await?;
            self.pause().await;

            for element in &region.elements {
                surface.place(element).await?;
                elements += 1;
                self.pause().await;
            }

            surface.end_region(region).await?;
            info!("Built: {}", region.title);
        }

        let artifact = surface.finish().await?;
        info!(
            "Emitted {} regions / {} elements -> {}",
            regions.len(),
            elements,
            artifact
        );

        Ok(EmitReport {
            artifact,
            regions: regions.len(),
            elements,
        })
    }

    async fn pause(&self) {
        if !self.throttle.is_zero() {
            tokio::time::sleep(self.throttle).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every call and fails on the n-th `place`.
    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<String>,
        fail_on_place: Option<usize>,
        placed: usize,
    }

    #[async_trait]
    impl Surface<&'static str> for RecordingSurface {
        async fn open(&mut self) -> Result<(), EmitError> {
            self.calls.push("open".into());
            Ok(())
        }

        async fn begin_region(&mut self, region: &Region<&'static str>) -> Result<(), EmitError> {
            self.calls.push(format!("begin {}", region.id));
            Ok(())
        }

        async fn place(&mut self, element: &&'static str) -> Result<(), EmitError> {
            self.placed += 1;
            if self.fail_on_place == Some(self.placed) {
                return Err(EmitError::Layout(format!("refused {element}")));
            }
            self.calls.push(format!("place {element}"));
            Ok(())
        }

        async fn end_region(&mut self, region: &Region<&'static str>) -> Result<(), EmitError> {
            self.calls.push(format!("end {}", region.id));
            Ok(())
        }

        async fn finish(&mut self) -> Result<Artifact, EmitError> {
            self.calls.push("finish".into());
            Ok(Artifact::File {
                path: PathBuf::from("out.bin"),
            })
        }
    }

    fn table() -> Vec<Region<&'static str>> {
        vec![
            Region::new("a", "First", vec!["a1", "a2"]),
            Region::new("b", "Second", vec![]),
            Region::new("c", "Third", vec!["c1"]),
        ]
    }

    #[tokio::test]
    async fn test_emits_regions_and_elements_in_table_order() {
        let mut surface = RecordingSurface::default();
        let report = Emitter::new().run(&mut surface, &table()).await.unwrap();

        assert_eq!(
            surface.calls,
            vec![
                "open", "begin a", "place a1", "place a2", "end a", "begin b", "end b",
                "begin c", "place c1", "end c", "finish",
            ]
        );
        assert_eq!(report.regions, 3);
        assert_eq!(report.elements, 3);
        assert_eq!(report.artifact.to_string(), "out.bin");
    }

    #[tokio::test]
    async fn test_first_failure_stops_the_run() {
        let mut surface = RecordingSurface {
            fail_on_place: Some(2),
            ..Default::default()
        };
        let err = Emitter::new().run(&mut surface, &table()).await.unwrap_err();

        assert!(matches!(err, EmitError::Layout(ref m) if m == "refused a2"));
        // Nothing after the failing call: no end, no later regions, no finish.
        assert_eq!(surface.calls, vec!["open", "begin a", "place a1"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_throttle_sleeps_after_each_call() {
        let mut surface = RecordingSurface::default();
        let started = tokio::time::Instant::now();
        Emitter::throttled(Duration::from_millis(150))
            .run(&mut surface, &table())
            .await
            .unwrap();
        // open + 3 regions + 3 elements = 7 pauses.
        assert_eq!(started.elapsed(), Duration::from_millis(150 * 7));
    }

    #[test]
    fn test_region_builder() {
        let region = Region::new("landing", "Landing Zone", Vec::<()>::new())
            .at(-7200.0, 0.0)
            .sized(1600.0, 1400.0)
            .filled(Rgb::hex(0xF5F5F5));
        assert_eq!(region.origin, Point { x: -7200.0, y: 0.0 });
        assert_eq!(region.size.width, 1600.0);
        assert_eq!(region.fill, Some(Rgb::hex(0xF5F5F5)));
    }
}
