use async_trait::async_trait;
use tracing::{debug, info};

use crate::board::client::{
    clip, BoardApi, BoardRequest, FrameData, Geometry, ItemKind, ItemRequest, MiroError, Position,
    Style, BOARD_NAME_LIMIT, FRAME_TITLE_LIMIT,
};
use crate::board::elements::BoardElement;
use crate::emit::{Artifact, Region, Surface};
use crate::errors::EmitError;

pub const BOARD_DESCRIPTION: &str =
    "135-minute cross-functional learning design workshop. See facilitator miro-playbook.";

pub fn board_url(board_id: &str) -> String {
    format!("https://miro.com/app/board/{board_id}/")
}

/// Emits regions as Miro frames and elements as frame children.
pub struct BoardSurface<A: BoardApi> {
    api: A,
    name: String,
    team_id: Option<String>,
    board_id: Option<String>,
    frame_id: Option<String>,
}

impl<A: BoardApi> BoardSurface<A> {
    pub fn new(api: A, name: impl Into<String>, team_id: Option<String>) -> Self {
        Self {
            api,
            name: name.into(),
            team_id,
            board_id: None,
            frame_id: None,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    fn board_id(&self) -> Result<&str, EmitError> {
        self.board_id
            .as_deref()
            .ok_or_else(|| EmitError::Layout("board has not been created".into()))
    }
}

#[async_trait]
impl<A: BoardApi> Surface<BoardElement> for BoardSurface<A> {
    async fn open(&mut self) -> Result<(), EmitError> {
        let request = BoardRequest {
            name: clip(&self.name, BOARD_NAME_LIMIT),
            description: BOARD_DESCRIPTION.to_string(),
            team_id: self.team_id.clone(),
        };
        let id = self.api.create_board(&request).await?;
        info!("Created board {}", id);
        self.board_id = Some(id);
        Ok(())
    }

    async fn begin_region(&mut self, region: &Region<BoardElement>) -> Result<(), EmitError> {
        let request = ItemRequest {
            data: FrameData {
                title: clip(&region.title, FRAME_TITLE_LIMIT),
                format: "custom",
                frame_type: "freeform",
            },
            position: Position::absolute(region.origin.x, region.origin.y),
            geometry: Geometry {
                width: region.size.width,
                height: Some(region.size.height),
            },
            style: region.fill.map(|fill| Style {
                fill_color: Some(fill.css()),
                ..Default::default()
            }),
            parent: None,
        };
        let body = serde_json::to_value(&request).map_err(MiroError::from)?;
        let board_id = self.board_id()?.to_string();
        let id = self.api.create_item(&board_id, ItemKind::Frame, body).await?;
        debug!("Frame '{}' -> {}", region.title, id);
        self.frame_id = Some(id);
        Ok(())
    }

    async fn place(&mut self, element: &BoardElement) -> Result<(), EmitError> {
        let frame_id = self
            .frame_id
            .as_deref()
            .ok_or_else(|| EmitError::Layout("element placed outside a frame".into()))?;
        let body = element.to_request(frame_id).map_err(MiroError::from)?;
        let board_id = self.board_id()?;
        self.api.create_item(board_id, element.kind(), body).await?;
        Ok(())
    }

    async fn end_region(&mut self, _region: &Region<BoardElement>) -> Result<(), EmitError> {
        self.frame_id = None;
        Ok(())
    }

    async fn finish(&mut self) -> Result<Artifact, EmitError> {
        let id = self.board_id()?.to_string();
        Ok(Artifact::Board {
            url: board_url(&id),
            id,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::board::elements::StickyColor;
    use crate::emit::Emitter;
    use crate::theme::Rgb;
    use std::sync::Mutex;

    /// Records every call; answers with sequential ids and rejects the n-th call.
    #[derive(Default)]
    pub(crate) struct FakeMiro {
        pub calls: Mutex<Vec<(String, serde_json::Value)>>,
        pub fail_on_call: Option<usize>,
    }

    impl FakeMiro {
        fn record(&self, path: String, body: serde_json::Value) -> Result<String, MiroError> {
            let mut calls = self.calls.lock().unwrap();
            let n = calls.len() + 1;
            if self.fail_on_call == Some(n) {
                return Err(MiroError::Api {
                    status: 429,
                    message: "Too many requests".into(),
                });
            }
            calls.push((path, body));
            Ok(format!("id-{n}"))
        }

        pub fn paths(&self) -> Vec<String> {
            self.calls.lock().unwrap().iter().map(|(p, _)| p.clone()).collect()
        }
    }

    #[async_trait]
    impl BoardApi for FakeMiro {
        async fn create_board(&self, request: &BoardRequest) -> Result<String, MiroError> {
            self.record("boards".into(), serde_json::to_value(request)?)
        }

        async fn create_item(
            &self,
            board_id: &str,
            kind: ItemKind,
            body: serde_json::Value,
        ) -> Result<String, MiroError> {
            self.record(format!("boards/{}/{}", board_id, kind.path()), body)
        }
    }

    fn regions() -> Vec<Region<BoardElement>> {
        vec![
            Region::new(
                "landing",
                "Landing Zone",
                vec![
                    BoardElement::text("Welcome", 80.0, 40.0, 800.0, 24),
                    BoardElement::sticky("Name", 100.0, 400.0, 200.0, StickyColor::LightYellow),
                ],
            )
            .at(-7200.0, 0.0)
            .sized(1600.0, 1400.0)
            .filled(Rgb::hex(0xF5F5F5)),
            Region::new(
                "break",
                "Break",
                vec![BoardElement::rect(0.0, 0.0, 1600.0, 300.0, Rgb::hex(0x111111))],
            )
            .at(-5400.0, 0.0)
            .sized(1600.0, 1400.0),
        ]
    }

    #[tokio::test]
    async fn test_frames_parent_their_elements() {
        let mut surface = BoardSurface::new(
            FakeMiro::default(),
            "A very long board name that goes well past the sixty character limit",
            None,
        );
        let report = Emitter::new().run(&mut surface, &regions()).await.unwrap();

        assert_eq!(
            report.artifact,
            Artifact::Board {
                id: "id-1".into(),
                url: "https://miro.com/app/board/id-1/".into(),
            }
        );
        assert_eq!(
            surface.api().paths(),
            vec![
                "boards",
                "boards/id-1/frames",
                "boards/id-1/texts",
                "boards/id-1/sticky_notes",
                "boards/id-1/frames",
                "boards/id-1/shapes",
            ]
        );

        let calls = surface.api().calls.lock().unwrap();
        assert_eq!(calls[0].1["name"].as_str().unwrap().chars().count(), 60);
        assert!(calls[0].1.get("teamId").is_none());
        assert_eq!(calls[1].1["position"], serde_json::json!({"x": -7200.0, "y": 0.0}));
        assert_eq!(calls[1].1["style"]["fillColor"], "#f5f5f5");
        assert_eq!(calls[2].1["parent"]["id"], "id-2");
        assert_eq!(calls[3].1["parent"]["id"], "id-2");
        // Second frame has no fill and its shape hangs off the new frame.
        assert!(calls[4].1.get("style").is_none());
        assert_eq!(calls[5].1["parent"]["id"], "id-5");
    }

    #[tokio::test]
    async fn test_api_error_halts_the_run() {
        let api = FakeMiro {
            fail_on_call: Some(4),
            ..Default::default()
        };
        let mut surface = BoardSurface::new(api, "Workshop", Some("team-9".into()));
        let err = Emitter::new().run(&mut surface, &regions()).await.unwrap_err();

        assert_eq!(err.status(), Some(429));
        // board, frame, text succeeded; the sticky failed; nothing after it.
        assert_eq!(surface.api().paths().len(), 3);
        assert_eq!(surface.api().calls.lock().unwrap()[0].1["teamId"], "team-9");
    }

    #[tokio::test]
    async fn test_place_without_frame_is_a_layout_error() {
        let mut surface = BoardSurface::new(FakeMiro::default(), "Workshop", None);
        surface.open().await.unwrap();
        let err = surface
            .place(&BoardElement::text("orphan", 0.0, 0.0, 100.0, 12))
            .await
            .unwrap_err();
        assert!(matches!(err, EmitError::Layout(_)));
    }
}
