//! The nine workshop zones, left to right across the board.
//!
//! Coordinates inside a zone are relative to the frame's top-left corner. Cover
//! shapes always follow the content they hide so they land on top.

use crate::board::elements::{BoardElement, StickyColor};
use crate::emit::Region;
use crate::theme::Rgb;

pub const BOARD_NAME: &str = "Designing Learning as a Cross-Functional Activity System — Workshop";

pub const FRAME_WIDTH: f32 = 1600.0;
pub const FRAME_HEIGHT: f32 = 1400.0;
pub const FRAME_GAP: f32 = 200.0;

pub const FILL_DARK: Rgb = Rgb::hex(0x111111);
pub const FILL_LIGHT_ZONE: Rgb = Rgb::hex(0xF5F5F5);
const CARD_WHITE: Rgb = Rgb::hex(0xFFFFFF);
const SOFT_WHITE: Rgb = Rgb::hex(0xE0E0E0);

pub const COLOR_CURRICULUM: StickyColor = StickyColor::LightYellow;
pub const COLOR_LEARNING_DESIGN: StickyColor = StickyColor::LightBlue;
pub const COLOR_MULTIMEDIA: StickyColor = StickyColor::LightGreen;
pub const COLOR_LEARNING_TECH: StickyColor = StickyColor::Orange;

const ROLE_COLORS: [StickyColor; 4] = [
    COLOR_CURRICULUM,
    COLOR_LEARNING_DESIGN,
    COLOR_MULTIMEDIA,
    COLOR_LEARNING_TECH,
];

/// Steps printed after a successful run; the API cannot do these.
pub const NEXT_STEPS: [&str; 4] = [
    "Duplicate the Phase 5 Redesign Map template once per team and label each copy.",
    "Add participant names to Landing zone sticky notes (or leave placeholders).",
    "Add Timer widget in Phase 2 (Insert > Apps > Timer).",
    "Lock zone headers, prompts, and cover shapes; unlock cover shapes when revealing.",
];

/// Room-dependent counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub participant_slots: usize,
    pub team_count: usize,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            participant_slots: 16,
            team_count: 4,
        }
    }
}

/// A row-major grid of blank stickies, four-wide unless `columns` says otherwise.
struct StickyGrid {
    count: usize,
    columns: usize,
    x: f32,
    y: f32,
    dx: f32,
    dy: f32,
    width: f32,
}

impl StickyGrid {
    fn place(&self, color: impl Fn(usize, usize) -> StickyColor) -> Vec<BoardElement> {
        (0..self.count)
            .map(|i| {
                let (row, col) = (i / self.columns, i % self.columns);
                BoardElement::blank_sticky(
                    self.x + col as f32 * self.dx,
                    self.y + row as f32 * self.dy,
                    self.width,
                    color(i, col),
                )
            })
            .collect()
    }
}

fn response_grid(count: usize, y: f32, dy: f32) -> Vec<BoardElement> {
    StickyGrid {
        count,
        columns: 4,
        x: 80.0,
        y,
        dx: 220.0,
        dy,
        width: 200.0,
    }
    .place(|_, _| StickyColor::LightYellow)
}

struct Role {
    name: &'static str,
    color: StickyColor,
    short_prompts: &'static str,
    prompts: &'static str,
}

const ROLES: [Role; 4] = [
    Role {
        name: "Curriculum Design",
        color: COLOR_CURRICULUM,
        short_prompts: "Alignment? Reinforcement over time? Sequencing for transfer?",
        prompts: "How does this module align with programme capability? Where is knowledge reinforced? Sequencing for transfer?",
    },
    Role {
        name: "Learning / Experience Design",
        color: COLOR_LEARNING_DESIGN,
        short_prompts: "Cognitive operations? Retrieval? Visible reasoning?",
        prompts: "What cognitive operations must learners practice? Where is retrieval? Visible reasoning?",
    },
    Role {
        name: "Multimedia Design",
        color: COLOR_MULTIMEDIA,
        short_prompts: "Cognitive function of media? Load? Schema support?",
        prompts: "What cognitive function does each media element serve? Load? Schema support?",
    },
    Role {
        name: "Learning Technology",
        color: COLOR_LEARNING_TECH,
        short_prompts: "Affordances? Constraints? Analytics?",
        prompts: "What affordances enable retrieval, feedback, collaboration? Where does platform constrain pedagogy? Analytics?",
    },
];

const COMMITMENTS: [(&str, &str); 3] = [
    (
        "Memory precedes complex thinking",
        "You cannot think critically about what you don't remember. Schema must be built before application.",
    ),
    (
        "Retrieval strengthens memory",
        "Actively recalling information strengthens retention. Retrieval practice must be embedded.",
    ),
    (
        "Cognitive load must be managed",
        "Working memory is limited. Simplify; remove elements that do not serve cognition.",
    ),
];

const REDESIGN_SECTIONS: [(&str, &str); 7] = [
    ("1. Capability Object", "What must learners do 6–12 months later? What cognitive change is required?"),
    ("2. Retrieval Points", "Where and when is knowledge retrieved after initial learning?"),
    ("3. Visible Reasoning", "What prompts require learners to externalise thinking?"),
    ("4. Load Reduction", "What extraneous elements were removed or simplified?"),
    ("5. Media Justification", "What cognitive function does each medium serve?"),
    (
        "6. Platform Alignment",
        "How does technology enable the design? What must the platform do that it currently cannot?",
    ),
    ("7. Connection to Programme", "How does this module contribute to programme-level capability?"),
];

const CHARTER_PROMPTS: [&str; 4] = [
    "One decision I will no longer make alone",
    "One role I need earlier in the design process",
    "One learning science principle I will use in future discussions",
    "One process change we will implement in the next design cycle",
];

// ────────────────────────────────────────────────────────────────────────────
// Zone builders
// ────────────────────────────────────────────────────────────────────────────

fn landing(layout: &BoardLayout) -> Vec<BoardElement> {
    let mut items = vec![
        BoardElement::text("Designing Learning as a Cross-Functional Activity System", 80.0, 40.0, 800.0, 24),
        BoardElement::text("Facilitator: [Your name]\nDate: [Session date]", 80.0, 120.0, 400.0, 12),
        BoardElement::text(
            "Zoom out to see the full board. We will move left to right through the phases. Start here and wait for the facilitator.",
            80.0,
            220.0,
            700.0,
            12,
        ),
        BoardElement::text(
            "Find your name below (colour = your role). Click your note to confirm you can edit.",
            80.0,
            320.0,
            600.0,
            12,
        ),
    ];
    items.extend((0..layout.participant_slots).map(|i| {
        let (row, col) = (i / 4, i % 4);
        BoardElement::sticky(
            "Name",
            100.0 + col as f32 * 220.0,
            400.0 + row as f32 * 120.0,
            200.0,
            ROLE_COLORS[i % 4],
        )
    }));
    items
}

fn phase1(layout: &BoardLayout) -> Vec<BoardElement> {
    let responders = layout.participant_slots.min(8);
    let mut items = vec![
        BoardElement::text("Phase 1 — Framing the Shared Object", 80.0, 30.0, 600.0, 18),
        BoardElement::text("Define learning in one sentence.", 80.0, 80.0, 500.0, 16),
    ];
    items.extend(response_grid(responders, 140.0, 110.0));
    items.push(BoardElement::text(
        "How do you know when learning has happened?",
        80.0,
        480.0,
        500.0,
        16,
    ));
    items.extend(response_grid(responders, 540.0, 110.0));
    items.extend([
        BoardElement::text(
            "Learning is durable change in knowledge structures that enables future participation and performance.",
            80.0,
            920.0,
            500.0,
            14,
        ),
        BoardElement::rect(70.0, 900.0, 520.0, 80.0, FILL_DARK),
        BoardElement::text(
            "Durable — Not fleeting. Visible months later.\nKnowledge structures — Organised schemas in long-term memory.\nEnables future — The test is what learners can do later.",
            620.0,
            900.0,
            400.0,
            12,
        ),
        BoardElement::text(
            "1. What must learners be able to do 6–12 months from now, in real conditions?",
            80.0,
            1020.0,
            700.0,
            12,
        ),
        BoardElement::text(
            "2. What cognitive change must occur for that to be possible?",
            80.0,
            1100.0,
            700.0,
            12,
        ),
    ]);
    items.extend(response_grid(4, 1180.0, 0.0));
    items
}

fn phase2(layout: &BoardLayout) -> Vec<BoardElement> {
    let mut items = vec![
        BoardElement::text("Phase 2 — Learning Science Core", 80.0, 30.0, 600.0, 18),
        BoardElement::rect(0.0, 0.0, FRAME_WIDTH, 320.0, FILL_DARK),
        BoardElement::colored_text(
            "Close your notes. Write the three commitments from memory.",
            80.0,
            100.0,
            600.0,
            16,
            CARD_WHITE,
        ),
    ];
    items.extend(response_grid(layout.participant_slots.min(8), 180.0, 100.0));

    for (i, (title, body)) in COMMITMENTS.iter().enumerate() {
        let cx = 120.0 + i as f32 * 480.0;
        items.extend([
            BoardElement::rect(cx, 420.0, 400.0, 180.0, CARD_WHITE),
            BoardElement::text(*title, cx + 20.0, 440.0, 360.0, 14),
            BoardElement::text(*body, cx + 20.0, 500.0, 360.0, 11),
            BoardElement::rect(cx, 418.0, 404.0, 184.0, FILL_DARK),
        ]);
    }

    items.extend([
        BoardElement::text("Module outcome: Evaluate ethical frameworks", 80.0, 680.0, 400.0, 12),
        BoardElement::text("Assessment: Multiple-choice quiz on definitions", 500.0, 680.0, 400.0, 12),
        BoardElement::text("What is the misalignment?", 80.0, 740.0, 400.0, 12),
    ]);
    items.extend(response_grid(4, 780.0, 0.0));
    items.extend([
        BoardElement::text(
            "Diagnosis: Outcome demands evaluation (higher-order); assessment only tests recognition. Commitment violated: Memory precedes complex thinking.",
            80.0,
            920.0,
            900.0,
            11,
        ),
        BoardElement::rect(70.0, 900.0, 920.0, 60.0, FILL_DARK),
    ]);

    for (i, role) in ROLES.iter().enumerate() {
        let cx = 80.0 + i as f32 * 380.0;
        items.push(BoardElement::text(role.name, cx, 1020.0, 340.0, 12));
        items.push(BoardElement::text(role.short_prompts, cx, 1060.0, 340.0, 10));
        items.extend((0..2).map(|j| {
            BoardElement::blank_sticky(cx + j as f32 * 180.0, 1160.0, 160.0, role.color)
        }));
    }
    items
}

fn phase3(_layout: &BoardLayout) -> Vec<BoardElement> {
    let mut items = vec![BoardElement::text("Phase 3 — Role Mapping", 80.0, 30.0, 600.0, 18)];

    for (i, role) in ROLES.iter().enumerate() {
        let cx = 80.0 + i as f32 * 380.0;
        items.push(BoardElement::text(role.name, cx, 80.0, 340.0, 12));
        items.push(BoardElement::text(role.prompts, cx, 120.0, 340.0, 10));
        items.extend((0..3).map(|r| {
            BoardElement::blank_sticky(
                cx + (r % 2) as f32 * 180.0,
                220.0 + r as f32 * 100.0,
                160.0,
                role.color,
            )
        }));
    }

    items.extend([
        BoardElement::text(
            "Cross-role pairing: Their decision → Which commitment does it serve or violate?",
            80.0,
            580.0,
            800.0,
            12,
        ),
        BoardElement::text("Decision", 80.0, 620.0, 200.0, 10),
        BoardElement::text("Commitment", 300.0, 620.0, 200.0, 10),
    ]);
    items.extend(
        StickyGrid {
            count: 6,
            columns: 2,
            x: 80.0,
            y: 660.0,
            dx: 220.0,
            dy: 100.0,
            width: 200.0,
        }
        .place(|_, _| StickyColor::LightYellow),
    );
    items
}

fn phase4(layout: &BoardLayout) -> Vec<BoardElement> {
    let mut items = vec![BoardElement::text("Phase 4 — Cross-Role Diagnosis", 80.0, 30.0, 600.0, 18)];

    for t in 0..layout.team_count {
        let ty = 80.0 + t as f32 * 320.0;
        items.extend([
            BoardElement::text(format!("Team {}", t + 1), 80.0, ty, 200.0, 14),
            BoardElement::text(
                "Your artefact: paste a screenshot or add a link below",
                80.0,
                ty + 40.0,
                500.0,
                10,
            ),
            BoardElement::blank_sticky(80.0, ty + 80.0, 400.0, StickyColor::LightYellow),
            BoardElement::text(
                "Stage 1 — What must learners remember? Where is retrieval? Where is thinking visible? Where is load unnecessary?",
                80.0,
                ty + 200.0,
                900.0,
                10,
            ),
            BoardElement::text(
                "Stage 2 — Where do role decisions contradict? Which contradiction most impairs learning? → This is your redesign focus for Phase 5.",
                80.0,
                ty + 260.0,
                900.0,
                10,
            ),
            BoardElement::blank_sticky(80.0, ty + 290.0, 400.0, StickyColor::LightYellow),
        ]);
    }

    items.push(BoardElement::text(
        "Sample artefact (use if your team has none): Programme: Apply risk frameworks. Module: 45-min video lecture. Assessment: Scenario reflection 2 weeks later. Media: Dense slides, no retrieval. Platform: LMS video + text.",
        80.0,
        80.0 + layout.team_count as f32 * 320.0,
        1000.0,
        10,
    ));
    items
}

fn break_zone(_layout: &BoardLayout) -> Vec<BoardElement> {
    vec![
        BoardElement::rect(0.0, 0.0, FRAME_WIDTH, 300.0, FILL_DARK),
        BoardElement::colored_text("Break — 10 minutes", 80.0, 100.0, 400.0, 24, CARD_WHITE),
        BoardElement::text(
            "When you return: identify the one misalignment most blocking learning. That is your redesign focus. One misalignment. Not all of them.",
            80.0,
            380.0,
            800.0,
            12,
        ),
    ]
}

/// One Redesign Map. The facilitator duplicates it per team in Miro.
fn redesign_map(team_label: &str) -> Vec<BoardElement> {
    let heading = format!("Phase 5 — Collaborative Redesign {team_label}");
    let mut items = vec![BoardElement::text(heading.trim(), 80.0, 30.0, 700.0, 18)];

    let mut y = 80.0;
    for (title, prompt) in REDESIGN_SECTIONS {
        items.extend([
            BoardElement::text(title, 80.0, y, 500.0, 12),
            BoardElement::text(prompt, 80.0, y + 28.0, 900.0, 10),
            BoardElement::blank_sticky(80.0, y + 50.0, 400.0, StickyColor::LightYellow),
        ]);
        y += 140.0;
    }

    items.extend([
        BoardElement::text("Learning Science Justification", 80.0, y, 400.0, 12),
        BoardElement::text(
            "Memory structures strengthened:\nRetrieval embedded at:\nCognitive load decisions:",
            80.0,
            y + 30.0,
            700.0,
            10,
        ),
        BoardElement::blank_sticky(80.0, y + 90.0, 500.0, StickyColor::LightYellow),
    ]);
    items
}

fn phase5(_layout: &BoardLayout) -> Vec<BoardElement> {
    redesign_map("(Template — duplicate per team)")
}

fn phase6(_layout: &BoardLayout) -> Vec<BoardElement> {
    const CRITIQUE_COLORS: [StickyColor; 3] = [
        StickyColor::LightGreen,
        StickyColor::LightYellow,
        StickyColor::LightBlue,
    ];

    let mut items = vec![
        BoardElement::text("Phase 6 — Cross-Team Critique (Gallery Walk)", 80.0, 30.0, 700.0, 18),
        BoardElement::text(
            "Review at least two other teams' Redesign Maps. For each map add:",
            80.0,
            80.0,
            800.0,
            12,
        ),
        BoardElement::text(
            "Green — Strength: What aligns with learning science? Name the commitment.",
            80.0,
            120.0,
            400.0,
            10,
        ),
        BoardElement::text(
            "Yellow — Tension: Where might the design impair learning? Name the commitment.",
            500.0,
            120.0,
            400.0,
            10,
        ),
        BoardElement::text(
            "Blue — Clarification question: What needs more explanation?",
            80.0,
            160.0,
            400.0,
            10,
        ),
    ];
    items.extend(
        StickyGrid {
            count: 12,
            columns: 3,
            x: 80.0,
            y: 200.0,
            dx: 220.0,
            dy: 110.0,
            width: 200.0,
        }
        .place(|_, col| CRITIQUE_COLORS[col]),
    );
    items
}

fn phase7(layout: &BoardLayout) -> Vec<BoardElement> {
    let mut items = vec![BoardElement::text(
        "Phase 7 — Collaboration Charter & Closing",
        80.0,
        30.0,
        700.0,
        18,
    )];

    for (i, prompt) in CHARTER_PROMPTS.iter().enumerate() {
        let y = i as f32 * 100.0;
        items.push(BoardElement::text(*prompt, 80.0, 80.0 + y, 600.0, 12));
        items.extend((0..4).map(|j| {
            BoardElement::blank_sticky(80.0 + j as f32 * 220.0, 120.0 + y, 200.0, ROLE_COLORS[j % 4])
        }));
    }

    items.extend([
        BoardElement::text(
            "30-day follow-up: One decision you made differently; one place collaboration improved; one remaining misalignment. Note date and calendar link below.",
            80.0,
            520.0,
            800.0,
            10,
        ),
        BoardElement::text(
            "No notes. Write three things: (1) How you now define learning. (2) One way your role mediates cognitive change. (3) One collaboration commitment you are taking forward.",
            80.0,
            620.0,
            800.0,
            12,
        ),
        BoardElement::rect(0.0, 600.0, FRAME_WIDTH, 320.0, FILL_DARK),
        BoardElement::colored_text("No notes. Write three things.", 80.0, 680.0, 600.0, 18, CARD_WHITE),
        BoardElement::colored_text(
            "1. How you now define learning\n2. One way your role mediates cognitive change\n3. One collaboration commitment you are taking forward",
            80.0,
            740.0,
            700.0,
            12,
            SOFT_WHITE,
        ),
    ]);
    items.extend(response_grid(layout.participant_slots.min(8), 860.0, 100.0));
    items
}

// ────────────────────────────────────────────────────────────────────────────
// Zone table
// ────────────────────────────────────────────────────────────────────────────

type ZoneBuilder = fn(&BoardLayout) -> Vec<BoardElement>;

const ZONES: [(&str, &str, ZoneBuilder); 9] = [
    ("landing", "Landing Zone", landing),
    ("phase-1", "Phase 1 — Framing the Shared Object", phase1),
    ("phase-2", "Phase 2 — Learning Science Core", phase2),
    ("phase-3", "Phase 3 — Role Mapping", phase3),
    ("phase-4", "Phase 4 — Cross-Role Diagnosis", phase4),
    ("break", "Break", break_zone),
    ("phase-5", "Phase 5 — Collaborative Redesign", phase5),
    ("phase-6", "Phase 6 — Cross-Team Critique", phase6),
    ("phase-7", "Phase 7 — Collaboration Charter", phase7),
];

/// Builds the full zone table. Frames sit on y = 0, centred on the board
/// origin, one frame width plus gap apart.
pub fn board_zones(layout: &BoardLayout) -> Vec<Region<BoardElement>> {
    let step = FRAME_WIDTH + FRAME_GAP;
    let start_x = -4.0 * step;

    ZONES
        .iter()
        .enumerate()
        .map(|(i, (id, title, build))| {
            let fill = if *id == "break" { FILL_DARK } else { FILL_LIGHT_ZONE };
            Region::new(*id, *title, build(layout))
                .at(start_x + i as f32 * step, 0.0)
                .sized(FRAME_WIDTH, FRAME_HEIGHT)
                .filled(fill)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::surface::tests::FakeMiro;
    use crate::board::surface::BoardSurface;
    use crate::emit::Emitter;

    fn count_stickies(region: &Region<BoardElement>) -> usize {
        region
            .elements
            .iter()
            .filter(|e| matches!(e, BoardElement::Sticky { .. }))
            .count()
    }

    #[test]
    fn test_nine_zones_left_to_right() {
        let zones = board_zones(&BoardLayout::default());
        assert_eq!(zones.len(), 9);
        assert_eq!(zones[0].origin.x, -7200.0);
        assert_eq!(zones[4].origin.x, 0.0);
        assert_eq!(zones[8].origin.x, 7200.0);
        for pair in zones.windows(2) {
            assert_eq!(pair[1].origin.x - pair[0].origin.x, FRAME_WIDTH + FRAME_GAP);
        }
        assert!(zones.iter().all(|z| z.size.width == 1600.0 && z.size.height == 1400.0));
    }

    #[test]
    fn test_only_break_zone_is_dark() {
        let zones = board_zones(&BoardLayout::default());
        for zone in &zones {
            let expected = if zone.title == "Break" { FILL_DARK } else { FILL_LIGHT_ZONE };
            assert_eq!(zone.fill, Some(expected), "zone {}", zone.title);
        }
    }

    #[test]
    fn test_landing_has_one_named_sticky_per_slot_in_role_colours() {
        let layout = BoardLayout {
            participant_slots: 6,
            team_count: 4,
        };
        let landing = &board_zones(&layout)[0];
        let colors: Vec<StickyColor> = landing
            .elements
            .iter()
            .filter_map(|e| match e {
                BoardElement::Sticky { content, color, .. } if content == "Name" => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(
            colors,
            vec![
                StickyColor::LightYellow,
                StickyColor::LightBlue,
                StickyColor::LightGreen,
                StickyColor::Orange,
                StickyColor::LightYellow,
                StickyColor::LightBlue,
            ]
        );
    }

    #[test]
    fn test_covers_follow_the_content_they_hide() {
        let zones = board_zones(&BoardLayout::default());
        let phase1 = &zones[1].elements;
        let definition = phase1
            .iter()
            .position(|e| matches!(e, BoardElement::Text { content, .. } if content.starts_with("Learning is durable")))
            .unwrap();
        assert!(matches!(
            phase1[definition + 1],
            BoardElement::Shape { fill, .. } if fill == FILL_DARK
        ));

        // Each commitment card: white card, title, body, then the cover.
        let phase2 = &zones[2].elements;
        let covers = phase2
            .iter()
            .filter(|e| matches!(e, BoardElement::Shape { width, height, .. } if *width == 404.0 && *height == 184.0))
            .count();
        assert_eq!(covers, 3);
    }

    #[test]
    fn test_team_blocks_scale_with_team_count() {
        let two = board_zones(&BoardLayout {
            participant_slots: 16,
            team_count: 2,
        });
        let five = board_zones(&BoardLayout {
            participant_slots: 16,
            team_count: 5,
        });
        assert_eq!(count_stickies(&two[4]), 4);
        assert_eq!(count_stickies(&five[4]), 10);
        let fallback_y = |zone: &Region<BoardElement>| match zone.elements.last() {
            Some(BoardElement::Text { y, .. }) => *y,
            _ => panic!("phase 4 should end with the sample artefact"),
        };
        assert_eq!(fallback_y(&two[4]), 720.0);
        assert_eq!(fallback_y(&five[4]), 1680.0);
    }

    #[test]
    fn test_phase5_is_a_single_labelled_template() {
        let zones = board_zones(&BoardLayout::default());
        let phase5 = &zones[6];
        assert!(matches!(
            &phase5.elements[0],
            BoardElement::Text { content, .. } if content == "Phase 5 — Collaborative Redesign (Template — duplicate per team)"
        ));
        assert_eq!(count_stickies(phase5), 8);
    }

    #[test]
    fn test_phase6_colours_cycle_by_column() {
        let zones = board_zones(&BoardLayout::default());
        let colors: Vec<StickyColor> = zones[7]
            .elements
            .iter()
            .filter_map(|e| match e {
                BoardElement::Sticky { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(colors.len(), 12);
        assert_eq!(&colors[..3], &[StickyColor::LightGreen, StickyColor::LightYellow, StickyColor::LightBlue]);
    }

    #[test]
    fn test_small_rooms_cap_response_grids() {
        let zones = board_zones(&BoardLayout {
            participant_slots: 3,
            team_count: 1,
        });
        // Landing 3 names; Phase 1 two grids of 3 plus the four commitment stickies.
        assert_eq!(count_stickies(&zones[0]), 3);
        assert_eq!(count_stickies(&zones[1]), 3 + 3 + 4);
    }

    #[tokio::test]
    async fn test_full_board_emits_one_call_per_element() {
        let zones = board_zones(&BoardLayout::default());
        let elements: usize = zones.iter().map(|z| z.elements.len()).sum();

        let mut surface = BoardSurface::new(FakeMiro::default(), BOARD_NAME, None);
        let report = Emitter::new().run(&mut surface, &zones).await.unwrap();

        assert_eq!(report.regions, 9);
        assert_eq!(report.elements, elements);
        // board + one frame per zone + one item per element
        assert_eq!(surface.api().paths().len(), 1 + 9 + elements);
    }
}
