//! Copy and structure of the participant workbook.

use crate::emit::Region;
use crate::handout::blocks::{Block, ParagraphStyle as S, Table};

pub const WORKBOOK_TITLE: &str = "Participant Workbook";
pub const WORKSHOP_TITLE: &str = "Designing Learning as a Cross-Functional Activity System";
pub const FOOTER: &str =
    "Participant Workbook — Designing Learning as a Cross-Functional Activity System";

pub const GLOSSARY: [(&str, &str); 9] = [
    ("Schema", "Organised knowledge structures in long-term memory"),
    ("Retrieval", "Actively recalling information from memory — not re-reading it"),
    ("Cognitive load", "The mental effort required during learning"),
    ("Intrinsic load", "Effort inherent to the complexity of the material itself"),
    ("Extraneous load", "Effort that does not contribute to schema formation"),
    ("Germane load", "Effort that builds understanding"),
    ("Object of design", "The shared cognitive outcome all roles are working toward"),
    (
        "Activity system",
        "A social structure where multiple roles coordinate tools, rules and artefacts toward a shared outcome",
    ),
    (
        "Durable capability",
        "The ability to perform competently in real conditions, 6 to 12 months after a learning experience",
    ),
];

pub const IDENTITY_FIELDS: [&str; 3] = ["Name:", "Role:", "Date:"];

// ────────────────────────────────────────────────────────────────────────────
// Building blocks
// ────────────────────────────────────────────────────────────────────────────

fn phase_header(label: &str, title: &str) -> Vec<Block> {
    vec![
        Block::para(label, S::SectionLabel),
        Block::para(title, S::PhaseHeading),
        Block::heavy_rule(1.0, 0.0, 3.0),
    ]
}

/// A bold prompt, an optional italic hint and `lines` write-in lines.
fn prompt(question: &str, hint: &str, lines: u8, gap: f32) -> Vec<Block> {
    let mut blocks = vec![Block::para(question, S::PromptLabel)];
    if !hint.is_empty() {
        blocks.push(Block::para(hint, S::BodyNote));
    }
    blocks.push(Block::WriteLines(lines));
    if gap > 0.0 {
        blocks.push(Block::Spacer(gap));
    }
    blocks
}

fn sub_section(title: &str, note: &str, before: f32) -> Vec<Block> {
    vec![
        Block::divider(before, 3.0),
        Block::para(title, S::SubHeading),
        Block::para(note, S::BodyNote),
        Block::Spacer(2.0),
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

fn cover() -> Vec<Block> {
    let mut blocks = vec![
        Block::Spacer(20.0),
        Block::para(WORKBOOK_TITLE, S::Display),
        Block::para(WORKSHOP_TITLE, S::Subtitle),
        Block::heavy_rule(1.5, 2.0, 8.0),
    ];
    for label in IDENTITY_FIELDS {
        blocks.push(Block::Field(label.to_string()));
        blocks.push(Block::Spacer(3.0));
    }
    blocks.extend([
        Block::Spacer(10.0),
        Block::divider(1.0, 1.0),
        Block::Spacer(4.0),
        Block::para("How to use this workbook", S::SubHeading),
        Block::para(
            "This workbook is yours. Write in it. The prompts are structured to build on each other, \
             so work through them in order and bring the workbook to the 30-day follow-up session.",
            S::Body,
        ),
        Block::para(
            "You will be asked to write before discussion in almost every phase. That sequencing is \
             deliberate: individual thinking before group conversation produces better ideas and reduces \
             the pull toward the most confident voice in the room.",
            S::Body,
        ),
        Block::Spacer(6.0),
        Block::divider(1.0, 1.0),
        Block::Spacer(4.0),
        Block::para("Key terms", S::SubHeading),
        Block::para(
            "Review these terms before the workshop. We will use them consistently throughout the session.",
            S::Small,
        ),
        Block::Spacer(2.0),
    ]);
    let pairs: Vec<[&str; 2]> = GLOSSARY.iter().map(|(t, d)| [*t, *d]).collect();
    let rows: Vec<&[&str]> = pairs.iter().map(|p| p.as_slice()).collect();
    blocks.push(Block::Table(Table::reference(
        &["Term", "Definition"],
        &rows,
        &[0.28, 0.72],
        4.0,
    )));
    blocks
}

fn phase1() -> Vec<Block> {
    let mut blocks = phase_header("Phase 1", "Framing the Shared Object");
    blocks.extend(prompt(
        "Writing prompt 1A",
        "Define learning in one sentence. Write without looking at the glossary.",
        3,
        4.0,
    ));
    blocks.extend(prompt("Writing prompt 1B", "How do you know when learning has happened?", 3, 4.0));

    blocks.extend([
        Block::divider(2.0, 3.0),
        Block::para("The operational definition", S::SubHeading),
        Block::para(
            "After the facilitator introduces it, write the definition here in your own words:",
            S::BodyNote,
        ),
        Block::WriteLines(2),
        Block::Spacer(4.0),
        Block::divider(2.0, 3.0),
        Block::para("Writing prompt 1C", S::PromptLabel),
        Block::para("Apply the definition to your current work.", S::BodyNote),
    ]);
    blocks.extend(prompt(
        "What must learners be able to do 6 to 12 months after your module or programme, in real conditions?",
        "",
        3,
        4.0,
    ));
    blocks.extend(prompt(
        "What cognitive change must occur for that to be possible?",
        "What must change in their mental models, schemas or judgment?",
        3,
        0.0,
    ));
    blocks
}

fn phase2() -> Vec<Block> {
    let mut blocks = phase_header("Phase 2", "Learning Science Core");
    blocks.extend([
        Block::para("Recall task", S::SubHeading),
        Block::para(
            "Without looking at your notes or the glossary, write the three learning science commitments from the pre-work.",
            S::BodyNote,
        ),
        Block::Spacer(2.0),
    ]);
    for n in ["1.", "2.", "3."] {
        blocks.extend(prompt(n, "", 2, 2.0));
    }

    blocks.extend(sub_section(
        "Role-based application",
        "Work through these prompts with your role group.",
        3.0,
    ));
    for (question, hint) in [
        (
            "Where is retrieval structured in your typical design work?",
            "Name a specific artefact or moment.",
        ),
        (
            "Where might cognitive load be excessive?",
            "Name a specific place in a module, assessment or platform.",
        ),
        (
            "Where is thinking hidden?",
            "Where do learners perform activity without their reasoning being visible?",
        ),
    ] {
        blocks.extend(prompt(question, hint, 3, 3.0));
    }

    blocks.extend(sub_section(
        "Worked example notes",
        "Use this space to note the misalignment the facilitator demonstrates.",
        2.0,
    ));
    for label in ["Module outcome:", "Assessment:", "Misalignment:", "Why it impairs learning:"] {
        blocks.extend(prompt(label, "", 2, 2.0));
    }
    blocks
}

const ROLE_PROMPTS: [(&str, [(&str, &str); 3]); 4] = [
    (
        "Curriculum Design",
        [
            ("Where does this module align with programme-level capability?", "What is the specific link?"),
            ("Where is knowledge reinforced over time in the programme?", "List two or three points."),
            ("How is sequencing designed to support transfer?", "What comes before and after this module, and why?"),
        ],
    ),
    (
        "Learning or Experience Design",
        [
            ("What cognitive operations must learners practise?", "List them specifically — not just 'understand' or 'apply'."),
            ("Where is retrieval embedded in the design?", "Name the specific mechanism and timing."),
            ("How is reasoning externalised?", "Where must learners produce visible thinking, not just correct answers?"),
        ],
    ),
    (
        "Multimedia Design",
        [
            ("What cognitive function does each major media element serve?", "List the elements and their functions."),
            ("Where does media reduce extraneous load?", "Where might it add it?"),
            ("How does representation support schema formation?", "Which concepts require visual or spatial representation?"),
        ],
    ),
    (
        "Learning Technology",
        [
            ("What platform affordances enable retrieval, feedback and collaboration?", ""),
            ("Where does platform structure constrain pedagogy?", "What can the platform not do that the design requires?"),
            ("What analytics or data would inform iteration on this design?", ""),
        ],
    ),
];

fn phase3() -> Vec<Block> {
    let mut blocks = phase_header("Phase 3", "Role Mapping");
    blocks.extend([
        Block::para("Part A — Role clarification", S::SubHeading),
        Block::para("Work through the prompts for your role only.", S::BodyNote),
        Block::Spacer(3.0),
    ]);

    for (role, prompts) in ROLE_PROMPTS {
        blocks.push(Block::KeepTogether(vec![
            Block::divider(2.0, 2.0),
            Block::para(format!("If your role is: {role}"), S::SubHeading),
        ]));
        for (question, hint) in prompts {
            blocks.extend(prompt(question, hint, 2, 2.0));
        }
    }

    blocks.extend(sub_section(
        "Part B — Cross-role perspective taking",
        "Pair with someone from a different role. One person describes a recent design decision. \
         The other identifies which learning science commitment it serves — or violates.",
        3.0,
    ));
    for (label, lines) in [
        ("Your partner's role:", 1),
        ("Their design decision:", 2),
        ("Which learning science commitment does it serve — or violate?", 2),
        ("Their observation about your decision:", 2),
    ] {
        blocks.extend(prompt(label, "", lines, 2.0));
    }
    blocks
}

fn phase4() -> Vec<Block> {
    let mut blocks = phase_header("Phase 4", "Cross-Role Diagnosis");
    blocks.push(Block::para("Your team's artefact", S::SubHeading));
    for label in [
        "Module or assessment name:",
        "Role that created it:",
        "Programme context (if known):",
    ] {
        blocks.extend(prompt(label, "", 1, 2.0));
    }

    blocks.extend(sub_section(
        "Stage 1 — Identify",
        "Work through these questions as a team. Write your team's answers here.",
        3.0,
    ));
    for question in [
        "1. What must learners remember?",
        "2. Where is retrieval structured?",
        "3. Where is thinking visible?",
        "4. Where is cognitive load unnecessary?",
    ] {
        blocks.extend(prompt(question, "", 2, 2.0));
    }

    blocks.extend([
        Block::divider(3.0, 3.0),
        Block::para("Stage 2 — Diagnose misalignment", S::SubHeading),
        Block::Spacer(2.0),
        Block::para(
            "5. Where do role decisions contradict each other? List at least two.",
            S::PromptLabel,
        ),
        Block::Spacer(1.0),
        Block::Table(Table::grid(&["Contradiction", "Roles involved"], 3, &[0.65, 0.35])),
        Block::Spacer(4.0),
    ]);
    blocks.extend(prompt("6. Which contradiction most impairs learning, and why?", "", 3, 3.0));
    blocks.push(Block::para("This is your redesign focus for Phase 5.", S::BodyNote));
    blocks
}

fn break_section() -> Vec<Block> {
    let mut blocks = phase_header("Break", "Break — 10 minutes");
    blocks.extend([
        Block::para(
            "When you return: identify the one misalignment most blocking learning. \
             That is your redesign focus. One misalignment. Not all of them.",
            S::BodyNote,
        ),
        Block::Spacer(2.0),
    ]);
    blocks.extend(prompt("The misalignment my team will redesign:", "", 3, 0.0));
    blocks
}

fn phase5() -> Vec<Block> {
    let mut blocks = phase_header("Phase 5", "Collaborative Redesign");
    blocks.extend([
        Block::para("Learning Experience Redesign Map", S::SubHeading),
        Block::para(
            "Complete each section as a team. If you cannot complete the Learning Science Justification \
             section, the redesign is not yet grounded in science — return to it before the gallery walk.",
            S::BodyNote,
        ),
        Block::Spacer(3.0),
    ]);

    let section = |blocks: &mut Vec<Block>, title: &str| {
        blocks.push(Block::divider(3.0, 2.0));
        blocks.push(Block::para(title, S::SubHeading));
    };

    section(&mut blocks, "1. Capability Object");
    blocks.extend(prompt(
        "What must learners be able to do 6 to 12 months after this experience, in real conditions?",
        "",
        3,
        2.0,
    ));
    blocks.extend(prompt(
        "What cognitive change is required?",
        "What must change in their schemas, judgment or mental models?",
        2,
        2.0,
    ));
    blocks.push(Block::Spacer(1.0));

    section(&mut blocks, "2. Retrieval Points");
    blocks.extend([
        Block::para("Where and when is this knowledge retrieved after initial learning?", S::BodyNote),
        Block::Spacer(1.0),
        Block::Table(Table::grid(
            &["Retrieval point", "Timing", "Mechanism"],
            3,
            &[0.40, 0.25, 0.35],
        )),
        Block::Spacer(1.0),
    ]);

    section(&mut blocks, "3. Visible Reasoning");
    blocks.extend(prompt(
        "What prompts or tasks require learners to externalise their thinking?",
        "Not just produce a correct answer — show their reasoning.",
        3,
        2.0,
    ));
    blocks.push(Block::Spacer(1.0));

    section(&mut blocks, "4. Load Reduction");
    blocks.extend(prompt("What extraneous elements were removed or simplified?", "", 2, 2.0));
    blocks.extend(prompt(
        "What decisions were made to protect working memory capacity?",
        "",
        2,
        2.0,
    ));
    blocks.push(Block::Spacer(1.0));

    section(&mut blocks, "5. Media Justification");
    blocks.extend([
        Block::para(
            "For each significant media element, state its cognitive function.",
            S::BodyNote,
        ),
        Block::Spacer(1.0),
        Block::Table(Table::grid(
            &["Media element", "Cognitive function it serves"],
            3,
            &[0.35, 0.65],
        )),
        Block::Spacer(2.0),
        Block::para("Is there a medium you removed? Why?", S::PromptLabel),
        Block::WriteLines(2),
        Block::Spacer(1.0),
    ]);

    section(&mut blocks, "6. Platform Alignment");
    blocks.extend(prompt(
        "How does the technology enable the design?",
        "Name specific affordances.",
        2,
        2.0,
    ));
    blocks.extend(prompt(
        "What does the platform need to do that it currently cannot?",
        "Flag this as a change to advocate for.",
        2,
        2.0,
    ));
    blocks.push(Block::Spacer(1.0));

    section(&mut blocks, "7. Connection to Programme");
    blocks.extend(prompt(
        "How does this module contribute to programme-level capability?",
        "",
        2,
        2.0,
    ));
    blocks.extend(prompt(
        "What must come before this module for it to work? What comes after?",
        "",
        2,
        2.0,
    ));
    blocks.push(Block::Spacer(1.0));

    blocks.extend([
        Block::heavy_rule(1.0, 4.0, 3.0),
        Block::para("Learning Science Justification", S::SubHeading),
        Block::para(
            "Complete this section before the gallery walk. If you cannot answer these questions, \
             the redesign is not yet grounded in learning science.",
            S::BodyNote,
        ),
        Block::Spacer(2.0),
    ]);
    for (question, hint) in [
        ("What memory structures are strengthened by this redesign?", ""),
        ("Where is retrieval embedded, and at what intervals?", ""),
        (
            "What cognitive load decisions were made?",
            "Name what was added, what was removed, and why.",
        ),
    ] {
        blocks.extend(prompt(question, hint, 2, 2.0));
    }
    blocks
}

fn phase6() -> Vec<Block> {
    let mut blocks = phase_header("Phase 6", "Cross-Team Critique");
    blocks.extend([
        Block::para(
            "Review at least two redesigns. Leave three sticky notes on each: \
             green (strength), yellow (tension), blue (question).",
            S::BodyNote,
        ),
        Block::Spacer(3.0),
    ]);

    for team in 1..=2 {
        blocks.push(Block::divider(2.0, 2.0));
        blocks.push(Block::para(format!("Team {team}"), S::SubHeading));
        for (label, note) in [
            ("Strength", "green — aligns with learning science"),
            ("Tension", "yellow — may impair learning"),
            ("Clarification question", "blue — needs more explanation"),
        ] {
            blocks.extend(prompt(&format!("{label} ({note}):"), "", 2, 2.0));
        }
    }

    blocks.extend(sub_section(
        "Feedback I received",
        "After the gallery walk, read the sticky notes on your team's map and record the most useful responses.",
        3.0,
    ));
    for label in [
        "Most useful strength:",
        "Most useful tension:",
        "Most important question to resolve:",
    ] {
        blocks.extend(prompt(label, "", 2, 2.0));
    }
    blocks
}

fn phase7() -> Vec<Block> {
    let mut blocks = phase_header("Phase 7", "Collaboration Charter");
    blocks.extend([
        Block::para("Individual commitments", S::SubHeading),
        Block::para("Write each commitment before sharing with the group.", S::BodyNote),
        Block::Spacer(2.0),
    ]);
    for (label, lines) in [
        ("One decision I will no longer make alone:", 2),
        ("One role I need earlier in the design process:", 1),
        ("Why earlier involvement by that role would improve the learning outcome:", 2),
        ("One learning science principle I will use in future design discussions:", 1),
        ("One process change we will implement in the next design cycle:", 2),
    ] {
        blocks.extend(prompt(label, "", lines, 2.0));
    }

    blocks.extend([
        Block::divider(3.0, 3.0),
        Block::para("30-day follow-up plan", S::SubHeading),
        Block::Spacer(1.0),
    ]);
    for label in ["Follow-up session date:", "Who will attend:"] {
        blocks.extend(prompt(label, "", 1, 2.0));
    }

    blocks.push(Block::para("What I will bring:", S::PromptLabel));
    for item in [
        "One decision I made differently since the workshop",
        "One place where collaboration improved",
        "One remaining misalignment that needs addressing",
    ] {
        blocks.push(Block::para(format!("— {item}"), S::Small));
    }
    blocks.push(Block::Spacer(2.0));
    blocks.extend(prompt(
        "Notes on what I want to track between now and then:",
        "",
        3,
        0.0,
    ));

    blocks.extend([
        Block::heavy_rule(1.0, 5.0, 3.0),
        Block::para("Closing retrieval task", S::SubHeading),
        Block::para("Without notes, write three things.", S::BodyNote),
        Block::Spacer(2.0),
    ]);
    for label in [
        "How I now define learning:",
        "One way my role mediates cognitive change:",
        "One collaboration commitment I am taking forward:",
    ] {
        blocks.extend(prompt(label, "", 2, 2.0));
    }
    blocks
}

const COMMITMENTS: [(&str, &str, &str); 3] = [
    (
        "1. Memory precedes complex thinking",
        "Higher-order cognitive operations require accessible knowledge structures in long-term memory. \
         You cannot analyse, evaluate or create with knowledge you cannot recall.",
        "Sequence instruction so foundational knowledge is encoded and retrievable before learners are \
         asked to apply it in complex ways.",
    ),
    (
        "2. Retrieval strengthens memory",
        "Actively recalling information from memory strengthens the neural pathways that make future \
         recall easier. Re-reading or re-watching does not produce the same effect.",
        "Build retrieval opportunities into the design with specific timing, mechanisms and spacing. \
         Retrieval is not a test event — it is an instructional strategy.",
    ),
    (
        "3. Cognitive load must be managed",
        "Working memory is limited. Extraneous cognitive load (effort not contributing to schema \
         formation) reduces the capacity available for learning. Complexity and novelty must be \
         introduced deliberately, not simultaneously.",
        "Remove presentation elements that do not serve the learning objective. Manage the number of \
         new concepts introduced at once. Use worked examples before asking learners to solve problems independently.",
    ),
];

const ROLE_CONTRIBUTIONS: [[&str; 3]; 4] = [
    [
        "Curriculum Design",
        "Programme-level sequencing and outcome coherence",
        "Ensuring foundational knowledge precedes complex application across the programme",
    ],
    [
        "Learning or Experience Design",
        "Instructional strategy and cognitive engagement",
        "Structuring retrieval, visible reasoning and appropriate challenge",
    ],
    [
        "Multimedia Design",
        "Cognitive representation through media",
        "Reducing extraneous load and supporting schema formation through appropriate representation",
    ],
    [
        "Learning Technology",
        "Platform affordances for retrieval, feedback and collaboration",
        "Ensuring the platform enables rather than constrains pedagogical intent",
    ],
];

fn reference() -> Vec<Block> {
    let mut blocks = vec![
        Block::para("Reference", S::SectionLabel),
        Block::para("The Three Learning Science Commitments", S::PhaseHeading),
        Block::heavy_rule(1.0, 0.0, 4.0),
        Block::para(
            "Use these commitments as your arbitration language when making design decisions.",
            S::BodyNote,
        ),
        Block::Spacer(3.0),
    ];
    for (title, body, implication) in COMMITMENTS {
        blocks.extend([
            Block::divider(2.0, 2.0),
            Block::para(title, S::ReferenceHeading),
            Block::para(body, S::Body),
            Block::para(format!("Design implication: {implication}"), S::BodyNote),
            Block::Spacer(2.0),
        ]);
    }

    let rows: Vec<&[&str]> = ROLE_CONTRIBUTIONS.iter().map(|r| r.as_slice()).collect();
    blocks.extend([
        Block::heavy_rule(1.0, 5.0, 4.0),
        Block::para("Role Contributions to the Activity System", S::PhaseHeading),
        Block::para(
            "Each role mediates learning differently. This table summarises how each contributes to durable learner capability.",
            S::BodyNote,
        ),
        Block::Spacer(2.0),
        Block::Table(Table::reference(
            &["Role", "Primary contribution", "Key learning science responsibility"],
            &rows,
            &[0.22, 0.30, 0.48],
            5.0,
        )),
        Block::Spacer(10.0),
        Block::divider(1.0, 1.0),
        Block::Spacer(3.0),
        Block::para("Bring this workbook to the 30-day follow-up session.", S::Small),
    ]);
    blocks
}

/// The workbook: cover, the eight agenda segments, reference.
pub fn handout_regions() -> Vec<Region<Block>> {
    vec![
        Region::new("cover", "Cover", cover()),
        Region::new("phase-1", "Phase 1 — Framing the Shared Object", phase1()),
        Region::new("phase-2", "Phase 2 — Learning Science Core", phase2()),
        Region::new("phase-3", "Phase 3 — Role Mapping", phase3()),
        Region::new("phase-4", "Phase 4 — Cross-Role Diagnosis", phase4()),
        Region::new("break", "Break", break_section()),
        Region::new("phase-5", "Phase 5 — Collaborative Redesign", phase5()),
        Region::new("phase-6", "Phase 6 — Cross-Team Critique", phase6()),
        Region::new("phase-7", "Phase 7 — Collaboration Charter", phase7()),
        Region::new("reference", "Reference", reference()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::{Artifact, Emitter};
    use crate::handout::surface::HandoutSurface;
    use crate::theme::Theme;

    async fn build(path: &std::path::Path) -> HandoutSurface {
        let mut surface = HandoutSurface::new(path, WORKBOOK_TITLE, FOOTER, Theme::handout());
        Emitter::new()
            .run(&mut surface, &handout_regions())
            .await
            .unwrap();
        surface
    }

    #[test]
    fn test_ten_regions() {
        let regions = handout_regions();
        assert_eq!(regions.len(), 10);
        assert_eq!(regions.first().unwrap().id, "cover");
        assert_eq!(regions.last().unwrap().id, "reference");
    }

    #[test]
    fn test_cover_has_three_identity_fields_and_nine_terms() {
        let cover = &handout_regions()[0];
        let fields: Vec<&str> = cover
            .elements
            .iter()
            .filter_map(|b| match b {
                Block::Field(label) => Some(label.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(fields, vec!["Name:", "Role:", "Date:"]);

        let tables: Vec<&Table> = cover
            .elements
            .iter()
            .filter_map(|b| match b {
                Block::Table(t) => Some(t),
                _ => None,
            })
            .collect();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].header, vec!["Term", "Definition"]);
        assert_eq!(tables[0].rows.len(), 9);
    }

    #[tokio::test]
    async fn test_first_page_carries_fields_and_glossary() {
        let dir = tempfile::tempdir().unwrap();
        let surface = build(&dir.path().join("handout.pdf")).await;
        let first = &surface.pages()[0];

        for label in IDENTITY_FIELDS {
            assert!(first.text_runs().any(|t| t == label), "missing {label}");
        }
        for (term, _) in GLOSSARY {
            assert!(first.text_runs().any(|t| t == term), "missing term {term}");
        }
        assert!(first.contains_text(FOOTER));
    }

    #[tokio::test]
    async fn test_every_region_starts_a_new_page() {
        let dir = tempfile::tempdir().unwrap();
        let surface = build(&dir.path().join("handout.pdf")).await;
        let pages = surface.pages();
        assert!(pages.len() >= 10, "only {} pages", pages.len());

        let starts = ["PHASE 1", "PHASE 2", "PHASE 3", "PHASE 4", "BREAK", "PHASE 5", "PHASE 6", "PHASE 7", "REFERENCE"];
        let mut last_page = 0;
        for label in starts {
            let page = pages
                .iter()
                .position(|p| p.text_runs().next() == Some(label))
                .unwrap_or_else(|| panic!("no page opens with {label}"));
            assert!(page > last_page, "{label} does not start a later page");
            last_page = page;
        }
    }

    #[tokio::test]
    async fn test_build_is_reproducible() {
        let dir = tempfile::tempdir().unwrap();
        let first = build(&dir.path().join("a.pdf")).await;
        let second = build(&dir.path().join("b.pdf")).await;

        assert_eq!(first.pages().len(), second.pages().len());
        let text = |s: &HandoutSurface| s.pages().iter().map(|p| p.plain_text()).collect::<Vec<_>>();
        assert_eq!(text(&first), text(&second));
    }

    #[tokio::test]
    async fn test_pdf_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("participant").join("learner-handout.pdf");
        let mut surface = HandoutSurface::new(&path, WORKBOOK_TITLE, FOOTER, Theme::handout());
        let report = Emitter::new().run(&mut surface, &handout_regions()).await.unwrap();

        assert_eq!(report.regions, 10);
        assert_eq!(report.artifact, Artifact::File { path: path.clone() });
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }
}
