//! The 37-slide facilitation deck.
//!
//! Slides are listed in `SLIDES` in presentation order. Recurring layouts
//! (phase openers, commitments, writing prompts, dark task slides, numbered
//! question lists) are shared builders fed from content tables.

use crate::canvas::{Mark, Stroke};
use crate::deck::canvas::{SlideCanvas, DIM, GHOST, SOFT, WATERMARK};
use crate::emit::Region;
use crate::layout::Face;
use crate::theme::{Rgb, Theme, PT};

pub const DECK_TITLE: &str =
    "Designing Learning as a Cross-Functional Activity System — Workshop Slides";
const WORKSHOP: &str = "Designing Learning as a Cross-Functional Activity System";

const PHASE_1: &str = "Phase 1 — Framing the Shared Object";
const PHASE_2: &str = "Phase 2 — Learning Science Core";
const PHASE_3: &str = "Phase 3 — Role Mapping";
const PHASE_4: &str = "Phase 4 — Cross-Role Diagnosis";
const PHASE_5: &str = "Phase 5 — Collaborative Redesign";
const PHASE_6: &str = "Phase 6 — Cross-Team Critique";
const PHASE_7: &str = "Phase 7 — Collaboration Charter";

const NORM: [&str; 3] = [
    "\u{201C}We\u{2019}re diagnosing the system, not individuals.",
    "Misalignment is structural, not personal.",
    "Our goal is coherence, not blame.\u{201D}",
];

type SlideBuilder = fn(&mut SlideCanvas);

/// Slide titles and builders, in presentation order.
pub const SLIDES: [(&str, SlideBuilder); 37] = [
    ("Title", title),
    ("Agenda overview", agenda),
    ("Diagnostic norm", diagnostic_norm),
    ("Phase 1 header", |c| phase_intro(c, &PHASES[0])),
    ("Writing prompt 1A", |c| writing_prompt(c, &PROMPTS[0])),
    ("Writing prompt 1B", |c| writing_prompt(c, &PROMPTS[1])),
    ("The operational definition", definition),
    ("Unpacking the definition", participation_vs_learning),
    ("Writing prompt 1C", prompt_1c),
    ("Phase 2 header", |c| phase_intro(c, &PHASES[1])),
    ("Recall task", recall_task),
    ("Reveal: three commitments", reveal_commitments),
    ("Commitment 1", |c| commitment(c, 1, &COMMITMENTS[0])),
    ("Commitment 2", |c| commitment(c, 2, &COMMITMENTS[1])),
    ("Commitment 3", |c| commitment(c, 3, &COMMITMENTS[2])),
    ("Role-based application", role_application),
    ("Worked example setup", worked_example),
    ("Worked example reveal", diagnosis),
    ("Phase 3 header", |c| phase_intro(c, &PHASES[2])),
    ("Role clarification", role_clarification),
    ("Cross-role perspective taking", perspective_taking),
    ("Transition to Phase 4", transition),
    ("Phase 4 header", |c| phase_intro(c, &PHASES[3])),
    ("Diagnostic norm reminder", norm_reminder),
    ("Stage 1 — Identify", identify),
    ("Stage 2 — Diagnose misalignment", diagnose),
    ("Break", break_slide),
    ("Phase 5 header", |c| phase_intro(c, &PHASES[4])),
    ("Redesign map overview", redesign_map),
    ("Learning science justification", justification),
    ("Phase 6 header", |c| phase_intro(c, &PHASES[5])),
    ("Gallery walk protocol", gallery_walk),
    ("Phase 7 header", |c| phase_intro(c, &PHASES[6])),
    ("Individual commitments", individual_commitments),
    ("30-day follow-up plan", follow_up),
    ("Closing retrieval task", closing_retrieval),
    ("Close", close),
];

pub const TOTAL_SLIDES: usize = SLIDES.len();

/// Builds every slide as a region of marks, each ending with its number stamp.
pub fn deck_regions(theme: &Theme) -> Vec<Region<Mark>> {
    SLIDES
        .iter()
        .enumerate()
        .map(|(i, (name, build))| {
            let mut canvas = SlideCanvas::new(theme);
            build(&mut canvas);
            let n = i + 1;
            Region::new(format!("slide-{n:02}"), *name, canvas.finish(n, TOTAL_SLIDES))
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Shared builders
// ────────────────────────────────────────────────────────────────────────────

struct PhaseIntro {
    number: &'static str,
    title: &'static str,
    description: &'static str,
    image: bool,
}

const PHASES: [PhaseIntro; 7] = [
    PhaseIntro {
        number: "1",
        title: "Framing the Shared Object",
        description: "We begin by surfacing what we already believe learning is — then replacing those beliefs with an operational definition.",
        image: true,
    },
    PhaseIntro {
        number: "2",
        title: "Learning Science Core",
        description: "Three commitments that every design decision in this room must be accountable to.",
        image: true,
    },
    PhaseIntro {
        number: "3",
        title: "Role Mapping",
        description: "Each role mediates learning differently. Making those differences concrete is the first step toward genuine coordination.",
        image: true,
    },
    PhaseIntro {
        number: "4",
        title: "Cross-Role Diagnosis",
        description: "Apply learning science as a shared diagnostic lens to real design artefacts you brought to this room.",
        image: true,
    },
    PhaseIntro {
        number: "5",
        title: "Collaborative Redesign",
        description: "Translate the diagnosis into a coherent, learning-science-grounded redesign. Seven sections. One capability object. All roles contributing.",
        image: true,
    },
    PhaseIntro {
        number: "6",
        title: "Cross-Team Critique",
        description: "Structured feedback grounded in learning science. Three notes per redesign. No general impressions.",
        image: false,
    },
    PhaseIntro {
        number: "7",
        title: "Collaboration Charter",
        description: "Convert individual insight into concrete, accountable collective commitment.",
        image: false,
    },
];

fn phase_intro(c: &mut SlideCanvas, phase: &PhaseIntro) {
    let t = *c.theme();
    let (p, s) = (t.palette, t.type_scale);
    let (w, h, top) = (c.width(), c.height(), c.top());
    let x = c.left() + 8.0;

    c.background(p.field);
    c.rect(0.0, 0.0, 4.0, h, p.ink);
    c.text(x, h / 2.0 + 38.0, phase.number, Face::Bold, 120.0, GHOST);
    c.text(x, top + 5.0, "PHASE", Face::Bold, s.label.size, p.light);
    c.text(x, top + 18.0, phase.title, Face::Bold, s.display.size, p.ink);
    let right = c.right();
    c.rule(top + 22.0, x, right, p.ink, 1.2);

    let (slot_x, slot_w, slot_h) = (w * 0.62, w * 0.34, h * 0.5);
    let text_width = if phase.image {
        slot_x - x - 6.0
    } else {
        c.body_width() - 18.0
    };
    c.paragraph(
        x,
        top + 32.0,
        phase.description,
        Face::Regular,
        s.body.size,
        s.body.leading_mm(),
        p.mid,
        text_width,
    );
    if phase.image {
        c.image_slot(slot_x, (h - slot_h) / 2.0, slot_w, slot_h, "IMAGE");
    }
    c.footer(WORKSHOP);
}

struct WritingPrompt {
    label: &'static str,
    question: &'static str,
    instruction: &'static str,
}

const PROMPTS: [WritingPrompt; 2] = [
    WritingPrompt {
        label: "Writing prompt 1A",
        question: "Define learning in one sentence.",
        instruction: "Write without looking at the glossary. 90 seconds. No discussion.",
    },
    WritingPrompt {
        label: "Writing prompt 1B",
        question: "How do you know when learning has happened?",
        instruction: "One sentence. Write, don\u{2019}t type. 90 seconds.",
    },
];

fn writing_prompt(c: &mut SlideCanvas, prompt: &WritingPrompt) {
    let mid = c.height() / 2.0;
    c.header("Phase 1 — Activity", prompt.label);
    c.callout(mid - 26.0, 14.0, prompt.question);
    c.note(mid + 2.0, prompt.instruction);
    c.footer(PHASE_1);
}

struct Commitment {
    title: &'static str,
    body: &'static str,
    implication: &'static str,
}

const COMMITMENTS: [Commitment; 3] = [
    Commitment {
        title: "Memory precedes complex thinking",
        body: "You cannot analyse, evaluate or create with knowledge you cannot recall. \
               Higher-order cognitive operations require accessible knowledge structures in long-term memory.",
        implication: "Sequence instruction so foundational knowledge is encoded and retrievable before learners \
                      are asked to apply it in complex ways.",
    },
    Commitment {
        title: "Retrieval strengthens memory",
        body: "Actively recalling information from memory strengthens the neural pathways that make \
               future recall easier. Re-reading or re-watching does not produce the same effect.",
        implication: "Build retrieval opportunities into the design with specific timing, mechanisms and spacing. \
                      Retrieval is not a test event — it is an instructional strategy.",
    },
    Commitment {
        title: "Cognitive load must be managed",
        body: "Working memory is limited. Extraneous cognitive load — effort not contributing to \
               schema formation — reduces the capacity available for learning. Complexity and novelty \
               must be introduced deliberately, not simultaneously.",
        implication: "Remove presentation elements that do not serve the learning objective. Manage the number \
                      of new concepts introduced at once. Use worked examples before independent problem-solving.",
    },
];

fn commitment(c: &mut SlideCanvas, number: usize, commitment: &Commitment) {
    let t = *c.theme();
    let (p, s) = (t.palette, t.type_scale);
    let (x, top) = (c.left(), c.top());

    let watermark_x = c.right() - 55.0;
    let watermark_y = c.height() / 2.0 + 30.0;
    c.text(watermark_x, watermark_y, number.to_string(), Face::Bold, 100.0, WATERMARK);
    c.header(&format!("Commitment {number}"), commitment.title);

    let width = c.body_width() - 20.0;
    let y = c.paragraph(
        x,
        top + 32.0,
        commitment.body,
        Face::Regular,
        s.body.size,
        s.body.leading_mm(),
        p.ink,
        width,
    );
    c.implication(y + 6.0, &format!("Design implication: {}", commitment.implication));
    c.footer(PHASE_2);
}

/// Dark full-bleed slide: grey label, white display title, white rule.
fn dark_task(c: &mut SlideCanvas, label: &str, title: &str, rule_y: f32) {
    let t = *c.theme();
    let (p, s) = (t.palette, t.type_scale);
    let (x, top) = (c.left(), c.top());
    c.background(p.ink);
    c.text(x, top + 6.0, label, Face::Bold, s.label.size, p.light);
    c.text(x, top + 20.0, title, Face::Bold, s.display.size, p.white);
    c.hline(rule_y, p.white, 1.2);
}

/// Dashed list of single-line items.
#[allow(clippy::too_many_arguments)]
fn dashed(c: &mut SlideCanvas, y: f32, items: &[&str], face: Face, size: f32, step: f32, color: Rgb) -> f32 {
    let x = c.left();
    let mut y = y;
    for item in items {
        c.text(x, y, format!("\u{2014}  {item}"), face, size, color);
        y += step;
    }
    y
}

/// Quoted ground rule in bold italic.
fn norm_quote(c: &mut SlideCanvas, y: f32, size: f32, step_pt: f32) -> f32 {
    let ink = c.theme().palette.ink;
    let x = c.left();
    let mut y = y;
    for line in NORM {
        c.text(x, y, line, Face::BoldOblique, size, ink);
        y += step_pt * PT;
    }
    y
}

/// Prompts whose text may wrap; `marker` draws the bullet for each.
#[allow(clippy::too_many_arguments)]
fn wrapped_list(
    c: &mut SlideCanvas,
    y: f32,
    items: &[&str],
    indent: f32,
    face: Face,
    body: bool,
    color: Rgb,
    marker: fn(&mut SlideCanvas, usize, f32),
) -> f32 {
    let t = *c.theme();
    let step = if body { t.type_scale.body } else { t.type_scale.small };
    let x = c.left() + indent;
    let width = c.body_width() - indent - 2.0;
    let mut y = y;
    for (i, item) in items.iter().enumerate() {
        marker(c, i + 1, y);
        let end = c.paragraph(x, y, item, face, step.size, step.leading_mm(), color, width);
        y = end + 5.0;
    }
    y
}

// ────────────────────────────────────────────────────────────────────────────
// Opening
// ────────────────────────────────────────────────────────────────────────────

fn title(c: &mut SlideCanvas) {
    let t = *c.theme();
    let (p, s) = (t.palette, t.type_scale);
    let (w, h, top) = (c.width(), c.height(), c.top());

    c.background(p.ink);
    c.rect(w * 0.60, 0.0, w * 0.40, h, p.white);
    c.image_slot(0.0, 0.0, w * 0.58, h, "COVER IMAGE");

    let x = w * 0.62;
    c.text(x, top + 6.0, "WORKSHOP", Face::Bold, s.label.size, p.light);
    let mut y = top + 20.0;
    for line in ["Designing Learning", "as a Cross-Functional", "Activity System"] {
        c.text(x, y, line, Face::Bold, 24.0, p.ink);
        y += 30.0 * PT;
    }
    let right = c.right();
    c.rule(y + 4.0, x, right, p.ink, 1.2);
    c.text(x, y + 10.0, "135-minute design workshop", Face::Regular, s.small.size, p.mid);
}

const AGENDA: [(&str, &str, &str); 8] = [
    ("Phase 1", "0–15 min", "Framing the Shared Object"),
    ("Phase 2", "15–30 min", "Learning Science Core"),
    ("Phase 3", "30–50 min", "Role Mapping"),
    ("Phase 4", "50–75 min", "Cross-Role Diagnosis"),
    ("—", "75–85 min", "Break"),
    ("Phase 5", "85–110 min", "Collaborative Redesign"),
    ("Phase 6", "110–125 min", "Cross-Team Critique"),
    ("Phase 7", "125–135 min", "Collaboration Charter & Closing"),
];

fn agenda(c: &mut SlideCanvas) {
    let t = *c.theme();
    let (p, s) = (t.palette, t.type_scale);
    let (x, top, width) = (c.left(), c.top(), c.body_width());
    const ROW: f32 = 14.0;

    c.header("Overview", "Workshop agenda");
    for (i, (phase, time, name)) in AGENDA.iter().enumerate() {
        let row_top = top + 24.0 + i as f32 * ROW;
        if i % 2 == 0 {
            c.rect(x, row_top, width, ROW, p.field);
        }
        let baseline = row_top + ROW / 2.0 + s.small.size * 0.35 * PT;
        let is_break = *phase == "—";
        c.text(x + 3.0, baseline, *phase, Face::Bold, s.small.size, if is_break { p.light } else { p.ink });
        c.text(x + 30.0, baseline, *time, Face::Regular, s.small.size, p.mid);
        let (face, color) = if is_break {
            (Face::Regular, p.light)
        } else {
            (Face::Bold, p.ink)
        };
        c.text(x + 60.0, baseline, *name, face, s.small.size, color);
    }
    c.footer(WORKSHOP);
}

fn diagnostic_norm(c: &mut SlideCanvas) {
    let t = *c.theme();
    let (p, s) = (t.palette, t.type_scale);
    c.header("Ground rule", "Before we begin");
    let start = c.height() / 2.0 - 14.0;
    let y = norm_quote(c, start, 15.0, 21.0);
    c.hline(y + 2.0, p.rule, 0.5);
    let x = c.left();
    c.text(
        x,
        y + 8.0,
        "Return to this norm whenever tension rises during diagnosis.",
        Face::Regular,
        s.small.size,
        p.light,
    );
    c.footer(WORKSHOP);
}

// ────────────────────────────────────────────────────────────────────────────
// Phase 1
// ────────────────────────────────────────────────────────────────────────────

fn definition(c: &mut SlideCanvas) {
    let t = *c.theme();
    let (p, s) = (t.palette, t.type_scale);
    let (w, h, top) = (c.width(), c.height(), c.top());
    let x = c.left();

    c.background(p.ink);
    c.rect(w * 0.48, 0.0, w * 0.52, h, p.white);
    c.text(x, top + 6.0, "THE OPERATIONAL DEFINITION", Face::Bold, s.label.size, p.light);

    let mut y = h / 2.0 - 28.0;
    for line in [
        "\u{201C}Learning is durable change",
        "in knowledge structures",
        "that enables future participation",
        "and performance.\u{201D}",
    ] {
        c.text(x, y, line, Face::BoldOblique, 18.0, p.white);
        y += 24.0 * PT;
    }

    let (rx, rw) = (w * 0.52 + 6.0, w * 0.46);
    c.text(rx, top + 6.0, "THREE WORDS DOING THE WORK", Face::Bold, s.small.size, p.mid);
    let right = c.right();
    c.rule(top + 10.0, rx, right, p.rule, 0.6);

    let mut y = top + 20.0;
    for (word, gloss) in [
        ("Durable", "Not fleeting. Visible months later, not minutes after."),
        ("Knowledge structures", "Organised schemas in long-term memory, not isolated facts."),
        ("Enables future", "The test is what learners can do later, not during the session."),
    ] {
        c.text(rx, y, word, Face::Bold, s.body.size, p.ink);
        y += s.body.leading_mm() * 0.8;
        y = c.paragraph(
            rx,
            y,
            gloss,
            Face::Regular,
            s.small.size,
            s.small.leading_mm() * 0.9,
            p.mid,
            rw - 12.0,
        );
        y += 4.0;
    }
}

fn participation_vs_learning(c: &mut SlideCanvas) {
    let t = *c.theme();
    let (p, s) = (t.palette, t.type_scale);
    let (w, top) = (c.width(), c.top());

    c.header("Phase 1 — Insight", "Participation \u{2260} learning");
    let x = c.left();
    c.text(
        x,
        top + 28.0,
        "Most definitions of learning describe activity. Activity is what we hope causes learning.",
        Face::Regular,
        s.body.size,
        p.mid,
    );

    let col_w = w / 2.0 - x - 8.0;
    let y_top = top + 42.0;
    let columns: [(f32, &str, [&str; 4], bool); 2] = [
        (
            x,
            "Activity completion",
            [
                "Watched the video",
                "Completed the quiz",
                "Attended the session",
                "Submitted the reflection",
            ],
            true,
        ),
        (
            w / 2.0 + 4.0,
            "Durable capability",
            [
                "Recalls and applies the concept 6 months later",
                "Transfers knowledge to a novel situation",
                "Performs competently under real conditions",
                "Judgment improves over time",
            ],
            false,
        ),
    ];
    for (cx, label, items, struck) in columns {
        let color = if struck { p.light } else { p.ink };
        c.text(cx, y_top, label, Face::Bold, s.small.size, color);
        c.rule(y_top + 3.0, cx, cx + col_w, p.rule, 0.4);
        let mut y = y_top + 10.0;
        for item in items {
            let mark = if struck { "\u{2715}" } else { "\u{2713}" };
            c.text(cx, y, format!("{mark}  {item}"), Face::Regular, s.small.size, color);
            y += s.small.leading_mm() * 1.1;
        }
    }
    c.footer(PHASE_1);
}

fn prompt_1c(c: &mut SlideCanvas) {
    let t = *c.theme();
    let (p, s) = (t.palette, t.type_scale);
    let x = c.left();
    let leading = s.body.leading_mm();

    c.header("Phase 1 — Activity", "Writing prompt 1C");
    let mut y = c.height() / 2.0 - 20.0;
    for (n, text) in [
        ("1", "What must learners be able to do 6\u{2013}12 months after your module, in real conditions?"),
        ("2", "What cognitive change must occur for that to be possible?"),
    ] {
        c.circle(x + 4.0, y - 2.0, 4.0, p.ink);
        c.centered_at(x + 4.0, y - 0.5, n, Face::Bold, s.small.size, p.white);
        let lines = c.wrap(text, Face::Regular, s.body.size, c.body_width() - 14.0);
        let first = y - (lines.len() as f32 - 1.0) * leading / 2.0;
        c.lines(x + 10.0, first, &lines, Face::Regular, s.body.size, leading, p.ink);
        y += lines.len() as f32 * leading + 12.0;
    }
    let low = c.low();
    c.note(
        low,
        "3 minutes individual writing. Share two or three responses before moving on.",
    );
    c.footer(PHASE_1);
}

// ────────────────────────────────────────────────────────────────────────────
// Phase 2
// ────────────────────────────────────────────────────────────────────────────

fn recall_task(c: &mut SlideCanvas) {
    let t = *c.theme();
    let (p, s) = (t.palette, t.type_scale);
    let top = c.top();
    dark_task(c, "PHASE 2 \u{2014} RECALL TASK", "Close your notes.", top + 24.0);

    let (x, mid) = (c.left(), c.height() / 2.0);
    c.text(
        x,
        mid - 6.0,
        "Without looking, write the three learning science commitments",
        Face::BoldOblique,
        16.0,
        p.rule,
    );
    c.text(x, mid - 6.0 + 22.0 * PT, "from the pre-work. Two minutes.", Face::BoldOblique, 16.0, p.rule);
    c.text(
        x,
        mid + 20.0,
        "Silence is intentional. Do not help your neighbour.",
        Face::Regular,
        s.small.size,
        DIM,
    );
}

fn reveal_commitments(c: &mut SlideCanvas) {
    let t = *c.theme();
    let (p, s) = (t.palette, t.type_scale);
    let x = c.left();

    c.header("Phase 2 — Reveal", "The three commitments");
    let mut y = c.height() / 2.0 - 24.0;
    for (i, item) in COMMITMENTS.iter().enumerate() {
        c.text(x, y - 4.0, (i + 1).to_string(), Face::Bold, 28.0, GHOST);
        c.text(x + 14.0, y, item.title, Face::Bold, s.title.size, p.ink);
        y += 32.0 * PT;
    }
    let low = c.low();
    c.text(
        x,
        low,
        "How many did you get? These three commitments are the arbitration language for every design decision today.",
        Face::Regular,
        s.small.size,
        p.light,
    );
    c.footer(PHASE_2);
}

fn role_application(c: &mut SlideCanvas) {
    let t = *c.theme();
    let ink = t.palette.ink;
    let top = c.top();

    c.header("Phase 2 — Role-based application", "Apply the commitments to your work");
    c.note(top + 28.0, "Form role-based groups. Discuss the three questions below. 10 minutes.");
    let y = c.height() / 2.0 - 22.0;
    wrapped_list(
        c,
        y,
        &[
            "Where is retrieval structured in your typical design work? Name a specific artefact or moment.",
            "Where might cognitive load be excessive? Name a specific module, assessment or platform.",
            "Where is thinking hidden? Where do learners perform activity without their reasoning being visible?",
        ],
        6.0,
        Face::Regular,
        false,
        ink,
        |c, n, y| {
            let t = *c.theme();
            let x = c.left();
            c.text(x, y, format!("{n}."), Face::Bold, t.type_scale.small.size, t.palette.ink);
        },
    );
    c.footer(PHASE_2);
}

fn worked_example(c: &mut SlideCanvas) {
    let t = *c.theme();
    let (p, s) = (t.palette, t.type_scale);
    let (x, top, mid) = (c.left(), c.top(), c.height() / 2.0);

    c.header("Phase 2 — Worked example", "Diagnosis in practice");
    c.note(top + 28.0, "Before we diagnose your work, let\u{2019}s practice on this case.");

    let box_w = (c.body_width() - 8.0) / 2.0;
    for (i, (label, text)) in [
        ("Module outcome", "Evaluate ethical frameworks"),
        ("Assessment", "Multiple-choice quiz on definitions"),
    ]
    .into_iter()
    .enumerate()
    {
        let bx = x + i as f32 * (box_w + 8.0);
        let by = mid - 14.0;
        c.rounded(bx, by, box_w, 20.0, 2.0, p.field, Some(Stroke::new(p.rule, 0.5)));
        c.text(bx + 3.0, by + 3.0, label.to_uppercase(), Face::Bold, s.micro.size, p.light);
        c.text(bx + 3.0, by + 11.0, text, Face::Bold, s.body.size, p.ink);
    }
    c.centered(
        mid + 14.0,
        "What is the misalignment? Write your answer before the next slide.",
        Face::BoldOblique,
        s.small.size,
        p.mid,
    );
    c.footer(PHASE_2);
}

fn diagnosis(c: &mut SlideCanvas) {
    let t = *c.theme();
    let (p, s) = (t.palette, t.type_scale);
    let (x, top) = (c.left(), c.top());
    let leading = s.body.leading_mm();

    c.header("Phase 2 — Worked example reveal", "The diagnosis");
    let mut y = top + 30.0;
    for (label, value) in [
        ("Outcome demands", "Evaluation \u{2014} apply a schema to a novel ethical situation"),
        ("Assessment tests", "Recognition memory \u{2014} recall of labels and definitions"),
        (
            "Gap",
            "Schema application requires accessible knowledge AND practiced judgment. The assessment only tests the first condition.",
        ),
        (
            "Commitment violated",
            "Memory precedes complex thinking: the assessment never asks learners to think.",
        ),
    ] {
        c.text(x, y, label.to_uppercase(), Face::Bold, s.small.size, p.mid);
        let width = c.body_width() - 45.0;
        let end = c.paragraph(x + 42.0, y, value, Face::Regular, s.body.size, leading, p.ink, width);
        y = end.max(y + leading) + 3.0;
        c.hline(y - 1.5, p.rule, 0.3);
    }
    c.footer(PHASE_2);
}

// ────────────────────────────────────────────────────────────────────────────
// Phase 3
// ────────────────────────────────────────────────────────────────────────────

fn role_clarification(c: &mut SlideCanvas) {
    let t = *c.theme();
    let (p, s) = (t.palette, t.type_scale);
    let (x, top, mid) = (c.left(), c.top(), c.height() / 2.0);

    c.header("Phase 3 — Role clarification", "Work within your role group");
    c.note(top + 27.0, "Use the prompts in your workbook. 15 minutes.");

    let col_w = c.body_width() / 2.0 - 4.0;
    for (i, (role, focus)) in [
        ("Curriculum Design", "Alignment, sequencing, transfer"),
        ("Learning / Experience Design", "Cognitive operations, retrieval, visible reasoning"),
        ("Multimedia Design", "Cognitive function, load, schema support"),
        ("Learning Technology", "Affordances, constraints, analytics"),
    ]
    .into_iter()
    .enumerate()
    {
        let cx = if i % 2 == 0 { x } else { x + col_w + 8.0 };
        let cy = if i < 2 { mid - 22.0 } else { mid + 4.0 };
        c.rounded(cx, cy - 4.0, col_w, 18.0, 2.0, p.field, None);
        c.text(cx + 3.0, cy + 1.0, role, Face::Bold, s.small.size, p.ink);
        c.text(cx + 3.0, cy + 7.0, focus, Face::Regular, s.micro.size, p.mid);
    }
    c.footer(PHASE_3);
}

fn perspective_taking(c: &mut SlideCanvas) {
    let t = *c.theme();
    let (p, s) = (t.palette, t.type_scale);
    let x = c.left();
    let leading = s.body.leading_mm();

    c.header("Phase 3 — Cross-role perspective taking", "Pair with a different role");
    let mut y = c.height() / 2.0 - 20.0;
    for (label, text) in [
        ("Step 1", "Describe a real design decision you made recently."),
        (
            "Step 2",
            "Your partner identifies which learning science commitment it serves \u{2014} or violates.",
        ),
        ("Step 3", "Switch. 2 minutes per person."),
    ] {
        c.text(x, y, label, Face::Bold, s.body.size, p.ink);
        let width = c.body_width() - 30.0;
        y = c.paragraph(x + 26.0, y, text, Face::Regular, s.body.size, leading, p.mid, width) + 5.0;
    }
    c.footer(PHASE_3);
}

fn transition(c: &mut SlideCanvas) {
    let t = *c.theme();
    let (p, s) = (t.palette, t.type_scale);
    let (x, top, mid) = (c.left(), c.top(), c.height() / 2.0);

    c.background(p.ink);
    c.text(x, top + 6.0, "TRANSITION", Face::Bold, s.label.size, p.light);
    c.text(x, mid - 16.0, "The question shifts.", Face::Bold, 22.0, p.white);
    c.hline(mid - 10.0, p.white, 1.0);
    c.text(x, mid + 2.0, "From: \u{201C}What does my role do?\u{201D}", Face::Regular, 16.0, SOFT);
    c.text(
        x,
        mid + 18.0,
        "To: \u{201C}Where is the system failing the learner?\u{201D}",
        Face::Bold,
        16.0,
        p.white,
    );
    let low = c.low();
    c.text(
        x,
        low,
        "Mixed-role team assignments will now be revealed.",
        Face::Regular,
        s.small.size,
        DIM,
    );
}

// ────────────────────────────────────────────────────────────────────────────
// Phase 4
// ────────────────────────────────────────────────────────────────────────────

fn norm_reminder(c: &mut SlideCanvas) {
    let t = *c.theme();
    let (p, s) = (t.palette, t.type_scale);
    c.header("Phase 4 — Ground rule", "Reminder before we begin");
    let start = c.height() / 2.0 - 16.0;
    norm_quote(c, start, 16.0, 22.0);
    let (x, low) = (c.left(), c.low());
    c.text(
        x,
        low,
        "Point to specific elements in the artefact. Not general impressions.",
        Face::Regular,
        s.small.size,
        p.light,
    );
    c.footer(PHASE_4);
}

fn identify(c: &mut SlideCanvas) {
    let t = *c.theme();
    let (p, s) = (t.palette, t.type_scale);
    let (x, top) = (c.left(), c.top());

    c.header("Phase 4 \u{2014} Stage 1", "Identify");
    c.note(top + 27.0, "5 minutes. Point to specific elements in the artefact.");
    let mut y = c.height() / 2.0 - 24.0;
    for (i, q) in [
        "What must learners remember?",
        "Where is retrieval structured?",
        "Where is thinking visible?",
        "Where is cognitive load unnecessary?",
    ]
    .into_iter()
    .enumerate()
    {
        c.text(x, y, format!("{}.", i + 1), Face::Bold, s.body.size, p.light);
        c.text(x + 8.0, y, q, Face::Regular, s.body.size, p.ink);
        y += s.body.leading_mm() * 1.4;
    }
    c.footer(PHASE_4);
}

fn diagnose(c: &mut SlideCanvas) {
    let t = *c.theme();
    let (p, s) = (t.palette, t.type_scale);
    let (x, top) = (c.left(), c.top());

    c.header("Phase 4 \u{2014} Stage 2", "Diagnose misalignment");
    c.note(top + 27.0, "20 minutes. Work through both questions.");
    let mut y = c.height() / 2.0 - 22.0;
    for (n, q, hint) in [
        ("5", "Where do role decisions contradict each other?", "List at least two contradictions."),
        (
            "6",
            "Which contradictions most impair learning?",
            "Rank by impact on the learner. This is your redesign focus.",
        ),
    ] {
        c.text(x, y - 6.0, n, Face::Bold, 26.0, p.highlight);
        c.text(x + 12.0, y, q, Face::Bold, s.body.size, p.ink);
        c.text(x + 12.0, y + s.small.leading_mm(), hint, Face::Oblique, s.small.size, p.mid);
        y += s.body.leading_mm() * 2.0 + 8.0;
    }
    c.footer(PHASE_4);
}

fn break_slide(c: &mut SlideCanvas) {
    let t = *c.theme();
    let (p, s) = (t.palette, t.type_scale);
    let mid = c.height() / 2.0;

    c.background(p.field);
    c.centered(mid - 4.0, "Break", Face::Bold, s.hero.size, p.rule);
    c.centered(mid + 14.0, "10 minutes", Face::Regular, s.body.size, p.light);
    let y = c.theme().page.bottom() - 16.0;
    c.centered(
        y,
        "When you return: identify the one misalignment most blocking learning. That is your redesign focus.",
        Face::BoldOblique,
        s.small.size,
        p.mid,
    );
}

// ────────────────────────────────────────────────────────────────────────────
// Phase 5
// ────────────────────────────────────────────────────────────────────────────

const REDESIGN_SECTIONS: [&str; 7] = [
    "Capability Object",
    "Retrieval Points",
    "Visible Reasoning",
    "Load Reduction",
    "Media Justification",
    "Platform Alignment",
    "Connection to Programme",
];

fn redesign_map(c: &mut SlideCanvas) {
    let t = *c.theme();
    let (p, s) = (t.palette, t.type_scale);
    let (x, top) = (c.left(), c.top());
    const COLUMNS: usize = 4;
    const GAP: f32 = 4.0;
    const CELL_H: f32 = 18.0;

    c.header("Phase 5 — Redesign map", "Seven sections. One coherent object.");
    c.note(top + 27.0, "Use the template in your workbook. 25 minutes. Coherent > complete.");

    let cell_w = (c.body_width() - (COLUMNS - 1) as f32 * GAP) / COLUMNS as f32;
    let y_top = c.height() / 2.0 - 20.0;
    for (i, section) in REDESIGN_SECTIONS.iter().enumerate() {
        let cx = x + (i % COLUMNS) as f32 * (cell_w + GAP);
        let cy = y_top + (i / COLUMNS) as f32 * (CELL_H + GAP);
        c.rounded(cx, cy, cell_w, CELL_H, 2.0, p.field, None);
        c.text(cx + 3.0, cy + 5.0, format!("{}.", i + 1), Face::Bold, s.label.size, p.light);
        c.paragraph(
            cx + 3.0,
            cy + 11.0,
            section,
            Face::Bold,
            s.small.size,
            s.small.leading_mm(),
            p.ink,
            cell_w - 8.0,
        );
    }
    c.footer(PHASE_5);
}

fn justification(c: &mut SlideCanvas) {
    let t = *c.theme();
    let ink = t.palette.ink;
    let top = c.top();

    c.header("Phase 5 — Learning Science Justification", "Before the gallery walk");
    c.note(
        top + 28.0,
        "Complete the Learning Science Justification section. If you cannot answer these, \
         the redesign is not yet grounded in science.",
    );
    let y = c.height() / 2.0 - 18.0;
    wrapped_list(
        c,
        y,
        &[
            "What memory structures are strengthened by this redesign?",
            "Where is retrieval embedded, and at what intervals?",
            "What cognitive load decisions were made? What was added, what was removed, and why?",
        ],
        8.0,
        Face::Regular,
        true,
        ink,
        |c, _, y| {
            let (x, ink) = (c.left(), c.theme().palette.ink);
            c.circle(x + 2.5, y - 1.5, 2.5, ink);
        },
    );
    c.footer(PHASE_5);
}

// ────────────────────────────────────────────────────────────────────────────
// Phase 6
// ────────────────────────────────────────────────────────────────────────────

/// Sticky-note colours of the gallery walk.
pub const STRENGTH: Rgb = Rgb::hex(0x4A7C59);
pub const TENSION: Rgb = Rgb::hex(0xB8860B);
pub const QUESTION: Rgb = Rgb::hex(0x2B5EA7);

fn gallery_walk(c: &mut SlideCanvas) {
    let t = *c.theme();
    let (p, s) = (t.palette, t.type_scale);
    let (x, top) = (c.left(), c.top());

    c.header("Phase 6 — Gallery walk protocol", "Three notes. Every reviewer. Every redesign.");
    c.note(top + 27.0, "Review at least two redesigns. 15 minutes.");

    let mut y = c.height() / 2.0 - 24.0;
    for (color, label, desc) in [
        (
            STRENGTH,
            "Strength",
            "What aligns well with learning science? Name the commitment it serves.",
        ),
        (
            TENSION,
            "Tension",
            "Where might the design impair learning? Name the commitment it violates.",
        ),
        (
            QUESTION,
            "Clarification question",
            "What needs more explanation to evaluate the design?",
        ),
    ] {
        c.rounded(x, y - 8.0, 3.0, 10.0, 1.0, color, None);
        c.text(x + 7.0, y - 5.0, label, Face::Bold, s.body.size, p.ink);
        let width = c.body_width() - 12.0;
        let end = c.paragraph(
            x + 7.0,
            y + 1.0,
            desc,
            Face::Regular,
            s.small.size,
            s.small.leading_mm(),
            p.mid,
            width,
        );
        y = end + 8.0;
    }
    c.footer(PHASE_6);
}

// ────────────────────────────────────────────────────────────────────────────
// Phase 7 and close
// ────────────────────────────────────────────────────────────────────────────

fn individual_commitments(c: &mut SlideCanvas) {
    let t = *c.theme();
    let (p, s) = (t.palette, t.type_scale);
    let top = c.top();

    c.header("Phase 7 — Individual commitments", "Write before you share");
    c.note(
        top + 27.0,
        "3 minutes. Individual writing first. No discussion until everyone has written.",
    );
    let y = c.height() / 2.0 - 22.0;
    dashed(
        c,
        y,
        &[
            "One decision I will no longer make alone",
            "One role I need earlier in the design process",
            "One learning science principle I will use in future discussions",
            "One process change we will implement in the next design cycle",
        ],
        Face::Regular,
        s.body.size,
        s.body.leading_mm() * 1.5,
        p.ink,
    );
    c.footer(PHASE_7);
}

fn follow_up(c: &mut SlideCanvas) {
    let t = *c.theme();
    let (p, s) = (t.palette, t.type_scale);
    let (x, top) = (c.left(), c.top());

    c.header("Phase 7 — 30-day follow-up", "In 4 weeks.");
    c.text(
        x,
        top + 29.0,
        "We meet for 30 minutes. Each role shares three things.",
        Face::Regular,
        s.body.size,
        p.mid,
    );
    let mut y = c.height() / 2.0 - 14.0;
    for (i, item) in [
        "One decision you made differently since the workshop",
        "One place where collaboration improved",
        "One remaining misalignment that needs addressing",
    ]
    .into_iter()
    .enumerate()
    {
        c.text(x, y - 4.0, (i + 1).to_string(), Face::Bold, s.title.size, GHOST);
        c.text(x + 12.0, y, item, Face::Regular, s.body.size, p.ink);
        y += s.body.leading_mm() * 1.8;
    }
    let low = c.low();
    c.text(
        x,
        low,
        "Calendar invitations go out today. This is not optional.",
        Face::BoldOblique,
        s.small.size,
        p.light,
    );
    c.footer(PHASE_7);
}

fn closing_retrieval(c: &mut SlideCanvas) {
    let t = *c.theme();
    let (p, s) = (t.palette, t.type_scale);
    let top = c.top();

    dark_task(c, "CLOSING RETRIEVAL TASK", "No notes. Write three things.", top + 25.0);
    let y = c.height() / 2.0 - 16.0;
    dashed(
        c,
        y,
        &[
            "How you now define learning",
            "One way your role mediates cognitive change",
            "One collaboration commitment you are taking forward",
        ],
        Face::Regular,
        15.0,
        24.0 * PT,
        p.rule,
    );
    let (x, low) = (c.left(), c.low());
    c.text(
        x,
        low,
        "2 minutes. Silent. These are for you, not for the group.",
        Face::Regular,
        s.small.size,
        DIM,
    );
}

fn close(c: &mut SlideCanvas) {
    let t = *c.theme();
    let (p, s) = (t.palette, t.type_scale);
    let (w, h, top) = (c.width(), c.height(), c.top());

    c.background(p.ink);
    c.rect(0.0, 0.0, w * 0.42, h, p.white);
    c.image_slot(0.0, 0.0, w * 0.40, h, "CLOSING IMAGE");

    let x = w * 0.44;
    c.text(x, top + 6.0, "YOU LEAVE WITH", Face::Bold, s.label.size, DIM);
    let right = c.right();
    c.rule(top + 10.0, x, right, p.mid, 0.6);
    let mut y = top + 20.0;
    for item in [
        "A redesigned learning experience artefact",
        "A shared operational definition of learning",
        "Practical learning science commitments",
        "A cross-role collaboration charter",
        "A 30-day follow-up plan",
    ] {
        c.text(x, y, format!("\u{2014}  {item}"), Face::Regular, s.small.size, p.white);
        y += s.small.leading_mm() * 1.3;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp(region: &Region<Mark>) -> &str {
        region
            .elements
            .last()
            .and_then(Mark::as_text)
            .unwrap_or_default()
    }

    #[test]
    fn test_deck_has_thirty_seven_numbered_slides() {
        let regions = deck_regions(&Theme::slides());
        assert_eq!(regions.len(), 37);
        assert_eq!(TOTAL_SLIDES, 37);
        for (i, region) in regions.iter().enumerate() {
            assert_eq!(stamp(region), format!("{} / 37", i + 1), "slide {}", region.id);
        }
        assert_eq!(stamp(&regions[36]), "37 / 37");
        assert_eq!(regions[0].id, "slide-01");
    }

    #[test]
    fn test_text_stays_on_the_slide() {
        let theme = Theme::slides();
        for region in deck_regions(&theme) {
            for mark in &region.elements {
                if let Mark::Text { x, y, text, .. } = mark {
                    assert!(
                        (0.0..=theme.page.width).contains(x) && (0.0..=theme.page.height).contains(y),
                        "'{text}' on {} at ({x}, {y})",
                        region.id
                    );
                }
            }
        }
    }

    #[test]
    fn test_phase_openers_share_one_layout() {
        let regions = deck_regions(&Theme::slides());
        let openers: Vec<&Region<Mark>> = regions
            .iter()
            .filter(|r| r.title.ends_with("header"))
            .collect();
        assert_eq!(openers.len(), 7);
        for (opener, phase) in openers.iter().zip(PHASES.iter()) {
            let texts: Vec<&str> = opener.elements.iter().filter_map(Mark::as_text).collect();
            assert_eq!(texts[0], phase.number);
            assert_eq!(texts[1], "PHASE");
            assert_eq!(texts[2], phase.title);
            assert_eq!(texts.contains(&"[ IMAGE ]"), phase.image);
        }
    }

    #[test]
    fn test_commitment_slides_carry_implication() {
        let regions = deck_regions(&Theme::slides());
        let slide = &regions[12];
        assert_eq!(slide.title, "Commitment 1");
        let text: String = slide
            .elements
            .iter()
            .filter_map(Mark::as_text)
            .collect::<Vec<_>>()
            .join(" ");
        assert!(text.contains("Design implication: Sequence instruction"));
        assert!(text.contains("COMMITMENT 1"));
    }

    #[test]
    fn test_agenda_lists_every_segment() {
        let regions = deck_regions(&Theme::slides());
        let agenda = &regions[1];
        for (_, time, name) in AGENDA {
            assert!(agenda.elements.iter().any(|m| m.as_text() == Some(time)));
            assert!(agenda.elements.iter().any(|m| m.as_text() == Some(name)));
        }
    }

    #[test]
    fn test_deck_is_deterministic() {
        let theme = Theme::slides();
        assert_eq!(deck_regions(&theme), deck_regions(&theme));
    }
}
