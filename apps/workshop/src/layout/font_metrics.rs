//! Static width tables for the four standard Helvetica faces.
//!
//! Widths are the Adobe AFM advance widths in 1/1000 em. The oblique faces share
//! the upright tables. Tables cover ASCII 0x20..=0x7E (95 printable characters);
//! index = (char as usize) - 32. A handful of WinAnsi punctuation marks used in
//! the workshop copy are measured exactly, everything else falls back to the
//! face's average width.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Faces
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Regular,
    Bold,
    Oblique,
    BoldOblique,
}

impl Face {
    pub fn is_bold(&self) -> bool {
        matches!(self, Face::Bold | Face::BoldOblique)
    }

    pub fn is_italic(&self) -> bool {
        matches!(self, Face::Oblique | Face::BoldOblique)
    }

    /// PostScript name of the standard font.
    pub fn postscript_name(&self) -> &'static str {
        match self {
            Face::Regular => "Helvetica",
            Face::Bold => "Helvetica-Bold",
            Face::Oblique => "Helvetica-Oblique",
            Face::BoldOblique => "Helvetica-BoldOblique",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for one weight of Helvetica.
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    pub bold: bool,
    widths: [u16; 95],
    /// Fallback width for characters outside the table.
    pub average_char_width: u16,
}

impl FontMetricTable {
    fn char_width(&self, c: char) -> u16 {
        let code = c as usize;
        if (32..=126).contains(&code) {
            return self.widths[code - 32];
        }
        match (c, self.bold) {
            ('\u{2014}', _) | ('\u{2026}', _) => 1000,
            ('\u{2013}', _) => 556,
            ('\u{2018}' | '\u{2019}', false) => 222,
            ('\u{2018}' | '\u{2019}', true) => 278,
            ('\u{201C}' | '\u{201D}', false) => 333,
            ('\u{201C}' | '\u{201D}', true) => 500,
            ('\u{2022}', _) => 350,
            ('\u{00A0}', _) => 278,
            _ => self.average_char_width,
        }
    }

    /// Measures the advance width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars().map(|c| self.char_width(c) as f32).sum::<f32>() / 1000.0
    }

    /// Advance width of a string at `size_pt`, in points.
    pub fn width_pt(&self, s: &str, size_pt: f32) -> f32 {
        self.measure_str(s) * size_pt
    }

    pub fn space_width(&self) -> f32 {
        self.widths[0] as f32 / 1000.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables
// ────────────────────────────────────────────────────────────────────────────

static HELVETICA: FontMetricTable = FontMetricTable {
    bold: false,
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0    1    2    3    4    5    6    7    8    9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        278, 278, 584, 584, 584, 556, 1015,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        278, 278, 278, 469, 556, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
        // {    |    }    ~
        334, 260, 334, 584,
    ],
    average_char_width: 556,
};

static HELVETICA_BOLD: FontMetricTable = FontMetricTable {
    bold: true,
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0    1    2    3    4    5    6    7    8    9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        333, 333, 584, 584, 584, 611, 975,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        333, 278, 333, 584, 556, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
        // {    |    }    ~
        389, 280, 389, 584,
    ],
    average_char_width: 611,
};

/// Returns the static metric table for a face.
pub fn get_metrics(face: Face) -> &'static FontMetricTable {
    if face.is_bold() {
        &HELVETICA_BOLD
    } else {
        &HELVETICA
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        assert_eq!(get_metrics(Face::Regular).measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        // "Rust" = R(722) + u(556) + s(500) + t(278) = 2056
        let width = get_metrics(Face::Regular).measure_str("Rust");
        assert!((width - 2.056).abs() < 1e-4, "got {width}");
    }

    #[test]
    fn test_bold_is_wider_than_regular() {
        let text = "Cross-Role Diagnosis";
        let regular = get_metrics(Face::Regular).measure_str(text);
        let bold = get_metrics(Face::Bold).measure_str(text);
        assert!(bold > regular);
    }

    #[test]
    fn test_oblique_shares_upright_widths() {
        let text = "Define learning in one sentence.";
        assert_eq!(
            get_metrics(Face::Oblique).measure_str(text),
            get_metrics(Face::Regular).measure_str(text)
        );
    }

    #[test]
    fn test_em_dash_is_one_em() {
        let width = get_metrics(Face::Bold).measure_str("\u{2014}");
        assert!((width - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_unknown_char_falls_back_to_average() {
        let metrics = get_metrics(Face::Regular);
        let width = metrics.measure_str("\u{2260}");
        assert!((width - metrics.average_char_width as f32 / 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_width_pt_scales_with_size() {
        let metrics = get_metrics(Face::Regular);
        let w10 = metrics.width_pt("Phase", 10.0);
        let w20 = metrics.width_pt("Phase", 20.0);
        assert!((w20 - 2.0 * w10).abs() < 1e-4);
    }
}
