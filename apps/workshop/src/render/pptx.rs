//! Pages of marks to a PowerPoint package.
//!
//! The package is the minimum PowerPoint opens without repair: one master, one
//! blank layout, one theme and one slide part per page. Every mark becomes a
//! DrawingML shape at the same position it has on the PDF page.

use std::fmt::Write as FmtWrite;
use std::io::{Cursor, Write};

use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::canvas::{Align, Mark, Page, Stroke};
use crate::errors::EmitError;
use crate::layout::get_metrics;
use crate::theme::{Rgb, Theme, PT};

const EMU_PER_MM: f32 = 36000.0;
const EMU_PER_PT: f32 = 12700.0;

const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
const NS_REL: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_CORE: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
const REL_EXTENDED: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
const REL_SLIDE_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
const REL_SLIDE_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
const REL_SLIDE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
const REL_THEME: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Fixed accents for the gallery-walk colours; everything else is monochrome.
const ACCENTS: [Rgb; 3] = [Rgb::hex(0x4A7C59), Rgb::hex(0xB8860B), Rgb::hex(0x2B5EA7)];

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn emu(mm: f32) -> i64 {
    (mm * EMU_PER_MM).round() as i64
}

fn line_emu(width_pt: f32) -> i64 {
    (width_pt * EMU_PER_PT).round() as i64
}

// ────────────────────────────────────────────────────────────────────────────
// Package parts
// ────────────────────────────────────────────────────────────────────────────

fn content_types(slides: usize) -> Result<String, EmitError> {
    let mut xml = String::with_capacity(2048);
    xml.push_str(XML_DECL);
    xml.push_str(r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#);
    xml.push_str(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
    xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);
    xml.push_str(r#"<Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>"#);
    xml.push_str(r#"<Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>"#);
    xml.push_str(r#"<Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>"#);
    xml.push_str(r#"<Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>"#);
    for n in 1..=slides {
        write!(
            xml,
            r#"<Override PartName="/ppt/slides/slide{n}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#
        )?;
    }
    xml.push_str(r#"<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#);
    xml.push_str(r#"<Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>"#);
    xml.push_str("</Types>");
    Ok(xml)
}

fn relationships(rels: &[(String, &str, String)]) -> Result<String, EmitError> {
    let mut xml = String::with_capacity(256 + rels.len() * 160);
    xml.push_str(XML_DECL);
    write!(xml, r#"<Relationships xmlns="{NS_REL}">"#)?;
    for (id, rel_type, target) in rels {
        write!(xml, r#"<Relationship Id="{id}" Type="{rel_type}" Target="{target}"/>"#)?;
    }
    xml.push_str("</Relationships>");
    Ok(xml)
}

fn core_props(title: &str) -> String {
    format!(
        "{XML_DECL}<cp:coreProperties xmlns:cp=\"http://schemas.openxmlformats.org/package/2006/metadata/core-properties\" \
         xmlns:dc=\"http://purl.org/dc/elements/1.1/\" xmlns:dcterms=\"http://purl.org/dc/terms/\" \
         xmlns:dcmitype=\"http://purl.org/dc/dcmitype/\" xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">\
         <dc:title>{}</dc:title><dc:creator>{}</dc:creator></cp:coreProperties>",
        escape_xml(title),
        env!("CARGO_PKG_NAME"),
    )
}

fn app_props(slides: usize) -> String {
    format!(
        "{XML_DECL}<Properties xmlns=\"http://schemas.openxmlformats.org/officeDocument/2006/extended-properties\" \
         xmlns:vt=\"http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes\">\
         <Application>{}</Application><Slides>{slides}</Slides></Properties>",
        env!("CARGO_PKG_NAME"),
    )
}

fn presentation(slides: usize, width: f32, height: f32) -> Result<String, EmitError> {
    let mut xml = String::with_capacity(1024 + slides * 48);
    xml.push_str(XML_DECL);
    write!(xml, r#"<p:presentation xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}">"#)?;
    xml.push_str(r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>"#);
    if slides > 0 {
        xml.push_str("<p:sldIdLst>");
        for i in 0..slides {
            write!(xml, r#"<p:sldId id="{}" r:id="rId{}"/>"#, 256 + i, 3 + i)?;
        }
        xml.push_str("</p:sldIdLst>");
    }
    write!(xml, r#"<p:sldSz cx="{}" cy="{}"/>"#, emu(width), emu(height))?;
    xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    xml.push_str("</p:presentation>");
    Ok(xml)
}

fn empty_tree() -> &'static str {
    r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#
}

fn slide_master() -> String {
    format!(
        "{XML_DECL}<p:sldMaster xmlns:a=\"{NS_A}\" xmlns:r=\"{NS_R}\" xmlns:p=\"{NS_P}\">\
         <p:cSld><p:bg><p:bgRef idx=\"1001\"><a:schemeClr val=\"bg1\"/></p:bgRef></p:bg>\
         <p:spTree>{}</p:spTree></p:cSld>\
         <p:clrMap bg1=\"lt1\" tx1=\"dk1\" bg2=\"lt2\" tx2=\"dk2\" accent1=\"accent1\" accent2=\"accent2\" \
         accent3=\"accent3\" accent4=\"accent4\" accent5=\"accent5\" accent6=\"accent6\" hlink=\"hlink\" folHlink=\"folHlink\"/>\
         <p:sldLayoutIdLst><p:sldLayoutId id=\"2147483649\" r:id=\"rId1\"/></p:sldLayoutIdLst>\
         <p:txStyles><p:titleStyle/><p:bodyStyle/><p:otherStyle/></p:txStyles></p:sldMaster>",
        empty_tree()
    )
}

fn slide_layout() -> String {
    format!(
        "{XML_DECL}<p:sldLayout xmlns:a=\"{NS_A}\" xmlns:r=\"{NS_R}\" xmlns:p=\"{NS_P}\" type=\"blank\" preserve=\"1\">\
         <p:cSld name=\"Blank\"><p:spTree>{}</p:spTree></p:cSld>\
         <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>",
        empty_tree()
    )
}

fn theme_part(theme: &Theme) -> Result<String, EmitError> {
    let palette = &theme.palette;
    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECL);
    write!(xml, r#"<a:theme xmlns:a="{NS_A}" name="Workshop"><a:themeElements>"#)?;

    xml.push_str(r#"<a:clrScheme name="Workshop">"#);
    let scheme = [
        ("dk1", palette.ink),
        ("lt1", palette.white),
        ("dk2", palette.mid),
        ("lt2", palette.field),
        ("accent1", palette.light),
        ("accent2", palette.rule),
        ("accent3", palette.highlight),
        ("accent4", ACCENTS[0]),
        ("accent5", ACCENTS[1]),
        ("accent6", ACCENTS[2]),
        ("hlink", ACCENTS[2]),
        ("folHlink", palette.mid),
    ];
    for (name, color) in scheme {
        write!(xml, r#"<a:{name}><a:srgbClr val="{}"/></a:{name}>"#, color.srgb())?;
    }
    xml.push_str("</a:clrScheme>");

    xml.push_str(r#"<a:fontScheme name="Workshop">"#);
    for font in ["majorFont", "minorFont"] {
        write!(
            xml,
            r#"<a:{font}><a:latin typeface="Helvetica"/><a:ea typeface=""/><a:cs typeface=""/></a:{font}>"#
        )?;
    }
    xml.push_str("</a:fontScheme>");

    let solid = r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#;
    xml.push_str(r#"<a:fmtScheme name="Workshop"><a:fillStyleLst>"#);
    xml.push_str(&solid.repeat(3));
    xml.push_str("</a:fillStyleLst><a:lnStyleLst>");
    for w in [6350, 12700, 19050] {
        write!(xml, r#"<a:ln w="{w}">{solid}</a:ln>"#)?;
    }
    xml.push_str("</a:lnStyleLst><a:effectStyleLst>");
    xml.push_str(&"<a:effectStyle><a:effectLst/></a:effectStyle>".repeat(3));
    xml.push_str("</a:effectStyleLst><a:bgFillStyleLst>");
    xml.push_str(&solid.repeat(3));
    xml.push_str("</a:bgFillStyleLst></a:fmtScheme>");

    xml.push_str("</a:themeElements><a:objectDefaults/><a:extraClrSchemeLst/></a:theme>");
    Ok(xml)
}

// ────────────────────────────────────────────────────────────────────────────
// Slide shapes
// ────────────────────────────────────────────────────────────────────────────

fn solid_fill(xml: &mut String, color: Rgb) -> Result<(), EmitError> {
    write!(xml, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color.srgb())?;
    Ok(())
}

fn outline(xml: &mut String, stroke: Option<Stroke>) -> Result<(), EmitError> {
    match stroke {
        Some(s) => {
            write!(xml, r#"<a:ln w="{}">"#, line_emu(s.width_pt))?;
            solid_fill(xml, s.color)?;
            xml.push_str("</a:ln>");
        }
        None => xml.push_str("<a:ln><a:noFill/></a:ln>"),
    }
    Ok(())
}

fn xfrm(xml: &mut String, x: f32, y: f32, w: f32, h: f32, flip: &str) -> Result<(), EmitError> {
    write!(
        xml,
        r#"<a:xfrm{flip}><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
        emu(x),
        emu(y),
        emu(w).max(0),
        emu(h).max(0)
    )?;
    Ok(())
}

fn shape_xml(xml: &mut String, id: usize, mark: &Mark) -> Result<(), EmitError> {
    match mark {
        Mark::Text {
            x,
            y,
            text,
            face,
            size,
            color,
            align,
        } => {
            let width = get_metrics(*face).width_pt(text, *size) * PT * 1.05 + 1.0;
            let height = size * 1.2 * PT;
            let top = y - size * PT * 0.8;
            let (left, algn) = match align {
                Align::Left => (*x, "l"),
                Align::Center => (x - width / 2.0, "ctr"),
                Align::Right => (x - width, "r"),
            };

            write!(
                xml,
                r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="Text {id}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:spPr>"#
            )?;
            xfrm(xml, left, top, width, height, "")?;
            xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/></p:spPr>"#);
            xml.push_str(r#"<p:txBody><a:bodyPr wrap="none" lIns="0" tIns="0" rIns="0" bIns="0" rtlCol="0"><a:noAutofit/></a:bodyPr><a:lstStyle/>"#);
            write!(xml, r#"<a:p><a:pPr algn="{algn}"/><a:r><a:rPr lang="en-GB" sz="{}""#, (size * 100.0).round() as i64)?;
            if face.is_bold() {
                xml.push_str(r#" b="1""#);
            }
            if face.is_italic() {
                xml.push_str(r#" i="1""#);
            }
            xml.push_str(r#" dirty="0">"#);
            solid_fill(xml, *color)?;
            xml.push_str(r#"<a:latin typeface="Helvetica"/></a:rPr>"#);
            write!(xml, "<a:t>{}</a:t></a:r></a:p></p:txBody></p:sp>", escape_xml(text))?;
        }
        Mark::Rect {
            x,
            y,
            w,
            h,
            fill,
            stroke,
            radius,
        } => {
            write!(
                xml,
                r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="Rectangle {id}"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr><p:spPr>"#
            )?;
            xfrm(xml, *x, *y, *w, *h, "")?;
            let short_side = w.min(*h);
            if *radius > 0.0 && short_side > 0.0 {
                let adj = ((radius / short_side) * 100_000.0).round().min(50_000.0) as i64;
                write!(
                    xml,
                    r#"<a:prstGeom prst="roundRect"><a:avLst><a:gd name="adj" fmla="val {adj}"/></a:avLst></a:prstGeom>"#
                )?;
            } else {
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
            }
            match fill {
                Some(c) => solid_fill(xml, *c)?,
                None => xml.push_str("<a:noFill/>"),
            }
            outline(xml, *stroke)?;
            xml.push_str("</p:spPr></p:sp>");
        }
        Mark::Ellipse { cx, cy, rx, ry, fill } => {
            write!(
                xml,
                r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="Ellipse {id}"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr><p:spPr>"#
            )?;
            xfrm(xml, cx - rx, cy - ry, 2.0 * rx, 2.0 * ry, "")?;
            xml.push_str(r#"<a:prstGeom prst="ellipse"><a:avLst/></a:prstGeom>"#);
            solid_fill(xml, *fill)?;
            outline(xml, None)?;
            xml.push_str("</p:spPr></p:sp>");
        }
        Mark::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
        } => {
            let mut flip = String::new();
            if x2 < x1 {
                flip.push_str(r#" flipH="1""#);
            }
            if y2 < y1 {
                flip.push_str(r#" flipV="1""#);
            }
            write!(
                xml,
                r#"<p:cxnSp><p:nvCxnSpPr><p:cNvPr id="{id}" name="Line {id}"/><p:cNvCxnSpPr/><p:nvPr/></p:nvCxnSpPr><p:spPr>"#
            )?;
            xfrm(xml, x1.min(*x2), y1.min(*y2), (x2 - x1).abs(), (y2 - y1).abs(), &flip)?;
            xml.push_str(r#"<a:prstGeom prst="line"><a:avLst/></a:prstGeom>"#);
            outline(xml, Some(*stroke))?;
            xml.push_str("</p:spPr></p:cxnSp>");
        }
    }
    Ok(())
}

fn slide_part(page: &Page) -> Result<String, EmitError> {
    let mut xml = String::with_capacity(1024 + page.marks.len() * 512);
    xml.push_str(XML_DECL);
    write!(xml, r#"<p:sld xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}">"#)?;
    xml.push_str("<p:cSld><p:spTree>");
    xml.push_str(empty_tree());
    for (i, mark) in page.marks.iter().enumerate() {
        // Id 1 is the group itself.
        shape_xml(&mut xml, i + 2, mark)?;
    }
    xml.push_str("</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>");
    Ok(xml)
}

// ────────────────────────────────────────────────────────────────────────────
// Package writer
// ────────────────────────────────────────────────────────────────────────────

struct PackageWriter {
    zip_writer: ZipWriter<Cursor<Vec<u8>>>,
}

impl PackageWriter {
    fn new() -> Self {
        Self {
            zip_writer: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    fn add_part(&mut self, path: &str, content: &str) -> Result<(), EmitError> {
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        self.zip_writer.start_file(path, options)?;
        self.zip_writer.write_all(content.as_bytes())?;
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>, EmitError> {
        Ok(self.zip_writer.finish()?.into_inner())
    }
}

/// Renders `pages` to `.pptx` bytes. The slide size is taken from the theme.
pub fn render_pptx(title: &str, pages: &[Page], theme: &Theme) -> Result<Vec<u8>, EmitError> {
    let slides = pages.len();
    let mut package = PackageWriter::new();

    package.add_part("[Content_Types].xml", &content_types(slides)?)?;
    package.add_part(
        "_rels/.rels",
        &relationships(&[
            ("rId1".into(), REL_OFFICE_DOCUMENT, "ppt/presentation.xml".into()),
            ("rId2".into(), REL_CORE, "docProps/core.xml".into()),
            ("rId3".into(), REL_EXTENDED, "docProps/app.xml".into()),
        ])?,
    )?;
    package.add_part("docProps/core.xml", &core_props(title))?;
    package.add_part("docProps/app.xml", &app_props(slides))?;

    package.add_part(
        "ppt/presentation.xml",
        &presentation(slides, theme.page.width, theme.page.height)?,
    )?;
    let mut presentation_rels = vec![
        ("rId1".to_string(), REL_SLIDE_MASTER, "slideMasters/slideMaster1.xml".to_string()),
        ("rId2".to_string(), REL_THEME, "theme/theme1.xml".to_string()),
    ];
    presentation_rels.extend(
        (1..=slides).map(|n| (format!("rId{}", n + 2), REL_SLIDE, format!("slides/slide{n}.xml"))),
    );
    package.add_part("ppt/_rels/presentation.xml.rels", &relationships(&presentation_rels)?)?;

    package.add_part("ppt/slideMasters/slideMaster1.xml", &slide_master())?;
    package.add_part(
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        &relationships(&[
            ("rId1".into(), REL_SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml".into()),
            ("rId2".into(), REL_THEME, "../theme/theme1.xml".into()),
        ])?,
    )?;
    package.add_part("ppt/slideLayouts/slideLayout1.xml", &slide_layout())?;
    package.add_part(
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        &relationships(&[(
            "rId1".into(),
            REL_SLIDE_MASTER,
            "../slideMasters/slideMaster1.xml".into(),
        )])?,
    )?;
    package.add_part("ppt/theme/theme1.xml", &theme_part(theme)?)?;

    let slide_rels = relationships(&[(
        "rId1".into(),
        REL_SLIDE_LAYOUT,
        "../slideLayouts/slideLayout1.xml".into(),
    )])?;
    for (i, page) in pages.iter().enumerate() {
        let n = i + 1;
        package.add_part(&format!("ppt/slides/slide{n}.xml"), &slide_part(page)?)?;
        package.add_part(&format!("ppt/slides/_rels/slide{n}.xml.rels"), &slide_rels)?;
    }

    debug!("Packaged {} slides for '{}'", slides, title);
    package.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Face;
    use std::io::Read;

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    fn sample_page(theme: &Theme, label: &str) -> Page {
        let mut page = Page::new(theme.page.width, theme.page.height);
        page.push(Mark::fill_rect(0.0, 0.0, theme.page.width, theme.page.height, theme.palette.white));
        page.push(Mark::text(18.0, 40.0, label, Face::Bold, 32.0, theme.palette.ink));
        page.push(Mark::line(320.0, 44.0, 18.0, 44.0, theme.palette.ink, 1.0));
        page.push(
            Mark::text(320.0, 180.0, "1 / 2", Face::Regular, 8.0, theme.palette.light)
                .aligned(Align::Right),
        );
        page
    }

    #[test]
    fn test_package_lists_every_slide() {
        let theme = Theme::slides();
        let pages = vec![sample_page(&theme, "Agenda"), sample_page(&theme, "R&D <notes>")];
        let bytes = render_pptx("Deck", &pages, &theme).unwrap();

        let archive = zip::ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let slide_parts = archive
            .file_names()
            .filter(|n| n.starts_with("ppt/slides/slide") && n.ends_with(".xml"))
            .count();
        assert_eq!(slide_parts, 2);

        let presentation = read_part(&bytes, "ppt/presentation.xml");
        assert!(presentation.contains(r#"<p:sldId id="257" r:id="rId4"/>"#));
        assert!(presentation.contains(r#"<p:sldSz cx="12168000" cy="6840000"/>"#));

        let rels = read_part(&bytes, "ppt/_rels/presentation.xml.rels");
        assert!(rels.contains(r#"Id="rId4""#));
        assert!(rels.contains("slides/slide2.xml"));

        let types = read_part(&bytes, "[Content_Types].xml");
        assert!(types.contains("/ppt/slides/slide2.xml"));
    }

    #[test]
    fn test_slide_text_is_escaped_and_styled() {
        let theme = Theme::slides();
        let bytes = render_pptx("Deck", &[sample_page(&theme, "R&D <notes>")], &theme).unwrap();
        let slide = read_part(&bytes, "ppt/slides/slide1.xml");

        assert!(slide.contains("<a:t>R&amp;D &lt;notes&gt;</a:t>"));
        assert!(slide.contains(r#"sz="3200" b="1""#));
        assert!(slide.contains(r#"<a:pPr algn="r"/>"#));
        assert!(slide.contains(r#"<a:srgbClr val="111111"/>"#));
        // The right-to-left line is flipped horizontally.
        assert!(slide.contains(r#"<a:xfrm flipH="1">"#));
    }

    #[test]
    fn test_rounded_rect_uses_adjust_value() {
        let mut xml = String::new();
        let mark = Mark::Rect {
            x: 10.0,
            y: 10.0,
            w: 100.0,
            h: 20.0,
            fill: None,
            stroke: Some(Stroke::new(Rgb::hex(0xCCCCCC), 0.5)),
            radius: 2.0,
        };
        shape_xml(&mut xml, 2, &mark).unwrap();
        assert!(xml.contains(r#"prst="roundRect""#));
        assert!(xml.contains(r#"fmla="val 10000""#));
        assert!(xml.contains("<a:noFill/>"));
        assert!(xml.contains(r#"<a:ln w="6350">"#));
    }

    #[test]
    fn test_emu_conversion() {
        assert_eq!(emu(338.0), 12_168_000);
        assert_eq!(line_emu(1.0), 12_700);
    }
}
