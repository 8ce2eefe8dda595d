//! DrawingML for slide content: shapes, paragraphs and tables

use std::borrow::Cow;
use std::fmt::{self, Write as _};

use quick_xml::escape::escape;

use crate::model::{
    Align, ArrowDirection, Shape, ShapeEnum, ShapeKind, ShapeStyle, Slide, Table, TextBody,
    TextRun,
};
use crate::theme::Rgb;
use crate::types::Rect;

pub(crate) const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
pub(crate) const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
pub(crate) const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";

const TABLE_URI: &str = "http://schemas.openxmlformats.org/drawingml/2006/table";

/// The group shape `spTree` itself takes id 1.
const FIRST_SHAPE_ID: usize = 2;

/// A complete `ppt/slides/slideN.xml` part.
pub(crate) fn slide(slide: &Slide) -> Result<String, fmt::Error> {
    let mut xml = String::with_capacity(1024 + slide.len() * 512);
    write!(
        xml,
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:sld xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}">"#
    )?;
    xml.push_str("<p:cSld><p:spTree>");
    xml.push_str(r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#);
    xml.push_str(r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#);

    for (index, shape) in slide.shapes().iter().enumerate() {
        write_shape(&mut xml, index + FIRST_SHAPE_ID, shape)?;
    }

    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sld>");
    Ok(xml)
}

fn preset(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Rectangle | ShapeKind::TextBox | ShapeKind::Table => "rect",
        ShapeKind::RoundedRectangle => "roundRect",
        ShapeKind::Arrow(ArrowDirection::Right) => "rightArrow",
        ShapeKind::Arrow(ArrowDirection::Left) => "leftArrow",
        ShapeKind::Arrow(ArrowDirection::Up) => "upArrow",
        ShapeKind::Arrow(ArrowDirection::Down) => "downArrow",
    }
}

fn display_name(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Rectangle => "Rectangle",
        ShapeKind::RoundedRectangle => "Rounded Rectangle",
        ShapeKind::Arrow(_) => "Arrow",
        ShapeKind::TextBox => "TextBox",
        ShapeKind::Table => "Table",
    }
}

fn write_shape(xml: &mut String, id: usize, shape: &ShapeEnum) -> fmt::Result {
    let kind = shape.kind();
    if let ShapeEnum::Table(t) = shape {
        return write_table(xml, id, &t.frame, &t.table);
    }

    let is_text_box = kind == ShapeKind::TextBox;
    write!(
        xml,
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="{} {}"/>"#,
        display_name(kind),
        id - 1
    )?;
    xml.push_str(if is_text_box { r#"<p:cNvSpPr txBox="1"/>"# } else { "<p:cNvSpPr/>" });
    xml.push_str("<p:nvPr/></p:nvSpPr>");

    xml.push_str("<p:spPr>");
    write_xfrm(xml, shape.frame(), "a")?;
    write!(xml, r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#, preset(kind))?;
    write_style(xml, shape.style())?;
    xml.push_str("</p:spPr>");

    if !is_text_box && shape.style().outline {
        // Theme line reference for shapes that keep their border
        xml.push_str(concat!(
            r#"<p:style><a:lnRef idx="1"><a:schemeClr val="accent1"/></a:lnRef>"#,
            r#"<a:fillRef idx="0"><a:schemeClr val="accent1"/></a:fillRef>"#,
            r#"<a:effectRef idx="0"><a:schemeClr val="accent1"/></a:effectRef>"#,
            r#"<a:fontRef idx="minor"><a:schemeClr val="lt1"/></a:fontRef></p:style>"#,
        ));
    }

    if let Some(body) = shape.body() {
        xml.push_str("<p:txBody>");
        match shape {
            ShapeEnum::TextBox(tb) => {
                let wrap = if tb.wrap { "square" } else { "none" };
                write!(xml, r#"<a:bodyPr wrap="{wrap}" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#)?;
            }
            _ => xml.push_str(r#"<a:bodyPr wrap="square" rtlCol="0" anchor="ctr"/>"#),
        }
        xml.push_str("<a:lstStyle/>");
        write_body(xml, body)?;
        xml.push_str("</p:txBody>");
    }

    xml.push_str("</p:sp>");
    Ok(())
}

fn write_xfrm(xml: &mut String, frame: &Rect, prefix: &str) -> fmt::Result {
    write!(
        xml,
        r#"<{prefix}:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></{prefix}:xfrm>"#,
        frame.x().to_emu(),
        frame.y().to_emu(),
        frame.width().to_emu(),
        frame.height().to_emu()
    )
}

fn write_fill(xml: &mut String, fill: Option<Rgb>) -> fmt::Result {
    match fill {
        Some(color) => write!(xml, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color.hex()),
        None => {
            xml.push_str("<a:noFill/>");
            Ok(())
        }
    }
}

fn write_style(xml: &mut String, style: ShapeStyle) -> fmt::Result {
    write_fill(xml, style.fill)?;
    if !style.outline {
        xml.push_str("<a:ln><a:noFill/></a:ln>");
    }
    Ok(())
}

fn write_body(xml: &mut String, body: &TextBody) -> fmt::Result {
    for run in body.paragraphs() {
        write_paragraph(xml, run)?;
    }
    Ok(())
}

fn align_attr(align: Align) -> &'static str {
    match align {
        Align::Left => "l",
        Align::Center => "ctr",
        Align::Right => "r",
    }
}

/// One `a:p`. Each `\n` in the run becomes an `a:br` between runs.
pub(crate) fn write_paragraph(xml: &mut String, run: &TextRun) -> fmt::Result {
    xml.push_str("<a:p>");
    let algn = align_attr(run.align);
    match run.space_after {
        Some(space) => write!(
            xml,
            r#"<a:pPr algn="{algn}"><a:spcAft><a:spcPts val="{}"/></a:spcAft></a:pPr>"#,
            space.centipoints()
        )?,
        None => write!(xml, r#"<a:pPr algn="{algn}"/>"#)?,
    }

    let mut props = String::new();
    write!(props, r#"<a:rPr sz="{}""#, run.size.centipoints())?;
    if run.bold {
        props.push_str(r#" b="1""#);
    }
    write!(
        props,
        r#"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:rPr>"#,
        run.color.hex()
    )?;

    for (i, line) in run.lines().enumerate() {
        if i > 0 {
            xml.push_str("<a:br/>");
        }
        write!(xml, "<a:r>{props}<a:t>{}</a:t></a:r>", escape(&*xml_chars(line)))?;
    }

    xml.push_str("</a:p>");
    Ok(())
}

/// Characters XML 1.0 cannot carry at all, even as references.
fn is_forbidden(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}' | '\u{fffe}' | '\u{ffff}')
}

/// Replace forbidden characters with the OOXML `_xHHHH_` escape.
fn xml_chars(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_forbidden) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        if is_forbidden(c) {
            let _ = write!(out, "_x{:04X}_", c as u32);
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

fn write_table(xml: &mut String, id: usize, frame: &Rect, table: &Table) -> fmt::Result {
    write!(
        xml,
        r#"<p:graphicFrame><p:nvGraphicFramePr><p:cNvPr id="{id}" name="Table {}"/>"#,
        id - 1
    )?;
    xml.push_str(r#"<p:cNvGraphicFramePr><a:graphicFrameLocks noGrp="1"/></p:cNvGraphicFramePr><p:nvPr/></p:nvGraphicFramePr>"#);
    write_xfrm(xml, frame, "p")?;
    write!(xml, r#"<a:graphic><a:graphicData uri="{TABLE_URI}"><a:tbl>"#)?;
    xml.push_str(r#"<a:tblPr firstRow="1" bandRow="1"/>"#);

    xml.push_str("<a:tblGrid>");
    for width in table.column_widths() {
        write!(xml, r#"<a:gridCol w="{width}"/>"#)?;
    }
    xml.push_str("</a:tblGrid>");

    for (row, height) in table.rows().iter().zip(table.row_heights()) {
        write!(xml, r#"<a:tr h="{height}">"#)?;
        for cell in row {
            xml.push_str("<a:tc><a:txBody><a:bodyPr/><a:lstStyle/>");
            write_paragraph(xml, &cell.text)?;
            xml.push_str(r#"</a:txBody><a:tcPr anchor="ctr">"#);
            if let Some(fill) = cell.fill {
                write_fill(xml, Some(fill))?;
            }
            xml.push_str("</a:tcPr></a:tc>");
        }
        xml.push_str("</a:tr>");
    }

    xml.push_str("</a:tbl></a:graphicData></a:graphic></p:graphicFrame>");
    Ok(())
}
