//! Package parts: content types, relationships, presentation, master,
//! layout and theme. Only the slides themselves vary with content.

use std::fmt::{self, Write as _};

use crate::model::Canvas;
use crate::theme::Theme;

use super::xml::{NS_A, NS_P, NS_R};

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;
const NS_PKG_RELS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const REL: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const CT_PML: &str = "application/vnd.openxmlformats-officedocument.presentationml";

/// First slide id; lower values are reserved.
const FIRST_SLIDE_ID: usize = 256;
/// Relationship ids before the first slide: master, theme.
const SLIDE_REL_OFFSET: usize = 3;

pub(crate) const APPLICATION: &str = "slidecraft";

/// `(zip path, part)` for every part that does not depend on slide content.
pub(crate) fn fixed_parts(canvas: Canvas, theme: &Theme, slides: usize) -> Result<Vec<(String, String)>, fmt::Error> {
    Ok(vec![
        ("[Content_Types].xml".into(), content_types(slides)?),
        ("_rels/.rels".into(), root_rels()?),
        ("docProps/app.xml".into(), app_props(slides)?),
        ("docProps/core.xml".into(), core_props()),
        ("ppt/presentation.xml".into(), presentation(canvas, slides)?),
        ("ppt/_rels/presentation.xml.rels".into(), presentation_rels(slides)?),
        ("ppt/presProps.xml".into(), pres_props()?),
        ("ppt/slideMasters/slideMaster1.xml".into(), slide_master()?),
        (
            "ppt/slideMasters/_rels/slideMaster1.xml.rels".into(),
            rels(&[
                ("rId1", "slideLayout", "../slideLayouts/slideLayout1.xml"),
                ("rId2", "theme", "../theme/theme1.xml"),
            ])?,
        ),
        ("ppt/slideLayouts/slideLayout1.xml".into(), slide_layout()?),
        (
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels".into(),
            rels(&[("rId1", "slideMaster", "../slideMasters/slideMaster1.xml")])?,
        ),
        ("ppt/theme/theme1.xml".into(), theme_part(theme)?),
    ])
}

/// Relationships of every slide: its layout.
pub(crate) fn slide_rels() -> Result<String, fmt::Error> {
    rels(&[("rId1", "slideLayout", "../slideLayouts/slideLayout1.xml")])
}

fn rels(entries: &[(&str, &str, &str)]) -> Result<String, fmt::Error> {
    let mut xml = String::with_capacity(256 + entries.len() * 160);
    write!(xml, r#"{XML_DECL}<Relationships xmlns="{NS_PKG_RELS}">"#)?;
    for (id, kind, target) in entries {
        write!(xml, r#"<Relationship Id="{id}" Type="{REL}/{kind}" Target="{target}"/>"#)?;
    }
    xml.push_str("</Relationships>");
    Ok(xml)
}

fn content_types(slides: usize) -> Result<String, fmt::Error> {
    let mut xml = String::with_capacity(2048 + slides * 160);
    write!(
        xml,
        r#"{XML_DECL}<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#
    )?;
    xml.push_str(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
    xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);

    let overrides = [
        ("/ppt/presentation.xml", format!("{CT_PML}.presentation.main+xml")),
        ("/ppt/presProps.xml", format!("{CT_PML}.presProps+xml")),
        ("/ppt/slideMasters/slideMaster1.xml", format!("{CT_PML}.slideMaster+xml")),
        ("/ppt/slideLayouts/slideLayout1.xml", format!("{CT_PML}.slideLayout+xml")),
        ("/ppt/theme/theme1.xml", "application/vnd.openxmlformats-officedocument.theme+xml".to_string()),
        ("/docProps/core.xml", "application/vnd.openxmlformats-package.core-properties+xml".to_string()),
        ("/docProps/app.xml", "application/vnd.openxmlformats-officedocument.extended-properties+xml".to_string()),
    ];
    for (part, ct) in &overrides {
        write!(xml, r#"<Override PartName="{part}" ContentType="{ct}"/>"#)?;
    }
    for n in 1..=slides {
        write!(
            xml,
            r#"<Override PartName="/ppt/slides/slide{n}.xml" ContentType="{CT_PML}.slide+xml"/>"#
        )?;
    }
    xml.push_str("</Types>");
    Ok(xml)
}

fn root_rels() -> Result<String, fmt::Error> {
    let mut xml = String::with_capacity(512);
    write!(xml, r#"{XML_DECL}<Relationships xmlns="{NS_PKG_RELS}">"#)?;
    write!(xml, r#"<Relationship Id="rId1" Type="{REL}/officeDocument" Target="ppt/presentation.xml"/>"#)?;
    xml.push_str(r#"<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>"#);
    write!(xml, r#"<Relationship Id="rId3" Type="{REL}/extended-properties" Target="docProps/app.xml"/>"#)?;
    xml.push_str("</Relationships>");
    Ok(xml)
}

fn app_props(slides: usize) -> Result<String, fmt::Error> {
    let mut xml = String::with_capacity(512);
    write!(
        xml,
        r#"{XML_DECL}<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#
    )?;
    write!(xml, "<Application>{APPLICATION}</Application><Slides>{slides}</Slides>")?;
    xml.push_str("</Properties>");
    Ok(xml)
}

/// No timestamps, so identical decks give identical bytes.
fn core_props() -> String {
    format!(
        r#"{XML_DECL}<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/"><dc:creator>{APPLICATION}</dc:creator></cp:coreProperties>"#
    )
}

fn presentation(canvas: Canvas, slides: usize) -> Result<String, fmt::Error> {
    let mut xml = String::with_capacity(1024 + slides * 48);
    write!(
        xml,
        r#"{XML_DECL}<p:presentation xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}" saveSubsetFonts="1">"#
    )?;
    xml.push_str(r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>"#);
    if slides > 0 {
        xml.push_str("<p:sldIdLst>");
        for i in 0..slides {
            write!(
                xml,
                r#"<p:sldId id="{}" r:id="rId{}"/>"#,
                FIRST_SLIDE_ID + i,
                SLIDE_REL_OFFSET + i
            )?;
        }
        xml.push_str("</p:sldIdLst>");
    }
    write!(
        xml,
        r#"<p:sldSz cx="{}" cy="{}"/><p:notesSz cx="6858000" cy="9144000"/>"#,
        canvas.width.to_emu(),
        canvas.height.to_emu()
    )?;
    xml.push_str("</p:presentation>");
    Ok(xml)
}

fn presentation_rels(slides: usize) -> Result<String, fmt::Error> {
    let targets: Vec<(String, &str, String)> = [
        ("rId1".to_string(), "slideMaster", "slideMasters/slideMaster1.xml".to_string()),
        ("rId2".to_string(), "theme", "theme/theme1.xml".to_string()),
    ]
    .into_iter()
    .chain((0..slides).map(|i| {
        (format!("rId{}", SLIDE_REL_OFFSET + i), "slide", format!("slides/slide{}.xml", i + 1))
    }))
    .chain(std::iter::once((
        format!("rId{}", SLIDE_REL_OFFSET + slides),
        "presProps",
        "presProps.xml".to_string(),
    )))
    .collect();

    let entries: Vec<(&str, &str, &str)> = targets
        .iter()
        .map(|(id, kind, target)| (id.as_str(), *kind, target.as_str()))
        .collect();
    rels(&entries)
}

fn pres_props() -> Result<String, fmt::Error> {
    let mut xml = String::with_capacity(256);
    write!(
        xml,
        r#"{XML_DECL}<p:presentationPr xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}"/>"#
    )?;
    Ok(xml)
}

const EMPTY_TREE: &str = concat!(
    r#"<p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
    r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr></p:spTree>"#,
);

fn slide_master() -> Result<String, fmt::Error> {
    let mut xml = String::with_capacity(1024);
    write!(xml, r#"{XML_DECL}<p:sldMaster xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}">"#)?;
    write!(xml, "<p:cSld>{EMPTY_TREE}</p:cSld>")?;
    xml.push_str(concat!(
        r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" "#,
        r#"accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#,
    ));
    xml.push_str(r#"<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst>"#);
    xml.push_str("</p:sldMaster>");
    Ok(xml)
}

fn slide_layout() -> Result<String, fmt::Error> {
    let mut xml = String::with_capacity(1024);
    write!(
        xml,
        r#"{XML_DECL}<p:sldLayout xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}" type="blank" preserve="1">"#
    )?;
    write!(xml, r#"<p:cSld name="Blank">{EMPTY_TREE}</p:cSld>"#)?;
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>");
    Ok(xml)
}

/// Theme part whose color scheme carries the deck palette.
fn theme_part(theme: &Theme) -> Result<String, fmt::Error> {
    let mut xml = String::with_capacity(4096);
    write!(xml, r#"{XML_DECL}<a:theme xmlns:a="{NS_A}" name="{APPLICATION}"><a:themeElements>"#)?;

    write!(xml, r#"<a:clrScheme name="{APPLICATION}">"#)?;
    let scheme = [
        ("dk1", theme.dark),
        ("lt1", theme.white),
        ("dk2", theme.dark),
        ("lt2", theme.light_gray),
        ("accent1", theme.primary),
        ("accent2", theme.sky),
        ("accent3", theme.green),
        ("accent4", theme.amber),
        ("accent5", theme.indigo),
        ("accent6", theme.red),
        ("hlink", theme.primary),
        ("folHlink", theme.indigo),
    ];
    for (slot, color) in scheme {
        write!(xml, r#"<a:{slot}><a:srgbClr val="{}"/></a:{slot}>"#, color.hex())?;
    }
    xml.push_str("</a:clrScheme>");

    write!(xml, r#"<a:fontScheme name="{APPLICATION}">"#)?;
    for role in ["majorFont", "minorFont"] {
        write!(
            xml,
            r#"<a:{role}><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface="Arial"/></a:{role}>"#
        )?;
    }
    xml.push_str("</a:fontScheme>");

    write!(xml, r#"<a:fmtScheme name="{APPLICATION}">"#)?;
    let solid = r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#;
    write!(xml, "<a:fillStyleLst>{solid}{solid}{solid}</a:fillStyleLst>")?;
    xml.push_str("<a:lnStyleLst>");
    for w in [6350, 12700, 19050] {
        write!(xml, r#"<a:ln w="{w}">{solid}</a:ln>"#)?;
    }
    xml.push_str("</a:lnStyleLst>");
    let effect = "<a:effectStyle><a:effectLst/></a:effectStyle>";
    write!(xml, "<a:effectStyleLst>{effect}{effect}{effect}</a:effectStyleLst>")?;
    write!(xml, "<a:bgFillStyleLst>{solid}{solid}{solid}</a:bgFillStyleLst>")?;
    xml.push_str("</a:fmtScheme>");

    xml.push_str("</a:themeElements></a:theme>");
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_rel_ids_follow_master_and_theme() {
        let xml = presentation(Canvas::WIDESCREEN, 3).unwrap();
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldId id="258" r:id="rId5"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="12191695" cy="6858000"/>"#));

        let rels = presentation_rels(3).unwrap();
        assert!(rels.contains(r#"Id="rId5" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide3.xml""#));
        assert!(rels.contains(r#"Id="rId6" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/presProps""#));
    }

    #[test]
    fn empty_deck_has_no_slide_list() {
        let xml = presentation(Canvas::WIDESCREEN, 0).unwrap();
        assert!(!xml.contains("sldIdLst"));
    }

    #[test]
    fn content_types_list_each_slide() {
        let xml = content_types(2).unwrap();
        assert!(xml.contains("/ppt/slides/slide1.xml"));
        assert!(xml.contains("/ppt/slides/slide2.xml"));
        assert!(!xml.contains("/ppt/slides/slide3.xml"));
    }

    #[test]
    fn theme_accents_come_from_palette() {
        let xml = theme_part(&Theme::default()).unwrap();
        assert!(xml.contains(r#"<a:accent1><a:srgbClr val="4299E1"/></a:accent1>"#));
        assert!(xml.contains(r#"<a:dk2><a:srgbClr val="2D3748"/></a:dk2>"#));
    }

    #[test]
    fn fixed_parts_are_complete() {
        let parts = fixed_parts(Canvas::WIDESCREEN, &Theme::default(), 1).unwrap();
        let names: Vec<_> = parts.iter().map(|(n, _)| n.as_str()).collect();
        for expected in [
            "[Content_Types].xml",
            "_rels/.rels",
            "ppt/presentation.xml",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/theme/theme1.xml",
        ] {
            assert!(names.contains(&expected), "missing {expected}");
        }
    }
}
