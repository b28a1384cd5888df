//! OPC package writing for .pptx output.
//!
//! Assembles the deck into a ZIP archive with the parts PowerPoint expects:
//! content types, package relationships, presentation.xml, one slide
//! master, the template's slide layouts, the slides, a minimal theme, and
//! document properties. Part paths and relationship IDs follow the layout
//! produced by the default PowerPoint template.

use std::fmt::Write as FmtWrite;
use std::io::Write;

use zip::write::{SimpleFileOptions, ZipWriter};

use crate::error::Result;
use crate::xml::escape_xml;

use super::layout::SlideLayout;
use super::presentation::Presentation;

const CT_PRESENTATION: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";
const CT_SLIDE_MASTER: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";
const CT_SLIDE_LAYOUT: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";
const CT_SLIDE: &str = "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
const CT_THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";
const CT_CORE_PROPS: &str = "application/vnd.openxmlformats-package.core-properties+xml";
const CT_APP_PROPS: &str = "application/vnd.openxmlformats-officedocument.extended-properties+xml";

const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_CORE_PROPS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
const REL_APP_PROPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
const REL_SLIDE_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
const REL_SLIDE_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
const REL_SLIDE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
const REL_THEME: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";

/// Builder for the .pptx ZIP archive.
///
/// Tracks every part added so the [Content_Types].xml overrides can be
/// generated when the package is finished.
struct PackageWriter {
    zip_writer: ZipWriter<std::io::Cursor<Vec<u8>>>,
    overrides: Vec<(String, &'static str)>,
}

impl PackageWriter {
    fn new() -> Self {
        Self {
            zip_writer: ZipWriter::new(std::io::Cursor::new(Vec::new())),
            overrides: Vec::new(),
        }
    }

    /// Add an XML part and record its content type override.
    fn add_part(&mut self, path: &str, content_type: &'static str, content: &str) -> Result<()> {
        self.overrides.push((format!("/{}", path), content_type));
        self.add_raw(path, content)
    }

    /// Add a file without a content type override (relationship parts).
    fn add_raw(&mut self, path: &str, content: &str) -> Result<()> {
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        self.zip_writer.start_file(path, options)?;
        self.zip_writer.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Generate the [Content_Types].xml content.
    fn generate_content_types(&self) -> String {
        let mut xml = String::with_capacity(1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        );
        xml.push_str(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
        xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);
        for (part_name, content_type) in &self.overrides {
            let _ = write!(
                xml,
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                part_name, content_type
            );
        }
        xml.push_str("</Types>");
        xml
    }

    /// Write the content types part and finish the archive.
    fn finish(mut self) -> Result<Vec<u8>> {
        let content_types = self.generate_content_types();
        self.add_raw("[Content_Types].xml", &content_types)?;
        let cursor = self.zip_writer.finish()?;
        Ok(cursor.into_inner())
    }
}

/// A single relationships part (`*.rels`).
fn generate_rels(entries: &[(String, &str, String)]) -> String {
    let mut xml = String::with_capacity(256);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    for (id, rel_type, target) in entries {
        let _ = write!(
            xml,
            r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
            id, rel_type, target
        );
    }
    xml.push_str("</Relationships>");
    xml
}

/// Serialize the whole deck as .pptx bytes.
pub(crate) fn write_package(pres: &Presentation) -> Result<Vec<u8>> {
    let mut writer = PackageWriter::new();

    // Package relationships
    let root_rels = generate_rels(&[
        ("rId1".into(), REL_OFFICE_DOCUMENT, "ppt/presentation.xml".into()),
        ("rId2".into(), REL_CORE_PROPS, "docProps/core.xml".into()),
        ("rId3".into(), REL_APP_PROPS, "docProps/app.xml".into()),
    ]);
    writer.add_raw("_rels/.rels", &root_rels)?;

    // presentation.xml and its relationships (rId1 master, rId2.. slides)
    writer.add_part("ppt/presentation.xml", CT_PRESENTATION, &pres.generate_presentation_xml()?)?;
    let mut pres_rels = vec![(
        "rId1".to_string(),
        REL_SLIDE_MASTER,
        "slideMasters/slideMaster1.xml".to_string(),
    )];
    for index in 0..pres.slide_count() {
        pres_rels.push((
            format!("rId{}", index + 2),
            REL_SLIDE,
            format!("slides/slide{}.xml", index + 1),
        ));
    }
    writer.add_raw("ppt/_rels/presentation.xml.rels", &generate_rels(&pres_rels))?;

    // Slide master, its layouts, and the theme
    writer.add_part(
        "ppt/slideMasters/slideMaster1.xml",
        CT_SLIDE_MASTER,
        &generate_master_xml(pres.layouts()),
    )?;
    let mut master_rels: Vec<(String, &str, String)> = pres
        .layouts()
        .iter()
        .enumerate()
        .map(|(i, _)| {
            (
                format!("rId{}", i + 1),
                REL_SLIDE_LAYOUT,
                format!("../slideLayouts/slideLayout{}.xml", i + 1),
            )
        })
        .collect();
    master_rels.push((
        format!("rId{}", pres.layout_count() + 1),
        REL_THEME,
        "../theme/theme1.xml".to_string(),
    ));
    writer.add_raw(
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        &generate_rels(&master_rels),
    )?;

    for (index, layout) in pres.layouts().iter().enumerate() {
        let path = format!("ppt/slideLayouts/slideLayout{}.xml", index + 1);
        writer.add_part(&path, CT_SLIDE_LAYOUT, &generate_layout_xml(layout)?)?;
        let rels = generate_rels(&[(
            "rId1".into(),
            REL_SLIDE_MASTER,
            "../slideMasters/slideMaster1.xml".into(),
        )]);
        let rels_path = format!("ppt/slideLayouts/_rels/slideLayout{}.xml.rels", index + 1);
        writer.add_raw(&rels_path, &rels)?;
    }

    writer.add_part("ppt/theme/theme1.xml", CT_THEME, THEME_XML)?;

    // Slides
    for (index, slide) in pres.slides.iter().enumerate() {
        let path = format!("ppt/slides/slide{}.xml", index + 1);
        writer.add_part(&path, CT_SLIDE, &slide.to_xml()?)?;
        let rels = generate_rels(&[(
            "rId1".into(),
            REL_SLIDE_LAYOUT,
            format!("../slideLayouts/slideLayout{}.xml", slide.layout_index() + 1),
        )]);
        let rels_path = format!("ppt/slides/_rels/slide{}.xml.rels", index + 1);
        writer.add_raw(&rels_path, &rels)?;
    }

    // Document properties
    writer.add_part("docProps/core.xml", CT_CORE_PROPS, &generate_core_props(pres))?;
    writer.add_part("docProps/app.xml", CT_APP_PROPS, &generate_app_props(pres))?;

    writer.finish()
}

/// Generate slideMaster1.xml with placeholder geometry, the layout ID
/// list, and minimal text styles.
fn generate_master_xml(layouts: &[SlideLayout]) -> String {
    let mut xml = String::with_capacity(2048);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<p:sldMaster xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
    );
    xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
    xml.push_str(
        r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
    );

    xml.push_str("<p:cSld>");
    xml.push_str("<p:spTree>");
    xml.push_str("<p:nvGrpSpPr>");
    xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
    xml.push_str("<p:cNvGrpSpPr/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvGrpSpPr>");
    xml.push_str("<p:grpSpPr>");
    xml.push_str("<a:xfrm>");
    xml.push_str(r#"<a:off x="0" y="0"/>"#);
    xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
    xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
    xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
    xml.push_str("</a:xfrm>");
    xml.push_str("</p:grpSpPr>");

    // Title placeholder geometry inherited by layouts and slides
    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    xml.push_str(r#"<p:cNvPr id="2" name="Title Placeholder 1"/>"#);
    xml.push_str("<p:cNvSpPr><a:spLocks noGrp=\"1\"/></p:cNvSpPr>");
    xml.push_str(r#"<p:nvPr><p:ph type="title"/></p:nvPr>"#);
    xml.push_str("</p:nvSpPr>");
    xml.push_str("<p:spPr>");
    xml.push_str("<a:xfrm>");
    xml.push_str(r#"<a:off x="685800" y="365126"/>"#);
    xml.push_str(r#"<a:ext cx="7772400" cy="1143000"/>"#);
    xml.push_str("</a:xfrm>");
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
    xml.push_str("</p:spPr>");
    xml.push_str("<p:txBody><a:bodyPr/><a:lstStyle/><a:p/></p:txBody>");
    xml.push_str("</p:sp>");

    // Body placeholder geometry
    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    xml.push_str(r#"<p:cNvPr id="3" name="Text Placeholder 2"/>"#);
    xml.push_str("<p:cNvSpPr><a:spLocks noGrp=\"1\"/></p:cNvSpPr>");
    xml.push_str(r#"<p:nvPr><p:ph type="body" idx="1"/></p:nvPr>"#);
    xml.push_str("</p:nvSpPr>");
    xml.push_str("<p:spPr>");
    xml.push_str("<a:xfrm>");
    xml.push_str(r#"<a:off x="685800" y="1600200"/>"#);
    xml.push_str(r#"<a:ext cx="7772400" cy="4525963"/>"#);
    xml.push_str("</a:xfrm>");
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
    xml.push_str("</p:spPr>");
    xml.push_str("<p:txBody><a:bodyPr/><a:lstStyle/><a:p/></p:txBody>");
    xml.push_str("</p:sp>");

    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");

    xml.push_str(r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#);

    xml.push_str("<p:sldLayoutIdLst>");
    for index in 0..layouts.len() {
        // Layout IDs live in the same numbering space as the master ID
        let _ = write!(
            xml,
            r#"<p:sldLayoutId id="{}" r:id="rId{}"/>"#,
            2147483649u32 + index as u32,
            index + 1
        );
    }
    xml.push_str("</p:sldLayoutIdLst>");

    xml.push_str("<p:txStyles>");
    xml.push_str("<p:titleStyle><a:lvl1pPr><a:defRPr sz=\"4400\"/></a:lvl1pPr></p:titleStyle>");
    xml.push_str("<p:bodyStyle><a:lvl1pPr><a:defRPr sz=\"2800\"/></a:lvl1pPr></p:bodyStyle>");
    xml.push_str("<p:otherStyle/>");
    xml.push_str("</p:txStyles>");

    xml.push_str("</p:sldMaster>");
    xml
}

/// Generate a slideLayoutN.xml part from a layout definition.
fn generate_layout_xml(layout: &SlideLayout) -> Result<String> {
    let mut xml = String::with_capacity(1024);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<p:sldLayout xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
    );
    xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
    xml.push_str(
        r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
    );

    write!(xml, r#"<p:cSld name="{}">"#, escape_xml(layout.name()))?;
    xml.push_str("<p:spTree>");
    xml.push_str("<p:nvGrpSpPr>");
    xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
    xml.push_str("<p:cNvGrpSpPr/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvGrpSpPr>");
    xml.push_str("<p:grpSpPr/>");

    for (index, placeholder) in layout.placeholders.iter().enumerate() {
        let shape_id = index as u32 + 2;
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="{} {}"/>"#,
            shape_id,
            placeholder.role.shape_name(),
            shape_id
        )?;
        xml.push_str("<p:cNvSpPr><a:spLocks noGrp=\"1\"/></p:cNvSpPr>");
        if placeholder.idx == 0 {
            write!(xml, r#"<p:nvPr><p:ph type="{}"/></p:nvPr>"#, placeholder.role.ph_type())?;
        } else {
            write!(
                xml,
                r#"<p:nvPr><p:ph type="{}" idx="{}"/></p:nvPr>"#,
                placeholder.role.ph_type(),
                placeholder.idx
            )?;
        }
        xml.push_str("</p:nvSpPr>");
        xml.push_str("<p:spPr/>");
        xml.push_str("<p:txBody><a:bodyPr/><a:lstStyle/><a:p/></p:txBody>");
        xml.push_str("</p:sp>");
    }

    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");
    xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
    xml.push_str("</p:sldLayout>");

    Ok(xml)
}

/// Generate docProps/core.xml with the document title and timestamps.
fn generate_core_props(pres: &Presentation) -> String {
    let now = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

    let mut xml = String::with_capacity(512);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);
    if let Some(title) = pres.doc_title() {
        let _ = write!(xml, "<dc:title>{}</dc:title>", escape_xml(title));
    }
    let _ = write!(
        xml,
        r#"<dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>"#,
        now
    );
    let _ = write!(
        xml,
        r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{}</dcterms:modified>"#,
        now
    );
    xml.push_str("</cp:coreProperties>");
    xml
}

/// Generate docProps/app.xml.
fn generate_app_props(pres: &Presentation) -> String {
    let mut xml = String::with_capacity(256);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties">"#);
    xml.push_str("<Application>Rambutan</Application>");
    let _ = write!(xml, "<Slides>{}</Slides>", pres.slide_count());
    xml.push_str("</Properties>");
    xml
}

/// Minimal theme part. PowerPoint requires the three scheme blocks to be
/// present; the values are the stock Office scheme.
const THEME_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office Theme"><a:themeElements><a:clrScheme name="Office"><a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1><a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1><a:dk2><a:srgbClr val="44546A"/></a:dk2><a:lt2><a:srgbClr val="E7E6E6"/></a:lt2><a:accent1><a:srgbClr val="4472C4"/></a:accent1><a:accent2><a:srgbClr val="ED7D31"/></a:accent2><a:accent3><a:srgbClr val="A5A5A5"/></a:accent3><a:accent4><a:srgbClr val="FFC000"/></a:accent4><a:accent5><a:srgbClr val="5B9BD5"/></a:accent5><a:accent6><a:srgbClr val="70AD47"/></a:accent6><a:hlink><a:srgbClr val="0563C1"/></a:hlink><a:folHlink><a:srgbClr val="954F72"/></a:folHlink></a:clrScheme><a:fontScheme name="Office"><a:majorFont><a:latin typeface="Calibri Light"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont><a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont></a:fontScheme><a:fmtScheme name="Office"><a:fillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:fillStyleLst><a:lnStyleLst><a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln><a:ln w="12700"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln><a:ln w="19050"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln></a:lnStyleLst><a:effectStyleLst><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle></a:effectStyleLst><a:bgFillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:bgFillStyleLst></a:fmtScheme></a:themeElements></a:theme>"#;
