//! PDF rendering backend built on `lopdf`.
//!
//! Layout coordinates are millimetres from the top-left corner; PDF user
//! space is points from the bottom-left, so every position is scaled and the
//! y axis flipped. Text uses the standard Helvetica font, so it is encoded
//! as WinAnsi; characters outside that code page print as `?`.

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, StringFormat, dictionary};

use crate::error::{EngineError, EngineResult};
use crate::models::{LayoutInstruction, LogoImage, LogoPlacement};

use super::renderer::PageRenderer;

const POINTS_PER_MM: f64 = 72.0 / 25.4;
const PAGE_WIDTH_MM: f64 = 210.0;
const PAGE_HEIGHT_MM: f64 = 297.0;

const FONT_NAME: &[u8] = b"F1";
const LOGO_NAME: &[u8] = b"Im1";

fn pt(mm: f64) -> f64 {
    mm * POINTS_PER_MM
}

/// Encodes text in the font's WinAnsi code page.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{0}'..='\u{7f}' | '\u{a0}'..='\u{ff}' => c as u8,
            '€' => 0x80,
            '‚' => 0x82,
            'ƒ' => 0x83,
            '„' => 0x84,
            '…' => 0x85,
            '†' => 0x86,
            '‡' => 0x87,
            'ˆ' => 0x88,
            '‰' => 0x89,
            'Š' => 0x8a,
            '‹' => 0x8b,
            'Œ' => 0x8c,
            'Ž' => 0x8e,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201c}' => 0x93,
            '\u{201d}' => 0x94,
            '•' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '˜' => 0x98,
            '™' => 0x99,
            'š' => 0x9a,
            '›' => 0x9b,
            'œ' => 0x9c,
            'ž' => 0x9e,
            'Ÿ' => 0x9f,
            _ => b'?',
        })
        .collect()
}

fn render_error(context: &str, err: lopdf::Error) -> EngineError {
    EngineError::RenderError {
        message: format!("{}: {}", context, err),
    }
}

/// Renders a single A4 page to PDF bytes.
#[derive(Debug, Default)]
pub struct PdfRenderer {
    operations: Vec<Operation>,
    logo: Option<LogoImage>,
}

impl PdfRenderer {
    /// Creates an empty page.
    pub fn new() -> Self {
        Self::default()
    }

    fn logo_xobject(logo: &LogoImage) -> Stream {
        Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => i64::from(logo.width()),
                "Height" => i64::from(logo.height()),
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
            },
            logo.pixels().to_vec(),
        )
    }
}

impl PageRenderer for PdfRenderer {
    fn draw_logo(&mut self, logo: &LogoImage, placement: &LogoPlacement) -> EngineResult<()> {
        let bottom = PAGE_HEIGHT_MM - placement.y - placement.height;
        self.operations.push(Operation::new("q", vec![]));
        self.operations.push(Operation::new(
            "cm",
            vec![
                pt(placement.width).into(),
                0.into(),
                0.into(),
                pt(placement.height).into(),
                pt(placement.x).into(),
                pt(bottom).into(),
            ],
        ));
        self.operations
            .push(Operation::new("Do", vec![Object::Name(LOGO_NAME.to_vec())]));
        self.operations.push(Operation::new("Q", vec![]));
        self.logo = Some(logo.clone());
        Ok(())
    }

    fn draw_text(&mut self, instruction: &LayoutInstruction) -> EngineResult<()> {
        self.operations.push(Operation::new("BT", vec![]));
        self.operations.push(Operation::new(
            "Tf",
            vec![
                Object::Name(FONT_NAME.to_vec()),
                instruction.font_size.into(),
            ],
        ));
        self.operations.push(Operation::new(
            "Td",
            vec![
                pt(instruction.x).into(),
                pt(PAGE_HEIGHT_MM - instruction.y).into(),
            ],
        ));
        self.operations.push(Operation::new(
            "Tj",
            vec![Object::String(
                win_ansi(&instruction.text),
                StringFormat::Literal,
            )],
        ));
        self.operations.push(Operation::new("ET", vec![]));
        Ok(())
    }

    fn finish(&mut self) -> EngineResult<Vec<u8>> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });

        let mut fonts = Dictionary::new();
        fonts.set(FONT_NAME, font_id);
        let mut resources = dictionary! { "Font" => fonts };
        if let Some(logo) = self.logo.take() {
            let image_id = doc.add_object(Self::logo_xobject(&logo));
            let mut xobjects = Dictionary::new();
            xobjects.set(LOGO_NAME, image_id);
            resources.set("XObject", xobjects);
        }
        let resources_id = doc.add_object(resources);

        let content = Content {
            operations: std::mem::take(&mut self.operations),
        };
        let encoded = content
            .encode()
            .map_err(|e| render_error("failed to encode page content", e))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                pt(PAGE_WIDTH_MM).into(),
                pt(PAGE_HEIGHT_MM).into(),
            ],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|e| EngineError::RenderError {
                message: format!("failed to write PDF: {}", e),
            })?;
        Ok(bytes)
    }
}
