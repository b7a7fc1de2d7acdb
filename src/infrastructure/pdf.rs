use crate::domain::employee::ProcessedEmployee;
use crate::domain::payslip::{PayslipDocument, payslip_path};
use crate::domain::ports::PayslipRenderer;
use crate::error::{PayslipError, Result};
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;
use tracing::debug;

// A4 portrait
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 10.0;
const LINE_HEIGHT: f32 = 10.0;

const TITLE_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 12.0;

// Average Helvetica Bold glyph width as a fraction of the font size.
const BOLD_GLYPH_WIDTH: f32 = 0.56;
const PT_TO_MM: f32 = 0.352_778;

// printpdf writes the trailer as `/ID[(<32 chars>)(<32 chars>)]`.
const TRAILER_ID_OPEN: &[u8] = b"/ID[(";
const TRAILER_ID_SEPARATOR: &[u8] = b")(";
const TRAILER_ID_LEN: usize = 32;

/// Renders payslips as single-page PDF files under an output directory.
#[derive(Debug, Clone)]
pub struct PdfPayslipRenderer {
    output_dir: PathBuf,
}

impl PdfPayslipRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

impl PayslipRenderer for PdfPayslipRenderer {
    fn render(&self, employee: &ProcessedEmployee) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;

        let document = PayslipDocument::for_employee(employee);
        let bytes = render_pdf(&document)?;

        let path = payslip_path(&self.output_dir, employee.name());
        fs::write(&path, bytes)?;
        debug!(path = %path.display(), "payslip written");
        Ok(path)
    }
}

/// Lays the document out on one A4 page: a bold centered title, the identity
/// block and the salary block, separated by blank lines.
pub fn render_pdf(document: &PayslipDocument) -> Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        document.title.as_str(),
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Payslip",
    );
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(render_error)?;
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(render_error)?;
    let canvas = doc.get_page(page).get_layer(layer);

    let mut y = PAGE_HEIGHT - MARGIN - LINE_HEIGHT;
    canvas.use_text(
        document.title.as_str(),
        TITLE_SIZE,
        Mm(centered_x(&document.title)),
        Mm(y),
        &bold,
    );
    y -= 2.0 * LINE_HEIGHT;

    for line in &document.identity {
        canvas.use_text(line.as_str(), BODY_SIZE, Mm(MARGIN), Mm(y), &regular);
        y -= LINE_HEIGHT;
    }
    y -= LINE_HEIGHT;

    for line in &document.salary {
        canvas.use_text(line.as_str(), BODY_SIZE, Mm(MARGIN), Mm(y), &regular);
        y -= LINE_HEIGHT;
    }

    let mut bytes = doc.save_to_bytes().map_err(render_error)?;
    stamp_trailer_id(&mut bytes, &document_id(document))?;
    Ok(bytes)
}

/// Same content, same id: only the creation timestamps differ between runs.
fn document_id(document: &PayslipDocument) -> String {
    let mut hasher = DefaultHasher::new();
    document.hash(&mut hasher);
    let hash = hasher.finish();
    format!("{:016X}{:016X}", hash, hash.rotate_left(32))
}

/// Replaces both halves of the trailer `/ID` pair, which printpdf fills
/// with random characters, by `id`. Lengths are unchanged, so the xref
/// offsets stay valid.
fn stamp_trailer_id(bytes: &mut [u8], id: &str) -> Result<()> {
    let id = id.as_bytes();
    if id.len() != TRAILER_ID_LEN {
        return Err(PayslipError::Render(format!(
            "document id must be {TRAILER_ID_LEN} bytes"
        )));
    }

    let first = bytes
        .windows(TRAILER_ID_OPEN.len())
        .rposition(|window| window == TRAILER_ID_OPEN)
        .map(|position| position + TRAILER_ID_OPEN.len())
        .ok_or_else(|| PayslipError::Render("PDF trailer has no /ID entry".to_string()))?;
    let separator = first + TRAILER_ID_LEN;
    let second = separator + TRAILER_ID_SEPARATOR.len();
    if bytes.len() < second + TRAILER_ID_LEN
        || &bytes[separator..second] != TRAILER_ID_SEPARATOR
    {
        return Err(PayslipError::Render(
            "unexpected PDF trailer /ID layout".to_string(),
        ));
    }

    bytes[first..separator].copy_from_slice(id);
    bytes[second..second + TRAILER_ID_LEN].copy_from_slice(id);
    Ok(())
}

fn centered_x(title: &str) -> f32 {
    let width = title.chars().count() as f32 * TITLE_SIZE * BOLD_GLYPH_WIDTH * PT_TO_MM;
    ((PAGE_WIDTH - width) / 2.0).max(MARGIN)
}

fn render_error(err: printpdf::errors::Error) -> PayslipError {
    PayslipError::Render(err.to_string())
}
