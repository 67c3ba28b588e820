//! Pay stub page layout.
//!
//! [`StubDocumentBuilder`] turns [`StubMetadata`] into an ordered list of
//! positioned text lines. The layout is deterministic: the only input that
//! moves content is the presence of a logo, which pushes every line down by
//! the logo's scaled height plus a gap.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{LayoutInstruction, LogoImage, LogoPlacement, StubDocument, StubMetadata};

/// Left edge of every left-aligned line.
pub const LEFT_MARGIN: f64 = 14.0;
/// Baseline of the first line when there is no logo; also the logo's top edge.
pub const TOP_MARGIN: f64 = 15.0;
/// Left edge of the logo.
pub const LOGO_X: f64 = 75.0;
/// Drawn width of the logo; height follows the image's aspect ratio.
pub const LOGO_WIDTH: f64 = 60.0;
/// Space between the logo and the first line.
pub const LOGO_GAP: f64 = 5.0;
/// Horizontal offset of the pay period column on the pay row.
pub const PAY_PERIOD_X: f64 = 90.0;
/// Horizontal offset of the frequency column on the pay row.
pub const PAY_FREQUENCY_X: f64 = 160.0;

/// Standard line advance.
pub const LINE_HEIGHT: f64 = 5.0;

const BODY_FONT: f64 = 10.0;
const HEADING_FONT: f64 = 11.0;
const NET_PAY_FONT: f64 = 12.0;
const FOOTER_FONT: f64 = 9.0;

const AFTER_COMPANY_BLOCK: f64 = 8.0;
const AFTER_PAYPAL: f64 = 7.0;
const WITHOUT_PAYPAL: f64 = 2.0;
const AFTER_PAY_ROW: f64 = 10.0;
const AFTER_SECTION_TOTAL: f64 = 7.0;
const AFTER_NET_PAY: f64 = 10.0;

/// File name used when the employee name is empty.
pub const DEFAULT_EMPLOYEE_FILE_STEM: &str = "employee";

/// The configurable wording of a pay stub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyle {
    /// Attribution printed as the last line.
    pub footer: String,
    /// Label of the state tax line.
    pub state_label: String,
    /// Extension of the saved document.
    pub file_extension: String,
}

impl Default for DocumentStyle {
    fn default() -> Self {
        Self {
            footer: "Generated by IDEATE FORWARD CONSULTING LLC".to_string(),
            state_label: "State (MO)".to_string(),
            file_extension: "pdf".to_string(),
        }
    }
}

/// Returns the file name a stub is saved under.
///
/// Path separators in the employee name are replaced with `-`.
///
/// # Examples
///
/// ```
/// use paystub_engine::document::stub_file_name;
///
/// assert_eq!(stub_file_name("Jane Doe", "pdf"), "paystub-Jane Doe.pdf");
/// assert_eq!(stub_file_name("", "pdf"), "paystub-employee.pdf");
/// ```
pub fn stub_file_name(employee_name: &str, extension: &str) -> String {
    let stem = if employee_name.is_empty() {
        DEFAULT_EMPLOYEE_FILE_STEM.to_string()
    } else {
        employee_name.replace(['/', '\\'], "-")
    };
    format!("paystub-{}.{}", stem, extension)
}

fn money(amount: Decimal) -> String {
    format!("${:.2}", amount)
}

/// Tracks the vertical position and current font while lines are emitted.
struct PageCursor {
    y: f64,
    font_size: f64,
    instructions: Vec<LayoutInstruction>,
}

impl PageCursor {
    fn new(start_y: f64) -> Self {
        Self {
            y: start_y,
            font_size: BODY_FONT,
            instructions: Vec::with_capacity(21),
        }
    }

    fn font(&mut self, size: f64) {
        self.font_size = size;
    }

    fn text_at(&mut self, text: String, x: f64) {
        self.instructions
            .push(LayoutInstruction::new(text, x, self.y, self.font_size));
    }

    fn line(&mut self, text: String, advance: f64) {
        self.text_at(text, LEFT_MARGIN);
        self.y += advance;
    }

    fn skip(&mut self, by: f64) {
        self.y += by;
    }
}

/// Lays out a single pay stub page.
///
/// # Example
///
/// ```
/// use paystub_engine::document::StubDocumentBuilder;
/// use paystub_engine::models::{PayResult, StubMetadata};
///
/// let builder = StubDocumentBuilder::default();
/// let lines = builder.build(&StubMetadata::empty(PayResult::zero()), None);
///
/// assert_eq!(lines.first().unwrap().text, "Company: ");
/// assert_eq!(lines.last().unwrap().text, "Generated by IDEATE FORWARD CONSULTING LLC");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StubDocumentBuilder {
    style: DocumentStyle,
}

impl StubDocumentBuilder {
    /// Creates a builder with the given wording.
    pub fn new(style: DocumentStyle) -> Self {
        Self { style }
    }

    /// Returns the wording used by this builder.
    pub fn style(&self) -> &DocumentStyle {
        &self.style
    }

    /// Returns the text lines of the page in drawing order.
    pub fn build(&self, metadata: &StubMetadata, logo: Option<&LogoImage>) -> Vec<LayoutInstruction> {
        self.layout(metadata, logo).instructions
    }

    /// Lays out the full page: file name, logo position and text lines.
    pub fn layout(&self, metadata: &StubMetadata, logo: Option<&LogoImage>) -> StubDocument {
        let logo = logo.map(|image| LogoPlacement {
            x: LOGO_X,
            y: TOP_MARGIN,
            width: LOGO_WIDTH,
            height: image.aspect_ratio() * LOGO_WIDTH,
        });
        let start_y = logo.map_or(TOP_MARGIN, |placement| {
            placement.y + placement.height + LOGO_GAP
        });

        let mut page = PageCursor::new(start_y);
        let pay = &metadata.pay;

        page.font(BODY_FONT);
        page.line(format!("Company: {}", metadata.company_name), LINE_HEIGHT);
        page.line(format!("Address: {}", metadata.company_address), LINE_HEIGHT);
        page.line(format!("Phone: {}", metadata.company_phone), AFTER_COMPANY_BLOCK);

        page.line(format!("Employee: {}", metadata.employee_name), LINE_HEIGHT);
        if !metadata.employee_id.is_empty() {
            page.line(
                format!("Employee ID (Last 4 SSN): {}", metadata.employee_id),
                LINE_HEIGHT,
            );
        }
        if !metadata.employee_address.is_empty() {
            page.line(format!("Address: {}", metadata.employee_address), LINE_HEIGHT);
        }
        if metadata.employee_paypal.is_empty() {
            page.skip(WITHOUT_PAYPAL);
        } else {
            page.line(format!("PayPal: {}", metadata.employee_paypal), AFTER_PAYPAL);
        }

        page.text_at(format!("Pay Date: {}", metadata.pay_date), LEFT_MARGIN);
        page.text_at(format!("Pay Period: {}", metadata.pay_period), PAY_PERIOD_X);
        page.text_at(format!("Frequency: {}", metadata.pay_frequency), PAY_FREQUENCY_X);
        page.skip(AFTER_PAY_ROW);

        page.font(HEADING_FONT);
        page.line("Earnings".to_string(), LINE_HEIGHT);
        page.font(BODY_FONT);
        page.line(format!("Gross Pay: {}", money(pay.gross)), AFTER_SECTION_TOTAL);

        page.font(HEADING_FONT);
        page.line("Deductions".to_string(), LINE_HEIGHT);
        page.font(BODY_FONT);
        page.line(format!("Federal: {}", money(pay.fed_amt)), LINE_HEIGHT);
        page.line(
            format!("{}: {}", self.style.state_label, money(pay.state_amt)),
            LINE_HEIGHT,
        );
        page.line(format!("Social Security: {}", money(pay.ss_amt)), LINE_HEIGHT);
        page.line(format!("Medicare: {}", money(pay.medicare_amt)), LINE_HEIGHT);
        if pay.other_deduction > Decimal::ZERO {
            page.line(format!("Other: {}", money(pay.other_deduction)), LINE_HEIGHT);
        }
        page.line(
            format!("Total Deductions: {}", money(pay.total_deductions)),
            AFTER_SECTION_TOTAL,
        );

        page.font(NET_PAY_FONT);
        page.line(format!("NET PAY: {}", money(pay.net_pay)), AFTER_NET_PAY);

        page.font(FOOTER_FONT);
        page.text_at(self.style.footer.clone(), LEFT_MARGIN);

        StubDocument {
            file_name: stub_file_name(&metadata.employee_name, &self.style.file_extension),
            logo,
            instructions: page.instructions,
        }
    }
}

/// Lays out a stub with the default wording.
pub fn build_layout(metadata: &StubMetadata, logo: Option<&LogoImage>) -> Vec<LayoutInstruction> {
    StubDocumentBuilder::default().build(metadata, logo)
}
