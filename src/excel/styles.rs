//! Cell formats shared by every table in the report

use rust_xlsxwriter::{Color, Format, FormatAlign};

/// Background of title cells
pub const TITLE_BACKGROUND: u32 = 0xD9E1F2;

/// Font size of title cells
pub const TITLE_FONT_SIZE: f64 = 12.0;

/// Number format applied to numeric body cells
pub const DECIMAL_FORMAT: &str = "0.00";

/// Which format a cell is written with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    /// Header cells: bold, centered, shaded
    Title,
    /// Row labels
    Left,
    /// Text body cells
    Center,
    /// Numeric row labels
    LeftDecimal,
    /// Numeric body cells
    CenterDecimal,
}

/// The formats of one workbook, built once and shared by all sheets
#[derive(Debug, Clone)]
pub struct ReportFormats {
    title: Format,
    left: Format,
    center: Format,
    left_decimal: Format,
    center_decimal: Format,
}

impl ReportFormats {
    pub fn new() -> Self {
        let title = Format::new()
            .set_bold()
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_font_size(TITLE_FONT_SIZE)
            .set_background_color(Color::RGB(TITLE_BACKGROUND));

        let left = Format::new()
            .set_align(FormatAlign::Left)
            .set_align(FormatAlign::VerticalCenter);

        let center = Format::new()
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter);

        Self {
            left_decimal: left.clone().set_num_format(DECIMAL_FORMAT),
            center_decimal: center.clone().set_num_format(DECIMAL_FORMAT),
            title,
            left,
            center,
        }
    }

    /// Get the format for a style
    pub fn get(&self, style: CellStyle) -> &Format {
        match style {
            CellStyle::Title => &self.title,
            CellStyle::Left => &self.left,
            CellStyle::Center => &self.center,
            CellStyle::LeftDecimal => &self.left_decimal,
            CellStyle::CenterDecimal => &self.center_decimal,
        }
    }
}

impl Default for ReportFormats {
    fn default() -> Self {
        Self::new()
    }
}
