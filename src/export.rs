//! Tabular export encoders.
//!
//! The store builds a [`Table`] and hands it to a [`TableEncoder`], which turns it into
//! the bytes of a downloadable file. Store logic never depends on a particular
//! spreadsheet library: [`XlsxEncoder`] wraps `rust_xlsxwriter`, [`CsvEncoder`] wraps `csv`.

use crate::{
    config::settings::ExportFormat,
    errors::{Error, Result},
};
use rust_xlsxwriter::{Format, Workbook};

/// A single table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Free text
    Text(String),
    /// Numeric value, written as a number where the format supports it
    Number(f64),
    /// Blank cell
    Empty,
}

/// A named sheet with a header row and data rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Worksheet name, also the stem of the suggested filename
    pub sheet_name: String,
    /// Column titles
    pub header: Vec<String>,
    /// Data rows, each as wide as the header
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Number of rows in the encoded output, header included.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }
}

/// Turns a [`Table`] into file bytes.
pub trait TableEncoder {
    /// MIME type of the encoded bytes
    fn content_type(&self) -> &'static str;

    /// File extension without the leading dot
    fn extension(&self) -> &'static str;

    /// Encodes the table.
    ///
    /// # Errors
    /// Returns `Error::Export` if the underlying writer fails.
    fn encode(&self, table: &Table) -> Result<Vec<u8>>;
}

/// Office Open XML workbook encoder.
#[derive(Debug, Default, Clone, Copy)]
pub struct XlsxEncoder;

impl TableEncoder for XlsxEncoder {
    fn content_type(&self) -> &'static str {
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    }

    fn extension(&self) -> &'static str {
        "xlsx"
    }

    fn encode(&self, table: &Table) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&table.sheet_name)?;

        let bold = Format::new().set_bold();
        for (col, title) in (0u16..).zip(&table.header) {
            worksheet.write_string_with_format(0, col, title, &bold)?;
        }

        for (row, cells) in (1u32..).zip(&table.rows) {
            for (col, cell) in (0u16..).zip(cells) {
                match cell {
                    Cell::Text(text) => {
                        worksheet.write_string(row, col, text)?;
                    }
                    Cell::Number(value) => {
                        worksheet.write_number(row, col, *value)?;
                    }
                    Cell::Empty => {}
                }
            }
        }

        workbook.save_to_buffer().map_err(Into::into)
    }
}

/// Comma-separated values encoder.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvEncoder;

impl TableEncoder for CsvEncoder {
    fn content_type(&self) -> &'static str {
        "text/csv"
    }

    fn extension(&self) -> &'static str {
        "csv"
    }

    fn encode(&self, table: &Table) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&table.header)?;

        for cells in &table.rows {
            writer.write_record(cells.iter().map(|cell| match cell {
                Cell::Text(text) => text.clone(),
                Cell::Number(value) => value.to_string(),
                Cell::Empty => String::new(),
            }))?;
        }

        writer.into_inner().map_err(|e| Error::Export {
            message: e.to_string(),
        })
    }
}

/// Returns the encoder for a configured export format.
#[must_use]
pub fn encoder_for(format: ExportFormat) -> Box<dyn TableEncoder> {
    match format {
        ExportFormat::Xlsx => Box::new(XlsxEncoder),
        ExportFormat::Csv => Box::new(CsvEncoder),
    }
}
