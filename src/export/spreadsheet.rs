use crate::error::RegistryResult;
use crate::models::{Contact, FIELD_HEADERS};
use rust_xlsxwriter::{Format, Workbook};

/// Name of the single worksheet in the export.
pub const SHEET_NAME: &str = "Contacts";

/// File name offered to the browser.
pub const EXPORT_FILE_NAME: &str = "contacts.xlsx";

/// MIME type of Office Open XML workbooks.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const COLUMN_WIDTH: f64 = 24.0;

/// Build an in-memory `.xlsx` workbook with one header row followed by one
/// row per contact, in the order given.
///
/// Every cell is written as text so phone numbers keep their leading zeros.
/// Absent gender/city values leave the cell empty.
pub fn build_contacts_workbook(contacts: &[Contact]) -> RegistryResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, title) in FIELD_HEADERS.iter().enumerate() {
        let col = col as u16;
        worksheet.set_column_width(col, COLUMN_WIDTH)?;
        worksheet.write_string_with_format(0, col, *title, &header)?;
    }

    for (index, contact) in contacts.iter().enumerate() {
        let row = index as u32 + 1;
        for (col, value) in contact.row().into_iter().enumerate() {
            if let Some(value) = value {
                worksheet.write_string(row, col as u16, value)?;
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}
