//! Spreadsheet export of the contact registry.

mod spreadsheet;

pub use spreadsheet::{build_contacts_workbook, EXPORT_FILE_NAME, SHEET_NAME, XLSX_CONTENT_TYPE};
