// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// Line segmentation and row validation for contact files

mod csv_parser;
mod row_validator;

pub use csv_parser::CsvParser;
pub use row_validator::ContactRowValidator;
