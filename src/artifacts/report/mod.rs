pub mod palette;
pub mod report_table;
