pub mod charts;
pub mod dashboard;
pub mod detail_table;
