//! Reporting module.
//!
//! Renders profiling results into the processed-output report tables.

mod generator;

pub use generator::{
    OUTLIER_REPORT_FILE, ReportGenerator, RunReport, STRUCTURE_REPORT_FILE, SUMMARY_REPORT_FILE,
};
