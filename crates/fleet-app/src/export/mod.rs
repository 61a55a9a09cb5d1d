//! Export of comparison results

mod excel;

pub use excel::export_to_excel;
