//! Presentation helpers: formatting, name cleanup, labels, charts and tables.

pub mod chart;
pub mod formatting;
pub mod labels;
pub mod names;
pub mod table;
