//! Dashboard widgets: input panel, detection panel, history plot.

pub mod panels;
pub mod plot;
