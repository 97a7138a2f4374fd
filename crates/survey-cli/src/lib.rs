//! Library components of the survey template builder CLI.

pub mod logging;
pub mod selection;
