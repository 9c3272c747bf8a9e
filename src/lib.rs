//! Conversion of Bruzual & Charlot (2003) model flux tables into JSON.

pub mod config;
pub mod convert;
pub mod data;
