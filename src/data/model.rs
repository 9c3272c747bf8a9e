use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// AgeLabel – one of the six fixed model ages
// ---------------------------------------------------------------------------

/// Population age of a bc03 flux column.
///
/// Variant order is the column order of the source table (columns 1..=6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AgeLabel {
    Myr1,
    Myr10,
    Myr100,
    Myr1000,
    Myr5000,
    Myr10000,
}

impl AgeLabel {
    /// All ages in column order.
    pub const ALL: [AgeLabel; 6] = [
        AgeLabel::Myr1,
        AgeLabel::Myr10,
        AgeLabel::Myr100,
        AgeLabel::Myr1000,
        AgeLabel::Myr5000,
        AgeLabel::Myr10000,
    ];

    /// Key used for this age in the JSON `models` object.
    pub fn as_str(self) -> &'static str {
        match self {
            AgeLabel::Myr1 => "1Myr",
            AgeLabel::Myr10 => "10Myr",
            AgeLabel::Myr100 => "100Myr",
            AgeLabel::Myr1000 => "1000Myr",
            AgeLabel::Myr5000 => "5000Myr",
            AgeLabel::Myr10000 => "10000Myr",
        }
    }

    /// Age in million years.
    pub fn myr(self) -> u32 {
        match self {
            AgeLabel::Myr1 => 1,
            AgeLabel::Myr10 => 10,
            AgeLabel::Myr100 => 100,
            AgeLabel::Myr1000 => 1000,
            AgeLabel::Myr5000 => 5000,
            AgeLabel::Myr10000 => 10000,
        }
    }

    /// Zero-based column in the input table (column 0 is the wavelength).
    pub fn column(self) -> usize {
        self as usize + 1
    }
}

impl fmt::Display for AgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ModelRow – one line of the text table
// ---------------------------------------------------------------------------

/// A single parsed line: wavelength plus one flux per age.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelRow {
    pub wavelength: f64,
    /// Fluxes ordered as [`AgeLabel::ALL`].
    pub fluxes: [f64; 6],
}

impl ModelRow {
    pub fn flux(&self, age: AgeLabel) -> f64 {
        self.fluxes[age as usize]
    }
}

// ---------------------------------------------------------------------------
// AgeSeries – the `models` object
// ---------------------------------------------------------------------------

/// Flux series keyed by age. Field order matches the column order so the
/// serialized object lists keys from youngest to oldest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgeSeries {
    #[serde(rename = "1Myr")]
    pub myr1: Vec<f64>,
    #[serde(rename = "10Myr")]
    pub myr10: Vec<f64>,
    #[serde(rename = "100Myr")]
    pub myr100: Vec<f64>,
    #[serde(rename = "1000Myr")]
    pub myr1000: Vec<f64>,
    #[serde(rename = "5000Myr")]
    pub myr5000: Vec<f64>,
    #[serde(rename = "10000Myr")]
    pub myr10000: Vec<f64>,
}

impl AgeSeries {
    pub fn get(&self, age: AgeLabel) -> &[f64] {
        match age {
            AgeLabel::Myr1 => &self.myr1,
            AgeLabel::Myr10 => &self.myr10,
            AgeLabel::Myr100 => &self.myr100,
            AgeLabel::Myr1000 => &self.myr1000,
            AgeLabel::Myr5000 => &self.myr5000,
            AgeLabel::Myr10000 => &self.myr10000,
        }
    }

    fn get_mut(&mut self, age: AgeLabel) -> &mut Vec<f64> {
        match age {
            AgeLabel::Myr1 => &mut self.myr1,
            AgeLabel::Myr10 => &mut self.myr10,
            AgeLabel::Myr100 => &mut self.myr100,
            AgeLabel::Myr1000 => &mut self.myr1000,
            AgeLabel::Myr5000 => &mut self.myr5000,
            AgeLabel::Myr10000 => &mut self.myr10000,
        }
    }
}

// ---------------------------------------------------------------------------
// ModelTable – the complete output document
// ---------------------------------------------------------------------------

/// The whole converted table: seven parallel sequences.
///
/// Rows only enter through [`ModelTable::push_row`], which keeps every
/// series the same length as `wavelengths`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelTable {
    pub wavelengths: Vec<f64>,
    pub models: AgeSeries,
}

impl ModelTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one parsed line to all seven sequences.
    pub fn push_row(&mut self, row: &ModelRow) {
        self.wavelengths.push(row.wavelength);
        for age in AgeLabel::ALL {
            self.models.get_mut(age).push(row.flux(age));
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.wavelengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wavelengths.is_empty()
    }
}
