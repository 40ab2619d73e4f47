//! Size reference tables.

use serde::{Deserialize, Serialize};

use crate::measurement::Unit;

/// One row of a size chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeChartEntry {
    pub underband: f64,
    pub overbust: f64,
    pub size: String,
}

impl SizeChartEntry {
    pub fn new(underband: f64, overbust: f64, size: impl Into<String>) -> Self {
        Self {
            underband,
            overbust,
            size: size.into(),
        }
    }
}

/// Ordered size chart for one unit system.
///
/// Entry order is significant: ties during matching resolve to the entry
/// encountered first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeChart {
    pub unit: Unit,
    pub entries: Vec<SizeChartEntry>,
}

impl SizeChart {
    pub fn new(unit: Unit, entries: Vec<SizeChartEntry>) -> Self {
        Self { unit, entries }
    }

    pub fn entries(&self) -> &[SizeChartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct underband values in first-encountered order.
    pub fn underbands(&self) -> Vec<f64> {
        let mut bands: Vec<f64> = Vec::new();
        for entry in &self.entries {
            if !bands.contains(&entry.underband) {
                bands.push(entry.underband);
            }
        }
        bands
    }
}
