//! Nearest-fit size matching.
//!
//! A size is found in two stages: the nearest chart underband first, then
//! the nearest overbust among the entries sharing that underband. The chosen
//! entry is only a match when its overbust lies within the unit's tolerance.
//!
//! Ties at either stage keep the entry encountered first in chart order, so
//! callers that want lowest-value tie-breaks must sort the chart first.

use shapefit_model::{SizeChartEntry, Unit, is_positive};
use thiserror::Error;

/// Why no size was returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NoMatch {
    #[error("measurements must be positive (underband={underband}, overbust={overbust})")]
    InvalidMeasurement { underband: f64, overbust: f64 },
    #[error("size chart has no usable entries")]
    EmptyChart,
    #[error(
        "nearest size {size} is {distance}{unit} away from the measured overbust (tolerance {tolerance}{unit})"
    )]
    OutOfTolerance {
        size: String,
        distance: f64,
        tolerance: f64,
        unit: Unit,
    },
}

/// A chart entry accepted for a measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeMatch<'a> {
    pub entry: &'a SizeChartEntry,
    pub underband_distance: f64,
    pub overbust_distance: f64,
}

impl<'a> SizeMatch<'a> {
    pub fn size(&self) -> &'a str {
        &self.entry.size
    }
}

/// Return the matched size label, or `None` when nothing fits.
pub fn match_size(
    underband: f64,
    overbust: f64,
    chart: &[SizeChartEntry],
    unit: Unit,
) -> Option<String> {
    find_match(underband, overbust, chart, unit)
        .ok()
        .map(|found| found.entry.size.clone())
}

/// Two-stage nearest match with the reason for a rejection.
pub fn find_match(
    underband: f64,
    overbust: f64,
    chart: &[SizeChartEntry],
    unit: Unit,
) -> Result<SizeMatch<'_>, NoMatch> {
    if !is_positive(underband) || !is_positive(overbust) {
        return Err(NoMatch::InvalidMeasurement {
            underband,
            overbust,
        });
    }

    let (band_entry, underband_distance) =
        nearest(chart.iter(), |entry| entry.underband - underband).ok_or(NoMatch::EmptyChart)?;
    let band = band_entry.underband;

    let (entry, overbust_distance) = nearest(
        chart.iter().filter(|entry| entry.underband == band),
        |entry| entry.overbust - overbust,
    )
    .ok_or(NoMatch::EmptyChart)?;

    let tolerance = unit.tolerance();
    if overbust_distance > tolerance {
        return Err(NoMatch::OutOfTolerance {
            size: entry.size.clone(),
            distance: overbust_distance,
            tolerance,
            unit,
        });
    }

    Ok(SizeMatch {
        entry,
        underband_distance,
        overbust_distance,
    })
}

/// First item minimizing `|delta(item)|`; items with a non-finite delta are
/// skipped.
fn nearest<'a, I, F>(items: I, delta: F) -> Option<(&'a SizeChartEntry, f64)>
where
    I: Iterator<Item = &'a SizeChartEntry>,
    F: Fn(&SizeChartEntry) -> f64,
{
    let mut best: Option<(&'a SizeChartEntry, f64)> = None;
    for item in items {
        let distance = delta(item).abs();
        if !distance.is_finite() {
            continue;
        }
        match best {
            Some((_, current)) if distance >= current => {}
            _ => best = Some((item, distance)),
        }
    }
    best
}
