use super::types::{ScoredResidue, SmoothedPoint, SmoothedSeries};
use crate::error::{FusionError, FvResult};
use std::fmt;

pub const MIN_WINDOW: usize = 1;
/// Upper bound of the smoothing slider.
pub const MAX_WINDOW: usize = 20;
/// Largest `max_window` a config may raise the slider to.
pub const WINDOW_CEILING: usize = 100;

/// Rolling-mean window, always within `[1, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowSize(usize);

impl WindowSize {
    pub fn new(size: usize) -> FvResult<Self> {
        Self::bounded(size, MAX_WINDOW)
    }

    pub fn bounded(size: usize, max: usize) -> FvResult<Self> {
        if max < MIN_WINDOW {
            return Err(FusionError::InvalidArgument(format!(
                "window upper bound must be at least {}, got {}",
                MIN_WINDOW, max
            )));
        }
        if !(MIN_WINDOW..=max).contains(&size) {
            return Err(FusionError::InvalidArgument(format!(
                "window size must be in [{}, {}], got {}",
                MIN_WINDOW, max, size
            )));
        }
        Ok(Self(size))
    }

    /// Saturates into `[1, max]` (slider semantics). A `max` of 0 is treated as 1.
    pub fn clamped(size: usize, max: usize) -> Self {
        Self(size.clamp(MIN_WINDOW, max.max(MIN_WINDOW)))
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self(5)
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Trailing mean over `window` values ending at each index, rounded to 2 decimals.
///
/// The first `window - 1` outputs are `None`. A window longer than the input
/// yields all `None`. A window of 0 is rejected.
pub fn rolling_mean(values: &[f64], window: usize) -> FvResult<Vec<Option<f64>>> {
    if window == 0 {
        return Err(FusionError::InvalidArgument(
            "window size must be at least 1, got 0".to_string(),
        ));
    }

    let warmup = (window - 1).min(values.len());
    let mut out = Vec::with_capacity(values.len());
    out.resize(warmup, None);

    // Summed per window, not as a running sum: O(n * w), w capped by config.
    let divisor = window as f64;
    out.extend(
        values
            .windows(window)
            .map(|w| Some(round2(w.iter().sum::<f64>() / divisor))),
    );

    Ok(out)
}

pub fn smooth(residues: Vec<ScoredResidue>, window: WindowSize) -> SmoothedSeries {
    let raw: Vec<f64> = residues.iter().map(|r| r.raw_score).collect();
    // WindowSize is never 0
    let smoothed = rolling_mean(&raw, window.get()).unwrap_or_else(|_| vec![None; raw.len()]);

    let points = residues
        .into_iter()
        .zip(smoothed)
        .map(|(residue, rolling_mean)| SmoothedPoint {
            residue,
            rolling_mean,
        })
        .collect();

    SmoothedSeries {
        window: window.get(),
        points,
    }
}
