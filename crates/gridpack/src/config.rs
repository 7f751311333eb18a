//! Grid configuration and its validation.
//!
//! A [`GridConfig`] can only be built or mutated through validating paths, so
//! any value in hand satisfies `1 <= min_columns <= max_columns` and has a
//! finite, positive height ratio. The packer relies on this to never divide
//! by zero.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Column lower bound used when none is configured.
pub const DEFAULT_MIN_COLUMNS: u32 = 1;

/// Column upper bound used when none is configured.
pub const DEFAULT_MAX_COLUMNS: u32 = 3;

/// Cell height as a fraction of cell width used when none is configured.
pub const DEFAULT_HEIGHT_RATIO: f64 = 0.83;

/// Rejected configuration values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridConfigError {
    /// `min_columns` must be at least 1.
    MinColumnsZero,
    /// `max_columns` is below `min_columns`.
    MaxBelowMin { min: u32, max: u32 },
    /// Height ratio is zero, negative, or not finite.
    InvalidHeightRatio(f64),
}

impl fmt::Display for GridConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinColumnsZero => f.write_str("min_columns must be at least 1"),
            Self::MaxBelowMin { min, max } => {
                write!(f, "max_columns ({max}) is below min_columns ({min})")
            }
            Self::InvalidHeightRatio(ratio) => {
                write!(f, "height_ratio must be finite and positive, got {ratio}")
            }
        }
    }
}

impl std::error::Error for GridConfigError {}

/// Spacing, column bounds and cell aspect ratio for one grid.
///
/// Deserializes from a style record with snake_case keys; missing keys take
/// their defaults and out-of-range values are rejected.
///
/// ```
/// use gridpack::GridConfig;
///
/// let config = GridConfig::new()
///     .with_spacing(8)
///     .with_columns(2, 4)
///     .and_then(|c| c.with_height_ratio(0.75))
///     .unwrap();
/// assert_eq!(config.min_columns(), 2);
/// assert_eq!(config.max_columns(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "GridConfigRecord")]
pub struct GridConfig {
    spacing: u32,
    min_columns: u32,
    max_columns: u32,
    height_ratio: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            spacing: 0,
            min_columns: DEFAULT_MIN_COLUMNS,
            max_columns: DEFAULT_MAX_COLUMNS,
            height_ratio: DEFAULT_HEIGHT_RATIO,
        }
    }
}

impl GridConfig {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the spacing.
    #[must_use]
    pub fn with_spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set both column bounds.
    pub fn with_columns(mut self, min: u32, max: u32) -> Result<Self, GridConfigError> {
        self.set_columns(min, max)?;
        Ok(self)
    }

    /// Set the height ratio.
    pub fn with_height_ratio(mut self, ratio: f64) -> Result<Self, GridConfigError> {
        self.set_height_ratio(ratio)?;
        Ok(self)
    }

    /// Gap between cells and around the content area, in pixels.
    #[inline]
    pub const fn spacing(&self) -> u32 {
        self.spacing
    }

    #[inline]
    pub const fn min_columns(&self) -> u32 {
        self.min_columns
    }

    #[inline]
    pub const fn max_columns(&self) -> u32 {
        self.max_columns
    }

    /// Cell height divided by cell width.
    #[inline]
    pub const fn height_ratio(&self) -> f64 {
        self.height_ratio
    }

    pub fn set_spacing(&mut self, spacing: u32) {
        self.spacing = spacing;
    }

    /// Set the lower column bound, keeping the current upper bound.
    pub fn set_min_columns(&mut self, min: u32) -> Result<(), GridConfigError> {
        self.set_columns(min, self.max_columns)
    }

    /// Set the upper column bound, keeping the current lower bound.
    pub fn set_max_columns(&mut self, max: u32) -> Result<(), GridConfigError> {
        self.set_columns(self.min_columns, max)
    }

    /// Set both column bounds at once.
    ///
    /// Use this when moving both bounds past each other; setting them one at
    /// a time may pass through an invalid state.
    pub fn set_columns(&mut self, min: u32, max: u32) -> Result<(), GridConfigError> {
        check_columns(min, max)?;
        self.min_columns = min;
        self.max_columns = max;
        Ok(())
    }

    pub fn set_height_ratio(&mut self, ratio: f64) -> Result<(), GridConfigError> {
        check_height_ratio(ratio)?;
        self.height_ratio = ratio;
        Ok(())
    }
}

fn check_columns(min: u32, max: u32) -> Result<(), GridConfigError> {
    if min == 0 {
        return Err(GridConfigError::MinColumnsZero);
    }
    if max < min {
        return Err(GridConfigError::MaxBelowMin { min, max });
    }
    Ok(())
}

fn check_height_ratio(ratio: f64) -> Result<(), GridConfigError> {
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(GridConfigError::InvalidHeightRatio(ratio));
    }
    Ok(())
}

/// Unvalidated wire form of [`GridConfig`].
#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "snake_case", deny_unknown_fields)]
struct GridConfigRecord {
    spacing: u32,
    min_columns: u32,
    max_columns: u32,
    height_ratio: f64,
}

impl Default for GridConfigRecord {
    fn default() -> Self {
        let GridConfig {
            spacing,
            min_columns,
            max_columns,
            height_ratio,
        } = GridConfig::default();
        Self {
            spacing,
            min_columns,
            max_columns,
            height_ratio,
        }
    }
}

impl TryFrom<GridConfigRecord> for GridConfig {
    type Error = GridConfigError;

    fn try_from(record: GridConfigRecord) -> Result<Self, Self::Error> {
        check_columns(record.min_columns, record.max_columns)?;
        check_height_ratio(record.height_ratio)?;
        Ok(Self {
            spacing: record.spacing,
            min_columns: record.min_columns,
            max_columns: record.max_columns,
            height_ratio: record.height_ratio,
        })
    }
}
