#![forbid(unsafe_code)]

//! Fixed-aspect-ratio grid packing.
//!
//! Arranges a host's visible children into uniform cells across a bounded
//! number of columns, wrapping rows as needed. The container width is given;
//! the height follows the content.
//!
//! - [`GridConfig`] - spacing, column bounds and cell height ratio
//! - [`compute_layout`] - the pure packer producing a [`GridLayout`]
//! - [`GridPacker`] - measure/arrange driver for a [`GridHost`]
//!
//! # Example
//!
//! ```
//! use gridpack::{Entry, GridConfig, GridPacker, Sides, SizeConstraint};
//!
//! let mut packer = GridPacker::new(GridConfig::new().with_spacing(4));
//! let mut entries = vec![Entry::visible(); 5];
//!
//! let size = packer.measure(
//!     &entries,
//!     SizeConstraint::Exactly(320),
//!     SizeConstraint::Unbounded(0),
//!     Sides::ZERO,
//! );
//! assert_eq!(size.width, 320);
//! assert!(packer.arrange(&mut entries));
//! assert!(entries.iter().all(|e| e.rect.is_some()));
//! ```

pub mod config;
pub mod host;
pub mod packer;

pub use config::{
    DEFAULT_HEIGHT_RATIO, DEFAULT_MAX_COLUMNS, DEFAULT_MIN_COLUMNS, GridConfig, GridConfigError,
};
pub use gridpack_core::geometry::{Rect, Sides, Size};
pub use gridpack_core::sizing::SizeConstraint;
pub use host::{Entry, GridHost, GridPacker};
pub use packer::{GridLayout, cell_size, compute_layout, resolve_columns};
