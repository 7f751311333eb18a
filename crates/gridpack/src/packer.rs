//! Column resolution and row packing.
//!
//! Cells are uniform: one width and one height for the whole grid. Children
//! fill rows left to right, `columns` per row, the last row possibly short.
//! `spacing` separates cells and also surrounds the content area, inside the
//! container padding:
//!
//! ```text
//! padding.left
//! |   spacing        spacing        spacing
//! v   v              v              v
//! +---+------+-------+------+-------+------+---+
//! |   | cell |       | cell |       | cell |   |
//! +---+------+-------+------+-------+------+---+
//! ```

use gridpack_core::{Rect, Sides, Size};

use crate::config::GridConfig;

/// Number of columns used for `child_count` children.
///
/// Fills up to `max_columns`; with fewer children than that, shrinks to the
/// child count but never below `min_columns`. Zero children yields
/// `min_columns`.
///
/// ```
/// use gridpack::resolve_columns;
///
/// assert_eq!(resolve_columns(7, 1, 3), 3);
/// assert_eq!(resolve_columns(2, 1, 3), 2);
/// assert_eq!(resolve_columns(2, 3, 5), 3);
/// ```
#[inline]
pub fn resolve_columns(child_count: usize, min_columns: u32, max_columns: u32) -> u32 {
    match u32::try_from(child_count) {
        Ok(count) if count < max_columns => count.max(min_columns),
        _ => max_columns,
    }
}

/// Size of every cell when the container is `container_width` wide.
///
/// The width left after padding and `columns + 1` gaps is split evenly with
/// integer division; the remainder stays unclaimed. A container too narrow
/// for the gaps yields zero-width cells.
///
/// `columns` must be at least 1.
pub fn cell_size(config: &GridConfig, container_width: u32, padding: Sides, columns: u32) -> Size {
    debug_assert!(columns >= 1, "cell_size needs at least one column");
    let gaps = (u64::from(columns) + 1) * u64::from(config.spacing());
    let usable = u64::from(container_width)
        .saturating_sub(u64::from(padding.horizontal_sum()))
        .saturating_sub(gaps);
    // usable <= container_width, so the quotient fits.
    let width = (usable / u64::from(columns)) as u32;
    let height = (f64::from(width) * config.height_ratio()).floor() as u32;
    Size::new(width, height)
}

/// A computed grid: one rectangle per visible child plus the content size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    columns: u32,
    cell: Size,
    cells: Vec<Rect>,
    content: Size,
}

impl GridLayout {
    /// Columns the children were packed into.
    #[inline]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Size shared by every cell.
    #[inline]
    pub const fn cell_size(&self) -> Size {
        self.cell
    }

    /// Cell rectangles, index-aligned with the visible children.
    #[inline]
    pub fn cells(&self) -> &[Rect] {
        &self.cells
    }

    /// Rectangle for the `index`-th visible child.
    #[inline]
    pub fn cell(&self, index: usize) -> Option<Rect> {
        self.cells.get(index).copied()
    }

    /// Desired container size, padding included, before host constraints.
    #[inline]
    pub const fn content_size(&self) -> Size {
        self.content
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of rows holding at least one cell.
    pub fn row_count(&self) -> usize {
        self.cells.len().div_ceil(self.columns as usize)
    }

    /// Iterate rows top to bottom; each row is a slice of its cells.
    pub fn rows(&self) -> impl Iterator<Item = &[Rect]> + '_ {
        self.cells.chunks(self.columns as usize)
    }
}

/// Pack `child_count` uniform cells into a grid `container_width` wide.
///
/// Pure and deterministic. The returned cells follow child order; invisible
/// children must already be excluded from `child_count`.
///
/// ```
/// use gridpack::{compute_layout, GridConfig, Rect, Sides};
///
/// let config = GridConfig::new().with_height_ratio(1.0).unwrap();
/// let layout = compute_layout(&config, 300, Sides::ZERO, 4);
/// assert_eq!(layout.columns(), 3);
/// assert_eq!(layout.cell(3), Some(Rect::new(0, 100, 100, 100)));
/// assert_eq!(layout.content_size().height, 200);
/// ```
pub fn compute_layout(
    config: &GridConfig,
    container_width: u32,
    padding: Sides,
    child_count: usize,
) -> GridLayout {
    let columns = resolve_columns(child_count, config.min_columns(), config.max_columns());
    let cell = cell_size(config, container_width, padding, columns);
    let spacing = config.spacing();

    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "grid_layout",
        width = container_width,
        children = child_count,
        columns = columns,
        cell_w = cell.width,
        cell_h = cell.height
    )
    .entered();

    #[cfg(feature = "tracing")]
    {
        if cell.width == 0 && child_count > 0 {
            tracing::debug!(
                width = container_width,
                spacing,
                columns,
                "container too narrow, cells collapse to zero width"
            );
        }
    }

    let mut cells = Vec::with_capacity(child_count);
    let mut x = padding.left;
    let mut y = padding.top;
    let mut column = 1;

    for _index in 0..child_count {
        if column > columns {
            column = 1;
            x = padding.left;
            y = y.saturating_add(cell.height).saturating_add(spacing);
            #[cfg(feature = "tracing")]
            tracing::trace!(index = _index, y, "row break");
        }

        let rect = Rect::at(x.saturating_add(spacing), y.saturating_add(spacing), cell);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            index = _index,
            x = rect.x,
            y = rect.y,
            w = rect.width,
            h = rect.height,
            "cell placed"
        );
        cells.push(rect);

        x = x.saturating_add(cell.width).saturating_add(spacing);
        column += 1;
    }

    // An empty grid has no row, so only one spacing gap is reported per axis,
    // matching the width formula.
    let content = if cells.is_empty() {
        Size::new(
            padding.horizontal_sum().saturating_add(spacing),
            padding.vertical_sum().saturating_add(spacing),
        )
    } else {
        Size::new(
            x.saturating_add(spacing).saturating_add(padding.right),
            y.saturating_add(cell.height)
                .saturating_add(spacing.saturating_mul(2))
                .saturating_add(padding.bottom),
        )
    };

    GridLayout {
        columns,
        cell,
        cells,
        content,
    }
}
