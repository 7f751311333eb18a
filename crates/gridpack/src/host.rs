//! Host integration: measure and arrange a host's children.
//!
//! A host is anything that can count its children, report their visibility
//! and accept one rectangle per child. [`GridPacker`] drives the two-phase
//! pass hosts expect: [`measure`](GridPacker::measure) computes and caches the
//! grid, [`arrange`](GridPacker::arrange) hands each visible child its cell.

use gridpack_core::{Rect, Sides, Size, SizeConstraint};

use crate::config::{GridConfig, GridConfigError};
use crate::packer::{GridLayout, compute_layout};

/// The children a grid lays out.
pub trait GridHost {
    /// Total children, visible or not.
    fn child_count(&self) -> usize;

    /// Whether the child at `index` takes a cell.
    fn is_visible(&self, index: usize) -> bool;

    /// Assign the child at `index` its rectangle.
    fn place(&mut self, index: usize, rect: Rect);

    /// Withdraw any rectangle from the hidden child at `index`.
    fn clear(&mut self, _index: usize) {}

    /// Number of children that take a cell.
    fn visible_count(&self) -> usize {
        (0..self.child_count())
            .filter(|&index| self.is_visible(index))
            .count()
    }
}

/// A child record for hosts that keep their children in a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Entry {
    pub visible: bool,
    /// Rectangle from the last successful [`GridPacker::arrange`]; `None`
    /// while hidden.
    pub rect: Option<Rect>,
}

impl Entry {
    pub const fn visible() -> Self {
        Self {
            visible: true,
            rect: None,
        }
    }

    pub const fn hidden() -> Self {
        Self {
            visible: false,
            rect: None,
        }
    }
}

impl GridHost for [Entry] {
    fn child_count(&self) -> usize {
        self.len()
    }

    fn is_visible(&self, index: usize) -> bool {
        self[index].visible
    }

    fn place(&mut self, index: usize, rect: Rect) {
        self[index].rect = Some(rect);
    }

    fn clear(&mut self, index: usize) {
        self[index].rect = None;
    }
}

impl GridHost for Vec<Entry> {
    fn child_count(&self) -> usize {
        self.as_slice().child_count()
    }

    fn is_visible(&self, index: usize) -> bool {
        self.as_slice().is_visible(index)
    }

    fn place(&mut self, index: usize, rect: Rect) {
        self.as_mut_slice().place(index, rect);
    }

    fn clear(&mut self, index: usize) {
        self.as_mut_slice().clear(index);
    }
}

/// Grid configuration plus the last measured layout.
///
/// Any configuration change drops the cached layout, so [`arrange`] refuses
/// to run until the host measures again.
///
/// [`arrange`]: GridPacker::arrange
#[derive(Debug, Clone, Default)]
pub struct GridPacker {
    config: GridConfig,
    layout: Option<GridLayout>,
}

impl GridPacker {
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            layout: None,
        }
    }

    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Layout from the last [`measure`](Self::measure), if still valid.
    #[inline]
    pub fn layout(&self) -> Option<&GridLayout> {
        self.layout.as_ref()
    }

    /// Drop the cached layout.
    pub fn invalidate(&mut self) {
        self.layout = None;
    }

    pub fn spacing(&self) -> u32 {
        self.config.spacing()
    }

    pub fn min_columns(&self) -> u32 {
        self.config.min_columns()
    }

    pub fn max_columns(&self) -> u32 {
        self.config.max_columns()
    }

    pub fn height_ratio(&self) -> f64 {
        self.config.height_ratio()
    }

    pub fn set_spacing(&mut self, spacing: u32) {
        self.config.set_spacing(spacing);
        self.invalidate();
    }

    pub fn set_min_columns(&mut self, min: u32) -> Result<(), GridConfigError> {
        self.config.set_min_columns(min)?;
        self.invalidate();
        Ok(())
    }

    pub fn set_max_columns(&mut self, max: u32) -> Result<(), GridConfigError> {
        self.config.set_max_columns(max)?;
        self.invalidate();
        Ok(())
    }

    pub fn set_columns(&mut self, min: u32, max: u32) -> Result<(), GridConfigError> {
        self.config.set_columns(min, max)?;
        self.invalidate();
        Ok(())
    }

    pub fn set_height_ratio(&mut self, ratio: f64) -> Result<(), GridConfigError> {
        self.config.set_height_ratio(ratio)?;
        self.invalidate();
        Ok(())
    }

    /// Replace the whole configuration.
    pub fn set_config(&mut self, config: GridConfig) {
        self.config = config;
        self.invalidate();
    }

    /// Lay out the host's visible children and report the container size.
    ///
    /// The grid is packed into the width carried by `width` whatever its mode;
    /// the desired content size is then resolved against both constraints.
    pub fn measure<H: GridHost + ?Sized>(
        &mut self,
        host: &H,
        width: SizeConstraint,
        height: SizeConstraint,
        padding: Sides,
    ) -> Size {
        let visible = host.visible_count();

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "grid_measure",
            children = host.child_count(),
            visible = visible,
            width = width.size()
        )
        .entered();

        let layout = compute_layout(&self.config, width.size(), padding, visible);
        let content = layout.content_size();
        self.layout = Some(layout);

        Size::new(width.resolve(content.width), height.resolve(content.height))
    }

    /// Hand each visible child its measured cell, in order.
    ///
    /// Hidden children receive no cell and are cleared. Returns `false`, and
    /// touches nothing, when there is no valid measurement to apply: never
    /// measured, invalidated by a setter, or the host's visible children no
    /// longer match the measured count.
    pub fn arrange<H: GridHost + ?Sized>(&self, host: &mut H) -> bool {
        let Some(layout) = &self.layout else {
            return false;
        };
        let visible = host.visible_count();
        if visible != layout.len() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                visible,
                cells = layout.len(),
                "visible children changed since measure, arrange skipped"
            );
            return false;
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "grid_arrange",
            children = host.child_count(),
            cells = layout.len()
        )
        .entered();

        let mut cells = layout.cells().iter().copied();
        for index in 0..host.child_count() {
            if host.is_visible(index) {
                if let Some(rect) = cells.next() {
                    host.place(index, rect);
                }
            } else {
                host.clear(index);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packer() -> GridPacker {
        GridPacker::new(
            GridConfig::new()
                .with_columns(1, 3)
                .and_then(|c| c.with_height_ratio(1.0))
                .unwrap(),
        )
    }

    #[test]
    fn visible_count_skips_hidden() {
        let entries = vec![Entry::visible(), Entry::hidden(), Entry::visible()];
        assert_eq!(entries.child_count(), 3);
        assert_eq!(entries.visible_count(), 2);
    }

    #[test]
    fn measure_caches_layout() {
        let mut packer = packer();
        let entries = vec![Entry::visible(); 4];
        let size = packer.measure(
            entries.as_slice(),
            SizeConstraint::Exactly(300),
            SizeConstraint::Unbounded(0),
            Sides::ZERO,
        );
        assert_eq!(size, Size::new(300, 200));
        let layout = packer.layout().unwrap();
        assert_eq!(layout.columns(), 3);
        assert_eq!(layout.len(), 4);
    }

    #[test]
    fn measure_resolves_against_constraints() {
        let mut packer = packer();
        let entries = vec![Entry::visible(); 7];
        // Content is 100 wide (short last row) and 300 tall.
        let size = packer.measure(
            &entries,
            SizeConstraint::AtMost(300),
            SizeConstraint::AtMost(250),
            Sides::ZERO,
        );
        assert_eq!(size, Size::new(100, 250));
    }

    #[test]
    fn arrange_skips_hidden_children() {
        let mut packer = packer();
        let mut entries = vec![
            Entry::visible(),
            Entry::hidden(),
            Entry::visible(),
            Entry::visible(),
        ];
        packer.measure(
            &entries,
            SizeConstraint::Exactly(300),
            SizeConstraint::Unbounded(0),
            Sides::ZERO,
        );
        assert!(packer.arrange(&mut entries));
        assert_eq!(entries[0].rect, Some(Rect::new(0, 0, 100, 100)));
        assert_eq!(entries[1].rect, None);
        assert_eq!(entries[2].rect, Some(Rect::new(100, 0, 100, 100)));
        assert_eq!(entries[3].rect, Some(Rect::new(200, 0, 100, 100)));
    }

    #[test]
    fn arrange_without_measure_is_refused() {
        let packer = packer();
        let mut entries = vec![Entry::visible()];
        assert!(!packer.arrange(&mut entries));
        assert_eq!(entries[0].rect, None);
    }

    #[test]
    fn arrange_refuses_when_visibility_changed() {
        let mut packer = packer();
        let mut entries = vec![Entry::visible(); 4];
        packer.measure(
            &entries,
            SizeConstraint::Exactly(300),
            SizeConstraint::Unbounded(0),
            Sides::ZERO,
        );
        assert!(packer.arrange(&mut entries));
        let before = entries.clone();

        entries[0].visible = false;
        entries.push(Entry::visible());
        entries.push(Entry::visible());
        assert!(!packer.arrange(&mut entries));
        assert_eq!(&entries[..4], &before[..]);
        assert_eq!(entries[4].rect, None);
        assert_eq!(entries[5].rect, None);

        packer.measure(
            &entries,
            SizeConstraint::Exactly(300),
            SizeConstraint::Unbounded(0),
            Sides::ZERO,
        );
        assert!(packer.arrange(&mut entries));
        assert_eq!(entries[0].rect, None);
        assert_eq!(entries[1].rect, Some(Rect::new(0, 0, 100, 100)));
        assert_eq!(entries[5].rect, Some(Rect::new(100, 100, 100, 100)));
        assert!(entries.iter().all(|e| e.rect.is_some() == e.visible));
    }

    #[test]
    fn arrange_clears_newly_hidden_entry() {
        let mut packer = packer();
        let mut entries = vec![Entry::visible(); 3];
        let measure = |p: &mut GridPacker, entries: &[Entry]| {
            p.measure(
                entries,
                SizeConstraint::Exactly(300),
                SizeConstraint::Unbounded(0),
                Sides::ZERO,
            );
        };
        measure(&mut packer, &entries);
        assert!(packer.arrange(&mut entries));

        entries[1].visible = false;
        measure(&mut packer, &entries);
        assert!(packer.arrange(&mut entries));
        assert_eq!(entries[1].rect, None);
        assert_eq!(entries[2].rect, Some(Rect::new(150, 0, 150, 150)));
    }

    #[test]
    fn setters_invalidate() {
        let mut packer = packer();
        let entries = vec![Entry::visible(); 2];
        let measure = |p: &mut GridPacker| {
            p.measure(
                &entries,
                SizeConstraint::Exactly(300),
                SizeConstraint::Unbounded(0),
                Sides::ZERO,
            );
        };

        measure(&mut packer);
        packer.set_spacing(4);
        assert!(packer.layout().is_none());

        measure(&mut packer);
        packer.set_height_ratio(0.5).unwrap();
        assert!(packer.layout().is_none());

        measure(&mut packer);
        packer.set_min_columns(2).unwrap();
        assert!(packer.layout().is_none());

        measure(&mut packer);
        packer.set_max_columns(5).unwrap();
        assert!(packer.layout().is_none());

        measure(&mut packer);
        packer.set_columns(1, 1).unwrap();
        assert!(packer.layout().is_none());
        assert_eq!((packer.min_columns(), packer.max_columns()), (1, 1));
    }

    #[test]
    fn rejected_setter_keeps_layout() {
        let mut packer = packer();
        let entries = vec![Entry::visible(); 2];
        packer.measure(
            &entries,
            SizeConstraint::Exactly(300),
            SizeConstraint::Unbounded(0),
            Sides::ZERO,
        );
        assert_eq!(
            packer.set_min_columns(0),
            Err(GridConfigError::MinColumnsZero)
        );
        assert!(packer.layout().is_some());
        assert_eq!(packer.min_columns(), 1);
    }

    #[test]
    fn remeasure_picks_up_new_config() {
        let mut packer = packer();
        let entries = vec![Entry::visible(); 2];
        let first = packer.measure(
            &entries,
            SizeConstraint::Exactly(300),
            SizeConstraint::Unbounded(0),
            Sides::ZERO,
        );
        packer.set_height_ratio(0.5).unwrap();
        let second = packer.measure(
            &entries,
            SizeConstraint::Exactly(300),
            SizeConstraint::Unbounded(0),
            Sides::ZERO,
        );
        assert_eq!(first.height, 150);
        assert_eq!(second.height, 75);
    }
}
