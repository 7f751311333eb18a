#![forbid(unsafe_code)]

//! Size constraints imposed by the host on a measurement pass.

/// How the host bounds one axis of the container.
///
/// Every variant carries a size; a layout pass may read it as the available
/// extent regardless of mode, then [`resolve`](Self::resolve) its desired
/// extent against the constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeConstraint {
    /// The container is exactly this large.
    Exactly(u32),
    /// The container may be at most this large.
    AtMost(u32),
    /// No limit; the value is only a hint.
    Unbounded(u32),
}

impl SizeConstraint {
    /// The size carried by the constraint.
    #[inline]
    pub const fn size(self) -> u32 {
        match self {
            Self::Exactly(size) | Self::AtMost(size) | Self::Unbounded(size) => size,
        }
    }

    /// Reconcile a desired extent with this constraint.
    #[inline]
    pub const fn resolve(self, desired: u32) -> u32 {
        match self {
            Self::Exactly(size) => size,
            Self::AtMost(max) => {
                if desired < max {
                    desired
                } else {
                    max
                }
            }
            Self::Unbounded(_) => desired,
        }
    }
}

impl Default for SizeConstraint {
    fn default() -> Self {
        Self::Unbounded(0)
    }
}
