//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they work as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub`: ids
//! are assigned from enumeration positions (`SegmentId(i as u32)`) and the
//! per-state merge renumbers points the same way.

use std::fmt;

/// Wrap a primitive integer in a named ID type.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Index of a road segment within a filtered road dataset.
    pub struct SegmentId(u32);
}

typed_id! {
    /// Index of a sampled road point.  Local to one (state, route) partition
    /// until the per-state merge renumbers points state-wide.
    pub struct PointId(u32);
}

typed_id! {
    /// Index of a crash event within a filtered crash dataset.
    pub struct CrashId(u32);
}
