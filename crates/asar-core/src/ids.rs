//! Strongly typed, zero-cost identifier wrappers.
//!
//! Every id is a dense index into one of the `Domain` tables.  The inner
//! integer is `pub` so tests can build ids directly, but callers should go
//! through `.index()` when indexing a `Vec`.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
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

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a location (airport) in `Domain::locations`.
    pub struct LocationId(u32);
}

typed_id! {
    /// Index of a vehicle class.  `u16` keeps per-leg profit tables compact.
    pub struct ClassId(u16);
}

typed_id! {
    /// Index of a vehicle (aircraft) in `Domain::vehicles`.
    pub struct VehicleId(u32);
}

typed_id! {
    /// Index of a leg in `Domain::legs`; also its bit position in a `LegSet`.
    pub struct LegId(u32);
}
