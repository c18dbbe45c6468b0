//! Identifier types.
//!
//! Two families live here:
//!
//! - **Unique identifiers** (`WaypointId`, `SegmentId`, `NetworkId`) are the
//!   opaque 16-byte tokens that arrive with a route network.  They compare as
//!   raw bytes and are only ever used as lookup keys.
//! - **Dense indices** (`WaypointIndex`, `SegmentIndex`) are positions in the
//!   per-snapshot `Vec`s.  All hot-path data is addressed by index; unique ids
//!   are resolved once at the boundary.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::CoreError;

/// Generate a typed dense index wrapper around a primitive integer.
macro_rules! typed_index {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid index".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            #[inline(always)]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl Default for $name {
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
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

/// Generate an opaque 16-byte identifier backed by a `Uuid`.
macro_rules! unique_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(Uuid);

        impl $name {
            /// The all-zero identifier.
            pub const NIL: $name = $name(Uuid::nil());

            #[inline]
            pub const fn from_bytes(bytes: [u8; 16]) -> Self {
                Self(Uuid::from_bytes(bytes))
            }

            #[inline]
            pub fn as_bytes(&self) -> &[u8; 16] {
                self.0.as_bytes()
            }

            /// Random (version 4) identifier.
            pub fn random() -> Self {
                Self(Uuid::new_v4())
            }

            /// Name-based (version 5) identifier in the URL namespace, so the
            /// same source URL always maps to the same id.
            ///
            /// ```
            /// use rn_core::WaypointId;
            ///
            /// let a = WaypointId::from_url("http://openstreetmap.org/node/42");
            /// let b = WaypointId::from_url("http://openstreetmap.org/node/42");
            /// assert_eq!(a, b);
            /// ```
            pub fn from_url(url: &str) -> Self {
                Self(Uuid::new_v5(&Uuid::NAMESPACE_URL, url.as_bytes()))
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0.hyphenated(), f)
            }
        }

        impl FromStr for $name {
            type Err = CoreError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s)
                    .map(Self)
                    .map_err(|e| CoreError::Parse(format!("{} {s:?}: {e}", stringify!($name))))
            }
        }
    };
}

unique_id! {
    /// Unique identifier of a waypoint within a route network.
    pub struct WaypointId;
}

unique_id! {
    /// Unique identifier of a directed route segment.
    pub struct SegmentId;
}

unique_id! {
    /// Unique identifier of a route network snapshot.
    pub struct NetworkId;
}

typed_index! {
    /// Position of a waypoint in its snapshot's waypoint list.  Max ~4.3
    /// billion waypoints; `u32::MAX` is reserved for [`INVALID`](Self::INVALID).
    pub struct WaypointIndex(u32);
}

typed_index! {
    /// Position of a segment in its network's segment list.  Same limit as
    /// [`WaypointIndex`].
    pub struct SegmentIndex(u32);
}
