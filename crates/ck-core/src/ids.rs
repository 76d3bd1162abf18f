//! Strongly typed identifier wrappers.
//!
//! Both customers and servers are numbered from 1, matching the labels that
//! appear in the event log.  [`slot`](CustomerId::slot) converts an id into a
//! zero-based position in id-ordered storage.

use std::fmt;

/// Generate a typed, 1-based ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The first id handed out.
            pub const FIRST: $name = $name(1);

            /// Zero-based position of this id in a `Vec` ordered by id.
            ///
            /// # Panics
            /// Panics in debug mode on the (never issued) id 0.
            #[inline(always)]
            pub fn slot(self) -> usize {
                (self.0 - 1) as usize
            }

            /// Inverse of [`slot`](Self::slot).
            #[inline(always)]
            pub fn from_slot(slot: usize) -> $name {
                $name(slot as $inner + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

typed_id! {
    /// Identifier of a customer, assigned in arrival order starting at 1.
    pub struct CustomerId(u32);
}

typed_id! {
    /// Identifier of a server.  Human servers take `1..=H`, self-checkout
    /// counters take `H+1..=H+S`.
    pub struct ServerId(u32);
}
