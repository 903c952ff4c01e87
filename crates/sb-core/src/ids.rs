//! Strongly typed identifier wrappers.
//!
//! Live simulation objects have no identity in the document; the engine issues
//! these ids when it constructs them so the projector (and tests) can tell a
//! patched object apart from a rebuilt one.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The id after `self`.  Issuers hand ids out in ascending order.
            #[inline(always)]
            pub fn next(self) -> $name {
                $name(self.0 + 1)
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
    /// Identity of one live behavior object issued by the steering engine.
    pub struct BehaviorId(u32);
}

typed_id! {
    /// Identity of one live goal object issued by the steering engine.
    pub struct GoalId(u32);
}

typed_id! {
    /// Handle returned by the notification bus; pass it back to unsubscribe.
    pub struct SubscriptionId(u64);
}
