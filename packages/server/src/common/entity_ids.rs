//! Typed ID definitions for the persisted entities.
//!
//! Both tables use SQLite integer surrogate keys. Wrapping them keeps a
//! `PlayerId` from being passed where a `UserId` is expected.
//!
//! ```rust
//! use manager_core::common::{PlayerId, UserId};
//!
//! let user_id = UserId::from(1);
//! let player_id = PlayerId::from(1);
//!
//! // This would be a compile error:
//! // let wrong: UserId = player_id;
//! # let _ = (user_id, player_id);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Returns the raw database key.
            #[inline]
            pub fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                Display::fmt(&self.0, f)
            }
        }
    };
}

entity_id!(
    /// Primary key of a row in `users`.
    UserId
);

entity_id!(
    /// Primary key of a row in `players`.
    PlayerId
);
