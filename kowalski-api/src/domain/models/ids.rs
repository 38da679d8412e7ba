use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares an integer identifier newtype.
///
/// Every table uses a SERIAL primary key, so all ids wrap i32.
macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            pub fn new(id: i32) -> Self {
                Self(id)
            }

            pub fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

integer_id!(
    /// A user identifier.
    UserId
);
integer_id!(
    /// A project identifier.
    ProjectId
);
integer_id!(
    /// An activity identifier. Activities belong to exactly one project.
    ActivityId
);
integer_id!(
    /// A task identifier. Tasks belong to exactly one activity.
    TaskId
);
integer_id!(
    /// A time record identifier.
    TimeRecordId
);
