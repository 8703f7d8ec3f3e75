//! Boilerplate for plain string drafts.
//!
//! - **`impl_draft!`** - Generates the field enum plus the `FormField` and
//!   `Draft` implementations for a struct whose fields are all `String`
//!
//! # Usage
//!
//! ```ignore
//! pub struct LoginDraft {
//!     pub username: String,
//!     pub password: String,
//! }
//!
//! impl_draft!(LoginDraft, LoginField {
//!     Username => username,
//!     Password => password,
//! });
//! ```

/// Implements `Draft` for `$draft` and declares `$field` with one variant per member.
///
/// The wire name of each variant is the member name.
#[macro_export]
macro_rules! impl_draft {
    ($draft:ident, $field:ident { $($variant:ident => $member:ident),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $field {
            $($variant),+
        }

        impl $crate::domain::validation::FormField for $field {
            fn name(&self) -> &'static str {
                match self {
                    $($field::$variant => stringify!($member)),+
                }
            }
        }

        impl $crate::domain::validation::Draft for $draft {
            type Field = $field;

            fn fields() -> &'static [$field] {
                &[$($field::$variant),+]
            }

            fn value(&self, field: $field) -> &str {
                match field {
                    $($field::$variant => &self.$member),+
                }
            }

            fn set(&mut self, field: $field, value: String) {
                match field {
                    $($field::$variant => self.$member = value),+
                }
            }
        }
    };
}
