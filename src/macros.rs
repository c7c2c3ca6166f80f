//! Utility macros for the AST layer.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `MK_NODE_ID!` - Declares a typed arena-id newtype
//!
//! These macros reduce boilerplate in the node arena implementation.

/// Declares a typed arena-id newtype.
///
/// Each node family stores its nodes in a plain vector inside the arena;
/// the generated id wraps the vector index and keeps ids of different
/// families from being mixed up.
///
/// # Example
///
/// ```ignore
/// MK_NODE_ID!(DeclId);
/// let id = DeclId(0);
/// ```
#[macro_export]
macro_rules! MK_NODE_ID {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(pub usize);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
