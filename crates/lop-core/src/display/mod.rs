//! HTML fragments and acknowledgement messages.
//!
//! The browser client swaps server-rendered fragments into its page, so every
//! read operation returns a type whose [`std::fmt::Display`] implementation
//! produces the matching HTML:
//!
//! - [`ActiveEntries`]: the `<tbody>` rows of the list table
//! - [`EditRow`]: the cells of a single row switched to edit mode
//! - [`Acknowledgement`]: plain-text confirmations for update, delete and save
//!
//! User-provided text is always escaped through [`Escaped`].
//!
//! ```rust
//! use lop_core::display::Acknowledgement;
//!
//! assert_eq!(Acknowledgement::Changed { id: 2 }.to_string(), "Item 2 changed");
//! assert_eq!(Acknowledgement::Saved.to_string(), "LoP saved");
//! ```

pub mod collections;
pub mod edit;
pub mod html;
pub mod status;

pub use collections::ActiveEntries;
pub use edit::EditRow;
pub use html::Escaped;
pub use status::Acknowledgement;
