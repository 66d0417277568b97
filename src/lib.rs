//! A text input offering live, filterable suggestions from an in-memory list
//! or a remote endpoint. Committing to a suggestion locks the input and
//! exposes the chosen id as a named form value.

pub mod config;
pub mod error;
pub mod field;
pub mod form;
pub mod item;
pub mod source;
pub mod state;
pub mod ui;

pub use error::{Error, ResolveError};
pub use field::SearchField;
pub use form::{FieldId, Form};
pub use item::Item;
