//! Translatable Forms Library
//!
//! This crate provides multi-locale ("translatable") field support for
//! admin-panel form builders: locale tabs that clone a field set under
//! locale-prefixed state paths, a prefill adapter that seeds form data from
//! a record's translations, and an attribute resolver that reads model
//! attributes through the current locale's translation.

pub mod components;
pub mod error;
pub mod form;
pub mod helpers;
pub mod locale;
pub mod model;
pub mod settings;
