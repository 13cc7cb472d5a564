//! Form - Field Protocol, Locale Tabs, and Prefill
//!
//! The pieces a host form builder composes to get translatable fields.

mod field;
mod prefill;
mod tabs;

pub use field::*;
pub use prefill::*;
pub use tabs::*;
