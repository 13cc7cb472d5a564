//! Model - Record Protocols and Attribute Resolution
//!
//! The ORM-facing side of the plugin: the protocols consumed from the
//! host's persistence layer and the resolver that reads attributes through
//! translations.

mod resolver;
mod translation;

pub use resolver::*;
pub use translation::*;
