//! Configuration loader and schema types.
//!
//! Settings come from `ITTI__*` environment variables layered over struct
//! defaults. There is no configuration file.

mod load;
mod schema;

pub use schema::*;
