//! Shared error definitions for the wire types.

pub mod errors;
