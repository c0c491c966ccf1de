//! Entity ↔ model mappers

mod confession;
mod reaction;
