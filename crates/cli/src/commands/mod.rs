//! CLI command implementations.
//!
//! Each command writes its result to the supplied writer and returns
//! resolver errors unchanged so `main()` can map them to exit codes.

pub mod database;
pub mod domains;
pub mod get;
pub mod settings;
pub mod sites;
