//! Whole-file reading and writing.
//!
//! These helpers are thin pass-throughs to the file system; they add context to errors
//! and log what they touch, nothing more.

mod file;

pub use file::*;
