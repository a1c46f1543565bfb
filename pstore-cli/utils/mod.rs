//! Small shared utilities for the `pstore` binary.

pub mod args;
