//! densemat-cli: file loading and command runners behind the `densemat` binary.
pub mod commands;
pub mod io;
