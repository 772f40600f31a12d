//! Library surface of the `wsim` maintenance binary.
//!
//! The shell itself embeds [`wsim`] directly; this crate only covers the
//! headless chores around it: preparing and purging the on-disk profile,
//! composing plugin URLs, and inspecting the identity headers the shell
//! injects.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod output;
