//! Interactive session and CLI for taskgen.
//!
//! This crate provides:
//! - [`Repl`] - Interactive task generation loop
//! - [`Session`] - Generator state shared by the REPL and batch mode
//! - [`FsLoader`] - Reads grammars from a directory
//! - [`init_logging`] - Installs the stderr `tracing` subscriber

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod loader;
pub mod logging;
pub mod repl;
pub mod session;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use loader::FsLoader;
pub use logging::init_logging;
pub use repl::{Reply, Repl};
pub use session::{Command, Session, render};
