#![forbid(unsafe_code)]

//! Tenessi Runtime
//!
//! A small Elm-style runtime: a [`Model`] receives messages, returns [`Cmd`]s
//! describing side effects, and renders itself into a text [`Frame`].
//!
//! # Key Components
//!
//! - [`Model`] - Trait for application state and behavior
//! - [`Cmd`] - Commands for side effects
//! - [`Shell`] - The page shell that carries out user-visible effects
//! - [`Program`] - Drives a model against a shell
//! - [`ProgramSimulator`] - Deterministic driver for tests
//!
//! The model never touches the shell directly. Acknowledgments, scroll
//! requests, and log lines leave the model as commands and are executed by
//! whichever driver runs it.

pub mod frame;
pub mod program;
pub mod shell;
pub mod simulator;

pub use frame::Frame;
pub use program::{Cmd, Model, PresentPolicy, Program, ProgramConfig};
pub use shell::{Shell, TextShell};
pub use simulator::{CmdRecord, ProgramSimulator};
