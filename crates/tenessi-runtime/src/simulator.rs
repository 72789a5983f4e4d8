#![forbid(unsafe_code)]

//! Deterministic program simulator for testing.
//!
//! `ProgramSimulator` runs a [`Model`] without a shell, recording every
//! command it executes. Acknowledgments, scroll requests, and log lines are
//! collected for assertions, and frames can be captured on demand.
//!
//! # Example
//!
//! ```ignore
//! use tenessi_runtime::ProgramSimulator;
//!
//! let mut sim = ProgramSimulator::new(Counter { value: 0 });
//! sim.init();
//! sim.send(Msg::Increment);
//! assert_eq!(sim.model().value, 1);
//!
//! let frame = sim.capture_frame(80);
//! assert!(frame.contains("1"));
//! ```

use crate::frame::Frame;
use crate::program::{Cmd, Model};

/// Record of a command that was executed during simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CmdRecord {
    /// No-op command.
    None,
    /// Quit command.
    Quit,
    /// Message sent to model (not stored, just noted).
    Msg,
    /// Batch of commands.
    Batch(usize),
    /// Sequence of commands.
    Sequence(usize),
    /// Log message emitted.
    Log(String),
    /// Acknowledgment shown.
    Alert(String),
    /// Scroll requested.
    ScrollIntoView(String),
}

/// Deterministic simulator for [`Model`] testing.
pub struct ProgramSimulator<M: Model> {
    /// The application model.
    model: M,
    /// Captured frames.
    frames: Vec<Frame>,
    /// Record of all executed commands.
    command_log: Vec<CmdRecord>,
    /// Whether the simulated program is still running.
    running: bool,
    /// Log messages emitted via `Cmd::Log`.
    logs: Vec<String>,
    /// Acknowledgments emitted via `Cmd::Alert`.
    alerts: Vec<String>,
    /// Anchors requested via `Cmd::ScrollIntoView`.
    scroll_requests: Vec<String>,
}

impl<M: Model> ProgramSimulator<M> {
    /// Create a new simulator with the given model.
    ///
    /// The model is not initialized until [`init`](Self::init) is called.
    pub fn new(model: M) -> Self {
        Self {
            model,
            frames: Vec::new(),
            command_log: Vec::new(),
            running: true,
            logs: Vec::new(),
            alerts: Vec::new(),
            scroll_requests: Vec::new(),
        }
    }

    /// Initialize the model by calling `Model::init()` and executing returned commands.
    pub fn init(&mut self) {
        let cmd = self.model.init();
        self.execute_cmd(cmd);
    }

    /// Send a specific message to the model.
    ///
    /// The message is dispatched through `Model::update()` and returned
    /// commands are executed.
    pub fn send(&mut self, msg: M::Message) {
        if !self.running {
            return;
        }
        let cmd = self.model.update(msg);
        self.execute_cmd(cmd);
    }

    /// Send messages in order, stopping early if the model quits.
    pub fn send_all<I>(&mut self, messages: I)
    where
        I: IntoIterator<Item = M::Message>,
    {
        for msg in messages {
            if !self.running {
                break;
            }
            self.send(msg);
        }
    }

    /// Render the model into a fresh frame and store it.
    pub fn capture_frame(&mut self, width: u16) -> &Frame {
        let mut frame = Frame::new(width);
        self.model.view(&mut frame);
        self.frames.push(frame);
        self.frames.last().expect("frame just pushed")
    }

    /// Get all captured frames.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Get the most recently captured frame, if any.
    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Get the number of captured frames.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Get a reference to the model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get a mutable reference to the model.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Check if the simulated program is still running.
    ///
    /// Returns `false` after a `Cmd::Quit` has been executed.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Get all log messages emitted via `Cmd::Log`.
    pub fn logs(&self) -> &[String] {
        &self.logs
    }

    /// Get all acknowledgments emitted via `Cmd::Alert`.
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Get all anchors requested via `Cmd::ScrollIntoView`.
    pub fn scroll_requests(&self) -> &[String] {
        &self.scroll_requests
    }

    /// Get the command execution log.
    pub fn command_log(&self) -> &[CmdRecord] {
        &self.command_log
    }

    /// Clear all captured frames.
    pub fn clear_frames(&mut self) {
        self.frames.clear();
    }

    /// Clear all logs.
    pub fn clear_logs(&mut self) {
        self.logs.clear();
    }

    /// Execute a command without IO.
    ///
    /// Cmd::Msg recurses through update; shell effects are recorded.
    fn execute_cmd(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => {
                self.command_log.push(CmdRecord::None);
            }
            Cmd::Quit => {
                self.running = false;
                self.command_log.push(CmdRecord::Quit);
            }
            Cmd::Msg(m) => {
                self.command_log.push(CmdRecord::Msg);
                let cmd = self.model.update(m);
                self.execute_cmd(cmd);
            }
            Cmd::Batch(cmds) => {
                let count = cmds.len();
                self.command_log.push(CmdRecord::Batch(count));
                for c in cmds {
                    self.execute_cmd(c);
                    if !self.running {
                        break;
                    }
                }
            }
            Cmd::Sequence(cmds) => {
                let count = cmds.len();
                self.command_log.push(CmdRecord::Sequence(count));
                for c in cmds {
                    self.execute_cmd(c);
                    if !self.running {
                        break;
                    }
                }
            }
            Cmd::Log(text) => {
                self.command_log.push(CmdRecord::Log(text.clone()));
                self.logs.push(text);
            }
            Cmd::Alert(text) => {
                self.command_log.push(CmdRecord::Alert(text.clone()));
                self.alerts.push(text);
            }
            Cmd::ScrollIntoView(anchor) => {
                self.command_log
                    .push(CmdRecord::ScrollIntoView(anchor.clone()));
                self.scroll_requests.push(anchor);
            }
        }
    }
}
