#![forbid(unsafe_code)]

//! Elm-style program runtime.
//!
//! A [`Model`] owns application state. Each message passes through
//! [`Model::update`], which mutates state and returns a [`Cmd`] describing
//! side effects. [`Program`] executes those commands against a [`Shell`] and
//! presents [`Model::view`] according to its [`PresentPolicy`].
//!
//! # Example
//!
//! ```
//! use tenessi_runtime::{Cmd, Frame, Model, Program, ProgramConfig, TextShell};
//!
//! struct Counter(u32);
//!
//! enum Msg {
//!     Bump,
//!     Done,
//! }
//!
//! impl Model for Counter {
//!     type Message = Msg;
//!
//!     fn update(&mut self, msg: Msg) -> Cmd<Msg> {
//!         match msg {
//!             Msg::Bump => {
//!                 self.0 += 1;
//!                 Cmd::none()
//!             }
//!             Msg::Done => Cmd::quit(),
//!         }
//!     }
//!
//!     fn view(&self, frame: &mut Frame) {
//!         frame.line(format!("count: {}", self.0));
//!     }
//! }
//!
//! let mut program = Program::new(Counter(0), TextShell::new(Vec::new()), ProgramConfig::default());
//! program.run([Msg::Bump, Msg::Bump, Msg::Done, Msg::Bump]).unwrap();
//! assert_eq!(program.model().0, 2);
//! ```

use std::io;

use tracing::{debug_span, trace};

use crate::frame::{DEFAULT_WIDTH, Frame};
use crate::shell::Shell;

/// The application model.
pub trait Model: Sized {
    /// Messages that drive state transitions.
    type Message: Send + 'static;

    /// Initialize the model with startup commands.
    ///
    /// Called once before the first message.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    /// Update the model in response to a message.
    ///
    /// This is the only place state changes. Returns commands for any side
    /// effects that should be executed.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Render the current state to a frame.
    fn view(&self, frame: &mut Frame);
}

/// Commands represent side effects to be executed by the runtime.
#[derive(Default)]
pub enum Cmd<M> {
    /// No operation.
    #[default]
    None,
    /// Stop processing messages.
    Quit,
    /// Execute multiple commands as a batch (currently sequential).
    Batch(Vec<Cmd<M>>),
    /// Execute commands sequentially.
    Sequence(Vec<Cmd<M>>),
    /// Send a message back to the model.
    Msg(M),
    /// Write a log line.
    Log(String),
    /// Show a blocking acknowledgment.
    Alert(String),
    /// Bring a page section into view.
    ScrollIntoView(String),
}

impl<M: std::fmt::Debug> std::fmt::Debug for Cmd<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Quit => write!(f, "Quit"),
            Self::Batch(cmds) => f.debug_tuple("Batch").field(cmds).finish(),
            Self::Sequence(cmds) => f.debug_tuple("Sequence").field(cmds).finish(),
            Self::Msg(m) => f.debug_tuple("Msg").field(m).finish(),
            Self::Log(s) => f.debug_tuple("Log").field(s).finish(),
            Self::Alert(s) => f.debug_tuple("Alert").field(s).finish(),
            Self::ScrollIntoView(a) => f.debug_tuple("ScrollIntoView").field(a).finish(),
        }
    }
}

impl<M> Cmd<M> {
    /// Create a no-op command.
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    /// Create a quit command.
    #[inline]
    pub fn quit() -> Self {
        Self::Quit
    }

    /// Create a message command.
    #[inline]
    pub fn msg(m: M) -> Self {
        Self::Msg(m)
    }

    /// Create a log command.
    #[inline]
    pub fn log(msg: impl Into<String>) -> Self {
        Self::Log(msg.into())
    }

    /// Create an acknowledgment command.
    #[inline]
    pub fn alert(text: impl Into<String>) -> Self {
        Self::Alert(text.into())
    }

    /// Create a scroll-into-view command for `anchor`.
    #[inline]
    pub fn scroll_into_view(anchor: impl Into<String>) -> Self {
        Self::ScrollIntoView(anchor.into())
    }

    /// Create a batch of commands.
    pub fn batch(cmds: Vec<Self>) -> Self {
        if cmds.is_empty() {
            Self::None
        } else if cmds.len() == 1 {
            cmds.into_iter()
                .next()
                .expect("non-empty vec has at least one element")
        } else {
            Self::Batch(cmds)
        }
    }

    /// Create a sequence of commands.
    pub fn sequence(cmds: Vec<Self>) -> Self {
        if cmds.is_empty() {
            Self::None
        } else if cmds.len() == 1 {
            cmds.into_iter()
                .next()
                .expect("non-empty vec has at least one element")
        } else {
            Self::Sequence(cmds)
        }
    }

    /// Return a stable name for tracing.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Quit => "Quit",
            Self::Batch(_) => "Batch",
            Self::Sequence(_) => "Sequence",
            Self::Msg(_) => "Msg",
            Self::Log(_) => "Log",
            Self::Alert(_) => "Alert",
            Self::ScrollIntoView(_) => "ScrollIntoView",
        }
    }

    /// Whether this is [`Cmd::None`].
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

// ---------------------------------------------------------------------------
// Program
// ---------------------------------------------------------------------------

/// When a [`Program`] presents the model's view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PresentPolicy {
    /// After init and after every dispatched message.
    #[default]
    EveryUpdate,
    /// Once, when the run ends.
    OnExit,
    /// Never.
    Never,
}

/// Program configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramConfig {
    /// Frame width in columns.
    pub width: u16,
    /// Present policy.
    pub present: PresentPolicy,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            present: PresentPolicy::default(),
        }
    }
}

impl ProgramConfig {
    /// Set the frame width.
    #[must_use]
    pub fn with_width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Set the present policy.
    #[must_use]
    pub fn with_present(mut self, present: PresentPolicy) -> Self {
        self.present = present;
        self
    }
}

/// Drives a [`Model`] against a [`Shell`].
pub struct Program<M: Model, S: Shell> {
    model: M,
    shell: S,
    config: ProgramConfig,
    running: bool,
    initialized: bool,
    dispatched: u64,
}

impl<M: Model, S: Shell> Program<M, S> {
    /// Create a program. Nothing runs until [`init`](Self::init) or
    /// [`run`](Self::run).
    pub fn new(model: M, shell: S, config: ProgramConfig) -> Self {
        Self {
            model,
            shell,
            config,
            running: true,
            initialized: false,
            dispatched: 0,
        }
    }

    /// Call `Model::init()` and execute the returned commands.
    ///
    /// Subsequent calls are no-ops.
    pub fn init(&mut self) -> io::Result<()> {
        if self.initialized {
            return Ok(());
        }
        self.initialized = true;
        let cmd = self.model.init();
        self.execute_cmd(cmd)?;
        if self.config.present == PresentPolicy::EveryUpdate {
            self.present()?;
        }
        Ok(())
    }

    /// Dispatch one message through `Model::update()`.
    ///
    /// Ignored once the program has quit.
    pub fn dispatch(&mut self, msg: M::Message) -> io::Result<()> {
        if !self.running {
            return Ok(());
        }
        self.dispatched += 1;
        let _span = debug_span!("dispatch", seq = self.dispatched).entered();
        let cmd = self.model.update(msg);
        self.execute_cmd(cmd)?;
        if self.config.present == PresentPolicy::EveryUpdate {
            self.present()?;
        }
        Ok(())
    }

    /// Initialize, dispatch every message until the model quits or the
    /// input runs out, then flush the shell.
    pub fn run<I>(&mut self, messages: I) -> io::Result<()>
    where
        I: IntoIterator<Item = M::Message>,
    {
        self.init()?;
        for msg in messages {
            if !self.running {
                break;
            }
            self.dispatch(msg)?;
        }
        if self.config.present == PresentPolicy::OnExit {
            self.present()?;
        }
        self.shell.flush()
    }

    /// Render the model and hand the frame to the shell.
    pub fn present(&mut self) -> io::Result<()> {
        let mut frame = Frame::new(self.config.width);
        self.model.view(&mut frame);
        self.shell.present(&frame)
    }

    /// Whether the program is still accepting messages.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of messages dispatched (not counting `Cmd::Msg` feedback).
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Get a reference to the model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get a reference to the shell.
    pub fn shell(&self) -> &S {
        &self.shell
    }

    /// Consume the program, returning the model and shell.
    pub fn into_parts(self) -> (M, S) {
        (self.model, self.shell)
    }

    fn execute_cmd(&mut self, cmd: Cmd<M::Message>) -> io::Result<()> {
        trace!(cmd = cmd.type_name(), "execute");
        match cmd {
            Cmd::None => {}
            Cmd::Quit => self.running = false,
            Cmd::Msg(m) => {
                let cmd = self.model.update(m);
                self.execute_cmd(cmd)?;
            }
            Cmd::Batch(cmds) | Cmd::Sequence(cmds) => {
                for c in cmds {
                    self.execute_cmd(c)?;
                    if !self.running {
                        break;
                    }
                }
            }
            Cmd::Log(text) => self.shell.log(&text)?,
            Cmd::Alert(text) => self.shell.alert(&text)?,
            Cmd::ScrollIntoView(anchor) => self.shell.scroll_into_view(&anchor)?,
        }
        Ok(())
    }
}
