#![forbid(unsafe_code)]

//! The Tenessi landing page.
//!
//! Wires the lead-capture form ([`tenessi_forms`]) and the segment selection
//! with its drawer ([`tenessi_segments`]) into one [`LandingPage`] model run
//! by [`tenessi_runtime`].
//!
//! # Example
//!
//! ```
//! use tenessi_forms::FieldId;
//! use tenessi_page::{LandingPage, Msg, SUCCESS_ACKNOWLEDGMENT};
//! use tenessi_runtime::ProgramSimulator;
//!
//! let mut sim = ProgramSimulator::new(LandingPage::default());
//! sim.init();
//! sim.send_all([
//!     Msg::Change(FieldId::FullName, "Maria Silva".into()),
//!     Msg::Change(FieldId::Role, "Diretora".into()),
//!     Msg::Change(FieldId::Email, "maria@empresa.com".into()),
//!     Msg::Change(FieldId::Company, "Grupo XYZ".into()),
//!     Msg::Change(FieldId::Segment, "construcao".into()),
//!     Msg::Submit,
//! ]);
//! assert_eq!(sim.alerts(), [SUCCESS_ACKNOWLEDGMENT]);
//! ```

pub mod app;
pub mod cli;
pub mod error;
pub mod event;
pub mod logging;
pub mod script;
pub mod session;
pub mod view;

pub use app::{LandingPage, Msg, SUCCESS_ACKNOWLEDGMENT, Submissions};
pub use cli::{CliAction, CliError, HELP_TEXT, Opts, VERSION};
pub use error::PageError;
pub use event::PageEvent;
pub use logging::{LogConfig, LogFormat, init_logging};
pub use script::{ScriptError, read_script};
pub use session::{replay, run};
pub use view::{FieldView, field_views, render_page};
