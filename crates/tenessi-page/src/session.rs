#![forbid(unsafe_code)]

//! Replaying a scripted session against a text shell.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::sync::Arc;

use tenessi_runtime::{PresentPolicy, Program, ProgramConfig, TextShell};
use tenessi_segments::SegmentCatalog;
use tracing::{debug, info, info_span};

use crate::app::{LandingPage, Msg};
use crate::cli::Opts;
use crate::error::PageError;
use crate::script::read_script;

/// Load the catalog named by `opts`, or the embedded one.
pub fn load_catalog(opts: &Opts) -> Result<Arc<SegmentCatalog>, PageError> {
    match &opts.catalog {
        Some(path) => {
            let json = fs::read_to_string(path)?;
            let catalog = SegmentCatalog::from_json(&json)?;
            info!(path = %path.display(), segments = catalog.len(), "catalog loaded");
            Ok(Arc::new(catalog))
        }
        None => Ok(SegmentCatalog::builtin()),
    }
}

/// Program settings implied by `opts`.
#[must_use]
pub fn program_config(opts: &Opts) -> ProgramConfig {
    let present = if opts.quiet {
        PresentPolicy::OnExit
    } else {
        PresentPolicy::EveryUpdate
    };
    ProgramConfig::default()
        .with_width(opts.width)
        .with_present(present)
}

/// Replay the events in `input` through a fresh page, writing to `out`.
///
/// Returns the final page state and the writer.
pub fn replay<R, W>(
    catalog: Arc<SegmentCatalog>,
    input: R,
    out: W,
    config: ProgramConfig,
) -> Result<(LandingPage, W), PageError>
where
    R: BufRead,
    W: Write,
{
    let events = read_script(input)?;
    let _span = info_span!("session", events = events.len()).entered();
    debug!(kinds = ?events.iter().map(|e| e.kind()).collect::<Vec<_>>(), "script parsed");

    let mut program = Program::new(LandingPage::new(catalog), TextShell::new(out), config);
    program.run(events.into_iter().map(Msg::from))?;

    let (page, shell) = program.into_parts();
    info!(
        accepted = page.form().accepted_count(),
        attempts = page.form().attempt_count(),
        "session finished"
    );
    Ok((page, shell.into_inner()))
}

/// Run the binary: load the catalog, open the script, replay to stdout.
pub fn run(opts: &Opts) -> Result<(), PageError> {
    let catalog = load_catalog(opts)?;
    let config = program_config(opts);
    let stdout = io::stdout().lock();
    match &opts.script {
        Some(path) => {
            let file = File::open(path)?;
            replay(catalog, BufReader::new(file), stdout, config)?;
        }
        None => {
            replay(catalog, io::stdin().lock(), stdout, config)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replay_str(script: &str, opts: &Opts) -> (LandingPage, String) {
        let (page, out) = replay(
            SegmentCatalog::builtin(),
            script.as_bytes(),
            Vec::new(),
            program_config(opts),
        )
        .unwrap();
        (page, String::from_utf8(out).unwrap())
    }

    #[test]
    fn quiet_presents_once() {
        let opts = Opts {
            quiet: true,
            ..Opts::default()
        };
        let (_, out) = replay_str("{\"event\":\"hero_cta\"}\n", &opts);
        assert_eq!(out.matches("QUEM ATENDEMOS").count(), 1);
        assert!(out.contains("[scroll] #diagnostic"));
    }

    #[test]
    fn every_event_presents() {
        let (_, out) = replay_str(
            "{\"event\":\"hero_cta\"}\n{\"event\":\"hero_cta\"}\n",
            &Opts::default(),
        );
        assert_eq!(out.matches("QUEM ATENDEMOS").count(), 3);
    }

    #[test]
    fn malformed_script_fails_before_running() {
        let err = replay(
            SegmentCatalog::builtin(),
            "{\"event\":\"submit\"}\nnot json\n".as_bytes(),
            Vec::new(),
            ProgramConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PageError::Script(_)));
    }

    #[test]
    fn width_is_honored() {
        let opts = Opts {
            width: 20,
            quiet: true,
            ..Opts::default()
        };
        let (_, out) = replay_str("", &opts);
        assert!(out.lines().all(|l| l.chars().count() <= 20));
    }
}
