//! Application orchestrator.
//! Initializes logging, builds the validated run config, drives the engine
//! over stdio and reports failures.

use anyhow::Result;
use tracing::{debug, error, info};

use photo_rename::cli::Args;
use photo_rename::output as out;
use photo_rename::{ActionKind, Console, RenameError, RunSummary};

use crate::logging::init_tracing;

/// Run the CLI application. Failures are logged and printed here; the caller
/// only maps the result to an exit status.
pub fn run(args: Args) -> Result<()> {
    let guard = init_tracing(&args.effective_log_level(), args.log_file.as_deref(), args.json)
        .inspect_err(|e| out::print_error(&format!("Failed to initialize logging: {e}")))?;

    debug!("Starting photo_rename: {:?}", args);

    let result = (|| -> Result<RunSummary> {
        let cfg = args.run_config()?;
        let mut console = Console::stdio();
        photo_rename::run(&cfg, &mut console)
    })();

    let outcome = match result {
        Ok(summary) => {
            report(&summary, args.testrun);
            Ok(())
        }
        Err(e) => {
            // the message itself goes to the user once, through print_error
            if let Some(typed) = e.downcast_ref::<RenameError>() {
                error!(code = typed.code(), kind = typed.kind(), "Run aborted");
            } else {
                error!(kind = "unexpected", "Run aborted");
            }
            debug!(error = ?e, "abort details");
            out::print_error(&format!("{e:#}"));
            Err(e)
        }
    };

    // flush the file appender before exit
    drop(guard);
    outcome
}

fn report(summary: &RunSummary, dry_run: bool) {
    let renamed = summary.count(ActionKind::Rename);
    let moved = summary.count(ActionKind::Move);
    info!(renamed, moved, "done");

    if summary.quit {
        out::print_info("Quit; remaining directories were left untouched.");
    }
    if dry_run {
        out::print_info(&format!(
            "Test run: {renamed} file(s) would be renamed and {moved} moved; nothing was changed."
        ));
    } else if renamed + moved > 0 {
        out::print_success(&format!("{renamed} file(s) renamed, {moved} moved."));
    }
}
