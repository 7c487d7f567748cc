use std::process::ExitCode;

mod app;
mod logging;

fn main() -> ExitCode {
    let args = photo_rename::cli::parse();
    // app::run has already reported the failure on stderr
    match app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
