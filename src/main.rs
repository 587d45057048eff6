use std::process::ExitCode;

use vcslink::ui::output;

fn main() -> ExitCode {
    match vcslink::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
