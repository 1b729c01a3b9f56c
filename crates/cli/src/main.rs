use std::process::ExitCode;

fn main() -> ExitCode {
    rigcheck_cli::run()
}
