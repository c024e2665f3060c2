use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    let code = arena_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    ExitCode::from(code as u8)
}
