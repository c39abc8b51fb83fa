use std::process::ExitCode;

fn main() -> ExitCode {
    wheel_matrix::main(std::env::args_os())
}
