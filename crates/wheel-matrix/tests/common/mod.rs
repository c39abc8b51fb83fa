use std::path::Path;
use std::process::{Command, Output};

use assert_fs::TempDir;

/// A temporary working directory in which to run `wheel-matrix`.
pub struct TestContext {
    pub temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temporary directory"),
        }
    }

    /// Create a `wheel-matrix` command running in the temporary directory, isolated from the
    /// caller's logging and color settings.
    pub fn command(&self) -> Command {
        let mut command = Command::new(env!("CARGO_BIN_EXE_wheel-matrix"));
        command
            .current_dir(self.temp_dir.path())
            .env_remove("RUST_LOG")
            .env_remove("CLICOLOR_FORCE")
            .env("NO_COLOR", "1");
        command
    }

    pub fn read(&self, path: impl AsRef<Path>) -> String {
        fs_err::read_to_string(self.temp_dir.path().join(path)).expect("Failed to read file")
    }
}

/// Execute the command and format its output status, stdout and stderr into a snapshot string.
pub fn run_and_format(command: &mut Command) -> (String, Output) {
    let program = command.get_program().to_string_lossy().to_string();
    let output = command
        .output()
        .unwrap_or_else(|err| panic!("Failed to spawn {program}: {err}"));

    let snapshot = format!(
        "success: {:?}\nexit_code: {}\n----- stdout -----\n{}\n----- stderr -----\n{}",
        output.status.success(),
        output.status.code().unwrap_or(!0),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    (snapshot, output)
}

/// Run a command and snapshot its status and output.
#[allow(unused_macros)]
macro_rules! matrix_snapshot {
    ($command:expr, @$snapshot:literal) => {{
        let (snapshot, output) = $crate::common::run_and_format($command);
        ::insta::assert_snapshot!(snapshot, @$snapshot);
        output
    }};
}

#[allow(unused_imports)]
pub(crate) use matrix_snapshot;
