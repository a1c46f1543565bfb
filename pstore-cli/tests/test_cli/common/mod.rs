use std::fs;
use std::path::Path;
use std::process::{ExitStatus, Stdio};

/// Endpoint nothing listens on, so every remote call fails fast.
pub const UNREACHABLE_ENDPOINT: &str = "http://127.0.0.1:9";

/// Profile written to the fixture's shared credentials file.
pub const TEST_PROFILE: &str = "pstore-test";

/// Output from running the binary
pub struct Output {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl Output {
    /// Exit code, or `None` if the process was killed by a signal.
    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }
}

/// Isolated AWS environment: a private home directory with its own config
/// and credentials files, and no credentials inherited from the caller.
pub struct Fixture {
    root_dir: tempfile::TempDir,
}

impl Fixture {
    /// Create a fixture with a single static-credentials profile.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory or the AWS files cannot be written.
    pub fn new() -> Self {
        let root_dir = tempfile::TempDir::new().unwrap();
        fs::write(
            root_dir.path().join("credentials"),
            format!(
                "[{TEST_PROFILE}]\n\
                 aws_access_key_id = AKIDPSTORETEST\n\
                 aws_secret_access_key = pstore-test-secret\n"
            ),
        )
        .unwrap();
        fs::write(root_dir.path().join("config"), "").unwrap();

        Self { root_dir }
    }

    fn path(&self, name: &str) -> String {
        let path = self.root_dir.path().join(name);
        path.to_string_lossy().into_owned()
    }

    pub fn root_dir_path(&self) -> &Path {
        self.root_dir.path()
    }

    /// Run `pstore` with the specified arguments
    ///
    /// # Panics
    ///
    /// Panics if the process cannot be spawned or awaited.
    pub async fn run(&self, args: &[&str]) -> Output {
        let mut command = tokio::process::Command::new(env!("CARGO_BIN_EXE_pstore"));
        for (key, _) in std::env::vars_os() {
            if key.to_string_lossy().starts_with("AWS_") {
                command.env_remove(key);
            }
        }

        let output = command
            .args(args)
            .env("HOME", self.root_dir_path())
            .env("AWS_CONFIG_FILE", self.path("config"))
            .env("AWS_SHARED_CREDENTIALS_FILE", self.path("credentials"))
            .env("AWS_EC2_METADATA_DISABLED", "true")
            .env("AWS_MAX_ATTEMPTS", "1")
            .env_remove("RUST_LOG")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .unwrap();

        Output {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
