use crate::artifacts::branch::branch_record::{FIELD_DELIMITER_ESCAPE, LISTING_FORMAT};
use crate::errors::GasError;
use anyhow::Context;
use derive_new::new;
use std::ffi::{OsStr, OsString};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Output, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};
use wait_timeout::ChildExt;

const DEFAULT_PROGRAM: &str = "git";
const HEAD_REF_PREFIX: &str = "refs/heads/";

/// What the version-control tool makes of a directory when asked to treat it
/// as repository metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitDirState {
    NotRepository,
    Bare,
    NonBare,
}

/// Queries the scanner needs from the external version-control tool.
///
/// `inspect_git_dir` must never fail merely because `dir` is not a
/// repository: plain directories are the common case during a walk.
pub trait GitPort {
    fn inspect_git_dir(&self, dir: &Path) -> anyhow::Result<GitDirState>;

    fn is_dirty(&self, root: &Path) -> anyhow::Result<bool>;

    /// One record per branch, oldest commit first, in the layout decoded by
    /// [`BranchRecord`](crate::artifacts::branch::branch_record::BranchRecord).
    fn branch_listing(&self, root: &Path) -> anyhow::Result<String>;

    /// Short name of the branch HEAD points at, even if it has no commits yet.
    fn head_symbolic_ref(&self, root: &Path) -> anyhow::Result<String>;

    /// Remote of every branch that has an upstream, duplicates included.
    fn upstream_remotes(&self, root: &Path) -> anyhow::Result<Vec<String>>;

    fn fetch(&self, root: &Path, remote: &str) -> anyhow::Result<()>;
}

/// [`GitPort`] backed by the `git` executable.
#[derive(Debug, Clone, new)]
pub struct GitCli {
    program: PathBuf,
    timeout: Option<Duration>,
}

impl Default for GitCli {
    fn default() -> Self {
        GitCli::new(PathBuf::from(DEFAULT_PROGRAM), None)
    }
}

impl GitCli {
    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn git<I, S>(&self, dir: &Path, args: I) -> anyhow::Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let args = args
            .into_iter()
            .map(|arg| arg.as_ref().to_os_string())
            .collect::<Vec<_>>();
        let output = self.output(dir, &args)?;

        if !output.status.success() {
            return Err(GasError::GitCommand {
                command: Self::command_line(&args),
                dir: dir.to_path_buf(),
                exit_code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        String::from_utf8(output.stdout).with_context(|| {
            format!(
                "`git {}` in {} produced non UTF-8 output",
                Self::command_line(&args),
                dir.display()
            )
        })
    }

    fn output(&self, dir: &Path, args: &[OsString]) -> anyhow::Result<Output> {
        tracing::debug!(dir = %dir.display(), command = %Self::command_line(args), "running git");

        let mut cmd = Command::new(&self.program);
        cmd.arg("--no-pager")
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let spawn_error = |source: std::io::Error| GasError::GitSpawn {
            program: self.program.display().to_string(),
            source,
        };

        let Some(timeout) = self.timeout else {
            return cmd.output().map_err(|e| spawn_error(e).into());
        };

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            cmd.process_group(0);
        }

        let deadline = Instant::now() + timeout;
        let mut child = cmd.spawn().map_err(spawn_error)?;
        let timed_out = || GasError::GitTimeout {
            command: Self::command_line(args),
            dir: dir.to_path_buf(),
            timeout,
        };

        // drain both pipes while waiting, a full pipe would block the child
        let stdout = child.stdout.take().map(drain_in_background);
        let stderr = child.stderr.take().map(drain_in_background);

        let Some(status) = child.wait_timeout(timeout)? else {
            kill_process_group(&mut child);
            return Err(timed_out().into());
        };

        // a descendant that inherited the pipes may hold them open past git
        match (receive(stdout, deadline), receive(stderr, deadline)) {
            (Some(stdout), Some(stderr)) => Ok(Output {
                status,
                stdout,
                stderr,
            }),
            _ => {
                kill_process_group(&mut child);
                Err(timed_out().into())
            }
        }
    }

    fn command_line(args: &[OsString]) -> String {
        args.iter()
            .map(|arg| arg.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn drain(mut pipe: impl Read) -> Vec<u8> {
    let mut buf = Vec::new();
    let _ = pipe.read_to_end(&mut buf);
    buf
}

fn drain_in_background(pipe: impl Read + Send + 'static) -> Receiver<Vec<u8>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(drain(pipe));
    });
    rx
}

/// Contents of a drained pipe, or `None` if it is still open at `deadline`.
fn receive(pipe: Option<Receiver<Vec<u8>>>, deadline: Instant) -> Option<Vec<u8>> {
    let Some(rx) = pipe else {
        return Some(Vec::new());
    };

    match rx.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
        Ok(buf) => Some(buf),
        Err(RecvTimeoutError::Disconnected) => Some(Vec::new()),
        Err(RecvTimeoutError::Timeout) => None,
    }
}

/// Kills the child and, on Unix, every process left in its group.
fn kill_process_group(child: &mut Child) {
    #[cfg(unix)]
    {
        use nix::sys::signal::{Signal, killpg};
        use nix::unistd::Pid;

        if let Ok(pid) = i32::try_from(child.id()) {
            let _ = killpg(Pid::from_raw(pid), Signal::SIGKILL);
        }
    }

    let _ = child.kill();
    let _ = child.wait();
}

impl GitPort for GitCli {
    fn inspect_git_dir(&self, dir: &Path) -> anyhow::Result<GitDirState> {
        // git itself refuses a metadata directory without HEAD
        if !dir.join("HEAD").exists() {
            return Ok(GitDirState::NotRepository);
        }

        // `.` is `dir`: git runs inside it
        let args = [
            OsString::from("--git-dir=."),
            "rev-parse".into(),
            "--is-bare-repository".into(),
        ];

        let output = self.output(dir, &args)?;
        if !output.status.success() {
            return Ok(GitDirState::NotRepository);
        }

        match String::from_utf8_lossy(&output.stdout).trim() {
            "true" => Ok(GitDirState::Bare),
            _ => Ok(GitDirState::NonBare),
        }
    }

    fn is_dirty(&self, root: &Path) -> anyhow::Result<bool> {
        let out = self.git(root, ["status", "--porcelain"])?;
        Ok(!out.trim().is_empty())
    }

    fn branch_listing(&self, root: &Path) -> anyhow::Result<String> {
        let format = format!("--format={}", LISTING_FORMAT.join(FIELD_DELIMITER_ESCAPE));
        self.git(root, ["branch", "--sort=committerdate", format.as_str()])
    }

    fn head_symbolic_ref(&self, root: &Path) -> anyhow::Result<String> {
        let out = self.git(root, ["symbolic-ref", "HEAD"])?;
        let out = out.trim();
        Ok(out.strip_prefix(HEAD_REF_PREFIX).unwrap_or(out).to_string())
    }

    fn upstream_remotes(&self, root: &Path) -> anyhow::Result<Vec<String>> {
        let out = self.git(root, ["branch", "--format=%(upstream:remotename)"])?;
        Ok(out
            .lines()
            .map(str::trim)
            .filter(|remote| !remote.is_empty())
            .map(String::from)
            .collect())
    }

    fn fetch(&self, root: &Path, remote: &str) -> anyhow::Result<()> {
        self.git(root, ["fetch", remote]).map(|_| ())
    }
}
