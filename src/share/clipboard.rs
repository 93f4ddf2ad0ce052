use std::{
    fs,
    io::Write,
    path::PathBuf,
    process::{Command, Stdio},
};

use crate::{
    errors::{LedgerError, Result},
    utils::paths::ensure_dir,
};

pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<()>;
    fn name(&self) -> &str;
}

/// Pipes text into the first platform copy command that succeeds.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    candidates: Vec<(String, Vec<String>)>,
}

impl CommandClipboard {
    pub fn new(candidates: Vec<(String, Vec<String>)>) -> Self {
        Self { candidates }
    }

    /// `pbcopy`, `wl-copy`, `xclip` and `clip`, in that order.
    pub fn system() -> Self {
        let candidate = |program: &str, args: &[&str]| {
            (
                program.to_string(),
                args.iter().map(|arg| arg.to_string()).collect(),
            )
        };
        Self::new(vec![
            candidate("pbcopy", &[]),
            candidate("wl-copy", &[]),
            candidate("xclip", &["-selection", "clipboard"]),
            candidate("clip", &[]),
        ])
    }

    fn run(program: &str, args: &[String], text: &str) -> Result<()> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        if let Some(stdin) = child.stdin.as_mut() {
            stdin.write_all(text.as_bytes())?;
        }
        let status = child.wait()?;
        if status.success() {
            Ok(())
        } else {
            Err(LedgerError::Clipboard(format!("{program} exited with {status}")))
        }
    }
}

impl Clipboard for CommandClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        let mut last_error = None;
        for (program, args) in &self.candidates {
            match Self::run(program, args, text) {
                Ok(()) => return Ok(()),
                Err(err) => last_error = Some(err),
            }
        }
        Err(last_error
            .unwrap_or_else(|| LedgerError::Clipboard("no clipboard command configured".into())))
    }

    fn name(&self) -> &str {
        "system clipboard"
    }
}

/// Writes the text to a file the user can pick it up from.
#[derive(Debug, Clone)]
pub struct FileClipboard {
    path: PathBuf,
}

impl FileClipboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Clipboard for FileClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        fs::write(&self.path, text)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "clipboard file"
    }
}
