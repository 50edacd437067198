//! HTML to PDF conversion through external tools.
//!
//! No converter is bundled. Instead a fixed list of well-known command-line
//! converters is probed on the search path in preference order, and the first
//! one that runs successfully wins. Failing to convert is not an error: the
//! combined HTML stays on disk and can be printed to PDF by hand.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// One argument of a converter's command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg {
    Flag(&'static str),
    Input,
    Output,
}

/// An external converter and how to invoke it.
#[derive(Debug, Clone, Copy)]
pub struct Converter {
    /// Executable name looked up on the search path
    pub program: &'static str,
    pub args: &'static [Arg],
    /// Shown to the user when no converter could be used
    pub install_hint: &'static str,
}

impl Converter {
    pub fn command_args(&self, input: &Path, output: &Path) -> Vec<OsString> {
        self.args
            .iter()
            .map(|arg| match arg {
                Arg::Flag(flag) => OsString::from(*flag),
                Arg::Input => input.as_os_str().to_os_string(),
                Arg::Output => output.as_os_str().to_os_string(),
            })
            .collect()
    }
}

/// Converters in preference order.
pub const CONVERTERS: &[Converter] = &[
    Converter {
        program: "wkhtmltopdf",
        args: &[
            Arg::Flag("--enable-local-file-access"),
            Arg::Flag("--no-stop-slow-scripts"),
            Arg::Flag("--javascript-delay"),
            Arg::Flag("1000"),
            Arg::Flag("--print-media-type"),
            Arg::Input,
            Arg::Output,
        ],
        install_hint: "brew install wkhtmltopdf",
    },
    Converter {
        program: "weasyprint",
        args: &[Arg::Input, Arg::Output],
        install_hint: "pip install weasyprint",
    },
    Converter {
        program: "prince",
        args: &[Arg::Input, Arg::Flag("-o"), Arg::Output],
        install_hint: "https://www.princexml.com/download/",
    },
];

/// Directories searched for converter executables.
#[derive(Debug, Clone, Default)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    pub fn new(dirs: Vec<PathBuf>) -> SearchPath {
        SearchPath { dirs }
    }

    /// The directories listed in `PATH`.
    pub fn from_env() -> SearchPath {
        let dirs = std::env::var_os("PATH")
            .map(|path| std::env::split_paths(&path).collect())
            .unwrap_or_default();
        SearchPath::new(dirs)
    }

    /// Locate an executable, like `which`.
    pub fn find(&self, program: &str) -> Option<PathBuf> {
        self.dirs.iter().find_map(|dir| {
            candidates(dir, program)
                .into_iter()
                .find(|candidate| is_executable(candidate))
        })
    }
}

#[cfg(windows)]
fn candidates(dir: &Path, program: &str) -> Vec<PathBuf> {
    vec![dir.join(format!("{program}.exe")), dir.join(program)]
}

#[cfg(not(windows))]
fn candidates(dir: &Path, program: &str) -> Vec<PathBuf> {
    vec![dir.join(program)]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Result of trying to produce a PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    Converted {
        converter: &'static str,
    },
    /// No converter was found, or every one found failed
    Unavailable {
        /// Converters that were found and run but failed
        failed: Vec<&'static str>,
    },
}

/// Convert `input` to `output` with the first converter that works.
///
/// Converters run with inherited stdio so their progress shows in the
/// terminal. Each one is tried at most once, and only counts as successful if
/// it exits cleanly and `output` exists afterwards.
pub fn convert(
    converters: &[Converter],
    search: &SearchPath,
    input: &Path,
    output: &Path,
) -> ConversionOutcome {
    let mut failed = Vec::new();

    for converter in converters {
        let Some(executable) = search.find(converter.program) else {
            log::debug!("{} not found on the search path", converter.program);
            continue;
        };

        println!("Using {}...", converter.program);
        log::debug!("running {}", executable.display());
        match Command::new(&executable)
            .args(converter.command_args(input, output))
            .status()
        {
            Ok(status) if status.success() && output.exists() => {
                return ConversionOutcome::Converted {
                    converter: converter.program,
                };
            }
            Ok(status) if status.success() => {
                log::warn!(
                    "{} exited successfully but did not write {}",
                    converter.program,
                    output.display()
                );
                failed.push(converter.program);
            }
            Ok(status) => {
                log::warn!("{} exited with {status}", converter.program);
                failed.push(converter.program);
            }
            Err(e) => {
                log::warn!("Failed to run {}: {e}", converter.program);
                failed.push(converter.program);
            }
        }
    }

    ConversionOutcome::Unavailable { failed }
}
