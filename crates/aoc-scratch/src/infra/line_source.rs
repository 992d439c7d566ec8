//! Line input from files and stdin
//!
//! Sources are read one after another as a single stream of lines, the same
//! way `cat` concatenates its arguments. Lines are yielded without their
//! trailing `\n` / `\r\n`.

use crate::constants::STDIN_ARG;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[cfg(feature = "mmap")]
use memmap2::Mmap;

/// Input failures. Each variant names the source that failed.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot open {name}: {source}")]
    Open {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error("cannot read {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },
}

/// Where lines come from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Interpret a command-line argument (`-` means stdin)
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDIN_ARG {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Sources for a list of arguments; stdin when the list is empty
    pub fn from_args<I, S>(args: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sources: Vec<Self> = args
            .into_iter()
            .map(|arg| Self::from_arg(arg.as_ref()))
            .collect();

        if sources.is_empty() {
            vec![Self::Stdin]
        } else {
            sources
        }
    }

    /// Display name used in diagnostics
    pub fn name(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Open the source and iterate its lines
    pub fn lines(&self) -> Result<Lines, InputError> {
        match self {
            Self::Stdin => Ok(Lines::reader(self.name(), Box::new(io::stdin().lock()))),
            Self::File(path) => open_file(path),
        }
    }
}

#[cfg(not(feature = "mmap"))]
fn open_file(path: &Path) -> Result<Lines, InputError> {
    let name = path.display().to_string();
    let file = File::open(path).map_err(|source| InputError::Open {
        name: name.clone(),
        source,
    })?;

    Ok(Lines::reader(name, Box::new(BufReader::new(file))))
}

#[cfg(feature = "mmap")]
fn open_file(path: &Path) -> Result<Lines, InputError> {
    let name = path.display().to_string();
    let open_error = |source| InputError::Open {
        name: name.clone(),
        source,
    };

    let file = File::open(path).map_err(open_error)?;
    let metadata = file.metadata().map_err(open_error)?;

    if metadata.is_dir() {
        return Err(open_error(io::Error::other("is a directory")));
    }

    // Pipes and other special files cannot be mapped.
    if !metadata.is_file() {
        return Ok(Lines::reader(name, Box::new(BufReader::new(file))));
    }

    // Mapping a zero-length file fails on some platforms.
    if metadata.len() == 0 {
        return Ok(Lines::mapped(name, None));
    }

    let mmap = unsafe { Mmap::map(&file).map_err(open_error)? };
    Ok(Lines::mapped(name, Some(mmap)))
}

enum Backend {
    Reader(Box<dyn BufRead>),
    #[cfg(feature = "mmap")]
    Mapped { mmap: Option<Mmap>, offset: usize },
}

/// Lines of one opened source
///
/// Yields `Err` at most once; iteration ends after an error.
pub struct Lines {
    name: String,
    backend: Backend,
    buf: String,
    done: bool,
}

impl Lines {
    fn reader(name: String, reader: Box<dyn BufRead>) -> Self {
        Self {
            name,
            backend: Backend::Reader(reader),
            buf: String::new(),
            done: false,
        }
    }

    #[cfg(feature = "mmap")]
    fn mapped(name: String, mmap: Option<Mmap>) -> Self {
        Self {
            name,
            backend: Backend::Mapped { mmap, offset: 0 },
            buf: String::new(),
            done: false,
        }
    }

    fn read_error(&mut self, source: io::Error) -> InputError {
        self.done = true;
        InputError::Read {
            name: self.name.clone(),
            source,
        }
    }
}

fn trim_terminator(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

impl Iterator for Lines {
    type Item = Result<String, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match &mut self.backend {
            Backend::Reader(reader) => {
                self.buf.clear();
                match reader.read_line(&mut self.buf) {
                    Ok(0) => {
                        self.done = true;
                        None
                    }
                    Ok(_) => {
                        let mut line = std::mem::take(&mut self.buf);
                        trim_terminator(&mut line);
                        Some(Ok(line))
                    }
                    Err(e) => Some(Err(self.read_error(e))),
                }
            }
            #[cfg(feature = "mmap")]
            Backend::Mapped { mmap, offset } => {
                let bytes: &[u8] = mmap.as_deref().unwrap_or(&[]);
                if *offset >= bytes.len() {
                    self.done = true;
                    return None;
                }

                let rest = &bytes[*offset..];
                let line_len = rest
                    .iter()
                    .position(|&b| b == b'\n')
                    .map_or(rest.len(), |i| i + 1);
                *offset += line_len;

                match std::str::from_utf8(&rest[..line_len]) {
                    Ok(text) => {
                        let mut line = text.to_string();
                        trim_terminator(&mut line);
                        Some(Ok(line))
                    }
                    Err(e) => {
                        let source = io::Error::new(io::ErrorKind::InvalidData, e);
                        Some(Err(self.read_error(source)))
                    }
                }
            }
        }
    }
}

/// Concatenated lines of several sources
///
/// Each source is opened only when the previous one is exhausted. The first
/// open or read error is yielded and ends the stream.
pub fn concat_lines(sources: &[InputSource]) -> impl Iterator<Item = Result<String, InputError>> + '_ {
    let mut pending = sources.iter();
    let mut current: Option<Lines> = None;
    let mut failed = false;

    std::iter::from_fn(move || {
        if failed {
            return None;
        }

        loop {
            if let Some(lines) = current.as_mut() {
                match lines.next() {
                    Some(Ok(line)) => return Some(Ok(line)),
                    Some(Err(e)) => {
                        failed = true;
                        return Some(Err(e));
                    }
                    None => current = None,
                }
            }

            match pending.next()?.lines() {
                Ok(lines) => current = Some(lines),
                Err(e) => {
                    failed = true;
                    return Some(Err(e));
                }
            }
        }
    })
}
