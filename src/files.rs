//! Line-oriented file reading.
//!
//! [`LineReader`] pulls one line at a time and reports a clean end of input
//! with a dedicated [`ReadError::EndOfInput`] sentinel, so callers can branch
//! on "done" versus a genuine I/O failure. [`for_each_line`] is the visitor
//! convenience on top: it treats end of input as success and propagates the
//! visitor's first error verbatim.

use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

// =============================================================================
// Error Types
// =============================================================================

/// Errors produced by [`LineReader::read_line`].
#[derive(Debug)]
pub enum ReadError {
    /// The reader delivered every line; there is nothing left to read.
    ///
    /// This is the clean-termination sentinel, distinguishable from a real
    /// failure.
    EndOfInput,

    /// An underlying I/O operation failed.
    Io(io::Error),
}

impl fmt::Display for ReadError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndOfInput => write!(formatter, "end of input"),
            Self::Io(error) => write!(formatter, "read failed: {error}"),
        }
    }
}

impl Error for ReadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EndOfInput => None,
            Self::Io(error) => Some(error),
        }
    }
}

/// Errors produced by [`for_each_line`].
#[derive(Debug)]
pub enum LineError<E> {
    /// Opening or reading the file failed.
    Io(io::Error),

    /// The visitor rejected a line; iteration stopped there.
    Visitor(E),
}

impl<E: fmt::Display> fmt::Display for LineError<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(error) => write!(formatter, "read failed: {error}"),
            Self::Visitor(error) => write!(formatter, "visitor failed: {error}"),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> Error for LineError<E> {}

// =============================================================================
// LineReader
// =============================================================================

/// A buffered, line-at-a-time reader over a file.
///
/// # Examples
///
/// ```rust,no_run
/// use seqkit::files::{LineReader, ReadError};
///
/// let mut reader = LineReader::open("notes.txt")?;
/// loop {
///     match reader.read_line() {
///         Ok(line) => println!("{line}"),
///         Err(ReadError::EndOfInput) => break,
///         Err(error) => return Err(error.into()),
///     }
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct LineReader {
    inner: BufReader<File>,
}

impl LineReader {
    /// Opens the file at `path` for line-oriented reading.
    ///
    /// # Errors
    ///
    /// Returns the underlying error if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self {
            inner: BufReader::new(File::open(path)?),
        })
    }

    /// Reads the next line, with the trailing newline (and any `\r` before
    /// it) stripped.
    ///
    /// A final line without a trailing newline is still delivered.
    ///
    /// # Errors
    ///
    /// [`ReadError::EndOfInput`] once every line has been delivered,
    /// [`ReadError::Io`] on a genuine failure.
    pub fn read_line(&mut self) -> Result<String, ReadError> {
        let mut line = String::new();
        let read = self.inner.read_line(&mut line).map_err(ReadError::Io)?;
        if read == 0 {
            return Err(ReadError::EndOfInput);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

// =============================================================================
// Visitor Convenience
// =============================================================================

/// Applies `visitor` to every `(line, index)` of the file at `path`, in
/// order.
///
/// Lines are delivered with their trailing newline stripped. The visitor's
/// first error stops iteration immediately and is returned verbatim; reaching
/// the end of the file is success, not an error.
///
/// # Errors
///
/// [`LineError::Io`] if the file cannot be opened or read,
/// [`LineError::Visitor`] wrapping the visitor's first error.
///
/// # Examples
///
/// ```rust,no_run
/// use seqkit::files::for_each_line;
///
/// let mut count = 0usize;
/// for_each_line("notes.txt", |_line, _index| {
///     count += 1;
///     Ok::<(), std::convert::Infallible>(())
/// })?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn for_each_line<P, E, F>(path: P, mut visitor: F) -> Result<(), LineError<E>>
where
    P: AsRef<Path>,
    F: FnMut(&str, usize) -> Result<(), E>,
{
    let mut reader = LineReader::open(path).map_err(LineError::Io)?;
    let mut index = 0usize;
    loop {
        match reader.read_line() {
            Ok(line) => {
                visitor(&line, index).map_err(LineError::Visitor)?;
                index += 1;
            }
            Err(ReadError::EndOfInput) => return Ok(()),
            Err(ReadError::Io(error)) => return Err(LineError::Io(error)),
        }
    }
}
