//! Cancellable stream copy.

use std::error::Error;
use std::fmt;
use std::io;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;

/// Chunk size for [`copy_with_cancel`].
const COPY_BUFFER_SIZE: usize = 8 * 1024;

/// Errors produced by [`copy_with_cancel`].
#[derive(Debug)]
pub enum CopyError {
    /// The cancellation token fired before the copy finished.
    Cancelled,

    /// Reading from the source or writing to the destination failed.
    Io(io::Error),
}

impl fmt::Display for CopyError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => write!(formatter, "copy was cancelled"),
            Self::Io(error) => write!(formatter, "copy failed: {error}"),
        }
    }
}

impl Error for CopyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled => None,
            Self::Io(error) => Some(error),
        }
    }
}

/// Copies `reader` into `writer` until end of input, checking `token` before
/// each underlying read.
///
/// Returns the number of bytes written. Cancellation is cooperative, not
/// preemptive: the token is consulted between reads, so a read already in
/// flight runs to completion before the cancellation is observed, and the
/// bytes it produced are *not* written.
///
/// # Errors
///
/// [`CopyError::Cancelled`] if the token fired, [`CopyError::Io`] if an
/// underlying read or write failed.
///
/// # Examples
///
/// ```rust
/// use seqkit::task::copy_with_cancel;
/// use tokio_util::sync::CancellationToken;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let token = CancellationToken::new();
/// let mut source: &[u8] = b"payload";
/// let mut sink: Vec<u8> = Vec::new();
///
/// let written = copy_with_cancel(&token, &mut source, &mut sink).await?;
/// assert_eq!(written, 7);
/// assert_eq!(sink, b"payload");
/// # Ok(())
/// # }
/// ```
pub async fn copy_with_cancel<R, W>(
    token: &CancellationToken,
    reader: &mut R,
    writer: &mut W,
) -> Result<u64, CopyError>
where
    R: AsyncRead + Unpin + ?Sized,
    W: AsyncWrite + Unpin + ?Sized,
{
    let mut buffer = vec![0u8; COPY_BUFFER_SIZE];
    let mut written = 0u64;
    loop {
        if token.is_cancelled() {
            return Err(CopyError::Cancelled);
        }
        let read = reader.read(&mut buffer).await.map_err(CopyError::Io)?;
        if read == 0 {
            writer.flush().await.map_err(CopyError::Io)?;
            return Ok(written);
        }
        writer
            .write_all(&buffer[..read])
            .await
            .map_err(CopyError::Io)?;
        written += read as u64;
    }
}
