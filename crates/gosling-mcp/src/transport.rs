//! Line-delimited stdio transport
//!
//! One JSON-RPC message per line in each direction. Reads suspend until a
//! whole line (or end of stream) is available; writes are flushed before
//! returning.

use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};

use crate::{Error, Result};

/// Duplex byte-stream transport framing one message per line.
pub struct Transport<R, W> {
    reader: R,
    writer: W,
    line: Vec<u8>,
}

/// Transport bound to the process's standard input and output.
pub type StdioTransport = Transport<BufReader<Stdin>, Stdout>;

impl StdioTransport {
    pub fn stdio() -> Self {
        Transport::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> Transport<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            line: Vec::new(),
        }
    }

    /// Read the next frame.
    ///
    /// Returns `Ok(None)` once the input stream is closed. Blank lines are
    /// skipped and the line terminator is stripped. A final line without a
    /// terminator is returned as a frame.
    pub async fn read_frame(&mut self) -> Result<Option<Vec<u8>>> {
        loop {
            self.line.clear();
            let read = self
                .reader
                .read_until(b'\n', &mut self.line)
                .await
                .map_err(Error::TransportClosed)?;
            if read == 0 {
                return Ok(None);
            }

            let frame = trim_line(&self.line);
            if frame.iter().all(u8::is_ascii_whitespace) {
                continue;
            }
            return Ok(Some(frame.to_vec()));
        }
    }

    /// Serialize `message` as one line and flush it.
    pub async fn write_frame<T: Serialize>(&mut self, message: &T) -> Result<()> {
        let mut bytes = serde_json::to_vec(message)?;
        bytes.push(b'\n');

        self.writer
            .write_all(&bytes)
            .await
            .map_err(Error::TransportClosed)?;
        self.writer.flush().await.map_err(Error::TransportClosed)
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

fn trim_line(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_reads_frames_in_order() {
        let input: &[u8] = b"{\"a\":1}\n{\"b\":2}\n";
        let mut transport = Transport::new(input, Vec::new());

        assert_eq!(transport.read_frame().await.unwrap().unwrap(), br#"{"a":1}"#);
        assert_eq!(transport.read_frame().await.unwrap().unwrap(), br#"{"b":2}"#);
        assert!(transport.read_frame().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_skips_blank_lines_and_strips_crlf() {
        let input: &[u8] = b"\n  \r\n{\"a\":1}\r\n\n";
        let mut transport = Transport::new(input, Vec::new());

        assert_eq!(transport.read_frame().await.unwrap().unwrap(), br#"{"a":1}"#);
        assert!(transport.read_frame().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_final_line_without_newline_is_a_frame() {
        let input: &[u8] = b"{\"a\":1}";
        let mut transport = Transport::new(input, Vec::new());

        assert_eq!(transport.read_frame().await.unwrap().unwrap(), br#"{"a":1}"#);
        assert!(transport.read_frame().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_passed_through() {
        let input: &[u8] = b"\xff\xfe\n";
        let mut transport = Transport::new(input, Vec::new());

        assert_eq!(transport.read_frame().await.unwrap().unwrap(), b"\xff\xfe".to_vec());
    }

    #[tokio::test]
    async fn test_write_frame_appends_newline() {
        let mut transport = Transport::new(&b""[..], Vec::new());
        transport.write_frame(&json!({"ok": true})).await.unwrap();
        transport.write_frame(&json!([1, 2])).await.unwrap();

        let (_, written) = transport.into_inner();
        assert_eq!(String::from_utf8(written).unwrap(), "{\"ok\":true}\n[1,2]\n");
    }

    #[tokio::test]
    async fn test_write_to_closed_pipe_is_transport_closed() {
        let (client, server) = tokio::io::duplex(64);
        drop(client);
        let mut transport = Transport::new(&b""[..], server);

        let err = transport.write_frame(&json!({"ok": true})).await.unwrap_err();
        assert!(matches!(err, Error::TransportClosed(_)));
    }
}
