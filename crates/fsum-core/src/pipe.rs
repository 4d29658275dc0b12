//! Bounded in-process byte conduit between one writer and one reader.
//!
//! The writer half implements `io::Write`, the reader half `io::Read`, over a
//! bounded `sync_channel` of chunks. A full channel blocks the writer and an
//! empty channel blocks the reader, so memory stays bounded and backpressure
//! works in both directions. Dropping the writer signals end-of-stream;
//! dropping the reader makes further writes fail with `BrokenPipe`.

use std::io::{self, Read, Write};
use std::sync::mpsc::{sync_channel, Receiver, SyncSender};

/// Create a channel holding at most `depth` in-flight chunks.
pub fn byte_channel(depth: usize) -> (PipeWriter, PipeReader) {
    let (tx, rx) = sync_channel::<Vec<u8>>(depth);
    (
        PipeWriter { tx },
        PipeReader {
            rx,
            pending: Vec::new(),
            offset: 0,
        },
    )
}

/// Write end. Closing (dropping) it is how end-of-stream is signaled.
pub struct PipeWriter {
    tx: SyncSender<Vec<u8>>,
}

impl Write for PipeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        self.tx
            .send(buf.to_vec())
            .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "reader side closed"))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Read end. Returns `Ok(0)` once the writer is dropped and all chunks drain.
pub struct PipeReader {
    rx: Receiver<Vec<u8>>,
    pending: Vec<u8>,
    offset: usize,
}

impl Read for PipeReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        while self.offset >= self.pending.len() {
            match self.rx.recv() {
                Ok(chunk) => {
                    self.pending = chunk;
                    self.offset = 0;
                }
                // Writer dropped: end of stream.
                Err(_) => return Ok(0),
            }
        }
        let available = &self.pending[self.offset..];
        let n = available.len().min(buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        self.offset += n;
        Ok(n)
    }
}
