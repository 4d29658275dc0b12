//! Byte producer: streams a file reference into a writable sink.
//!
//! Local files are copied byte-for-byte; remote objects are streamed through
//! a libcurl write callback. Neither path buffers the whole object in memory.
//! The sink is taken by value so every exit path drops (closes) it, which
//! releases a reader blocked on the other end of a pipe.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use crate::error::{classify_http_status, classify_io, curl_io, FetchError};
use crate::reference::FileReference;

/// Copy all bytes of `reference` into `sink`, in source order, then close it.
/// Blocks until the transfer completes or fails; when the sink has bounded
/// capacity, writes block until the reader consumes.
pub fn fetch<W: Write>(reference: &FileReference, sink: W) -> Result<(), FetchError> {
    match reference {
        FileReference::Local(path) => fetch_local(path, sink),
        FileReference::Remote(url) => fetch_remote(url.as_str(), sink),
    }
}

fn fetch_local<W: Write>(path: &Path, mut sink: W) -> Result<(), FetchError> {
    let mut file =
        File::open(path).map_err(|e| classify_io(e, &path.display().to_string()))?;
    io::copy(&mut file, &mut sink).map_err(FetchError::Io)?;
    sink.flush().map_err(FetchError::Io)?;
    Ok(())
}

fn fetch_remote<W: Write>(url: &str, mut sink: W) -> Result<(), FetchError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(curl_io)?;
    easy.follow_location(true).map_err(curl_io)?;
    easy.max_redirections(10).map_err(curl_io)?;
    // Abort on HTTP >= 400 before body bytes reach the sink, so an error page
    // is never hashed downstream.
    easy.fail_on_error(true).map_err(curl_io)?;
    easy.connect_timeout(Duration::from_secs(30)).map_err(curl_io)?;
    easy.low_speed_limit(1024).map_err(curl_io)?;
    easy.low_speed_time(Duration::from_secs(60)).map_err(curl_io)?;

    let mut sink_err: Option<io::Error> = None;
    let result = {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| match sink.write_all(data) {
                Ok(()) => Ok(data.len()),
                Err(e) => {
                    sink_err = Some(e);
                    Ok(0) // abort transfer
                }
            })
            .map_err(curl_io)?;
        transfer.perform()
    };

    if let Some(e) = sink_err {
        return Err(FetchError::Io(e));
    }
    if let Err(e) = result {
        let code = easy.response_code().unwrap_or(0);
        if e.is_http_returned_error() && code != 0 {
            return Err(classify_http_status(code, url));
        }
        return Err(curl_io(e));
    }
    sink.flush().map_err(FetchError::Io)?;
    Ok(())
}
