//! The digest artifact: one tab-separated line, atomically replaced.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::pipeline::DigestResult;

/// Write `<hex_digest>\t<source>\n` to `path`, replacing any existing file.
/// Goes through a `.part` sibling and a rename so a crash never leaves a
/// half-written artifact at the final path.
pub fn write(result: &DigestResult, path: &Path) -> io::Result<()> {
    let tmp = temp_path(path);
    {
        let mut f = fs::File::create(&tmp)?;
        writeln!(f, "{}\t{}", result.hex_digest, result.source)?;
        f.sync_all()?;
    }
    fs::rename(&tmp, path)
}

/// Path for the temp file: appends `.part` to the final path.
fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(".part");
    PathBuf::from(o)
}
