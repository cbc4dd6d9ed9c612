use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};
use tempfile::NamedTempFile;

use crate::error::{Error, Result};

pub const DEFAULT_LINE_WIDTH: usize = 60;
pub const EXTENSION: &str = "fasta";

/// Mode of a newly created record, as a plain `File::create` under the usual umask.
#[cfg(unix)]
const RECORD_MODE: u32 = 0o644;

/// Write a FASTA record: `>id description` then `sequence` wrapped at `line_width` characters.
/// A zero `line_width` is an `InvalidInput` error and nothing is written.
pub fn write_record<W: Write>(writer: &mut W, id: &str, description: &str, sequence: &str, line_width: usize) -> io::Result<()> {
    if line_width == 0 {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "line width must be positive"));
    }
    writeln!(writer, ">{} {}", id, description)?;

    // chunk on characters so a multi-byte marker is never split
    let mut line = String::with_capacity(line_width);
    let mut n = 0;
    for c in sequence.chars() {
        line.push(c);
        n += 1;
        if n == line_width {
            writeln!(writer, "{}", line)?;
            line.clear();
            n = 0;
        }
    }
    if n > 0 {
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}

/// Render a record to a string.
pub fn format_record(id: &str, description: &str, sequence: &str, line_width: usize) -> Result<String> {
    if line_width == 0 {
        return Err(Error::InvalidLineWidth);
    }
    let mut buf = Vec::with_capacity(id.len() + description.len() + sequence.len() + sequence.len() / line_width + 3);
    // writing into a Vec cannot fail
    write_record(&mut buf, id, description, sequence, line_width)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// `<dir>/<id>.fasta`
pub fn record_path<P: AsRef<Path>>(dir: P, id: &str) -> PathBuf {
    dir.as_ref().join(format!("{}.{}", id, EXTENSION))
}

/// Write a record to `path`. The record is staged in a temporary file next to
/// `path` and renamed into place once fully flushed, so `path` either holds
/// the complete record or is untouched.
pub fn save_record<P: AsRef<Path>>(path: P, id: &str, description: &str, sequence: &str, line_width: usize) -> Result<()> {
    let path = path.as_ref();
    if line_width == 0 {
        return Err(Error::InvalidLineWidth);
    }
    let write_err = |source: io::Error| Error::Write { path: path.to_path_buf(), source };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(write_err)?;
    }

    let mut staged = NamedTempFile::new_in(dir).map_err(write_err)?;
    debug!("Staging record in {}", staged.path().display());
    {
        let mut writer = io::BufWriter::new(staged.as_file_mut());
        write_record(&mut writer, id, description, sequence, line_width).map_err(write_err)?;
        writer.flush().map_err(write_err)?;
    }
    staged.as_file().sync_all().map_err(write_err)?;
    set_record_permissions(&staged, path).map_err(write_err)?;
    // dropping `staged` on any error above removes the temporary file
    staged.persist(path).map_err(|e| write_err(e.error))?;

    info!("Wrote record '{}' to {}", id, path.display());
    Ok(())
}

/// Temporary files are owner-only; give the record the mode of the file it
/// replaces, or 0644 when it is new.
#[cfg(unix)]
fn set_record_permissions(staged: &NamedTempFile, target: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let permissions = match fs::metadata(target) {
        Ok(meta) if meta.is_file() => meta.permissions(),
        _ => fs::Permissions::from_mode(RECORD_MODE),
    };
    staged.as_file().set_permissions(permissions)
}

#[cfg(not(unix))]
fn set_record_permissions(_staged: &NamedTempFile, _target: &Path) -> io::Result<()> {
    Ok(())
}
