//! Control file output.
//!
//! Every file is written to a sibling `*.tmp`, flushed and synced, then
//! renamed over the target, so a reader never sees a half-written file.

pub mod xdsconv_inp;
pub mod xscale_inp;

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use xscale_core::errors::WriteError;

pub use xdsconv_inp::{stage_xdsconv_inp, XDSCONV_TEMPLATE};
pub use xscale_inp::ControlFileWriter;

/// Write and sync the temporary sibling of `path` without replacing `path`.
///
/// Several files can be staged first and committed together, so a failure
/// while producing any of them leaves every target untouched.
pub fn stage<F>(path: &Path, fill: F) -> Result<StagedFile, WriteError>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let io_error = |source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    };
    let staged = StagedFile {
        tmp_path: temp_path(path).map_err(io_error)?,
        target: path.to_path_buf(),
        committed: false,
    };
    // Dropping `staged` on error removes the partial temporary file.
    write_and_sync(&staged.tmp_path, fill).map_err(io_error)?;
    Ok(staged)
}

/// A synced temporary file waiting to be renamed over its target.
/// Dropped without [`StagedFile::commit`], the temporary file is removed.
#[derive(Debug)]
#[must_use = "a staged file is discarded unless committed"]
pub struct StagedFile {
    tmp_path: PathBuf,
    target: PathBuf,
    committed: bool,
}

impl StagedFile {
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Rename the temporary file over the target.
    pub fn commit(mut self) -> Result<(), WriteError> {
        fs::rename(&self.tmp_path, &self.target).map_err(|source| WriteError::Io {
            path: self.target.clone(),
            source,
        })?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.tmp_path);
        }
    }
}

/// Commit every staged file in order. If one fails, targets committed
/// earlier in this call are removed again, so either all of them exist or
/// none of them were produced by this call.
pub fn commit_all(staged: Vec<StagedFile>) -> Result<(), WriteError> {
    let mut committed: Vec<PathBuf> = Vec::with_capacity(staged.len());
    for file in staged {
        let target = file.target().to_path_buf();
        if let Err(e) = file.commit() {
            for path in &committed {
                let _ = fs::remove_file(path);
            }
            return Err(e);
        }
        committed.push(target);
    }
    Ok(())
}

fn write_and_sync<F>(tmp_path: &Path, fill: F) -> io::Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let mut writer = BufWriter::new(File::create(tmp_path)?);
    fill(&mut writer)?;
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()
}

/// `XSCALE.INP` → `XSCALE.INP.tmp` in the same directory, so the final
/// rename never crosses filesystems.
fn temp_path(path: &Path) -> io::Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} has no file name", path.display()),
        )
    })?;
    let mut tmp_name = name.to_os_string();
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}
