//! Where a result file goes.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::{OutputError, OutputResult, TextWriter};

/// `<dir>/<file name of input>`.
pub fn output_path(input: &Path, dir: &Path) -> OutputResult<PathBuf> {
    let name = input.file_name().ok_or_else(|| OutputError::NoFileName(input.to_path_buf()))?;
    Ok(dir.join(name))
}

/// Create `dir` if needed and open the result file for `input` in it.
pub fn create_output(input: &Path, dir: &Path) -> OutputResult<TextWriter<File>> {
    let path = output_path(input, dir)?;
    fs::create_dir_all(dir)?;
    TextWriter::create(&path)
}
