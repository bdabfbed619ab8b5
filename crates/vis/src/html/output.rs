//! Sinks the page is rendered into.

use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use crate::error::Result;

/// A sink for rendered page text.
pub trait OutputStream {
    /// Appends text to the output.
    fn write(&mut self, data: &str) -> Result<()>;
}

impl OutputStream for String {
    fn write(&mut self, data: &str) -> Result<()> {
        self.push_str(data);
        Ok(())
    }
}

/// A file that replaces its target only once it is committed.
///
/// The text is written to a temporary file in the target's directory, which
/// is persisted over the target on [OutputFile::commit]. A browser reloading
/// the page never sees a partially written file, and an output dropped
/// without a commit removes its temporary file.
pub struct OutputFile {
    writer: BufWriter<NamedTempFile>,
    path: PathBuf,
}

impl OutputFile {
    /// Creates the temporary file for `path`.
    pub fn create(path: &Path) -> Result<OutputFile> {
        let dir = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let file = NamedTempFile::new_in(dir)?;

        Ok(Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
        })
    }

    /// Flushes the written text and moves it to the target path.
    pub fn commit(self) -> Result<()> {
        let file = self.writer.into_inner().map_err(|e| e.into_error())?;
        file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl OutputStream for OutputFile {
    fn write(&mut self, data: &str) -> Result<()> {
        self.writer.write_all(data.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn entries(dir: &Path) -> Vec<PathBuf> {
        fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect()
    }

    #[test]
    fn commit_replaces_the_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        fs::write(&path, "old").unwrap();

        let mut output = OutputFile::create(&path).unwrap();
        output.write("<p>").unwrap();
        output.write("new</p>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "old");

        output.commit().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>new</p>");
        assert_eq!(entries(dir.path()), vec![path]);
    }

    #[test]
    fn uncommitted_output_leaves_no_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        fs::write(&path, "old").unwrap();

        let mut output = OutputFile::create(&path).unwrap();
        output.write("<p>partial").unwrap();
        drop(output);

        assert_eq!(fs::read_to_string(&path).unwrap(), "old");
        assert_eq!(entries(dir.path()), vec![path]);
    }
}
