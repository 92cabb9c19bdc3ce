use crate::shared::Result;
use std::path::Path;

/// ProjectFileReader port for reading small text files of the project
/// (`libbeat/docs/version.asciidoc`, `.travis.yml`)
pub trait ProjectFileReader {
    fn read_project_file(&self, path: &Path) -> Result<String>;
}
