//! Zip download of a project: `index.html`, `styles.css` and `script.js`, each
//! holding the stored blob as-is.

use std::io::{Cursor, Write};

use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::Result;
use crate::models::ProjectFiles;

/// File name offered to the browser.
pub const ARCHIVE_NAME: &str = "project.zip";

pub fn project_archive(files: &ProjectFiles) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, contents) in [
        ("index.html", &files.html),
        ("styles.css", &files.css),
        ("script.js", &files.javascript),
    ] {
        writer.start_file(name, options)?;
        writer.write_all(contents.as_bytes()).map_err(ZipError::Io)?;
    }

    Ok(writer.finish()?.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    fn read_entry(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
        let mut contents = String::new();
        archive
            .by_name(name)
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        contents
    }

    #[test]
    fn test_archive_holds_the_three_files() {
        let files = ProjectFiles {
            html: "<h1>Hi</h1>".to_string(),
            css: "h1 { color: red; }".to_string(),
            javascript: String::new(),
        };

        let bytes = project_archive(&files).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        assert_eq!(archive.len(), 3);
        assert_eq!(read_entry(&mut archive, "index.html"), "<h1>Hi</h1>");
        assert_eq!(read_entry(&mut archive, "styles.css"), "h1 { color: red; }");
        assert_eq!(read_entry(&mut archive, "script.js"), "");
    }
}
