//! Reading ADR text from files or stdin

use adr_store::{DocumentType, Provenance};
use anyhow::{bail, Context};
use std::io::Read;
use std::path::Path;

/// Path argument meaning standard input
pub const STDIN: &str = "-";

/// Text to analyze and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    /// Decoded text
    pub text: String,
    /// Origin
    pub provenance: Provenance,
}

/// Read `arg`, a path or `-` for stdin
///
/// # Errors
///
/// PDF paths, unreadable files and non-UTF-8 content.
pub fn read(arg: &str) -> anyhow::Result<Input> {
    if arg == STDIN {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(Input {
            text,
            provenance: Provenance::text(),
        });
    }

    let path = Path::new(arg);
    let provenance = Provenance::file(path);
    if provenance.document_type == DocumentType::Pdf {
        bail!(
            "{}: PDF input is not supported; extract the text first and pass a markdown or text file",
            path.display()
        );
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read input");
    Ok(Input { text, provenance })
}

#[cfg(test)]
mod tests {
    use super::*;
    use adr_test_utils::{fixture_file, TITLE_ONLY_ADR};

    #[test]
    fn reads_markdown_file() {
        let file = fixture_file(TITLE_ONLY_ADR, "md");
        let input = read(&file.path().to_string_lossy()).unwrap();
        assert_eq!(input.text, TITLE_ONLY_ADR);
        assert_eq!(input.provenance.document_type, DocumentType::Markdown);
    }

    #[test]
    fn rejects_pdf() {
        let file = fixture_file("%PDF-1.7", "pdf");
        let err = read(&file.path().to_string_lossy()).unwrap_err();
        assert!(err.to_string().contains("PDF input is not supported"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read("/nonexistent/adr-0001.md").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/adr-0001.md"));
    }
}
