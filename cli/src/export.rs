//! The three export actions: PNG image, text file, clipboard.
//!
//! Each action is an independent side effect taking an already-prepared
//! block; a failure in one never invalidates the block or the others.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use asciigen::{CanvasOptions, Prepared, paint};

/// What an export action did, for user-facing status messages.
#[derive(Debug)]
pub struct ExportReceipt {
    pub action: &'static str,
    pub detail: String,
}

/// Paint the block onto the export canvas and save it as PNG.
pub fn export_image(
    prepared: &Prepared,
    options: &CanvasOptions,
    path: &Path,
) -> Result<ExportReceipt> {
    let canvas = paint(prepared, options);
    canvas.save(path).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(ExportReceipt {
        action: "image",
        detail: format!(
            "{}x{} PNG written to {}",
            options.width,
            options.height,
            path.display()
        ),
    })
}

/// Write the block as UTF-8 plain text.
pub fn export_text(lines: &[String], path: &Path) -> Result<ExportReceipt> {
    fs::write(path, lines.join("\n"))
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(ExportReceipt { action: "text", detail: format!("text written to {}", path.display()) })
}

/// Copy the block to the system clipboard, falling back to printing it to
/// stdout when no clipboard is reachable (headless session, no display).
pub fn copy_to_clipboard(text: &str) -> Result<ExportReceipt> {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => Ok(ExportReceipt {
            action: "clipboard",
            detail: "copied to clipboard".to_string(),
        }),
        Err(err) => {
            log::debug!("clipboard unavailable ({err}), printing block instead");
            println!("{text}");
            Ok(ExportReceipt {
                action: "clipboard",
                detail: "clipboard unavailable, block printed to stdout".to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asciigen::prepare;

    #[test]
    fn test_export_text_writes_block() {
        let dir = std::env::temp_dir().join("asciigen-export-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("block.txt");

        let lines = vec!["## #".to_string(), "## #".to_string()];
        let receipt = export_text(&lines, &path).unwrap();
        assert_eq!(receipt.action, "text");
        assert_eq!(fs::read_to_string(&path).unwrap(), "## #\n## #");
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_export_text_reports_failure() {
        let lines = vec!["#".to_string()];
        let result = export_text(&lines, Path::new("/no/such/dir/block.txt"));
        assert!(result.is_err());
    }

    #[test]
    fn test_copy_to_clipboard_never_fails() {
        // With no reachable clipboard (headless CI) the stdout fallback
        // still yields a success receipt; the block is never lost.
        let receipt = copy_to_clipboard("## #\n## #").unwrap();
        assert_eq!(receipt.action, "clipboard");
        assert!(!receipt.detail.is_empty());
    }

    #[test]
    fn test_export_image_writes_png() {
        let dir = std::env::temp_dir().join("asciigen-export-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("block.png");

        let prepared = prepare("####\n####", 1.0, 1.0);
        let receipt = export_image(&prepared, &CanvasOptions::default(), &path).unwrap();
        assert_eq!(receipt.action, "image");
        let saved = image::open(&path).unwrap();
        assert_eq!(saved.width(), 1200);
        assert_eq!(saved.height(), 800);
        fs::remove_file(&path).ok();
    }
}
