pub mod filesystem;
pub mod html;

use crate::error::{QuizError, Result};
use crate::types::config::FeedbackClasses;
use crate::types::model::PageModel;
use filesystem::list_files;
use std::path::{Path, PathBuf};

pub const PAGE_EXTENSIONS: [&str; 2] = ["html", "htm"];

/// Pages under `root`, in sorted order. A file path is returned as is.
pub fn discover_pages(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(QuizError::PathNotFound(root.display().to_string()));
    }
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut pages = list_files(root)
        .into_iter()
        .filter(|path| is_page(path))
        .collect::<Vec<_>>();
    pages.sort();
    Ok(pages)
}

pub fn load_page(path: &Path, feedback: &FeedbackClasses) -> Result<PageModel> {
    if !path.exists() {
        return Err(QuizError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    html::scan_html(&content, &path.display().to_string(), feedback)
}

fn is_page(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            PAGE_EXTENSIONS
                .iter()
                .any(|page_ext| ext.eq_ignore_ascii_case(page_ext))
        })
        .unwrap_or(false)
}
