use std::path::Path;

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::{debug, warn};

use crate::error::Result;
use crate::file::operations::{read_file_to_string, write_file_sync};

// Patterns for the two rewrite passes. Both keep the original DOTALL mode
// (`(?s)`) since the matched spans cross line boundaries.
lazy_static! {
    // The inline submit button as it sits inside the form: opening tag with
    // its two fixed attributes, the conditional label, and the closing tag.
    static ref INLINE_SUBMIT_BUTTON: Regex = Regex::new(
        r#"(?s)\s*<SubmitButton type="submit" disabled=\{isLoading\}>\s*\{isLoading \? 'Adding Product\.\.\.' : 'Add Product'\}\s*</SubmitButton>"#
    ).unwrap();

    // End of the first Product Gallery section: the three sidebar/layout
    // closers (group 1) immediately followed by the container closer (group 2).
    static ref GALLERY_SECTION_END: Regex = Regex::new(
        r#"(?s)(</SidebarSection>\s*</ProductFormSidebar>\s*</ProductFormLayout>)(\s*</ProductFormContainer>)"#
    ).unwrap();
}

/// Block inserted after the gallery section closers. Reproduced byte-for-byte
/// from the page's expected markup. Some lines carry significant trailing
/// spaces, so the block is assembled line by line rather than as one raw
/// string. The handler synthesizes a bubbling, cancelable submit event on the
/// page's form since the button no longer lives inside it.
const RELOCATED_SUBMIT_BUTTON: &str = concat!(
    "\n",
    "                    \n",
    "                    {/* Submit button positioned after Product Gallery */}\n",
    "                    <SubmitButton \n",
    "                      type=\"button\" \n",
    "                      disabled={isLoading}\n",
    "                      onClick={(e) => {\n",
    "                        e.preventDefault();\n",
    "                        const form = document.querySelector('form');\n",
    "                        if (form) {\n",
    "                          const submitEvent = new Event('submit', { bubbles: true, cancelable: true });\n",
    "                          form.dispatchEvent(submitEvent);\n",
    "                        }\n",
    "                      }}\n",
    "                    >\n",
    "                      {isLoading ? 'Adding Product...' : 'Add Product'}\n",
    "                    </SubmitButton>",
);

/// Outcome of a full relocation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelocationReport {
    /// Number of inline button occurrences deleted by the removal pass
    pub removed: usize,
    /// Whether the relocated block was inserted by the insertion pass
    pub inserted: bool,
}

/// Deletes every inline submit button occurrence from the page source.
///
/// Returns the rewritten text and the number of occurrences removed. A
/// zero-match input comes back unchanged; the caller decides whether that is
/// worth a warning.
pub fn remove_inline_submit_button(content: &str) -> (String, usize) {
    let matched = INLINE_SUBMIT_BUTTON.find_iter(content).count();
    if matched == 0 {
        return (content.to_string(), 0);
    }

    let rewritten = INLINE_SUBMIT_BUTTON.replace_all(content, "").into_owned();
    debug!("Removed {} inline submit button occurrence(s)", matched);
    (rewritten, matched)
}

/// Inserts the relocated button between the gallery section closers and the
/// container closer.
///
/// Bounded to the first match: repeated form sections further down the page
/// (the edit-product section uses the same markup) stay untouched.
pub fn insert_relocated_submit_button(content: &str) -> (String, bool) {
    let mut inserted = false;
    let rewritten = GALLERY_SECTION_END.replacen(content, 1, |caps: &Captures| {
        inserted = true;
        format!("{}{}{}", &caps[1], RELOCATED_SUBMIT_BUTTON, &caps[2])
    });
    (rewritten.into_owned(), inserted)
}

/// Applies both rewrite passes to an in-memory page source
pub fn relocate_submit_button(content: &str) -> (String, RelocationReport) {
    let (content, removed) = remove_inline_submit_button(content);
    let (content, inserted) = insert_relocated_submit_button(&content);
    (content, RelocationReport { removed, inserted })
}

/// Runs the full Load -> Remove -> Insert -> Write pipeline against a file.
///
/// A pattern that finds nothing is not an error: the file is still written
/// back and the run reports success, matching the tool's original contract.
/// Zero-match passes are logged so the condition is at least visible.
pub fn relocate_in_file(path: &Path) -> Result<RelocationReport> {
    debug!("Relocating submit button in {}", path.display());

    let content = read_file_to_string(path)?;
    let (rewritten, report) = relocate_submit_button(&content);

    if report.removed == 0 {
        warn!(
            "Inline submit button not found in {}; removal pass was a no-op",
            path.display()
        );
    }
    if !report.inserted {
        warn!(
            "Product Gallery section boundary not found in {}; insertion pass was a no-op",
            path.display()
        );
    }

    write_file_sync(path, &rewritten)?;
    debug!("Wrote {} bytes back to {}", rewritten.len(), path.display());

    Ok(report)
}
