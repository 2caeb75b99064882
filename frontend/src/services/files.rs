//! Conversion of browser `File` objects into workflow candidates.
//!
//! Only `name`, `size` and `type` are read. File contents never leave the
//! browser's file handle.

use prepfoundry::FileCandidate;
use web_sys::{File, FileList};

/// First file of an input's or a drop event's file list.
pub fn first_file(files: Option<FileList>) -> Option<File> {
    files.filter(|list| list.length() > 0)?.get(0)
}

/// Metadata of a browser file.
pub fn candidate_from_file(file: &File) -> FileCandidate {
    FileCandidate::new(file.name(), byte_size(file.size()), file.type_())
}

/// `File.size` arrives as a JS number.
fn byte_size(size: f64) -> u64 {
    if size.is_finite() && size > 0.0 {
        size as u64
    } else {
        0
    }
}
