//! Upload dropzone state: chosen file, local preview, drag highlight.
//!
//! The dropzone never uploads anything itself. It previews the first chosen
//! file and leaves submission to the surrounding `/upload` form.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::config::ClientConfig;

/// The parts of a browser `File` the dropzone cares about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub size: u64,
}

impl FileMeta {
    /// Lowercased extension after the last dot, if the name has one.
    pub fn extension(&self) -> Option<String> {
        let (_, ext) = self.name.rsplit_once('.')?;
        Some(ext.to_ascii_lowercase())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("Invalid image file.")]
    MissingExtension,
    #[error("Only {} allowed.", .0.join(", ").to_uppercase())]
    UnsupportedType(Vec<String>),
    #[error("Image is larger than {} MB.", .0 / (1024 * 1024))]
    TooLarge(u64),
}

/// Check a file against the configured type and size limits.
///
/// # Errors
///
/// Returns the reason the file would be refused by the upload form.
pub fn validate_upload(file: &FileMeta, config: &ClientConfig) -> Result<(), UploadError> {
    let Some(ext) = file.extension() else {
        return Err(UploadError::MissingExtension);
    };
    if !config.allows_extension(&ext) {
        return Err(UploadError::UnsupportedType(config.allowed_extensions.clone()));
    }
    if file.size > config.max_upload_bytes {
        return Err(UploadError::TooLarge(config.max_upload_bytes));
    }
    Ok(())
}

/// First entry of a file list; later entries are ignored.
pub fn first_file(files: &[FileMeta]) -> Option<&FileMeta> {
    files.first()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadState {
    /// Object URL of the previewed file; `None` shows the placeholder.
    pub preview_url: Option<String>,
    pub file_name: Option<String>,
    pub dragover: bool,
    pub error: Option<String>,
}

impl UploadState {
    /// Preview `file` under `preview_url`.
    ///
    /// Returns the object URL this replaces, so the caller can revoke it.
    pub fn show_preview(&mut self, file: &FileMeta, preview_url: String) -> Option<String> {
        self.file_name = Some(file.name.clone());
        self.error = None;
        self.preview_url.replace(preview_url)
    }

    /// Record a rejected file; the current preview stays.
    pub fn reject(&mut self, err: &UploadError) {
        self.error = Some(err.to_string());
    }

    /// Forget the chosen file; returns its object URL for revoking.
    pub fn reset(&mut self) -> Option<String> {
        std::mem::take(self).preview_url
    }

    pub fn set_dragover(&mut self, active: bool) {
        self.dragover = active;
    }

    pub fn shows_placeholder(&self) -> bool {
        self.preview_url.is_none()
    }

    /// How the form's file input must change once `selection` has been
    /// applied, so a native submit always sends the previewed file.
    pub fn input_sync(&self, selection: &Selection) -> InputSync {
        match selection {
            Selection::Empty => InputSync::Unchanged,
            Selection::Accepted(_) => InputSync::UseOffered,
            Selection::Rejected(_) => self.restore_sync(),
        }
    }

    /// Input state matching the current preview, for offers that were not
    /// taken.
    pub fn restore_sync(&self) -> InputSync {
        if self.preview_url.is_some() { InputSync::RestorePreviewed } else { InputSync::Clear }
    }
}

/// Change to apply to the form's file input after a selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSync {
    /// Nothing was offered; leave the input alone.
    Unchanged,
    /// The offered files become the input's files.
    UseOffered,
    /// Put back the files behind the current preview.
    RestorePreviewed,
    /// Nothing is previewed; empty the input.
    Clear,
}

/// Outcome of offering a file list to the dropzone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Empty list: nothing to do.
    Empty,
    /// First file passed validation and should be previewed.
    Accepted(FileMeta),
    /// First file failed validation.
    Rejected(UploadError),
}

/// Decide what to do with a dropped or picked file list.
pub fn select_files(files: &[FileMeta], config: &ClientConfig) -> Selection {
    let Some(file) = first_file(files) else {
        return Selection::Empty;
    };
    match validate_upload(file, config) {
        Ok(()) => Selection::Accepted(file.clone()),
        Err(e) => Selection::Rejected(e),
    }
}
