//! Commands produced by input translation

use crate::photo::PhotoId;

/// A user intention, decoupled from the raw input that produced it.
///
/// Commands carry no preconditions of their own; the controller and the
/// state machine silently ignore commands that do not apply in the
/// current state (e.g. navigation while the preview is closed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryCommand {
    /// Open the preview on the photo at the given index.
    Open(usize),
    Close,
    Next,
    Previous,
    /// Toggle the favorite state of the photo under the preview.
    ToggleFavorite,
    /// Toggle the favorite state of an explicitly named photo.
    ToggleFavoriteOf(PhotoId),
}
