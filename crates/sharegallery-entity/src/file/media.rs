//! Media classification by file name.

/// Check if a file name denotes an image, judged by the MIME type guessed
/// from its extension.
pub fn is_image(name: &str) -> bool {
    mime_guess::from_path(name)
        .first()
        .is_some_and(|mime| mime.type_().as_str() == "image")
}

/// Check if a file name denotes an archive container with the given
/// suffix. The comparison is case-sensitive.
pub fn is_archive(name: &str, extension: &str) -> bool {
    !extension.is_empty() && name.ends_with(extension)
}
