use local_media_protocol::MediaKind;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaType {
    pub mime_type: &'static str,
    pub kind: MediaKind,
}

const fn image(mime_type: &'static str) -> MediaType {
    MediaType {
        mime_type,
        kind: MediaKind::Image,
    }
}

const fn audio(mime_type: &'static str) -> MediaType {
    MediaType {
        mime_type,
        kind: MediaKind::Audio,
    }
}

/// Normalized (lowercase) extension -> media type. The only source of truth for what counts as
/// media; both single-file and directory resolution go through it.
pub const MEDIA_TYPES: &[(&str, MediaType)] = &[
    ("png", image("image/png")),
    ("jpg", image("image/jpeg")),
    ("jpeg", image("image/jpeg")),
    ("gif", image("image/gif")),
    ("webp", image("image/webp")),
    ("bmp", image("image/bmp")),
    ("svg", image("image/svg+xml")),
    ("mp3", audio("audio/mpeg")),
    ("wav", audio("audio/wav")),
    ("ogg", audio("audio/ogg")),
    ("flac", audio("audio/flac")),
    ("m4a", audio("audio/mp4")),
];

/// Lowercased extension of a file name, if it has one.
pub fn extension_of(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(str::to_ascii_lowercase)
}

pub fn classify_extension(ext: &str) -> Option<MediaType> {
    MEDIA_TYPES
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(ext))
        .map(|(_, media_type)| *media_type)
}

pub fn classify_path(path: &Path) -> Option<MediaType> {
    let name = path.file_name()?.to_str()?;
    classify_extension(&extension_of(name)?)
}
