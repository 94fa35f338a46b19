#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    Pdf,
    Png,
    Jpeg,
    Webp,
    Heic,
    Heif,
}

impl MediaType {
    pub fn mime(&self) -> &'static str {
        match self {
            MediaType::Pdf => "application/pdf",
            MediaType::Png => "image/png",
            MediaType::Jpeg => "image/jpeg",
            MediaType::Webp => "image/webp",
            MediaType::Heic => "image/heic",
            MediaType::Heif => "image/heif",
        }
    }
}

/// Uploaded scan, held in memory for the duration of one extraction call.
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub content: Vec<u8>,
    pub media_type: MediaType,
}

impl Document {
    pub fn new(name: impl Into<String>, content: Vec<u8>, media_type: MediaType) -> Self {
        Self {
            name: name.into(),
            content,
            media_type,
        }
    }
}
