use std::{path::Path, str::FromStr};

use fractic_server_error::ServerError;

use crate::{entities::MediaType, errors::UnsupportedMediaType};

/// Media type inferred from a file name's extension.
#[derive(Debug)]
pub(crate) struct MediaTypeModel(MediaType);
impl FromStr for MediaTypeModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let extension = Path::new(s)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let media_type = match extension.as_str() {
            "pdf" => MediaType::Pdf,
            "png" => MediaType::Png,
            "jpg" | "jpeg" => MediaType::Jpeg,
            "webp" => MediaType::Webp,
            "heic" => MediaType::Heic,
            "heif" => MediaType::Heif,
            _ => return Err(UnsupportedMediaType::new(s)),
        };
        Ok(MediaTypeModel(media_type))
    }
}

impl Into<MediaType> for MediaTypeModel {
    fn into(self) -> MediaType {
        self.0
    }
}
