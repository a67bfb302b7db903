use std::path::Path;

use asset_shelf_application::{ApplicationError, PreviewDecoder};
use asset_shelf_domain::{detect_file_kind, FileKind, PreviewImage};
use image::io::Reader as ImageReader;

pub const THUMBNAIL_SIZE: u32 = 256;

/// Decodes previews and environment maps with the `image` crate, bounded to
/// a square thumbnail.
#[derive(Debug, Default)]
pub struct ImageCrateDecoder;

impl PreviewDecoder for ImageCrateDecoder {
    fn decode_preview(&self, path: &Path) -> Result<PreviewImage, ApplicationError> {
        match detect_file_kind(path) {
            FileKind::PreviewImage | FileKind::EnvironmentMap => {
                let image = ImageReader::open(path)
                    .map_err(|error| ApplicationError::Io(error.to_string()))?
                    .with_guessed_format()
                    .map_err(|error| ApplicationError::Decode(error.to_string()))?
                    .decode()
                    .map_err(|error| ApplicationError::Decode(error.to_string()))?;

                let thumb = if image.width() > THUMBNAIL_SIZE || image.height() > THUMBNAIL_SIZE {
                    image.thumbnail(THUMBNAIL_SIZE, THUMBNAIL_SIZE).to_rgba8()
                } else {
                    image.to_rgba8()
                };
                Ok(PreviewImage {
                    width: thumb.width(),
                    height: thumb.height(),
                    rgba: thumb.into_raw(),
                })
            }
            FileKind::Library | FileKind::Other => Err(ApplicationError::Decode(format!(
                "unsupported preview format: {:?}",
                path
            ))),
        }
    }
}
