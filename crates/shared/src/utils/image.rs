use crate::errors::ServiceError;

/// Path served for products without any image source.
pub const PLACEHOLDER_IMAGE: &str = "/static/images/placeholder.svg";

/// Upper bound on a stored image payload. Uploads above this are rejected
/// before touching the database.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

pub fn media_path(product_id: i32) -> String {
    format!("/media/product/{product_id}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    pub fn mime(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
        }
    }

    fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/png" => Some(ImageFormat::Png),
            "image/jpeg" | "image/jpg" => Some(ImageFormat::Jpeg),
            _ => None,
        }
    }

    /// Sniff the format from the byte signature: PNG 8-byte magic or the
    /// JPEG SOI marker.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
            Some(ImageFormat::Png)
        } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(ImageFormat::Jpeg)
        } else {
            None
        }
    }
}

/// Validate an uploaded image payload against the declared content type.
///
/// Rejects empty and oversized payloads, content types outside the PNG/JPEG
/// allow-list, and payloads whose byte signature does not match the declared
/// type. Returns the canonical MIME type to persist.
pub fn validate_image_upload(
    bytes: &[u8],
    declared_mime: &str,
) -> Result<&'static str, ServiceError> {
    if bytes.is_empty() {
        return Err(ServiceError::Validation(vec!["Image is empty".to_string()]));
    }

    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(ServiceError::Validation(vec![format!(
            "Image exceeds the {} byte limit",
            MAX_IMAGE_BYTES
        )]));
    }

    let declared = ImageFormat::from_mime(declared_mime).ok_or_else(|| {
        ServiceError::Validation(vec![format!(
            "Unsupported image type '{declared_mime}' (use PNG or JPEG)"
        )])
    })?;

    let sniffed = ImageFormat::sniff(bytes).ok_or_else(|| {
        ServiceError::Validation(vec![
            "File content is not a recognized PNG or JPEG image".to_string(),
        ])
    })?;

    if sniffed != declared {
        return Err(ServiceError::Validation(vec![format!(
            "Declared type {} does not match file content",
            declared.mime()
        )]));
    }

    Ok(declared.mime())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00];
    const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00];

    #[test]
    fn valid_png_accepted() {
        assert_eq!(validate_image_upload(PNG_MAGIC, "image/png").unwrap(), "image/png");
    }

    #[test]
    fn jpg_alias_normalized_to_jpeg() {
        assert_eq!(
            validate_image_upload(JPEG_MAGIC, "image/jpg").unwrap(),
            "image/jpeg"
        );
    }

    #[test]
    fn empty_payload_rejected() {
        assert!(validate_image_upload(&[], "image/png").is_err());
    }

    #[test]
    fn oversized_payload_rejected() {
        let mut big = vec![0u8; MAX_IMAGE_BYTES + 1];
        big[..3].copy_from_slice(&[0xFF, 0xD8, 0xFF]);
        assert!(validate_image_upload(&big, "image/jpeg").is_err());
    }

    #[test]
    fn disallowed_type_rejected() {
        assert!(validate_image_upload(PNG_MAGIC, "image/gif").is_err());
        assert!(validate_image_upload(PNG_MAGIC, "application/pdf").is_err());
    }

    #[test]
    fn signature_mismatch_rejected() {
        // Declared as PNG but carries a JPEG signature: never persisted.
        assert!(validate_image_upload(JPEG_MAGIC, "image/png").is_err());
        // Arbitrary bytes under an image content type.
        assert!(validate_image_upload(b"not an image at all", "image/png").is_err());
    }
}
