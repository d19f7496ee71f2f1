//! Capture preparation for the Gemini vision API
//!
//! The camera lives in the UI layer; the backend receives an image handle
//! (file path) and prepares the bytes for upload.

use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use std::path::Path;

/// Maximum capture dimension (width or height)
const MAX_DIMENSION: u32 = 1600;

/// Read the raw bytes of a captured image from its handle. An unreadable
/// handle is a capture failure and surfaces to the caller. Downscaling and
/// re-encoding happen once, in the analysis engine.
pub async fn load_capture(path: &Path) -> Result<Vec<u8>, String> {
    tokio::fs::read(path)
        .await
        .map_err(|e| format!("Failed to read capture {}: {}", path.display(), e))
}

/// Prepare captured image bytes for upload
///
/// - Resizes if too large (phone captures routinely exceed 4000px)
/// - Re-encodes as JPEG
pub fn prepare_capture(image_data: &[u8]) -> Result<Vec<u8>, String> {
    let img = image::load_from_memory(image_data)
        .map_err(|e| format!("Failed to load capture: {}", e))?;

    let img = resize_if_needed(img);

    let mut buffer = Vec::new();
    let mut cursor = Cursor::new(&mut buffer);

    img.write_to(&mut cursor, ImageFormat::Jpeg)
        .map_err(|e| format!("Failed to encode capture: {}", e))?;

    Ok(buffer)
}

fn resize_if_needed(img: DynamicImage) -> DynamicImage {
    let (width, height) = (img.width(), img.height());

    if width <= MAX_DIMENSION && height <= MAX_DIMENSION {
        return img;
    }

    let scale = (MAX_DIMENSION as f32 / width.max(height) as f32).min(1.0);
    let new_width = (width as f32 * scale) as u32;
    let new_height = (height as f32 * scale) as u32;

    img.resize(new_width, new_height, image::imageops::FilterType::Lanczos3)
}

/// Detect image MIME type from magic bytes. Declared alongside the base64
/// payload in the generate-content request.
pub fn detect_image_mime(data: &[u8]) -> &'static str {
    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
        "image/png"
    } else if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else if data.starts_with(b"RIFF") && data.get(8..12) == Some(b"WEBP") {
        "image/webp"
    } else if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        "image/gif"
    } else {
        "image/jpeg" // Default: captures are re-encoded as JPEG
    }
}

#[cfg(test)]
pub(crate) fn test_capture_bytes() -> Vec<u8> {
    // Small solid-color PNG standing in for a camera capture.
    let img = DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
        32,
        32,
        image::Rgb([120, 80, 60]),
    ));
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .unwrap();
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_capture_reencodes_jpeg() {
        let prepared = prepare_capture(&test_capture_bytes()).unwrap();
        assert_eq!(detect_image_mime(&prepared), "image/jpeg");
    }

    #[test]
    fn test_prepare_capture_rejects_garbage() {
        assert!(prepare_capture(b"not an image").is_err());
    }

    #[test]
    fn test_resize_caps_dimension() {
        let img = DynamicImage::ImageRgb8(image::RgbImage::new(3200, 1600));
        let resized = resize_if_needed(img);
        assert!(resized.width() <= MAX_DIMENSION);
        assert!(resized.height() <= MAX_DIMENSION);
    }

    #[test]
    fn test_small_image_untouched() {
        let img = DynamicImage::ImageRgb8(image::RgbImage::new(640, 480));
        let resized = resize_if_needed(img);
        assert_eq!((resized.width(), resized.height()), (640, 480));
    }

    #[test]
    fn test_detect_image_mime() {
        assert_eq!(detect_image_mime(&[0x89, 0x50, 0x4E, 0x47]), "image/png");
        assert_eq!(detect_image_mime(&[0xFF, 0xD8, 0xFF]), "image/jpeg");
        assert_eq!(detect_image_mime(b"random bytes"), "image/jpeg");
    }

    #[tokio::test]
    async fn test_load_capture_missing_handle_fails() {
        let err = load_capture(Path::new("/nonexistent/capture.jpg")).await;
        assert!(err.is_err());
    }

    #[tokio::test]
    async fn test_load_capture_returns_raw_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capture.png");
        let original = test_capture_bytes();
        tokio::fs::write(&path, &original).await.unwrap();

        // No decode or re-encode at load time; the engine prepares once.
        let loaded = load_capture(&path).await.unwrap();
        assert_eq!(loaded, original);
        assert_eq!(detect_image_mime(&loaded), "image/png");
    }
}
