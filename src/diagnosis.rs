use std::io::Cursor;
use std::sync::Arc;
use std::time::Instant;

use image::{DynamicImage, ImageOutputFormat};

use crate::gemini::{GenerativeModel, Part};
use crate::prompt::PLANT_EXPERT_PROMPT;

pub const JPEG_MEDIA_TYPE: &str = "image/jpeg";

/// A leaf photo re-encoded for transmission. Lives for one request only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub bytes: Vec<u8>,
    pub media_type: &'static str,
}

impl ImagePayload {
    /// JPEG-encodes the image. Alpha is dropped since JPEG has no alpha channel.
    pub fn encode(image: &DynamicImage, quality: u8) -> image::ImageResult<Self> {
        let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
        let mut bytes = Vec::new();
        rgb.write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Jpeg(quality))?;
        Ok(Self {
            bytes,
            media_type: JPEG_MEDIA_TYPE,
        })
    }
}

/// Outcome of one analysis. Both arms always carry non-empty text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosisResult {
    Success(String),
    Failure(String),
}

impl DiagnosisResult {
    fn failure(reason: impl std::fmt::Display) -> Self {
        DiagnosisResult::Failure(format!("Error analyzing image: {reason}"))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, DiagnosisResult::Success(_))
    }

    pub fn text(&self) -> &str {
        match self {
            DiagnosisResult::Success(text) | DiagnosisResult::Failure(text) => text,
        }
    }
}

/// Sends leaf photos to the model with the agronomist prompt.
#[derive(Clone)]
pub struct Diagnoser {
    model: Arc<dyn GenerativeModel>,
    jpeg_quality: u8,
}

impl Diagnoser {
    pub fn new(model: Arc<dyn GenerativeModel>, jpeg_quality: u8) -> Self {
        Self { model, jpeg_quality }
    }

    pub fn model_id(&self) -> &str {
        self.model.model_id()
    }

    /// Runs one analysis. Errors never escape; they come back as `Failure`.
    pub async fn diagnose(&self, image: &DynamicImage) -> DiagnosisResult {
        let payload = match ImagePayload::encode(image, self.jpeg_quality) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(error = %e, "failed to encode image as JPEG");
                return DiagnosisResult::failure(e);
            }
        };

        let size = payload.bytes.len();
        let parts = [Part::text(PLANT_EXPERT_PROMPT), Part::Image(payload)];

        tracing::info!(
            model = self.model.model_id(),
            jpeg_bytes = size,
            "sending leaf image for analysis"
        );
        let started = Instant::now();

        match self.model.generate(&parts).await {
            Ok(text) if !text.trim().is_empty() => {
                let elapsed_ms = started.elapsed().as_millis() as u64;
                tracing::info!(elapsed_ms, "analysis complete");
                DiagnosisResult::Success(text)
            }
            Ok(_) => {
                tracing::warn!("model returned a blank diagnosis");
                DiagnosisResult::failure("the model returned an empty diagnosis")
            }
            Err(e) => {
                let elapsed_ms = started.elapsed().as_millis() as u64;
                tracing::error!(error = %e, elapsed_ms, "analysis failed");
                DiagnosisResult::failure(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InferenceError;
    use crate::testing::{leaf, FakeModel};
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn encode_produces_jpeg() {
        let payload = ImagePayload::encode(&leaf(Rgb([40, 160, 60])), 85).unwrap();
        assert_eq!(payload.media_type, "image/jpeg");
        assert_eq!(&payload.bytes[..3], &[0xFF, 0xD8, 0xFF]);
        assert_eq!(image::guess_format(&payload.bytes).unwrap(), image::ImageFormat::Jpeg);
    }

    #[test]
    fn encode_is_deterministic() {
        let image = leaf(Rgb([90, 120, 30]));
        assert_eq!(
            ImagePayload::encode(&image, 85).unwrap(),
            ImagePayload::encode(&image, 85).unwrap()
        );
    }

    #[test]
    fn encode_drops_alpha() {
        let rgba = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([10, 200, 10, 128])));
        let payload = ImagePayload::encode(&rgba, 85).unwrap();
        let decoded = image::load_from_memory(&payload.bytes).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgb8);
    }

    #[tokio::test]
    async fn success_returns_model_text() {
        let model = Arc::new(FakeModel::replying("**DISEASE IDENTIFICATION**: Early blight"));
        let diagnoser = Diagnoser::new(model.clone(), 85);

        let result = diagnoser.diagnose(&leaf(Rgb([30, 140, 50]))).await;

        assert!(result.is_success());
        assert!(result.text().contains("DISEASE IDENTIFICATION"));
        assert_eq!(model.calls().len(), 1);
    }

    #[tokio::test]
    async fn every_call_carries_prompt_and_its_own_image() {
        let model = Arc::new(FakeModel::replying("diagnosis"));
        let diagnoser = Diagnoser::new(model.clone(), 85);
        let first = leaf(Rgb([200, 30, 30]));
        let second = DynamicImage::ImageRgb8(RgbImage::from_fn(16, 16, |x, y| {
            Rgb([(x * 15) as u8, (y * 15) as u8, 80])
        }));

        diagnoser.diagnose(&first).await;
        diagnoser.diagnose(&second).await;

        let calls = model.calls();
        assert_eq!(calls.len(), 2);
        for (call, image) in calls.iter().zip([&first, &second]) {
            assert_eq!(call.len(), 2);
            assert_eq!(call[0], Part::Text(PLANT_EXPERT_PROMPT.to_string()));
            assert_eq!(call[1], Part::Image(ImagePayload::encode(image, 85).unwrap()));
        }
        assert_ne!(calls[0][1], calls[1][1]);
    }

    #[tokio::test]
    async fn inference_error_becomes_failure() {
        let model = Arc::new(FakeModel::failing(|| {
            InferenceError::Transport("error sending request: connection refused".into())
        }));
        let diagnoser = Diagnoser::new(model, 85);

        let result = diagnoser.diagnose(&leaf(Rgb([1, 2, 3]))).await;

        match result {
            DiagnosisResult::Failure(msg) => {
                assert!(msg.starts_with("Error analyzing image:"));
                assert!(msg.contains("connection refused"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn blank_reply_is_not_a_success() {
        let diagnoser = Diagnoser::new(Arc::new(FakeModel::replying("  \n")), 85);
        let result = diagnoser.diagnose(&leaf(Rgb([1, 2, 3]))).await;
        assert!(!result.is_success());
        assert!(!result.text().trim().is_empty());
    }

    #[tokio::test]
    async fn failure_leaves_diagnoser_usable() {
        let model = Arc::new(FakeModel::failing(|| InferenceError::Service {
            status: 429,
            message: "Resource has been exhausted".into(),
        }));
        let diagnoser = Diagnoser::new(model.clone(), 85);
        let image = leaf(Rgb([5, 5, 5]));

        for _ in 0..3 {
            assert!(!diagnoser.diagnose(&image).await.is_success());
        }
        assert_eq!(model.calls().len(), 3);
    }
}
