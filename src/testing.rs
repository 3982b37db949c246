//! Test doubles shared by the unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use image::{DynamicImage, Rgb, RgbImage};

use crate::error::InferenceError;
use crate::gemini::{GenerativeModel, Part};

type ErrorFactory = Box<dyn Fn() -> InferenceError + Send + Sync>;

/// Records every request and answers with a canned reply or error.
pub struct FakeModel {
    reply: Result<String, ErrorFactory>,
    calls: Mutex<Vec<Vec<Part>>>,
}

impl FakeModel {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(make: impl Fn() -> InferenceError + Send + Sync + 'static) -> Self {
        Self {
            reply: Err(Box::new(make)),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Vec<Part>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeModel for FakeModel {
    fn model_id(&self) -> &str {
        "models/fake"
    }

    async fn generate(&self, parts: &[Part]) -> Result<String, InferenceError> {
        self.calls.lock().unwrap().push(parts.to_vec());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(make) => Err(make()),
        }
    }
}

pub fn leaf(color: Rgb<u8>) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(16, 16, color))
}
