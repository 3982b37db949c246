//! Agricheck: plant leaf photos in, organic treatment advice out.
//!
//! Uploaded photos are re-encoded as JPEG and sent to Gemini together with a fixed
//! agronomist prompt; the model's reply is shown on the page.

pub mod config;
pub mod diagnosis;
pub mod error;
pub mod gemini;
pub mod probe;
pub mod prompt;
pub mod web;

#[cfg(test)]
mod testing;

pub use config::{load_credential, Config, Credential};
pub use diagnosis::{Diagnoser, DiagnosisResult, ImagePayload};
pub use error::{ConfigurationError, InferenceError, InputError};
pub use gemini::{GeminiModel, GenerativeModel, Part};
