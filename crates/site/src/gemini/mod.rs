//! Gemini API client.
//!
//! Only `generateContent` with a single text prompt is used; the reply text
//! is the concatenation of the first candidate's text parts.

mod client;
mod error;
mod types;

pub use client::GeminiClient;
pub use error::GeminiError;
pub use types::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part};
