//! Generations domain: article, blog title, image, object removal, and resume review tools

pub mod client;
pub mod domain;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{
    ArticleLength, ArticleRequest, ArticleTone, BlogCategory, BlogTitleRequest, GeneratedImage,
    GeneratedText, ImageRequest, ImageStyle, RemoveObjectRequest, ResumeReviewRequest, Tool,
};
pub use domain::upload::UploadFile;

// Re-export client types
pub use client::GenerationClient;
