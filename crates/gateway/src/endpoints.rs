//! Backend API endpoints

use reqwest::Method;

/// Every backend endpoint the client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    GenerateArticle,
    GenerateBlogTitle,
    GenerateImage,
    RemoveImageObject,
    ResumeReview,
    UserCreations,
    PublishedCreations,
    ToggleLikeCreation,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Self::GenerateArticle => "/api/ai/generate-article",
            Self::GenerateBlogTitle => "/api/ai/generate-blog-title",
            Self::GenerateImage => "/api/ai/generate-image",
            Self::RemoveImageObject => "/api/ai/remove-image-object",
            Self::ResumeReview => "/api/ai/resume-review",
            Self::UserCreations => "/api/user/get-user-creations",
            Self::PublishedCreations => "/api/user/get-published-creations",
            Self::ToggleLikeCreation => "/api/user/toggle-like-creation",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Self::UserCreations | Self::PublishedCreations => Method::GET,
            _ => Method::POST,
        }
    }

    /// Whether the endpoint expects a multipart upload
    pub fn is_multipart(&self) -> bool {
        matches!(self, Self::RemoveImageObject | Self::ResumeReview)
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}
