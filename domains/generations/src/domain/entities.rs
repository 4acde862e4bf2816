//! Tool options and validated requests for the generation endpoints
//!
//! Requests are validated locally; an invalid request never reaches the
//! network.

use std::borrow::Cow;

use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors};

use creatorkit_common::{Error, Result};

use crate::domain::upload::UploadFile;

/// Most words an object-removal description may have
pub const MAX_OBJECT_WORDS: usize = 2;

/// The generation tools, each with its own busy flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Article,
    BlogTitles,
    Image,
    RemoveObject,
    ResumeReview,
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tool::Article => write!(f, "article"),
            Tool::BlogTitles => write!(f, "blog_titles"),
            Tool::Image => write!(f, "image"),
            Tool::RemoveObject => write!(f, "remove_object"),
            Tool::ResumeReview => write!(f, "resume_review"),
        }
    }
}

// ============================================================================
// Options
// ============================================================================

/// Article length presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleLength {
    #[default]
    Short,
    Medium,
    Long,
}

impl ArticleLength {
    /// Target length sent to the server
    pub fn target_words(&self) -> u32 {
        match self {
            Self::Short => 800,
            Self::Medium => 1200,
            Self::Long => 1600,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Short => "Short",
            Self::Medium => "Medium",
            Self::Long => "Long",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Short => "500-800 words",
            Self::Medium => "800-1200 words",
            Self::Long => "1200+ words",
        }
    }
}

impl std::str::FromStr for ArticleLength {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            other => Err(Error::Validation(format!(
                "Unknown article length: {}. Expected short, medium or long",
                other
            ))),
        }
    }
}

/// Article tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleTone {
    #[default]
    Professional,
    Casual,
    Creative,
    Informative,
}

impl ArticleTone {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Professional => "Professional",
            Self::Casual => "Casual",
            Self::Creative => "Creative",
            Self::Informative => "Informative",
        }
    }
}

impl std::str::FromStr for ArticleTone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "professional" => Ok(Self::Professional),
            "casual" => Ok(Self::Casual),
            "creative" => Ok(Self::Creative),
            "informative" => Ok(Self::Informative),
            other => Err(Error::Validation(format!("Unknown article tone: {}", other))),
        }
    }
}

/// Blog title categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum BlogCategory {
    #[default]
    General,
    Technology,
    Business,
    Health,
    Lifestyle,
    Education,
    Travel,
    Food,
}

impl BlogCategory {
    pub const ALL: [BlogCategory; 8] = [
        Self::General,
        Self::Technology,
        Self::Business,
        Self::Health,
        Self::Lifestyle,
        Self::Education,
        Self::Travel,
        Self::Food,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Technology => "Technology",
            Self::Business => "Business",
            Self::Health => "Health",
            Self::Lifestyle => "Lifestyle",
            Self::Education => "Education",
            Self::Travel => "Travel",
            Self::Food => "Food",
        }
    }
}

impl std::str::FromStr for BlogCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::Validation(format!("Unknown blog category: {}", s)))
    }
}

/// Image styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ImageStyle {
    #[default]
    Realistic,
    Anime,
    Cartoon,
    #[serde(rename = "3D Render")]
    Render3d,
    #[serde(rename = "Oil Painting")]
    OilPainting,
    Watercolor,
    Fantasy,
    Cyberpunk,
}

impl ImageStyle {
    pub const ALL: [ImageStyle; 8] = [
        Self::Realistic,
        Self::Anime,
        Self::Cartoon,
        Self::Render3d,
        Self::OilPainting,
        Self::Watercolor,
        Self::Fantasy,
        Self::Cyberpunk,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Realistic => "Realistic",
            Self::Anime => "Anime",
            Self::Cartoon => "Cartoon",
            Self::Render3d => "3D Render",
            Self::OilPainting => "Oil Painting",
            Self::Watercolor => "Watercolor",
            Self::Fantasy => "Fantasy",
            Self::Cyberpunk => "Cyberpunk",
        }
    }
}

impl std::str::FromStr for ImageStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.replace(['-', '_'], " ");
        Self::ALL
            .into_iter()
            .find(|style| style.label().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| Error::Validation(format!("Unknown image style: {}", s)))
    }
}

// ============================================================================
// Requests
// ============================================================================

/// Request for a long-form article
#[derive(Debug, Clone, Validate)]
pub struct ArticleRequest {
    #[validate(custom(function = "validate_not_blank", message = "Please enter a topic"))]
    pub topic: String,
    pub length: ArticleLength,
    pub tone: ArticleTone,
}

#[derive(Debug, Serialize)]
pub(crate) struct ArticleBody {
    pub prompt: String,
    pub length: u32,
    pub tone: ArticleTone,
}

impl ArticleRequest {
    /// Prompt text the server expects
    pub fn prompt(&self) -> String {
        format!(
            "Write a {} article about {} in {} format ({})",
            self.tone.label().to_lowercase(),
            self.topic.trim(),
            self.length.label(),
            self.length.description()
        )
    }

    pub(crate) fn body(&self) -> ArticleBody {
        ArticleBody {
            prompt: self.prompt(),
            length: self.length.target_words(),
            tone: self.tone,
        }
    }
}

/// Request for blog title ideas
#[derive(Debug, Clone, Validate)]
pub struct BlogTitleRequest {
    #[validate(custom(function = "validate_not_blank", message = "Please enter a keyword"))]
    pub keyword: String,
    pub category: BlogCategory,
}

#[derive(Debug, Serialize)]
pub(crate) struct BlogTitleBody<'a> {
    pub prompt: &'a str,
    pub category: BlogCategory,
}

impl BlogTitleRequest {
    pub(crate) fn body(&self) -> BlogTitleBody<'_> {
        BlogTitleBody {
            prompt: self.keyword.trim(),
            category: self.category,
        }
    }
}

/// Request for a generated image
#[derive(Debug, Clone, Validate, Serialize)]
pub struct ImageRequest {
    #[validate(custom(function = "validate_not_blank", message = "Please describe your image"))]
    pub prompt: String,
    pub style: ImageStyle,
    /// Publish the result to the community gallery
    pub publish: bool,
}

/// Request to remove an object from an uploaded image
#[derive(Debug, Clone, Validate)]
pub struct RemoveObjectRequest {
    #[validate(custom(function = "validate_image_upload"))]
    pub image: UploadFile,
    #[validate(custom(function = "validate_object_description"))]
    pub object: String,
}

/// Request to review an uploaded resume
#[derive(Debug, Clone, Validate)]
pub struct ResumeReviewRequest {
    #[validate(custom(function = "validate_pdf_upload"))]
    pub resume: UploadFile,
}

// ============================================================================
// Results
// ============================================================================

/// Markdown produced by a text tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedText {
    pub content: String,
}

impl GeneratedText {
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}

/// URL of an image produced by an image tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub url: String,
}

// ============================================================================
// Validation
// ============================================================================

fn validate_not_blank(value: &str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn validate_object_description(object: &str) -> std::result::Result<(), ValidationError> {
    let words = object.split_whitespace().count();
    if words == 0 {
        return Err(ValidationError::new("blank")
            .with_message(Cow::Borrowed("Please describe the object to remove")));
    }
    if words > MAX_OBJECT_WORDS {
        return Err(ValidationError::new("too_many_words")
            .with_message(Cow::Borrowed("Please enter only one or two words")));
    }
    Ok(())
}

fn validate_image_upload(file: &UploadFile) -> std::result::Result<(), ValidationError> {
    if !file.is_image() {
        return Err(ValidationError::new("not_an_image")
            .with_message(Cow::Borrowed("Please upload an image file")));
    }
    Ok(())
}

fn validate_pdf_upload(file: &UploadFile) -> std::result::Result<(), ValidationError> {
    if !file.is_pdf() {
        return Err(ValidationError::new("not_a_pdf")
            .with_message(Cow::Borrowed("Please upload a PDF file")));
    }
    Ok(())
}

/// Validate a request, mapping failures to a user-facing `Error::Validation`
pub fn validate_request<T: Validate>(request: &T) -> Result<()> {
    request
        .validate()
        .map_err(|errors| Error::Validation(first_message(&errors)))
}

fn first_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.keys().collect();
    fields.sort();

    fields
        .into_iter()
        .filter_map(|field| field_errors.get(field))
        .flat_map(|errors| errors.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| format!("Validation failed: {}", errors))
}
