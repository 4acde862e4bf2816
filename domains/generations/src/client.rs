//! Generation Client
//!
//! One entry point per tool. Each request is validated locally, then sent
//! through the gateway; each tool tracks its own in-flight state so two
//! tools can run at once.

use reqwest::multipart::Form;

use creatorkit_common::{BusyFlag, Result};
use creatorkit_gateway::{ContentPayload, CredentialProvider, Endpoint, RequestGateway};

use crate::domain::entities::{
    validate_request, ArticleRequest, BlogTitleRequest, GeneratedImage, GeneratedText,
    ImageRequest, RemoveObjectRequest, ResumeReviewRequest, Tool,
};

#[derive(Debug, Default)]
struct ToolFlags {
    article: BusyFlag,
    blog_titles: BusyFlag,
    image: BusyFlag,
    remove_object: BusyFlag,
    resume_review: BusyFlag,
}

/// Client for the AI generation tools
#[derive(Debug)]
pub struct GenerationClient {
    gateway: RequestGateway,
    flags: ToolFlags,
}

impl GenerationClient {
    pub fn new(gateway: RequestGateway) -> Self {
        Self {
            gateway,
            flags: ToolFlags::default(),
        }
    }

    /// Whether a request for the tool is outstanding
    pub fn is_busy(&self, tool: Tool) -> bool {
        self.flag(tool).is_busy()
    }

    fn flag(&self, tool: Tool) -> &BusyFlag {
        match tool {
            Tool::Article => &self.flags.article,
            Tool::BlogTitles => &self.flags.blog_titles,
            Tool::Image => &self.flags.image,
            Tool::RemoveObject => &self.flags.remove_object,
            Tool::ResumeReview => &self.flags.resume_review,
        }
    }

    /// Write an article as markdown
    pub async fn generate_article(
        &self,
        credentials: &dyn CredentialProvider,
        request: &ArticleRequest,
    ) -> Result<GeneratedText> {
        validate_request(request)?;
        let _busy = self.flag(Tool::Article).enter();

        tracing::info!(
            length = request.length.target_words(),
            tone = request.tone.label(),
            "Generating article"
        );

        let reply = self
            .gateway
            .post_json::<_, ContentPayload>(credentials, Endpoint::GenerateArticle, &request.body())
            .await?;

        let text = GeneratedText {
            content: reply.data.content,
        };
        tracing::debug!(words = text.word_count(), "Article generated");
        Ok(text)
    }

    /// Suggest blog titles as markdown
    pub async fn generate_blog_titles(
        &self,
        credentials: &dyn CredentialProvider,
        request: &BlogTitleRequest,
    ) -> Result<GeneratedText> {
        validate_request(request)?;
        let _busy = self.flag(Tool::BlogTitles).enter();

        tracing::info!(category = request.category.label(), "Generating blog titles");

        let reply = self
            .gateway
            .post_json::<_, ContentPayload>(
                credentials,
                Endpoint::GenerateBlogTitle,
                &request.body(),
            )
            .await?;

        Ok(GeneratedText {
            content: reply.data.content,
        })
    }

    /// Generate an image, optionally publishing it to the community
    pub async fn generate_image(
        &self,
        credentials: &dyn CredentialProvider,
        request: &ImageRequest,
    ) -> Result<GeneratedImage> {
        validate_request(request)?;
        let _busy = self.flag(Tool::Image).enter();

        tracing::info!(
            style = request.style.label(),
            publish = request.publish,
            "Generating image"
        );

        let reply = self
            .gateway
            .post_json::<_, ContentPayload>(credentials, Endpoint::GenerateImage, request)
            .await?;

        Ok(GeneratedImage {
            url: reply.data.content,
        })
    }

    /// Remove the described object from an uploaded image
    pub async fn remove_image_object(
        &self,
        credentials: &dyn CredentialProvider,
        request: RemoveObjectRequest,
    ) -> Result<GeneratedImage> {
        validate_request(&request)?;
        let _busy = self.flag(Tool::RemoveObject).enter();

        let object = request.object.trim().to_string();
        tracing::info!(
            file = %request.image.file_name,
            object = %object,
            "Removing object from image"
        );

        let form = Form::new()
            .part("image", request.image.into_part()?)
            .text("object", object);

        let reply = self
            .gateway
            .post_multipart::<ContentPayload>(credentials, Endpoint::RemoveImageObject, form)
            .await?;

        Ok(GeneratedImage {
            url: reply.data.content,
        })
    }

    /// Review an uploaded PDF resume
    pub async fn review_resume(
        &self,
        credentials: &dyn CredentialProvider,
        request: ResumeReviewRequest,
    ) -> Result<GeneratedText> {
        validate_request(&request)?;
        let _busy = self.flag(Tool::ResumeReview).enter();

        tracing::info!(file = %request.resume.file_name, "Reviewing resume");

        let form = Form::new().part("resume", request.resume.into_part()?);

        let reply = self
            .gateway
            .post_multipart::<ContentPayload>(credentials, Endpoint::ResumeReview, form)
            .await?;

        Ok(GeneratedText {
            content: reply.data.content,
        })
    }
}
