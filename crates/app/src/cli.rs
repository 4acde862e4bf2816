//! Command-line front end
//!
//! Each subcommand drives one store or tool and renders its result as plain
//! text. Errors are reported with their user-facing message.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use creatorkit_common::Error;
use creatorkit_creations::{
    CommunityStats, Creation, CreationBody, CreationId, DashboardStats, TypeFilter,
};
use creatorkit_generations::{
    ArticleLength, ArticleRequest, ArticleTone, BlogCategory, BlogTitleRequest, ImageRequest,
    ImageStyle, RemoveObjectRequest, ResumeReviewRequest, UploadFile,
};

use crate::App;

#[derive(Debug, Parser)]
#[command(author, version, about = "CreatorKit command-line client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List your own creations with dashboard stats
    Creations {
        /// Case-insensitive prompt search
        #[arg(long, default_value = "")]
        search: String,
        /// `all`, `image` or `text`
        #[arg(long = "type", default_value = "all")]
        kind: TypeFilter,
    },
    /// List published community creations with gallery stats
    Community {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long = "type", default_value = "all")]
        kind: TypeFilter,
    },
    /// Toggle your like on a published creation
    Like { id: CreationId },
    /// Write an article
    Article {
        topic: String,
        #[arg(long, default_value = "short")]
        length: ArticleLength,
        #[arg(long, default_value = "professional")]
        tone: ArticleTone,
    },
    /// Suggest blog titles for a keyword
    Titles {
        keyword: String,
        #[arg(long, default_value = "general")]
        category: BlogCategory,
    },
    /// Generate an image
    Image {
        prompt: String,
        #[arg(long, default_value = "realistic")]
        style: ImageStyle,
        /// Share the result in the community gallery
        #[arg(long)]
        publish: bool,
    },
    /// Remove an object from an image
    RemoveObject {
        image: PathBuf,
        /// One or two words naming the object
        object: String,
    },
    /// Review a PDF resume
    ReviewResume { resume: PathBuf },
}

/// Run one command against the app and render its output
pub async fn execute(app: &App, command: Command) -> anyhow::Result<String> {
    let credentials = app.credentials.as_ref();

    match command {
        Command::Creations { search, kind } => {
            app.creations
                .load(credentials)
                .await
                .map_err(user_facing)?;
            let items = app.creations.filtered_view(&search, kind);
            Ok(render_dashboard(&app.creations.stats(), &items))
        }
        Command::Community { search, kind } => {
            app.community
                .load(credentials)
                .await
                .map_err(user_facing)?;
            let items = app.community.filtered_view(&search, kind);
            Ok(render_community(&app.community.stats(), &items))
        }
        Command::Like { id } => {
            let toggle = app
                .community
                .toggle_like(credentials, id)
                .await
                .map_err(user_facing)?;

            let mut out = toggle
                .message
                .unwrap_or_else(|| "Like toggled".to_string());
            if let Some(creation) = app.community.find(id) {
                let _ = write!(out, " ({} likes)", creation.like_count());
            }
            Ok(out)
        }
        Command::Article {
            topic,
            length,
            tone,
        } => {
            let request = ArticleRequest {
                topic,
                length,
                tone,
            };
            let text = app
                .generations
                .generate_article(credentials, &request)
                .await
                .map_err(user_facing)?;
            tracing::info!(words = text.word_count(), "Article ready");
            Ok(text.content)
        }
        Command::Titles { keyword, category } => {
            let request = BlogTitleRequest { keyword, category };
            let text = app
                .generations
                .generate_blog_titles(credentials, &request)
                .await
                .map_err(user_facing)?;
            Ok(text.content)
        }
        Command::Image {
            prompt,
            style,
            publish,
        } => {
            let request = ImageRequest {
                prompt,
                style,
                publish,
            };
            let image = app
                .generations
                .generate_image(credentials, &request)
                .await
                .map_err(user_facing)?;
            Ok(image.url)
        }
        Command::RemoveObject { image, object } => {
            let image = UploadFile::from_path(&image).await.map_err(user_facing)?;
            let result = app
                .generations
                .remove_image_object(credentials, RemoveObjectRequest { image, object })
                .await
                .map_err(user_facing)?;
            Ok(result.url)
        }
        Command::ReviewResume { resume } => {
            let resume = UploadFile::from_path(&resume).await.map_err(user_facing)?;
            let review = app
                .generations
                .review_resume(credentials, ResumeReviewRequest { resume })
                .await
                .map_err(user_facing)?;
            Ok(review.content)
        }
    }
}

fn user_facing(error: Error) -> anyhow::Error {
    tracing::debug!(code = error.error_code(), error = %error, "Command failed");
    anyhow::anyhow!(error.user_message())
}

fn render_dashboard(stats: &DashboardStats, items: &[Creation]) -> String {
    let mut out = format!(
        "Total creations: {}  This month: {}  Images: {}\n",
        stats.total, stats.this_month, stats.images
    );
    for creation in items {
        let _ = writeln!(out, "{}", render_line(creation));
    }
    out
}

fn render_community(stats: &CommunityStats, items: &[Creation]) -> String {
    let mut out = format!(
        "Total creations: {}  Total likes: {}  Trending: {}\n",
        stats.total, stats.total_likes, stats.trending
    );
    for creation in items {
        let _ = writeln!(
            out,
            "{} by {} ({} likes)",
            render_line(creation),
            creation.creator_name(),
            creation.like_count()
        );
    }
    out
}

fn render_line(creation: &Creation) -> String {
    let body = match creation.body() {
        CreationBody::ImageUrl(url) => url.to_string(),
        CreationBody::Markdown(markdown) => format!("{} words", markdown.split_whitespace().count()),
    };
    format!(
        "#{} [{}] {} ({}) {}",
        creation.id,
        creation.kind,
        creation.prompt,
        creation.created_at.format("%Y-%m-%d"),
        body
    )
}
