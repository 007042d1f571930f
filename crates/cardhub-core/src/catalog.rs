//! Card and tab catalog.
//!
//! The catalog is the page's markup in data form: which tabs exist, which
//! cards exist, and the attributes each carries. Attribute presence is the
//! only validation performed.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::read_json;
use crate::error::{HubError, HubResult};

/// Sentinel category that matches every card.
pub const ALL_CATEGORY: &str = "all";

/// One filter tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabSpec {
    pub label: String,
    /// Bound category; absent means the empty category.
    #[serde(default)]
    pub category: Option<String>,
}

impl TabSpec {
    pub fn new(label: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            category: Some(category.into()),
        }
    }
}

/// One card tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSpec {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    /// Space-separated category tags.
    #[serde(default)]
    pub categories: Option<String>,
    /// Disabled cards are "coming soon": no hover, no link.
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub link: Option<String>,
}

impl CardSpec {
    pub fn new(title: impl Into<String>, categories: Option<&str>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            icon: String::new(),
            categories: categories.map(str::to_string),
            disabled: false,
            link: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Page content: heading, tabs and cards in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub tabs: Vec<TabSpec>,
    #[serde(default)]
    pub cards: Vec<CardSpec>,
}

impl Catalog {
    /// Load a catalog file.
    pub fn load(path: impl AsRef<Path>) -> HubResult<Self> {
        let catalog: Catalog = read_json(path.as_ref())?;
        if catalog.title.trim().is_empty() {
            return Err(HubError::InvalidCatalog("title is empty".to_string()));
        }
        Ok(catalog)
    }

    /// Load `path` if given, falling back to the built-in catalog.
    pub fn load_or_builtin(path: Option<&Path>) -> Self {
        match path {
            Some(path) => match Self::load(path) {
                Ok(catalog) => {
                    tracing::info!(
                        path = %path.display(),
                        cards = catalog.cards.len(),
                        "Loaded catalog"
                    );
                    catalog
                }
                Err(e) => {
                    tracing::warn!("Using built-in catalog: {}", e);
                    Self::builtin()
                }
            },
            None => Self::builtin(),
        }
    }

    /// The AI design tools hub shipped with the app.
    pub fn builtin() -> Self {
        Self {
            title: "AI Design Tools Hub".to_string(),
            subtitle: "Curated AI tools for the design workflow".to_string(),
            tabs: vec![
                TabSpec::new("All", ALL_CATEGORY),
                TabSpec::new("Images", "images"),
                TabSpec::new("Video", "video"),
                TabSpec::new("3D", "3d"),
                TabSpec::new("UI", "ui"),
            ],
            cards: vec![
                CardSpec::new("Midjourney", Some("images"))
                    .with_icon("\u{1F3A8}")
                    .with_description("Text-to-image generation with a strong painterly style")
                    .with_link("https://www.midjourney.com"),
                CardSpec::new("Runway", Some("video images"))
                    .with_icon("\u{1F3AC}")
                    .with_description("Generative video editing and image-to-video")
                    .with_link("https://runwayml.com"),
                CardSpec::new("Pika", Some("video"))
                    .with_icon("\u{26A1}")
                    .with_description("Short-form video generation from prompts")
                    .with_link("https://pika.art"),
                CardSpec::new("Spline AI", Some("3d"))
                    .with_icon("\u{1F9CA}")
                    .with_description("Prompt-driven 3D scenes for the web")
                    .with_link("https://spline.design"),
                CardSpec::new("Galileo AI", Some("ui"))
                    .with_icon("\u{1F4F1}")
                    .with_description("Interface mockups generated from descriptions")
                    .with_link("https://www.usegalileo.ai"),
                CardSpec::new("Texture Lab", Some("3d images"))
                    .with_icon("\u{1F9F1}")
                    .with_description("Seamless material textures for 3D work")
                    .disabled(),
                CardSpec::new("Motion Kit", Some("video ui"))
                    .with_icon("\u{1F300}")
                    .with_description("Micro-interaction animation from static frames")
                    .disabled(),
            ],
        }
    }

    /// Index of the first tab bound to `category`, if any.
    pub fn tab_index(&self, category: &str) -> Option<usize> {
        self.tabs
            .iter()
            .position(|tab| tab.category.as_deref() == Some(category))
    }
}
