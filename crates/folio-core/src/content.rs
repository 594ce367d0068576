//! Site content: phrases, sections, projects, testimonials and layout.
//!
//! The built-in content mirrors a typical one-page portfolio. A JSON file
//! with the same shape can replace it; it is validated before use.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::FolioError;

/// A vertical page section a nav link points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Anchor id, linked as `#id`.
    pub id: String,
    /// Nav link label.
    pub title: String,
    /// Offset of the section top in px.
    pub top: u32,
    /// Section height in px.
    pub height: u32,
}

/// A portfolio project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    /// Filter category the card belongs to.
    pub category: String,
    #[serde(default)]
    pub summary: String,
}

/// A testimonial shown in the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    #[serde(default)]
    pub role: String,
}

/// An element that fades in once scrolled into view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealBlock {
    pub id: String,
    pub top: u32,
    pub height: u32,
}

/// An image whose source is loaded on first intersection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LazyImageSpec {
    pub id: String,
    pub top: u32,
    pub height: u32,
    /// Deferred source.
    pub src: String,
}

/// A parallax layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParallaxLayer {
    pub id: String,
    /// Scroll speed factor; the default applies when absent.
    #[serde(default)]
    pub speed: Option<f64>,
}

/// Everything the page renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub owner: String,
    /// Phrases cycled by the typing animation.
    pub phrases: Vec<String>,
    /// Sections in document order.
    pub sections: Vec<Section>,
    #[serde(default)]
    pub projects: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub reveal: Vec<RevealBlock>,
    #[serde(default)]
    pub images: Vec<LazyImageSpec>,
    #[serde(default)]
    pub parallax: Vec<ParallaxLayer>,
    /// Number of floating hero cards.
    #[serde(default)]
    pub floating_cards: usize,
    /// Number of elements with a staggered entrance animation.
    #[serde(default)]
    pub entrance_elements: usize,
    pub document_height: u32,
    pub viewport_height: u32,
}

impl SiteContent {
    /// Parse and validate content from JSON.
    pub fn from_json(json: &str) -> Result<Self, FolioError> {
        let content: Self =
            serde_json::from_str(json).map_err(|e| FolioError::Content(e.to_string()))?;
        content.validate()?;
        Ok(content)
    }

    /// Load and validate content from a JSON file.
    pub fn load(path: &Path) -> Result<Self, FolioError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, FolioError> {
        serde_json::to_string_pretty(self).map_err(|e| FolioError::Content(e.to_string()))
    }

    /// Check the invariants the page components rely on.
    pub fn validate(&self) -> Result<(), FolioError> {
        if self.phrases.is_empty() {
            return Err(FolioError::EmptyPhrases);
        }
        if self.testimonials.is_empty() {
            return Err(FolioError::NoSlides);
        }
        if self.viewport_height == 0 {
            return Err(FolioError::Content("viewport height must be positive".into()));
        }
        if self.document_height < self.viewport_height {
            return Err(FolioError::Content(format!(
                "document height {} is smaller than viewport height {}",
                self.document_height, self.viewport_height
            )));
        }
        for pair in self.sections.windows(2) {
            if pair[1].top < pair[0].top {
                return Err(FolioError::Content(format!(
                    "section '{}' starts above section '{}'",
                    pair[1].id, pair[0].id
                )));
            }
        }
        if let Some(layer) = self
            .parallax
            .iter()
            .find(|l| l.speed.is_some_and(|s| !s.is_finite()))
        {
            return Err(FolioError::Content(format!(
                "parallax layer '{}' has a non-finite speed",
                layer.id
            )));
        }
        Ok(())
    }

    /// Section whose anchor is `id` (with or without leading `#`).
    #[must_use]
    pub fn section(&self, id: &str) -> Option<&Section> {
        let id = id.strip_prefix('#').unwrap_or(id);
        self.sections.iter().find(|s| s.id == id)
    }
}

fn section(id: &str, title: &str, top: u32, height: u32) -> Section {
    Section {
        id: id.to_string(),
        title: title.to_string(),
        top,
        height,
    }
}

fn project(title: &str, category: &str, summary: &str) -> Project {
    Project {
        title: title.to_string(),
        category: category.to_string(),
        summary: summary.to_string(),
    }
}

fn testimonial(quote: &str, author: &str, role: &str) -> Testimonial {
    Testimonial {
        quote: quote.to_string(),
        author: author.to_string(),
        role: role.to_string(),
    }
}

fn block(id: &str, top: u32, height: u32) -> RevealBlock {
    RevealBlock {
        id: id.to_string(),
        top,
        height,
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            owner: "Alex Morgan".to_string(),
            phrases: vec![
                "Software Developer & UI/UX Designer".to_string(),
                "Crafting Digital Experiences".to_string(),
                "Full-Stack Developer".to_string(),
                "Creative Problem Solver".to_string(),
            ],
            sections: vec![
                section("home", "Home", 0, 900),
                section("about", "About", 900, 700),
                section("skills", "Skills", 1600, 800),
                section("services", "Services", 2400, 700),
                section("projects", "Projects", 3100, 1000),
                section("testimonials", "Testimonials", 4100, 600),
                section("contact", "Contact", 4700, 800),
            ],
            projects: vec![
                project("Storefront", "web", "Headless e-commerce front-end"),
                project("Trail Log", "mobile", "Offline-first hiking journal"),
                project("Brand Refresh", "design", "Identity system for a coffee roaster"),
                project("Dashboard Kit", "web", "Composable analytics widgets"),
                project("Habit Loop", "mobile", "Streak tracker with reminders"),
                project("Type Specimen", "design", "Variable font showcase"),
            ],
            testimonials: vec![
                testimonial(
                    "Delivered a polished product ahead of schedule.",
                    "Jordan Lee",
                    "Product Manager",
                ),
                testimonial(
                    "A rare mix of engineering rigor and design taste.",
                    "Sam Rivera",
                    "CTO",
                ),
                testimonial(
                    "Our conversion rate doubled after the redesign.",
                    "Priya Patel",
                    "Founder",
                ),
            ],
            reveal: vec![
                block("skill-frontend", 1700, 300),
                block("skill-backend", 1700, 300),
                block("skill-tools", 2050, 300),
                block("service-web", 2500, 250),
                block("service-mobile", 2500, 250),
                block("service-design", 2800, 250),
                block("project-storefront", 3250, 350),
                block("project-trail-log", 3250, 350),
                block("project-brand-refresh", 3650, 350),
            ],
            images: vec![
                LazyImageSpec {
                    id: "about-portrait".to_string(),
                    top: 1000,
                    height: 400,
                    src: "images/portrait.webp".to_string(),
                },
                LazyImageSpec {
                    id: "project-storefront".to_string(),
                    top: 3270,
                    height: 200,
                    src: "images/storefront.webp".to_string(),
                },
            ],
            parallax: vec![
                ParallaxLayer {
                    id: "hero-shapes".to_string(),
                    speed: None,
                },
                ParallaxLayer {
                    id: "hero-glow".to_string(),
                    speed: Some(0.2),
                },
            ],
            floating_cards: 3,
            entrance_elements: 3,
            document_height: 5500,
            viewport_height: 900,
        }
    }
}
