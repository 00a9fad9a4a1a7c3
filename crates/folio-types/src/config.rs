//! Site configuration: prompt, navigable pages, and the profile content the
//! portfolio commands print.
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! usable configuration. Files ending in `.json` are parsed as JSON, anything
//! else as TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Prompt printed before each echoed command.
    pub prompt: String,
    /// Pages `cd` may navigate to (the allow-list).
    pub pages: Vec<String>,
    /// Content shown by the portfolio commands.
    pub profile: Profile,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            prompt: "guest@folio:~$".to_string(),
            pages: ["blog", "resume", "projects", "contact"]
                .iter()
                .map(|p| p.to_string())
                .collect(),
            profile: Profile::default(),
        }
    }
}

impl FolioConfig {
    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config = if is_json {
            Self::from_json_str(&text)?
        } else {
            Self::from_toml_str(&text)?
        };
        log::info!(
            "Loaded config from {} ({} pages)",
            path.display(),
            config.pages.len()
        );
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the page allow-list.
    ///
    /// Page identifiers are matched against lowercased user input, so they
    /// must themselves be lowercase and free of whitespace and slashes.
    pub fn validate(&self) -> Result<()> {
        if self.pages.is_empty() {
            return Err(FolioError::Config("pages must not be empty".to_string()));
        }
        for page in &self.pages {
            let valid = !page.is_empty()
                && page
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
            if !valid {
                return Err(FolioError::Config(format!("invalid page identifier: {page:?}")));
            }
        }
        Ok(())
    }
}

/// The person the site is about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    /// One-line summary under the banner.
    pub tagline: String,
    /// Output of `whoami`.
    pub whoami: String,
    /// Paragraph lines for `about`.
    pub about: Vec<String>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<ProjectInfo>,
    pub posts: Vec<PostInfo>,
    pub contact: Vec<Link>,
    pub social: Vec<Link>,
    /// Output of `pwd`.
    pub home_dir: String,
    /// Names listed by `ls`; a trailing `/` marks a directory.
    pub files: Vec<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Folio".to_string(),
            tagline: "Software Engineer | Problem Solver | Tech Enthusiast".to_string(),
            whoami: "guest".to_string(),
            about: vec![
                "I'm a software engineer who enjoys building tools and systems.".to_string(),
                "I'm always curious about new technologies and fields.".to_string(),
            ],
            skills: vec![
                SkillGroup {
                    label: "Languages".to_string(),
                    items: vec!["Rust".to_string(), "Python".to_string(), "Go".to_string()],
                },
                SkillGroup {
                    label: "DevOps".to_string(),
                    items: vec!["CI/CD".to_string(), "Docker".to_string(), "Linux".to_string()],
                },
            ],
            projects: vec![ProjectInfo {
                name: "folio".to_string(),
                summary: "This terminal interface website".to_string(),
            }],
            posts: vec![PostInfo {
                title: "Building a Terminal Interface".to_string(),
                date: "2025-11".to_string(),
            }],
            contact: vec![Link {
                label: "Email".to_string(),
                value: "hello@example.com".to_string(),
            }],
            social: vec![Link {
                label: "GitHub".to_string(),
                value: "github.com/folio-term".to_string(),
            }],
            home_dir: "/home/guest/portfolio".to_string(),
            files: vec![
                "about/".to_string(),
                "projects/".to_string(),
                "resume.pdf".to_string(),
                "README.md".to_string(),
            ],
        }
    }
}

/// A labelled group of skills (`Languages: Rust, Go`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub label: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub name: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostInfo {
    pub title: String,
    #[serde(default)]
    pub date: String,
}

/// A labelled contact or social link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub value: String,
}
