use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::{AppError, Result};

const DEFAULT_PORTFOLIO: &str = include_str!("../../../assets/portfolio.toml");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// `None` or `"#"` means the repository is not public yet.
    #[serde(default)]
    pub link: Option<String>,
}

impl Project {
    pub fn public_link(&self) -> Option<&str> {
        self.link.as_deref().filter(|l| !l.is_empty() && *l != "#")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PortfolioConfig {
    #[serde(default = "default_owner")]
    pub owner: String,

    #[serde(default = "default_title")]
    pub title: String,

    /// First word of the typing animation.
    #[serde(default = "default_subtitle")]
    pub subtitle: String,

    #[serde(default)]
    pub roles: Vec<String>,

    #[serde(default)]
    pub project_types: Vec<String>,

    #[serde(default)]
    /// FLTK symbol names drawn as the hero's floating icons.
    pub floating_icons: Vec<String>,

    #[serde(default)]
    pub sections: Vec<Section>,

    #[serde(default)]
    pub skills: Vec<SkillCategory>,

    #[serde(default)]
    pub projects: Vec<Project>,
}

fn default_owner() -> String {
    "Developer".to_string()
}

fn default_title() -> String {
    "Portfolio".to_string()
}

fn default_subtitle() -> String {
    "Software Engineer".to_string()
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_PORTFOLIO).unwrap_or_else(|e| {
            tracing::error!("Built-in portfolio is malformed: {}", e);
            Self {
                owner: default_owner(),
                title: default_title(),
                subtitle: default_subtitle(),
                roles: Vec::new(),
                project_types: Vec::new(),
                floating_icons: Vec::new(),
                sections: Vec::new(),
                skills: Vec::new(),
                projects: Vec::new(),
            }
        })
    }
}

impl PortfolioConfig {
    /// Load the user's portfolio override, falling back to the built-in one.
    pub fn load() -> Self {
        match Self::get_config_path() {
            Some(path) => Self::load_override(&path),
            None => {
                tracing::warn!("No config directory available, using the built-in portfolio");
                Self::default()
            }
        }
    }

    /// Read `path` if it exists, keeping the defaults when it is absent or malformed.
    pub fn load_override(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load {}: {}. Using defaults.", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        if let Some(dup) = config.duplicate_section_id() {
            return Err(AppError::Config(format!("duplicate section id '{}'", dup)));
        }
        Ok(config)
    }

    /// Words cycled by the hero typing animation.
    pub fn typing_words(&self) -> Vec<String> {
        std::iter::once(self.subtitle.clone())
            .chain(self.roles.iter().cloned())
            .collect()
    }

    pub fn section_ids(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.id.as_str()).collect()
    }

    fn duplicate_section_id(&self) -> Option<&str> {
        self.sections.iter().enumerate().find_map(|(i, s)| {
            self.sections[..i]
                .iter()
                .any(|prev| prev.id == s.id)
                .then_some(s.id.as_str())
        })
    }

    /// Get config file path (cross-platform). `None` when the platform
    /// has no config directory.
    pub fn get_config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("folio");
        path.push("portfolio.toml");
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_portfolio_parses() {
        let config = PortfolioConfig::parse(DEFAULT_PORTFOLIO).unwrap();
        assert_eq!(config.owner, "Shreyansh");
        assert_eq!(
            config.section_ids(),
            vec!["home", "about", "skills", "projects", "contact"]
        );
        assert_eq!(config.project_types.len(), 4);
        assert_eq!(config.projects.len(), 3);
    }

    #[test]
    fn test_typing_words_start_with_subtitle() {
        let config = PortfolioConfig::default();
        let words = config.typing_words();
        assert_eq!(words[0], config.subtitle);
        assert_eq!(&words[1..], config.roles.as_slice());
    }

    #[test]
    fn test_partial_config() {
        let config = PortfolioConfig::parse(r#"owner = "Grace""#).unwrap();
        assert_eq!(config.owner, "Grace");
        assert_eq!(config.title, "Portfolio");
        assert!(config.sections.is_empty());
    }

    #[test]
    fn test_duplicate_section_rejected() {
        let toml = r#"
            [[sections]]
            id = "about"
            title = "About"

            [[sections]]
            id = "about"
            title = "Again"
        "#;
        let err = PortfolioConfig::parse(toml).unwrap_err();
        assert!(err.to_string().contains("duplicate section id 'about'"));
    }

    #[test]
    fn test_public_link() {
        let hidden = Project {
            name: "A".into(),
            description: String::new(),
            link: Some("#".into()),
        };
        let missing = Project { link: None, ..hidden.clone() };
        let public = Project {
            link: Some("https://example.com".into()),
            ..hidden.clone()
        };
        assert_eq!(hidden.public_link(), None);
        assert_eq!(missing.public_link(), None);
        assert_eq!(public.public_link(), Some("https://example.com"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.toml");
        fs::write(&path, "owner = \"Linus\"\nroles = [\"Kernel Hacker\"]\n").unwrap();
        let config = PortfolioConfig::load_from(&path).unwrap();
        assert_eq!(config.typing_words(), vec!["Software Engineer", "Kernel Hacker"]);
    }

    #[test]
    fn test_missing_override_keeps_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let config = PortfolioConfig::load_override(&dir.path().join("portfolio.toml"));
        assert_eq!(config, PortfolioConfig::default());
    }

    #[test]
    fn test_malformed_override_keeps_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.toml");
        fs::write(&path, "owner = ").unwrap();
        assert_eq!(PortfolioConfig::load_override(&path), PortfolioConfig::default());
    }

    #[test]
    fn test_config_path_lives_under_config_dir() {
        match (PortfolioConfig::get_config_path(), dirs::config_dir()) {
            (Some(path), Some(dir)) => {
                assert!(path.starts_with(dir));
                assert!(path.ends_with("folio/portfolio.toml"));
            }
            (None, None) => {}
            (path, dir) => panic!("config path {:?} disagrees with config dir {:?}", path, dir),
        }
    }
}
