//! Page copy and structure, embedded as JSON at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! Markup components stay generic; names, sections, skills and projects live
//! in `content/portfolio.json`. The document is validated on load so a typo
//! in a skill level or a duplicated section id surfaces as a `ContentError`
//! rather than a half-rendered page.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

const PORTFOLIO_JSON: &str = include_str!("../content/portfolio.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("portfolio content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("skill {skill:?} has level {level}, expected 0-100")]
    SkillLevelOutOfRange { skill: String, level: u32 },

    #[error("section id {0:?} appears more than once")]
    DuplicateSection(String),

    #[error("section ids must not be empty")]
    EmptySectionId,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PortfolioContent {
    pub owner: Owner,
    pub sections: Vec<SectionLink>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    pub contact: ContactInfo,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Owner {
    pub name: String,
    pub title: String,
    pub tagline: String,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub resume_href: Option<String>,
}

/// Navbar entry; `id` matches a rendered `section[id]`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SectionLink {
    pub id: String,
    pub label: String,
}

impl SectionLink {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub href: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    #[serde(default)]
    pub location: Option<String>,
}

impl PortfolioContent {
    fn validate(&self) -> Result<(), ContentError> {
        for skill in &self.skills {
            if skill.level > 100 {
                return Err(ContentError::SkillLevelOutOfRange { skill: skill.name.clone(), level: skill.level });
            }
        }

        let mut seen = HashSet::new();
        for section in &self.sections {
            if section.id.trim().is_empty() {
                return Err(ContentError::EmptySectionId);
            }
            if !seen.insert(section.id.as_str()) {
                return Err(ContentError::DuplicateSection(section.id.clone()));
            }
        }
        Ok(())
    }
}

/// Parse and validate a content document.
pub fn parse(raw: &str) -> Result<PortfolioContent, ContentError> {
    let content: PortfolioContent = serde_json::from_str(raw)?;
    content.validate()?;
    Ok(content)
}

/// The embedded portfolio document.
pub fn load() -> Result<PortfolioContent, ContentError> {
    parse(PORTFOLIO_JSON)
}
