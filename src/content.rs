//! Static site content, embedded at compile time and validated once at start.

use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

const SITE_JSON: &str = include_str!("../content/site.json");
const FEATURED_PROJECT_COUNT: usize = 4;
const PARTNER_CARD_PROJECT_CYCLE: usize = 5;

pub type ProjectId = u32;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid content JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no projects configured")]
    NoProjects,
    #[error("duplicate project id {0}")]
    DuplicateProject(ProjectId),
    #[error("project {0} has no images")]
    ProjectWithoutImages(ProjectId),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub category: String,
    pub location: String,
    pub year: String,
    pub description: String,
    pub images: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Stat {
    pub end: u32,
    pub label: String,
    #[serde(default = "default_stat_suffix")]
    pub suffix: String,
}

fn default_stat_suffix() -> String {
    "+".to_string()
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MenuItem {
    pub label: String,
    pub section: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Client {
    pub name: String,
    pub description: String,
    pub image: String,
    pub logo: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Era {
    pub year: String,
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SiteMapEntry {
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SiteMapGroup {
    pub category: String,
    pub items: Vec<SiteMapEntry>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Specified,
    Unspecified,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChangelogEntry {
    pub date: String,
    pub title: String,
    pub items: Vec<String>,
    #[serde(rename = "type")]
    pub kind: ChangeKind,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SiteContent {
    pub projects: Vec<Project>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub menu: Vec<MenuItem>,
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub eras: Vec<Era>,
    #[serde(default)]
    pub sitemap: Vec<SiteMapGroup>,
    #[serde(default)]
    pub changelog: Vec<ChangelogEntry>,
}

impl SiteContent {
    pub fn load() -> Result<Self, ContentError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.projects.is_empty() {
            return Err(ContentError::NoProjects);
        }

        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id) {
                return Err(ContentError::DuplicateProject(project.id));
            }
            if project.images.is_empty() {
                return Err(ContentError::ProjectWithoutImages(project.id));
            }
        }

        Ok(())
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn contains_project(&self, id: ProjectId) -> bool {
        self.project(id).is_some()
    }

    pub fn featured(&self) -> &[Project] {
        let count = self.projects.len().min(FEATURED_PROJECT_COUNT);
        &self.projects[..count]
    }

    /// Showcase order is newest-added first.
    pub fn showcase(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().rev()
    }

    /// Project opened by the n-th card of a client's portfolio strip.
    pub fn partner_card_project(&self, card_index: usize) -> Option<&Project> {
        let cycle = self.projects.len().min(PARTNER_CARD_PROJECT_CYCLE);
        self.projects.get(card_index % cycle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_loads_and_validates() {
        let content = SiteContent::load().expect("embedded content is valid");

        assert_eq!(content.projects.len(), 6);
        assert_eq!(content.stats.len(), 4);
        assert_eq!(content.stats[2].suffix, "");
        assert_eq!(content.stats[0].suffix, "+");
        assert_eq!(content.menu[1].section, "featured-categories");
    }

    #[test]
    fn skyline_harbor_has_two_images() {
        let content = SiteContent::load().expect("embedded content is valid");
        let project = content.project(4).expect("project 4 exists");

        assert_eq!(project.title, "Skyline Harbor");
        assert_eq!(project.images.len(), 2);
        assert!(!content.contains_project(99));
    }

    #[test]
    fn duplicate_project_ids_are_rejected() {
        let raw = r#"{"projects": [
            {"id": 1, "title": "a", "category": "c", "location": "l", "year": "y", "description": "d", "images": ["x"]},
            {"id": 1, "title": "b", "category": "c", "location": "l", "year": "y", "description": "d", "images": ["y"]}
        ]}"#;

        let result = SiteContent::from_json(raw);
        assert!(matches!(result, Err(ContentError::DuplicateProject(1))));
    }

    #[test]
    fn project_without_images_is_rejected() {
        let raw = r#"{"projects": [
            {"id": 7, "title": "a", "category": "c", "location": "l", "year": "y", "description": "d", "images": []}
        ]}"#;

        let result = SiteContent::from_json(raw);
        assert!(matches!(result, Err(ContentError::ProjectWithoutImages(7))));
    }

    #[test]
    fn empty_project_list_is_rejected() {
        let result = SiteContent::from_json(r#"{"projects": []}"#);
        assert!(matches!(result, Err(ContentError::NoProjects)));
    }

    #[test]
    fn showcase_reverses_and_featured_takes_first_four() {
        let content = SiteContent::load().expect("embedded content is valid");

        let showcase: Vec<ProjectId> = content.showcase().map(|project| project.id).collect();
        assert_eq!(showcase, vec![5, 4, 3, 2, 1, 0]);

        let featured: Vec<ProjectId> = content.featured().iter().map(|project| project.id).collect();
        assert_eq!(featured, vec![0, 1, 2, 3]);
    }

    #[test]
    fn partner_cards_cycle_through_first_five_projects() {
        let content = SiteContent::load().expect("embedded content is valid");

        assert_eq!(content.partner_card_project(0).map(|p| p.id), Some(0));
        assert_eq!(content.partner_card_project(2).map(|p| p.id), Some(2));
        assert_eq!(content.partner_card_project(6).map(|p| p.id), Some(1));
    }
}
