use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::content::models::{
    Achievement, Education, Experience, Link, LinkType, PortfolioData, Profile, Project,
    SkillCategory,
};
use crate::content::validation::{validate_portfolio, ValidationError};

/// Selection applied by [`ContentStore::projects`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectFilter {
    #[serde(default)]
    pub featured_only: bool,
}

impl ProjectFilter {
    pub fn featured() -> Self {
        Self {
            featured_only: true,
        }
    }

    fn accepts(&self, project: &Project) -> bool {
        !self.featured_only || project.is_featured
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no project with slug '{slug}'")]
pub struct NotFound {
    pub slug: String,
}

/// Validated, read-only portfolio content.
///
/// Built once through [`ContentStore::load`]; nothing mutates it afterwards, so
/// it can be shared across threads behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct ContentStore {
    data: PortfolioData,
    slug_index: HashMap<String, usize>,
}

impl ContentStore {
    /// Validates `data` and takes ownership of it. Any violation aborts
    /// construction; there is no partially usable store.
    pub fn load(data: PortfolioData) -> Result<Self, ValidationError> {
        validate_portfolio(&data)?;

        let slug_index = data
            .projects
            .iter()
            .enumerate()
            .map(|(i, p)| (p.slug.clone(), i))
            .collect();

        info!(
            links = data.links.len(),
            skill_categories = data.skills.len(),
            projects = data.projects.len(),
            featured = data.projects.iter().filter(|p| p.is_featured).count(),
            experience = data.experience.len(),
            education = data.education.len(),
            achievements = data.achievements.len(),
            "Portfolio content loaded for {}",
            data.profile.name
        );

        Ok(Self { data, slug_index })
    }

    pub fn profile(&self) -> &Profile {
        &self.data.profile
    }

    pub fn links(&self) -> &[Link] {
        &self.data.links
    }

    /// Link types are unique, so at most one link matches.
    pub fn link_by_type(&self, kind: &LinkType) -> Option<&Link> {
        self.data
            .links
            .iter()
            .find(|l| l.kind.as_str() == kind.as_str())
    }

    pub fn skills(&self) -> &[SkillCategory] {
        &self.data.skills
    }

    /// Projects in declaration order, optionally narrowed to featured ones.
    pub fn projects(&self, filter: ProjectFilter) -> Vec<&Project> {
        self.data
            .projects
            .iter()
            .filter(|p| filter.accepts(p))
            .collect()
    }

    pub fn project_by_slug(&self, slug: &str) -> Result<&Project, NotFound> {
        self.slug_index
            .get(slug)
            .map(|&i| &self.data.projects[i])
            .ok_or_else(|| NotFound {
                slug: slug.to_string(),
            })
    }

    pub fn experience(&self) -> &[Experience] {
        &self.data.experience
    }

    pub fn education(&self) -> &[Education] {
        &self.data.education
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.data.achievements
    }

    /// The whole validated dataset.
    pub fn snapshot(&self) -> &PortfolioData {
        &self.data
    }
}
