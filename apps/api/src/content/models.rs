use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Kind of contact or profile link. Unknown tags are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LinkType {
    Email,
    Github,
    Linkedin,
    Portfolio,
    Other(String),
}

impl LinkType {
    pub fn as_str(&self) -> &str {
        match self {
            LinkType::Email => "email",
            LinkType::Github => "github",
            LinkType::Linkedin => "linkedin",
            LinkType::Portfolio => "portfolio",
            LinkType::Other(tag) => tag,
        }
    }
}

impl Default for LinkType {
    fn default() -> Self {
        LinkType::Other(String::new())
    }
}

impl From<String> for LinkType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "email" => LinkType::Email,
            "github" => LinkType::Github,
            "linkedin" => LinkType::Linkedin,
            "portfolio" => LinkType::Portfolio,
            _ => LinkType::Other(tag),
        }
    }
}

impl From<&str> for LinkType {
    fn from(tag: &str) -> Self {
        LinkType::from(tag.to_string())
    }
}

impl From<LinkType> for String {
    fn from(kind: LinkType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub location: String,
    pub short_bio: String,
    pub long_bio: String,
    pub avatar_url: String,
    pub availability_status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    #[serde(rename = "type")]
    pub kind: LinkType,
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillItem {
    pub name: String,
    /// Proficiency on a 0–100 scale. Signed so out-of-range input reaches validation.
    pub level: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<SkillItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub slug: String,
    pub short_description: String,
    pub long_description: String,
    pub tech_stack: Vec<String>,
    pub role: String,
    pub highlights: Vec<String>,
    #[serde(
        alias = "githubUrl",
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_url: Option<String>,
    #[serde(
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub live_url: Option<String>,
    pub is_featured: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub company: String,
    pub role: String,
    /// Free-text date range, e.g. "2025 - Present".
    pub period: String,
    pub location: String,
    pub description: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    #[serde(
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub link: Option<String>,
}

/// The complete dataset behind the portfolio site, before or after validation.
///
/// Missing keys deserialize to empty values so that validation can report
/// every gap at once rather than failing on the first absent key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioData {
    pub profile: Profile,
    pub links: Vec<Link>,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub achievements: Vec<Achievement>,
}

/// Older content files mark an absent URL with `""`; read those as `None`.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
