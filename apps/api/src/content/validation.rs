use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::content::models::{
    Achievement, Education, Experience, Link, LinkType, PortfolioData, Profile, Project,
    SkillCategory,
};

static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9-]+$").expect("valid slug regex"));
static URI_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*:\S+$").expect("valid uri regex"));
static HTTP_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i:https?)://[^\s/?#]+(?:[/?#]\S*)?$").expect("valid http url regex")
});
static MAILTO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?i:mailto):[^\s@]+@[^\s@]+$").expect("valid mailto regex"));

pub const MIN_SKILL_LEVEL: i64 = 0;
pub const MAX_SKILL_LEVEL: i64 = 100;

/// One failed invariant: where it is (`projects[1].slug`) and what is wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub reason: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.reason)
    }
}

/// Every invariant the dataset breaks, collected in a single pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("portfolio content failed validation with {} violation(s)", .violations.len())]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl ValidationError {
    /// True if any violation sits at `path` or underneath it.
    #[cfg(test)]
    pub(crate) fn touches(&self, path: &str) -> bool {
        self.violations.iter().any(|v| {
            v.path == path
                || v.path
                    .strip_prefix(path)
                    .is_some_and(|rest| rest.starts_with('.') || rest.starts_with('['))
        })
    }
}

pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_RE.is_match(slug)
}

pub fn is_valid_uri(value: &str) -> bool {
    URI_RE.is_match(value)
}

pub fn is_http_url(value: &str) -> bool {
    HTTP_URL_RE.is_match(value)
}

pub fn is_mailto(value: &str) -> bool {
    MAILTO_RE.is_match(value)
}

#[derive(Default)]
struct Collector {
    violations: Vec<Violation>,
}

impl Collector {
    fn push(&mut self, path: impl Into<String>, reason: impl Into<String>) {
        self.violations.push(Violation {
            path: path.into(),
            reason: reason.into(),
        });
    }

    /// Records a violation if `value` is blank. Returns whether it had content.
    fn require_text(&mut self, path: &str, value: &str) -> bool {
        if value.trim().is_empty() {
            self.push(path, "is required and must not be empty");
            return false;
        }
        true
    }

    fn require_each(&mut self, path: &str, values: &[String]) {
        for (i, value) in values.iter().enumerate() {
            self.require_text(&format!("{path}[{i}]"), value);
        }
    }

    fn optional_url(
        &mut self,
        path: &str,
        value: Option<&str>,
        accept: fn(&str) -> bool,
        kind: &str,
    ) {
        let Some(value) = value else {
            return;
        };
        if value.trim().is_empty() {
            self.push(path, "must be omitted rather than left empty");
        } else if !accept(value) {
            self.push(path, format!("'{value}' is not a valid {kind}"));
        }
    }
}

/// Checks the full dataset, returning every violation found.
pub fn validate_portfolio(data: &PortfolioData) -> Result<(), ValidationError> {
    let mut c = Collector::default();

    validate_profile(&mut c, &data.profile);
    validate_links(&mut c, &data.links);
    validate_skills(&mut c, &data.skills);
    validate_projects(&mut c, &data.projects);
    for (i, entry) in data.experience.iter().enumerate() {
        validate_experience(&mut c, &format!("experience[{i}]"), entry);
    }
    for (i, entry) in data.education.iter().enumerate() {
        validate_education(&mut c, &format!("education[{i}]"), entry);
    }
    for (i, entry) in data.achievements.iter().enumerate() {
        validate_achievement(&mut c, &format!("achievements[{i}]"), entry);
    }

    if c.violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError {
            violations: c.violations,
        })
    }
}

fn validate_profile(c: &mut Collector, profile: &Profile) {
    c.require_text("profile.name", &profile.name);
    c.require_text("profile.title", &profile.title);
    c.require_text("profile.location", &profile.location);
    c.require_text("profile.shortBio", &profile.short_bio);
    c.require_text("profile.longBio", &profile.long_bio);
    c.require_text("profile.availabilityStatus", &profile.availability_status);
    let has_avatar = c.require_text("profile.avatarUrl", &profile.avatar_url);
    if has_avatar && !is_valid_uri(&profile.avatar_url) {
        c.push(
            "profile.avatarUrl",
            format!("'{}' is not a valid URI", profile.avatar_url),
        );
    }
}

fn validate_links(c: &mut Collector, links: &[Link]) {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();

    for (i, link) in links.iter().enumerate() {
        let path = format!("links[{i}]");
        let tag = link.kind.as_str();

        if tag.trim().is_empty() {
            c.push(format!("{path}.type"), "link type tag must not be empty");
        } else if let Some(first) = first_seen.get(tag) {
            c.push(
                format!("{path}.type"),
                format!("duplicate link type '{tag}' (first declared at links[{first}])"),
            );
        } else {
            first_seen.insert(tag, i);
        }

        c.require_text(&format!("{path}.label"), &link.label);

        let url_path = format!("{path}.url");
        if !c.require_text(&url_path, &link.url) {
            continue;
        }
        if tag == LinkType::Email.as_str() {
            if !is_mailto(&link.url) {
                c.push(
                    url_path,
                    format!("email link '{}' must use the mailto: scheme", link.url),
                );
            }
        } else if !is_http_url(&link.url) {
            c.push(url_path, format!("'{}' must be an http(s) URL", link.url));
        }
    }
}

fn validate_skills(c: &mut Collector, skills: &[SkillCategory]) {
    for (i, category) in skills.iter().enumerate() {
        let path = format!("skills[{i}]");
        c.require_text(&format!("{path}.category"), &category.category);

        let mut first_seen: HashMap<&str, usize> = HashMap::new();
        for (j, item) in category.items.iter().enumerate() {
            let item_path = format!("{path}.items[{j}]");

            if c.require_text(&format!("{item_path}.name"), &item.name) {
                if let Some(first) = first_seen.get(item.name.as_str()) {
                    c.push(
                        format!("{item_path}.name"),
                        format!(
                            "duplicate skill '{}' in category (first declared at {path}.items[{first}])",
                            item.name
                        ),
                    );
                } else {
                    first_seen.insert(item.name.as_str(), j);
                }
            }

            if !(MIN_SKILL_LEVEL..=MAX_SKILL_LEVEL).contains(&item.level) {
                c.push(
                    format!("{item_path}.level"),
                    format!(
                        "level {} is outside {MIN_SKILL_LEVEL}..={MAX_SKILL_LEVEL}",
                        item.level
                    ),
                );
            }
        }
    }
}

fn validate_projects(c: &mut Collector, projects: &[Project]) {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();

    for (i, project) in projects.iter().enumerate() {
        let path = format!("projects[{i}]");

        c.require_text(&format!("{path}.name"), &project.name);
        c.require_text(&format!("{path}.shortDescription"), &project.short_description);
        c.require_text(&format!("{path}.longDescription"), &project.long_description);
        c.require_text(&format!("{path}.role"), &project.role);
        c.require_each(&format!("{path}.techStack"), &project.tech_stack);
        c.require_each(&format!("{path}.highlights"), &project.highlights);

        let slug_path = format!("{path}.slug");
        if c.require_text(&slug_path, &project.slug) {
            if !is_valid_slug(&project.slug) {
                c.push(
                    slug_path.as_str(),
                    format!("slug '{}' must match [a-z0-9-]+", project.slug),
                );
            }
            if let Some(first) = first_seen.get(project.slug.as_str()) {
                c.push(
                    slug_path,
                    format!(
                        "duplicate slug '{}' (first declared at projects[{first}])",
                        project.slug
                    ),
                );
            } else {
                first_seen.insert(project.slug.as_str(), i);
            }
        }

        c.optional_url(
            &format!("{path}.sourceUrl"),
            project.source_url.as_deref(),
            is_http_url,
            "http(s) URL",
        );
        c.optional_url(
            &format!("{path}.liveUrl"),
            project.live_url.as_deref(),
            is_http_url,
            "http(s) URL",
        );
    }
}

fn validate_experience(c: &mut Collector, path: &str, entry: &Experience) {
    c.require_text(&format!("{path}.company"), &entry.company);
    c.require_text(&format!("{path}.role"), &entry.role);
    c.require_text(&format!("{path}.period"), &entry.period);
    c.require_text(&format!("{path}.location"), &entry.location);
    c.require_text(&format!("{path}.description"), &entry.description);
    c.require_each(&format!("{path}.responsibilities"), &entry.responsibilities);
}

fn validate_education(c: &mut Collector, path: &str, entry: &Education) {
    c.require_text(&format!("{path}.degree"), &entry.degree);
    c.require_text(&format!("{path}.institution"), &entry.institution);
    c.require_text(&format!("{path}.period"), &entry.period);
    c.require_text(&format!("{path}.description"), &entry.description);
}

fn validate_achievement(c: &mut Collector, path: &str, entry: &Achievement) {
    c.require_text(&format!("{path}.title"), &entry.title);
    c.require_text(&format!("{path}.description"), &entry.description);
    c.optional_url(
        &format!("{path}.link"),
        entry.link.as_deref(),
        is_valid_uri,
        "URI",
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fixtures::{sample_portfolio, sample_project};
    use crate::content::models::SkillItem;

    fn violations_of(data: &PortfolioData) -> Vec<Violation> {
        validate_portfolio(data)
            .expect_err("dataset should be rejected")
            .violations
    }

    #[test]
    fn test_sample_portfolio_is_valid() {
        assert!(validate_portfolio(&sample_portfolio()).is_ok());
    }

    #[test]
    fn test_slug_pattern() {
        assert!(is_valid_slug("web-monitoring"));
        assert!(is_valid_slug("v2"));
        assert!(!is_valid_slug("Web-Monitoring"));
        assert!(!is_valid_slug("ice factory"));
        assert!(!is_valid_slug("ice_factory"));
        assert!(!is_valid_slug(""));
    }

    #[test]
    fn test_url_checks() {
        assert!(is_http_url("https://github.com/someone"));
        assert!(is_http_url("HTTP://example.com"));
        assert!(is_http_url("https://example.com:8443/a?b=c#d"));
        assert!(!is_http_url("ftp://example.com"));
        assert!(!is_http_url("https://"));
        assert!(!is_http_url("https://exa mple.com"));
        assert!(is_mailto("mailto:someone@example.com"));
        assert!(!is_mailto("someone@example.com"));
        assert!(!is_mailto("mailto:someone"));
        assert!(is_valid_uri("https://picsum.photos/seed/a/200/200"));
        assert!(is_valid_uri("urn:isbn:0451450523"));
        assert!(!is_valid_uri("/images/avatar.png"));
        assert!(!is_valid_uri("not a uri"));
    }

    #[test]
    fn test_level_above_range_rejected() {
        let mut data = sample_portfolio();
        data.skills[0].items[1].level = 101;
        let err = validate_portfolio(&data).unwrap_err();
        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].path, "skills[0].items[1].level");
        assert!(err.violations[0].reason.contains("101"));
    }

    #[test]
    fn test_negative_level_rejected() {
        let mut data = sample_portfolio();
        data.skills[1].items[0].level = -1;
        let err = validate_portfolio(&data).unwrap_err();
        assert!(err.touches("skills[1].items[0]"));
    }

    #[test]
    fn test_level_bounds_inclusive() {
        let mut data = sample_portfolio();
        data.skills[0].items[0].level = 0;
        data.skills[0].items[1].level = 100;
        assert!(validate_portfolio(&data).is_ok());
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let mut data = sample_portfolio();
        data.projects = vec![sample_project("demo", true), sample_project("demo", false)];
        let v = violations_of(&data);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].path, "projects[1].slug");
        assert!(v[0].reason.contains("duplicate slug 'demo'"));
    }

    #[test]
    fn test_malformed_slug_rejected() {
        let mut data = sample_portfolio();
        data.projects[0].slug = "Web Monitoring".to_string();
        let v = violations_of(&data);
        assert_eq!(v[0].path, "projects[0].slug");
        assert!(v[0].reason.contains("[a-z0-9-]+"));
    }

    #[test]
    fn test_email_link_with_http_scheme_rejected() {
        let mut data = sample_portfolio();
        data.links[0].url = "https://example.com".to_string();
        let v = violations_of(&data);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].path, "links[0].url");
        assert!(v[0].reason.contains("mailto"));
    }

    #[test]
    fn test_non_email_link_requires_http() {
        let mut data = sample_portfolio();
        data.links[1].url = "mailto:ada@example.com".to_string();
        let v = violations_of(&data);
        assert_eq!(v[0].path, "links[1].url");
    }

    #[test]
    fn test_duplicate_link_type_rejected() {
        let mut data = sample_portfolio();
        data.links.push(Link {
            kind: LinkType::Github,
            label: "GitHub (work)".to_string(),
            url: "https://github.com/ada-work".to_string(),
        });
        let v = violations_of(&data);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].path, "links[2].type");
        assert!(v[0].reason.contains("links[1]"));
    }

    #[test]
    fn test_custom_link_type_accepted() {
        let mut data = sample_portfolio();
        data.links.push(Link {
            kind: LinkType::from("mastodon"),
            label: "Mastodon".to_string(),
            url: "https://hachyderm.io/@ada".to_string(),
        });
        assert!(validate_portfolio(&data).is_ok());
    }

    #[test]
    fn test_empty_link_type_rejected() {
        let mut data = sample_portfolio();
        data.links[1].kind = LinkType::default();
        assert!(validate_portfolio(&data).unwrap_err().touches("links[1].type"));
    }

    #[test]
    fn test_duplicate_skill_name_within_category() {
        let mut data = sample_portfolio();
        data.skills[0].items.push(SkillItem {
            name: "Rust".to_string(),
            level: 60,
        });
        let v = violations_of(&data);
        assert_eq!(v[0].path, "skills[0].items[2].name");
    }

    #[test]
    fn test_same_skill_name_across_categories_allowed() {
        let mut data = sample_portfolio();
        data.skills[1].items.push(SkillItem {
            name: "Rust".to_string(),
            level: 60,
        });
        assert!(validate_portfolio(&data).is_ok());
    }

    #[test]
    fn test_blank_required_fields_reported() {
        let mut data = sample_portfolio();
        data.profile.long_bio = "   ".to_string();
        data.experience[0].responsibilities.push(String::new());
        data.education[0].institution.clear();
        let v = violations_of(&data);
        let paths: Vec<_> = v.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "profile.longBio",
                "experience[0].responsibilities[1]",
                "education[0].institution",
            ]
        );
    }

    #[test]
    fn test_avatar_must_be_uri() {
        let mut data = sample_portfolio();
        data.profile.avatar_url = "avatar.png".to_string();
        assert!(validate_portfolio(&data).unwrap_err().touches("profile.avatarUrl"));
    }

    #[test]
    fn test_present_but_empty_optional_url_rejected() {
        let mut data = sample_portfolio();
        data.projects[1].live_url = Some(String::new());
        let v = violations_of(&data);
        assert_eq!(v[0].path, "projects[1].liveUrl");
        assert!(v[0].reason.contains("omitted"));
    }

    #[test]
    fn test_project_url_scheme_checked() {
        let mut data = sample_portfolio();
        data.projects[2].source_url = Some("git@github.com:ada/x.git".to_string());
        assert!(validate_portfolio(&data).unwrap_err().touches("projects[2].sourceUrl"));
    }

    #[test]
    fn test_all_violations_collected() {
        let mut data = sample_portfolio();
        data.profile.name.clear();
        data.links[0].url = "https://example.com".to_string();
        data.skills[0].items[0].level = 150;
        data.projects[2].slug = "web-monitoring".to_string();
        data.achievements[1].link = Some("nope".to_string());

        let err = validate_portfolio(&data).unwrap_err();
        assert_eq!(err.violations.len(), 5);
        for path in [
            "profile.name",
            "links[0].url",
            "skills[0].items[0].level",
            "projects[2].slug",
            "achievements[1].link",
        ] {
            assert!(err.touches(path), "missing violation at {path}");
        }
        assert!(err.to_string().contains("5 violation"));
    }

    #[test]
    fn test_touches_matches_whole_segments_only() {
        let err = ValidationError {
            violations: vec![Violation {
                path: "projects[10].slug".to_string(),
                reason: "bad".to_string(),
            }],
        };
        assert!(err.touches("projects[10]"));
        assert!(!err.touches("projects[1]"));
    }
}
