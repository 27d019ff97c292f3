//! Small, valid datasets shared by the unit tests.

use super::models::*;

pub fn sample_project(slug: &str, featured: bool) -> Project {
    Project {
        name: format!("Project {slug}"),
        slug: slug.to_string(),
        short_description: "Short description".to_string(),
        long_description: "Longer description of the project".to_string(),
        tech_stack: vec!["Rust".to_string(), "axum".to_string()],
        role: "Developer".to_string(),
        highlights: vec!["Shipped it".to_string()],
        source_url: Some(format!("https://github.com/someone/{slug}")),
        live_url: None,
        is_featured: featured,
    }
}

pub fn sample_portfolio() -> PortfolioData {
    PortfolioData {
        profile: Profile {
            name: "Ada Example".to_string(),
            title: "Backend Engineer".to_string(),
            location: "Remote".to_string(),
            short_bio: "Builds services.".to_string(),
            long_bio: "Builds services and the tools around them.".to_string(),
            avatar_url: "https://example.com/avatar.png".to_string(),
            availability_status: "Open to work".to_string(),
        },
        links: vec![
            Link {
                kind: LinkType::Email,
                label: "Email".to_string(),
                url: "mailto:ada@example.com".to_string(),
            },
            Link {
                kind: LinkType::Github,
                label: "GitHub".to_string(),
                url: "https://github.com/ada".to_string(),
            },
        ],
        skills: vec![
            SkillCategory {
                category: "Backend".to_string(),
                items: vec![
                    SkillItem {
                        name: "Rust".to_string(),
                        level: 85,
                    },
                    SkillItem {
                        name: "SQL".to_string(),
                        level: 70,
                    },
                ],
            },
            SkillCategory {
                category: "Tools".to_string(),
                items: vec![SkillItem {
                    name: "Git".to_string(),
                    level: 90,
                }],
            },
        ],
        projects: vec![
            sample_project("web-monitoring", true),
            sample_project("studynotion", false),
            sample_project("ice-factory", true),
        ],
        experience: vec![Experience {
            company: "Freelance".to_string(),
            role: "Developer".to_string(),
            period: "2025 - Present".to_string(),
            location: "Remote".to_string(),
            description: "Client work.".to_string(),
            responsibilities: vec!["Built APIs".to_string()],
        }],
        education: vec![Education {
            degree: "B.Tech Computer Science".to_string(),
            institution: "Example College".to_string(),
            period: "2022 - 2026".to_string(),
            description: "Systems focus.".to_string(),
        }],
        achievements: vec![
            Achievement {
                title: "Hackathon Winner".to_string(),
                description: "First place.".to_string(),
                link: None,
            },
            Achievement {
                title: "LeetCode".to_string(),
                description: "230+ problems.".to_string(),
                link: Some("https://leetcode.com/u/ada/".to_string()),
            },
        ],
    }
}
