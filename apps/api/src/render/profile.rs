//! Composer for a structured `ResumeProfile`.
//!
//! Layout: title, contact links, then Skills, Experience, Education, Projects and
//! Certifications in that order. A section with nothing in it is left out entirely,
//! and blank description lines never produce a bullet.

use crate::layout::{profile_page, Font, Span};
use crate::models::profile::{Education, Experience, Project, ResumeProfile};
use crate::render::flow::Flow;
use crate::render::style::{Align, Rgb, TextStyle};
use crate::render::RenderError;

const TITLE: TextStyle = TextStyle {
    space_after_pt: 12.0,
    color: Rgb::DARK_BLUE,
    align: Align::Center,
    ..TextStyle::plain(Font::HelveticaBold, 18.0, 22.0)
};

const HEADING: TextStyle = TextStyle {
    space_before_pt: 10.0,
    space_after_pt: 6.0,
    color: Rgb::DARK_BLUE,
    ..TextStyle::plain(Font::HelveticaBold, 14.0, 17.0)
};

const NORMAL: TextStyle = TextStyle::plain(Font::Helvetica, 10.0, 12.0);

const BULLET: TextStyle = TextStyle {
    left_indent_pt: 12.0,
    first_line_indent_pt: -8.0,
    ..NORMAL
};

const SECTION_GAP_PT: f32 = 12.0;
const ENTRY_GAP_PT: f32 = 6.0;

/// Renders a structured profile into a paginated US-letter PDF.
pub fn render_profile(profile: &ResumeProfile) -> Result<Vec<u8>, RenderError> {
    let mut flow = Flow::new(profile_page());
    let title = profile.title();

    flow.paragraph(&[Span::new(title.as_str(), TITLE.font)], &TITLE);
    flow.space(SECTION_GAP_PT);

    let links = [
        ("LinkedIn", profile.contact.linkedin.trim()),
        ("GitHub", profile.contact.github.trim()),
    ];
    for (label, url) in links {
        if !url.is_empty() {
            plain(&mut flow, &format!("{label}: {url}"));
        }
    }
    flow.space(SECTION_GAP_PT);

    if !profile.skills.is_empty() {
        heading(&mut flow, "Skills");
        plain(&mut flow, &profile.skills.join(", "));
        flow.space(SECTION_GAP_PT);
    }

    if !profile.experiences.is_empty() {
        heading(&mut flow, "Experience");
        for experience in &profile.experiences {
            experience_entry(&mut flow, experience);
            flow.space(ENTRY_GAP_PT);
        }
        flow.space(ENTRY_GAP_PT);
    }

    if !profile.education.is_empty() {
        heading(&mut flow, "Education");
        for education in &profile.education {
            education_entry(&mut flow, education);
        }
        flow.space(SECTION_GAP_PT);
    }

    if !profile.projects.is_empty() {
        heading(&mut flow, "Projects");
        for project in &profile.projects {
            project_entry(&mut flow, project);
            flow.space(ENTRY_GAP_PT);
        }
        flow.space(ENTRY_GAP_PT);
    }

    if !profile.certifications.is_empty() {
        heading(&mut flow, "Certifications");
        bullets(&mut flow, &profile.certifications);
        flow.space(SECTION_GAP_PT);
    }

    flow.finish(&title)
}

fn heading(flow: &mut Flow, text: &str) {
    flow.paragraph(&[Span::new(text, HEADING.font)], &HEADING);
}

fn plain(flow: &mut Flow, text: &str) {
    flow.paragraph(&[Span::new(text, NORMAL.font)], &NORMAL);
}

fn bullets(flow: &mut Flow, lines: &[String]) {
    for line in lines.iter().filter(|l| !l.trim().is_empty()) {
        flow.paragraph(&[Span::new(format!("• {line}"), BULLET.font)], &BULLET);
    }
}

/// **Position** at Company, Date
fn experience_entry(flow: &mut Flow, experience: &Experience) {
    let spans = [
        Span::new(experience.position.as_str(), Font::HelveticaBold),
        Span::new(
            format!(" at {}, {}", experience.company, experience.date),
            Font::Helvetica,
        ),
    ];
    flow.paragraph(&spans, &NORMAL);
    bullets(flow, &experience.description);
}

/// **Degree** from Institution, Date
fn education_entry(flow: &mut Flow, education: &Education) {
    let spans = [
        Span::new(education.degree.as_str(), Font::HelveticaBold),
        Span::new(
            format!(" from {}, {}", education.institution, education.date),
            Font::Helvetica,
        ),
    ];
    flow.paragraph(&spans, &NORMAL);
}

/// **Name** - url, date; url and date only when present.
fn project_entry(flow: &mut Flow, project: &Project) {
    let mut suffix = String::new();
    if !project.url.is_empty() {
        suffix.push_str(" - ");
        suffix.push_str(&project.url);
    }
    if !project.date.is_empty() {
        suffix.push_str(", ");
        suffix.push_str(&project.date);
    }

    let mut spans = vec![Span::new(project.name.as_str(), Font::HelveticaBold)];
    if !suffix.is_empty() {
        spans.push(Span::new(suffix, Font::Helvetica));
    }
    flow.paragraph(&spans, &NORMAL);
    bullets(flow, &project.description);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::ContactLinks;
    use lopdf::Document;

    fn page_count(bytes: &[u8]) -> usize {
        Document::load_mem(bytes).unwrap().get_pages().len()
    }

    fn sample_profile() -> ResumeProfile {
        ResumeProfile {
            name: "Jane Doe".to_string(),
            contact: ContactLinks {
                linkedin: "linkedin.com/in/jane".to_string(),
                github: String::new(),
            },
            skills: vec!["Rust".to_string(), "SQL".to_string()],
            experiences: vec![Experience {
                company: "Acme".to_string(),
                position: "Engineer".to_string(),
                date: "2020 - Present".to_string(),
                description: vec!["Built X".to_string(), "   ".to_string()],
            }],
            education: vec![Education {
                institution: "MIT".to_string(),
                degree: "B.Sc. CS".to_string(),
                date: "2020".to_string(),
            }],
            projects: vec![Project {
                name: "crate".to_string(),
                url: "https://github.com/jane/crate".to_string(),
                date: String::new(),
                description: vec!["Parser".to_string()],
            }],
            certifications: vec!["CKA".to_string()],
        }
    }

    #[test]
    fn test_full_profile_renders_one_page() {
        let bytes = render_profile(&sample_profile()).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert_eq!(page_count(&bytes), 1);
    }

    #[test]
    fn test_profile_with_only_a_name_renders() {
        let profile = ResumeProfile {
            name: "Jane Doe".to_string(),
            ..Default::default()
        };
        let bytes = render_profile(&profile).unwrap();
        assert_eq!(page_count(&bytes), 1);
    }

    #[test]
    fn test_empty_sections_are_left_out() {
        let profile = ResumeProfile {
            name: "Jane Doe".to_string(),
            skills: vec!["Rust".to_string()],
            ..Default::default()
        };
        let text = pdf_extract::extract_text_from_mem(&render_profile(&profile).unwrap()).unwrap();
        assert!(text.contains("Jane Doe's Resume"));
        assert!(text.contains("Skills"));
        assert!(text.contains("Rust"));
        for absent in ["LinkedIn", "Experience", "Education", "Projects", "Certifications"] {
            assert!(!text.contains(absent), "{absent} rendered in {text:?}");
        }
    }

    #[test]
    fn test_populated_sections_appear_in_order() {
        let text =
            pdf_extract::extract_text_from_mem(&render_profile(&sample_profile()).unwrap()).unwrap();
        let positions: Vec<usize> = [
            "LinkedIn: linkedin.com/in/jane",
            "Skills",
            "Experience",
            "Education",
            "Projects",
            "Certifications",
        ]
        .iter()
        .map(|heading| text.find(heading).unwrap_or_else(|| panic!("{heading} missing")))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{text:?}");
        assert!(!text.contains("GitHub"));
    }

    #[test]
    fn test_many_experiences_paginate() {
        let mut profile = sample_profile();
        profile.experiences = (0..30)
            .map(|i| Experience {
                company: format!("Company {i}"),
                position: "Engineer".to_string(),
                date: "2020".to_string(),
                description: vec![
                    "Owned the ingestion pipeline end to end".to_string(),
                    "Cut p99 latency by half".to_string(),
                ],
            })
            .collect();
        let bytes = render_profile(&profile).unwrap();
        assert!(page_count(&bytes) > 1);
    }
}
