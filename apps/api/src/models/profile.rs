use serde::{Deserialize, Serialize};

/// A resume entered field by field rather than as free text.
/// Every list defaults to empty; empty lists are left out of the rendered document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeProfile {
    pub name: String,
    pub contact: ContactLinks,
    pub skills: Vec<String>,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    pub certifications: Vec<String>,
}

impl ResumeProfile {
    /// Document heading, e.g. "Jane Doe's Resume".
    pub fn title(&self) -> String {
        format!("{}'s Resume", self.name.trim())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactLinks {
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub date: String,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub url: String,
    pub date: String,
    pub description: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_lists_default_to_empty() {
        let profile: ResumeProfile = serde_json::from_str(r#"{"name": "Jane Doe"}"#).unwrap();
        assert_eq!(profile.name, "Jane Doe");
        assert!(profile.skills.is_empty());
        assert!(profile.experiences.is_empty());
        assert!(profile.contact.linkedin.is_empty());
    }

    #[test]
    fn test_nested_entries_deserialize() {
        let json = r#"{
            "name": "Jane Doe",
            "contact": {"linkedin": "linkedin.com/in/jane"},
            "experiences": [
                {"company": "Acme", "position": "Engineer", "date": "2020 - Present",
                 "description": ["Built X", ""]}
            ],
            "education": [{"institution": "MIT", "degree": "B.Sc. CS"}]
        }"#;
        let profile: ResumeProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.contact.linkedin, "linkedin.com/in/jane");
        assert_eq!(profile.experiences[0].description.len(), 2);
        assert_eq!(profile.education[0].date, "");
    }

    #[test]
    fn test_title_uses_possessive() {
        let profile = ResumeProfile {
            name: " Jane Doe ".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.title(), "Jane Doe's Resume");
    }
}
