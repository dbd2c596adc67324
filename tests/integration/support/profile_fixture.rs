use portfolio_assistant::profile::{ExperienceRecord, ProfileDocument};

pub const SAMPLE_PROFILE_JSON: &str = r#"{
  "name": "Ankur Saini",
  "skills": ["HTML5", "CSS3", "JavaScript", "React", "Sass", "Tailwind", "Accessibility"],
  "tools": ["Figma", "Photoshop", "VS Code", "Git"],
  "projects": ["E-commerce Redesign", "Design System", "Analytics Dashboard"],
  "experience": [
    {
      "company": "Pixel Labs",
      "years": "2018 - Present",
      "details": ["Frontend architecture", "Design systems", "Team leadership"]
    },
    {
      "company": "WebWorks",
      "years": "2013 - 2018",
      "details": ["Responsive sites", "UI prototyping"]
    }
  ],
  "education": ["B.Tech in Computer Science", "Google UX Certificate"]
}"#;

pub fn sample_profile() -> ProfileDocument {
    serde_json::from_str(SAMPLE_PROFILE_JSON).expect("sample profile must parse")
}

pub fn experience(company: &str, years: &str, details: &[&str]) -> ExperienceRecord {
    ExperienceRecord {
        company: company.into(),
        years: years.into(),
        details: details.iter().map(|detail| detail.to_string()).collect(),
    }
}
