use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Jobs,
    Courses,
    Internships,
    Scholarships,
    Projects,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Jobs,
        Category::Courses,
        Category::Internships,
        Category::Scholarships,
        Category::Projects,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Jobs => "jobs",
            Category::Courses => "courses",
            Category::Internships => "internships",
            Category::Scholarships => "scholarships",
            Category::Projects => "projects",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.csv", self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed row of one dataset category.
///
/// The impl is the category schema: `REQUIRED_COLUMNS` lists every header the
/// source file must carry, `searchable_fields` yields the free-text values the
/// matcher looks at, and `suggestion` projects the display fields.
pub trait Record: DeserializeOwned {
    const CATEGORY: Category;
    const REQUIRED_COLUMNS: &'static [&'static str];

    type Suggestion: Serialize;

    fn searchable_fields(&self) -> [&str; 2];

    fn suggestion(&self) -> Self::Suggestion;
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobRecord {
    #[serde(rename = "Job Title", default)]
    pub title: String,
    #[serde(rename = "Industry", default)]
    pub industry: String,
    #[serde(rename = "Company Name", default)]
    pub company: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSuggestion {
    pub title: String,
    pub company: String,
}

impl Record for JobRecord {
    const CATEGORY: Category = Category::Jobs;
    const REQUIRED_COLUMNS: &'static [&'static str] = &["Job Title", "Industry", "Company Name"];

    type Suggestion = JobSuggestion;

    fn searchable_fields(&self) -> [&str; 2] {
        [&self.title, &self.industry]
    }

    fn suggestion(&self) -> JobSuggestion {
        JobSuggestion {
            title: self.title.clone(),
            company: self.company.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CourseRecord {
    #[serde(rename = "Course Title", default)]
    pub title: String,
    #[serde(rename = "Category", default)]
    pub category: String,
    #[serde(rename = "Institution", default)]
    pub institution: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSuggestion {
    pub title: String,
    pub institution: String,
}

impl Record for CourseRecord {
    const CATEGORY: Category = Category::Courses;
    const REQUIRED_COLUMNS: &'static [&'static str] = &["Course Title", "Category", "Institution"];

    type Suggestion = CourseSuggestion;

    fn searchable_fields(&self) -> [&str; 2] {
        [&self.title, &self.category]
    }

    fn suggestion(&self) -> CourseSuggestion {
        CourseSuggestion {
            title: self.title.clone(),
            institution: self.institution.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InternshipRecord {
    #[serde(rename = "Internship Title", default)]
    pub title: String,
    #[serde(rename = "Industry", default)]
    pub industry: String,
    #[serde(rename = "Company", default)]
    pub company: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternshipSuggestion {
    pub title: String,
    pub company: String,
}

impl Record for InternshipRecord {
    const CATEGORY: Category = Category::Internships;
    const REQUIRED_COLUMNS: &'static [&'static str] = &["Internship Title", "Industry", "Company"];

    type Suggestion = InternshipSuggestion;

    fn searchable_fields(&self) -> [&str; 2] {
        [&self.title, &self.industry]
    }

    fn suggestion(&self) -> InternshipSuggestion {
        InternshipSuggestion {
            title: self.title.clone(),
            company: self.company.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScholarshipRecord {
    #[serde(rename = "Scholarship Name", default)]
    pub name: String,
    #[serde(rename = "Field of Study", default)]
    pub field_of_study: String,
    #[serde(rename = "Provider", default)]
    pub provider: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScholarshipSuggestion {
    pub name: String,
    pub provider: String,
}

impl Record for ScholarshipRecord {
    const CATEGORY: Category = Category::Scholarships;
    const REQUIRED_COLUMNS: &'static [&'static str] =
        &["Scholarship Name", "Field of Study", "Provider"];

    type Suggestion = ScholarshipSuggestion;

    fn searchable_fields(&self) -> [&str; 2] {
        [&self.name, &self.field_of_study]
    }

    fn suggestion(&self) -> ScholarshipSuggestion {
        ScholarshipSuggestion {
            name: self.name.clone(),
            provider: self.provider.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectRecord {
    #[serde(rename = "Project Title", default)]
    pub title: String,
    #[serde(rename = "Domain", default)]
    pub domain: String,
    #[serde(rename = "Organization", default)]
    pub organization: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSuggestion {
    pub title: String,
    pub organization: String,
}

impl Record for ProjectRecord {
    const CATEGORY: Category = Category::Projects;
    const REQUIRED_COLUMNS: &'static [&'static str] = &["Project Title", "Domain", "Organization"];

    type Suggestion = ProjectSuggestion;

    fn searchable_fields(&self) -> [&str; 2] {
        [&self.title, &self.domain]
    }

    fn suggestion(&self) -> ProjectSuggestion {
        ProjectSuggestion {
            title: self.title.clone(),
            organization: self.organization.clone(),
        }
    }
}

/// Per-category suggestion lists. Every category is always present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    pub jobs: Vec<JobSuggestion>,
    pub courses: Vec<CourseSuggestion>,
    pub internships: Vec<InternshipSuggestion>,
    pub scholarships: Vec<ScholarshipSuggestion>,
    pub projects: Vec<ProjectSuggestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerAdvice {
    pub career_guidance: String,
    pub recommendations: Recommendations,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_recommendations_serialize_all_categories() {
        let json = serde_json::to_value(Recommendations::default()).unwrap();
        let object = json.as_object().unwrap();
        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 5);
        for category in Category::ALL {
            assert_eq!(object[category.as_str()], serde_json::json!([]), "{category}");
        }
    }

    #[test]
    fn category_file_names() {
        assert_eq!(Category::Jobs.file_name(), "jobs.csv");
        assert_eq!(Category::Scholarships.file_name(), "scholarships.csv");
    }

    #[test]
    fn suggestion_uses_display_columns() {
        let job = JobRecord {
            title: "Data Scientist".to_string(),
            industry: "Technology".to_string(),
            company: "TechCorp".to_string(),
        };
        let json = serde_json::to_value(job.suggestion()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"title": "Data Scientist", "company": "TechCorp"})
        );
    }
}
