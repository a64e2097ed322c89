/// Builds the full chatbot answer: advisory text plus per-category suggestions.
use std::sync::Arc;

use tracing::debug;

use crate::dataset::{Dataset, DatasetStore};
use crate::error::CoreError;
use crate::matcher::{find_matches, Keyword};
use crate::model::{CareerAdvice, Recommendations, Record};

/// Anything that can answer a free-text career query.
pub trait Recommender: Send + Sync {
    fn recommend(&self, query: &str) -> Result<CareerAdvice, CoreError>;
}

#[derive(Debug, Clone)]
pub struct Assembler {
    store: Arc<DatasetStore>,
}

impl Assembler {
    pub fn new(store: Arc<DatasetStore>) -> Self {
        Self { store }
    }

    pub fn recommendations(&self, keyword: &Keyword) -> Recommendations {
        Recommendations {
            jobs: suggest(self.store.jobs(), keyword),
            courses: suggest(self.store.courses(), keyword),
            internships: suggest(self.store.internships(), keyword),
            scholarships: suggest(self.store.scholarships(), keyword),
            projects: suggest(self.store.projects(), keyword),
        }
    }
}

impl Recommender for Assembler {
    fn recommend(&self, query: &str) -> Result<CareerAdvice, CoreError> {
        let keyword = Keyword::new(query);
        let recommendations = self.recommendations(&keyword);
        debug!(
            jobs = recommendations.jobs.len(),
            courses = recommendations.courses.len(),
            internships = recommendations.internships.len(),
            scholarships = recommendations.scholarships.len(),
            projects = recommendations.projects.len(),
            "recommendations assembled"
        );
        Ok(CareerAdvice {
            career_guidance: career_guidance(query),
            recommendations,
        })
    }
}

/// The fixed advice text; `query` is shown exactly as the user typed it.
pub fn career_guidance(query: &str) -> String {
    format!(
        "Based on your interest in '{query}', here are some suggestions:\n\n\
         1. Explore relevant courses and certifications\n\
         2. Look for internship opportunities\n\
         3. Build practical experience through projects\n\
         4. Network with professionals in the field"
    )
}

fn suggest<R: Record>(dataset: &Dataset<R>, keyword: &Keyword) -> Vec<R::Suggestion> {
    find_matches(dataset, keyword)
        .map(R::suggestion)
        .collect()
}
