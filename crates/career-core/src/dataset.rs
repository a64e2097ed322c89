/// Dataset loading and read-only storage.
///
/// Each category lives in its own CSV file under one data directory. Files are
/// parsed eagerly into typed records; after that the rows are only reachable
/// through shared iteration.
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::info;

use crate::error::LoadError;
use crate::model::{
    CourseRecord, InternshipRecord, JobRecord, ProjectRecord, Record, ScholarshipRecord,
};

#[derive(Debug, Clone)]
pub struct Dataset<R> {
    rows: Vec<R>,
}

impl<R: Record> Dataset<R> {
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file, path)
    }

    /// Parse CSV from any reader. `origin` only labels errors.
    pub fn from_reader<T: io::Read>(reader: T, origin: &Path) -> Result<Self, LoadError> {
        let csv_error = |source: csv::Error| LoadError::Csv {
            path: origin.to_path_buf(),
            source,
        };

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .trim(Trim::Headers)
            .from_reader(reader);

        let headers = reader.headers().map_err(csv_error)?.clone();
        for &column in R::REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(LoadError::MissingColumn {
                    path: origin.to_path_buf(),
                    column,
                });
            }
        }

        let mut rows = Vec::new();
        let mut raw = StringRecord::new();
        while reader.read_record(&mut raw).map_err(csv_error)? {
            if raw.len() > headers.len() {
                return Err(LoadError::RowTooLong {
                    path: origin.to_path_buf(),
                    row: raw.position().map(|p| p.line()).unwrap_or_default(),
                    expected: headers.len(),
                    found: raw.len(),
                });
            }
            // Missing trailing cells read as empty, same as blank ones.
            while raw.len() < headers.len() {
                raw.push_field("");
            }
            let row: R = raw.deserialize(Some(&headers)).map_err(csv_error)?;
            rows.push(row);
        }

        Ok(Self { rows })
    }
}

impl<R> Dataset<R> {
    pub fn from_rows(rows: Vec<R>) -> Self {
        Self { rows }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<R> Default for Dataset<R> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<'a, R> IntoIterator for &'a Dataset<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The five category tables, loaded once at startup and never mutated.
#[derive(Debug, Clone, Default)]
pub struct DatasetStore {
    jobs: Dataset<JobRecord>,
    courses: Dataset<CourseRecord>,
    internships: Dataset<InternshipRecord>,
    scholarships: Dataset<ScholarshipRecord>,
    projects: Dataset<ProjectRecord>,
}

impl DatasetStore {
    pub fn new(
        jobs: Dataset<JobRecord>,
        courses: Dataset<CourseRecord>,
        internships: Dataset<InternshipRecord>,
        scholarships: Dataset<ScholarshipRecord>,
        projects: Dataset<ProjectRecord>,
    ) -> Self {
        Self {
            jobs,
            courses,
            internships,
            scholarships,
            projects,
        }
    }

    /// Load `<dir>/jobs.csv`, `<dir>/courses.csv`, ... The first failure aborts.
    pub fn load(dir: &Path) -> Result<Self, LoadError> {
        Ok(Self {
            jobs: load_category(dir)?,
            courses: load_category(dir)?,
            internships: load_category(dir)?,
            scholarships: load_category(dir)?,
            projects: load_category(dir)?,
        })
    }

    pub fn jobs(&self) -> &Dataset<JobRecord> {
        &self.jobs
    }

    pub fn courses(&self) -> &Dataset<CourseRecord> {
        &self.courses
    }

    pub fn internships(&self) -> &Dataset<InternshipRecord> {
        &self.internships
    }

    pub fn scholarships(&self) -> &Dataset<ScholarshipRecord> {
        &self.scholarships
    }

    pub fn projects(&self) -> &Dataset<ProjectRecord> {
        &self.projects
    }

    pub fn total_rows(&self) -> usize {
        self.jobs.len()
            + self.courses.len()
            + self.internships.len()
            + self.scholarships.len()
            + self.projects.len()
    }
}

pub fn dataset_path<R: Record>(dir: &Path) -> PathBuf {
    dir.join(R::CATEGORY.file_name())
}

fn load_category<R: Record>(dir: &Path) -> Result<Dataset<R>, LoadError> {
    let path = dataset_path::<R>(dir);
    let dataset = Dataset::<R>::load(&path)?;
    info!(
        category = %R::CATEGORY,
        rows = dataset.len(),
        path = %path.display(),
        "dataset loaded"
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jobs_from(csv: &str) -> Result<Dataset<JobRecord>, LoadError> {
        Dataset::from_reader(csv.as_bytes(), Path::new("jobs.csv"))
    }

    #[test]
    fn parse_minimal() {
        let dataset = jobs_from(
            "Job Title,Industry,Company Name,Salary\n\
             Data Scientist,Technology,TechCorp,120000\n\
             Plumber,Construction,PipeCo,60000\n",
        )
        .unwrap();

        assert_eq!(dataset.len(), 2);
        let titles: Vec<&str> = dataset.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, ["Data Scientist", "Plumber"]);
        assert_eq!(dataset.iter().next().unwrap().company, "TechCorp");
    }

    #[test]
    fn blank_cells_and_short_rows_become_empty_strings() {
        let dataset = jobs_from(
            "Job Title,Industry,Company Name\n\
             Nurse,,CareCo\n\
             Welder\n",
        )
        .unwrap();

        let rows: Vec<&JobRecord> = dataset.iter().collect();
        assert_eq!(rows[0].industry, "");
        assert_eq!(rows[1].title, "Welder");
        assert_eq!(rows[1].industry, "");
        assert_eq!(rows[1].company, "");
    }

    #[test]
    fn header_whitespace_is_trimmed() {
        let dataset = jobs_from(" Job Title , Industry ,Company Name\nChef,Food,Bistro\n").unwrap();
        assert_eq!(dataset.iter().next().unwrap().industry, "Food");
    }

    #[test]
    fn missing_column_is_rejected() {
        let err = jobs_from("Job Title,Company Name\nChef,Bistro\n").unwrap_err();
        match err {
            LoadError::MissingColumn { column, .. } => assert_eq!(column, "Industry"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_source_is_missing_columns() {
        let err = jobs_from("").unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn { .. }));
    }

    #[test]
    fn overlong_row_is_rejected() {
        let err = jobs_from("Job Title,Industry,Company Name\nChef,Food,Bistro,extra\n").unwrap_err();
        match err {
            LoadError::RowTooLong { expected, found, .. } => {
                assert_eq!(expected, 3);
                assert_eq!(found, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn repeated_column_is_malformed() {
        let err = jobs_from(
            "Job Title,Industry,Company Name,Industry\n\
             Chef,Food,Bistro,Hospitality\n",
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Csv { .. }), "{err}");
        assert!(err.to_string().contains("duplicate field"), "{err}");
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.csv");
        let err = Dataset::<JobRecord>::load(&path).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("jobs.csv"));
    }

    #[test]
    fn store_loads_all_categories_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        let files = [
            ("jobs.csv", "Job Title,Industry,Company Name\nData Scientist,Technology,TechCorp\n"),
            ("courses.csv", "Course Title,Category,Institution\nWeb Development Bootcamp,Programming,MIT\n"),
            ("internships.csv", "Internship Title,Industry,Company\nData Analytics Intern,Technology,Data Corp\n"),
            ("scholarships.csv", "Scholarship Name,Field of Study,Provider\nSTEM Merit Award,Engineering,Tech Foundation\n"),
            ("projects.csv", "Project Title,Domain,Organization\nAI Healthcare Solution,Healthcare,HealthTech\n"),
        ];
        for (name, body) in files {
            std::fs::write(dir.path().join(name), body).unwrap();
        }

        let store = DatasetStore::load(dir.path()).unwrap();
        assert_eq!(store.total_rows(), 5);
        assert_eq!(store.courses().iter().next().unwrap().institution, "MIT");
        assert_eq!(store.projects().iter().next().unwrap().organization, "HealthTech");
    }

    #[test]
    fn store_load_fails_when_any_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("jobs.csv"),
            "Job Title,Industry,Company Name\n",
        )
        .unwrap();

        let err = DatasetStore::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains("courses.csv"), "{err}");
    }

    #[test]
    fn bundled_data_loads() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data");
        if !dir.exists() {
            eprintln!("skipping bundled_data_loads: {} not found", dir.display());
            return;
        }
        let store = DatasetStore::load(&dir).expect("bundled data should load");
        for count in [
            store.jobs().len(),
            store.courses().len(),
            store.internships().len(),
            store.scholarships().len(),
            store.projects().len(),
        ] {
            assert!(count > 0);
        }
    }
}
