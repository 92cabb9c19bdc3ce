use super::ProjectRecord;

/// Parameters of one rendered NOTICE document
///
/// Built once per generation; only its rendered text is ever persisted.
/// The copyright holder is carried along for callers and logging even though
/// the published layout does not print it.
#[derive(Debug, Clone)]
pub struct NoticeDocument {
    pub product_name: String,
    pub copyright_holder: String,
    pub copyright_start_year: i32,
    pub copyright_end_year: i32,
    /// Projects in the order they will be rendered
    pub projects: Vec<ProjectRecord>,
}

impl NoticeDocument {
    pub fn new(
        product_name: impl Into<String>,
        copyright_holder: impl Into<String>,
        copyright_start_year: i32,
        copyright_end_year: i32,
        projects: Vec<ProjectRecord>,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            copyright_holder: copyright_holder.into(),
            copyright_start_year,
            copyright_end_year,
            projects,
        }
    }
}
