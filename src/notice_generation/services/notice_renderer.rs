use crate::notice_generation::domain::NoticeDocument;
use crate::shared::error::BakeError;
use crate::shared::Result;
use std::fmt::Write;

const DOUBLE_RULE: &str =
    "==========================================================================";
const SINGLE_RULE: &str = "--------------------------------------------------------------------";

/// NoticeRenderer - renders a NoticeDocument into the published NOTICE layout
///
/// The layout is a compatibility contract: downstream tooling diffs NOTICE
/// files across releases, so separators and blank lines must not move.
pub struct NoticeRenderer;

impl NoticeRenderer {
    pub fn render(document: &NoticeDocument) -> Result<String> {
        Self::validate(document)?;

        let mut out = String::new();
        Self::write_document(&mut out, document).map_err(|e| BakeError::Render {
            details: e.to_string(),
        })?;
        Ok(out)
    }

    fn write_document(out: &mut String, document: &NoticeDocument) -> std::fmt::Result {
        writeln!(out, "{}", document.product_name)?;
        writeln!(
            out,
            "Copyright {}-{}",
            document.copyright_start_year, document.copyright_end_year
        )?;
        writeln!(out)?;
        writeln!(
            out,
            "This product includes software developed by The Apache Software"
        )?;
        writeln!(out, "Foundation (http://www.apache.org/).")?;
        writeln!(out)?;
        writeln!(out, "{}", DOUBLE_RULE)?;
        writeln!(
            out,
            "Third party libraries used by the {}:",
            document.product_name
        )?;
        writeln!(out, "{}", DOUBLE_RULE)?;
        writeln!(out)?;

        for project in &document.projects {
            writeln!(out)?;
            writeln!(out, "{}", SINGLE_RULE)?;
            writeln!(out, "{}", project.name())?;
            writeln!(out, "{}", SINGLE_RULE)?;
            writeln!(out, "{}", project.license_text())?;
        }
        Ok(())
    }

    /// Rejects parameters that would break the fixed header layout
    fn validate(document: &NoticeDocument) -> Result<()> {
        let name = &document.product_name;
        if name.trim().is_empty() {
            return Err(BakeError::Render {
                details: "product name must not be empty".to_string(),
            }
            .into());
        }
        if name.contains('\n') || name.contains('\r') {
            return Err(BakeError::Render {
                details: format!("product name must be a single line: {:?}", name),
            }
            .into());
        }
        if document.copyright_start_year > document.copyright_end_year {
            return Err(BakeError::Render {
                details: format!(
                    "copyright start year {} is after end year {}",
                    document.copyright_start_year, document.copyright_end_year
                ),
            }
            .into());
        }
        Ok(())
    }
}
