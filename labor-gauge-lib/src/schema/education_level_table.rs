use super::{EducationId, define_table};
use compact_str::CompactString;
use ohno::bail;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct EducationLevelRow {
    pub education_id: EducationId,
    pub education_name: CompactString,
}

define_table! {
    education_level: EducationLevelRow {
        fn key(row) -> EducationId {
            row.education_id
        }

        fn check_row(row) -> Result<()> {
            if row.education_name.trim().is_empty() {
                bail!("education level {} has an empty name", row.education_id);
            }
            Ok(())
        }
    }
}
