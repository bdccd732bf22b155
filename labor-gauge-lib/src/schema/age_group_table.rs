use super::{AgeGroupId, define_table};
use compact_str::CompactString;
use ohno::bail;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AgeGroupRow {
    pub age_group_id: AgeGroupId,
    pub age_group_name: CompactString,
}

define_table! {
    age_group: AgeGroupRow {
        fn key(row) -> AgeGroupId {
            row.age_group_id
        }

        fn check_row(row) -> Result<()> {
            if row.age_group_name.trim().is_empty() {
                bail!("age group {} has an empty name", row.age_group_id);
            }
            Ok(())
        }
    }
}
