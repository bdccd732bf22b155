use super::{RegionId, define_table};
use compact_str::CompactString;
use ohno::bail;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct RegionRow {
    pub region_id: RegionId,
    pub region_name: CompactString,
}

define_table! {
    region: RegionRow {
        fn key(row) -> RegionId {
            row.region_id
        }

        fn check_row(row) -> Result<()> {
            if row.region_name.trim().is_empty() {
                bail!("region {} has an empty name", row.region_id);
            }
            Ok(())
        }
    }
}
