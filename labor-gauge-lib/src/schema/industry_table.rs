use super::{IndustryCode, define_table};
use compact_str::CompactString;
use ohno::bail;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct IndustryRow {
    pub industry_code: IndustryCode,
    pub industry_name: CompactString,
}

define_table! {
    industry: IndustryRow {
        fn key(row) -> IndustryCode {
            row.industry_code.clone()
        }

        fn check_row(row) -> Result<()> {
            if row.industry_code.0.trim().is_empty() {
                bail!("industry code must not be empty");
            }
            if row.industry_name.trim().is_empty() {
                bail!("industry {} has an empty name", row.industry_code);
            }
            Ok(())
        }
    }
}
