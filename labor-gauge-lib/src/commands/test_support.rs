//! On-disk warehouse fixture for command tests.

use camino::Utf8PathBuf;
use std::fs;
use tempfile::TempDir;

pub const REGION_CSV: &str = "region_id,region_name\n11,Seoul\n26,Busan\n";

pub const INDUSTRY_CSV: &str = "industry_code,industry_name\nC,Manufacturing\nF,Construction\n";

pub const UNEMPLOYMENT_CSV: &str = "\
region_id,year_month,unemployment_rate,unemployment_level,labor_force,employed_persons
11,2023-01,3.0,30,1030,1000
11,2024-01,3.5,40,1140,1100
26,2023-01,4.0,20,520,500
26,2024-01,3.0,16,536,520
";

/// Sums to the employed-persons totals exactly.
pub const INDUSTRY_EMPLOYMENT_CSV: &str = "\
region_id,industry_code,year_month,employed_persons
11,C,2023-01,600
11,F,2023-01,400
11,C,2024-01,700
11,F,2024-01,400
26,C,2023-01,300
26,F,2023-01,200
26,C,2024-01,320
26,F,2024-01,200
";

/// Busan 2024-01 falls 30 short of 520, a 5.77% gap.
pub const INDUSTRY_EMPLOYMENT_GAP_CSV: &str = "\
region_id,industry_code,year_month,employed_persons
11,C,2023-01,600
11,F,2023-01,400
11,C,2024-01,700
11,F,2024-01,400
26,C,2023-01,300
26,F,2023-01,200
26,C,2024-01,300
26,F,2024-01,190
";

/// Writes a small two-region warehouse into a fresh temporary directory.
pub fn fixture_dir() -> (TempDir, Utf8PathBuf) {
    let tmp = tempfile::tempdir().unwrap();
    let data_dir = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();

    fs::write(data_dir.join("region.csv"), REGION_CSV).unwrap();
    fs::write(data_dir.join("industry.csv"), INDUSTRY_CSV).unwrap();
    fs::write(data_dir.join("unemployment.csv"), UNEMPLOYMENT_CSV).unwrap();
    fs::write(data_dir.join("industry_employment.csv"), INDUSTRY_EMPLOYMENT_CSV).unwrap();

    (tmp, data_dir)
}
