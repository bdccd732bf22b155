use strum::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum ReportCategory {
    Trend,
    Volatility,
    Concentration,
    Demographics,
    Profile,
    Reconciliation,
}
