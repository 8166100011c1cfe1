pub mod dto;
pub mod report_period;
pub mod summary;

pub use dto::{CommuteMonth, FetchTriggerResult, MonthlyRow};
pub use report_period::ReportPeriod;
pub use summary::{MonthTotals, MonthlySummary};
