mod csv_export;

pub use csv_export::{
    write_budget_report, write_expense_report, write_goal_report, ReportKind,
    BUDGET_REPORT_HEADERS, EXPENSE_REPORT_HEADERS, GOAL_REPORT_HEADERS,
};
