use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand};
use gastu_core::expenses::MonthKey;
use gastu_core::notifications::FeedTab;
use gastu_core::preferences::PreferenceTab;
use gastu_core::savings::{GoalFrequency, GoalStatus};
use rust_decimal::Decimal;

/// gastu - personal finance client
#[derive(Parser, Debug)]
#[command(name = "gastu")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// One-line list rendering for this run (overrides the saved choice)
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Signed-in user profile
    #[command(subcommand)]
    Profile(ProfileCommand),

    /// Alert preferences
    #[command(subcommand, alias = "preferences")]
    Prefs(PrefsCommand),

    /// Notification panel
    #[command(subcommand, alias = "notif")]
    Notifications(NotificationsCommand),

    /// Savings goals and installments
    #[command(subcommand)]
    Goals(GoalsCommand),

    /// Expense movements
    #[command(subcommand)]
    Expenses(ExpensesCommand),

    /// Budgets per concept
    #[command(subcommand)]
    Budgets(BudgetsCommand),

    /// Saved view settings
    #[command(subcommand)]
    Ui(UiCommand),
}

// === Profile ===

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Show username and email
    Show,

    /// Change the username
    Rename { username: String },

    /// Change the password
    Password {
        #[arg(long)]
        current: String,
        #[arg(long)]
        new: String,
        /// Must repeat the new password
        #[arg(long)]
        confirm: String,
    },
}

// === Preferences ===

#[derive(Subcommand, Debug)]
pub enum PrefsCommand {
    /// Show every preference, or one tab
    Show {
        #[arg(long)]
        tab: Option<PreferenceTab>,
    },

    /// Save `key=value` edits; unedited fields keep their stored values
    Set {
        /// Restrict edits to this tab's fields
        #[arg(long)]
        tab: Option<PreferenceTab>,

        #[arg(required = true, value_name = "KEY=VALUE")]
        assignments: Vec<String>,
    },

    /// Restore server defaults
    Reset,

    /// List tabs and their fields
    Tabs,
}

// === Notifications ===

#[derive(Subcommand, Debug)]
pub enum NotificationsCommand {
    /// List notifications of a tab (defaults to the last one shown)
    #[command(alias = "ls")]
    List {
        #[arg(long)]
        tab: Option<FeedTab>,
    },

    /// Mark one notification read
    Read { id: i64 },

    /// Mark every unread notification read
    ReadAll,

    /// Print the unread badge
    Count,

    /// Poll the unread count until interrupted
    Watch {
        #[arg(long)]
        interval_ms: Option<u64>,

        /// Stop after this many badge changes
        #[arg(long)]
        changes: Option<usize>,

        /// Mark everything read first and show the recomputed badge
        #[arg(long)]
        read_all: bool,
    },
}

// === Savings ===

#[derive(Subcommand, Debug)]
pub enum GoalsCommand {
    /// Dashboard and goal cards
    #[command(alias = "ls")]
    List {
        #[arg(long)]
        status: Option<GoalStatus>,

        /// Filter cards by concept name or description
        #[arg(long)]
        search: Option<String>,
    },

    /// Installment table of a goal
    Show { id: i64 },

    /// Next pending installment of a goal
    Next { id: i64 },

    /// Create a goal
    Create {
        #[arg(long)]
        concept: i64,
        #[command(flatten)]
        fields: GoalFields,
    },

    /// Replace a goal's editable fields
    Edit {
        id: i64,
        #[command(flatten)]
        fields: GoalFields,
    },

    /// Delete a goal
    Delete { id: i64 },

    /// Register a contribution on an installment
    Contribute {
        goal: i64,
        installment: i64,
        amount: Decimal,
        #[arg(long)]
        description: Option<String>,
    },

    /// Write the goal report as CSV
    Export {
        #[arg(long)]
        status: Option<GoalStatus>,
        /// Defaults to a dated file name in the current directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
pub struct GoalFields {
    #[arg(long)]
    pub target: Decimal,
    #[arg(long, default_value = "MENSUAL")]
    pub frequency: GoalFrequency,
    #[arg(long)]
    pub deadline: Option<NaiveDate>,
    #[arg(long)]
    pub installments: Option<i32>,
    #[arg(long)]
    pub description: Option<String>,
}

// === Expenses ===

#[derive(Subcommand, Debug)]
pub enum ExpensesCommand {
    /// Totals per concept
    Summary,

    /// List expenses, optionally of one concept
    #[command(alias = "ls")]
    List {
        #[arg(long)]
        concept: Option<i64>,
    },

    /// Record an expense
    Add {
        concept: i64,
        amount: Decimal,
        #[arg(long)]
        description: Option<String>,
    },

    /// Replace an expense
    Edit {
        id: i64,
        concept: i64,
        amount: Decimal,
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete an expense
    Delete { id: i64 },

    /// Count and total per concept for a month (YYYY-MM, defaults to the current one)
    Month {
        #[arg(long)]
        month: Option<MonthKey>,
    },

    /// Write the expense report as CSV
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

// === Budgets ===

#[derive(Subcommand, Debug)]
pub enum BudgetsCommand {
    /// Progress cards
    #[command(alias = "ls")]
    List {
        /// Filter by concept name
        #[arg(long)]
        search: Option<String>,
    },

    /// Create a budget
    Create(BudgetFields),

    /// Replace a budget
    Edit {
        id: i64,
        #[command(flatten)]
        fields: BudgetFields,
    },

    /// Delete a budget
    Delete { id: i64 },

    /// Activate an inactive budget
    Activate { id: i64 },

    /// Search budget concepts (accent-insensitive)
    Concepts { query: Option<String> },

    /// Write the budget report as CSV
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
pub struct BudgetFields {
    #[arg(long)]
    pub concept: i64,
    #[arg(long)]
    pub limit: Decimal,
    #[arg(long)]
    pub from: Option<NaiveDate>,
    #[arg(long)]
    pub to: Option<NaiveDate>,
    #[arg(long)]
    pub active: bool,
}

// === UI state ===

#[derive(Subcommand, Debug)]
pub enum UiCommand {
    /// Show the saved view settings
    Show,

    /// Save the compact list preference
    Compact {
        #[arg(action = ArgAction::Set)]
        enabled: bool,
    },
}
