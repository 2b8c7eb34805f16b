//! Savings goals - models, dashboard, installment plan and services.

mod savings_model;
mod savings_service;
mod savings_traits;

#[cfg(test)]
mod savings_service_tests;

pub use savings_model::{
    Contribution, GoalFrequency, GoalProgress, GoalStatus, Installment, InstallmentStatus,
    NewSavingsGoal, SavingsGoal, SavingsGoalUpdate,
};
pub use savings_service::{
    GoalCard, InstallmentPlan, InstallmentRow, NextDeadline, SavingsBoard, SavingsDashboard,
    SavingsService,
};
pub use savings_traits::{SavingsApiTrait, SavingsServiceTrait};
