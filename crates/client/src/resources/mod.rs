//! `gastu-core` API trait implementations, one file per backend resource.

mod budgets;
mod concepts;
mod expenses;
mod notifications;
mod preferences;
mod savings;
mod users;
