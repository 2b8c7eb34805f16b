use gastu_core::concepts::{ConceptDirectory, ConceptKind};
use gastu_core::expenses::{MonthKey, NewExpense};
use gastu_core::export::{write_expense_report, ReportKind};
use gastu_core::utils::time_utils::local_now;

use super::{report_file, report_written};
use crate::cli::ExpensesCommand;
use crate::main_lib::AppContext;
use crate::render;

async fn expense_concepts(ctx: &AppContext) -> ConceptDirectory {
    match ctx.concepts.concepts_by_kind(ConceptKind::Egreso).await {
        Ok(list) => ConceptDirectory::from_concepts(&list),
        Err(e) => {
            tracing::warn!("Could not load expense concepts: {}", e);
            ConceptDirectory::default()
        }
    }
}

pub async fn run(cmd: ExpensesCommand, ctx: &AppContext) -> anyhow::Result<()> {
    let service = &ctx.expense_service;
    match cmd {
        ExpensesCommand::Summary => {
            let summaries = service.concept_summaries().await?;
            print!("{}", render::concept_summaries(&summaries));
        }
        ExpensesCommand::List { concept } => {
            let concepts = expense_concepts(ctx).await;
            match concept {
                Some(id) => {
                    let detail = service.concept_detail(id).await?;
                    print!("{}", render::concept_detail(&detail, &concepts));
                }
                None => {
                    let items = service.list_expenses().await?;
                    print!("{}", render::expenses(&items, &concepts));
                }
            }
        }
        ExpensesCommand::Add {
            concept,
            amount,
            description,
        } => {
            let expense = service
                .record_expense(NewExpense {
                    concepto_id: concept,
                    monto: amount,
                    descripcion: description,
                    fecha_registro: None,
                })
                .await?;
            println!("Egreso {} registrado por {}", expense.id, render::money(expense.monto));
        }
        ExpensesCommand::Edit {
            id,
            concept,
            amount,
            description,
        } => {
            let expense = service
                .update_expense(
                    id,
                    NewExpense {
                        concepto_id: concept,
                        monto: amount,
                        descripcion: description,
                        fecha_registro: None,
                    },
                )
                .await?;
            println!("Egreso {} actualizado", expense.id);
        }
        ExpensesCommand::Delete { id } => {
            service.delete_expense(id).await?;
            println!("Egreso {} eliminado", id);
        }
        ExpensesCommand::Month { month } => {
            let month = month.unwrap_or_else(|| MonthKey::of(local_now()));
            let (totals, concepts) =
                tokio::join!(service.month_totals(month), expense_concepts(ctx));
            print!("{}", render::month_totals(month, &totals?, &concepts));
        }
        ExpensesCommand::Export { output } => {
            let (items, concepts) = tokio::join!(service.list_expenses(), expense_concepts(ctx));
            let items = items?;
            let (path, file) = report_file(output, ReportKind::Expenses)?;
            write_expense_report(file, &items, &concepts)?;
            report_written(&path, items.len());
        }
    }
    Ok(())
}
