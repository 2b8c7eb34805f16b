use std::io::Write;

use gastu_core::budgets::{present_budget_errors, BudgetInput, BudgetServiceTrait};
use gastu_core::errors::{Error, ValidationError};
use gastu_core::export::{write_budget_report, ReportKind};

use super::{report_file, report_written};
use crate::cli::{BudgetFields, BudgetsCommand};
use crate::main_lib::AppContext;
use crate::render;

impl From<BudgetFields> for BudgetInput {
    fn from(fields: BudgetFields) -> Self {
        BudgetInput {
            concepto_id: fields.concept,
            limite: fields.limit,
            activo: fields.active,
            fecha_inicio: fields.from,
            fecha_fin: fields.to,
        }
    }
}

/// Prints field-level problems with the form labels before propagating.
fn report_field_errors(err: Error) -> Error {
    if let Error::Validation(ValidationError::Fields(fields)) = &err {
        eprintln!("Revisa los campos del presupuesto:");
        eprint!("{}", render::field_issues(&present_budget_errors(fields)));
    }
    err
}

/// Writes the budget report from the progress listing, the only one that
/// carries the spent amount.
async fn export_budgets<W: Write>(
    service: &dyn BudgetServiceTrait,
    writer: W,
) -> anyhow::Result<usize> {
    let board = service.load_board().await?;
    write_budget_report(writer, &board.budgets)?;
    Ok(board.budgets.len())
}

pub async fn run(cmd: BudgetsCommand, ctx: &AppContext, compact: bool) -> anyhow::Result<()> {
    let service = &ctx.budget_service;
    match cmd {
        BudgetsCommand::List { search } => {
            let board = service.load_board().await?;
            let cards = board.search(search.as_deref().unwrap_or(""));
            print!("{}", render::budget_cards(&cards, compact));
        }
        BudgetsCommand::Create(fields) => {
            let budget = service
                .create_budget(fields.into())
                .await
                .map_err(report_field_errors)?;
            println!("Presupuesto {} creado", budget.id);
        }
        BudgetsCommand::Edit { id, fields } => {
            let budget = service
                .update_budget(id, fields.into())
                .await
                .map_err(report_field_errors)?;
            println!("Presupuesto {} actualizado", budget.id);
        }
        BudgetsCommand::Delete { id } => {
            service.delete_budget(id).await?;
            println!("Presupuesto {} eliminado", id);
        }
        BudgetsCommand::Activate { id } => {
            let budget = service.activate_budget(id).await?;
            println!("Presupuesto {} activado", budget.id);
        }
        BudgetsCommand::Concepts { query } => {
            let concepts = service
                .search_concepts(query.as_deref().unwrap_or(""))
                .await?;
            print!("{}", render::concepts(&concepts));
        }
        BudgetsCommand::Export { output } => {
            let (path, file) = report_file(output, ReportKind::Budgets)?;
            let rows = export_budgets(service.as_ref(), file).await?;
            report_written(&path, rows);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use gastu_core::budgets::{Budget, BudgetApiTrait, BudgetService};
    use gastu_core::concepts::Concept;
    use gastu_core::Result;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    /// Plain listing without spend, progress listing with it.
    struct SplitListingApi;

    fn budget(spent: Option<Decimal>) -> Budget {
        Budget {
            id: 1,
            concepto_id: 2,
            concepto_nombre: Some("Transporte".to_string()),
            limite: dec!(200),
            activo: true,
            fecha_inicio: None,
            fecha_fin: None,
            gastado: spent,
            porcentaje: None,
            fecha_creacion: None,
        }
    }

    #[async_trait]
    impl BudgetApiTrait for SplitListingApi {
        async fn list_budgets(&self) -> Result<Vec<Budget>> {
            Ok(vec![budget(None)])
        }

        async fn budgets_with_progress(&self) -> Result<Vec<Budget>> {
            Ok(vec![budget(Some(dec!(150)))])
        }

        async fn get_budget(&self, _id: i64) -> Result<Budget> {
            unimplemented!()
        }

        async fn create_budget(&self, _budget: &BudgetInput) -> Result<Budget> {
            unimplemented!()
        }

        async fn update_budget(&self, _id: i64, _budget: &BudgetInput) -> Result<Budget> {
            unimplemented!()
        }

        async fn delete_budget(&self, _id: i64) -> Result<()> {
            unimplemented!()
        }

        async fn activate_budget(&self, _id: i64) -> Result<Budget> {
            unimplemented!()
        }

        async fn budget_concepts(&self) -> Result<Vec<Concept>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn export_rows_carry_the_spent_amount() {
        let service = BudgetService::new(Arc::new(SplitListingApi));
        let mut out = Vec::new();
        let rows = export_budgets(&service, &mut out).await.unwrap();
        assert_eq!(rows, 1);
        let csv = String::from_utf8(out).unwrap();
        assert_eq!(csv.lines().nth(1), Some("Transporte,200.00,150.00,75.00,Sí,,"));
    }
}
