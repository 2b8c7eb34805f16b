//! CSV reports for goals, expenses and budgets.
//!
//! Headers are always written, so an empty list produces a header-only file.

use chrono::NaiveDate;
use csv::WriterBuilder;
use std::io::Write;

use crate::budgets::Budget;
use crate::concepts::ConceptDirectory;
use crate::constants::{DEFAULT_GOAL_TITLE, DISPLAY_DECIMAL_PRECISION};
use crate::errors::Result;
use crate::expenses::Expense;
use crate::savings::SavingsGoal;
use rust_decimal::Decimal;

pub const GOAL_REPORT_HEADERS: [&str; 5] =
    ["Concepto", "Descripción", "Monto Meta", "Total Acumulado", "Estado"];
pub const EXPENSE_REPORT_HEADERS: [&str; 4] = ["Fecha", "Concepto", "Descripción", "Monto"];
pub const BUDGET_REPORT_HEADERS: [&str; 7] = [
    "Concepto",
    "Límite",
    "Gastado",
    "Porcentaje",
    "Activo",
    "Desde",
    "Hasta",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Goals,
    Expenses,
    Budgets,
}

impl ReportKind {
    /// e.g. `reporte_ahorros_2024-05-20.csv`
    pub fn file_name(self, on: NaiveDate) -> String {
        let stem = match self {
            ReportKind::Goals => "reporte_ahorros",
            ReportKind::Expenses => "reporte_egresos",
            ReportKind::Budgets => "reporte_presupuestos",
        };
        format!("{}_{}.csv", stem, on.format("%Y-%m-%d"))
    }
}

fn money(value: Decimal) -> String {
    format!("{:.*}", DISPLAY_DECIMAL_PRECISION as usize, value)
}

fn date_cell(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn write_goal_report<W: Write>(
    writer: W,
    goals: &[SavingsGoal],
    concepts: &ConceptDirectory,
) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(GOAL_REPORT_HEADERS)?;
    for goal in goals {
        wtr.write_record([
            concepts.name_or(goal.concepto_id, DEFAULT_GOAL_TITLE).to_string(),
            goal.descripcion.clone().unwrap_or_default(),
            money(goal.monto_meta),
            money(goal.total_acumulado),
            goal.estado.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_expense_report<W: Write>(
    writer: W,
    expenses: &[Expense],
    concepts: &ConceptDirectory,
) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(EXPENSE_REPORT_HEADERS)?;
    for expense in expenses {
        let concept = concepts
            .name(expense.concepto_id)
            .map(str::to_string)
            .unwrap_or_else(|| expense.concepto_id.to_string());
        wtr.write_record([
            date_cell(expense.fecha_registro.map(|at| at.date())),
            concept,
            expense.descripcion.clone().unwrap_or_default(),
            money(expense.monto),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_budget_report<W: Write>(writer: W, budgets: &[Budget]) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(BUDGET_REPORT_HEADERS)?;
    for budget in budgets {
        let progress = budget.progress();
        wtr.write_record([
            budget
                .concepto_nombre
                .clone()
                .unwrap_or_else(|| budget.concepto_id.to_string()),
            money(budget.limite),
            money(progress.spent),
            money(progress.percent),
            if budget.activo { "Sí" } else { "No" }.to_string(),
            date_cell(budget.fecha_inicio),
            date_cell(budget.fecha_fin),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concepts::Concept;
    use crate::savings::{GoalFrequency, GoalStatus};
    use rust_decimal_macros::dec;

    fn goal(id: i64, concept: i64, description: Option<&str>) -> SavingsGoal {
        SavingsGoal {
            id,
            concepto_id: concept,
            descripcion: description.map(str::to_string),
            monto_meta: dec!(1000),
            total_acumulado: dec!(250.5),
            frecuencia: GoalFrequency::Mensual,
            fecha_creacion: None,
            fecha_meta: None,
            cantidad_cuotas: None,
            estado: GoalStatus::Active,
        }
    }

    fn render<F: FnOnce(&mut Vec<u8>) -> Result<()>>(f: F) -> String {
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn empty_reports_are_header_only() {
        let directory = ConceptDirectory::default();
        assert_eq!(
            render(|b| write_goal_report(b, &[], &directory)),
            "Concepto,Descripción,Monto Meta,Total Acumulado,Estado\n"
        );
        assert_eq!(
            render(|b| write_expense_report(b, &[], &directory)),
            "Fecha,Concepto,Descripción,Monto\n"
        );
        assert_eq!(
            render(|b| write_budget_report(b, &[])),
            "Concepto,Límite,Gastado,Porcentaje,Activo,Desde,Hasta\n"
        );
    }

    #[test]
    fn goal_rows_use_concept_names_and_quote_commas() {
        let directory = ConceptDirectory::from_concepts(&[Concept {
            id: 1,
            nombre: "Vacaciones".to_string(),
            descripcion: None,
            tipo: None,
        }]);
        let csv = render(|b| {
            write_goal_report(
                b,
                &[goal(1, 1, Some("Playa, sol")), goal(2, 9, None)],
                &directory,
            )
        });
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "Vacaciones,\"Playa, sol\",1000.00,250.50,ACTIVO");
        assert_eq!(lines[2], "Meta de Ahorro,,1000.00,250.50,ACTIVO");
    }

    #[test]
    fn budget_rows_show_clamped_percent() {
        let budget = Budget {
            id: 1,
            concepto_id: 3,
            concepto_nombre: Some("Transporte".to_string()),
            limite: dec!(200),
            activo: true,
            fecha_inicio: NaiveDate::from_ymd_opt(2024, 5, 1),
            fecha_fin: None,
            gastado: Some(dec!(250)),
            porcentaje: Some(125),
            fecha_creacion: None,
        };
        let csv = render(|b| write_budget_report(b, &[budget]));
        assert_eq!(
            csv.lines().nth(1),
            Some("Transporte,200.00,250.00,100.00,Sí,2024-05-01,")
        );
    }

    #[test]
    fn file_names_carry_the_date() {
        let on = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        assert_eq!(ReportKind::Goals.file_name(on), "reporte_ahorros_2024-05-20.csv");
    }
}
