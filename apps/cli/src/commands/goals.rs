use gastu_core::export::{write_goal_report, ReportKind};
use gastu_core::savings::{Contribution, NewSavingsGoal, SavingsGoalUpdate};

use super::{report_file, report_written};
use crate::cli::{GoalFields, GoalsCommand};
use crate::main_lib::AppContext;
use crate::render;

pub async fn run(cmd: GoalsCommand, ctx: &AppContext, compact: bool) -> anyhow::Result<()> {
    let service = &ctx.savings_service;
    match cmd {
        GoalsCommand::List { status, search } => {
            let board = service.load_board(status).await?;
            print!("{}", render::savings_dashboard(&board.dashboard));
            let cards = board.search(search.as_deref().unwrap_or(""));
            print!("{}", render::goal_cards(&cards, compact));
        }
        GoalsCommand::Show { id } => {
            let plan = service.installment_plan(id).await?;
            print!("{}", render::installment_plan(&plan));
        }
        GoalsCommand::Next { id } => match service.next_installment(id).await? {
            Some(next) => println!(
                "Cuota {}: {} vence {}",
                next.id,
                render::money(next.aporte_asignado),
                next.fecha_limite
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".to_string())
            ),
            None => println!("La meta {} no tiene cuotas pendientes", id),
        },
        GoalsCommand::Create { concept, fields } => {
            let goal = service
                .create_goal(NewSavingsGoal {
                    concepto_id: concept,
                    descripcion: fields.description,
                    monto_meta: fields.target,
                    frecuencia: fields.frequency,
                    fecha_meta: fields.deadline,
                    cantidad_cuotas: fields.installments,
                })
                .await?;
            println!("Meta {} creada", goal.id);
        }
        GoalsCommand::Edit { id, fields } => {
            let goal = service.update_goal(id, update_from(fields)).await?;
            println!("Meta {} actualizada", goal.id);
        }
        GoalsCommand::Delete { id } => {
            service.delete_goal(id).await?;
            println!("Meta {} eliminada", id);
        }
        GoalsCommand::Contribute {
            goal,
            installment,
            amount,
            description,
        } => {
            let paid = service
                .contribute(
                    goal,
                    installment,
                    Contribution {
                        aporte: amount,
                        descripcion: description,
                    },
                )
                .await?;
            println!(
                "Aporte de {} registrado en la cuota {}",
                render::money(amount),
                paid.id
            );
        }
        GoalsCommand::Export { status, output } => {
            let board = service.load_board(status).await?;
            let (path, file) = report_file(output, ReportKind::Goals)?;
            write_goal_report(file, &board.goals, &board.concepts)?;
            report_written(&path, board.goals.len());
        }
    }
    Ok(())
}

fn update_from(fields: GoalFields) -> SavingsGoalUpdate {
    SavingsGoalUpdate {
        descripcion: fields.description,
        monto_meta: fields.target,
        frecuencia: fields.frequency,
        fecha_meta: fields.deadline,
        cantidad_cuotas: fields.installments,
    }
}
