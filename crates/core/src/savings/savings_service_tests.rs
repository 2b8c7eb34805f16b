#[cfg(test)]
mod tests {
    use crate::concepts::{Concept, ConceptApiTrait, ConceptDirectory, ConceptKind};
    use crate::errors::{Error, Result};
    use crate::savings::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::{Arc, Mutex};

    // --- Mock SavingsApi ---
    #[derive(Default)]
    struct MockSavingsApi {
        goals: Mutex<Vec<SavingsGoal>>,
        installments: Mutex<Vec<Installment>>,
        contributions: Mutex<Vec<(i64, i64, Contribution)>>,
        requested_status: Mutex<Vec<Option<GoalStatus>>>,
    }

    #[async_trait]
    impl SavingsApiTrait for MockSavingsApi {
        async fn list_goals(&self, status: Option<GoalStatus>) -> Result<Vec<SavingsGoal>> {
            self.requested_status.lock().unwrap().push(status);
            let goals = self.goals.lock().unwrap();
            Ok(goals
                .iter()
                .filter(|g| status.map_or(true, |s| g.estado == s))
                .cloned()
                .collect())
        }

        async fn get_goal(&self, id: i64) -> Result<SavingsGoal> {
            self.goals
                .lock()
                .unwrap()
                .iter()
                .find(|g| g.id == id)
                .cloned()
                .ok_or_else(|| Error::NotFound(format!("Ahorro {}", id)))
        }

        async fn create_goal(&self, _goal: &NewSavingsGoal) -> Result<SavingsGoal> {
            unimplemented!()
        }

        async fn update_goal(&self, _id: i64, _goal: &SavingsGoalUpdate) -> Result<SavingsGoal> {
            unimplemented!()
        }

        async fn delete_goal(&self, _id: i64) -> Result<()> {
            unimplemented!()
        }

        async fn list_installments(&self, goal_id: i64) -> Result<Vec<Installment>> {
            Ok(self
                .installments
                .lock()
                .unwrap()
                .iter()
                .filter(|i| i.meta_id == goal_id)
                .cloned()
                .collect())
        }

        async fn next_installment(&self, goal_id: i64) -> Result<Installment> {
            self.installments
                .lock()
                .unwrap()
                .iter()
                .find(|i| i.meta_id == goal_id && i.estado == InstallmentStatus::Pendiente)
                .cloned()
                .ok_or_else(|| Error::NotFound("Sin cuotas disponibles".to_string()))
        }

        async fn contribute(
            &self,
            goal_id: i64,
            installment_id: i64,
            contribution: &Contribution,
        ) -> Result<Installment> {
            self.contributions
                .lock()
                .unwrap()
                .push((goal_id, installment_id, contribution.clone()));
            let mut installments = self.installments.lock().unwrap();
            let installment = installments
                .iter_mut()
                .find(|i| i.id == installment_id)
                .ok_or_else(|| Error::NotFound(format!("Cuota {}", installment_id)))?;
            installment.aporte = Some(contribution.aporte);
            installment.estado = InstallmentStatus::Aportado;
            Ok(installment.clone())
        }
    }

    // --- Mock ConceptApi ---
    struct MockConceptApi {
        concepts: Vec<Concept>,
        fail: bool,
    }

    #[async_trait]
    impl ConceptApiTrait for MockConceptApi {
        async fn concepts_by_kind(&self, _kind: ConceptKind) -> Result<Vec<Concept>> {
            if self.fail {
                return Err(Error::Transport("timeout".to_string()));
            }
            Ok(self.concepts.clone())
        }

        async fn get_concept(&self, _id: i64) -> Result<Concept> {
            unimplemented!()
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn goal(id: i64, concept: i64, target: Decimal, saved: Decimal, status: GoalStatus, deadline: Option<NaiveDate>) -> SavingsGoal {
        SavingsGoal {
            id,
            concepto_id: concept,
            descripcion: Some(format!("Meta {}", id)),
            monto_meta: target,
            total_acumulado: saved,
            frecuencia: GoalFrequency::Mensual,
            fecha_creacion: Some(date(2024, 1, 1)),
            fecha_meta: deadline,
            cantidad_cuotas: Some(4),
            estado: status,
        }
    }

    fn installment(id: i64, goal: i64, assigned: Decimal, paid: Option<Decimal>, status: InstallmentStatus) -> Installment {
        Installment {
            id,
            meta_id: goal,
            aporte_asignado: assigned,
            aporte: paid,
            fecha_limite: Some(date(2024, 6, id as u32)),
            estado: status,
            fecha_registro: None,
        }
    }

    fn concept(id: i64, nombre: &str) -> Concept {
        Concept {
            id,
            nombre: nombre.to_string(),
            descripcion: None,
            tipo: Some("AHORRO".to_string()),
        }
    }

    fn service(api: Arc<MockSavingsApi>, concepts_fail: bool) -> SavingsService {
        let concepts = Arc::new(MockConceptApi {
            concepts: vec![concept(1, "Vacaciones"), concept(2, "Fondo de emergencia")],
            fail: concepts_fail,
        });
        SavingsService::new(api, concepts)
    }

    #[test]
    fn dashboard_counts_completed_and_nearest_pending_deadline() {
        let today = date(2024, 5, 20);
        let goals = vec![
            goal(1, 1, dec!(1000), dec!(1000), GoalStatus::Active, Some(date(2024, 5, 21))),
            goal(2, 2, dec!(500), dec!(100), GoalStatus::Active, Some(date(2024, 6, 1))),
            goal(3, 2, dec!(800), dec!(50), GoalStatus::Completed, Some(date(2024, 5, 22))),
            goal(4, 1, dec!(300), dec!(0), GoalStatus::NotStarted, Some(date(2024, 7, 1))),
        ];
        let dashboard = SavingsDashboard::compute(&goals, today);

        assert_eq!(dashboard.total_saved, dec!(1150));
        assert_eq!(dashboard.goal_count, 4);
        assert_eq!(dashboard.completed_count, 2);
        assert_eq!(dashboard.next_deadline, NextDeadline::InDays(12));
        assert_eq!(dashboard.next_deadline.label(), "12 días");
    }

    #[test]
    fn dashboard_reports_overdue_and_empty() {
        let today = date(2024, 5, 20);
        let overdue = vec![goal(1, 1, dec!(100), dec!(10), GoalStatus::Active, Some(date(2024, 5, 20)))];
        assert_eq!(SavingsDashboard::compute(&overdue, today).next_deadline.label(), "Vencida");

        let empty = SavingsDashboard::compute(&[], today);
        assert_eq!(empty.total_saved, Decimal::ZERO);
        assert_eq!(empty.next_deadline.label(), "-");
    }

    #[test]
    fn cards_use_concept_names_with_fallback_and_search() {
        let goals = vec![
            goal(1, 1, dec!(100), dec!(10), GoalStatus::Active, None),
            goal(2, 99, dec!(100), dec!(10), GoalStatus::Active, None),
        ];
        let directory = ConceptDirectory::from_concepts(&[concept(1, "Vacaciones")]);
        let board = SavingsBoard::build(goals, directory, date(2024, 5, 20));

        assert_eq!(board.cards[0].title, "Vacaciones");
        assert_eq!(board.cards[1].title, "Meta de Ahorro");
        assert_eq!(board.search("vaca").len(), 1);
        assert_eq!(board.search("meta 2")[0].id, 2);
        assert_eq!(board.search("  ").len(), 2);
    }

    #[tokio::test]
    async fn load_board_passes_status_filter_and_survives_concept_failure() {
        let api = Arc::new(MockSavingsApi::default());
        api.goals.lock().unwrap().extend([
            goal(1, 1, dec!(100), dec!(10), GoalStatus::Active, None),
            goal(2, 2, dec!(100), dec!(100), GoalStatus::Completed, None),
        ]);
        let service = service(api.clone(), true);

        let board = service.load_board(Some(GoalStatus::Active)).await.unwrap();
        assert_eq!(board.goals.len(), 1);
        assert_eq!(board.cards[0].title, "Meta de Ahorro");
        assert_eq!(
            *api.requested_status.lock().unwrap(),
            vec![Some(GoalStatus::Active)]
        );
    }

    #[tokio::test]
    async fn installment_plan_labels_rows_and_compares_totals() {
        let api = Arc::new(MockSavingsApi::default());
        api.goals
            .lock()
            .unwrap()
            .push(goal(7, 1, dec!(400), dec!(100), GoalStatus::Active, None));
        api.installments.lock().unwrap().extend([
            installment(1, 7, dec!(100), Some(dec!(100)), InstallmentStatus::Aportado),
            installment(2, 7, dec!(100), None, InstallmentStatus::Pendiente),
            installment(3, 7, dec!(100), None, InstallmentStatus::Perdido),
            installment(4, 7, dec!(150), None, InstallmentStatus::Pendiente),
        ]);
        let service = service(api, false);

        let plan = service.installment_plan(7).await.unwrap();
        let labels: Vec<_> = plan.rows.iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["Pagado", "Pendiente", "Vencido", "Pendiente"]);
        assert_eq!(
            plan.rows.iter().filter(|r| r.payable).count(),
            3
        );
        // assigned sum differs from the target; only reported, never enforced
        assert_eq!(plan.assigned_total, dec!(450));
        assert_eq!(plan.contributed_total, dec!(100));
        assert!(plan.is_reconciled());
    }

    #[tokio::test]
    async fn next_installment_maps_not_found_to_none() {
        let api = Arc::new(MockSavingsApi::default());
        api.installments
            .lock()
            .unwrap()
            .push(installment(1, 7, dec!(100), Some(dec!(100)), InstallmentStatus::Aportado));
        let service = service(api.clone(), false);

        assert_eq!(service.next_installment(7).await.unwrap(), None);

        api.installments
            .lock()
            .unwrap()
            .push(installment(2, 7, dec!(100), None, InstallmentStatus::Pendiente));
        assert_eq!(service.next_installment(7).await.unwrap().map(|i| i.id), Some(2));
    }

    #[tokio::test]
    async fn contribute_validates_before_sending() {
        let api = Arc::new(MockSavingsApi::default());
        api.installments
            .lock()
            .unwrap()
            .push(installment(2, 7, dec!(100), None, InstallmentStatus::Pendiente));
        let service = service(api.clone(), false);

        let rejected = service
            .contribute(7, 2, Contribution { aporte: dec!(-5), descripcion: None })
            .await;
        assert!(matches!(rejected, Err(Error::Validation(_))));
        assert!(api.contributions.lock().unwrap().is_empty());

        let updated = service
            .contribute(7, 2, Contribution { aporte: dec!(100), descripcion: Some("junio".into()) })
            .await
            .unwrap();
        assert_eq!(updated.estado, InstallmentStatus::Aportado);
        assert_eq!(api.contributions.lock().unwrap().len(), 1);
    }
}
