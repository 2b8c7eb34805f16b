//! Plain-text rendering of the core view-models.

use std::collections::BTreeMap;
use std::fmt::Write;

use gastu_core::budgets::{BudgetCard, BudgetTone, FieldIssue};
use gastu_core::concepts::{Concept, ConceptDirectory};
use gastu_core::expenses::{ConceptDetail, ConceptMonthTotal, ConceptSummary, Expense, MonthKey};
use gastu_core::notifications::{badge_text, FeedTab, FeedView, NotificationCard, NotificationTone};
use gastu_core::preferences::{PreferenceForm, PreferenceTab};
use gastu_core::savings::{GoalCard, InstallmentPlan, SavingsDashboard};
use gastu_core::users::UserProfile;
use gastu_core::utils::time_utils::format_display_date;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

pub fn money(value: Decimal) -> String {
    format!("${:.2}", value)
}

fn date_or_dash(date: Option<chrono::NaiveDate>) -> String {
    date.map(format_display_date).unwrap_or_else(|| "-".to_string())
}

fn bar(percent: Decimal) -> String {
    const WIDTH: usize = 20;
    let filled = (percent / Decimal::from(5))
        .floor()
        .to_usize()
        .unwrap_or(0)
        .min(WIDTH);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(WIDTH - filled))
}

// ─────────────────────────────────────────────────────────────────────────────
// Profile & preferences
// ─────────────────────────────────────────────────────────────────────────────

pub fn profile(profile: &UserProfile) -> String {
    format!(
        "Usuario: {}\nCorreo:  {}\n",
        profile.username,
        profile.email.as_deref().unwrap_or("-")
    )
}

pub fn preference_form(form: &PreferenceForm, only: Option<PreferenceTab>) -> String {
    let tabs: Vec<PreferenceTab> = match only {
        Some(tab) => vec![tab],
        None => PreferenceTab::ALL.to_vec(),
    };
    let mut out = String::new();
    for tab in tabs {
        let _ = writeln!(out, "## {}", tab.title());
        for (field, value) in form.tab(tab) {
            let _ = writeln!(out, "  {:<40} {}", field.key(), value);
        }
    }
    out
}

pub fn preference_tabs() -> String {
    let mut out = String::new();
    for tab in PreferenceTab::ALL {
        let keys: Vec<&str> = tab.fields().into_iter().map(|f| f.key()).collect();
        let _ = writeln!(out, "{:<18} {}", tab.title(), keys.join(", "));
    }
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Notifications
// ─────────────────────────────────────────────────────────────────────────────

fn tone_marker(tone: NotificationTone) -> &'static str {
    match tone {
        NotificationTone::Income => "+",
        NotificationTone::Expense => "-",
        NotificationTone::Warning => "!",
        NotificationTone::Info => "i",
    }
}

fn notification_card(out: &mut String, card: &NotificationCard, compact: bool) {
    let dot = if card.unread { "●" } else { " " };
    if compact {
        let _ = writeln!(
            out,
            "{} [{}] {} {} · {}",
            dot,
            card.id,
            tone_marker(card.tone),
            card.title,
            card.time_ago
        );
        return;
    }
    let _ = writeln!(out, "{} [{}] ({}) {}", dot, card.id, tone_marker(card.tone), card.title);
    if !card.preview.is_empty() {
        let _ = writeln!(out, "      {}", card.preview);
    }
    let _ = writeln!(out, "      {}", card.time_ago);
}

pub fn feed(view: &FeedView, tab: FeedTab, compact: bool) -> String {
    let mut out = String::new();
    let tab_line = [
        (FeedTab::Unread, view.counts.unread),
        (FeedTab::Read, view.counts.read),
        (FeedTab::All, view.counts.all),
    ]
    .iter()
    .map(|(t, n)| {
        if *t == tab {
            format!("*{} ({})*", t.title(), n)
        } else {
            format!("{} ({})", t.title(), n)
        }
    })
    .collect::<Vec<_>>()
    .join(" | ");
    let _ = writeln!(out, "{}", tab_line);

    let cards = view.cards(tab);
    if cards.is_empty() {
        let _ = writeln!(out, "No hay notificaciones");
    }
    for card in cards {
        notification_card(&mut out, card, compact);
    }
    out
}

pub fn badge(count: u64) -> String {
    let count = usize::try_from(count).unwrap_or(usize::MAX);
    match badge_text(count) {
        Some(text) => format!("Notificaciones sin leer: {}", text),
        None => "Sin notificaciones nuevas".to_string(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Savings
// ─────────────────────────────────────────────────────────────────────────────

pub fn savings_dashboard(dashboard: &SavingsDashboard) -> String {
    format!(
        "Total ahorrado: {} | Metas: {} | Completadas: {} | Próximo vencimiento: {}\n",
        money(dashboard.total_saved),
        dashboard.goal_count,
        dashboard.completed_count,
        dashboard.next_deadline.label()
    )
}

pub fn goal_cards(cards: &[&GoalCard], compact: bool) -> String {
    let mut out = String::new();
    if cards.is_empty() {
        let _ = writeln!(out, "No hay metas de ahorro");
    }
    for card in cards {
        let percent = card.progress.display_percent.round_dp(2);
        if compact {
            let _ = writeln!(
                out,
                "[{}] {} {}% ({})",
                card.id, card.title, percent, card.status
            );
            continue;
        }
        let _ = writeln!(out, "[{}] {} - {}", card.id, card.title, card.status);
        if !card.description.is_empty() {
            let _ = writeln!(out, "    {}", card.description);
        }
        let _ = writeln!(
            out,
            "    {} {}%  {} / {}  meta: {}",
            bar(card.progress.display_percent),
            percent,
            money(card.accumulated),
            money(card.target),
            date_or_dash(card.deadline)
        );
    }
    out
}

pub fn installment_plan(plan: &InstallmentPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Meta {}: {} de {}",
        plan.goal.id,
        money(plan.goal.total_acumulado),
        money(plan.goal.monto_meta)
    );
    let _ = writeln!(out, "{:<8} {:<12} {:>12} {:>12}  {}", "Cuota", "Vence", "Asignado", "Aportado", "Estado");
    for row in &plan.rows {
        let contributed = row.contributed.map(money).unwrap_or_else(|| "-".to_string());
        let action = if row.payable { "  (pagar)" } else { "" };
        let _ = writeln!(
            out,
            "{:<8} {:<12} {:>12} {:>12}  {}{}",
            row.id,
            date_or_dash(row.deadline),
            money(row.assigned),
            contributed,
            row.label,
            action
        );
    }
    let _ = writeln!(
        out,
        "Asignado total: {} | Aportado total: {}{}",
        money(plan.assigned_total),
        money(plan.contributed_total),
        if plan.is_reconciled() {
            ""
        } else {
            " (no coincide con el acumulado)"
        }
    );
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Expenses
// ─────────────────────────────────────────────────────────────────────────────

pub fn concept_summaries(summaries: &[ConceptSummary]) -> String {
    let mut out = String::new();
    if summaries.is_empty() {
        let _ = writeln!(out, "No hay egresos registrados");
    }
    for s in summaries {
        let _ = writeln!(
            out,
            "[{}] {:<24} {:>4} registro(s)  {:>12}",
            s.concepto_id,
            s.nombre,
            s.cantidad_registros,
            money(s.total_acumulado)
        );
    }
    out
}

pub fn expenses(items: &[Expense], concepts: &ConceptDirectory) -> String {
    let mut out = String::new();
    for e in items {
        let when = e
            .fecha_registro
            .map(|at| format_display_date(at.date()))
            .unwrap_or_else(|| "-".to_string());
        let concept = concepts
            .name(e.concepto_id)
            .map(str::to_string)
            .unwrap_or_else(|| e.concepto_id.to_string());
        let _ = writeln!(
            out,
            "[{}] {:<10} {:<20} {:>12}  {}",
            e.id,
            when,
            concept,
            money(e.monto),
            e.descripcion.as_deref().unwrap_or("")
        );
    }
    out
}

pub fn concept_detail(detail: &ConceptDetail, concepts: &ConceptDirectory) -> String {
    let mut out = expenses(&detail.expenses, concepts);
    let _ = writeln!(out, "Total: {}", money(detail.total));
    out
}

pub fn month_totals(
    month: MonthKey,
    totals: &BTreeMap<i64, ConceptMonthTotal>,
    concepts: &ConceptDirectory,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Egresos de {}", month);
    if totals.is_empty() {
        let _ = writeln!(out, "Sin movimientos");
    }
    for (concept_id, total) in totals {
        let name = concepts
            .name(*concept_id)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Concepto {}", concept_id));
        let _ = writeln!(
            out,
            "{:<24} {:>4} registro(s)  {:>12}",
            name,
            total.count,
            money(total.total)
        );
    }
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Budgets & concepts
// ─────────────────────────────────────────────────────────────────────────────

fn tone_label(tone: BudgetTone) -> &'static str {
    match tone {
        BudgetTone::Success => "ok",
        BudgetTone::Warning => "atención",
        BudgetTone::Danger => "excedido",
    }
}

pub fn budget_cards(cards: &[&BudgetCard], compact: bool) -> String {
    let mut out = String::new();
    if cards.is_empty() {
        let _ = writeln!(out, "No hay presupuestos");
    }
    for card in cards {
        let state = if card.active { "activo" } else { "inactivo" };
        if compact {
            let _ = writeln!(
                out,
                "[{}] {} {}% {}",
                card.id, card.concept_name, card.progress.percent, state
            );
            continue;
        }
        let _ = writeln!(out, "[{}] {} ({})", card.id, card.concept_name, state);
        let _ = writeln!(
            out,
            "    {} {}% {}  {} / {}",
            bar(card.progress.percent),
            card.progress.percent,
            tone_label(card.progress.tone),
            money(card.progress.spent),
            money(card.limit)
        );
        let _ = writeln!(
            out,
            "    {} - {}",
            date_or_dash(card.starts),
            date_or_dash(card.ends)
        );
    }
    out
}

pub fn field_issues(issues: &[FieldIssue]) -> String {
    let mut out = String::new();
    for issue in issues {
        if issue.label.is_empty() {
            let _ = writeln!(out, "  - {}", issue.message);
        } else {
            let _ = writeln!(out, "  - {}: {}", issue.label, issue.message);
        }
    }
    out
}

pub fn concepts(concepts: &[Concept]) -> String {
    let mut out = String::new();
    if concepts.is_empty() {
        let _ = writeln!(out, "Sin coincidencias");
    }
    for c in concepts {
        let _ = writeln!(out, "[{}] {}", c.id, c.nombre);
    }
    out
}
