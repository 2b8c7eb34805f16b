use chrono::{Datelike, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, Result, ValidationError};

/// An expense movement (egreso).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: i64,
    pub monto: Decimal,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub concepto_id: i64,
    #[serde(default)]
    pub fecha_registro: Option<NaiveDateTime>,
}

/// Payload for creating or replacing an expense. The server stamps the date when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub concepto_id: i64,
    pub monto: Decimal,
    pub descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_registro: Option<NaiveDateTime>,
}

impl NewExpense {
    pub fn validate(&self) -> Result<()> {
        if self.monto <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "monto must be greater than zero".to_string(),
            )));
        }
        Ok(())
    }
}

/// Per-concept totals from `/resumen-conceptos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptSummary {
    pub concepto_id: i64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub cantidad_registros: u64,
    pub total_acumulado: Decimal,
}

/// Calendar month used to bucket expenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn of(at: NaiveDateTime) -> Self {
        Self {
            year: at.year(),
            month: at.month(),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = Error;

    /// Parses `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || {
            Error::Validation(ValidationError::InvalidInput(format!(
                "invalid month '{}', expected YYYY-MM",
                s
            )))
        };
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self { year, month })
    }
}

/// Count and sum of one concept's expenses in one month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConceptMonthTotal {
    pub count: u64,
    pub total: Decimal,
}

/// Groups expenses by (month, concept). Undated expenses are skipped.
pub fn group_by_month_and_concept(
    expenses: &[Expense],
) -> BTreeMap<(MonthKey, i64), ConceptMonthTotal> {
    let mut groups: BTreeMap<(MonthKey, i64), ConceptMonthTotal> = BTreeMap::new();
    for expense in expenses {
        let Some(at) = expense.fecha_registro else {
            continue;
        };
        let entry = groups
            .entry((MonthKey::of(at), expense.concepto_id))
            .or_default();
        entry.count += 1;
        entry.total += expense.monto;
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn month_key_parses_and_displays() {
        let key: MonthKey = "2024-05".parse().unwrap();
        assert_eq!(key, MonthKey { year: 2024, month: 5 });
        assert_eq!(key.to_string(), "2024-05");
        assert!("2024-13".parse::<MonthKey>().is_err());
        assert!("mayo".parse::<MonthKey>().is_err());
    }

    fn expense(id: i64, concept: i64, amount: Decimal, at: Option<&str>) -> Expense {
        Expense {
            id,
            monto: amount,
            descripcion: None,
            concepto_id: concept,
            fecha_registro: at.map(|s| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()),
        }
    }

    #[test]
    fn decodes_expense_with_local_datetime() {
        let json = r#"{"id": 1, "monto": 45.5, "descripcion": "Taxi", "conceptoId": 3, "fechaRegistro": "2024-05-20T08:30:00"}"#;
        let e: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(e.monto, dec!(45.50));
        assert_eq!(MonthKey::of(e.fecha_registro.unwrap()).to_string(), "2024-05");
    }

    #[test]
    fn new_expense_omits_missing_date() {
        let payload = NewExpense {
            concepto_id: 3,
            monto: dec!(45.50),
            descripcion: Some("Taxi".to_string()),
            fecha_registro: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("fechaRegistro").is_none());
        assert_eq!(json["conceptoId"], 3);
    }

    #[test]
    fn groups_by_month_and_concept() {
        let expenses = vec![
            expense(1, 3, dec!(10), Some("2024-05-01T10:00:00")),
            expense(2, 3, dec!(5.25), Some("2024-05-28T10:00:00")),
            expense(3, 3, dec!(7), Some("2024-04-30T23:59:59")),
            expense(4, 8, dec!(20), Some("2024-05-03T10:00:00")),
            expense(5, 3, dec!(99), None),
        ];
        let groups = group_by_month_and_concept(&expenses);
        let may = MonthKey { year: 2024, month: 5 };
        let april = MonthKey { year: 2024, month: 4 };

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[&(may, 3)], ConceptMonthTotal { count: 2, total: dec!(15.25) });
        assert_eq!(groups[&(april, 3)].count, 1);
        assert_eq!(groups[&(may, 8)].total, dec!(20));
    }
}
