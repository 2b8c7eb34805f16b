//! Alert preference record, field metadata and form view-model.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::errors::{Error, Result, ValidationError};

/// Value domain of a single preference field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PreferenceKind {
    Flag,
    Percent,
    Days,
    Hours,
    Count,
    Amount,
}

/// Section of the alert configuration a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PreferenceGroup {
    General,
    Trends,
    Concepts,
    Timing,
    Savings,
    MicroSpending,
    Predictive,
    Consistency,
}

/// A typed preference value.
#[derive(Debug, Clone, PartialEq)]
pub enum PreferenceValue {
    Flag(bool),
    Number(i32),
    Amount(Decimal),
}

impl PreferenceValue {
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            PreferenceValue::Flag(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<i32> {
        match self {
            PreferenceValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_amount(&self) -> Option<Decimal> {
        match self {
            PreferenceValue::Amount(v) => Some(*v),
            PreferenceValue::Number(v) => Some(Decimal::from(*v)),
            _ => None,
        }
    }

    /// Parses user input for a field of the given kind.
    pub fn parse(kind: PreferenceKind, raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let invalid = || {
            Error::Validation(ValidationError::InvalidInput(format!(
                "'{}' is not a valid {:?} value",
                raw, kind
            )))
        };
        match kind {
            PreferenceKind::Flag => match raw.to_ascii_lowercase().as_str() {
                "true" | "on" | "yes" | "si" | "1" => Ok(PreferenceValue::Flag(true)),
                "false" | "off" | "no" | "0" => Ok(PreferenceValue::Flag(false)),
                _ => Err(invalid()),
            },
            PreferenceKind::Amount => Decimal::from_str(raw)
                .map(PreferenceValue::Amount)
                .map_err(|_| invalid()),
            _ => raw
                .parse::<i32>()
                .map(PreferenceValue::Number)
                .map_err(|_| invalid()),
        }
    }
}

impl fmt::Display for PreferenceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferenceValue::Flag(v) => write!(f, "{}", if *v { "on" } else { "off" }),
            PreferenceValue::Number(v) => write!(f, "{}", v),
            PreferenceValue::Amount(v) => write!(f, "{:.2}", v),
        }
    }
}

macro_rules! preference_type {
    (Flag) => { bool };
    (Percent) => { i32 };
    (Days) => { i32 };
    (Hours) => { i32 };
    (Count) => { i32 };
    (Amount) => { Decimal };
}

macro_rules! preference_value {
    (Flag, $v:expr) => { PreferenceValue::Flag($v) };
    (Amount, $v:expr) => { PreferenceValue::Amount($v) };
    ($other:ident, $v:expr) => { PreferenceValue::Number($v) };
}

macro_rules! preference_extract {
    (Flag, $v:expr) => { $v.as_flag() };
    (Amount, $v:expr) => { $v.as_amount() };
    ($other:ident, $v:expr) => { $v.as_number() };
}

macro_rules! alert_preferences {
    ($( $variant:ident => $field:ident, $key:literal, $kind:ident, $group:ident, $fallback:expr; )+) => {
        /// Full alert configuration record as exchanged with
        /// `/api/movimientos/preferencias`.
        ///
        /// Every field is optional on the wire. Absent fields are not sent back,
        /// so a record decoded from the server round-trips without inventing values.
        /// Keys outside the field table are kept in `extra` and sent back as received.
        #[skip_serializing_none]
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct AlertPreferences {
            pub id: Option<i64>,
            pub usuario_id: Option<i64>,
            $( pub $field: Option<preference_type!($kind)>, )+
            #[serde(flatten)]
            pub extra: serde_json::Map<String, serde_json::Value>,
        }

        /// Identifies one configurable field of [`AlertPreferences`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum PreferenceField {
            $( $variant, )+
        }

        impl PreferenceField {
            pub const ALL: &'static [PreferenceField] = &[ $( PreferenceField::$variant, )+ ];

            /// JSON key used by the backend.
            pub fn key(self) -> &'static str {
                match self {
                    $( PreferenceField::$variant => $key, )+
                }
            }

            pub fn kind(self) -> PreferenceKind {
                match self {
                    $( PreferenceField::$variant => PreferenceKind::$kind, )+
                }
            }

            pub fn group(self) -> PreferenceGroup {
                match self {
                    $( PreferenceField::$variant => PreferenceGroup::$group, )+
                }
            }

            /// Value shown in the form when the server record omits the field.
            pub fn fallback(self) -> PreferenceValue {
                match self {
                    $( PreferenceField::$variant => preference_value!($kind, $fallback), )+
                }
            }
        }

        impl AlertPreferences {
            pub fn get(&self, field: PreferenceField) -> Option<PreferenceValue> {
                match field {
                    $( PreferenceField::$variant => self.$field.map(|v| preference_value!($kind, v)), )+
                }
            }

            /// Sets one field after checking the value against the field's kind and range.
            pub fn set(&mut self, field: PreferenceField, value: PreferenceValue) -> Result<()> {
                validate_value(field, &value)?;
                match field {
                    $(
                        PreferenceField::$variant => {
                            self.$field = Some(
                                preference_extract!($kind, value).ok_or_else(|| kind_mismatch(field, &value))?,
                            );
                        }
                    )+
                }
                Ok(())
            }
        }
    };
}

alert_preferences! {
    WarningThresholdPercent => umbral_advertencia_porcentaje, "umbralAdvertenciaPorcentaje", Percent, General, 80;
    LargeExpensePercent => egreso_grande_porcentaje, "egresoGrandePorcentaje", Percent, General, 20;
    LargeExpenseAlert => alerta_egreso_grande_activa, "alertaEgresoGrandeActiva", Flag, General, true;

    IncrementalSpendingAlert => alert_gasto_incremental_enabled, "alertGastoIncrementalEnabled", Flag, Trends, true;
    IncrementalSpendingPercent => alert_gasto_incremental_porcentaje, "alertGastoIncrementalPorcentaje", Percent, Trends, 25;
    IncrementalSpendingMonths => alert_gasto_incremental_meses, "alertGastoIncrementalMeses", Count, Trends, 3;
    IncomeDropAlert => alert_reduccion_ingresos_enabled, "alertReduccionIngresosEnabled", Flag, Trends, true;
    IncomeDropPercent => alert_reduccion_ingresos_porcentaje, "alertReduccionIngresosPorcentaje", Percent, Trends, 20;
    UnusualPatternAlert => alert_patron_inusual_enabled, "alertPatronInusualEnabled", Flag, Trends, true;

    SpendingConcentrationAlert => alert_concentracion_gastos_enabled, "alertConcentracionGastosEnabled", Flag, Concepts, true;
    SpendingConcentrationPercent => alert_concentracion_gastos_porcentaje, "alertConcentracionGastosPorcentaje", Percent, Concepts, 50;
    UnusedConceptAlert => alert_concepto_sin_uso_enabled, "alertConceptoSinUsoEnabled", Flag, Concepts, true;
    UnusedConceptDays => alert_concepto_sin_uso_dias, "alertConceptoSinUsoDias", Days, Concepts, 30;

    SpendingVelocityAlert => alert_velocidad_gasto_enabled, "alertVelocidadGastoEnabled", Flag, Timing, true;
    IncomeInactivityAlert => alert_inactividad_ingresos_enabled, "alertInactividadIngresosEnabled", Flag, Timing, true;
    IncomeInactivityDays => alert_inactividad_dias, "alertInactividadDias", Days, Timing, 7;
    ClusteredExpensesAlert => alert_egresos_agrupados_enabled, "alertEgresosAgrupadosEnabled", Flag, Timing, true;
    ClusteredExpensesCount => alert_egresos_agrupados_cantidad, "alertEgresosAgrupadosCantidad", Count, Timing, 5;
    ClusteredExpensesHours => alert_egresos_agrupados_horas, "alertEgresosAgrupadosHoras", Hours, Timing, 2;

    MonthlySavingsTarget => meta_ahorro_mensual, "metaAhorroMensual", Amount, Savings, dec!(0.00);
    SavingsTargetAlert => alert_meta_ahorro_enabled, "alertMetaAhorroEnabled", Flag, Savings, true;
    CriticalBalanceAlert => alert_balance_critico_enabled, "alertBalanceCriticoEnabled", Flag, Savings, true;

    MicroSpendingAlert => alert_micro_gastos_enabled, "alertMicroGastosEnabled", Flag, MicroSpending, true;
    MicroSpendingCount => alert_micro_gastos_cantidad, "alertMicroGastosCantidad", Count, MicroSpending, 10;
    MicroSpendingMaxAmount => alert_micro_gastos_monto_max, "alertMicroGastosMontoMax", Amount, MicroSpending, dec!(5.00);
    AntExpensesAlert => alert_gastos_hormiga_enabled, "alertGastosHormigaEnabled", Flag, MicroSpending, true;
    AntExpensesMaxAmount => alert_gastos_hormiga_monto_max, "alertGastosHormigaMontoMax", Amount, MicroSpending, dec!(10.00);

    OverspendProjectionAlert => alert_proyeccion_sobregasto_enabled, "alertProyeccionSobregastoEnabled", Flag, Predictive, true;
    PeriodComparisonAlert => alert_comparacion_periodo_enabled, "alertComparacionPeriodoEnabled", Flag, Predictive, true;
    CriticalDayOfMonthAlert => alert_dia_mes_critico_enabled, "alertDiaMesCriticoEnabled", Flag, Predictive, true;
    CriticalDayOfMonthPercent => alert_dia_mes_critico_porcentaje, "alertDiaMesCriticoPorcentaje", Percent, Predictive, 70;

    UncategorizedExpenseAlert => alert_egreso_sin_concepto_enabled, "alertEgresoSinConceptoEnabled", Flag, Consistency, true;
    UncategorizedExpenseCount => alert_egreso_sin_concepto_cantidad, "alertEgresoSinConceptoCantidad", Count, Consistency, 5;
    UnusualIncomeAlert => alert_ingreso_inusual_enabled, "alertIngresoInusualEnabled", Flag, Consistency, true;
    UnusualIncomeMultiplier => alert_ingreso_inusual_multiplicador, "alertIngresoInusualMultiplicador", Count, Consistency, 2;
}

impl PreferenceField {
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.key() == key)
    }
}

impl AlertPreferences {
    /// Overlays every edit onto this record. Fields without an edit keep their value.
    pub fn apply(&mut self, edits: &PreferenceEdits) -> Result<()> {
        for (field, value) in edits.iter() {
            self.set(field, value.clone())?;
        }
        Ok(())
    }
}

fn kind_mismatch(field: PreferenceField, value: &PreferenceValue) -> Error {
    Error::Validation(ValidationError::InvalidInput(format!(
        "{} expects a {:?} value, got {:?}",
        field.key(),
        field.kind(),
        value
    )))
}

fn validate_value(field: PreferenceField, value: &PreferenceValue) -> Result<()> {
    let out_of_range = |detail: &str| {
        Error::Validation(ValidationError::InvalidInput(format!(
            "{} {}",
            field.key(),
            detail
        )))
    };
    match (field.kind(), value) {
        (PreferenceKind::Percent, PreferenceValue::Number(n)) if !(0..=100).contains(n) => {
            Err(out_of_range("must be between 0 and 100"))
        }
        (PreferenceKind::Days | PreferenceKind::Hours | PreferenceKind::Count, PreferenceValue::Number(n))
            if *n < 0 =>
        {
            Err(out_of_range("must not be negative"))
        }
        (PreferenceKind::Amount, PreferenceValue::Amount(a)) if a.is_sign_negative() => {
            Err(out_of_range("must not be negative"))
        }
        _ => Ok(()),
    }
}

/// Values collected from a form, keyed by field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferenceEdits(BTreeMap<PreferenceField, PreferenceValue>);

impl PreferenceEdits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: PreferenceField, value: PreferenceValue) -> Self {
        self.0.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: PreferenceField, value: PreferenceValue) {
        self.0.insert(field, value);
    }

    /// Parses `key=value` input, e.g. `egresoGrandePorcentaje=25`.
    pub fn parse_assignment(&mut self, assignment: &str) -> Result<()> {
        let (key, raw) = assignment.split_once('=').ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(format!(
                "expected key=value, got '{}'",
                assignment
            )))
        })?;
        let field = PreferenceField::from_key(key.trim()).ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(format!(
                "unknown preference '{}'",
                key.trim()
            )))
        })?;
        let value = PreferenceValue::parse(field.kind(), raw)?;
        self.0.insert(field, value);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (PreferenceField, &PreferenceValue)> {
        self.0.iter().map(|(f, v)| (*f, v))
    }

    pub fn fields(&self) -> impl Iterator<Item = PreferenceField> + '_ {
        self.0.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Tabs of the preferences screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceTab {
    General,
    Notifications,
    Trends,
    Concepts,
    Timing,
    Savings,
    MicroSpending,
    Predictive,
    Consistency,
}

impl PreferenceTab {
    pub const ALL: &'static [PreferenceTab] = &[
        PreferenceTab::General,
        PreferenceTab::Notifications,
        PreferenceTab::Trends,
        PreferenceTab::Concepts,
        PreferenceTab::Timing,
        PreferenceTab::Savings,
        PreferenceTab::MicroSpending,
        PreferenceTab::Predictive,
        PreferenceTab::Consistency,
    ];

    pub fn title(self) -> &'static str {
        match self {
            PreferenceTab::General => "Preferencias",
            PreferenceTab::Notifications => "Notificaciones",
            PreferenceTab::Trends => "Tendencias",
            PreferenceTab::Concepts => "Conceptos",
            PreferenceTab::Timing => "Tiempo",
            PreferenceTab::Savings => "Ahorro y balance",
            PreferenceTab::MicroSpending => "Micro-gastos",
            PreferenceTab::Predictive => "Predictivas",
            PreferenceTab::Consistency => "Inconsistencias",
        }
    }

    /// The known field list a tab may read and submit.
    pub fn fields(self) -> Vec<PreferenceField> {
        let group = match self {
            PreferenceTab::Notifications => {
                return vec![
                    PreferenceField::LargeExpensePercent,
                    PreferenceField::LargeExpenseAlert,
                ];
            }
            PreferenceTab::General => PreferenceGroup::General,
            PreferenceTab::Trends => PreferenceGroup::Trends,
            PreferenceTab::Concepts => PreferenceGroup::Concepts,
            PreferenceTab::Timing => PreferenceGroup::Timing,
            PreferenceTab::Savings => PreferenceGroup::Savings,
            PreferenceTab::MicroSpending => PreferenceGroup::MicroSpending,
            PreferenceTab::Predictive => PreferenceGroup::Predictive,
            PreferenceTab::Consistency => PreferenceGroup::Consistency,
        };
        PreferenceField::ALL
            .iter()
            .copied()
            .filter(|f| f.group() == group)
            .collect()
    }

    pub fn contains(self, field: PreferenceField) -> bool {
        self.fields().contains(&field)
    }
}

impl FromStr for PreferenceTab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let tab = match s.to_ascii_lowercase().as_str() {
            "general" | "preferencias" => PreferenceTab::General,
            "notifications" | "notificaciones" => PreferenceTab::Notifications,
            "trends" | "tendencias" => PreferenceTab::Trends,
            "concepts" | "conceptos" => PreferenceTab::Concepts,
            "timing" | "tiempo" => PreferenceTab::Timing,
            "savings" | "ahorro" => PreferenceTab::Savings,
            "micro" | "micro-spending" => PreferenceTab::MicroSpending,
            "predictive" | "predictivas" => PreferenceTab::Predictive,
            "consistency" | "inconsistencias" => PreferenceTab::Consistency,
            other => {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "unknown preferences tab '{}'",
                    other
                ))))
            }
        };
        Ok(tab)
    }
}

/// Populated preference form: every field resolved, plus the snapshot it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceForm {
    pub snapshot: AlertPreferences,
    values: BTreeMap<PreferenceField, PreferenceValue>,
}

impl PreferenceForm {
    pub fn from_snapshot(snapshot: AlertPreferences) -> Self {
        let values = PreferenceField::ALL
            .iter()
            .map(|&field| {
                let value = snapshot.get(field).unwrap_or_else(|| field.fallback());
                (field, value)
            })
            .collect();
        Self { snapshot, values }
    }

    pub fn value(&self, field: PreferenceField) -> &PreferenceValue {
        // every field is populated in from_snapshot
        &self.values[&field]
    }

    pub fn tab(&self, tab: PreferenceTab) -> Vec<(PreferenceField, &PreferenceValue)> {
        tab.fields()
            .into_iter()
            .map(|field| (field, self.value(field)))
            .collect()
    }
}
