/// Generic message shown when a request fails before reaching the backend
pub const CONNECTION_ERROR_MESSAGE: &str = "Error de conexión";

/// Fallback error message when the response body carries nothing usable
pub const GENERIC_ERROR_MESSAGE: &str =
    "No se pudo completar la operación. Verifique los datos ingresados.";

/// Message surfaced when activating a budget collides with another active one
pub const ACTIVE_BUDGET_CONFLICT_MESSAGE: &str =
    "Ya existe un presupuesto activo con el mismo concepto.";

/// Interval of the unread-count poll, in milliseconds
pub const DEFAULT_UNREAD_POLL_INTERVAL_MS: u64 = 3_000;

/// Badge counts above this value render as "99+"
pub const BADGE_DISPLAY_CAP: usize = 99;

/// Notification descriptions are truncated to this many characters in cards
pub const NOTIFICATION_PREVIEW_CHARS: usize = 80;

/// Card title used when a goal's concept cannot be resolved
pub const DEFAULT_GOAL_TITLE: &str = "Meta de Ahorro";

/// Card title used when a notification has no title
pub const DEFAULT_NOTIFICATION_TITLE: &str = "Notificación";

/// Decimal precision for money display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
