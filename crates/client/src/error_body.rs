//! Interpretation of non-2xx response bodies.

use serde_json::{Map, Value};

use gastu_core::constants::GENERIC_ERROR_MESSAGE;
use gastu_core::errors::{Error, FieldErrors, ValidationError};

/// Top-level keys of framework error bodies that never name a form field.
const TECHNICAL_KEYS: [&str; 7] = [
    "status",
    "timestamp",
    "path",
    "trace",
    "error",
    "message",
    "mensaje",
];

/// Raw bodies are cut to this many characters before being shown.
const MAX_RAW_MESSAGE_CHARS: usize = 200;

/// Maps a failed response to the error taxonomy.
pub fn classify_failure(status: u16, body: &str) -> Error {
    let message = failure_message(body);
    match status {
        404 => Error::NotFound(message),
        409 => Error::Conflict(message),
        400 | 422 => match field_errors(body) {
            Some(fields) => Error::Validation(ValidationError::Fields(fields)),
            None => Error::api(status, message),
        },
        _ => Error::api(status, message),
    }
}

/// Best human-readable message carried by an error body.
///
/// Prefers `mensaje`, `message` then `error` from a JSON object, then the
/// trimmed raw text, then the generic message.
pub fn failure_message(body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        for key in ["mensaje", "message", "error"] {
            if let Some(Value::String(text)) = map.get(key) {
                let text = text.trim();
                if !text.is_empty() {
                    return text.to_string();
                }
            }
        }
    }

    let raw = body.trim();
    if raw.is_empty() {
        return GENERIC_ERROR_MESSAGE.to_string();
    }
    raw.chars().take(MAX_RAW_MESSAGE_CHARS).collect()
}

/// Extracts per-field validation messages.
///
/// Recognised shapes, in order: `errores` (field -> message), `errors`
/// (field -> message or list of messages), and plain top-level fields
/// whose value is a message or a list of messages.
pub fn field_errors(body: &str) -> Option<FieldErrors> {
    let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) else {
        return None;
    };

    let fields = match (map.get("errores"), map.get("errors")) {
        (Some(Value::Object(errores)), _) => collect_messages(errores, false),
        (_, Some(Value::Object(errors))) => collect_messages(errors, false),
        _ => collect_messages(&map, true),
    };

    (!fields.is_empty()).then_some(fields)
}

fn collect_messages(map: &Map<String, Value>, skip_technical: bool) -> FieldErrors {
    let mut fields = FieldErrors::new();
    for (key, value) in map {
        if skip_technical && TECHNICAL_KEYS.contains(&key.to_lowercase().as_str()) {
            continue;
        }
        if let Some(message) = message_of(value) {
            fields.insert(key.clone(), message);
        }
    }
    fields
}

fn message_of(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Array(items) => {
            let parts: Vec<&str> = items
                .iter()
                .filter_map(Value::as_str)
                .filter(|s| !s.trim().is_empty())
                .collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanish_error_map_is_a_validation_error() {
        let body = r#"{"errores": {"limite": "debe ser mayor que 0", "conceptoId": "requerido"}}"#;
        match classify_failure(400, body) {
            Error::Validation(ValidationError::Fields(fields)) => {
                assert_eq!(fields.len(), 2);
                assert_eq!(fields.get("limite"), Some("debe ser mayor que 0"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn english_error_lists_are_joined() {
        let body = r#"{"errors": {"fechaFin": ["no puede ser nula", "debe ser futura"]}}"#;
        let fields = field_errors(body).unwrap();
        assert_eq!(fields.get("fechaFin"), Some("no puede ser nula, debe ser futura"));
    }

    #[test]
    fn direct_fields_skip_technical_keys() {
        let body = r#"{
            "timestamp": "2024-05-01T10:00:00",
            "status": 400,
            "Path": "/api/presupuestos",
            "limite": "debe ser positivo",
            "fechaInicio": ["requerida"],
            "activo": true
        }"#;
        let fields = field_errors(body).unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("limite"), Some("debe ser positivo"));
        assert_eq!(fields.get("fechaInicio"), Some("requerida"));
    }

    #[test]
    fn framework_error_body_is_not_a_field_error() {
        let body = r#"{"timestamp":"2024-05-01","status":400,"error":"Bad Request","path":"/api/usuario"}"#;
        assert!(field_errors(body).is_none());
        assert_eq!(
            classify_failure(400, body).to_string(),
            "API error (400): Bad Request"
        );
    }

    #[test]
    fn backend_message_keys_are_not_fields() {
        let body = r#"{"mensaje": "La contraseña actual es incorrecta"}"#;
        assert!(field_errors(body).is_none());
        assert_eq!(failure_message(body), "La contraseña actual es incorrecta");
    }

    #[test]
    fn status_codes_map_to_variants() {
        assert!(matches!(
            classify_failure(404, ""),
            Error::NotFound(m) if m == GENERIC_ERROR_MESSAGE
        ));
        assert!(matches!(
            classify_failure(409, "ya activo"),
            Error::Conflict(m) if m == "ya activo"
        ));
        assert!(matches!(
            classify_failure(500, r#"{"message":"boom"}"#),
            Error::Api { status: 500, message } if message == "boom"
        ));
    }

    #[test]
    fn raw_text_is_trimmed_and_capped() {
        let long = format!("  {}  ", "x".repeat(300));
        let message = failure_message(&long);
        assert_eq!(message.chars().count(), 200);
        assert!(message.starts_with('x'));
    }
}
