use contracts::shared::amount::parse_decimal;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use thaw::*;

use crate::shared::error::AppError;

/// Inline message of `field` in a form's error map.
pub fn field_error(errors: RwSignal<FieldErrors>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
}

/// Reads a numeric input. An unparsable value records an error under
/// `field` and reads as zero.
pub fn read_decimal(errors: &mut FieldErrors, field: &str, value: &str) -> f64 {
    match parse_decimal(value) {
        Some(v) => v,
        None => {
            errors.add(field, "Valeur numérique invalide");
            0.0
        }
    }
}

/// Adds a DTO's own validation result to the input errors; the first message
/// per field wins.
pub fn combine_errors(mut errors: FieldErrors, validated: Result<(), FieldErrors>) -> Result<(), FieldErrors> {
    if let Err(more) = validated {
        for (field, message) in more.iter() {
            errors.add(field, message);
        }
    }
    errors.into_result()
}

/// Copies server-side field errors into the form before the failure is
/// reported.
pub fn keep_field_errors<T>(errors: RwSignal<FieldErrors>, result: &Result<T, AppError>) {
    if let Err(AppError::Validation(fields)) = result {
        errors.set(fields.clone());
    }
}

/// Labelled text input with its validation message underneath.
#[component]
pub fn FormField(
    #[prop(into)]
    label: String,
    value: RwSignal<String>,
    #[prop(into)]
    error: Signal<Option<String>>,
    #[prop(optional)]
    input_type: InputType,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    view! {
        <div class=move || if error.get().is_some() { "form-field form-field--invalid" } else { "form-field" }>
            <Label>{label}</Label>
            <Input value=value input_type=input_type placeholder=placeholder />
            {move || error.get().map(|message| view! { <span class="form-field__error">{message}</span> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_decimal() {
        let mut errors = FieldErrors::new();
        assert_eq!(read_decimal(&mut errors, "min_deposit", "1 000"), 1000.0);
        assert!(errors.is_empty());
        assert_eq!(read_decimal(&mut errors, "max_deposit", "beaucoup"), 0.0);
        assert_eq!(errors.get("max_deposit"), Some("Valeur numérique invalide"));
    }

    #[test]
    fn test_combine_errors_keeps_parse_message() {
        let mut parsed = FieldErrors::new();
        parsed.add("max_deposit", "Valeur numérique invalide");
        let mut validated = FieldErrors::new();
        validated.add("max_deposit", "Le dépôt maximum doit dépasser le minimum");
        validated.add("name", "Le nom est requis");

        let errors = combine_errors(parsed, Err(validated)).unwrap_err();
        assert_eq!(errors.get("max_deposit"), Some("Valeur numérique invalide"));
        assert_eq!(errors.get("name"), Some("Le nom est requis"));
        assert!(combine_errors(FieldErrors::new(), Ok(())).is_ok());
    }
}
