use contracts::domain::a008_commission_config::aggregate::{
    CommissionConfig, UpdateCommissionConfigDto,
};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a008_commission_config::api;
use crate::shared::components::form_field::{
    combine_errors, field_error, keep_field_errors, read_decimal, FormField,
};
use crate::shared::mutation::use_mutation;

/// Rate inputs as typed, in percent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateFields {
    pub deposit_rate: String,
    pub withdrawal_rate: String,
    pub is_active: bool,
}

impl RateFields {
    pub fn from_config(config: &CommissionConfig) -> Self {
        Self {
            deposit_rate: config.deposit_rate.to_string(),
            withdrawal_rate: config.withdrawal_rate.to_string(),
            is_active: config.is_active,
        }
    }

    pub fn to_dto(&self) -> Result<UpdateCommissionConfigDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        let dto = UpdateCommissionConfigDto {
            deposit_rate: read_decimal(&mut errors, "deposit_rate", &self.deposit_rate),
            withdrawal_rate: read_decimal(&mut errors, "withdrawal_rate", &self.withdrawal_rate),
            is_active: self.is_active,
        };
        combine_errors(errors, dto.validate())?;
        Ok(dto)
    }
}

#[component]
pub fn CommissionConfigForm(
    open: RwSignal<bool>,
    #[prop(into)]
    editing: Signal<Option<CommissionConfig>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let deposit_rate = RwSignal::new(String::new());
    let withdrawal_rate = RwSignal::new(String::new());
    let is_active = RwSignal::new(true);
    let errors = RwSignal::new(FieldErrors::new());
    let mutation = use_mutation();

    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        let fields = editing
            .get_untracked()
            .map(|c| RateFields::from_config(&c))
            .unwrap_or_default();
        deposit_rate.set(fields.deposit_rate);
        withdrawal_rate.set(fields.withdrawal_rate);
        is_active.set(fields.is_active);
        errors.set(FieldErrors::new());
    });

    let submit = move |_: leptos::ev::MouseEvent| {
        let Some(id) = editing.with_untracked(|c| c.as_ref().map(|c| c.id)) else {
            return;
        };
        let fields = RateFields {
            deposit_rate: deposit_rate.get_untracked(),
            withdrawal_rate: withdrawal_rate.get_untracked(),
            is_active: is_active.get_untracked(),
        };
        let dto = match fields.to_dto() {
            Ok(dto) => dto,
            Err(invalid) => {
                errors.set(invalid);
                return;
            }
        };
        errors.set(FieldErrors::new());
        mutation.run(
            "a008_commission_config::update",
            move || async move {
                let result = api::update(id, dto).await;
                keep_field_errors(errors, &result);
                result
            },
            move |()| {
                open.set(false);
                on_saved.run(());
            },
        );
    };

    let processing = Signal::derive(move || mutation.is_processing());
    let title = move || {
        editing
            .get()
            .and_then(|c| c.platform_name)
            .map(|name| format!("Taux de commission : {}", name))
            .unwrap_or_else(|| "Taux de commission".to_string())
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{title}</DialogTitle>
                    <DialogContent>
                        <div class="form-grid">
                            <FormField
                                label="Taux sur dépôt (%)"
                                value=deposit_rate
                                error=field_error(errors, "deposit_rate")
                            />
                            <FormField
                                label="Taux sur retrait (%)"
                                value=withdrawal_rate
                                error=field_error(errors, "withdrawal_rate")
                            />
                            <Checkbox checked=is_active label="Configuration active" />
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                            "Annuler"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=submit disabled=processing>
                            {move || if processing.get() { "Enregistrement..." } else { "Enregistrer" }}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates_accept_comma() {
        let fields = RateFields {
            deposit_rate: "2,5".to_string(),
            withdrawal_rate: " 1 ".to_string(),
            is_active: true,
        };
        let dto = fields.to_dto().unwrap();
        assert_eq!(dto.deposit_rate, 2.5);
        assert_eq!(dto.withdrawal_rate, 1.0);
    }

    #[test]
    fn test_rate_errors_per_field() {
        let fields = RateFields {
            deposit_rate: "abc".to_string(),
            withdrawal_rate: "150".to_string(),
            is_active: false,
        };
        let errors = fields.to_dto().unwrap_err();
        assert_eq!(errors.get("deposit_rate"), Some("Valeur numérique invalide"));
        assert!(errors.get("withdrawal_rate").is_some());
    }
}
