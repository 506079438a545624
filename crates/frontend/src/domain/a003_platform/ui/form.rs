use contracts::domain::a003_platform::aggregate::{Platform, PlatformDto};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a003_platform::api;
use crate::shared::components::form_field::{
    combine_errors, field_error, keep_field_errors, read_decimal, FormField,
};
use crate::shared::mutation::use_mutation;

/// Raw text of the platform form as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlatformFields {
    pub name: String,
    pub image: String,
    pub is_active: bool,
    pub min_deposit: String,
    pub max_deposit: String,
    pub min_withdrawal: String,
    pub max_withdrawal: String,
    pub city: String,
    pub street: String,
}

impl PlatformFields {
    pub fn from_platform(platform: &Platform) -> Self {
        Self {
            name: platform.name.clone(),
            image: platform.image.clone().unwrap_or_default(),
            is_active: platform.is_active,
            min_deposit: platform.min_deposit.to_string(),
            max_deposit: platform.max_deposit.to_string(),
            min_withdrawal: platform.min_withdrawal.to_string(),
            max_withdrawal: platform.max_withdrawal.to_string(),
            city: platform.city.clone().unwrap_or_default(),
            street: platform.street.clone().unwrap_or_default(),
        }
    }

    pub fn to_dto(&self) -> Result<PlatformDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        let dto = PlatformDto {
            name: self.name.trim().to_string(),
            image: optional(&self.image),
            is_active: self.is_active,
            min_deposit: read_decimal(&mut errors, "min_deposit", &self.min_deposit),
            max_deposit: read_decimal(&mut errors, "max_deposit", &self.max_deposit),
            min_withdrawal: read_decimal(&mut errors, "min_withdrawal", &self.min_withdrawal),
            max_withdrawal: read_decimal(&mut errors, "max_withdrawal", &self.max_withdrawal),
            city: optional(&self.city),
            street: optional(&self.street),
        };
        combine_errors(errors, dto.validate())?;
        Ok(dto)
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// What a save changed, for the list to react to.
#[derive(Debug, Clone)]
pub enum PlatformSaved {
    Created(Platform),
    Updated(i64, PlatformDto),
}

/// Create/edit dialog. `editing` is `None` for a new platform.
#[component]
pub fn PlatformForm(
    open: RwSignal<bool>,
    #[prop(into)]
    editing: Signal<Option<Platform>>,
    on_saved: Callback<PlatformSaved>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let image = RwSignal::new(String::new());
    let is_active = RwSignal::new(true);
    let min_deposit = RwSignal::new(String::new());
    let max_deposit = RwSignal::new(String::new());
    let min_withdrawal = RwSignal::new(String::new());
    let max_withdrawal = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let street = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let mutation = use_mutation();

    // Refill the fields every time the dialog opens.
    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        let fields = editing
            .get_untracked()
            .map(|p| PlatformFields::from_platform(&p))
            .unwrap_or(PlatformFields {
                is_active: true,
                ..Default::default()
            });
        name.set(fields.name);
        image.set(fields.image);
        is_active.set(fields.is_active);
        min_deposit.set(fields.min_deposit);
        max_deposit.set(fields.max_deposit);
        min_withdrawal.set(fields.min_withdrawal);
        max_withdrawal.set(fields.max_withdrawal);
        city.set(fields.city);
        street.set(fields.street);
        errors.set(FieldErrors::new());
    });

    let submit = move |_: leptos::ev::MouseEvent| {
        let fields = PlatformFields {
            name: name.get_untracked(),
            image: image.get_untracked(),
            is_active: is_active.get_untracked(),
            min_deposit: min_deposit.get_untracked(),
            max_deposit: max_deposit.get_untracked(),
            min_withdrawal: min_withdrawal.get_untracked(),
            max_withdrawal: max_withdrawal.get_untracked(),
            city: city.get_untracked(),
            street: street.get_untracked(),
        };
        let dto = match fields.to_dto() {
            Ok(dto) => dto,
            Err(invalid) => {
                errors.set(invalid);
                return;
            }
        };
        errors.set(FieldErrors::new());
        let editing_id = editing.get_untracked().map(|p| p.id);

        mutation.run(
            "a003_platform::save",
            move || async move {
                let result = match editing_id {
                    Some(id) => {
                        let updated = api::update(id, &dto).await;
                        updated.map(|()| PlatformSaved::Updated(id, dto))
                    }
                    None => api::create(&dto).await.map(PlatformSaved::Created),
                };
                keep_field_errors(errors, &result);
                result
            },
            move |saved| {
                open.set(false);
                on_saved.run(saved);
            },
        );
    };

    let processing = Signal::derive(move || mutation.is_processing());

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        {move || if editing.with(Option::is_some) { "Modifier la plateforme" } else { "Nouvelle plateforme" }}
                    </DialogTitle>
                    <DialogContent>
                        <div class="form-grid">
                            <FormField label="Nom" value=name error=field_error(errors, "name") />
                            <FormField label="Image (URL)" value=image error=field_error(errors, "image") />
                            <FormField label="Dépôt minimum" value=min_deposit error=field_error(errors, "min_deposit") />
                            <FormField label="Dépôt maximum" value=max_deposit error=field_error(errors, "max_deposit") />
                            <FormField label="Retrait minimum" value=min_withdrawal error=field_error(errors, "min_withdrawal") />
                            <FormField label="Retrait maximum" value=max_withdrawal error=field_error(errors, "max_withdrawal") />
                            <FormField label="Ville" value=city error=field_error(errors, "city") />
                            <FormField label="Adresse" value=street error=field_error(errors, "street") />
                            <Checkbox checked=is_active label="Plateforme active" />
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

    fn filled() -> PlatformFields {
        PlatformFields {
            name: " 1xBet ".to_string(),
            image: String::new(),
            is_active: true,
            min_deposit: "200".to_string(),
            max_deposit: "1 000 000".to_string(),
            min_withdrawal: "500".to_string(),
            max_withdrawal: "500000".to_string(),
            city: "Cotonou".to_string(),
            street: "  ".to_string(),
        }
    }

    #[test]
    fn test_fields_to_dto() {
        let dto = filled().to_dto().unwrap();
        assert_eq!(dto.name, "1xBet");
        assert_eq!(dto.max_deposit, 1_000_000.0);
        assert_eq!(dto.image, None);
        assert_eq!(dto.city.as_deref(), Some("Cotonou"));
        assert_eq!(dto.street, None);
    }

    #[test]
    fn test_invalid_fields_collect_all_errors() {
        let fields = PlatformFields {
            name: String::new(),
            min_deposit: "abc".to_string(),
            min_withdrawal: "900000".to_string(),
            ..filled()
        };
        let errors = fields.to_dto().unwrap_err();
        assert_eq!(errors.get("name"), Some("Le nom est requis"));
        assert_eq!(errors.get("min_deposit"), Some("Valeur numérique invalide"));
        assert!(errors.get("max_withdrawal").is_some());
    }

    #[test]
    fn test_from_platform_round_trips_to_same_dto() {
        let platform = Platform {
            id: 3,
            name: "Melbet".to_string(),
            image: None,
            is_active: false,
            min_deposit: 100.0,
            max_deposit: 250000.0,
            min_withdrawal: 1000.0,
            max_withdrawal: 100000.5,
            city: None,
            street: Some("Rue 12".to_string()),
            created_at: None,
        };
        let dto = PlatformFields::from_platform(&platform).to_dto().unwrap();
        assert_eq!(dto, PlatformDto::from_platform(&platform));
    }
}
