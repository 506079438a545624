use contracts::domain::a004_cash_desk::aggregate::{
    CashDesk, CreateCashDeskDto, UpdateCashDeskCredentialsDto,
};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a003_platform::ui::options::{selected_platform, PlatformSelect};
use crate::domain::a004_cash_desk::api;
use crate::shared::components::form_field::{field_error, keep_field_errors, FormField};
use crate::shared::mutation::use_mutation;

#[component]
pub fn CreateCashDeskForm(
    open: RwSignal<bool>,
    platforms: ReadSignal<Vec<(i64, String)>>,
    on_created: Callback<CashDesk>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let platform = RwSignal::new(String::new());
    let login = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let mutation = use_mutation();

    Effect::new(move |_| {
        if open.get() {
            name.set(String::new());
            platform.set(String::new());
            login.set(String::new());
            password.set(String::new());
            errors.set(FieldErrors::new());
        }
    });

    let submit = move |_: leptos::ev::MouseEvent| {
        let dto = CreateCashDeskDto {
            name: name.get_untracked().trim().to_string(),
            platform: selected_platform(&platform.get_untracked()),
            login: login.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if let Err(invalid) = dto.validate() {
            errors.set(invalid);
            return;
        }
        errors.set(FieldErrors::new());
        mutation.run(
            "a004_cash_desk::create",
            move || async move {
                let result = api::create(&dto).await;
                keep_field_errors(errors, &result);
                result
            },
            move |created| {
                open.set(false);
                on_created.run(created);
            },
        );
    };

    let processing = Signal::derive(move || mutation.is_processing());

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Nouvelle caisse"</DialogTitle>
                    <DialogContent>
                        <div class="form-grid">
                            <FormField label="Nom" value=name error=field_error(errors, "name") />
                            <PlatformSelect value=platform options=platforms error=field_error(errors, "platform") />
                            <FormField label="Identifiant" value=login error=field_error(errors, "login") />
                            <FormField
                                label="Mot de passe"
                                value=password
                                error=field_error(errors, "password")
                                input_type=InputType::Password
                            />
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                            "Annuler"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=submit disabled=processing>
                            {move || if processing.get() { "Création..." } else { "Créer" }}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

/// Replaces the platform login of a cash desk.
#[component]
pub fn CredentialsForm(
    open: RwSignal<bool>,
    #[prop(into)]
    cash_desk: Signal<Option<CashDesk>>,
    on_saved: Callback<String>,
) -> impl IntoView {
    let login = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let mutation = use_mutation();

    Effect::new(move |_| {
        if open.get() {
            login.set(cash_desk.with_untracked(|c| c.as_ref().map(|c| c.login.clone()).unwrap_or_default()));
            password.set(String::new());
            errors.set(FieldErrors::new());
        }
    });

    let submit = move |_: leptos::ev::MouseEvent| {
        let Some(id) = cash_desk.with_untracked(|c| c.as_ref().map(|c| c.id)) else {
            return;
        };
        let dto = UpdateCashDeskCredentialsDto {
            login: login.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if let Err(invalid) = dto.validate() {
            errors.set(invalid);
            return;
        }
        errors.set(FieldErrors::new());
        let new_login = dto.login.clone();
        mutation.run(
            "a004_cash_desk::credentials",
            move || async move {
                let result = api::update_credentials(id, &dto).await;
                keep_field_errors(errors, &result);
                result
            },
            move |()| {
                open.set(false);
                on_saved.run(new_login);
            },
        );
    };

    let processing = Signal::derive(move || mutation.is_processing());

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Identifiants de la caisse"</DialogTitle>
                    <DialogContent>
                        <div class="form-grid">
                            <FormField label="Identifiant" value=login error=field_error(errors, "login") />
                            <FormField
                                label="Nouveau mot de passe"
                                value=password
                                error=field_error(errors, "password")
                                input_type=InputType::Password
                            />
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
