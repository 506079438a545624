use contracts::shared::validation::FieldErrors;
use contracts::system::auth::SignUpRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::shared::components::form_field::{field_error, FormField};
use crate::shared::error::AppError;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::system::auth::api;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let notifications = use_notifications();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let re_password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let is_loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }
        let request = SignUpRequest {
            email: email.get_untracked().trim().to_string(),
            first_name: first_name.get_untracked().trim().to_string(),
            last_name: last_name.get_untracked().trim().to_string(),
            phone: phone.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            re_password: re_password.get_untracked(),
        };
        if let Err(fields) = request.validate() {
            errors.set(fields);
            return;
        }
        errors.set(FieldErrors::new());
        is_loading.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::sign_up(&request).await {
                Ok(()) => {
                    notifications.success("Compte créé. Vous pouvez vous connecter.");
                    navigate("/login", Default::default());
                }
                Err(AppError::Validation(fields)) => errors.set(fields),
                Err(e) => notifications.report(&e, "sign-up"),
            }
            is_loading.set(false);
        });
    };

    view! {
        <PageFrame page_id="sign_up--system" category=PAGE_CAT_SYSTEM>
            <div class="auth-container">
                <div class="auth-box auth-box--wide">
                    <h1>"MobCash"</h1>
                    <h2>"Créer un compte administrateur"</h2>

                    <form on:submit=on_submit>
                        <div class="form-grid">
                            <FormField label="Prénom" value=first_name error=field_error(errors, "first_name") />
                            <FormField label="Nom" value=last_name error=field_error(errors, "last_name") />
                        </div>
                        <FormField label="Email" value=email error=field_error(errors, "email") input_type=InputType::Email />
                        <FormField label="Téléphone" value=phone error=field_error(errors, "phone") input_type=InputType::Tel />
                        <FormField
                            label="Mot de passe"
                            value=password
                            error=field_error(errors, "password")
                            input_type=InputType::Password
                        />
                        <FormField
                            label="Confirmer le mot de passe"
                            value=re_password
                            error=field_error(errors, "re_password")
                            input_type=InputType::Password
                        />
                        <Button
                            appearance=ButtonAppearance::Primary
                            button_type=ButtonType::Submit
                            disabled=is_loading
                            block=true
                        >
                            {move || if is_loading.get() { "Création..." } else { "Créer le compte" }}
                        </Button>
                    </form>

                    <p class="auth-box__footer">
                        "Déjà inscrit ? " <A href="/login">"Se connecter"</A>
                    </p>
                </div>
            </div>
        </PageFrame>
    }
}
