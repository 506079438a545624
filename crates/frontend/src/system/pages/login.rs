use contracts::shared::validation::FieldErrors;
use contracts::system::auth::LoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::shared::components::form_field::{field_error, FormField};
use crate::shared::error::AppError;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::system::auth::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let error_message = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }
        let request = LoginRequest {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };

        is_loading.set(true);
        error_message.set(None);
        errors.set(FieldErrors::new());

        let navigate = navigate.clone();
        spawn_local(async move {
            match session.login(request).await {
                Ok(()) => navigate("/dashboard", Default::default()),
                Err(AppError::Validation(fields)) => errors.set(fields),
                Err(AppError::Unauthorized) => {
                    error_message.set(Some("Email ou mot de passe incorrect.".to_string()))
                }
                Err(e) => {
                    log::error!("Login failed: {}", e);
                    error_message.set(Some(e.user_message()));
                }
            }
            is_loading.set(false);
        });
    };

    view! {
        <PageFrame page_id="login--system" category=PAGE_CAT_SYSTEM>
            <div class="auth-container">
                <div class="auth-box">
                    <h1>"MobCash"</h1>
                    <h2>"Connexion à l'administration"</h2>

                    {move || error_message.get().map(|message| view! {
                        <div class="alert alert--error">{message}</div>
                    })}

                    <form on:submit=on_submit>
                        <FormField
                            label="Email"
                            value=email
                            error=field_error(errors, "email")
                            input_type=InputType::Email
                            placeholder="admin@mobcash.io"
                        />
                        <FormField
                            label="Mot de passe"
                            value=password
                            error=field_error(errors, "password")
                            input_type=InputType::Password
                        />
                        <Button
                            appearance=ButtonAppearance::Primary
                            button_type=ButtonType::Submit
                            disabled=is_loading
                            block=true
                        >
                            {move || if is_loading.get() { "Connexion..." } else { "Se connecter" }}
                        </Button>
                    </form>

                    <p class="auth-box__footer">
                        "Pas encore de compte ? " <A href="/sign-up">"Créer un compte"</A>
                    </p>
                </div>
            </div>
        </PageFrame>
    }
}
