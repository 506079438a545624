use contracts::shared::validation::FieldErrors;
use contracts::system::auth::UpdateProfileDto;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::detail_panel::DetailRow;
use crate::shared::components::form_field::{field_error, FormField};
use crate::shared::error::AppError;
use crate::shared::mutation::use_mutation;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::system::auth::{api, use_session};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let notifications = use_notifications();
    let mutation = use_mutation();

    let current = session.user();
    let first_name = RwSignal::new(current.as_ref().map(|u| u.first_name.clone()).unwrap_or_default());
    let last_name = RwSignal::new(current.as_ref().map(|u| u.last_name.clone()).unwrap_or_default());
    let phone = RwSignal::new(current.as_ref().and_then(|u| u.phone.clone()).unwrap_or_default());
    let errors = RwSignal::new(FieldErrors::new());

    let save = move |_| {
        let phone_value = phone.get_untracked().trim().to_string();
        let dto = UpdateProfileDto {
            first_name: first_name.get_untracked().trim().to_string(),
            last_name: last_name.get_untracked().trim().to_string(),
            phone: (!phone_value.is_empty()).then_some(phone_value),
        };
        if let Err(fields) = dto.validate() {
            errors.set(fields);
            return;
        }
        errors.set(FieldErrors::new());
        mutation.run(
            "update profile",
            move || async move {
                let result = api::update_me(&dto).await;
                if let Err(AppError::Validation(fields)) = &result {
                    errors.set(fields.clone());
                }
                result
            },
            move |user| {
                session.set_user(user);
                notifications.success("Profil mis à jour.");
            },
        );
    };

    view! {
        <PageFrame page_id="profile--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Mon profil"</h1>
                </div>
            </div>
            <div class="page__content">
                {move || session.user().map(|user| view! {
                    <Card>
                        <div class="profile__identity">
                            <div class="avatar avatar--large">{user.initials()}</div>
                            <div>
                                <DetailRow label="Email" value=user.email.clone() />
                                <DetailRow
                                    label="Rôle"
                                    value=if user.is_superuser { "Super administrateur" } else { "Administrateur" }
                                />
                            </div>
                        </div>
                    </Card>
                })}
                <Card>
                    <div class="form-grid">
                        <FormField label="Prénom" value=first_name error=field_error(errors, "first_name") />
                        <FormField label="Nom" value=last_name error=field_error(errors, "last_name") />
                    </div>
                    <FormField label="Téléphone" value=phone error=field_error(errors, "phone") input_type=InputType::Tel />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=save
                        disabled=Signal::derive(move || mutation.is_processing())
                    >
                        {move || if mutation.is_processing() { "Enregistrement..." } else { "Enregistrer" }}
                    </Button>
                </Card>
            </div>
        </PageFrame>
    }
}
