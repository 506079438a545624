//! User panel: the wallet, the latest transactions and the platform
//! permissions load in parallel into their own slots, so a slow or failing
//! call leaves the others untouched.

use contracts::domain::a005_user::aggregate::{AppUser, UserStatusAction, Wallet};
use contracts::domain::a006_permission::aggregate::{AddPermissionDto, Permission};
use contracts::domain::a009_transaction::aggregate::Transaction;
use contracts::shared::amount::format_amount;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a003_platform::ui::options::{selected_platform, PlatformSelect};
use crate::domain::a005_user::api;
use crate::domain::a009_transaction::ui::summary::TransactionMiniTable;
use crate::shared::components::detail_panel::{DetailItem, DetailPanel, DetailRow, SlotMessage};
use crate::shared::components::form_field::field_error;
use crate::shared::components::review_dialog::ConfirmDialog;
use crate::shared::components::ui::{ActiveFlag, StatusBadge};
use crate::shared::date_utils::format_optional;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListHandle;
use crate::shared::list_utils::text_or_dash;
use crate::shared::mutation::use_mutation;
use crate::shared::notifications::use_notifications;
use crate::shared::selection::{DetailSlot, SelectionHandle};

#[derive(Debug, Clone, Default)]
pub struct UserDetail {
    pub wallet: DetailSlot<Wallet>,
    pub transactions: DetailSlot<Vec<Transaction>>,
    pub permissions: DetailSlot<Vec<Permission>>,
}

fn wallet_slot(detail: &mut UserDetail) -> &mut DetailSlot<Wallet> {
    &mut detail.wallet
}

fn transactions_slot(detail: &mut UserDetail) -> &mut DetailSlot<Vec<Transaction>> {
    &mut detail.transactions
}

fn permissions_slot(detail: &mut UserDetail) -> &mut DetailSlot<Vec<Permission>> {
    &mut detail.permissions
}

/// Opens the panel on `user` and starts its three secondary fetches.
pub fn open_user(selection: SelectionHandle<AppUser, UserDetail>, user: AppUser) {
    let id = user.id;
    let ticket = selection.select(user);
    selection.load(ticket, wallet_slot, "a005_user::wallet", api::fetch_wallet(id));
    selection.load(ticket, transactions_slot, "a005_user::transactions", api::fetch_transactions(id));
    selection.load(ticket, permissions_slot, "a005_user::permissions", api::fetch_permissions(id));
}

fn reload_permissions(selection: SelectionHandle<AppUser, UserDetail>, user_id: i64) {
    if let Some(ticket) = selection.current_ticket() {
        selection.load(ticket, permissions_slot, "a005_user::permissions", api::fetch_permissions(user_id));
    }
}

fn slot_placeholder<V>(slot: &DetailSlot<V>, loading: &'static str) -> Option<AnyView> {
    match slot {
        DetailSlot::Ready(_) => None,
        DetailSlot::Failed(message) => Some(view! { <SlotMessage text=message.clone() /> }.into_any()),
        DetailSlot::Idle | DetailSlot::Loading => Some(view! { <SlotMessage text=loading /> }.into_any()),
    }
}

fn rights_label(permission: &Permission) -> &'static str {
    match (permission.can_deposit, permission.can_withdraw) {
        (true, true) => "Dépôt et retrait",
        (true, false) => "Dépôt",
        (false, true) => "Retrait",
        (false, false) => "Aucun",
    }
}

#[component]
pub fn UserDetails(
    selection: SelectionHandle<AppUser, UserDetail>,
    list: ListHandle<AppUser>,
    platforms: ReadSignal<Vec<(i64, String)>>,
) -> impl IntoView {
    let notifications = use_notifications();
    let status_mutation = use_mutation();
    let permission_mutation = use_mutation();
    let confirm_open = RwSignal::new(false);

    let detail = move || selection.state.with(|s| s.detail().clone());

    let pending_action = Signal::derive(move || {
        selection
            .selected()
            .map(|u| UserStatusAction::for_user(&u))
            .unwrap_or(UserStatusAction::Activate)
    });

    let confirm_status = Callback::new(move |_: ()| {
        let Some(user) = selection.selected() else {
            return;
        };
        let action = UserStatusAction::for_user(&user);
        let id = user.id;
        status_mutation.run(
            "a005_user::status",
            move || api::set_status(id, action),
            move |()| {
                confirm_open.set(false);
                selection.patch(|u| u.is_active = action.resulting_active());
                notifications.success(match action {
                    UserStatusAction::Activate => "Compte activé",
                    UserStatusAction::Deactivate => "Compte désactivé",
                });
                list.invalidate();
            },
        );
    });

    let new_platform = RwSignal::new(String::new());
    let can_deposit = RwSignal::new(true);
    let can_withdraw = RwSignal::new(false);
    let permission_errors = RwSignal::new(FieldErrors::new());

    let add_permission = move |_: leptos::ev::MouseEvent| {
        let Some(user_id) = selection.state.with_untracked(|s| s.selected_id()) else {
            return;
        };
        let dto = AddPermissionDto {
            platform: selected_platform(&new_platform.get_untracked()),
            can_deposit: can_deposit.get_untracked(),
            can_withdraw: can_withdraw.get_untracked(),
        };
        if let Err(invalid) = dto.validate() {
            permission_errors.set(invalid);
            return;
        }
        permission_errors.set(FieldErrors::new());
        permission_mutation.run(
            "a005_user::add_permission",
            move || api::add_permission(user_id, dto),
            move |_: Permission| {
                new_platform.set(String::new());
                notifications.success("Permission ajoutée");
                reload_permissions(selection, user_id);
            },
        );
    };

    view! {
        {move || selection.selected().map(|user| view! {
            <DetailPanel
                title=user.display_name()
                on_close=Callback::new(move |_| selection.close())
            >
                <DetailRow label="Email" value=user.email.clone() />
                <DetailRow label="Téléphone" value=text_or_dash(user.phone.as_deref()) />
                <DetailItem label="État">
                    <StatusBadge status=ActiveFlag(user.is_active) />
                </DetailItem>
                <DetailRow label="Inscrit le" value=format_optional(user.date_joined.as_deref()) />
                <DetailRow label="Dernière connexion" value=format_optional(user.last_login.as_deref()) />

                <div class="detail-panel__actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| confirm_open.set(true)
                        disabled=Signal::derive(move || status_mutation.is_processing())
                    >
                        {icon("power")}
                        {if user.is_active { " Désactiver" } else { " Activer" }}
                    </Button>
                </div>

                <h3 class="detail-panel__subtitle">"Portefeuille"</h3>
                {move || {
                    let slot = detail().wallet;
                    slot_placeholder(&slot, "Chargement du portefeuille...").unwrap_or_else(|| {
                        let wallet = slot.ready().cloned();
                        view! {
                            {wallet.map(|w| view! {
                                <DetailRow label="Solde" value=format_amount(w.balance, &w.currency) />
                                <DetailRow label="Mis à jour" value=format_optional(w.updated_at.as_deref()) />
                            })}
                        }
                        .into_any()
                    })
                }}

                <h3 class="detail-panel__subtitle">"Dernières transactions"</h3>
                {move || {
                    let slot = detail().transactions;
                    slot_placeholder(&slot, "Chargement des transactions...").unwrap_or_else(|| {
                        let transactions = slot.ready().cloned().unwrap_or_default();
                        view! { <TransactionMiniTable transactions=transactions /> }.into_any()
                    })
                }}

                <h3 class="detail-panel__subtitle">"Permissions"</h3>
                {move || {
                    let slot = detail().permissions;
                    slot_placeholder(&slot, "Chargement des permissions...").unwrap_or_else(|| {
                        let permissions = slot.ready().cloned().unwrap_or_default();
                        if permissions.is_empty() {
                            return view! { <SlotMessage text="Aucune permission" /> }.into_any();
                        }
                        view! {
                            <table class="mini-table">
                                <tbody>
                                    {permissions
                                        .into_iter()
                                        .map(|p| view! {
                                            <tr>
                                                <td>{p.platform_name.clone().unwrap_or_else(|| format!("#{}", p.platform))}</td>
                                                <td>{rights_label(&p)}</td>
                                            </tr>
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                        .into_any()
                    })
                }}

                <div class="detail-panel__form">
                    <PlatformSelect
                        value=new_platform
                        options=platforms
                        error=field_error(permission_errors, "platform")
                    />
                    <Checkbox checked=can_deposit label="Dépôt" />
                    <Checkbox checked=can_withdraw label="Retrait" />
                    {move || permission_errors.with(|e| e.get("can_deposit").map(str::to_string)).map(|message| view! {
                        <span class="form-field__error">{message}</span>
                    })}
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=add_permission
                        disabled=Signal::derive(move || permission_mutation.is_processing())
                    >
                        {icon("plus")}
                        " Ajouter la permission"
                    </Button>
                </div>
            </DetailPanel>
        })}

        <ConfirmDialog
            open=confirm_open
            title=Signal::derive(move || match pending_action.get() {
                UserStatusAction::Activate => "Activer le compte".to_string(),
                UserStatusAction::Deactivate => "Désactiver le compte".to_string(),
            })
            message=Signal::derive(move || {
                let name = selection.selected().map(|u| u.display_name()).unwrap_or_default();
                match pending_action.get() {
                    UserStatusAction::Activate => format!("{} pourra de nouveau utiliser l'application.", name),
                    UserStatusAction::Deactivate => format!("{} ne pourra plus effectuer d'opérations.", name),
                }
            })
            processing=Signal::derive(move || status_mutation.is_processing())
            on_confirm=confirm_status
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rights_label() {
        let permission = Permission {
            id: 1,
            user: 2,
            user_email: None,
            platform: 3,
            platform_name: None,
            can_deposit: true,
            can_withdraw: false,
            created_at: None,
        };
        assert_eq!(rights_label(&permission), "Dépôt");
        assert_eq!(
            rights_label(&Permission {
                can_withdraw: true,
                ..permission
            }),
            "Dépôt et retrait"
        );
    }
}
