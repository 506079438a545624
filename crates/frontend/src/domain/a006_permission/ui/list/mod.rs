use contracts::domain::a006_permission::aggregate::{Permission, UpdatePermissionDto};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a003_platform::ui::options::{platform_filter_options, use_platform_options};
use crate::domain::a006_permission::api;
use crate::shared::components::detail_panel::{DetailItem, DetailPanel, DetailRow};
use crate::shared::components::filter_panel::FilterSelect;
use crate::shared::components::list_toolbar::ListFilters;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::review_dialog::ConfirmDialog;
use crate::shared::components::ui::Badge;
use crate::shared::config::config;
use crate::shared::date_utils::format_optional;
use crate::shared::icons::icon;
use crate::shared::list_controller::{use_list, FilterSet, ListController};
use crate::shared::mutation::use_mutation;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::selection::use_selection;

fn platform_label(permission: &Permission) -> String {
    permission
        .platform_name
        .clone()
        .unwrap_or_else(|| format!("#{}", permission.platform))
}

fn user_label(permission: &Permission) -> String {
    permission
        .user_email
        .clone()
        .unwrap_or_else(|| format!("#{}", permission.user))
}

#[component]
fn RightBadge(granted: bool) -> impl IntoView {
    if granted {
        view! { <Badge variant="success">"Oui"</Badge> }.into_any()
    } else {
        view! { <Badge>"Non"</Badge> }.into_any()
    }
}

#[component]
pub fn PermissionList() -> impl IntoView {
    let notifications = use_notifications();
    let platforms = use_platform_options("a006_permission::platforms");
    let list = use_list(
        ListController::new(config().list.page_size)
            .with_filters(FilterSet::new().with("platform", "all")),
        "a006_permission",
        api::fetch_page,
    );
    let selection = use_selection::<Permission, ()>();
    list.on_applied(move |items, refreshed| selection.reconcile(items, refreshed));

    let can_deposit = RwSignal::new(false);
    let can_withdraw = RwSignal::new(false);
    let open_permission = move |permission: Permission| {
        can_deposit.set(permission.can_deposit);
        can_withdraw.set(permission.can_withdraw);
        selection.select(permission);
    };

    let mutation = use_mutation();
    let save_rights = move |_: leptos::ev::MouseEvent| {
        let Some(id) = selection.state.with_untracked(|s| s.selected_id()) else {
            return;
        };
        let dto = UpdatePermissionDto {
            can_deposit: can_deposit.get_untracked(),
            can_withdraw: can_withdraw.get_untracked(),
        };
        mutation.run(
            "a006_permission::update",
            move || api::update(id, dto),
            move |()| {
                selection.patch(|p| dto.apply_to(p));
                notifications.success("Droits mis à jour");
                list.invalidate();
            },
        );
    };

    let delete_open = RwSignal::new(false);
    let confirm_delete = Callback::new(move |_: ()| {
        let Some(id) = selection.state.with_untracked(|s| s.selected_id()) else {
            return;
        };
        mutation.run(
            "a006_permission::delete",
            move || api::delete(id),
            move |()| {
                delete_open.set(false);
                selection.close();
                notifications.success("Permission supprimée");
                list.invalidate();
            },
        );
    });

    let processing = Signal::derive(move || mutation.is_processing());

    view! {
        <PageFrame page_id="a006_permission--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Permissions"
                count=Signal::derive(move || list.count())
                loading=Signal::derive(move || list.is_loading())
                on_refresh=Callback::new(move |_| list.invalidate())
            />

            <div class="page__content">
                <ListFilters
                    list=list
                    search_placeholder="Email de l'utilisateur..."
                    filter_content=move || view! {
                        {move || view! {
                            <FilterSelect
                                label="Plateforme"
                                value=Signal::derive(move || list.filter_value("platform"))
                                on_change=Callback::new(move |v| list.set_filter("platform", v))
                                options=platform_filter_options(&platforms.get())
                            />
                        }}
                    }
                />

                <div class="page__body">
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Utilisateur"</TableHeaderCell>
                                    <TableHeaderCell>"Plateforme"</TableHeaderCell>
                                    <TableHeaderCell>"Dépôt"</TableHeaderCell>
                                    <TableHeaderCell>"Retrait"</TableHeaderCell>
                                    <TableHeaderCell>"Accordée le"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || list.items()
                                    key=|p| (p.id, p.can_deposit, p.can_withdraw)
                                    children=move |permission| {
                                        let for_select = permission.clone();
                                        let user = user_label(&permission);
                                        let platform = platform_label(&permission);
                                        let granted_at = format_optional(permission.created_at.as_deref());
                                        let (can_deposit, can_withdraw) = (permission.can_deposit, permission.can_withdraw);
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <a
                                                            href="#"
                                                            class="table__link"
                                                            on:click=move |e| {
                                                                e.prevent_default();
                                                                open_permission(for_select.clone());
                                                            }
                                                        >
                                                            {user}
                                                        </a>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{platform}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <RightBadge granted=can_deposit />
                                                </TableCell>
                                                <TableCell>
                                                    <RightBadge granted=can_withdraw />
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{granted_at}</TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                        <Show when=move || list.state.with(|s| s.is_empty() && !s.is_loading())>
                            <div class="table__empty">"Aucune permission"</div>
                        </Show>
                    </div>

                    {move || selection.selected().map(|permission| view! {
                        <DetailPanel
                            title=format!("Permission #{}", permission.id)
                            on_close=Callback::new(move |_| selection.close())
                        >
                            <DetailRow label="Utilisateur" value=user_label(&permission) />
                            <DetailRow label="Plateforme" value=platform_label(&permission) />
                            <DetailItem label="Droits actuels">
                                <RightBadge granted=permission.can_deposit />
                                <RightBadge granted=permission.can_withdraw />
                            </DetailItem>
                            <DetailRow label="Accordée le" value=format_optional(permission.created_at.as_deref()) />

                            <div class="detail-panel__form">
                                <Checkbox checked=can_deposit label="Autoriser les dépôts" />
                                <Checkbox checked=can_withdraw label="Autoriser les retraits" />
                            </div>
                            <div class="detail-panel__actions">
                                <Button appearance=ButtonAppearance::Primary on_click=save_rights disabled=processing>
                                    {icon("check")}
                                    " Enregistrer"
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| delete_open.set(true)
                                    disabled=processing
                                >
                                    {icon("trash")}
                                    " Supprimer"
                                </Button>
                            </div>
                        </DetailPanel>
                    })}
                </div>
            </div>

            <ConfirmDialog
                open=delete_open
                title="Supprimer la permission"
                message=Signal::derive(move || {
                    selection
                        .selected()
                        .map(|p| format!("{} perdra ses droits sur {}.", user_label(&p), platform_label(&p)))
                        .unwrap_or_default()
                })
                processing=processing
                on_confirm=confirm_delete
            />
        </PageFrame>
    }
}
