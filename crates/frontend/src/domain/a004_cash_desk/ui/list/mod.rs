use contracts::domain::a004_cash_desk::aggregate::{CashDesk, UpdateCashDeskStatusDto};
use contracts::shared::amount::format_money;
use leptos::prelude::*;
use thaw::*;

use super::form::{CreateCashDeskForm, CredentialsForm};
use crate::domain::a003_platform::ui::options::{platform_filter_options, use_platform_options};
use crate::domain::a004_cash_desk::api;
use crate::shared::components::detail_panel::{DetailItem, DetailPanel, DetailRow};
use crate::shared::components::filter_panel::FilterSelect;
use crate::shared::components::list_toolbar::{with_all_option, ListFilters};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{ActiveFlag, StatusBadge};
use crate::shared::config::config;
use crate::shared::date_utils::format_optional;
use crate::shared::icons::icon;
use crate::shared::list_controller::{use_list, FilterSet, ListController};
use crate::shared::list_utils::text_or_dash;
use crate::shared::mutation::use_mutation;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::selection::use_selection;

fn platform_label(desk: &CashDesk) -> String {
    desk.platform_name
        .clone()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| format!("#{}", desk.platform))
}

#[component]
pub fn CashDeskList() -> impl IntoView {
    let notifications = use_notifications();
    let platforms = use_platform_options("a004_cash_desk::platforms");
    let list = use_list(
        ListController::new(config().list.page_size).with_filters(
            FilterSet::new()
                .with("platform", "all")
                .with("is_active", "all"),
        ),
        "a004_cash_desk",
        api::fetch_page,
    );
    let selection = use_selection::<CashDesk, ()>();
    list.on_applied(move |items, refreshed| selection.reconcile(items, refreshed));

    let create_open = RwSignal::new(false);
    let credentials_open = RwSignal::new(false);

    let on_created = Callback::new(move |desk: CashDesk| {
        notifications.success(format!("Caisse {} créée", desk.name));
        list.invalidate();
    });

    let on_credentials_saved = Callback::new(move |login: String| {
        selection.patch(|d| d.login = login);
        notifications.success("Identifiants mis à jour");
        list.invalidate();
    });

    let mutation = use_mutation();
    let toggle_status = move |_: leptos::ev::MouseEvent| {
        let Some(desk) = selection.selected() else {
            return;
        };
        let id = desk.id;
        let dto = UpdateCashDeskStatusDto {
            is_active: !desk.is_active,
        };
        mutation.run(
            "a004_cash_desk::status",
            move || api::update_status(id, dto),
            move |()| {
                selection.patch(|d| d.is_active = dto.is_active);
                notifications.success(if dto.is_active {
                    "Caisse activée"
                } else {
                    "Caisse désactivée"
                });
                list.invalidate();
            },
        );
    };

    let processing = Signal::derive(move || mutation.is_processing());
    let selected = Signal::derive(move || selection.selected());

    view! {
        <PageFrame page_id="a004_cash_desk--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Caisses"
                count=Signal::derive(move || list.count())
                loading=Signal::derive(move || list.is_loading())
                on_refresh=Callback::new(move |_| list.invalidate())
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| create_open.set(true)>
                    {icon("plus")}
                    " Nouvelle caisse"
                </Button>
            </PageHeader>

            <div class="page__content">
                <ListFilters
                    list=list
                    search_placeholder="Nom, identifiant..."
                    filter_content=move || view! {
                        {move || view! {
                            <FilterSelect
                                label="Plateforme"
                                value=Signal::derive(move || list.filter_value("platform"))
                                on_change=Callback::new(move |v| list.set_filter("platform", v))
                                options=platform_filter_options(&platforms.get())
                            />
                        }}
                        <FilterSelect
                            label="État"
                            value=Signal::derive(move || list.filter_value("is_active"))
                            on_change=Callback::new(move |v| list.set_filter("is_active", v))
                            options=with_all_option("Toutes", [("true", "Actives"), ("false", "Inactives")])
                        />
                    }
                />

                <div class="page__body">
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Nom"</TableHeaderCell>
                                    <TableHeaderCell>"Plateforme"</TableHeaderCell>
                                    <TableHeaderCell>"Identifiant"</TableHeaderCell>
                                    <TableHeaderCell>"Solde"</TableHeaderCell>
                                    <TableHeaderCell>"État"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || list.items()
                                    key=|d| (d.id, d.is_active, d.login.clone())
                                    children=move |desk| {
                                        let for_select = desk.clone();
                                        let name = desk.name.clone();
                                        let platform = platform_label(&desk);
                                        let login = desk.login.clone();
                                        let balance = desk.balance.map(format_money).unwrap_or_else(|| "—".to_string());
                                        let active = ActiveFlag(desk.is_active);
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <a
                                                            href="#"
                                                            class="table__link"
                                                            on:click=move |e| {
                                                                e.prevent_default();
                                                                selection.select(for_select.clone());
                                                            }
                                                        >
                                                            {name}
                                                        </a>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{platform}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{login}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {balance}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <StatusBadge status=active />
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                        <Show when=move || list.state.with(|s| s.is_empty() && !s.is_loading())>
                            <div class="table__empty">"Aucune caisse"</div>
                        </Show>
                    </div>

                    {move || selection.selected().map(|desk| view! {
                        <DetailPanel
                            title=desk.name.clone()
                            on_close=Callback::new(move |_| selection.close())
                        >
                            <DetailRow label="Plateforme" value=platform_label(&desk) />
                            <DetailRow label="Identifiant" value=text_or_dash(Some(&desk.login)) />
                            <DetailRow
                                label="Solde"
                                value=desk.balance.map(format_money).unwrap_or_else(|| "—".to_string())
                            />
                            <DetailItem label="État">
                                <StatusBadge status=ActiveFlag(desk.is_active) />
                            </DetailItem>
                            <DetailRow label="Créée le" value=format_optional(desk.created_at.as_deref()) />

                            <div class="detail-panel__actions">
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| credentials_open.set(true)
                                >
                                    {icon("key")}
                                    " Identifiants"
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=toggle_status
                                    disabled=processing
                                >
                                    {icon("power")}
                                    {if desk.is_active { " Désactiver" } else { " Activer" }}
                                </Button>
                            </div>
                        </DetailPanel>
                    })}
                </div>
            </div>

            <CreateCashDeskForm open=create_open platforms=platforms on_created=on_created />
            <CredentialsForm open=credentials_open cash_desk=selected on_saved=on_credentials_saved />
        </PageFrame>
    }
}
