use contracts::domain::a003_platform::aggregate::{Platform, PlatformDto, PlatformStats};
use contracts::shared::amount::format_money;
use leptos::prelude::*;
use thaw::*;

use super::form::{PlatformForm, PlatformSaved};
use crate::domain::a003_platform::api;
use crate::shared::components::detail_panel::{DetailItem, DetailPanel, DetailRow, SlotMessage};
use crate::shared::components::filter_panel::FilterSelect;
use crate::shared::components::list_toolbar::{with_all_option, ListFilters};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::format_count;
use crate::shared::components::ui::{ActiveFlag, StatusBadge};
use crate::shared::config::config;
use crate::shared::date_utils::format_optional;
use crate::shared::icons::icon;
use crate::shared::list_controller::{use_list, FilterSet, ListController};
use crate::shared::list_utils::text_or_dash;
use crate::shared::mutation::use_mutation;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::selection::{use_selection, DetailSlot};

#[derive(Debug, Clone, Default)]
struct PlatformDetail {
    stats: DetailSlot<PlatformStats>,
}

fn stats_slot(detail: &mut PlatformDetail) -> &mut DetailSlot<PlatformStats> {
    &mut detail.stats
}

fn limits(min: f64, max: f64) -> String {
    format!("{} – {}", format_money(min), format_money(max))
}

#[component]
pub fn PlatformList() -> impl IntoView {
    let notifications = use_notifications();
    let list = use_list(
        ListController::new(config().list.page_size)
            .with_filters(FilterSet::new().with("is_active", "all")),
        "a003_platform",
        api::fetch_page,
    );
    let selection = use_selection::<Platform, PlatformDetail>();
    list.on_applied(move |items, refreshed| selection.reconcile(items, refreshed));

    let open_platform = move |platform: Platform| {
        let id = platform.id;
        let ticket = selection.select(platform);
        selection.load(ticket, stats_slot, "a003_platform::stats", api::fetch_stats(id));
    };

    let form_open = RwSignal::new(false);
    let editing = RwSignal::new(None::<Platform>);

    let on_saved = Callback::new(move |saved: PlatformSaved| {
        match saved {
            PlatformSaved::Created(platform) => {
                notifications.success(format!("Plateforme {} créée", platform.name));
            }
            PlatformSaved::Updated(id, dto) => {
                selection.patch(|p| {
                    if p.id == id {
                        dto.apply_to(p);
                    }
                });
                notifications.success("Plateforme mise à jour");
            }
        }
        list.invalidate();
    });

    let mutation = use_mutation();
    let toggle_active = move |_: leptos::ev::MouseEvent| {
        let Some(platform) = selection.selected() else {
            return;
        };
        let id = platform.id;
        let mut dto = PlatformDto::from_platform(&platform);
        dto.is_active = !platform.is_active;
        mutation.run(
            "a003_platform::toggle",
            move || async move {
                let updated = api::update(id, &dto).await;
                updated.map(|()| dto)
            },
            move |dto: PlatformDto| {
                selection.patch(|p| dto.apply_to(p));
                notifications.success(if dto.is_active {
                    "Plateforme activée"
                } else {
                    "Plateforme désactivée"
                });
                list.invalidate();
            },
        );
    };

    let stats = Signal::derive(move || selection.state.with(|s| s.detail().stats.clone()));
    let processing = Signal::derive(move || mutation.is_processing());

    view! {
        <PageFrame page_id="a003_platform--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Plateformes"
                count=Signal::derive(move || list.count())
                loading=Signal::derive(move || list.is_loading())
                on_refresh=Callback::new(move |_| list.invalidate())
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| {
                        editing.set(None);
                        form_open.set(true);
                    }
                >
                    {icon("plus")}
                    " Nouvelle plateforme"
                </Button>
            </PageHeader>

            <div class="page__content">
                <ListFilters
                    list=list
                    search_placeholder="Nom, ville..."
                    filter_content=move || view! {
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
                                    <TableHeaderCell>"Dépôt"</TableHeaderCell>
                                    <TableHeaderCell>"Retrait"</TableHeaderCell>
                                    <TableHeaderCell>"Ville"</TableHeaderCell>
                                    <TableHeaderCell>"État"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || list.items()
                                    key=|p| (p.id, p.is_active, p.name.clone())
                                    children=move |platform| {
                                        let for_select = platform.clone();
                                        let name = platform.name.clone();
                                        let deposit = limits(platform.min_deposit, platform.max_deposit);
                                        let withdrawal = limits(platform.min_withdrawal, platform.max_withdrawal);
                                        let city = text_or_dash(platform.city.as_deref());
                                        let active = ActiveFlag(platform.is_active);
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <a
                                                            href="#"
                                                            class="table__link"
                                                            on:click=move |e| {
                                                                e.prevent_default();
                                                                open_platform(for_select.clone());
                                                            }
                                                        >
                                                            {name}
                                                        </a>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{deposit}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{withdrawal}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{city}</TableCellLayout>
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
                            <div class="table__empty">"Aucune plateforme"</div>
                        </Show>
                    </div>

                    {move || selection.selected().map(|platform| {
                        let for_edit = platform.clone();
                        view! {
                            <DetailPanel
                                title=platform.name.clone()
                                on_close=Callback::new(move |_| selection.close())
                            >
                                <DetailItem label="État">
                                    <StatusBadge status=ActiveFlag(platform.is_active) />
                                </DetailItem>
                                <DetailRow label="Dépôt" value=limits(platform.min_deposit, platform.max_deposit) />
                                <DetailRow label="Retrait" value=limits(platform.min_withdrawal, platform.max_withdrawal) />
                                <DetailRow label="Ville" value=text_or_dash(platform.city.as_deref()) />
                                <DetailRow label="Adresse" value=text_or_dash(platform.street.as_deref()) />
                                <DetailRow label="Créée le" value=format_optional(platform.created_at.as_deref()) />

                                <h3 class="detail-panel__subtitle">"Statistiques"</h3>
                                {move || match stats.get() {
                                    DetailSlot::Ready(stats) => view! {
                                        <div class="detail-panel__section">
                                            <DetailRow label="Transactions" value=format_count(stats.total_transactions) />
                                            <DetailRow label="Réussies" value=format_count(stats.successful_transactions) />
                                            <DetailRow label="Échouées" value=format_count(stats.failed_transactions) />
                                            <DetailRow
                                                label="Taux de réussite"
                                                value=stats.success_rate().map(|r| format!("{:.1} %", r)).unwrap_or_else(|| "—".to_string())
                                            />
                                            <DetailRow label="Dépôts" value=stats.total_deposits.map(format_money).unwrap_or_else(|| "—".to_string()) />
                                            <DetailRow label="Retraits" value=stats.total_withdrawals.map(format_money).unwrap_or_else(|| "—".to_string()) />
                                            <DetailRow label="Utilisateurs actifs" value=format_count(stats.active_users) />
                                        </div>
                                    }.into_any(),
                                    DetailSlot::Failed(message) => view! { <SlotMessage text=message /> }.into_any(),
                                    DetailSlot::Idle | DetailSlot::Loading => {
                                        view! { <SlotMessage text="Chargement des statistiques..." /> }.into_any()
                                    }
                                }}

                                <div class="detail-panel__actions">
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        on_click=move |_| {
                                            editing.set(Some(for_edit.clone()));
                                            form_open.set(true);
                                        }
                                    >
                                        {icon("edit")}
                                        " Modifier"
                                    </Button>
                                    <Button
                                        appearance=ButtonAppearance::Secondary
                                        on_click=toggle_active
                                        disabled=processing
                                    >
                                        {icon("power")}
                                        {if platform.is_active { " Désactiver" } else { " Activer" }}
                                    </Button>
                                </div>
                            </DetailPanel>
                        }
                    })}
                </div>
            </div>

            <PlatformForm open=form_open editing=editing on_saved=on_saved />
        </PageFrame>
    }
}
