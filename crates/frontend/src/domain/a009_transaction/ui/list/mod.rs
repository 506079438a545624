use contracts::domain::a009_transaction::aggregate::{Transaction, TransactionStatus, TransactionType};
use contracts::shared::amount::format_money;
use leptos::prelude::*;
use thaw::*;

use super::summary::TransactionSummary;
use crate::domain::a009_transaction::api::{self, FILTER_STATUS, FILTER_TYPE};
use crate::shared::components::detail_panel::{DetailPanel, DetailRow};
use crate::shared::components::filter_panel::FilterSelect;
use crate::shared::components::list_toolbar::{with_all_option, ListFilters};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::StatusBadge;
use crate::shared::config::config;
use crate::shared::date_utils::format_datetime;
use crate::shared::list_controller::{use_list, FilterSet, ListController};
use crate::shared::list_utils::text_or_dash;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::selection::use_selection;

/// Read-only journal of every deposit and withdrawal.
#[component]
pub fn TransactionList() -> impl IntoView {
    let list = use_list(
        ListController::new(config().list.page_size).with_filters(
            FilterSet::new()
                .with(FILTER_TYPE, "all")
                .with(FILTER_STATUS, "all"),
        ),
        "a009_transaction",
        api::fetch_page,
    );
    let selection = use_selection::<Transaction, ()>();
    list.on_applied(move |items, refreshed| selection.reconcile(items, refreshed));

    view! {
        <PageFrame page_id="a009_transaction--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Transactions"
                count=Signal::derive(move || list.count())
                loading=Signal::derive(move || list.is_loading())
                on_refresh=Callback::new(move |_| list.invalidate())
            />

            <div class="page__content">
                <ListFilters
                    list=list
                    search_placeholder="Référence, téléphone, ID joueur..."
                    filter_content=move || view! {
                        <FilterSelect
                            label="Type"
                            value=Signal::derive(move || list.filter_value(FILTER_TYPE))
                            on_change=Callback::new(move |v| list.set_filter(FILTER_TYPE, v))
                            options=with_all_option(
                                "Tous les types",
                                TransactionType::FILTERABLE.iter().map(|t| (t.as_str(), t.label())),
                            )
                        />
                        <FilterSelect
                            label="Statut"
                            value=Signal::derive(move || list.filter_value(FILTER_STATUS))
                            on_change=Callback::new(move |v| list.set_filter(FILTER_STATUS, v))
                            options=with_all_option(
                                "Tous les statuts",
                                TransactionStatus::FILTERABLE.iter().map(|s| (s.as_str(), s.label())),
                            )
                        />
                    }
                />

                <div class="page__body">
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%; min-width: 900px;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Date"</TableHeaderCell>
                                    <TableHeaderCell>"Référence"</TableHeaderCell>
                                    <TableHeaderCell>"Type"</TableHeaderCell>
                                    <TableHeaderCell>"Montant"</TableHeaderCell>
                                    <TableHeaderCell>"Plateforme"</TableHeaderCell>
                                    <TableHeaderCell>"Téléphone"</TableHeaderCell>
                                    <TableHeaderCell>"Statut"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || list.items()
                                    key=|t| (t.id, t.status)
                                    children=move |transaction| {
                                        let for_select = transaction.clone();
                                        let created = format_datetime(&transaction.created_at);
                                        let reference = transaction.reference.clone();
                                        let kind = transaction.kind.label();
                                        let amount = format_money(transaction.amount);
                                        let platform = text_or_dash(transaction.platform_name.as_deref());
                                        let phone = text_or_dash(transaction.phone_number.as_deref());
                                        let status = transaction.status;
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>{created}</TableCellLayout>
                                                </TableCell>
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
                                                            {reference}
                                                        </a>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{kind}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{amount}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {platform}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{phone}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <StatusBadge status=status />
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                        <Show when=move || list.state.with(|s| s.is_empty() && !s.is_loading())>
                            <div class="table__empty">"Aucune transaction"</div>
                        </Show>
                    </div>

                    {move || selection.selected().map(|transaction| view! {
                        <DetailPanel
                            title=format!("Transaction #{}", transaction.id)
                            on_close=Callback::new(move |_| selection.close())
                        >
                            <DetailRow label="Client" value=text_or_dash(transaction.user_email.as_deref()) />
                            <TransactionSummary transaction=transaction />
                        </DetailPanel>
                    })}
                </div>
            </div>
        </PageFrame>
    }
}
