use contracts::domain::a002_cancellation::aggregate::CancellationRequest;
use contracts::domain::a009_transaction::aggregate::Transaction;
use contracts::shared::review::{ReviewDecision, ReviewStatus};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a002_cancellation::api;
use crate::domain::a009_transaction::api as transactions_api;
use crate::domain::a009_transaction::ui::summary::TransactionSummary;
use crate::shared::components::detail_panel::{DetailItem, DetailPanel, DetailRow, SlotMessage};
use crate::shared::components::filter_panel::FilterSelect;
use crate::shared::components::list_toolbar::{with_all_option, ListFilters};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::review_dialog::ReviewDialog;
use crate::shared::components::ui::StatusBadge;
use crate::shared::config::config;
use crate::shared::date_utils::{format_datetime, format_optional};
use crate::shared::icons::icon;
use crate::shared::list_controller::{use_list, FilterSet, ListController};
use crate::shared::list_utils::text_or_dash;
use crate::shared::mutation::use_mutation;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::selection::{use_selection, DetailSlot};

const CONTEXT: &str = "a002_cancellation";

/// State loaded when a request is opened.
#[derive(Debug, Clone, Default)]
struct CancellationDetail {
    transaction: DetailSlot<Transaction>,
}

fn transaction_slot(detail: &mut CancellationDetail) -> &mut DetailSlot<Transaction> {
    &mut detail.transaction
}

fn transaction_reference(request: &CancellationRequest) -> String {
    request
        .transaction_reference
        .clone()
        .filter(|r| !r.trim().is_empty())
        .unwrap_or_else(|| format!("#{}", request.transaction))
}

#[component]
pub fn CancellationList() -> impl IntoView {
    let notifications = use_notifications();
    let list = use_list(
        ListController::new(config().list.page_size)
            .with_filters(FilterSet::new().with("status", "all")),
        CONTEXT,
        api::fetch_page,
    );
    let selection = use_selection::<CancellationRequest, CancellationDetail>();
    list.on_applied(move |items, refreshed| selection.reconcile(items, refreshed));

    let open_request = move |request: CancellationRequest| {
        let transaction_id = request.transaction;
        let ticket = selection.select(request);
        selection.load(
            ticket,
            transaction_slot,
            "a002_cancellation::transaction",
            transactions_api::fetch_one(transaction_id),
        );
    };

    let mutation = use_mutation();
    let dialog_open = RwSignal::new(false);
    let decision = RwSignal::new(ReviewDecision::Approve);
    let notes = RwSignal::new(String::new());

    let open_review = move |chosen: ReviewDecision| {
        decision.set(chosen);
        notes.set(String::new());
        dialog_open.set(true);
    };

    let confirm_review = Callback::new(move |_: ()| {
        let Some(request) = selection.selected() else {
            return;
        };
        let chosen = decision.get_untracked();
        let id = request.id;
        mutation.run_review(
            "a002_cancellation::review",
            chosen,
            &notes.get_untracked(),
            move |admin_notes| api::review(id, chosen, admin_notes),
            move |()| {
                dialog_open.set(false);
                selection.patch(|r| r.apply_review(chosen, &notes.get_untracked()));
                notifications.success(match chosen {
                    ReviewDecision::Approve => "Annulation approuvée, transaction annulée",
                    ReviewDecision::Reject => "Demande d'annulation rejetée",
                });
                list.invalidate();
            },
        );
    });

    let subject = Signal::derive(move || {
        selection
            .selected()
            .map(|r| format!("Transaction {} : {}", transaction_reference(&r), r.reason))
            .unwrap_or_default()
    });
    let processing = Signal::derive(move || mutation.is_processing());
    let transaction = Signal::derive(move || selection.state.with(|s| s.detail().transaction.clone()));

    view! {
        <PageFrame page_id="a002_cancellation--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Demandes d'annulation"
                count=Signal::derive(move || list.count())
                loading=Signal::derive(move || list.is_loading())
                on_refresh=Callback::new(move |_| list.invalidate())
            />

            <div class="page__content">
                <ListFilters
                    list=list
                    search_placeholder="Référence, utilisateur, motif..."
                    filter_content=move || view! {
                        <FilterSelect
                            label="Statut"
                            value=Signal::derive(move || list.filter_value("status"))
                            on_change=Callback::new(move |v| list.set_filter("status", v))
                            options=with_all_option(
                                "Tous les statuts",
                                ReviewStatus::FILTERABLE.iter().map(|s| (s.as_str(), s.label())),
                            )
                        />
                    }
                />

                <div class="page__body">
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Date"</TableHeaderCell>
                                    <TableHeaderCell>"Transaction"</TableHeaderCell>
                                    <TableHeaderCell>"Utilisateur"</TableHeaderCell>
                                    <TableHeaderCell>"Motif"</TableHeaderCell>
                                    <TableHeaderCell>"Statut"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || list.items()
                                    key=|r| (r.id, r.status)
                                    children=move |request| {
                                        let for_select = request.clone();
                                        let created = format_datetime(&request.created_at);
                                        let transaction_ref = transaction_reference(&request);
                                        let email = text_or_dash(request.user_email.as_deref());
                                        let reason = request.reason.clone();
                                        let status = request.status;
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
                                                                open_request(for_select.clone());
                                                            }
                                                        >
                                                            {transaction_ref}
                                                        </a>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {email}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{reason}</TableCellLayout>
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
                            <div class="table__empty">"Aucune demande d'annulation"</div>
                        </Show>
                    </div>

                    {move || selection.selected().map(|request| {
                        let pending = request.status.requires_action();
                        view! {
                            <DetailPanel
                                title=format!("Annulation #{}", request.id)
                                on_close=Callback::new(move |_| selection.close())
                            >
                                <DetailRow label="Utilisateur" value=text_or_dash(request.user_email.as_deref()) />
                                <DetailRow label="Motif" value=request.reason.clone() />
                                <DetailItem label="Statut">
                                    <StatusBadge status=request.status />
                                </DetailItem>
                                <DetailRow label="Créée le" value=format_datetime(&request.created_at) />
                                <DetailRow label="Traitée le" value=format_optional(request.reviewed_at.as_deref()) />
                                <DetailRow label="Note" value=text_or_dash(request.admin_notes.as_deref()) />

                                <h3 class="detail-panel__subtitle">"Transaction concernée"</h3>
                                {move || match transaction.get() {
                                    DetailSlot::Ready(tx) => view! { <TransactionSummary transaction=tx /> }.into_any(),
                                    DetailSlot::Failed(message) => view! { <SlotMessage text=message /> }.into_any(),
                                    DetailSlot::Idle | DetailSlot::Loading => {
                                        view! { <SlotMessage text="Chargement de la transaction..." /> }.into_any()
                                    }
                                }}

                                {pending.then(|| view! {
                                    <div class="detail-panel__actions">
                                        <Button
                                            appearance=ButtonAppearance::Primary
                                            on_click=move |_| open_review(ReviewDecision::Approve)
                                            disabled=processing
                                        >
                                            {icon("check")}
                                            " Approuver"
                                        </Button>
                                        <Button
                                            appearance=ButtonAppearance::Secondary
                                            on_click=move |_| open_review(ReviewDecision::Reject)
                                            disabled=processing
                                        >
                                            {icon("x")}
                                            " Rejeter"
                                        </Button>
                                    </div>
                                })}
                            </DetailPanel>
                        }
                    })}
                </div>
            </div>

            <ReviewDialog
                open=dialog_open
                decision=decision
                notes=notes
                subject=subject
                processing=processing
                on_confirm=confirm_review
            />
        </PageFrame>
    }
}
