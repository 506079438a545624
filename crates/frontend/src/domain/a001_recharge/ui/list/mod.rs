use contracts::domain::a001_recharge::aggregate::RechargeRequest;
use contracts::shared::amount::format_money;
use contracts::shared::review::{ReviewDecision, ReviewStatus};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_recharge::api;
use crate::shared::components::detail_panel::{DetailItem, DetailPanel, DetailRow};
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
use crate::shared::selection::use_selection;

const CONTEXT: &str = "a001_recharge";

#[component]
pub fn RechargeList() -> impl IntoView {
    let notifications = use_notifications();
    let list = use_list(
        ListController::new(config().list.page_size)
            .with_filters(FilterSet::new().with("status", "all")),
        CONTEXT,
        api::fetch_page,
    );
    let selection = use_selection::<RechargeRequest, ()>();
    list.on_applied(move |items, refreshed| selection.reconcile(items, refreshed));

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
            "a001_recharge::review",
            chosen,
            &notes.get_untracked(),
            move |admin_notes| api::review(id, chosen, admin_notes),
            move |()| {
                dialog_open.set(false);
                selection.patch(|r| r.apply_review(chosen, &notes.get_untracked()));
                notifications.success(match chosen {
                    ReviewDecision::Approve => "Recharge approuvée",
                    ReviewDecision::Reject => "Recharge rejetée",
                });
                list.invalidate();
            },
        );
    });

    let subject = Signal::derive(move || {
        selection
            .selected()
            .map(|r| format!("{} : {}", r.requester(), format_money(r.amount)))
            .unwrap_or_default()
    });
    let processing = Signal::derive(move || mutation.is_processing());

    view! {
        <PageFrame page_id="a001_recharge--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Demandes de recharge"
                count=Signal::derive(move || list.count())
                loading=Signal::derive(move || list.is_loading())
                on_refresh=Callback::new(move |_| list.invalidate())
            />

            <div class="page__content">
                <ListFilters
                    list=list
                    search_placeholder="Utilisateur, référence..."
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
                                    <TableHeaderCell>"Utilisateur"</TableHeaderCell>
                                    <TableHeaderCell>"Montant"</TableHeaderCell>
                                    <TableHeaderCell>"Moyen de paiement"</TableHeaderCell>
                                    <TableHeaderCell>"Référence"</TableHeaderCell>
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
                                        let requester = request.requester();
                                        let amount = format_money(request.amount);
                                        let method = text_or_dash(request.payment_method.as_deref());
                                        let reference = text_or_dash(request.payment_reference.as_deref());
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
                                                                selection.select(for_select.clone());
                                                            }
                                                        >
                                                            {requester}
                                                        </a>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{amount}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{method}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {reference}
                                                    </TableCellLayout>
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
                            <div class="table__empty">"Aucune demande de recharge"</div>
                        </Show>
                    </div>

                    {move || selection.selected().map(|request| {
                        let pending = request.status.requires_action();
                        view! {
                            <DetailPanel
                                title=format!("Recharge #{}", request.id)
                                on_close=Callback::new(move |_| selection.close())
                            >
                                <DetailRow label="Utilisateur" value=request.requester() />
                                <DetailRow label="Email" value=text_or_dash(request.user_email.as_deref()) />
                                <DetailRow label="Montant" value=format_money(request.amount) />
                                <DetailRow label="Moyen de paiement" value=text_or_dash(request.payment_method.as_deref()) />
                                <DetailRow label="Référence" value=text_or_dash(request.payment_reference.as_deref()) />
                                <DetailItem label="Statut">
                                    <StatusBadge status=request.status />
                                </DetailItem>
                                <DetailRow label="Créée le" value=format_datetime(&request.created_at) />
                                <DetailRow label="Traitée le" value=format_optional(request.reviewed_at.as_deref()) />
                                <DetailRow label="Note" value=text_or_dash(request.admin_notes.as_deref()) />
                                {request.proof_image.clone().map(|src| {
                                    let href = src.clone();
                                    view! {
                                        <a class="detail-panel__image" href=href target="_blank">
                                            <img src=src alt="Justificatif de paiement" />
                                        </a>
                                    }
                                })}
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
