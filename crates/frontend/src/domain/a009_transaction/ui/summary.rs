use contracts::domain::a009_transaction::aggregate::Transaction;
use contracts::shared::amount::format_money;
use leptos::prelude::*;

use crate::shared::components::detail_panel::{DetailItem, DetailRow};
use crate::shared::components::ui::StatusBadge;
use crate::shared::date_utils::format_datetime;
use crate::shared::list_utils::text_or_dash;

/// Detail rows of one transaction, embedded in other panels.
#[component]
pub fn TransactionSummary(transaction: Transaction) -> impl IntoView {
    view! {
        <div class="detail-panel__section">
            <DetailRow label="Référence" value=transaction.reference.clone() />
            <DetailRow label="Type" value=transaction.kind.label() />
            <DetailRow label="Montant" value=format_money(transaction.amount) />
            <DetailItem label="Statut">
                <StatusBadge status=transaction.status />
            </DetailItem>
            <DetailRow label="Plateforme" value=text_or_dash(transaction.platform_name.as_deref()) />
            <DetailRow label="ID joueur" value=text_or_dash(transaction.user_app_id.as_deref()) />
            <DetailRow label="Téléphone" value=text_or_dash(transaction.phone_number.as_deref()) />
            <DetailRow label="Date" value=format_datetime(&transaction.created_at) />
        </div>
    }
}

/// Compact list of transactions inside a detail panel.
#[component]
pub fn TransactionMiniTable(transactions: Vec<Transaction>) -> impl IntoView {
    if transactions.is_empty() {
        return view! { <div class="detail-panel__placeholder">"Aucune transaction"</div> }.into_any();
    }
    view! {
        <table class="mini-table">
            <tbody>
                {transactions
                    .into_iter()
                    .map(|t| view! {
                        <tr>
                            <td>{format_datetime(&t.created_at)}</td>
                            <td>{t.kind.label()}</td>
                            <td class="mini-table__amount">{format_money(t.amount)}</td>
                            <td><StatusBadge status=t.status /></td>
                        </tr>
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}
