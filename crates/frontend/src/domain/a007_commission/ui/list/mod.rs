use contracts::domain::a007_commission::aggregate::{Commission, CommissionStatus, PayCommissionDto};
use contracts::shared::amount::format_money;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a007_commission::api;
use crate::shared::components::filter_panel::FilterSelect;
use crate::shared::components::form_field::FormField;
use crate::shared::components::list_toolbar::{with_all_option, ListFilters};
use crate::shared::components::ui::StatusBadge;
use crate::shared::config::config;
use crate::shared::date_utils::{format_date, format_optional};
use crate::shared::icons::icon;
use crate::shared::list_controller::{use_list, FilterSet, ListController};
use crate::shared::mutation::use_mutation;
use crate::shared::notifications::use_notifications;

fn period_label(commission: &Commission) -> String {
    match (commission.period_start.as_deref(), commission.period_end.as_deref()) {
        (Some(start), Some(end)) => format!("{} → {}", format_date(start), format_date(end)),
        (Some(start), None) => format!("depuis {}", format_date(start)),
        _ => "—".to_string(),
    }
}

fn agent_label(commission: &Commission) -> String {
    commission
        .agent_email
        .clone()
        .unwrap_or_else(|| format!("Agent #{}", commission.agent))
}

/// Agent commissions with a pay action on the pending ones.
#[component]
pub fn CommissionList() -> impl IntoView {
    let notifications = use_notifications();
    let list = use_list(
        ListController::new(config().list.page_size)
            .with_filters(FilterSet::new().with("status", CommissionStatus::Pending.as_str())),
        "a007_commission",
        api::fetch_page,
    );

    let paying = RwSignal::new(None::<Commission>);
    let dialog_open = RwSignal::new(false);
    let reference = RwSignal::new(String::new());
    let mutation = use_mutation();

    let start_payment = move |commission: Commission| {
        reference.set(String::new());
        paying.set(Some(commission));
        dialog_open.set(true);
    };

    let confirm_payment = move |_: leptos::ev::MouseEvent| {
        let Some(id) = paying.with_untracked(|c| c.as_ref().map(|c| c.id)) else {
            return;
        };
        let dto = PayCommissionDto {
            payment_reference: reference.get_untracked().trim().to_string(),
        };
        mutation.run(
            "a007_commission::pay",
            move || api::pay(id, dto),
            move |()| {
                dialog_open.set(false);
                paying.set(None);
                notifications.success("Commission payée");
                list.invalidate();
            },
        );
    };

    let processing = Signal::derive(move || mutation.is_processing());

    view! {
        <section class="page__section">
            <h2 class="page__section-title">"Commissions des agents"</h2>
            <ListFilters
                list=list
                search_placeholder="Email de l'agent..."
                filter_content=move || view! {
                    <FilterSelect
                        label="Statut"
                        value=Signal::derive(move || list.filter_value("status"))
                        on_change=Callback::new(move |v| list.set_filter("status", v))
                        options=with_all_option(
                            "Tous les statuts",
                            CommissionStatus::FILTERABLE.iter().map(|s| (s.as_str(), s.label())),
                        )
                    />
                }
            />

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Agent"</TableHeaderCell>
                            <TableHeaderCell>"Plateforme"</TableHeaderCell>
                            <TableHeaderCell>"Période"</TableHeaderCell>
                            <TableHeaderCell>"Montant"</TableHeaderCell>
                            <TableHeaderCell>"Statut"</TableHeaderCell>
                            <TableHeaderCell>"Payée le"</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || list.items()
                            key=|c| (c.id, c.status)
                            children=move |commission| {
                                let pending = commission.status.requires_action();
                                let for_pay = commission.clone();
                                let agent = agent_label(&commission);
                                let platform = commission.platform_name.clone().unwrap_or_else(|| "—".to_string());
                                let period = period_label(&commission);
                                let amount = format_money(commission.amount);
                                let status = commission.status;
                                let paid_at = format_optional(commission.paid_at.as_deref());
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{agent}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{platform}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{period}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{amount}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <StatusBadge status=status />
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{paid_at}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            {pending.then(|| view! {
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Primary
                                                    on_click=move |_| start_payment(for_pay.clone())
                                                >
                                                    {icon("check")}
                                                    " Payer"
                                                </Button>
                                            })}
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
                <Show when=move || list.state.with(|s| s.is_empty() && !s.is_loading())>
                    <div class="table__empty">"Aucune commission"</div>
                </Show>
            </div>

            <Dialog open=dialog_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"Payer la commission"</DialogTitle>
                        <DialogContent>
                            <p>
                                {move || paying.get().map(|c| format!(
                                    "{} : {} pour {}",
                                    agent_label(&c),
                                    format_money(c.amount),
                                    period_label(&c),
                                ))}
                            </p>
                            <FormField
                                label="Référence de paiement"
                                value=reference
                                error=Signal::derive(|| None::<String>)
                                placeholder="Optionnelle"
                            />
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| dialog_open.set(false)>
                                "Annuler"
                            </Button>
                            <Button appearance=ButtonAppearance::Primary on_click=confirm_payment disabled=processing>
                                {move || if processing.get() { "Paiement..." } else { "Confirmer le paiement" }}
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commission() -> Commission {
        Commission {
            id: 1,
            agent: 7,
            agent_email: None,
            platform_name: None,
            amount: 1500.0,
            status: CommissionStatus::Pending,
            period_start: Some("2024-03-01".to_string()),
            period_end: Some("2024-03-31".to_string()),
            paid_at: None,
            created_at: None,
        }
    }

    #[test]
    fn test_agent_label_falls_back_to_id() {
        assert_eq!(agent_label(&commission()), "Agent #7");
    }

    #[test]
    fn test_period_label() {
        let mut c = commission();
        assert!(period_label(&c).contains('→'));
        c.period_start = None;
        assert_eq!(period_label(&c), "—");
    }
}
