use contracts::dashboards::d400_statistics::dto::{
    DailyTransactionPoint, PlatformVolume, RechargeStats, StatisticsOverview,
};
use contracts::shared::amount::format_money;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::dashboards::d400_statistics::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{format_count, StatCard, StatTone};
use crate::shared::config::config;
use crate::shared::date_utils::day_label;
use crate::shared::error::AppError;
use crate::shared::icons::icon;
use crate::shared::notifications::{use_notifications, Notifications};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};

/// Bar length of `value` relative to the largest value, in percent.
fn bar_width(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

fn day_volume(point: &DailyTransactionPoint) -> f64 {
    point.deposits + point.withdrawals
}

/// Fetches one dashboard block into `target`; a failure leaves the block empty
/// and raises one notification.
fn load_into<T, Fut>(
    target: RwSignal<Option<T>>,
    loading: RwSignal<u32>,
    notifications: Notifications,
    context: &'static str,
    request: Fut,
) where
    T: Send + Sync + 'static,
    Fut: std::future::Future<Output = Result<T, AppError>> + 'static,
{
    loading.update(|n| *n += 1);
    spawn_local(async move {
        match request.await {
            Ok(value) => {
                let _ = target.try_set(Some(value));
            }
            Err(err) => notifications.report(&err, context),
        }
        let _ = loading.try_update(|n| *n = n.saturating_sub(1));
    });
}

/// Formatted counter of the overview, `None` until it has loaded.
fn overview_count(
    overview: RwSignal<Option<StatisticsOverview>>,
    pick: fn(&StatisticsOverview) -> u64,
) -> Signal<Option<String>> {
    Signal::derive(move || overview.with(|o| o.as_ref().map(|o| format_count(pick(o)))))
}

#[component]
pub fn StatisticsDashboard() -> impl IntoView {
    let notifications = use_notifications();
    let overview = RwSignal::new(None::<StatisticsOverview>);
    let recharges = RwSignal::new(None::<RechargeStats>);
    let daily = RwSignal::new(None::<Vec<DailyTransactionPoint>>);
    let platforms = RwSignal::new(None::<Vec<PlatformVolume>>);
    let loading = RwSignal::new(0u32);
    let reload = RwSignal::new(0u32);
    let days = config().dashboard.daily_days;

    Effect::new(move |_| {
        reload.track();
        load_into(overview, loading, notifications, "d400_statistics::overview", api::fetch_overview());
        load_into(recharges, loading, notifications, "d400_statistics::recharges", api::fetch_recharges());
        load_into(daily, loading, notifications, "d400_statistics::daily", api::fetch_daily(days));
        load_into(platforms, loading, notifications, "d400_statistics::platforms", api::fetch_platforms());
    });

    // The dedicated endpoint is fresher than the overview's copy.
    let recharge_stats = Memo::new(move |_| {
        recharges
            .get()
            .or_else(|| overview.with(|o| o.as_ref().map(|o| o.recharges.clone())))
    });

    let pending_alert = Memo::new(move |_| {
        recharge_stats.get().filter(RechargeStats::has_pending)
    });

    view! {
        <PageFrame page_id="d400_statistics--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader
                title="Tableau de bord"
                loading=Signal::derive(move || loading.get() > 0)
                on_refresh=Callback::new(move |_| reload.update(|n| *n += 1))
            />

            <div class="page__content">
                {move || pending_alert.get().map(|stats| view! {
                    <div class="dashboard-alert dashboard-alert--warning">
                        {icon("alert-triangle")}
                        <span>
                            {format!(
                                "{} demande(s) de recharge en attente pour {}.",
                                format_count(stats.pending_count),
                                format_money(stats.pending_amount),
                            )}
                        </span>
                        <A href="/dashboard/recharges">"Traiter"</A>
                    </div>
                })}

                <div class="stat-grid">
                    <StatCard
                        label="Utilisateurs"
                        icon_name="users"
                        value=overview_count(overview, |o| o.users.total)
                        subtitle=Signal::derive(move || overview.with(|o| o.as_ref().map(|o| {
                            format!("{} actifs, {} nouveaux aujourd'hui", format_count(o.users.active), format_count(o.users.new_today))
                        })))
                    />
                    <StatCard
                        label="Transactions"
                        icon_name="transactions"
                        value=overview_count(overview, |o| o.transactions.total)
                        subtitle=Signal::derive(move || overview.with(|o| o.as_ref().map(|o| {
                            format!("{} aujourd'hui", format_count(o.transactions.today))
                        })))
                    />
                    <StatCard
                        label="Dépôts"
                        icon_name="wallet"
                        tone=StatTone::Success
                        value=Signal::derive(move || overview.with(|o| o.as_ref().map(|o| format_money(o.transactions.deposits_amount))))
                    />
                    <StatCard
                        label="Retraits"
                        icon_name="wallet"
                        value=Signal::derive(move || overview.with(|o| o.as_ref().map(|o| format_money(o.transactions.withdrawals_amount))))
                    />
                    <StatCard
                        label="Recharges en attente"
                        icon_name="recharge"
                        tone=Signal::derive(move || if pending_alert.with(Option::is_some) { StatTone::Warning } else { StatTone::Neutral })
                        value=Signal::derive(move || recharge_stats.get().map(|r| format_count(r.pending_count)))
                        subtitle=Signal::derive(move || recharge_stats.get().map(|r| {
                            format!("{} approuvées, {} rejetées aujourd'hui", format_count(r.approved_today), format_count(r.rejected_today))
                        }))
                    />
                    <StatCard
                        label="Annulations en attente"
                        icon_name="cancellation"
                        tone=Signal::derive(move || {
                            if overview.with(|o| o.as_ref().is_some_and(|o| o.pending_cancellations > 0)) {
                                StatTone::Warning
                            } else {
                                StatTone::Neutral
                            }
                        })
                        value=overview_count(overview, |o| o.pending_cancellations)
                    />
                    <StatCard
                        label="Plateformes"
                        icon_name="platform"
                        value=overview_count(overview, |o| o.platforms.total)
                        subtitle=Signal::derive(move || overview.with(|o| o.as_ref().map(|o| {
                            format!("{} actives", format_count(o.platforms.active))
                        })))
                    />
                </div>

                <div class="dashboard-columns">
                    <section class="page__section">
                        <h2 class="page__section-title">{format!("Transactions des {} derniers jours", days)}</h2>
                        {move || match daily.get() {
                            None => view! { <div class="table__empty">"Chargement..."</div> }.into_any(),
                            Some(points) if points.is_empty() => {
                                view! { <div class="table__empty">"Aucune donnée"</div> }.into_any()
                            }
                            Some(points) => {
                                let max = points.iter().map(day_volume).fold(0.0, f64::max);
                                view! {
                                    <table class="mini-table">
                                        <thead>
                                            <tr>
                                                <th>"Jour"</th>
                                                <th>"Nombre"</th>
                                                <th>"Dépôts"</th>
                                                <th>"Retraits"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {points
                                                .into_iter()
                                                .map(|p| {
                                                    let width = bar_width(day_volume(&p), max);
                                                    view! {
                                                        <tr>
                                                            <td>{day_label(&p.date)}</td>
                                                            <td>{format_count(p.count)}</td>
                                                            <td>{format_money(p.deposits)}</td>
                                                            <td>{format_money(p.withdrawals)}</td>
                                                            <td class="mini-table__bar">
                                                                <div class="bar" style=format!("width: {:.1}%", width)></div>
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect_view()}
                                        </tbody>
                                    </table>
                                }
                                .into_any()
                            }
                        }}
                    </section>

                    <section class="page__section">
                        <h2 class="page__section-title">"Volume par plateforme"</h2>
                        {move || match platforms.get() {
                            None => view! { <div class="table__empty">"Chargement..."</div> }.into_any(),
                            Some(rows) if rows.is_empty() => {
                                view! { <div class="table__empty">"Aucune donnée"</div> }.into_any()
                            }
                            Some(rows) => {
                                let max = rows.iter().map(|r| r.volume).fold(0.0, f64::max);
                                view! {
                                    <table class="mini-table">
                                        <thead>
                                            <tr>
                                                <th>"Plateforme"</th>
                                                <th>"Transactions"</th>
                                                <th>"Volume"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {rows
                                                .into_iter()
                                                .map(|r| {
                                                    let width = bar_width(r.volume, max);
                                                    view! {
                                                        <tr>
                                                            <td>{r.platform_name}</td>
                                                            <td>{format_count(r.transactions)}</td>
                                                            <td>{format_money(r.volume)}</td>
                                                            <td class="mini-table__bar">
                                                                <div class="bar" style=format!("width: {:.1}%", width)></div>
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect_view()}
                                        </tbody>
                                    </table>
                                }
                                .into_any()
                            }
                        }}
                    </section>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(50.0, 200.0), 25.0);
        assert_eq!(bar_width(10.0, 0.0), 0.0);
        assert_eq!(bar_width(300.0, 200.0), 100.0);
        assert_eq!(bar_width(f64::NAN, 10.0), 0.0);
    }

    #[test]
    fn test_day_volume() {
        let point = DailyTransactionPoint {
            date: "2024-05-03".to_string(),
            count: 4,
            deposits: 1000.0,
            withdrawals: 250.0,
        };
        assert_eq!(day_volume(&point), 1250.0);
    }
}
