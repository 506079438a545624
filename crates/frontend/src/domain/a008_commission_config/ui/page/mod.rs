use contracts::domain::a008_commission_config::aggregate::CommissionConfig;
use leptos::prelude::*;
use thaw::*;

use super::form::CommissionConfigForm;
use crate::domain::a007_commission::ui::list::CommissionList;
use crate::domain::a008_commission_config::api;
use crate::shared::components::filter_panel::FilterSelect;
use crate::shared::components::list_toolbar::{with_all_option, ListFilters};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{ActiveFlag, StatusBadge};
use crate::shared::config::config;
use crate::shared::date_utils::format_optional;
use crate::shared::icons::icon;
use crate::shared::list_controller::{use_local_list, FilterSet, Filterable, ListController};
use crate::shared::list_utils::{any_contains, Searchable};
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

impl Searchable for CommissionConfig {
    fn matches_filter(&self, filter: &str) -> bool {
        any_contains([self.platform_name.as_deref()], filter)
    }
}

impl Filterable for CommissionConfig {
    fn field_value(&self, name: &str) -> Option<String> {
        match name {
            "is_active" => Some(self.is_active.to_string()),
            _ => None,
        }
    }
}

/// "2.5" -> "2,50 %"
fn format_rate(rate: f64) -> String {
    format!("{:.2} %", rate).replace('.', ",")
}

fn platform_label(config: &CommissionConfig) -> String {
    config
        .platform_name
        .clone()
        .unwrap_or_else(|| format!("#{}", config.platform))
}

#[component]
pub fn CommissionConfigPage() -> impl IntoView {
    let notifications = use_notifications();
    let list = use_local_list(
        ListController::new(config().list.page_size)
            .with_filters(FilterSet::new().with("is_active", "all")),
        "a008_commission_config",
        api::fetch_all,
    );

    let editing = RwSignal::new(None::<CommissionConfig>);
    let form_open = RwSignal::new(false);
    let on_saved = Callback::new(move |()| {
        notifications.success("Taux de commission enregistrés");
        list.invalidate();
    });

    view! {
        <PageFrame page_id="a008_commission_config--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Commissions"
                count=Signal::derive(move || list.count())
                loading=Signal::derive(move || list.is_loading())
                on_refresh=Callback::new(move |_| list.invalidate())
            />

            <div class="page__content">
                <section class="page__section">
                    <h2 class="page__section-title">"Taux par plateforme"</h2>
                    <ListFilters
                        list=list
                        search_placeholder="Plateforme..."
                        filter_content=move || view! {
                            <FilterSelect
                                label="État"
                                value=Signal::derive(move || list.filter_value("is_active"))
                                on_change=Callback::new(move |v| list.set_filter("is_active", v))
                                options=with_all_option("Toutes", [("true", "Actives"), ("false", "Inactives")])
                            />
                        }
                    />

                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Plateforme"</TableHeaderCell>
                                    <TableHeaderCell>"Taux dépôt"</TableHeaderCell>
                                    <TableHeaderCell>"Taux retrait"</TableHeaderCell>
                                    <TableHeaderCell>"État"</TableHeaderCell>
                                    <TableHeaderCell>"Mis à jour"</TableHeaderCell>
                                    <TableHeaderCell>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || list.items()
                                    key=|c| (c.id, c.is_active, c.updated_at.clone())
                                    children=move |item| {
                                        let for_edit = item.clone();
                                        let platform = platform_label(&item);
                                        let deposit_rate = format_rate(item.deposit_rate);
                                        let withdrawal_rate = format_rate(item.withdrawal_rate);
                                        let active = ActiveFlag(item.is_active);
                                        let updated_at = format_optional(item.updated_at.as_deref());
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{platform}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{deposit_rate}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{withdrawal_rate}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <StatusBadge status=active />
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{updated_at}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Secondary
                                                        on_click=move |_| {
                                                            editing.set(Some(for_edit.clone()));
                                                            form_open.set(true);
                                                        }
                                                    >
                                                        {icon("edit")}
                                                        " Modifier"
                                                    </Button>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                        <Show when=move || list.state.with(|s| s.is_empty() && !s.is_loading())>
                            <div class="table__empty">"Aucune configuration"</div>
                        </Show>
                    </div>
                </section>

                <CommissionList />
            </div>

            <CommissionConfigForm open=form_open editing=editing on_saved=on_saved />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(platform_name: Option<&str>, is_active: bool) -> CommissionConfig {
        CommissionConfig {
            id: 1,
            platform: 9,
            platform_name: platform_name.map(str::to_string),
            deposit_rate: 2.5,
            withdrawal_rate: 1.0,
            is_active,
            updated_at: None,
        }
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(2.5), "2,50 %");
        assert_eq!(format_rate(0.0), "0,00 %");
    }

    #[test]
    fn test_search_and_filter() {
        let config = sample(Some("Melbet"), false);
        assert!(config.matches_filter("melb"));
        assert!(!config.matches_filter("1xbet"));
        assert!(!sample(None, true).matches_filter("melb"));

        let filters = FilterSet::new().with("is_active", "true");
        assert!(!filters.matches(&config));
        assert!(filters.matches(&sample(None, true)));
    }
}
