use contracts::domain::a005_user::aggregate::AppUser;
use leptos::prelude::*;
use thaw::*;

use super::details::{open_user, UserDetail, UserDetails};
use crate::domain::a003_platform::ui::options::use_platform_options;
use crate::domain::a005_user::api;
use crate::shared::components::filter_panel::FilterSelect;
use crate::shared::components::list_toolbar::{with_all_option, ListFilters};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{ActiveFlag, StatusBadge};
use crate::shared::config::config;
use crate::shared::date_utils::format_optional;
use crate::shared::list_controller::{use_list, FilterSet, ListController};
use crate::shared::list_utils::text_or_dash;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::selection::use_selection;

#[component]
pub fn UserList() -> impl IntoView {
    let platforms = use_platform_options("a005_user::platforms");
    let list = use_list(
        ListController::new(config().list.page_size)
            .with_filters(FilterSet::new().with("is_active", "all")),
        "a005_user",
        api::fetch_page,
    );
    let selection = use_selection::<AppUser, UserDetail>();
    list.on_applied(move |items, refreshed| selection.reconcile(items, refreshed));

    view! {
        <PageFrame page_id="a005_user--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Utilisateurs"
                count=Signal::derive(move || list.count())
                loading=Signal::derive(move || list.is_loading())
                on_refresh=Callback::new(move |_| list.invalidate())
            />

            <div class="page__content">
                <ListFilters
                    list=list
                    search_placeholder="Nom, email, téléphone..."
                    filter_content=move || view! {
                        <FilterSelect
                            label="État"
                            value=Signal::derive(move || list.filter_value("is_active"))
                            on_change=Callback::new(move |v| list.set_filter("is_active", v))
                            options=with_all_option("Tous", [("true", "Actifs"), ("false", "Inactifs")])
                        />
                    }
                />

                <div class="page__body">
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Nom"</TableHeaderCell>
                                    <TableHeaderCell>"Email"</TableHeaderCell>
                                    <TableHeaderCell>"Téléphone"</TableHeaderCell>
                                    <TableHeaderCell>"Inscrit le"</TableHeaderCell>
                                    <TableHeaderCell>"État"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || list.items()
                                    key=|u| (u.id, u.is_active)
                                    children=move |user| {
                                        let for_select = user.clone();
                                        let name = user.display_name();
                                        let email = user.email.clone();
                                        let phone = text_or_dash(user.phone.as_deref());
                                        let joined = format_optional(user.date_joined.as_deref());
                                        let active = ActiveFlag(user.is_active);
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <a
                                                            href="#"
                                                            class="table__link"
                                                            on:click=move |e| {
                                                                e.prevent_default();
                                                                open_user(selection, for_select.clone());
                                                            }
                                                        >
                                                            {name}
                                                        </a>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{email}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{phone}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{joined}</TableCellLayout>
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
                            <div class="table__empty">"Aucun utilisateur"</div>
                        </Show>
                    </div>

                    <UserDetails selection=selection list=list platforms=platforms />
                </div>
            </div>
        </PageFrame>
    }
}
