pub mod detail_panel;
pub mod filter_panel;
pub mod form_field;
pub mod list_toolbar;
pub mod page_header;
pub mod pagination_controls;
pub mod review_dialog;
pub mod stat_card;
pub mod ui;
