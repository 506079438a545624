pub mod form;
pub mod page;
