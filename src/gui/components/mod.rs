// src/gui/components/mod.rs
pub mod member_view;
pub mod query_panel;
pub mod side_panel;
