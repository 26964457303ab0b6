//! Panels and widgets

pub mod agent_panel;
pub mod highlight;
pub mod json_view;
pub mod query_input;
pub mod theme;
pub mod users_list;
pub mod users_nl_panel;
