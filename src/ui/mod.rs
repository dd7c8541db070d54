pub mod data_table;
pub mod scatter_panel;
pub mod tooltip;
