pub mod plot_state;
pub mod record;
pub mod theme;
