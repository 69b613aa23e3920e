pub mod issues;

pub use issues::{get_reaction_icon, print_view_state, star_toggle_label};
