pub mod browser;
pub mod reconciler;
pub mod view_state;

pub use browser::IssueBrowser;
pub use reconciler::{
    resolve_add_star_mutation, resolve_issues_query, resolve_remove_star_mutation,
};
pub use view_state::ViewState;
