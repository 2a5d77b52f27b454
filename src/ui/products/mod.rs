//! Product list view: state, intents, reducer and the controller that
//! performs catalog calls on their behalf.

mod derive;
mod error;
mod form;
mod intent;
mod reducer;
mod state;
mod view;

pub use derive::apply_filters;
pub use error::ViewError;
pub use form::ProductForm;
pub use intent::ProductIntent;
pub use reducer::ProductListReducer;
pub use state::{FormMode, ParseSortOrderError, ProductListState, SortOrder};
pub use view::ProductListView;
