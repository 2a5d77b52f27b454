//! Reducer for the product list view.

use crate::ui::mvi::Reducer;

use super::derive::apply_filters;
use super::form::ProductForm;
use super::intent::ProductIntent;
use super::state::{FormMode, ProductListState};

/// Reducer for product list state transitions.
pub struct ProductListReducer;

impl Reducer for ProductListReducer {
    type State = ProductListState;
    type Intent = ProductIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProductIntent::ToggleForm => {
                state.form_mode = match state.form_mode {
                    FormMode::Hidden => FormMode::Creating,
                    FormMode::Creating | FormMode::Editing { .. } => FormMode::Hidden,
                };
                state.form = ProductForm::default();
                state
            }

            ProductIntent::BeginEdit { item } => {
                state.form = ProductForm::from_item(&item);
                state.form_mode = FormMode::Editing { target: item };
                state
            }

            ProductIntent::CancelForm => close_form(state),

            ProductIntent::EditField { field, value } => {
                state.form.set(field, value);
                state
            }

            ProductIntent::CategorySelected { category } => {
                state.selected_category = category;
                state
            }

            ProductIntent::SortOrderSelected { order } => {
                state.sort_order = order;
                state
            }

            ProductIntent::LoadStarted => {
                state.load_generation = state.load_generation.wrapping_add(1);
                state
            }

            ProductIntent::ItemsLoaded { generation, items } => {
                if generation != state.load_generation {
                    // A newer load is in flight; its result wins.
                    return state;
                }
                state.items = apply_filters(items, &state.selected_category, state.sort_order);
                state.last_error = None;
                state
            }

            ProductIntent::ApplyFilters => {
                let items = std::mem::take(&mut state.items);
                state.items = apply_filters(items, &state.selected_category, state.sort_order);
                state
            }

            ProductIntent::ItemCreated { item } => {
                state.items.push(item);
                state.last_error = None;
                close_form(state)
            }

            ProductIntent::ItemUpdated { id, item } => {
                if let Some(slot) = state.items.iter_mut().find(|i| i.id == Some(id)) {
                    *slot = item;
                }
                state.last_error = None;
                close_form(state)
            }

            ProductIntent::ItemDeleted { id } => {
                state.items.retain(|i| i.id != Some(id));
                state.last_error = None;
                state
            }

            ProductIntent::OperationFailed { message } => {
                state.last_error = Some(message);
                state
            }
        }
    }
}

fn close_form(mut state: ProductListState) -> ProductListState {
    state.form_mode = FormMode::Hidden;
    state.form = ProductForm::default();
    state
}
