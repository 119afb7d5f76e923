//! HTML page and form handlers

use axum::{
    extract::{rejection::FormRejection, Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use tracing::{debug, info, warn};

use super::{views, AppError, AppState};
use crate::forms::{AmountForm, CreateWarehouseForm, EditWarehouseForm};

/// Unreadable form bodies count as empty forms: every field takes its default
fn form_or_default<T: Default>(form: Result<Form<T>, FormRejection>) -> T {
    match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            warn!(error = %rejection, "Unreadable form body, using defaults");
            T::default()
        }
    }
}

fn to_warehouse(id: u64) -> Redirect {
    Redirect::to(&format!("/warehouse/{}", id))
}

fn to_index() -> Redirect {
    Redirect::to("/")
}

/// GET / - List all warehouses
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let store = state.read()?;
    Ok(Html(views::index_page(store.all().values())))
}

/// GET /warehouse/create - Creation form
pub async fn create_form() -> Html<String> {
    Html(views::create_page())
}

/// POST /warehouse/create - Create a warehouse and go back to the list
pub async fn create_warehouse(
    State(state): State<AppState>,
    form: Result<Form<CreateWarehouseForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let form = form_or_default(form);
    let name = form.name();
    let capacity = form.capacity();
    let initial_level = form.initial_level();

    let id = state.write()?.create(name.clone(), capacity, initial_level);
    info!(id, name = %name, capacity, initial_level, "Warehouse created");

    Ok(to_index())
}

/// GET /warehouse/:id - Detail page; unknown ids go back to the list
pub async fn view_warehouse(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Response, AppError> {
    let store = state.read()?;

    match store.get(id) {
        Some(warehouse) => Ok(Html(views::warehouse_page(warehouse)).into_response()),
        None => {
            warn!(id, "Warehouse not found, redirecting to index");
            Ok(to_index().into_response())
        }
    }
}

/// GET /warehouse/:id/edit - Edit form
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Response, AppError> {
    let store = state.read()?;

    match store.get(id) {
        Some(warehouse) => Ok(Html(views::edit_page(warehouse)).into_response()),
        None => {
            warn!(id, "Warehouse not found, redirecting to index");
            Ok(to_index().into_response())
        }
    }
}

/// POST /warehouse/:id/edit - Rename and resize.
///
/// The stock level is carried over and clamped to the new capacity.
pub async fn edit_warehouse(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    form: Result<Form<EditWarehouseForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let form = form_or_default(form);
    let mut store = state.write()?;

    let Some(warehouse) = store.get_mut(id) else {
        warn!(id, "Warehouse not found, redirecting to index");
        return Ok(to_index());
    };

    let name = form.name(&warehouse.name);
    let capacity = form.capacity(warehouse.varasto.capacity());
    let old_level = warehouse.varasto.level();

    warehouse.name = name;
    warehouse.varasto = warehouse.varasto.resized(capacity);

    info!(
        id,
        name = %warehouse.name,
        capacity,
        old_level,
        level = warehouse.varasto.level(),
        "Warehouse updated"
    );

    Ok(to_warehouse(id))
}

/// POST /warehouse/:id/add - Add stock
pub async fn add_stock(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    form: Result<Form<AmountForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let form = form_or_default(form);
    let amount = form.amount();

    if let Some(warehouse) = state.write()?.get_mut(id) {
        warehouse.varasto.add(amount);
        debug!(id, amount, level = warehouse.varasto.level(), "Stock added");
    } else {
        warn!(id, "Cannot add stock: warehouse not found");
    }

    Ok(to_warehouse(id))
}

/// POST /warehouse/:id/remove - Take stock out
pub async fn remove_stock(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    form: Result<Form<AmountForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let form = form_or_default(form);
    let amount = form.amount();

    if let Some(warehouse) = state.write()?.get_mut(id) {
        let taken = warehouse.varasto.remove(amount);
        debug!(
            id,
            requested = amount,
            taken,
            level = warehouse.varasto.level(),
            "Stock removed"
        );
    } else {
        warn!(id, "Cannot remove stock: warehouse not found");
    }

    Ok(to_warehouse(id))
}

/// POST /warehouse/:id/delete - Delete and go back to the list
pub async fn delete_warehouse(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Redirect, AppError> {
    match state.write()?.delete(id) {
        Some(warehouse) => info!(id, name = %warehouse.name, "Warehouse deleted"),
        None => debug!(id, "Delete of unknown warehouse ignored"),
    }

    Ok(to_index())
}
