use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, info, warn};

use crate::errors::ApiError;
use crate::params::PeopleParams;
use crate::routes::ServerState;
use service::people::Person;

/// POST /people — create a record.
///
/// The legacy contract only rejects the request when every parameter is
/// absent; partial input goes through with the missing fields stored as
/// empty strings.
pub async fn create_person(
    State(state): State<ServerState>,
    Query(params): Query<PeopleParams>,
) -> Result<StatusCode, ApiError> {
    let (name, location, age) = match (params.name(), params.location(), params.age()) {
        (Err(err), Err(_), Err(_)) => {
            warn!(reason = %err, "create rejected, no parameters supplied");
            return Err(err);
        }
        (name, location, age) => (
            name.unwrap_or_default(),
            location.unwrap_or_default(),
            age.unwrap_or_default(),
        ),
    };

    let person = Person {
        name: name.clone(),
        location,
        age,
    };
    if let Err(err) = state.people.create(person).await {
        warn!(%name, reason = %err, "create refused");
        return Err(err.into());
    }

    info!(%name, "person created");
    Ok(StatusCode::OK)
}

/// GET /people — read a record by name.
pub async fn read_person(
    State(state): State<ServerState>,
    Query(params): Query<PeopleParams>,
) -> Result<String, ApiError> {
    let name = params.name()?;
    match state.people.get(&name).await {
        Some(person) => {
            debug!(%name, "person found");
            Ok(format!(
                "[{} found, {} found, {} found]",
                person.name, person.location, person.age
            ))
        }
        None => {
            let count = state.people.list().await.len();
            debug!(%name, count, "person lookup missed");
            Err(ApiError::NotFound(name))
        }
    }
}

/// DELETE /people — remove a record by name. Removal succeeds whether or
/// not the name was present.
pub async fn delete_person(
    State(state): State<ServerState>,
    Query(params): Query<PeopleParams>,
) -> Response {
    // The legacy delete path answers a bare 400 with no error text.
    let Ok(name) = params.name() else {
        warn!("delete rejected, missing name parameter");
        return StatusCode::BAD_REQUEST.into_response();
    };

    let existed = state.people.remove(&name).await;
    let remaining = state.people.list().await.len();
    debug!(%name, existed, remaining, "person deleted");
    (StatusCode::OK, "deleted successfully").into_response()
}

/// PATCH /people — overwrite location and age of an existing record.
pub async fn update_person(
    State(state): State<ServerState>,
    Query(params): Query<PeopleParams>,
) -> Response {
    let (name, location, age) = match (params.name(), params.location(), params.age()) {
        (Err(err), Err(_), Err(_)) => {
            // Same conjunctive check as create, but this path answers with
            // an empty body.
            warn!(reason = %err, "update rejected, no parameters supplied");
            return StatusCode::BAD_REQUEST.into_response();
        }
        (name, location, age) => (
            name.unwrap_or_default(),
            location.unwrap_or_default(),
            age.unwrap_or_default(),
        ),
    };

    match state.people.update(&name, location, age).await {
        Ok(()) => {
            info!(%name, "person updated");
            (StatusCode::OK, "update successfully").into_response()
        }
        Err(err) => {
            warn!(%name, "update failed, person missing");
            ApiError::from(err).into_response()
        }
    }
}

/// Any verb outside the dispatch table.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotSupported
}
