//! Person handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::{PathParam, QueryParams, ValidatedJson};
use crate::api::AppState;
use crate::domain::{Person, PersonRequest};
use crate::errors::AppResult;
use crate::infra::PersonFilter;
use crate::problem::Problem;

/// Create person routes
pub fn person_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_people).post(create_person).put(update_person))
        .route(
            "/:id",
            get(find_person).patch(disable_person).delete(delete_person),
        )
}

/// List people
#[utoipa::path(
    get,
    path = "/api/person/v1",
    tag = "People",
    params(
        ("first_name" = Option<String>, Query, description = "Fragment of the first name"),
        ("enabled" = Option<bool>, Query, description = "Only enabled or disabled people")
    ),
    responses(
        (status = 200, description = "People matching the filters", body = Vec<Person>),
        (status = 400, description = "Invalid query parameter", body = Problem)
    )
)]
pub async fn list_people(
    State(state): State<AppState>,
    query: QueryParams,
) -> AppResult<Json<Vec<Person>>> {
    let filter = PersonFilter {
        first_name: query.text("first_name").map(str::to_string),
        enabled: query.get::<bool>("enabled")?,
    };

    let people = state.person_service.list_people(filter).await?;
    Ok(Json(people))
}

/// Get person by ID
#[utoipa::path(
    get,
    path = "/api/person/v1/{id}",
    tag = "People",
    params(("id" = i64, Path, description = "Person ID")),
    responses(
        (status = 200, description = "Person", body = Person),
        (status = 400, description = "Invalid ID", body = Problem),
        (status = 404, description = "Person not found", body = Problem)
    )
)]
pub async fn find_person(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> AppResult<Json<Person>> {
    let person = state.person_service.find_person(id).await?;
    Ok(Json(person))
}

/// Create a person
#[utoipa::path(
    post,
    path = "/api/person/v1",
    tag = "People",
    request_body = PersonRequest,
    responses(
        (status = 200, description = "Created person", body = Person),
        (status = 400, description = "Invalid data or incompatible body", body = Problem)
    )
)]
pub async fn create_person(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PersonRequest>,
) -> AppResult<Json<Person>> {
    let person = state.person_service.create_person(payload).await?;
    Ok(Json(person))
}

/// Update the person identified in the body
#[utoipa::path(
    put,
    path = "/api/person/v1",
    tag = "People",
    request_body = PersonRequest,
    responses(
        (status = 200, description = "Updated person", body = Person),
        (status = 400, description = "Invalid data or incompatible body", body = Problem),
        (status = 404, description = "Person not found", body = Problem)
    )
)]
pub async fn update_person(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PersonRequest>,
) -> AppResult<Json<Person>> {
    let person = state.person_service.update_person(payload).await?;
    Ok(Json(person))
}

/// Disable a person
#[utoipa::path(
    patch,
    path = "/api/person/v1/{id}",
    tag = "People",
    params(("id" = i64, Path, description = "Person ID")),
    responses(
        (status = 200, description = "Disabled person", body = Person),
        (status = 404, description = "Person not found", body = Problem)
    )
)]
pub async fn disable_person(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> AppResult<Json<Person>> {
    let person = state.person_service.disable_person(id).await?;
    Ok(Json(person))
}

/// Delete a person
#[utoipa::path(
    delete,
    path = "/api/person/v1/{id}",
    tag = "People",
    params(("id" = i64, Path, description = "Person ID")),
    responses(
        (status = 204, description = "Person deleted"),
        (status = 404, description = "Person not found", body = Problem),
        (status = 409, description = "Person is referenced by other records", body = Problem)
    )
)]
pub async fn delete_person(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> AppResult<StatusCode> {
    state.person_service.delete_person(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
