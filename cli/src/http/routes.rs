//! HTTP route handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};
use bytes::Bytes;
use chrono::Local;
use statefacts_core::api::{
    create_facts, dataset, delete_fact, format_population, join_state, join_states, modify_fact,
    no_fact_at_index_message, no_facts_message, random_fact, ContigFilter, CreateOutcome,
    EditOutcome, StateCode, StateRecord,
};

use crate::http::{
    middleware::verify_state,
    models::*,
    pages::{index_handler, not_found_handler},
    state::AppState,
    validation::{parse_body, validate_funfact, validate_funfacts, validate_index},
};

/// Build all routes
pub fn create_router(state: AppState) -> Router {
    // Every `:state` route passes through the State Validator first.
    let state_routes = Router::new()
        .route("/states/:state", get(get_state_handler))
        .route("/states/:state/capital", get(capital_handler))
        .route("/states/:state/nickname", get(nickname_handler))
        .route("/states/:state/population", get(population_handler))
        .route("/states/:state/admission", get(admission_handler))
        .route(
            "/states/:state/funfact",
            get(random_fact_handler)
                .post(create_facts_handler)
                .patch(modify_fact_handler)
                .delete(delete_fact_handler),
        )
        .route_layer(middleware::from_fn(verify_state));

    Router::new()
        .route("/", get(index_handler))
        .route("/states", get(list_states_handler))
        .route("/states/", get(list_states_handler))
        .route("/health", get(health_handler))
        .merge(state_routes)
        .fallback(not_found_handler)
        .with_state(state)
}

/// GET /states?contig=true|false - all states joined with their fun facts
async fn list_states_handler(
    State(state): State<AppState>,
    Query(query): Query<ListStatesQuery>,
) -> Result<Response, HttpServerError> {
    state.record_request("/states");

    let filter = ContigFilter::from_query(query.contig.as_deref());
    let records: Vec<&StateRecord> = dataset().filtered(filter);
    let facts = state.facts().find_all().await.inspect_err(|_| state.record_error())?;
    let joined = join_states(&records, &facts);

    if joined.is_empty() {
        return Ok((
            StatusCode::NO_CONTENT,
            Json(MessageResponse::new("No states found.")),
        )
            .into_response());
    }
    Ok(Json(joined).into_response())
}

/// GET /states/:state - one state joined with its fun facts
async fn get_state_handler(
    State(state): State<AppState>,
    Extension(code): Extension<StateCode>,
) -> Result<Response, HttpServerError> {
    state.record_request("/states/:state");

    let facts = state
        .facts()
        .find_by_code(code.as_str())
        .await
        .inspect_err(|_| state.record_error())?;
    Ok(Json(join_state(code.record(), facts.as_ref())).into_response())
}

/// GET /states/:state/capital
async fn capital_handler(
    State(state): State<AppState>,
    Extension(code): Extension<StateCode>,
) -> Json<CapitalResponse> {
    state.record_request("/states/:state/capital");
    Json(CapitalResponse::from(code.record()))
}

/// GET /states/:state/nickname
async fn nickname_handler(
    State(state): State<AppState>,
    Extension(code): Extension<StateCode>,
) -> Json<NicknameResponse> {
    state.record_request("/states/:state/nickname");
    Json(NicknameResponse::from(code.record()))
}

/// GET /states/:state/population
async fn population_handler(
    State(state): State<AppState>,
    Extension(code): Extension<StateCode>,
) -> Json<PopulationResponse> {
    state.record_request("/states/:state/population");
    Json(PopulationResponse {
        state: code.name(),
        population: format_population(code.record().population),
    })
}

/// GET /states/:state/admission
async fn admission_handler(
    State(state): State<AppState>,
    Extension(code): Extension<StateCode>,
) -> Json<AdmissionResponse> {
    state.record_request("/states/:state/admission");
    Json(AdmissionResponse::from(code.record()))
}

/// GET /states/:state/funfact - one random fun fact
async fn random_fact_handler(
    State(state): State<AppState>,
    Extension(code): Extension<StateCode>,
) -> Result<Json<RandomFactResponse>, HttpServerError> {
    state.record_request("/states/:state/funfact");

    let fact = random_fact(state.facts(), &code)
        .await
        .inspect_err(|_| state.record_error())?;
    Ok(Json(match fact {
        Some(funfact) => RandomFactResponse::Fact { funfact },
        None => RandomFactResponse::Message(MessageResponse::new(no_facts_message(&code))),
    }))
}

/// POST /states/:state/funfact - create or append fun facts
async fn create_facts_handler(
    State(state): State<AppState>,
    Extension(code): Extension<StateCode>,
    body: Bytes,
) -> Result<Response, HttpServerError> {
    state.record_request("/states/:state/funfact");

    let req: CreateFactsRequest = parse_body(&body)?;
    let funfacts = validate_funfacts(req.funfacts)?;

    let outcome = create_facts(state.facts(), &code, funfacts)
        .await
        .inspect_err(|_| state.record_error())?;
    Ok(match outcome {
        CreateOutcome::Created(record) => (StatusCode::CREATED, Json(record)).into_response(),
        CreateOutcome::Appended(record) => Json(record).into_response(),
    })
}

/// PATCH /states/:state/funfact - replace the fun fact at a 1-based index
async fn modify_fact_handler(
    State(state): State<AppState>,
    Extension(code): Extension<StateCode>,
    body: Bytes,
) -> Result<Json<FactEditResponse>, HttpServerError> {
    state.record_request("/states/:state/funfact");

    let req: ModifyFactRequest = parse_body(&body)?;
    let index = validate_index(req.index)?;
    let funfact = validate_funfact(req.funfact)?;

    let outcome = modify_fact(state.facts(), &code, index, funfact)
        .await
        .inspect_err(|_| state.record_error())?;
    Ok(Json(edit_response(outcome, &code)))
}

/// DELETE /states/:state/funfact - remove the fun fact at a 1-based index
async fn delete_fact_handler(
    State(state): State<AppState>,
    Extension(code): Extension<StateCode>,
    body: Bytes,
) -> Result<Json<FactEditResponse>, HttpServerError> {
    state.record_request("/states/:state/funfact");

    let req: DeleteFactRequest = parse_body(&body)?;
    let index = validate_index(req.index)?;

    let outcome = delete_fact(state.facts(), &code, index)
        .await
        .inspect_err(|_| state.record_error())?;
    Ok(Json(edit_response(outcome, &code)))
}

fn edit_response(outcome: EditOutcome, code: &StateCode) -> FactEditResponse {
    match outcome {
        EditOutcome::Updated(record) => FactEditResponse::Record(record),
        EditOutcome::NoRecord => {
            FactEditResponse::Message(MessageResponse::new(no_facts_message(code)))
        }
        EditOutcome::IndexOutOfRange => {
            FactEditResponse::Message(MessageResponse::new(no_fact_at_index_message(code)))
        }
    }
}

/// GET /health - health check
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let (uptime_seconds, requests_handled, requests_by_endpoint, store_errors) = state
        .stats
        .read()
        .map(|stats| {
            (
                stats.uptime_seconds(),
                stats.requests_total,
                stats.requests_by_endpoint.clone(),
                stats.errors_total,
            )
        })
        .unwrap_or_default();

    Json(HealthResponse {
        status: "healthy".into(),
        uptime_seconds,
        requests_handled,
        requests_by_endpoint,
        store_errors,
        timestamp: Local::now().to_rfc3339(),
    })
}
