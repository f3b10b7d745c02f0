//! Problem rendering middleware.
//!
//! Handlers and extractors fail with [`AppError`], whose response only
//! carries the status and the classified kind. This layer negotiates the
//! request locale and swaps such responses for the translated problem
//! document. Error responses the framework produces on its own (such as a
//! 405 for an unsupported method) carry no body and no kind; they are
//! rendered as uncategorized problems.

use std::any::Any;

use axum::{
    extract::{Request, State},
    http::{
        header::{ACCEPT_LANGUAGE, ALLOW, CONTENT_TYPE},
        HeaderValue,
    },
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::api::AppState;
use crate::errors::{AppError, PendingProblem};
use crate::problem::{ErrorKind, Locale, ProblemTranslator, APPLICATION_PROBLEM_JSON};

/// Render pending problems in the caller's locale.
pub async fn problem_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let locale = Locale::negotiate(
        request
            .headers()
            .get(ACCEPT_LANGUAGE)
            .and_then(|h| h.to_str().ok()),
        state.default_locale,
    );

    let mut response = next.run(request).await;

    match response.extensions_mut().remove::<PendingProblem>() {
        Some(PendingProblem(kind)) => render_problem(&state.translator, &kind, locale),
        None if is_bare_error(&response) => {
            let status = response.status();
            let kind = ErrorKind::Rejected {
                status,
                cause: format!("framework responded {} without a body", status),
            };
            let mut rendered = render_problem(&state.translator, &kind, locale);
            if let Some(allow) = response.headers().get(ALLOW) {
                rendered.headers_mut().insert(ALLOW, allow.clone());
            }
            rendered
        }
        None => response,
    }
}

/// Error status with no content type: a framework default, not one of ours
fn is_bare_error(response: &Response) -> bool {
    let status = response.status();
    (status.is_client_error() || status.is_server_error())
        && !response.headers().contains_key(CONTENT_TYPE)
}

/// Translate a kind and render it as `application/problem+json`
pub fn render_problem(translator: &ProblemTranslator, kind: &ErrorKind, locale: Locale) -> Response {
    let (problem, status) = translator.translate(kind, locale);

    let mut response = (status, Json(problem)).into_response();
    response.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static(APPLICATION_PROBLEM_JSON),
    );
    response
}

/// Panic handler for `CatchPanicLayer`: a panicking handler becomes an unclassified error.
pub fn panic_to_problem(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::internal(format!("Handler panicked: {}", detail)).into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::to_bytes;
    use axum::http::StatusCode;

    use super::*;
    use crate::problem::MessageCatalog;

    #[tokio::test]
    async fn render_sets_problem_content_type() {
        let translator = ProblemTranslator::new(Arc::new(MessageCatalog::new()));
        let kind = ErrorKind::EntityNotFound("No records found for this ID!".to_string());

        let response = render_problem(&translator, &kind, Locale::En);

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[CONTENT_TYPE],
            HeaderValue::from_static(APPLICATION_PROBLEM_JSON)
        );
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["detail"], "No records found for this ID!");
    }

    #[test]
    fn only_bodiless_errors_are_bare() {
        assert!(is_bare_error(&StatusCode::METHOD_NOT_ALLOWED.into_response()));
        assert!(is_bare_error(&StatusCode::INTERNAL_SERVER_ERROR.into_response()));
        assert!(!is_bare_error(&StatusCode::OK.into_response()));
        assert!(!is_bare_error(&StatusCode::NO_CONTENT.into_response()));
        assert!(!is_bare_error(
            &(
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({ "status": "unhealthy" }))
            )
                .into_response()
        ));
    }

    #[test]
    fn panic_payload_becomes_pending_unclassified() {
        let response = panic_to_problem(Box::new("index out of bounds"));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        match &response.extensions().get::<PendingProblem>().unwrap().0 {
            ErrorKind::Unclassified { cause } => assert!(cause.contains("index out of bounds")),
            other => panic!("unexpected kind {:?}", other),
        }
    }
}
