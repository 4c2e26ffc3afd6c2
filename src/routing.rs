//! Application router configuration.

use axum::{
    Router, middleware,
    response::Redirect,
    routing::{get, post},
};

use crate::{
    AppState,
    bill::{get_bill_preview, get_bills_page, post_new_bill},
    endpoints,
    internal_server_error::get_internal_server_error_page,
    logging::logging_middleware,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::BILLS_VIEW, get(get_bills_page))
        .route(endpoints::NEW_BILL_API, post(post_new_bill))
        .route(endpoints::BILL_PREVIEW, get(get_bill_preview))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::BILLS_VIEW)
}

#[cfg(test)]
mod routing_tests {
    use axum::http::StatusCode;
    use axum_htmx::HX_REDIRECT;
    use axum_test::TestServer;
    use rusqlite::Connection;

    use crate::{
        AppState,
        bill::{insert_bill, sample_bills},
        endpoints::{self, format_endpoint},
        session::Session,
    };

    use super::build_router;

    fn get_test_server() -> TestServer {
        let connection =
            Connection::open_in_memory().expect("Could not initialise in-memory SQLite database");
        let state = AppState::new(connection, Session::employee("a@a"))
            .expect("Could not create app state");
        {
            let connection = state
                .db_connection
                .lock()
                .expect("Could not acquire database lock");
            for bill in sample_bills() {
                insert_bill(&bill, &connection).expect("Could not insert bill");
            }
        }

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn root_redirects_to_bills() {
        let server = get_test_server();

        let response = server.get(endpoints::ROOT).await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), endpoints::BILLS_VIEW);
    }

    #[tokio::test]
    async fn serves_bills_page() {
        let server = get_test_server();

        let response = server.get(endpoints::BILLS_VIEW).await;

        response.assert_status_ok();
        assert!(response.text().contains("Mes notes de frais"));
    }

    #[tokio::test]
    async fn new_bill_button_redirects() {
        let server = get_test_server();

        let response = server.post(endpoints::NEW_BILL_API).await;

        response.assert_status_ok();
        assert_eq!(response.header(HX_REDIRECT), endpoints::NEW_BILL_VIEW);
    }

    #[tokio::test]
    async fn serves_receipt_preview() {
        let server = get_test_server();

        let response = server
            .get(&format_endpoint(
                endpoints::BILL_PREVIEW,
                "47qAXb6fIm2zOKkLzMro",
            ))
            .await;

        response.assert_status_ok();
        assert!(response.text().contains("modal show"));
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = get_test_server();

        server
            .get(endpoints::NEW_BILL_VIEW)
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
