use std::net::SocketAddr;

use axum::{
    Router,
    extract::{MatchedPath, Request},
};
use axum_server::Handle;
use clap::Parser;
use rusqlite::Connection;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use billed_rs::{
    AppState, BILLS_VIEW, build_router, graceful_shutdown,
    session::{InMemoryKeyValueStore, Session, USER_KEY},
};

/// The web server for billed_rs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database.
    #[arg(long)]
    db_path: String,

    /// The port to serve the app from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// The type of the signed-in user, e.g. "Employee" or "Admin".
    #[arg(long, default_value = "Employee")]
    user_type: String,

    /// The email of the signed-in user.
    #[arg(long)]
    user_email: Option<String>,

    /// The width of the receipt preview modal in pixels.
    #[arg(long, default_value_t = 800)]
    modal_width: u32,
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));

    let session = Session::read(&session_store(&args));
    tracing::info!("Serving bills for {session:?}");

    let conn = Connection::open(&args.db_path).expect("Could not open the database.");
    let state = AppState::new(conn, session)
        .expect("Could not initialize the database.")
        .with_modal_width(args.modal_width);

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(state));

    tracing::info!("HTTP server listening on http://{addr}{BILLS_VIEW}");
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .expect("The server stopped unexpectedly.");
}

/// Build the session store the way a browser would have persisted it after logging in.
fn session_store(args: &Args) -> InMemoryKeyValueStore {
    let user = serde_json::json!({
        "type": args.user_type,
        "email": args.user_email,
    });
    let mut store = InMemoryKeyValueStore::new();
    store.set_item(USER_KEY, user.to_string());

    store
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but we're doing our specific
        // logging of errors so disable that
        .on_failure(());

    router.layer(tracing_layer)
}
