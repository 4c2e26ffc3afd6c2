//! Route handlers that serve the bills page through [BillsController].

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use maud::Markup;
use rusqlite::Connection;

use crate::{AppState, Error, internal_server_error::InternalServerError, session::Session};

use super::{
    controller::{BillsController, MountPoint, Navigator, PageState, ReceiptModal},
    db::{SqliteBillStore, get_bill},
    normalize::normalize_bill,
    store::FailureClass,
    view::{ReceiptModalView, receipt_modal},
};

/// The state needed for the bills page and its click endpoints.
#[derive(Debug, Clone)]
pub struct BillsPageState {
    pub db_connection: Arc<Mutex<Connection>>,
    pub session: Session,
    /// The width of the receipt modal in pixels.
    pub modal_width: u32,
}

impl FromRef<AppState> for BillsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            session: state.session.clone(),
            modal_width: state.modal_width,
        }
    }
}

/// Holds the last view painted by the controller so it can be sent as the response body.
#[derive(Debug, Default)]
pub struct PageBuffer {
    view: Mutex<Option<Markup>>,
}

impl PageBuffer {
    fn into_view(self) -> Option<Markup> {
        self.view.into_inner().ok().flatten()
    }
}

impl MountPoint for PageBuffer {
    fn paint(&self, view: Markup) {
        match self.view.lock() {
            Ok(mut painted) => *painted = Some(view),
            Err(error) => tracing::error!("could not paint the page: {error}"),
        }
    }
}

/// Records where the controller navigated so it can be sent as an `HX-Redirect`.
#[derive(Debug, Default)]
pub struct HxNavigator {
    path: Mutex<Option<String>>,
}

impl HxNavigator {
    fn into_path(self) -> Option<String> {
        self.path.into_inner().ok().flatten()
    }
}

impl Navigator for HxNavigator {
    fn navigate(&self, path: &str) {
        match self.path.lock() {
            Ok(mut current) => *current = Some(path.to_owned()),
            Err(error) => tracing::error!("could not record navigation to {path}: {error}"),
        }
    }
}

/// A receipt modal that is rendered as an HTML fragment for htmx to swap in.
#[derive(Debug)]
pub struct ModalFragment {
    width: u32,
    view: Mutex<ReceiptModalView>,
}

impl ModalFragment {
    pub fn new(width: u32) -> Self {
        Self {
            width,
            view: Mutex::new(ReceiptModalView::default()),
        }
    }

    fn into_html(self) -> Markup {
        let view = self.view.into_inner().unwrap_or_else(|poisoned| {
            tracing::error!("receipt modal lock was poisoned");
            poisoned.into_inner()
        });

        receipt_modal(&view)
    }
}

impl ReceiptModal for ModalFragment {
    fn width(&self) -> u32 {
        self.width
    }

    fn set_image(&self, source: &str, width: u32) {
        match self.view.lock() {
            Ok(mut view) => {
                view.image_source = Some(source.to_owned());
                view.image_width = width;
            }
            Err(error) => tracing::error!("could not set the receipt image: {error}"),
        }
    }

    fn show(&self) {
        match self.view.lock() {
            Ok(mut view) => view.visible = true,
            Err(error) => tracing::error!("could not show the receipt modal: {error}"),
        }
    }
}

/// The status code to serve a page with after a failed fetch.
fn failure_status_code(failure_class: FailureClass) -> StatusCode {
    match failure_class {
        FailureClass::NotFound => StatusCode::NOT_FOUND,
        FailureClass::ServerFault => StatusCode::INTERNAL_SERVER_ERROR,
        FailureClass::Unclassified => StatusCode::BAD_GATEWAY,
    }
}

/// Render the bills page.
///
/// The page is rendered with the same controller a browser would use, and
/// the response is whatever the controller painted last.
pub async fn get_bills_page(State(state): State<BillsPageState>) -> Response {
    let root = PageBuffer::default();
    let controller = BillsController::new(
        SqliteBillStore::new(state.db_connection.clone()),
        state.session,
        HxNavigator::default(),
        ModalFragment::new(state.modal_width),
        &root,
    );

    let page_state = controller.load().await;
    drop(controller);
    let status_code = match page_state {
        PageState::ErrorState(failure_class) => failure_status_code(failure_class),
        PageState::Loading | PageState::Populated => StatusCode::OK,
    };

    match root.into_view() {
        Some(view) => (status_code, view).into_response(),
        None => {
            tracing::error!("The bills controller did not paint a page.");
            InternalServerError::default().into_response()
        }
    }
}

/// Handle a click on the "new bill" button by redirecting to the new bill form.
pub async fn post_new_bill(State(state): State<BillsPageState>) -> Response {
    let navigator = HxNavigator::default();
    let controller = BillsController::new(
        SqliteBillStore::new(state.db_connection.clone()),
        state.session,
        &navigator,
        ModalFragment::new(state.modal_width),
        PageBuffer::default(),
    );

    controller.on_click_new_bill();
    drop(controller);

    match navigator.into_path() {
        Some(path) => (HxRedirect(path), StatusCode::OK).into_response(),
        None => {
            tracing::error!("The bills controller did not navigate to the new bill form.");
            InternalServerError::default().into_response()
        }
    }
}

/// Render the receipt modal for a bill.
pub async fn get_bill_preview(
    State(state): State<BillsPageState>,
    Path(bill_id): Path<String>,
) -> Result<Response, Error> {
    let record = {
        let connection = state
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        get_bill(&bill_id, &connection)
            .inspect_err(|error| tracing::warn!("Could not get bill {bill_id}: {error}"))?
    };

    let modal = ModalFragment::new(state.modal_width);
    let controller = BillsController::new(
        SqliteBillStore::new(state.db_connection.clone()),
        state.session,
        HxNavigator::default(),
        &modal,
        PageBuffer::default(),
    );

    controller.on_click_preview(&normalize_bill(&record));
    drop(controller);

    Ok(modal.into_html().into_response())
}
