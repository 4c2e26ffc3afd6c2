//! The controller behind the bills page.
//!
//! The controller fetches the bills, decides which view the page shows and
//! reacts to the "new bill" and "preview receipt" clicks. Everything it
//! touches is injected when it is created, so the same controller drives a
//! server-rendered page and the test suite.

use maud::Markup;

use crate::{endpoints, session::Session};

use super::{
    normalize::{normalize, sort_by_date_desc},
    record::NormalizedBill,
    store::{BillStore, FailureClass},
    view::{RenderMode, bills_view},
};

/// Moves the user to another page.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// The modal that previews a bill's receipt.
pub trait ReceiptModal {
    /// The current width of the modal in pixels.
    fn width(&self) -> u32;

    /// Show the image at `source` in the modal body, `width` pixels wide.
    fn set_image(&self, source: &str, width: u32);

    /// Make the modal visible.
    fn show(&self);
}

/// The element the page is painted into.
///
/// Each paint replaces whatever was painted before.
pub trait MountPoint {
    fn paint(&self, view: Markup);
}

impl<T: Navigator + ?Sized> Navigator for &T {
    fn navigate(&self, path: &str) {
        (**self).navigate(path)
    }
}

impl<T: ReceiptModal + ?Sized> ReceiptModal for &T {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn set_image(&self, source: &str, width: u32) {
        (**self).set_image(source, width)
    }

    fn show(&self) {
        (**self).show()
    }
}

impl<T: MountPoint + ?Sized> MountPoint for &T {
    fn paint(&self, view: Markup) {
        (**self).paint(view)
    }
}

/// What the page shows.
///
/// A load starts in [PageState::Loading] and ends in one of the other two
/// states, which last until the next load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    Loading,
    Populated,
    ErrorState(FailureClass),
}

/// Drives the bills page.
pub struct BillsController<S, N, M, P> {
    store: S,
    session: Session,
    navigator: N,
    modal: M,
    root: P,
}

impl<S, N, M, P> BillsController<S, N, M, P>
where
    S: BillStore,
    N: Navigator,
    M: ReceiptModal,
    P: MountPoint,
{
    /// Create a controller.
    ///
    /// `session` is a snapshot of the current user taken when the page is
    /// created.
    pub fn new(store: S, session: Session, navigator: N, modal: M, root: P) -> Self {
        Self {
            store,
            session,
            navigator,
            modal,
            root,
        }
    }

    /// Fetch the bills and paint the table, or an error view if the fetch fails.
    ///
    /// The loading view is painted while the fetch is in flight. Concurrent
    /// loads are not coordinated: whichever fetch completes last paints the
    /// page. A fetch that never completes leaves the loading view in place.
    pub async fn load(&self) -> PageState {
        self.render(RenderMode::Loading);

        match self.store.list().await {
            Ok(records) => {
                let bills = sort_by_date_desc(normalize(&records));
                tracing::debug!("Fetched {} bills.", bills.len());
                self.render(RenderMode::Data(&bills));

                PageState::Populated
            }
            Err(error) => {
                let failure_class = FailureClass::classify(error.message());
                match failure_class {
                    FailureClass::NotFound => {
                        tracing::warn!("The bills could not be found: {error}")
                    }
                    FailureClass::ServerFault => {
                        tracing::error!("The store failed to list the bills: {error}")
                    }
                    FailureClass::Unclassified => {
                        tracing::error!("Could not fetch the bills: {error}")
                    }
                }
                self.render(RenderMode::Error(error.message()));

                PageState::ErrorState(failure_class)
            }
        }
    }

    /// Send the user to the new bill form.
    pub fn on_click_new_bill(&self) {
        tracing::debug!("Navigating to {}", endpoints::NEW_BILL_VIEW);
        self.navigator.navigate(endpoints::NEW_BILL_VIEW);
    }

    /// Open the receipt preview for `bill`.
    ///
    /// The image is half as wide as the modal. The modal opens even if the
    /// bill has no receipt URL.
    pub fn on_click_preview(&self, bill: &NormalizedBill) {
        let source = bill.record.file_url.as_deref().unwrap_or_default();
        let image_width = self.modal.width() / 2;

        if source.is_empty() {
            tracing::debug!("Bill {} has no receipt URL.", bill.record.id);
        }

        self.modal.set_image(source, image_width);
        self.modal.show();
    }

    fn render(&self, mode: RenderMode<'_>) {
        self.root.paint(bills_view(mode, &self.session));
    }
}
