use std::{
    collections::VecDeque,
    future::Future,
    sync::Mutex,
};

use maud::Markup;
use scraper::{ElementRef, Html, Selector};
use tokio::sync::oneshot;

use super::{
    controller::{MountPoint, Navigator, ReceiptModal},
    record::BillRecord,
    store::{BillStore, StoreError},
};

pub(crate) fn bill_with_date(id: &str, date: &str) -> BillRecord {
    BillRecord {
        id: id.to_owned(),
        date: date.to_owned(),
        status: "pending".to_owned(),
        amount: 100.0,
        vat: None,
        pct: None,
        file_url: None,
        file_name: None,
        email: "a@a".to_owned(),
        name: None,
        expense_type: None,
        commentary: None,
        comment_admin: None,
    }
}

pub(crate) fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[track_caller]
pub(crate) fn must_get_table_rows(html: &Html, want_row_count: usize) -> Vec<ElementRef<'_>> {
    let row_selector = Selector::parse("tbody[data-testid='tbody'] tr").unwrap();
    let rows = html.select(&row_selector).collect::<Vec<_>>();

    assert_eq!(
        rows.len(),
        want_row_count,
        "want {want_row_count} table rows, got {}",
        rows.len()
    );

    rows
}

/// A store that always gives the same result.
pub(crate) struct FixtureStore {
    result: Result<Vec<BillRecord>, StoreError>,
}

impl FixtureStore {
    pub(crate) fn new(records: Vec<BillRecord>) -> Self {
        Self {
            result: Ok(records),
        }
    }

    pub(crate) fn failing(error: StoreError) -> Self {
        Self { result: Err(error) }
    }
}

impl BillStore for FixtureStore {
    async fn list(&self) -> Result<Vec<BillRecord>, StoreError> {
        self.result.clone()
    }
}

/// A store whose fetches never complete.
pub(crate) struct NeverStore;

impl BillStore for NeverStore {
    async fn list(&self) -> Result<Vec<BillRecord>, StoreError> {
        std::future::pending().await
    }
}

/// A store whose fetches complete when the test sends their result.
///
/// Each call to `list` takes the next receiver in the queue.
pub(crate) struct QueuedStore {
    receivers: Mutex<VecDeque<oneshot::Receiver<Result<Vec<BillRecord>, StoreError>>>>,
}

impl QueuedStore {
    pub(crate) fn new(
        receivers: Vec<oneshot::Receiver<Result<Vec<BillRecord>, StoreError>>>,
    ) -> Self {
        Self {
            receivers: Mutex::new(receivers.into()),
        }
    }
}

impl BillStore for QueuedStore {
    fn list(&self) -> impl Future<Output = Result<Vec<BillRecord>, StoreError>> + Send {
        let receiver = self.receivers.lock().unwrap().pop_front();

        async move {
            match receiver {
                Some(receiver) => receiver
                    .await
                    .unwrap_or_else(|_| Err(StoreError::new("fetch dropped"))),
                None => Err(StoreError::new("no fetch queued")),
            }
        }
    }
}

#[derive(Default)]
pub(crate) struct FakeNavigator {
    paths: Mutex<Vec<String>>,
}

impl FakeNavigator {
    pub(crate) fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Navigator for FakeNavigator {
    fn navigate(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_owned());
    }
}

pub(crate) struct FakeModal {
    width: u32,
    image: Mutex<Option<(String, u32)>>,
    visible: Mutex<bool>,
}

impl FakeModal {
    pub(crate) fn new(width: u32) -> Self {
        Self {
            width,
            image: Mutex::new(None),
            visible: Mutex::new(false),
        }
    }

    pub(crate) fn image(&self) -> Option<(String, u32)> {
        self.image.lock().unwrap().clone()
    }

    pub(crate) fn is_visible(&self) -> bool {
        *self.visible.lock().unwrap()
    }
}

impl ReceiptModal for FakeModal {
    fn width(&self) -> u32 {
        self.width
    }

    fn set_image(&self, source: &str, width: u32) {
        *self.image.lock().unwrap() = Some((source.to_owned(), width));
    }

    fn show(&self) {
        *self.visible.lock().unwrap() = true;
    }
}

/// A mount point that keeps every view painted into it.
#[derive(Default)]
pub(crate) struct RecordingMount {
    paints: Mutex<Vec<String>>,
}

impl RecordingMount {
    pub(crate) fn paint_count(&self) -> usize {
        self.paints.lock().unwrap().len()
    }

    pub(crate) fn paints(&self) -> Vec<Html> {
        self.paints
            .lock()
            .unwrap()
            .iter()
            .map(|paint| Html::parse_document(paint))
            .collect()
    }

    #[track_caller]
    pub(crate) fn last_paint(&self) -> Html {
        let paints = self.paints.lock().unwrap();
        let last = paints.last().expect("Nothing was painted");

        Html::parse_document(last)
    }
}

impl MountPoint for RecordingMount {
    fn paint(&self, view: Markup) {
        self.paints.lock().unwrap().push(view.into_string());
    }
}
