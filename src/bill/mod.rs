//! Listing, formatting and previewing expense bills.

mod controller;
mod db;
mod fixtures;
mod format;
mod normalize;
mod page;
mod record;
mod store;
mod view;

#[cfg(test)]
mod test_utils;

pub use controller::{BillsController, MountPoint, Navigator, PageState, ReceiptModal};
pub use db::{SqliteBillStore, create_bill_table, get_all_bills, get_bill, insert_bill};
pub use fixtures::sample_bills;
pub use format::{date_label, format_date, format_status, parse_bill_date};
pub use normalize::{normalize, normalize_bill, sort_by_date_desc};
pub use page::{BillsPageState, get_bill_preview, get_bills_page, post_new_bill};
pub use record::{BillId, BillRecord, NormalizedBill};
pub use store::{BillStore, FailureClass, StoreError};
pub use view::{ReceiptModalView, RenderMode, bills_view, receipt_modal};
