//! HTML rendering for the bills page.

use maud::{Markup, PreEscaped, html};

use crate::{
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_PRIMARY_STYLE, HeadElement, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, format_euros, loading_spinner,
    },
    session::Session,
};

use super::record::NormalizedBill;

pub const PAGE_TITLE: &str = "Mes notes de frais";
pub const NEW_BILL_BUTTON_TEXT: &str = "Nouvelle note de frais";
pub const LOADING_TEXT: &str = "Loading...";

const ICON_STYLE: &str = "flex items-center justify-center w-12 h-12 rounded \
    text-gray-500 hover:text-blue-700 dark:text-gray-400";
const ACTIVE_ICON_STYLE: &str = "active-icon flex items-center justify-center w-12 h-12 \
    rounded bg-blue-50 text-blue-700 dark:bg-blue-900/30 dark:text-blue-200";

/// What the bills page should show. Exactly one mode is shown at a time.
#[derive(Debug, Clone, Copy)]
pub enum RenderMode<'a> {
    /// The bills, already in display order.
    Data(&'a [NormalizedBill]),
    Loading,
    /// The message the store rejected with.
    Error(&'a str),
}

/// The state of the receipt preview modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReceiptModalView {
    /// The receipt image URL, `None` until a receipt has been requested.
    pub image_source: Option<String>,
    pub image_width: u32,
    pub visible: bool,
}

/// Render the bills page for `mode`.
pub fn bills_view(mode: RenderMode<'_>, session: &Session) -> Markup {
    let content = match mode {
        RenderMode::Data(bills) => bills_table_view(bills),
        RenderMode::Loading => loading_view(),
        RenderMode::Error(message) => error_message_view(message),
    };

    let page = html!(
        div class="layout flex min-h-screen"
        {
            (vertical_layout(session))

            main class=(PAGE_CONTAINER_STYLE) { (content) }
        }
    );

    base(PAGE_TITLE, &[modal_styles()], &page)
}

/// The icon bar shown to employees on the left of every page.
fn vertical_layout(session: &Session) -> Markup {
    html!(
        @if session.is_employee() {
            nav
                class="flex flex-col items-center gap-4 px-2 py-6 bg-white
                    border-r border-gray-200 dark:bg-gray-800 dark:border-gray-700"
                data-testid="vertical-layout"
            {
                a
                    href=(endpoints::BILLS_VIEW)
                    id="layout-icon1"
                    data-testid="icon-window"
                    class=(ACTIVE_ICON_STYLE)
                    title=(PAGE_TITLE)
                {
                    (window_icon())
                }

                a
                    href=(endpoints::NEW_BILL_VIEW)
                    id="layout-icon2"
                    data-testid="icon-mail"
                    class=(ICON_STYLE)
                    title=(NEW_BILL_BUTTON_TEXT)
                {
                    (mail_icon())
                }

                @if let Some(email) = &session.email {
                    span
                        class="mt-auto text-xs text-gray-500 dark:text-gray-400 [writing-mode:vertical-rl]"
                        data-testid="user-email"
                    {
                        (email)
                    }
                }
            }
        }
    )
}

fn bills_table_view(bills: &[NormalizedBill]) -> Markup {
    html!(
        section class="space-y-4 w-full lg:max-w-5xl"
        {
            header class="flex justify-between flex-wrap items-end"
            {
                h1 class="text-xl font-bold" data-testid="content-title" { (PAGE_TITLE) }

                button
                    type="button"
                    data-testid="btn-new-bill"
                    hx-post=(endpoints::NEW_BILL_API)
                    class=(BUTTON_PRIMARY_STYLE)
                {
                    (NEW_BILL_BUTTON_TEXT)
                }
            }

            div id="data-table" class="dark:bg-gray-800"
            {
                table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Nom" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Montant" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Statut" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                        }
                    }

                    tbody data-testid="tbody"
                    {
                        @for bill in bills {
                            (bill_row_view(bill))
                        }
                    }
                }

                @if bills.is_empty() {
                    p data-empty-state="true" class="px-6 py-4 text-center"
                    {
                        "Aucune note de frais pour le moment. "
                        a href=(endpoints::NEW_BILL_VIEW) class=(LINK_STYLE)
                        {
                            "Créer une note de frais"
                        }
                    }
                }
            }
        }

        (receipt_modal(&ReceiptModalView::default()))
    )
}

fn bill_row_view(bill: &NormalizedBill) -> Markup {
    let record = &bill.record;
    let preview_url = format_endpoint(endpoints::BILL_PREVIEW, &record.id);

    html!(
        tr class=(TABLE_ROW_STYLE) data-bill-id=(record.id)
        {
            td class=(TABLE_CELL_STYLE) { (record.expense_type.as_deref().unwrap_or_default()) }
            td class=(TABLE_CELL_STYLE) { (record.name.as_deref().unwrap_or_default()) }
            td class=(TABLE_CELL_STYLE) title=[bill.date_label.as_deref()] { (bill.display_date) }
            td class=(TABLE_CELL_STYLE) { (format_euros(record.amount)) }
            td class=(TABLE_CELL_STYLE) { (bill.display_status) }
            td class=(TABLE_CELL_STYLE)
            {
                div class="icon-actions"
                {
                    button
                        type="button"
                        data-testid="icon-eye"
                        data-bill-url=(record.file_url.as_deref().unwrap_or_default())
                        hx-get=(preview_url)
                        hx-target="#modaleFile"
                        hx-swap="outerHTML"
                        aria-label="Voir le justificatif"
                        class="text-blue-600 hover:text-blue-500 dark:text-blue-500"
                    {
                        (eye_icon())
                    }
                }
            }
        }
    )
}

fn loading_view() -> Markup {
    html!(
        div id="loading" class="flex items-center text-lg"
        {
            (loading_spinner())
            (LOADING_TEXT)
        }
    )
}

fn error_message_view(message: &str) -> Markup {
    html!(
        div id="error-message" class="text-center space-y-2"
        {
            p class="text-3xl font-bold text-red-600 dark:text-red-400" { "Erreur" }

            div data-testid="error-message" class="text-lg" { (message) }
        }
    )
}

/// Render the receipt preview modal.
///
/// The whole modal is swapped in when a receipt is previewed, so it must keep
/// the `modaleFile` id.
pub fn receipt_modal(modal: &ReceiptModalView) -> Markup {
    let class = if modal.visible { "modal show" } else { "modal" };

    html!(
        div
            id="modaleFile"
            class=(class)
            role="dialog"
            aria-hidden=(if modal.visible { "false" } else { "true" })
        {
            div class="modal-dialog w-full max-w-3xl rounded bg-white shadow-xl dark:bg-gray-800"
            {
                div class="modal-header flex justify-between items-center px-4 py-3 border-b dark:border-gray-700"
                {
                    h5 class="modal-title text-lg font-semibold" { "Justificatif" }

                    button
                        type="button"
                        class="close"
                        aria-label="Close"
                        onclick="this.closest('#modaleFile').classList.remove('show')"
                    {
                        "×"
                    }
                }

                div class="modal-body p-4"
                {
                    @if let Some(image_source) = &modal.image_source {
                        div class="bill-proof-container" style="text-align: center;"
                        {
                            img width=(modal.image_width) src=(image_source) alt="Bill";
                        }
                    }
                }
            }
        }
    )
}

fn modal_styles() -> HeadElement {
    HeadElement::Style(PreEscaped(
        r#"
        #modaleFile.modal {
            display: none;
        }
        #modaleFile.modal.show {
            display: flex;
            position: fixed;
            inset: 0;
            align-items: center;
            justify-content: center;
            background: rgba(0, 0, 0, 0.5);
            z-index: 50;
        }
        "#
        .to_owned(),
    ))
}

fn eye_icon() -> Markup {
    html!(
        svg class="w-5 h-5" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"
            xmlns="http://www.w3.org/2000/svg" aria-hidden="true"
        {
            path d="M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z" {}
            circle cx="12" cy="12" r="3" {}
        }
    )
}

fn window_icon() -> Markup {
    html!(
        svg class="w-6 h-6" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"
            xmlns="http://www.w3.org/2000/svg" aria-hidden="true"
        {
            rect x="3" y="4" width="18" height="16" rx="2" {}
            path d="M3 9h18" {}
        }
    )
}

fn mail_icon() -> Markup {
    html!(
        svg class="w-6 h-6" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"
            xmlns="http://www.w3.org/2000/svg" aria-hidden="true"
        {
            rect x="2" y="4" width="20" height="16" rx="2" {}
            path d="M22 6l-10 7L2 6" {}
        }
    )
}
