//! Sample bills for manual testing and the test suite.

use super::record::BillRecord;

/// Four bills with distinct, well-formed dates, in no particular order.
pub fn sample_bills() -> Vec<BillRecord> {
    vec![
        BillRecord {
            id: "qcCK3SzECmaZAGRrHjaC".to_owned(),
            date: "2002-02-02".to_owned(),
            status: "refused".to_owned(),
            amount: 100.0,
            vat: None,
            pct: Some(20.0),
            file_url: Some("https://test.storage.tld/v0/b/billable/o/justificatif.jpg".to_owned()),
            file_name: Some("preview-facture-free-201801-pdf-1.jpg".to_owned()),
            email: "a@a".to_owned(),
            name: Some("test2".to_owned()),
            expense_type: Some("Restaurants et bars".to_owned()),
            commentary: Some("plop".to_owned()),
            comment_admin: Some("en fait non".to_owned()),
        },
        BillRecord {
            id: "47qAXb6fIm2zOKkLzMro".to_owned(),
            date: "2004-04-04".to_owned(),
            status: "pending".to_owned(),
            amount: 400.0,
            vat: Some(80.0),
            pct: Some(20.0),
            file_url: Some("https://test.storage.tld/v0/b/billable/o/facture.jpg".to_owned()),
            file_name: Some("preview-facture-free-201801-pdf-1.jpg".to_owned()),
            email: "a@a".to_owned(),
            name: Some("encore".to_owned()),
            expense_type: Some("Hôtel et logement".to_owned()),
            commentary: Some("séminaire billed".to_owned()),
            comment_admin: Some("ok".to_owned()),
        },
        BillRecord {
            id: "UIUZtnPQvnbFnB0ozvJh".to_owned(),
            date: "2003-03-03".to_owned(),
            status: "accepted".to_owned(),
            amount: 100.0,
            vat: Some(70.0),
            pct: Some(20.0),
            file_url: Some("https://test.storage.tld/v0/b/billable/o/note.jpg".to_owned()),
            file_name: Some("facture-client-php-exportee-dans-document-pdf-enregistre.png".to_owned()),
            email: "a@a".to_owned(),
            name: Some("test3".to_owned()),
            expense_type: Some("Services en ligne".to_owned()),
            commentary: Some(String::new()),
            comment_admin: Some("bon bah d'accord".to_owned()),
        },
        BillRecord {
            id: "BeKy5Mo4jkmdfPGYpTxZ".to_owned(),
            date: "2001-01-01".to_owned(),
            status: "refused".to_owned(),
            amount: 100.0,
            vat: None,
            pct: Some(20.0),
            file_url: Some("https://test.storage.tld/v0/b/billable/o/recu.jpg".to_owned()),
            file_name: Some("1592770761.jpeg".to_owned()),
            email: "a@a".to_owned(),
            name: Some("test1".to_owned()),
            expense_type: Some("Hôtel et logement".to_owned()),
            commentary: Some("séminaire billed".to_owned()),
            comment_admin: Some("en fait non".to_owned()),
        },
    ]
}
