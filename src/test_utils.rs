//! Document builders shared by unit tests

use crate::content::document::{RawBlock, RawData, RawSection};
use crate::content::RawDocument;
use crate::source::InMemorySource;

/// A published document with one short section
pub fn document(uid: &str, date: &str, title: &str) -> RawDocument {
    RawDocument {
        uid: Some(uid.to_string()),
        first_publication_date: Some(date.to_string()),
        data: RawData {
            title: Some(title.to_string()),
            subtitle: Some(format!("About {}", title)),
            author: Some("Joseph Oliveira".to_string()),
            banner: None,
            content: vec![RawSection {
                heading: Some("Intro".to_string()),
                body: vec![RawBlock {
                    kind: Some("paragraph".to_string()),
                    text: Some("Hello world this is a test".to_string()),
                }],
            }],
        },
    }
}

/// An unpublished document
pub fn draft(uid: &str, title: &str) -> RawDocument {
    RawDocument {
        first_publication_date: None,
        ..document(uid, "1970-01-01T00:00:00+0000", title)
    }
}

/// Four posts, one per month, alpha oldest and delta newest
pub fn sample_source() -> InMemorySource {
    InMemorySource::from_documents(vec![
        document("alpha", "2021-01-01T00:00:00+0000", "Alpha"),
        document("beta", "2021-02-01T00:00:00+0000", "Beta"),
        document("gamma", "2021-03-01T00:00:00+0000", "Gamma"),
        document("delta", "2021-04-01T00:00:00+0000", "Delta"),
    ])
}
