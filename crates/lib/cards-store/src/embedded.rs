//! Dataset snapshot compiled into the binary.

use crate::models::SourceFile;

const EMBEDDED_FILES: &[(&str, &str)] = &[
    (
        "schemas/credit-card.schema.json",
        include_str!("../data/schemas/credit-card.schema.json"),
    ),
    (
        "sample-credit-cards/midtier-cashback.json",
        include_str!("../data/sample-credit-cards/midtier-cashback.json"),
    ),
    (
        "sample-credit-cards/premium-travel.json",
        include_str!("../data/sample-credit-cards/premium-travel.json"),
    ),
    (
        "sample-credit-cards/secured-credit-builder.json",
        include_str!("../data/sample-credit-cards/secured-credit-builder.json"),
    ),
    (
        "sample-credit-cards/store-deferred-interest.json",
        include_str!("../data/sample-credit-cards/store-deferred-interest.json"),
    ),
    (
        "sample-credit-cards/student-starter.json",
        include_str!("../data/sample-credit-cards/student-starter.json"),
    ),
];

/// Returns the embedded data files in their canonical order.
#[must_use]
pub fn sources() -> Vec<SourceFile> {
    EMBEDDED_FILES
        .iter()
        .map(|(path, content)| SourceFile::new(*path, *content))
        .collect()
}
