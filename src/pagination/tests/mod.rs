mod controller_tests;

use crate::document::ListingPage;

const BASE: &str = "https://www.kleinanzeigen.de";

/// Builds a results page whose body is `pagination`, loaded from `path`
fn page_at(path: &str, pagination: &str) -> ListingPage {
    let html = format!(
        r#"<html><body><main><ul class="ad-list"></ul><div class="pagination">{pagination}</div></main></body></html>"#
    );
    ListingPage::parse(&html, &format!("{BASE}{path}")).unwrap()
}
