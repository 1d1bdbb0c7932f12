
use crate::document::ListingPage;

const SEARCH_URL: &str = "https://www.kleinanzeigen.de/s-wohnung-mieten/c203";

/// Wraps listing items in a minimal result page
fn page_with(items: &str) -> ListingPage {
    let html = format!(r#"<html><body><ul id="srchrslt-adtable">{items}</ul></body></html>"#);
    ListingPage::parse(&html, SEARCH_URL).unwrap()
}

/// A result-list item shaped like the live site's markup
const RESULT_ITEM: &str = r#"
<li class="ad-listitem">
  <article class="aditem" data-adid="3091889498">
    <div class="aditem-main">
      <div class="aditem-main--top">
        <div class="aditem-main--top--left">
          26409 Wittmund (12 km)
        </div>
      </div>
      <div class="aditem-main--middle">
        <h2 class="text-module-begin"><a class="ellipsis" href="/s-anzeige/2-zimmer-wohnung/3091889498-203-3077">2-Zimmer-Wohnung mit Balkon</a></h2>
        <p class="aditem-main--middle--description">Helle Wohnung, ruhige Lage, Einbauküche vorhanden. Keine Haustiere.</p>
        <div class="aditem-main--middle--price-shipping">
          <p class="aditem-main--middle--price-shipping--price">
            800 €
          </p>
        </div>
      </div>
      <div class="aditem-main--bottom">
        <p class="text-module-end">
          <span class="simpletag">72,2 m²</span>
          <span class="simpletag">2 Zi.</span>
        </p>
      </div>
    </div>
  </article>
</li>"#;
