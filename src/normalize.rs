use serde_json::Value;

use crate::types::Listing;

/// Placeholder title for items the API returned without one.
pub const NO_TITLE: &str = "(no title)";

/// Pull the `search_results` list out of a response body and normalize
/// up to `max_items` entries, preserving the API's order. An absent or
/// non-list field is treated as an empty result set.
pub fn parse_results(data: &Value, max_items: usize) -> Vec<Listing> {
    data.get("search_results")
        .and_then(Value::as_array)
        .map(|items| items.iter().take(max_items).map(normalize).collect())
        .unwrap_or_default()
}

/// Map one raw API item to a [`Listing`]. Total over any JSON shape:
/// missing or oddly-typed fields degrade to defaults, they never fail
/// the item or the batch.
pub fn normalize(raw: &Value) -> Listing {
    let title = non_empty_str(raw, "title").unwrap_or(NO_TITLE).to_string();
    let asin = non_empty_str(raw, "asin").unwrap_or("").to_string();
    let link = match non_empty_str(raw, "link") {
        Some(link) => link.to_string(),
        None if !asin.is_empty() => format!("https://www.amazon.com/dp/{asin}"),
        None => String::new(),
    };
    let image = non_empty_str(raw, "image").unwrap_or("").to_string();

    Listing {
        title,
        asin,
        link,
        image,
        price: price_text(raw),
        rating: raw.get("rating").and_then(Value::as_f64),
        ratings_total: raw.get("ratings_total").and_then(Value::as_i64),
    }
}

// The price lives at item.price.raw or, failing that, item.prices[0].raw.
fn price_text(raw: &Value) -> String {
    let from_object = raw
        .get("price")
        .and_then(|p| p.get("raw"))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty());
    let from_list = || {
        raw.get("prices")
            .and_then(Value::as_array)
            .and_then(|prices| prices.first())
            .and_then(|p| p.get("raw"))
            .and_then(Value::as_str)
    };
    from_object.or_else(from_list).unwrap_or("").to_string()
}

fn non_empty_str<'a>(raw: &'a Value, key: &str) -> Option<&'a str> {
    raw.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_item_degrades_to_defaults() {
        let listing = normalize(&json!({}));
        assert_eq!(listing.title, NO_TITLE);
        assert_eq!(listing.asin, "");
        assert_eq!(listing.link, "");
        assert_eq!(listing.image, "");
        assert_eq!(listing.price, "");
        assert_eq!(listing.rating, None);
        assert_eq!(listing.ratings_total, None);
    }

    #[test]
    fn price_object_wins_over_prices_list() {
        let listing = normalize(&json!({
            "price": { "raw": "$10" },
            "prices": [{ "raw": "$5" }],
        }));
        assert_eq!(listing.price, "$10");
    }

    #[test]
    fn prices_list_is_the_fallback() {
        let listing = normalize(&json!({ "prices": [{ "raw": "$5" }] }));
        assert_eq!(listing.price, "$5");
    }

    #[test]
    fn wrongly_shaped_price_falls_back_to_list() {
        // price as a bare number cannot carry a raw string
        let listing = normalize(&json!({
            "price": 9.99,
            "prices": [{ "raw": "$9.99" }],
        }));
        assert_eq!(listing.price, "$9.99");
    }

    #[test]
    fn link_is_synthesized_from_asin() {
        let listing = normalize(&json!({ "asin": "B000X" }));
        assert_eq!(listing.link, "https://www.amazon.com/dp/B000X");
    }

    #[test]
    fn explicit_link_wins_over_synthesis() {
        let listing = normalize(&json!({
            "asin": "B000X",
            "link": "https://www.amazon.com/gp/product/B000X",
        }));
        assert_eq!(listing.link, "https://www.amazon.com/gp/product/B000X");
    }

    #[test]
    fn empty_title_gets_the_placeholder() {
        let listing = normalize(&json!({ "title": "" }));
        assert_eq!(listing.title, NO_TITLE);
    }

    #[test]
    fn rating_fields_pass_through() {
        let listing = normalize(&json!({ "rating": 4.5, "ratings_total": 1234 }));
        assert_eq!(listing.rating, Some(4.5));
        assert_eq!(listing.ratings_total, Some(1234));
    }

    #[test]
    fn results_are_truncated_in_order() {
        let items: Vec<_> = (0..25).map(|i| json!({ "title": format!("item {i}") })).collect();
        let listings = parse_results(&json!({ "search_results": items }), 10);
        assert_eq!(listings.len(), 10);
        for (i, listing) in listings.iter().enumerate() {
            assert_eq!(listing.title, format!("item {i}"));
        }
    }

    #[test]
    fn missing_results_field_means_empty() {
        assert!(parse_results(&json!({ "request_info": {} }), 10).is_empty());
    }

    #[test]
    fn non_list_results_field_means_empty() {
        assert!(parse_results(&json!({ "search_results": "nope" }), 10).is_empty());
    }
}
