use std::fmt::Write;

use crate::types::{Listing, SearchError};

const STYLE: &str = r#"
    :root {
      --bg: #0f172a; /* slate-900 */
      --card: #111827; /* gray-900 */
      --muted: #94a3b8; /* slate-400 */
      --fg: #e5e7eb; /* gray-200 */
      --accent: #22c55e; /* green-500 */
    }
    * { box-sizing: border-box; }
    body { margin: 0; font-family: ui-sans-serif, system-ui, -apple-system, Segoe UI, Roboto, Helvetica, Arial, Noto Sans, "Apple Color Emoji", "Segoe UI Emoji"; background: linear-gradient(180deg, #0f172a, #0b1023 50%, #0f172a); color: var(--fg); }
    header { padding: 24px; text-align: center; border-bottom: 1px solid #1f2937; position: sticky; top: 0; backdrop-filter: blur(6px); background: rgba(15, 23, 42, 0.7); }
    h1 { margin: 0; font-size: 20px; letter-spacing: 0.3px; }
    .wrap { max-width: 1080px; margin: 24px auto; padding: 0 16px; }
    form { display: flex; gap: 8px; margin-top: 12px; justify-content: center; }
    input[type=text] { flex: 1; max-width: 520px; padding: 12px 14px; border-radius: 10px; border: 1px solid #374151; background: #0b1224; color: var(--fg); outline: none; }
    input[type=text]:focus { border-color: var(--accent); box-shadow: 0 0 0 3px rgba(34,197,94,.15); }
    button { padding: 12px 16px; border-radius: 10px; border: 1px solid #14532d; background: linear-gradient(180deg,#22c55e,#16a34a); color: white; cursor: pointer; }
    .grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 16px; margin-top: 20px; }
    .card { background: radial-gradient(1200px 600px at 20% -10%, rgba(34,197,94,0.08), transparent), var(--card); border: 1px solid #1f2937; border-radius: 14px; padding: 14px; transition: transform .12s ease, border-color .12s ease; }
    .card:hover { transform: translateY(-2px); border-color: #374151; }
    .title { font-size: 14px; line-height: 1.3; margin: 8px 0; min-height: 3.2em; }
    .meta { color: var(--muted); font-size: 12px; display: flex; gap: 10px; align-items: center; }
    .price { color: #fbbf24; font-weight: 600; }
    .imgwrap { display: flex; align-items: center; justify-content: center; background: #ffffff; border: 1px solid #1f2937; border-radius: 10px; height: 180px; overflow: hidden; }
    .imgwrap img { max-height: 160px; max-width: 100%; object-fit: contain; }
    footer { text-align: center; color: var(--muted); font-size: 12px; padding: 24px; }
    .error { color: #fecaca; background: #7f1d1d; border: 1px solid #b91c1c; padding: 10px 12px; border-radius: 10px; margin: 16px auto; max-width: 720px; }
"#;

/// Render the full results page. Pure function of its inputs; every
/// externally-sourced string goes through [`escape`] before it reaches
/// the markup.
pub fn render_page(
    query: &str,
    results: &[Listing],
    error: Option<&SearchError>,
    amazon_domain: &str,
) -> String {
    let mut page = String::with_capacity(8 * 1024);
    page.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
    page.push_str("  <meta charset=\"utf-8\" />\n");
    page.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n");
    page.push_str("  <title>Rainforest Amazon Search</title>\n");
    let _ = write!(page, "  <style>{STYLE}</style>\n");
    page.push_str("</head>\n<body>\n");
    page.push_str("  <header>\n    <h1>Rainforest Amazon Search</h1>\n");
    let _ = write!(
        page,
        "    <form method=\"GET\" action=\"/\">\n      <input type=\"text\" name=\"q\" placeholder=\"Search Amazon…\" value=\"{}\" />\n      <button type=\"submit\">Search</button>\n    </form>\n",
        escape(query)
    );
    page.push_str("  </header>\n  <div class=\"wrap\">\n");

    if let Some(error) = error {
        let _ = write!(page, "<div class=\"error\">{}</div>\n", escape(&error.to_string()));
    }

    if results.is_empty() {
        page.push_str("<p class=\"meta\">No results found.</p>\n");
    } else {
        page.push_str("<div class=\"grid\">\n");
        for listing in results {
            push_card(&mut page, listing);
        }
        page.push_str("</div>\n");
    }

    let _ = write!(
        page,
        "  </div>\n  <footer>\n    Powered by Rainforest API • Domain: {}\n  </footer>\n</body>\n</html>\n",
        escape(amazon_domain)
    );
    page
}

fn push_card(page: &mut String, listing: &Listing) {
    let title = escape(&listing.title);
    let href = if listing.link.is_empty() { "#".to_string() } else { escape(&listing.link) };
    let img_html = if listing.image.is_empty() {
        "<div style=\"height:1px\"></div>".to_string()
    } else {
        format!("<img src=\"{}\" alt=\"{}\">", escape(&listing.image), title)
    };
    // Shown only when the API gave both a numeric rating and a count.
    let rating_html = match (listing.rating, listing.ratings_total) {
        (Some(rating), Some(total)) => {
            format!("<span>★ {rating:.1}</span> <span>({})</span>", group_thousands(total))
        }
        _ => String::new(),
    };

    let _ = write!(
        page,
        concat!(
            "<a class=\"card\" href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\">\n",
            "  <div class=\"imgwrap\">{img}</div>\n",
            "  <div class=\"title\">{title}</div>\n",
            "  <div class=\"meta\">\n",
            "    <span class=\"price\">{price}</span>\n",
            "    <span>ASIN: {asin}</span>\n",
            "    {rating}\n",
            "  </div>\n",
            "</a>\n",
        ),
        href = href,
        img = img_html,
        title = title,
        price = escape(&listing.price),
        asin = escape(&listing.asin),
        rating = rating_html,
    );
}

/// Escape text for embedding in HTML content or double-quoted attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

// 1234567 -> "1,234,567"
fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if n < 0 {
        format!("-{out}")
    } else {
        out
    }
}
