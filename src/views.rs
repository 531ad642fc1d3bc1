//! HTML page rendering
//!
//! The browser surface is a handful of small pages rendered straight to
//! strings; none of the markup is worth a template engine. User-supplied
//! values are escaped before interpolation.

use crate::models::Cafe;

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n\
         <body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

fn error_list(errors: &[String]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let items: String = errors
        .iter()
        .map(|e| format!("<li class=\"form-error\">{}</li>", escape(e)))
        .collect();
    format!("<ul class=\"form-errors\">{items}</ul>")
}

/// Landing page: the location search form
pub fn search_page(errors: &[String]) -> String {
    let body = format!(
        "<h1>Let's find cafes...</h1>\n{}\
         <form method=\"post\" action=\"/\">\n\
         <input type=\"search\" name=\"loc\" placeholder=\"Let's find cafes...\">\n\
         <button type=\"submit\">Search</button>\n\
         </form>",
        error_list(errors)
    );
    page("Cafe Finder", &body)
}

/// Card list for one or more cafes matching a location
pub fn cafe_cards(location: &str, cafes: &[Cafe]) -> String {
    let cards: String = cafes.iter().map(cafe_card).collect();
    let body = format!(
        "<h1>Cafes in {loc}</h1>\n<div class=\"cafe-cards\">\n{cards}</div>\n\
         <p><a href=\"/add?place={loc}\">Add a cafe in {loc}</a></p>",
        loc = escape(location),
    );
    page(&format!("Cafes in {location}"), &body)
}

fn cafe_card(cafe: &Cafe) -> String {
    let amenity = |on: bool, label: &str| {
        if on {
            format!("<li>{label}</li>")
        } else {
            String::new()
        }
    };
    let price = cafe
        .coffee_price
        .as_deref()
        .map(escape)
        .unwrap_or_else(|| "n/a".into());
    format!(
        "<div class=\"cafe-card\" id=\"cafe-{id}\">\n\
         <h2>{name}</h2>\n\
         <img src=\"{img}\" alt=\"{name}\">\n\
         <p><a href=\"{map}\">Map</a> · Seats: {seats} · Coffee: {price}</p>\n\
         <ul class=\"amenities\">{toilet}{wifi}{sockets}{calls}</ul>\n\
         <p><a href=\"/report-closed/{id}\">Report closed</a></p>\n\
         </div>\n",
        id = cafe.id,
        name = escape(&cafe.name),
        img = escape(&cafe.img_url),
        map = escape(&cafe.map_url),
        seats = escape(&cafe.seats),
        price = price,
        toilet = amenity(cafe.has_toilet, "Toilet"),
        wifi = amenity(cafe.has_wifi, "Wi-Fi"),
        sockets = amenity(cafe.has_sockets, "Power sockets"),
        calls = amenity(cafe.can_take_calls, "Call friendly"),
    )
}

/// Rendered when a location search matches nothing; echoes the attempted
/// location so the user sees what was searched
pub fn not_found_page(location: &str) -> String {
    let body = format!(
        "<h1>No cafes found in {loc}</h1>\n\
         <p>We don't know any cafes in {loc} yet.</p>\n\
         <p><a href=\"/add?place={loc}\">Be the first to add one</a> or \
         <a href=\"/\">search again</a>.</p>",
        loc = escape(location),
    );
    page("No cafes found", &body)
}

/// Add-cafe form. The location is carried in the `place` query parameter
/// and displayed read-only, not collected from the form body.
pub fn add_cafe_page(place: &str, errors: &[String]) -> String {
    let checkbox = |name: &str, label: &str| {
        format!(
            "<label><input type=\"checkbox\" name=\"{name}\"> {label}</label><br>\n"
        )
    };
    let body = format!(
        "<h1>Add a cafe in {place}</h1>\n{errors}\
         <form method=\"post\" action=\"/add?place={place}\">\n\
         <label>Cafe Name <input type=\"text\" name=\"name\"></label><br>\n\
         <label>Map Url <input type=\"text\" name=\"map_url\"></label><br>\n\
         <label>Image Url <input type=\"text\" name=\"img_url\"></label><br>\n\
         <label>How many seats is in the Cafe? <input type=\"text\" name=\"seats\"></label><br>\n\
         <label>How much costs coffee? <input type=\"text\" name=\"coffee_price\"></label><br>\n\
         {sockets}{toilet}{wifi}{calls}\
         <button type=\"submit\">Add The Cafe</button>\n\
         </form>",
        place = escape(place),
        errors = error_list(errors),
        sockets = checkbox("has_sockets", "The Cafe has sockets?"),
        toilet = checkbox("has_toilet", "The Cafe has toilet?"),
        wifi = checkbox("has_wifi", "The Cafe has Wi-Fi?"),
        calls = checkbox("can_take_calls", "The cafe can take calls?"),
    );
    page("Add a cafe", &body)
}

/// Password gate for the report-closed flow. Re-rendered as-is on a wrong
/// password: the gate deliberately gives no failure signal.
pub fn password_gate_page(cafe_id: i64) -> String {
    let body = format!(
        "<h1>Report closed</h1>\n\
         <form method=\"post\" action=\"/report-closed/{cafe_id}\">\n\
         <label>Enter your Password <input type=\"password\" name=\"password\"></label>\n\
         <button type=\"submit\">Submit</button>\n\
         </form>"
    );
    page("Report closed", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Cafe {
        Cafe {
            id: 7,
            name: "Joe's <Cafe>".into(),
            map_url: "https://maps.example/joes".into(),
            img_url: "https://img.example/joes.jpg".into(),
            location: "Downtown".into(),
            seats: "10".into(),
            has_toilet: false,
            has_wifi: true,
            has_sockets: true,
            can_take_calls: false,
            coffee_price: None,
        }
    }

    #[test]
    fn test_escapes_user_input() {
        let html = cafe_cards("Downtown", &[sample()]);
        assert!(html.contains("Joe&#39;s &lt;Cafe&gt;"));
        assert!(!html.contains("<Cafe>"));
    }

    #[test]
    fn test_card_shows_only_present_amenities() {
        let html = cafe_cards("Downtown", &[sample()]);
        assert!(html.contains("Wi-Fi"));
        assert!(html.contains("Power sockets"));
        assert!(!html.contains("<li>Toilet</li>"));
        assert!(html.contains("Coffee: n/a"));
    }

    #[test]
    fn test_not_found_echoes_location() {
        let html = not_found_page("Uptown");
        assert!(html.contains("No cafes found in Uptown"));
    }
}
