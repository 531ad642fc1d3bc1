//! Browser form payloads and validation
//!
//! Three forms back the HTML surface: location search, add-cafe, and the
//! report-closed password gate. Required-field presence is enforced with
//! `validator` before any handler touches the store.

use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationErrors};

use crate::models::NewCafe;

/// Location search form (`POST /` and `POST /search`)
#[derive(Debug, Deserialize, Validate)]
pub struct SearchForm {
    #[validate(length(min = 1, message = "Please enter a location"))]
    pub loc: String,
}

/// Query-string twin of the search form (`GET /search?loc=`)
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub loc: String,
}

/// Password gate for the report-closed delete flow
#[derive(Debug, Deserialize, Validate)]
pub struct PasswordForm {
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Add-cafe submission. The cafe's location does NOT come from this form:
/// it is carried in the `place` query parameter (pre-filled by the search
/// page the user came from), see [`PlaceQuery`].
#[derive(Debug, Deserialize, Validate)]
pub struct AddCafeForm {
    #[validate(length(min = 1, message = "Cafe name is required"))]
    #[serde(default)]
    pub name: String,
    #[validate(length(min = 1, message = "Map URL is required"))]
    #[serde(default)]
    pub map_url: String,
    #[validate(length(min = 1, message = "Image URL is required"))]
    #[serde(default)]
    pub img_url: String,
    #[serde(default)]
    pub seats: Option<String>,
    #[serde(default)]
    pub coffee_price: Option<String>,
    #[serde(default, deserialize_with = "checkbox")]
    pub has_sockets: bool,
    #[serde(default, deserialize_with = "checkbox")]
    pub has_toilet: bool,
    #[serde(default, deserialize_with = "checkbox")]
    pub has_wifi: bool,
    #[serde(default, deserialize_with = "checkbox")]
    pub can_take_calls: bool,
}

/// Query parameter carrying the new cafe's location for `/add`
#[derive(Debug, Deserialize)]
pub struct PlaceQuery {
    #[serde(default)]
    pub place: String,
}

impl AddCafeForm {
    /// Build the record to persist. Only called after validation passed.
    pub fn into_new_cafe(self, location: String) -> NewCafe {
        NewCafe {
            name: self.name,
            map_url: self.map_url,
            img_url: self.img_url,
            location,
            seats: self.seats.unwrap_or_default(),
            has_toilet: self.has_toilet,
            has_wifi: self.has_wifi,
            has_sockets: self.has_sockets,
            can_take_calls: self.can_take_calls,
            coffee_price: self.coffee_price.filter(|p| !p.is_empty()),
        }
    }
}

/// HTML checkboxes submit "on" when ticked and are absent otherwise,
/// so a plain `bool` field cannot deserialize them.
fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.is_some_and(|v| !matches!(v.as_str(), "" | "0" | "off" | "false")))
}

/// Flatten validator output into displayable messages
pub fn error_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_deref()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{field} is invalid"))
            })
        })
        .collect();
    messages.sort();
    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkbox_variants() {
        let form: AddCafeForm = serde_urlencoded::from_str(
            "name=Joe&map_url=m&img_url=i&has_wifi=on&has_sockets=true&has_toilet=off",
        )
        .unwrap();
        assert!(form.has_wifi);
        assert!(form.has_sockets);
        assert!(!form.has_toilet);
        assert!(!form.can_take_calls);
    }

    #[test]
    fn test_required_fields() {
        let form: AddCafeForm = serde_urlencoded::from_str("map_url=m&img_url=i").unwrap();
        let errors = form.validate().unwrap_err();
        let messages = error_messages(&errors);
        assert_eq!(messages, vec!["Cafe name is required"]);
    }

    #[test]
    fn test_into_new_cafe_defaults() {
        let form: AddCafeForm =
            serde_urlencoded::from_str("name=Joe&map_url=m&img_url=i&coffee_price=").unwrap();
        let cafe = form.into_new_cafe("Downtown".into());
        assert_eq!(cafe.location, "Downtown");
        assert_eq!(cafe.seats, "");
        assert_eq!(cafe.coffee_price, None);
    }
}
