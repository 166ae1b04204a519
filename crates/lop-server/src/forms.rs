//! Request bodies posted by the browser client.
//!
//! Each form mirrors a core parameter struct and converts into it with
//! `into_params`, keeping body-format concerns out of `lop-core`. A body may
//! be URL-encoded or JSON, see [`FormOrJson`]. Fields are lenient: a missing
//! field arrives as an empty string and is reported through the usual
//! not-found or invalid-input errors rather than an extractor rejection. The
//! field names of the earlier client (`id_act`, `besitzer`, `aufgabe`,
//! `datum`) are accepted as aliases.

use std::fmt;

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header,
    response::{IntoResponse, Response},
    Form, Json,
};
use lop_core::{parse_date, CreateEntry, Id, LopError, Result, UpdateEntry};
use serde::{
    de::{self, DeserializeOwned, Visitor},
    Deserialize, Deserializer,
};

/// Extracts `T` from a JSON body when the request says
/// `Content-Type: application/json`, and from a URL-encoded form otherwise.
pub struct FormOrJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for FormOrJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> std::result::Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));

        if is_json {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(value))
        } else {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(value))
        }
    }
}

/// `POST /create`
#[derive(Debug, Deserialize)]
pub struct CreateForm {
    #[serde(default, alias = "besitzer")]
    pub owner: String,
    #[serde(default, alias = "aufgabe")]
    pub task: String,
    #[serde(default, alias = "datum")]
    pub date: String,
}

impl CreateForm {
    pub fn into_params(self) -> Result<CreateEntry> {
        Ok(CreateEntry {
            owner: self.owner,
            task: self.task,
            due_date: parse_date(&self.date)?,
        })
    }
}

/// `POST /read` and `POST /delete`
#[derive(Debug, Deserialize)]
pub struct IdForm {
    #[serde(default, alias = "id_act", deserialize_with = "text_or_number")]
    pub id: String,
}

impl IdForm {
    pub fn into_params(self) -> Result<Id> {
        parse_id(&self.id).map(Id::from)
    }
}

/// `POST /update`
#[derive(Debug, Deserialize)]
pub struct UpdateForm {
    #[serde(default, alias = "id_act", deserialize_with = "text_or_number")]
    pub id: String,
    #[serde(default, alias = "besitzer")]
    pub owner: String,
    #[serde(default, alias = "aufgabe")]
    pub task: String,
    #[serde(default, alias = "datum")]
    pub date: String,
}

impl UpdateForm {
    /// The targeted entry. Checked before the date, so an unknown ID is
    /// reported as not-found even when the date is invalid too.
    pub fn entry_id(&self) -> Result<Id> {
        parse_id(&self.id).map(Id::from)
    }

    pub fn into_params(self) -> Result<UpdateEntry> {
        Ok(UpdateEntry {
            id: self.entry_id()?.id,
            owner: self.owner,
            task: self.task,
            due_date: parse_date(&self.date)?,
        })
    }
}

/// An ID that is not a non-negative integer cannot name an entry, so it is
/// reported like any other unknown ID.
fn parse_id(raw: &str) -> Result<u64> {
    let raw = raw.trim();
    raw.parse().map_err(|_| LopError::not_found_raw(raw))
}

/// JSON clients may send the ID as a number, forms always send text.
fn text_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct TextOrNumber;

    impl Visitor<'_> for TextOrNumber {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string or a number")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<String, E> {
            Ok(v.to_owned())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(TextOrNumber)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12").unwrap(), 12);
        assert_eq!(parse_id(" 3 ").unwrap(), 3);
        assert_eq!(
            parse_id("abc").unwrap_err().to_string(),
            "Item abc does not exist"
        );
        assert!(parse_id("-1").unwrap_err().is_not_found());
        assert!(parse_id("").unwrap_err().is_not_found());
    }

    #[test]
    fn test_update_form_into_params() {
        let form = UpdateForm {
            id: "2".to_string(),
            owner: "Bob".to_string(),
            task: "Write docs v2".to_string(),
            date: "2024-02-01".to_string(),
        };
        let params = form.into_params().unwrap();
        assert_eq!(params.id, 2);
        assert_eq!(params.due_date, date(2024, 2, 1));
    }

    #[test]
    fn test_create_form_rejects_bad_date() {
        let form = CreateForm {
            owner: "Alice".to_string(),
            task: "Fix bug".to_string(),
            date: "soon".to_string(),
        };
        assert!(matches!(
            form.into_params(),
            Err(LopError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_update_form_id_checked_before_date() {
        let form = UpdateForm {
            id: "x".to_string(),
            owner: String::new(),
            task: String::new(),
            date: "soon".to_string(),
        };
        assert!(form.entry_id().unwrap_err().is_not_found());
        assert!(form.into_params().unwrap_err().is_not_found());
    }

    #[test]
    fn test_id_accepts_json_number() {
        let form: IdForm = serde_json::from_str(r#"{"id_act":3}"#).unwrap();
        assert_eq!(form.into_params().unwrap().id, 3);

        let form: IdForm = serde_json::from_str(r#"{"id":"4"}"#).unwrap();
        assert_eq!(form.into_params().unwrap().id, 4);
    }
}
