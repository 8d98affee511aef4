use serde::{Deserialize, Serialize};

/// A link record as the rest of the client sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub id: String,
    pub original_url: String,
    pub short_url: String,
    /// Empty when the server omitted the code.
    pub short_code: String,
}

/// One element of the `GET /api/urls` array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WireLink {
    pub id: WireId,
    pub original_url: String,
    pub short_url: String,
    #[serde(default)]
    pub short_code: Option<String>,
}

/// Servers report ids either as numbers or as strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Number(i64),
    Text(String),
}

impl From<WireLink> for ShortLink {
    fn from(wire: WireLink) -> Self {
        Self {
            id: match wire.id {
                WireId::Number(n) => n.to_string(),
                WireId::Text(s) => s,
            },
            original_url: wire.original_url,
            short_url: wire.short_url,
            short_code: wire.short_code.unwrap_or_default(),
        }
    }
}

/// Body of `POST /shorten`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateRequest<'a> {
    pub original_url: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_text_ids_both_decode() {
        let raw = r#"[
            {"id": 1, "original_url": "https://a.example.com", "short_url": "http://s/abc", "short_code": "abc"},
            {"id": "x-2", "original_url": "https://b.example.com", "short_url": "http://s/def", "short_code": null},
            {"id": 3, "original_url": "https://c.example.com", "short_url": "http://s/ghi"}
        ]"#;
        let links: Vec<ShortLink> = serde_json::from_str::<Vec<WireLink>>(raw)
            .unwrap()
            .into_iter()
            .map(ShortLink::from)
            .collect();

        assert_eq!(links[0].id, "1");
        assert_eq!(links[0].short_code, "abc");
        assert_eq!(links[1].id, "x-2");
        assert_eq!(links[1].short_code, "");
        assert_eq!(links[2].short_code, "");
    }

    #[test]
    fn create_body_uses_snake_case_key() {
        let body = serde_json::to_string(&CreateRequest {
            original_url: "https://example.com",
        })
        .unwrap();
        assert_eq!(body, r#"{"original_url":"https://example.com"}"#);
    }
}
