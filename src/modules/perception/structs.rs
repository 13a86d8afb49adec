use serde::Deserialize;

/// One article as returned by NewsAPI. Only the fields the bot relays are
/// kept; anything missing or null collapses to an empty value downstream.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: String,
}

impl Article {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Deserialize)]
pub struct NewsApiResponse {
    #[serde(default)]
    pub articles: Vec<Article>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerates_missing_and_null_fields() {
        let article: Article = serde_json::from_str(
            r#"{ "title": null, "url": "https://example.com/a" }"#,
        )
        .unwrap();
        assert_eq!(article.title(), "");
        assert_eq!(article.description(), "");
        assert_eq!(article.url, "https://example.com/a");
    }

    #[test]
    fn response_without_articles_is_empty() {
        let resp: NewsApiResponse = serde_json::from_str(r#"{ "status": "ok" }"#).unwrap();
        assert!(resp.articles.is_empty());
    }
}
