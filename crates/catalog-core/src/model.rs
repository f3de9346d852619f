use serde::{Deserialize, Serialize};
use std::fmt;

/// Page size the backend falls back to when none (or a bad one) is sent.
pub const DEFAULT_PER_PAGE: u32 = 20;

/// Largest page size the backend accepts.
pub const MAX_PER_PAGE: u32 = 100;

/// Normalize a requested page size the way the backend does: anything
/// outside `1..=MAX_PER_PAGE` becomes [`DEFAULT_PER_PAGE`].
pub fn normalize_per_page(per_page: u32) -> u32 {
    if (1..=MAX_PER_PAGE).contains(&per_page) {
        per_page
    } else {
        DEFAULT_PER_PAGE
    }
}

/// Publisher reference embedded in a game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Publisher {
    pub id: u64,
    pub name: String,
}

/// Category reference embedded in a game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: u64,
    pub name: String,
}

/// A game as served by `GET /api/games`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Game {
    pub id: u64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub publisher: Option<Publisher>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(rename = "starRating", default)]
    pub star_rating: Option<f64>,
}

impl Game {
    /// Path of the detail route for this game.
    pub fn detail_path(&self) -> String {
        format!("/game/{}", self.id)
    }

    /// Star rating with one decimal, if the game has one.
    pub fn rating_label(&self) -> Option<String> {
        self.star_rating.map(|r| format!("{r:.1}"))
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.id, self.title)
    }
}

/// Paginated envelope returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GamePage {
    pub data: Vec<Game>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl GamePage {
    /// Decode a response body.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

/// Query string for `GET /api/games`.
pub fn games_query(page: u32, per_page: u32) -> String {
    format!("page={page}&per_page={per_page}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_envelope() {
        let body = r#"{
            "data": [{
                "id": 1,
                "title": "Pipeline Panic",
                "description": "Build your DevOps pipeline before chaos ensues",
                "publisher": {"id": 1, "name": "DevGames Inc"},
                "category": {"id": 2, "name": "Strategy"},
                "starRating": 4.5
            }],
            "page": 1,
            "per_page": 20,
            "total": 1,
            "total_pages": 1
        }"#;

        let page = GamePage::from_json(body).unwrap();
        assert_eq!(page.total, 1);
        let game = &page.data[0];
        assert_eq!(game.title, "Pipeline Panic");
        assert_eq!(game.publisher.as_ref().unwrap().name, "DevGames Inc");
        assert_eq!(game.category.as_ref().unwrap().name, "Strategy");
        assert_eq!(game.rating_label().as_deref(), Some("4.5"));
    }

    #[test]
    fn null_and_missing_optionals_are_absent() {
        let body = r#"{
            "data": [
                {"id": 3, "title": "A", "description": "d", "publisher": null, "category": null, "starRating": null},
                {"id": 4, "title": "B", "description": "d"}
            ],
            "page": 1, "per_page": 20, "total": 2, "total_pages": 1
        }"#;

        let page = GamePage::from_json(body).unwrap();
        for game in &page.data {
            assert!(game.publisher.is_none());
            assert!(game.category.is_none());
            assert!(game.rating_label().is_none());
        }
    }

    #[test]
    fn per_page_normalization() {
        assert_eq!(normalize_per_page(1), 1);
        assert_eq!(normalize_per_page(50), 50);
        assert_eq!(normalize_per_page(100), 100);
        assert_eq!(normalize_per_page(0), DEFAULT_PER_PAGE);
        assert_eq!(normalize_per_page(101), DEFAULT_PER_PAGE);
    }

    #[test]
    fn detail_path_and_query() {
        let game = Game {
            id: 7,
            title: "Agile Adventures".to_string(),
            description: String::new(),
            publisher: None,
            category: None,
            star_rating: None,
        };
        assert_eq!(game.detail_path(), "/game/7");
        assert_eq!(game.to_string(), "#7 Agile Adventures");
        assert_eq!(games_query(3, 20), "page=3&per_page=20");
    }
}
