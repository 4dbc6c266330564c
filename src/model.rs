use serde::{Deserialize, Serialize};

/// A single ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Absent when the source gives no amount ("salt to taste")
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: String,
    pub description: String,
}

/// Full recipe record as held in the application state and in bookmarks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub source: String,
    pub image: String,
    pub ingredients: Vec<Ingredient>,
    pub servings: u32,
    /// Cooking time in minutes
    pub time: u32,
    /// Upload key; only present on user-generated recipes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default)]
    pub bookmarked: bool,
}

impl Recipe {
    pub fn is_user_generated(&self) -> bool {
        self.key.is_some()
    }
}

/// Reduced projection of a recipe used for list display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub image: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// Recipe as delivered by the API
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecipe {
    pub id: String,
    pub title: String,
    pub publisher: String,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub servings: u32,
    #[serde(default)]
    pub cooking_time: u32,
    #[serde(default)]
    pub key: Option<String>,
}

/// `{ "status": "...", "data": { ... } }` envelope used by every API response
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub status: String,
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct RecipeData {
    pub recipe: RawRecipe,
}

#[derive(Debug, Deserialize)]
pub struct SearchData {
    // Search results carry no ingredients, servings or cooking time
    pub recipes: Vec<RawSearchResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSearchResult {
    pub id: String,
    pub title: String,
    pub publisher: String,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub key: Option<String>,
}

impl From<RawRecipe> for Recipe {
    fn from(raw: RawRecipe) -> Self {
        Recipe {
            id: raw.id,
            title: raw.title,
            publisher: raw.publisher,
            source: raw.source_url,
            image: raw.image_url,
            ingredients: raw.ingredients,
            servings: raw.servings,
            time: raw.cooking_time,
            key: raw.key,
            bookmarked: false,
        }
    }
}

impl From<RawSearchResult> for SearchResultItem {
    fn from(raw: RawSearchResult) -> Self {
        SearchResultItem {
            id: raw.id,
            title: raw.title,
            publisher: raw.publisher,
            image: raw.image_url,
            source: raw.source_url,
            key: raw.key,
        }
    }
}

impl From<&Recipe> for SearchResultItem {
    fn from(recipe: &Recipe) -> Self {
        SearchResultItem {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            publisher: recipe.publisher.clone(),
            image: recipe.image.clone(),
            source: recipe.source.clone(),
            key: recipe.key.clone(),
        }
    }
}
