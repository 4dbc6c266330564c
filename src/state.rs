use crate::bookmarks::{BlobStore, BookmarkStore};
use crate::error::{AppError, Result};
use crate::model::{RawRecipe, RawSearchResult, Recipe, SearchResultItem};
use crate::search::SearchState;
use crate::servings;
use crate::source::RecipeSource;
use crate::upload::{NewRecipe, UploadForm};
use log::{debug, info, warn};

/// Identifies one issued load so that results of superseded loads can be dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

/// The single state container shared by every feature
#[derive(Debug)]
pub struct AppState {
    /// Absent until the first recipe has been loaded
    pub recipe: Option<Recipe>,
    pub search: SearchState,
    pub bookmarks: BookmarkStore,
    recipe_generation: u64,
    search_generation: u64,
}

impl AppState {
    pub fn new(results_per_page: usize, store: Box<dyn BlobStore>) -> Self {
        Self {
            recipe: None,
            search: SearchState::new(results_per_page),
            bookmarks: BookmarkStore::new(store),
            recipe_generation: 0,
            search_generation: 0,
        }
    }

    /// Create the state and rehydrate persisted bookmarks. A corrupt blob fails the whole step.
    pub fn init(results_per_page: usize, store: Box<dyn BlobStore>) -> Result<Self> {
        let mut state = Self::new(results_per_page, store);
        state.bookmarks.load()?;
        Ok(state)
    }

    pub fn begin_recipe_load(&mut self) -> LoadTicket {
        self.recipe_generation += 1;
        LoadTicket(self.recipe_generation)
    }

    /// Store a fetched recipe unless a newer load has been issued since `ticket`.
    /// Returns whether the recipe was stored.
    pub fn commit_recipe(&mut self, ticket: LoadTicket, raw: RawRecipe) -> bool {
        if ticket.0 < self.recipe_generation {
            warn!(
                "Dropping stale recipe {} (load {} superseded by {})",
                raw.id, ticket.0, self.recipe_generation
            );
            return false;
        }
        self.set_recipe(Recipe::from(raw));
        true
    }

    /// Replace the current recipe wholesale and recompute its bookmark flag
    pub fn set_recipe(&mut self, mut recipe: Recipe) {
        recipe.bookmarked = self.bookmarks.contains(&recipe.id);
        debug!("Current recipe is now {}", recipe.id);
        self.recipe = Some(recipe);
    }

    pub async fn load_recipe(&mut self, source: &dyn RecipeSource, id: &str) -> Result<()> {
        let ticket = self.begin_recipe_load();
        let raw = source.fetch_recipe(id).await?;
        if self.commit_recipe(ticket, raw) {
            info!("Loaded recipe {}", id);
        }
        Ok(())
    }

    pub fn begin_search(&mut self) -> LoadTicket {
        self.search_generation += 1;
        LoadTicket(self.search_generation)
    }

    /// Store search results unless a newer search has been issued since `ticket`
    pub fn commit_search(
        &mut self,
        ticket: LoadTicket,
        query: &str,
        raw: Vec<RawSearchResult>,
    ) -> bool {
        if ticket.0 < self.search_generation {
            warn!("Dropping stale results for '{}'", query);
            return false;
        }
        let result = raw.into_iter().map(SearchResultItem::from).collect();
        self.search.replace(query, result);
        true
    }

    pub async fn load_search_results(
        &mut self,
        source: &dyn RecipeSource,
        query: &str,
    ) -> Result<()> {
        let ticket = self.begin_search();
        let raw = source.search_recipes(query).await?;
        let count = raw.len();
        if self.commit_search(ticket, query, raw) {
            info!("Search '{}' returned {} recipes", query, count);
        }
        Ok(())
    }

    /// Results of `page`, or of the current page when `None`. Selects the page as a side effect.
    pub fn search_result_page(&mut self, page: Option<usize>) -> &[SearchResultItem] {
        self.search.page(page)
    }

    /// Rescale the current recipe to `new_servings`. Does nothing when no recipe is loaded.
    pub fn update_servings(&mut self, new_servings: u32) -> Result<()> {
        if new_servings == 0 {
            return Err(AppError::Validation(
                "Servings must be at least 1".to_string(),
            ));
        }
        let Some(recipe) = self.recipe.as_mut() else {
            return Ok(());
        };
        if recipe.servings == 0 {
            return Err(AppError::Validation(format!(
                "Recipe {} has no servings to scale from",
                recipe.id
            )));
        }
        servings::scale(recipe, new_servings);
        Ok(())
    }

    /// Bookmark `recipe`. Callers check [`BookmarkStore::contains`] first.
    pub fn add_bookmark(&mut self, recipe: Recipe) -> Result<()> {
        self.bookmarks.add(recipe, self.recipe.as_mut())
    }

    pub fn delete_bookmark(&mut self, id: &str) -> Result<bool> {
        self.bookmarks.remove(id, self.recipe.as_mut())
    }

    /// Bookmark the current recipe, or remove it when already bookmarked
    pub fn toggle_bookmark(&mut self) -> Result<()> {
        let Some(recipe) = self.recipe.as_ref() else {
            return Ok(());
        };

        if recipe.bookmarked {
            let id = recipe.id.clone();
            self.delete_bookmark(&id)?;
        } else if !self.bookmarks.contains(&recipe.id) {
            let recipe = recipe.clone();
            self.add_bookmark(recipe)?;
        }
        Ok(())
    }

    /// Validate and upload a new recipe, make it the current one and bookmark it
    pub async fn upload_recipe(
        &mut self,
        source: &dyn RecipeSource,
        form: &UploadForm,
    ) -> Result<()> {
        let new_recipe = NewRecipe::from_form(form)?;
        let ticket = self.begin_recipe_load();
        let raw = source.upload_recipe(&new_recipe).await?;
        let id = raw.id.clone();
        if !self.commit_recipe(ticket, raw) {
            return Ok(());
        }
        info!("Uploaded recipe {}", id);

        if !self.bookmarks.contains(&id) {
            if let Some(recipe) = self.recipe.clone() {
                self.add_bookmark(recipe)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmarks::MemoryBlobStore;
    use crate::model::Ingredient;

    fn raw(id: &str) -> RawRecipe {
        RawRecipe {
            id: id.to_string(),
            title: format!("Recipe {id}"),
            publisher: "Pub".to_string(),
            source_url: String::new(),
            image_url: String::new(),
            ingredients: vec![Ingredient {
                quantity: Some(4.0),
                unit: "g".to_string(),
                description: "sugar".to_string(),
            }],
            servings: 2,
            cooking_time: 10,
            key: None,
        }
    }

    fn state() -> AppState {
        AppState::new(10, Box::new(MemoryBlobStore::new()))
    }

    #[test]
    fn test_bookmark_toggle_flags_current_recipe() {
        let mut state = state();
        let ticket = state.begin_recipe_load();
        state.commit_recipe(ticket, raw("a"));

        state.toggle_bookmark().unwrap();
        assert!(state.recipe.as_ref().unwrap().bookmarked);
        assert_eq!(state.bookmarks.len(), 1);

        state.toggle_bookmark().unwrap();
        assert!(!state.recipe.as_ref().unwrap().bookmarked);
        assert!(state.bookmarks.is_empty());
    }

    #[test]
    fn test_reloaded_recipe_recomputes_bookmark() {
        let mut state = state();
        let ticket = state.begin_recipe_load();
        state.commit_recipe(ticket, raw("a"));
        state.toggle_bookmark().unwrap();

        let ticket = state.begin_recipe_load();
        state.commit_recipe(ticket, raw("b"));
        assert!(!state.recipe.as_ref().unwrap().bookmarked);

        let ticket = state.begin_recipe_load();
        state.commit_recipe(ticket, raw("a"));
        assert!(state.recipe.as_ref().unwrap().bookmarked);
    }

    #[test]
    fn test_stale_load_is_dropped() {
        let mut state = state();
        let slow = state.begin_recipe_load();
        let fast = state.begin_recipe_load();

        assert!(state.commit_recipe(fast, raw("fast")));
        assert!(!state.commit_recipe(slow, raw("slow")));
        assert_eq!(state.recipe.as_ref().unwrap().id, "fast");
    }

    #[test]
    fn test_stale_search_is_dropped() {
        let mut state = state();
        let first = state.begin_search();
        let second = state.begin_search();

        assert!(state.commit_search(second, "pasta", Vec::new()));
        assert!(!state.commit_search(first, "pizza", Vec::new()));
        assert_eq!(state.search.query, "pasta");
    }

    #[test]
    fn test_update_servings() {
        let mut state = state();
        let ticket = state.begin_recipe_load();
        state.commit_recipe(ticket, raw("a"));

        state.update_servings(4).unwrap();
        let recipe = state.recipe.as_ref().unwrap();
        assert_eq!(recipe.servings, 4);
        assert_eq!(recipe.ingredients[0].quantity, Some(8.0));

        assert!(matches!(
            state.update_servings(0),
            Err(AppError::Validation(_))
        ));
        assert_eq!(state.recipe.as_ref().unwrap().servings, 4);
    }

    #[test]
    fn test_update_servings_without_recipe_is_noop() {
        let mut state = state();
        state.update_servings(3).unwrap();
        assert!(state.recipe.is_none());
    }

    #[test]
    fn test_init_rehydrates_bookmarks() {
        let blobs = MemoryBlobStore::new();
        {
            let mut state = AppState::new(10, Box::new(blobs.clone()));
            let ticket = state.begin_recipe_load();
            state.commit_recipe(ticket, raw("a"));
            state.toggle_bookmark().unwrap();
        }

        let mut state = AppState::init(10, Box::new(blobs)).unwrap();
        assert!(state.bookmarks.contains("a"));
        let ticket = state.begin_recipe_load();
        state.commit_recipe(ticket, raw("a"));
        assert!(state.recipe.as_ref().unwrap().bookmarked);
    }
}
