use crate::error::Result;
use crate::render::{
    AddRecipeView, BookmarksView, PageInfo, PaginationView, RecipeView, ResultsView, Surface,
};
use crate::source::RecipeSource;
use crate::state::AppState;
use crate::upload::UploadForm;
use log::error;

/// Drives state changes and the surfaces that display them
pub struct Controller<S: RecipeSource> {
    pub state: AppState,
    source: S,
    pub recipe_view: Surface<RecipeView>,
    pub results_view: Surface<ResultsView>,
    pub pagination_view: Surface<PaginationView>,
    pub bookmarks_view: Surface<BookmarksView>,
    pub add_recipe_view: Surface<AddRecipeView>,
}

impl<S: RecipeSource> Controller<S> {
    pub fn new(state: AppState, source: S) -> Self {
        Self {
            state,
            source,
            recipe_view: Surface::new(RecipeView, ".recipe"),
            results_view: Surface::new(ResultsView::new(), ".results"),
            pagination_view: Surface::new(PaginationView, ".pagination"),
            bookmarks_view: Surface::new(BookmarksView::new(), ".bookmarks__list"),
            add_recipe_view: Surface::new(AddRecipeView::default(), ".upload"),
        }
    }

    fn set_active(&mut self, id: &str) {
        self.results_view.view_mut().set_active(Some(id.to_string()));
        self.bookmarks_view
            .view_mut()
            .set_active(Some(id.to_string()));
    }

    /// Load and show recipe `id`, highlighting it in the result and bookmark lists
    pub async fn control_recipes(&mut self, id: &str) -> Result<()> {
        self.recipe_view.render_spinner();

        self.set_active(id);
        let page = self.state.search_result_page(None).to_vec();
        self.results_view.update(page);
        self.bookmarks_view
            .update(self.state.bookmarks.as_slice().to_vec());

        if let Err(e) = self.state.load_recipe(&self.source, id).await {
            error!("Failed to load recipe {}: {}", id, e);
            self.recipe_view.render_error(None);
            return Err(e);
        }
        self.recipe_view.render(self.state.recipe.clone(), true);
        Ok(())
    }

    /// Search and show the first page of results with its pagination controls
    pub async fn control_search_results(&mut self, query: &str) -> Result<()> {
        self.results_view.render_spinner();

        if let Err(e) = self.state.load_search_results(&self.source, query).await {
            error!("Search for '{}' failed: {}", query, e);
            self.results_view.render_error(Some(&e.to_string()));
            return Err(e);
        }
        let page = self.state.search_result_page(Some(1)).to_vec();
        self.results_view.render(Some(page), true);
        self.pagination_view
            .render(Some(PageInfo::from(&self.state.search)), true);
        Ok(())
    }

    pub fn control_pagination(&mut self, go_to_page: usize) {
        let page = self.state.search_result_page(Some(go_to_page)).to_vec();
        self.results_view.render(Some(page), true);
        self.pagination_view
            .render(Some(PageInfo::from(&self.state.search)), true);
    }

    /// Rescale the current recipe and patch the recipe view in place
    pub fn control_servings(&mut self, new_servings: u32) -> Result<()> {
        self.state.update_servings(new_servings)?;
        if let Some(recipe) = self.state.recipe.clone() {
            self.recipe_view.update(recipe);
        }
        Ok(())
    }

    /// Toggle the bookmark of the current recipe
    pub fn control_add_bookmark(&mut self) -> Result<()> {
        self.state.toggle_bookmark()?;
        if let Some(recipe) = self.state.recipe.clone() {
            self.recipe_view.update(recipe);
        }
        self.control_bookmarks();
        Ok(())
    }

    /// Bookmark the current recipe unless it already is; never removes a bookmark
    pub fn control_keep_bookmark(&mut self) -> Result<()> {
        match &self.state.recipe {
            Some(recipe) if recipe.bookmarked => {
                self.control_bookmarks();
                Ok(())
            }
            _ => self.control_add_bookmark(),
        }
    }

    pub fn control_bookmarks(&mut self) {
        self.bookmarks_view
            .render(Some(self.state.bookmarks.as_slice().to_vec()), true);
    }

    /// Upload a new recipe, show it and list it among the bookmarks
    pub async fn control_add_recipe(&mut self, form: &UploadForm) -> Result<()> {
        self.add_recipe_view.render_spinner();

        if let Err(e) = self.state.upload_recipe(&self.source, form).await {
            error!("Upload failed: {}", e);
            self.add_recipe_view.render_error(Some(&e.to_string()));
            return Err(e);
        }
        if let Some(id) = self.state.recipe.as_ref().map(|r| r.id.clone()) {
            self.set_active(&id);
        }
        self.recipe_view.render(self.state.recipe.clone(), true);
        self.add_recipe_view.render_message(None);
        self.control_bookmarks();
        Ok(())
    }
}
