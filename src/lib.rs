pub mod bookmarks;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod render;
pub mod search;
pub mod servings;
pub mod source;
pub mod state;
pub mod upload;

pub use bookmarks::{BlobStore, BookmarkStore, FileBlobStore, MemoryBlobStore, BOOKMARKS_KEY};
pub use crate::config::AppConfig;
pub use controller::Controller;
pub use error::{AppError, Result};
pub use model::{Ingredient, Recipe, SearchResultItem};
pub use search::SearchState;
pub use source::{ForkifyClient, RecipeSource};
pub use state::{AppState, LoadTicket};
pub use upload::{NewRecipe, UploadForm};
