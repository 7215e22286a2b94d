//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the sous crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use sous::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let catalog = RecipeCatalog::from_file("path/to/recipes.json")?;
//! let router = Router::builder(catalog).build();
//!
//! let request = Request::intent("ListIngredients");
//! if let Some(response) = router.handle(request)? {
//!     println!("{}", response.spoken_text);
//! }
//! # Ok(())
//! # }
//! ```

// Dialogue
pub use crate::config::Config;
pub use crate::cursor::{CursorPosition, Utterance};
pub use crate::dialogue::{Intent, Request, RequestKind, Response, Router};

// Domain model
pub use crate::matcher::{IngredientPolicy, MatchPolicy, RecipeMatcher};
pub use crate::recipe::{
    CatalogArtifact, IntoCatalog, Recipe, RecipeCatalog, RecipeId, RequiredIngredient,
};
pub use crate::session::{SessionAttributes, SessionState};

// Formatting
pub use crate::speech::SpeechFormatter;

// Error types
pub use crate::error::{CatalogError, ConfigError, DialogueError, TransportError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
