//! # Sous - Dialogue Engine for a Voice Recipe Assistant
//!
//! **Sous** drives the conversation of a voice assistant that helps users cook with what
//! they already have. Speech recognition and intent classification happen upstream;
//! Sous receives an already-classified intent with its slot values, updates a small
//! amount of per-session state and answers with text to be spoken.
//!
//! ## Core Workflow
//!
//! 1.  **Load the Catalog**: Parse the recipe catalog once at startup (`RecipeCatalog::from_file`,
//!     `RecipeCatalog::builtin`, or a pre-built `CatalogArtifact`). It is read-only from then on.
//! 2.  **Build a Router**: Use `Router::builder` to pick a matching policy and other settings.
//! 3.  **Handle Turns**: Feed each `Request` (with the session state the store handed back) to
//!     `Router::handle` and persist the `session_state` of the returned `Response`.
//!
//! Over a conversation the user names their ingredients (the *ledger*), asks for a recipe
//! (the *matcher* picks the first catalog recipe whose ingredients are all covered) and then
//! hears the recipe one ingredient or step per turn (the *cursor*).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sous::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let catalog = RecipeCatalog::builtin()?;
//!     let router = Router::builder(catalog)
//!         .with_match_policy(MatchPolicy::Exact)
//!         .build();
//!
//!     // The user says "I have water".
//!     let response = router
//!         .handle(Request::intent("ProvideIngredient").with_slot("Ingredient", "water"))?
//!         .expect("intent requests always produce a response");
//!     println!("{}", response.spoken_text);
//!
//!     // "That's it": find a recipe, carrying the session state forward.
//!     let response = router
//!         .handle(Request::intent("FindRecipe").with_state(response.session_state))?
//!         .expect("intent requests always produce a response");
//!     println!("{}", response.spoken_text);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod cursor;
pub mod dialogue;
pub mod error;
pub mod ledger;
pub mod matcher;
pub mod prelude;
pub mod recipe;
pub mod session;
pub mod speech;
pub mod transport;
