use crate::error::DialogueError;
use std::fmt;
use std::str::FromStr;

/// Every intent the router knows how to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    ProvideIngredient,
    ListIngredients,
    RemoveLastIngredient,
    FindRecipe,
    BeginRecipeInstructions,
    ContinueRecipeInstructions,
    RepeatLastResponse,
    StopSession,
}

impl Intent {
    pub const ALL: [Intent; 8] = [
        Intent::ProvideIngredient,
        Intent::ListIngredients,
        Intent::RemoveLastIngredient,
        Intent::FindRecipe,
        Intent::BeginRecipeInstructions,
        Intent::ContinueRecipeInstructions,
        Intent::RepeatLastResponse,
        Intent::StopSession,
    ];

    /// The canonical identifier sent by the language model.
    pub fn name(self) -> &'static str {
        match self {
            Intent::ProvideIngredient => "ProvideIngredient",
            Intent::ListIngredients => "ListIngredients",
            Intent::RemoveLastIngredient => "RemoveLastIngredient",
            Intent::FindRecipe => "FindRecipe",
            Intent::BeginRecipeInstructions => "BeginRecipeInstructions",
            Intent::ContinueRecipeInstructions => "ContinueRecipeInstructions",
            Intent::RepeatLastResponse => "RepeatLastResponse",
            Intent::StopSession => "StopSession",
        }
    }

    /// Identifier used by the first interaction model, still accepted verbatim.
    fn legacy_name(self) -> Option<&'static str> {
        match self {
            Intent::ProvideIngredient => Some("MyIngredientsAreIntent"),
            Intent::ListIngredients => Some("WhatAreMyIngredientsIntent"),
            Intent::FindRecipe => Some("FindRecipeIntent"),
            Intent::BeginRecipeInstructions => Some("StartRecipeIntent"),
            Intent::ContinueRecipeInstructions => Some("ContinueRecipeIntent"),
            Intent::RepeatLastResponse => Some("AMAZON.RepeatIntent"),
            Intent::StopSession => Some("AMAZON.StopIntent"),
            Intent::RemoveLastIngredient => None,
        }
    }
}

impl FromStr for Intent {
    type Err = DialogueError;

    /// Exact, case-sensitive match. Anything else is an error; there is no guessing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intent::ALL
            .into_iter()
            .find(|intent| intent.name() == s || intent.legacy_name() == Some(s))
            .ok_or_else(|| DialogueError::UnrecognizedIntent(s.to_string()))
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
