//! Fixed wording of everything the assistant says.

pub const WELCOME_TITLE: &str = "Hello";
pub const GOODBYE_TITLE: &str = "Goodbye";
pub const ADD_INGREDIENT_TITLE: &str = "Adding ingredient";
pub const REMOVE_INGREDIENT_TITLE: &str = "Removing ingredient";
pub const LIST_INGREDIENTS_TITLE: &str = "Your ingredients";
pub const FIND_RECIPE_TITLE: &str = "Finding recipe";
pub const EXPLAIN_RECIPE_TITLE: &str = "Explaining recipe";
pub const REPEAT_TITLE: &str = "Repeating response";

pub fn welcome(skill_name: &str) -> String {
    format!(
        "Hello. And welcome to {}. Tell me the first ingredient you have, by saying \
         something like, I have milk. List your ingredients by asking, what ingredients \
         do I have? Find a recipe by saying, that's it. Have me repeat my last response \
         by saying, repeat that",
        skill_name
    )
}

pub const WELCOME_REPROMPT: &str =
    "Tell me the first ingredient you have by saying something like, I have milk";

pub fn farewell(skill_name: &str) -> String {
    format!("Thanks for using {}", skill_name)
}

pub fn ingredient_added(ingredient: &str) -> String {
    format!("You have {}", ingredient)
}

pub const INGREDIENT_ADDED_REPROMPT: &str =
    "List your ingredients by asking, what ingredients do I have?";

pub const MISSING_INGREDIENT: &str =
    "I don't know the first ingredient you have. Try telling me again?";

pub const MISSING_INGREDIENT_REPROMPT: &str =
    "I don't know the first ingredient you have. Tell me by saying something like, I have milk";

pub const NO_INGREDIENTS: &str =
    "I don't know the first ingredient you have. Tell me by saying something like, I have milk";

pub fn ingredient_list(list: &str) -> String {
    format!("You have {}", list)
}

pub fn ingredient_removed(ingredient: &str) -> String {
    format!("Okay, I've removed {}", ingredient)
}

pub fn recipe_found(recipe_name: &str) -> String {
    format!(
        "Oh boy, have I got the recipe for you. Shall we try, {}? To start, say, let's go",
        recipe_name
    )
}

pub const NO_RECIPE_MATCHED: &str = "I couldn't find anything. Try adding some more ingredients?";

pub const NO_RECIPE_SELECTED: &str =
    "You don't have a recipe selected. Find a recipe by saying, that's it";

pub const INGREDIENTS_INTRO: &str =
    "I'll now list the ingredients and quantities you'll need. First up is, ";
pub const NEXT_INGREDIENT: &str = "Next you'll need, ";
pub const NEXT_INGREDIENT_HINT: &str = ". Hear the next ingredient by saying, continue";
pub const BEGIN_STEPS_HINT: &str = ". Get started with the recipe by saying, continue";

pub const STEPS_INTRO: &str = "I'll now list the steps you'll need to take. To start off, ";
pub const NEXT_STEP: &str = "Next, ";
pub const NEXT_STEP_HINT: &str = ". Hear the next step by saying, continue";
pub const RECIPE_COMPLETE: &str = ". After that, you're all done!";
pub const RECIPE_ALREADY_COMPLETE: &str = "You have already finished this recipe. Enjoy!";

pub const NOTHING_TO_REPEAT: &str = "I haven't said anything yet";
