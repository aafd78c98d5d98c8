use serde::Deserialize;

/// How many ingredient tags a dish card shows before collapsing the rest
/// into a "+N loại khác" counter.
pub const CARD_INGREDIENT_TAGS: usize = 3;

/// How many characters of the description a card keeps before cutting it
/// with an ellipsis (roughly two lines of text).
pub const CARD_DESCRIPTION_CHARS: usize = 90;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Ingredient {
    #[serde(default)]
    pub item: String,
    #[serde(default)]
    pub amount: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Dish {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub calories: Option<String>,
}

/// One generated menu. Every field is defaulted so a payload that is valid
/// JSON but misses fields still deserializes; missing parts render as empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Menu {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub dishes: Vec<Dish>,
}

impl Dish {
    /// The ingredients shown as tags on the card.
    pub fn tag_ingredients(&self) -> &[Ingredient] {
        let cut = self.ingredients.len().min(CARD_INGREDIENT_TAGS);
        &self.ingredients[..cut]
    }

    /// How many ingredients the card hides behind the "+N" counter.
    pub fn hidden_ingredient_count(&self) -> usize {
        self.ingredients.len().saturating_sub(CARD_INGREDIENT_TAGS)
    }

    /// Description cut to the card limit, counted in chars so Vietnamese
    /// text is never split inside a code point.
    pub fn short_description(&self) -> String {
        let mut chars = self.description.chars();
        let head: String = chars.by_ref().take(CARD_DESCRIPTION_CHARS).collect();
        if chars.next().is_some() {
            format!("{}…", head)
        } else {
            head
        }
    }
}
