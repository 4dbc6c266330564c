use super::{View, ICONS};
use crate::model::{Ingredient, Recipe};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

/// Detail view of the current recipe
#[derive(Debug, Default)]
pub struct RecipeView;

/// Render a quantity as a whole number or mixed fraction ("1 1/2"), falling back to two
/// decimals when no denominator up to 16 fits.
pub fn format_quantity(quantity: f64) -> String {
    const EPSILON: f64 = 1e-6;

    if (quantity - quantity.round()).abs() < EPSILON {
        return format!("{}", quantity.round());
    }

    let whole = quantity.trunc();
    let fraction = quantity - whole;
    for denominator in 2..=16u32 {
        let numerator = (fraction * f64::from(denominator)).round();
        if (fraction - numerator / f64::from(denominator)).abs() < EPSILON {
            return if whole == 0.0 {
                format!("{numerator}/{denominator}")
            } else {
                format!("{whole} {numerator}/{denominator}")
            };
        }
    }

    let decimal = format!("{quantity:.2}");
    decimal.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn ingredient_markup(ingredient: &Ingredient) -> String {
    let quantity = ingredient
        .quantity
        .map(format_quantity)
        .unwrap_or_default();
    format!(
        r#"
      <li class="recipe__ingredient">
        <svg class="recipe__icon"><use href="{ICONS}#icon-check"></use></svg>
        <div class="recipe__quantity">{quantity}</div>
        <div class="recipe__description"><span class="recipe__unit">{unit}</span> {description}</div>
      </li>"#,
        unit = text(&ingredient.unit),
        description = text(&ingredient.description),
    )
}

impl View for RecipeView {
    type Data = Recipe;

    fn generate_markup(&mut self, recipe: &Recipe) -> String {
        let ingredients: String = recipe.ingredients.iter().map(ingredient_markup).collect();
        let user_class = if recipe.is_user_generated() {
            "recipe__user-generated"
        } else {
            "recipe__user-generated hidden"
        };
        let bookmark_icon = if recipe.bookmarked {
            "icon-bookmark-fill"
        } else {
            "icon-bookmark"
        };

        format!(
            r#"<figure class="recipe__fig">
  <img src="{image}" alt="{alt}" class="recipe__img" />
  <h1 class="recipe__title"><span>{title}</span></h1>
</figure>
<div class="recipe__details">
  <div class="recipe__info">
    <svg class="recipe__info-icon"><use href="{ICONS}#icon-clock"></use></svg>
    <span class="recipe__info-data recipe__info-data--minutes">{time}</span>
    <span class="recipe__info-text">minutes</span>
  </div>
  <div class="recipe__info">
    <svg class="recipe__info-icon"><use href="{ICONS}#icon-users"></use></svg>
    <span class="recipe__info-data recipe__info-data--people">{servings}</span>
    <span class="recipe__info-text">servings</span>
    <div class="recipe__info-buttons">
      <button class="btn--tiny btn--update-servings" data-update-to="{fewer}"><svg><use href="{ICONS}#icon-minus-circle"></use></svg></button>
      <button class="btn--tiny btn--update-servings" data-update-to="{more}"><svg><use href="{ICONS}#icon-plus-circle"></use></svg></button>
    </div>
  </div>
  <div class="{user_class}"><svg><use href="{ICONS}#icon-user"></use></svg></div>
  <button class="btn--round btn--bookmark"><svg class=""><use href="{ICONS}#{bookmark_icon}"></use></svg></button>
</div>
<div class="recipe__ingredients">
  <h2 class="heading--2">Recipe ingredients</h2>
  <ul class="recipe__ingredient-list">{ingredients}
  </ul>
</div>
<div class="recipe__directions">
  <h2 class="heading--2">How to cook it</h2>
  <p class="recipe__directions-text">This recipe was carefully designed and tested by <span class="recipe__publisher">{publisher}</span>. Please check out directions at their website.</p>
  <a class="btn--small recipe__btn" href="{source}" target="_blank"><span>Directions</span></a>
</div>"#,
            image = attr(&recipe.image),
            alt = attr(&recipe.title),
            title = text(&recipe.title),
            time = recipe.time,
            servings = recipe.servings,
            fewer = recipe.servings.saturating_sub(1),
            more = recipe.servings + 1,
            publisher = text(&recipe.publisher),
            source = attr(&recipe.source),
        )
    }

    fn error_message(&self) -> &str {
        "We could not find that recipe. Please try another one!"
    }

    fn message(&self) -> &str {
        "Start by searching for a recipe or an ingredient. Have fun!"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Surface;
    use crate::servings;

    fn recipe() -> Recipe {
        Recipe {
            id: "r".to_string(),
            title: "Pancakes".to_string(),
            publisher: "Grandma".to_string(),
            source: "http://example.com/pancakes".to_string(),
            image: "http://example.com/p.jpg".to_string(),
            ingredients: vec![
                Ingredient {
                    quantity: Some(1.5),
                    unit: "cups".to_string(),
                    description: "flour".to_string(),
                },
                Ingredient {
                    quantity: None,
                    unit: String::new(),
                    description: "salt".to_string(),
                },
            ],
            servings: 2,
            time: 20,
            key: None,
            bookmarked: false,
        }
    }

    fn quantities(surface: &Surface<RecipeView>) -> Vec<String> {
        surface
            .mount()
            .find_by_class("recipe__quantity")
            .iter()
            .map(|e| e.text_content())
            .collect()
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(8.0), "8");
        assert_eq!(format_quantity(0.5), "1/2");
        assert_eq!(format_quantity(1.5), "1 1/2");
        assert_eq!(format_quantity(2.0 / 3.0), "2/3");
        assert_eq!(format_quantity(0.125), "1/8");
        assert_eq!(format_quantity(0.3), "3/10");
        assert_eq!(format_quantity(2.0 / 17.0), "0.12");
        assert_eq!(format_quantity(1.0 / 17.0), "0.06");
    }

    #[test]
    fn test_render_recipe() {
        let mut surface = Surface::new(RecipeView, ".recipe");
        surface.render(Some(recipe()), true);
        let mount = surface.mount();

        assert_eq!(
            mount.first_by_class("recipe__title").unwrap().text_content(),
            "Pancakes"
        );
        assert_eq!(quantities(&surface), ["1 1/2", ""]);
        let targets: Vec<_> = mount
            .find_by_class("btn--update-servings")
            .iter()
            .map(|b| b.attr("data-update-to").unwrap().to_string())
            .collect();
        assert_eq!(targets, ["1", "3"]);
    }

    #[test]
    fn test_update_after_scaling_keeps_structure() {
        let mut surface = Surface::new(RecipeView, ".recipe");
        let mut recipe = recipe();
        surface.render(Some(recipe.clone()), true);
        let before = surface.mount().elements().len();

        servings::scale(&mut recipe, 4);
        surface.update(recipe);

        assert_eq!(surface.mount().elements().len(), before);
        assert_eq!(quantities(&surface), ["3", ""]);
        assert_eq!(
            surface
                .mount()
                .first_by_class("recipe__info-data--people")
                .unwrap()
                .text_content(),
            "4"
        );
        let targets: Vec<_> = surface
            .mount()
            .find_by_class("btn--update-servings")
            .iter()
            .map(|b| b.attr("data-update-to").unwrap().to_string())
            .collect();
        assert_eq!(targets, ["3", "5"]);
    }

    #[test]
    fn test_bookmark_icon_follows_flag() {
        let mut surface = Surface::new(RecipeView, ".recipe");
        let mut recipe = recipe();
        surface.render(Some(recipe.clone()), true);

        recipe.bookmarked = true;
        surface.update(recipe);

        let html = surface.mount().to_html();
        assert!(html.contains("#icon-bookmark-fill"));
    }

    #[test]
    fn test_missing_recipe_message() {
        let mut surface = Surface::new(RecipeView, ".recipe");
        surface.render(None, true);
        assert_eq!(
            surface.mount().text_content(),
            "We could not find that recipe. Please try another one!"
        );
    }
}
