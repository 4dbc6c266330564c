use crate::model::Recipe;

/// Rescale every ingredient quantity of `recipe` from its current servings to `new_servings`.
///
/// Quantities are multiplied by `new_servings / recipe.servings` without rounding; ingredients
/// without a quantity stay without one. The current servings must be non-zero: callers reject
/// zero servings before they get here.
pub fn scale(recipe: &mut Recipe, new_servings: u32) {
    let old = f64::from(recipe.servings);
    let new = f64::from(new_servings);

    for ingredient in &mut recipe.ingredients {
        if let Some(quantity) = ingredient.quantity.as_mut() {
            *quantity = *quantity * new / old;
        }
    }
    recipe.servings = new_servings;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Ingredient;

    fn recipe_with(servings: u32, quantities: &[Option<f64>]) -> Recipe {
        Recipe {
            id: "r1".to_string(),
            title: "Soup".to_string(),
            publisher: "Kitchen".to_string(),
            source: String::new(),
            image: String::new(),
            ingredients: quantities
                .iter()
                .map(|q| Ingredient {
                    quantity: *q,
                    unit: "g".to_string(),
                    description: "thing".to_string(),
                })
                .collect(),
            servings,
            time: 10,
            key: None,
            bookmarked: false,
        }
    }

    #[test]
    fn test_doubling_servings() {
        let mut recipe = recipe_with(2, &[Some(4.0)]);
        scale(&mut recipe, 4);
        assert_eq!(recipe.ingredients[0].quantity, Some(8.0));
        assert_eq!(recipe.servings, 4);
    }

    #[test]
    fn test_missing_quantity_stays_missing() {
        let mut recipe = recipe_with(4, &[None, Some(1.0)]);
        scale(&mut recipe, 6);
        assert_eq!(recipe.ingredients[0].quantity, None);
        assert_eq!(recipe.ingredients[1].quantity, Some(1.5));
    }

    #[test]
    fn test_no_rounding() {
        let mut recipe = recipe_with(3, &[Some(1.0)]);
        scale(&mut recipe, 1);
        let q = recipe.ingredients[0].quantity.unwrap();
        assert!((q - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_scale_and_back_restores_quantities() {
        let original = [Some(2.5), Some(0.125), None, Some(7.0)];
        for (old, new) in [(1, 7), (4, 3), (12, 5), (5, 100)] {
            let mut recipe = recipe_with(old, &original);
            scale(&mut recipe, new);
            scale(&mut recipe, old);
            assert_eq!(recipe.servings, old);
            for (ingredient, expected) in recipe.ingredients.iter().zip(original) {
                match (ingredient.quantity, expected) {
                    (Some(a), Some(b)) => assert!((a - b).abs() < 1e-9, "{a} != {b}"),
                    (a, b) => assert_eq!(a, b),
                }
            }
        }
    }
}
