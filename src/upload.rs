use crate::error::{AppError, Result};
use crate::model::Ingredient;
use serde::Serialize;

const INGREDIENT_FORMAT_ERROR: &str = "Wrong ingredient format! Please use the correct format :)";

/// Raw fields of the "add recipe" form, exactly as entered
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    pub title: String,
    pub source_url: String,
    pub image: String,
    pub publisher: String,
    pub cooking_time: String,
    pub servings: String,
    /// `(field name, value)` pairs such as `("ingredient-1", "0.5,kg,Rice")`
    pub ingredients: Vec<(String, String)>,
}

/// Recipe body sent to the API when uploading
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRecipe {
    pub title: String,
    pub source_url: String,
    pub image_url: String,
    pub publisher: String,
    pub cooking_time: u32,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
}

impl NewRecipe {
    /// Validate the form and build the upload body. Fails before anything is sent.
    pub fn from_form(form: &UploadForm) -> Result<Self> {
        let ingredients = form
            .ingredients
            .iter()
            .filter(|(name, value)| name.starts_with("ingredient") && !value.is_empty())
            .map(|(_, value)| parse_ingredient(value))
            .collect::<Result<Vec<_>>>()?;

        Ok(NewRecipe {
            title: form.title.trim().to_string(),
            source_url: form.source_url.trim().to_string(),
            image_url: form.image.trim().to_string(),
            publisher: form.publisher.trim().to_string(),
            cooking_time: parse_positive(&form.cooking_time, "Cooking time")?,
            servings: parse_positive(&form.servings, "Servings")?,
            ingredients,
        })
    }
}

/// Parse a `quantity,unit,description` line
fn parse_ingredient(line: &str) -> Result<Ingredient> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    let [quantity, unit, description] = parts.as_slice() else {
        return Err(AppError::Validation(INGREDIENT_FORMAT_ERROR.to_string()));
    };

    let quantity = if quantity.is_empty() {
        None
    } else {
        let value: f64 = quantity
            .parse()
            .map_err(|_| AppError::Validation(format!("Invalid quantity '{quantity}'")))?;
        Some(value)
    };

    Ok(Ingredient {
        quantity,
        unit: unit.to_string(),
        description: description.to_string(),
    })
}

fn parse_positive(value: &str, field: &str) -> Result<u32> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(AppError::Validation(format!(
            "{field} must be a positive whole number"
        ))),
    }
}
