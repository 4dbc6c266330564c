use super::View;
use crate::upload::UploadForm;
use html_escape::encode_double_quoted_attribute as attr;

/// Upload form shown in a modal window
#[derive(Debug, Default)]
pub struct AddRecipeView {
    window_open: bool,
}

impl AddRecipeView {
    pub fn toggle_window(&mut self) {
        self.window_open = !self.window_open;
    }

    pub fn is_window_open(&self) -> bool {
        self.window_open
    }
}

fn input(label: &str, name: &str, value: &str, kind: &str) -> String {
    format!(
        r#"<label>{label}</label><input value="{}" required name="{name}" type="{kind}" />"#,
        attr(value)
    )
}

impl View for AddRecipeView {
    type Data = UploadForm;

    fn generate_markup(&mut self, form: &UploadForm) -> String {
        let mut data = String::new();
        for (label, name, value, kind) in [
            ("Title", "title", &form.title, "text"),
            ("URL", "sourceUrl", &form.source_url, "text"),
            ("Image URL", "image", &form.image, "text"),
            ("Publisher", "publisher", &form.publisher, "text"),
            ("Prep time", "cookingTime", &form.cooking_time, "number"),
            ("Servings", "servings", &form.servings, "number"),
        ] {
            data.push_str(&input(label, name, value, kind));
        }

        let mut ingredients = String::new();
        for (i, (name, value)) in form.ingredients.iter().enumerate() {
            ingredients.push_str(&format!(
                r#"<label>Ingredient {}</label><input value="{}" type="text" name="{}" placeholder="Format: 'Quantity,Unit,Description'" />"#,
                i + 1,
                attr(value),
                attr(name),
            ));
        }

        format!(
            r#"<div class="upload__column"><h3 class="upload__heading">Recipe data</h3>{data}</div><div class="upload__column"><h3 class="upload__heading">Ingredients</h3>{ingredients}</div><button class="btn upload__btn"><span>Upload</span></button>"#
        )
    }

    fn error_message(&self) -> &str {
        "Could not upload the recipe. Please check the ingredient format :)"
    }

    fn message(&self) -> &str {
        "Recipe was successfully uploaded :)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Surface;

    #[test]
    fn test_form_is_prefilled() {
        let form = UploadForm {
            title: "Soup \"deluxe\"".to_string(),
            servings: "4".to_string(),
            ingredients: vec![("ingredient-1".to_string(), "1,kg,Rice".to_string())],
            ..UploadForm::default()
        };
        let mut surface = Surface::new(AddRecipeView::default(), ".upload");
        surface.render(Some(form), true);

        let inputs: Vec<_> = surface
            .mount()
            .elements()
            .into_iter()
            .filter(|e| e.name == "input")
            .collect();
        assert_eq!(inputs.len(), 7);
        assert_eq!(inputs[0].attr("value"), Some("Soup \"deluxe\""));
        assert_eq!(inputs[6].attr("name"), Some("ingredient-1"));
    }

    #[test]
    fn test_success_message_and_window() {
        let mut surface = Surface::new(AddRecipeView::default(), ".upload");
        surface.render_message(None);
        assert_eq!(
            surface.mount().text_content(),
            "Recipe was successfully uploaded :)"
        );

        assert!(!surface.view().is_window_open());
        surface.view_mut().toggle_window();
        assert!(surface.view().is_window_open());
    }
}
