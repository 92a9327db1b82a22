//! Text layouts for catalog listings.

use recipebook_core::{Catalog, CatalogError, Recipe};
use std::io::{self, Write};

pub struct Printer<W> {
    out: W,
    separator: String,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, separator: impl Into<String>) -> Self {
        Self {
            out,
            separator: separator.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    pub fn recipe(&mut self, recipe: &Recipe) -> io::Result<()> {
        write!(self.out, "{}", recipe)?;
        writeln!(self.out, "{}", self.separator)
    }

    fn recipes<'a>(&mut self, recipes: impl IntoIterator<Item = &'a Recipe>) -> io::Result<()> {
        for recipe in recipes {
            self.recipe(recipe)?;
        }
        Ok(())
    }

    pub fn all_recipes(&mut self, catalog: &Catalog) -> io::Result<()> {
        writeln!(self.out, "All Recipes:")?;
        self.recipes(catalog.recipes())
    }

    pub fn category(&mut self, catalog: &Catalog, label: &str) -> io::Result<()> {
        match catalog.list_by_category(label) {
            Ok(recipes) => {
                writeln!(self.out, "Recipes in Category '{}':", label)?;
                if recipes.is_empty() {
                    writeln!(self.out, "No recipes available for category: {}", label)?;
                }
                self.recipes(recipes)
            }
            Err(CatalogError::CategoryNotFound(_)) => writeln!(self.out, "Category not found."),
            Err(e) => writeln!(self.out, "{}", e),
        }
    }

    pub fn category_names(&mut self, catalog: &Catalog) -> io::Result<()> {
        if catalog.category_names().next().is_none() {
            return writeln!(self.out, "No categories available.");
        }

        writeln!(self.out, "Categories:")?;
        for (i, label) in catalog.category_names().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, label)?;
        }
        Ok(())
    }

    pub fn search_results(&mut self, ingredient: &str, matches: &[&Recipe]) -> io::Result<()> {
        if matches.is_empty() {
            return writeln!(self.out, "No recipes found with ingredient '{}'.", ingredient);
        }

        writeln!(self.out, "Recipes with ingredient '{}':", ingredient)?;
        self.recipes(matches.iter().copied())
    }

    /// Numbered recipe names, as offered when choosing a recipe to delete.
    pub fn recipe_names(&mut self, catalog: &Catalog) -> io::Result<()> {
        for (i, recipe) in catalog.recipes().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, recipe.name())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Printer<Vec<u8>>) -> io::Result<()>) -> String {
        let mut printer = Printer::new(Vec::new(), "--");
        f(&mut printer).unwrap();
        String::from_utf8(printer.into_inner()).unwrap()
    }

    #[test]
    fn test_category_names() {
        let catalog = Catalog::seeded();
        assert_eq!(
            render(|p| p.category_names(&catalog)),
            "Categories:\n1. All\n2. Cake\n3. Cheesecake\n4. Italian\n"
        );
        assert_eq!(
            render(|p| p.category_names(&Catalog::new())),
            "No categories available.\n"
        );
    }

    #[test]
    fn test_category_not_found() {
        let catalog = Catalog::seeded();
        assert_eq!(
            render(|p| p.category(&catalog, "Thai")),
            "Category not found.\n"
        );
    }

    #[test]
    fn test_category_listing() {
        let catalog = Catalog::seeded();
        let output = render(|p| p.category(&catalog, "Cake"));

        assert!(output.starts_with("Recipes in Category 'Cake':\nRecipe: Classic Chocolate Cake\n"));
        assert!(output.ends_with("Type: Cake\n--\n"));
    }

    #[test]
    fn test_search_results() {
        let catalog = Catalog::seeded();
        let matches = catalog.search_by_ingredient("Garlic");
        let output = render(|p| p.search_results("Garlic", &matches));

        assert!(output.starts_with("Recipes with ingredient 'Garlic':\nRecipe: Chicken Alfredo\n"));
        assert_eq!(
            render(|p| p.search_results("Saffron", &[])),
            "No recipes found with ingredient 'Saffron'.\n"
        );
    }

    #[test]
    fn test_recipe_names() {
        let catalog = Catalog::seeded();
        assert_eq!(
            render(|p| p.recipe_names(&catalog)),
            "1. Spaghetti Carbonara\n2. Chicken Alfredo\n3. Classic Chocolate Cake\n4. Strawberry Cheesecake\n"
        );
    }
}
