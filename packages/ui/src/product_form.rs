//! State of the admin create/edit product form.

use api::{ProductFields, ProductImage};
use store::{Category, Product};

/// Form contents. `editing_id` is set while an existing listing is edited.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductForm {
    pub editing_id: Option<String>,
    pub category: Category,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub account_username: String,
    pub account_password: String,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            editing_id: None,
            category: Category::Tft,
            name: String::new(),
            description: String::new(),
            price: 0,
            account_username: String::new(),
            account_password: String::new(),
        }
    }
}

impl ProductForm {
    /// Pre-fill from the admin detail record, credentials included.
    pub fn from_product(product: &Product) -> Self {
        Self {
            editing_id: Some(product.id.clone()),
            category: product.category.unwrap_or(Category::Tft),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            account_username: product.account_username.clone().unwrap_or_default(),
            account_password: product.account_password.clone().unwrap_or_default(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn fields(&self) -> ProductFields {
        ProductFields {
            category: self.category,
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price: self.price,
            account_username: self.account_username.trim().to_string(),
            account_password: self.account_password.clone(),
        }
    }

    /// Checks before submitting. A new listing must come with an image.
    pub fn validate(&self, image: Option<&ProductImage>) -> Result<(), String> {
        if self.name.trim().is_empty() || self.description.trim().is_empty() {
            return Err("Name and description are required.".to_string());
        }
        if self.account_username.trim().is_empty() {
            return Err("The account username is required.".to_string());
        }
        if self.price < 0 {
            return Err("Price cannot be negative.".to_string());
        }
        if !self.is_editing() && image.is_none() {
            return Err("Please choose an image for the new product.".to_string());
        }
        Ok(())
    }
}

/// Whether a listing can be opened in the edit form.
pub fn can_edit(product: &Product) -> bool {
    !product.is_sold()
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::ProductStatus;

    fn detail() -> Product {
        Product {
            id: "p9".into(),
            category: Some(Category::Lol),
            name: "Acc Cao Thu".into(),
            description: "150 skins".into(),
            image: "https://cdn.example/p9.png".into(),
            price: 350_000,
            status: ProductStatus::Available,
            account_username: Some("lol_main".into()),
            account_password: Some("pw123".into()),
        }
    }

    fn image() -> ProductImage {
        ProductImage {
            file_name: "acc.png".into(),
            content_type: Some("image/png".into()),
            bytes: b"png".to_vec(),
        }
    }

    #[test]
    fn test_prefill_from_detail() {
        let form = ProductForm::from_product(&detail());
        assert_eq!(form.editing_id.as_deref(), Some("p9"));
        assert_eq!(form.category, Category::Lol);
        assert_eq!(form.price, 350_000);
        assert_eq!(form.account_username, "lol_main");
        assert_eq!(form.account_password, "pw123");

        let fields = form.fields();
        assert_eq!(fields.category, Category::Lol);
        assert_eq!(fields.name, "Acc Cao Thu");
    }

    #[test]
    fn test_image_required_only_on_create() {
        let mut form = ProductForm::from_product(&detail());
        assert!(form.validate(None).is_ok());

        form.editing_id = None;
        assert!(form.validate(None).is_err());
        assert!(form.validate(Some(&image())).is_ok());
    }

    #[test]
    fn test_required_fields() {
        let form = ProductForm::default();
        assert!(form.validate(Some(&image())).is_err());

        let mut form = ProductForm::from_product(&detail());
        form.price = -1;
        assert!(form.validate(None).is_err());
    }

    #[test]
    fn test_sold_products_are_locked() {
        let mut product = detail();
        assert!(can_edit(&product));
        product.status = ProductStatus::Sold;
        assert!(!can_edit(&product));
    }
}
