use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use store::{Category, Product};

use crate::error::Result;

/// Editable fields of a listing, sent as multipart form parts.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub category: Category,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub account_username: String,
    pub account_password: String,
}

impl ProductFields {
    /// Text parts in the order the backend documents them.
    pub fn parts(&self) -> Vec<(&'static str, String)> {
        vec![
            ("category", self.category.as_str().to_string()),
            ("name", self.name.clone()),
            ("description", self.description.clone()),
            ("price", self.price.to_string()),
            ("accountUsername", self.account_username.clone()),
            ("accountPassword", self.account_password.clone()),
        ]
    }

    pub(crate) fn into_form(&self, image: Option<ProductImage>) -> Result<Form> {
        let mut form = Form::new();
        if let Some(image) = image {
            form = form.part("image", image.into_part()?);
        }
        for (name, value) in self.parts() {
            form = form.text(name, value);
        }
        Ok(form)
    }
}

/// An image file picked in the product form.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductImage {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ProductImage {
    fn into_part(self) -> Result<Part> {
        let part = Part::bytes(self.bytes).file_name(self.file_name);
        match self.content_type {
            Some(mime) => Ok(part.mime_str(&mime)?),
            None => Ok(part),
        }
    }
}

/// Body of `POST /products/buy/:id`: the purchased listing with its credentials.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseReceipt {
    pub product: Product,
}
