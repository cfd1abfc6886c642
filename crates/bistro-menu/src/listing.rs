use crate::rating::Stars;
use bistro_api_types::MenuRecord;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Picture shown for menu rows that come without one.
pub const DEFAULT_MENU_IMAGE: &str = "/static/images/blank.png";

/// A menu row ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub stars: Stars,
    pub description: String,
    pub category: String,
}

impl From<&MenuRecord> for MenuEntry {
    fn from(record: &MenuRecord) -> Self {
        let image = record
            .image_url
            .as_deref()
            .or(record.image.as_deref())
            .filter(|path| !path.trim().is_empty())
            .unwrap_or(DEFAULT_MENU_IMAGE)
            .to_owned();
        let rating = record
            .rating
            .and_then(|rating| rating.to_f64())
            .unwrap_or_default();
        Self {
            name: record.name.clone(),
            price: record.price,
            image,
            stars: Stars::from_rating(rating),
            description: record.description.clone(),
            category: record.category.clone(),
        }
    }
}

impl MenuEntry {
    pub fn from_records(records: &[MenuRecord]) -> Vec<Self> {
        records.iter().map(Self::from).collect()
    }
}
