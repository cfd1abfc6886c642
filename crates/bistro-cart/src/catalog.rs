use bistro_api_types::{CatalogItem, ItemId, MenuRecord};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Image used for menu rows that come without one.
pub const DEFAULT_ITEM_IMAGE: &str = "../images/pizza1.jpg";

/// Lookup table for add-to-cart requests that carry only an item id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: BTreeMap<ItemId, CatalogItem>,
}

impl Catalog {
    pub fn from_items(items: impl IntoIterator<Item = CatalogItem>) -> Self {
        Self {
            items: items.into_iter().map(|item| (item.id, item)).collect(),
        }
    }

    /// Build the catalog from the menu rows injected by the server.
    ///
    /// Rows without an id take their 1-based position.
    pub fn from_menu(records: Vec<MenuRecord>) -> Self {
        let items = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                let image = record
                    .image_url
                    .or(record.image)
                    .filter(|path| !path.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_ITEM_IMAGE.to_owned());
                CatalogItem {
                    id: ItemId(record.id.unwrap_or(index as u64 + 1)),
                    name: record.name,
                    price: record.price,
                    image,
                }
            });
        Self::from_items(items)
    }

    pub fn get(&self, id: ItemId) -> Option<&CatalogItem> {
        self.items.get(&id)
    }

    pub fn find_id_by_name(&self, name: &str) -> Option<ItemId> {
        self.items
            .values()
            .find(|item| item.name == name)
            .map(|item| item.id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Attributes of a clicked "order" button.
#[derive(Debug, Clone, Default)]
pub struct OrderButton {
    /// `data-pizza-type`: the item's display name.
    pub name: Option<String>,
    pub item_id: Option<String>,
    pub item_price: Option<String>,
    pub item_image: Option<String>,
}

/// What to hand to `CartStore::add` for a clicked button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedItem {
    pub id: ItemId,
    pub data: Option<CatalogItem>,
}

/// Resolve an order button to a cart item.
///
/// Inline `data-item-*` attributes win; otherwise the item is looked up by
/// name. Buttons without a name, or whose name is not in the catalog, do not
/// resolve.
pub fn resolve_order_button(button: &OrderButton, catalog: &Catalog) -> Option<ResolvedItem> {
    let name = button.name.as_deref().filter(|name| !name.is_empty())?;

    let inline_id = button
        .item_id
        .as_deref()
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .filter(|id| *id != 0);

    if let Some(id) = inline_id {
        let price = button
            .item_price
            .as_deref()
            .and_then(|raw| Decimal::from_str(raw.trim()).ok())
            .filter(|price| !price.is_sign_negative())
            .unwrap_or(Decimal::ZERO);
        return Some(ResolvedItem {
            id: ItemId(id),
            data: Some(CatalogItem {
                id: ItemId(id),
                name: name.to_owned(),
                price,
                image: button.item_image.clone().unwrap_or_default(),
            }),
        });
    }

    catalog
        .find_id_by_name(name)
        .map(|id| ResolvedItem { id, data: None })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> Catalog {
        Catalog::from_menu(vec![
            MenuRecord {
                id: Some(7),
                name: "Margherita".to_owned(),
                price: Decimal::new(1899, 2),
                image_url: None,
                image: Some("/img/m.jpg".to_owned()),
                description: String::new(),
                category: "pizza".to_owned(),
                rating: None,
            },
            MenuRecord {
                id: None,
                name: "Garlic Bread".to_owned(),
                price: Decimal::new(5, 0),
                image_url: Some(String::new()),
                image: None,
                description: String::new(),
                category: "sides".to_owned(),
                rating: None,
            },
        ])
    }

    #[test]
    fn menu_rows_fill_missing_ids_and_images() {
        let catalog = menu();
        assert_eq!(catalog.len(), 2);

        let bread = catalog.get(ItemId(2)).expect("positional id");
        assert_eq!(bread.image, DEFAULT_ITEM_IMAGE);
        assert_eq!(catalog.get(ItemId(7)).map(|i| i.image.as_str()), Some("/img/m.jpg"));
    }

    #[test]
    fn inline_attributes_win_over_catalog() {
        let button = OrderButton {
            name: Some("Margherita".to_owned()),
            item_id: Some("12".to_owned()),
            item_price: Some("21.50".to_owned()),
            item_image: Some("/img/special.jpg".to_owned()),
        };

        let resolved = resolve_order_button(&button, &menu()).expect("inline id");
        assert_eq!(resolved.id, ItemId(12));
        let data = resolved.data.expect("inline data");
        assert_eq!(data.price, Decimal::new(2150, 2));
        assert_eq!(data.image, "/img/special.jpg");
    }

    #[test]
    fn missing_price_defaults_to_zero() {
        let button = OrderButton {
            name: Some("Soup".to_owned()),
            item_id: Some("3".to_owned()),
            item_price: Some("abc".to_owned()),
            item_image: None,
        };
        let data = resolve_order_button(&button, &Catalog::default())
            .and_then(|r| r.data)
            .expect("inline data");
        assert_eq!(data.price, Decimal::ZERO);
        assert!(data.image.is_empty());
    }

    #[test]
    fn falls_back_to_name_lookup() {
        let button = OrderButton {
            name: Some("Margherita".to_owned()),
            item_id: Some("not-a-number".to_owned()),
            ..OrderButton::default()
        };
        assert_eq!(
            resolve_order_button(&button, &menu()),
            Some(ResolvedItem {
                id: ItemId(7),
                data: None
            })
        );
    }

    #[test]
    fn unknown_or_unnamed_buttons_do_not_resolve() {
        let unknown = OrderButton {
            name: Some("Hawaiian".to_owned()),
            ..OrderButton::default()
        };
        assert!(resolve_order_button(&unknown, &menu()).is_none());
        assert!(resolve_order_button(&OrderButton::default(), &menu()).is_none());
    }
}
