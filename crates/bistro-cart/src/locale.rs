/// Display language of the storefront.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    /// Pick a locale from a language tag such as `zh-CN` or `en`.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("zh") {
            Self::Zh
        } else {
            Self::En
        }
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Self::En => &EN,
            Self::Zh => &ZH,
        }
    }
}

/// User-facing strings used by the cart, menu and reviews.
#[derive(Debug)]
pub struct Messages {
    pub added_to_cart: &'static str,
    pub add_failed: &'static str,
    pub item_not_found: &'static str,
    pub cart_empty: &'static str,
    pub order_placed: &'static str,
    pub order_failed: &'static str,
    pub network_error: &'static str,
    pub history_failed: &'static str,
    pub loading_orders: &'static str,
    pub like_failed: &'static str,
    pub each: &'static str,
    pub quantity: &'static str,
    pub order_now: &'static str,
    pub no_items_found: &'static str,
    /// "Page {current} of {total}".
    pub page_of: fn(usize, usize) -> String,
}

static EN: Messages = Messages {
    added_to_cart: "Added to cart!",
    add_failed: "Failed to add, please try again later",
    item_not_found: "Item not found, please try again later",
    cart_empty: "Your cart is empty",
    order_placed: "Order placed successfully!",
    order_failed: "Failed to place order",
    network_error: "Network error, please try again later.",
    history_failed: "Failed to load order history, please try again later.",
    loading_orders: "Loading orders...",
    like_failed: "Could not update like, please try again later.",
    each: "each",
    quantity: "Qty",
    order_now: "Order Now",
    no_items_found: "No items found",
    page_of: |current, total| format!("Page {current} of {total}"),
};

static ZH: Messages = Messages {
    added_to_cart: "已加入购物车！",
    add_failed: "添加失败，请稍后再试",
    item_not_found: "未找到该商品，请稍后再试",
    cart_empty: "购物车是空的",
    order_placed: "下单成功！",
    order_failed: "下单失败",
    network_error: "网络错误，请稍后再试。",
    history_failed: "加载订单历史失败，请稍后再试。",
    loading_orders: "正在加载订单...",
    like_failed: "点赞失败，请稍后再试。",
    each: "每份",
    quantity: "数量",
    order_now: "立即订购",
    no_items_found: "未找到商品",
    page_of: |current, total| format!("第 {current} 页，共 {total} 页"),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_tags_pick_locale() {
        assert_eq!(Locale::from_tag("zh-CN"), Locale::Zh);
        assert_eq!(Locale::from_tag("ZH_tw"), Locale::Zh);
        assert_eq!(Locale::from_tag("en-US"), Locale::En);
        assert_eq!(Locale::from_tag(""), Locale::En);
    }

    #[test]
    fn each_locale_has_its_own_table() {
        assert_eq!(Locale::En.messages().cart_empty, "Your cart is empty");
        assert_ne!(
            Locale::Zh.messages().cart_empty,
            Locale::En.messages().cart_empty
        );
    }

    #[test]
    fn page_labels_are_localized() {
        assert_eq!((Locale::En.messages().page_of)(2, 3), "Page 2 of 3");
        assert_eq!((Locale::Zh.messages().page_of)(1, 4), "第 1 页，共 4 页");
    }
}
