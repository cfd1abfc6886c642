use crate::locale::Messages;
use crate::notice::Notice;
use bistro_api_types::OrderSummary;
use bistro_client::ClientError;
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CartTab {
    #[default]
    Current,
    History,
}

impl FromStr for CartTab {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "current" => Ok(Self::Current),
            "history" => Ok(Self::History),
            other => Err(format!("unknown cart tab: {other}")),
        }
    }
}

impl CartTab {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::History => "history",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    NoOrders,
    /// The server answered 401: nobody is logged in.
    SignedOut,
    /// Any other failure; the view shows "no orders".
    Unavailable,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HistoryView {
    #[default]
    NotLoaded,
    Loading,
    Loaded(Vec<OrderSummary>),
    Empty(EmptyReason),
}

/// What the renderer has to do after a tab switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabEffect {
    RenderCart,
    FetchHistory,
}

/// View state of the cart modal.
#[derive(Debug, Clone, Default)]
pub struct CartPanel {
    open: bool,
    tab: CartTab,
    history: HistoryView,
    expanded_order: Option<String>,
}

impl CartPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn tab(&self) -> CartTab {
        self.tab
    }

    pub fn history(&self) -> &HistoryView {
        &self.history
    }

    /// Open the modal. The caller re-renders from the store every time.
    pub fn show(&mut self) {
        self.open = true;
    }

    pub fn hide(&mut self) {
        self.open = false;
    }

    pub fn switch_tab(&mut self, tab: CartTab) -> TabEffect {
        self.tab = tab;
        debug!(tab = tab.as_str(), "cart tab switch");
        match tab {
            CartTab::Current => TabEffect::RenderCart,
            CartTab::History => {
                self.history = HistoryView::Loading;
                TabEffect::FetchHistory
            }
        }
    }

    /// Apply the outcome of an order history fetch.
    ///
    /// Always leaves the `Loading` state. Returns the notice to show, if any:
    /// the server's own message, or a generic one when the request itself failed.
    pub fn history_loaded(
        &mut self,
        result: Result<Vec<OrderSummary>, ClientError>,
        messages: &Messages,
    ) -> Option<Notice> {
        self.expanded_order = None;
        match result {
            Ok(orders) if orders.is_empty() => {
                self.history = HistoryView::Empty(EmptyReason::NoOrders);
                None
            }
            Ok(orders) => {
                self.history = HistoryView::Loaded(orders);
                None
            }
            Err(err) => {
                let reason = if err.is_unauthorized() {
                    EmptyReason::SignedOut
                } else {
                    EmptyReason::Unavailable
                };
                self.history = HistoryView::Empty(reason);
                match err {
                    ClientError::Status { message, .. } => message.map(Notice::new),
                    ClientError::Network(_) | ClientError::Decode(_) => {
                        Some(Notice::new(messages.history_failed))
                    }
                }
            }
        }
    }

    /// Expand `order_id`, collapsing any other; clicking the expanded order collapses it.
    ///
    /// Returns whether `order_id` is now expanded.
    pub fn toggle_order(&mut self, order_id: &str) -> bool {
        if self.expanded_order.as_deref() == Some(order_id) {
            self.expanded_order = None;
            false
        } else {
            self.expanded_order = Some(order_id.to_owned());
            true
        }
    }

    pub fn is_expanded(&self, order_id: &str) -> bool {
        self.expanded_order.as_deref() == Some(order_id)
    }
}

/// Text of the quantity badge; `None` hides it.
pub fn badge_label(total_quantity: u32) -> Option<String> {
    (total_quantity > 0).then(|| total_quantity.to_string())
}

/// Money with two decimals, as shown in the modal.
pub fn format_price(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    fn order(id: &str) -> OrderSummary {
        OrderSummary {
            order_id: id.to_owned(),
            date: "2024-01-15".to_owned(),
            total: Decimal::new(50, 0),
            status: "Completed".to_owned(),
            items: Vec::new(),
        }
    }

    #[test]
    fn history_tab_enters_loading() {
        let mut panel = CartPanel::new();
        panel.show();
        assert_eq!(panel.switch_tab(CartTab::History), TabEffect::FetchHistory);
        assert_eq!(panel.history(), &HistoryView::Loading);
        assert_eq!(panel.switch_tab(CartTab::Current), TabEffect::RenderCart);
    }

    #[test]
    fn unauthorized_history_ends_signed_out() {
        let mut panel = CartPanel::new();
        panel.switch_tab(CartTab::History);

        let notice = panel.history_loaded(
            Err(ClientError::Status {
                status: 401,
                message: Some("You must be logged in to view orders.".to_owned()),
            }),
            Locale::En.messages(),
        );

        assert_eq!(panel.history(), &HistoryView::Empty(EmptyReason::SignedOut));
        assert_eq!(
            notice.map(|n| n.message).as_deref(),
            Some("You must be logged in to view orders.")
        );
    }

    #[test]
    fn status_without_message_is_silent() {
        let mut panel = CartPanel::new();
        panel.switch_tab(CartTab::History);
        let notice = panel.history_loaded(
            Err(ClientError::Status {
                status: 500,
                message: None,
            }),
            Locale::En.messages(),
        );
        assert!(notice.is_none());
        assert_eq!(panel.history(), &HistoryView::Empty(EmptyReason::Unavailable));
    }

    #[test]
    fn network_failure_shows_generic_notice() {
        let mut panel = CartPanel::new();
        panel.switch_tab(CartTab::History);
        let notice = panel.history_loaded(
            Err(ClientError::Network("connection refused".to_owned())),
            Locale::En.messages(),
        );
        assert_eq!(
            notice.map(|n| n.message).as_deref(),
            Some(Locale::En.messages().history_failed)
        );
        assert_ne!(panel.history(), &HistoryView::Loading);
    }

    #[test]
    fn loaded_orders_and_empty_list() {
        let mut panel = CartPanel::new();
        panel.switch_tab(CartTab::History);
        assert!(panel.history_loaded(Ok(vec![order("ORD-001")]), Locale::En.messages()).is_none());
        assert!(matches!(panel.history(), HistoryView::Loaded(orders) if orders.len() == 1));

        panel.switch_tab(CartTab::History);
        panel.history_loaded(Ok(Vec::new()), Locale::En.messages());
        assert_eq!(panel.history(), &HistoryView::Empty(EmptyReason::NoOrders));
    }

    #[test]
    fn one_order_expanded_at_a_time() {
        let mut panel = CartPanel::new();
        assert!(panel.toggle_order("ORD-001"));
        assert!(panel.toggle_order("ORD-002"));
        assert!(!panel.is_expanded("ORD-001"));
        assert!(!panel.toggle_order("ORD-002"));
        assert!(!panel.is_expanded("ORD-002"));
    }

    #[test]
    fn badge_hidden_at_zero() {
        assert_eq!(badge_label(0), None);
        assert_eq!(badge_label(3).as_deref(), Some("3"));
    }

    #[test]
    fn prices_render_with_two_decimals() {
        assert_eq!(format_price(Decimal::new(25, 0)), "25.00");
        assert_eq!(format_price(Decimal::new(3499, 3)), "3.50");
    }

    #[test]
    fn tabs_parse_from_data_attributes() {
        assert_eq!("history".parse::<CartTab>(), Ok(CartTab::History));
        assert!("orders".parse::<CartTab>().is_err());
    }
}
