//! View Mode
//!
//! Which page this load renders, decided once from the URL.

/// Query parameter selecting the page
const VIEW_PARAM: &str = "view";

/// Query parameter showing the log panel
const DEBUG_PARAM: &str = "debug";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Product cards with "Add to Cart"
    #[default]
    Listing,
    /// Cart items, quantity controls and totals
    Cart,
}

impl ViewMode {
    /// `?view=cart` wins; otherwise a last path segment of `cart.html` or
    /// `cart` selects the cart page
    pub fn detect(pathname: &str, search: &str) -> Self {
        if let Some(value) = query_param(search, VIEW_PARAM) {
            return Self::from_param(value);
        }

        let segment = pathname.trim_end_matches('/').rsplit('/').next().unwrap_or("");
        match segment {
            "cart.html" | "cart" => ViewMode::Cart,
            _ => ViewMode::Listing,
        }
    }

    fn from_param(value: &str) -> Self {
        match value {
            "cart" => ViewMode::Cart,
            _ => ViewMode::Listing,
        }
    }

    /// Link target for navigating to this page
    pub fn href(&self) -> &'static str {
        match self {
            ViewMode::Listing => "?view=shop",
            ViewMode::Cart => "?view=cart",
        }
    }
}

/// `?debug` or `?debug=1` shows the log panel; `?debug=0` does not
pub fn debug_requested(search: &str) -> bool {
    let present = search
        .trim_start_matches('?')
        .split('&')
        .any(|pair| pair == DEBUG_PARAM);
    present || matches!(query_param(search, DEBUG_PARAM), Some(value) if value != "0")
}

fn query_param<'a>(search: &'a str, name: &str) -> Option<&'a str> {
    search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
}

/// `(pathname, search)` of the current page
pub fn page_location() -> (String, String) {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return (String::new(), String::new());
    };
    (
        location.pathname().unwrap_or_default(),
        location.search().unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_param_selects_view() {
        assert_eq!(ViewMode::detect("/", "?view=cart"), ViewMode::Cart);
        assert_eq!(ViewMode::detect("/cart.html", "?view=shop"), ViewMode::Listing);
        assert_eq!(ViewMode::detect("/", "?lang=en&view=cart"), ViewMode::Cart);
    }

    #[test]
    fn test_path_selects_view() {
        assert_eq!(ViewMode::detect("/shop/cart.html", ""), ViewMode::Cart);
        assert_eq!(ViewMode::detect("/cart/", ""), ViewMode::Cart);
        assert_eq!(ViewMode::detect("/index.html", ""), ViewMode::Listing);
        assert_eq!(ViewMode::detect("/minicart-ideas", ""), ViewMode::Listing);
    }

    #[test]
    fn test_only_whole_segment_matches() {
        assert_eq!(ViewMode::detect("/minicart.html", ""), ViewMode::Listing);
        assert_eq!(ViewMode::detect("/shop/minicart", ""), ViewMode::Listing);
        assert_eq!(ViewMode::detect("cart", ""), ViewMode::Cart);
    }

    #[test]
    fn test_unrelated_params_ignored() {
        assert_eq!(ViewMode::detect("/", "?viewer=cart"), ViewMode::Listing);
        assert_eq!(ViewMode::detect("/", ""), ViewMode::Listing);
    }

    #[test]
    fn test_href_round_trips() {
        for mode in [ViewMode::Listing, ViewMode::Cart] {
            assert_eq!(ViewMode::detect("/", mode.href()), mode);
        }
    }

    #[test]
    fn test_debug_requested() {
        assert!(debug_requested("?debug"));
        assert!(debug_requested("?view=cart&debug=1"));
        assert!(!debug_requested("?debug=0"));
        assert!(!debug_requested("?view=cart"));
        assert!(!debug_requested("?debugger=1"));
    }
}
