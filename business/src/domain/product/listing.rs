//! Pure listing helpers: pagination clamping, filter-token and sort parsing,
//! and prev/next link construction. No I/O happens here; repositories run
//! the actual queries with the values computed by this module.

use url::form_urlencoded;

pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

/// Exact-match restriction over the catalog. Only `category` and `status`
/// are recognized; anything else parses to an empty filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub status: Option<bool>,
}

impl ProductFilter {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.status.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceOrder {
    Asc,
    Desc,
}

/// Sanitized pagination request. Raw query-string values that are absent,
/// non-numeric, or zero fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u64,
    pub page: u64,
}

impl PageRequest {
    pub fn from_raw(limit: Option<&str>, page: Option<&str>) -> Self {
        let limit = limit
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);
        let page = page
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(1);
        Self { limit, page }
    }

    pub fn skip(&self) -> u64 {
        (self.page - 1) * self.limit
    }
}

/// Pagination metadata for a listing response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub page: u64,
    pub total_pages: u64,
    pub has_prev_page: bool,
    pub has_next_page: bool,
    pub prev_page: Option<u64>,
    pub next_page: Option<u64>,
}

impl PageMeta {
    pub fn compute(request: PageRequest, total: u64) -> Self {
        let total_pages = total.div_ceil(request.limit).max(1);
        let has_prev_page = request.page > 1;
        let has_next_page = request.page < total_pages;
        Self {
            page: request.page,
            total_pages,
            has_prev_page,
            has_next_page,
            prev_page: has_prev_page.then(|| request.page - 1),
            next_page: has_next_page.then(|| request.page + 1),
        }
    }
}

/// Parses a combined `"key:value"` filter token. The value may itself
/// contain colons (`category:size:42`), so only the first colon splits.
/// Unknown keys and empty values yield an empty filter rather than an error.
pub fn parse_filter_token(token: Option<&str>) -> ProductFilter {
    let Some(token) = token else {
        return ProductFilter::default();
    };
    let Some((key, value)) = token.split_once(':') else {
        return ProductFilter::default();
    };
    match key {
        "category" if !value.is_empty() => ProductFilter {
            category: Some(value.to_string()),
            status: None,
        },
        "status" if !value.is_empty() => ProductFilter {
            category: None,
            status: Some(value == "true"),
        },
        _ => ProductFilter::default(),
    }
}

/// `"asc"`/`"desc"` order the listing by price; anything else keeps the
/// store-default order.
pub fn parse_sort(sort: Option<&str>) -> Option<PriceOrder> {
    match sort {
        Some("asc") => Some(PriceOrder::Asc),
        Some("desc") => Some(PriceOrder::Desc),
        _ => None,
    }
}

/// Rebuilds the current request's query string with `page` rewritten,
/// preserving every other parameter.
pub fn page_link(base_path: &str, params: &[(String, String)], page: u64) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        if key != "page" {
            serializer.append_pair(key, value);
        }
    }
    serializer.append_pair("page", &page.to_string());
    format!("{}?{}", base_path, serializer.finish())
}
