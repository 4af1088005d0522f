//! Product query engine
//!
//! Turns a [`ProductQuery`] descriptor into a filtered, ordered, paginated
//! page of products plus the total match count. The whole pipeline is a pure
//! function over an immutable product slice: concurrent requests can run it
//! in parallel without locking.

use super::model::Product;

/// Page number applied when the request carries none (or a non-positive one).
pub const DEFAULT_PAGE: u32 = 1;
/// Page size applied when the request carries none (or a non-positive one).
pub const DEFAULT_LIMIT: u32 = 10;

/// Sort key for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Price,
    Name,
}

impl SortKey {
    /// Recognizes exactly `price` or `name`; anything else means "no sort".
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "price" => Some(Self::Price),
            "name" => Some(Self::Name),
            _ => None,
        }
    }
}

/// Sort direction for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Recognizes exactly `asc` or `desc`; anything else falls back to `asc`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "desc" => Self::Desc,
            _ => Self::Asc,
        }
    }
}

/// Recognizes only the literal text `true`/`false` as a boolean.
///
/// Any other value means the availability filter is not applied.
pub fn parse_bool_literal(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Normalized filter/sort/pagination parameters for one catalog request.
///
/// Built fresh per request from untrusted text input; malformed fields are
/// dropped to `None` (or the `asc` default) during construction rather than
/// rejected. The engine re-applies the page/limit defaults, so a descriptor
/// assembled by hand with `page: Some(0)` still evaluates safely.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    /// Case-insensitive substring matched against name or description.
    pub search: Option<String>,
    /// Exact availability match; `None` disables the filter.
    pub available: Option<bool>,
    /// Sort key; `None` preserves the filtered collection's original order.
    pub sort: Option<SortKey>,
    /// Sort direction, meaningful only when `sort` is set.
    pub order: SortOrder,
    /// Requested 1-based page number.
    pub page: Option<u32>,
    /// Requested page size.
    pub limit: Option<u32>,
}

/// One page of query results plus the pre-pagination match count.
#[derive(Debug, Clone)]
pub struct PageResult<T> {
    /// Records on the current page, in final order.
    pub data: Vec<T>,
    /// Count of records matching the filters, before slicing.
    pub total: u64,
    /// Page number actually applied.
    pub page: u32,
    /// Page size actually applied.
    pub limit: u32,
}

/// Evaluates `query` against `products`: filter, then sort, then paginate.
///
/// Never fails: every malformed or missing parameter has already degraded
/// to a default, and the input collection is never mutated. Requesting a
/// page past the end yields an empty `data` with `total` still accurate.
pub fn evaluate(products: &[Product], query: &ProductQuery) -> PageResult<Product> {
    // Lowercase the needle once; an empty search is a no-op.
    let needle = query
        .search
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let mut matched: Vec<&Product> = products
        .iter()
        .filter(|p| {
            if let Some(ref needle) = needle {
                if !p.name.to_lowercase().contains(needle.as_str())
                    && !p.description.to_lowercase().contains(needle.as_str())
                {
                    return false;
                }
            }
            match query.available {
                Some(wanted) => p.available == wanted,
                None => true,
            }
        })
        .collect();

    if let Some(key) = query.sort {
        // Vec::sort_by is stable: equal keys keep their filtered order.
        matched.sort_by(|a, b| {
            let ordering = match key {
                SortKey::Price => a.price.total_cmp(&b.price),
                SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            };
            match query.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
    }

    let total = matched.len() as u64;
    let page = query.page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE);
    let limit = query.limit.filter(|l| *l > 0).unwrap_or(DEFAULT_LIMIT);

    let start = (page as usize - 1).saturating_mul(limit as usize);
    let data: Vec<Product> = matched
        .into_iter()
        .skip(start)
        .take(limit as usize)
        .cloned()
        .collect();

    PageResult {
        data,
        total,
        page,
        limit,
    }
}

/// Linear scan for an exact `id` match.
pub fn find_by_id<'a>(products: &'a [Product], id: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.id == id)
}
