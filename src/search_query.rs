use std::collections::BTreeMap;
use std::fmt;

use url::form_urlencoded;

// Keyed by wire name
pub type ParameterMap = BTreeMap<&'static str, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOption {
    BestMatch, // Server-side default ranking, sent as an empty sort value
    Stars,
    Forks,
    HelpWanted,
}

impl SortOption {
    pub fn token(self) -> &'static str {
        match self {
            SortOption::BestMatch => "",
            SortOption::Stars => "stars",
            SortOption::Forks => "forks",
            SortOption::HelpWanted => "help-wanted-issues",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderOption {
    Ascending,
    Descending,
}

impl OrderOption {
    pub fn token(self) -> &'static str {
        match self {
            OrderOption::Ascending => "asc",
            OrderOption::Descending => "desc",
        }
    }
}

impl fmt::Display for OrderOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub keyword: String,
    pub sort: SortOption,
    pub order: OrderOption,
    pub page: u32,
    pub per_page: u32,
}

impl SearchRequest {
    pub const DEFAULT_SORT: SortOption = SortOption::Stars;
    pub const DEFAULT_ORDER: OrderOption = OrderOption::Descending;
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_PER_PAGE: u32 = 20;

    // Initialize a new search request with the default ranking and paging
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_owned(),
            sort: Self::DEFAULT_SORT,
            order: Self::DEFAULT_ORDER,
            page: Self::DEFAULT_PAGE,
            per_page: Self::DEFAULT_PER_PAGE,
        }
    }

    pub fn sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    pub fn order(mut self, order: OrderOption) -> Self {
        self.order = order;
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    // Always all five keys; sort stays present even when empty
    pub fn parameters(&self) -> ParameterMap {
        ParameterMap::from([
            ("q", self.keyword.clone()),
            ("sort", self.sort.token().to_owned()),
            ("order", self.order.token().to_owned()),
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ])
    }

    // Convert the request to a form-encoded query string
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.parameters())
            .finish()
    }
}
