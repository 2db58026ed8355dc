use url::form_urlencoded;

use super::filter::FilterSet;

/// Items per page when the configuration does not override it.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Builds [`PageRequest`] descriptors with a fixed page size.
///
/// The page size comes from configuration once and is baked into every
/// descriptor the builder produces.
#[derive(Debug, Clone, Copy)]
pub struct CollectionQuery {
    page_size: u32,
}

impl CollectionQuery {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    /// Build a request descriptor for a page of the collection.
    ///
    /// Pure: identical inputs always produce descriptors that serialize to
    /// identical query strings. Pages are 1-based; `0` is clamped to `1`.
    pub fn build(&self, page: u32, filters: FilterSet) -> PageRequest {
        PageRequest {
            page: page.max(1),
            page_size: self.page_size,
            filters,
        }
    }
}

impl Default for CollectionQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// One page's worth of collection request state.
///
/// Equality is defined over the serialized query string, so a request whose
/// only difference is an inactive (sentinel-valued) filter compares equal to
/// one without that filter at all.
#[derive(Debug, Clone)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
    filters: FilterSet,
}

impl PageRequest {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Serialize to the canonical query string.
    ///
    /// `page` and `limit` always come first, then active filters in sorted
    /// name order, percent-encoded. Inactive filters are omitted entirely.
    pub fn query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.append_pair("page", &self.page.to_string());
        serializer.append_pair("limit", &self.page_size.to_string());
        for (name, value) in self.filters.active() {
            serializer.append_pair(name, value);
        }
        serializer.finish()
    }
}

impl PartialEq for PageRequest {
    fn eq(&self, other: &Self) -> bool {
        self.query_string() == other.query_string()
    }
}

impl Eq for PageRequest {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_filters_are_omitted_from_query() {
        let query = CollectionQuery::new(10);
        let request = query.build(
            1,
            FilterSet::new().with("category", "All").with("source", "Eenadu"),
        );

        let qs = request.query_string();
        assert_eq!(qs, "page=1&limit=10&source=Eenadu");
        assert!(!qs.contains("category"));
    }

    #[test]
    fn build_is_deterministic() {
        let query = CollectionQuery::new(12);
        let filters = FilterSet::new()
            .with("source", "Sakshi")
            .with("category", "Movies");

        let a = query.build(3, filters.clone());
        let b = query.build(3, filters);
        assert_eq!(a.query_string(), b.query_string());
        assert_eq!(a, b);
    }

    #[test]
    fn filters_serialize_in_sorted_name_order() {
        let query = CollectionQuery::new(10);
        let request = query.build(
            2,
            FilterSet::new()
                .with("source", "Eenadu")
                .with("category", "Politics")
                .with("pinned", "true"),
        );

        assert_eq!(
            request.query_string(),
            "page=2&limit=10&category=Politics&pinned=true&source=Eenadu"
        );
    }

    #[test]
    fn values_are_percent_encoded() {
        let query = CollectionQuery::new(10);
        let request = query.build(1, FilterSet::new().with("category", "Tech & Science"));
        assert_eq!(
            request.query_string(),
            "page=1&limit=10&category=Tech+%26+Science"
        );
    }

    #[test]
    fn inactive_filter_compares_equal_to_absent_filter() {
        let query = CollectionQuery::new(10);
        let with_sentinel = query.build(1, FilterSet::new().with("category", "All"));
        let without = query.build(1, FilterSet::new());
        assert_eq!(with_sentinel, without);
    }

    #[test]
    fn page_zero_is_clamped() {
        let query = CollectionQuery::new(10);
        let request = query.build(0, FilterSet::new());
        assert_eq!(request.page(), 1);
    }
}
