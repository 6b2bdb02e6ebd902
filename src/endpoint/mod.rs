//! Endpoint descriptors
//!
//! An [`EndpointDescriptor`] is the immutable URL template for one registry:
//! the request path, the pagination parameter names, an optional key
//! parameter, and whatever fixed query parameters the registry requires
//! (status flags, fiscal year). Descriptors for the three compras.gov.br
//! registries are built in.

mod builtin;

pub use builtin::{builtin_names, orgao, pgc_detalhe, uasg, DEFAULT_PGC_PAGE_SIZE};

/// Base URL of the compras.gov.br open-data API
pub const DEFAULT_BASE_URL: &str = "https://dadosabertos.compras.gov.br";

/// Immutable description of one paginated registry endpoint
#[derive(Debug, Clone)]
pub struct EndpointDescriptor {
    /// Registry name, used in logs and the CLI
    name: String,
    /// Request path relative to the API base URL
    path: String,
    /// Query parameter carrying the page number
    page_param: String,
    /// Optional page size parameter and value
    page_size_param: Option<(String, u32)>,
    /// Query parameter carrying the key, for key-scoped registries
    key_param: Option<String>,
    /// Fixed query parameters appended to every request
    fixed_params: Vec<(String, String)>,
}

impl EndpointDescriptor {
    /// Create a descriptor with the standard `pagina` page parameter
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            page_param: "pagina".to_string(),
            page_size_param: None,
            key_param: None,
            fixed_params: Vec::new(),
        }
    }

    /// Set the page size parameter and value
    #[must_use]
    pub fn with_page_size(mut self, param: impl Into<String>, size: u32) -> Self {
        self.page_size_param = Some((param.into(), size));
        self
    }

    /// Set the key parameter, making this a key-scoped endpoint
    #[must_use]
    pub fn with_key_param(mut self, param: impl Into<String>) -> Self {
        self.key_param = Some(param.into());
        self
    }

    /// Append a fixed query parameter
    #[must_use]
    pub fn with_fixed_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fixed_params.push((key.into(), value.into()));
        self
    }

    /// Registry name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Request path relative to the API base
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether this endpoint is scoped by a key
    pub fn is_key_scoped(&self) -> bool {
        self.key_param.is_some()
    }

    /// Configured page size, if the endpoint takes one
    pub fn page_size(&self) -> Option<u32> {
        self.page_size_param.as_ref().map(|(_, size)| *size)
    }

    /// Build the query parameters for one `(key, page)` request
    ///
    /// `page` is 1-based. The key is substituted only when the endpoint
    /// declares a key parameter; it must already be normalized by the caller.
    pub fn query_params(&self, key: Option<&str>, page: u32) -> Vec<(String, String)> {
        let mut params = vec![(self.page_param.clone(), page.to_string())];

        if let Some((param, size)) = &self.page_size_param {
            params.push((param.clone(), size.to_string()));
        }

        if let (Some(param), Some(key)) = (&self.key_param, key) {
            params.push((param.clone(), key.to_string()));
        }

        params.extend(self.fixed_params.iter().cloned());
        params
    }
}
