//! Properties for the `MemeGeneratorComponent`.
//!
//! Both values default to `common::config`; parents only pass them to point
//! the widget at another catalog or change the strip's page size.

use common::config::{CATALOG_URL, PAGE_SIZE};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MemeGeneratorProps {
    /// Endpoint fetched once on first render.
    #[prop_or(AttrValue::from(CATALOG_URL))]
    pub catalog_url: AttrValue,

    /// Templates revealed initially and per "Load More". Read on creation only.
    #[prop_or(PAGE_SIZE)]
    pub page_size: usize,
}
