use dioxus::prelude::*;

use crate::domain::models::PageTokens;

/// Provide the layout's presentation tokens to the pages it renders.
pub fn use_page_tokens_provider() -> PageTokens {
    use_context_provider(PageTokens::default)
}

pub fn use_page_tokens() -> PageTokens {
    use_context::<PageTokens>()
}
