//! Static page skeleton.
//!
//! Both layouts start hidden; the page controller reveals one of them and
//! fills the containers by element id.

use leptos::prelude::*;

use crate::config::{APP_NAME, QUERY_PARAM, classes};
use crate::models::Region;

stylance::import_crate_style!(css, "src/components/catalog.module.css");

#[component]
pub fn CatalogShell(
    /// Current search term, echoed in the search box.
    #[prop(optional, into)]
    query: String,
) -> impl IntoView {
    view! {
        <div class=css::page>
            <header class=css::masthead>
                <a class=css::brand href="/">{APP_NAME}</a>
                <form class=css::searchForm action="/" method="get" role="search">
                    <input
                        class=css::searchInput
                        type="search"
                        name=QUERY_PARAM
                        value=query
                        placeholder="Search movies"
                        aria-label="Search movies"
                    />
                </form>
            </header>

            <main id={Region::HomeLayout.id()} class=css::layout style="display:none;">
                <p id={Region::HomeStatus.id()} class=css::status>"Loading..."</p>
                <div id={Region::Sections.id()} class=css::sections></div>
            </main>

            <main id={Region::SearchLayout.id()} class=css::layout style="display:none;">
                <p id={Region::SearchStatus.id()} class=css::status>"Searching..."</p>
                <section id={Region::SearchResultsBlock.id()} class=css::block>
                    <h2 class=css::heading>"Search Results"</h2>
                    <div id={Region::SearchResults.id()} class=classes::GRID></div>
                </section>
                <section id={Region::RecommendationsBlock.id()} class=css::block>
                    <h2 class=css::heading>"Recommended For You"</h2>
                    <div id={Region::Recommendations.id()} class=classes::GRID></div>
                </section>
            </main>
        </div>
    }
}
