//! Movie card and section markup.
//!
//! Rendering is pure: the same movie always produces the same markup, and a
//! movie with every field missing still renders. Posters are not loaded
//! here; the card only records its poster URL in `data-poster` and starts
//! with both the poster and the placeholder hidden (see [`super::poster`]).

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::config::{CardConfig, Placeholder, classes};
use crate::models::Movie;

pub const UNTITLED: &str = "Untitled";
pub const NO_OVERVIEW: &str = "No overview available.";
pub const NO_RATING: &str = "N/A";
pub const NO_YEAR: &str = "----";

/// Renders movie cards according to [`CardConfig`].
#[derive(Clone, Debug, PartialEq)]
pub struct CardRenderer {
    overview_chars: usize,
    placeholder: Placeholder,
}

impl CardRenderer {
    pub fn new(config: &CardConfig) -> Self {
        Self {
            overview_chars: config.overview_chars,
            placeholder: config.placeholder.clone(),
        }
    }

    /// Render one movie card.
    pub fn render(&self, movie: &Movie) -> String {
        let title = movie.title().unwrap_or(UNTITLED);
        let overview = movie
            .overview()
            .map(|o| format!("{}...", o.chars().take(self.overview_chars).collect::<String>()))
            .unwrap_or_else(|| NO_OVERVIEW.to_string());
        let rating = movie
            .rating()
            .map(|r| r.to_string())
            .unwrap_or_else(|| NO_RATING.to_string());
        let year = movie
            .year()
            .map(|y| y.to_string())
            .unwrap_or_else(|| NO_YEAR.to_string());

        format!(
            concat!(
                r#"<div class="{card} hover-card" data-poster="{poster_url}">"#,
                r#"<div class="{wrapper}">"#,
                r#"<img class="{poster}" alt="{title_attr}" style="display:none;">"#,
                "{placeholder}",
                "</div>",
                r#"<div class="{card_title}">{title}</div>"#,
                r#"<div class="{hover}">"#,
                "<h3>{title}</h3>",
                r#"<p class="{overview_class}">{overview}</p>"#,
                r#"<span class="{meta}">⭐ {rating} | 🎬 {year} | 👍 {votes}</span>"#,
                "</div>",
                "</div>"
            ),
            card = classes::CARD,
            poster_url = attr(movie.poster().unwrap_or("")),
            wrapper = classes::POSTER_WRAPPER,
            poster = classes::POSTER,
            title_attr = attr(title),
            placeholder = self.placeholder_markup(),
            card_title = classes::CARD_TITLE,
            title = text(title),
            hover = classes::HOVER_INFO,
            overview_class = classes::OVERVIEW,
            overview = text(&overview),
            meta = classes::META,
            rating = text(&rating),
            year = text(&year),
            votes = movie.votes(),
        )
    }

    /// Render a list of cards back to back.
    pub fn render_all(&self, movies: &[Movie]) -> String {
        movies.iter().fold(String::new(), |mut out, movie| {
            out.push_str(&self.render(movie));
            out
        })
    }

    fn placeholder_markup(&self) -> String {
        match &self.placeholder {
            Placeholder::Image { src } => format!(
                r#"<img class="{}" src="{}" alt="" style="display:none;">"#,
                classes::PLACEHOLDER,
                attr(src)
            ),
            Placeholder::Text { label } => format!(
                r#"<div class="{}" style="display:none;">{}</div>"#,
                classes::PLACEHOLDER,
                text(label)
            ),
        }
    }
}

/// Render a section block with a heading and an empty grid to fill later.
pub fn render_section(grid_id: &str, title: &str) -> String {
    format!(
        r#"<div class="{}"><h2 class="{}">{}</h2><div id="{}" class="{}"></div></div>"#,
        classes::SECTION,
        classes::SECTION_TITLE,
        text(title),
        attr(grid_id),
        classes::GRID
    )
}

/// Render an inline notice shown inside a grid.
pub fn render_notice(message: &str) -> String {
    format!(r#"<p class="{}">{}</p>"#, classes::NOTICE, text(message))
}
