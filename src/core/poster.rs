//! Poster verification.
//!
//! Cards are rendered with both the poster image and the placeholder hidden.
//! After a batch of cards is inserted, each card is resolved to exactly one
//! of the two: cards without a poster URL show the placeholder at once, the
//! rest are probed in the background and reveal the poster on success or
//! the placeholder on failure.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use crate::core::error::PosterError;

/// A detached background task on the single UI thread.
pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

/// Checks whether an image URL loads.
pub trait ImageProbe {
    async fn load(&self, url: &str) -> Result<(), PosterError>;
}

/// A rendered movie card as seen by the verifier.
pub trait PosterCard {
    /// The card's `data-poster` value.
    fn poster_url(&self) -> Option<String>;
    /// Point the poster image at `url` and show it.
    fn reveal_poster(&self, url: &str);
    /// Show the placeholder.
    fn reveal_placeholder(&self);
}

/// Resolve cards without a poster immediately and return one probe task per
/// remaining card. The caller detaches the tasks; nothing awaits them.
pub fn verify<C, P>(cards: Vec<C>, probe: &Rc<P>) -> Vec<LocalTask>
where
    C: PosterCard + 'static,
    P: ImageProbe + 'static,
{
    cards
        .into_iter()
        .filter_map(|card| {
            let Some(url) = card.poster_url().filter(|url| !url.trim().is_empty()) else {
                card.reveal_placeholder();
                return None;
            };

            let probe = Rc::clone(probe);
            let task: LocalTask = Box::pin(async move {
                match probe.load(&url).await {
                    Ok(()) => card.reveal_poster(&url),
                    Err(_) => card.reveal_placeholder(),
                }
            });
            Some(task)
        })
        .collect()
}
