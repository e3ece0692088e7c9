use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Progress over the per-album track fetches.
///
/// The fetcher logs every request on stdout, so the bar is wiped before
/// each fetch and only drawn again once the album is done. The bar lives
/// in a [`MultiProgress`] because that is where indicatif exposes an
/// explicit clear.
pub struct AlbumProgress {
    multi: MultiProgress,
    bar: ProgressBar,
}

impl AlbumProgress {
    pub fn new(albums: u64) -> Self {
        Self::with_draw_target(albums, ProgressDrawTarget::stderr())
    }

    pub fn with_draw_target(albums: u64, target: ProgressDrawTarget) -> Self {
        let multi = MultiProgress::with_draw_target(target);
        let bar = multi.add(ProgressBar::new(albums));
        bar.set_style(
            ProgressStyle::with_template("{bar:40.blue} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Self { multi, bar }
    }

    /// Erases the bar from the terminal. Nothing is drawn again until
    /// [`album_done`](Self::album_done).
    pub fn before_fetch(&self) {
        // a failed clear only leaves a stale bar behind
        let _ = self.multi.clear();
    }

    pub fn album_done(&self, album_id: &str) {
        self.bar.inc(1);
        // set_message always redraws, inc may be rate limited
        self.bar.set_message(format!("Album {}", album_id));
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
