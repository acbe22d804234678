use async_trait::async_trait;

/// Host capabilities outside the view: timers, clipboard and navigation.
#[async_trait(?Send)]
pub trait Platform {
    async fn sleep_ms(&self, duration_ms: u32);

    /// Write text to the system clipboard.
    ///
    /// # Errors
    ///
    /// Returns the host's error detail when the write is refused.
    async fn copy_text(&self, text: &str) -> Result<(), String>;

    /// Leave the page for `url`.
    fn navigate(&self, url: &str);
}
