use std::sync::Arc;

use aid_core::model::ContentStore;
use services::ImageLoader;

pub trait UiApp: Send + Sync {
    fn content(&self) -> Arc<ContentStore>;
    fn image_loader(&self) -> Arc<ImageLoader>;

    /// Ends the application after the user confirmed exit.
    fn shutdown(&self);
}

#[derive(Clone)]
pub struct AppContext {
    content: Arc<ContentStore>,
    image_loader: Arc<ImageLoader>,
    app: Arc<dyn UiApp>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            content: app.content(),
            image_loader: app.image_loader(),
            app: Arc::clone(app),
        }
    }

    #[must_use]
    pub fn content(&self) -> Arc<ContentStore> {
        Arc::clone(&self.content)
    }

    #[must_use]
    pub fn image_loader(&self) -> Arc<ImageLoader> {
        Arc::clone(&self.image_loader)
    }

    pub fn shutdown(&self) {
        self.app.shutdown();
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
