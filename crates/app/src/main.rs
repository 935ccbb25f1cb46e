use std::path::Path;
use std::sync::Arc;

use aid_core::model::ContentStore;
use dioxus::LaunchBuilder;
use dioxus::desktop::tao::dpi::LogicalSize;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppConfig, CONFIG_FILE_NAME, ImageLoader, load_content_store};
use ui::{App, UiApp, build_app_context};

struct DesktopApp {
    content: Arc<ContentStore>,
    image_loader: Arc<ImageLoader>,
}

impl UiApp for DesktopApp {
    fn content(&self) -> Arc<ContentStore> {
        Arc::clone(&self.content)
    }

    fn image_loader(&self) -> Arc<ImageLoader> {
        Arc::clone(&self.image_loader)
    }

    fn shutdown(&self) {
        tracing::info!("closing window");
        dioxus::desktop::window().close();
    }
}

fn init_logging(config: &AppConfig) {
    tracing_subscriber::fmt()
        .with_max_level(config.log_level.as_tracing())
        .with_target(false)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load_or_default(Path::new(CONFIG_FILE_NAME))?;
    init_logging(&config);

    let content = Arc::new(load_content_store(&config)?);
    tracing::info!(topics = content.len(), "content ready");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        content,
        image_loader: Arc::new(ImageLoader::from_config(&config)),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    // Explicitly disable it so the app doesn't behave like a modal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(config.window_title.as_str())
            .with_inner_size(LogicalSize::new(
                f64::from(config.window_width),
                f64::from(config.window_height),
            ))
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
