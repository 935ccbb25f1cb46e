use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use aid_core::catalog;
use aid_core::model::ContentStore;
use aid_core::wizard::Wizard;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{DisplaySize, ImageLoader};

use crate::context::{AppContext, UiApp, build_app_context};
use crate::views::Screens;

pub struct TestApp {
    content: Arc<ContentStore>,
    image_loader: Arc<ImageLoader>,
    shutdown_requested: AtomicBool,
}

impl TestApp {
    pub fn shutdown_requested(&self) -> bool {
        self.shutdown_requested.load(Ordering::Acquire)
    }
}

impl UiApp for TestApp {
    fn content(&self) -> Arc<ContentStore> {
        Arc::clone(&self.content)
    }

    fn image_loader(&self) -> Arc<ImageLoader> {
        Arc::clone(&self.image_loader)
    }

    fn shutdown(&self) {
        self.shutdown_requested.store(true, Ordering::Release);
    }
}

/// Live handles registered by the harness component on first render.
#[derive(Clone, Default)]
pub struct HarnessHandles {
    wizard: Rc<RefCell<Option<Signal<Wizard>>>>,
    ctx: Rc<RefCell<Option<AppContext>>>,
}

impl HarnessHandles {
    pub fn wizard(&self) -> Signal<Wizard> {
        (*self.wizard.borrow()).expect("wizard registered")
    }

    pub fn ctx(&self) -> AppContext {
        self.ctx.borrow().clone().expect("context registered")
    }
}

#[derive(Props, Clone)]
struct ScreensHarnessProps {
    app: Arc<TestApp>,
    wizard: Wizard,
    handles: HarnessHandles,
}

impl PartialEq for ScreensHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ScreensHarness(props: ScreensHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    let wizard = use_signal(|| props.wizard.clone());
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *props.handles.wizard.borrow_mut() = Some(wizard);
        *props.handles.ctx.borrow_mut() = Some(ctx);
    }
    rsx! { Screens { wizard } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub app: Arc<TestApp>,
    pub handles: HarnessHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Snapshot of the live wizard state.
    pub fn wizard(&self) -> Wizard {
        let wizard = self.handles.wizard();
        self.dom.in_runtime(|| wizard.peek().clone())
    }

    /// Runs `handler` the way an event handler would, then re-renders.
    pub fn act(&mut self, handler: impl FnOnce(Signal<Wizard>, &AppContext)) {
        let wizard = self.handles.wizard();
        let ctx = self.handles.ctx();
        self.dom.in_runtime(|| handler(wizard, &ctx));
        drive_dom(&mut self.dom);
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn content() -> Arc<ContentStore> {
    Arc::new(catalog::try_builtin().expect("catalog"))
}

/// Wizard that has already passed the welcome screen as "Amy".
pub fn wizard_at_menu() -> Wizard {
    let mut wizard = Wizard::new(content());
    wizard.submit_name("Amy").expect("name");
    wizard
}

/// Harness whose images are resolved under `asset_root`.
pub fn setup_view_harness(wizard: Wizard, asset_root: &Path) -> ViewHarness {
    let image_loader = ImageLoader::new(
        asset_root,
        DisplaySize {
            width: 400,
            height: 250,
        },
        1024 * 1024,
    );
    let app = Arc::new(TestApp {
        content: content(),
        image_loader: Arc::new(image_loader),
        shutdown_requested: AtomicBool::new(false),
    });

    let handles = HarnessHandles::default();
    let dom = VirtualDom::new_with_props(
        ScreensHarness,
        ScreensHarnessProps {
            app: Arc::clone(&app),
            wizard,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, app, handles }
}
