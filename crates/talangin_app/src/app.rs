//! Page runtime
//!
//! [`TalanginApp`] owns the host page and every behavior attached to it.
//! Hosts forward [`PageEvent`]s to [`TalanginApp::handle_event`] and call
//! [`TalanginApp::tick`] once per animation frame.

use talangin_content::{ContentStore, LanguageSwitcher, Translations};
use talangin_core::NodeId;
use talangin_motion::{MotionPreference, MotionSystem};
use talangin_platform::{EventResponse, Host, PageEvent};
use talangin_theme::{ColorScheme, ThemeController};

use crate::config::SiteConfig;
use crate::context::PageContext;
use crate::error::Result;
use crate::menu::{FocusTrap, MobileMenu};
use crate::nav::Navbar;
use crate::scroll::SmoothScroll;
use crate::sections::{LazyImages, SectionObserver};

/// Runtime version reported by the debug API
pub const VERSION: &str = "1.0.0";

pub struct TalanginApp<H: Host> {
    host: H,
    config: SiteConfig,
    context: PageContext,
    content: ContentStore,
    theme: ThemeController,
    language: LanguageSwitcher,
    menu: Option<MobileMenu>,
    smooth_scroll: SmoothScroll,
    sections: Option<SectionObserver>,
    navbar: Navbar,
    focus_trap: Option<FocusTrap>,
    lazy_images: LazyImages,
    motion: MotionSystem,
}

impl<H: Host> TalanginApp<H> {
    /// Attach every page behavior to `host`
    ///
    /// Only the bundled content and translations can fail to load; every
    /// behavior whose markup is missing is skipped.
    pub fn start(mut host: H, config: SiteConfig) -> Result<Self> {
        tracing::info!("Talangin: initializing");
        let content = ContentStore::bundled()?;
        let translations = Translations::bundled()?;
        let nav_config = config.navigation.clone();

        let theme = ThemeController::init(&mut host, config.theme.clone());
        let language = LanguageSwitcher::init(&mut host, translations, config.i18n.clone());
        let menu = MobileMenu::init(&host, nav_config.desktop_min_width);
        let reduced = MotionPreference::detect(&host).should_reduce_motion();
        let smooth_scroll = SmoothScroll::new(reduced, nav_config.fallback_nav_height);
        let mut sections = SectionObserver::init(&host);
        if let Some(observer) = sections.as_mut() {
            observer.update(&mut host);
        }
        let navbar = Navbar::init(&mut host, nav_config.scrolled_threshold);
        let focus_trap = FocusTrap::init(&host);
        let mut lazy_images = LazyImages::init(&host, nav_config.lazy_image_margin);
        lazy_images.update(&mut host);
        let motion = MotionSystem::init(&mut host, &config.motion);

        let mut context = PageContext::new();
        context.set_language(language.current());
        context.record_scroll(host.scroll_y());

        tracing::info!(
            "Talangin: ready (theme {}, language {}, menu {}, motion {})",
            theme.scheme(),
            language.current(),
            if menu.is_some() { "on" } else { "off" },
            if motion.is_fallback() {
                "fallback"
            } else if reduced {
                "reduced"
            } else {
                "full"
            }
        );

        Ok(Self {
            host,
            config,
            context,
            content,
            theme,
            language,
            menu,
            smooth_scroll,
            sections,
            navbar,
            focus_trap,
            lazy_images,
            motion,
        })
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Dispatch a host event
    pub fn handle_event(&mut self, event: PageEvent) -> EventResponse {
        match event {
            PageEvent::Load => {
                self.motion.refresh(&mut self.host);
                self.lazy_images.update(&mut self.host);
                EventResponse::Continue
            }
            PageEvent::Scroll => {
                self.context.record_scroll(self.host.scroll_y());
                self.context.request_navbar_frame();
                self.motion.on_scroll(&mut self.host);
                if let Some(sections) = self.sections.as_mut() {
                    sections.update(&mut self.host);
                }
                self.lazy_images.update(&mut self.host);
                EventResponse::Continue
            }
            PageEvent::Resized { width, .. } => {
                if let Some(menu) = &self.menu {
                    menu.on_resize(&mut self.host, width);
                }
                self.context.schedule_resize(self.config.resize_debounce_ms);
                EventResponse::Continue
            }
            PageEvent::Click { target } => self.handle_click(target),
            PageEvent::Key { target, event } => {
                if let Some(menu) = &self.menu {
                    menu.handle_key(&mut self.host, &event);
                }
                match &self.focus_trap {
                    Some(trap) => trap.handle_key(&mut self.host, target, &event),
                    None => EventResponse::Continue,
                }
            }
            PageEvent::PointerEnter { target } => {
                self.motion.pointer_enter(&mut self.host, target);
                EventResponse::Continue
            }
            PageEvent::PointerLeave { target } => {
                self.motion.pointer_leave(&mut self.host, target);
                EventResponse::Continue
            }
            PageEvent::ColorSchemeChanged { prefers_dark } => {
                self.theme.on_system_change(&mut self.host, prefers_dark);
                EventResponse::Continue
            }
            PageEvent::ScriptError { message } => {
                self.context.record_error();
                tracing::error!("[Talangin] Error: {}", message);
                EventResponse::Continue
            }
            PageEvent::UnhandledRejection { reason } => {
                self.context.record_error();
                tracing::error!("[Talangin] Unhandled Promise Rejection: {}", reason);
                EventResponse::Continue
            }
        }
    }

    fn handle_click(&mut self, target: NodeId) -> EventResponse {
        // Every click listener sees the click, like separate DOM listeners
        self.theme.handle_click(&mut self.host, target);
        if self.language.handle_click(&mut self.host, target) {
            self.context.set_language(self.language.current());
        }
        if let Some(menu) = &self.menu {
            menu.handle_click(&mut self.host, target);
        }
        self.smooth_scroll.handle_click(&mut self.host, target)
    }

    /// Advance the clock by one frame
    pub fn tick(&mut self, dt_ms: f32) {
        self.context.advance(dt_ms);
        if self.context.take_due_resize() {
            self.motion.refresh(&mut self.host);
        }
        if self.context.take_navbar_frame() {
            self.navbar.update(&mut self.host);
        }
        self.motion.tick(&mut self.host, dt_ms);
    }

    /// Whether the host should keep requesting frames
    pub fn needs_frame(&self) -> bool {
        self.motion.is_animating()
            || self.context.navbar_frame_pending()
            || self.context.resize_pending()
    }

    /// Disarm every scroll trigger
    pub fn teardown(&mut self) {
        self.motion.teardown();
        tracing::debug!("Talangin: torn down");
    }

    // =========================================================================
    // Debug API
    // =========================================================================

    pub fn version(&self) -> &'static str {
        VERSION
    }

    pub fn set_theme(&mut self, scheme: ColorScheme) {
        self.theme.set(&mut self.host, scheme);
    }

    /// Switch to a supported language; others are rejected unchanged
    pub fn set_language(&mut self, name: &str) -> Result<()> {
        self.language.set_language_named(&mut self.host, name)?;
        self.context.set_language(self.language.current());
        Ok(())
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut ContentStore {
        &mut self.content
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn context(&self) -> &PageContext {
        &self.context
    }

    pub fn theme(&self) -> &ThemeController {
        &self.theme
    }

    pub fn language(&self) -> &LanguageSwitcher {
        &self.language
    }

    pub fn menu(&self) -> Option<&MobileMenu> {
        self.menu.as_ref()
    }

    pub fn navbar(&self) -> &Navbar {
        &self.navbar
    }

    pub fn sections(&self) -> Option<&SectionObserver> {
        self.sections.as_ref()
    }

    pub fn lazy_images(&self) -> &LazyImages {
        &self.lazy_images
    }

    pub fn motion(&self) -> &MotionSystem {
        &self.motion
    }
}
