//! End-to-end page scenarios over the headless host

use talangin_app::{SiteConfig, TalanginApp};
use talangin_content::Language;
use talangin_core::{NodeId, PropertySet, Rect, Size};
use talangin_motion::{EntranceState, PlaybackMode};
use talangin_platform::{
    element, Capabilities, Document, EventResponse, HeadlessPage, Key, KeyboardEvent, MediaQuery,
    PageEvent, PreferenceStore, ScrollBehavior, Selector,
};
use talangin_theme::ColorScheme;

const VIEWPORT: Size = Size::new(1280.0, 800.0);

struct Landing {
    page: HeadlessPage,
    nav: NodeId,
    nav_features: NodeId,
    theme_toggle: NodeId,
    lang_id: NodeId,
    menu_toggle: NodeId,
    menu: NodeId,
    hero_title: NodeId,
    badge: NodeId,
    card: NodeId,
    lazy: NodeId,
}

/// Route runtime logs through the test harness; `RUST_LOG=debug` shows them
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn landing() -> Landing {
    init_tracing();
    let mut page = HeadlessPage::new(VIEWPORT);
    let body = page.body();

    let nav = page.append(body, element("nav").class("nav").layout(Rect::new(0.0, 0.0, 1280.0, 64.0)));
    let nav_features = page.append(nav, element("a").class("nav__link").attr("href", "#features"));
    page.append(nav, element("a").class("nav__link").attr("href", "#how-it-works"));
    let theme_toggle = page.append(nav, element("button").id("theme-toggle"));
    page.append(nav, element("button").class("nav__lang-btn").attr("data-lang", "en"));
    let lang_id = page.append(nav, element("button").class("nav__lang-btn").attr("data-lang", "id"));
    let menu_toggle = page.append(
        nav,
        element("button").class("nav__mobile-toggle").attr("aria-expanded", "false"),
    );

    let menu = page.append(body, element("div").class("mobile-menu").attr("aria-hidden", "true"));
    page.append(menu, element("a").class("mobile-menu__link").attr("href", "#features"));
    page.append(menu, element("a").class("mobile-menu__link").attr("href", "#download"));

    let hero = page.append(body, element("section").class("hero").id("hero").at(0.0, 800.0));
    let badge = page.append(
        hero,
        element("span")
            .attr("data-i18n", "hero.badge")
            .attr("data-animate", "fade-down")
            .text("Now available on iOS")
            .at(120.0, 30.0),
    );
    let hero_title = page.append(
        hero,
        element("h1").attr("data-animate", "scale-up").attr("data-delay", "0").at(200.0, 120.0),
    );

    let features = page.append(body, element("section").id("features").at(800.0, 1200.0));
    let card = page.append(
        features,
        element("div")
            .attr("data-animate", "fade-up")
            .attr("data-delay", "0.2")
            .at(2000.0, 200.0),
    );
    let lazy = page.append(features, element("img").attr("data-src", "mockup.png").at(1900.0, 300.0));
    page.append(body, element("section").id("how-it-works").at(2000.0, 1000.0));

    Landing {
        page,
        nav,
        nav_features,
        theme_toggle,
        lang_id,
        menu_toggle,
        menu,
        hero_title,
        badge,
        card,
        lazy,
    }
}

fn run(app: &mut TalanginApp<HeadlessPage>, total_ms: f32) {
    let mut elapsed = 0.0;
    while elapsed < total_ms {
        app.tick(16.0);
        elapsed += 16.0;
    }
}

fn scroll_to(app: &mut TalanginApp<HeadlessPage>, y: f32) {
    app.host_mut().set_scroll_y(y);
    app.handle_event(PageEvent::Scroll);
}

// ============================================================================
// Entrance scenarios
// ============================================================================

#[test]
fn fade_up_waits_for_threshold_then_animates_once() {
    let l = landing();
    let mut app = TalanginApp::start(l.page, SiteConfig::default()).unwrap();

    let record = app.motion().entrance().record(l.card).unwrap();
    assert_eq!(record.mode, PlaybackMode::ViewportGated);
    assert_eq!(record.delay_ms, 200);
    assert_eq!(app.host().visual(l.card), PropertySet::new().opacity(0.0).y(30.0));

    // 85% line: 2000 - 0.85 * 800 = 1320
    scroll_to(&mut app, 1300.0);
    run(&mut app, 1000.0);
    assert_eq!(
        app.motion().entrance().state(l.card),
        Some(EntranceState::PendingTrigger)
    );

    scroll_to(&mut app, 1325.0);
    assert_eq!(app.motion().entrance().state(l.card), Some(EntranceState::Animating));

    // Still inside the 200ms delay
    app.tick(150.0);
    assert_eq!(app.host().visual(l.card).opacity, Some(0.0));
    assert!(!app.host().has_class(l.card, "animated"));

    app.tick(400.0);
    assert!(!app.host().has_class(l.card, "animated"));
    app.tick(300.0);
    assert!(app.host().has_class(l.card, "animated"));
    assert_eq!(app.host().visual(l.card), PropertySet::new().opacity(1.0).y(0.0));

    // Scrolling back and past again does not replay
    scroll_to(&mut app, 0.0);
    scroll_to(&mut app, 1500.0);
    assert_eq!(app.motion().entrance().state(l.card), Some(EntranceState::Animated));
    assert_eq!(app.host().visual(l.card).opacity, Some(1.0));
}

#[test]
fn hero_scale_up_starts_after_base_delay() {
    let l = landing();
    let mut app = TalanginApp::start(l.page, SiteConfig::default()).unwrap();

    assert_eq!(
        app.motion().entrance().record(l.hero_title).map(|r| r.mode),
        Some(PlaybackMode::Immediate)
    );
    assert_eq!(
        app.host().visual(l.hero_title),
        PropertySet::new().opacity(0.0).scale(0.9)
    );

    app.tick(290.0);
    assert_eq!(app.host().visual(l.hero_title).opacity, Some(0.0));

    app.tick(20.0);
    let opacity = app.host().visual(l.hero_title).opacity.unwrap();
    assert!(opacity > 0.0 && opacity < 1.0);

    // 300ms delay + 800ms slow duration
    app.tick(780.0);
    assert!(!app.host().has_class(l.hero_title, "animated"));
    app.tick(20.0);
    assert!(app.host().has_class(l.hero_title, "animated"));
    assert_eq!(
        app.host().visual(l.hero_title),
        PropertySet::new().opacity(1.0).scale(1.0)
    );
}

#[test]
fn hero_declared_delay_adds_to_base_delay() {
    let mut l = landing();
    let hero = l.page.query(&Selector::class("hero")).unwrap();
    let cta = l.page.append(
        hero,
        element("a").attr("data-animate", "fade-up").attr("data-delay", "0.5").at(400.0, 48.0),
    );
    let mut app = TalanginApp::start(l.page, SiteConfig::default()).unwrap();

    // 500ms declared + 300ms base
    app.tick(799.0);
    assert_eq!(app.host().visual(cta).opacity, Some(0.0));
    app.tick(2.0);
    assert!(app.host().visual(cta).opacity.unwrap() > 0.0);
}

#[test]
fn reduced_motion_shows_everything_immediately() {
    let mut l = landing();
    let body = l.page.body();
    let blur = l.page.append(body, element("div").attr("data-animate", "blur-in").at(3000.0, 100.0));
    l.page.set_media(MediaQuery::PrefersReducedMotion, true);

    let app = TalanginApp::start(l.page, SiteConfig::default()).unwrap();

    for node in [blur, l.card, l.hero_title, l.badge] {
        let visual = app.host().visual(node);
        assert_eq!(visual.opacity, Some(1.0));
        assert_eq!(visual.blur, Some(0.0));
        assert!(visual.is_visible_at_rest());
        assert!(app.host().has_class(node, "animated"));
        assert_eq!(
            app.motion().entrance().record(node).map(|r| r.mode),
            Some(PlaybackMode::ForcedVisible)
        );
    }
    let engine = app.motion().engine().unwrap();
    assert_eq!(engine.pending_triggers(), 0);
    assert_eq!(engine.active_tweens(), 0);
    assert!(!app.needs_frame());
}

#[test]
fn missing_capabilities_match_reduced_motion() {
    let mut reduced = landing();
    reduced.page.set_media(MediaQuery::PrefersReducedMotion, true);
    let reduced_app = TalanginApp::start(reduced.page, SiteConfig::default()).unwrap();

    let mut fallback = landing();
    fallback.page.set_capabilities(Capabilities::none());
    let fallback_app = TalanginApp::start(fallback.page, SiteConfig::default()).unwrap();

    assert!(fallback_app.motion().is_fallback());
    assert!(!reduced_app.motion().is_fallback());
    for (a, b) in [
        (reduced.card, fallback.card),
        (reduced.hero_title, fallback.hero_title),
        (reduced.badge, fallback.badge),
    ] {
        assert_eq!(reduced_app.host().visual(a), fallback_app.host().visual(b));
        assert_eq!(
            reduced_app.host().has_class(a, "animated"),
            fallback_app.host().has_class(b, "animated")
        );
    }
}

#[test]
fn teardown_disarms_pending_triggers() {
    let l = landing();
    let mut app = TalanginApp::start(l.page, SiteConfig::default()).unwrap();
    app.teardown();
    assert_eq!(app.motion().engine().unwrap().pending_triggers(), 0);

    scroll_to(&mut app, 1500.0);
    run(&mut app, 2000.0);
    assert_eq!(app.host().visual(l.card).opacity, Some(0.0));
    assert!(!app.host().has_class(l.card, "animated"));
}

#[test]
fn resize_refresh_is_debounced() {
    let l = landing();
    let mut app = TalanginApp::start(l.page, SiteConfig::default()).unwrap();

    // Layout shift moves the card up; the trigger line follows after refresh
    app.host_mut().set_layout(l.card, Rect::new(0.0, 1000.0, 1280.0, 200.0));
    app.handle_event(PageEvent::Resized {
        width: 1280.0,
        height: 800.0,
    });
    app.tick(100.0);
    app.handle_event(PageEvent::Resized {
        width: 1280.0,
        height: 800.0,
    });
    app.tick(200.0);
    assert!(app.context().resize_pending());

    scroll_to(&mut app, 400.0);
    assert_eq!(
        app.motion().entrance().state(l.card),
        Some(EntranceState::PendingTrigger)
    );

    app.tick(60.0);
    assert!(!app.context().resize_pending());
    // 1000 - 680 = 320, already passed at 400
    assert_eq!(app.motion().entrance().state(l.card), Some(EntranceState::Animating));
}

// ============================================================================
// Page behaviors
// ============================================================================

#[test]
fn navbar_updates_on_next_frame() {
    let l = landing();
    let mut app = TalanginApp::start(l.page, SiteConfig::default()).unwrap();
    assert!(!app.host().has_class(l.nav, "nav--scrolled"));

    scroll_to(&mut app, 120.0);
    assert_eq!(app.context().scroll_y(), 120.0);
    assert!(!app.host().has_class(l.nav, "nav--scrolled"));
    assert!(app.needs_frame());
    app.tick(16.0);
    assert!(app.host().has_class(l.nav, "nav--scrolled"));
}

#[test]
fn theme_and_language_persist() {
    let mut l = landing();
    l.page.set_media(MediaQuery::PrefersDarkScheme, true);
    let mut app = TalanginApp::start(l.page, SiteConfig::default()).unwrap();
    assert_eq!(app.theme().scheme(), ColorScheme::Dark);

    app.handle_event(PageEvent::Click { target: l.theme_toggle });
    assert_eq!(app.theme().scheme(), ColorScheme::Light);
    assert_eq!(app.host().get_preference("talangin-theme").as_deref(), Some("light"));

    app.handle_event(PageEvent::Click { target: l.lang_id });
    assert_eq!(app.host().text(l.badge), Some("Tersedia di iOS"));
    assert_eq!(app.host().get_preference("talangin-lang").as_deref(), Some("id"));
    assert_eq!(app.context().language(), Language::Id);

    // System changes no longer apply once a theme was picked
    app.handle_event(PageEvent::ColorSchemeChanged { prefers_dark: true });
    assert_eq!(app.theme().scheme(), ColorScheme::Light);
}

#[test]
fn menu_link_closes_menu_and_scrolls() {
    let l = landing();
    let mut app = TalanginApp::start(l.page, SiteConfig::default()).unwrap();

    app.handle_event(PageEvent::Click { target: l.menu_toggle });
    assert_eq!(app.host().attribute(l.menu, "aria-hidden").as_deref(), Some("false"));

    let link = app.host().query_within(l.menu, &Selector::class("mobile-menu__link"))[0];
    let response = app.handle_event(PageEvent::Click { target: link });
    assert_eq!(response, EventResponse::PreventDefault);
    assert_eq!(app.host().attribute(l.menu, "aria-hidden").as_deref(), Some("true"));
    // Features at 800, nav is 64 tall
    assert_eq!(app.host().scroll_log(), &[(736.0, ScrollBehavior::Smooth)]);
    assert_eq!(app.host().history(), &["#features".to_string()]);
}

#[test]
fn escape_closes_menu() {
    let l = landing();
    let mut app = TalanginApp::start(l.page, SiteConfig::default()).unwrap();
    app.handle_event(PageEvent::Click { target: l.menu_toggle });

    app.handle_event(PageEvent::Key {
        target: None,
        event: KeyboardEvent::pressed(Key::Escape),
    });
    assert!(!app.menu().unwrap().is_open(app.host()));
    assert_eq!(app.host().active_element(), Some(l.menu_toggle));
}

#[test]
fn section_highlight_and_lazy_images_follow_scroll() {
    let l = landing();
    let mut app = TalanginApp::start(l.page, SiteConfig::default()).unwrap();
    assert!(!app.host().has_class(l.nav_features, "nav__link--active"));
    assert_eq!(app.host().attribute(l.lazy, "src"), None);

    scroll_to(&mut app, 1100.0);
    assert!(app.host().has_class(l.nav_features, "nav__link--active"));
    assert_eq!(app.host().attribute(l.lazy, "src").as_deref(), Some("mockup.png"));
    assert_eq!(app.lazy_images().pending(), 0);
}

#[test]
fn host_errors_are_counted() {
    let l = landing();
    let mut app = TalanginApp::start(l.page, SiteConfig::default()).unwrap();
    app.handle_event(PageEvent::ScriptError {
        message: "boom".to_string(),
    });
    app.handle_event(PageEvent::UnhandledRejection {
        reason: "nope".to_string(),
    });
    assert_eq!(app.context().errors_reported(), 2);
}

#[test]
fn debug_api() {
    let l = landing();
    let mut app = TalanginApp::start(l.page, SiteConfig::default()).unwrap();
    assert_eq!(app.version(), "1.0.0");

    app.set_theme(ColorScheme::Dark);
    assert_eq!(
        app.host().attribute(app.host().root(), "data-theme").as_deref(),
        Some("dark")
    );

    assert!(app.set_language("fr").is_err());
    assert_eq!(app.context().language(), Language::En);
    app.set_language("id").unwrap();
    assert_eq!(app.host().attribute(app.host().root(), "lang").as_deref(), Some("id"));

    assert_eq!(app.content().get_all_content().site.name, "Talangin");
}
