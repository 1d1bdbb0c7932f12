use super::page_at;
use crate::config::{KeyMap, PagerConfig};
use crate::pagination::controller::{
    BlockReason, KeyEvent, KeyOutcome, NavigationController, NavigationOutcome, Navigator,
};
use url::Url;

/// Records every URL it was asked to open
#[derive(Default)]
struct RecordingNavigator {
    opened: Vec<Url>,
}

impl Navigator for RecordingNavigator {
    fn open_in_place(&mut self, url: &Url) {
        self.opened.push(url.clone());
    }
}

fn enabled_controller() -> NavigationController<RecordingNavigator> {
    let mut controller =
        NavigationController::new(RecordingNavigator::default(), PagerConfig::default());
    controller.enable_shortcuts(None);
    controller
}

const MIDDLE: &str = r#"
    <a class="pagination-prev" href="/s-wohnung-mieten/seite:2/c203"></a>
    <a class="pagination-next" href="/s-wohnung-mieten/seite:4/c203"></a>"#;

#[cfg(test)]
mod shortcut_tests {
    use super::*;

    #[test]
    fn test_disabled_controller_ignores_keys() {
        let page = page_at("/s-wohnung-mieten/seite:3/c203", MIDDLE);
        let mut controller =
            NavigationController::new(RecordingNavigator::default(), PagerConfig::default());
        assert_eq!(controller.handle_key(&page, &KeyEvent::new("d")), KeyOutcome::Ignored);
        assert!(controller.navigator().opened.is_empty());
    }

    #[test]
    fn test_enable_is_idempotent_but_updates_keys() {
        let mut controller = enabled_controller();
        controller.enable_shortcuts(None);
        assert!(controller.is_enabled());
        assert_eq!(controller.keys(), &KeyMap::new("a", "d"));

        controller.enable_shortcuts(Some(KeyMap::new("J", "K")));
        assert!(controller.is_enabled());
        assert_eq!(controller.keys(), &KeyMap::new("j", "k"));
    }

    #[test]
    fn test_disable_is_idempotent() {
        let page = page_at("/s-wohnung-mieten/seite:3/c203", MIDDLE);
        let mut controller = enabled_controller();
        controller.disable_shortcuts();
        controller.disable_shortcuts();
        assert!(!controller.is_enabled());
        assert_eq!(controller.handle_key(&page, &KeyEvent::new("d")), KeyOutcome::Ignored);
    }

    #[test]
    fn test_text_fields_and_composition_are_ignored() {
        let page = page_at("/s-wohnung-mieten/seite:3/c203", MIDDLE);
        let mut controller = enabled_controller();
        for event in [
            KeyEvent::new("d").on("INPUT"),
            KeyEvent::new("d").on("textarea"),
            KeyEvent::new("d").composing(),
            KeyEvent::new("x"),
        ] {
            assert_eq!(controller.handle_key(&page, &event), KeyOutcome::Ignored);
        }
        assert!(controller.navigator().opened.is_empty());
    }

    #[test]
    fn test_next_and_prev_keys_navigate() {
        let page = page_at("/s-wohnung-mieten/seite:3/c203", MIDDLE);
        let mut controller = enabled_controller();

        let outcome = controller.handle_key(&page, &KeyEvent::new("D"));
        assert!(matches!(outcome, KeyOutcome::Navigated(ref url) if url.path() == "/s-wohnung-mieten/seite:4/c203"));

        let outcome = controller.handle_key(&page, &KeyEvent::new("a").on("div"));
        assert!(matches!(outcome, KeyOutcome::Navigated(ref url) if url.path() == "/s-wohnung-mieten/seite:2/c203"));

        assert_eq!(controller.navigator().opened.len(), 2);
    }

    #[test]
    fn test_next_blocked_at_end() {
        let page = page_at(
            "/s-wohnung-mieten/seite:50/c203",
            r#"<a class="pagination-next" href="/s-wohnung-mieten/seite:51/c203"></a>"#,
        );
        let mut controller = enabled_controller();
        assert_eq!(
            controller.handle_key(&page, &KeyEvent::new("d")),
            KeyOutcome::Blocked(BlockReason::AtEnd)
        );
        assert!(controller.navigator().opened.is_empty());
    }

    #[test]
    fn test_prev_blocked_on_first_page() {
        let page = page_at(
            "/s-wohnung-mieten/c203",
            r#"<a class="pagination-next" href="/s-wohnung-mieten/seite:2/c203"></a>"#,
        );
        let mut controller = enabled_controller();
        assert_eq!(
            controller.handle_key(&page, &KeyEvent::new("a")),
            KeyOutcome::Blocked(BlockReason::NoTarget)
        );
        assert!(controller.navigator().opened.is_empty());
    }
}

#[cfg(test)]
mod navigate_tests {
    use super::*;

    #[test]
    fn test_navigate_absent_or_current_is_a_no_op() {
        let page = page_at("/s-wohnung-mieten/seite:3/c203", MIDDLE);
        let mut controller = enabled_controller();

        assert_eq!(controller.navigate(&page, None), NavigationOutcome::NotNavigated);

        let same = Url::parse("https://www.kleinanzeigen.de/s-wohnung-mieten/seite:3/c203/").unwrap();
        assert_eq!(controller.navigate(&page, Some(&same)), NavigationOutcome::NotNavigated);
        assert!(controller.navigator().opened.is_empty());
    }

    #[test]
    fn test_navigate_opens_exactly_once() {
        let page = page_at("/s-wohnung-mieten/seite:3/c203", MIDDLE);
        let mut controller = enabled_controller();
        let target = Url::parse("https://www.kleinanzeigen.de/s-wohnung-mieten/seite:9/c203").unwrap();

        let outcome = controller.navigate(&page, Some(&target));
        assert!(outcome.navigated());
        assert_eq!(controller.navigator().opened, vec![target]);
    }

    #[test]
    fn test_go_next_uses_status_target() {
        let page = page_at("/s-wohnung-mieten/seite:3/c203", MIDDLE);
        let mut controller = enabled_controller();
        let status = controller.status(&page);
        let outcome = controller.go_next(&page);
        assert_eq!(outcome, NavigationOutcome::Navigated(status.next_url.unwrap()));
    }
}
