use academy_lib::modules::content::{parse_page_name, render_icon, IconName, PageName};

#[test]
fn every_page_name_round_trips_through_schema() {
    for name in PageName::NAMES {
        let page = parse_page_name(name).unwrap();
        assert_eq!(page.as_str(), *name);
    }
}

#[test]
fn unknown_page_is_structured_error() {
    let errors = parse_page_name("dashboard").unwrap_err();
    let payload = serde_json::to_value(&errors).unwrap();
    assert_eq!(payload["error"], "Invalid page");
    assert!(payload["details"]["page"].is_array());
}

#[test]
fn icons_resolve_with_fallback() {
    assert_eq!(IconName::resolve("PlayCircle"), IconName::PlayCircle);
    assert_eq!(render_icon("play-circle").name, "play-circle");
    assert_eq!(render_icon("no-such-icon").name, "help-circle");
}
