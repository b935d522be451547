use super::*;

#[test]
fn every_link_stays_inside_its_section() {
    for section in Section::ALL {
        let items = nav_items(section);
        assert!(!items.is_empty());
        for item in items {
            assert_eq!(Section::for_path(item.href), Some(section), "{}", item.href);
        }
    }
}

#[test]
fn first_link_is_section_dashboard() {
    for section in Section::ALL {
        assert_eq!(nav_items(section)[0].href, section.root());
    }
}
