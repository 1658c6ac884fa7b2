// Invariants of the bundled translation table.

use std::collections::HashSet;

use portfolio_core::{Dictionary, Lang};

#[test]
fn bundled_dictionary_parses() {
    let dict = Dictionary::bundled().expect("translations.json must parse");
    assert!(!dict.is_empty());
    assert_eq!(dict.text(Lang::Zh, "nav_home"), Some("首頁"));
    assert_eq!(dict.text(Lang::En, "nav_home"), Some("Home"));
}

#[test]
fn both_languages_define_the_same_keys() {
    let dict = Dictionary::bundled().unwrap();
    let zh: HashSet<&str> = dict.keys(Lang::Zh).collect();
    let en: HashSet<&str> = dict.keys(Lang::En).collect();
    let only_zh: Vec<_> = zh.difference(&en).collect();
    let only_en: Vec<_> = en.difference(&zh).collect();
    assert!(only_zh.is_empty(), "keys missing in en: {only_zh:?}");
    assert!(only_en.is_empty(), "keys missing in zh: {only_en:?}");
}

#[test]
fn image_lists_have_sources_and_captions() {
    let dict = Dictionary::bundled().unwrap();
    for lang in Lang::ALL {
        let lists: Vec<&str> = dict
            .keys(lang)
            .filter(|k| dict.images(lang, k).is_some())
            .collect();
        assert!(!lists.is_empty(), "no image lists for {}", lang.code());
        for key in lists {
            for img in dict.images(lang, key).unwrap() {
                assert!(!img.src.is_empty(), "empty src in {key}");
                assert!(!img.caption.is_empty(), "empty caption in {key}");
            }
        }
    }
}

#[test]
fn about_title_is_translated() {
    let dict = Dictionary::bundled().unwrap();
    assert_eq!(dict.text(Lang::En, "about_btn"), Some("About Me"));
    assert_eq!(dict.text(Lang::Zh, "about_btn"), Some("關於我"));
}
