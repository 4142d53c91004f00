//! End-to-end embedding flow through the public API: analyze a script,
//! encode font bytes, embed them, and inspect the result.

use assfont_core::codec::{
    build_fonts_section, embed_fonts, inspect_embedded_fonts, uu_encode, WRAP_COLUMNS,
};
use assfont_core::FontUsageAnalyzer;

const SCRIPT: &str = "[Script Info]\n\
    Title: Embedding test\n\
    \n\
    [V4+ Styles]\n\
    Style: Default,Arial,20,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,0,0,0,0,100,100,0,0,1,2,0,2,10,10,10,1\n\
    \n\
    [Events]\n\
    Dialogue: 0,0:00:00.00,0:00:02.00,Default,,0,0,0,,Hello World\n";

#[test]
fn analyze_then_embed_then_inspect() {
    let usage = FontUsageAnalyzer::new(SCRIPT).analyze();
    assert!(usage.contains_key("Arial"));

    // stand-in for the external subsetter's output
    let subsetted = vec![0x42u8; 300];
    let embedded = embed_fonts(SCRIPT, [("Arial.subset.ttf", &subsetted[..])]);

    // host text is untouched outside the new section
    assert!(embedded.starts_with("[Script Info]\n"));
    assert!(embedded.contains("Dialogue: 0,0:00:00.00,0:00:02.00,Default,,0,0,0,,Hello World\n"));

    let infos = inspect_embedded_fonts(&embedded);
    assert_eq!(infos.len(), 1);
    assert_eq!(infos[0].name, "Arial.subset.ttf");
    assert_eq!(infos[0].estimated_size, 300);
}

#[test]
fn re_embedding_replaces_rather_than_accumulates() {
    let first = embed_fonts(SCRIPT, [("a.ttf", &[1u8, 2, 3][..])]);
    let second = embed_fonts(&first, [("b.ttf", &[4u8, 5, 6][..])]);

    assert_eq!(second.matches("[Fonts]").count(), 1);
    let infos = inspect_embedded_fonts(&second);
    assert_eq!(infos.len(), 1);
    assert_eq!(infos[0].name, "b.ttf");
}

#[test]
fn embedded_bodies_wrap_at_the_fixed_column() {
    let data = vec![0x13u8; 500];
    let section = build_fonts_section([("big.ttf", &data[..])]);

    let body: Vec<&str> = section
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with('[') && !line.starts_with("fontname:"))
        .collect();
    assert!(body.len() > 2);
    for line in &body[..body.len() - 1] {
        assert_eq!(line.len(), WRAP_COLUMNS);
    }
    assert!(body.last().expect("body lines").len() <= WRAP_COLUMNS);
}

#[test]
fn encoded_size_estimate_matches_for_whole_groups() {
    let data = vec![0xC3u8; 3 * 1024];
    let encoded = uu_encode(&data);
    let section = build_fonts_section([("f.ttf", &data[..])]);
    let embedded = embed_fonts(SCRIPT, [("f.ttf", &data[..])]);

    assert!(section.contains(&encoded));
    let infos = inspect_embedded_fonts(&embedded);
    assert_eq!(infos[0].estimated_size, data.len());
}

#[test]
fn multiple_fonts_embed_in_order() {
    let a = [1u8; 3];
    let b = [2u8; 6];
    let embedded = embed_fonts(SCRIPT, [("a.ttf", &a[..]), ("b.ttf", &b[..])]);

    let infos = inspect_embedded_fonts(&embedded);
    assert_eq!(infos.len(), 2);
    assert_eq!(infos[0].name, "a.ttf");
    assert_eq!(infos[0].estimated_size, 3);
    assert_eq!(infos[1].name, "b.ttf");
    assert_eq!(infos[1].estimated_size, 6);
}
