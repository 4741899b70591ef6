#![allow(missing_docs)]

use core::fmt::Write as _;

use runebuilder::StringBuilder;

fn render_steps(initial: &str, steps: &[(&str, fn(&mut StringBuilder))]) -> String {
    let mut sb = StringBuilder::from_text(initial);
    let mut out = String::new();
    for (name, step) in steps {
        step(&mut sb);
        writeln!(out, "{name}: {sb:?}").unwrap();
    }
    out
}

#[test]
fn snapshot_edit_session() {
    let steps: [(&str, fn(&mut StringBuilder)); 5] = [
        ("insert", |sb| sb.insert(5, " my dear").unwrap()),
        ("replace", |sb| {
            sb.replace("dear", "dearest");
        }),
        ("remove", |sb| sb.remove(0, 6).unwrap()),
        ("reverse", StringBuilder::reverse),
        ("trim", |sb| sb.trim_matches(&['d', 'l'])),
    ];

    insta::assert_snapshot!(render_steps("Hello World", &steps), @r#"
    insert: StringBuilder { text: "Hello my dear World", len: 19, capacity: 22 }
    replace: StringBuilder { text: "Hello my dearest World", len: 22, capacity: 22 }
    remove: StringBuilder { text: "my dearest World", len: 16, capacity: 22 }
    reverse: StringBuilder { text: "dlroW tseraed ym", len: 16, capacity: 22 }
    trim: StringBuilder { text: "roW tseraed ym", len: 14, capacity: 22 }
    "#);
}

#[test]
fn snapshot_find_all() {
    let sb = StringBuilder::from_text("abababa öö ababa");
    insta::assert_debug_snapshot!(sb.find_all("aba"), @r"
    [
        0,
        2,
        4,
        11,
        13,
    ]
    ");
}
