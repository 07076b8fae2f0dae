//! End-to-end rendering tests through the public library API.

use tinge::console::{
    parse, write, write_line, CaptureConsole, Color, ConsoleSink, MarkupError, RenderError,
    DEFAULT_BACKGROUND, DEFAULT_FOREGROUND,
};

fn render(text: &str, args: &[&str]) -> CaptureConsole {
    let mut sink = CaptureConsole::new();
    write(&mut sink, text, args).unwrap();
    sink
}

// ============================================================================
// Plain Text
// ============================================================================

#[test]
fn tag_free_input_renders_unchanged() {
    let sink = render("just some text", &[]);
    assert_eq!(sink.text(), "just some text");
    assert_eq!(sink.runs().len(), 1);
    assert_eq!(sink.runs()[0].foreground, DEFAULT_FOREGROUND);
    assert_eq!(sink.runs()[0].background, DEFAULT_BACKGROUND);
}

#[test]
fn escaped_angle_brackets_render_literally() {
    let sink = render("a &lt;b&gt; c", &[]);
    assert_eq!(sink.text(), "a <b> c");
}

// ============================================================================
// Color Tags
// ============================================================================

#[test]
fn color_tags_scope_their_colors() {
    let sink = render("ok <red>bad</red> ok", &[]);
    let runs = sink.runs();
    assert_eq!(runs.len(), 3);
    assert_eq!(runs[1].text, "bad");
    assert_eq!(runs[1].foreground, Color::Red);
    assert_eq!(runs[0].foreground, runs[2].foreground);
    assert_eq!(sink.foreground(), DEFAULT_FOREGROUND);
}

#[test]
fn nested_fg_and_bg_tags_compose() {
    let sink = render(r#"<bg c="blue"><fg c="yellow">x</fg></bg>"#, &[]);
    assert_eq!(sink.runs().len(), 1);
    assert_eq!(sink.runs()[0].foreground, Color::Yellow);
    assert_eq!(sink.runs()[0].background, Color::Blue);
    assert_eq!(sink.foreground(), DEFAULT_FOREGROUND);
    assert_eq!(sink.background(), DEFAULT_BACKGROUND);
}

#[test]
fn every_alias_maps_to_its_full_name() {
    let pairs = [
        ("b", "blue"),
        ("r", "red"),
        ("n", "green"),
        ("w", "white"),
        ("y", "yellow"),
        ("m", "magenta"),
        ("c", "cyan"),
        ("g", "gray"),
        ("db", "darkblue"),
        ("dr", "darkred"),
        ("dn", "darkgreen"),
        ("dy", "darkyellow"),
        ("dm", "darkmagenta"),
        ("dc", "darkcyan"),
        ("dg", "darkgray"),
        ("k", "black"),
    ];
    for (alias, full) in pairs {
        let by_alias = render(&format!("<{alias}>x</{alias}>"), &[]);
        let by_name = render(&format!("<{full}>x</{full}>"), &[]);
        assert_eq!(by_alias.runs(), by_name.runs(), "alias {alias} != {full}");
    }
}

#[test]
fn unknown_color_and_tag_names_are_no_ops() {
    let sink = render(r#"<fg c="chartreuse"><blink>x</blink></fg>"#, &[]);
    assert_eq!(sink.text(), "x");
    assert_eq!(sink.runs()[0].foreground, DEFAULT_FOREGROUND);
}

// ============================================================================
// Placeholders
// ============================================================================

#[test]
fn placeholders_substitute_in_order() {
    let sink = render("Hello {0}, you have {1} items", &["Alice", "5"]);
    assert_eq!(sink.text(), "Hello Alice, you have 5 items");
}

#[test]
fn unmatched_placeholders_are_left_alone() {
    let sink = render("Hello {0} and {1}", &["Alice"]);
    assert_eq!(sink.text(), "Hello Alice and {1}");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn malformed_markup_is_a_parse_error() {
    let mut sink = CaptureConsole::new();
    let err = write(&mut sink, "<red>unterminated", &[]).unwrap_err();
    assert!(matches!(
        err,
        RenderError::Markup(MarkupError::UnclosedElement { .. })
    ));
    assert_eq!(sink.text(), "");
}

#[test]
fn parse_exposes_the_node_tree() {
    let nodes = parse("a<red>b</red>").unwrap();
    assert_eq!(nodes.len(), 2);
}

// ============================================================================
// Newline Variant
// ============================================================================

#[test]
fn write_line_terminates_the_line() {
    let mut sink = CaptureConsole::new();
    write_line(&mut sink, "<n>done</n>", &[]).unwrap();
    assert_eq!(sink.text(), "done\n");
}
