use jd_extract::markdown::{normalize_inline, render_fragment};
use jd_extract::Options;

fn md(html: &str) -> String {
    render_fragment(html, &Options::default())
}

#[test]
fn realistic_posting_fragment() {
    let html = r#"
        <h2>About the role</h2>
        <p>We're hiring a <strong>Staff Engineer</strong> to lead our <em>platform</em> team.</p>
        <h3>What you'll do</h3>
        <ul>
            <li>Design <code>gRPC</code> services</li>
            <li>Mentor engineers
                <ul>
                    <li>Weekly 1:1s</li>
                </ul>
            </li>
        </ul>
        <h3>Process</h3>
        <ol>
            <li>Intro call</li>
            <li>Technical interview</li>
            <li>Offer</li>
        </ol>
        <p>Questions? <a href="mailto:jobs@example.com">Email us</a>.</p>
    "#;

    let expected = "## About the role\n\n\
                    We're hiring a **Staff Engineer** to lead our _platform_ team.\n\n\
                    ### What you'll do\n\n\
                    - Design `gRPC` services\n\
                    - Mentor engineers\n  \
                    - Weekly 1:1s\n\n\
                    ### Process\n\n\
                    1. Intro call\n\
                    2. Technical interview\n\
                    3. Offer\n\n\
                    Questions? [Email us](mailto:jobs@example.com).";

    assert_eq!(md(html), expected);
}

#[test]
fn every_ordered_item_is_numbered_in_order() {
    let items: String = (1..=12).map(|i| format!("<li>Item {i}</li>")).collect();
    let markdown = md(&format!("<ol>{items}</ol>"));

    let lines: Vec<&str> = markdown.lines().collect();
    assert_eq!(lines.len(), 12);
    for (i, line) in lines.iter().enumerate() {
        assert_eq!(*line, format!("{}. Item {}", i + 1, i + 1));
    }
}

#[test]
fn ordered_list_is_unaffected_by_other_lists() {
    let html = "<ul><li>x<ol><li>inner</li></ol></li></ul><ol><li>a</li><li>b</li></ol>";
    assert_eq!(md(html), "- x\n  1. inner\n\n1. a\n2. b");
}

#[test]
fn list_items_only_direct_children() {
    let html = "<ul><li>One</li><p>Stray paragraph</p><li>Two</li></ul>";
    assert_eq!(md(html), "- One\n- Two");
}

#[test]
fn links_fall_back_to_href_and_drop_blank_hrefs() {
    assert_eq!(
        md(r#"<p><a href="https://jobs.example/apply"></a> or <a href="">nothing</a></p>"#),
        "[https://jobs.example/apply](https://jobs.example/apply) or nothing"
    );
}

#[test]
fn inline_wrappers_nest() {
    assert_eq!(
        md("<p><strong>Must have: <em>Rust</em></strong> and <u>Go</u><sup>1</sup></p>"),
        "**Must have: _Rust_** and Go1"
    );
}

#[test]
fn markdown_metacharacters_are_not_escaped() {
    assert_eq!(md("<p>Use * and _ freely, even # here</p>"), "Use * and _ freely, even # here");
}

#[test]
fn tables_use_first_row_width_for_the_separator() {
    let html = "<table><thead><tr><th>Perk</th><th>Detail</th></tr></thead>\
                <tbody><tr><td>PTO</td><td>Unlimited</td><td>extra</td></tr></tbody></table>";
    assert_eq!(
        md(html),
        "| Perk | Detail |\n| --- | --- |\n| PTO | Unlimited | extra |"
    );
}

#[test]
fn blockquote_with_nested_list() {
    let html = "<blockquote><p>Our values:</p><ul><li>Candor</li><li>Craft</li></ul></blockquote>";
    assert_eq!(md(html), "> Our values:\n> \n> - Candor\n> - Craft");
}

#[test]
fn whitespace_normalization_is_idempotent() {
    let samples = [
        "  plain  text ",
        "a\t\tb\r\n\r\n\r\n\r\nc",
        " line one \n   line two\n\n\n\n\nline three   ",
        "\n\n\n",
        "mixed \t \n \t spacing",
    ];

    for sample in samples {
        let once = normalize_inline(sample);
        assert_eq!(normalize_inline(&once), once, "not idempotent for {sample:?}");
    }
}

#[test]
fn entities_are_decoded_by_the_parser() {
    assert_eq!(md("<p>R&amp;D &lt;team&gt; &nbsp;caf&eacute;</p>"), "R&D <team> \u{a0}café");
}
