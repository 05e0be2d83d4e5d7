use mdstyle::markup::Element;
use mdstyle::{Document, HeadingLevel, ListItem, Row, Table, wrap_bold, wrap_red_text};
use pretty_assertions::assert_eq;

const CELL_STYLE: &str = "padding:6px 13px;border:1px solid #ddd;";
const STRIPE: &str = "background-color:#f8f8f8;";

fn cell_texts(row: &Element, tag: &str) -> Vec<String> {
    row.descendants_named(tag).iter().map(|c| c.text()).collect()
}

#[test]
fn single_row_table() {
    let mut doc = Document::new();
    doc.add_table(Table::new(["a", "b"]).row(Row::new().cell("a", 112).cell("b", 5463)));
    let root = doc.render().unwrap();

    let thead = root.descendants_named("thead");
    assert_eq!(thead.len(), 1);
    let header_rows = thead[0].descendants_named("tr");
    assert_eq!(header_rows.len(), 1);
    assert_eq!(cell_texts(header_rows[0], "th"), ["a", "b"]);

    let body_rows = root.descendants_named("tbody")[0].descendants_named("tr");
    assert_eq!(body_rows.len(), 1);
    assert_eq!(cell_texts(body_rows[0], "td"), ["112", "5463"]);

    for th in root.descendants_named("th") {
        assert_eq!(th.style(), format!("{CELL_STYLE}font-weight:bold;"));
    }
    for td in root.descendants_named("td") {
        assert_eq!(td.style(), CELL_STYLE);
    }
}

#[test]
fn missing_cells_render_placeholder() {
    let mut doc = Document::new();
    doc.add_table(
        Table::new(["a", "b"])
            .row(Row::new().cell("a", 1))
            .row(Row::new().cell("b", 2)),
    );
    let root = doc.render().unwrap();
    let rows = root.descendants_named("tbody")[0].descendants_named("tr");
    assert_eq!(rows.len(), 2);
    // the parser trims cell whitespace, leaving the placeholder cell empty
    assert_eq!(cell_texts(rows[0], "td")[0], "1");
    assert_eq!(cell_texts(rows[0], "td")[1].trim(), "");
    assert_eq!(cell_texts(rows[1], "td")[0].trim(), "");
    assert_eq!(cell_texts(rows[1], "td")[1], "2");
}

#[test]
fn zebra_striping() {
    let mut doc = Document::new();
    doc.add_table(Table::new(["n"]).rows((0..4).map(|i| Row::new().cell("n", i))));
    let root = doc.render().unwrap();
    let rows = root.descendants_named("tbody")[0].descendants_named("tr");
    let striped: Vec<bool> = rows.iter().map(|tr| tr.style().contains(STRIPE)).collect();
    assert_eq!(striped, [true, false, true, false]);
}

#[test]
fn nested_list() {
    let mut doc = Document::new();
    doc.add_list(vec![
        ListItem::from("x"),
        ListItem::group("y", [ListItem::from("z")]),
    ]);
    assert_eq!(doc.markdown(), "* x\n* y\n    * z\n");

    let root = doc.render().unwrap();
    let lists = root.descendants_named("ul");
    assert_eq!(lists.len(), 2);
    let outer: Vec<String> = lists[0]
        .children()
        .iter()
        .filter_map(|node| match node {
            mdstyle::markup::Node::Element(li) if li.name() == "li" => Some(li.text()),
            _ => None,
        })
        .collect();
    assert_eq!(outer.len(), 2);
    assert_eq!(outer[0].trim(), "x");
    assert!(outer[1].trim().starts_with('y'));
    assert_eq!(cell_texts(lists[1], "li"), ["z"]);
    for ul in lists {
        assert!(ul.style().ends_with("padding-left:2em;"));
    }
}

#[test]
fn container_and_headings() {
    let mut doc = Document::new();
    doc.add_heading(HeadingLevel::H1, "one")
        .add_heading(HeadingLevel::H3, "three");
    let root = doc.render().unwrap();

    assert_eq!(root.name(), "div");
    assert_eq!(root.attr("class"), Some("markdown-body"));
    assert!(root.style().starts_with("font-family:\"Helvetica Neue\""));
    assert!(root.style().ends_with("margin:auto;color:#333;"));

    let h1 = root.descendants_named("h1")[0];
    assert_eq!(
        h1.style(),
        "margin-top:1em;margin-bottom:16px;font-weight:bold;line-height:1.4;\
         padding-bottom:0.3em;font-size:2.25em;line-height:1.2;border-bottom:1px solid #eee;"
    );
    let h3 = root.descendants_named("h3")[0];
    assert!(h3.style().ends_with("font-size:1.5em;line-height:1.43;"));
}

#[test]
fn inline_helpers_render() {
    let mut doc = Document::new();
    doc.add_text(format!("{} and {}", wrap_bold("strong"), wrap_red_text("alert")));
    let root = doc.render().unwrap();

    let strong = root.descendants_named("strong");
    assert_eq!(strong[0].text(), "strong");
    let span = root.descendants_named("span")[0];
    assert_eq!(span.attr("class"), Some("red"));
    assert_eq!(span.text(), "alert");
    assert!(span.style().starts_with("color:#f33;"));
}

#[test]
fn identical_builders_render_identically() {
    let build = || {
        let mut doc = Document::new();
        doc.add_heading(HeadingLevel::H2, "t")
            .add_text("p")
            .add_table(Table::new(["a"]).align_codes(["c"]).row(Row::new().cell("a", 1)))
            .add_list(["i"]);
        doc
    };
    assert_eq!(
        build().render().unwrap().to_string(),
        build().render().unwrap().to_string()
    );
}
