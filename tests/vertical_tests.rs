use html_table::{item_key_value, value, HtmlTable, TableConfig, Value, VerticalTable};

fn lookup(item: &Value, column: &str, _index: usize) -> String {
    item_key_value(item, column)
}

fn id_name_config() -> TableConfig {
    TableConfig::new()
        .with_items(vec![
            value!({ "id": 1, "name": "A" }),
            value!({ "id": 2, "name": "B" }),
        ])
        .with_columns([("id", "ID"), ("name", "Name")])
}

#[test]
fn test_column_oriented_end_to_end() {
    let html = VerticalTable::html(
        id_name_config()
            .with_callback("id", lookup)
            .with_callback("name", lookup),
    );

    assert_eq!(
        html,
        "<table><tbody>\
         <tr><th>ID</th><td>1</td><td>2</td></tr>\
         <tr><th>Name</th><td>A</td><td>B</td></tr>\
         </tbody></table>"
    );
}

#[test]
fn test_missing_callback_renders_empty_cells() {
    let html = VerticalTable::html(id_name_config().with_callback("id", lookup));
    assert!(html.contains("<tr><th>Name</th><td></td><td></td></tr>"));
}

#[test]
fn test_item_index_reaches_callbacks() {
    let html = VerticalTable::html(
        id_name_config()
            .with_column("name", "")
            .with_callback("id", |item, column, index| {
                format!("#{}={}", index, item_key_value(item, column))
            }),
    );
    assert_eq!(
        html,
        "<table><tbody><tr><th>ID</th><td>#1=1</td><td>#2=2</td></tr></tbody></table>"
    );
}

#[test]
fn test_attributes_use_column_key() {
    let html = VerticalTable::html(
        id_name_config()
            .with_callback("name", lookup)
            .with_column("id", "")
            .with_table_attr("class", "vertical")
            .with_row_attr("class", "row-{column}")
            .with_cell_attr("headers", "{column}-{index}")
            .with_header_col("name"),
    );

    assert_eq!(
        html,
        "<table class=\"vertical\"><tbody>\
         <tr class=\"row-name\">\
         <th headers=\"name-0\">Name</th>\
         <th headers=\"name-1\">A</th>\
         <th headers=\"name-2\">B</th>\
         </tr>\
         </tbody></table>"
    );
}

#[test]
fn test_generic_rendering_through_trait() {
    fn render<T: HtmlTable + ToString>(config: TableConfig) -> (String, String) {
        let table = T::new(config.clone());
        (T::html(config), table.to_string())
    }

    let (html, displayed) = render::<VerticalTable>(id_name_config());
    assert_eq!(html, displayed);
}

#[test]
fn test_config_from_value() {
    let config = TableConfig::from_value(&value!({
        "items": [["x", "y"], ["z"]],
        "columns": ["First", "Second"]
    }))
    .with_callback("0", lookup)
    .with_callback("1", lookup);

    assert_eq!(
        VerticalTable::html(config),
        "<table><tbody>\
         <tr><th>First</th><td>x</td><td>z</td></tr>\
         <tr><th>Second</th><td>y</td><td></td></tr>\
         </tbody></table>"
    );
}
