use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use html_table::{
    item_key_value, merge, to_value, value, Table, TableConfig, Value, VerticalTable,
};
use serde::Serialize;

#[derive(Serialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

fn products(size: u32) -> Vec<Product> {
    (0..size)
        .map(|i| Product {
            sku: format!("SKU{}", i),
            name: format!("Product {}", i),
            price: 9.99 + f64::from(i),
            quantity: i,
        })
        .collect()
}

fn product_config(size: u32) -> TableConfig {
    TableConfig::new()
        .with_serialized_items(&products(size))
        .unwrap()
        .with_columns([
            ("sku", "SKU"),
            ("name", "Name"),
            ("price", "Price"),
            ("quantity", "Quantity"),
        ])
        .with_callback("name", |item, column, _| item_key_value(item, column))
        .with_callback("quantity", |item, column, _| item_key_value(item, column))
        .with_callback("sku", |item, column, _| item_key_value(item, column))
        .with_header_col("sku")
        .with_row_attr("class", "row-{index}")
        .with_cell_attr("class", "{column}-{index}")
}

fn benchmark_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("table");

    for size in [10, 50, 100, 500].iter() {
        let table = Table::new(product_config(*size));

        group.bench_with_input(BenchmarkId::from_parameter(size), &table, |b, table| {
            b.iter(|| black_box(table).to_html())
        });
    }
    group.finish();
}

fn benchmark_vertical_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("vertical_table");

    for size in [10, 50, 100, 500].iter() {
        let table = VerticalTable::new(product_config(*size));

        group.bench_with_input(BenchmarkId::from_parameter(size), &table, |b, table| {
            b.iter(|| black_box(table).to_html())
        });
    }
    group.finish();
}

fn benchmark_headers_row(c: &mut Criterion) {
    let table = Table::new(product_config(1));

    c.bench_function("headers_row", |b| {
        b.iter(|| Table::headers_row(black_box(&table), 0))
    });
}

fn benchmark_config_from_value(c: &mut Criterion) {
    let data = value!({
        "items": [{ "id": 1, "name": "A" }, { "id": 2, "name": "B" }],
        "columns": { "id": "ID", "name": "Name" },
        "header_cols": ["id"],
        "table_attrs": { "class": "products" },
        "cell_attrs": { "class": "{column}-{index}" }
    });

    c.bench_function("config_from_value", |b| {
        b.iter(|| TableConfig::from_value(black_box(&data)))
    });
}

fn benchmark_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");

    let defaults = TableConfig::default_value();
    let overrides = value!({
        "table_attrs": { "class": "x", "id": "t" },
        "header_cols": ["a", "b"]
    });
    group.bench_function("over_defaults", |b| {
        b.iter(|| merge(black_box(&overrides), black_box(&defaults), false))
    });

    let items: Value = to_value(&products(100)).unwrap();
    group.bench_function("sequence_append", |b| {
        b.iter(|| merge(black_box(&items), black_box(&items), false))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_table,
    benchmark_vertical_table,
    benchmark_headers_row,
    benchmark_config_from_value,
    benchmark_merge,
);
criterion_main!(benches);
