//! Performance benchmarks for the holerite parser.
//!
//! Measures number decoding, a realistic single payslip, and payslips with
//! growing line-item tables.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use holerite_parser::config::ParserConfig;
use holerite_parser::parsing::{PayslipParser, parse_brl_decimal};

const HOLERITE: &str = include_str!("../tests/fixtures/holerite.html");

fn create_parser() -> PayslipParser {
    PayslipParser::new(ParserConfig::new(
        NaiveDate::from_ymd_opt(2020, 5, 1).unwrap(),
    ))
}

/// Builds a payslip document with `rows` earning line items.
fn create_document(rows: usize) -> String {
    let line_items: String = (1..=rows)
        .map(|code| {
            format!(
                "<tr><td>{}</td><td>EVENTO {}</td><td>1,00</td><td>1.234,56</td><td></td></tr>",
                code, code
            )
        })
        .collect();

    format!(
        "<html><body>\
         <table><thead><tr><td>Cód.</td></tr></thead><tbody>{}</tbody></table>\
         <table><tbody>\
         <tr><td>3.000,00</td><td>3.000,00</td><td>500</td><td>2</td><td>5.000,00</td></tr>\
         <tr><td>a</td><td>b</td><td>c</td><td>d</td></tr>\
         <tr><td>400,00</td><td>3.200,00</td><td>300,00</td><td>2.900,00</td></tr>\
         </tbody></table>\
         </body></html>",
        line_items
    )
}

fn bench_decimal_decoding(c: &mut Criterion) {
    c.bench_function("parse_brl_decimal", |b| {
        b.iter(|| parse_brl_decimal(black_box("1.234.567,89")).unwrap())
    });
}

fn bench_fixture(c: &mut Criterion) {
    let parser = create_parser();
    c.bench_function("parse_fixture_payslip", |b| {
        b.iter(|| parser.parse(black_box(HOLERITE)).unwrap())
    });
}

fn bench_line_item_scaling(c: &mut Criterion) {
    let parser = create_parser();
    let mut group = c.benchmark_group("parse_line_items");

    for rows in [10, 100, 1000] {
        let html = create_document(rows);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &html, |b, html| {
            b.iter(|| parser.parse(black_box(html)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_decimal_decoding,
    bench_fixture,
    bench_line_item_scaling
);
criterion_main!(benches);
