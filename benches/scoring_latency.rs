use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tallyr::domain::{Item, Receipt};
use tallyr::rules::{
    AfternoonRule, DescriptionBonusRule, ItemPairsRule, OddDayRule, QuarterTotalRule,
    RetailerAlnumRule, RoundDollarRule, RuleSet, ScoringRule,
};
use tallyr::store::ReceiptStore;
use std::sync::Arc;

fn create_test_receipt(item_count: usize) -> Receipt {
    Receipt {
        retailer: "M&M Corner Market".to_string(),
        purchase_date: "2022-03-21".to_string(),
        purchase_time: "14:33".to_string(),
        items: (0..item_count)
            .map(|i| Item {
                short_description: format!("Klarbrunn 12-PK 12 FL OZ {i}"),
                price: "12.00".to_string(),
            })
            .collect(),
        total: "9.00".to_string(),
    }
}

fn bench_retailer_alnum_rule(c: &mut Criterion) {
    let rule = RetailerAlnumRule;
    let receipt = create_test_receipt(5);

    c.bench_function("retailer_alnum_rule", |b| {
        b.iter(|| rule.points(black_box(&receipt)))
    });
}

fn bench_total_rules(c: &mut Criterion) {
    let receipt = create_test_receipt(5);

    let round = RoundDollarRule;
    c.bench_function("round_dollar_rule", |b| {
        b.iter(|| round.points(black_box(&receipt)))
    });

    let quarter = QuarterTotalRule;
    c.bench_function("quarter_total_rule", |b| {
        b.iter(|| quarter.points(black_box(&receipt)))
    });
}

fn bench_item_rules(c: &mut Criterion) {
    let receipt = create_test_receipt(20);

    let pairs = ItemPairsRule;
    c.bench_function("item_pairs_rule_20_items", |b| {
        b.iter(|| pairs.points(black_box(&receipt)))
    });

    let bonus = DescriptionBonusRule;
    c.bench_function("description_bonus_rule_20_items", |b| {
        b.iter(|| bonus.points(black_box(&receipt)))
    });
}

fn bench_date_time_rules(c: &mut Criterion) {
    let receipt = create_test_receipt(5);

    let odd_day = OddDayRule;
    c.bench_function("odd_day_rule", |b| {
        b.iter(|| odd_day.points(black_box(&receipt)))
    });

    let afternoon = AfternoonRule;
    c.bench_function("afternoon_rule", |b| {
        b.iter(|| afternoon.points(black_box(&receipt)))
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let ruleset = RuleSet::standard();
    let receipt = create_test_receipt(5);

    c.bench_function("full_scoring_pipeline", |b| {
        b.iter(|| ruleset.total_points(black_box(&receipt)))
    });
}

fn bench_store_insert(c: &mut Criterion) {
    let store = ReceiptStore::new(Arc::new(RuleSet::standard()));
    let receipt = create_test_receipt(5);

    c.bench_function("store_insert", |b| {
        b.iter(|| store.insert(black_box(receipt.clone())).unwrap())
    });
}

criterion_group!(
    benches,
    bench_retailer_alnum_rule,
    bench_total_rules,
    bench_item_rules,
    bench_date_time_rules,
    bench_full_pipeline,
    bench_store_insert,
);

criterion_main!(benches);
