use criterion::{black_box, criterion_group, criterion_main, Criterion};
use income_core::{
    domain::{
        period::{BIWEEKLY, MONTHLY, WEEKLY, YEARLY},
        rust_decimal::Decimal,
        Income, TypeFilter,
    },
    FinancialStatement, IncomeList, StatementSummary,
};
use tempfile::tempdir;

const KINDS: [&str; 4] = ["wages", "ssi", "pension", "child_support"];
const PERIODS: [u32; 3] = [MONTHLY, BIWEEKLY, WEEKLY];

fn build_sample_incomes(count: usize) -> IncomeList {
    (0..count)
        .map(|idx| {
            Income::new(
                KINDS[idx % KINDS.len()],
                Decimal::new(50_000 + (idx % 1_000) as i64, 2),
                PERIODS[idx % PERIODS.len()],
            )
            .with_owner(if idx % 2 == 0 { "client" } else { "spouse" })
        })
        .collect()
}

fn bench_totals(c: &mut Criterion) {
    let mut incomes = build_sample_incomes(black_box(10_000));

    c.bench_function("income_total_10k", |b| {
        b.iter(|| {
            let total = incomes.total(YEARLY, TypeFilter::All).expect("total");
            black_box(total);
        })
    });

    c.bench_function("income_total_filtered_10k", |b| {
        b.iter(|| {
            let total = incomes
                .total(MONTHLY, TypeFilter::any_of(["ssi", "pension"]))
                .expect("filtered total");
            black_box(total);
        })
    });
}

fn bench_summary_io(c: &mut Criterion) {
    let mut statement = FinancialStatement::new();
    statement.incomes = build_sample_incomes(10_000);
    let dir = tempdir().expect("tempdir");
    let file_path = dir.path().join("statement.json");
    statement.save(&file_path).expect("seed");

    c.bench_function("statement_load_and_summarize_10k", |b| {
        b.iter(|| {
            let mut loaded = FinancialStatement::load(&file_path).expect("load statement");
            let summary = StatementSummary::build(&mut loaded, MONTHLY).expect("summary");
            black_box(summary);
        })
    });
}

criterion_group!(benches, bench_totals, bench_summary_io);
criterion_main!(benches);
