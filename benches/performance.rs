use criterion::{black_box, criterion_group, criterion_main, Criterion};
use income_core::income::{
    monthly_income, schedule_preview, structure_for, CycleSet, Frequency, IncomeSource,
    PaymentStructureType,
};

fn build_incomes() -> Vec<IncomeSource> {
    let mut incomes = Vec::new();
    for idx in 0..256 {
        let amount = 500.0 + (idx % 100) as f64;
        let income = match idx % 4 {
            0 => IncomeSource::single_amount("simple", Frequency::Weekly, amount),
            1 => IncomeSource::single_amount("structured", Frequency::BiWeekly, amount)
                .with_structure(structure_for(PaymentStructureType::BiWeekly)),
            2 => IncomeSource::from_cycles(
                "cycles",
                Frequency::Weekly,
                CycleSet::new(Frequency::Weekly, amount),
            ),
            _ => IncomeSource::single_amount("quarterly", Frequency::Quarterly, amount),
        };
        incomes.push(income);
    }
    incomes
}

fn bench_monthly_income(c: &mut Criterion) {
    let incomes = build_incomes();
    c.bench_function("monthly_income_256_sources", |b| {
        b.iter(|| {
            incomes
                .iter()
                .map(|income| monthly_income(black_box(income)))
                .sum::<f64>()
        })
    });
}

fn bench_schedule_preview(c: &mut Criterion) {
    let weekly = structure_for(PaymentStructureType::Weekly);
    c.bench_function("schedule_preview_weekly", |b| {
        b.iter(|| schedule_preview(black_box(&weekly), black_box(&[125.0])))
    });
}

criterion_group!(benches, bench_monthly_income, bench_schedule_preview);
criterion_main!(benches);
