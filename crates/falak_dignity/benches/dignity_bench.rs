use criterion::{Criterion, black_box, criterion_group, criterion_main};
use falak_core::{
    BodyId, BodyPoint, Chart, GeoLocation, HouseCusps, HouseOffset, HouseSystem, SEVEN_PLANETS,
    Sign,
};
use falak_dignity::{AccidentalScorer, EssentialScorer};

fn bench_chart() -> Chart {
    let bodies = vec![
        BodyPoint::new(BodyId::Sun, 352.8, 0.0, 0.997, 0.0),
        BodyPoint::new(BodyId::Moon, 260.6, -4.1, 12.6, -0.2),
        BodyPoint::new(BodyId::Mercury, 328.0, -1.9, 1.5, 0.1),
        BodyPoint::new(BodyId::Venus, 25.6, -1.1, 1.23, 0.05),
        BodyPoint::new(BodyId::Mars, 17.0, -0.3, 0.77, 0.01),
        BodyPoint::new(BodyId::Jupiter, 104.6, 0.6, -0.05, 0.0),
        BodyPoint::new(BodyId::Saturn, 244.5, 2.0, 0.0001, 0.0),
        BodyPoint::new(BodyId::NorthNode, 198.8, 0.0, -0.05, 0.0),
        BodyPoint::new(BodyId::SouthNode, 18.8, 0.0, -0.05, 0.0),
    ];
    Chart::new(
        2_457_095.2083,
        GeoLocation::new(38.533, -8.9),
        HouseSystem::Equal,
        HouseOffset::Traditional,
        bodies,
        &HouseCusps::equal(155.0, 60.5),
    )
}

fn essential_bench(c: &mut Criterion) {
    let scorer = EssentialScorer::default();
    let mut group = c.benchmark_group("essential");
    group.bench_function("almutem_aries_17", |b| {
        b.iter(|| scorer.almutem(black_box(Sign::Aries), black_box(17.0)))
    });
    group.bench_function("score_mars", |b| {
        b.iter(|| scorer.score(black_box(BodyId::Mars), black_box(Sign::Aries), black_box(17.0)))
    });
    group.finish();
}

fn accidental_bench(c: &mut Criterion) {
    let chart = bench_chart();
    let scorer = AccidentalScorer::new(&chart, EssentialScorer::default());
    let mut group = c.benchmark_group("accidental");
    group.bench_function("seven_planets", |b| {
        b.iter(|| {
            for id in SEVEN_PLANETS {
                let _ = black_box(scorer.score(black_box(id)));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, essential_bench, accidental_bench);
criterion_main!(benches);
