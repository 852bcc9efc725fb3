use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use workout_tracker::models::{Coords, PanOptions, Workout};
use workout_tracker::services::{
    HeadlessList, HeadlessMap, SortCriterion, ViewSynchronizer, WorkoutStore,
};

fn make_workouts(count: usize) -> Vec<Workout> {
    (0..count)
        .map(|i| {
            let coords = Coords::new(37.0 + i as f64 * 0.001, -122.0);
            let distance = 1.0 + (i % 37) as f64;
            let duration = 10.0 + (i % 53) as f64;
            let workout = if i % 2 == 0 {
                Workout::running(coords, distance, duration, 160.0 + (i % 20) as f64)
            } else {
                Workout::cycling(coords, distance, duration, 50.0 + (i % 400) as f64)
            };
            workout.expect("valid workout")
        })
        .collect()
}

fn benchmark_sort_and_render(c: &mut Criterion) {
    let workouts = make_workouts(500);
    let pan = PanOptions {
        zoom: 15,
        animate: true,
        duration_secs: 1.0,
    };

    let mut group = c.benchmark_group("full_rerender");

    group.bench_function("sort_by_pace", |b| {
        b.iter(|| {
            let mut store = WorkoutStore::from_workouts(workouts.clone());
            store.sort_by(black_box(SortCriterion::Pace));
            store
        })
    });

    group.bench_function("render_all_500", |b| {
        let mut view = ViewSynchronizer::new(HeadlessList::default(), pan);
        view.attach_map(HeadlessMap::new(Coords::new(37.0, -122.0), 15), &[]);
        b.iter(|| view.render_all(black_box(&workouts)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_sort_and_render);
criterion_main!(benches);
