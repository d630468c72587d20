use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flipbook_animation_core::{parse_stored_graph_json, AnimationPlayer, PlaybackInstance, TransitionGraph};

fn character_graph() -> TransitionGraph {
    let raw = flipbook_test_fixtures::graph_json("character").expect("fixture should load");
    parse_stored_graph_json(&raw).expect("character graph should parse")
}

fn bench_find_sequence(c: &mut Criterion) {
    let graph = character_graph();
    let start = PlaybackInstance::new(graph.node_index("idle-right").unwrap());
    c.bench_function("find_sequence idle-right -> walk-left", |b| {
        b.iter(|| {
            let plan = graph
                .find_sequence(black_box(&start), black_box("walk-left"))
                .unwrap();
            black_box(plan)
        })
    });
}

fn bench_tick_loop(c: &mut Criterion) {
    let graph = character_graph();
    let start = PlaybackInstance::new(graph.node_index("idle-right").unwrap());
    c.bench_function("1000 ticks with plan consumption", |b| {
        b.iter(|| {
            let mut player = AnimationPlayer::default();
            let mut plan = graph.find_sequence(&start, "walk-left").unwrap();
            let mut instance = start;
            for _ in 0..1000 {
                player.forward_time(black_box(0.017));
                instance = player.forward_animation(instance, &mut plan, graph.states());
            }
            black_box(instance)
        })
    });
}

criterion_group!(benches, bench_find_sequence, bench_tick_loop);
criterion_main!(benches);
