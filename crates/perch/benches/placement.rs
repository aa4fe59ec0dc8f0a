use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use perch::geom::size;
use perch::{
    AnchorEvent, AnchorRect, OverlayController, PlacementOptions, Position, RecordingSurface,
    TooltipProps, Viewport, place,
};
use std::hint::black_box;

fn anchors() -> Vec<AnchorRect> {
    vec![
        AnchorRect::new(200.0, 100.0, 50.0, 20.0),
        // Hugging the top-left corner: Top-family requests flip.
        AnchorRect::new(0.0, 5.0, 24.0, 24.0),
        // Near the bottom-right corner.
        AnchorRect::new(1000.0, 740.0, 20.0, 20.0),
    ]
}

fn bench_place_all_positions(c: &mut Criterion) {
    let viewport = Viewport::new(1024.0, 768.0).with_scroll(0.0, 1200.0);
    let overlay = size(160.0, 48.0);
    let anchors = anchors();

    c.bench_function("place_all_positions", |b| {
        b.iter(|| {
            for anchor in &anchors {
                for position in Position::ALL {
                    black_box(place(
                        black_box(position),
                        anchor,
                        overlay,
                        &viewport,
                        PlacementOptions::default(),
                    ));
                }
            }
        })
    });
}

fn bench_controller_hover_cycle(c: &mut Criterion) {
    let viewport = Viewport::new(1024.0, 768.0);
    let anchors = anchors();

    c.bench_function("controller_hover_cycle", |b| {
        b.iter_batched(
            || {
                (
                    OverlayController::new(TooltipProps::new(Position::Top)),
                    RecordingSurface::new(size(160.0, 48.0)),
                )
            },
            |(mut ctl, mut surface)| {
                for anchor in &anchors {
                    ctl.handle(
                        AnchorEvent::PointerOver {
                            anchor: *anchor,
                            viewport,
                        },
                        &mut surface,
                    );
                    ctl.handle(AnchorEvent::PointerLeave, &mut surface);
                }
                black_box(surface.commits().len())
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_place_all_positions, bench_controller_hover_cycle);
criterion_main!(benches);
