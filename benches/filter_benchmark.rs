use criterion::{black_box, criterion_group, criterion_main, Criterion};

use safari_stays::{FacetSelection, FilterEngine, HotelCatalog, HotelRecord, PaginationWindow};

/// Clone the default listing out to a large synthetic catalog
fn create_sample_listing(size: usize) -> Vec<HotelRecord> {
    let defaults = HotelCatalog::with_defaults();
    let mut records = Vec::with_capacity(size);

    for i in 0..size {
        let template = &defaults.records()[i % defaults.len()];
        let mut hotel = template.clone();
        hotel.id = i as u32 + 1;
        hotel.name = format!("{} #{}", template.name, i);
        hotel.price = template.price + (i as u32 % 7) * 500;
        records.push(hotel);
    }

    records
}

fn bench_filter_engine(c: &mut Criterion) {
    let records = create_sample_listing(10_000);
    let engine = FilterEngine::new();

    let mut selection = FacetSelection::new();
    selection.toggle_bed(2);
    selection.toggle_price_range("price-10000-15000");
    selection.toggle_price_range("price-15000-20000");
    selection.toggle_location("Gigiri");
    selection.toggle_location("Nyali");
    selection.toggle_location("Diani Beach");

    c.bench_function("filter_three_facets_10k", |b| {
        b.iter(|| {
            let filtered = engine.apply(black_box(&records), black_box(&selection));
            black_box(filtered.len())
        })
    });

    let empty = FacetSelection::new();
    c.bench_function("filter_no_facets_10k", |b| {
        b.iter(|| {
            let filtered = engine.apply(black_box(&records), black_box(&empty));
            black_box(filtered.len())
        })
    });
}

fn bench_filter_and_window(c: &mut Criterion) {
    let records = create_sample_listing(10_000);
    let engine = FilterEngine::new();

    let mut selection = FacetSelection::new();
    selection.toggle_bed(2);

    // A session's worth of Show More clicks over a fresh filter pass
    c.bench_function("filter_then_show_more_walk", |b| {
        b.iter(|| {
            let filtered = engine.apply(black_box(&records), &selection);
            let mut window = PaginationWindow::new();
            let mut total = 0;
            for _ in 0..20 {
                total += window.window(&filtered).len();
                window.show_more();
            }
            black_box(total)
        })
    });
}

criterion_group!(benches, bench_filter_engine, bench_filter_and_window);
criterion_main!(benches);
