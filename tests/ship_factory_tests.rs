use std::collections::VecDeque;
use std::sync::Arc;

use battleships::{
    AppSettings, Coordinate, Orientation, RandomSource, RngSource, ShipBuilder, ShipFactory,
    ShipFactoryError, ShipTypeSettings,
};
use rand::{rngs::SmallRng, SeedableRng};

/// Replays scripted values and records the bounds it was asked for.
#[derive(Default)]
struct Scripted {
    values: VecDeque<usize>,
    bounds: Vec<usize>,
}

impl Scripted {
    fn new(values: &[usize]) -> Self {
        Self {
            values: values.iter().copied().collect(),
            bounds: Vec::new(),
        }
    }
}

impl RandomSource for Scripted {
    fn next(&mut self, max: usize) -> usize {
        self.bounds.push(max);
        self.values.pop_front().unwrap_or(0)
    }
}

fn settings(columns: i64, rows: i64) -> Arc<AppSettings> {
    Arc::new(AppSettings::new(
        columns,
        rows,
        vec![
            ShipTypeSettings::new("Destroyer", 4, 2),
            ShipTypeSettings::new("Carrier", 6, 1),
        ],
    ))
}

#[test]
fn test_horizontal_draw() {
    let mut random = Scripted::new(&[1, 2, 3]);
    let ship = ShipFactory::new(settings(10, 8), &mut random)
        .build_ship("Destroyer")
        .unwrap();

    assert_eq!(ship.name(), "Destroyer");
    assert_eq!(ship.orientation(), Orientation::Horizontal);
    assert_eq!(ship.size(), 4);
    assert_eq!(ship.coordinates()[0], Coordinate::new(3, 2));
    // orientation, then row, then column; last start column is 10 - 4
    assert_eq!(random.bounds, vec![2, 8, 7]);
}

#[test]
fn test_vertical_draw() {
    let mut random = Scripted::new(&[0, 4, 9]);
    let ship = ShipFactory::new(settings(10, 8), &mut random)
        .build_ship("Destroyer")
        .unwrap();

    assert_eq!(ship.orientation(), Orientation::Vertical);
    assert_eq!(ship.coordinates()[0], Coordinate::new(9, 4));
    assert_eq!(ship.coordinates()[3], Coordinate::new(9, 7));
    assert_eq!(random.bounds, vec![2, 5, 10]);
}

#[test]
fn test_orientation_falls_back_when_only_one_fits() {
    let mut random = Scripted::new(&[1, 0, 0]);
    let ship = ShipFactory::new(settings(5, 10), &mut random)
        .build_ship("Carrier")
        .unwrap();
    assert_eq!(ship.orientation(), Orientation::Vertical);
    assert_eq!(random.bounds, vec![2, 5, 5]);
}

#[test]
fn test_ship_too_large_for_grid() {
    let err = ShipFactory::new(settings(5, 5), Scripted::default())
        .build_ship("Carrier")
        .unwrap_err();
    assert_eq!(
        err,
        ShipFactoryError::DoesNotFit {
            name: "Carrier".to_string(),
            size: 6
        }
    );
}

#[test]
fn test_unknown_ship_type() {
    let err = ShipFactory::new(settings(10, 10), Scripted::default())
        .build_ship("Submarine")
        .unwrap_err();
    assert_eq!(err, ShipFactoryError::UnknownShipType("Submarine".to_string()));
}

#[test]
fn test_random_ships_stay_on_grid() {
    let settings = settings(7, 6);
    let size = settings.grid_size().unwrap();
    let mut factory = ShipFactory::new(settings, RngSource(SmallRng::seed_from_u64(99)));
    let mut seen_far_corner = false;
    for _ in 0..2000 {
        let ship = factory.build_ship("Destroyer").unwrap();
        for c in ship.coordinates() {
            assert!(size.contains(c), "{:?} left the grid", ship);
        }
        seen_far_corner |= ship.coordinates().contains(&Coordinate::new(6, 5));
    }
    assert!(seen_far_corner);
}
