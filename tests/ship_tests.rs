use battleships::{Coordinate, Orientation, Ship, ShipError, ShotKind};

#[test]
fn test_horizontal_cells_and_margin() {
    let ship = Ship::new("Destroyer", Coordinate::new(0, 3), Orientation::Horizontal, 4);
    let cells: Vec<_> = (0..4).map(|c| Coordinate::new(c, 3)).collect();
    assert_eq!(ship.coordinates(), cells.as_slice());
    assert_eq!(ship.size(), 4);

    // 6x3 rectangle minus the ship itself.
    let margin = ship.margin_coordinates();
    assert_eq!(margin.len(), 14);
    assert_eq!(margin.first(), Some(&Coordinate::new(-1, 2)));
    assert_eq!(margin.last(), Some(&Coordinate::new(4, 4)));
    assert!(margin.contains(&Coordinate::new(-1, 3)));
    assert!(margin.contains(&Coordinate::new(4, 3)));
    for cell in ship.coordinates() {
        assert!(!margin.contains(cell));
    }
}

#[test]
fn test_vertical_cells_and_margin_order() {
    let ship = Ship::new("Cruiser", Coordinate::new(2, 1), Orientation::Vertical, 3);
    assert_eq!(
        ship.coordinates(),
        &[
            Coordinate::new(2, 1),
            Coordinate::new(2, 2),
            Coordinate::new(2, 3)
        ]
    );
    let margin = ship.margin_coordinates();
    assert_eq!(margin.len(), 12);
    let mut sorted = margin.to_vec();
    sorted.sort_by_key(|c| (c.row(), c.column()));
    assert_eq!(margin, sorted.as_slice());
    assert!(ship.borders(&Coordinate::new(1, 0)));
    assert!(ship.borders(&Coordinate::new(3, 4)));
    assert!(!ship.borders(&Coordinate::new(2, 2)));
}

#[test]
fn test_hit_then_sink() {
    let mut ship = Ship::new("Patrol", Coordinate::new(1, 1), Orientation::Horizontal, 2);
    assert!(!ship.is_sunk());

    let hit = ship.shot(Coordinate::new(1, 1)).unwrap();
    assert_eq!(hit.kind, ShotKind::Hit);
    assert_eq!(hit.description, "Patrol has been hit.");
    assert_eq!(hit.sink_ship, None);
    assert!(ship.is_hit(&Coordinate::new(1, 1)));
    assert!(!ship.is_sunk());

    let sink = ship.shot(Coordinate::new(2, 1)).unwrap();
    assert_eq!(sink.kind, ShotKind::Sink);
    assert_eq!(sink.description, "Patrol has been sunk.");
    assert_eq!(sink.sink_ship.as_deref(), Some(ship.coordinates()));
    assert!(ship.is_sunk());
}

#[test]
fn test_same_cell_twice_is_allowed() {
    let mut ship = Ship::new("Patrol", Coordinate::new(0, 0), Orientation::Vertical, 2);
    assert_eq!(ship.shot(Coordinate::new(0, 0)).unwrap().kind, ShotKind::Hit);
    assert_eq!(ship.shot(Coordinate::new(0, 0)).unwrap().kind, ShotKind::Hit);
    assert!(!ship.is_sunk());
}

#[test]
fn test_shot_off_ship_fails() {
    let mut ship = Ship::new("Patrol", Coordinate::new(0, 0), Orientation::Vertical, 2);
    let miss = Coordinate::new(1, 0);
    assert_eq!(ship.shot(miss), Err(ShipError::CoordinateNotOnShip(miss)));
    assert!(!ship.is_hit(&miss));
}
