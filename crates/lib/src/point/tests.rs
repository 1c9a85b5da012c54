use super::*;

#[test]
fn steps_and_offsets() {
    let p = Point::new(3, 4);

    assert_eq!(p.step(Dir::Up), Point::new(3, 3));
    assert_eq!(p.step(Dir::DownLeft), Point::new(2, 5));
    assert_eq!(p + Dir::Right.offset() * 3, Point::new(6, 4));
    assert_eq!(-p, Point::new(-3, -4));
    assert_eq!(p - p, Point::ZERO);
    assert_eq!(Point::at(2, 7), Point::new(2, 7));
}

#[test]
fn turning() {
    for dir in Dir::ALL {
        assert_eq!(dir.turn_left().turn_right(), dir);
        assert_eq!(dir.reverse().reverse(), dir);
        assert_eq!(dir.turn_left().turn_left(), dir.reverse());
        assert_eq!(dir.offset() + dir.reverse().offset(), Point::ZERO);
    }

    assert_eq!(Dir::Up.turn_right(), Dir::Right);
    assert_eq!(Dir::Right.turn_right(), Dir::Down);
    assert!(Dir::UpRight.is_diagonal());
}

#[test]
fn neighbours() {
    let p = Point::new(0, 0);
    assert_eq!(p.neighbours(false).count(), 4);
    assert_eq!(p.neighbours(true).count(), 8);

    for (dir, n) in p.neighbours(true) {
        assert!(p.is_adjacent(n, true));
        assert_eq!(p.is_adjacent(n, false), !dir.is_diagonal());
    }

    assert!(!p.is_adjacent(p, true));
    assert!(!p.is_adjacent(Point::new(2, 0), true));
}

#[test]
fn distances_and_lines() {
    assert_eq!(Point::new(-2, 3).manhattan(Point::new(1, -1)), 7);

    let line = Point::new(3, 1).line_to(Point::new(0, 1)).collect::<Vec<_>>();
    assert_eq!(
        line,
        [
            Point::new(3, 1),
            Point::new(2, 1),
            Point::new(1, 1),
            Point::new(0, 1)
        ]
    );

    assert_eq!(Point::new(5, 5).line_to(Point::new(5, 5)).count(), 1);
}

#[test]
fn cardinal_indexes() {
    let mut seen = [false; 4];

    for dir in Dir::CARDINAL {
        seen[dir.index()] = true;
    }

    assert_eq!(seen, [true; 4]);
}
