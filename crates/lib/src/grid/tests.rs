use super::*;

const INPUT: &[u8] = b"#..\n.#.\n..#\n#.#\n\nrest\n";

#[test]
fn parse_until_blank_line() -> anyhow::Result<()> {
    let mut input = IStr::new(INPUT);
    let grid = input.next::<Grid<u8>>()?;

    assert_eq!(grid.columns(), 3);
    assert_eq!(grid.rows(), 4);
    assert_eq!(grid[Point::new(1, 1)], b'#');
    assert_eq!(grid.row(3), Some(&b"#.#"[..]));
    assert_eq!(input.as_data(), b"rest\n");
    Ok(())
}

#[test]
fn ragged_rows() {
    let mut input = IStr::new(b"###\n##\n");
    let error = input.next::<Grid<u8>>().unwrap_err();

    assert!(matches!(
        error.kind(),
        ErrorKind::RaggedGrid {
            row: 1,
            expected: 3,
            actual: 2
        }
    ));
}

#[test]
fn lookups() -> anyhow::Result<()> {
    let grid = IStr::new(INPUT).next::<Grid<u8>>()?;

    assert!(grid.contains(Point::new(2, 3)));
    assert!(!grid.contains(Point::new(3, 0)));
    assert!(!grid.contains(Point::new(0, -1)));
    assert_eq!(grid.get(Point::new(-1, 0)), None);
    assert_eq!(*grid.get_wrapping(Point::new(-3, -4)), b'#');
    assert_eq!(*grid.get_wrapping(Point::new(4, 5)), b'#');
    assert_eq!(grid.position(&b'#'), Some(Point::new(0, 0)));
    assert_eq!(grid.point_of(7), Point::new(1, 2));
    assert_eq!(grid.column(2).copied().collect::<Vec<_>>(), b"..##");
    assert_eq!(grid.column(3).count(), 0);
    Ok(())
}

#[test]
fn transpose_and_rotate() -> anyhow::Result<()> {
    let grid = IStr::new(b"ab\ncd\nef\n").next::<Grid<u8>>()?;

    assert_eq!(grid.transpose().to_string(), "ace\nbdf\n");
    assert_eq!(grid.rotate_clockwise().to_string(), "eca\nfdb\n");
    assert_eq!(grid.transpose().transpose(), grid);
    Ok(())
}

#[test]
fn map_and_mutate() {
    let mut grid = Grid::new(2, 2, 0u32);
    grid[Point::new(1, 0)] = 4;

    if let Some(value) = grid.get_mut(Point::new(0, 1)) {
        *value = 2;
    }

    let doubled = grid.map(|v| v * 2);
    assert_eq!(doubled.as_slice(), [0, 8, 4, 0]);
}
