use lifegrid::Coord;
use lifegrid::grid::Grid;
use proptest::prelude::*;

/// A grid between 1x1 and 24x24 with a random set of live cells
fn arb_grid() -> impl Strategy<Value = Grid> {
    (1usize..24, 1usize..24, 1u32..16).prop_flat_map(|(w, h, size)| {
        proptest::collection::vec(any::<bool>(), w * h).prop_map(move |alive| {
            let mut grid = Grid::new(w, h, size);

            let live = alive
                .iter()
                .enumerate()
                .filter(|(_, a)| **a)
                .map(|(i, _)| ((i % w) as Coord, (i / w) as Coord));
            grid.seed(live);

            grid
        })
    })
}

proptest! {
    #[test]
    fn toggle_twice_is_identity(mut grid in arb_grid(), x in any::<i16>(), y in any::<i16>()) {
        let before = grid.clone();
        let (x, y) = (x as Coord, y as Coord);

        grid.toggle(x, y);
        prop_assert_eq!(grid.population().abs_diff(before.population()), 1);
        prop_assert!(grid.cells().all(|(_, _, c)| !c.next()));

        grid.toggle(x, y);
        prop_assert_eq!(grid, before);
    }

    #[test]
    fn toggle_touches_one_cell(mut grid in arb_grid(), x in 0usize..24, y in 0usize..24) {
        let (x, y) = ((x % grid.width()) as Coord, (y % grid.height()) as Coord);
        let before = grid.clone();

        grid.toggle(x, y);

        for ((cx, cy, a), (_, _, b)) in grid.cells().zip(before.cells()) {
            if (cx, cy) == (x, y) {
                prop_assert_ne!(a.is_alive(), b.is_alive());
            } else {
                prop_assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn step_is_deterministic(grid in arb_grid()) {
        let mut a = grid.clone();
        let mut b = grid;

        for _ in 0..3 {
            a.step();
            b.step();
            prop_assert_eq!(&a, &b);
        }
    }

    #[test]
    fn empty_grid_never_changes(w in 1usize..40, h in 1usize..40) {
        let mut grid = Grid::new(w, h, 10);

        grid.step();

        prop_assert_eq!(grid.population(), 0);
    }

    #[test]
    fn rects_do_not_overlap(grid in arb_grid()) {
        let rects: Vec<_> = grid.cells().map(|(_, _, c)| c.rect()).collect();

        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                prop_assert!(!a.intersects(b), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn slots_tile_the_area(grid in arb_grid(), px in 0i32..400, py in 0i32..400) {
        let area = grid.area();
        let size = grid.cell_size() as i32;

        match grid.cell_at_point(px, py) {
            Some((x, y)) => {
                prop_assert!(area.contains(px, py));

                // the point is in the cell's slot, and the cell's rect starts that slot
                let rect = grid.display_rect(x, y);
                prop_assert_eq!((rect.x, rect.y), (x * size, y * size));
                prop_assert!((rect.x..rect.x + size).contains(&px));
                prop_assert!((rect.y..rect.y + size).contains(&py));
                prop_assert_eq!(rect.w, grid.cell_size() - 1);
            }
            None => prop_assert!(!area.contains(px, py)),
        }
    }
}
