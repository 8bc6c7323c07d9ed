//! Per-house breadth-first engine for grids with obstacles.

use log::{debug, trace};
use meetpoint_core::{Grid, Point};
use meetpoint_paths::{Pather, SearchRange, TargetPather};

use crate::engine::{CostEngine, MeetingPoint};
use crate::houses::HouseSet;

/// Walks a [`Grid`]: 4-way moves onto any non-obstacle cell, with empty
/// cells as targets and houses as pass-through terrain.
pub struct TerrainPather<'a> {
    grid: &'a Grid,
}

impl<'a> TerrainPather<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    fn passable(&self, p: Point) -> bool {
        self.grid.at(p).is_some_and(|c| !c.is_obstacle())
    }
}

impl Pather for TerrainPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        // Obstacles stay isolated, even when used as a search start.
        if !self.passable(p) {
            return;
        }
        for np in p.neighbors_4() {
            if self.passable(np) {
                buf.push(np);
            }
        }
    }
}

impl TargetPather for TerrainPather<'_> {
    fn is_target(&self, p: Point) -> bool {
        self.grid.at(p).is_some_and(|c| c.is_empty())
    }
}

/// [`CostEngine`] for grids classified as
/// [`NeedsTraversal`](crate::GridClass::NeedsTraversal). Also correct on
/// obstacle-free grids, only slower.
#[derive(Debug, Clone, Copy)]
pub struct TraversalEngine {
    /// Label passable components first and give up early when the houses
    /// do not all share one.
    pub component_precheck: bool,
}

impl Default for TraversalEngine {
    fn default() -> Self {
        Self {
            component_precheck: true,
        }
    }
}

impl CostEngine for TraversalEngine {
    fn min_total_cost(&self, grid: &Grid, houses: &HouseSet) -> Option<MeetingPoint> {
        if !houses.fits(grid) {
            return None;
        }
        let pather = TerrainPather::new(grid);
        let mut sr = SearchRange::new(grid.bounds());
        if self.component_precheck {
            sr.cc_map_all(&pather);
            if !sr.same_component(houses.as_slice()) {
                debug!("houses span several components, skipping {} searches", houses.len());
                return None;
            }
        }
        accumulate(&mut sr, &pather, houses)
    }
}

/// Minimum total shortest-path cost over the empty cells reachable from
/// every house, with obstacles blocking movement.
///
/// Runs one breadth-first search per house: O(houses · rows · cols).
/// `None` when `houses` does not fit `grid` (see [`HouseSet::fits`]).
pub fn min_total_cost(grid: &Grid, houses: &HouseSet) -> Option<MeetingPoint> {
    let pather = TerrainPather::new(grid);
    let mut sr = SearchRange::new(grid.bounds());
    accumulate(&mut sr, &pather, houses)
}

fn accumulate(
    sr: &mut SearchRange,
    pather: &TerrainPather<'_>,
    houses: &HouseSet,
) -> Option<MeetingPoint> {
    if !houses.fits(pather.grid) {
        return None;
    }
    let required = u32::try_from(houses.len()).ok()?;
    sr.reset_reach();
    for (i, &h) in houses.iter().enumerate() {
        let reached = sr.accumulate_reach(pather, h);
        trace!("house {i} at {h}: reached {reached} empty cells");
        if reached == 0 {
            // Nothing can be reached by every house any more.
            return None;
        }
    }
    sr.min_reached(required).map(|n| MeetingPoint {
        pos: n.pos,
        cost: n.cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use meetpoint_core::parse_layout;

    fn both(layout: &str) -> (Option<MeetingPoint>, Option<MeetingPoint>) {
        let g = parse_layout(layout).unwrap();
        let houses = HouseSet::from_grid(&g);
        let plain = min_total_cost(&g, &houses);
        let checked = TraversalEngine::default().min_total_cost(&g, &houses);
        (plain, checked)
    }

    #[test]
    fn open_grid_matches_manhattan() {
        let (plain, checked) = both(
            "
            H...H
            .....
            ..H..
            ",
        );
        assert_eq!(plain.map(|m| m.cost), Some(6));
        assert_eq!(plain, checked);
    }

    #[test]
    fn wall_forces_detour() {
        // The direct route from the left house is blocked.
        let (plain, checked) = both(
            "
            H#.
            ...
            ",
        );
        let mp = plain.unwrap();
        assert_eq!(mp.pos, Point::at(1, 0));
        assert_eq!(mp.cost, 1);
        assert_eq!(plain, checked);

        let (plain, _) = both(
            "
            H#H
            ...
            ",
        );
        // Every cell of the bottom row costs 4; the first one wins.
        let mp = plain.unwrap();
        assert_eq!(mp.pos, Point::at(1, 0));
        assert_eq!(mp.cost, 4);
    }

    #[test]
    fn houses_are_pass_through() {
        // The left house reaches the bottom cell only by crossing the
        // other two.
        let (plain, checked) = both("H.HH#\n###.#");
        let g = parse_layout("H.HH#\n###.#").unwrap();
        let mut sr = SearchRange::new(g.bounds());
        let pather = TerrainPather::new(&g);
        sr.accumulate_reach(&pather, Point::at(0, 0));
        assert_eq!(sr.distance_sum_at(Point::at(1, 3)), Some(4));

        let mp = plain.unwrap();
        assert_eq!(mp.pos, Point::at(0, 1));
        assert_eq!(mp.cost, 1 + 1 + 2);
        assert_eq!(plain, checked);
    }

    #[test]
    fn partitioned_houses_are_unreachable() {
        let (plain, checked) = both(
            "
            H#.
            ##.
            ..H
            ",
        );
        assert_eq!(plain, None);
        assert_eq!(checked, None);
    }

    #[test]
    fn houses_cut_off_from_land() {
        let (plain, checked) = both(
            "
            H#.
            H#.
            ",
        );
        assert_eq!(plain, None);
        assert_eq!(checked, None);
    }

    #[test]
    fn any_foreign_marker_blocks() {
        let g = Grid::from_rows(&[vec![1, 7, 0], vec![-4, 0, 0]]).unwrap();
        let houses = HouseSet::from_grid(&g);
        assert_eq!(min_total_cost(&g, &houses), None);
    }

    #[test]
    fn engines_agree_on_foreign_house_sets() {
        let g = parse_layout("H.\n..").unwrap();
        let other = parse_layout("..\n.H").unwrap();
        let far = parse_layout(".....\n.....\n....H").unwrap();
        for houses in [
            HouseSet::default(),
            HouseSet::from_grid(&other),
            HouseSet::from_grid(&far),
        ] {
            let slow = min_total_cost(&g, &houses);
            assert_eq!(slow, None);
            assert_eq!(slow, crate::separable::min_total_cost(&g, &houses));
            assert_eq!(TraversalEngine::default().min_total_cost(&g, &houses), None);
        }
    }

    #[test]
    fn terrain_pather_isolates_obstacles() {
        let g = parse_layout("H#.").unwrap();
        let pather = TerrainPather::new(&g);
        let mut buf = Vec::new();
        pather.neighbors(Point::at(0, 1), &mut buf);
        assert!(buf.is_empty());
        pather.neighbors(Point::at(0, 0), &mut buf);
        assert!(buf.is_empty());
        pather.neighbors(Point::at(0, 2), &mut buf);
        assert!(buf.is_empty());
        assert!(pather.is_target(Point::at(0, 2)));
        assert!(!pather.is_target(Point::at(0, 0)));
        assert!(!pather.is_target(Point::at(0, 1)));
    }
}
