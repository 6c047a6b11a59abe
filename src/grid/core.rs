use thiserror::Error;

use crate::geometry::{Point, Rect};
use crate::render::{Color, PaintContext};

use super::codes::{CodeAlphabet, TileCode};
use super::regions::RegionSet;

/// Errors raised while building a tile grid.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("tile size must be positive")]
    ZeroTileSize,
    #[error("{cells} tiles need codes but the alphabet only yields {capacity}")]
    CodeSpaceExhausted { cells: usize, capacity: usize },
}

/// Pixel offset applied to every tile centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Column/row partition of a screen into square tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridGeometry {
    pub columns: u32,
    pub rows: u32,
    pub tile_size: u32,
    pub offset: Offset,
}

impl GridGeometry {
    pub fn new(screen: Rect, tile_size: u32, offset: Offset) -> Result<Self, GridError> {
        if tile_size == 0 {
            return Err(GridError::ZeroTileSize);
        }
        let tile = tile_size as f32;
        Ok(Self {
            columns: (screen.width / tile).floor().max(0.0) as u32,
            rows: (screen.height / tile).floor().max(0.0) as u32,
            tile_size,
            offset,
        })
    }

    pub fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Centre of the tile at `(column, row)`; the half tile rounds down.
    pub fn center_of(&self, column: u32, row: u32) -> Point {
        let tile = i64::from(self.tile_size);
        let half = tile / 2;
        let x = i64::from(column) * tile + half + i64::from(self.offset.x);
        let y = i64::from(row) * tile + half + i64::from(self.offset.y);
        Point::new(x as f32, y as f32)
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.columns).map(move |column| GridCell {
                column,
                row,
                center: self.center_of(column, row),
            })
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    pub column: u32,
    pub row: u32,
    pub center: Point,
}

/// A cell that survived region filtering and received a code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub code: TileCode,
    pub cell: GridCell,
}

impl Tile {
    pub fn center(&self) -> Point {
        self.cell.center
    }
}

/// Visual parameters for drawing tiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileStyle {
    pub background: Color,
    pub radius: f32,
    pub text_size: f32,
    pub label_alpha: u8,
}

impl Default for TileStyle {
    fn default() -> Self {
        Self {
            background: Color::rgba(0x00, 0x00, 0x00, 0x99),
            radius: 10.0,
            text_size: 16.0,
            label_alpha: 0xbb,
        }
    }
}

/// Addressable tiles for one grid generation.
///
/// Admitted cells receive codes densely in row-major order, so the tile for a
/// code sits at that code's alphabet index. Resolution and drawing both read
/// the same tile list.
#[derive(Debug, Clone)]
pub struct TileGrid {
    geometry: GridGeometry,
    alphabet: CodeAlphabet,
    tiles: Vec<Tile>,
    suppressed: usize,
}

impl TileGrid {
    pub fn build(
        geometry: GridGeometry,
        alphabet: &CodeAlphabet,
        regions: &RegionSet,
    ) -> Result<Self, GridError> {
        let mut suppressed = 0;
        let admitted: Vec<GridCell> = geometry
            .cells()
            .filter(|cell| {
                let keep = regions.admits(cell.center);
                if !keep {
                    suppressed += 1;
                }
                keep
            })
            .collect();

        let capacity = alphabet.capacity();
        if admitted.len() > capacity {
            return Err(GridError::CodeSpaceExhausted {
                cells: admitted.len(),
                capacity,
            });
        }

        let tiles = admitted
            .into_iter()
            .zip(alphabet.codes())
            .map(|(cell, code)| Tile { code, cell })
            .collect();

        Ok(Self {
            geometry,
            alphabet: alphabet.clone(),
            tiles,
            suppressed,
        })
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Cells dropped by region filtering.
    pub fn suppressed(&self) -> usize {
        self.suppressed
    }

    pub fn resolve(&self, code: &TileCode) -> Option<Point> {
        let index = self.alphabet.code_to_index(code)?;
        self.tiles.get(index).map(Tile::center)
    }

    pub fn paint<P>(&self, style: &TileStyle, ctx: &mut P)
    where
        P: PaintContext + ?Sized,
    {
        ctx.set_text_size(style.text_size);
        let reference = ctx.measure_text("ABC");
        for tile in &self.tiles {
            ctx.set_color(style.background);
            ctx.draw_circle(tile.center(), style.radius);
            ctx.set_color(
                tile.code
                    .suffix()
                    .label_color()
                    .with_alpha(style.label_alpha),
            );
            draw_centered_label(ctx, &tile.code.label(), tile.center(), reference);
        }
    }
}

/// Centre `text` horizontally on its own width and vertically on the
/// reference glyph box, so every label shares one baseline offset.
fn draw_centered_label<P>(ctx: &mut P, text: &str, center: Point, reference: Rect)
where
    P: PaintContext + ?Sized,
{
    let bounds = ctx.measure_text(text);
    ctx.draw_text(
        text,
        center.x + bounds.x - bounds.width / 2.0,
        center.y - reference.y - reference.height / 2.0,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::RegionKind;
    use crate::render::{DrawCommand, DrawList};

    fn screen() -> Rect {
        Rect::new(0.0, 0.0, 800.0, 600.0)
    }

    fn geometry(tile: u32) -> GridGeometry {
        GridGeometry::new(screen(), tile, Offset::default()).unwrap()
    }

    fn code(s: &str) -> TileCode {
        s.parse().unwrap()
    }

    #[test]
    fn reference_screen_partition() {
        let geometry = geometry(60);
        assert_eq!((geometry.columns, geometry.rows), (13, 10));

        let grid = TileGrid::build(geometry, &CodeAlphabet::default(), &RegionSet::new()).unwrap();
        assert_eq!(grid.len(), 130);
        let first = grid.tiles()[0];
        assert_eq!(first.code.to_string(), "aa");
        assert_eq!(first.center(), Point::new(30.0, 30.0));

        let last = grid.tiles()[129];
        assert_eq!((last.cell.column, last.cell.row), (12, 9));
        assert_eq!(last.code.to_string(), "ez");
        assert_eq!(last.center(), Point::new(750.0, 570.0));
    }

    #[test]
    fn partition_floors_for_any_tile_size() {
        for tile in [1u32, 7, 33, 60, 99, 601, 900] {
            let geometry = GridGeometry::new(screen(), tile, Offset::default()).unwrap();
            assert_eq!(geometry.columns, 800 / tile);
            assert_eq!(geometry.rows, 600 / tile);
        }
        assert_eq!(
            GridGeometry::new(screen(), 0, Offset::default()),
            Err(GridError::ZeroTileSize)
        );
    }

    #[test]
    fn odd_tile_size_rounds_half_down_and_applies_offset() {
        let geometry = GridGeometry::new(screen(), 45, Offset::new(3, -2)).unwrap();
        assert_eq!(geometry.center_of(0, 0), Point::new(25.0, 20.0));
        assert_eq!(geometry.center_of(2, 1), Point::new(115.0, 65.0));
    }

    #[test]
    fn include_region_outside_grid_leaves_nothing() {
        let mut regions = RegionSet::new();
        regions.add(RegionKind::Include, Rect::new(2000.0, 2000.0, 50.0, 50.0));
        let grid = TileGrid::build(geometry(60), &CodeAlphabet::default(), &regions).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.suppressed(), 130);
    }

    #[test]
    fn full_screen_exclude_leaves_nothing() {
        let mut regions = RegionSet::new();
        regions.add(RegionKind::Exclude, screen());
        let grid = TileGrid::build(geometry(60), &CodeAlphabet::default(), &regions).unwrap();
        assert!(grid.is_empty());
    }

    #[test]
    fn exclude_inside_include_suppresses_overlap_only() {
        let mut regions = RegionSet::new();
        // 4x3 block of tiles starting at column 1, row 1.
        regions.add(RegionKind::Include, Rect::new(60.0, 60.0, 240.0, 180.0));
        // One row of that block.
        regions.add(RegionKind::Exclude, Rect::new(60.0, 120.0, 240.0, 60.0));
        let grid = TileGrid::build(geometry(60), &CodeAlphabet::default(), &regions).unwrap();
        assert_eq!(grid.len(), 8);
        assert_eq!(grid.suppressed(), 122);
        assert!(grid.tiles().iter().all(|tile| tile.cell.row != 2));
    }

    #[test]
    fn codes_are_dense_over_admitted_tiles() {
        let mut regions = RegionSet::new();
        regions.add(RegionKind::Exclude, Rect::new(0.0, 0.0, 60.0, 60.0));
        let grid = TileGrid::build(geometry(60), &CodeAlphabet::default(), &regions).unwrap();
        assert_eq!(grid.tiles()[0].code.to_string(), "aa");
        assert_eq!(grid.resolve(&code("aa")), Some(Point::new(90.0, 30.0)));
        for tile in grid.tiles() {
            assert_eq!(grid.resolve(&tile.code), Some(tile.center()));
        }
    }

    #[test]
    fn unassigned_codes_do_not_resolve() {
        let grid = TileGrid::build(geometry(60), &CodeAlphabet::default(), &RegionSet::new()).unwrap();
        assert_eq!(grid.resolve(&code("fa")), None);
        assert_eq!(grid.resolve(&code("aag")), None);
    }

    #[test]
    fn overflow_fails_fast() {
        let alphabet = CodeAlphabet::new("bcdefghijklmnopqrstuvwxyz");
        assert_eq!(alphabet.capacity(), 6);
        let err = TileGrid::build(geometry(60), &alphabet, &RegionSet::new()).unwrap_err();
        assert_eq!(
            err,
            GridError::CodeSpaceExhausted {
                cells: 130,
                capacity: 6
            }
        );
    }

    #[test]
    fn colour_suffixes_kick_in_after_plain_codes() {
        let grid = TileGrid::build(geometry(20), &CodeAlphabet::default(), &RegionSet::new()).unwrap();
        assert_eq!(grid.len(), 40 * 30);
        assert_eq!(grid.tiles()[676].code.to_string(), "aag");
    }

    #[test]
    fn paint_draws_circle_and_label_per_tile() {
        let screen = Rect::new(0.0, 0.0, 120.0, 60.0);
        let geometry = GridGeometry::new(screen, 60, Offset::default()).unwrap();
        let grid = TileGrid::build(geometry, &CodeAlphabet::default(), &RegionSet::new()).unwrap();
        let mut list = DrawList::default();
        grid.paint(&TileStyle::default(), &mut list);

        let circles = list
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { radius, .. } if *radius == 10.0))
            .count();
        assert_eq!(circles, 2);
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["aa", "ab"]);
        // 16px monospace: label is 20 wide, reference cap height is 12.
        assert!(list.commands().contains(&DrawCommand::Text {
            text: "aa".into(),
            x: 20.0,
            y: 36.0,
            size: 16.0,
            bold: false,
        }));
        assert!(list
            .commands()
            .contains(&DrawCommand::Color(Color::rgba(0xff, 0xff, 0xff, 0xbb))));
    }
}
