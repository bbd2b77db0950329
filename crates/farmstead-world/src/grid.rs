//! The farm grid: bounded movement and location lookups.
//!
//! [`FarmGrid`] holds a fixed `width` x `height` area, the player's
//! position, the barn, and one cell per field plot. Moving never fails:
//! each axis is clamped to the grid independently, so walking into an edge
//! just leaves the player standing on it.

use serde::Serialize;
use tracing::debug;

use farmstead_types::{Direction, GridPos, Target};

use crate::error::WorldError;

/// What occupies a grid cell, for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cell {
    /// The player is standing here (drawn over anything else).
    Player,
    /// A field plot, by index.
    Field(usize),
    /// The barn.
    Barn,
    /// Open ground.
    Path,
}

/// Spatial layout of the farm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FarmGrid {
    /// Number of columns.
    width: u32,
    /// Number of rows.
    height: u32,
    /// Where the player stands.
    player: GridPos,
    /// Where the barn is.
    barn: GridPos,
    /// Cell of each field plot, indexed like the field list.
    fields: Vec<GridPos>,
}

impl FarmGrid {
    /// Validate and build a grid.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidGrid`] if the grid has a zero dimension,
    /// any position lies outside it, two fields share a cell, or the barn
    /// sits on a field.
    pub fn new(
        width: u32,
        height: u32,
        start: GridPos,
        barn: GridPos,
        fields: Vec<GridPos>,
    ) -> Result<Self, WorldError> {
        if width == 0 || height == 0 {
            return Err(invalid(format!("grid must be at least 1x1, got {width}x{height}")));
        }
        let in_bounds = |pos: GridPos| pos.x < width && pos.y < height;
        if !in_bounds(start) {
            return Err(invalid(format!("start {start} is outside the grid")));
        }
        if !in_bounds(barn) {
            return Err(invalid(format!("barn {barn} is outside the grid")));
        }
        for (i, &pos) in fields.iter().enumerate() {
            if !in_bounds(pos) {
                return Err(invalid(format!("field {pos} is outside the grid")));
            }
            if fields.iter().take(i).any(|&other| other == pos) {
                return Err(invalid(format!("two fields share cell {pos}")));
            }
            if pos == barn {
                return Err(invalid(format!("barn and a field share cell {pos}")));
            }
        }
        Ok(Self {
            width,
            height,
            player: start,
            barn,
            fields,
        })
    }

    /// Number of columns.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Where the player stands.
    pub const fn player(&self) -> GridPos {
        self.player
    }

    /// Where the barn is.
    pub const fn barn(&self) -> GridPos {
        self.barn
    }

    /// Cell of each field plot.
    pub fn fields(&self) -> &[GridPos] {
        &self.fields
    }

    /// Step one cell in `direction`, clamped to the grid. Returns the new
    /// position.
    pub fn move_player(&mut self, direction: Direction) -> GridPos {
        let GridPos { x, y } = self.player;
        let max_x = self.width.saturating_sub(1);
        let max_y = self.height.saturating_sub(1);
        let next = match direction {
            Direction::Up => GridPos::new(x, y.saturating_sub(1)),
            Direction::Down => GridPos::new(x, y.saturating_add(1).min(max_y)),
            Direction::Left => GridPos::new(x.saturating_sub(1), y),
            Direction::Right => GridPos::new(x.saturating_add(1).min(max_x), y),
        };
        debug!(from = %self.player, to = %next, ?direction, "moved");
        self.player = next;
        next
    }

    /// What the player could act on at `pos`.
    pub fn target_at(&self, pos: GridPos) -> Option<Target> {
        if pos == self.barn {
            return Some(Target::Barn);
        }
        self.fields
            .iter()
            .position(|&field| field == pos)
            .map(Target::Plot)
    }

    /// What the player could act on where they stand.
    pub fn target_here(&self) -> Option<Target> {
        self.target_at(self.player)
    }

    /// What to draw at `pos`.
    pub fn cell_at(&self, pos: GridPos) -> Cell {
        if pos == self.player {
            return Cell::Player;
        }
        match self.target_at(pos) {
            Some(Target::Barn) => Cell::Barn,
            Some(Target::Plot(index)) => Cell::Field(index),
            None => Cell::Path,
        }
    }

    /// Every cell, row by row.
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| self.cell_at(GridPos::new(x, y)))
                    .collect()
            })
            .collect()
    }
}

const fn invalid(reason: String) -> WorldError {
    WorldError::InvalidGrid { reason }
}
