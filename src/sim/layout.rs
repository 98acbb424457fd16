//! Block grid generation
//!
//! Columns run left to right from x = -280 in steps of 70, rows run top to
//! bottom from y = 260 in steps of 40, staying above y = 140.

use glam::DVec2;

use super::state::{Block, BlockColor};
use crate::consts::*;

/// Color for a block column. The palette index is `floor(x / 70)` and
/// negative indices wrap from the end of the palette.
pub fn column_color(x: i32) -> BlockColor {
    let index = x.div_euclid(BLOCK_COLUMN_STEP);
    let palette = BlockColor::PALETTE;
    palette[index.rem_euclid(palette.len() as i32) as usize]
}

/// Build the starting block arena, column-major
pub fn block_grid() -> Vec<Block> {
    let mut blocks = Vec::new();
    for x in (BLOCK_COLUMN_START..BLOCK_COLUMN_END).step_by(BLOCK_COLUMN_STEP as usize) {
        let color = column_color(x);
        let mut y = BLOCK_ROW_START;
        while y > BLOCK_ROW_END {
            blocks.push(Block::new(DVec2::new(x as f64, y as f64), color));
            y -= BLOCK_ROW_STEP;
        }
    }
    log::debug!("Generated {} blocks", blocks.len());
    blocks
}
