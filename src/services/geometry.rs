//! Layout engine: turns a typed keyboard into positioned NohBoard elements.
//!
//! Rows are laid out top to bottom and keys left to right. Each row keeps an x
//! cursor and the lowest bottom edge seen so far; the next row starts one
//! `spacing` below that edge.

use rust_decimal::Decimal;
use tracing::debug;

use crate::constants::KEYBOARD_SURFACE_MARGIN;
use crate::error::LayoutError;
use crate::models::unit::multiply;
use crate::models::{
    Coords, KeyDefinition, KeyboardConfig, KeyboardRow, NohboardConfig, RenderedElement,
    ValueWithUnit,
};

/// Lays out all keys and computes the surface size.
///
/// # Errors
///
/// Returns [`LayoutError::StackedWithoutPredecessor`] if a row starts with a
/// stacked key.
pub fn generate(config: &KeyboardConfig) -> Result<NohboardConfig, LayoutError> {
    let mut elements = Vec::with_capacity(config.key_count());
    let mut row_top = KEYBOARD_SURFACE_MARGIN;

    for (index, row) in config.rows.iter().enumerate() {
        let row_bottom = layout_row(config, row, row_top, &mut elements)?;
        debug!("Row {} spans y {}..{}", index + 1, row_top, row_bottom);
        row_top = row_bottom.saturating_add(config.spacing);
    }

    for (id, element) in (1..).zip(elements.iter_mut()) {
        element.id = id;
    }

    let (max_x, max_y) = elements.iter().fold((0, 0), |(x, y), element| {
        let corner = element.bottom_right();
        (x.max(corner.x), y.max(corner.y))
    });
    Ok(NohboardConfig::new(
        elements,
        max_x.saturating_add(KEYBOARD_SURFACE_MARGIN),
        max_y.saturating_add(KEYBOARD_SURFACE_MARGIN),
    ))
}

/// Lays out one row starting at `row_top` and returns its lowest bottom edge.
fn layout_row(
    config: &KeyboardConfig,
    row: &KeyboardRow,
    mut row_top: i32,
    elements: &mut Vec<RenderedElement>,
) -> Result<i32, LayoutError> {
    let mut x_cursor = KEYBOARD_SURFACE_MARGIN;
    if let Some(margin) = &row.margin_left {
        x_cursor = x_cursor.saturating_add(margin_pixels(margin, config.width, config.spacing));
    }
    if let Some(margin) = &row.margin_top {
        row_top = row_top.saturating_add(margin_pixels(margin, config.height, config.spacing));
    }

    let mut y_max = 0;
    let mut previous: Option<[Coords; 4]> = None;
    for key in &row.keys {
        let top_left = if key.stacked {
            let below = previous.ok_or_else(|| LayoutError::StackedWithoutPredecessor {
                text: key.text.clone(),
                line: key.line,
            })?;
            Coords::new(below[0].x, below[2].y.saturating_add(config.spacing))
        } else {
            if let Some(margin) = &key.margin_left {
                x_cursor =
                    x_cursor.saturating_add(margin_pixels(margin, config.width, config.spacing));
            }
            let mut y = row_top;
            if let Some(margin) = &key.margin_top {
                y = y.saturating_add(margin_pixels(margin, config.height, config.spacing));
            }
            Coords::new(x_cursor, y)
        };

        let boundaries = key_boundaries(config, key, top_left);
        let text_position = text_position(&boundaries)?;
        expand_bindings(key, boundaries, text_position, elements);

        let bottom_right = boundaries[2];
        y_max = y_max.max(bottom_right.y);
        let next_x = bottom_right.x.saturating_add(config.spacing);
        x_cursor = if key.stacked {
            x_cursor.max(next_x)
        } else {
            next_x
        };
        previous = Some(boundaries);
    }
    Ok(y_max)
}

/// Pushes one element per binding; a single binding keeps all of its codes on one element.
fn expand_bindings(
    key: &KeyDefinition,
    boundaries: [Coords; 4],
    text_position: Coords,
    elements: &mut Vec<RenderedElement>,
) {
    elements.extend(key.bindings.iter().map(|binding| {
        RenderedElement::new(
            boundaries,
            text_position,
            binding.codes.clone(),
            key.text.as_str(),
        )
    }));
}

/// Corners of a key clockwise from `top_left`.
#[must_use]
pub fn key_boundaries(config: &KeyboardConfig, key: &KeyDefinition, top_left: Coords) -> [Coords; 4] {
    let width = key_size(key.custom_width.as_ref(), config.width, config.spacing);
    let height = key_size(key.custom_height.as_ref(), config.height, config.spacing);
    let Coords { x, y } = top_left;
    [
        Coords::new(x, y),
        Coords::new(x.saturating_add(width), y),
        Coords::new(x.saturating_add(width), y.saturating_add(height)),
        Coords::new(x, y.saturating_add(height)),
    ]
}

/// Resolves a key dimension to pixels.
///
/// Absent or zero sizes fall back to `base`. Key sizes above one also cover the
/// gaps between the key slots they span.
#[must_use]
pub fn key_size(custom: Option<&ValueWithUnit>, base: i32, spacing: i32) -> i32 {
    match custom.filter(|size| !size.is_zero()) {
        None => base,
        Some(size) if size.spans_multiple_keys() => {
            let gaps = multiply(spacing, size.value.saturating_sub(Decimal::ONE));
            size.resolve_to_pixels(base).saturating_add(gaps)
        }
        Some(size) => size.resolve_to_pixels(base),
    }
}

/// Resolves a margin to pixels, adding one `spacing` per whole key beyond the first.
#[must_use]
pub fn margin_pixels(margin: &ValueWithUnit, base: i32, spacing: i32) -> i32 {
    let pixels = margin.resolve_to_pixels(base);
    if margin.spans_multiple_keys() {
        pixels.saturating_add(multiply(spacing, margin.value.saturating_sub(Decimal::ONE).floor()))
    } else {
        pixels
    }
}

/// Centre of the bounding box of `boundaries`, rounded down.
///
/// # Errors
///
/// Returns [`LayoutError::BoundaryCount`] unless exactly four corners are given.
pub fn text_position(boundaries: &[Coords]) -> Result<Coords, LayoutError> {
    if boundaries.len() != 4 {
        return Err(LayoutError::BoundaryCount(boundaries.len()));
    }
    let min_x = boundaries.iter().map(|c| c.x).min().unwrap_or_default();
    let max_x = boundaries.iter().map(|c| c.x).max().unwrap_or_default();
    let min_y = boundaries.iter().map(|c| c.y).min().unwrap_or_default();
    let max_y = boundaries.iter().map(|c| c.y).max().unwrap_or_default();
    Ok(Coords::new(
        midpoint(min_x, max_x),
        midpoint(min_y, max_y),
    ))
}

/// Midpoint of `low..=high` rounded towards negative infinity, without overflowing.
fn midpoint(low: i32, high: i32) -> i32 {
    let sum = i64::from(low) + i64::from(high);
    i32::try_from(sum.div_euclid(2)).unwrap_or(if sum < 0 { i32::MIN } else { i32::MAX })
}
