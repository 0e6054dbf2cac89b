//! Typed conversion of `name=value` attributes.
//!
//! Each scope (keyboard, row, key) has its own converter that switches on the
//! attribute name and writes the typed value into the model.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::error::ModelError;
use crate::models::unit::round_to_int;
use crate::models::{Attribute, KeyDefinition, KeyboardConfig, KeyboardRow, Unit, ValueWithUnit};

static DECIMAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?(\d+(\.\d*)?|\.\d+)$").expect("valid decimal pattern"));

static INTEGER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+$").expect("valid integer pattern"));

/// Which numbers a unit-tagged attribute accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    /// Whole numbers only, e.g. `120px`
    Integer,
    /// Numbers with optional decimals, e.g. `-2.5` or `30.5k`
    Decimal,
}

/// Parses `[number][unit]`, returning the number and the unit if one was written.
///
/// The number part is the longest prefix of digits, `.` and `-`; whatever
/// follows must be a unit symbol.
///
/// # Errors
///
/// Fails with [`ModelError::InvalidValue`] if the number part is malformed and
/// with [`ModelError::UnknownUnit`] if the suffix is not a unit symbol.
pub fn parse_number_with_unit(
    name: &str,
    value: &str,
    kind: NumberKind,
) -> Result<(Decimal, Option<Unit>), ModelError> {
    let split = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
        .unwrap_or(value.len());
    let (number_part, unit_part) = value.split_at(split);

    let number = parse_number(number_part, kind).ok_or_else(|| ModelError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
    })?;

    let unit = if unit_part.is_empty() {
        None
    } else {
        Some(Unit::from_symbol(unit_part)?)
    };
    Ok((number, unit))
}

fn parse_number(text: &str, kind: NumberKind) -> Option<Decimal> {
    match kind {
        NumberKind::Integer => {
            if !INTEGER_PATTERN.is_match(text) {
                return None;
            }
            text.parse::<i32>().ok().map(Decimal::from)
        }
        NumberKind::Decimal => {
            if !DECIMAL_PATTERN.is_match(text) {
                return None;
            }
            // Normalize "3." and ".5" forms before handing off to the decimal parser
            let trimmed = text.strip_suffix('.').unwrap_or(text);
            let normalized = if let Some(rest) = trimmed.strip_prefix("-.") {
                format!("-0.{rest}")
            } else if let Some(rest) = trimmed.strip_prefix('.') {
                format!("0.{rest}")
            } else {
                trimmed.to_string()
            };
            Decimal::from_str(&normalized).ok()
        }
    }
}

/// Parses a decimal with optional unit; a missing unit means [`Unit::Key`].
pub fn parse_key_units(attribute: &Attribute) -> Result<ValueWithUnit, ModelError> {
    let (value, unit) = parse_number_with_unit(&attribute.name, &attribute.value, NumberKind::Decimal)?;
    Ok(ValueWithUnit::new(value, unit.unwrap_or(Unit::Key)))
}

/// Parses an integer pixel size; a unit other than `px` is rejected.
pub fn parse_pixels(attribute: &Attribute) -> Result<i32, ModelError> {
    let (value, unit) = parse_number_with_unit(&attribute.name, &attribute.value, NumberKind::Integer)?;
    match unit {
        None | Some(Unit::Pixel) => Ok(round_to_int(value)),
        Some(other) => Err(ModelError::NonPixelUnit {
            name: attribute.name.clone(),
            symbol: other.symbol().to_string(),
        }),
    }
}

/// Parses `true` or `false`.
pub fn parse_boolean(attribute: &Attribute) -> Result<bool, ModelError> {
    match attribute.value.as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ModelError::InvalidBoolean {
            name: attribute.name.clone(),
            value: attribute.value.clone(),
        }),
    }
}

/// Parses a plain integer without unit.
pub fn parse_integer(attribute: &Attribute) -> Result<i32, ModelError> {
    INTEGER_PATTERN
        .is_match(&attribute.value)
        .then(|| attribute.value.parse::<i32>().ok())
        .flatten()
        .ok_or_else(|| ModelError::InvalidInteger {
            name: attribute.name.clone(),
            value: attribute.value.clone(),
        })
}

/// Applies a top-level attribute to the keyboard.
///
/// `keyboard` is accepted but ignored here; it selects the key-code table.
pub fn apply_keyboard_attribute(
    config: &mut KeyboardConfig,
    attribute: &Attribute,
) -> Result<(), ModelError> {
    match attribute.name.as_str() {
        "width" => config.width = parse_pixels(attribute)?,
        "height" => config.height = parse_pixels(attribute)?,
        "spacing" => config.spacing = parse_pixels(attribute)?,
        "keyboard" => {}
        other => return Err(ModelError::UnknownKeyboardAttribute(other.to_string())),
    }
    Ok(())
}

/// Applies a row-scope attribute.
pub fn apply_row_attribute(row: &mut KeyboardRow, attribute: &Attribute) -> Result<(), ModelError> {
    match attribute.name.as_str() {
        "marginTop" => row.margin_top = Some(parse_key_units(attribute)?),
        "marginLeft" => row.margin_left = Some(parse_key_units(attribute)?),
        other => return Err(ModelError::UnknownRowAttribute(other.to_string())),
    }
    Ok(())
}

/// Applies a key-scope attribute. Later declarations overwrite earlier ones.
pub fn apply_key_attribute(key: &mut KeyDefinition, attribute: &Attribute) -> Result<(), ModelError> {
    match attribute.name.as_str() {
        "width" => key.custom_width = Some(parse_key_units(attribute)?),
        "height" => key.custom_height = Some(parse_key_units(attribute)?),
        "marginTop" => key.margin_top = Some(parse_key_units(attribute)?),
        "marginLeft" => key.margin_left = Some(parse_key_units(attribute)?),
        "id" => key.id = Some(parse_integer(attribute)?),
        "stacked" => key.stacked = parse_boolean(attribute)?,
        other => return Err(ModelError::UnknownKeyAttribute(other.to_string())),
    }
    Ok(())
}
