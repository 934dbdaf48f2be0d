//! # Product Form
//!
//! The transient form copy the dialog edits. Quantity and price start out as the
//! numbers they were seeded with and become raw text as soon as the user types;
//! nothing is coerced until the total is shown or the document is written.

use super::product::{Product, ProductDocument, ProductId};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

pub const NAME_LABEL: &str = "Product name";
pub const QTY_LABEL: &str = "Qty";
pub const PRICE_LABEL: &str = "Price";
pub const TOTAL_LABEL: &str = "Total";

/// A quantity or price as currently held by the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Raw input text, stored verbatim.
    Text(String),
    /// A numeric value from the blank template or a seeded product.
    Number(f64),
}

impl FieldValue {
    /// Empty text, zero and NaN are falsy. Note that the text `"0"` is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Text(text) => !text.is_empty(),
            FieldValue::Number(value) => *value != 0.0 && !value.is_nan(),
        }
    }

    pub fn to_number(&self) -> f64 {
        match self {
            FieldValue::Text(text) => coerce_number(text),
            FieldValue::Number(value) => *value,
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Number(0.0)
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Number(value) => f.write_str(&number_to_string(*value)),
        }
    }
}

/// Renders a number the way an input element shows it: `-0` as `0`, and
/// exponent notation below `1e-6` and from `1e21` up.
pub fn number_to_string(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) || value.is_nan() {
        return format!("{}", value);
    }
    let exponential = format!("{:e}", value);
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => exponential,
    }
}

/// Converts raw input text to a number the way a loosely typed input would.
///
/// Surrounding whitespace is ignored and empty input is zero. Anything that is not
/// a decimal, `Infinity` or a `0x`/`0o`/`0b` literal becomes NaN.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            if digits.starts_with(['+', '-']) {
                return f64::NAN;
            }
            return u64::from_str_radix(digits, radix)
                .map(|value| value as f64)
                .unwrap_or(f64::NAN);
        }
    }
    // Rust's float parser also accepts "inf" and "nan", which must stay NaN here.
    if trimmed
        .chars()
        .any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E'))
    {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Formats a value with exactly two decimals, rounding ties away from zero.
pub fn to_fixed_2(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0.00".to_string();
    }
    if value.abs() >= 1e21 {
        return number_to_string(value);
    }
    // Only multiples of 1/8 with an odd numerator sit exactly on a tie.
    let eighths = value.abs() * 8.0;
    let value = if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        value + value.signum() * 0.001
    } else {
        value
    };
    format!("{:.2}", value)
}

/// Names of the editable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Name,
    Qty,
    Price,
}

impl ProductField {
    pub fn label(&self) -> &'static str {
        match self {
            ProductField::Name => NAME_LABEL,
            ProductField::Qty => QTY_LABEL,
            ProductField::Price => PRICE_LABEL,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown product field: {0}")]
pub struct ParseFieldError(pub String);

impl FromStr for ProductField {
    type Err = ParseFieldError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "name" => Ok(ProductField::Name),
            "qty" => Ok(ProductField::Qty),
            "price" => Ok(ProductField::Price),
            other => Err(ParseFieldError(other.to_string())),
        }
    }
}

/// The record under edit. All three fields are always defined.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub id: Option<ProductId>,
    pub name: String,
    pub qty: FieldValue,
    pub price: FieldValue,
}

impl ProductForm {
    /// The blank template: empty name, zero quantity and price, no identifier.
    pub fn blank() -> Self {
        Self {
            id: None,
            name: String::new(),
            qty: FieldValue::Number(0.0),
            price: FieldValue::Number(0.0),
        }
    }

    /// A field-for-field copy of `product`.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            qty: FieldValue::Number(product.qty),
            price: FieldValue::Number(product.price),
        }
    }

    pub fn seed(product: Option<&Product>) -> Self {
        product.map_or_else(Self::blank, Self::from_product)
    }

    /// Stores the raw input for `field`. Last write wins.
    pub fn set(&mut self, field: ProductField, raw: impl Into<String>) {
        let raw = raw.into();
        match field {
            ProductField::Name => self.name = raw,
            ProductField::Qty => self.qty = FieldValue::Text(raw),
            ProductField::Price => self.price = FieldValue::Text(raw),
        }
    }

    /// The value as the input widget shows it.
    pub fn display_value(&self, field: ProductField) -> String {
        match field {
            ProductField::Name => self.name.clone(),
            ProductField::Qty => self.qty.to_string(),
            ProductField::Price => self.price.to_string(),
        }
    }

    pub fn total(&self) -> f64 {
        self.qty.to_number() * self.price.to_number()
    }

    pub fn formatted_total(&self) -> String {
        format!("${}", to_fixed_2(self.total()))
    }

    /// Builds the write payload, coercing quantity and price to numbers.
    pub fn to_document(&self) -> ProductDocument {
        ProductDocument {
            name: self.name.clone(),
            qty: self.qty.to_number(),
            price: self.price.to_number(),
        }
    }
}

impl Default for ProductForm {
    fn default() -> Self {
        Self::blank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_template() {
        let form = ProductForm::seed(None);
        assert_eq!(form.id, None);
        assert_eq!(form.name, "");
        assert_eq!(form.qty, FieldValue::Number(0.0));
        assert_eq!(form.price, FieldValue::Number(0.0));
        assert_eq!(form.display_value(ProductField::Qty), "0");
    }

    #[test]
    fn test_seed_copies_every_field() {
        let product = Product::new("Widget", 4.0, 1.25).with_id("p1");
        let form = ProductForm::seed(Some(&product));

        assert_eq!(form.id, Some(ProductId::from("p1")));
        assert_eq!(form.name, "Widget");
        assert_eq!(form.qty, FieldValue::Number(4.0));
        assert_eq!(form.price, FieldValue::Number(1.25));
    }

    #[test]
    fn test_set_stores_text_verbatim() {
        let mut form = ProductForm::blank();
        form.set(ProductField::Qty, " 12 ");
        form.set(ProductField::Name, "Bolt");

        assert_eq!(form.qty, FieldValue::Text(" 12 ".to_string()));
        assert_eq!(form.name, "Bolt");
        assert_eq!(form.to_document().qty, 12.0);
    }

    #[test]
    fn test_truthiness() {
        assert!(!FieldValue::Number(0.0).is_truthy());
        assert!(!FieldValue::Number(f64::NAN).is_truthy());
        assert!(!FieldValue::Text(String::new()).is_truthy());
        assert!(FieldValue::Text("0".to_string()).is_truthy());
        assert!(FieldValue::Number(-1.0).is_truthy());
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("   "), 0.0);
        assert_eq!(coerce_number("2.5"), 2.5);
        assert_eq!(coerce_number(".5"), 0.5);
        assert_eq!(coerce_number("1e3"), 1000.0);
        assert_eq!(coerce_number("0x10"), 16.0);
        assert_eq!(coerce_number("-Infinity"), f64::NEG_INFINITY);
        assert!(coerce_number("abc").is_nan());
        assert!(coerce_number("inf").is_nan());
        assert!(coerce_number("1,5").is_nan());
    }

    #[test]
    fn test_formatted_total() {
        let mut form = ProductForm::blank();
        form.set(ProductField::Qty, "3");
        form.set(ProductField::Price, "2.5");
        assert_eq!(form.formatted_total(), "$7.50");

        assert_eq!(ProductForm::blank().formatted_total(), "$0.00");

        form.set(ProductField::Price, "abc");
        assert_eq!(form.formatted_total(), "$NaN");
    }

    #[test]
    fn test_to_fixed_rounds_ties_away_from_zero() {
        assert_eq!(to_fixed_2(0.125), "0.13");
        assert_eq!(to_fixed_2(-0.125), "-0.13");
        assert_eq!(to_fixed_2(2.375), "2.38");
        assert_eq!(to_fixed_2(1.005), "1.00");
        assert_eq!(to_fixed_2(-0.0), "0.00");
        assert_eq!(to_fixed_2(f64::INFINITY), "Infinity");
        assert_eq!(to_fixed_2(1e21), "1e+21");
    }

    #[test]
    fn test_number_display_matches_input_rendering() {
        assert_eq!(FieldValue::Number(-0.0).to_string(), "0");
        assert_eq!(FieldValue::Number(2.5).to_string(), "2.5");
        assert_eq!(FieldValue::Number(1e20).to_string(), "100000000000000000000");
        assert_eq!(FieldValue::Number(1e21).to_string(), "1e+21");
        assert_eq!(FieldValue::Number(-1.5e22).to_string(), "-1.5e+22");
        assert_eq!(FieldValue::Number(1.5e-7).to_string(), "1.5e-7");
        assert_eq!(FieldValue::Number(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn test_parse_field_name() {
        assert_eq!("qty".parse::<ProductField>(), Ok(ProductField::Qty));
        assert_eq!(
            "total".parse::<ProductField>(),
            Err(ParseFieldError("total".to_string()))
        );
    }
}
