//! Browser utility calculators: fluid-size expressions, aspect ratios,
//! chat deep links and placeholder text.

use once_cell::sync::Lazy;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::seq::IndexedRandom;
use rand::Rng;
use regex::Regex;
use std::fmt;

static NON_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Characters `encodeURIComponent` leaves verbatim besides alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string for use inside a URL query value.
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Validation failures raised by the calculators. Display strings are the
/// user-facing alert texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    MissingClampInput,
    DegenerateClampRange,
    MissingRatioInput,
    MissingPhoneNumber,
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolError::MissingClampInput => write!(f, "Por favor completa todos los campos"),
            ToolError::DegenerateClampRange => {
                write!(f, "El ancho mínimo y el máximo deben ser distintos")
            }
            ToolError::MissingRatioInput => write!(f, "Ingresa ancho y alto"),
            ToolError::MissingPhoneNumber => {
                write!(f, "Por favor ingresa un número de teléfono")
            }
        }
    }
}

impl std::error::Error for ToolError {}

// ──────────────────────────────────────────────────────────────────────────────
// Fluid-size calculator

/// Root font size assumed for px→rem conversion.
pub const ROOT_FONT_PX: f64 = 16.0;

/// A computed fluid-size expression: `clamp(min, intercept + slope·vw, max)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClampExpression {
    pub min_rem: f64,
    pub max_rem: f64,
    pub intercept_rem: f64,
    pub slope_vw: f64,
}

impl ClampExpression {
    /// Render the CSS expression with 4 decimal places per term.
    pub fn css(&self) -> String {
        format!(
            "clamp({:.4}rem, {:.4}rem + {:.4}vw, {:.4}rem)",
            self.min_rem, self.intercept_rem, self.slope_vw, self.max_rem
        )
    }
}

/// Linearly interpolate a font size between two viewport widths.
///
/// All inputs are pixels. Empty form fields arrive as NaN and are rejected
/// together with zeroes; equal widths are rejected to keep the slope finite.
pub fn clamp_expression(
    min_width: f64,
    max_width: f64,
    min_font: f64,
    max_font: f64,
) -> Result<ClampExpression, ToolError> {
    for value in [min_width, max_width, min_font, max_font] {
        if !value.is_finite() || value == 0.0 {
            return Err(ToolError::MissingClampInput);
        }
    }
    if min_width == max_width {
        return Err(ToolError::DegenerateClampRange);
    }

    // y = mx + c through (minWidth, minFont) and (maxWidth, maxFont)
    let slope = (max_font - min_font) / (max_width - min_width);
    let intercept = min_font - min_width * slope;

    Ok(ClampExpression {
        min_rem: min_font / ROOT_FONT_PX,
        max_rem: max_font / ROOT_FONT_PX,
        intercept_rem: intercept / ROOT_FONT_PX,
        slope_vw: slope * 100.0,
    })
}

/// Element id guarding a font stylesheet against duplicate insertion.
pub fn font_link_id(family: &str) -> String {
    format!(
        "google-font-{}",
        WHITESPACE.replace_all(family.trim(), "-").to_lowercase()
    )
}

/// Google Fonts stylesheet URL for a family, full weight axis.
pub fn font_stylesheet_url(family: &str) -> String {
    format!(
        "https://fonts.googleapis.com/css2?family={}:wght@100..900&display=swap",
        WHITESPACE.replace_all(family.trim(), "+")
    )
}

// ──────────────────────────────────────────────────────────────────────────────
// Aspect-ratio reducer

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Reduce a width/height pair by its greatest common divisor.
pub fn reduce_ratio(width: u64, height: u64) -> Result<(u64, u64), ToolError> {
    if width == 0 || height == 0 {
        return Err(ToolError::MissingRatioInput);
    }
    let divisor = gcd(width, height);
    Ok((width / divisor, height / divisor))
}

// ──────────────────────────────────────────────────────────────────────────────
// Chat link generator

/// Base of the chat deep-link format.
pub const CHAT_LINK_BASE: &str = "https://wa.me";

/// Build a chat deep link from a free-form phone number and message.
/// Everything but digits is stripped from the number.
pub fn chat_link(number: &str, message: &str) -> Result<String, ToolError> {
    let digits = NON_DIGITS.replace_all(number, "");
    if digits.is_empty() {
        return Err(ToolError::MissingPhoneNumber);
    }
    Ok(format!(
        "{}/{}?text={}",
        CHAT_LINK_BASE,
        digits,
        encode_uri_component(message)
    ))
}

// ──────────────────────────────────────────────────────────────────────────────
// Placeholder text generator

/// Vocabulary the generator samples from, uniformly with replacement.
const LOREM_WORDS: &[&str] = &[
    "lorem",
    "ipsum",
    "dolor",
    "sit",
    "amet",
    "consectetur",
    "adipiscing",
    "elit",
    "sed",
    "do",
    "eiusmod",
    "tempor",
    "incididunt",
    "ut",
    "labore",
    "et",
    "dolore",
    "magna",
    "aliqua",
    "enim",
    "ad",
    "minim",
    "veniam",
    "quis",
    "nostrud",
    "exercitation",
    "ullamco",
    "laboris",
    "nisi",
    "aliquip",
    "ex",
    "ea",
    "commodo",
    "consequat",
    "duis",
    "aute",
    "irure",
    "in",
    "reprehenderit",
    "voluptate",
    "velit",
    "esse",
    "cillum",
    "eu",
    "fugiat",
    "nulla",
    "pariatur",
    "excepteur",
    "sint",
    "occaecat",
    "cupidatat",
    "non",
    "proident",
    "sunt",
    "culpa",
    "qui",
    "officia",
    "deserunt",
    "mollit",
    "anim",
    "id",
    "est",
    "laborum",
];

/// A visual "line" of filler is approximated as 12 words.
pub const WORDS_PER_LINE: usize = 12;

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Generate `paragraphs` blocks of `lines_per_paragraph` lines of filler
/// text. Each paragraph starts capitalized, ends with a period, and blocks
/// are separated by a blank line. The caller supplies the rng so output can
/// be seeded in tests.
pub fn placeholder_text(
    paragraphs: usize,
    lines_per_paragraph: usize,
    rng: &mut impl Rng,
) -> String {
    let word_count = lines_per_paragraph * WORDS_PER_LINE;
    let mut blocks = Vec::with_capacity(paragraphs);
    for _ in 0..paragraphs {
        let mut body = String::new();
        for position in 0..word_count {
            let word = *LOREM_WORDS.choose(rng).expect("vocabulary is non-empty");
            if position == 0 {
                body.push_str(&capitalize(word));
            } else {
                body.push(' ');
                body.push_str(word);
            }
        }
        blocks.push(format!("{}.", body));
    }
    blocks.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn clamp_reference_vector() {
        let expr = clamp_expression(320.0, 1280.0, 16.0, 24.0).unwrap();
        assert!((expr.slope_vw / 100.0 - 0.008_333).abs() < 1e-6);
        let css = expr.css();
        assert!(css.starts_with("clamp(1.0000rem, "));
        assert!(css.ends_with(", 1.5000rem)"));
        assert_eq!(css, "clamp(1.0000rem, 0.8333rem + 0.8333vw, 1.5000rem)");
    }

    #[test]
    fn clamp_rejects_zero_and_nan_inputs() {
        assert_eq!(
            clamp_expression(0.0, 1280.0, 16.0, 24.0),
            Err(ToolError::MissingClampInput)
        );
        assert_eq!(
            clamp_expression(320.0, 1280.0, f64::NAN, 24.0),
            Err(ToolError::MissingClampInput)
        );
    }

    #[test]
    fn clamp_rejects_equal_widths() {
        assert_eq!(
            clamp_expression(800.0, 800.0, 16.0, 24.0),
            Err(ToolError::DegenerateClampRange)
        );
    }

    #[test]
    fn ratio_reduces_full_hd() {
        assert_eq!(reduce_ratio(1920, 1080), Ok((16, 9)));
        assert_eq!(reduce_ratio(1024, 768), Ok((4, 3)));
        assert_eq!(reduce_ratio(7, 5), Ok((7, 5)));
    }

    #[test]
    fn ratio_rejects_zero() {
        assert_eq!(reduce_ratio(0, 5), Err(ToolError::MissingRatioInput));
        assert_eq!(reduce_ratio(5, 0), Err(ToolError::MissingRatioInput));
    }

    #[test]
    fn chat_link_keeps_digits_only() {
        let link = chat_link("(555) 123-4567", "hi").unwrap();
        assert_eq!(link, "https://wa.me/5551234567?text=hi");
    }

    #[test]
    fn chat_link_encodes_message() {
        let link = chat_link("51 999 888 777", "hola, ¿qué tal?").unwrap();
        assert_eq!(
            link,
            "https://wa.me/51999888777?text=hola%2C%20%C2%BFqu%C3%A9%20tal%3F"
        );
    }

    #[test]
    fn chat_link_rejects_digitless_number() {
        assert_eq!(chat_link("abc-def", "hi"), Err(ToolError::MissingPhoneNumber));
        assert_eq!(chat_link("", "hi"), Err(ToolError::MissingPhoneNumber));
    }

    #[test]
    fn encode_matches_uri_component_rules() {
        assert_eq!(encode_uri_component("a b"), "a%20b");
        assert_eq!(encode_uri_component("a\nb"), "a%0Ab");
        // the unreserved marks stay verbatim
        assert_eq!(encode_uri_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_uri_component("a&b=c"), "a%26b%3Dc");
    }

    #[test]
    fn placeholder_text_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let text = placeholder_text(3, 2, &mut rng);
        let blocks: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(blocks.len(), 3);
        for block in blocks {
            assert!(block.ends_with('.'));
            let words: Vec<&str> = block.trim_end_matches('.').split(' ').collect();
            assert_eq!(words.len(), 2 * WORDS_PER_LINE);
            let first = words[0];
            assert!(first.chars().next().unwrap().is_uppercase());
            assert!(LOREM_WORDS.contains(&first.to_lowercase().as_str()));
            for word in &words[1..] {
                assert!(LOREM_WORDS.contains(word), "unknown word {:?}", word);
            }
        }
    }

    #[test]
    fn placeholder_text_zero_paragraphs_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(placeholder_text(0, 5, &mut rng), "");
    }

    #[test]
    fn font_slug_and_url() {
        assert_eq!(font_link_id("Open  Sans"), "google-font-open-sans");
        assert_eq!(font_link_id(" Roboto "), "google-font-roboto");
        assert_eq!(
            font_stylesheet_url("Open Sans"),
            "https://fonts.googleapis.com/css2?family=Open+Sans:wght@100..900&display=swap"
        );
    }
}
