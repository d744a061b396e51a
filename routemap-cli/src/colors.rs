//! Terminal colors for CLI output.
//!
//! The palette is Catppuccin Mocha. [`for_method`] gives each HTTP verb a
//! color in the `routes` listing: reads are green, creates blue, updates
//! yellow, deletes red. Anything else is dimmed.

use colored::CustomColor;

/// Catppuccin Mocha color palette.
pub fn mauve() -> CustomColor {
    CustomColor::new(203, 166, 247)
}

pub fn lavender() -> CustomColor {
    CustomColor::new(180, 190, 254)
}

pub fn sky() -> CustomColor {
    CustomColor::new(137, 220, 235)
}

pub fn subtext() -> CustomColor {
    CustomColor::new(166, 173, 200)
}

pub fn green() -> CustomColor {
    CustomColor::new(166, 227, 161)
}

pub fn yellow() -> CustomColor {
    CustomColor::new(249, 226, 175)
}

pub fn red() -> CustomColor {
    CustomColor::new(243, 139, 168)
}

pub fn blue() -> CustomColor {
    CustomColor::new(137, 180, 250)
}

/// Color for an HTTP verb: reads green, writes blue/yellow, deletes red.
pub fn for_method(method: &str) -> CustomColor {
    match method {
        "GET" | "HEAD" | "OPTIONS" => green(),
        "POST" => blue(),
        "PUT" | "PATCH" => yellow(),
        "DELETE" => red(),
        _ => subtext(),
    }
}
