//! Output formatting for CLI

use crate::{
    catalog::Catalog,
    colors::{ColorId, Language},
    progress::Stars,
};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Stars as filled and empty glyphs, e.g. `★★☆`.
pub fn format_stars(stars: Stars) -> String {
    let filled = usize::from(stars.value());
    format!("{}{}", "★".repeat(filled), "☆".repeat(3 - filled))
}

/// Localized color name, falling back to the identifier.
pub fn color_name(catalog: &Catalog, id: ColorId, language: Language) -> String {
    catalog
        .color(id)
        .map(|color| color.name.get(language).to_string())
        .unwrap_or_else(|| id.to_string())
}

pub fn format_colors(catalog: &Catalog, ids: &[ColorId], language: Language) -> String {
    if ids.is_empty() {
        return "-".to_string();
    }
    ids.iter()
        .map(|id| color_name(catalog, *id, language))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_render_three_slots() {
        assert_eq!(format_stars(Stars::ZERO), "☆☆☆");
        assert_eq!(format_stars(Stars::TWO), "★★☆");
        assert_eq!(format_stars(Stars::THREE), "★★★");
    }

    #[test]
    fn color_lists_use_localized_names() {
        let catalog = Catalog::standard();
        assert_eq!(
            format_colors(&catalog, &[ColorId::Red, ColorId::Blue], Language::En),
            "Red, Blue"
        );
        assert_eq!(format_colors(&catalog, &[], Language::En), "-");
    }
}
