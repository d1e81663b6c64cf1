//! Colors command - List every color with its recipe and palettes

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        config::DataArgs,
        output::{color_name, print_kv, print_section, print_subsection},
    },
    colors::ColorId,
    palette::PaletteId,
};

#[derive(Parser, Debug)]
#[command(about = "List all colors with their mixing recipes")]
pub struct ColorsArgs {
    /// Only show colors challenged in this palette
    #[arg(long, short = 'p')]
    pub palette: Option<PaletteId>,
}

pub fn execute(args: ColorsArgs, data: &DataArgs) -> Result<()> {
    let catalog = data.load_catalog()?;
    catalog.validate()?;
    let language = data.language();

    let ids: Vec<ColorId> = match args.palette {
        Some(id) => catalog
            .palette(id)
            .map(|palette| palette.challenge_color_ids.clone())
            .ok_or_else(|| anyhow::anyhow!("palette {id} is not defined in the catalog"))?,
        None => catalog.colors.iter().map(|color| color.id).collect(),
    };

    print_section(&match args.palette {
        Some(id) => format!("{id} palette colors"),
        None => "All colors".to_string(),
    });

    for id in ids {
        let Some(color) = catalog.color(id) else {
            tracing::warn!(color = %id, "color has no catalog entry");
            continue;
        };
        print_subsection(&format!("{} ({})", color.name.get(language), color.hex));

        let recipe = if catalog.mixing.is_fundamental(id) {
            "fundamental".to_string()
        } else {
            match catalog.mixing.recipe_for(id) {
                Some((a, b)) => format!(
                    "{} + {}",
                    color_name(&catalog, a, language),
                    color_name(&catalog, b, language)
                ),
                None => "no recipe".to_string(),
            }
        };
        print_kv("Recipe", &recipe);

        let palettes: Vec<&str> = catalog
            .palettes
            .iter()
            .filter(|palette| palette.challenge_color_ids.contains(&id))
            .map(|palette| palette.id.as_str())
            .collect();
        if !palettes.is_empty() {
            print_kv("Palettes", &palettes.join(", "));
        }
        if let Some(fact) = catalog.first_fact_about(id) {
            print_kv("Fun fact", fact.content.get(language));
        }
    }

    Ok(())
}
