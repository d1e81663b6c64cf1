//! Facts command - Browse fun facts by category

use anyhow::Result;
use clap::Parser;

use crate::{
    catalog::FactCategory,
    cli::{
        config::DataArgs,
        output::{format_colors, print_section},
    },
    colors::ColorId,
};

#[derive(Parser, Debug)]
#[command(about = "Browse fun facts")]
pub struct FactsArgs {
    /// Only show one category (general-colors, vision, light-science)
    #[arg(long, short = 'c')]
    pub category: Option<FactCategory>,

    /// Only show facts about this color
    #[arg(long)]
    pub color: Option<ColorId>,
}

pub fn execute(args: FactsArgs, data: &DataArgs) -> Result<()> {
    let catalog = data.load_catalog()?;
    let language = data.language();

    let categories: Vec<FactCategory> = match args.category {
        Some(category) => vec![category],
        None => FactCategory::ALL.to_vec(),
    };

    let mut shown = 0;
    for category in categories {
        let facts: Vec<_> = catalog
            .facts_in(category)
            .filter(|fact| args.color.is_none_or(|color| fact.is_about(color)))
            .collect();
        if facts.is_empty() {
            continue;
        }

        print_section(category.label().get(language));
        for fact in facts {
            println!("\n[{}] {}", fact.id, fact.content.get(language));
            if !fact.related_color_ids.is_empty() {
                println!(
                    "  Colors: {}",
                    format_colors(&catalog, &fact.related_color_ids, language)
                );
            }
            shown += 1;
        }
    }

    if shown == 0 {
        println!("No fun facts match.");
    }
    Ok(())
}
