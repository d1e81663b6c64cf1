//! Mix command - Look up the result of mixing two colors

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{config::DataArgs, output::color_name},
    colors::ColorId,
};

#[derive(Parser, Debug)]
#[command(about = "Mix two colors")]
pub struct MixArgs {
    /// First color (e.g. red)
    pub first: ColorId,

    /// Second color (e.g. yellow)
    pub second: ColorId,
}

pub fn execute(args: MixArgs, data: &DataArgs) -> Result<()> {
    let catalog = data.load_catalog()?;
    let language = data.language();
    let first = color_name(&catalog, args.first, language);
    let second = color_name(&catalog, args.second, language);

    match catalog.mixing.lookup(args.first, args.second) {
        Some(result) => {
            println!("{first} + {second} = {}", color_name(&catalog, result, language));
        }
        None => println!("{first} + {second} does not make a new color"),
    }
    Ok(())
}
