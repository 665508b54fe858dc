//! Classify command - product type of item names.

use clap::Args;

use quotex_core::classify_product;

/// Arguments for the classify command.
#[derive(Args)]
pub struct ClassifyArgs {
    /// Item names to classify
    #[arg(required = true)]
    names: Vec<String>,
}

pub async fn run(args: ClassifyArgs) -> anyhow::Result<()> {
    for name in &args.names {
        let class = classify_product(name);
        println!(
            "{}",
            serde_json::to_string(&serde_json::json!({
                "name": name,
                "product_type": class.product_type,
                "view": class.view,
            }))?
        );
    }
    Ok(())
}
