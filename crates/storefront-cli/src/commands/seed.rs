//! Demo catalog seeding

use anyhow::{bail, Context, Result};
use storefront_config::DatabaseConfig;
use storefront_core::{CatalogStore, CategoryStorage, NewCategory, NewProduct, NewProductTag, NewTag, StorageResult};
use tracing::info;

use super::open_store;

const CATEGORIES: [&str; 5] = ["Shirts", "Shorts", "Music", "Hats", "Shoes"];

/// (name, price, stock, index into CATEGORIES)
const PRODUCTS: [(&str, f64, i64, usize); 5] = [
    ("Plain T-Shirt", 14.99, 14, 0),
    ("Running Sneakers", 90.0, 25, 4),
    ("Branded Baseball Hat", 22.99, 12, 3),
    ("Top 40 Music Compilation Vinyl Record", 12.99, 50, 2),
    ("Cargo Shorts", 29.99, 22, 1),
];

const TAGS: [&str; 8] = [
    "rock music",
    "pop music",
    "blue",
    "red",
    "green",
    "white",
    "gold",
    "pop culture",
];

/// (index into PRODUCTS, index into TAGS)
const PRODUCT_TAGS: [(usize, usize); 12] = [
    (0, 5),
    (0, 6),
    (0, 7),
    (1, 5),
    (2, 0),
    (2, 2),
    (2, 3),
    (2, 4),
    (3, 0),
    (3, 1),
    (3, 7),
    (4, 2),
];

/// Row counts written by [`seed_catalog`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub categories: usize,
    pub products: usize,
    pub tags: usize,
    pub product_tags: usize,
}

/// Seed the configured database, refusing to touch an existing catalog
/// unless `force` is set
pub async fn execute(database: &DatabaseConfig, force: bool) -> Result<()> {
    let store = open_store(database)?;

    if !store.list_categories().await?.is_empty() {
        if !force {
            bail!(
                "Catalog in {} already has data; rerun with --force to replace it",
                database.path.display()
            );
        }
        clear_catalog(&store).await.context("Failed to clear catalog")?;
    }

    let summary = seed_catalog(&store).await.context("Failed to seed catalog")?;
    info!(?summary, "Seeded demo catalog");
    println!(
        "Seeded {} categories, {} products, {} tags and {} product tags into {}",
        summary.categories,
        summary.products,
        summary.tags,
        summary.product_tags,
        database.path.display()
    );
    Ok(())
}

/// Insert the demo catalog, resolving references through the ids the store
/// hands back
pub async fn seed_catalog<S: CatalogStore + ?Sized>(store: &S) -> StorageResult<SeedSummary> {
    let mut category_ids = Vec::with_capacity(CATEGORIES.len());
    for name in CATEGORIES {
        let category = store
            .create_category(NewCategory {
                category_name: name.to_string(),
            })
            .await?;
        category_ids.push(category.id);
    }

    let mut product_ids = Vec::with_capacity(PRODUCTS.len());
    for (name, price, stock, category) in PRODUCTS {
        let product = store
            .create_product(NewProduct {
                product_name: name.to_string(),
                price,
                stock,
                category_id: Some(category_ids[category]),
            })
            .await?;
        product_ids.push(product.id);
    }

    let mut tag_ids = Vec::with_capacity(TAGS.len());
    for name in TAGS {
        let tag = store
            .create_tag(NewTag {
                tag_name: name.to_string(),
            })
            .await?;
        tag_ids.push(tag.id);
    }

    let links = PRODUCT_TAGS
        .iter()
        .map(|&(product, tag)| NewProductTag {
            product_id: product_ids[product],
            tag_id: tag_ids[tag],
        })
        .collect();
    let product_tags = store.bulk_create_product_tags(links).await?;

    Ok(SeedSummary {
        categories: category_ids.len(),
        products: product_ids.len(),
        tags: tag_ids.len(),
        product_tags: product_tags.len(),
    })
}

/// Delete every category, product and tag
async fn clear_catalog<S: CatalogStore + ?Sized>(store: &S) -> StorageResult<()> {
    for category in store.list_categories().await? {
        store.delete_category(category.category.id).await?;
    }
    for product in store.list_products().await? {
        store.delete_product(product.product.id).await?;
    }
    for tag in store.list_tags().await? {
        store.delete_tag(tag.tag.id).await?;
    }
    Ok(())
}
