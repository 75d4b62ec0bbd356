//! Sprite catalog builder
//!
//! Runs the full pipeline for one (manifest, atlas) pair:
//!
//! ```text
//! atlas bytes ──► AtlasImage::decode_with_limit()
//! manifest bytes ──► parse_manifest() ──► into_sorted_entries()
//!                                              │  per entry (rayon above threshold)
//!                                              ▼
//!                                normalize_rect() ──► extract_region()
//!                                              │
//!                                              ▼
//!                                 SpriteCatalog (sorted by name)
//! ```
//!
//! Entries are sorted before processing and results are collected in that
//! order, so the catalog and the reported error never depend on how the
//! work was scheduled.

use std::path::Path;

use rayon::prelude::*;

use crate::atlas::{extract_region, normalize_rect, AtlasImage};
use crate::catalog::record::{SkippedEntry, SpriteCatalog, SpriteRecord};
use crate::core::config::{CatalogConfig, FailurePolicy};
use crate::core::error::{CatalogError, Result};
use crate::manifest::{parse_manifest, SpriteManifestEntry};

/// Builds [`SpriteCatalog`]s according to a [`CatalogConfig`]
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    config: CatalogConfig,
}

impl CatalogBuilder {
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Build a catalog from already-read manifest and atlas bytes.
    ///
    /// All-or-nothing: any error aborts the build and no partial catalog is
    /// returned. Under [`FailurePolicy::SkipInvalid`] entries with invalid
    /// rects are left out instead and listed in [`SpriteCatalog::skipped`].
    pub fn build(&self, manifest: &[u8], atlas: &[u8]) -> Result<SpriteCatalog> {
        self.config.validate().map_err(CatalogError::Config)?;

        let atlas = AtlasImage::decode_with_limit(atlas, self.config.max_atlas_dimension)?;
        let entries = parse_manifest(manifest)?.into_sorted_entries();

        let outcomes = self.extract_all(&atlas, &entries);
        let catalog = self.assemble(outcomes)?;

        tracing::info!(
            "Built sprite catalog: {} sprites from {}x{} atlas ({} skipped)",
            catalog.len(),
            atlas.width(),
            atlas.height(),
            catalog.skipped().len()
        );
        Ok(catalog)
    }

    /// Read both resources from disk and build.
    pub fn build_from_paths(
        &self,
        manifest_path: &Path,
        atlas_path: &Path,
    ) -> Result<SpriteCatalog> {
        let manifest = read_resource(manifest_path)?;
        let atlas = read_resource(atlas_path)?;
        self.build(&manifest, &atlas)
    }

    /// Build from `<dir>/<stem>.json` and `<dir>/<stem>.png`.
    pub fn build_from_stem(&self, dir: &Path, stem: &str) -> Result<SpriteCatalog> {
        let manifest_path = dir.join(format!("{}.json", stem));
        let atlas_path = dir.join(format!("{}.png", stem));
        self.build_from_paths(&manifest_path, &atlas_path)
    }

    /// Normalize and extract every entry. Output order matches `entries`.
    fn extract_all(
        &self,
        atlas: &AtlasImage,
        entries: &[SpriteManifestEntry],
    ) -> Vec<Result<SpriteRecord>> {
        if entries.len() >= self.config.parallel_threshold {
            tracing::debug!("Extracting {} sprites in parallel", entries.len());
            // PARALLEL: workers only read the shared atlas
            entries
                .par_iter()
                .map(|entry| extract_entry(atlas, entry))
                .collect()
        } else {
            entries
                .iter()
                .map(|entry| extract_entry(atlas, entry))
                .collect()
        }
    }

    fn assemble(&self, outcomes: Vec<Result<SpriteRecord>>) -> Result<SpriteCatalog> {
        let mut records = Vec::with_capacity(outcomes.len());
        let mut skipped = Vec::new();

        for outcome in outcomes {
            match outcome {
                Ok(record) => records.push(record),
                Err(CatalogError::InvalidRect { name, rect })
                    if self.config.failure_policy == FailurePolicy::SkipInvalid =>
                {
                    tracing::warn!("Skipping sprite '{}' with invalid rect ({})", name, rect);
                    skipped.push(SkippedEntry { name, rect });
                }
                Err(e) => return Err(e),
            }
        }

        Ok(SpriteCatalog::new(records, skipped))
    }
}

/// Build a catalog with the default configuration.
pub fn build_catalog(manifest: &[u8], atlas: &[u8]) -> Result<SpriteCatalog> {
    CatalogBuilder::default().build(manifest, atlas)
}

fn extract_entry(atlas: &AtlasImage, entry: &SpriteManifestEntry) -> Result<SpriteRecord> {
    let rect = normalize_rect(&entry.name, &entry.rect, atlas.dimensions())?;
    let image = extract_region(atlas, &entry.name, &rect)?;
    Ok(SpriteRecord::new(entry.name.clone(), image))
}

fn read_resource(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CatalogError::ResourceMissing(path.to_path_buf()),
        _ => CatalogError::IoError(e),
    })
}
