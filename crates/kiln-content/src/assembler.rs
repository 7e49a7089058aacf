//! Assembly of one markdown file into a [`Material`].

use std::fs;
use std::path::{Component, Path, PathBuf};

use chrono::{DateTime, Utc};
use kiln_meta::{FrontMatter, Mapping, parse_front_matter, parse_records, strip_front_matter};

use crate::assets::list_assets;
use crate::context::LoadContext;
use crate::error::MaterialError;
use crate::material::{Hreflang, Material};
use crate::path::ItemPath;
use crate::schedule::Schedule;
use crate::slug::safe_slug;

/// Front matter keys consumed by typed fields and excluded from `user_defined`.
const RESERVED_KEYS: [&str; 7] = [
    "slug",
    "title",
    "description",
    "coverImage",
    "image",
    "template",
    "userDefined",
];

/// Companion override extensions, in precedence order.
const OVERRIDE_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

/// Companion data file extensions, in concatenation order.
const DATA_EXTENSIONS: [&str; 2] = ["data.yaml", "data.yml"];

/// Builds [`Material`]s from markdown files.
///
/// Holds the run's [`LoadContext`] so every item is filtered against the
/// same clock.
pub struct MaterialAssembler<'a> {
    context: &'a LoadContext,
}

impl<'a> MaterialAssembler<'a> {
    #[must_use]
    pub fn new(context: &'a LoadContext) -> Self {
        Self { context }
    }

    /// Assemble the material for `path` under the category `root`.
    ///
    /// Returns `Ok(None)` if the file does not exist or the item is a draft,
    /// not yet published, or expired. Missing companion files and assets are
    /// not errors.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError`] if the markdown file or a companion file
    /// exists but cannot be read or parsed.
    pub fn assemble(
        &self,
        path: &Path,
        root: &Path,
        slug_prefix: Option<&str>,
        template: &str,
    ) -> Result<Option<Material>, MaterialError> {
        if !path.is_file() {
            return Ok(None);
        }

        let item = ItemPath::resolve(path, root);
        let raw = fs::read_to_string(path).map_err(|e| MaterialError::io(path, e))?;
        let mut front = parse_front_matter(&raw).map_err(|e| MaterialError::parse(path, e))?;

        if let Some(override_path) = companion(&item, &OVERRIDE_EXTENSIONS) {
            let content = read(&override_path)?;
            let overrides = FrontMatter::from_yaml(&content)
                .map_err(|e| MaterialError::parse(&override_path, e))?;
            front = front.merged(overrides);
        }

        let mut data = Vec::new();
        for data_path in companions(&item, &DATA_EXTENSIONS) {
            let records =
                parse_records(&read(&data_path)?).map_err(|e| MaterialError::parse(&data_path, e))?;
            data.extend(records);
        }

        let schedule = Schedule::from_front_matter(&front, self.context);
        let visibility = schedule.visibility(self.context.now);
        if !visibility.is_visible() {
            tracing::debug!(path = %path.display(), ?visibility, "Excluding content item");
            return Ok(None);
        }

        let slug = front
            .non_empty_string("slug")
            .unwrap_or(&item.default_slug);
        let assets_path = match front.non_empty_string("assets.path") {
            Some(custom) if stays_inside(custom) => custom.to_owned(),
            Some(custom) => {
                tracing::warn!(
                    path = %path.display(),
                    assets_path = custom,
                    "Ignoring assets path outside the item directory"
                );
                item.id.clone()
            }
            None => item.id.clone(),
        };
        let assets_dir = item.dir.join(&assets_path);

        let image = front
            .non_empty_string("image")
            .filter(|image| assets_dir.join(image).is_file())
            .map(str::to_owned);

        let mut css = auto_include(&assets_dir, &assets_path, "style.css");
        css.extend(front.string_list("css").unwrap_or_default());
        let mut js = auto_include(&assets_dir, &assets_path, "main.js");
        js.extend(front.string_list("js").unwrap_or_default());

        let material = Material {
            slug: safe_slug(slug, slug_prefix),
            title: front.string("title").unwrap_or_default().to_owned(),
            description: front.string("description").unwrap_or_default().to_owned(),
            image,
            draft: schedule.draft,
            publication: schedule.publication,
            expiration: schedule.expiration,
            css,
            js,
            template: front.string("template").unwrap_or(template).to_owned(),
            last_modification: last_modification(path)?,
            redirects: front.string_list("redirects.from").unwrap_or_default(),
            user_defined: user_defined(&front),
            data,
            markdown: strip_front_matter(&raw).to_owned(),
            assets: list_assets(&assets_dir, self.context.recursive_assets),
            noindex: front.bool("noindex").unwrap_or(false),
            canonical: front.non_empty_string("canonical").map(str::to_owned),
            hreflang: hreflang(&front),
            assets_path,
            front_matter: front,
            id: item.id,
            location: item.dir,
        };

        tracing::debug!(path = %path.display(), slug = %material.slug, "Assembled content item");
        Ok(Some(material))
    }
}

/// Existing `<id>.<ext>` files next to the item, in `extensions` order.
fn companions<'a>(item: &'a ItemPath, extensions: &'a [&str]) -> impl Iterator<Item = PathBuf> + 'a {
    extensions
        .iter()
        .map(|ext| item.dir.join(format!("{}.{ext}", item.id)))
        .filter(|candidate| candidate.is_file())
}

/// First existing `<id>.<ext>` file next to the item.
fn companion(item: &ItemPath, extensions: &[&str]) -> Option<PathBuf> {
    companions(item, extensions).next()
}

/// Whether a relative path joined onto a directory stays inside it.
fn stays_inside(path: &str) -> bool {
    Path::new(path)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

fn read(path: &Path) -> Result<String, MaterialError> {
    fs::read_to_string(path).map_err(|e| MaterialError::io(path, e))
}

/// `./<assets_path>/<file>` if the file exists in the assets directory.
fn auto_include(assets_dir: &Path, assets_path: &str, file: &str) -> Vec<String> {
    if assets_dir.join(file).is_file() {
        vec![format!("./{assets_path}/{file}")]
    } else {
        Vec::new()
    }
}

fn last_modification(path: &Path) -> Result<DateTime<Utc>, MaterialError> {
    fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map(DateTime::<Utc>::from)
        .map_err(|e| MaterialError::io(path, e))
}

/// Front matter minus reserved keys, with an explicit `userDefined` map
/// merged on top.
fn user_defined(front: &FrontMatter) -> Mapping {
    let rest = FrontMatter::from(front.without_keys(&RESERVED_KEYS));
    match front.mapping("userDefined") {
        Some(explicit) => rest.merged(FrontMatter::from(explicit.clone())).into_mapping(),
        None => rest.into_mapping(),
    }
}

/// Valid `{lang, url}` entries; an explicit empty list if the key exists
/// but nothing valid survives.
fn hreflang(front: &FrontMatter) -> Option<Vec<Hreflang>> {
    if !front.contains("hreflang") {
        return None;
    }
    let entries = front
        .mappings("hreflang")
        .unwrap_or_default()
        .into_iter()
        .filter_map(|entry| {
            let field = |key: &str| {
                entry
                    .get(key)
                    .and_then(kiln_meta::Value::as_str)
                    .filter(|s| !s.is_empty())
                    .map(str::to_owned)
            };
            Some(Hreflang {
                lang: field("lang")?,
                url: field("url")?,
            })
        })
        .collect();
    Some(entries)
}
