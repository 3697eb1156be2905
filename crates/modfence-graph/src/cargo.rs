use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobSetBuilder};
use modfence_types::{Module, ModulePath};
use std::path::PathBuf;
use toml_edit::{ImDocument, Item};
use walkdir::WalkDir;

/// Build a module graph from the Cargo workspace rooted at `repo_root`.
///
/// Each package becomes one module: its path is the package name, its
/// imports are the names of every declared dependency (normal, dev,
/// build, and target-specific), deduplicated and sorted. A virtual root
/// manifest (no `[package]`) contributes no module of its own.
pub fn load_cargo_workspace(repo_root: &Utf8Path) -> anyhow::Result<Vec<Module>> {
    let manifests = discover_manifests(repo_root)?;

    let mut modules = Vec::new();
    for rel in &manifests {
        let abs = repo_root.join(rel);
        let text =
            std::fs::read_to_string(&abs).with_context(|| format!("read {}", abs))?;
        if let Some(module) = parse_manifest(rel, &text)? {
            modules.push(module);
        }
    }

    // Snapshot order is stable regardless of filesystem walk order.
    modules.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(modules)
}

/// Discover Cargo manifests for the workspace rooted at `repo_root`.
///
/// If the root manifest has `[workspace]`, expand `members` (with glob
/// support) and apply `exclude`; otherwise the repository is a single
/// crate and only the root manifest is returned.
fn discover_manifests(repo_root: &Utf8Path) -> anyhow::Result<Vec<Utf8PathBuf>> {
    let root = repo_root.join("Cargo.toml");
    let text = std::fs::read_to_string(&root).with_context(|| format!("read {}", root))?;
    let doc: ImDocument<&str> = ImDocument::parse(text.as_str()).context("parse root Cargo.toml")?;

    let mut out = vec![Utf8PathBuf::from("Cargo.toml")];

    let Some(workspace) = doc.get("workspace") else {
        return Ok(out);
    };

    let members = string_array(workspace.get("members"));
    let excludes = string_array(workspace.get("exclude"));

    let member_set = build_globset(&members).context("compile members globset")?;
    let exclude_set = build_globset(&excludes).context("compile exclude globset")?;

    for abs in WalkDir::new(repo_root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && e.file_name() == "Cargo.toml")
        .filter_map(|e| pathbuf_to_utf8(e.path().to_path_buf()))
    {
        let rel = abs
            .strip_prefix(repo_root)
            .unwrap_or(&abs)
            .as_str()
            .replace('\\', "/");
        if rel == "Cargo.toml" {
            continue;
        }

        let dir_rel = Utf8Path::new(&rel)
            .parent()
            .map(|p| p.as_str())
            .unwrap_or("");

        let is_member =
            members.is_empty() || member_set.is_match(&rel) || member_set.is_match(dir_rel);
        let is_excluded = exclude_set.is_match(&rel) || exclude_set.is_match(dir_rel);

        if is_member && !is_excluded {
            out.push(Utf8PathBuf::from(rel));
        }
    }

    out.sort();
    out.dedup();
    Ok(out)
}

fn parse_manifest(manifest_path: &Utf8Path, text: &str) -> anyhow::Result<Option<Module>> {
    let doc: ImDocument<&str> =
        ImDocument::parse(text).with_context(|| format!("parse {}", manifest_path))?;

    let Some(name) = doc
        .get("package")
        .and_then(|p| p.get("name"))
        .and_then(|n| n.as_str())
    else {
        return Ok(None);
    };

    let mut imports: Vec<ModulePath> = Vec::new();
    collect_dep_names(doc.get("dependencies"), &mut imports);
    collect_dep_names(doc.get("dev-dependencies"), &mut imports);
    collect_dep_names(doc.get("build-dependencies"), &mut imports);

    if let Some(targets) = doc.get("target").and_then(Item::as_table) {
        for (_, target) in targets.iter() {
            collect_dep_names(target.get("dependencies"), &mut imports);
            collect_dep_names(target.get("dev-dependencies"), &mut imports);
            collect_dep_names(target.get("build-dependencies"), &mut imports);
        }
    }

    imports.sort();
    imports.dedup();

    Ok(Some(Module::new(name, imports)))
}

fn collect_dep_names(table: Option<&Item>, out: &mut Vec<ModulePath>) {
    let Some(table) = table.and_then(Item::as_table_like) else {
        return;
    };
    for (name, value) in table.iter() {
        // `foo = { package = "bar" }` imports bar under the alias foo.
        let renamed = value
            .get("package")
            .and_then(|p| p.as_str())
            .unwrap_or(name);
        out.push(ModulePath::new(renamed));
    }
}

fn string_array(item: Option<&Item>) -> Vec<String> {
    item.and_then(|i| i.as_array())
        .map(|a| {
            a.iter()
                .filter_map(|v| v.as_str().map(|s| s.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

fn build_globset(patterns: &[String]) -> anyhow::Result<globset::GlobSet> {
    let mut b = GlobSetBuilder::new();
    for p in patterns {
        // Cargo workspace globs are relative paths.
        b.add(Glob::new(p)?);
    }
    Ok(b.build()?)
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}
