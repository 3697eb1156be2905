use anyhow::Context;
use modfence_types::Module;
use serde::Deserialize;

/// On-disk shape of a prebuilt graph file: either a bare array of modules
/// or an object with a `modules` key, so generators can add metadata later.
#[derive(Deserialize)]
#[serde(untagged)]
enum GraphFile {
    Bare(Vec<Module>),
    Wrapped { modules: Vec<Module> },
}

/// Decode a module graph from its JSON encoding.
///
/// The graph is treated as a snapshot: module order is preserved as
/// written, imports are not deduplicated or resolved further.
pub fn load_json_graph(text: &str) -> anyhow::Result<Vec<Module>> {
    let parsed: GraphFile = serde_json::from_str(text).context("decode module graph JSON")?;
    Ok(match parsed {
        GraphFile::Bare(modules) => modules,
        GraphFile::Wrapped { modules } => modules,
    })
}
